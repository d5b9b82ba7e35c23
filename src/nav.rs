use raylib::prelude::*;

use crate::constants::NAV_HEIGHT;
use crate::layout::{approx_text_width, contains};
use crate::router::Route;

const ITEM_WIDTH: f32 = 96.0;
const ITEM_HEIGHT: f32 = 56.0;
const LABEL_SIZE: i32 = 12;

const BAR_COLOR: Color = Color::WHITE;
const BORDER_COLOR: Color = Color::new(229, 231, 235, 255);
const IDLE_INK: Color = Color::new(107, 114, 128, 255);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Bitcoin,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: NavIcon,
}

impl NavItem {
    /// Highlighted when its destination equals the current path exactly
    pub fn is_active(&self, current_path: &str) -> bool {
        self.href == current_path
    }

    pub fn route(&self) -> Option<Route> {
        Route::from_path(self.href)
    }
}

pub const NAV_ITEMS: [NavItem; 2] = [
    NavItem { label: "Bitcoin", href: "/", icon: NavIcon::Bitcoin },
    NavItem { label: "About", href: "/about", icon: NavIcon::Info },
];

/// Rectangle of each entry, spread evenly across the bar at the bottom of the viewport
pub fn item_rects(viewport: Vector2) -> [(NavItem, Rectangle); 2] {
    let bar_y = viewport.y - NAV_HEIGHT;
    let slot = viewport.x / NAV_ITEMS.len() as f32;
    let mut i = 0.0;
    NAV_ITEMS.map(|item| {
        let x = slot * i + (slot - ITEM_WIDTH) * 0.5;
        i += 1.0;
        (item, Rectangle::new(x, bar_y + (NAV_HEIGHT - ITEM_HEIGHT) * 0.5, ITEM_WIDTH, ITEM_HEIGHT))
    })
}

pub fn bar_rect(viewport: Vector2) -> Rectangle {
    Rectangle::new(0.0, viewport.y - NAV_HEIGHT, viewport.x, NAV_HEIGHT)
}

/// Route of the entry under `point`, if any
pub fn hit(viewport: Vector2, point: Vector2) -> Option<Route> {
    item_rects(viewport)
        .into_iter()
        .find(|(_, rect)| contains(rect, point))
        .and_then(|(item, _)| item.route())
}

pub fn draw(d: &mut RaylibDrawHandle, viewport: Vector2, current_path: &str) {
    let bar = bar_rect(viewport);
    d.draw_rectangle_rec(bar, BAR_COLOR);
    d.draw_line_ex(Vector2::new(0.0, bar.y), Vector2::new(bar.width, bar.y), 1.0, BORDER_COLOR);

    for (item, rect) in item_rects(viewport) {
        let active = item.is_active(current_path);
        let ink = if active { Color::WHITE } else { IDLE_INK };
        if active {
            d.draw_rectangle_rounded(rect, 0.25, 8, Color::BLACK);
        }

        let icon_center = Vector2::new(rect.x + rect.width * 0.5, rect.y + 20.0);
        draw_icon(d, item.icon, icon_center, ink);

        let label_x = rect.x + (rect.width - approx_text_width(item.label, LABEL_SIZE)) * 0.5;
        d.draw_text(item.label, label_x as i32, (rect.y + 38.0) as i32, LABEL_SIZE, ink);
    }
}

fn draw_icon(d: &mut RaylibDrawHandle, icon: NavIcon, center: Vector2, ink: Color) {
    let radius = 11.0;
    d.draw_circle_lines(center.x as i32, center.y as i32, radius, ink);
    let glyph = match icon {
        NavIcon::Bitcoin => "B",
        NavIcon::Info => "i",
    };
    let size = 14;
    let x = center.x - approx_text_width(glyph, size) * 0.5;
    d.draw_text(glyph, x as i32, (center.y - size as f32 * 0.5) as i32, size, ink);
}
