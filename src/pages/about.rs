use raylib::prelude::*;

use crate::constants::{PAGE_PADDING, WHEEL_STEP};
use crate::frame::FrameInput;
use crate::layout::{approx_text_width, page_height};

const HEADING: &str = "EL5 BTC Cards";
const TAGLINE: &str = "A Tinder-style card browsing experience";

const INK: Color = Color::new(17, 24, 39, 255);
const MUTED: Color = Color::new(75, 85, 99, 255);
const PANEL: Color = Color::WHITE;
const PANEL_BORDER: Color = Color::new(243, 244, 246, 255);

const HEADER_HEIGHT: f32 = 150.0;
const HEADING_SIZE: i32 = 20;
const LINE_SIZE: i32 = 14;
const LINE_HEIGHT: f32 = 20.0;
const SECTION_PADDING: f32 = 16.0;
const SECTION_GAP: f32 = 16.0;

struct Section {
    title: &'static str,
    lines: &'static [&'static str],
}

const SECTIONS: &[Section] = &[
    Section {
        title: "About This App",
        lines: &[
            "A card browsing app with a swipeable,",
            "Tinder-style interface. Browse a collection",
            "of cards with smooth animations and",
            "simple controls.",
            "",
            "Works with the mouse, the keyboard",
            "and the buttons under the card.",
        ],
    },
    Section {
        title: "Features",
        lines: &[
            "Touch Gestures",
            "  Swipe left or right to browse cards",
            "Keyboard Navigation",
            "  Use the left and right arrow keys",
            "Loop Navigation",
            "  Cards loop back to the beginning",
        ],
    },
    Section {
        title: "Built With",
        lines: &["Rust", "raylib", "Springs and eased tweens for motion"],
    },
    Section {
        title: "How to Use",
        lines: &[
            "Drag: swipe cards left or right",
            "Keyboard: arrow keys, R to reset",
            "Buttons: previous, reset, next",
        ],
    },
];

/// The "/about" page: static text, scrollable with the mouse wheel.
#[derive(Debug, Clone, Default)]
pub struct AboutPage {
    scroll: f32,
}

impl AboutPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    pub fn content_height() -> f32 {
        let sections: f32 = SECTIONS.iter().map(section_height).sum();
        HEADER_HEIGHT + sections + SECTION_GAP * SECTIONS.len() as f32 + PAGE_PADDING
    }

    pub fn max_scroll(viewport: Vector2) -> f32 {
        (Self::content_height() - page_height(viewport)).max(0.0)
    }

    pub fn update(&mut self, input: &FrameInput) {
        if input.wheel != 0.0 {
            self.scroll = (self.scroll - input.wheel * WHEEL_STEP).clamp(0.0, Self::max_scroll(input.viewport));
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, viewport: Vector2) {
        let top = PAGE_PADDING - self.scroll;
        let center_x = viewport.x * 0.5;

        // Badge
        d.draw_circle(center_x as i32, (top + 40.0) as i32, 32.0, Color::BLACK);
        let glyph_x = center_x - approx_text_width("B", 32) * 0.5;
        d.draw_text("B", glyph_x as i32, (top + 24.0) as i32, 32, Color::WHITE);

        let heading_x = center_x - approx_text_width(HEADING, 28) * 0.5;
        d.draw_text(HEADING, heading_x as i32, (top + 84.0) as i32, 28, INK);
        let tagline_x = center_x - approx_text_width(TAGLINE, 16) * 0.5;
        d.draw_text(TAGLINE, tagline_x as i32, (top + 118.0) as i32, 16, MUTED);

        let panel_width = (viewport.x - PAGE_PADDING * 2.0).min(640.0);
        let panel_x = (viewport.x - panel_width) * 0.5;
        let mut y = top + HEADER_HEIGHT;

        for section in SECTIONS {
            let height = section_height(section);
            let panel = Rectangle::new(panel_x, y, panel_width, height);
            d.draw_rectangle_rec(panel, PANEL);
            d.draw_rectangle_lines_ex(panel, 1.0, PANEL_BORDER);

            let text_x = (panel_x + SECTION_PADDING) as i32;
            let mut line_y = y + SECTION_PADDING;
            d.draw_text(section.title, text_x, line_y as i32, HEADING_SIZE, INK);
            line_y += HEADING_SIZE as f32 + 12.0;

            for line in section.lines {
                d.draw_text(line, text_x, line_y as i32, LINE_SIZE, MUTED);
                line_y += LINE_HEIGHT;
            }
            y += height + SECTION_GAP;
        }
    }
}

fn section_height(section: &Section) -> f32 {
    SECTION_PADDING * 2.0 + HEADING_SIZE as f32 + 12.0 + section.lines.len() as f32 * LINE_HEIGHT
}
