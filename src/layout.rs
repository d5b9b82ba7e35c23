//! Page geometry. Everything here is plain arithmetic on the viewport size.

use raylib::prelude::*;

use crate::constants::*;

/// Smallest card height kept when the window is short; the page scrolls instead
const MIN_CARD_HEIGHT: f32 = 240.0;

pub fn contains(rect: &Rectangle, point: Vector2) -> bool {
    point.x >= rect.x
        && point.x <= rect.x + rect.width
        && point.y >= rect.y
        && point.y <= rect.y + rect.height
}

/// Rough width of `text` in raylib's default font
pub fn approx_text_width(text: &str, font_size: i32) -> f32 {
    text.chars().count() as f32 * font_size as f32 * 0.58
}

/// `color` with its alpha multiplied by `opacity`
pub fn faded(color: Color, opacity: f32) -> Color {
    let alpha = (color.a as f32 * opacity.clamp(0.0, 1.0)).round() as u8;
    Color::new(color.r, color.g, color.b, alpha)
}

/// Height available to page content above the navigation bar
pub fn page_height(viewport: Vector2) -> f32 {
    (viewport.y - NAV_HEIGHT).max(0.0)
}

/// Requested card size; `width: None` fills the page column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardSize {
    pub width: Option<f32>,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HomeLayout {
    pub title_y: f32,
    pub card: Rectangle,
    pub previous: Rectangle,
    pub reset: Rectangle,
    pub next: Rectangle,
    pub content_height: f32,
}

impl HomeLayout {
    pub fn compute(viewport: Vector2, size: CardSize, scroll: f32) -> Self {
        let column = viewport.x.min(CONTAINER_MAX_WIDTH);
        let card_width = size.width.map_or(column, |w| w.min(column));

        let buttons_height = BUTTON_ROW_OFFSET + BUTTON_SIZE + PAGE_PADDING;
        let available = page_height(viewport) - HEADER_HEIGHT - buttons_height;
        let card_height = size.height.min(available).max(MIN_CARD_HEIGHT.min(size.height));
        let slack = (available - card_height).max(0.0);

        let card = Rectangle::new(
            (viewport.x - card_width) * 0.5,
            HEADER_HEIGHT + slack * 0.5 - scroll,
            card_width,
            card_height,
        );

        let row_y = card.y + card.height + BUTTON_ROW_OFFSET;
        let row_width = BUTTON_SIZE * 3.0 + BUTTON_GAP * 2.0;
        let row_x = (viewport.x - row_width) * 0.5;
        let button = |i: f32| Rectangle::new(row_x + i * (BUTTON_SIZE + BUTTON_GAP), row_y, BUTTON_SIZE, BUTTON_SIZE);

        Self {
            title_y: PAGE_PADDING - scroll,
            card,
            previous: button(0.0),
            reset: button(1.0),
            next: button(2.0),
            content_height: HEADER_HEIGHT + card_height + slack + buttons_height,
        }
    }

    /// How far the page can scroll in this viewport
    pub fn max_scroll(&self, viewport: Vector2) -> f32 {
        (self.content_height - page_height(viewport)).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT_SIZE: CardSize = CardSize { width: None, height: CARD_HEIGHT };

    #[test]
    fn test_default_window_fits_without_scrolling() {
        let viewport = Vector2::new(480.0, 860.0);
        let layout = HomeLayout::compute(viewport, DEFAULT_SIZE, 0.0);
        assert_eq!(layout.card.width, CONTAINER_MAX_WIDTH);
        assert_eq!(layout.card.height, CARD_HEIGHT);
        assert_eq!(layout.card.x, 16.0);
        assert_eq!(layout.max_scroll(viewport), 0.0);
        assert!(layout.next.y + layout.next.height <= page_height(viewport));
    }

    #[test]
    fn test_short_window_shrinks_card_then_scrolls() {
        let viewport = Vector2::new(480.0, 400.0);
        let layout = HomeLayout::compute(viewport, DEFAULT_SIZE, 0.0);
        assert_eq!(layout.card.height, MIN_CARD_HEIGHT);
        assert!(layout.max_scroll(viewport) > 0.0);

        let scrolled = HomeLayout::compute(viewport, DEFAULT_SIZE, 50.0);
        assert_eq!(scrolled.card.y, layout.card.y - 50.0);
    }

    #[test]
    fn test_narrow_window_and_fixed_width() {
        let narrow = HomeLayout::compute(Vector2::new(300.0, 900.0), DEFAULT_SIZE, 0.0);
        assert_eq!(narrow.card.width, 300.0);

        let fixed = CardSize { width: Some(320.0), height: 500.0 };
        let layout = HomeLayout::compute(Vector2::new(1280.0, 900.0), fixed, 0.0);
        assert_eq!(layout.card.width, 320.0);
        assert_eq!(layout.card.height, 500.0);
        assert_eq!(layout.card.x, 480.0);
    }

    #[test]
    fn test_buttons_sit_below_card() {
        let layout = HomeLayout::compute(Vector2::new(480.0, 860.0), DEFAULT_SIZE, 0.0);
        let card_bottom = layout.card.y + layout.card.height;
        assert_eq!(layout.previous.y, card_bottom + BUTTON_ROW_OFFSET);
        assert!(layout.previous.x < layout.reset.x && layout.reset.x < layout.next.x);
        assert!(contains(&layout.next, Vector2::new(layout.next.x + 1.0, layout.next.y + 1.0)));
        assert!(!contains(&layout.card, Vector2::new(layout.next.x + 1.0, layout.next.y + 1.0)));
    }

    #[test]
    fn test_faded_scales_alpha() {
        let c = faded(Color::new(10, 20, 30, 200), 0.5);
        assert_eq!((c.r, c.g, c.b, c.a), (10, 20, 30, 100));
        assert_eq!(faded(Color::WHITE, 2.0).a, 255);
    }
}
