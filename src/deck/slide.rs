use raylib::prelude::*;

use crate::card::Card;
use crate::layout::{approx_text_width, faded};
use crate::texture_loader::{TextureCache, TextureSlot};

const BADGE_FONT_SIZE: i32 = 22;
const BADGE_INSET: f32 = 24.0;
const BADGE_PADDING: f32 = 12.0;

const LIKE_COLOR: Color = Color::new(34, 197, 94, 255);
const NOPE_COLOR: Color = Color::new(239, 68, 68, 255);
const PLACEHOLDER_COLOR: Color = Color::new(229, 231, 235, 255);
const PLACEHOLDER_INK: Color = Color::new(107, 114, 128, 255);
const SHADOW_COLOR: Color = Color::new(0, 0, 0, 40);

/// Visual state of the active card for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    pub offset_x: f32,
    /// Degrees, clockwise
    pub rotation: f32,
    pub scale: f32,
    pub opacity: f32,
    pub like_opacity: f32,
    pub nope_opacity: f32,
}

impl Default for CardTransform {
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            rotation: 0.0,
            scale: 1.0,
            opacity: 1.0,
            like_opacity: 0.0,
            nope_opacity: 0.0,
        }
    }
}

/// Source rectangle that crops a texture to fill `dest_width` x `dest_height`
/// without distortion (centered "cover" crop).
pub fn cover_source(tex_width: f32, tex_height: f32, dest_width: f32, dest_height: f32) -> Rectangle {
    if tex_width <= 0.0 || tex_height <= 0.0 || dest_width <= 0.0 || dest_height <= 0.0 {
        return Rectangle::new(0.0, 0.0, tex_width.max(0.0), tex_height.max(0.0));
    }
    let scale = (dest_width / tex_width).max(dest_height / tex_height);
    let src_width = dest_width / scale;
    let src_height = dest_height / scale;
    Rectangle::new(
        (tex_width - src_width) * 0.5,
        (tex_height - src_height) * 0.5,
        src_width,
        src_height,
    )
}

/// Draw the active card inside `surface` with its drag / exit transform applied.
pub fn draw_active_card(
    d: &mut RaylibDrawHandle,
    textures: &TextureCache,
    card: &Card,
    surface: Rectangle,
    transform: &CardTransform,
) {
    let width = surface.width * transform.scale;
    let height = surface.height * transform.scale;
    let rect = Rectangle::new(
        surface.x + (surface.width - width) * 0.5 + transform.offset_x,
        surface.y + (surface.height - height) * 0.5,
        width,
        height,
    );

    draw_card_image(d, textures, card, rect, transform.rotation, transform.opacity, true);

    if transform.nope_opacity > 0.0 {
        let at = Vector2::new(rect.x + BADGE_INSET, rect.y + BADGE_INSET);
        draw_badge(d, "NOPE", at, NOPE_COLOR, transform.nope_opacity * transform.opacity);
    }
    if transform.like_opacity > 0.0 {
        let text_width = approx_text_width("LIKE", BADGE_FONT_SIZE);
        let badge_width = text_width + BADGE_PADDING * 2.0;
        let at = Vector2::new(rect.x + rect.width - BADGE_INSET - badge_width, rect.y + BADGE_INSET);
        draw_badge(d, "LIKE", at, LIKE_COLOR, transform.like_opacity * transform.opacity);
    }
}

/// Draw `card` cover-cropped into `rect`, rotated about its center.
/// Falls back to a placeholder while the texture is missing or broken.
pub fn draw_card_image(
    d: &mut RaylibDrawHandle,
    textures: &TextureCache,
    card: &Card,
    rect: Rectangle,
    rotation: f32,
    opacity: f32,
    shadow: bool,
) {
    let origin = Vector2::new(rect.width * 0.5, rect.height * 0.5);
    // Rotation happens around the origin, so the destination is given by its center
    let dest = Rectangle::new(rect.x + origin.x, rect.y + origin.y, rect.width, rect.height);

    if shadow {
        let shadow_dest = Rectangle::new(dest.x, dest.y + 6.0, dest.width, dest.height);
        d.draw_rectangle_pro(shadow_dest, origin, rotation, faded(SHADOW_COLOR, opacity));
    }

    match textures.get(&card.image) {
        TextureSlot::Ready(texture) => {
            let source = cover_source(
                texture.width() as f32,
                texture.height() as f32,
                rect.width,
                rect.height,
            );
            d.draw_texture_pro(texture, source, dest, origin, rotation, faded(Color::WHITE, opacity));
        }
        TextureSlot::Missing => {
            d.draw_rectangle_pro(dest, origin, rotation, faded(PLACEHOLDER_COLOR, opacity));
        }
        TextureSlot::Broken => {
            d.draw_rectangle_pro(dest, origin, rotation, faded(PLACEHOLDER_COLOR, opacity));
            draw_broken_marker(d, card, rect, rotation, opacity);
        }
    }
}

fn draw_broken_marker(d: &mut RaylibDrawHandle, card: &Card, rect: Rectangle, rotation: f32, opacity: f32) {
    let center = Vector2::new(rect.x + rect.width * 0.5, rect.y + rect.height * 0.5);
    let half = 28.0;
    let corners = [
        Vector2::new(center.x - half, center.y - half),
        Vector2::new(center.x + half, center.y - half),
        Vector2::new(center.x + half, center.y + half),
        Vector2::new(center.x - half, center.y + half),
    ]
    .map(|p| rotate_about(p, center, rotation));

    let ink = faded(PLACEHOLDER_INK, opacity);
    for i in 0..4 {
        d.draw_line_ex(corners[i], corners[(i + 1) % 4], 3.0, ink);
    }
    d.draw_line_ex(corners[0], corners[2], 3.0, ink);
    d.draw_line_ex(corners[1], corners[3], 3.0, ink);

    let alt = card.alt();
    let font_size = 20;
    let text_x = center.x - approx_text_width(alt, font_size) * 0.5;
    d.draw_text(alt, text_x as i32, (center.y + half + 16.0) as i32, font_size, ink);
}

fn draw_badge(d: &mut RaylibDrawHandle, text: &str, at: Vector2, color: Color, opacity: f32) {
    let width = approx_text_width(text, BADGE_FONT_SIZE) + BADGE_PADDING * 2.0;
    let height = BADGE_FONT_SIZE as f32 + BADGE_PADDING;
    let rect = Rectangle::new(at.x, at.y, width, height);

    d.draw_rectangle_rec(rect, faded(Color::new(255, 255, 255, 230), opacity));
    d.draw_rectangle_lines_ex(rect, 2.0, faded(color, opacity));
    d.draw_text(
        text,
        (at.x + BADGE_PADDING) as i32,
        (at.y + BADGE_PADDING * 0.5) as i32,
        BADGE_FONT_SIZE,
        faded(color, opacity),
    );
}

/// Rotate `point` around `center` by `degrees` clockwise (screen coordinates)
pub fn rotate_about(point: Vector2, center: Vector2, degrees: f32) -> Vector2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    Vector2::new(center.x + dx * cos - dy * sin, center.y + dx * sin + dy * cos)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_cover_crops_wide_texture() {
        let src = cover_source(2000.0, 1000.0, 400.0, 400.0);
        assert!(close(src.width, 1000.0));
        assert!(close(src.height, 1000.0));
        assert!(close(src.x, 500.0));
        assert!(close(src.y, 0.0));
    }

    #[test]
    fn test_cover_crops_tall_texture() {
        let src = cover_source(600.0, 1200.0, 448.0, 600.0);
        // Width is the limiting side
        assert!(close(src.width, 600.0));
        assert!(close(src.height, 600.0 * 600.0 / 448.0));
        assert!(close(src.x, 0.0));
    }

    #[test]
    fn test_rotate_quarter_turn() {
        let center = Vector2::new(0.0, 0.0);
        let p = rotate_about(Vector2::new(10.0, 0.0), center, 90.0);
        assert!(close(p.x, 0.0));
        assert!(close(p.y, 10.0));
    }
}
