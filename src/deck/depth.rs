use raylib::prelude::*;

use crate::card::Card;
use crate::deck::slide::draw_card_image;
use crate::texture_loader::TextureCache;

/// Placement of an upcoming card beneath the active one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthStyle {
    pub offset_y: f32,
    pub scale: f32,
    pub opacity: f32,
}

/// Style for depth rank 1 (right below the active card) or 2.
pub fn depth_style(rank: u8) -> DepthStyle {
    match rank {
        1 => DepthStyle { offset_y: 12.0, scale: 0.96, opacity: 0.8 },
        _ => DepthStyle { offset_y: 24.0, scale: 0.92, opacity: 0.6 },
    }
}

/// Draw `card` as a depth layer inside `surface`.
/// Depth layers are never hit-tested, so nothing here reads input.
pub fn draw_depth_card(
    d: &mut RaylibDrawHandle,
    textures: &TextureCache,
    card: &Card,
    rank: u8,
    surface: Rectangle,
) {
    let style = depth_style(rank);
    let width = surface.width * style.scale;
    let height = surface.height * style.scale;
    let rect = Rectangle::new(
        surface.x + (surface.width - width) * 0.5,
        surface.y + (surface.height - height) * 0.5 + style.offset_y,
        width,
        height,
    );
    draw_card_image(d, textures, card, rect, 0.0, style.opacity, false);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_depth_ranks() {
        assert_eq!(depth_style(1), DepthStyle { offset_y: 12.0, scale: 0.96, opacity: 0.8 });
        assert_eq!(depth_style(2), DepthStyle { offset_y: 24.0, scale: 0.92, opacity: 0.6 });
    }
}
