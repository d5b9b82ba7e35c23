use raylib::prelude::*;
use tracing::info;

use crate::card::{Card, Deck};
use crate::constants::*;
use crate::deck::depth::draw_depth_card;
use crate::deck::slide::draw_active_card;
use crate::deck::{DeckEvent, DeckInput, DeckSettings, Direction, SwipeDeck, SwipeState, TapZone};
use crate::frame::{FrameInput, KeyPress};
use crate::layout::{approx_text_width, contains, faded, CardSize, HomeLayout};
use crate::scroll_lock::ScrollLock;
use crate::texture_loader::TextureCache;

const TITLE: &str = "EL5 Bitcoin";
const TITLE_SIZE: i32 = 28;
const INK: Color = Color::new(17, 24, 39, 255);
const MUTED: Color = Color::new(107, 114, 128, 255);
const BUTTON_BORDER: Color = Color::new(209, 213, 219, 255);
const BUTTON_HOVER: Color = Color::new(249, 250, 251, 255);

/// Round controls under the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckButton {
    Previous,
    Reset,
    Next,
}

impl DeckButton {
    pub const ALL: [DeckButton; 3] = [DeckButton::Previous, DeckButton::Reset, DeckButton::Next];

    /// Accessible label, shown while hovered
    pub fn label(self) -> &'static str {
        match self {
            DeckButton::Previous => "Previous card",
            DeckButton::Reset => "Back to first card",
            DeckButton::Next => "Next card",
        }
    }

    pub fn input(self) -> DeckInput {
        match self {
            DeckButton::Previous => DeckInput::Swipe(Direction::Left),
            DeckButton::Reset => DeckInput::Reset,
            DeckButton::Next => DeckInput::Swipe(Direction::Right),
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            DeckButton::Previous => "<",
            DeckButton::Reset => "R",
            DeckButton::Next => ">",
        }
    }

    fn rect(self, layout: &HomeLayout) -> Rectangle {
        match self {
            DeckButton::Previous => layout.previous,
            DeckButton::Reset => layout.reset,
            DeckButton::Next => layout.next,
        }
    }
}

/// The "/" page: title, swipe deck and its buttons.
pub struct HomePage {
    deck: SwipeDeck,
    card_size: CardSize,
    show_buttons: bool,
    scroll: f32,
    hovered: Option<DeckButton>,
    scroll_lock: ScrollLock,
}

impl HomePage {
    pub fn new(
        deck: Deck,
        settings: DeckSettings,
        card_size: CardSize,
        show_buttons: bool,
        scroll_lock: ScrollLock,
    ) -> Self {
        Self {
            deck: SwipeDeck::new(deck, settings, scroll_lock.clone()),
            card_size,
            show_buttons,
            scroll: 0.0,
            hovered: None,
            scroll_lock,
        }
    }

    pub fn deck(&self) -> &SwipeDeck {
        &self.deck
    }

    pub fn scroll(&self) -> f32 {
        self.scroll
    }

    pub fn layout(&self, viewport: Vector2) -> HomeLayout {
        HomeLayout::compute(viewport, self.card_size, self.scroll)
    }

    fn button_at(&self, layout: &HomeLayout, point: Vector2) -> Option<DeckButton> {
        if !self.show_buttons {
            return None;
        }
        DeckButton::ALL
            .into_iter()
            .find(|button| contains(&button.rect(layout), point))
    }

    /// Feed one frame of input to the deck. Returns the cards to load now.
    pub fn update(&mut self, input: &FrameInput, dt: f32) -> Vec<Card> {
        self.deck.set_viewport_width(input.viewport.x);
        let layout = self.layout(input.viewport);

        for key in &input.keys {
            let deck_input = match key {
                KeyPress::Left => DeckInput::Swipe(Direction::Left),
                KeyPress::Right => DeckInput::Swipe(Direction::Right),
                KeyPress::Reset => DeckInput::Reset,
            };
            self.deck.handle(deck_input);
        }

        let pointer = input.pointer;
        if input.pressed {
            if let Some(button) = self.button_at(&layout, pointer) {
                self.deck.handle(button.input());
            } else if contains(&layout.card, pointer) {
                let fraction = (pointer.x - layout.card.x) / layout.card.width;
                self.deck.handle(DeckInput::PointerDown {
                    x: pointer.x,
                    time: input.time,
                    zone: TapZone::from_fraction(fraction),
                });
            }
        } else if input.down {
            self.deck.handle(DeckInput::PointerMove { x: pointer.x, time: input.time });
        }

        if input.released {
            self.deck.handle(DeckInput::PointerUp { x: pointer.x, time: input.time });
        } else if self.deck.state() == SwipeState::Dragging && (!input.focused || !input.down) {
            // Release lost outside the window, or focus moved away mid-drag
            self.deck.handle(DeckInput::PointerCancel);
        }

        self.deck.update(dt);

        if input.wheel != 0.0 && !self.scroll_lock.is_locked() {
            let max_scroll = layout.max_scroll(input.viewport);
            self.scroll = (self.scroll - input.wheel * WHEEL_STEP).clamp(0.0, max_scroll);
        }
        self.hovered = self.button_at(&self.layout(input.viewport), pointer);

        self.collect_prefetch()
    }

    fn collect_prefetch(&mut self) -> Vec<Card> {
        let mut wanted = Vec::new();
        for event in self.deck.drain_events() {
            match event {
                DeckEvent::Moved { from, to } => info!(from, to, "card changed"),
                DeckEvent::Prefetch(indices) => {
                    wanted = indices
                        .iter()
                        .filter_map(|&i| self.deck.deck().get(i).cloned())
                        .collect();
                }
            }
        }
        wanted
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, textures: &TextureCache, viewport: Vector2) {
        let layout = self.layout(viewport);

        let title_x = (viewport.x - approx_text_width(TITLE, TITLE_SIZE)) * 0.5;
        d.draw_text(TITLE, title_x as i32, layout.title_y as i32, TITLE_SIZE, INK);

        match self.deck.relevant_cards() {
            Some([active, upcoming1, upcoming2]) => {
                draw_depth_card(d, textures, upcoming2, 2, layout.card);
                draw_depth_card(d, textures, upcoming1, 1, layout.card);
                draw_active_card(d, textures, active, layout.card, &self.deck.transform());
            }
            None => {
                let text = "No cards to show";
                let x = layout.card.x + (layout.card.width - approx_text_width(text, 20)) * 0.5;
                let y = layout.card.y + layout.card.height * 0.5;
                d.draw_text(text, x as i32, y as i32, 20, MUTED);
            }
        }

        if self.show_buttons {
            for button in DeckButton::ALL {
                self.draw_button(d, button, button.rect(&layout));
            }
        }
    }

    fn draw_button(&self, d: &mut RaylibDrawHandle, button: DeckButton, rect: Rectangle) {
        let center = Vector2::new(rect.x + rect.width * 0.5, rect.y + rect.height * 0.5);
        let radius = rect.width * 0.5;
        let hovered = self.hovered == Some(button);

        d.draw_circle(center.x as i32, center.y as i32, radius, if hovered { BUTTON_HOVER } else { Color::WHITE });
        d.draw_circle_lines(center.x as i32, center.y as i32, radius, BUTTON_BORDER);

        let glyph = button.glyph();
        let glyph_x = center.x - approx_text_width(glyph, 20) * 0.5;
        d.draw_text(glyph, glyph_x as i32, (center.y - 10.0) as i32, 20, INK);

        if hovered {
            let label = button.label();
            let x = center.x - approx_text_width(label, 12) * 0.5;
            d.draw_text(label, x as i32, (rect.y + rect.height + 6.0) as i32, 12, faded(INK, 0.7));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn page(len: u32) -> (HomePage, ScrollLock) {
        let lock = ScrollLock::new();
        let cards = (0..len).map(|i| Card::new(i, format!("c{i}.png"), None)).collect();
        let page = HomePage::new(
            Deck::new(cards),
            DeckSettings::default(),
            CardSize { width: None, height: CARD_HEIGHT },
            true,
            lock.clone(),
        );
        (page, lock)
    }

    #[test]
    fn test_first_update_prefetches_three() {
        let (mut page, _) = page(10);
        let input = FrameInput::idle(0.0, Vector2::new(480.0, 860.0));
        let wanted: Vec<_> = page.update(&input, FRAME_TIME).iter().map(|c| c.id).collect();
        assert_eq!(wanted, vec![0, 1, 2]);
        assert!(page.update(&input, FRAME_TIME).is_empty());
    }

    #[test]
    fn test_button_labels() {
        assert_eq!(DeckButton::Previous.label(), "Previous card");
        assert_eq!(DeckButton::Next.label(), "Next card");
        assert_eq!(DeckButton::Previous.input(), DeckInput::Swipe(Direction::Left));
        assert_eq!(DeckButton::Reset.input(), DeckInput::Reset);
    }

    #[test]
    fn test_hidden_buttons_do_not_react() {
        let lock = ScrollLock::new();
        let mut page = HomePage::new(
            Deck::new(vec![Card::new(0, "a.png", None), Card::new(1, "b.png", None)]),
            DeckSettings::default(),
            CardSize { width: None, height: CARD_HEIGHT },
            false,
            lock,
        );
        let viewport = Vector2::new(480.0, 860.0);
        let next = page.layout(viewport).next;
        let mut input = FrameInput::idle(0.0, viewport);
        input.pointer = Vector2::new(next.x + 5.0, next.y + 5.0);
        input.pressed = true;
        input.down = true;
        page.update(&input, FRAME_TIME);
        assert_eq!(page.deck().state(), SwipeState::Idle);
    }
}
