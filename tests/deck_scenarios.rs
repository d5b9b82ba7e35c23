use pretty_assertions::assert_eq;
use raylib::prelude::Vector2;
use rstest::*;

use swipe_deck::card::{Card, Deck};
use swipe_deck::config::{AppConfig, Travel};
use swipe_deck::constants::FRAME_TIME;
use swipe_deck::deck::{DeckInput, DeckSettings, Direction, SwipeDeck, SwipeState, TapZone};
use swipe_deck::frame::{FrameInput, KeyPress};
use swipe_deck::router::Route;
use swipe_deck::scroll_lock::ScrollLock;
use swipe_deck::App;

const VIEWPORT: Vector2 = Vector2 { x: 480.0, y: 860.0 };

fn deck_of(len: u32) -> Deck {
    Deck::new(
        (0..len)
            .map(|i| Card::new(i, format!("cards/card{i}.png"), Some(format!("Card {i}"))))
            .collect(),
    )
}

/// Drives an `App` one synthetic frame at a time.
struct Harness {
    app: App,
    time: f64,
}

impl Harness {
    fn new(len: u32, config: &AppConfig) -> Self {
        Self { app: App::new(deck_of(len), config, Route::Home), time: 0.0 }
    }

    fn frame(&mut self, edit: impl FnOnce(&mut FrameInput)) {
        self.time += FRAME_TIME as f64;
        let mut input = FrameInput::idle(self.time, VIEWPORT);
        edit(&mut input);
        self.app.update(&input, FRAME_TIME);
    }

    fn idle_until_settled(&mut self) {
        for _ in 0..300 {
            self.frame(|_| {});
            if self.state() == SwipeState::Idle {
                break;
            }
        }
        // let the snap-back spring finish too
        for _ in 0..120 {
            self.frame(|_| {});
        }
    }

    fn state(&self) -> SwipeState {
        self.app.home().map(|h| h.deck().state()).unwrap_or(SwipeState::Idle)
    }

    fn index(&self) -> Option<usize> {
        self.app.home().and_then(|h| h.deck().index())
    }

    fn active_id(&self) -> Option<u32> {
        self.app
            .home()
            .and_then(|h| h.deck().relevant_cards())
            .map(|[active, _, _]| active.id)
    }

    fn card_center(&self) -> Vector2 {
        let card = self.app.home().map(|h| h.layout(VIEWPORT).card).unwrap();
        Vector2::new(card.x + card.width * 0.5, card.y + card.height * 0.5)
    }

    /// Press on the card center, move by `dx` over `frames` frames, release.
    fn drag(&mut self, dx: f32, frames: usize) {
        let start = self.card_center();
        self.frame(|f| {
            f.pointer = start;
            f.pressed = true;
            f.down = true;
        });
        for i in 1..=frames {
            let x = start.x + dx * i as f32 / frames as f32;
            self.frame(|f| {
                f.pointer = Vector2::new(x, start.y);
                f.down = true;
            });
        }
        self.frame(|f| {
            f.pointer = Vector2::new(start.x + dx, start.y);
            f.released = true;
        });
    }

    fn press_key(&mut self, key: KeyPress) {
        self.frame(|f| f.keys.push(key));
    }
}

#[test]
fn test_right_arrow_ten_times_visits_every_card_in_order() {
    let mut h = Harness::new(10, &AppConfig::default());
    assert_eq!(h.active_id(), Some(0));

    let mut visited = Vec::new();
    for _ in 0..10 {
        h.press_key(KeyPress::Right);
        assert_eq!(h.state(), SwipeState::Committing);
        h.idle_until_settled();
        visited.push(h.active_id().unwrap());
    }

    assert_eq!(visited, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 0]);
    assert_eq!(h.index(), Some(0));
}

#[test]
fn test_drag_right_200_shows_like_and_advances() {
    let mut h = Harness::new(3, &AppConfig::default());
    let start = h.card_center();

    h.frame(|f| {
        f.pointer = start;
        f.pressed = true;
        f.down = true;
    });
    assert!(h.app.scroll_locked());
    h.frame(|f| {
        f.pointer = Vector2::new(start.x + 200.0, start.y);
        f.down = true;
    });
    let transform = h.app.home().unwrap().deck().transform();
    assert_eq!(transform.like_opacity, 1.0);
    assert_eq!(transform.nope_opacity, 0.0);

    h.frame(|f| {
        f.pointer = Vector2::new(start.x + 200.0, start.y);
        f.released = true;
    });
    assert!(!h.app.scroll_locked());
    assert_eq!(h.index(), Some(0));

    h.idle_until_settled();
    assert_eq!(h.index(), Some(1));
}

#[rstest]
#[case(100.0, 60)]
#[case(-100.0, 60)]
#[case(300.0, 60)]
#[case(-300.0, 60)]
#[case(60.0, 2)]
fn test_scroll_lock_released_for_every_outcome(#[case] dx: f32, #[case] frames: usize) {
    let mut h = Harness::new(5, &AppConfig::default());
    assert!(!h.app.scroll_locked());
    h.drag(dx, frames);
    assert!(!h.app.scroll_locked());
    h.idle_until_settled();
    assert!(!h.app.scroll_locked());
}

#[test]
fn test_focus_loss_cancels_drag() {
    let mut h = Harness::new(5, &AppConfig::default());
    let start = h.card_center();
    h.frame(|f| {
        f.pointer = start;
        f.pressed = true;
        f.down = true;
    });
    h.frame(|f| {
        f.pointer = Vector2::new(start.x + 250.0, start.y);
        f.down = true;
    });
    assert!(h.app.scroll_locked());

    h.frame(|f| {
        f.pointer = Vector2::new(start.x + 250.0, start.y);
        f.down = true;
        f.focused = false;
    });
    assert!(!h.app.scroll_locked());
    h.idle_until_settled();
    assert_eq!(h.index(), Some(0));
}

#[test]
fn test_lost_release_cancels_drag() {
    let mut h = Harness::new(5, &AppConfig::default());
    let start = h.card_center();
    h.frame(|f| {
        f.pointer = start;
        f.pressed = true;
        f.down = true;
    });
    // Button no longer held but no release was reported
    h.frame(|_| {});
    assert!(!h.app.scroll_locked());
    assert_eq!(h.state(), SwipeState::Idle);
}

#[test]
fn test_single_card_deck_never_errors() {
    let mut h = Harness::new(1, &AppConfig::default());
    h.press_key(KeyPress::Right);
    h.idle_until_settled();
    h.press_key(KeyPress::Left);
    h.idle_until_settled();
    h.drag(-300.0, 10);
    h.idle_until_settled();
    h.press_key(KeyPress::Reset);
    assert_eq!(h.index(), Some(0));
    assert_eq!(h.active_id(), Some(0));
}

#[test]
fn test_empty_deck_renders_nothing_and_ignores_input() {
    let mut h = Harness::new(0, &AppConfig::default());
    h.press_key(KeyPress::Right);
    h.drag(300.0, 5);
    h.idle_until_settled();
    assert_eq!(h.index(), None);
    assert!(!h.app.scroll_locked());
    assert!(h.app.drain_prefetch().is_empty());
}

#[test]
fn test_rapid_keys_during_exit_step_once() {
    let mut h = Harness::new(4, &AppConfig::default());
    for _ in 0..5 {
        h.press_key(KeyPress::Right);
    }
    h.idle_until_settled();
    assert_eq!(h.index(), Some(1));
}

#[rstest]
#[case(Travel::TwoWay, 3)]
#[case(Travel::OneWay, 1)]
fn test_left_arrow_follows_travel_policy(#[case] travel: Travel, #[case] expected: usize) {
    let mut config = AppConfig::default();
    config.input.travel = travel;
    let mut h = Harness::new(4, &config);
    h.press_key(KeyPress::Left);
    h.idle_until_settled();
    assert_eq!(h.index(), Some(expected));
}

#[test]
fn test_prefetch_follows_every_change() {
    let mut h = Harness::new(10, &AppConfig::default());
    h.frame(|_| {});
    let ids: Vec<_> = h.app.drain_prefetch().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![0, 1, 2]);

    h.press_key(KeyPress::Left);
    h.idle_until_settled();
    let ids: Vec<_> = h.app.drain_prefetch().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![9, 0, 1]);
}

#[test]
fn test_index_only_changes_after_exit_completes() {
    let lock = ScrollLock::new();
    let mut deck = SwipeDeck::new(deck_of(3), DeckSettings::default(), lock);
    deck.handle(DeckInput::PointerDown { x: 0.0, time: 0.0, zone: TapZone::Middle });
    deck.handle(DeckInput::PointerMove { x: 150.0, time: 0.5 });
    deck.handle(DeckInput::PointerUp { x: 150.0, time: 1.0 });

    let mut last_offset = deck.offset();
    while deck.state() == SwipeState::Committing {
        assert_eq!(deck.index(), Some(0));
        deck.update(FRAME_TIME);
        if deck.state() == SwipeState::Committing {
            // The card keeps leaving until the cursor moves
            assert!(deck.offset() >= last_offset - 1e-3);
            last_offset = deck.offset();
        }
    }
    assert_eq!(deck.index(), Some(1));
    assert_eq!(deck.offset(), 0.0);
    deck.handle(DeckInput::Swipe(Direction::Left));
    assert_eq!(deck.state(), SwipeState::Committing);
}
