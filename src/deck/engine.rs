use raylib::prelude::*;
use tracing::{debug, trace};

use crate::card::{Card, Deck};
use crate::config::{AppConfig, ExitMode, Travel, Variant};
use crate::constants::*;
use crate::cursor::{DeckCursor, Step};
use crate::deck::input::{DeckInput, Direction, TapZone};
use crate::deck::slide::CardTransform;
use crate::deck::state::SwipeState;
use crate::motion::{map_range, Spring, VelocityTracker};
use crate::scroll_lock::{ScrollLock, ScrollLockGuard};

/// Tunables of the swipe surface.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckSettings {
    pub swipe_threshold: f32,
    pub velocity_threshold: f32,
    pub exit: ExitMode,
    /// Seconds, used by [`ExitMode::Timer`]
    pub exit_delay: f32,
    pub travel: Travel,
    pub variant: Variant,
}

impl Default for DeckSettings {
    fn default() -> Self {
        Self {
            swipe_threshold: SWIPE_THRESHOLD,
            velocity_threshold: VELOCITY_THRESHOLD,
            exit: ExitMode::Spring,
            exit_delay: EXIT_DELAY_MS as f32 / 1000.0,
            travel: Travel::TwoWay,
            variant: Variant::Badges,
        }
    }
}

impl DeckSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            swipe_threshold: config.gesture.swipe_threshold,
            velocity_threshold: config.gesture.velocity_threshold,
            exit: config.gesture.exit,
            exit_delay: config.gesture.exit_delay_ms as f32 / 1000.0,
            travel: config.input.travel,
            variant: config.input.variant,
        }
    }
}

/// Things the page has to act on after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckEvent {
    /// Load these deck indices now: active card, then the two upcoming ones
    Prefetch([usize; 3]),
    Moved { from: usize, to: usize },
}

struct DragSession {
    // Held for the whole gesture; dropping the session gives the page its scroll back
    _lock: ScrollLockGuard,
    start_x: f32,
    start_offset: f32,
    start_time: f64,
    zone: TapZone,
    delta: f32,
    tracker: VelocityTracker,
}

struct ExitAnimation {
    step: Step,
    spring: Spring,
    tween_opacity: ease::Tween,
    tween_scale: ease::Tween,
    opacity: f32,
    scale: f32,
    animation_timer: f32,
}

impl ExitAnimation {
    fn new(step: Step, from: f32, to: f32, velocity: f32) -> Self {
        Self {
            step,
            spring: Spring::new(from, to, velocity),
            tween_opacity: ease::Tween::new(ease::cubic_out, 1.0, 0.0, EXIT_FADE_DURATION),
            tween_scale: ease::Tween::new(ease::cubic_out, 1.0, EXIT_SCALE, EXIT_FADE_DURATION),
            opacity: 1.0,
            scale: 1.0,
            animation_timer: 0.0,
        }
    }

    fn update(&mut self, dt: f32) -> f32 {
        self.animation_timer += dt;
        if self.animation_timer >= EXIT_FADE_DURATION {
            self.opacity = 0.0;
            self.scale = EXIT_SCALE;
        } else {
            self.opacity = self.tween_opacity.apply(dt).clamp(0.0, 1.0);
            self.scale = self.tween_scale.apply(dt);
        }
        self.spring.update(dt)
    }
}

/// The swipe surface: cursor, drag tracking and exit sequencing.
///
/// The cursor only moves once an exit animation has finished, so the card on
/// screen and the cursor never disagree. Tap-zone taps and reset are the
/// exception: they jump without animating.
pub struct SwipeDeck {
    deck: Deck,
    cursor: Option<DeckCursor>,
    settings: DeckSettings,
    scroll_lock: ScrollLock,
    viewport_width: f32,

    offset: f32,
    drag: Option<DragSession>,
    snap_back: Option<Spring>,
    exit: Option<ExitAnimation>,

    events: Vec<DeckEvent>,
}

impl SwipeDeck {
    pub fn new(deck: Deck, settings: DeckSettings, scroll_lock: ScrollLock) -> Self {
        let cursor = DeckCursor::new(deck.len());
        let mut events = Vec::new();
        if let Some(cursor) = &cursor {
            events.push(DeckEvent::Prefetch(cursor.relevant()));
        }

        Self {
            deck,
            cursor,
            settings,
            scroll_lock,
            viewport_width: WINDOW_WIDTH as f32,
            offset: 0.0,
            drag: None,
            snap_back: None,
            exit: None,
            events,
        }
    }

    pub fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = width.max(1.0);
    }

    pub fn state(&self) -> SwipeState {
        if self.exit.is_some() {
            SwipeState::Committing
        } else if self.drag.is_some() {
            SwipeState::Dragging
        } else {
            SwipeState::Idle
        }
    }

    /// Current index, `None` for an empty deck
    pub fn index(&self) -> Option<usize> {
        self.cursor.map(|c| c.index())
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn settings(&self) -> &DeckSettings {
        &self.settings
    }

    /// Horizontal offset of the active card
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Active card followed by the two upcoming ones
    pub fn relevant_cards(&self) -> Option<[&Card; 3]> {
        let cursor = self.cursor?;
        let [a, b, c] = cursor.relevant();
        Some([self.deck.get(a)?, self.deck.get(b)?, self.deck.get(c)?])
    }

    pub fn drain_events(&mut self) -> Vec<DeckEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn handle(&mut self, input: DeckInput) {
        match input {
            DeckInput::PointerDown { x, time, zone } => self.begin_drag(x, time, zone),
            DeckInput::PointerMove { x, time } => {
                if let Some(drag) = self.drag.as_mut() {
                    drag.delta = x - drag.start_x;
                    drag.tracker.push(time, x);
                    self.offset = constrain(drag.start_offset + drag.delta);
                    trace!(offset = drag.delta, "dragging");
                }
            }
            DeckInput::PointerUp { x, time } => {
                if let Some(mut drag) = self.drag.take() {
                    drag.delta = x - drag.start_x;
                    drag.tracker.push(time, x);
                    let velocity = drag.tracker.velocity();
                    let held = time - drag.start_time;
                    let (delta, zone) = (drag.delta, drag.zone);
                    drop(drag);
                    debug!(offset = delta, velocity, "drag ended");
                    self.release(delta, velocity, held, zone);
                }
            }
            DeckInput::PointerCancel => {
                if self.drag.take().is_some() {
                    debug!("drag cancelled");
                    self.start_snap_back(0.0);
                }
            }
            DeckInput::Swipe(direction) => {
                if self.state() == SwipeState::Idle {
                    self.commit(direction, 0.0);
                }
            }
            DeckInput::Reset => {
                if self.state() == SwipeState::Idle {
                    if let Some(cursor) = self.cursor.as_mut() {
                        let from = cursor.index();
                        cursor.reset();
                        self.snap_back = None;
                        self.offset = 0.0;
                        self.moved(from);
                    }
                }
            }
        }
    }

    /// Advance springs and timers by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if let Some(spring) = self.snap_back.as_mut() {
            self.offset = spring.update(dt);
            if spring.is_settled() {
                self.snap_back = None;
            }
        }

        let Some(exit) = self.exit.as_mut() else {
            return;
        };
        self.offset = exit.update(dt);

        let finished = match self.settings.exit {
            ExitMode::Spring => {
                exit.spring.is_settled() || self.offset.abs() >= self.viewport_width
            }
            ExitMode::Timer => exit.animation_timer >= self.settings.exit_delay,
        };
        if finished {
            let step = exit.step;
            self.exit = None;
            self.offset = 0.0;
            self.step_cursor(step);
        }
    }

    /// Visual state of the active card for this frame
    pub fn transform(&self) -> CardTransform {
        let (like_opacity, nope_opacity) = match self.settings.variant {
            Variant::Badges => (
                map_range(self.offset, LIKE_RANGE, (0.0, 1.0)),
                map_range(self.offset, NOPE_RANGE, (1.0, 0.0)),
            ),
            Variant::TapZones => (0.0, 0.0),
        };
        let (scale, opacity) = match (&self.exit, &self.drag) {
            (Some(exit), _) => (exit.scale, exit.opacity),
            (None, Some(_)) => (DRAG_SCALE, 1.0),
            (None, None) => (1.0, 1.0),
        };

        CardTransform {
            offset_x: self.offset,
            rotation: map_range(self.offset, ROTATION_RANGE, ROTATION_DEGREES),
            scale,
            opacity,
            like_opacity,
            nope_opacity,
        }
    }

    fn begin_drag(&mut self, x: f32, time: f64, zone: TapZone) {
        if self.state() != SwipeState::Idle || self.cursor.is_none() {
            return;
        }
        self.snap_back = None;

        let mut tracker = VelocityTracker::new();
        tracker.push(time, x);
        self.drag = Some(DragSession {
            _lock: self.scroll_lock.acquire(),
            start_x: x,
            start_offset: self.offset,
            start_time: time,
            zone,
            delta: 0.0,
            tracker,
        });
        debug!("drag started");
    }

    fn release(&mut self, delta: f32, velocity: f32, held: f64, zone: TapZone) {
        if self.settings.variant == Variant::TapZones
            && delta.abs() <= TAP_SLOP
            && held <= TAP_MAX_DURATION
        {
            self.offset = 0.0;
            if let Some(direction) = zone.direction() {
                debug!(?direction, "tap");
                self.step_cursor(direction.step(self.settings.travel));
            }
            return;
        }

        let swiped_far = delta.abs() > self.settings.swipe_threshold;
        let fast_enough = velocity.abs() > self.settings.velocity_threshold;
        let direction = Direction::from_sign(delta).or_else(|| Direction::from_sign(velocity));

        match direction {
            Some(direction) if swiped_far || fast_enough => self.commit(direction, velocity),
            _ => self.start_snap_back(velocity),
        }
    }

    fn start_snap_back(&mut self, velocity: f32) {
        let spring = Spring::new(self.offset, 0.0, velocity);
        self.offset = spring.position();
        self.snap_back = (!spring.is_settled()).then_some(spring);
    }

    fn commit(&mut self, direction: Direction, velocity: f32) {
        if self.cursor.is_none() {
            return;
        }
        self.snap_back = None;

        let target = direction.sign() * self.viewport_width * EXIT_DISTANCE_FACTOR;
        let step = direction.step(self.settings.travel);
        debug!(?direction, ?step, "commit");
        self.exit = Some(ExitAnimation::new(step, self.offset, target, velocity));
    }

    fn step_cursor(&mut self, step: Step) {
        if let Some(cursor) = self.cursor.as_mut() {
            let from = cursor.index();
            cursor.step(step);
            self.moved(from);
        }
    }

    fn moved(&mut self, from: usize) {
        if let Some(cursor) = self.cursor {
            self.events.push(DeckEvent::Moved { from, to: cursor.index() });
            self.events.push(DeckEvent::Prefetch(cursor.relevant()));
        }
    }
}

/// Drag constraint: free within ±DRAG_LIMIT, elastic past it
fn constrain(offset: f32) -> f32 {
    if offset > DRAG_LIMIT {
        DRAG_LIMIT + (offset - DRAG_LIMIT) * DRAG_ELASTIC
    } else if offset < -DRAG_LIMIT {
        -DRAG_LIMIT + (offset + DRAG_LIMIT) * DRAG_ELASTIC
    } else {
        offset
    }
}
