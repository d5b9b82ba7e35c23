use crate::config::Travel;
use crate::cursor::Step;

/// Horizontal direction of a swipe, button or key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Direction of a signed offset or velocity; `None` for zero
    pub fn from_sign(value: f32) -> Option<Self> {
        if value > 0.0 {
            Some(Self::Right)
        } else if value < 0.0 {
            Some(Self::Left)
        } else {
            None
        }
    }

    pub fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }

    /// Cursor step this direction asks for under the travel policy
    pub fn step(self, travel: Travel) -> Step {
        match (self, travel) {
            (Self::Right, _) => Step::Forward,
            (Self::Left, Travel::TwoWay) => Step::Back,
            (Self::Left, Travel::OneWay) => Step::Forward,
        }
    }
}

/// Third of the card surface a press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapZone {
    Left,
    Middle,
    Right,
}

impl TapZone {
    /// Zone for a position given as a fraction of the card width
    pub fn from_fraction(fraction: f32) -> Self {
        if fraction < 1.0 / 3.0 {
            Self::Left
        } else if fraction > 2.0 / 3.0 {
            Self::Right
        } else {
            Self::Middle
        }
    }

    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::Left => Some(Direction::Left),
            Self::Middle => None,
            Self::Right => Some(Direction::Right),
        }
    }
}

/// Input the deck reacts to. Pointer times are in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeckInput {
    PointerDown { x: f32, time: f64, zone: TapZone },
    PointerMove { x: f32, time: f64 },
    PointerUp { x: f32, time: f64 },
    PointerCancel,
    /// Arrow key, previous / next button
    Swipe(Direction),
    Reset,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case(0.0, TapZone::Left)]
    #[case(0.3, TapZone::Left)]
    #[case(0.5, TapZone::Middle)]
    #[case(0.7, TapZone::Right)]
    #[case(1.0, TapZone::Right)]
    fn test_tap_zone_thirds(#[case] fraction: f32, #[case] zone: TapZone) {
        assert_eq!(TapZone::from_fraction(fraction), zone);
    }

    #[rstest]
    #[case(Direction::Right, Travel::TwoWay, Step::Forward)]
    #[case(Direction::Left, Travel::TwoWay, Step::Back)]
    #[case(Direction::Right, Travel::OneWay, Step::Forward)]
    #[case(Direction::Left, Travel::OneWay, Step::Forward)]
    fn test_travel_policy(#[case] direction: Direction, #[case] travel: Travel, #[case] step: Step) {
        assert_eq!(direction.step(travel), step);
    }

    #[test]
    fn test_zero_has_no_direction() {
        assert_eq!(Direction::from_sign(0.0), None);
        assert_eq!(Direction::from_sign(-0.1), Some(Direction::Left));
    }
}
