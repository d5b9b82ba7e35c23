pub mod depth;
pub mod engine;
pub mod input;
pub mod slide;
pub mod state;

pub use engine::{DeckEvent, DeckSettings, SwipeDeck};
pub use input::{DeckInput, Direction, TapZone};
pub use slide::CardTransform;
pub use state::SwipeState;
