pub mod app;
pub mod card;
pub mod config;
pub mod constants;
pub mod cursor;
pub mod deck;
pub mod error;
pub mod frame;
pub mod layout;
pub mod motion;
pub mod nav;
pub mod pages;
pub mod router;
pub mod scroll_lock;
pub mod texture_loader;

pub use app::App;
pub use card::{Card, Deck};
pub use config::AppConfig;
pub use error::{Error, Result};
