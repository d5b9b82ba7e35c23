use raylib::prelude::*;
use tracing::info;

use crate::card::{Card, Deck};
use crate::config::AppConfig;
use crate::deck::DeckSettings;
use crate::frame::FrameInput;
use crate::layout::CardSize;
use crate::nav;
use crate::pages::{AboutPage, HomePage};
use crate::router::Route;
use crate::scroll_lock::ScrollLock;
use crate::texture_loader::TextureCache;

/// The page currently mounted. Leaving a page drops it, and with it any
/// drag in progress and the deck position.
pub enum Page {
    Home(HomePage),
    About(AboutPage),
}

pub struct App {
    route: Route,
    page: Page,
    deck: Deck,
    settings: DeckSettings,
    card_size: CardSize,
    show_buttons: bool,
    scroll_lock: ScrollLock,
    prefetch: Vec<Card>,
}

impl App {
    pub fn new(deck: Deck, config: &AppConfig, route: Route) -> Self {
        let settings = DeckSettings::from_config(config);
        let card_size = CardSize {
            width: config.deck.card_width,
            height: config.deck.card_height,
        };
        let scroll_lock = ScrollLock::new();
        let page = mount(route, &deck, &settings, card_size, config.input.show_buttons, &scroll_lock);

        Self {
            route,
            page,
            deck,
            settings,
            card_size,
            show_buttons: config.input.show_buttons,
            scroll_lock,
            prefetch: Vec::new(),
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// The home page, when it is mounted
    pub fn home(&self) -> Option<&HomePage> {
        match &self.page {
            Page::Home(home) => Some(home),
            Page::About(_) => None,
        }
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_lock.is_locked()
    }

    pub fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        info!(from = self.route.path(), to = route.path(), "navigate");
        self.route = route;
        // Replacing the page drops the old one before the new one is used
        self.page = mount(
            route,
            &self.deck,
            &self.settings,
            self.card_size,
            self.show_buttons,
            &self.scroll_lock,
        );
        self.prefetch.clear();
    }

    pub fn update(&mut self, input: &FrameInput, dt: f32) {
        if input.pressed && !self.scroll_lock.is_locked() {
            if let Some(route) = nav::hit(input.viewport, input.pointer) {
                self.navigate(route);
                return;
            }
        }

        match &mut self.page {
            Page::Home(home) => {
                let wanted = home.update(input, dt);
                if !wanted.is_empty() {
                    self.prefetch = wanted;
                }
            }
            Page::About(about) => about.update(input),
        }
    }

    /// Cards whose textures should be loaded now; empty when nothing changed
    pub fn drain_prefetch(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.prefetch)
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, textures: &TextureCache, viewport: Vector2) {
        match &self.page {
            Page::Home(home) => home.draw(d, textures, viewport),
            Page::About(about) => about.draw(d, viewport),
        }
        nav::draw(d, viewport, self.route.path());
    }
}

fn mount(
    route: Route,
    deck: &Deck,
    settings: &DeckSettings,
    card_size: CardSize,
    show_buttons: bool,
    scroll_lock: &ScrollLock,
) -> Page {
    match route {
        Route::Home => Page::Home(HomePage::new(
            deck.clone(),
            settings.clone(),
            card_size,
            show_buttons,
            scroll_lock.clone(),
        )),
        Route::About => Page::About(AboutPage::new()),
    }
}
