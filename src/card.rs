use std::path::{Path, PathBuf};

use crate::texture_loader::load_sorted_image_paths;

/// One image of the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: u32,
    pub image: PathBuf,
    pub title: Option<String>,
}

impl Card {
    pub fn new(id: u32, image: impl Into<PathBuf>, title: Option<String>) -> Self {
        Self {
            id,
            image: image.into(),
            title,
        }
    }

    /// Text shown in place of the image when it cannot be displayed
    pub fn alt(&self) -> &str {
        self.title.as_deref().unwrap_or("card")
    }
}

/// Fixed ordered list of cards. Only ever indexed, never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// `count` cards with ids `1..=count` pointing at `<assets_dir>/cards/card{i}.png`
    pub fn numbered(assets_dir: &Path, count: u32) -> Self {
        let cards = (0..count)
            .map(|i| {
                Card::new(
                    i + 1,
                    assets_dir.join("cards").join(format!("card{i}.png")),
                    Some(format!("Card {i}")),
                )
            })
            .collect();
        Self { cards }
    }

    /// Every image file of `dir`, sorted by file name, titled by file stem
    pub fn from_directory(dir: &Path) -> crate::Result<Self> {
        let cards = load_sorted_image_paths(dir)?
            .into_iter()
            .enumerate()
            .map(|(i, path)| {
                let title = path
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned());
                Card::new(i as u32, path, title)
            })
            .collect();
        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
