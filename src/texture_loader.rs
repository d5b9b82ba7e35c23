use std::collections::HashMap;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use tracing::{debug, warn};

use crate::card::Card;
use crate::error::{Error, Result};

// --- Helper: Load and Sort Image Paths ---
pub fn load_sorted_image_paths(dir_path: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for entry in fs::read_dir(dir_path)? {
        let path = entry?.path();
        if path.is_file() {
            if let Some(ext) = path.extension().and_then(|s| s.to_str()) {
                if is_image_extension(ext) {
                    paths.push(path);
                }
            }
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    if paths.is_empty() {
        Err(Error::NoImages(dir_path.to_path_buf()))
    } else {
        Ok(paths)
    }
}

fn is_image_extension(ext: &str) -> bool {
    matches!(ext.to_lowercase().as_str(), "png" | "jpg" | "jpeg" | "bmp" | "gif")
}

/// EXIF orientation tag of a JPEG, 1 (no rotation) when absent or unreadable
pub fn exif_orientation(image_path: &Path, file_bytes: &[u8]) -> u32 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().map(|&v| v as u32),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            // Non-critical: proceed without rotation
            debug!(path = ?image_path, error = %e, "no EXIF data");
            1
        }
    }
}

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let image_error = |reason: String| Error::Image { path: image_path.to_path_buf(), reason };

    let file_bytes = fs::read(image_path)?;

    let extension = image_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    // EXIF is only read reliably from JPEG
    let orientation = if extension == "jpg" || extension == "jpeg" {
        exif_orientation(image_path, &file_bytes)
    } else {
        1
    };

    // Provide extension hint for loading from memory
    let mut image = Image::load_image_from_mem(&(".".to_string() + &extension), &file_bytes)
        .map_err(|e| image_error(e.to_string()))?;

    // 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW. Flipped orientations are ignored.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    if orientation != 1 {
        debug!(path = ?image_path, orientation, "applied EXIF rotation");
    }

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| image_error(e.to_string()))?;

    // Free the CPU copy now that the GPU has it
    drop(image);

    Ok(texture)
}

enum Slot {
    Ready(Texture2D),
    Broken,
}

/// What is available to draw for a card image.
pub enum TextureSlot<'a> {
    Ready(&'a Texture2D),
    /// Loading failed; draw the broken-image placeholder
    Broken,
    /// Not requested yet
    Missing,
}

/// Textures of the cards currently on screen, keyed by image path.
///
/// Failed loads are remembered as broken and never retried.
#[derive(Default)]
pub struct TextureCache {
    slots: HashMap<PathBuf, Slot>,
}

impl TextureCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the card's image unless it is already cached.
    pub fn prefetch(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, card: &Card) {
        if self.slots.contains_key(&card.image) {
            return;
        }

        let slot = match load_texture_with_exif_rotation(rl, thread, &card.image) {
            Ok(texture) => {
                debug!(id = card.id, path = ?card.image, "texture loaded");
                Slot::Ready(texture)
            }
            Err(e) => {
                warn!(id = card.id, error = %e, "image failed to load, showing placeholder");
                Slot::Broken
            }
        };
        self.slots.insert(card.image.clone(), slot);
    }

    /// Drop every texture not used by `cards`
    pub fn retain(&mut self, cards: &[Card]) {
        self.slots
            .retain(|path, _| cards.iter().any(|card| &card.image == path));
    }

    pub fn get(&self, path: &Path) -> TextureSlot<'_> {
        match self.slots.get(path) {
            Some(Slot::Ready(texture)) => TextureSlot::Ready(texture),
            Some(Slot::Broken) => TextureSlot::Broken,
            None => TextureSlot::Missing,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
