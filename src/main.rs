use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use raylib::prelude::*;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use swipe_deck::config::{Travel, Variant};
use swipe_deck::frame::FrameInput;
use swipe_deck::router::Route;
use swipe_deck::texture_loader::TextureCache;
use swipe_deck::{App, AppConfig, Deck};

/// Longest frame step fed to the animations (seconds)
const MAX_FRAME_STEP: f32 = 0.1;

const BACKGROUND: Color = Color::new(249, 250, 251, 255);

#[derive(Parser)]
#[command(name = "swipe-deck")]
#[command(author, version, about = "Browse a deck of images one swipe at a time")]
struct Cli {
    /// Directory of images to browse instead of the numbered deck
    card_dir: Option<PathBuf>,

    /// Configuration file (defaults to the platform config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Page to open: "/" or "/about"
    #[arg(long, default_value = "/")]
    route: Route,

    #[arg(long, value_enum)]
    variant: Option<Variant>,

    #[arg(long, value_enum)]
    travel: Option<Travel>,

    /// Log level when RUST_LOG is not set
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(dir) = cli.card_dir {
        config.deck.card_dir = Some(dir);
    }
    if let Some(variant) = cli.variant {
        config.input.variant = variant;
    }
    if let Some(travel) = cli.travel {
        config.input.travel = travel;
    }
    if let Some(level) = cli.log_level {
        config.general.log_level = level;
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // --- Card list ---
    let deck = match &config.deck.card_dir {
        Some(dir) => Deck::from_directory(dir).unwrap_or_else(|e| {
            error!(dir = ?dir, error = %e, "cannot load cards");
            Deck::default()
        }),
        None => Deck::numbered(&config.deck.assets_dir, config.deck.card_count),
    };
    info!(cards = deck.len(), "deck ready");

    let (mut rl, thread) = raylib::init()
        .size(config.window.width, config.window.height)
        .title(&config.window.title)
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(config.window.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut app = App::new(deck, &config, cli.route);
    // Declared after the window handle so textures are unloaded before it closes
    let mut textures = TextureCache::new();

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time().min(MAX_FRAME_STEP);

        // --- Update Logic ---
        let input = FrameInput::capture(&rl);
        app.update(&input, dt);

        let wanted = app.drain_prefetch();
        if !wanted.is_empty() {
            textures.retain(&wanted);
            for card in &wanted {
                textures.prefetch(&mut rl, &thread, card);
            }
        }

        rl.set_mouse_cursor(if app.scroll_locked() {
            MouseCursor::MOUSE_CURSOR_RESIZE_EW
        } else {
            MouseCursor::MOUSE_CURSOR_DEFAULT
        });

        // --- Render ---
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(BACKGROUND);
        app.draw(&mut d, &textures, input.viewport);
    }

    Ok(())
}
