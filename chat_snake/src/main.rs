// main.rs - Snake steered by chat messages
// Opens the chat session first; the window only appears once it is ready.

use std::time::Instant;

use anyhow::{Context, Result};
use eframe::egui;
use snake_state::{Game, SURFACE_SIZE};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod bridge;  // Chat channel -> game inbox
mod config;  // botToken and channel id
mod ui;      // eframe::App impl and drawing

use config::Config;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(err) = run() {
        error!("{err:#}");
        std::process::exit(1);
    }

    info!("Exiting");
}

fn run() -> Result<()> {
    let config = Config::load().context("failed to load configuration")?;
    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;

    let (outbox, inbox) = snake_state::channel();
    let chat = runtime.block_on(bridge::open(&config, outbox))?;
    info!(channel_id = config.channel_id, "Bot is running");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([SURFACE_SIZE as f32, SURFACE_SIZE as f32])
            .with_resizable(false),
        ..Default::default()
    };

    let game = Game::new(inbox);
    let result = eframe::run_native(
        "Snake Game",
        options,
        Box::new(move |_cc| Box::new(SnakeApp::new(game))),
    );

    runtime.block_on(chat.close());
    result.map_err(|err| anyhow::anyhow!("window failed: {err}"))
}

/// Owns the game and the frame clock used to feed it elapsed time.
pub struct SnakeApp {
    game: Game,
    last_update: Instant,
}

impl SnakeApp {
    pub fn new(game: Game) -> Self {
        Self {
            game,
            last_update: Instant::now(),
        }
    }
}
