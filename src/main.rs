//! MazeRunner: grid maze game with plain-text save files
//!
//! - Walk the maze with WASD, pick up items, use them from the inventory
//! - Reach the door before health runs out or hunger/thirst max out
//! - Save and load games as six-line text records

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod world;
mod save;
mod session;
mod rules;
mod timer;
mod config;
mod ui;
mod view;
mod app;

use macroquad::prelude::*;
use std::path::PathBuf;
use app::AppState;
use config::{Config, CONFIG_PATH};
use view::{Command, ScreenView, View, ViewEvent, ViewFrame};
use world::{create_starting_snapshot, load_game, GameSnapshot};

fn window_conf() -> Conf {
    Conf {
        window_title: format!("MazeRunner v{}", VERSION),
        window_width: 960,
        window_height: 720,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

/// Configured start file, or the built-in level when there is none or it fails to load
fn starting_snapshot(config: &Config) -> GameSnapshot {
    let path = match &config.start_file {
        Some(path) => path,
        None => return create_starting_snapshot(),
    };
    match load_game(path) {
        Ok(snapshot) => {
            log::info!("Starting from {}", path.display());
            snapshot
        }
        Err(e) => {
            log::error!("Could not start from {}: {}", path.display(), e);
            create_starting_snapshot()
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut config = Config::load_or_default(CONFIG_PATH);
    // First argument overrides the configured start file
    if let Some(arg) = std::env::args().nth(1) {
        config.start_file = Some(PathBuf::from(arg));
    }

    let start = starting_snapshot(&config);
    let mut app = AppState::new(start, config);
    let mut view = ScreenView::new();

    log::info!("=== MazeRunner v{} ===", VERSION);

    loop {
        app.update(get_frame_time() as f64);

        let snapshot = app.session.snapshot();
        let timer = app.timer.label();
        let frame = ViewFrame {
            snapshot: &snapshot,
            timer: &timer,
            status: app.status(),
        };
        let event = view.draw(&frame);

        let quit = match event {
            Some(ViewEvent::Key(key)) => {
                app.handle_key(key);
                false
            }
            Some(ViewEvent::InventoryClick(kind)) => {
                app.use_item(kind);
                false
            }
            Some(ViewEvent::Command(command)) => handle_command(command, &mut app),
            None => false,
        };
        if quit {
            log::info!("Exiting");
            break;
        }

        next_frame().await;
    }
}

/// Run a file or game command, returns true when the app should exit
fn handle_command(command: Command, app: &mut AppState) -> bool {
    match command {
        Command::Restart => app.restart(),
        Command::Quit => return app.request_quit(),
        #[cfg(not(target_arch = "wasm32"))]
        Command::Save => match prompt_save_path(&app.config) {
            Ok(Some(path)) => app.save_to(&path),
            Ok(None) => {}
            Err(e) => app.set_status(&format!("Save failed: {}", e)),
        },
        #[cfg(target_arch = "wasm32")]
        Command::Save => app.set_status("Save not available in browser"),
        #[cfg(not(target_arch = "wasm32"))]
        Command::Load => match prompt_load_path(&app.config) {
            Ok(Some(path)) => app.load_from(&path),
            Ok(None) => {}
            Err(e) => app.set_status(&format!("Load failed: {}", e)),
        },
        #[cfg(target_arch = "wasm32")]
        Command::Load => app.set_status("Open not available in browser"),
    }
    false
}

/// Ask for a save destination. A cancelled dialog gives `Ok(None)`.
#[cfg(not(target_arch = "wasm32"))]
fn prompt_save_path(config: &Config) -> std::io::Result<Option<PathBuf>> {
    std::fs::create_dir_all(&config.save_dir)?;
    let dialog = rfd::FileDialog::new()
        .add_filter("MazeRunner Save", &[config.save_extension.as_str()])
        .set_directory(&config.save_dir)
        .set_file_name(format!("game.{}", config.save_extension));
    Ok(dialog.save_file())
}

/// Ask for a save file to open. A cancelled dialog gives `Ok(None)`.
#[cfg(not(target_arch = "wasm32"))]
fn prompt_load_path(config: &Config) -> std::io::Result<Option<PathBuf>> {
    std::fs::create_dir_all(&config.save_dir)?;
    let dialog = rfd::FileDialog::new()
        .add_filter("MazeRunner Save", &[config.save_extension.as_str()])
        .set_directory(&config.save_dir);
    Ok(dialog.pick_file())
}
