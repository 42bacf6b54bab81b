mod config;
mod gui;

use config::Config;
use env_logger::Env;
use log::{info, warn};
use std::path::PathBuf;

fn main() -> iced::Result {
    env_logger::Builder::from_env(Env::default().filter_or("CHESS_LOG", "info")).init();

    let config_path = std::env::var_os("CHESS_CONFIG_PATH").map(PathBuf::from);
    let config = match Config::load(config_path.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            warn!("{err}; using the default configuration");
            Config::default()
        }
    };

    info!("opening a {}px board", config.board_size);
    gui::run(config)
}
