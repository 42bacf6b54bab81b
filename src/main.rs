use env_logger::Env;

pub mod tui;

fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().filter_or("CHESS_LOG", "warn")).init();
    tui::run()
}
