use std::{
    env::args,
    fs::File,
    io::{stdin, stdout, Write},
    process::exit,
};

use env_logger::{Env, Target};
use log::{error, info, LevelFilter};
use termion::{cursor, input::TermRead, raw::IntoRawMode, screen::AlternateScreen};

pub use utils::Pos;
mod utils;

pub use world::{Cell, HashedWorld, World};
pub mod world;

pub use board::{Board, Topology};
mod board;

pub use presets::Preset;
pub mod presets;

pub use save::Snapshot;
mod save;

pub use error::{LifeError, Result};
mod error;

pub use config::Config;
mod config;

pub use view::{Layout, View};
mod view;

/// The terminal is in raw mode while running, so records go to a file.
fn init_logging(config: &Config) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    match File::create(&config.log_path) {
        Ok(file) => builder.target(Target::Pipe(Box::new(file))),
        Err(_) => builder.filter_level(LevelFilter::Off),
    };
    builder.init();
}

fn run(config: Config) -> Result<()> {
    let (width, height) = termion::terminal_size()?;
    let layout = Layout::from_screen(width, height)?;
    info!("{width}x{height} terminal, {}x{} board", layout.cols, layout.rows);
    let mut view: View = View::new(layout, config)?;

    let mut screen = AlternateScreen::from(stdout().into_raw_mode()?);
    write!(screen, "{}", cursor::Hide)?;
    let result = view.run(stdin().keys(), &mut screen);
    write!(screen, "{}", cursor::Show)?;
    screen.flush()?;
    result
}

pub fn main() {
    let config = Config::from_args(args());
    init_logging(&config);

    if let Err(err) = run(config) {
        error!("{err}");
        eprintln!("[error] {err}");
        exit(1);
    }
}
