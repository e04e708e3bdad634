use std::io::{self, Write};

use log::{info, warn};
use rand::{rngs::StdRng, SeedableRng};
use termion::event::Key;

use crate::{
    presets::{self, RANDOM_KEY, SAVED_KEY},
    Board, Config, HashedWorld, Result, Snapshot, World,
};

pub use layout::Layout;
mod canvas;
mod layout;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCmd {
    Advance,
    Randomize,
    Preset(&'static str),
    LoadSaved,
    Save,
    Exit,
}

impl InputCmd {
    pub fn from_key(key: Key) -> Option<Self> {
        let command = match key {
            Key::Char('\n' | '\r') => InputCmd::Advance,
            Key::Char('s' | 'S') => InputCmd::Save,
            Key::Char('q' | 'Q') | Key::Ctrl('c') => InputCmd::Exit,
            Key::Char(SAVED_KEY) => InputCmd::LoadSaved,
            Key::Char(c) if c.eq_ignore_ascii_case(&RANDOM_KEY) => InputCmd::Randomize,
            Key::Char(c) => InputCmd::Preset(presets::by_key(c)?.name),
            _ => return None,
        };
        Some(command)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Owns the board and drives it from key presses.
pub struct View<W = HashedWorld>
where
    W: World,
{
    layout: Layout,
    board: Board<W>,
    config: Config,
    rng: StdRng,
    message: String,
}

impl<W> View<W>
where
    W: World,
{
    /// Starts on an empty board filling the layout.
    pub fn new(layout: Layout, config: Config) -> Result<Self> {
        let board = Board::new(layout.cols, layout.rows, config.topology)?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            layout,
            board,
            config,
            rng,
            message: String::new(),
        })
    }

    pub fn board(&self) -> &Board<W> {
        &self.board
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn handle(&mut self, command: InputCmd) -> Flow {
        self.message.clear();
        match command {
            InputCmd::Advance => self.board.step(),
            InputCmd::Randomize => self.board.randomize(&mut self.rng, self.config.density),
            InputCmd::Preset(name) => {
                let result = self.board.load_preset(name);
                self.report(result.map(|_| format!("loaded {name}")));
            }
            InputCmd::LoadSaved => {
                let result = self.load_saved();
                self.report(result);
            }
            InputCmd::Save => {
                let result = self.save();
                self.report(result);
            }
            InputCmd::Exit => {
                info!("exiting at generation {}", self.board.generation());
                return Flow::Exit;
            }
        }
        Flow::Continue
    }

    fn save(&self) -> Result<String> {
        let path = &self.config.save_path;
        Snapshot::from_board(&self.board).save(path)?;
        Ok(format!("saved to {}", path.display()))
    }

    /// The board is only replaced once the whole file is read and checked.
    fn load_saved(&mut self) -> Result<String> {
        let board = Snapshot::load(&self.config.save_path)?.into_board()?;
        if board.width() > self.layout.cols || board.height() > self.layout.rows {
            warn!(
                "saved {}x{} board is larger than the {}x{} view",
                board.width(),
                board.height(),
                self.layout.cols,
                self.layout.rows
            );
        }
        self.board = board;
        Ok(format!("loaded generation {}", self.board.generation()))
    }

    fn report(&mut self, result: Result<String>) {
        self.message = match result {
            Ok(message) => message,
            Err(err) => {
                warn!("{err}");
                format!("error: {err}")
            }
        };
    }

    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        self.layout.frame(&self.board, &self.message).display(out)
    }

    /// Blocks on `keys` until the exit key or the end of input, redrawing
    /// after each command.
    pub fn run(
        &mut self,
        keys: impl IntoIterator<Item = io::Result<Key>>,
        out: &mut impl Write,
    ) -> Result<()> {
        self.render(out)?;
        for key in keys {
            let Some(command) = InputCmd::from_key(key?) else {
                continue;
            };
            if self.handle(command) == Flow::Exit {
                break;
            }
            self.render(out)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::{pos, LifeError, Topology};

    use super::*;

    fn view(save_path: &Path) -> View {
        let config = Config {
            save_path: save_path.to_path_buf(),
            seed: Some(42),
            ..Config::default()
        };
        View::new(Layout::from_screen(40, 20).unwrap(), config).unwrap()
    }

    fn keys(chars: &str) -> Vec<io::Result<Key>> {
        chars.chars().map(|c| Ok(Key::Char(c))).collect()
    }

    #[test]
    fn key_mapping() {
        assert_eq!(InputCmd::from_key(Key::Char('\n')), Some(InputCmd::Advance));
        assert_eq!(InputCmd::from_key(Key::Char('\r')), Some(InputCmd::Advance));
        assert_eq!(InputCmd::from_key(Key::Char('R')), Some(InputCmd::Randomize));
        assert_eq!(InputCmd::from_key(Key::Char('S')), Some(InputCmd::Save));
        assert_eq!(InputCmd::from_key(Key::Char('q')), Some(InputCmd::Exit));
        assert_eq!(InputCmd::from_key(Key::Ctrl('c')), Some(InputCmd::Exit));
        assert_eq!(InputCmd::from_key(Key::Char('9')), Some(InputCmd::LoadSaved));
        assert_eq!(
            InputCmd::from_key(Key::Char('8')),
            Some(InputCmd::Preset("Glider"))
        );
        assert_eq!(InputCmd::from_key(Key::Char('x')), None);
        assert_eq!(InputCmd::from_key(Key::Up), None);
    }

    #[test]
    fn starts_empty_and_sized_to_the_layout() {
        let dir = tempfile::tempdir().unwrap();
        let view = view(&dir.path().join("s.json"));
        assert_eq!(view.board().population(), 0);
        assert_eq!((view.board().width(), view.board().height()), (24, 14));
    }

    #[test]
    fn advance_steps_the_board() {
        let dir = tempfile::tempdir().unwrap();
        let mut view = view(&dir.path().join("s.json"));
        view.handle(InputCmd::Preset("Blinker"));
        let start = view.board().actives();

        assert_eq!(view.handle(InputCmd::Advance), Flow::Continue);
        assert_eq!(view.board().generation(), 1);
        view.handle(InputCmd::Advance);
        assert_eq!(view.board().actives(), start);
    }

    #[test]
    fn unknown_preset_is_reported_and_board_kept() {
        let dir = tempfile::tempdir().unwrap();
        let mut view = view(&dir.path().join("s.json"));
        view.handle(InputCmd::Preset("Toad"));
        let before = view.board().actives();

        assert_eq!(view.handle(InputCmd::Preset("Gosper")), Flow::Continue);
        assert!(view.message().contains("configuration not found: Gosper"));
        assert_eq!(view.board().actives(), before);
    }

    #[test]
    fn save_then_load_saved() {
        let dir = tempfile::tempdir().unwrap();
        let mut view = view(&dir.path().join("s.json"));
        view.handle(InputCmd::Randomize);
        view.handle(InputCmd::Advance);
        let saved = view.board().actives();

        view.handle(InputCmd::Save);
        assert!(view.message().starts_with("saved to"));

        view.handle(InputCmd::Advance);
        view.handle(InputCmd::LoadSaved);
        assert_eq!(view.board().actives(), saved);
        assert_eq!(view.board().generation(), 1);
        assert_eq!(view.message(), "loaded generation 1");
    }

    #[test]
    fn load_without_save_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut view = view(&dir.path().join("s.json"));
        view.handle(InputCmd::Preset("Block"));

        view.handle(InputCmd::LoadSaved);
        assert_eq!(view.message(), "error: configuration not found: Saved");
        assert_eq!(view.board().population(), 4);
    }

    #[test]
    fn failed_save_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut view = view(&dir.path().join("missing/s.json"));
        assert_eq!(view.handle(InputCmd::Save), Flow::Continue);
        assert!(view.message().starts_with("error: io error"));
    }

    #[test]
    fn run_until_quit() {
        let dir = tempfile::tempdir().unwrap();
        let mut view = view(&dir.path().join("s.json"));
        let mut out = Vec::new();

        // glider, four steps, a stray key, quit, then keys that are never read
        view.run(keys("8\n\nx\n\nq\n\n"), &mut out).unwrap();

        assert_eq!(view.board().generation(), 4);
        assert_eq!(view.board().population(), 5);
        let frames = String::from_utf8(out).unwrap();
        assert_eq!(frames.matches("GAME OF LIFE").count(), 6);
    }

    #[test]
    fn run_stops_at_end_of_input() {
        let dir = tempfile::tempdir().unwrap();
        let mut view = view(&dir.path().join("s.json"));
        view.run(keys("5\n"), &mut Vec::new()).unwrap();
        assert_eq!(view.board().generation(), 1);
    }

    #[test]
    fn run_propagates_input_errors() {
        let dir = tempfile::tempdir().unwrap();
        let mut view = view(&dir.path().join("s.json"));
        let broken = vec![Err(io::Error::new(io::ErrorKind::Other, "tty gone"))];
        assert!(matches!(view.run(broken, &mut Vec::new()), Err(LifeError::Io(_))));
    }

    #[test]
    fn toroidal_config_reaches_the_board() {
        let config = Config {
            topology: Topology::Toroidal,
            ..Config::default()
        };
        let mut view: View = View::new(Layout::from_screen(20, 10).unwrap(), config).unwrap();
        assert_eq!(view.board().topology(), Topology::Toroidal);
        view.handle(InputCmd::Preset("Blinker"));
        assert_eq!(view.board().actives(), vec![pos!(0, 1), pos!(1, 1), pos!(2, 1)]);
    }
}
