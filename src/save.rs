//! JSON snapshot of a board, written by `s` and read back by `9`.

use std::{
    fs::File,
    io::{BufReader, BufWriter, ErrorKind, Write},
    path::Path,
};

use log::info;
use serde::{Deserialize, Serialize};

use crate::{presets::SAVED_NAME, Board, LifeError, Pos, Result, Topology, World};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub width: u16,
    pub height: u16,
    pub generation: u64,
    #[serde(default)]
    pub topology: Topology,
    pub cells: Vec<Pos>,
}

impl Snapshot {
    pub const VERSION: u32 = 1;

    pub fn from_board<W: World>(board: &Board<W>) -> Self {
        Self {
            version: Self::VERSION,
            width: board.width(),
            height: board.height(),
            generation: board.generation(),
            topology: board.topology(),
            cells: board.actives(),
        }
    }

    pub fn into_board<W: World>(self) -> Result<Board<W>> {
        Board::from_parts(
            self.width,
            self.height,
            self.topology,
            self.generation,
            self.cells,
        )
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer(&mut writer, self)?;
        writer.flush()?;
        info!(
            "saved generation {} ({} cells) to {}",
            self.generation,
            self.cells.len(),
            path.display()
        );
        Ok(())
    }

    /// Reads a snapshot back. A missing file means nothing was saved yet.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => LifeError::ConfigNotFound(SAVED_NAME.to_string()),
            _ => err.into(),
        })?;
        let snapshot: Snapshot = serde_json::from_reader(BufReader::new(file))?;
        if snapshot.version != Self::VERSION {
            return Err(LifeError::VersionMismatch {
                expected: Self::VERSION,
                found: snapshot.version,
            });
        }
        info!("loaded generation {} from {}", snapshot.generation, path.display());
        Ok(snapshot)
    }
}
