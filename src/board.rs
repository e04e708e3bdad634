use std::collections::HashMap;

use log::{debug, info, warn};
use metrohash::MetroBuildHasher;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{pos, presets, Cell, HashedWorld, LifeError, Pos, Preset, Result, World};

/// What lies past the edges of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topology {
    /// out of range cells are always dead
    #[default]
    Bounded,
    /// edges wrap around
    Toroidal,
}

/// A fixed size board and the generation it is at.
///
/// Every live cell of `world` lies in `[0, width) x [0, height)`.
#[derive(Debug, Clone)]
pub struct Board<W = HashedWorld>
where
    W: World,
{
    width: u16,
    height: u16,
    topology: Topology,
    generation: u64,
    world: W,
}

impl<W> Board<W>
where
    W: World,
{
    pub fn new(width: u16, height: u16, topology: Topology) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(LifeError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            topology,
            generation: 0,
            world: W::default(),
        })
    }

    /// Rebuilds a board from stored parts, checking every cell is in range.
    pub fn from_parts(
        width: u16,
        height: u16,
        topology: Topology,
        generation: u64,
        cells: impl IntoIterator<Item = Pos>,
    ) -> Result<Self> {
        let mut board = Self::new(width, height, topology)?;
        for pos in cells {
            board.set_alive(pos, true)?;
        }
        board.generation = generation;
        Ok(board)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.world.population()
    }

    pub fn contains(&self, pos: Pos) -> bool {
        (0..self.width as i32).contains(&pos.x) && (0..self.height as i32).contains(&pos.y)
    }

    pub fn is_alive(&self, pos: Pos) -> bool {
        self.contains(pos) && self.world.get(pos).is_alive()
    }

    pub fn set_alive(&mut self, pos: Pos, alive: bool) -> Result<()> {
        if !self.contains(pos) {
            return Err(LifeError::OutOfBounds {
                pos,
                width: self.width,
                height: self.height,
            });
        }
        self.world.set(pos, Cell::from_alive(alive));
        Ok(())
    }

    /// live cells, sorted row by row
    pub fn actives(&self) -> Vec<Pos> {
        let mut actives = self.world.actives();
        actives.sort_by_key(|p| (p.y, p.x));
        actives
    }

    /// the neighbours of `pos` that exist under this board's topology
    fn neighbors(&self, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
        let (width, height) = (self.width as i32, self.height as i32);
        pos.neighbors().filter_map(move |p| match self.topology {
            Topology::Bounded => self.contains(p).then_some(p),
            Topology::Toroidal => Some(pos!(p.x.rem_euclid(width), p.y.rem_euclid(height))),
        })
    }

    /// Live neighbour count of every cell next to a live cell. Cells missing
    /// from the map have no live neighbour.
    fn neighbor_counts(&self) -> HashMap<Pos, u8, MetroBuildHasher> {
        let mut counts = HashMap::default();
        for active in self.world.actives() {
            for pos in self.neighbors(active) {
                *counts.entry(pos).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Advances the board by one generation (B3/S23).
    pub fn step(&mut self) {
        let mut next = W::default();
        for (pos, count) in self.neighbor_counts() {
            match (self.world.get(pos).is_alive(), count) {
                (true, 2 | 3) => next.set(pos, Cell::Alive), // stays
                (false, 3) => next.set(pos, Cell::Alive),    // born
                _ => (),                                     // dies or stays dead
            }
        }
        self.world = next;
        self.generation += 1;
        debug!(
            "generation {} population {}",
            self.generation,
            self.population()
        );
    }

    pub fn clear(&mut self) {
        self.world = W::default();
        self.generation = 0;
    }

    /// Refills the board, each cell alive with probability `density`.
    pub fn randomize(&mut self, rng: &mut impl Rng, density: f64) {
        self.clear();
        let density = density.clamp(0.0, 1.0);
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                if rng.gen_bool(density) {
                    self.world.set(pos!(x, y), Cell::Alive);
                }
            }
        }
        info!("random board, population {}", self.population());
    }

    /// Replaces the board with `preset` centred on it.
    pub fn apply_preset(&mut self, preset: &Preset) {
        self.clear();
        let (pattern_width, pattern_height) = preset.size();
        let origin = pos!(
            (self.width as i32 - pattern_width) / 2,
            (self.height as i32 - pattern_height) / 2
        );
        let mut dropped = 0;
        for cell in preset.cells() {
            let pos = origin + cell;
            if self.contains(pos) {
                self.world.set(pos, Cell::Alive);
            } else {
                dropped += 1;
            }
        }
        if dropped > 0 {
            warn!(
                "{} does not fit a {}x{} board, {dropped} cells dropped",
                preset.name, self.width, self.height
            );
        }
        info!("loaded preset {}", preset.name);
    }

    /// Loads a preset by name. An unknown name leaves the board untouched.
    pub fn load_preset(&mut self, name: &str) -> Result<()> {
        let preset = presets::find(name)?;
        self.apply_preset(preset);
        Ok(())
    }
}
