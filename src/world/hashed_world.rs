use std::collections::HashSet;

use metrohash::MetroBuildHasher;

use crate::{Cell, Pos, World};

/// Sparse world: only live positions are stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HashedWorld {
    alive: HashSet<Pos, MetroBuildHasher>,
}

impl World for HashedWorld {
    fn get(&self, pos: Pos) -> Cell {
        Cell::from_alive(self.alive.contains(&pos))
    }

    fn set(&mut self, pos: Pos, cell: Cell) {
        match cell {
            Cell::Alive => self.alive.insert(pos),
            Cell::Dead => self.alive.remove(&pos),
        };
    }

    fn actives(&self) -> Vec<Pos> {
        self.alive.iter().copied().collect()
    }

    fn population(&self) -> usize {
        self.alive.len()
    }
}
