use crate::Pos;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub fn from_alive(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }

    pub fn is_alive(&self) -> bool {
        matches!(self, Cell::Alive)
    }
}

/// Storage for the live cells of one generation. Positions are not checked
/// here, the board owning the world keeps them in range.
pub trait World: Default + Clone {
    fn get(&self, pos: Pos) -> Cell;
    fn set(&mut self, pos: Pos, cell: Cell);
    fn actives(&self) -> Vec<Pos>;

    fn population(&self) -> usize {
        self.actives().len()
    }

    fn is_empty(&self) -> bool {
        self.population() == 0
    }
}

pub use hashed_world::HashedWorld;
mod hashed_world;
