use crate::{pos, LifeError, Pos, Result};

/// Menu entry served from the save file instead of a static pattern.
pub const SAVED_NAME: &str = "Saved";
pub const SAVED_KEY: char = '9';

pub const RANDOM_NAME: &str = "Random";
pub const RANDOM_KEY: char = 'r';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub key: char,
    art: &'static str,
}

impl Preset {
    /// live cells of the pattern, relative to its top left corner
    pub fn cells(&self) -> Vec<Pos> {
        deserialize(self.art)
    }

    /// (width, height) of the pattern's bounding box
    pub fn size(&self) -> (i32, i32) {
        self.cells()
            .iter()
            .fold((0, 0), |(w, h), p| (w.max(p.x + 1), h.max(p.y + 1)))
    }
}

pub static PRESETS: [Preset; 9] = [
    Preset {
        name: "Block",
        key: '0',
        art: "##\n##",
    },
    Preset {
        name: "Beehive",
        key: '1',
        art: ".##.\n#..#\n.##.",
    },
    Preset {
        name: "Loaf",
        key: '2',
        art: ".##.\n#..#\n.#.#\n..#.",
    },
    Preset {
        name: "Boat",
        key: '3',
        art: "##.\n#.#\n.#.",
    },
    Preset {
        name: "Tub",
        key: '4',
        art: ".#.\n#.#\n.#.",
    },
    Preset {
        name: "Blinker",
        key: '5',
        art: "###",
    },
    Preset {
        name: "Toad",
        key: '6',
        art: ".###\n###.",
    },
    Preset {
        name: "Beacon",
        key: '7',
        art: "##..\n##..\n..##\n..##",
    },
    Preset {
        name: "Glider",
        key: '8',
        art: ".#.\n..#\n###",
    },
];

/// Looks a preset up by name, ignoring case.
pub fn find(name: &str) -> Result<&'static Preset> {
    PRESETS
        .iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| LifeError::ConfigNotFound(name.to_string()))
}

pub fn by_key(key: char) -> Option<&'static Preset> {
    PRESETS.iter().find(|preset| preset.key == key)
}

/// `#` is a live cell, any other character a dead one, one row per line.
fn deserialize(art: &str) -> Vec<Pos> {
    let mut result = vec![];
    let mut pos = pos!(0, 0);
    for c in art.chars() {
        match c {
            '#' => {
                result.push(pos);
                pos.x += 1
            }
            '\n' => pos = pos!(0, pos.y + 1),
            _ => pos.x += 1,
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn art_is_parsed_row_by_row() {
        assert_eq!(
            deserialize(".#\n#."),
            vec![pos!(1, 0), pos!(0, 1)],
        );
    }

    #[test]
    fn glider_cells() {
        let glider = find("glider").unwrap();
        assert_eq!(
            glider.cells(),
            vec![pos!(1, 0), pos!(2, 1), pos!(0, 2), pos!(1, 2), pos!(2, 2)],
        );
        assert_eq!(glider.size(), (3, 3));
    }

    #[test]
    fn lookup_by_key_and_name() {
        assert_eq!(by_key('5').map(|p| p.name), Some("Blinker"));
        assert!(by_key(SAVED_KEY).is_none());
        assert_eq!(find("BEACON").unwrap().key, '7');
    }

    #[test]
    fn unknown_name_is_not_found() {
        match find("spaceship") {
            Err(LifeError::ConfigNotFound(name)) => assert_eq!(name, "spaceship"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn keys_are_unique_digits() {
        for (index, preset) in PRESETS.iter().enumerate() {
            assert_eq!(preset.key, char::from_digit(index as u32, 10).unwrap());
        }
    }
}
