use std::io::{self, Write};

use crate::{pos, Pos};

/// A screen-sized grid of characters, composed in memory and flushed at once.
pub struct Canvas {
    lines: Vec<Vec<char>>,
    width: usize,
    height: usize,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        let lines = vec![vec![' '; width]; height];
        Self {
            height,
            lines,
            width,
        }
    }

    /// Writes one character, ignoring positions off the canvas.
    pub fn put(&mut self, Pos { x, y }: Pos, char: char) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            self.lines[y][x] = char;
        }
    }

    pub fn text(&mut self, origin: Pos, text: &str) {
        for (index, char) in text.chars().enumerate() {
            self.put(origin + pos!(index as i32, 0), char);
        }
    }

    /// Fills a `width` x `height` area at `origin`; `f` gets area-local positions.
    pub fn layer(&mut self, origin: Pos, width: usize, height: usize, f: impl Fn(Pos) -> Option<char>) {
        for y in 0..height {
            for x in 0..width {
                let local = pos!(x as i32, y as i32);
                if let Some(char) = f(local) {
                    self.put(origin + local, char);
                }
            }
        }
    }

    pub fn line(&self, y: usize) -> String {
        self.lines.get(y).map(|l| l.iter().collect()).unwrap_or_default()
    }

    pub fn display(&self, out: &mut impl Write) -> io::Result<()> {
        let mut frame = format!("{}", termion::clear::All);
        for index in 0..self.height {
            let goto = termion::cursor::Goto(1, index as u16 + 1);
            frame += &format!("{goto}{}", self.line(index));
        }
        out.write_all(frame.as_bytes())?;
        out.flush()
    }
}
