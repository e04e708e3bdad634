use crate::{
    pos,
    presets::{PRESETS, RANDOM_KEY, RANDOM_NAME, SAVED_KEY, SAVED_NAME},
    Board, LifeError, Pos, Result, World,
};

use super::canvas::Canvas;

const LEFT_MARGIN: u16 = 2;
const RIGHT_MARGIN: u16 = 13;
const TOP_MARGIN: u16 = 3;
const BOTTOM_MARGIN: u16 = 2;
const SIDE_MENU_WIDTH: u16 = 11;

const TITLE: &str = "GAME OF LIFE";
const LIVE_GLYPH: char = '█';

/// Where everything goes on a screen of a given size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    screen_width: u16,
    screen_height: u16,
    /// board columns that fit inside the border
    pub cols: u16,
    /// board rows that fit inside the border
    pub rows: u16,
}

impl Layout {
    pub fn from_screen(width: u16, height: u16) -> Result<Self> {
        let cols = width.checked_sub(LEFT_MARGIN + RIGHT_MARGIN + 1);
        let rows = height.checked_sub(TOP_MARGIN + BOTTOM_MARGIN + 1);
        match (cols, rows) {
            (Some(cols), Some(rows)) if cols > 0 && rows > 0 => Ok(Self {
                screen_width: width,
                screen_height: height,
                cols,
                rows,
            }),
            _ => Err(LifeError::TerminalTooSmall { width, height }),
        }
    }

    /// screen position of the board's (0, 0) cell
    fn board_origin(&self) -> Pos {
        pos!(LEFT_MARGIN as i32 + 1, TOP_MARGIN as i32 + 1)
    }

    pub fn frame<W: World>(&self, board: &Board<W>, message: &str) -> Canvas {
        let mut canvas = Canvas::new(self.screen_width as usize, self.screen_height as usize);
        self.draw_title(&mut canvas);
        self.draw_status(&mut canvas, board, message);
        self.draw_border(&mut canvas);
        self.draw_cells(&mut canvas, board);
        self.draw_side_menu(&mut canvas);
        self.draw_bottom_menu(&mut canvas);
        canvas
    }

    fn draw_title(&self, canvas: &mut Canvas) {
        let x = (self.screen_width as i32 - TITLE.len() as i32) / 2;
        canvas.text(pos!(x, 1), TITLE);
    }

    fn draw_status<W: World>(&self, canvas: &mut Canvas, board: &Board<W>, message: &str) {
        let mut status = format!(
            "gen {}  pop {}",
            board.generation(),
            board.population()
        );
        if !message.is_empty() {
            status += "  ";
            status += message;
        }
        canvas.text(pos!(LEFT_MARGIN as i32, 2), &status);
    }

    fn draw_border(&self, canvas: &mut Canvas) {
        let (left, top) = (LEFT_MARGIN as i32, TOP_MARGIN as i32);
        let right = left + self.cols as i32 + 1;
        let bottom = top + self.rows as i32 + 1;
        for x in left + 1..right {
            canvas.put(pos!(x, top), '─');
            canvas.put(pos!(x, bottom), '─');
        }
        for y in top + 1..bottom {
            canvas.put(pos!(left, y), '│');
            canvas.put(pos!(right, y), '│');
        }
        canvas.put(pos!(left, top), '┌');
        canvas.put(pos!(right, top), '┐');
        canvas.put(pos!(left, bottom), '└');
        canvas.put(pos!(right, bottom), '┘');
    }

    /// Boards bigger than the viewport (loaded from a save) are clipped.
    fn draw_cells<W: World>(&self, canvas: &mut Canvas, board: &Board<W>) {
        let width = self.cols.min(board.width()) as usize;
        let height = self.rows.min(board.height()) as usize;
        canvas.layer(self.board_origin(), width, height, |pos| {
            board.is_alive(pos).then_some(LIVE_GLYPH)
        });
    }

    fn draw_side_menu(&self, canvas: &mut Canvas) {
        let x = self.screen_width as i32 - SIDE_MENU_WIDTH as i32;
        canvas.text(pos!(x, 4), "Options:");
        for (index, preset) in PRESETS.iter().enumerate() {
            canvas.text(pos!(x, 6 + index as i32), &format!("{}: {}", preset.key, preset.name));
        }
        let after = 6 + PRESETS.len() as i32;
        canvas.text(pos!(x, after), &format!("{SAVED_KEY}: {SAVED_NAME}"));
        canvas.text(pos!(x, after + 1), &format!("{RANDOM_KEY}: {RANDOM_NAME}"));
    }

    fn draw_bottom_menu(&self, canvas: &mut Canvas) {
        let y = self.screen_height as i32 - 1;
        let cols = self.cols as i32;
        canvas.text(pos!(3, y), "q: quit");
        canvas.text(pos!(cols / 2 - 6, y), "Enter: Next state");
        canvas.text(pos!(cols - 5, y), "s: Save");
    }
}
