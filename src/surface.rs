use anyhow::Result;
use crossterm::style::Color;

use crate::input::Command;
use crate::star::Viewport;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct CellStyle {
    pub(crate) fg: Color,
    pub(crate) bg: Color,
}

pub(crate) const STAR_STYLE: CellStyle = CellStyle {
    fg: Color::White,
    bg: Color::Black,
};

/// What the render loop needs from a character grid.
pub(crate) trait Surface {
    fn size(&self) -> Result<Viewport>;

    /// Next pending command, or `None` right away if there is nothing queued.
    fn poll_command(&mut self) -> Result<Option<Command>>;

    fn clear(&mut self) -> Result<()>;

    fn set_cell(&mut self, x: u16, y: u16, glyph: char, style: CellStyle) -> Result<()>;

    fn flush(&mut self) -> Result<()>;
}
