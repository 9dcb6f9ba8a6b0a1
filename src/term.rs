use anyhow::{bail, Context, Result};
use crossterm::{
    cursor, event, execute, queue,
    style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{
        self, BeginSynchronizedUpdate, Clear, ClearType, DisableLineWrap, EnableLineWrap,
        EndSynchronizedUpdate, EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use std::io::{self, Write};
use std::time::Duration;

use crate::input::{map_event, Command};
use crate::star::Viewport;
use crate::surface::{CellStyle, Surface};

/// Full-screen crossterm grid. Drawing is queued and sent in one
/// synchronized update per `flush`.
pub(crate) struct TermSurface<W: Write> {
    out: W,
    cols: u16,
    rows: u16,
    active: bool,
}

impl TermSurface<io::Stdout> {
    pub(crate) fn begin() -> Result<Self> {
        let (cols, rows) = terminal::size().context("could not read terminal size")?;
        terminal::enable_raw_mode().context("could not enable raw mode")?;

        // from here on Drop restores whatever got switched
        let mut surface = Self {
            out: io::stdout(),
            cols,
            rows,
            active: true,
        };
        execute!(
            surface.out,
            EnterAlternateScreen,
            cursor::Hide,
            DisableLineWrap,
            Clear(ClearType::All)
        )
        .context("could not switch to the alternate screen")?;
        Ok(surface)
    }
}

impl<W: Write> TermSurface<W> {
    /// Put the terminal back the way we found it. Safe to call twice.
    pub(crate) fn end(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        queue!(
            self.out,
            EndSynchronizedUpdate,
            ResetColor,
            Clear(ClearType::All),
            cursor::Show,
            EnableLineWrap,
            LeaveAlternateScreen
        )?;
        self.out.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }
}

impl<W: Write> Drop for TermSurface<W> {
    fn drop(&mut self) {
        let _ = self.end();
    }
}

impl<W: Write> Surface for TermSurface<W> {
    fn size(&self) -> Result<Viewport> {
        let (cols, rows) = terminal::size()?;
        Ok(Viewport::new(cols, rows))
    }

    fn poll_command(&mut self) -> Result<Option<Command>> {
        while event::poll(Duration::ZERO)? {
            let ev = event::read()?;
            if let event::Event::Resize(c, r) = ev {
                self.cols = c;
                self.rows = r;
            }
            if let Some(cmd) = map_event(&ev) {
                return Ok(Some(cmd));
            }
        }
        Ok(None)
    }

    fn clear(&mut self) -> Result<()> {
        queue!(
            self.out,
            BeginSynchronizedUpdate,
            ResetColor,
            Clear(ClearType::All)
        )?;
        Ok(())
    }

    fn set_cell(&mut self, x: u16, y: u16, glyph: char, style: CellStyle) -> Result<()> {
        if x >= self.cols || y >= self.rows {
            bail!("cell {x},{y} outside {}x{}", self.cols, self.rows);
        }
        queue!(
            self.out,
            cursor::MoveTo(x, y),
            SetForegroundColor(style.fg),
            SetBackgroundColor(style.bg),
            Print(glyph)
        )?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        queue!(self.out, ResetColor, EndSynchronizedUpdate)?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::STAR_STYLE;

    // never `active`, so dropping it leaves the real terminal alone
    fn detached(cols: u16, rows: u16) -> TermSurface<Vec<u8>> {
        TermSurface {
            out: Vec::new(),
            cols,
            rows,
            active: false,
        }
    }

    fn written(s: &TermSurface<Vec<u8>>) -> String {
        String::from_utf8_lossy(&s.out).into_owned()
    }

    #[test]
    fn bottom_right_cell_is_drawn() {
        let mut s = detached(80, 24);
        s.set_cell(79, 23, '#', STAR_STYLE).unwrap();
        let out = written(&s);
        // MoveTo is 1-based on the wire
        assert!(out.contains("\x1b[24;80H"), "{out:?}");
        assert!(out.ends_with('#'), "{out:?}");
    }

    #[test]
    fn cells_outside_the_grid_are_refused() {
        let mut s = detached(80, 24);
        assert!(s.set_cell(80, 0, '.', STAR_STYLE).is_err());
        assert!(s.set_cell(0, 24, '.', STAR_STYLE).is_err());
        assert!(s.out.is_empty());
    }

    #[test]
    fn end_is_a_no_op_once_inactive() {
        let mut s = detached(80, 24);
        s.end().unwrap();
        s.end().unwrap();
        assert!(s.out.is_empty());
    }
}
