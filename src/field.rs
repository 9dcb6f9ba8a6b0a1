use anyhow::Result;
use log::{debug, trace};
use rand::Rng;

use crate::input::Command;
use crate::star::{Star, Viewport};
use crate::surface::{Surface, STAR_STYLE};

pub(crate) const DEFAULT_STARS: u16 = 100;
pub(crate) const SPEED_INCREMENT: f32 = 0.2;
pub(crate) const MIN_SPEED: f32 = 0.1;
pub(crate) const MAX_SPEED: f32 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Quit,
}

/// Everything the frame loop mutates: the population, shared speed and
/// the viewport every star projects against.
#[derive(Clone, Debug)]
pub(crate) struct Field {
    pub(crate) stars: Vec<Star>,
    pub(crate) target: usize,
    pub(crate) speed: f32,
    pub(crate) viewport: Viewport,
}

impl Field {
    pub(crate) fn new(viewport: Viewport, target: usize, speed: f32) -> Self {
        Self {
            stars: Vec::new(),
            target,
            speed: speed.clamp(MIN_SPEED, MAX_SPEED),
            viewport,
        }
    }

    pub(crate) fn speed_up(&mut self) {
        self.speed = (self.speed + SPEED_INCREMENT).min(MAX_SPEED);
    }

    pub(crate) fn slow_down(&mut self) {
        self.speed = (self.speed - SPEED_INCREMENT).max(MIN_SPEED);
    }

    pub(crate) fn apply<S>(&mut self, cmd: Command, surface: &mut S) -> Result<Flow>
    where
        S: Surface + ?Sized,
    {
        match cmd {
            Command::Quit => return Ok(Flow::Quit),
            Command::SpeedUp => {
                self.speed_up();
                debug!("speed {:.1}", self.speed);
            }
            Command::SpeedDown => {
                self.slow_down();
                debug!("speed {:.1}", self.speed);
            }
            Command::Resize => {
                self.viewport = surface.size()?;
                // stale glyphs from the old geometry must go now
                surface.clear()?;
                debug!("resized to {}x{}", self.viewport.width, self.viewport.height);
            }
        }
        Ok(Flow::Continue)
    }

    /// One frame: input, clear, grow, move/draw every star, flush.
    /// Pacing is left to the caller.
    pub(crate) fn tick<S, R>(&mut self, surface: &mut S, rng: &mut R) -> Result<Flow>
    where
        S: Surface + ?Sized,
        R: Rng + ?Sized,
    {
        while let Some(cmd) = surface.poll_command()? {
            if self.apply(cmd, surface)? == Flow::Quit {
                return Ok(Flow::Quit);
            }
        }

        surface.clear()?;

        // fade in one star per frame
        if self.stars.len() < self.target {
            self.stars.push(Star::spawn(self.viewport, rng));
        }

        let vp = self.viewport;
        for star in self.stars.iter_mut() {
            if star.advance(self.speed) {
                star.reset(vp, rng);
            }
            if let Some((sx, sy)) = star.project(vp) {
                // the last cell of some terminals refuses writes; harmless
                if let Err(e) = surface.set_cell(sx, sy, star.depth().glyph(), STAR_STYLE) {
                    trace!("skipped cell {sx},{sy}: {e}");
                }
            }
        }

        surface.flush()?;
        Ok(Flow::Continue)
    }
}
