use rand::Rng;

/// Magnification applied to x/z and y/z; larger values zoom in.
pub(crate) const SCALE: f32 = 24.0;
pub(crate) const MIN_Z: f32 = 32.0;
pub(crate) const MAX_Z: f32 = 128.0;
pub(crate) const Z_NEAR: f32 = 24.0;
pub(crate) const Z_MEDIUM: f32 = 61.0;

/// Terminal size in character cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub(crate) struct Viewport {
    pub(crate) width: u16,
    pub(crate) height: u16,
}

impl Viewport {
    pub(crate) fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Star {
    pub(crate) x: f32,
    pub(crate) y: f32,
    pub(crate) z: f32, // depth, > 0 whenever the star is projected
}

impl Star {
    pub(crate) fn spawn<R: Rng + ?Sized>(vp: Viewport, rng: &mut R) -> Self {
        let mut s = Star {
            x: 0.0,
            y: 0.0,
            z: MAX_Z,
        };
        s.reset(vp, rng);
        s
    }

    /// Re-randomize all three coordinates in place.
    pub(crate) fn reset<R: Rng + ?Sized>(&mut self, vp: Viewport, rng: &mut R) {
        let w = vp.width as f32;
        let h = vp.height as f32;
        // inclusive ranges so a 0x0 viewport doesn't panic
        self.x = rng.gen_range(-w..=w);
        self.y = rng.gen_range(-h..=h);
        self.z = rng.gen_range(MIN_Z..=MAX_Z);
    }

    /// Move toward the viewer. Returns true once depth is used up; the caller
    /// must `reset` before projecting again.
    pub(crate) fn advance(&mut self, speed: f32) -> bool {
        self.z -= speed;
        self.z <= 0.0
    }

    /// Perspective-project onto the grid, `None` when off-screen.
    pub(crate) fn project(&self, vp: Viewport) -> Option<(u16, u16)> {
        let w = vp.width as f32;
        let h = vp.height as f32;
        let sx = (self.x / self.z * SCALE + w / 2.0).floor();
        let sy = (self.y / self.z * SCALE + h / 2.0).floor();

        if sx >= 0.0 && sx < w && sy >= 0.0 && sy < h {
            Some((sx as u16, sy as u16))
        } else {
            None
        }
    }

    pub(crate) fn depth(&self) -> Depth {
        Depth::of(self.z)
    }
}

/// Depth band used to pick a glyph: nearer stars look bigger and brighter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Depth {
    Near,
    Medium,
    Far,
}

impl Depth {
    pub(crate) fn of(z: f32) -> Self {
        if z < Z_NEAR {
            Depth::Near
        } else if z < Z_MEDIUM {
            Depth::Medium
        } else {
            Depth::Far
        }
    }

    pub(crate) fn glyph(self) -> char {
        match self {
            Depth::Near => '#',
            Depth::Medium => '+',
            Depth::Far => '.',
        }
    }
}
