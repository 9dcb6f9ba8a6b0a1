use anyhow::{Context, Result};
use log::info;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::config::Args;
use crate::field::{Field, Flow};
use crate::surface::Surface;
use crate::term::TermSurface;

/// Fixed sleep after every frame, roughly 15 fps. Work done during the frame
/// is not subtracted.
pub(crate) const FRAME_DELAY: Duration = Duration::from_millis(67);

pub(crate) fn run(args: Args) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    // raw mode only covers ctrl+c typed at the keyboard; this catches a
    // SIGINT sent from elsewhere
    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = interrupted.clone();
    ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))
        .context("could not install interrupt handler")?;

    let mut term = TermSurface::begin()?;
    let mut field = Field::new(term.size()?, usize::from(args.stars), args.initial_speed());
    info!(
        "starfield {}x{} stars={} speed={:.1} seed={:?}",
        field.viewport.width, field.viewport.height, field.target, field.speed, args.seed
    );

    let res = drive(&mut field, &mut term, &mut rng, &interrupted);
    term.end()?;
    info!("quit at speed {:.1}", field.speed);
    res
}

fn drive<S, R>(
    field: &mut Field,
    surface: &mut S,
    rng: &mut R,
    interrupted: &AtomicBool,
) -> Result<()>
where
    S: Surface + ?Sized,
    R: Rng + ?Sized,
{
    loop {
        if interrupted.load(Ordering::SeqCst) {
            info!("interrupted");
            return Ok(());
        }
        if field.tick(surface, rng)? == Flow::Quit {
            return Ok(());
        }
        std::thread::sleep(FRAME_DELAY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Command;
    use crate::star::Viewport;
    use crate::surface::fake::FakeSurface;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn quit_command_ends_the_loop() {
        let mut surface = FakeSurface::new(80, 24);
        surface.push(Command::Quit);
        let mut field = Field::new(Viewport::new(80, 24), 100, 1.0);
        let flag = AtomicBool::new(false);

        drive(&mut field, &mut surface, &mut rng(), &flag).unwrap();
        assert!(surface.pending.is_empty());
        assert_eq!(surface.flushes, 0);
    }

    #[test]
    fn raised_interrupt_quits_before_drawing() {
        let mut surface = FakeSurface::new(80, 24);
        let mut field = Field::new(Viewport::new(80, 24), 100, 1.0);
        let flag = AtomicBool::new(true);

        drive(&mut field, &mut surface, &mut rng(), &flag).unwrap();
        assert_eq!(surface.clears, 0);
        assert_eq!(surface.flushes, 0);
        assert!(field.stars.is_empty());
    }
}
