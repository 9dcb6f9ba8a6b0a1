use clap::Parser;

use crate::field::{DEFAULT_STARS, MAX_SPEED, MIN_SPEED};

/// Classic 9x-style starfield screensaver.
///
/// Controls: q quit, Up/+ faster, Down/- slower.
#[derive(Parser, Debug, Clone)]
#[command(name = "starfield", version)]
pub(crate) struct Args {
    /// number of stars once the field has filled in (1..=65535)
    #[arg(
        long,
        default_value_t = DEFAULT_STARS,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub(crate) stars: u16,

    /// initial speed (clamped to 0.1..=10.0)
    #[arg(long, default_value_t = 1.0)]
    pub(crate) speed: f32,

    /// fixed rng seed for a reproducible run
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

impl Args {
    pub(crate) fn initial_speed(&self) -> f32 {
        if self.speed.is_nan() {
            return 1.0;
        }
        self.speed.clamp(MIN_SPEED, MAX_SPEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_invocation_uses_defaults() {
        let args = Args::try_parse_from(["starfield"]).unwrap();
        assert_eq!(args.stars, 100);
        assert_eq!(args.speed, 1.0);
        assert_eq!(args.seed, None);
    }

    #[test]
    fn flags_are_parsed() {
        let args =
            Args::try_parse_from(["starfield", "--stars", "250", "--speed", "2.5", "--seed", "7"])
                .unwrap();
        assert_eq!(args.stars, 250);
        assert_eq!(args.speed, 2.5);
        assert_eq!(args.seed, Some(7));
    }

    #[test]
    fn initial_speed_is_clamped() {
        let fast = Args::try_parse_from(["starfield", "--speed", "99"]).unwrap();
        assert_eq!(fast.initial_speed(), MAX_SPEED);

        let slow = Args::try_parse_from(["starfield", "--speed", "0"]).unwrap();
        assert_eq!(slow.initial_speed(), MIN_SPEED);
    }

    #[test]
    fn star_count_out_of_range_is_rejected() {
        for bad in ["0", "65536", "18446744073709551615", "lots"] {
            assert!(
                Args::try_parse_from(["starfield", "--stars", bad]).is_err(),
                "--stars {bad} should be rejected"
            );
        }
        let max = Args::try_parse_from(["starfield", "--stars", "65535"]).unwrap();
        assert_eq!(max.stars, u16::MAX);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(Args::try_parse_from(["starfield", "--warp"]).is_err());
    }
}
