//! Where list values come from.

use std::ops::RangeInclusive;
use std::time::{SystemTime, UNIX_EPOCH};

use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Closed range every random value falls in.
pub const VALUE_RANGE: RangeInclusive<i32> = 0..=9;

/// Supplies one value per insertion.
pub trait ValueSource {
    fn next_value(&mut self) -> i32;
}

/// Uniform digits in [`VALUE_RANGE`], seeded once at construction.
pub struct RandomDigits {
    rng: StdRng,
}

impl RandomDigits {
    /// Seeds from the wall clock (nanoseconds since the Unix epoch).
    pub fn from_time() -> RandomDigits {
        let seed = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_nanos() as u64,
            Err(e) => {
                warn!("system clock is before the Unix epoch ({}), seeding with 0", e);
                0
            }
        };
        info!("seeding random digits from clock: {}", seed);
        RandomDigits::from_seed(seed)
    }

    pub fn from_seed(seed: u64) -> RandomDigits {
        RandomDigits {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ValueSource for RandomDigits {
    fn next_value(&mut self) -> i32 {
        self.rng.gen_range(VALUE_RANGE)
    }
}
