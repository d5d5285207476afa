//! Lightweight xorshift64 PRNG — no external crate needed

/// Scaled bounds are clamped so an inclusive span always fits in `u64`.
const THOUSANDTHS_LIMIT: i64 = i64::MAX / 2;

/// Seedable pseudo-random source for particle attribute generation.
///
/// Draws inclusive values from integer or fractional ranges, accepting the
/// bounds in either order. Not cryptographically secure — fast and
/// deterministic for a given seed, which keeps randomized tests
/// reproducible.
pub struct ParticleRng {
    state: u64,
}

impl ParticleRng {
    /// Create a generator from a seed. A zero seed is coerced to a fixed
    /// non-zero value (all-zero state is a fixed point of xorshift).
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Returns an integer in `[min, max]`, inclusive of both endpoints.
    /// The bounds may be supplied in either order.
    pub fn range_i32(&mut self, min: i32, max: i32) -> i32 {
        self.range_i64(min as i64, max as i64) as i32
    }

    /// Returns a fractional value in `[min, max]`, inclusive of both
    /// endpoints, quantized to three decimal places. The bounds may be
    /// supplied in either order.
    ///
    /// Both bounds are scaled to integer thousandths before the draw, so
    /// every result is an exact multiple of 0.001 and the endpoints are
    /// always reachable.
    pub fn range_f32(&mut self, min: f32, max: f32) -> f32 {
        let a = to_thousandths(min);
        let b = to_thousandths(max);
        self.range_i64(a, b) as f32 / 1000.0
    }

    fn range_i64(&mut self, min: i64, max: i64) -> i64 {
        let (low, high) = if min <= max { (min, max) } else { (max, min) };
        let span = (high - low) as u64 + 1;
        low + (self.next_u64() % span) as i64
    }
}

fn to_thousandths(value: f32) -> i64 {
    let scaled = (value as f64 * 1000.0).round();
    scaled.clamp(-(THOUSANDTHS_LIMIT as f64), THOUSANDTHS_LIMIT as f64) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_range_reaches_both_endpoints() {
        let mut rng = ParticleRng::new(42);
        let mut saw_min = false;
        let mut saw_max = false;
        for _ in 0..10_000 {
            let v = rng.range_i32(1, 8);
            assert!((1..=8).contains(&v));
            saw_min |= v == 1;
            saw_max |= v == 8;
        }
        assert!(saw_min && saw_max);
    }

    #[test]
    fn swapped_bounds_draw_identical_sequences() {
        let mut a = ParticleRng::new(7);
        let mut b = ParticleRng::new(7);
        for _ in 0..1_000 {
            assert_eq!(a.range_i32(8, 1), b.range_i32(1, 8));
        }
    }

    #[test]
    fn fractional_range_keeps_three_decimal_precision() {
        let mut rng = ParticleRng::new(99);
        for _ in 0..10_000 {
            let v = rng.range_f32(1.001, 2.001);
            assert!(v >= 1.001 && v <= 2.001);
            let requantized = (v * 1000.0).round() / 1000.0;
            assert!((v - requantized).abs() < 1e-6);
        }
    }

    #[test]
    fn fractional_range_reaches_both_endpoints() {
        let mut rng = ParticleRng::new(3);
        let mut saw_low = false;
        let mut saw_high = false;
        for _ in 0..10_000 {
            let v = rng.range_f32(0.001, 0.004);
            assert!(v >= 0.001 && v <= 0.004);
            saw_low |= (v - 0.001).abs() < 1e-6;
            saw_high |= (v - 0.004).abs() < 1e-6;
        }
        assert!(saw_low && saw_high);
    }

    #[test]
    fn swapped_negative_fractional_bounds_stay_in_range() {
        let mut rng = ParticleRng::new(11);
        for _ in 0..1_000 {
            let v = rng.range_f32(3.0, -3.0);
            assert!((-3.0..=3.0).contains(&v));
        }
    }

    #[test]
    fn degenerate_range_returns_the_single_value() {
        let mut rng = ParticleRng::new(1);
        for _ in 0..100 {
            assert_eq!(rng.range_i32(5, 5), 5);
            assert!((rng.range_f32(-2.5, -2.5) + 2.5).abs() < 1e-6);
        }
    }

    #[test]
    fn zero_seed_is_coerced_to_a_working_state() {
        let mut rng = ParticleRng::new(0);
        let draws: Vec<i32> = (0..10).map(|_| rng.range_i32(0, i32::MAX)).collect();
        assert!(draws.iter().any(|&v| v != draws[0]));
    }

    #[test]
    fn same_seed_replays_the_same_sequence() {
        let mut a = ParticleRng::new(12345);
        let mut b = ParticleRng::new(12345);
        for _ in 0..100 {
            assert_eq!(a.range_i32(-50, 50), b.range_i32(-50, 50));
            assert_eq!(a.range_f32(0.0, 10.0), b.range_f32(0.0, 10.0));
        }
    }
}
