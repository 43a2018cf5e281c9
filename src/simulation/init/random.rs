/// Random number generator (xorshift32). `state` must never be zero.
#[inline]
pub(super) fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Uniform sample in `[0, 1)`
#[inline]
pub(super) fn unit(state: &mut u32) -> f64 {
    xorshift32(state) as f64 / (u32::MAX as f64 + 1.0)
}

/// One velocity component for a freshly freed dot, in `[-max/2, max/2)`
#[inline]
pub(super) fn spawn_velocity(state: &mut u32, max_velocity: f64) -> f64 {
    (unit(state) - 0.5) * max_velocity
}

/// Zero would lock xorshift at zero forever.
pub(super) fn sanitize_seed(seed: u32) -> u32 {
    if seed == 0 { 0x9E37_79B9 } else { seed }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_velocity_stays_in_band() {
        let mut state = 12345;
        for _ in 0..10_000 {
            let v = spawn_velocity(&mut state, 750.0);
            assert!((-375.0..375.0).contains(&v));
        }
    }

    #[test]
    fn zero_max_velocity_gives_still_dots() {
        let mut state = 7;
        assert_eq!(spawn_velocity(&mut state, 0.0), 0.0);
    }

    #[test]
    fn zero_seed_is_replaced() {
        let mut state = sanitize_seed(0);
        assert_ne!(xorshift32(&mut state), 0);
    }
}
