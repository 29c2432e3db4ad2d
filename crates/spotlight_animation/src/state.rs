//! Bouncing offset state
//!
//! The offset moves by a fixed step each tick and reverses at `0` and at an
//! upper bound. The direction check runs before the step is applied, so the
//! offset may pass the upper bound by less than one step when the bound is not
//! a multiple of the step.

/// Offset and direction of the moving window
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationState {
    offset_x: i32,
    moving_right: bool,
}

impl AnimationState {
    pub const fn new() -> Self {
        Self {
            offset_x: 0,
            moving_right: true,
        }
    }

    pub fn offset_x(&self) -> i32 {
        self.offset_x
    }

    pub fn is_moving_right(&self) -> bool {
        self.moving_right
    }

    /// Advance one tick. Returns `true` when the direction flipped.
    /// The offset saturates at the `i32` range.
    ///
    /// The upper-bound check wins over the lower-bound check, so a bound at
    /// or below zero reverses to the left first.
    pub fn tick(&mut self, upper_bound: f32, step: i32) -> bool {
        let was_moving_right = self.moving_right;

        if self.offset_x as f32 >= upper_bound {
            self.moving_right = false;
        } else if self.offset_x <= 0 {
            self.moving_right = true;
        }

        self.offset_x = if self.moving_right {
            self.offset_x.saturating_add(step)
        } else {
            self.offset_x.saturating_sub(step)
        };

        let flipped = was_moving_right != self.moving_right;
        if flipped {
            tracing::debug!(
                offset_x = self.offset_x,
                moving_right = self.moving_right,
                "marquee direction flipped"
            );
        }
        flipped
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = AnimationState::new();
        assert_eq!(state.offset_x(), 0);
        assert!(state.is_moving_right());
    }

    #[test]
    fn test_sweep_right_then_left() {
        let mut state = AnimationState::new();
        let bound = 500.0 - 100.0;

        for _ in 0..40 {
            assert!(!state.tick(bound, 10));
        }
        assert_eq!(state.offset_x(), 400);
        assert!(state.is_moving_right());

        // The tick that sees 400 flips and steps back in the same call
        assert!(state.tick(bound, 10));
        assert_eq!(state.offset_x(), 390);
        assert!(!state.is_moving_right());

        for _ in 0..39 {
            assert!(!state.tick(bound, 10));
        }
        assert_eq!(state.offset_x(), 0);
        assert!(!state.is_moving_right());

        assert!(state.tick(bound, 10));
        assert_eq!(state.offset_x(), 10);
        assert!(state.is_moving_right());
    }

    #[test]
    fn test_overshoot_is_under_one_step() {
        let mut state = AnimationState::new();
        let bound = 395.0;
        let mut max_seen = i32::MIN;
        let mut min_seen = i32::MAX;

        for _ in 0..500 {
            state.tick(bound, 10);
            max_seen = max_seen.max(state.offset_x());
            min_seen = min_seen.min(state.offset_x());
        }

        assert_eq!(max_seen, 400);
        assert_eq!(min_seen, 0);
    }

    #[test]
    fn test_bound_below_zero_prefers_left() {
        // Text narrower than the window: 0 >= -50 turns left first
        let mut state = AnimationState::new();
        assert!(state.tick(-50.0, 10));
        assert_eq!(state.offset_x(), -10);

        for _ in 0..4 {
            state.tick(-50.0, 10);
        }
        assert_eq!(state.offset_x(), -50);

        // -50 >= -50 keeps going left, then -60 bounces back right
        state.tick(-50.0, 10);
        assert_eq!(state.offset_x(), -60);
        state.tick(-50.0, 10);
        assert_eq!(state.offset_x(), -50);
        assert!(state.is_moving_right());
    }

    #[test]
    fn test_huge_step_saturates() {
        let mut state = AnimationState::new();
        state.tick(400.0, i32::MAX);
        assert_eq!(state.offset_x(), i32::MAX);
        assert!(state.tick(400.0, i32::MAX));
        assert_eq!(state.offset_x(), 0);

        // A negative step keeps "right" moving left until it pins at the floor

        let mut state = AnimationState::new();
        for _ in 0..4 {
            state.tick(400.0, -1_500_000_000);
        }
        assert_eq!(state.offset_x(), i32::MIN);
    }
}
