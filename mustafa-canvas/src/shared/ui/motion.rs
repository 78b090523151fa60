//! Entrance animation math. Progress values live in `[0.0, 1.0]`.

use std::time::Duration;

/// Visual state of an entering element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Motion {
    pub(crate) opacity: f32,
    /// Vertical displacement from the resting position, in pixels.
    pub(crate) offset_y: f32,
}

impl Motion {
    /// Resting state.
    #[cfg(test)]
    pub(crate) const SETTLED: Motion = Motion {
        opacity: 1.0,
        offset_y: 0.0,
    };

    /// Fully hidden, displaced by `from_offset`.
    #[cfg(test)]
    pub(crate) fn hidden(from_offset: f32) -> Self {
        Self {
            opacity: 0.0,
            offset_y: from_offset,
        }
    }

    /// Interpolate from `hidden(from_offset)` to `SETTLED`.
    pub(crate) fn entering(progress: f32, from_offset: f32) -> Self {
        let eased = ease_out(progress);
        Self {
            opacity: eased,
            offset_y: from_offset * (1.0 - eased),
        }
    }
}

/// Linear progress of an animation of `duration` after `elapsed`.
pub(crate) fn progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
}

/// Cubic ease-out.
pub(crate) fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{Motion, ease_out, progress};

    #[test]
    fn given_elapsed_time_when_progress_then_clamps_to_unit_range() {
        let duration = Duration::from_millis(800);

        assert_eq!(progress(Duration::ZERO, duration), 0.0);
        assert_eq!(progress(Duration::from_millis(400), duration), 0.5);
        assert_eq!(progress(Duration::from_secs(5), duration), 1.0);
        assert_eq!(progress(Duration::from_millis(1), Duration::ZERO), 1.0);
    }

    #[test]
    fn given_increasing_progress_when_eased_then_values_are_monotonic() {
        let samples: Vec<f32> =
            (0..=10).map(|step| ease_out(step as f32 / 10.0)).collect();

        assert_eq!(samples[0], 0.0);
        assert_eq!(samples[10], 1.0);
        assert!(samples.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn given_progress_bounds_when_entering_then_matches_hidden_and_settled() {
        assert_eq!(Motion::entering(0.0, 50.0), Motion::hidden(50.0));
        assert_eq!(Motion::entering(1.0, -50.0), Motion::SETTLED);
    }
}
