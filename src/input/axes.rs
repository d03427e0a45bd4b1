//! Controller axis channel reading.
//!
//! V5 controllers expose four joystick axes, numbered 1 through 4:
//!
//! | Channel | Physical axis |
//! |---------|---------------|
//! | 1       | Right stick X |
//! | 2       | Right stick Y |
//! | 3       | Left stick Y  |
//! | 4       | Left stick X  |
//!
//! The [`AxisSource`] trait abstracts over where those readings come from,
//! so the shaping math in [`shaper`](super::shaper) can be exercised without
//! controller hardware.

use vexide::controller::ControllerState;

/// A source of joystick axis readings.
///
/// Implementors return the current deflection of an axis channel as an
/// integer percent in `[-100, 100]`.
///
/// # Fail-Safe Behavior
///
/// Reading a channel outside `1..=4` must return `0` rather than signaling
/// a fault, so that a misconfigured binding leaves the robot stationary
/// instead of moving unpredictably.
pub trait AxisSource {
    /// Returns the percent deflection of the given axis channel.
    ///
    /// Channels outside `1..=4` read as `0`.
    fn axis_percent(&self, channel: u8) -> i32;
}

/// Reads axis channels from a captured Vexide controller state.
///
/// Vexide reports stick deflection as `f64` in `[-1.0, 1.0]`; readings are
/// scaled to integer percent with rounding.
impl AxisSource for ControllerState {
    fn axis_percent(&self, channel: u8) -> i32 {
        let value = match channel {
            1 => self.right_stick.x(),
            2 => self.right_stick.y(),
            3 => self.left_stick.y(),
            4 => self.left_stick.x(),
            _ => 0.0,
        };
        (value * 100.0).round() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controller_state_reads_zero_for_unknown_channels() {
        let state = ControllerState::default();
        for channel in [0, 5, u8::MAX] {
            assert_eq!(state.axis_percent(channel), 0);
        }
    }

    #[test]
    fn controller_state_at_rest_reads_zero_on_all_channels() {
        let state = ControllerState::default();
        for channel in 1..=4 {
            assert_eq!(state.axis_percent(channel), 0);
        }
    }
}
