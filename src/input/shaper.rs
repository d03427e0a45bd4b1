//! Joystick-to-motor input shaping.
//!
//! This module maps raw controller axis readings to a pair of motor power
//! percentages for a differential drivetrain. The transform is pure: the
//! same configuration, axis readings, and slow-turn flag always produce the
//! same left/right output, with no call-to-call memory.
//!
//! # Shaping Pipeline
//!
//! 1. **Deadzone**: Readings below the threshold are forced to zero to
//!    suppress stick drift.
//! 2. **Turn sensitivity**: Turn authority is scaled down (with a separate
//!    slow-turn sensitivity when the modifier is held).
//! 3. **Expo curve**: A power-law curve reduces sensitivity near center
//!    stick while preserving full output at full deflection.
//! 4. **Clamp**: The composed left/right outputs are saturated to ±100%.
//!
//! # Example
//!
//! ```ignore
//! use talos::input::shaper::{ControlScheme, DriveShaper, ShaperConfig};
//!
//! let mut shaper = DriveShaper::new(ShaperConfig::default());
//! shaper.config_mut().set_scheme(ControlScheme::Curvature);
//!
//! let state = controller.state().unwrap_or_default();
//! let (left, right) = shaper.shape(&state, false);
//! ```

use thiserror::Error;

use crate::input::axes::AxisSource;

/// Maximum accepted deadzone threshold in percent.
const MAX_DEADZONE: i32 = 100;
/// Maximum accepted turn sensitivity in percent.
///
/// Values above 100 exaggerate turn response; 200 doubles it.
const MAX_SENSITIVITY: i32 = 200;

/// A joystick-to-drivetrain mapping convention.
///
/// All schemes except [`Tank`](ControlScheme::Tank) share the same math and
/// differ only in which axis channels are bound to drive and turn; see
/// [`AxisBindings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlScheme {
    /// One stick drives, another turns. The default.
    #[default]
    Arcade,
    /// Each stick's Y axis directly controls one side of the drivetrain.
    Tank,
    /// Arcade with drive and turn split across both sticks.
    SplitArcade,
    /// Arcade with turn authority damped as forward speed rises.
    Curvature,
    /// Drive and turn both read from a single stick.
    SingleStick,
}

/// An invalid input shaping parameter.
///
/// Returned by [`ShaperConfig`] and [`AxisBindings`] constructors and
/// setters when a value falls outside its accepted domain.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("deadzone threshold must be in 0..=100, got {0}")]
    Deadzone(i32),
    #[error("curve exponent must be finite and positive, got {0}")]
    Exponent(f64),
    #[error("turn sensitivity must be in 0..=200, got {0}")]
    TurnSensitivity(i32),
    #[error("slow-turn sensitivity must be in 0..=200, got {0}")]
    SlowTurnSensitivity(i32),
    #[error("axis channel must be in 1..=4, got {0}")]
    AxisChannel(u8),
}

/// Bindings from the four logical axis slots to physical channels 1-4.
///
/// The `drive` and `turn` slots feed every scheme except tank; the `left`
/// and `right` slots feed tank only. Defaults follow the common V5 layout:
/// drive on channel 3 (left stick Y), turn on channel 1 (right stick X),
/// tank on channels 3 and 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisBindings {
    drive: u8,
    turn:  u8,
    left:  u8,
    right: u8,
}

impl Default for AxisBindings {
    fn default() -> Self {
        Self {
            drive: 3,
            turn:  1,
            left:  3,
            right: 2,
        }
    }
}

impl AxisBindings {
    /// Creates a binding table, checking that every channel is in `1..=4`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::AxisChannel`] for the first out-of-range
    /// channel.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use talos::input::shaper::AxisBindings;
    ///
    /// // Drive on the right stick instead of the left.
    /// let bindings = AxisBindings::new(2, 4, 3, 2)?;
    /// ```
    pub fn new(drive: u8, turn: u8, left: u8, right: u8) -> Result<Self, ConfigError> {
        for channel in [drive, turn, left, right] {
            if !(1..=4).contains(&channel) {
                return Err(ConfigError::AxisChannel(channel));
            }
        }
        Ok(Self {
            drive,
            turn,
            left,
            right,
        })
    }

    /// The channel bound to the drive (forward/backward) slot.
    pub fn drive(&self) -> u8 { self.drive }

    /// The channel bound to the turn slot.
    pub fn turn(&self) -> u8 { self.turn }

    /// The channel bound to the tank left-side slot.
    pub fn left(&self) -> u8 { self.left }

    /// The channel bound to the tank right-side slot.
    pub fn right(&self) -> u8 { self.right }
}

/// Validated input shaping parameters.
///
/// Every field has an explicit accepted domain, enforced at construction
/// and by each setter:
///
/// - deadzone threshold: `0..=100` percent
/// - curve exponent: finite and positive (`2.0` gives fine control near
///   center; `1.0` is linear; below `1.0` amplifies small inputs)
/// - turn and slow-turn sensitivity: `0..=200` percent
/// - axis channels: `1..=4` (validated by [`AxisBindings`])
///
/// # Example
///
/// ```ignore
/// use talos::input::shaper::{AxisBindings, ControlScheme, ShaperConfig};
///
/// let config = ShaperConfig::new(
///     ControlScheme::Curvature,
///     10,   // deadzone
///     2.0,  // exponent
///     60,   // turn sensitivity
///     50,   // slow-turn sensitivity
///     AxisBindings::default(),
/// )?;
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShaperConfig {
    scheme:                ControlScheme,
    deadzone:              i32,
    exponent:              f64,
    turn_sensitivity:      i32,
    slow_turn_sensitivity: i32,
    bindings:              AxisBindings,
}

impl Default for ShaperConfig {
    /// Arcade, deadzone 10%, exponent 2.0, turn sensitivity 60%, slow-turn
    /// sensitivity 50%, default bindings.
    fn default() -> Self {
        Self {
            scheme:                ControlScheme::Arcade,
            deadzone:              10,
            exponent:              2.0,
            turn_sensitivity:      60,
            slow_turn_sensitivity: 50,
            bindings:              AxisBindings::default(),
        }
    }
}

impl ShaperConfig {
    /// Creates a configuration, failing fast on any out-of-range value.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] for the first rejected field.
    pub fn new(
        scheme: ControlScheme,
        deadzone: i32,
        exponent: f64,
        turn_sensitivity: i32,
        slow_turn_sensitivity: i32,
        bindings: AxisBindings,
    ) -> Result<Self, ConfigError> {
        let mut config = Self {
            scheme,
            bindings,
            ..Self::default()
        };
        config.set_deadzone(deadzone)?;
        config.set_exponent(exponent)?;
        config.set_turn_sensitivity(turn_sensitivity)?;
        config.set_slow_turn_sensitivity(slow_turn_sensitivity)?;
        Ok(config)
    }

    /// Selects the control scheme.
    pub fn set_scheme(&mut self, scheme: ControlScheme) { self.scheme = scheme; }

    /// Sets the deadzone threshold in percent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Deadzone`] if `value` is outside `0..=100`.
    pub fn set_deadzone(&mut self, value: i32) -> Result<(), ConfigError> {
        if !(0..=MAX_DEADZONE).contains(&value) {
            return Err(ConfigError::Deadzone(value));
        }
        self.deadzone = value;
        Ok(())
    }

    /// Sets the response curve exponent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Exponent`] if `value` is not finite and
    /// positive.
    pub fn set_exponent(&mut self, value: f64) -> Result<(), ConfigError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(ConfigError::Exponent(value));
        }
        self.exponent = value;
        Ok(())
    }

    /// Sets the normal turn sensitivity in percent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TurnSensitivity`] if `value` is outside
    /// `0..=200`.
    pub fn set_turn_sensitivity(&mut self, value: i32) -> Result<(), ConfigError> {
        if !(0..=MAX_SENSITIVITY).contains(&value) {
            return Err(ConfigError::TurnSensitivity(value));
        }
        self.turn_sensitivity = value;
        Ok(())
    }

    /// Sets the slow-turn sensitivity in percent, used while the slow-turn
    /// modifier is held.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::SlowTurnSensitivity`] if `value` is outside
    /// `0..=200`.
    pub fn set_slow_turn_sensitivity(&mut self, value: i32) -> Result<(), ConfigError> {
        if !(0..=MAX_SENSITIVITY).contains(&value) {
            return Err(ConfigError::SlowTurnSensitivity(value));
        }
        self.slow_turn_sensitivity = value;
        Ok(())
    }

    /// Replaces the axis binding table.
    pub fn set_bindings(&mut self, bindings: AxisBindings) { self.bindings = bindings; }

    /// The selected control scheme.
    pub fn scheme(&self) -> ControlScheme { self.scheme }

    /// The deadzone threshold in percent.
    pub fn deadzone(&self) -> i32 { self.deadzone }

    /// The response curve exponent.
    pub fn exponent(&self) -> f64 { self.exponent }

    /// The normal turn sensitivity in percent.
    pub fn turn_sensitivity(&self) -> i32 { self.turn_sensitivity }

    /// The slow-turn sensitivity in percent.
    pub fn slow_turn_sensitivity(&self) -> i32 { self.slow_turn_sensitivity }

    /// The axis binding table.
    pub fn bindings(&self) -> AxisBindings { self.bindings }
}

/// Shapes joystick axis readings into left/right motor power percentages.
///
/// The shaper holds only its [`ShaperConfig`]; [`shape`](DriveShaper::shape)
/// is deterministic and carries no state between calls. Construct one at
/// startup and call it once per control cycle.
///
/// # Example
///
/// ```ignore
/// use talos::input::shaper::{DriveShaper, ShaperConfig};
///
/// let shaper = DriveShaper::new(ShaperConfig::default());
/// loop {
///     let state = controller.state().unwrap_or_default();
///     let (left, right) = shaper.shape(&state, false);
///     drivetrain.drive_percent(left, right);
///     sleep(Duration::from_millis(20)).await;
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct DriveShaper {
    config: ShaperConfig,
}

impl DriveShaper {
    /// Creates a shaper with the given configuration.
    pub fn new(config: ShaperConfig) -> Self { Self { config } }

    /// The current configuration.
    pub fn config(&self) -> &ShaperConfig { &self.config }

    /// Mutable access to the configuration, for adjusting parameters
    /// between control cycles.
    pub fn config_mut(&mut self) -> &mut ShaperConfig { &mut self.config }

    /// Maps the current axis readings to `(left, right)` motor power
    /// percentages, each in `[-100.0, 100.0]`.
    ///
    /// `slow_turn` selects the slow-turn sensitivity instead of the normal
    /// one; it has no effect on the tank scheme, which bypasses drive/turn
    /// composition entirely.
    ///
    /// This call is total: any axis readings produce a valid output.
    pub fn shape(&self, axes: &impl AxisSource, slow_turn: bool) -> (f64, f64) {
        let config = &self.config;
        let bindings = config.bindings;
        let exponent = config.exponent;

        let drive_power;
        let mut turn_power;

        match config.scheme {
            ControlScheme::Tank => {
                let left_power = self.apply_deadzone(axes.axis_percent(bindings.left));
                let right_power = self.apply_deadzone(axes.axis_percent(bindings.right));
                return (
                    apply_curve(left_power as f64, exponent),
                    apply_curve(right_power as f64, exponent),
                );
            }

            ControlScheme::Arcade | ControlScheme::SplitArcade | ControlScheme::SingleStick => {
                drive_power = self.apply_deadzone(axes.axis_percent(bindings.drive));
                turn_power = self.apply_deadzone(axes.axis_percent(bindings.turn));
            }

            ControlScheme::Curvature => {
                drive_power = self.apply_deadzone(axes.axis_percent(bindings.drive));
                turn_power = self.apply_deadzone(axes.axis_percent(bindings.turn));
                // Damp turn authority as forward speed rises: the factor
                // shrinks linearly from 1.0 to 0.5 at full drive power.
                if drive_power.abs() > 5 {
                    turn_power =
                        (turn_power as f64 * (1.0 - drive_power.abs() as f64 / 200.0)) as i32;
                }
            }
        }

        let active_sensitivity = if slow_turn {
            config.slow_turn_sensitivity
        } else {
            config.turn_sensitivity
        };
        let scaled_turn = (turn_power * active_sensitivity) / 100;

        let target_drive = apply_curve(drive_power as f64, exponent);
        let target_turn = apply_curve(scaled_turn as f64, exponent);

        (
            clamp(target_drive + target_turn),
            clamp(target_drive - target_turn),
        )
    }

    /// Zeroes readings whose magnitude is below the deadzone threshold.
    ///
    /// Readings at or above the threshold pass through unchanged; the
    /// remaining range is not rescaled.
    fn apply_deadzone(&self, value: i32) -> i32 {
        if value.abs() < self.config.deadzone {
            0
        } else {
            value
        }
    }
}

/// Applies a sign-preserving power-law curve to a percent input.
///
/// The input is clamped to ±100, its magnitude normalized to `[0, 1]`,
/// raised to `exponent`, and rescaled. Zero and ±100 are fixed points for
/// any positive exponent.
fn apply_curve(input_percent: f64, exponent: f64) -> f64 {
    let v = input_percent.clamp(-100.0, 100.0);
    let sign = if v >= 0.0 { 1.0 } else { -1.0 };
    let shaped = (v.abs() / 100.0).powf(exponent) * 100.0;
    sign * shaped
}

/// Saturates a composed output to `[-100, 100]`.
fn clamp(value: f64) -> f64 { value.clamp(-100.0, 100.0) }

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixed stick state for channels 1-4.
    struct StickState {
        channels: [i32; 4],
    }

    impl AxisSource for StickState {
        fn axis_percent(&self, channel: u8) -> i32 {
            match channel {
                1..=4 => self.channels[(channel - 1) as usize],
                _ => 0,
            }
        }
    }

    /// Sticks with the given drive (channel 3) and turn (channel 1)
    /// deflections under the default bindings.
    fn drive_turn(drive: i32, turn: i32) -> StickState {
        StickState {
            channels: [turn, 0, drive, 0],
        }
    }

    fn shaper(configure: impl FnOnce(&mut ShaperConfig)) -> DriveShaper {
        let mut config = ShaperConfig::default();
        configure(&mut config);
        DriveShaper::new(config)
    }

    #[test]
    fn default_config_matches_constructor_defaults() {
        let config = ShaperConfig::default();
        assert_eq!(config.scheme(), ControlScheme::Arcade);
        assert_eq!(config.deadzone(), 10);
        assert_eq!(config.exponent(), 2.0);
        assert_eq!(config.turn_sensitivity(), 60);
        assert_eq!(config.slow_turn_sensitivity(), 50);
        assert_eq!(config.bindings(), AxisBindings::default());
        assert_eq!(config.bindings().drive(), 3);
        assert_eq!(config.bindings().turn(), 1);
        assert_eq!(config.bindings().left(), 3);
        assert_eq!(config.bindings().right(), 2);
    }

    #[test]
    fn deadzone_zeroes_below_threshold_only() {
        let shaper = shaper(|_| {});
        assert_eq!(shaper.apply_deadzone(9), 0);
        assert_eq!(shaper.apply_deadzone(-9), 0);
        assert_eq!(shaper.apply_deadzone(10), 10);
        assert_eq!(shaper.apply_deadzone(-10), -10);
        assert_eq!(shaper.apply_deadzone(73), 73);
    }

    #[test]
    fn curve_fixed_points_for_any_exponent() {
        for exponent in [0.5, 1.0, 2.0, 3.0] {
            assert_eq!(apply_curve(0.0, exponent), 0.0);
            assert_eq!(apply_curve(100.0, exponent), 100.0);
            assert_eq!(apply_curve(-100.0, exponent), -100.0);
        }
    }

    #[test]
    fn curve_is_identity_at_exponent_one() {
        for input in [-100, -37, 0, 12, 100] {
            assert!((apply_curve(input as f64, 1.0) - input as f64).abs() < 1e-9);
        }
    }

    #[test]
    fn curve_clamps_out_of_range_input() {
        assert_eq!(apply_curve(250.0, 2.0), 100.0);
        assert_eq!(apply_curve(-250.0, 2.0), -100.0);
    }

    #[test]
    fn curve_is_monotonic_in_magnitude() {
        let mut previous = 0.0;
        for input in 0..=100 {
            let output = apply_curve(input as f64, 2.0);
            assert!(output >= previous);
            previous = output;
        }
    }

    #[test]
    fn arcade_worked_example() {
        // deadzone 10, exponent 2.0, turn sensitivity 60: drive 50 curves
        // to (50/100)^2 * 100 = 25 on both sides.
        let shaper = shaper(|_| {});
        assert_eq!(shaper.shape(&drive_turn(50, 0), false), (25.0, 25.0));
    }

    #[test]
    fn arcade_drive_below_deadzone_reads_zero() {
        let shaper = shaper(|_| {});
        assert_eq!(shaper.shape(&drive_turn(5, 0), false), (0.0, 0.0));
    }

    #[test]
    fn arcade_turn_is_scaled_then_curved() {
        // Full turn at sensitivity 60 scales to 60, curving to 36.
        let shaper = shaper(|_| {});
        let (left, right) = shaper.shape(&drive_turn(0, 100), false);
        assert!((left - 36.0).abs() < 1e-9);
        assert!((right + 36.0).abs() < 1e-9);
    }

    #[test]
    fn slow_turn_selects_slow_sensitivity() {
        // Slow sensitivity 50 scales a full turn to 50, curving to 25.
        let shaper = shaper(|_| {});
        assert_eq!(shaper.shape(&drive_turn(0, 100), true), (25.0, -25.0));
    }

    #[test]
    fn turn_scaling_truncates_integer_division() {
        let shaper = shaper(|config| {
            config.set_exponent(1.0).unwrap();
            config.set_turn_sensitivity(60).unwrap();
        });
        // 33 * 60 / 100 truncates to 19, not 19.8.
        assert_eq!(shaper.shape(&drive_turn(0, 33), false), (19.0, -19.0));
    }

    #[test]
    fn tank_curves_each_side_independently() {
        let shaper = shaper(|config| {
            config.set_scheme(ControlScheme::Tank);
        });
        // Default bindings: left on channel 3, right on channel 2.
        let sticks = StickState {
            channels: [0, -100, 50, 0],
        };
        assert_eq!(shaper.shape(&sticks, false), (25.0, -100.0));
    }

    #[test]
    fn tank_ignores_turn_sensitivity_and_drive_bindings() {
        let sticks = StickState {
            channels: [90, 40, 60, 0],
        };
        let baseline = shaper(|config| {
            config.set_scheme(ControlScheme::Tank);
        });
        let reconfigured = shaper(|config| {
            config.set_scheme(ControlScheme::Tank);
            config.set_turn_sensitivity(0).unwrap();
            config.set_slow_turn_sensitivity(200).unwrap();
            // Rebind drive and turn; left/right stay on channels 3 and 2.
            config.set_bindings(AxisBindings::new(1, 4, 3, 2).unwrap());
        });
        assert_eq!(
            baseline.shape(&sticks, false),
            reconfigured.shape(&sticks, true)
        );
    }

    #[test]
    fn curvature_no_damping_up_to_drive_five() {
        let curvature = shaper(|config| {
            config.set_scheme(ControlScheme::Curvature);
            config.set_deadzone(0).unwrap();
        });
        let arcade = shaper(|config| {
            config.set_deadzone(0).unwrap();
        });
        // Damping only engages strictly above |drive| = 5.
        for drive in [4, 5, -5] {
            let sticks = drive_turn(drive, 50);
            assert_eq!(curvature.shape(&sticks, false), arcade.shape(&sticks, false));
        }
    }

    #[test]
    fn curvature_damping_engages_above_drive_five() {
        let shaper = shaper(|config| {
            config.set_scheme(ControlScheme::Curvature);
            config.set_exponent(1.0).unwrap();
            config.set_turn_sensitivity(100).unwrap();
            config.set_deadzone(0).unwrap();
        });
        // Drive 6 damps a full turn by 1 - 6/200 = 0.97, truncating to 97.
        assert_eq!(shaper.shape(&drive_turn(6, 100), false), (100.0, -91.0));
    }

    #[test]
    fn curvature_halves_turn_at_full_drive() {
        let shaper = shaper(|config| {
            config.set_scheme(ControlScheme::Curvature);
            config.set_exponent(1.0).unwrap();
            config.set_turn_sensitivity(100).unwrap();
        });
        // Full drive damps a full turn to 50; left saturates at 100.
        assert_eq!(shaper.shape(&drive_turn(100, 100), false), (100.0, 50.0));
    }

    #[test]
    fn curvature_damping_scales_linearly() {
        let shaper = shaper(|config| {
            config.set_scheme(ControlScheme::Curvature);
            config.set_exponent(1.0).unwrap();
            config.set_turn_sensitivity(100).unwrap();
            config.set_deadzone(0).unwrap();
        });
        // Drive 40 gives a damping factor of 1 - 40/200 = 0.8.
        assert_eq!(shaper.shape(&drive_turn(40, 100), false), (100.0, -40.0));
    }

    #[test]
    fn outputs_stay_in_range_for_all_schemes() {
        let schemes = [
            ControlScheme::Arcade,
            ControlScheme::Tank,
            ControlScheme::SplitArcade,
            ControlScheme::Curvature,
            ControlScheme::SingleStick,
        ];
        let extremes = [-100, -50, 0, 50, 100];
        for scheme in schemes {
            let shaper = shaper(|config| {
                config.set_scheme(scheme);
                config.set_turn_sensitivity(200).unwrap();
            });
            for a in extremes {
                for b in extremes {
                    let sticks = StickState {
                        channels: [b, a, a, b],
                    };
                    for slow_turn in [false, true] {
                        let (left, right) = shaper.shape(&sticks, slow_turn);
                        assert!((-100.0..=100.0).contains(&left));
                        assert!((-100.0..=100.0).contains(&right));
                    }
                }
            }
        }
    }

    #[test]
    fn shape_is_deterministic() {
        let shaper = shaper(|config| {
            config.set_scheme(ControlScheme::Curvature);
        });
        let sticks = drive_turn(63, -41);
        assert_eq!(shaper.shape(&sticks, true), shaper.shape(&sticks, true));
    }

    #[test]
    fn constructor_rejects_out_of_range_values() {
        let bindings = AxisBindings::default();
        let build = |deadzone, exponent, turn, slow| {
            ShaperConfig::new(ControlScheme::Arcade, deadzone, exponent, turn, slow, bindings)
        };
        assert_eq!(
            build(-1, 2.0, 60, 50).unwrap_err(),
            ConfigError::Deadzone(-1)
        );
        assert_eq!(
            build(101, 2.0, 60, 50).unwrap_err(),
            ConfigError::Deadzone(101)
        );
        assert_eq!(
            build(10, 0.0, 60, 50).unwrap_err(),
            ConfigError::Exponent(0.0)
        );
        assert_eq!(
            build(10, -2.0, 60, 50).unwrap_err(),
            ConfigError::Exponent(-2.0)
        );
        assert!(build(10, f64::NAN, 60, 50).is_err());
        assert_eq!(
            build(10, 2.0, 201, 50).unwrap_err(),
            ConfigError::TurnSensitivity(201)
        );
        assert_eq!(
            build(10, 2.0, 60, -1).unwrap_err(),
            ConfigError::SlowTurnSensitivity(-1)
        );
        assert_eq!(
            build(10, 2.0, 60, 201).unwrap_err(),
            ConfigError::SlowTurnSensitivity(201)
        );
        assert!(build(0, 0.5, 200, 0).is_ok());
    }

    #[test]
    fn bindings_reject_out_of_range_channels() {
        assert_eq!(
            AxisBindings::new(0, 1, 3, 2).unwrap_err(),
            ConfigError::AxisChannel(0)
        );
        assert_eq!(
            AxisBindings::new(3, 5, 3, 2).unwrap_err(),
            ConfigError::AxisChannel(5)
        );
        assert!(AxisBindings::new(4, 1, 3, 2).is_ok());
    }

    #[test]
    fn unknown_channels_read_zero() {
        // The fail-safe contract: channels outside 1..=4 read 0 even while
        // real channels deflect, so a bad lookup leaves the robot neutral.
        let sticks = StickState {
            channels: [100, 100, 100, 100],
        };
        assert_eq!(sticks.axis_percent(0), 0);
        assert_eq!(sticks.axis_percent(5), 0);
        assert_eq!(sticks.axis_percent(u8::MAX), 0);
        assert_eq!(sticks.axis_percent(3), 100);
    }
}
