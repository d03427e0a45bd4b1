//! Joystick input handling for driver control periods.
//!
//! This module turns raw controller axis readings into left/right motor
//! power percentages through a configurable shaping pipeline.
//!
//! # Features
//!
//! - **Axis abstraction**: The [`AxisSource`](axes::AxisSource) trait reads
//!   percent values from axis channels 1-4, with a fail-safe zero for
//!   undefined channels.
//! - **Control schemes**: Arcade, tank, split-arcade, curvature, and
//!   single-stick mappings via [`ControlScheme`](shaper::ControlScheme).
//! - **Input shaping**: Deadzone, expo curve, and turn-sensitivity scaling
//!   via [`DriveShaper`](shaper::DriveShaper).
//!
//! # Example
//!
//! ```ignore
//! use talos::input::shaper::{ControlScheme, DriveShaper, ShaperConfig};
//!
//! let shaper = DriveShaper::new(ShaperConfig::default());
//!
//! // Once per control cycle:
//! let state = controller.state().unwrap_or_default();
//! let (left, right) = shaper.shape(&state, false);
//! ```

/// Axis channel reading abstraction.
///
/// Provides [`AxisSource`](axes::AxisSource) and its implementation for
/// Vexide controller state.
pub mod axes;

/// Joystick-to-motor input shaping.
///
/// Provides [`DriveShaper`](shaper::DriveShaper), its validated
/// [`ShaperConfig`](shaper::ShaperConfig), and the
/// [`ControlScheme`](shaper::ControlScheme) selector.
pub mod shaper;
