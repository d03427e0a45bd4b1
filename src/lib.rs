//! # Talos
//!
//! Talos is a driver-control library for VEX V5 robots built on top of
//! [Vexide](https://vexide.dev). It maps raw joystick input to differential
//! drivetrain output through a configurable shaping pipeline:
//!
//! - **Control Schemes**: Arcade, tank, split-arcade, curvature, and
//!   single-stick joystick-to-drivetrain mappings.
//! - **Input Shaping**: Deadzone suppression, exponential response curves,
//!   and turn-sensitivity scaling with a slow-turn modifier.
//! - **Drivetrain Control**: A differential drivetrain wrapper that forwards
//!   shaped percentages to left/right motor groups.
//! - **Logging**: A file-based logger for debugging and telemetry.
//!
//! ## Quick Start
//!
//! ```ignore
//! use talos::drivetrain::Differential;
//! use talos::input::shaper::{DriveShaper, ShaperConfig};
//! use vexide::prelude::*;
//!
//! #[vexide::main]
//! async fn main(peripherals: Peripherals) {
//!     let drivetrain = Differential::new(
//!         [
//!             Motor::new(peripherals.port_1, Gearset::Green, Direction::Forward),
//!             Motor::new(peripherals.port_2, Gearset::Green, Direction::Forward),
//!         ],
//!         [
//!             Motor::new(peripherals.port_3, Gearset::Green, Direction::Reverse),
//!             Motor::new(peripherals.port_4, Gearset::Green, Direction::Reverse),
//!         ],
//!     );
//!
//!     let controller = Controller::new(ControllerId::Primary);
//!     let shaper = DriveShaper::new(ShaperConfig::default());
//!     loop {
//!         drivetrain.shaped(&shaper, &controller, false);
//!         sleep(Duration::from_millis(20)).await;
//!     }
//! }
//! ```
//!
//! ## Modules
//!
//! - [`input`]: Axis reading and joystick-to-motor input shaping.
//! - [`drivetrain`]: Differential drivetrain control.
//! - [`fs`]: Filesystem utilities including logging.

/// Differential drivetrain control module.
///
/// Provides the [`Differential`](drivetrain::Differential) struct for
/// controlling robots with left and right motor groups. Shaped percent
/// outputs from the [`input`] module are converted to motor voltages here.
pub mod drivetrain;

/// Filesystem utilities module.
///
/// Contains logging functionality for recording robot telemetry and debug
/// information to files on the V5 Brain's SD card.
pub mod fs;

/// Joystick input module.
///
/// Provides the [`AxisSource`](input::axes::AxisSource) abstraction over
/// controller axis channels and the [`DriveShaper`](input::shaper::DriveShaper)
/// that turns axis readings into left/right motor power percentages:
///
/// - **Deadzone**: Small inputs near center are forced to zero.
/// - **Expo Curve**: A power-law curve for fine control near center stick.
/// - **Turn Sensitivity**: Scales turn authority, with a slow-turn variant.
pub mod input;
