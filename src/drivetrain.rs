//! Differential drivetrain control.
//!
//! This module provides the `Differential` struct for controlling robots with
//! separate left and right motor groups, commonly known as a "tank drive" or
//! "differential drive" configuration.
//!
//! Shaped power percentages from [`input::shaper`](crate::input::shaper) are
//! converted to motor voltages here; the control scheme itself (tank, arcade,
//! curvature, ...) is selected on the shaper, not the drivetrain.
//!
//! # Example
//!
//! ```ignore
//! use talos::drivetrain::Differential;
//! use talos::input::shaper::{DriveShaper, ShaperConfig};
//! use vexide::prelude::*;
//!
//! let drivetrain = Differential::new(
//!     [
//!         Motor::new(peripherals.port_1, Gearset::Green, Direction::Forward),
//!         Motor::new(peripherals.port_2, Gearset::Green, Direction::Forward),
//!     ],
//!     [
//!         Motor::new(peripherals.port_3, Gearset::Green, Direction::Reverse),
//!         Motor::new(peripherals.port_4, Gearset::Green, Direction::Reverse),
//!     ],
//! );
//!
//! // In your control loop:
//! let controller = Controller::new(ControllerId::Primary);
//! let shaper = DriveShaper::new(ShaperConfig::default());
//! drivetrain.shaped(&shaper, &controller, false);
//! ```

use std::{cell::RefCell, rc::Rc};

use log::warn;
use vexide::{
    controller::ControllerState,
    prelude::{Controller, Motor},
    smart::motor::BrakeMode,
};

use crate::input::shaper::DriveShaper;

/// Volts applied per percent of power, mapping 100% to the 12 V maximum.
const VOLTS_PER_PERCENT: f64 = 12.0 / 100.0;

/// A differential drivetrain controller.
///
/// This struct manages a robot with separate left and right motor groups.
/// It accepts shaped power percentages during driver control and provides
/// brake-mode configuration for match setup.
///
/// The motors are stored in reference-counted cells to allow shared ownership
/// with other systems.
///
/// # Motor Configuration
///
/// Motors on opposite sides of the drivetrain typically need to spin in
/// opposite directions to move the robot forward. Configure motor directions
/// appropriately when creating the motors.
#[derive(Clone)]
pub struct Differential {
    /// The left motor group.
    ///
    /// Contains all motors on the left side of the drivetrain.
    /// These motors should be configured to spin in the same direction
    /// relative to each other.
    pub left: Rc<RefCell<dyn AsMut<[Motor]>>>,

    /// The right motor group.
    ///
    /// Contains all motors on the right side of the drivetrain.
    /// These motors should be configured to spin in the same direction
    /// relative to each other (typically opposite to the left side for
    /// forward movement).
    pub right: Rc<RefCell<dyn AsMut<[Motor]>>>,
}

impl Differential {
    /// Creates a new drivetrain with the provided left/right motors.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let drivetrain = Differential::new(
    ///     [
    ///         Motor::new(peripherals.port_1, Gearset::Green, Direction::Forward),
    ///         Motor::new(peripherals.port_2, Gearset::Green, Direction::Forward),
    ///     ],
    ///     [
    ///         Motor::new(peripherals.port_3, Gearset::Green, Direction::Reverse),
    ///         Motor::new(peripherals.port_4, Gearset::Green, Direction::Reverse),
    ///     ],
    /// );
    /// ```
    pub fn new<L: AsMut<[Motor]> + 'static, R: AsMut<[Motor]> + 'static>(
        left: L,
        right: R,
    ) -> Self {
        Self {
            left:  Rc::new(RefCell::new(left)),
            right: Rc::new(RefCell::new(right)),
        }
    }

    /// Creates a new drivetrain with shared ownership of the left/right
    /// motors.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// use std::{cell::RefCell, rc::Rc};
    ///
    /// let drivetrain = Differential::from_shared(
    ///     Rc::new(RefCell::new([
    ///         Motor::new(peripherals.port_1, Gearset::Green, Direction::Forward),
    ///     ])),
    ///     Rc::new(RefCell::new([
    ///         Motor::new(peripherals.port_3, Gearset::Green, Direction::Reverse),
    ///     ])),
    /// );
    /// ```
    pub fn from_shared<L: AsMut<[Motor]> + 'static, R: AsMut<[Motor]> + 'static>(
        left: Rc<RefCell<L>>,
        right: Rc<RefCell<R>>,
    ) -> Self {
        Self { left, right }
    }

    /// Applies left/right power percentages to the motor groups.
    ///
    /// Each percentage is expected in `[-100, 100]` (the shaper guarantees
    /// this) and is scaled to the motor's ±12 V range. If a motor group is
    /// currently borrowed elsewhere, that side is skipped and a warning is
    /// logged.
    ///
    /// # Example
    ///
    /// ```ignore
    /// // Half power forward on both sides.
    /// drivetrain.drive_percent(50.0, 50.0);
    /// ```
    pub fn drive_percent(&self, left_percent: f64, right_percent: f64) {
        let left_voltage = left_percent * VOLTS_PER_PERCENT;
        let right_voltage = right_percent * VOLTS_PER_PERCENT;

        if let Ok(mut left_motors) = self.left.try_borrow_mut() {
            for motor in left_motors.as_mut() {
                let _ = motor.set_voltage(left_voltage);
            }
        } else {
            warn!("Error Borrowing Left Motors");
        }

        if let Ok(mut right_motors) = self.right.try_borrow_mut() {
            for motor in right_motors.as_mut() {
                let _ = motor.set_voltage(right_voltage);
            }
        } else {
            warn!("Error Borrowing Right Motors");
        }
    }

    /// Drives the robot from controller input shaped by the given shaper.
    ///
    /// Reads the current controller state, maps it to left/right power
    /// through the shaper's control scheme, and forwards the result to the
    /// motors. If reading the controller state fails, zeroed inputs are used
    /// (no movement) and a warning is logged.
    ///
    /// Call once per iteration of the driver control loop.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let shaper = DriveShaper::new(ShaperConfig::default());
    /// loop {
    ///     let slow_turn = controller.state().unwrap_or_default().button_l1.is_pressed();
    ///     drivetrain.shaped(&shaper, &controller, slow_turn);
    ///     sleep(Duration::from_millis(20)).await;
    /// }
    /// ```
    pub fn shaped(&self, shaper: &DriveShaper, controller: &Controller, slow_turn: bool) {
        let state = controller.state().unwrap_or_else(|e| {
            warn!("Controller State Error: {}", e);
            ControllerState::default()
        });

        let (left_power, right_power) = shaper.shape(&state, slow_turn);
        self.drive_percent(left_power, right_power);
    }

    /// Sets the brake mode for all motors in the drivetrain.
    ///
    /// The brake mode determines how motors behave when no voltage is applied:
    ///
    /// - [`BrakeMode::Coast`]: Motors spin freely.
    /// - [`BrakeMode::Brake`]: Motors actively resist rotation.
    /// - [`BrakeMode::Hold`]: Motors actively hold their position.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use vexide::smart::motor::BrakeMode;
    ///
    /// // Set motors to brake mode for better control
    /// drivetrain.set_brakemode(BrakeMode::Brake);
    /// ```
    pub fn set_brakemode(&self, brakemode: BrakeMode) {
        let left = self.left.try_borrow_mut();
        let right = self.right.try_borrow_mut();

        if let Ok(mut motors) = left {
            for motor in motors.as_mut() {
                let _ = motor.brake(brakemode);
            }
        }
        if let Ok(mut motors) = right {
            for motor in motors.as_mut() {
                let _ = motor.brake(brakemode);
            }
        }
    }
}
