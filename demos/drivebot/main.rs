//! A minimal competition program: four-motor differential drive with
//! shaped arcade controls, running once every 20 ms during driver control.

use std::time::Duration;

use log::{LevelFilter, info, warn};
use talos::{
    drivetrain::Differential,
    fs::logger,
    input::shaper::{DriveShaper, ShaperConfig},
};
use vexide::{controller::ControllerState, prelude::*, smart::motor::BrakeMode};

/// Driver control loop period.
const LOOPRATE: u64 = 20;

struct Robot {
    drivetrain: Differential,
    controller: Controller,
    shaper:     DriveShaper,
}

impl Compete for Robot {
    async fn autonomous(&mut self) { info!("Autonomous Started (no routine)"); }

    async fn driver(&mut self) {
        info!("Driver Control Started");
        loop {
            let state = self.controller.state().unwrap_or_else(|e| {
                warn!("Controller State Error: {}", e);
                ControllerState::default()
            });

            // Holding L1 switches to the slow-turn sensitivity.
            let slow_turn = state.button_l1.is_pressed();
            let (left_power, right_power) = self.shaper.shape(&state, slow_turn);
            self.drivetrain.drive_percent(left_power, right_power);

            sleep(Duration::from_millis(LOOPRATE)).await;
        }
    }
}

#[vexide::main]
async fn main(peripherals: Peripherals) {
    logger::init(LevelFilter::Info).expect("Logger init failed");

    let drivetrain = Differential::new(
        [
            Motor::new(peripherals.port_1, Gearset::Green, Direction::Forward),
            Motor::new(peripherals.port_2, Gearset::Green, Direction::Forward),
        ],
        [
            Motor::new(peripherals.port_3, Gearset::Green, Direction::Reverse),
            Motor::new(peripherals.port_4, Gearset::Green, Direction::Reverse),
        ],
    );
    drivetrain.set_brakemode(BrakeMode::Brake);

    let robot = Robot {
        drivetrain,
        controller: peripherals.primary_controller,
        shaper: DriveShaper::new(ShaperConfig::default()),
    };

    robot.compete().await;
}
