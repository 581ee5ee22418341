#![cfg(feature = "sim")]

use uom::si::electric_potential::volt;
use uom::si::f64::ElectricPotential;

use pmt_gain::controller::backend::ao_hardware::AoChannel;
use pmt_gain::controller::backend::sim::Sim;
use pmt_gain::controller::{AoController, ControllerError};

fn volts(value: f64) -> ElectricPotential {
    ElectricPotential::new::<volt>(value)
}

#[test]
fn full_cycle_on_the_sim_backend() {
    let mut controller = AoController::new(Sim::new(AoChannel::default()));

    controller.start().unwrap();
    controller.set_voltage(volts(2.5)).unwrap();
    assert_eq!(controller.driver().last_volts(), Some(2.5));

    controller.stop().unwrap();
    controller.clear().unwrap();
}

#[test]
fn rejected_voltage_never_reaches_the_backend() {
    let mut controller = AoController::new(Sim::new(AoChannel::default()));

    let err = controller.set_voltage(volts(7.3)).unwrap_err();
    assert!(matches!(err, ControllerError::VoltageOutOfRange { .. }));
    assert_eq!(controller.driver().last_volts(), None);
}

#[test]
fn wider_channel_range_widens_validation() {
    let channel = AoChannel {
        min_volts: -10.0,
        max_volts: 10.0,
        ..Default::default()
    };
    let mut controller = AoController::new(Sim::new(channel));

    controller.set_voltage(volts(-7.5)).unwrap();
    assert_eq!(controller.driver().last_volts(), Some(-7.5));
}
