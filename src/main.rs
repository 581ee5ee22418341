use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;
use uom::si::electric_potential::volt;
use uom::si::f64::ElectricPotential;

use pmt_gain::controller::AoController;
use pmt_gain::controller::backend::ao_hardware::AoChannel;

/// Interactive check: hold 2.5 V on the gain channel until Enter is pressed
fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default tracing subscriber failed");

    #[cfg(feature = "nidaq")]
    let driver = pmt_gain::controller::backend::nidaq::Nidaq::try_new(AoChannel::default())?;
    #[cfg(not(feature = "nidaq"))]
    let driver = pmt_gain::controller::backend::sim::Sim::new(AoChannel::default());

    let mut controller = AoController::new(driver);
    info!("driving PMT gain on {}", controller.channel().path());

    controller.start()?;
    controller.set_voltage(ElectricPotential::new::<volt>(2.5))?;

    info!("gain voltage set to 2.5 V, press Enter to release");
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;

    controller.stop()?;
    controller.clear()?;

    Ok(())
}
