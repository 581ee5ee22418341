use chrono::Duration;
use thiserror::Error;
use tracing::error;
use uom::si::electric_potential::volt;
use uom::si::f64::ElectricPotential;

pub mod backend;

use backend::ao_hardware::{AnalogOutput, AoChannel, DriverError};

/// Blocking wait for a scalar write to reach the device
const WRITE_TIMEOUT: Duration = Duration::seconds(10);

#[derive(Error, Debug)]
pub enum ControllerError {
    #[error("voltage out of range: {volts} V is not within [{min}, {max}] V")]
    VoltageOutOfRange { volts: f64, min: f64, max: f64 },

    #[error(transparent)]
    Driver(#[from] DriverError),
}

/// Owns one configured analog output task and mediates voltage writes.
///
/// Commanded voltages are validated against the channel range before
/// anything reaches the driver; everything else is a pass-through, the
/// driver decides what start/stop ordering it tolerates. The task is
/// released exactly once: either by the consuming [`clear`], or by Drop
/// on whatever path exits the scope.
///
/// [`clear`]: AoController::clear
#[derive(Debug)]
pub struct AoController<D: AnalogOutput> {
    driver: Option<D>,
}

impl<D: AnalogOutput> AoController<D> {
    pub fn new(driver: D) -> Self {
        Self {
            driver: Some(driver),
        }
    }

    pub fn channel(&self) -> &AoChannel {
        self.driver().channel()
    }

    pub fn driver(&self) -> &D {
        self.driver.as_ref().expect("driver present until clear")
    }

    fn driver_mut(&mut self) -> &mut D {
        self.driver.as_mut().expect("driver present until clear")
    }

    /// Command a one-shot voltage on the output channel. Rejects values
    /// outside the channel range without touching the driver.
    pub fn set_voltage(&mut self, voltage: ElectricPotential) -> Result<(), ControllerError> {
        let volts = voltage.get::<volt>();
        let channel = self.driver().channel();
        let (min_volts, max_volts) = (channel.min_volts, channel.max_volts);

        if !(min_volts..=max_volts).contains(&volts) {
            return Err(ControllerError::VoltageOutOfRange {
                volts,
                min: min_volts,
                max: max_volts,
            });
        }

        Ok(self.driver_mut().write_scalar(volts, WRITE_TIMEOUT)?)
    }

    /// Arm the task for output
    pub fn start(&mut self) -> Result<(), ControllerError> {
        Ok(self.driver_mut().start()?)
    }

    pub fn stop(&mut self) -> Result<(), ControllerError> {
        Ok(self.driver_mut().stop()?)
    }

    /// Release the task. Consumes the controller, so a second clear is
    /// unrepresentable and the Drop release is skipped.
    pub fn clear(mut self) -> Result<(), ControllerError> {
        let mut driver = self.driver.take().expect("driver present until clear");
        Ok(driver.clear()?)
    }
}

impl<D: AnalogOutput> Drop for AoController<D> {
    fn drop(&mut self) {
        if let Some(mut driver) = self.driver.take() {
            if let Err(err) = driver.clear() {
                error!("failed to clear analog output task on drop: {err}");
            }
        }
    }
}
