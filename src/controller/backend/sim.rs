use chrono::Duration;
use tracing::info;

use crate::controller::backend::ao_hardware::{AnalogOutput, AoChannel, DriverError};

/// Simulated analog output, stands in for the NI-DAQmx backend when no
/// hardware is attached. Remembers the last commanded voltage so tests
/// can observe what reached the "device".
#[derive(Debug)]
pub struct Sim {
    channel: AoChannel,
    last_volts: Option<f64>,
    cleared: bool,
}

impl Sim {
    pub fn new(channel: AoChannel) -> Self {
        info!("sim: configuring analog output channel {}", channel.path());
        Self {
            channel,
            last_volts: None,
            cleared: false,
        }
    }

    pub fn last_volts(&self) -> Option<f64> {
        self.last_volts
    }

    fn check_live(&self) -> Result<(), DriverError> {
        if self.cleared {
            return Err(DriverError(format!(
                "task on {} has already been cleared",
                self.channel.path()
            )));
        }
        Ok(())
    }
}

impl AnalogOutput for Sim {
    fn channel(&self) -> &AoChannel {
        &self.channel
    }

    fn write_scalar(&mut self, volts: f64, timeout: Duration) -> Result<(), DriverError> {
        self.check_live()?;
        info!(
            "sim: writing {volts} V to {} (timeout {timeout})",
            self.channel.path()
        );
        self.last_volts = Some(volts);
        Ok(())
    }

    fn start(&mut self) -> Result<(), DriverError> {
        self.check_live()?;
        info!("sim: starting task on {}", self.channel.path());
        Ok(())
    }

    fn stop(&mut self) -> Result<(), DriverError> {
        self.check_live()?;
        info!("sim: stopping task on {}", self.channel.path());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), DriverError> {
        self.check_live()?;
        info!("sim: clearing task on {}", self.channel.path());
        self.cleared = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_records_last_voltage() {
        let mut sim = Sim::new(AoChannel::default());
        sim.write_scalar(1.25, Duration::seconds(10)).unwrap();
        assert_eq!(sim.last_volts(), Some(1.25));
    }

    #[test]
    fn second_clear_reports_driver_error() {
        let mut sim = Sim::new(AoChannel::default());
        sim.clear().unwrap();
        assert!(sim.clear().is_err());
    }

    #[test]
    fn write_after_clear_reports_driver_error() {
        let mut sim = Sim::new(AoChannel::default());
        sim.clear().unwrap();
        assert!(sim.write_scalar(1.0, Duration::seconds(10)).is_err());
        assert_eq!(sim.last_volts(), None);
    }
}
