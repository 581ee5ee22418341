use chrono::Duration;

use crate::controller::backend::ao_hardware::{AnalogOutput, AoChannel, DriverError};
use crate::nidaq::nidaq_sys::{NidaqError, Task};

/// NI-DAQmx backend driving one physical analog output channel.
#[derive(Debug)]
pub struct Nidaq {
    channel: AoChannel,
    task: Task,
}

impl Nidaq {
    /// Allocate the DAQmx task and register the voltage channel.
    /// On error the half-built task is released by its own Drop.
    pub fn try_new(channel: AoChannel) -> Result<Self, DriverError> {
        let mut task = Task::new("pmt_gain_ao")?;
        task.add_ao_voltage_chan(&channel.path(), channel.min_volts, channel.max_volts)?;
        Ok(Self { channel, task })
    }
}

impl AnalogOutput for Nidaq {
    fn channel(&self) -> &AoChannel {
        &self.channel
    }

    fn write_scalar(&mut self, volts: f64, timeout: Duration) -> Result<(), DriverError> {
        // Autostart lets the write go through without an explicit start,
        // matching how the device treats on-demand scalar output
        Ok(self.task.write_analog_scalar(volts, timeout, true)?)
    }

    fn start(&mut self) -> Result<(), DriverError> {
        Ok(self.task.start()?)
    }

    fn stop(&mut self) -> Result<(), DriverError> {
        Ok(self.task.stop()?)
    }

    fn clear(&mut self) -> Result<(), DriverError> {
        Ok(self.task.clear()?)
    }
}

impl From<NidaqError> for DriverError {
    fn from(value: NidaqError) -> Self {
        DriverError(value.0)
    }
}
