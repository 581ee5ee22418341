use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// One analog output channel on a DAQ device, addressed by its
/// physical path `"<device>/<channel>"`. Immutable once configured.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AoChannel {
    pub device: String,
    pub channel: String,
    /// Hardware output range in volts, inclusive on both ends
    pub min_volts: f64,
    pub max_volts: f64,
}

impl Default for AoChannel {
    fn default() -> Self {
        Self {
            device: "Dev1".to_owned(),
            channel: "ao0".to_owned(),
            min_volts: 0.0,
            max_volts: 5.0,
        }
    }
}

impl AoChannel {
    pub fn path(&self) -> String {
        format!("{}/{}", self.device, self.channel)
    }
}

/// Failure reported by the native driver layer. Not interpreted here,
/// only surfaced to the caller.
#[derive(Error, Debug)]
#[error("analog output driver: {0}")]
pub struct DriverError(pub String);

/// Driver primitives for a single configured analog output task.
///
/// Constructing a backend allocates the underlying task and registers
/// the voltage channel; the trait only covers operations on the live
/// task. `clear` releases the task, no other method may be called
/// after it succeeds.
pub trait AnalogOutput: Debug {
    fn channel(&self) -> &AoChannel;

    /// Write one scalar voltage, blocking up to `timeout` for completion
    fn write_scalar(&mut self, volts: f64, timeout: Duration) -> Result<(), DriverError>;

    fn start(&mut self) -> Result<(), DriverError>;

    fn stop(&mut self) -> Result<(), DriverError>;

    fn clear(&mut self) -> Result<(), DriverError>;
}
