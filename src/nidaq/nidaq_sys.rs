use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use chrono::Duration;
use thiserror::Error;
use tracing::{error, info, warn};

use super::bindings::*;

#[derive(Error, Debug)]
#[error("{0}")]
pub struct NidaqError(pub String);

/// Safety wrapper for the NIDAQ TaskHandle. The handle is valid from
/// `new` until `clear`; after a successful clear it is nulled out so
/// Drop does not release it a second time.
#[derive(Debug)]
pub struct Task {
    handle: TaskHandle,
}

unsafe impl Send for Task {}

impl Task {
    pub fn new(name: &str) -> Result<Self, NidaqError> {
        info!("nidaq: creating task {name}");
        let c_name = CString::new(name).map_err(|err| NidaqError(err.to_string()))?;

        let mut handle = ptr::null_mut();
        unsafe {
            check_err(DAQmxCreateTask(c_name.as_ptr(), &mut handle))?;
        }

        Ok(Self { handle })
    }

    pub fn add_ao_voltage_chan(
        &mut self,
        physical_channel: &str,
        min: f64,
        max: f64,
    ) -> Result<(), NidaqError> {
        info!("nidaq: adding analog output channel {physical_channel} with range [{min}, {max}] V");
        let c_channel =
            CString::new(physical_channel).map_err(|err| NidaqError(err.to_string()))?;

        unsafe {
            check_err(DAQmxCreateAOVoltageChan(
                self.handle,
                c_channel.as_ptr(),
                ptr::null(),
                min,
                max,
                DAQmx_Val_Volts,
                ptr::null(),
            ))?;
        }

        Ok(())
    }

    /// Write one sample, blocking up to `timeout` for the write to complete
    pub fn write_analog_scalar(
        &mut self,
        value: f64,
        timeout: Duration,
        autostart: bool,
    ) -> Result<(), NidaqError> {
        unsafe {
            check_err(DAQmxWriteAnalogScalarF64(
                self.handle,
                autostart as bool32,
                timeout.as_seconds_f64(),
                value,
                ptr::null_mut(),
            ))?;
        }

        Ok(())
    }

    pub fn start(&mut self) -> Result<(), NidaqError> {
        unsafe { check_err(DAQmxStartTask(self.handle)) }
    }

    pub fn stop(&mut self) -> Result<(), NidaqError> {
        unsafe { check_err(DAQmxStopTask(self.handle)) }
    }

    /// Release the task. Safe to call at most once; the nulled handle
    /// makes the Drop release a no-op afterwards.
    pub fn clear(&mut self) -> Result<(), NidaqError> {
        if self.handle.is_null() {
            return Err(NidaqError("task has already been cleared".to_owned()));
        }

        let err = unsafe { DAQmxClearTask(self.handle) };
        self.handle = ptr::null_mut();
        check_err(err)
    }
}

impl Drop for Task {
    fn drop(&mut self) {
        if !self.handle.is_null() {
            unsafe {
                DAQmxClearTask(self.handle);
            }
        }
    }
}

fn check_err(err: i32) -> Result<(), NidaqError> {
    if err != 0 {
        // Fetch latest error information from the driver
        let mut buf = [0 as c_char; 2048];
        unsafe {
            DAQmxGetExtendedErrorInfo(buf.as_mut_ptr(), buf.len() as u32);
        }
        let c_str = unsafe { CStr::from_ptr(buf.as_ptr()) };

        if err < 0 {
            error!("{}", c_str.to_string_lossy());
            return Err(NidaqError(c_str.to_string_lossy().into_owned()));
        }
        warn!(
            "nidaq returns warning code: {err} -> {}",
            c_str.to_string_lossy()
        );
    }
    Ok(())
}
