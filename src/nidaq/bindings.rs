//! Hand-maintained subset of the NI-DAQmx ANSI C API (NIDAQmx.h),
//! limited to the task and analog-output calls this crate uses.
#![allow(non_camel_case_types, non_snake_case, non_upper_case_globals)]

use std::os::raw::{c_char, c_double, c_int, c_uint, c_void};

pub type TaskHandle = *mut c_void;
pub type bool32 = c_uint;

pub const DAQmx_Val_Volts: c_int = 10348;

unsafe extern "C" {
    pub fn DAQmxCreateTask(taskName: *const c_char, taskHandle: *mut TaskHandle) -> c_int;

    pub fn DAQmxCreateAOVoltageChan(
        taskHandle: TaskHandle,
        physicalChannel: *const c_char,
        nameToAssignToChannel: *const c_char,
        minVal: c_double,
        maxVal: c_double,
        units: c_int,
        customScaleName: *const c_char,
    ) -> c_int;

    pub fn DAQmxWriteAnalogScalarF64(
        taskHandle: TaskHandle,
        autoStart: bool32,
        timeout: c_double,
        value: c_double,
        reserved: *mut bool32,
    ) -> c_int;

    pub fn DAQmxStartTask(taskHandle: TaskHandle) -> c_int;

    pub fn DAQmxStopTask(taskHandle: TaskHandle) -> c_int;

    pub fn DAQmxClearTask(taskHandle: TaskHandle) -> c_int;

    pub fn DAQmxGetExtendedErrorInfo(errorString: *mut c_char, bufferSize: c_uint) -> c_int;
}
