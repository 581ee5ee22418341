pub mod bindings;
pub mod nidaq_sys;
