pub mod ao_hardware;

#[cfg(feature = "sim")]
pub mod sim;

#[cfg(feature = "nidaq")]
pub mod nidaq;
