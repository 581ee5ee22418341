pub mod controller;

#[cfg(feature = "nidaq")]
pub mod nidaq;
