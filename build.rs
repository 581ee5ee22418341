fn main() {
    // The NI-DAQmx import library is only needed for the hardware backend
    if std::env::var_os("CARGO_FEATURE_NIDAQ").is_some() {
        if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
            println!("cargo:rustc-link-lib=NIDAQmx");
            println!(
                "cargo:rustc-link-search=native=C:/Program Files (x86)/National Instruments/NI-DAQ/DAQmx ANSI C Dev/lib/msvc"
            );
        } else {
            println!("cargo:rustc-link-lib=nidaqmx");
        }
    }
}
