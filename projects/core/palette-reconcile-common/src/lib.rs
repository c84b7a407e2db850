#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![warn(missing_docs)]

pub mod cpu_detect;
pub mod hsv;
pub mod pal_entry;
