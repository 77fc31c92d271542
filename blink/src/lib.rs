//! LED blinker for 8-bit AVR boards.
//!
//! Target independent half of the firmware: the low/high sequencing, the
//! busy-wait calibration and the board constants. The `blinky` and `raw`
//! crates put it on the ATmega328P.

#![cfg_attr(not(test), no_std)]
#![cfg_attr(target_arch = "avr", feature(asm_experimental_arch))]

pub mod blinker;
pub mod config;
pub mod delay;
mod error;
mod level;

pub use blinker::Blinker;
#[cfg(target_arch = "avr")]
pub use delay::Countdown;
pub use delay::{BusyDelay, Spin};
pub use error::Error;
pub use level::Level;
