//! Compile-time board configuration.
//!
//! The board is an ATmega328P with the LED wired to port C, bit 2. The
//! core clock is not measured anywhere, it is asserted here and every delay
//! is calibrated against it. Pick a different clock with the `clock-8mhz`
//! or `clock-16mhz` features.

/// Bit of port C driving the LED (`PC2`).
pub const LED_PIN: u8 = 2;

/// `LED_PIN` as a register mask.
pub const LED_MASK: u8 = 1 << LED_PIN;

/// Time each level is held before the next edge.
pub const HALF_PERIOD_MS: u32 = 500;

/// Core clock in Hz.
#[cfg(feature = "clock-16mhz")]
pub const F_CPU: u32 = 16_000_000;
#[cfg(all(feature = "clock-8mhz", not(feature = "clock-16mhz")))]
pub const F_CPU: u32 = 8_000_000;
// factory fuses: internal 8 MHz RC divided by 8
#[cfg(not(any(feature = "clock-8mhz", feature = "clock-16mhz")))]
pub const F_CPU: u32 = 1_000_000;

/// Log output baud rate.
pub const BAUD: u32 = 9600;

/// `UBRRn` divisor for `baud` with the USART in double speed mode (`U2Xn`).
///
/// Rounds to the nearest divisor. At 1 MHz and 9600 baud this gives 12,
/// a 0.2% error; normal speed would be off by 7%.
pub const fn ubrr_double_speed(f_cpu: u32, baud: u32) -> u16 {
    let div = 8 * baud;
    ((f_cpu + div / 2) / div - 1) as u16
}
