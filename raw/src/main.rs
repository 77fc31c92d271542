//! Same blink with nothing between the code and the registers.
#![no_std]
#![no_main]

use core::ptr::{read_volatile, write_volatile};

use blink::{
    config::{HALF_PERIOD_MS, LED_MASK},
    BusyDelay, Countdown,
};
use embedded_hal::delay::DelayNs;
use panic_halt as _;

// data space addresses (I/O address + 0x20), ATmega328P datasheet ch. 36
const DDRC: *mut u8 = 0x27 as *mut u8;
const PORTC: *mut u8 = 0x28 as *mut u8;

#[avr_device::entry]
fn main() -> ! {
    let mut delay = BusyDelay::new(Countdown);
    unsafe {
        write_volatile(DDRC, read_volatile(DDRC) | LED_MASK);
    }

    loop {
        unsafe {
            write_volatile(PORTC, read_volatile(PORTC) & !LED_MASK);
        }
        delay.delay_ms(HALF_PERIOD_MS);
        unsafe {
            write_volatile(PORTC, read_volatile(PORTC) | LED_MASK);
        }
        delay.delay_ms(HALF_PERIOD_MS);
    }
}
