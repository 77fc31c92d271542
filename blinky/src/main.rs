#![no_std]
#![no_main]

mod led;
mod serial;

use avr_device::atmega328p::Peripherals;
use blink::{Blinker, BusyDelay, Countdown, Error, Level};
use embedded_hal::digital::StatefulOutputPin;
use panic_halt as _;
use ufmt::uwriteln;

use crate::{led::Led, serial::Serial};

#[avr_device::entry]
fn main() -> ! {
    let dp = Peripherals::take().expect("Failed to take ownership of peripherals");
    let mut serial = Serial::new(dp.USART0);

    let mut led = Led::into_output(dp.PORTC);
    let Ok(level) = led.is_set_high().map(Level::from);
    uwriteln!(serial, "init done, led: {}, entering loop", level).ok();

    let blinker = Blinker::new(led, BusyDelay::new(Countdown));
    let result = blinker.run(|level| {
        if cfg!(feature = "trace") {
            uwriteln!(serial, "led: {}", level).ok();
        }
    });
    match result {
        Ok(never) | Err(Error::Pin(never)) => match never {},
    }
}
