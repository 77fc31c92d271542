use core::convert::Infallible;

use avr_device::atmega328p::USART0;
use blink::config::{ubrr_double_speed, BAUD, F_CPU};
use ufmt::uWrite;

/// Transmit-only log port on USART0 (TX on PD1), 8N1.
pub struct Serial {
    usart: USART0,
}

impl Serial {
    pub fn new(usart: USART0) -> Self {
        usart.ubrr0.write(|w| w.bits(ubrr_double_speed(F_CPU, BAUD)));
        usart.ucsr0a.write(|w| w.u2x0().set_bit());
        usart.ucsr0b.write(|w| w.txen0().set_bit());
        usart.ucsr0c.write(|w| {
            w.umsel0()
                .usart_async()
                .ucsz0()
                .chr8()
                .usbs0()
                .stop1()
                .upm0()
                .disabled()
        });
        Serial { usart }
    }

    fn write_byte(&mut self, byte: u8) {
        while self.usart.ucsr0a.read().udre0().bit_is_clear() {}
        self.usart.udr0.write(|w| w.bits(byte));
    }
}

impl uWrite for Serial {
    type Error = Infallible;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        for byte in s.bytes() {
            if byte == b'\n' {
                self.write_byte(b'\r');
            }
            self.write_byte(byte);
        }
        Ok(())
    }
}
