use core::convert::Infallible;

use avr_device::atmega328p::PORTC;
use blink::config::LED_MASK;
use embedded_hal::digital::{ErrorType, OutputPin, StatefulOutputPin};

/// The LED on PC2, configured as an output.
///
/// Owns port C, so nothing else can touch the line.
pub struct Led {
    port: PORTC,
}

impl Led {
    pub fn into_output(port: PORTC) -> Self {
        port.ddrc.modify(|r, w| unsafe { w.bits(r.bits() | LED_MASK) });
        Led { port }
    }
}

impl ErrorType for Led {
    type Error = Infallible;
}

impl OutputPin for Led {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.port
            .portc
            .modify(|r, w| unsafe { w.bits(r.bits() & !LED_MASK) });
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.port
            .portc
            .modify(|r, w| unsafe { w.bits(r.bits() | LED_MASK) });
        Ok(())
    }
}

impl StatefulOutputPin for Led {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.port.portc.read().bits() & LED_MASK != 0)
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        self.is_set_high().map(|high| !high)
    }
}
