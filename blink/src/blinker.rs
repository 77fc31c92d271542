use core::convert::Infallible;

use embedded_hal::{delay::DelayNs, digital::OutputPin};

use crate::{config::HALF_PERIOD_MS, Error, Level};

/// Drives one output pin through an endless low/high square wave.
///
/// The pin must already be an output; on the board that is enforced by the
/// pin type. The first edge always drives low, whatever the pin held before.
#[derive(Debug)]
pub struct Blinker<P, D> {
    pin: P,
    delay: D,
    next: Level,
    half_period_ms: u32,
}

impl<P, D> Blinker<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    /// Blinker holding each level for [`HALF_PERIOD_MS`].
    pub fn new(pin: P, delay: D) -> Self {
        Self::with_half_period(pin, delay, HALF_PERIOD_MS)
    }

    pub fn with_half_period(pin: P, delay: D, half_period_ms: u32) -> Self {
        Self {
            pin,
            delay,
            next: Level::Low,
            half_period_ms,
        }
    }

    /// Level the next edge will drive.
    pub fn next_level(&self) -> Level {
        self.next
    }

    /// Drive one edge and hold it for the half period.
    pub fn step(&mut self) -> Result<Level, Error<P::Error>> {
        let level = self.drive()?;
        self.hold();
        Ok(level)
    }

    /// Blink forever, calling `on_edge` right after each edge is driven.
    ///
    /// Only returns if the pin reports an error.
    pub fn run<F>(mut self, mut on_edge: F) -> Result<Infallible, Error<P::Error>>
    where
        F: FnMut(Level),
    {
        loop {
            let level = self.drive()?;
            on_edge(level);
            self.hold();
        }
    }

    pub fn release(self) -> (P, D) {
        (self.pin, self.delay)
    }

    fn drive(&mut self) -> Result<Level, Error<P::Error>> {
        let level = self.next;
        self.pin.set_state(level.into()).map_err(Error::Pin)?;
        self.next = level.toggled();
        Ok(level)
    }

    fn hold(&mut self) {
        self.delay.delay_ms(self.half_period_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::digital::ErrorType;

    #[derive(Default)]
    struct RecordingPin {
        writes: Vec<Level>,
    }

    impl ErrorType for RecordingPin {
        type Error = Infallible;
    }

    impl OutputPin for RecordingPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.writes.push(Level::Low);
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.writes.push(Level::High);
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingDelay {
        waits_ms: Vec<u32>,
    }

    impl DelayNs for RecordingDelay {
        fn delay_ns(&mut self, _ns: u32) {
            panic!("blinker only waits in milliseconds");
        }

        fn delay_ms(&mut self, ms: u32) {
            self.waits_ms.push(ms);
        }
    }

    #[test]
    fn first_edge_is_low() {
        let mut blinker = Blinker::new(RecordingPin::default(), RecordingDelay::default());
        assert_eq!(blinker.next_level(), Level::Low);
        assert_eq!(blinker.step(), Ok(Level::Low));
        assert_eq!(blinker.next_level(), Level::High);
    }

    #[test]
    fn steps_alternate_and_hold_half_period() {
        let mut blinker = Blinker::new(RecordingPin::default(), RecordingDelay::default());
        for _ in 0..6 {
            blinker.step().unwrap();
        }
        let (pin, delay) = blinker.release();
        assert_eq!(
            pin.writes,
            [
                Level::Low,
                Level::High,
                Level::Low,
                Level::High,
                Level::Low,
                Level::High
            ]
        );
        assert!(pin.writes.windows(2).all(|w| w[0] != w[1]));
        assert_eq!(delay.waits_ms, [500; 6]);
    }

    #[test]
    fn custom_half_period() {
        let mut blinker =
            Blinker::with_half_period(RecordingPin::default(), RecordingDelay::default(), 100);
        blinker.step().unwrap();
        let (_, delay) = blinker.release();
        assert_eq!(delay.waits_ms, [100]);
    }
}
