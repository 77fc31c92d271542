use core::fmt;

use ufmt::{uDisplay, uWrite, Formatter};

/// Blinker error, generic over the pin's own error type.
///
/// AVR port pins cannot fail, so on the board `E` is `Infallible` and this
/// type is uninhabited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error<E> {
    /// Driving the LED pin failed.
    Pin(E),
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Pin(e) => write!(f, "pin write failed: {:?}", e),
        }
    }
}

impl<E> uDisplay for Error<E> {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        match self {
            Error::Pin(_) => f.write_str("pin write failed"),
        }
    }
}
