//! Calibrated busy-wait delays.
//!
//! Time is measured in iterations of a two-instruction countdown loop
//! (`sbiw` + `brne`), the same loop avr-libc's `_delay_loop_2` uses. One
//! iteration is [`CYCLES_PER_ITERATION`] core cycles, so the wait is only as
//! accurate as [`F_CPU`](crate::config::F_CPU).

use embedded_hal::delay::DelayNs;

use crate::config::F_CPU;

/// Core cycles burnt by one iteration of the countdown loop.
pub const CYCLES_PER_ITERATION: u32 = 4;

/// Loop iterations needed for one millisecond at `f_cpu` Hz, rounded up.
pub const fn iterations_per_ms(f_cpu: u32) -> u16 {
    let iterations = (f_cpu / 1000).div_ceil(CYCLES_PER_ITERATION);
    assert!(
        iterations <= u16::MAX as u32,
        "core clock too fast for a 16-bit millisecond loop"
    );
    iterations as u16
}

/// Something that blocks the CPU for a number of countdown iterations.
pub trait Spin {
    /// Burn `iterations * CYCLES_PER_ITERATION` cycles. Zero returns at once.
    fn spin(&mut self, iterations: u16);
}

impl<S: Spin + ?Sized> Spin for &mut S {
    fn spin(&mut self, iterations: u16) {
        (**self).spin(iterations)
    }
}

/// [`DelayNs`] on top of a [`Spin`] loop calibrated for a fixed clock.
///
/// Waits never come out shorter than requested; sub-iteration remainders
/// round up.
#[derive(Debug)]
pub struct BusyDelay<S> {
    spin: S,
    f_cpu: u32,
    per_ms: u16,
}

impl<S> BusyDelay<S> {
    /// Delay calibrated for the configured [`F_CPU`].
    pub const fn new(spin: S) -> Self {
        Self::with_clock(spin, F_CPU)
    }

    pub const fn with_clock(spin: S, f_cpu: u32) -> Self {
        Self {
            spin,
            f_cpu,
            per_ms: iterations_per_ms(f_cpu),
        }
    }

    pub fn release(self) -> S {
        self.spin
    }
}

impl<S: Spin> BusyDelay<S> {
    fn spin_for(&mut self, mut iterations: u64) {
        while iterations > 0 {
            let chunk = iterations.min(u16::MAX as u64) as u16;
            self.spin.spin(chunk);
            iterations -= chunk as u64;
        }
    }

    fn iterations_for(&self, amount: u32, units_per_second: u64) -> u64 {
        let cycles = (amount as u64 * self.f_cpu as u64).div_ceil(units_per_second);
        cycles.div_ceil(CYCLES_PER_ITERATION as u64)
    }
}

impl<S: Spin> DelayNs for BusyDelay<S> {
    fn delay_ns(&mut self, ns: u32) {
        let iterations = self.iterations_for(ns, 1_000_000_000);
        self.spin_for(iterations);
    }

    fn delay_us(&mut self, us: u32) {
        let iterations = self.iterations_for(us, 1_000_000);
        self.spin_for(iterations);
    }

    fn delay_ms(&mut self, ms: u32) {
        for _ in 0..ms {
            self.spin.spin(self.per_ms);
        }
    }
}

/// The countdown loop itself.
#[cfg(target_arch = "avr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct Countdown;

#[cfg(target_arch = "avr")]
impl Spin for Countdown {
    #[inline(always)]
    fn spin(&mut self, iterations: u16) {
        // sbiw would wrap 0 around to 65535
        if iterations == 0 {
            return;
        }
        unsafe {
            core::arch::asm!(
                "1: sbiw {i}, 1",
                "brne 1b",
                i = inout(reg_iw) iterations => _,
                options(nomem, nostack),
            );
        }
    }
}
