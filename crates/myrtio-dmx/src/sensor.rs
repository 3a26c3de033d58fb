//! Ultrasonic proximity sensor (HC-SR04 style)
//!
//! A 10 µs pulse on the trigger pin starts a measurement; the echo pin then
//! stays high for the round trip time of the sound. Timing is done by busy
//! polling the echo pin at 1 µs steps.

use core::fmt;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};
use log::debug;

/// Give up waiting for (or timing) the echo pulse after this long
pub const ECHO_TIMEOUT_US: u32 = 1_000_000;
/// Quiet time after each measurement so echoes die out
pub const SETTLE_DELAY_MS: u32 = 300;

/// Pin failure while measuring
#[derive(Debug)]
pub enum SensorError<TE, EE> {
    /// Trigger pin could not be driven
    Trigger(TE),
    /// Echo pin could not be read
    Echo(EE),
}

impl<TE: fmt::Debug, EE: fmt::Debug> fmt::Display for SensorError<TE, EE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorError::Trigger(e) => write!(f, "Trigger pin error: {:?}", e),
            SensorError::Echo(e) => write!(f, "Echo pin error: {:?}", e),
        }
    }
}

/// Convert an echo pulse width into centimeters
///
/// Sound travels 0.0344 cm/µs and the pulse covers the way there and back.
#[allow(clippy::cast_possible_truncation)]
pub const fn distance_cm(duration_us: u32) -> u16 {
    let cm = duration_us as u64 * 344 / 20_000;
    if cm > u16::MAX as u64 {
        u16::MAX
    } else {
        cm as u16
    }
}

/// Ultrasonic distance sensor on a trigger and an echo pin
pub struct ProximitySensor<T, E, D> {
    trigger: T,
    echo: E,
    delay: D,
}

type SensorResult<T, E, R> =
    Result<R, SensorError<<T as ErrorType>::Error, <E as ErrorType>::Error>>;

impl<T, E, D> ProximitySensor<T, E, D>
where
    T: OutputPin,
    E: InputPin,
    D: DelayNs,
{
    pub fn new(trigger: T, echo: E, delay: D) -> Self {
        Self {
            trigger,
            echo,
            delay,
        }
    }

    /// Measure the distance to the nearest object in centimeters
    ///
    /// Returns 0 when no echo arrives in time. Blocks for the measurement
    /// plus [`SETTLE_DELAY_MS`].
    pub fn measure_cm(&mut self) -> SensorResult<T, E, u16> {
        self.send_trigger()?;
        let duration = self.echo_pulse_us()?;
        self.delay.delay_ms(SETTLE_DELAY_MS);

        Ok(distance_cm(duration))
    }

    pub fn release(self) -> (T, E, D) {
        (self.trigger, self.echo, self.delay)
    }

    fn send_trigger(&mut self) -> SensorResult<T, E, ()> {
        self.trigger.set_low().map_err(SensorError::Trigger)?;
        self.delay.delay_us(2);
        self.trigger.set_high().map_err(SensorError::Trigger)?;
        self.delay.delay_us(10);
        self.trigger.set_low().map_err(SensorError::Trigger)?;
        Ok(())
    }

    /// Width of the next high pulse on the echo pin, 0 on timeout
    fn echo_pulse_us(&mut self) -> SensorResult<T, E, u32> {
        let mut waited = 0;
        while !self.echo.is_high().map_err(SensorError::Echo)? {
            if waited >= ECHO_TIMEOUT_US {
                debug!("proximity: no echo");
                return Ok(0);
            }
            self.delay.delay_us(1);
            waited += 1;
        }

        let mut width = 0;
        while self.echo.is_high().map_err(SensorError::Echo)? {
            if width >= ECHO_TIMEOUT_US {
                debug!("proximity: echo pulse too long");
                return Ok(0);
            }
            self.delay.delay_us(1);
            width += 1;
        }

        Ok(width)
    }
}
