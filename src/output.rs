//! Level outputs for the blanking (OE) and colon lines.
//!
//! Either line can sit on a PWM channel or a plain GPIO. Wrap the pin in
//! [`Pwm`] for proportional levels or in [`Switched`] for on/off.

use embedded_hal::digital::{self, PinState};
use embedded_hal::pwm::{self, SetDutyCycle};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    ActiveHigh,
    ActiveLow,
}

pub trait LevelOutput {
    type Error;

    /// Drives the line to `level` out of 255, where 255 is fully on for the
    /// load behind the line.
    fn set_level(&mut self, level: u8, polarity: Polarity) -> Result<(), Self::Error>;
}

/// A PWM channel, duty cycle proportional to the level.
pub struct Pwm<P>(pub P);

/// A plain output pin, any nonzero level switches the load on.
pub struct Switched<P>(pub P);

impl<P: SetDutyCycle> LevelOutput for Pwm<P> {
    type Error = <P as pwm::ErrorType>::Error;

    fn set_level(&mut self, level: u8, polarity: Polarity) -> Result<(), Self::Error> {
        let duty = match polarity {
            Polarity::ActiveHigh => level,
            Polarity::ActiveLow => u8::MAX - level,
        };
        self.0.set_duty_cycle_fraction(u16::from(duty), u16::from(u8::MAX))
    }
}

impl<P: digital::OutputPin> LevelOutput for Switched<P> {
    type Error = <P as digital::ErrorType>::Error;

    fn set_level(&mut self, level: u8, polarity: Polarity) -> Result<(), Self::Error> {
        let on = level != 0;
        let high = match polarity {
            Polarity::ActiveHigh => on,
            Polarity::ActiveLow => !on,
        };
        self.0.set_state(PinState::from(high))
    }
}
