//! Bit-banged shift register bus (data, shift clock, storage latch).

use embedded_hal::digital::{OutputPin, PinState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitOrder {
    LsbFirst,
    MsbFirst,
}

/// The three shared lines of a board chain.
///
/// Registers capture data on the rising edge of `clock` and copy the shifted
/// bits to their outputs on the rising edge of `latch`.
pub struct ShiftBus<DATA, CLK, LATCH> {
    data: DATA,
    clock: CLK,
    latch: LATCH,
}

impl<DATA, CLK, LATCH, E> ShiftBus<DATA, CLK, LATCH>
where
    DATA: OutputPin<Error = E>,
    CLK: OutputPin<Error = E>,
    LATCH: OutputPin<Error = E>,
{
    pub fn new(data: DATA, clock: CLK, latch: LATCH) -> Self {
        Self { data, clock, latch }
    }

    pub fn destroy(self) -> (DATA, CLK, LATCH) {
        (self.data, self.clock, self.latch)
    }

    pub fn shift_out(&mut self, byte: u8, order: BitOrder) -> Result<(), E> {
        for i in 0..8 {
            let bit = match order {
                BitOrder::LsbFirst => (byte >> i) & 1,
                BitOrder::MsbFirst => (byte >> (7 - i)) & 1,
            };
            self.data.set_state(PinState::from(bit != 0))?;
            self.clock.set_low()?;
            self.clock.set_high()?;
        }
        Ok(())
    }

    pub fn latch(&mut self) -> Result<(), E> {
        self.latch.set_low()?;
        self.latch.set_high()
    }

    /// Shifts every byte LSB first and commits them with a single latch pulse.
    ///
    /// A pin error aborts before the latch, leaving the previously latched
    /// pattern on the outputs.
    pub fn write<'a, I>(&mut self, bytes: I) -> Result<(), E>
    where
        I: IntoIterator<Item = &'a u8>,
    {
        for &byte in bytes {
            self.shift_out(byte, BitOrder::LsbFirst)?;
        }
        self.latch()
    }
}
