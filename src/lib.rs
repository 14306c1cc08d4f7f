#![no_std]

pub mod bus;
mod constants;
pub mod encoder;
pub mod output;

pub use bus::{BitOrder, ShiftBus};
pub use constants::*;
pub use output::{LevelOutput, Polarity, Pwm, Switched};

use embedded_hal::digital::{OutputPin, PinState};
use num_traits::ToPrimitive;

/// A chain of `BOARDS` Nixie Tube Driver Boards sharing one register bus.
///
/// Pin roles follow the board header: `DATA`, `SHCP` (shift clock), `STCP`
/// (latch), `OE` (blanking, active low), `HV` (high-voltage supply enable)
/// and `COLON`.
pub struct Ntdb<DATA, SHCP, STCP, OE, HV, COLON, const BOARDS: usize = 1> {
    bus: ShiftBus<DATA, SHCP, STCP>,
    oe: OE,
    hv: HV,
    colon: COLON,
    data: [[u8; UNIT_BYTES]; BOARDS],
}

impl<DATA, SHCP, STCP, OE, HV, COLON, E, const BOARDS: usize>
    Ntdb<DATA, SHCP, STCP, OE, HV, COLON, BOARDS>
where
    DATA: OutputPin<Error = E>,
    SHCP: OutputPin<Error = E>,
    STCP: OutputPin<Error = E>,
    OE: LevelOutput<Error = E>,
    HV: OutputPin<Error = E>,
    COLON: LevelOutput<Error = E>,
{
    const NONEMPTY: () = assert!(BOARDS > 0, "a chain needs at least one board");

    pub fn new(data: DATA, shcp: SHCP, stcp: STCP, oe: OE, hv: HV, colon: COLON) -> Self {
        let () = Self::NONEMPTY;
        let mut ntdb = Self {
            bus: ShiftBus::new(data, shcp, stcp),
            oe,
            hv,
            colon,
            data: [[0; UNIT_BYTES]; BOARDS],
        };
        ntdb.clear(DEFAULT_BLANK_WORD);
        ntdb
    }

    pub fn destroy(self) -> (DATA, SHCP, STCP, OE, HV, COLON) {
        let (data, shcp, stcp) = self.bus.destroy();
        (data, shcp, stcp, self.oe, self.hv, self.colon)
    }

    pub fn boards(&self) -> usize {
        BOARDS
    }

    pub fn buffer(&self) -> &[[u8; UNIT_BYTES]; BOARDS] {
        &self.data
    }

    pub fn unit(&self, index: usize) -> &[u8; UNIT_BYTES] {
        &self.data[index % BOARDS]
    }

    /// Shows `number` on the first board. Bits 3..0 of `mask` enable the
    /// thousands..units tubes; a disabled tube goes dark.
    pub fn set_number<T: ToPrimitive>(&mut self, number: T, mask: u8) {
        self.set_unit_number(0, number, mask);
    }

    pub fn set_unit_number<T: ToPrimitive>(&mut self, index: usize, number: T, mask: u8) {
        let index = index % BOARDS;
        self.data[index] = encoder::encode_number(number, mask);
        #[cfg(feature = "defmt")]
        defmt::trace!("ntdb: unit {} <- {:02x}", index, self.data[index]);
    }

    /// Reads the first four bytes as positional digits, see
    /// [`encoder::text_value`], and shows them on all four tubes.
    pub fn set_text(&mut self, text: impl AsRef<[u8]>) {
        self.set_number(encoder::text_value(text.as_ref()), MASK_ALL);
    }

    /// Writes the low 10 bits of `word` as a raw cathode pattern to every
    /// tube of one board.
    pub fn put_unit(&mut self, index: usize, word: u16) {
        let index = index % BOARDS;
        self.data[index] = encoder::pack_patterns([word; DIGITS_PER_UNIT]);
    }

    pub fn blank(&mut self, index: usize) {
        self.put_unit(index, encoder::pattern(BLANK));
    }

    pub fn clear(&mut self, word: u16) {
        for index in 0..BOARDS {
            self.put_unit(index, word);
        }
    }

    /// Shifts the whole buffer out, first board first, then latches it.
    pub fn display(&mut self) -> Result<(), NtdbError<E>> {
        #[cfg(feature = "defmt")]
        defmt::trace!("ntdb: shifting {} boards", BOARDS);
        self.bus.write(self.data.iter().flatten())?;
        Ok(())
    }

    pub fn set_high_voltage(&mut self, on: bool) -> Result<(), NtdbError<E>> {
        self.hv.set_state(PinState::from(on))?;
        Ok(())
    }

    /// 255 is full brightness, 0 blanks every tube.
    pub fn set_brightness(&mut self, brightness: u8) -> Result<(), NtdbError<E>> {
        self.oe
            .set_level(brightness, Polarity::ActiveLow)
            .map_err(NtdbError::LevelError)
    }

    pub fn set_indicator(&mut self, brightness: u8) -> Result<(), NtdbError<E>> {
        self.colon
            .set_level(brightness, Polarity::ActiveHigh)
            .map_err(NtdbError::LevelError)
    }
}

#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NtdbError<E> {
    PinError(E),
    LevelError(E),
}

impl<E> From<E> for NtdbError<E> {
    fn from(error: E) -> Self {
        NtdbError::PinError(error)
    }
}
