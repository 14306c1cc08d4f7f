pub const DIGITS_PER_UNIT: usize = 4;
pub const UNIT_BYTES: usize = 5; // 4 tubes x 10 cathodes = 40 register outputs
pub const MAX_VALUE: u16 = 9999;
pub const MASK_ALL: u8 = 0b1111;
pub const PATTERN_MASK: u16 = 0b11_1111_1111; // 10 bits

pub const BLANK: u8 = 10;
pub const DEFAULT_BLANK_WORD: u16 = 0x7000;
pub const DEFAULT_BRIGHTNESS: u8 = 0x40;

// cathode order on the board, bit 9 down to bit 0: 7 6 1 8 3 2 5 4 0 9
pub const DIGIT_PATTERNS: [u16; 11] = [
    0b00_0000_0010, // 0
    0b00_1000_0000, // 1
    0b00_0001_0000, // 2
    0b00_0010_0000, // 3
    0b00_0000_0100, // 4
    0b00_0000_1000, // 5
    0b01_0000_0000, // 6
    0b10_0000_0000, // 7
    0b00_0100_0000, // 8
    0b00_0000_0001, // 9
    0b00_0000_0000, // blank
];
