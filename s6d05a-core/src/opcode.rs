//! S6D05A command opcodes
//!
//! The first group are MIPI DCS user commands; the rest are manufacturer
//! registers of the S6D05A.

/// Enter sleep mode
pub const SLPIN: u8 = 0x10;
/// Exit sleep mode
pub const SLPOUT: u8 = 0x11;
/// Memory data access control
pub const MADCTL: u8 = 0x36;
/// Interface pixel format
pub const COLMOD: u8 = 0x3A;
/// Write display brightness
pub const WRDISBV: u8 = 0x51;
/// Write CTRL display
pub const WRCTRLD: u8 = 0x53;
/// Write content adaptive brightness control
pub const WRCABC: u8 = 0x55;

/// Mobile image enhancement control 1
pub const MIECTL1: u8 = 0xCA;
/// Brightness control mode
pub const BCMODE: u8 = 0xCB;
/// Mobile image enhancement control 2
pub const MIECTL2: u8 = 0xCC;
/// Mobile image enhancement control 3
pub const MIECTL3: u8 = 0xCD;
/// Display control (DCON)
pub const DCON: u8 = 0xEF;
/// Display control
pub const DISCTL: u8 = 0xF2;
/// Power control
pub const PWRCTL: u8 = 0xF3;
/// VCOM control
pub const VCMCTL: u8 = 0xF4;
/// Source output control
pub const SRCCTL: u8 = 0xF5;
/// Positive gamma, red
pub const GAMCTL1: u8 = 0xF7;
/// Negative gamma, red
pub const GAMCTL2: u8 = 0xF8;
/// Positive gamma, green
pub const GAMCTL3: u8 = 0xF9;
/// Negative gamma, green
pub const GAMCTL4: u8 = 0xFA;
/// Positive gamma, blue
pub const GAMCTL5: u8 = 0xFB;
/// Negative gamma, blue
pub const GAMCTL6: u8 = 0xFC;
/// Gate control
pub const GATECTL: u8 = 0xFD;
