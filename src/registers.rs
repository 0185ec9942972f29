//! This module defines the register map of the BQ24250.
//!
//! The part has seven one-byte registers at I2C addresses 0x00-0x06. The
//! configure tool and the part's documentation number them REG1-REG7; that
//! number is the menu index the operator types.

use strum_macros::EnumIter;

/// The seven BQ24250 registers. Discriminants are the I2C register addresses.
#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIter)]
#[repr(u8)]
pub enum ChargerRegister {
    /// __R/W__ - REG1: watchdog fault and enable bits, plus the read-only
    /// charge state and fault code.
    Status = 0x00,
    /// __R/W__ - REG2: RESET, input current limit, EN_STAT, EN_TERM, CE
    /// (set disables charging) and high impedance mode.
    Control = 0x01,
    /// __R/W__ - REG3: battery regulation voltage and the read-only USB
    /// detection result.
    BatteryVoltage = 0x02,
    /// __R/W__ - REG4: fast charge current and termination current.
    ChargeCurrent = 0x03,
    /// __R/W__ - REG5: read-only loop status, low-charge mode, D+/D-
    /// detection trigger and the input DPM threshold.
    VinDpm = 0x04,
    /// __R/W__ - REG6: safety timer length, SYSOFF and TS monitoring.
    SafetyTimer = 0x05,
    /// __R/W__ - REG7: input OVP threshold, D+/D- reset and battery
    /// detection forcing.
    InputOvp = 0x06,
}

impl ChargerRegister {
    /// The register number the operator types and the tool displays (1-7).
    pub const fn index(self) -> u8 {
        self as u8 + 1
    }

    /// Resolve an operator-facing register number. `None` outside 1-7.
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Self::Status),
            2 => Some(Self::Control),
            3 => Some(Self::BatteryVoltage),
            4 => Some(Self::ChargeCurrent),
            5 => Some(Self::VinDpm),
            6 => Some(Self::SafetyTimer),
            7 => Some(Self::InputOvp),
            _ => None,
        }
    }
}

impl From<ChargerRegister> for u8 {
    fn from(value: ChargerRegister) -> Self {
        value as u8
    }
}
