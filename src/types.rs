//! This module contains value-level views of the BQ24250 registers.
//!
//! The editor itself moves raw bytes; these types are for hosts that want
//! to reason about what a byte means before or after a session.

use modular_bitfield::prelude::*;
use strum_macros::EnumIter;

/// REG1 layout, LSB first: FAULT[3:0], STAT[1:0], WD_EN, WD_FAULT.
///
/// STAT and FAULT are reported by the part; decode them with
/// [`ChargeState::from_code`] and [`FaultCode::from_code`].
#[bitfield]
#[derive(Clone, Copy)]
pub struct ChargerStatus {
    pub fault: B4,
    pub stat: B2,
    pub wd_en: bool,
    pub wd_fault: bool,
}

/// REG2 layout, LSB first: HZ_MODE, CE (set disables charging), EN_TERM,
/// EN_STAT, IN_ILIM[2:0], RESET (self clearing).
#[bitfield]
#[derive(Clone, Copy)]
pub struct ChargeControl {
    pub hz_mode: bool,
    pub ce_disable: bool,
    pub en_term: bool,
    pub en_stat: bool,
    pub in_ilim: B3,
    pub reset: bool,
}

/// Charge cycle state reported in REG1 `STAT`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIter)]
#[repr(u8)]
pub enum ChargeState {
    /// Ready to charge, nothing in progress.
    Ready = 0,
    /// Charge in progress.
    Charging = 1,
    /// Charge done.
    Done = 2,
    /// Charging halted, see the fault code.
    Fault = 3,
}

impl ChargeState {
    /// Decode the two-bit `STAT` field.
    pub const fn from_code(code: u8) -> Self {
        match code & 0b11 {
            0 => Self::Ready,
            1 => Self::Charging,
            2 => Self::Done,
            _ => Self::Fault,
        }
    }
}

/// Fault reported in REG1 `FAULT` while `STAT` reads fault.
#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIter)]
#[repr(u8)]
pub enum FaultCode {
    /// Normal operation, no fault latched.
    Normal = 0x0,
    InputOverVoltage = 0x1,
    InputUnderVoltage = 0x2,
    Sleep = 0x3,
    BatteryTemperature = 0x4,
    BatteryOverVoltage = 0x5,
    ThermalShutdown = 0x6,
    TimerFault = 0x7,
    NoBattery = 0x8,
    IsetShort = 0x9,
    /// Input fault or LDO supply low.
    InputFault = 0xA,
    /// Codes 0xB-0xF are not assigned by the part.
    Reserved = 0xF,
}

impl FaultCode {
    /// Decode the four-bit `FAULT` field.
    pub const fn from_code(code: u8) -> Self {
        match code & 0x0F {
            0x0 => Self::Normal,
            0x1 => Self::InputOverVoltage,
            0x2 => Self::InputUnderVoltage,
            0x3 => Self::Sleep,
            0x4 => Self::BatteryTemperature,
            0x5 => Self::BatteryOverVoltage,
            0x6 => Self::ThermalShutdown,
            0x7 => Self::TimerFault,
            0x8 => Self::NoBattery,
            0x9 => Self::IsetShort,
            0xA => Self::InputFault,
            _ => Self::Reserved,
        }
    }
}

/// REG2 `IN_ILIM` input current limit codes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumIter)]
#[repr(u8)]
pub enum InputCurrentLimit {
    /// 100 mA (USB2.0 host).
    Ma100 = 0b000,
    /// 150 mA.
    Ma150 = 0b001,
    /// 500 mA (USB2.0/3.0 host).
    Ma500 = 0b010,
    /// 900 mA (USB3.0 host).
    Ma900 = 0b011,
    /// 1.5 A.
    Ma1500 = 0b100,
    /// 2 A.
    Ma2000 = 0b101,
    /// Limit set by the external ILIM resistor.
    External = 0b110,
    /// No input limit (PTM mode).
    NoLimit = 0b111,
}
