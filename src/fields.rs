//! Typed field encodings
//!
//! The register accessors return raw bits. The types here give names to the
//! encodings the datasheet defines for single-bit fields, and split the 24-bit
//! `T_VAL`/`H_VAL` layout into its parts. They are pure conversions; no bus access,
//! CRC checking or unit conversion happens here.
//!
//! # Example
//!
//! ```
//! use ens210::fields::{Measurement, RunMode, Sensor};
//!
//! // Put the humidity sensor in continuous mode, temperature in single shot
//! let run = Sensor::Humidity.run_field().set(0, RunMode::Continuous.bit() as u64);
//! assert_eq!(run, 0b10);
//!
//! // Decode a raw T_VAL read
//! let measurement = Measurement::from_raw(0x0149_12);
//! assert!(measurement.valid);
//! assert_eq!(measurement.data, 0x4912);
//! ```

use crate::map::{self, Field, Register};

/// `SYS_CTRL.LOW_POWER` setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LowPower {
    /// Device stays active
    Disabled = 0,
    /// Device enters standby when measurements complete (power-on default)
    #[default]
    Enabled = 1,
}

/// `SYS_STAT.SYS_ACTIVE` state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SystemState {
    /// Standby or booting
    Standby = 0,
    /// Active
    Active = 1,
}

/// `SENS_RUN` mode of one sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RunMode {
    /// One measurement per start trigger (power-on default)
    #[default]
    SingleShot = 0,
    /// Measures continuously until stopped
    Continuous = 1,
}

/// `SENS_STAT` state of one sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorState {
    /// Not measuring
    Idle = 0,
    /// Measurement in progress
    Active = 1,
}

macro_rules! single_bit_encoding {
    ($ty:ident, $zero:ident, $one:ident) => {
        impl $ty {
            /// Decode from the field bit
            pub const fn from_bit(bit: bool) -> Self {
                if bit { Self::$one } else { Self::$zero }
            }

            /// Field bit for this value
            pub const fn bit(self) -> bool {
                matches!(self, Self::$one)
            }
        }

        impl From<bool> for $ty {
            fn from(bit: bool) -> Self {
                Self::from_bit(bit)
            }
        }

        impl From<$ty> for bool {
            fn from(value: $ty) -> Self {
                value.bit()
            }
        }
    };
}

single_bit_encoding!(LowPower, Disabled, Enabled);
single_bit_encoding!(SystemState, Standby, Active);
single_bit_encoding!(RunMode, SingleShot, Continuous);
single_bit_encoding!(SensorState, Idle, Active);

/// One of the two sensors on the die
///
/// The per-sensor registers (`SENS_RUN`, `SENS_START`, `SENS_STOP`, `SENS_STAT`)
/// use bit 0 for temperature and bit 1 for relative humidity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Sensor {
    /// Temperature sensor
    Temperature,
    /// Relative humidity sensor
    Humidity,
}

impl Sensor {
    /// Run mode field in `SENS_RUN`
    pub const fn run_field(self) -> &'static Field {
        match self {
            Self::Temperature => &map::sens_run::T_RUN,
            Self::Humidity => &map::sens_run::H_RUN,
        }
    }

    /// Start trigger in `SENS_START`
    pub const fn start_field(self) -> &'static Field {
        match self {
            Self::Temperature => &map::sens_start::T_START,
            Self::Humidity => &map::sens_start::H_START,
        }
    }

    /// Stop trigger in `SENS_STOP`
    pub const fn stop_field(self) -> &'static Field {
        match self {
            Self::Temperature => &map::sens_stop::T_STOP,
            Self::Humidity => &map::sens_stop::H_STOP,
        }
    }

    /// Status field in `SENS_STAT`
    pub const fn stat_field(self) -> &'static Field {
        match self {
            Self::Temperature => &map::sens_stat::T_STAT,
            Self::Humidity => &map::sens_stat::H_STAT,
        }
    }

    /// Register holding this sensor's last measurement
    pub const fn value_register(self) -> &'static Register {
        match self {
            Self::Temperature => &map::T_VAL,
            Self::Humidity => &map::H_VAL,
        }
    }

    /// Bit of this sensor in the per-sensor registers
    pub const fn mask(self) -> u8 {
        self.start_field().mask as u8
    }
}

/// Decoded `T_VAL` or `H_VAL` contents
///
/// `data` is in 1/64 K for temperature and 1/512 %RH for humidity. The CRC is
/// carried as read; checking it is up to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Measurement {
    /// Raw measurement value
    pub data: u16,
    /// Device flagged `data` as valid
    pub valid: bool,
    /// 7-bit CRC over `data` and `valid`
    pub crc: u8,
}

impl Measurement {
    /// Split a raw 24-bit register value
    ///
    /// Bits above 23 are ignored, so the undefined upper byte of a 32-bit transport
    /// read does not leak in. `T_VAL` and `H_VAL` share a layout, so either
    /// register's masks decode both.
    pub const fn from_raw(raw: u32) -> Self {
        let raw = raw as u64;
        Self {
            data: map::t_val::T_DATA.get(raw) as u16,
            valid: map::t_val::T_VALID.get(raw) != 0,
            crc: map::t_val::T_CRC.get(raw) as u8,
        }
    }

    /// Reassemble the raw 24-bit register value
    pub const fn to_raw(self) -> u32 {
        let raw = map::t_val::T_DATA.set(0, self.data as u64);
        let raw = map::t_val::T_VALID.set(raw, self.valid as u64);
        map::t_val::T_CRC.set(raw, self.crc as u64) as u32
    }
}

impl From<u32> for Measurement {
    fn from(raw: u32) -> Self {
        Self::from_raw(raw)
    }
}
