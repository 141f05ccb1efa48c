//! Register and field catalogue for the ENS210
//!
//! Every register is a [`Register`] constant carrying its bus address and width,
//! and every bit field is a [`Field`] constant carrying its parent register, mask,
//! power-on default and access mode. Nothing here touches the bus; these are the
//! numbers callers use to decode values returned by [`Ens210`](crate::Ens210) and to
//! assemble values before writing them back.
//!
//! ## Register layout
//!
//! | Register     | Address | Width | Contents                                   |
//! |--------------|---------|-------|--------------------------------------------|
//! | `PART_ID`    | 0x00    | 16    | Part identifier, reads 0x0210              |
//! | `UID`        | 0x04    | 64    | Unique device identifier                   |
//! | `SYS_CTRL`   | 0x10    | 8     | Reset trigger, automatic low power         |
//! | `SYS_STAT`   | 0x11    | 8     | Active/standby state                       |
//! | `SENS_RUN`   | 0x21    | 8     | Single shot or continuous, per sensor      |
//! | `SENS_START` | 0x22    | 8     | Start trigger, per sensor                  |
//! | `SENS_STOP`  | 0x23    | 8     | Stop trigger, per sensor                   |
//! | `SENS_STAT`  | 0x24    | 8     | Idle/measuring, per sensor                 |
//! | `T_VAL`      | 0x30    | 24    | Temperature data, valid flag, CRC          |
//! | `H_VAL`      | 0x33    | 24    | Relative humidity data, valid flag, CRC    |
//!
//! Writes are never read-modify-write. When writing a register with several fields,
//! start from [`Register::reset_value`] (which includes the reserved-bit defaults)
//! and adjust the fields you care about with [`Field::set`].
//!
//! # Example
//!
//! ```
//! use ens210::map::{self, sys_ctrl};
//!
//! // Keep automatic low power enabled and request a reset
//! let value = sys_ctrl::RESET.set(map::SYS_CTRL.reset_value(), 1);
//! assert_eq!(value, 0b1000_0001);
//! assert_eq!(sys_ctrl::LOW_POWER.get(value), 1);
//! ```

use crate::transport::Width;

/// How a field may be accessed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Access {
    /// Readable, writes are ignored by the device
    ReadOnly,
    /// Readable and writable
    ReadWrite,
    /// Writing 1 triggers a one-shot action; reading has no defined meaning
    WriteTrigger,
    /// Reserved bits, must be written with their default
    Reserved,
}

/// A named encoding of a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NamedValue {
    /// Name of the encoding
    pub name: &'static str,
    /// Field value (unshifted)
    pub value: u64,
}

/// A device register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Register {
    /// Register name as used in the datasheet
    pub name: &'static str,
    /// Bus address
    pub address: u8,
    /// Register width
    pub width: Width,
}

impl Register {
    /// Fields belonging to this register, most significant first
    pub fn fields(&self) -> impl Iterator<Item = &'static Field> + '_ {
        FIELDS
            .iter()
            .filter(move |field| field.register.address == self.address)
    }

    /// Power-on value assembled from the defaults of every field
    pub fn reset_value(&self) -> u64 {
        self.fields()
            .fold(0, |value, field| field.set(value, field.default))
    }

    /// Whether any field of this register is readable
    ///
    /// `false` for the trigger registers (`SENS_START`, `SENS_STOP`), whose contents
    /// are not defined when read.
    pub fn is_readable(&self) -> bool {
        self.fields()
            .any(|field| matches!(field.access, Access::ReadOnly | Access::ReadWrite))
    }
}

/// A bit field within a register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Field {
    /// Field name as used in the datasheet
    pub name: &'static str,
    /// Register holding this field
    pub register: &'static Register,
    /// Bits occupied by the field, in register position
    pub mask: u64,
    /// Power-on value (unshifted)
    pub default: u64,
    /// Access mode
    pub access: Access,
    /// Named encodings, empty when the field is a plain number
    pub values: &'static [NamedValue],
}

impl Field {
    /// Position of the least significant bit
    pub const fn shift(&self) -> u32 {
        self.mask.trailing_zeros()
    }

    /// Number of bits in the field
    pub const fn bits(&self) -> u32 {
        self.mask.count_ones()
    }

    /// Extract this field from a raw register value
    pub const fn get(&self, raw: u64) -> u64 {
        (raw & self.mask) >> self.shift()
    }

    /// Replace this field in a raw register value
    ///
    /// Bits of `value` that do not fit the field are dropped.
    pub const fn set(&self, raw: u64, value: u64) -> u64 {
        (raw & !self.mask) | ((value << self.shift()) & self.mask)
    }

    /// Default value in register position
    pub const fn default_bits(&self) -> u64 {
        (self.default << self.shift()) & self.mask
    }

    /// Look up a named encoding
    pub fn value_named(&self, name: &str) -> Option<u64> {
        self.values
            .iter()
            .find(|named| named.name == name)
            .map(|named| named.value)
    }

    /// Name of the encoding matching `value`, if any
    pub fn name_of(&self, value: u64) -> Option<&'static str> {
        self.values
            .iter()
            .find(|named| named.value == value)
            .map(|named| named.name)
    }
}

// ==================== REGISTERS ====================

/// `PART_ID` - Identifies the part as ENS210
pub const PART_ID: Register = Register {
    name: "PART_ID",
    address: 0x00,
    width: Width::Bits16,
};

/// `UID` - Unique identifier among all ENS210 devices
pub const UID: Register = Register {
    name: "UID",
    address: 0x04,
    width: Width::Bits64,
};

/// `SYS_CTRL` - System configuration
pub const SYS_CTRL: Register = Register {
    name: "SYS_CTRL",
    address: 0x10,
    width: Width::Bits8,
};

/// `SYS_STAT` - System status
pub const SYS_STAT: Register = Register {
    name: "SYS_STAT",
    address: 0x11,
    width: Width::Bits8,
};

/// `SENS_RUN` - Run mode (single shot or continuous)
pub const SENS_RUN: Register = Register {
    name: "SENS_RUN",
    address: 0x21,
    width: Width::Bits8,
};

/// `SENS_START` - Start measurement (write-only trigger)
pub const SENS_START: Register = Register {
    name: "SENS_START",
    address: 0x22,
    width: Width::Bits8,
};

/// `SENS_STOP` - Stop continuous measurement (write-only trigger)
pub const SENS_STOP: Register = Register {
    name: "SENS_STOP",
    address: 0x23,
    width: Width::Bits8,
};

/// `SENS_STAT` - Sensor status (idle or measuring)
pub const SENS_STAT: Register = Register {
    name: "SENS_STAT",
    address: 0x24,
    width: Width::Bits8,
};

/// `T_VAL` - Last temperature measurement with valid flag and CRC
///
/// The three bytes are double buffered by the device and latched when the first
/// byte is accessed, so they must be read as one 24-bit transaction.
pub const T_VAL: Register = Register {
    name: "T_VAL",
    address: 0x30,
    width: Width::Bits24,
};

/// `H_VAL` - Last relative humidity measurement with valid flag and CRC
///
/// Double buffered like [`T_VAL`].
pub const H_VAL: Register = Register {
    name: "H_VAL",
    address: 0x33,
    width: Width::Bits24,
};

/// All registers in address order
pub const REGISTERS: &[Register] = &[
    PART_ID, UID, SYS_CTRL, SYS_STAT, SENS_RUN, SENS_START, SENS_STOP, SENS_STAT, T_VAL, H_VAL,
];

/// Find the register at a bus address
pub fn register_at(address: u8) -> Option<&'static Register> {
    REGISTERS.iter().find(|register| register.address == address)
}

/// Find a register by datasheet name
pub fn register_named(name: &str) -> Option<&'static Register> {
    REGISTERS.iter().find(|register| register.name == name)
}

// ==================== FIELDS ====================

const ENABLED_DISABLED: &[NamedValue] = &[
    NamedValue {
        name: "Disabled",
        value: 0,
    },
    NamedValue {
        name: "Enabled",
        value: 1,
    },
];

const STANDBY_ACTIVE: &[NamedValue] = &[
    NamedValue {
        name: "Standby",
        value: 0,
    },
    NamedValue {
        name: "Active",
        value: 1,
    },
];

const SINGLE_SHOT_CONTINUOUS: &[NamedValue] = &[
    NamedValue {
        name: "SingleShot",
        value: 0,
    },
    NamedValue {
        name: "Continuous",
        value: 1,
    },
];

const IDLE_ACTIVE: &[NamedValue] = &[
    NamedValue {
        name: "Idle",
        value: 0,
    },
    NamedValue {
        name: "Active",
        value: 1,
    },
];

/// `PART_ID` fields
pub mod part_id {
    use super::{Access, Field};

    /// Part identifier, 0x0210 for the ENS210
    pub const PART_ID: Field = Field {
        name: "PART_ID",
        register: &super::PART_ID,
        mask: 0xFFFF,
        default: 0x0210,
        access: Access::ReadOnly,
        values: &[],
    };
}

/// `UID` fields
pub mod uid {
    use super::{Access, Field};

    /// Unique device identifier
    pub const UID: Field = Field {
        name: "UID",
        register: &super::UID,
        mask: u64::MAX,
        default: 0,
        access: Access::ReadOnly,
        values: &[],
    };
}

/// `SYS_CTRL` fields
pub mod sys_ctrl {
    use super::{Access, ENABLED_DISABLED, Field};

    /// Write 1 to reset the device; self-clearing
    pub const RESET: Field = Field {
        name: "RESET",
        register: &super::SYS_CTRL,
        mask: 0b1000_0000,
        default: 0,
        access: Access::WriteTrigger,
        values: &[],
    };

    /// Reserved
    pub const RESERVED_0: Field = Field {
        name: "reserved_0",
        register: &super::SYS_CTRL,
        mask: 0b0111_1110,
        default: 0,
        access: Access::Reserved,
        values: &[],
    };

    /// Automatic low power: when enabled the device enters standby once
    /// measurements complete
    pub const LOW_POWER: Field = Field {
        name: "LOW_POWER",
        register: &super::SYS_CTRL,
        mask: 0b0000_0001,
        default: 1,
        access: Access::ReadWrite,
        values: ENABLED_DISABLED,
    };
}

/// `SYS_STAT` fields
pub mod sys_stat {
    use super::{Access, Field, STANDBY_ACTIVE};

    /// Reserved
    pub const RESERVED_0: Field = Field {
        name: "reserved_0",
        register: &super::SYS_STAT,
        mask: 0b1111_1110,
        default: 0,
        access: Access::Reserved,
        values: &[],
    };

    /// System power state (standby/booting or active)
    pub const SYS_ACTIVE: Field = Field {
        name: "SYS_ACTIVE",
        register: &super::SYS_STAT,
        mask: 0b0000_0001,
        default: 1,
        access: Access::ReadOnly,
        values: STANDBY_ACTIVE,
    };
}

/// `SENS_RUN` fields
pub mod sens_run {
    use super::{Access, Field, SINGLE_SHOT_CONTINUOUS};

    /// Reserved
    pub const RESERVED_0: Field = Field {
        name: "reserved_0",
        register: &super::SENS_RUN,
        mask: 0b1111_1100,
        default: 0,
        access: Access::Reserved,
        values: &[],
    };

    /// Run mode of the relative humidity sensor
    pub const H_RUN: Field = Field {
        name: "H_RUN",
        register: &super::SENS_RUN,
        mask: 0b0000_0010,
        default: 0,
        access: Access::ReadWrite,
        values: SINGLE_SHOT_CONTINUOUS,
    };

    /// Run mode of the temperature sensor
    pub const T_RUN: Field = Field {
        name: "T_RUN",
        register: &super::SENS_RUN,
        mask: 0b0000_0001,
        default: 0,
        access: Access::ReadWrite,
        values: SINGLE_SHOT_CONTINUOUS,
    };
}

/// `SENS_START` fields
pub mod sens_start {
    use super::{Access, Field};

    /// Reserved
    pub const RESERVED_0: Field = Field {
        name: "reserved_0",
        register: &super::SENS_START,
        mask: 0b1111_1100,
        default: 0,
        access: Access::Reserved,
        values: &[],
    };

    /// Write 1 to start a relative humidity measurement
    pub const H_START: Field = Field {
        name: "H_START",
        register: &super::SENS_START,
        mask: 0b0000_0010,
        default: 0,
        access: Access::WriteTrigger,
        values: &[],
    };

    /// Write 1 to start a temperature measurement
    pub const T_START: Field = Field {
        name: "T_START",
        register: &super::SENS_START,
        mask: 0b0000_0001,
        default: 0,
        access: Access::WriteTrigger,
        values: &[],
    };
}

/// `SENS_STOP` fields
pub mod sens_stop {
    use super::{Access, Field};

    /// Reserved
    pub const RESERVED_0: Field = Field {
        name: "reserved_0",
        register: &super::SENS_STOP,
        mask: 0b1111_1100,
        default: 0,
        access: Access::Reserved,
        values: &[],
    };

    /// Write 1 to stop a continuous relative humidity measurement
    pub const H_STOP: Field = Field {
        name: "H_STOP",
        register: &super::SENS_STOP,
        mask: 0b0000_0010,
        default: 0,
        access: Access::WriteTrigger,
        values: &[],
    };

    /// Write 1 to stop a continuous temperature measurement
    pub const T_STOP: Field = Field {
        name: "T_STOP",
        register: &super::SENS_STOP,
        mask: 0b0000_0001,
        default: 0,
        access: Access::WriteTrigger,
        values: &[],
    };
}

/// `SENS_STAT` fields
pub mod sens_stat {
    use super::{Access, Field, IDLE_ACTIVE};

    /// Reserved
    pub const RESERVED_0: Field = Field {
        name: "reserved_0",
        register: &super::SENS_STAT,
        mask: 0b1111_1100,
        default: 0,
        access: Access::Reserved,
        values: &[],
    };

    /// Measuring status of the relative humidity sensor
    pub const H_STAT: Field = Field {
        name: "H_STAT",
        register: &super::SENS_STAT,
        mask: 0b0000_0010,
        default: 0,
        access: Access::ReadOnly,
        values: IDLE_ACTIVE,
    };

    /// Measuring status of the temperature sensor
    pub const T_STAT: Field = Field {
        name: "T_STAT",
        register: &super::SENS_STAT,
        mask: 0b0000_0001,
        default: 0,
        access: Access::ReadOnly,
        values: IDLE_ACTIVE,
    };
}

/// `T_VAL` fields
pub mod t_val {
    use super::{Access, Field};

    /// CRC-7 over `T_DATA` and `T_VALID`
    pub const T_CRC: Field = Field {
        name: "T_CRC",
        register: &super::T_VAL,
        mask: 0xFE_0000,
        default: 0,
        access: Access::ReadOnly,
        values: &[],
    };

    /// Set when `T_DATA` holds a valid measurement
    pub const T_VALID: Field = Field {
        name: "T_VALID",
        register: &super::T_VAL,
        mask: 0x01_0000,
        default: 0,
        access: Access::ReadOnly,
        values: &[],
    };

    /// Last temperature, 16-bit little-endian, in 1/64 Kelvin
    pub const T_DATA: Field = Field {
        name: "T_DATA",
        register: &super::T_VAL,
        mask: 0x00_FFFF,
        default: 0,
        access: Access::ReadOnly,
        values: &[],
    };
}

/// `H_VAL` fields
pub mod h_val {
    use super::{Access, Field};

    /// CRC-7 over `H_DATA` and `H_VALID`
    pub const H_CRC: Field = Field {
        name: "H_CRC",
        register: &super::H_VAL,
        mask: 0xFE_0000,
        default: 0,
        access: Access::ReadOnly,
        values: &[],
    };

    /// Set when `H_DATA` holds a valid measurement
    pub const H_VALID: Field = Field {
        name: "H_VALID",
        register: &super::H_VAL,
        mask: 0x01_0000,
        default: 0,
        access: Access::ReadOnly,
        values: &[],
    };

    /// Last relative humidity, 16-bit little-endian, in 1/512 %RH
    pub const H_DATA: Field = Field {
        name: "H_DATA",
        register: &super::H_VAL,
        mask: 0x00_FFFF,
        default: 0,
        access: Access::ReadOnly,
        values: &[],
    };
}

/// All fields, grouped by register in address order
pub const FIELDS: &[Field] = &[
    part_id::PART_ID,
    uid::UID,
    sys_ctrl::RESET,
    sys_ctrl::RESERVED_0,
    sys_ctrl::LOW_POWER,
    sys_stat::RESERVED_0,
    sys_stat::SYS_ACTIVE,
    sens_run::RESERVED_0,
    sens_run::H_RUN,
    sens_run::T_RUN,
    sens_start::RESERVED_0,
    sens_start::H_START,
    sens_start::T_START,
    sens_stop::RESERVED_0,
    sens_stop::H_STOP,
    sens_stop::T_STOP,
    sens_stat::RESERVED_0,
    sens_stat::H_STAT,
    sens_stat::T_STAT,
    t_val::T_CRC,
    t_val::T_VALID,
    t_val::T_DATA,
    h_val::H_CRC,
    h_val::H_VALID,
    h_val::H_DATA,
];
