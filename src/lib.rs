#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod device;
pub mod fields;
pub mod map;
pub mod registers;
pub mod transport;

// Re-export main types
pub use device::Ens210;
pub use fields::{LowPower, Measurement, RunMode, Sensor, SensorState, SystemState};
pub use map::{Access, Field, NamedValue, Register};
pub use registers::Ens210Registers;
pub use transport::{FieldBus, Transport, Width};

/// Expected value of the `PART_ID` register
pub const PART_ID_VALUE: u16 = 0x0210;

/// Driver errors
///
/// The plain register accessors on [`Ens210`] return the transport's error
/// directly. This type is used where something besides the bus can go wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error with the device
    Bus(E),
    /// Invalid `PART_ID` register value (contains the actual value read)
    InvalidPartId(u16),
    /// Register access with a width outside 8, 16, 24, 32 and 64 bits
    UnsupportedWidth(u32),
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}
