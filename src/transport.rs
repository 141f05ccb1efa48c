//! Bus transport abstraction for the ENS210
//!
//! The register map never talks to a bus directly. Everything goes through a
//! [`Transport`], which supplies raw 8/16/32/64-bit reads and writes at a register
//! address. Each call also carries the register's real [`Width`] as a hint: the
//! ENS210 has 24-bit registers (`T_VAL`, `H_VAL`) but no 24-bit primitive, so those
//! travel through the 32-bit methods with [`Width::Bits24`] and the transport is
//! expected to move exactly three bytes.
//!
//! Bus specifics (I2C framing, the device address, retries) belong to the
//! implementor. Errors are the implementor's own type and pass through the register
//! map untouched.
//!
//! [`FieldBus`] goes the other way: it exposes a borrowed transport as a
//! `device-driver` [`RegisterInterface`] so the generated
//! [`Ens210Registers`](crate::registers::Ens210Registers) block can run on top of it.

use crate::Error;
use device_driver::RegisterInterface;

/// Register width in bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Width {
    /// 8-bit register
    Bits8 = 8,
    /// 16-bit register
    Bits16 = 16,
    /// 24-bit register (carried by the 32-bit primitive)
    Bits24 = 24,
    /// 32-bit register
    Bits32 = 32,
    /// 64-bit register
    Bits64 = 64,
}

impl Width {
    /// Number of bits
    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// Number of bytes moved on the bus
    pub const fn bytes(self) -> usize {
        self as usize / 8
    }

    /// Smallest transport primitive able to carry this width
    ///
    /// Every width maps to itself except [`Width::Bits24`], which rounds up to
    /// [`Width::Bits32`].
    pub const fn primitive(self) -> Self {
        match self {
            Self::Bits24 => Self::Bits32,
            other => other,
        }
    }

    /// All-ones value for this width
    pub const fn mask(self) -> u64 {
        match self {
            Self::Bits64 => u64::MAX,
            other => (1u64 << other.bits()) - 1,
        }
    }

    /// Look up a width from a bit count
    ///
    /// Returns `None` for anything outside 8, 16, 24, 32 and 64.
    pub const fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            8 => Some(Self::Bits8),
            16 => Some(Self::Bits16),
            24 => Some(Self::Bits24),
            32 => Some(Self::Bits32),
            64 => Some(Self::Bits64),
            _ => None,
        }
    }
}

/// Width-typed register access
///
/// Implement this for your bus driver. Values are plain integers; how their bytes
/// are ordered on the wire is the implementor's concern (the ENS210 itself is
/// little-endian). The `width` argument is the register's declared width, which is
/// narrower than the primitive only for 24-bit registers.
///
/// # Example
///
/// ```ignore
/// struct Bus<I2C> { i2c: I2C }
///
/// impl<I2C: embedded_hal::i2c::I2c> Transport for Bus<I2C> {
///     type Error = I2C::Error;
///
///     fn read8(&mut self, address: u8, _width: Width) -> Result<u8, Self::Error> {
///         let mut buf = [0u8; 1];
///         self.i2c.write_read(0x43, &[address], &mut buf)?;
///         Ok(buf[0])
///     }
///     // ...
/// }
/// ```
pub trait Transport {
    /// Error reported by the underlying bus
    type Error;

    /// Read an 8-bit value
    fn read8(&mut self, address: u8, width: Width) -> Result<u8, Self::Error>;

    /// Read a 16-bit value
    fn read16(&mut self, address: u8, width: Width) -> Result<u16, Self::Error>;

    /// Read a 32-bit value (also used for 24-bit registers)
    fn read32(&mut self, address: u8, width: Width) -> Result<u32, Self::Error>;

    /// Read a 64-bit value
    fn read64(&mut self, address: u8, width: Width) -> Result<u64, Self::Error>;

    /// Write an 8-bit value
    fn write8(&mut self, address: u8, value: u8, width: Width) -> Result<(), Self::Error>;

    /// Write a 16-bit value
    fn write16(&mut self, address: u8, value: u16, width: Width) -> Result<(), Self::Error>;

    /// Write a 32-bit value (also used for 24-bit registers)
    fn write32(&mut self, address: u8, value: u32, width: Width) -> Result<(), Self::Error>;

    /// Write a 64-bit value
    fn write64(&mut self, address: u8, value: u64, width: Width) -> Result<(), Self::Error>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    type Error = T::Error;

    fn read8(&mut self, address: u8, width: Width) -> Result<u8, Self::Error> {
        (**self).read8(address, width)
    }

    fn read16(&mut self, address: u8, width: Width) -> Result<u16, Self::Error> {
        (**self).read16(address, width)
    }

    fn read32(&mut self, address: u8, width: Width) -> Result<u32, Self::Error> {
        (**self).read32(address, width)
    }

    fn read64(&mut self, address: u8, width: Width) -> Result<u64, Self::Error> {
        (**self).read64(address, width)
    }

    fn write8(&mut self, address: u8, value: u8, width: Width) -> Result<(), Self::Error> {
        (**self).write8(address, value, width)
    }

    fn write16(&mut self, address: u8, value: u16, width: Width) -> Result<(), Self::Error> {
        (**self).write16(address, value, width)
    }

    fn write32(&mut self, address: u8, value: u32, width: Width) -> Result<(), Self::Error> {
        (**self).write32(address, value, width)
    }

    fn write64(&mut self, address: u8, value: u64, width: Width) -> Result<(), Self::Error> {
        (**self).write64(address, value, width)
    }
}

/// `device-driver` register interface over a borrowed [`Transport`]
///
/// Register buffers are little-endian, matching the `DefaultByteOrder` of the
/// generated register block. A 24-bit register is read and written through the
/// 32-bit primitive in a single transaction.
pub struct FieldBus<'a, T: ?Sized> {
    transport: &'a mut T,
}

impl<'a, T: ?Sized> FieldBus<'a, T> {
    /// Wrap a transport
    pub const fn new(transport: &'a mut T) -> Self {
        Self { transport }
    }
}

impl<T> RegisterInterface for FieldBus<'_, T>
where
    T: Transport + ?Sized,
{
    type Error = Error<T::Error>;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let width = Width::from_bits(size_bits).ok_or(Error::UnsupportedWidth(size_bits))?;

        let bytes = match width {
            Width::Bits8 => u64::from(self.transport.read8(address, width)?),
            Width::Bits16 => u64::from(self.transport.read16(address, width)?),
            Width::Bits24 | Width::Bits32 => u64::from(self.transport.read32(address, width)?),
            Width::Bits64 => self.transport.read64(address, width)?,
        }
        .to_le_bytes();

        let len = read_data.len().min(width.bytes());
        read_data[..len].copy_from_slice(&bytes[..len]);
        Ok(())
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let width = Width::from_bits(size_bits).ok_or(Error::UnsupportedWidth(size_bits))?;

        let mut bytes = [0u8; 8];
        let len = write_data.len().min(width.bytes());
        bytes[..len].copy_from_slice(&write_data[..len]);

        match width {
            Width::Bits8 => self.transport.write8(address, bytes[0], width)?,
            Width::Bits16 => {
                self.transport
                    .write16(address, u16::from_le_bytes([bytes[0], bytes[1]]), width)?;
            }
            Width::Bits24 | Width::Bits32 => {
                let value = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
                self.transport.write32(address, value, width)?;
            }
            Width::Bits64 => {
                self.transport
                    .write64(address, u64::from_le_bytes(bytes), width)?;
            }
        }
        Ok(())
    }
}
