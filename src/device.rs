//! Register map for the ENS210
//!
//! [`Ens210`] owns a [`Transport`] and exposes one getter and one setter per
//! register. Each call is exactly one bus transaction at the register's fixed
//! address and width:
//!
//! - Values are returned and written verbatim. No masking, no sign handling and no
//!   read-modify-write; writing a register with several fields replaces all of
//!   them, reserved bits included. Use the masks and defaults in [`crate::map`] to
//!   decode and assemble values.
//! - 24-bit registers go through the 32-bit primitive with a [`Width::Bits24`]
//!   hint. The upper byte of a 24-bit read is whatever the transport returned.
//! - Transport errors come back as the transport's own error type, unchanged.
//!
//! For field-level access, [`Ens210::fields`] borrows the generated register block
//! over the same transport.

use crate::map;
use crate::registers::Ens210Registers;
use crate::transport::{FieldBus, Transport, Width};
use crate::{Error, PART_ID_VALUE};

/// ENS210 register map
pub struct Ens210<T> {
    transport: T,
}

impl<T> Ens210<T> {
    /// Create a register map over a transport
    ///
    /// No bus traffic happens here. Use [`Ens210::probe`] to also check the part ID.
    pub const fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Consume the register map and return the transport
    pub fn release(self) -> T {
        self.transport
    }

    /// Borrow the transport for bus work outside the register map
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }
}

impl<T> Ens210<T>
where
    T: Transport,
{
    /// Create a register map and verify the device answers with the ENS210 part ID
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Communication with the device fails
    /// - `PART_ID` does not read 0x0210 (contains the value read)
    pub fn probe(transport: T) -> Result<Self, Error<T::Error>> {
        let mut device = Self::new(transport);
        let part_id = device.part_id()?;

        if part_id != PART_ID_VALUE {
            return Err(Error::InvalidPartId(part_id));
        }

        Ok(device)
    }

    /// Borrow the generated register block for typed field access
    ///
    /// Every register read or write made through the block is still a single
    /// transaction on this driver's transport.
    ///
    /// # Example
    ///
    /// ```ignore
    /// // Start a temperature measurement: one write of 0x01 to SENS_START
    /// ens210.fields().sens_start().write(|w| w.set_t_start(true))?;
    ///
    /// let t_val = ens210.fields().t_val().read()?;
    /// if t_val.t_valid() {
    ///     let raw_kelvin_64ths = t_val.t_data();
    /// }
    /// ```
    pub fn fields(&mut self) -> Ens210Registers<FieldBus<'_, T>> {
        Ens210Registers::new(FieldBus::new(&mut self.transport))
    }

    // ==================== PART_ID / UID ====================

    /// Read `PART_ID` (16 bits, 0x0210 for the ENS210)
    ///
    /// # Errors
    ///
    /// Returns the transport's error if the read fails.
    pub fn part_id(&mut self) -> Result<u16, T::Error> {
        self.transport.read16(map::PART_ID.address, map::PART_ID.width)
    }

    /// Write `PART_ID`
    ///
    /// The register is read-only on the device; the write is passed through as is.
    ///
    /// # Errors
    ///
    /// Returns the transport's error if the write fails.
    pub fn set_part_id(&mut self, value: u16) -> Result<(), T::Error> {
        self.transport
            .write16(map::PART_ID.address, value, map::PART_ID.width)
    }

    /// Read `UID` (64 bits)
    ///
    /// # Errors
    ///
    /// Returns the transport's error if the read fails.
    pub fn uid(&mut self) -> Result<u64, T::Error> {
        self.transport.read64(map::UID.address, map::UID.width)
    }

    /// Write `UID`
    ///
    /// The register is read-only on the device; the write is passed through as is.
    ///
    /// # Errors
    ///
    /// Returns the transport's error if the write fails.
    pub fn set_uid(&mut self, value: u64) -> Result<(), T::Error> {
        self.transport.write64(map::UID.address, value, map::UID.width)
    }

    // ==================== SYSTEM ====================

    /// Read `SYS_CTRL`
    ///
    /// `RESET` is self-clearing and reads 0.
    ///
    /// # Errors
    ///
    /// Returns the transport's error if the read fails.
    pub fn sys_ctrl(&mut self) -> Result<u8, T::Error> {
        self.transport.read8(map::SYS_CTRL.address, map::SYS_CTRL.width)
    }

    /// Write `SYS_CTRL`
    ///
    /// Setting `RESET` (bit 7) resets the device. Keep `LOW_POWER` (bit 0) in the
    /// value unless automatic standby should be turned off.
    ///
    /// # Errors
    ///
    /// Returns the transport's error if the write fails.
    pub fn set_sys_ctrl(&mut self, value: u8) -> Result<(), T::Error> {
        self.transport
            .write8(map::SYS_CTRL.address, value, map::SYS_CTRL.width)
    }

    /// Read `SYS_STAT`
    ///
    /// # Errors
    ///
    /// Returns the transport's error if the read fails.
    pub fn sys_stat(&mut self) -> Result<u8, T::Error> {
        self.transport.read8(map::SYS_STAT.address, map::SYS_STAT.width)
    }

    /// Write `SYS_STAT`
    ///
    /// # Errors
    ///
    /// Returns the transport's error if the write fails.
    pub fn set_sys_stat(&mut self, value: u8) -> Result<(), T::Error> {
        self.transport
            .write8(map::SYS_STAT.address, value, map::SYS_STAT.width)
    }

    // ==================== SENSOR CONTROL ====================

    /// Read `SENS_RUN`
    ///
    /// # Errors
    ///
    /// Returns the transport's error if the read fails.
    pub fn sens_run(&mut self) -> Result<u8, T::Error> {
        self.transport.read8(map::SENS_RUN.address, map::SENS_RUN.width)
    }

    /// Write `SENS_RUN`
    ///
    /// Both sensors' run modes are written at once.
    ///
    /// # Errors
    ///
    /// Returns the transport's error if the write fails.
    pub fn set_sens_run(&mut self, value: u8) -> Result<(), T::Error> {
        self.transport
            .write8(map::SENS_RUN.address, value, map::SENS_RUN.width)
    }

    /// Read `SENS_START`
    ///
    /// `SENS_START` is a write-only trigger register. The hardware does not define
    /// what a read returns; the value is passed through from the transport and
    /// should not be interpreted.
    ///
    /// # Errors
    ///
    /// Returns the transport's error if the read fails.
    pub fn sens_start(&mut self) -> Result<u8, T::Error> {
        self.transport
            .read8(map::SENS_START.address, map::SENS_START.width)
    }

    /// Write `SENS_START`
    ///
    /// Each 1 bit starts a measurement on that sensor (bit 0 temperature, bit 1
    /// humidity). Nothing is read first.
    ///
    /// # Errors
    ///
    /// Returns the transport's error if the write fails.
    pub fn set_sens_start(&mut self, value: u8) -> Result<(), T::Error> {
        self.transport
            .write8(map::SENS_START.address, value, map::SENS_START.width)
    }

    /// Read `SENS_STOP`
    ///
    /// `SENS_STOP` is a write-only trigger register. The hardware does not define
    /// what a read returns; the value is passed through from the transport and
    /// should not be interpreted.
    ///
    /// # Errors
    ///
    /// Returns the transport's error if the read fails.
    pub fn sens_stop(&mut self) -> Result<u8, T::Error> {
        self.transport
            .read8(map::SENS_STOP.address, map::SENS_STOP.width)
    }

    /// Write `SENS_STOP`
    ///
    /// Each 1 bit stops continuous measurement on that sensor.
    ///
    /// # Errors
    ///
    /// Returns the transport's error if the write fails.
    pub fn set_sens_stop(&mut self, value: u8) -> Result<(), T::Error> {
        self.transport
            .write8(map::SENS_STOP.address, value, map::SENS_STOP.width)
    }

    /// Read `SENS_STAT`
    ///
    /// # Errors
    ///
    /// Returns the transport's error if the read fails.
    pub fn sens_stat(&mut self) -> Result<u8, T::Error> {
        self.transport
            .read8(map::SENS_STAT.address, map::SENS_STAT.width)
    }

    /// Write `SENS_STAT`
    ///
    /// # Errors
    ///
    /// Returns the transport's error if the write fails.
    pub fn set_sens_stat(&mut self, value: u8) -> Result<(), T::Error> {
        self.transport
            .write8(map::SENS_STAT.address, value, map::SENS_STAT.width)
    }

    // ==================== MEASUREMENT DATA ====================

    /// Read `T_VAL` (24 bits: data, valid flag, CRC)
    ///
    /// One 24-bit transaction through the 32-bit primitive. The device latches all
    /// three bytes when the first one is accessed, so the value must never be
    /// assembled from separate byte reads. See
    /// [`Measurement`](crate::fields::Measurement) to split it.
    ///
    /// # Errors
    ///
    /// Returns the transport's error if the read fails.
    pub fn t_val(&mut self) -> Result<u32, T::Error> {
        self.transport.read32(map::T_VAL.address, Width::Bits24)
    }

    /// Write `T_VAL`
    ///
    /// # Errors
    ///
    /// Returns the transport's error if the write fails.
    pub fn set_t_val(&mut self, value: u32) -> Result<(), T::Error> {
        self.transport
            .write32(map::T_VAL.address, value, Width::Bits24)
    }

    /// Read `H_VAL` (24 bits: data, valid flag, CRC)
    ///
    /// Same single-transaction rule as [`Ens210::t_val`].
    ///
    /// # Errors
    ///
    /// Returns the transport's error if the read fails.
    pub fn h_val(&mut self) -> Result<u32, T::Error> {
        self.transport.read32(map::H_VAL.address, Width::Bits24)
    }

    /// Write `H_VAL`
    ///
    /// # Errors
    ///
    /// Returns the transport's error if the write fails.
    pub fn set_h_val(&mut self, value: u32) -> Result<(), T::Error> {
        self.transport
            .write32(map::H_VAL.address, value, Width::Bits24)
    }
}
