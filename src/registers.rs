//! Generated register block for the ENS210
//!
//! The same ten registers as [`crate::map`], described with the `device-driver` DSL so
//! every field gets a typed getter and setter. The block runs over any
//! [`Transport`](crate::Transport) through [`FieldBus`](crate::FieldBus); use
//! [`Ens210::fields`](crate::Ens210::fields) to borrow it from a driver.
//!
//! ## Byte order
//! The ENS210 is little-endian throughout: `PART_ID` reads `0x10 0x02`, and the
//! 16-bit data in `T_VAL`/`H_VAL` comes low byte first.
//!
//! ## Access modes
//! - `SENS_START` and `SENS_STOP` are write-only. `write` starts from the reset value
//!   (all zero), so setting one trigger bit produces a single write with only that
//!   bit set.
//! - `T_VAL`, `H_VAL`, `PART_ID`, `UID`, `SYS_STAT` and `SENS_STAT` are read-only.
//! - `SYS_CTRL.reset` is a trigger inside a read-write register; it reads back 0.

device_driver::create_device!(
    device_name: Ens210Registers,
    dsl: {
        config {
            type RegisterAddressType = u8;
            type DefaultByteOrder = LE;
        }

        /// PART_ID - Part identifier (0x00)
        /// Expected value: 0x0210
        register PartId {
            type Access = RO;
            const ADDRESS = 0x00;
            const SIZE_BITS = 16;
            const RESET_VALUE = 0x0210;

            /// Part identifier (should read 0x0210)
            part_id: uint = 0..16,
        },

        /// UID - Unique device identifier (0x04)
        register Uid {
            type Access = RO;
            const ADDRESS = 0x04;
            const SIZE_BITS = 64;

            /// Unique identifier
            uid: uint = 0..64,
        },

        /// SYS_CTRL - System configuration (0x10)
        register SysCtrl {
            const ADDRESS = 0x10;
            const SIZE_BITS = 8;
            const RESET_VALUE = 0x01;

            /// Automatic low power (device enters standby when measurements complete)
            low_power: bool = 0,
            reserved_6_1: uint = 1..7,
            /// Device reset (write 1, self-clearing)
            reset: bool = 7,
        },

        /// SYS_STAT - System status (0x11)
        register SysStat {
            type Access = RO;
            const ADDRESS = 0x11;
            const SIZE_BITS = 8;
            const RESET_VALUE = 0x01;

            /// System active (false = standby or booting)
            sys_active: bool = 0,
            reserved_7_1: uint = 1..8,
        },

        /// SENS_RUN - Run mode per sensor (0x21)
        register SensRun {
            const ADDRESS = 0x21;
            const SIZE_BITS = 8;

            /// Temperature continuous mode (false = single shot)
            t_run: bool = 0,
            /// Relative humidity continuous mode (false = single shot)
            h_run: bool = 1,
            reserved_7_2: uint = 2..8,
        },

        /// SENS_START - Start measurement trigger (0x22)
        register SensStart {
            type Access = WO;
            const ADDRESS = 0x22;
            const SIZE_BITS = 8;

            /// Start a temperature measurement
            t_start: bool = 0,
            /// Start a relative humidity measurement
            h_start: bool = 1,
            reserved_7_2: uint = 2..8,
        },

        /// SENS_STOP - Stop continuous measurement trigger (0x23)
        register SensStop {
            type Access = WO;
            const ADDRESS = 0x23;
            const SIZE_BITS = 8;

            /// Stop continuous temperature measurement
            t_stop: bool = 0,
            /// Stop continuous relative humidity measurement
            h_stop: bool = 1,
            reserved_7_2: uint = 2..8,
        },

        /// SENS_STAT - Measuring status per sensor (0x24)
        register SensStat {
            type Access = RO;
            const ADDRESS = 0x24;
            const SIZE_BITS = 8;

            /// Temperature sensor measuring
            t_stat: bool = 0,
            /// Relative humidity sensor measuring
            h_stat: bool = 1,
            reserved_7_2: uint = 2..8,
        },

        /// T_VAL - Temperature value (0x30)
        /// Double buffered, latched on first byte access: always read all 24 bits at once
        register TVal {
            type Access = RO;
            const ADDRESS = 0x30;
            const SIZE_BITS = 24;

            /// Temperature in 1/64 K
            t_data: uint = 0..16,
            /// Data valid
            t_valid: bool = 16,
            /// CRC-7 over t_data and t_valid
            t_crc: uint = 17..24,
        },

        /// H_VAL - Relative humidity value (0x33)
        /// Double buffered, latched on first byte access: always read all 24 bits at once
        register HVal {
            type Access = RO;
            const ADDRESS = 0x33;
            const SIZE_BITS = 24;

            /// Relative humidity in 1/512 %RH
            h_data: uint = 0..16,
            /// Data valid
            h_valid: bool = 16,
            /// CRC-7 over h_data and h_valid
            h_crc: uint = 17..24,
        }
    }
);
