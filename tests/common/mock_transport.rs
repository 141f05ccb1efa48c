//! Mock transport implementation for testing the ENS210 register map

use ens210::{PART_ID_VALUE, Transport, Width};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Records operations performed on the mock transport
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Read through one of the `readN` primitives
    Read {
        /// Register address
        address: u8,
        /// Primitive used (8, 16, 32 or 64)
        primitive: Width,
        /// Width hint passed along with the call
        width: Width,
        /// Value that was returned
        value: u64,
    },
    /// Write through one of the `writeN` primitives
    Write {
        /// Register address
        address: u8,
        /// Primitive used (8, 16, 32 or 64)
        primitive: Width,
        /// Width hint passed along with the call
        width: Width,
        /// Value that was written
        value: u64,
    },
}

impl Operation {
    /// Register address of the operation
    pub fn address(&self) -> u8 {
        match self {
            Self::Read { address, .. } | Self::Write { address, .. } => *address,
        }
    }

    /// Width hint of the operation
    pub fn width(&self) -> Width {
        match self {
            Self::Read { width, .. } | Self::Write { width, .. } => *width,
        }
    }

    /// Whether this is a write
    pub fn is_write(&self) -> bool {
        matches!(self, Self::Write { .. })
    }
}

/// Shared state for mock transport (uses interior mutability)
#[derive(Debug)]
struct MockState {
    /// Simulated device memory, one byte per address (little-endian registers)
    memory: HashMap<u8, u8>,

    /// Operations log for verification
    operations: Vec<Operation>,

    /// Failure injection flags
    fail_next_read: bool,
    fail_next_write: bool,
}

impl MockState {
    fn new() -> Self {
        let mut state = Self {
            memory: HashMap::new(),
            operations: Vec::new(),
            fail_next_read: false,
            fail_next_write: false,
        };

        // Power-on values: PART_ID, SYS_CTRL.LOW_POWER, SYS_STAT.SYS_ACTIVE
        state.store(0x00, u64::from(PART_ID_VALUE), Width::Bits16);
        state.store(0x10, 0x01, Width::Bits8);
        state.store(0x11, 0x01, Width::Bits8);

        state
    }

    /// Load `width.bytes()` bytes starting at `address`
    fn load(&self, address: u8, width: Width) -> u64 {
        let mut bytes = [0u8; 8];
        for (i, byte) in bytes.iter_mut().take(width.bytes()).enumerate() {
            *byte = self
                .memory
                .get(&address.wrapping_add(i as u8))
                .copied()
                .unwrap_or(0);
        }
        u64::from_le_bytes(bytes)
    }

    /// Store the low `width.bytes()` bytes of `value` starting at `address`
    fn store(&mut self, address: u8, value: u64, width: Width) {
        for (i, byte) in value.to_le_bytes().iter().take(width.bytes()).enumerate() {
            self.memory.insert(address.wrapping_add(i as u8), *byte);
        }
    }

    fn read(&mut self, address: u8, primitive: Width, width: Width) -> Result<u64, MockError> {
        if self.fail_next_read {
            self.fail_next_read = false;
            return Err(MockError::Communication);
        }

        let value = self.load(address, width);
        self.operations.push(Operation::Read {
            address,
            primitive,
            width,
            value,
        });
        Ok(value)
    }

    fn write(
        &mut self,
        address: u8,
        value: u64,
        primitive: Width,
        width: Width,
    ) -> Result<(), MockError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(MockError::Communication);
        }

        self.operations.push(Operation::Write {
            address,
            primitive,
            width,
            value,
        });
        self.store(address, value, width);
        Ok(())
    }
}

/// Mock transport for testing
#[derive(Clone)]
pub struct MockTransport {
    state: Rc<RefCell<MockState>>,
}

impl MockTransport {
    /// Create a new mock transport with power-on register values
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(MockState::new())),
        }
    }

    /// Set a register value without logging an operation
    pub fn set_register(&self, address: u8, value: u64, width: Width) {
        self.state.borrow_mut().store(address, value, width);
    }

    /// Get a register value without logging an operation
    pub fn get_register(&self, address: u8, width: Width) -> u64 {
        self.state.borrow().load(address, width)
    }

    /// Set `PART_ID` register value
    pub fn set_part_id(&self, value: u16) {
        self.set_register(0x00, u64::from(value), Width::Bits16);
    }

    /// Set `T_VAL` contents (24 bits)
    pub fn set_t_val(&self, value: u32) {
        self.set_register(0x30, u64::from(value), Width::Bits24);
    }

    /// Set `H_VAL` contents (24 bits)
    pub fn set_h_val(&self, value: u32) {
        self.set_register(0x33, u64::from(value), Width::Bits24);
    }

    /// Inject a read failure on the next read operation
    pub fn fail_next_read(&self) {
        self.state.borrow_mut().fail_next_read = true;
    }

    /// Inject a write failure on the next write operation
    pub fn fail_next_write(&self) {
        self.state.borrow_mut().fail_next_write = true;
    }

    /// Get the operations log
    pub fn operations(&self) -> Vec<Operation> {
        self.state.borrow().operations.clone()
    }

    /// Clear the operations log
    pub fn clear_operations(&self) {
        self.state.borrow_mut().operations.clear();
    }

    /// Count write operations
    pub fn write_count(&self) -> usize {
        self.state
            .borrow()
            .operations
            .iter()
            .filter(|op| op.is_write())
            .count()
    }

    /// Count read operations
    pub fn read_count(&self) -> usize {
        self.state
            .borrow()
            .operations
            .iter()
            .filter(|op| !op.is_write())
            .count()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

/// Mock error type
#[derive(Debug, Clone, PartialEq)]
pub enum MockError {
    /// Simulated communication error
    Communication,
}

impl Transport for MockTransport {
    type Error = MockError;

    fn read8(&mut self, address: u8, width: Width) -> Result<u8, Self::Error> {
        let value = self.state.borrow_mut().read(address, Width::Bits8, width)?;
        Ok(value as u8)
    }

    fn read16(&mut self, address: u8, width: Width) -> Result<u16, Self::Error> {
        let value = self.state.borrow_mut().read(address, Width::Bits16, width)?;
        Ok(value as u16)
    }

    fn read32(&mut self, address: u8, width: Width) -> Result<u32, Self::Error> {
        let value = self.state.borrow_mut().read(address, Width::Bits32, width)?;
        Ok(value as u32)
    }

    fn read64(&mut self, address: u8, width: Width) -> Result<u64, Self::Error> {
        self.state.borrow_mut().read(address, Width::Bits64, width)
    }

    fn write8(&mut self, address: u8, value: u8, width: Width) -> Result<(), Self::Error> {
        self.state
            .borrow_mut()
            .write(address, u64::from(value), Width::Bits8, width)
    }

    fn write16(&mut self, address: u8, value: u16, width: Width) -> Result<(), Self::Error> {
        self.state
            .borrow_mut()
            .write(address, u64::from(value), Width::Bits16, width)
    }

    fn write32(&mut self, address: u8, value: u32, width: Width) -> Result<(), Self::Error> {
        self.state
            .borrow_mut()
            .write(address, u64::from(value), Width::Bits32, width)
    }

    fn write64(&mut self, address: u8, value: u64, width: Width) -> Result<(), Self::Error> {
        self.state
            .borrow_mut()
            .write(address, value, Width::Bits64, width)
    }
}
