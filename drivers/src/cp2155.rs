//! CP2155 register access over a pair of bulk pipes.
//!
//! Every command is a short frame on the bulk-out pipe. Register reads and block reads are
//! answered on the bulk-in pipe after a fixed settle delay.

use crate::poll;
use crate::usb;

/// Largest block the chip delivers in a single read.
pub const MAX_READ: usize = 0xf000;

pub const SETTLE: std::time::Duration = std::time::Duration::from_millis(1);

pub const READ_SIZE_HIGH: u16 = 0x72;
pub const READ_SIZE_LOW: u16 = 0x73;

const MAKE_BUF_HIGH_WORD: u16 = 62756;
const MAKE_BUF_LOW_WORD: u16 = 20918;

const GAMMA_ENTRIES: usize = 0x100;

/// Size of a gamma upload: a 4-byte header followed by one byte per entry.
pub const GAMMA_TABLE_SIZE: usize = GAMMA_ENTRIES + 4;

/// Per-scan values substituted into register programs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Registers {
    pub left: u16,
    pub right: u16,
    pub bottom: u16,
    pub lamps: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variable {
    LeftHigh,
    LeftLow,
    RightHigh,
    RightLow,
    Lamps,
    BottomHigh,
    BottomLow,
}

impl Registers {
    pub fn value(&self, variable: Variable) -> u8 {
        match variable {
            Variable::LeftHigh => (self.left >> 8) as u8,
            Variable::LeftLow => (self.left & 0xff) as u8,
            Variable::RightHigh => (self.right >> 8) as u8,
            Variable::RightLow => (self.right & 0xff) as u8,
            Variable::Lamps => self.lamps,
            Variable::BottomHigh => (self.bottom >> 8) as u8,
            Variable::BottomLow => (self.bottom & 0xff) as u8,
        }
    }
}

/// One instruction of a register program.
#[derive(Debug, Clone, Copy)]
pub enum Step {
    /// Write a constant to a register.
    Set(u16, u8),

    /// Write a per-scan value to a register.
    Load(u16, Variable),

    /// Send a generated motor buffer of the given size (header included) to the three
    /// mirror addresses.
    BigWrite(usize),

    /// Send a header-prefixed payload to a block address (high byte 0x74, low byte 0x75).
    Block(&'static [u8], u16),
}

/// Header of a bulk payload: `04 70` followed by the little-endian payload length.
pub fn header(size: usize) -> [u8; 4] {
    let length = size - 4;
    [0x04, 0x70, (length & 0xff) as u8, ((length >> 8) & 0xff) as u8]
}

/// Builds the motor buffer sent by `big_write`: a header followed by the repeated
/// little-endian words 62756 and 20918.
pub fn make_buf(size: usize) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(size);
    buffer.extend_from_slice(&header(size));
    let [high_low, high_high] = MAKE_BUF_HIGH_WORD.to_le_bytes();
    let [low_low, low_high] = MAKE_BUF_LOW_WORD.to_le_bytes();
    let pattern = [high_low, high_high, low_low, low_high];
    while buffer.len() < size {
        let remaining = size - buffer.len();
        buffer.extend_from_slice(&pattern[..remaining.min(pattern.len())]);
    }
    buffer
}

pub struct Chip<Transport> {
    transport: Transport,
    clock: std::sync::Arc<dyn poll::Clock>,
}

impl<Transport: usb::Bulk> Chip<Transport> {
    pub fn new(transport: Transport, clock: std::sync::Arc<dyn poll::Clock>) -> Self {
        Self { transport, clock }
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    pub fn clock(&self) -> std::sync::Arc<dyn poll::Clock> {
        self.clock.clone()
    }

    fn write_all(&mut self, buffer: &[u8]) -> Result<(), usb::Error> {
        let written = self.transport.write_bulk(buffer)?;
        if written != buffer.len() {
            return Err(usb::Error::ShortWrite {
                requested: buffer.len(),
                written,
            });
        }
        Ok(())
    }

    fn read_exact(&mut self, buffer: &mut [u8]) -> Result<(), usb::Error> {
        let read = self.transport.read_bulk(buffer)?;
        if read != buffer.len() {
            return Err(usb::Error::ShortRead {
                requested: buffer.len(),
                read,
            });
        }
        Ok(())
    }

    pub fn set(&mut self, register: u16, value: u8) -> Result<(), usb::Error> {
        let frame = [
            ((register >> 8) & 0xff) as u8,
            (register & 0xff) as u8,
            0x01,
            0x00,
            value,
        ];
        tracing::trace!("set {:#06x} = {:#04x}", register, value);
        self.write_all(&frame)
    }

    pub fn get(&mut self, register: u16) -> Result<u8, usb::Error> {
        self.write_all(&[0x01, (register & 0xff) as u8, 0x01, 0x00])?;
        self.clock.sleep(SETTLE);
        let mut value = [0u8; 1];
        self.read_exact(&mut value)?;
        tracing::trace!("get {:#06x} -> {:#04x}", register, value[0]);
        Ok(value[0])
    }

    /// Reads `buffer.len()` bytes of image data.
    pub fn read_block(&mut self, buffer: &mut [u8]) -> Result<(), usb::Error> {
        let size = buffer.len();
        self.write_all(&[0x05, 0x70, (size & 0xff) as u8, ((size >> 8) & 0xff) as u8])?;
        self.clock.sleep(SETTLE);
        self.read_exact(buffer)?;
        tracing::trace!("read block of {} bytes", size);
        Ok(())
    }

    /// Sends a header-prefixed payload to the block address `address` (0x74 high, 0x75 low).
    pub fn write_block(&mut self, block: &[u8], address: u16) -> Result<(), usb::Error> {
        let length = block.len() - 4;
        self.set(0x71, 0x01)?;
        self.set(0x0230, 0x11)?;
        self.set(0x71, 0x14)?;
        self.set(0x72, ((length >> 8) & 0xff) as u8)?;
        self.set(0x73, (length & 0xff) as u8)?;
        self.set(0x74, ((address >> 8) & 0xff) as u8)?;
        self.set(0x75, (address & 0xff) as u8)?;
        self.set(0x76, 0x00)?;
        self.set(0x0239, 0x40)?;
        self.set(0x0238, 0x89)?;
        self.set(0x023c, 0x2f)?;
        self.set(0x0264, 0x20)?;
        tracing::trace!("block of {} bytes to {:#06x}", block.len(), address);
        self.write_all(block)
    }

    /// The chip expects the motor buffer mirrored at three addresses.
    pub fn big_write(&mut self, size: usize) -> Result<(), usb::Error> {
        let buffer = make_buf(size);
        for address in [0x0000, 0x00b0, 0x0160] {
            self.write_block(&buffer, address)?;
        }
        Ok(())
    }

    /// Sends one gamma curve (4-byte header and 256 entries) to a 24-bit table address.
    pub fn write_gamma(
        &mut self,
        table: &[u8; GAMMA_TABLE_SIZE],
        address: u32,
    ) -> Result<(), usb::Error> {
        let count = GAMMA_ENTRIES;
        self.set(0x71, 0x01)?;
        self.set(0x0230, 0x11)?;
        self.set(0x71, 0x16)?;
        self.set(0x72, ((count >> 8) & 0xff) as u8)?;
        self.set(0x73, (count & 0xff) as u8)?;
        self.set(0x74, ((address >> 16) & 0xff) as u8)?;
        self.set(0x75, ((address >> 8) & 0xff) as u8)?;
        self.set(0x76, (address & 0xff) as u8)?;
        self.set(0x0239, 0x40)?;
        self.set(0x0238, 0x89)?;
        self.set(0x023c, 0x2f)?;
        self.set(0x0264, 0x20)?;
        self.write_all(table)
    }

    /// Writes the red curve at 0x000 and the green and blue curves at 0x100 and 0x200.
    pub fn set_gamma(
        &mut self,
        red: &[u8; GAMMA_TABLE_SIZE],
        green_and_blue: &[u8; GAMMA_TABLE_SIZE],
    ) -> Result<(), usb::Error> {
        self.write_gamma(red, 0x000)?;
        self.write_gamma(green_and_blue, 0x100)?;
        self.write_gamma(green_and_blue, 0x200)
    }

    pub fn play(&mut self, program: &[Step], registers: &Registers) -> Result<(), usb::Error> {
        for step in program {
            match *step {
                Step::Set(register, value) => self.set(register, value)?,
                Step::Load(register, variable) => self.set(register, registers.value(variable))?,
                Step::BigWrite(size) => self.big_write(size)?,
                Step::Block(block, address) => self.write_block(block, address)?,
            }
        }
        Ok(())
    }
}
