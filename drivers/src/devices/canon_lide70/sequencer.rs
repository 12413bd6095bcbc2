use super::tables;
use super::Error;
use super::Variant;
use crate::configuration;
use crate::cp2155;
use crate::flag;
use crate::poll;
use crate::usb;

pub const PRESENCE_REGISTER: u16 = 0xd0;
pub const HOME_SENSOR_REGISTER: u16 = 0x46;
pub const DATA_COUNT_REGISTERS: [u16; 3] = [0xa5, 0xa6, 0xa7];

/// Home sensor value with the head parked.
pub const PARKED: u8 = 0x08;

/// Home sensor value once the motor has stopped mid-scan.
pub const STOPPED: u8 = 0x00;

/// Lamp mask with the red, green and blue lamps on.
pub const ALL_LAMPS: u8 = 0x07;

pub const GO_HOME_INTERVAL: std::time::Duration = std::time::Duration::from_millis(200);
pub const WAIT_FOR_DATA_INTERVAL: std::time::Duration = std::time::Duration::from_millis(1);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum State {
    Uninitialized,
    Initialized,
    Homed,
    Armed,
    Scanning,
    Parking,
}

/// Vertical travel programmed for a scan, in motor steps at the given resolution.
pub fn bottom(resolution: configuration::Resolution) -> u16 {
    (21900_u32 * resolution.dpi() as u32 / configuration::BASE_DPI as u32) as u16
}

pub struct Sequencer<Transport> {
    chip: cp2155::Chip<Transport>,
    variant: Variant,
    state: State,
    registers: cp2155::Registers,
    flag: flag::Flag<Error>,
}

impl<Transport: usb::Bulk> Sequencer<Transport> {
    pub fn new(chip: cp2155::Chip<Transport>, variant: Variant, flag: flag::Flag<Error>) -> Self {
        Self {
            chip,
            variant,
            state: State::Uninitialized,
            registers: cp2155::Registers::default(),
            flag,
        }
    }

    pub fn chip(&self) -> &cp2155::Chip<Transport> {
        &self.chip
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn registers(&self) -> &cp2155::Registers {
        &self.registers
    }

    fn transition(&mut self, state: State) {
        if self.state != state {
            tracing::debug!("{:?} -> {:?}", self.state, state);
            self.state = state;
        }
    }

    pub fn home_sensor(&mut self) -> Result<u8, Error> {
        let value = self.chip.get(HOME_SENSOR_REGISTER)?;
        tracing::trace!("home sensor: {:#04x}", value);
        Ok(value)
    }

    /// Probes the chip and replays the power-on program.
    pub fn init(&mut self) -> Result<(), Error> {
        let value = self.chip.get(PRESENCE_REGISTER)?;
        if value != 0x81 && value != 0x40 {
            tracing::warn!("unexpected presence value {:#04x}", value);
        }
        if value == 0x00 {
            return Err(Error::NotPresent);
        }
        self.chip.play(self.variant.init_program(), &self.registers)?;
        self.transition(State::Initialized);
        Ok(())
    }

    /// Sets the horizontal window, in sensor pixels.
    pub fn set_window(&mut self, x_start: u16, x_end: u16) {
        self.registers.left = x_start;
        self.registers.right = x_end;
    }

    pub fn send_start_blob(&mut self, resolution: configuration::Resolution) -> Result<(), Error> {
        self.registers.lamps = ALL_LAMPS;
        self.registers.bottom = bottom(resolution);
        self.chip.play(tables::START_PREAMBLE, &self.registers)?;
        self.chip
            .set_gamma(&tables::GAMMA_STANDARD, &tables::GAMMA_STANDARD)?;
        if self.variant.red_enhanced(resolution) {
            self.chip
                .set_gamma(&tables::GAMMA_RED_ENHANCED, &tables::GAMMA_STANDARD)?;
        }
        self.chip
            .play(self.variant.start_program(resolution), &self.registers)?;
        self.chip.play(self.variant.motor_program(), &self.registers)?;
        tracing::debug!(
            "start sequence for {} at {} (window {:#06x}..{:#06x}, bottom {:#06x})",
            self.variant.model(),
            resolution,
            self.registers.left,
            self.registers.right,
            self.registers.bottom
        );
        self.transition(State::Armed);
        Ok(())
    }

    /// Starts moving the head back unless it is already parked.
    pub fn go_home_without_wait(&mut self) -> Result<(), Error> {
        if self.home_sensor()? == PARKED {
            self.transition(State::Homed);
            return Ok(());
        }
        tracing::debug!("parking {}", self.variant.model());
        self.chip.play(self.variant.back_program(), &self.registers)?;
        self.transition(State::Parking);
        Ok(())
    }

    pub fn go_home(&mut self, timeout: std::time::Duration) -> Result<(), Error> {
        if self.home_sensor()? == PARKED {
            self.transition(State::Homed);
            return Ok(());
        }
        self.go_home_without_wait()?;
        let poller = poll::Poller::new(self.chip.clock(), GO_HOME_INTERVAL, timeout);
        loop {
            poller.wait();
            if self.home_sensor()? == PARKED {
                break;
            }
            if poller.expired() {
                return Err(Error::HomeTimeout(timeout));
            }
        }
        self.transition(State::Homed);
        Ok(())
    }

    /// Waits until the chip has buffered image data and returns its size in bytes.
    ///
    /// A stopped motor means the chip dropped the scan program, which is sent again.
    pub fn wait_for_data(
        &mut self,
        resolution: configuration::Resolution,
        timeout: std::time::Duration,
    ) -> Result<usize, Error> {
        let poller = poll::Poller::new(self.chip.clock(), WAIT_FOR_DATA_INTERVAL, timeout);
        loop {
            if self.flag.is_cancelled() {
                return Err(Error::Cancelled);
            }
            if self.home_sensor()? == STOPPED {
                tracing::debug!("motor stopped, sending the start sequence again");
                self.send_start_blob(resolution)?;
                self.home_sensor()?;
            }
            let mut size = 0_usize;
            for register in DATA_COUNT_REGISTERS {
                size = (size << 8) | self.chip.get(register)? as usize;
            }
            if size != 0 {
                self.transition(State::Scanning);
                return Ok(2 * size);
            }
            if poller.expired() {
                return Err(Error::DataTimeout(timeout));
            }
            poller.wait();
        }
    }

    /// Reads `buffer.len()` bytes (at most `cp2155::MAX_READ`) of buffered image data.
    pub fn read_data(&mut self, buffer: &mut [u8]) -> Result<(), Error> {
        debug_assert!(buffer.len() <= cp2155::MAX_READ);
        let size = buffer.len();
        self.chip
            .set(cp2155::READ_SIZE_HIGH, ((size >> 8) & 0xff) as u8)?;
        self.chip.set(cp2155::READ_SIZE_LOW, (size & 0xff) as u8)?;
        self.chip.read_block(buffer)?;
        Ok(())
    }
}
