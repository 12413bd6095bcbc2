#![allow(dead_code)]

use scanner_drivers::canon_lide70;
use scanner_drivers::flag;
use scanner_drivers::poll;
use scanner_drivers::usb;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub struct VirtualClock {
    start: std::time::Instant,
    elapsed: std::sync::Mutex<std::time::Duration>,
}

impl VirtualClock {
    pub fn new() -> std::sync::Arc<Self> {
        std::sync::Arc::new(Self {
            start: std::time::Instant::now(),
            elapsed: std::sync::Mutex::new(std::time::Duration::ZERO),
        })
    }

    pub fn elapsed(&self) -> std::time::Duration {
        *self.elapsed.lock().unwrap()
    }
}

impl poll::Clock for VirtualClock {
    fn now(&self) -> std::time::Instant {
        self.start + self.elapsed()
    }

    fn sleep(&self, duration: std::time::Duration) {
        *self.elapsed.lock().unwrap() += duration;
    }
}

pub struct State {
    /// Every bulk-out transfer, in order.
    pub frames: Vec<Vec<u8>>,
    pub registers: std::collections::HashMap<u16, u8>,
    pub presence: u8,

    /// Home sensor values returned by successive reads, then `home_sensor_default`.
    pub home_sensor: std::collections::VecDeque<u8>,
    pub home_sensor_default: u8,

    /// Plane-interleaved image data, served from the start after every gamma upload.
    pub data: Vec<u8>,
    pub position: usize,

    /// Largest byte count announced by the data count registers.
    pub chunk: usize,
    pub announced: usize,

    pub block_reads: usize,
    pub cancel_after_block_reads: Option<(usize, flag::Flag<canon_lide70::Error>)>,
    pub short_write: bool,
    pub short_read: bool,
    response: Vec<u8>,
}

#[derive(Clone)]
pub struct Cp2155 {
    pub state: std::sync::Arc<std::sync::Mutex<State>>,
}

impl Cp2155 {
    pub fn new(data: Vec<u8>, chunk: usize) -> Self {
        Self {
            state: std::sync::Arc::new(std::sync::Mutex::new(State {
                frames: Vec::new(),
                registers: std::collections::HashMap::new(),
                presence: 0x81,
                home_sensor: std::collections::VecDeque::new(),
                home_sensor_default: 0x08,
                data,
                position: 0,
                chunk,
                announced: 0,
                block_reads: 0,
                cancel_after_block_reads: None,
                short_write: false,
                short_read: false,
                response: Vec::new(),
            })),
        }
    }

    pub fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap()
    }

    /// Register writes, in order.
    pub fn sets(&self) -> Vec<(u16, u8)> {
        self.lock()
            .frames
            .iter()
            .filter(|frame| frame.len() == 5)
            .map(|frame| ((frame[0] as u16) << 8 | frame[1] as u16, frame[4]))
            .collect()
    }

    pub fn count_sets(&self, register: u16, value: u8) -> usize {
        self.sets()
            .into_iter()
            .filter(|set| *set == (register, value))
            .count()
    }

    /// Raw payloads (block, motor buffer and gamma uploads), in order.
    pub fn payloads(&self) -> Vec<Vec<u8>> {
        self.lock()
            .frames
            .iter()
            .filter(|frame| frame.len() > 5)
            .cloned()
            .collect()
    }

    pub fn gamma_uploads(&self) -> usize {
        self.count_sets(0x71, 0x16)
    }
}

impl usb::Bulk for Cp2155 {
    fn write_bulk(&mut self, buffer: &[u8]) -> Result<usize, usb::Error> {
        let mut state = self.lock();
        state.frames.push(buffer.to_vec());
        match buffer {
            [high, low, 0x01, 0x00, value] => {
                let register = (*high as u16) << 8 | *low as u16;
                state.registers.insert(register, *value);
                if register == 0x71 && *value == 0x16 {
                    state.position = 0;
                }
            }
            [0x01, register, 0x01, 0x00] => {
                let value = match *register {
                    0xd0 => state.presence,
                    0x46 => {
                        let default = state.home_sensor_default;
                        state.home_sensor.pop_front().unwrap_or(default)
                    }
                    0xa5 => {
                        let remaining = state.data.len().saturating_sub(state.position);
                        state.announced = remaining.min(state.chunk) / 2;
                        ((state.announced >> 16) & 0xff) as u8
                    }
                    0xa6 => ((state.announced >> 8) & 0xff) as u8,
                    0xa7 => (state.announced & 0xff) as u8,
                    register => state
                        .registers
                        .get(&(register as u16))
                        .copied()
                        .unwrap_or(0),
                };
                state.response = vec![value];
            }
            [0x05, 0x70, low, high] => {
                let size = (*high as usize) << 8 | *low as usize;
                let start = state.position.min(state.data.len());
                let end = (state.position + size).min(state.data.len());
                let mut response = state.data[start..end].to_vec();
                response.resize(size, 0);
                state.position += size;
                state.response = response;
                state.block_reads += 1;
                let reads = state.block_reads;
                let cancel = matches!(
                    &state.cancel_after_block_reads,
                    Some((after, _)) if *after == reads
                );
                if cancel {
                    if let Some((_, flag)) = state.cancel_after_block_reads.take() {
                        flag.cancel();
                    }
                }
            }
            _ => (),
        }
        if state.short_write {
            Ok(buffer.len() - 1)
        } else {
            Ok(buffer.len())
        }
    }

    fn read_bulk(&mut self, buffer: &mut [u8]) -> Result<usize, usb::Error> {
        let mut state = self.lock();
        let response = std::mem::take(&mut state.response);
        let mut length = response.len().min(buffer.len());
        if state.short_read {
            length = length.saturating_sub(1);
        }
        buffer[..length].copy_from_slice(&response[..length]);
        Ok(length)
    }
}

/// Bytes per plane for a row of `pixels_per_line` pixels.
pub fn padded_width(pixels_per_line: usize) -> usize {
    (pixels_per_line / 16 + 1) * 16
}

/// Value of byte `pixel` of plane `plane` in row `line` (numbered from 1).
pub fn sample(line: usize, plane: usize, pixel: usize) -> u8 {
    ((line * 7 + plane * 31 + pixel * 3) % 256) as u8
}

/// Chip output for `rows` rows, padding bytes included.
pub fn planar_stream(pixels_per_line: usize, rows: usize) -> Vec<u8> {
    let width = padded_width(pixels_per_line);
    let mut stream = Vec::with_capacity(rows * 3 * width);
    for line in 1..=rows {
        for plane in 0..3 {
            for pixel in 0..width {
                stream.push(sample(line, plane, pixel));
            }
        }
    }
    stream
}

pub fn expected_rgb(pixels_per_line: usize, line: usize) -> Vec<u8> {
    (0..pixels_per_line)
        .flat_map(|pixel| (0..3).map(move |plane| sample(line, plane, pixel)))
        .collect()
}

pub fn expected_gray(pixels_per_line: usize, line: usize) -> Vec<u8> {
    (0..pixels_per_line)
        .map(|pixel| {
            ((sample(line, 0, pixel) as u16
                + sample(line, 1, pixel) as u16
                + sample(line, 2, pixel) as u16)
                / 3) as u8
        })
        .collect()
}

pub fn read_all<Transport: usb::Bulk>(
    device: &mut canon_lide70::Device<Transport>,
    chunk: usize,
) -> Result<Vec<u8>, canon_lide70::Error> {
    let mut output = Vec::new();
    let mut buffer = vec![0u8; chunk];
    while let Some(length) = device.read(&mut buffer)? {
        output.extend_from_slice(&buffer[..length]);
    }
    Ok(output)
}
