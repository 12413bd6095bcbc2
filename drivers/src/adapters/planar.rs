//! Reassembly of plane-sequential scan data into packed rows.
//!
//! The chip sends each scan row as three consecutive planes (red, green, blue) of
//! `padded_width` bytes. Planes are interleaved into a row buffer, which is encoded into the
//! output format once the third plane is complete. The row buffer persists across calls, so
//! a plane may straddle two transfers.

use crate::types;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Encoding {
    Rgb,
    Gray,
    Lineart,
}

impl From<&types::Parameters> for Encoding {
    fn from(parameters: &types::Parameters) -> Self {
        match (parameters.format, parameters.depth) {
            (types::Frame::Rgb, _) => Self::Rgb,
            (types::Frame::Gray, 1) => Self::Lineart,
            (types::Frame::Gray, _) => Self::Gray,
        }
    }
}

/// Bytes per plane sent by the chip for the given row width: the next `16k + 15`, plus one.
pub fn padded_width(pixels_per_line: usize) -> usize {
    (pixels_per_line | 0xf) + 1
}

pub struct Adapter {
    row: Vec<u8>,
    output: Vec<u8>,
    plane: usize,
    pixel: usize,
    line: usize,
    padded_width: usize,
    pixels_per_line: usize,
    skipped_lines: usize,
    lines: usize,
    threshold: u8,
    encoding: Encoding,
}

impl Adapter {
    /// `skipped_lines` rows are consumed without output before the first emitted row.
    /// `threshold` only applies to lineart: darker pixels are set.
    pub fn from_parameters(
        parameters: &types::Parameters,
        skipped_lines: usize,
        threshold: u8,
    ) -> Self {
        let padded_width = padded_width(parameters.pixels_per_line);
        Self {
            row: vec![0u8; 3 * padded_width],
            output: vec![0u8; parameters.bytes_per_line],
            plane: 0,
            pixel: 0,
            line: 0,
            padded_width,
            pixels_per_line: parameters.pixels_per_line,
            skipped_lines,
            lines: parameters.lines,
            threshold,
            encoding: parameters.into(),
        }
    }

    pub fn padded_width(&self) -> usize {
        self.padded_width
    }

    pub fn bytes_per_line(&self) -> usize {
        self.output.len()
    }

    /// Number of rows completed so far, skipped rows included.
    pub fn current_line(&self) -> usize {
        self.line
    }

    pub fn is_complete(&self) -> bool {
        self.line >= self.skipped_lines + self.lines
    }

    pub fn reset(&mut self) {
        self.plane = 0;
        self.pixel = 0;
        self.line = 0;
    }

    /// Output bytes that `convert` would produce for `length` more input bytes.
    pub fn output_length(&self, length: usize) -> usize {
        let row_size = 3 * self.padded_width;
        let position = self.line * row_size + self.plane * self.padded_width + self.pixel;
        let last = ((position + length) / row_size).min(self.skipped_lines + self.lines);
        let first = self.line.max(self.skipped_lines);
        last.saturating_sub(first) * self.output.len()
    }

    /// Consumes raw bytes and calls `handle_row` for every emitted row.
    ///
    /// Bytes following the last requested row are dropped. Returns the number of emitted
    /// rows.
    pub fn convert<HandleRow>(&mut self, slice: &[u8], mut handle_row: HandleRow) -> usize
    where
        HandleRow: FnMut(&[u8]),
    {
        let mut rows = 0;
        for byte in slice {
            if self.is_complete() {
                break;
            }
            let index = self.plane + 3 * self.pixel;
            debug_assert!(index < self.row.len());
            self.row[index] = *byte;
            self.pixel += 1;
            if self.pixel == self.padded_width {
                self.pixel = 0;
                self.plane += 1;
                if self.plane == 3 {
                    self.plane = 0;
                    self.line += 1;
                    if self.line > self.skipped_lines {
                        self.encode();
                        handle_row(&self.output);
                        rows += 1;
                    }
                }
            }
        }
        rows
    }

    /// Converts one transfer, returning the packed rows and their count.
    pub fn copy_chunk(&mut self, slice: &[u8]) -> (Vec<u8>, usize) {
        let mut output = Vec::with_capacity(self.output_length(slice.len()));
        let rows = self.convert(slice, |row| output.extend_from_slice(row));
        (output, rows)
    }

    fn encode(&mut self) {
        match self.encoding {
            Encoding::Rgb => {
                let length = 3 * self.pixels_per_line;
                debug_assert!(length <= self.row.len());
                self.output.copy_from_slice(&self.row[..length]);
            }
            Encoding::Gray => {
                for (pixel, value) in self.output.iter_mut().enumerate() {
                    *value = gray(&self.row[3 * pixel..3 * pixel + 3]);
                }
            }
            Encoding::Lineart => {
                for pixel in 0..self.pixels_per_line {
                    if pixel % 8 == 0 {
                        self.output[pixel >> 3] = 0;
                    }
                    if gray(&self.row[3 * pixel..3 * pixel + 3]) < self.threshold {
                        self.output[pixel >> 3] |= 1 << (7 - pixel % 8);
                    }
                }
            }
        }
    }
}

fn gray(rgb: &[u8]) -> u8 {
    ((rgb[0] as u16 + rgb[1] as u16 + rgb[2] as u16) / 3) as u8
}
