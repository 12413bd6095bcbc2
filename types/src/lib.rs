#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Frame {
    Gray = 0,
    Rgb = 1,
}

impl Frame {
    pub fn channels(self) -> usize {
        match self {
            Frame::Gray => 1,
            Frame::Rgb => 3,
        }
    }
}

/// Geometry and encoding of the rows returned by a scan.
///
/// Rows are packed: RGB rows hold three bytes per pixel, 8-bit gray rows one byte per pixel
/// and 1-bit rows eight pixels per byte, most significant bit first, padded to a byte.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Parameters {
    pub format: Frame,
    pub last_frame: bool,
    pub bytes_per_line: usize,
    pub pixels_per_line: usize,
    pub lines: usize,
    pub depth: u8,
}

impl Parameters {
    pub fn rgb(pixels_per_line: usize, lines: usize) -> Self {
        Self {
            format: Frame::Rgb,
            last_frame: true,
            bytes_per_line: pixels_per_line * 3,
            pixels_per_line,
            lines,
            depth: 8,
        }
    }

    pub fn gray(pixels_per_line: usize, lines: usize) -> Self {
        Self {
            format: Frame::Gray,
            last_frame: true,
            bytes_per_line: pixels_per_line,
            pixels_per_line,
            lines,
            depth: 8,
        }
    }

    pub fn lineart(pixels_per_line: usize, lines: usize) -> Self {
        Self {
            format: Frame::Gray,
            last_frame: true,
            bytes_per_line: (pixels_per_line + 7) / 8,
            pixels_per_line,
            lines,
            depth: 1,
        }
    }

    pub fn image_size(&self) -> usize {
        self.bytes_per_line * self.lines
    }
}
