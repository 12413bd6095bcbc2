use crate::types;

pub const MILLIMETRES_PER_INCH: f64 = 25.4;

/// Native resolution of the sensor; area coordinates are expressed in pixels at this density.
pub const BASE_DPI: u16 = 600;

/// Bed width in base pixels.
pub const MAX_WIDTH: i64 = 5104;

/// Bed height in base pixels.
pub const MAX_HEIGHT: i64 = 7300;

/// Smallest accepted span, in base pixels, along either axis.
pub const MIN_SPAN: i64 = 10;

/// Dead area at the top of the bed skipped at 300 dpi and above.
pub const TOP_MARGIN_MM: f64 = 7.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Mode {
    Lineart,
    Gray,
    Color,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Resolution {
    Dpi75,
    Dpi150,
    Dpi300,
    Dpi600,
    Dpi1200,
}

impl Resolution {
    pub const ALL: [Resolution; 5] = [
        Resolution::Dpi75,
        Resolution::Dpi150,
        Resolution::Dpi300,
        Resolution::Dpi600,
        Resolution::Dpi1200,
    ];

    pub fn dpi(self) -> u16 {
        match self {
            Self::Dpi75 => 75,
            Self::Dpi150 => 150,
            Self::Dpi300 => 300,
            Self::Dpi600 => 600,
            Self::Dpi1200 => 1200,
        }
    }
}

impl TryFrom<u16> for Resolution {
    type Error = Error;

    fn try_from(dpi: u16) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|resolution| resolution.dpi() == dpi)
            .ok_or(Error::Resolution(dpi))
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{} dpi", self.dpi())
    }
}

/// Scan window in millimetres from the top-left corner of the bed.
#[derive(Debug, Copy, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Geometry {
    pub tl_x: f64,
    pub tl_y: f64,
    pub br_x: f64,
    pub br_y: f64,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Buffer {
    TemporaryFile,
    Memory,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Timeouts {
    /// Longest wait for the chip to report buffered image data.
    pub data: std::time::Duration,

    /// Longest wait for the head to reach the home sensor.
    pub home: std::time::Duration,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Configuration {
    pub mode: Mode,
    pub resolution: u16,

    /// Lineart binarization threshold, in percent.
    pub threshold: u8,

    pub geometry: Geometry,
    pub buffer: Buffer,
    pub timeouts: Timeouts,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("unsupported resolution {0} dpi")]
    Resolution(u16),

    #[error("threshold {0} is larger than 100 %")]
    Threshold(u8),

    #[error("horizontal range {left}..{right} is outside 0..5104")]
    Horizontal { left: i64, right: i64 },

    #[error("vertical range {top}..{bottom} is outside 0..7300")]
    Vertical { top: i64, bottom: i64 },

    #[error("scan area {width}x{height} is smaller than 10x10")]
    Span { width: i64, height: i64 },
}

/// Validated scan window, in 600 dpi pixels, with the top margin applied.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Area {
    pub resolution: Resolution,
    pub x1: i64,
    pub x2: i64,
    pub y1: i64,
    pub y2: i64,
}

impl Area {
    /// Checks a window given in base pixels and stores its edges.
    ///
    /// `width` and `height` are the spans measured from the millimetre sizes, which may
    /// differ by one pixel from `right - left` after truncation.
    pub fn new(
        resolution: u16,
        left: i64,
        top: i64,
        right: i64,
        bottom: i64,
        width: i64,
        height: i64,
    ) -> Result<Self, Error> {
        if left < 0 || right > MAX_WIDTH {
            return Err(Error::Horizontal { left, right });
        }
        if top < 0 || bottom > MAX_HEIGHT {
            return Err(Error::Vertical { top, bottom });
        }
        if right - left < MIN_SPAN || bottom - top < MIN_SPAN {
            return Err(Error::Span {
                width: right - left,
                height: bottom - top,
            });
        }
        let resolution = Resolution::try_from(resolution)?;
        Ok(Self {
            resolution,
            x1: left,
            x2: left + width,
            y1: top,
            y2: top + height,
        })
    }

    /// Rows delivered by the chip before the first requested row.
    pub fn skipped_lines(&self) -> usize {
        (self.y1 * self.resolution.dpi() as i64 / BASE_DPI as i64) as usize
    }
}

/// Converts millimetres to pixels at the given density, truncating toward zero.
pub fn millimetres_to_pixels(millimetres: f64, dpi: u16) -> i64 {
    (millimetres / MILLIMETRES_PER_INCH * dpi as f64) as i64
}

impl Configuration {
    pub const DEFAULT: Self = Self {
        mode: Mode::Color,
        resolution: 600,
        threshold: 75,
        geometry: Geometry {
            tl_x: 0.0,
            tl_y: 0.0,
            br_x: 80.0,
            br_y: 100.0,
        },
        buffer: Buffer::TemporaryFile,
        timeouts: Timeouts {
            data: std::time::Duration::from_secs(5),
            home: std::time::Duration::from_secs(60),
        },
    };

    pub fn deserialize_bincode(data: &[u8]) -> bincode::Result<Configuration> {
        bincode::deserialize(data)
    }

    pub fn top_margin(&self) -> f64 {
        if self.resolution >= 300 {
            TOP_MARGIN_MM
        } else {
            0.0
        }
    }

    pub fn parameters(&self) -> types::Parameters {
        let pixels_per_line = millimetres_to_pixels(
            self.geometry.br_x - self.geometry.tl_x,
            self.resolution,
        )
        .max(0) as usize;
        let lines = millimetres_to_pixels(self.geometry.br_y - self.geometry.tl_y, self.resolution)
            .max(0) as usize;
        match self.mode {
            Mode::Color => types::Parameters::rgb(pixels_per_line, lines),
            Mode::Gray => types::Parameters::gray(pixels_per_line, lines),
            Mode::Lineart => types::Parameters::lineart(pixels_per_line, lines),
        }
    }

    pub fn area(&self) -> Result<Area, Error> {
        if self.threshold > 100 {
            return Err(Error::Threshold(self.threshold));
        }
        let margin = self.top_margin();
        let geometry = &self.geometry;
        Area::new(
            self.resolution,
            millimetres_to_pixels(geometry.tl_x, BASE_DPI),
            millimetres_to_pixels(margin + geometry.tl_y, BASE_DPI),
            millimetres_to_pixels(geometry.br_x, BASE_DPI),
            millimetres_to_pixels(margin + geometry.br_y, BASE_DPI),
            millimetres_to_pixels(geometry.br_x - geometry.tl_x, BASE_DPI),
            millimetres_to_pixels(geometry.br_y - geometry.tl_y, BASE_DPI),
        )
    }

    pub fn absolute_threshold(&self) -> u8 {
        (self.threshold as u16 * 255 / 100).min(255) as u8
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::DEFAULT
    }
}
