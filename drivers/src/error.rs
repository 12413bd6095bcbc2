/// Outcome codes reported to the scan API.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Status {
    Good = 0,
    Unsupported = 1,
    Cancelled = 2,
    DeviceBusy = 3,
    Inval = 4,
    Eof = 5,
    IoError = 9,
    DeviceNotFound = 12,
}

impl Status {
    pub fn message(self) -> &'static str {
        match self {
            Self::Good => "success",
            Self::Unsupported => "operation not supported",
            Self::Cancelled => "operation was cancelled",
            Self::DeviceBusy => "device busy",
            Self::Inval => "invalid argument",
            Self::Eof => "end of file reached",
            Self::IoError => "error during device I/O",
            Self::DeviceNotFound => "device not found",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.message())
    }
}
