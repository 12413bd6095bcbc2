#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Configuration {
    pub interface: u8,
    pub timeout: std::time::Duration,
}

impl Configuration {
    pub fn deserialize_bincode(data: &[u8]) -> bincode::Result<Configuration> {
        bincode::deserialize(data)
    }
}

#[derive(thiserror::Error, Debug, Clone)]
pub enum Error {
    #[error(transparent)]
    Rusb(#[from] rusb::Error),

    #[error("device \"{0}\" not found")]
    Name(String),

    #[error("device not found")]
    Device,

    #[error("no bulk {0} endpoint on interface {1}")]
    Endpoint(&'static str, u8),

    #[error("short write ({requested} bytes requested, {written} bytes written)")]
    ShortWrite { requested: usize, written: usize },

    #[error("short read ({requested} bytes requested, {read} bytes read)")]
    ShortRead { requested: usize, read: usize },

    #[error("the device is already used by another program")]
    Busy,
}

#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub enum Speed {
    Unknown,
    Low,
    Full,
    High,
    Super,
    SuperPlus,
}

impl From<rusb::Speed> for Speed {
    fn from(speed: rusb::Speed) -> Self {
        match speed {
            rusb::Speed::Low => Self::Low,
            rusb::Speed::Full => Self::Full,
            rusb::Speed::High => Self::High,
            rusb::Speed::Super => Self::Super,
            rusb::Speed::SuperPlus => Self::SuperPlus,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for Speed {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(match self {
            Self::Unknown => "USB Unknown speed",
            Self::Low => "USB 1.0 Low Speed (1.5 Mb/s)",
            Self::Full => "USB 1.1 Full Speed (12 Mb/s)",
            Self::High => "USB 2.0 High Speed (480 Mb/s)",
            Self::Super => "USB 3.0 SuperSpeed (5.0 Gb/s)",
            Self::SuperPlus => "USB 3.1 SuperSpeed+ (10.0 Gb/s)",
        })
    }
}

/// A pair of bulk pipes, one to the device and one from it.
///
/// Implementations return the number of bytes actually transferred. Callers decide whether
/// a short transfer is an error.
pub trait Bulk {
    fn write_bulk(&mut self, buffer: &[u8]) -> Result<usize, Error>;

    fn read_bulk(&mut self, buffer: &mut [u8]) -> Result<usize, Error>;
}

pub struct Handle {
    handle: rusb::DeviceHandle<rusb::Context>,
    interface: u8,
    endpoint_out: u8,
    endpoint_in: u8,
    timeout: std::time::Duration,
}

impl Handle {
    pub fn new(
        mut handle: rusb::DeviceHandle<rusb::Context>,
        configuration: &Configuration,
    ) -> Result<Self, Error> {
        let (endpoint_out, endpoint_in) =
            bulk_endpoints(&handle.device(), configuration.interface)?;
        // not supported on every platform
        let _ = handle.set_auto_detach_kernel_driver(true);
        handle
            .claim_interface(configuration.interface)
            .map_err(|error| match error {
                rusb::Error::Busy => Error::Busy,
                error => error.into(),
            })?;
        tracing::debug!(
            "claimed interface {} (bulk out {:#04x}, bulk in {:#04x})",
            configuration.interface,
            endpoint_out,
            endpoint_in
        );
        Ok(Self {
            handle,
            interface: configuration.interface,
            endpoint_out,
            endpoint_in,
            timeout: configuration.timeout,
        })
    }

    pub fn speed(&self) -> Speed {
        self.handle.device().speed().into()
    }
}

impl Bulk for Handle {
    fn write_bulk(&mut self, buffer: &[u8]) -> Result<usize, Error> {
        Ok(self
            .handle
            .write_bulk(self.endpoint_out, buffer, self.timeout)?)
    }

    fn read_bulk(&mut self, buffer: &mut [u8]) -> Result<usize, Error> {
        Ok(self.handle.read_bulk(self.endpoint_in, buffer, self.timeout)?)
    }
}

impl Drop for Handle {
    fn drop(&mut self) {
        let _ = self.handle.release_interface(self.interface);
    }
}

/// Returns the (out, in) bulk endpoint addresses of the given interface.
fn bulk_endpoints(
    device: &rusb::Device<rusb::Context>,
    interface_number: u8,
) -> Result<(u8, u8), Error> {
    let descriptor = device.active_config_descriptor()?;
    let mut endpoint_out = None;
    let mut endpoint_in = None;
    for interface in descriptor
        .interfaces()
        .filter(|interface| interface.number() == interface_number)
    {
        for interface_descriptor in interface.descriptors() {
            for endpoint in interface_descriptor
                .endpoint_descriptors()
                .filter(|endpoint| endpoint.transfer_type() == rusb::TransferType::Bulk)
            {
                match endpoint.direction() {
                    rusb::Direction::Out => {
                        endpoint_out.get_or_insert(endpoint.address());
                    }
                    rusb::Direction::In => {
                        endpoint_in.get_or_insert(endpoint.address());
                    }
                }
            }
        }
    }
    Ok((
        endpoint_out.ok_or(Error::Endpoint("out", interface_number))?,
        endpoint_in.ok_or(Error::Endpoint("in", interface_number))?,
    ))
}

/// Formats a device location the way `list_devices` reports it, for instance "001:004".
pub fn device_name(device: &rusb::Device<rusb::Context>) -> String {
    format!("{:03}:{:03}", device.bus_number(), device.address())
}
