pub mod sequencer;
pub mod tables;

use crate::adapters;
use crate::configuration;
use crate::cp2155;
use crate::device;
use crate::error;
use crate::flag;
use crate::poll;
use crate::properties;
use crate::sink;
use crate::types;
use crate::usb;
use std::io::Read;
use std::io::Write;

pub use crate::configuration::Configuration;

pub const VENDOR_ID: u16 = 0x04a9;

#[repr(u16)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Variant {
    Lide600 = 0x2224,
    Lide70 = 0x2225,
}

impl Variant {
    pub fn product_id(self) -> u16 {
        self as u16
    }

    pub fn model(self) -> &'static str {
        match self {
            Self::Lide600 => "CanoScan LiDE 600F",
            Self::Lide70 => "CanoScan LiDE 70",
        }
    }

    pub fn init_program(self) -> &'static [cp2155::Step] {
        match self {
            Self::Lide600 => tables::LIDE_600_INIT,
            Self::Lide70 => tables::LIDE_70_INIT,
        }
    }

    pub fn start_program(self, resolution: configuration::Resolution) -> &'static [cp2155::Step] {
        use configuration::Resolution;
        match (self, resolution) {
            (Self::Lide600, Resolution::Dpi75) => tables::LIDE_600_START_75,
            (Self::Lide600, Resolution::Dpi150) => tables::LIDE_600_START_150,
            (Self::Lide600, Resolution::Dpi300) => tables::LIDE_600_START_300,
            (Self::Lide600, Resolution::Dpi600) => tables::LIDE_600_START_600,
            (Self::Lide600, Resolution::Dpi1200) => tables::LIDE_600_START_1200,
            (Self::Lide70, Resolution::Dpi75) => tables::LIDE_70_START_75,
            (Self::Lide70, Resolution::Dpi150) => tables::LIDE_70_START_150,
            (Self::Lide70, Resolution::Dpi300) => tables::LIDE_70_START_300,
            (Self::Lide70, Resolution::Dpi600) => tables::LIDE_70_START_600,
            (Self::Lide70, Resolution::Dpi1200) => tables::LIDE_70_START_1200,
        }
    }

    pub fn motor_program(self) -> &'static [cp2155::Step] {
        match self {
            Self::Lide600 => tables::LIDE_600_MOTOR,
            Self::Lide70 => tables::LIDE_70_MOTOR,
        }
    }

    pub fn back_program(self) -> &'static [cp2155::Step] {
        match self {
            Self::Lide600 => tables::LIDE_600_BACK,
            Self::Lide70 => tables::LIDE_70_BACK,
        }
    }

    /// First sensor pixel over the bed.
    pub fn left_edge(self, resolution: configuration::Resolution) -> u16 {
        match (self, resolution) {
            (Self::Lide600, configuration::Resolution::Dpi1200) => 0x1e3,
            (Self::Lide600, _) => 0x1b3,
            (Self::Lide70, configuration::Resolution::Dpi1200) => 0x87,
            (Self::Lide70, _) => 0x69,
        }
    }

    /// Whether the red channel needs the boosted gamma curve.
    pub fn red_enhanced(self, resolution: configuration::Resolution) -> bool {
        matches!(
            (self, resolution),
            (Self::Lide600, configuration::Resolution::Dpi300)
                | (Self::Lide70, configuration::Resolution::Dpi600)
        )
    }
}

impl TryFrom<u16> for Variant {
    type Error = Error;

    fn try_from(product_id: u16) -> Result<Self, Self::Error> {
        match product_id {
            0x2224 => Ok(Self::Lide600),
            0x2225 => Ok(Self::Lide70),
            product_id => Err(Error::UnsupportedProduct {
                vendor_id: VENDOR_ID,
                product_id,
            }),
        }
    }
}

/// Sensor window `(x_start, x_end)` for a scan area.
///
/// Below 600 dpi the chip downsamples, so the window is programmed at full resolution.
pub fn window(
    variant: Variant,
    resolution: configuration::Resolution,
    x1: i64,
    pixels_per_line: usize,
) -> (u16, u16) {
    let dpi = resolution.dpi() as i64;
    let base_dpi = configuration::BASE_DPI as i64;
    let mut width = pixels_per_line as i64;
    if dpi < base_dpi {
        width = width * base_dpi / dpi;
    }
    width |= 0xf;
    let left_edge = variant.left_edge(resolution) as i64;
    let x_start = if dpi < base_dpi {
        left_edge + x1
    } else {
        left_edge + x1 * dpi / base_dpi
    };
    (x_start as u16, (x_start + width) as u16)
}

#[derive(thiserror::Error, Debug, Clone)]
pub enum Error {
    #[error(transparent)]
    Usb(#[from] usb::Error),

    #[error(transparent)]
    Configuration(#[from] configuration::Error),

    #[error("the scanner did not answer the presence probe")]
    NotPresent,

    #[error("unsupported product {vendor_id:04x}:{product_id:04x}")]
    UnsupportedProduct { vendor_id: u16, product_id: u16 },

    #[error("no image data after {0:?}")]
    DataTimeout(std::time::Duration),

    #[error("the head did not reach the home sensor after {0:?}")]
    HomeTimeout(std::time::Duration),

    #[error("scratch buffer error ({0})")]
    Sink(String),

    #[error("no scan is ready")]
    Idle,

    #[error("scan cancelled")]
    Cancelled,
}

impl From<rusb::Error> for Error {
    fn from(error: rusb::Error) -> Self {
        usb::Error::from(error).into()
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Sink(error.to_string())
    }
}

impl Error {
    pub fn status(&self) -> error::Status {
        match self {
            Self::Usb(usb::Error::Busy) => error::Status::DeviceBusy,
            Self::Usb(usb::Error::Name(_)) | Self::Usb(usb::Error::Device) => {
                error::Status::DeviceNotFound
            }
            Self::Usb(_) => error::Status::IoError,
            Self::Configuration(_) | Self::Idle => error::Status::Inval,
            Self::NotPresent => error::Status::DeviceNotFound,
            Self::UnsupportedProduct { .. } => error::Status::Unsupported,
            Self::DataTimeout(_) | Self::HomeTimeout(_) | Self::Sink(_) => error::Status::IoError,
            Self::Cancelled => error::Status::Cancelled,
        }
    }
}

pub struct Device<Transport = usb::Handle> {
    sequencer: sequencer::Sequencer<Transport>,
    configuration: Configuration,
    flag: flag::Flag<Error>,
    sink: Option<sink::Sink>,
    name: String,
    speed: usb::Speed,
}

impl<Transport: usb::Bulk> Device<Transport> {
    pub fn from_transport(
        transport: Transport,
        variant: Variant,
        configuration: Configuration,
    ) -> Self {
        Self::with_clock(
            transport,
            variant,
            configuration,
            std::sync::Arc::new(poll::SystemClock),
        )
    }

    pub fn with_clock(
        transport: Transport,
        variant: Variant,
        configuration: Configuration,
        clock: std::sync::Arc<dyn poll::Clock>,
    ) -> Self {
        let flag = flag::Flag::new();
        Self {
            sequencer: sequencer::Sequencer::new(
                cp2155::Chip::new(transport, clock),
                variant,
                flag.clone(),
            ),
            configuration,
            flag,
            sink: None,
            name: format!("{:04x}:{:04x}", VENDOR_ID, variant.product_id()),
            speed: usb::Speed::Unknown,
        }
    }

    pub fn variant(&self) -> Variant {
        self.sequencer.variant()
    }

    pub fn model(&self) -> &'static str {
        self.variant().model()
    }

    pub fn transport(&self) -> &Transport {
        self.sequencer.chip().transport()
    }

    pub fn state(&self) -> sequencer::State {
        self.sequencer.state()
    }

    /// Values programmed by the last start sequence.
    pub fn registers(&self) -> &cp2155::Registers {
        self.sequencer.registers()
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn set_configuration(&mut self, configuration: Configuration) {
        self.configuration = configuration;
    }

    pub fn parameters(&self) -> types::Parameters {
        self.configuration.parameters()
    }

    /// Returns a clone of the cancellation flag, which may be raised from another thread.
    pub fn cancel_flag(&self) -> flag::Flag<Error> {
        self.flag.clone()
    }

    /// Builds the reassembly engine for the current configuration.
    pub fn planar_adapter(&self) -> Result<adapters::planar::Adapter, Error> {
        let area = self.configuration.area()?;
        Ok(adapters::planar::Adapter::from_parameters(
            &self.parameters(),
            area.skipped_lines(),
            self.configuration.absolute_threshold(),
        ))
    }

    /// Runs a complete scan into the scratch sink, which `read` then serves.
    pub fn start(&mut self) -> Result<(), Error> {
        self.sink = None;
        if self.flag.clear() {
            tracing::debug!("discarding a stale cancellation");
        }
        if let Some(warning) = self.flag.load_warning() {
            tracing::debug!("discarding a stale warning: {}", warning);
        }
        let parameters = self.parameters();
        let area = self.configuration.area()?;
        let mut adapter: adapters::Adapter = self.planar_adapter()?.into();
        let mut sink = sink::Sink::new(self.configuration.buffer)?;
        tracing::info!(
            "{} scan at {}, {} pixels x {} lines ({:?})",
            self.model(),
            area.resolution,
            parameters.pixels_per_line,
            parameters.lines,
            self.configuration.mode
        );
        match self.scan(&area, &parameters, &mut adapter, &mut sink) {
            Ok(()) => {
                sink.rewind()?;
                self.sink = Some(sink);
                tracing::info!("scan complete");
                Ok(())
            }
            Err(error) => {
                tracing::info!("scan aborted: {}", error);
                self.park();
                Err(error)
            }
        }
    }

    fn scan(
        &mut self,
        area: &configuration::Area,
        parameters: &types::Parameters,
        adapter: &mut adapters::Adapter,
        sink: &mut sink::Sink,
    ) -> Result<(), Error> {
        let timeouts = self.configuration.timeouts;
        self.sequencer.init()?;
        self.sequencer.go_home(timeouts.home)?;
        let (x_start, x_end) = window(
            self.variant(),
            area.resolution,
            area.x1,
            parameters.pixels_per_line,
        );
        self.sequencer.set_window(x_start, x_end);
        self.sequencer.send_start_blob(area.resolution)?;
        let mut buffer = vec![0u8; cp2155::MAX_READ];
        loop {
            if self.flag.is_cancelled() {
                return Err(Error::Cancelled);
            }
            if adapter.is_complete() {
                self.sequencer.init()?;
                adapter.reset();
                break;
            }
            let size = self
                .sequencer
                .wait_for_data(area.resolution, timeouts.data)?
                .min(cp2155::MAX_READ);
            self.sequencer.read_data(&mut buffer[..size])?;
            let (rows, count) = adapter.copy_chunk(&buffer[..size]);
            sink.write_all(&rows)?;
            tracing::debug!("read {} bytes, {} rows", size, count);
        }
        sink.flush()?;
        self.sequencer.go_home_without_wait()?;
        Ok(())
    }

    /// Copies scan data into `buffer`.
    ///
    /// Returns `Ok(None)` once the data is exhausted, after which the scan data is released.
    pub fn read(&mut self, buffer: &mut [u8]) -> Result<Option<usize>, Error> {
        let sink = self.sink.as_mut().ok_or(Error::Idle)?;
        match sink.read(buffer) {
            Ok(0) if !buffer.is_empty() => {
                self.sink = None;
                Ok(None)
            }
            Ok(length) => Ok(Some(length)),
            Err(error) => {
                self.sink = None;
                Err(error.into())
            }
        }
    }

    /// Takes the warning left by the last cancellation, if parking the head failed.
    ///
    /// `start` discards any warning that was not taken.
    pub fn take_warning(&self) -> Option<Error> {
        self.flag.load_warning()
    }

    pub fn cancel(&mut self) {
        self.flag.cancel();
        self.sink = None;
        self.park();
    }

    /// Sends the head home without waiting, failures are kept as a warning on the flag.
    fn park(&mut self) {
        if let Err(error) = self.sequencer.go_home_without_wait() {
            tracing::warn!("parking failed: {}", error);
            self.flag.store_warning_if_not_set(error);
        }
    }
}

impl device::Usb for Device {
    type Adapter = adapters::planar::Adapter;

    type Configuration = Configuration;

    type Error = Error;

    type Properties = properties::Scanner<Self::Configuration>;

    const VENDOR_ID: u16 = VENDOR_ID;

    const PRODUCT_IDS: &'static [u16] = &[0x2224, 0x2225];

    const PROPERTIES: Self::Properties = Self::Properties {
        name: "Canon LiDE 70",
        max_width: configuration::MAX_WIDTH as u16,
        max_height: configuration::MAX_HEIGHT as u16,
        resolutions: &configuration::Resolution::ALL,
        default_configuration: Configuration::DEFAULT,
    };

    const DEFAULT_USB_CONFIGURATION: usb::Configuration = usb::Configuration {
        interface: 0,
        timeout: std::time::Duration::from_secs(30),
    };

    fn open(
        name: &Option<&str>,
        configuration: Self::Configuration,
        usb_configuration: &usb::Configuration,
    ) -> Result<Self, Self::Error> {
        let context = rusb::Context::new()?;
        let opened = Self::handle_from_name(&context, name)?;
        if opened.vendor_id != VENDOR_ID {
            return Err(Error::UnsupportedProduct {
                vendor_id: opened.vendor_id,
                product_id: opened.product_id,
            });
        }
        let variant = Variant::try_from(opened.product_id)?;
        let handle = usb::Handle::new(opened.handle, usb_configuration)?;
        let speed = handle.speed();
        tracing::info!("opened {} at {} ({})", variant.model(), opened.name, speed);
        let mut device = Self::from_transport(handle, variant, configuration);
        device.name = opened.name;
        device.speed = speed;
        Ok(device)
    }

    fn update_configuration(&mut self, configuration: Self::Configuration) {
        self.set_configuration(configuration);
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn speed(&self) -> usb::Speed {
        self.speed
    }

    fn adapter(&self) -> Result<Self::Adapter, Self::Error> {
        self.planar_adapter()
    }
}
