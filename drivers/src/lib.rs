pub mod adapters;
pub mod configuration;
pub mod cp2155;
pub mod device;
pub mod devices;
pub mod error;
pub mod flag;
pub mod poll;
pub mod properties;
pub mod sink;
pub mod usb;

pub use crate::adapters::Adapter;
pub use crate::device::Usb as UsbDevice;
pub use crate::devices::canon_lide70;
pub use crate::devices::list_devices;
pub use crate::devices::open;
pub use crate::devices::Configuration;
pub use crate::devices::Device;
pub use crate::devices::Error;
pub use crate::devices::Properties;
pub use crate::devices::Type;
pub use crate::error::Status;
pub use crate::usb::Configuration as UsbConfiguration;

pub use bincode;
pub use rusb;
pub use scanner_types as types;
