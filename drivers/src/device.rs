use crate::usb;
use rusb::UsbContext;

pub struct Listed {
    pub name: String,
    pub product_id: u16,
    pub speed: usb::Speed,
}

pub struct Opened {
    pub handle: rusb::DeviceHandle<rusb::Context>,
    pub name: String,
    pub vendor_id: u16,
    pub product_id: u16,
}

pub trait Usb: Sized {
    type Adapter;
    type Configuration;
    type Error;
    type Properties;

    const VENDOR_ID: u16;

    const PRODUCT_IDS: &'static [u16];

    const PROPERTIES: Self::Properties;

    const DEFAULT_USB_CONFIGURATION: usb::Configuration;

    fn open(
        name: &Option<&str>,
        configuration: Self::Configuration,
        usb_configuration: &usb::Configuration,
    ) -> Result<Self, Self::Error>;

    fn update_configuration(&mut self, configuration: Self::Configuration);

    fn name(&self) -> String;

    fn speed(&self) -> usb::Speed;

    fn adapter(&self) -> Result<Self::Adapter, Self::Error>;

    fn matches(descriptor: &rusb::DeviceDescriptor) -> bool {
        descriptor.vendor_id() == Self::VENDOR_ID
            && Self::PRODUCT_IDS.contains(&descriptor.product_id())
    }

    fn list_devices(devices: &rusb::DeviceList<rusb::Context>) -> rusb::Result<Vec<Listed>> {
        let mut result = Vec::new();
        for device in devices.iter() {
            let descriptor = match device.device_descriptor() {
                Ok(descriptor) => descriptor,
                Err(_) => continue,
            };
            if Self::matches(&descriptor) {
                result.push(Listed {
                    name: usb::device_name(&device),
                    product_id: descriptor.product_id(),
                    speed: device.speed().into(),
                });
            }
        }
        Ok(result)
    }

    /// Opens the device called `name` ("bus:address"), or the first supported device.
    ///
    /// A named device is returned whatever its ids, the caller decides whether it is
    /// supported.
    fn handle_from_name(context: &rusb::Context, name: &Option<&str>) -> Result<Opened, usb::Error> {
        for device in context.devices()?.iter() {
            let descriptor = match device.device_descriptor() {
                Ok(descriptor) => descriptor,
                Err(_) => continue,
            };
            let device_name = usb::device_name(&device);
            let selected = match name {
                Some(name) => *name == device_name,
                None => Self::matches(&descriptor),
            };
            if selected {
                return Ok(Opened {
                    handle: device.open()?,
                    name: device_name,
                    vendor_id: descriptor.vendor_id(),
                    product_id: descriptor.product_id(),
                });
            }
        }
        Err(match name {
            Some(name) => usb::Error::Name((*name).to_owned()),
            None => usb::Error::Device,
        })
    }
}
