use crate::adapters;
use crate::device::Usb;
use crate::error;
use crate::types;
use crate::usb;
use rusb::UsbContext;

macro_rules! register {
    ($($module:ident),+) => {
        paste::paste! {
            $(
                pub mod $module;
            )+

            #[derive(Debug, Copy, Clone, PartialEq, Eq)]
            pub enum Type {
                $(
                    [<$module:camel>],
                )+
            }

            impl std::fmt::Display for Type {
                fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    match self {
                        $(
                            Self::[<$module:camel>] => write!(formatter, stringify!($module)),
                        )+
                    }
                }
            }

            impl Type {
                pub fn name(self) -> &'static str  {
                    match self {
                        $(
                            Type::[<$module:camel>] => <$module::Device as Usb>::PROPERTIES.name,
                        )+
                    }
                }
            }

            #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
            #[serde(tag = "type", content = "configuration")]
            pub enum Configuration {
                $(
                    #[serde(rename = "" $module)]
                    [<$module:camel>]($module::Configuration),
                )+
            }

            impl Configuration {
                pub fn deserialize_bincode(
                    device_type: Type,
                    data: &[u8]
                ) -> bincode::Result<Configuration> {
                    match device_type {
                        $(
                            Type::[<$module:camel>] => Ok(
                                Configuration::[<$module:camel>](bincode::deserialize(data)?)
                            ),
                        )+
                    }
                }

                pub fn type_name(&self) -> &'static str {
                    match self {
                        $(
                            Configuration::[<$module:camel>](_) => Type::[<$module:camel>].name(),
                        )+
                    }
                }
            }

            pub enum Device {
                $(
                    [<$module:camel>]($module::Device),
                )+
            }

            pub struct ListedDevice {
                pub device_type: Type,
                pub name: String,
                pub product_id: u16,
                pub speed: usb::Speed,
            }

            pub fn list_devices() -> rusb::Result<Vec<ListedDevice>> {
                let context = rusb::Context::new()?;
                let devices = context.devices()?;
                let mut result = Vec::new();
                $(
                    result.extend(
                        <$module::Device as Usb>::list_devices(&devices)?
                            .into_iter()
                            .map(|listed_device| ListedDevice {
                                device_type: Type::[<$module:camel>],
                                name: listed_device.name,
                                product_id: listed_device.product_id,
                                speed: listed_device.speed,
                            }),
                    );
                )+
                Ok(result)
            }

            pub fn open(
                name: Option<&str>,
                configuration: Option<Configuration>,
                usb_configuration: Option<usb::Configuration>,
            ) -> Result<Device, Error>
            {
                match configuration {
                    Some(configuration) => {
                        match configuration {
                            $(
                                Configuration::[<$module:camel>](configuration) => Ok(
                                    <$module::Device as Usb>::open(
                                        &name,
                                        configuration,
                                        usb_configuration
                                        .as_ref()
                                        .unwrap_or(&<$module::Device as Usb>::DEFAULT_USB_CONFIGURATION),
                                    )
                                    .map(|device| Device::[<$module:camel>](device))
                                    .map_err(|error| Error::from(error).unpack())?
                                ),
                            )+
                        }
                    },
                    None => {
                        $(
                            match <$module::Device as Usb>::open(
                                &name,
                                <$module::Device as Usb>::PROPERTIES.default_configuration.clone(),
                                usb_configuration
                                .as_ref()
                                .unwrap_or(&<$module::Device as Usb>::DEFAULT_USB_CONFIGURATION),
                            ) {
                                Ok(device) => return Ok(Device::[<$module:camel>](device)),
                                Err(error) => match Error::from(error).unpack() {
                                    Error::DeviceWithName {device_type: _, name: _} => (),
                                    Error::Device(_) => (),
                                    error => return Err(error),
                                }
                            };
                        )+
                        Err(match name {
                            Some(name) => Error::Name(name.to_owned()),
                            None => Error::NoDevice
                        })
                    }
                }
            }

            #[derive(Debug, serde::Serialize)]
            pub enum Properties {
                $(
                    #[serde(rename = "" $module)]
                    [<$module:camel>](<$module::Device as Usb>::Properties),
                )+
            }

            impl Device {
                pub fn adapter(&self) -> Result<adapters::Adapter, Error> {
                    match self {
                        $(
                            Self::[<$module:camel>](device) => Ok(device.adapter()?.into()),
                        )+
                    }
                }

                pub fn properties(&self) -> Properties {
                    match self {
                        $(
                            Self::[<$module:camel>](_) => Properties::[<$module:camel>](<$module::Device as Usb>::PROPERTIES),
                        )+
                    }
                }

                pub fn device_type(&self) -> Type {
                    match self {
                        $(
                            Self::[<$module:camel>](_) => Type::[<$module:camel>],
                        )+
                    }
                }

                pub fn name(&self) -> String {
                    match self {
                        $(
                            Self::[<$module:camel>](device) => Usb::name(device),
                        )+
                    }
                }

                pub fn speed(&self) -> usb::Speed {
                    match self {
                        $(
                            Self::[<$module:camel>](device) => device.speed(),
                        )+
                    }
                }

                pub fn parameters(&self) -> types::Parameters {
                    match self {
                        $(
                            Self::[<$module:camel>](device) => device.parameters(),
                        )+
                    }
                }

                pub fn start(&mut self) -> Result<(), Error> {
                    match self {
                        $(
                            Self::[<$module:camel>](device) => Ok(device.start()?),
                        )+
                    }
                }

                pub fn read(&mut self, buffer: &mut [u8]) -> Result<Option<usize>, Error> {
                    match self {
                        $(
                            Self::[<$module:camel>](device) => Ok(device.read(buffer)?),
                        )+
                    }
                }

                pub fn cancel(&mut self) {
                    match self {
                        $(
                            Self::[<$module:camel>](device) => device.cancel(),
                        )+
                    }
                }

                pub fn update_configuration(&mut self, configuration: Configuration) -> Result<(), Error> {
                    match self {
                        $(
                            Self::[<$module:camel>](device) => match configuration {
                                Configuration::[<$module:camel>](configuration) => {
                                    device.update_configuration(configuration);
                                    Ok(())
                                },
                                #[allow(unreachable_patterns)]
                                configuration => Err(Error::UpdateMismatch {
                                    configuration: configuration.type_name().to_owned(),
                                    device: <$module::Device as Usb>::PROPERTIES.name.to_owned(),
                                })
                            },
                        )+
                    }
                }
            }

            #[derive(Debug, PartialEq, Eq)]
            pub struct ParseTypeError {
                on: String
            }

            impl std::fmt::Display for ParseTypeError {
                fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                    write!(formatter, "unknown device type \"{}\"", self.on)
                }
            }

            impl std::str::FromStr for Type {
                type Err = ParseTypeError;

                fn from_str(string: &str) -> Result<Self, Self::Err> {
                    match string {
                        $(
                            stringify!($module) => Ok(Self::[<$module:camel>]),
                        )+
                        _ => Err(Self::Err {on: string.to_owned()}),
                    }
                }
            }

            #[derive(thiserror::Error, Debug, Clone)]
            pub enum Error {
                #[error("{0}")]
                Usb(#[from] usb::Error),

                #[error("{device_type} \"{name}\" not found")]
                DeviceWithName { device_type: Type, name: String },

                #[error("no {0} found")]
                Device(Type),

                #[error("device \"{0}\" not found")]
                Name(String),

                #[error("no device found")]
                NoDevice,

                #[error("configuration for {configuration:?} is not compatible with device {device:?}")]
                UpdateMismatch {
                    configuration: String,
                    device: String,
                },

                $(
                    #[error(transparent)]
                    [<$module:camel>](#[from] $module::Error),
                )+
            }

            impl Error {
                pub fn unpack(self) -> Self {
                    match self {
                        $(
                            Self::[<$module:camel>](error) => {
                                match error {
                                    $module::Error::Usb(error) => match error {
                                        usb::Error::Name(name) => Self::DeviceWithName {
                                            device_type: Type::[<$module:camel>],
                                            name,
                                        },
                                        usb::Error::Device => Self::Device(Type::[<$module:camel>]),
                                        error => Self::[<$module:camel>]($module::Error::Usb(error)),
                                    },
                                    error => Self::[<$module:camel>](error)
                                }
                            }
                        )+
                        error => error
                    }
                }

                pub fn status(&self) -> error::Status {
                    match self {
                        Self::Usb(usb::Error::Busy) => error::Status::DeviceBusy,
                        Self::Usb(_) => error::Status::IoError,
                        Self::DeviceWithName { .. }
                        | Self::Device(_)
                        | Self::Name(_)
                        | Self::NoDevice => error::Status::DeviceNotFound,
                        Self::UpdateMismatch { .. } => error::Status::Inval,
                        $(
                            Self::[<$module:camel>](error) => error.status(),
                        )+
                    }
                }
            }
        }
    };
}

register! { canon_lide70 }
