use scanner_drivers::canon_lide70;
use scanner_drivers::configuration;
use scanner_drivers::error;
use scanner_drivers::usb;

#[test]
fn unpack_named_device() {
    let unpacked = scanner_drivers::Error::from(canon_lide70::Error::Usb(usb::Error::Name(
        "001:004".to_owned(),
    )))
    .unpack();
    match &unpacked {
        scanner_drivers::Error::DeviceWithName { device_type, name } => {
            assert_eq!(*device_type, scanner_drivers::Type::CanonLide70);
            assert_eq!(name, "001:004");
        }
        unpacked => panic!("unexpected error {unpacked:?}"),
    }
    assert_eq!(unpacked.to_string(), "canon_lide70 \"001:004\" not found");
    assert_eq!(unpacked.status(), error::Status::DeviceNotFound);
}

#[test]
fn unpack_missing_device() {
    let unpacked =
        scanner_drivers::Error::from(canon_lide70::Error::Usb(usb::Error::Device)).unpack();
    assert!(matches!(
        unpacked,
        scanner_drivers::Error::Device(scanner_drivers::Type::CanonLide70)
    ));
    assert_eq!(unpacked.status(), error::Status::DeviceNotFound);
}

#[test]
fn unpack_keeps_device_errors() {
    let unpacked = scanner_drivers::Error::from(canon_lide70::Error::Usb(usb::Error::Busy)).unpack();
    assert!(matches!(
        unpacked,
        scanner_drivers::Error::CanonLide70(canon_lide70::Error::Usb(usb::Error::Busy))
    ));
    assert_eq!(unpacked.status(), error::Status::DeviceBusy);

    let unpacked = scanner_drivers::Error::from(canon_lide70::Error::DataTimeout(
        std::time::Duration::from_secs(5),
    ))
    .unpack();
    assert!(matches!(
        unpacked,
        scanner_drivers::Error::CanonLide70(canon_lide70::Error::DataTimeout(_))
    ));
    assert_eq!(unpacked.status(), error::Status::IoError);
}

#[test]
fn registry_status() {
    assert_eq!(
        scanner_drivers::Error::Usb(usb::Error::Busy).status(),
        error::Status::DeviceBusy
    );
    assert_eq!(
        scanner_drivers::Error::Usb(usb::Error::Endpoint("in", 0)).status(),
        error::Status::IoError
    );
    assert_eq!(
        scanner_drivers::Error::NoDevice.status(),
        error::Status::DeviceNotFound
    );
    assert_eq!(
        scanner_drivers::Error::Name("002:003".to_owned()).status(),
        error::Status::DeviceNotFound
    );
    assert_eq!(
        scanner_drivers::Error::UpdateMismatch {
            configuration: "a".to_owned(),
            device: "b".to_owned(),
        }
        .status(),
        error::Status::Inval
    );
}

#[test]
fn device_types() {
    let device_type: scanner_drivers::Type = "canon_lide70".parse().unwrap();
    assert_eq!(device_type, scanner_drivers::Type::CanonLide70);
    assert_eq!(device_type.to_string(), "canon_lide70");
    assert_eq!(device_type.name(), "Canon LiDE 70");
    assert!("lide80".parse::<scanner_drivers::Type>().is_err());

    let data = bincode::serialize(&configuration::Configuration::default()).unwrap();
    let configuration =
        scanner_drivers::Configuration::deserialize_bincode(device_type, &data).unwrap();
    assert_eq!(configuration.type_name(), "Canon LiDE 70");
}
