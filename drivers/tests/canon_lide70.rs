mod common;

use scanner_drivers::canon_lide70;
use scanner_drivers::configuration;
use scanner_drivers::cp2155;
use scanner_drivers::error;
use scanner_drivers::flag;
use scanner_drivers::usb;

fn configuration(
    mode: configuration::Mode,
    resolution: u16,
    geometry: (f64, f64, f64, f64),
) -> configuration::Configuration {
    configuration::Configuration {
        mode,
        resolution,
        geometry: configuration::Geometry {
            tl_x: geometry.0,
            tl_y: geometry.1,
            br_x: geometry.2,
            br_y: geometry.3,
        },
        buffer: configuration::Buffer::Memory,
        ..configuration::Configuration::default()
    }
}

fn device(
    transport: &common::Cp2155,
    variant: canon_lide70::Variant,
    configuration: configuration::Configuration,
) -> (
    canon_lide70::Device<common::Cp2155>,
    std::sync::Arc<common::VirtualClock>,
) {
    common::init_tracing();
    let clock = common::VirtualClock::new();
    (
        canon_lide70::Device::with_clock(
            transport.clone(),
            variant,
            configuration,
            clock.clone(),
        ),
        clock,
    )
}

#[test]
fn gray_75_dpi() -> Result<(), canon_lide70::Error> {
    // 29 pixels per line (32 bytes per plane), 14 lines, no top margin
    let transport = common::Cp2155::new(common::planar_stream(29, 16), 100);
    let (mut device, _) = device(
        &transport,
        canon_lide70::Variant::Lide70,
        configuration(configuration::Mode::Gray, 75, (0.0, 0.0, 10.0, 5.0)),
    );
    let parameters = device.parameters();
    assert_eq!(parameters.pixels_per_line, 29);
    assert_eq!(parameters.lines, 14);

    device.start()?;
    assert_eq!(device.state(), canon_lide70::sequencer::State::Homed);
    let output = common::read_all(&mut device, 1000)?;
    assert_eq!(output.len(), parameters.image_size());
    let expected: Vec<u8> = (1..=14)
        .flat_map(|line| common::expected_gray(29, line))
        .collect();
    assert_eq!(output, expected);

    // the scratch data is released at the end of the stream
    assert!(matches!(
        device.read(&mut [0u8; 16]),
        Err(canon_lide70::Error::Idle)
    ));

    assert_eq!(
        *device.registers(),
        cp2155::Registers {
            left: 0x69,
            right: 0x69 + 239,
            bottom: 0x0ab1,
            lamps: 0x07,
        }
    );
    assert_eq!(transport.count_sets(0x09, 0x69), 1);
    assert_eq!(transport.gamma_uploads(), 3);
    Ok(())
}

#[test]
fn color_300_dpi_red_enhanced() -> Result<(), canon_lide70::Error> {
    // 53 pixels per line (64 bytes per plane), 35 lines after 82 margin lines
    let transport = common::Cp2155::new(common::planar_stream(53, 82 + 35 + 1), 4000);
    let (mut device, _) = device(
        &transport,
        canon_lide70::Variant::Lide600,
        configuration(configuration::Mode::Color, 300, (1.0, 0.0, 5.5, 3.0)),
    );
    let parameters = device.parameters();
    assert_eq!(parameters.pixels_per_line, 53);
    assert_eq!(parameters.lines, 35);

    device.start()?;
    let output = common::read_all(&mut device, 4096)?;
    assert_eq!(output.len(), 35 * 3 * 53);
    let expected: Vec<u8> = (83..=117)
        .flat_map(|line| common::expected_rgb(53, line))
        .collect();
    assert_eq!(output, expected);

    let registers = *device.registers();
    assert_eq!(registers.left, 0x1b3 + 23);
    assert_eq!(registers.right, 0x1b3 + 23 + 111);
    assert_eq!(registers.bottom, 0x2ac6);
    assert_eq!(transport.gamma_uploads(), 6);
    Ok(())
}

#[test]
fn gray_600_dpi_letter_strip() -> Result<(), canon_lide70::Error> {
    // 1889 pixels per line (1904 bytes per plane), 2362 lines after 165 margin lines
    let transport = common::Cp2155::new(common::planar_stream(1889, 165 + 2362), 0x20000);
    let (mut device, _) = device(
        &transport,
        canon_lide70::Variant::Lide70,
        configuration(configuration::Mode::Gray, 600, (0.0, 0.0, 80.0, 100.0)),
    );
    device.start()?;
    let output = common::read_all(&mut device, 0x10000)?;
    assert_eq!(output.len(), 1889 * 2362);
    assert_eq!(&output[..1889], common::expected_gray(1889, 166).as_slice());
    assert_eq!(
        &output[output.len() - 1889..],
        common::expected_gray(1889, 165 + 2362).as_slice()
    );

    // reads are clamped to the chip buffer size
    let sizes: Vec<usize> = transport
        .lock()
        .frames
        .iter()
        .filter(|frame| frame.len() == 4 && frame[0] == 0x05)
        .map(|frame| (frame[3] as usize) << 8 | frame[2] as usize)
        .collect();
    assert!(sizes.iter().all(|size| *size <= cp2155::MAX_READ));
    assert_eq!(sizes[0], cp2155::MAX_READ);
    assert_eq!(transport.gamma_uploads(), 6);
    Ok(())
}

#[test]
fn lineart_rows() -> Result<(), canon_lide70::Error> {
    let transport = common::Cp2155::new(common::planar_stream(29, 14), 2000);
    let mut configuration =
        configuration(configuration::Mode::Lineart, 75, (0.0, 0.0, 10.0, 5.0));
    configuration.threshold = 100;
    let (mut device, _) = device(&transport, canon_lide70::Variant::Lide70, configuration);
    device.start()?;
    let output = common::read_all(&mut device, 7)?;
    assert_eq!(output.len(), 4 * 14);
    // every pixel is darker than the maximum threshold, padding bits stay clear
    for row in output.chunks(4) {
        assert_eq!(row, &[0xff, 0xff, 0xff, 0xf8]);
    }
    Ok(())
}

#[test]
fn cancel_then_restart() -> Result<(), canon_lide70::Error> {
    let transport = common::Cp2155::new(common::planar_stream(29, 14), 200);
    let (mut device, _) = device(
        &transport,
        canon_lide70::Variant::Lide70,
        configuration(configuration::Mode::Color, 75, (0.0, 0.0, 10.0, 5.0)),
    );
    transport.lock().cancel_after_block_reads = Some((2, device.cancel_flag()));
    match device.start() {
        Err(error) => {
            assert!(matches!(error, canon_lide70::Error::Cancelled));
            assert_eq!(error.status(), error::Status::Cancelled);
        }
        Ok(()) => panic!("the scan was not cancelled"),
    }
    assert!(matches!(
        device.read(&mut [0u8; 16]),
        Err(canon_lide70::Error::Idle)
    ));

    device.start()?;
    let output = common::read_all(&mut device, 100)?;
    let expected: Vec<u8> = (1..=14)
        .flat_map(|line| common::expected_rgb(29, line))
        .collect();
    assert_eq!(output, expected);
    Ok(())
}

#[test]
fn cancel_releases_data() -> Result<(), canon_lide70::Error> {
    let transport = common::Cp2155::new(common::planar_stream(29, 14), 5000);
    let (mut device, _) = device(
        &transport,
        canon_lide70::Variant::Lide70,
        configuration(configuration::Mode::Gray, 75, (0.0, 0.0, 10.0, 5.0)),
    );
    device.start()?;
    let mut buffer = [0u8; 10];
    assert_eq!(device.read(&mut buffer)?, Some(10));
    device.cancel();
    assert!(device.cancel_flag().is_cancelled());
    assert!(matches!(
        device.read(&mut buffer),
        Err(canon_lide70::Error::Idle)
    ));
    device.start()?;
    assert!(!device.cancel_flag().is_cancelled());
    assert_eq!(common::read_all(&mut device, 64)?.len(), 29 * 14);
    Ok(())
}

#[test]
fn data_timeout() {
    let transport = common::Cp2155::new(Vec::new(), 100);
    let mut configuration = configuration(configuration::Mode::Gray, 75, (0.0, 0.0, 10.0, 5.0));
    configuration.timeouts.data = std::time::Duration::from_millis(50);
    let (mut device, clock) = device(&transport, canon_lide70::Variant::Lide70, configuration);
    match device.start() {
        Err(error) => {
            assert!(matches!(error, canon_lide70::Error::DataTimeout(_)));
            assert_eq!(error.status(), error::Status::IoError);
        }
        Ok(()) => panic!("the scan did not time out"),
    }
    assert!(clock.elapsed() > std::time::Duration::from_millis(50));
    assert!(clock.elapsed() < std::time::Duration::from_secs(1));
}

#[test]
fn stopped_motor_resends_start_sequence() -> Result<(), canon_lide70::Error> {
    let transport = common::Cp2155::new(common::planar_stream(29, 14), 1000);
    transport.lock().home_sensor.extend([0x08, 0x00, 0x08]);
    let (mut device, _) = device(
        &transport,
        canon_lide70::Variant::Lide70,
        configuration(configuration::Mode::Gray, 75, (0.0, 0.0, 10.0, 5.0)),
    );
    device.start()?;
    assert_eq!(transport.gamma_uploads(), 6);
    assert_eq!(transport.count_sets(0x90, 0xf8), 2);
    assert_eq!(common::read_all(&mut device, 64)?.len(), 29 * 14);
    Ok(())
}

#[test]
fn go_home_polls_sensor() -> Result<(), canon_lide70::Error> {
    let transport = common::Cp2155::new(common::planar_stream(29, 14), 1000);
    transport
        .lock()
        .home_sensor
        .extend([0x02, 0x02, 0x02, 0x02, 0x08]);
    let (mut device, clock) = device(
        &transport,
        canon_lide70::Variant::Lide70,
        configuration(configuration::Mode::Gray, 75, (0.0, 0.0, 10.0, 5.0)),
    );
    device.start()?;
    assert!(clock.elapsed() >= std::time::Duration::from_millis(600));
    // once from the back program, once from the start program window
    assert_eq!(transport.count_sets(0x09, 0x69), 2);
    Ok(())
}

#[test]
fn home_timeout() {
    let transport = common::Cp2155::new(common::planar_stream(29, 14), 1000);
    transport.lock().home_sensor_default = 0x02;
    let mut configuration = configuration(configuration::Mode::Gray, 75, (0.0, 0.0, 10.0, 5.0));
    configuration.timeouts.home = std::time::Duration::from_secs(1);
    let (mut device, clock) = device(&transport, canon_lide70::Variant::Lide70, configuration);
    match device.start() {
        Err(error) => {
            assert!(matches!(error, canon_lide70::Error::HomeTimeout(_)));
            assert_eq!(error.status(), error::Status::IoError);
        }
        Ok(()) => panic!("the head reached the home sensor"),
    }
    assert!(clock.elapsed() >= std::time::Duration::from_secs(1));
}

#[test]
fn scanner_not_present() {
    let transport = common::Cp2155::new(Vec::new(), 100);
    transport.lock().presence = 0x00;
    let (mut device, _) = device(
        &transport,
        canon_lide70::Variant::Lide600,
        configuration(configuration::Mode::Color, 600, (0.0, 0.0, 10.0, 10.0)),
    );
    match device.start() {
        Err(error) => {
            assert!(matches!(error, canon_lide70::Error::NotPresent));
            assert_eq!(error.status(), error::Status::DeviceNotFound);
        }
        Ok(()) => panic!("the probe was accepted"),
    }
    assert_eq!(device.state(), canon_lide70::sequencer::State::Homed);
}

#[test]
fn invalid_geometry() {
    let transport = common::Cp2155::new(Vec::new(), 100);
    let (mut device, _) = device(
        &transport,
        canon_lide70::Variant::Lide70,
        configuration(configuration::Mode::Color, 500, (0.0, 0.0, 10.0, 10.0)),
    );
    match device.start() {
        Err(error) => {
            assert!(matches!(
                error,
                canon_lide70::Error::Configuration(configuration::Error::Resolution(500))
            ));
            assert_eq!(error.status(), error::Status::Inval);
        }
        Ok(()) => panic!("the resolution was accepted"),
    }
    assert!(transport.lock().frames.is_empty());
}

#[test]
fn read_before_start() {
    let transport = common::Cp2155::new(Vec::new(), 100);
    let (mut device, _) = device(
        &transport,
        canon_lide70::Variant::Lide70,
        configuration::Configuration::default(),
    );
    match device.read(&mut [0u8; 16]) {
        Err(error) => assert_eq!(error.status(), error::Status::Inval),
        Ok(length) => panic!("unexpected read {length:?}"),
    }
}

#[test]
fn window_registers() {
    use canon_lide70::window;
    use canon_lide70::Variant;
    use configuration::Resolution;
    assert_eq!(
        window(Variant::Lide70, Resolution::Dpi600, 100, 1889),
        (0x69 + 100, 0x69 + 100 + 1903)
    );
    assert_eq!(
        window(Variant::Lide70, Resolution::Dpi1200, 100, 3000),
        (0x87 + 200, 0x87 + 200 + 3007)
    );
    assert_eq!(
        window(Variant::Lide600, Resolution::Dpi1200, 0, 16),
        (0x1e3, 0x1e3 + 31)
    );
    assert_eq!(
        window(Variant::Lide600, Resolution::Dpi150, 40, 100),
        (0x1b3 + 40, 0x1b3 + 40 + 415)
    );
}

#[test]
fn variants() {
    assert_eq!(
        canon_lide70::Variant::try_from(0x2224).unwrap(),
        canon_lide70::Variant::Lide600
    );
    assert_eq!(canon_lide70::Variant::Lide70.model(), "CanoScan LiDE 70");
    match canon_lide70::Variant::try_from(0x2220) {
        Err(error) => assert_eq!(error.status(), error::Status::Unsupported),
        Ok(variant) => panic!("unexpected variant {variant:?}"),
    }
    let bottoms: Vec<u16> = configuration::Resolution::ALL
        .into_iter()
        .map(canon_lide70::sequencer::bottom)
        .collect();
    assert_eq!(bottoms, vec![0x0ab1, 0x1563, 0x2ac6, 0x558c, 0xab18]);
}

#[test]
fn temporary_file_sink() -> Result<(), canon_lide70::Error> {
    let transport = common::Cp2155::new(common::planar_stream(29, 16), 100);
    let mut configuration = configuration(configuration::Mode::Gray, 75, (0.0, 0.0, 10.0, 5.0));
    configuration.buffer = configuration::Buffer::TemporaryFile;
    let (mut device, _) = device(&transport, canon_lide70::Variant::Lide70, configuration);
    device.start()?;
    // 13-byte reads straddle the 29-byte rows
    let output = common::read_all(&mut device, 13)?;
    assert_eq!(output.len(), 29 * 14);
    let expected: Vec<u8> = (1..=14)
        .flat_map(|line| common::expected_gray(29, line))
        .collect();
    assert_eq!(output, expected);
    assert!(matches!(
        device.read(&mut [0u8; 13]),
        Err(canon_lide70::Error::Idle)
    ));
    Ok(())
}

#[test]
fn unexpected_presence_is_accepted() -> Result<(), canon_lide70::Error> {
    common::init_tracing();
    let transport = common::Cp2155::new(Vec::new(), 0);
    transport.lock().presence = 0x55;
    let mut sequencer = canon_lide70::sequencer::Sequencer::new(
        cp2155::Chip::new(transport.clone(), common::VirtualClock::new()),
        canon_lide70::Variant::Lide70,
        flag::Flag::new(),
    );
    sequencer.init()?;
    assert_eq!(
        sequencer.state(),
        canon_lide70::sequencer::State::Initialized
    );
    let init: Vec<(u16, u8)> = canon_lide70::tables::LIDE_70_INIT
        .iter()
        .filter_map(|step| match *step {
            cp2155::Step::Set(register, value) => Some((register, value)),
            _ => None,
        })
        .collect();
    assert_eq!(init.len(), canon_lide70::tables::LIDE_70_INIT.len());
    assert_eq!(transport.sets(), init);
    assert_eq!(transport.count_sets(0x02, 0x01), 1);
    Ok(())
}

#[test]
fn park_warning() -> Result<(), canon_lide70::Error> {
    let transport = common::Cp2155::new(common::planar_stream(29, 14), 5000);
    let (mut device, _) = device(
        &transport,
        canon_lide70::Variant::Lide70,
        configuration(configuration::Mode::Gray, 75, (0.0, 0.0, 10.0, 5.0)),
    );
    device.start()?;
    transport.lock().short_write = true;
    device.cancel();
    match device.take_warning() {
        Some(canon_lide70::Error::Usb(usb::Error::ShortWrite { requested, written })) => {
            assert_eq!(requested, 4);
            assert_eq!(written, 3);
        }
        warning => panic!("unexpected warning {warning:?}"),
    }
    assert!(device.take_warning().is_none());
    Ok(())
}

#[test]
fn start_discards_stale_park_warning() -> Result<(), canon_lide70::Error> {
    let transport = common::Cp2155::new(common::planar_stream(29, 14), 5000);
    let (mut device, _) = device(
        &transport,
        canon_lide70::Variant::Lide70,
        configuration(configuration::Mode::Gray, 75, (0.0, 0.0, 10.0, 5.0)),
    );
    transport.lock().short_write = true;
    device.cancel();
    transport.lock().short_write = false;
    device.start()?;
    assert_eq!(common::read_all(&mut device, 64)?.len(), 29 * 14);
    assert!(device.take_warning().is_none());
    assert!(device.cancel_flag().load_warning().is_none());
    Ok(())
}
