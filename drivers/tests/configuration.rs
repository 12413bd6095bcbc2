use scanner_drivers::configuration;
use scanner_drivers::types;

fn with_geometry(
    resolution: u16,
    tl_x: f64,
    tl_y: f64,
    br_x: f64,
    br_y: f64,
) -> configuration::Configuration {
    configuration::Configuration {
        resolution,
        geometry: configuration::Geometry {
            tl_x,
            tl_y,
            br_x,
            br_y,
        },
        ..configuration::Configuration::default()
    }
}

#[test]
fn defaults() {
    let configuration = configuration::Configuration::default();
    assert_eq!(configuration.mode, configuration::Mode::Color);
    assert_eq!(configuration.resolution, 600);
    assert_eq!(configuration.threshold, 75);
    assert_eq!(configuration.absolute_threshold(), 191);
    assert_eq!(configuration.timeouts.data, std::time::Duration::from_secs(5));
    assert_eq!(configuration.timeouts.home, std::time::Duration::from_secs(60));
    let parameters = configuration.parameters();
    assert_eq!(parameters.format, types::Frame::Rgb);
    assert_eq!(parameters.pixels_per_line, 1889);
    assert_eq!(parameters.bytes_per_line, 3 * 1889);
    assert_eq!(parameters.lines, 2362);
}

#[test]
fn gray_600_dpi_letter_strip() -> Result<(), configuration::Error> {
    let configuration = configuration::Configuration {
        mode: configuration::Mode::Gray,
        ..with_geometry(600, 0.0, 0.0, 80.0, 100.0)
    };
    let parameters = configuration.parameters();
    assert_eq!(parameters.format, types::Frame::Gray);
    assert_eq!(parameters.depth, 8);
    assert_eq!(parameters.pixels_per_line, 1889);
    assert_eq!(parameters.bytes_per_line, 1889);
    assert_eq!(parameters.lines, 2362);
    assert_eq!(parameters.image_size(), 1889 * 2362);
    let area = configuration.area()?;
    assert_eq!(area.resolution, configuration::Resolution::Dpi600);
    assert_eq!(area.x1, 0);
    assert_eq!(area.x2, 1889);
    assert_eq!(area.y1, 165);
    assert_eq!(area.y2, 165 + 2362);
    assert_eq!(area.skipped_lines(), 165);
    Ok(())
}

#[test]
fn lineart_parameters() {
    let configuration = configuration::Configuration {
        mode: configuration::Mode::Lineart,
        threshold: 50,
        ..with_geometry(150, 0.0, 0.0, 10.0, 10.0)
    };
    let parameters = configuration.parameters();
    assert_eq!(parameters.depth, 1);
    assert_eq!(parameters.pixels_per_line, 59);
    assert_eq!(parameters.bytes_per_line, 8);
    assert_eq!(configuration.absolute_threshold(), 127);
}

#[test]
fn top_margin_below_300_dpi() -> Result<(), configuration::Error> {
    let area = with_geometry(150, 10.0, 20.0, 30.0, 40.0).area()?;
    assert_eq!(area.x1, 236);
    assert_eq!(area.y1, 472);
    assert_eq!(area.skipped_lines(), 118);
    let area = with_geometry(300, 10.0, 20.0, 30.0, 40.0).area()?;
    assert_eq!(area.y1, 637);
    assert_eq!(area.skipped_lines(), 318);
    Ok(())
}

#[test]
fn rejects_right_edge() {
    assert_eq!(
        configuration::Area::new(600, 0, 0, 5105, 100, 5105, 100),
        Err(configuration::Error::Horizontal {
            left: 0,
            right: 5105
        })
    );
    assert!(configuration::Area::new(600, 0, 0, 5104, 100, 5104, 100).is_ok());
}

#[test]
fn rejects_negative_left() {
    assert!(matches!(
        with_geometry(600, -1.0, 0.0, 50.0, 50.0).area(),
        Err(configuration::Error::Horizontal { .. })
    ));
}

#[test]
fn rejects_bottom_edge() {
    assert!(matches!(
        configuration::Area::new(600, 0, 0, 100, 7301, 100, 7301),
        Err(configuration::Error::Vertical { .. })
    ));
    // the top margin pushes a full-height window past the bed
    assert!(matches!(
        with_geometry(600, 0.0, 0.0, 50.0, 305.0).area(),
        Err(configuration::Error::Vertical { .. })
    ));
    assert!(with_geometry(150, 0.0, 0.0, 50.0, 305.0).area().is_ok());
}

#[test]
fn rejects_small_span() {
    assert_eq!(
        configuration::Area::new(600, 100, 100, 105, 200, 5, 100),
        Err(configuration::Error::Span {
            width: 5,
            height: 100
        })
    );
    assert!(matches!(
        configuration::Area::new(600, 100, 100, 200, 105, 100, 5),
        Err(configuration::Error::Span { .. })
    ));
}

#[test]
fn rejects_resolution() {
    assert_eq!(
        with_geometry(500, 0.0, 0.0, 50.0, 50.0).area(),
        Err(configuration::Error::Resolution(500))
    );
    for dpi in [75, 150, 300, 600, 1200] {
        let resolution = configuration::Resolution::try_from(dpi).unwrap();
        assert_eq!(resolution.dpi(), dpi);
    }
}

#[test]
fn rejects_threshold() {
    let configuration = configuration::Configuration {
        threshold: 101,
        ..configuration::Configuration::default()
    };
    assert_eq!(
        configuration.area(),
        Err(configuration::Error::Threshold(101))
    );
}

#[test]
fn bincode_round_trip() {
    let configuration = configuration::Configuration {
        mode: configuration::Mode::Lineart,
        buffer: configuration::Buffer::Memory,
        ..with_geometry(1200, 1.0, 2.0, 3.0, 4.0)
    };
    let data = bincode::serialize(&configuration).unwrap();
    assert_eq!(
        configuration::Configuration::deserialize_bincode(&data).unwrap(),
        configuration
    );
}
