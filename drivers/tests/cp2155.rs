mod common;

use scanner_drivers::cp2155;
use scanner_drivers::usb;

fn chip() -> (
    cp2155::Chip<common::Cp2155>,
    common::Cp2155,
    std::sync::Arc<common::VirtualClock>,
) {
    common::init_tracing();
    let transport = common::Cp2155::new(Vec::new(), 0);
    let clock = common::VirtualClock::new();
    (
        cp2155::Chip::new(transport.clone(), clock.clone()),
        transport,
        clock,
    )
}

#[test]
fn set_frame() -> Result<(), usb::Error> {
    let (mut chip, transport, _) = chip();
    chip.set(0x0230, 0x11)?;
    chip.set(0x71, 0x01)?;
    assert_eq!(
        transport.lock().frames,
        vec![vec![0x02, 0x30, 0x01, 0x00, 0x11], vec![0x00, 0x71, 0x01, 0x00, 0x01]]
    );
    Ok(())
}

#[test]
fn get_frame_and_settle() -> Result<(), usb::Error> {
    let (mut chip, transport, clock) = chip();
    transport.lock().presence = 0x40;
    assert_eq!(chip.get(0xd0)?, 0x40);
    assert_eq!(transport.lock().frames, vec![vec![0x01, 0xd0, 0x01, 0x00]]);
    assert_eq!(clock.elapsed(), std::time::Duration::from_millis(1));
    Ok(())
}

#[test]
fn read_block_frame() -> Result<(), usb::Error> {
    let (mut chip, transport, _) = chip();
    transport.lock().data = (0..0x1234).map(|index| (index % 251) as u8).collect();
    let mut buffer = vec![0u8; 0x1234];
    chip.read_block(&mut buffer)?;
    assert_eq!(transport.lock().frames, vec![vec![0x05, 0x70, 0x34, 0x12]]);
    assert_eq!(buffer[0], 0);
    assert_eq!(buffer[0x1233], (0x1233 % 251) as u8);
    Ok(())
}

#[test]
fn short_transfers() {
    let (mut chip, transport, _) = chip();
    transport.lock().short_write = true;
    match chip.set(0x01, 0x28) {
        Err(usb::Error::ShortWrite { requested, written }) => {
            assert_eq!(requested, 5);
            assert_eq!(written, 4);
        }
        result => panic!("unexpected result {result:?}"),
    }
    {
        let mut state = transport.lock();
        state.short_write = false;
        state.short_read = true;
    }
    let mut buffer = vec![0u8; 16];
    match chip.read_block(&mut buffer) {
        Err(usb::Error::ShortRead { requested, read }) => {
            assert_eq!(requested, 16);
            assert_eq!(read, 15);
        }
        result => panic!("unexpected result {result:?}"),
    }
}

#[test]
fn make_buf_pattern() {
    assert_eq!(
        cp2155::make_buf(14),
        vec![0x04, 0x70, 0x0a, 0x00, 0x24, 0xf5, 0xb6, 0x51, 0x24, 0xf5, 0xb6, 0x51, 0x24, 0xf5]
    );
    let buffer = cp2155::make_buf(0x5174);
    assert_eq!(buffer.len(), 0x5174);
    assert_eq!(&buffer[..4], &[0x04, 0x70, 0x70, 0x51]);
}

#[test]
fn write_block_setup() -> Result<(), usb::Error> {
    let (mut chip, transport, _) = chip();
    let payload = [0x04, 0x70, 0x04, 0x00, 0x01, 0x02, 0x03, 0x04];
    chip.write_block(&payload, 0x0302)?;
    assert_eq!(
        transport.sets(),
        vec![
            (0x71, 0x01),
            (0x0230, 0x11),
            (0x71, 0x14),
            (0x72, 0x00),
            (0x73, 0x04),
            (0x74, 0x03),
            (0x75, 0x02),
            (0x76, 0x00),
            (0x0239, 0x40),
            (0x0238, 0x89),
            (0x023c, 0x2f),
            (0x0264, 0x20),
        ]
    );
    assert_eq!(transport.payloads(), vec![payload.to_vec()]);
    Ok(())
}

#[test]
fn big_write_mirrors_payload() -> Result<(), usb::Error> {
    let (mut chip, transport, _) = chip();
    chip.big_write(0x0264)?;
    let payloads = transport.payloads();
    assert_eq!(payloads.len(), 3);
    assert_eq!(payloads[0], cp2155::make_buf(0x0264));
    assert_eq!(payloads[0], payloads[1]);
    assert_eq!(payloads[1], payloads[2]);
    let addresses: Vec<(u8, u8)> = {
        let sets = transport.sets();
        sets.iter()
            .zip(sets.iter().skip(1))
            .filter(|(high, low)| high.0 == 0x74 && low.0 == 0x75)
            .map(|(high, low)| (high.1, low.1))
            .collect()
    };
    assert_eq!(addresses, vec![(0x00, 0x00), (0x00, 0xb0), (0x01, 0x60)]);
    Ok(())
}

#[test]
fn gamma_upload() -> Result<(), usb::Error> {
    let (mut chip, transport, _) = chip();
    let mut red = [0u8; cp2155::GAMMA_TABLE_SIZE];
    let mut standard = [0u8; cp2155::GAMMA_TABLE_SIZE];
    for table in [&mut red, &mut standard] {
        table[..4].copy_from_slice(&[0x04, 0x70, 0x00, 0x01]);
    }
    for index in 0..=255u8 {
        red[4 + index as usize] = index.saturating_add(16);
        standard[4 + index as usize] = index;
    }
    chip.set_gamma(&red, &standard)?;
    assert_eq!(transport.gamma_uploads(), 3);
    assert_eq!(
        transport.payloads(),
        vec![red.to_vec(), standard.to_vec(), standard.to_vec()]
    );
    let sets = transport.sets();
    let addresses: Vec<(u8, u8, u8)> = sets
        .windows(3)
        .filter(|window| window[0].0 == 0x74 && window[1].0 == 0x75 && window[2].0 == 0x76)
        .map(|window| (window[0].1, window[1].1, window[2].1))
        .collect();
    assert_eq!(addresses, vec![(0, 0, 0), (0, 1, 0), (0, 2, 0)]);
    assert_eq!(transport.count_sets(0x72, 0x01), 3);
    assert_eq!(transport.count_sets(0x73, 0x00), 3);
    Ok(())
}

#[test]
fn play_substitutes_variables() -> Result<(), usb::Error> {
    let (mut chip, transport, _) = chip();
    let registers = cp2155::Registers {
        left: 0x0180,
        right: 0x0aef,
        bottom: 0x558c,
        lamps: 0x07,
    };
    chip.play(
        &[
            cp2155::Step::Set(0x90, 0xd8),
            cp2155::Step::Load(0x08, cp2155::Variable::LeftHigh),
            cp2155::Step::Load(0x09, cp2155::Variable::LeftLow),
            cp2155::Step::Load(0x0a, cp2155::Variable::RightHigh),
            cp2155::Step::Load(0x0b, cp2155::Variable::RightLow),
            cp2155::Step::Load(0x51, cp2155::Variable::Lamps),
            cp2155::Step::Load(0x67, cp2155::Variable::BottomHigh),
            cp2155::Step::Load(0x68, cp2155::Variable::BottomLow),
        ],
        &registers,
    )?;
    assert_eq!(
        transport.sets(),
        vec![
            (0x90, 0xd8),
            (0x08, 0x01),
            (0x09, 0x80),
            (0x0a, 0x0a),
            (0x0b, 0xef),
            (0x51, 0x07),
            (0x67, 0x55),
            (0x68, 0x8c),
        ]
    );
    Ok(())
}
