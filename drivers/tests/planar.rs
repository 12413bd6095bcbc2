mod common;

use scanner_drivers::adapters::planar;
use scanner_drivers::types;

#[test]
fn padding() {
    assert_eq!(planar::padded_width(1), 16);
    assert_eq!(planar::padded_width(15), 16);
    assert_eq!(planar::padded_width(16), 32);
    assert_eq!(planar::padded_width(29), 32);
    assert_eq!(planar::padded_width(1889), 1904);
    for pixels_per_line in 1..200 {
        assert_eq!(
            planar::padded_width(pixels_per_line),
            common::padded_width(pixels_per_line)
        );
    }
}

#[test]
fn rgb_round_trip() {
    let parameters = types::Parameters::rgb(29, 5);
    let stream = common::planar_stream(29, 7);
    let mut adapter = planar::Adapter::from_parameters(&parameters, 0, 0);
    assert_eq!(adapter.padded_width(), 32);
    assert_eq!(adapter.output_length(stream.len()), 5 * 87);
    let mut rows = Vec::new();
    let emitted = adapter.convert(&stream, |row| rows.push(row.to_vec()));
    assert_eq!(emitted, 5);
    assert!(adapter.is_complete());
    for (index, row) in rows.iter().enumerate() {
        assert_eq!(row, &common::expected_rgb(29, index + 1));
    }
}

#[test]
fn gray_across_transfers() {
    let parameters = types::Parameters::gray(40, 6);
    let stream = common::planar_stream(40, 6);
    let mut adapter = planar::Adapter::from_parameters(&parameters, 0, 0);
    let mut output = Vec::new();
    let mut rows = 0;
    for chunk in stream.chunks(37) {
        let (bytes, count) = adapter.copy_chunk(chunk);
        output.extend(bytes);
        rows += count;
    }
    assert_eq!(rows, 6);
    assert_eq!(output.len(), parameters.image_size());
    let expected: Vec<u8> = (1..=6)
        .flat_map(|line| common::expected_gray(40, line))
        .collect();
    assert_eq!(output, expected);
}

#[test]
fn skipped_rows() {
    let parameters = types::Parameters::rgb(16, 3);
    let stream = common::planar_stream(16, 10);
    let mut adapter = planar::Adapter::from_parameters(&parameters, 4, 0);
    let (output, rows) = adapter.copy_chunk(&stream);
    assert_eq!(rows, 3);
    assert_eq!(adapter.current_line(), 7);
    let expected: Vec<u8> = (5..=7)
        .flat_map(|line| common::expected_rgb(16, line))
        .collect();
    assert_eq!(output, expected);

    // bytes past the last row are dropped
    let (output, rows) = adapter.copy_chunk(&stream);
    assert!(output.is_empty());
    assert_eq!(rows, 0);
    assert_eq!(adapter.current_line(), 7);

    adapter.reset();
    assert!(!adapter.is_complete());
    assert_eq!(adapter.current_line(), 0);
}

fn uniform_row(pixels_per_line: usize, value: u8) -> Vec<u8> {
    vec![value; 3 * planar::padded_width(pixels_per_line)]
}

#[test]
fn lineart_threshold() {
    let parameters = types::Parameters::lineart(10, 1);
    assert_eq!(parameters.bytes_per_line, 2);
    let mut adapter = planar::Adapter::from_parameters(&parameters, 0, 128);
    let (output, _) = adapter.copy_chunk(&uniform_row(10, 127));
    assert_eq!(output, vec![0xff, 0xc0]);

    adapter.reset();
    let (output, _) = adapter.copy_chunk(&uniform_row(10, 128));
    assert_eq!(output, vec![0x00, 0x00]);
}

#[test]
fn lineart_monotonic() {
    let pixels_per_line = 24;
    let parameters = types::Parameters::lineart(pixels_per_line, 1);
    let stream = common::planar_stream(pixels_per_line, 1);
    let set_bits = |threshold: u8| -> u32 {
        let mut adapter = planar::Adapter::from_parameters(&parameters, 0, threshold);
        let (output, rows) = adapter.copy_chunk(&stream);
        assert_eq!(rows, 1);
        assert_eq!(output.len(), 3);
        output.iter().map(|byte| byte.count_ones()).sum()
    };
    let mut previous = 0;
    for threshold in (0..=255).step_by(5) {
        let bits = set_bits(threshold);
        assert!(bits >= previous);
        previous = bits;
    }
    assert_eq!(set_bits(0), 0);
    assert_eq!(set_bits(255), pixels_per_line as u32);
}

#[test]
fn lineart_bit_order() {
    let pixels_per_line = 9;
    let parameters = types::Parameters::lineart(pixels_per_line, 1);
    let width = planar::padded_width(pixels_per_line);
    let mut stream = vec![255u8; 3 * width];
    for plane in 0..3 {
        stream[plane * width + 1] = 0;
        stream[plane * width + 8] = 0;
    }
    let mut adapter = planar::Adapter::from_parameters(&parameters, 0, 100);
    let (output, _) = adapter.copy_chunk(&stream);
    assert_eq!(output, vec![0b0100_0000, 0b1000_0000]);
}
