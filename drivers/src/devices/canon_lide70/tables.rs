//! Register programs and bulk payloads replayed verbatim by the sequencer.
//!
//! Programs are keyed by product (0x2225 LiDE 70, 0x2224 LiDE 600F) and resolution. Payloads
//! carry their own 4-byte `04 70 len_lo len_hi` header. The header length of the short motor
//! tables does not match the transferred size, the chip expects them as captured.

use crate::cp2155::Step;
use crate::cp2155::Step::{BigWrite, Block, Load, Set};
use crate::cp2155::Variable;
use crate::cp2155::GAMMA_TABLE_SIZE;

pub const START_PREAMBLE: &[Step] = &[
    Set(0x80, 0x12),
    Set(0x11, 0xc1),
    Set(0x80, 0x12),
    Set(0x11, 0xc1),
    Set(0x90, 0xf8),
    Set(0x80, 0x12),
    Set(0x11, 0xc1),
    Set(0x01, 0x29),
    Set(0x04, 0x0c),
    Set(0x05, 0x00),
    Set(0x06, 0x00),
    Set(0x01, 0x29),
];

pub const LIDE_70_INIT: &[Step] = &[
    Set(0x02, 0x01),
    Set(0x02, 0x00),
    Set(0x01, 0x00),
    Set(0x01, 0x28),
    Set(0x90, 0x4f),
    Set(0x92, 0xff),
    Set(0x93, 0x00),
    Set(0x91, 0x1f),
    Set(0x95, 0x1f),
    Set(0x97, 0x1f),
    Set(0x9b, 0x00),
    Set(0x9c, 0x07),
    Set(0x90, 0x4d),
    Set(0x90, 0xcd),
    Set(0x90, 0xcc),
    Set(0x9b, 0x01),
    Set(0xa0, 0x04),
    Set(0xa0, 0x05),
    Set(0x01, 0x28),
    Set(0x04, 0x0c),
    Set(0x05, 0x00),
    Set(0x06, 0x00),
    Set(0x98, 0x00),
    Set(0x98, 0x00),
    Set(0x98, 0x02),
    Set(0x99, 0x28),
    Set(0x9a, 0x03),
    Set(0x80, 0x10),
    Set(0x8d, 0x00),
    Set(0x8d, 0x04),
    Set(0x85, 0x00),
    Set(0x87, 0x00),
    Set(0x88, 0x70),
    Set(0x85, 0x03),
    Set(0x87, 0x00),
    Set(0x88, 0x28),
    Set(0x85, 0x06),
    Set(0x87, 0x00),
    Set(0x88, 0x28),
];

pub const LIDE_600_INIT: &[Step] = &[
    Set(0x02, 0x01),
    Set(0x02, 0x00),
    Set(0x01, 0x00),
    Set(0x01, 0x28),
    Set(0xa0, 0x04),
    Set(0xa0, 0x05),
    Set(0x01, 0x28),
    Set(0x04, 0x0c),
    Set(0x05, 0x00),
    Set(0x06, 0x00),
    Set(0x90, 0x27),
    Set(0x92, 0xf7),
    Set(0x94, 0xf7),
    Set(0x93, 0x00),
    Set(0x91, 0x1f),
    Set(0x95, 0x0f),
    Set(0x97, 0x0f),
    Set(0x9b, 0x00),
    Set(0x9c, 0x07),
    Set(0x90, 0xf0),
    Set(0x9b, 0x04),
    Set(0x98, 0x00),
    Set(0x98, 0x00),
    Set(0x98, 0x02),
    Set(0x99, 0x3b),
    Set(0x9a, 0x03),
    Set(0x80, 0x10),
    Set(0x8d, 0x00),
    Set(0x8d, 0x04),
];

pub const LIDE_70_MOTOR: &[Step] = &[
    Set(0x9b, 0x02),
    Set(0x10, 0x05),
    Set(0x11, 0x91),
    Set(0x60, 0x15),
    Set(0x80, 0x12),
    Set(0x03, 0x01),
    Set(0x71, 0x01),
    Set(0x0230, 0x11),
    Set(0x71, 0x18),
    Set(0x72, 0x00),
    Set(0x73, 0x10),
    Set(0x0239, 0x40),
    Set(0x0238, 0x89),
    Set(0x023c, 0x2f),
    Set(0x0264, 0x20),
];

pub const LIDE_600_MOTOR: &[Step] = &[
    Set(0x90, 0xfa),
    Set(0x10, 0x05),
    Set(0x11, 0x91),
    Set(0x60, 0x01),
    Set(0x80, 0x12),
    Set(0x03, 0x01),
    Set(0x71, 0x01),
    Set(0x0230, 0x11),
    Set(0x71, 0x18),
    Set(0x72, 0x00),
    Set(0x73, 0x10),
    Set(0x0239, 0x40),
    Set(0x0238, 0x89),
    Set(0x023c, 0x2f),
    Set(0x0264, 0x20),
];

pub const LIDE_70_START_75: &[Step] = &[
    Set(0x90, 0xd8),
    Set(0x90, 0xd8),
    Set(0xb0, 0x03),
    Set(0x07, 0x00),
    Set(0x07, 0x00),
    Load(0x08, Variable::LeftHigh),
    Load(0x09, Variable::LeftLow),
    Load(0x0a, Variable::RightHigh),
    Load(0x0b, Variable::RightLow),
    Set(0xa0, 0x1d),
    Set(0xa1, 0x00),
    Set(0xa2, 0x06),
    Set(0xa3, 0x70),
    Set(0x64, 0x00),
    Set(0x65, 0x00),
    Set(0x61, 0x00),
    Set(0x62, 0x2e),
    Set(0x63, 0x00),
    Set(0x50, 0x04),
    Set(0x50, 0x04),
    Load(0x51, Variable::Lamps),
    Set(0x5a, 0x32),
    Set(0x5b, 0x32),
    Set(0x5c, 0x32),
    Set(0x5d, 0x32),
    Set(0x52, 0x09),
    Set(0x53, 0x5a),
    Set(0x54, 0x06),
    Set(0x55, 0x08),
    Set(0x56, 0x05),
    Set(0x57, 0x5f),
    Set(0x58, 0xa9),
    Set(0x59, 0xce),
    Set(0x5e, 0x02),
    Set(0x5f, 0x00),
    Set(0x5f, 0x03),
    Set(0x60, 0x15),
    Set(0x60, 0x15),
    Set(0x60, 0x15),
    Set(0x60, 0x15),
    Set(0x50, 0x04),
    Load(0x51, Variable::Lamps),
    Set(0x81, 0x29),
    Set(0x81, 0x29),
    Set(0x82, 0x09),
    Set(0x82, 0x09),
    Set(0x83, 0x02),
    Set(0x84, 0x06),
    Set(0x80, 0x12),
    Set(0x80, 0x12),
    Set(0xb0, 0x0b),
    BigWrite(0x5174),
    Set(0x10, 0x05),
    Set(0x10, 0x05),
    Set(0x9b, 0x03),
    Set(0x10, 0x05),
    Set(0x11, 0xc1),
    Set(0x11, 0xc1),
    Set(0x11, 0x81),
    Set(0x11, 0x81),
    Set(0x11, 0x81),
    Set(0x11, 0x81),
    Set(0x11, 0x81),
    Set(0x12, 0x40),
    Set(0x13, 0x40),
    Set(0x16, 0x40),
    Set(0x21, 0x06),
    Set(0x22, 0x40),
    Set(0x20, 0x06),
    Set(0x1d, 0x00),
    Set(0x1e, 0x00),
    Set(0x1f, 0xf0),
    Set(0x66, 0x00),
    Load(0x67, Variable::BottomHigh),
    Load(0x68, Variable::BottomLow),
    Set(0x1a, 0x00),
    Set(0x1b, 0x00),
    Set(0x1c, 0x02),
    Set(0x15, 0x83),
    Set(0x14, 0x7c),
    Set(0x17, 0x02),
    Set(0x43, 0x1c),
    Set(0x44, 0x9c),
    Set(0x45, 0x38),
    Set(0x23, 0x28),
    Set(0x33, 0x28),
    Set(0x24, 0x27),
    Set(0x34, 0x27),
    Set(0x25, 0x25),
    Set(0x35, 0x25),
    Set(0x26, 0x21),
    Set(0x36, 0x21),
    Set(0x27, 0x1c),
    Set(0x37, 0x1c),
    Set(0x28, 0x16),
    Set(0x38, 0x16),
    Set(0x29, 0x0f),
    Set(0x39, 0x0f),
    Set(0x2a, 0x08),
    Set(0x3a, 0x08),
    Set(0x2b, 0x00),
    Set(0x3b, 0x00),
    Set(0x2c, 0x08),
    Set(0x3c, 0x08),
    Set(0x2d, 0x0f),
    Set(0x3d, 0x0f),
    Set(0x2e, 0x16),
    Set(0x3e, 0x16),
    Set(0x2f, 0x1c),
    Set(0x3f, 0x1c),
    Set(0x30, 0x21),
    Set(0x40, 0x21),
    Set(0x31, 0x25),
    Set(0x41, 0x25),
    Set(0x32, 0x27),
    Set(0x42, 0x27),
    Set(0xca, 0x01),
    Set(0xca, 0x01),
    Set(0xca, 0x11),
    Set(0x18, 0x00),
    Block(&SLOPE_256_A, 0x0300),
    Block(&SLOPE_256_A, 0x0302),
    Block(&SLOPE_256_A, 0x0306),
    Block(&SLOPE_32_A, 0x0304),
    Block(&SLOPE_32_A, 0x0308),
];

pub const LIDE_70_START_150: &[Step] = &[
    Set(0x90, 0xd8),
    Set(0x90, 0xd8),
    Set(0xb0, 0x02),
    Set(0x07, 0x00),
    Set(0x07, 0x00),
    Load(0x08, Variable::LeftHigh),
    Load(0x09, Variable::LeftLow),
    Load(0x0a, Variable::RightHigh),
    Load(0x0b, Variable::RightLow),
    Set(0xa0, 0x1d),
    Set(0xa1, 0x00),
    Set(0xa2, 0x0c),
    Set(0xa3, 0xd0),
    Set(0x64, 0x00),
    Set(0x65, 0x00),
    Set(0x61, 0x00),
    Set(0x62, 0x1e),
    Set(0x63, 0xa0),
    Set(0x50, 0x04),
    Set(0x50, 0x04),
    Load(0x51, Variable::Lamps),
    Set(0x5a, 0x32),
    Set(0x5b, 0x32),
    Set(0x5c, 0x32),
    Set(0x5d, 0x32),
    Set(0x52, 0x09),
    Set(0x53, 0x5a),
    Set(0x54, 0x06),
    Set(0x55, 0x08),
    Set(0x56, 0x05),
    Set(0x57, 0x5f),
    Set(0x58, 0xa9),
    Set(0x59, 0xce),
    Set(0x5e, 0x02),
    Set(0x5f, 0x00),
    Set(0x5f, 0x03),
    Set(0x60, 0x15),
    Set(0x60, 0x15),
    Set(0x60, 0x15),
    Set(0x60, 0x15),
    Set(0x50, 0x04),
    Load(0x51, Variable::Lamps),
    Set(0x81, 0x29),
    Set(0x81, 0x29),
    Set(0x82, 0x09),
    Set(0x82, 0x09),
    Set(0x83, 0x02),
    Set(0x84, 0x06),
    Set(0x80, 0x12),
    Set(0x80, 0x12),
    Set(0xb0, 0x0a),
    BigWrite(0x5174),
    Set(0x10, 0x05),
    Set(0x10, 0x05),
    Set(0x9b, 0x03),
    Set(0x10, 0x05),
    Set(0x11, 0x81),
    Set(0x11, 0x81),
    Set(0x11, 0x81),
    Set(0x11, 0x81),
    Set(0x11, 0x81),
    Set(0x11, 0x81),
    Set(0x11, 0x81),
    Set(0x12, 0x40),
    Set(0x13, 0x40),
    Set(0x16, 0x40),
    Set(0x21, 0x06),
    Set(0x22, 0x40),
    Set(0x20, 0x06),
    Set(0x1d, 0x00),
    Set(0x1e, 0x00),
    Set(0x1f, 0x04),
    Set(0x66, 0x00),
    Load(0x67, Variable::BottomHigh),
    Load(0x68, Variable::BottomLow),
    Set(0x1a, 0x00),
    Set(0x1b, 0x00),
    Set(0x1c, 0x02),
    Set(0x15, 0x84),
    Set(0x14, 0x7c),
    Set(0x17, 0x02),
    Set(0x43, 0x1c),
    Set(0x44, 0x9c),
    Set(0x45, 0x38),
    Set(0x23, 0x28),
    Set(0x33, 0x28),
    Set(0x24, 0x27),
    Set(0x34, 0x27),
    Set(0x25, 0x25),
    Set(0x35, 0x25),
    Set(0x26, 0x21),
    Set(0x36, 0x21),
    Set(0x27, 0x1c),
    Set(0x37, 0x1c),
    Set(0x28, 0x16),
    Set(0x38, 0x16),
    Set(0x29, 0x0f),
    Set(0x39, 0x0f),
    Set(0x2a, 0x08),
    Set(0x3a, 0x08),
    Set(0x2b, 0x00),
    Set(0x3b, 0x00),
    Set(0x2c, 0x08),
    Set(0x3c, 0x08),
    Set(0x2d, 0x0f),
    Set(0x3d, 0x0f),
    Set(0x2e, 0x16),
    Set(0x3e, 0x16),
    Set(0x2f, 0x1c),
    Set(0x3f, 0x1c),
    Set(0x30, 0x21),
    Set(0x40, 0x21),
    Set(0x31, 0x25),
    Set(0x41, 0x25),
    Set(0x32, 0x27),
    Set(0x42, 0x27),
    Set(0xca, 0x01),
    Set(0xca, 0x01),
    Set(0xca, 0x11),
    Set(0x18, 0x00),
    Set(0x71, 0x01),
    Set(0x0230, 0x11),
    Set(0x71, 0x14),
    Set(0x72, 0x01),
    Set(0x73, 0x00),
    Set(0x74, 0x03),
    Set(0x75, 0x00),
    Set(0x76, 0x00),
    Set(0x0239, 0x40),
    Set(0x0238, 0x89),
    Set(0x023c, 0x2f),
    Set(0x0264, 0x20),
    Block(&SLOPE_256_B, 0x0300),
    Block(&SLOPE_256_B, 0x0302),
    Block(&SLOPE_256_B, 0x0306),
    Block(&SLOPE_32_B, 0x0304),
    Block(&SLOPE_32_B, 0x0308),
];

pub const LIDE_70_START_300: &[Step] = &[
    Set(0x90, 0xd8),
    Set(0x90, 0xd8),
    Set(0xb0, 0x01),
    Set(0x07, 0x00),
    Set(0x07, 0x00),
    Load(0x08, Variable::LeftHigh),
    Load(0x09, Variable::LeftLow),
    Load(0x0a, Variable::RightHigh),
    Load(0x0b, Variable::RightLow),
    Set(0xa0, 0x1d),
    Set(0xa1, 0x00),
    Set(0xa2, 0x19),
    Set(0xa3, 0x30),
    Set(0x64, 0x00),
    Set(0x65, 0x00),
    Set(0x61, 0x00),
    Set(0x62, 0x2a),
    Set(0x63, 0x80),
    Set(0x50, 0x04),
    Set(0x50, 0x04),
    Load(0x51, Variable::Lamps),
    Set(0x5a, 0x32),
    Set(0x5b, 0x32),
    Set(0x5c, 0x32),
    Set(0x5d, 0x32),
    Set(0x52, 0x09),
    Set(0x53, 0x5a),
    Set(0x54, 0x06),
    Set(0x55, 0x08),
    Set(0x56, 0x05),
    Set(0x57, 0x5f),
    Set(0x58, 0xa9),
    Set(0x59, 0xce),
    Set(0x5e, 0x02),
    Set(0x5f, 0x00),
    Set(0x5f, 0x03),
    Set(0x60, 0x15),
    Set(0x60, 0x15),
    Set(0x60, 0x15),
    Set(0x60, 0x15),
    Set(0x50, 0x04),
    Load(0x51, Variable::Lamps),
    Set(0x81, 0x29),
    Set(0x81, 0x29),
    Set(0x82, 0x09),
    Set(0x82, 0x09),
    Set(0x83, 0x02),
    Set(0x84, 0x06),
    Set(0x80, 0x12),
    Set(0x80, 0x12),
    Set(0xb0, 0x09),
    BigWrite(0x5174),
    Set(0x10, 0x05),
    Set(0x10, 0x05),
    Set(0x9b, 0x01),
    Set(0x10, 0x05),
    Set(0x11, 0x81),
    Set(0x11, 0x81),
    Set(0x11, 0x81),
    Set(0x11, 0x81),
    Set(0x11, 0x81),
    Set(0x11, 0x81),
    Set(0x11, 0x81),
    Set(0x12, 0x0c),
    Set(0x13, 0x0c),
    Set(0x16, 0x0c),
    Set(0x21, 0x06),
    Set(0x22, 0x0c),
    Set(0x20, 0x06),
    Set(0x1d, 0x00),
    Set(0x1e, 0x00),
    Set(0x1f, 0x04),
    Set(0x66, 0x00),
    Load(0x67, Variable::BottomHigh),
    Load(0x68, Variable::BottomLow),
    Set(0x1a, 0x00),
    Set(0x1b, 0x00),
    Set(0x1c, 0x02),
    Set(0x15, 0x83),
    Set(0x14, 0x7c),
    Set(0x17, 0x02),
    Set(0x43, 0x1c),
    Set(0x44, 0x9c),
    Set(0x45, 0x38),
    Set(0x23, 0x14),
    Set(0x33, 0x14),
    Set(0x24, 0x14),
    Set(0x34, 0x14),
    Set(0x25, 0x14),
    Set(0x35, 0x14),
    Set(0x26, 0x14),
    Set(0x36, 0x14),
    Set(0x27, 0x14),
    Set(0x37, 0x14),
    Set(0x28, 0x14),
    Set(0x38, 0x14),
    Set(0x29, 0x14),
    Set(0x39, 0x14),
    Set(0x2a, 0x14),
    Set(0x3a, 0x14),
    Set(0x2b, 0x14),
    Set(0x3b, 0x14),
    Set(0x2c, 0x14),
    Set(0x3c, 0x14),
    Set(0x2d, 0x14),
    Set(0x3d, 0x14),
    Set(0x2e, 0x14),
    Set(0x3e, 0x14),
    Set(0x2f, 0x14),
    Set(0x3f, 0x14),
    Set(0x30, 0x14),
    Set(0x40, 0x14),
    Set(0x31, 0x14),
    Set(0x41, 0x14),
    Set(0x32, 0x14),
    Set(0x42, 0x14),
    Set(0xca, 0x00),
    Set(0xca, 0x00),
    Set(0xca, 0x00),
    Set(0x18, 0x00),
    Block(&SLOPE_48_A, 0x0300),
    Block(&SLOPE_48_A, 0x0302),
    Block(&SLOPE_48_A, 0x0306),
    Block(&SLOPE_32_C, 0x0304),
    Block(&SLOPE_32_C, 0x0308),
];

pub const LIDE_70_START_600: &[Step] = &[
    Set(0x90, 0xd8),
    Set(0x90, 0xd8),
    Set(0xb0, 0x00),
    Set(0x07, 0x00),
    Set(0x07, 0x00),
    Load(0x08, Variable::LeftHigh),
    Load(0x09, Variable::LeftLow),
    Load(0x0a, Variable::RightHigh),
    Load(0x0b, Variable::RightLow),
    Set(0xa0, 0x1d),
    Set(0xa1, 0x00),
    Set(0xa2, 0x77),
    Set(0xa3, 0xb0),
    Set(0x64, 0x00),
    Set(0x65, 0x00),
    Set(0x61, 0x00),
    Set(0x62, 0x15),
    Set(0x63, 0xe0),
    Set(0x50, 0x04),
    Set(0x50, 0x04),
    Load(0x51, Variable::Lamps),
    Set(0x5a, 0x32),
    Set(0x5b, 0x32),
    Set(0x5c, 0x32),
    Set(0x5d, 0x32),
    Set(0x52, 0x07),
    Set(0x53, 0xd0),
    Set(0x54, 0x07),
    Set(0x55, 0xd0),
    Set(0x56, 0x07),
    Set(0x57, 0xd0),
    Set(0x58, 0x00),
    Set(0x59, 0x01),
    Set(0x5e, 0x02),
    Set(0x5f, 0x00),
    Set(0x5f, 0x03),
    Set(0x60, 0x15),
    Set(0x60, 0x15),
    Set(0x60, 0x15),
    Set(0x60, 0x15),
    Set(0x50, 0x04),
    Load(0x51, Variable::Lamps),
    Set(0x81, 0x29),
    Set(0x81, 0x29),
    Set(0x82, 0x09),
    Set(0x82, 0x09),
    Set(0x83, 0x02),
    Set(0x84, 0x06),
    Set(0x80, 0x12),
    Set(0x80, 0x12),
    Set(0xb0, 0x00),
    Set(0x10, 0x05),
    Set(0x10, 0x05),
    Set(0x9b, 0x01),
    Set(0x10, 0x05),
    Set(0x11, 0x83),
    Set(0x11, 0x83),
    Set(0x11, 0xc3),
    Set(0x11, 0xc3),
    Set(0x11, 0xc3),
    Set(0x11, 0xc1),
    Set(0x11, 0xc1),
    Set(0x12, 0x12),
    Set(0x13, 0x00),
    Set(0x16, 0x12),
    Set(0x21, 0x06),
    Set(0x22, 0x12),
    Set(0x20, 0x06),
    Set(0x1d, 0x00),
    Set(0x1e, 0x00),
    Set(0x1f, 0x04),
    Set(0x66, 0x00),
    Load(0x67, Variable::BottomHigh),
    Load(0x68, Variable::BottomLow),
    Set(0x1a, 0x00),
    Set(0x1b, 0x00),
    Set(0x1c, 0x02),
    Set(0x15, 0x01),
    Set(0x14, 0x01),
    Set(0x17, 0x01),
    Set(0x43, 0x1c),
    Set(0x44, 0x9c),
    Set(0x45, 0x38),
    Set(0x23, 0x14),
    Set(0x33, 0x14),
    Set(0x24, 0x14),
    Set(0x34, 0x14),
    Set(0x25, 0x14),
    Set(0x35, 0x14),
    Set(0x26, 0x14),
    Set(0x36, 0x14),
    Set(0x27, 0x14),
    Set(0x37, 0x14),
    Set(0x28, 0x14),
    Set(0x38, 0x14),
    Set(0x29, 0x14),
    Set(0x39, 0x14),
    Set(0x2a, 0x14),
    Set(0x3a, 0x14),
    Set(0x2b, 0x14),
    Set(0x3b, 0x14),
    Set(0x2c, 0x14),
    Set(0x3c, 0x14),
    Set(0x2d, 0x14),
    Set(0x3d, 0x14),
    Set(0x2e, 0x14),
    Set(0x3e, 0x14),
    Set(0x2f, 0x14),
    Set(0x3f, 0x14),
    Set(0x30, 0x14),
    Set(0x40, 0x14),
    Set(0x31, 0x14),
    Set(0x41, 0x14),
    Set(0x32, 0x14),
    Set(0x42, 0x14),
    Set(0xca, 0x00),
    Set(0xca, 0x00),
    Set(0xca, 0x00),
    Set(0x18, 0x00),
    Block(&SLOPE_80_A, 0x0300),
    Block(&SLOPE_80_A, 0x0302),
    Block(&SLOPE_80_A, 0x0306),
    Block(&SLOPE_32_D, 0x0304),
    Block(&SLOPE_32_D, 0x0308),
];

pub const LIDE_70_START_1200: &[Step] = &[
    Set(0x90, 0xc8),
    Set(0x90, 0xe8),
    Set(0xb0, 0x00),
    Set(0x07, 0x00),
    Set(0x07, 0x00),
    Load(0x08, Variable::LeftHigh),
    Load(0x09, Variable::LeftLow),
    Load(0x0a, Variable::RightHigh),
    Load(0x0b, Variable::RightLow),
    Set(0xa0, 0x1d),
    Set(0xa1, 0x00),
    Set(0xa2, 0x63),
    Set(0xa3, 0xd0),
    Set(0x64, 0x00),
    Set(0x65, 0x00),
    Set(0x61, 0x00),
    Set(0x62, 0xaa),
    Set(0x63, 0x00),
    Set(0x50, 0x04),
    Set(0x50, 0x04),
    Load(0x51, Variable::Lamps),
    Set(0x5a, 0x32),
    Set(0x5b, 0x32),
    Set(0x5c, 0x32),
    Set(0x5d, 0x32),
    Set(0x52, 0x11),
    Set(0x53, 0x50),
    Set(0x54, 0x0c),
    Set(0x55, 0x01),
    Set(0x56, 0x0a),
    Set(0x57, 0xae),
    Set(0x58, 0xa9),
    Set(0x59, 0xce),
    Set(0x5e, 0x02),
    Set(0x5f, 0x00),
    Set(0x5f, 0x03),
    Set(0x60, 0x15),
    Set(0x60, 0x15),
    Set(0x60, 0x15),
    Set(0x60, 0x15),
    Set(0x50, 0x04),
    Load(0x51, Variable::Lamps),
    Set(0x81, 0x29),
    Set(0x81, 0x29),
    Set(0x82, 0x09),
    Set(0x82, 0x09),
    Set(0x83, 0x02),
    Set(0x84, 0x06),
    Set(0x80, 0x12),
    Set(0x80, 0x12),
    Set(0xb0, 0x08),
    BigWrite(0xa1a4),
    Set(0x10, 0x05),
    Set(0x10, 0x05),
    Set(0x9b, 0x01),
    Set(0x10, 0x05),
    Set(0x11, 0x81),
    Set(0x11, 0x81),
    Set(0x11, 0x81),
    Set(0x11, 0x81),
    Set(0x11, 0x81),
    Set(0x11, 0x81),
    Set(0x11, 0x81),
    Set(0x12, 0x06),
    Set(0x13, 0x06),
    Set(0x16, 0x06),
    Set(0x21, 0x06),
    Set(0x22, 0x06),
    Set(0x20, 0x06),
    Set(0x1d, 0x00),
    Set(0x1e, 0x00),
    Set(0x1f, 0x04),
    Set(0x66, 0x00),
    Load(0x67, Variable::BottomHigh),
    Load(0x68, Variable::BottomLow),
    Set(0x1a, 0x00),
    Set(0x1b, 0x00),
    Set(0x1c, 0x02),
    Set(0x15, 0x80),
    Set(0x14, 0x7c),
    Set(0x17, 0x01),
    Set(0x43, 0x1c),
    Set(0x44, 0x9c),
    Set(0x45, 0x38),
    Set(0x23, 0x14),
    Set(0x33, 0x14),
    Set(0x24, 0x14),
    Set(0x34, 0x14),
    Set(0x25, 0x12),
    Set(0x35, 0x12),
    Set(0x26, 0x11),
    Set(0x36, 0x11),
    Set(0x27, 0x0e),
    Set(0x37, 0x0e),
    Set(0x28, 0x0b),
    Set(0x38, 0x0b),
    Set(0x29, 0x08),
    Set(0x39, 0x08),
    Set(0x2a, 0x04),
    Set(0x3a, 0x04),
    Set(0x2b, 0x00),
    Set(0x3b, 0x00),
    Set(0x2c, 0x04),
    Set(0x3c, 0x04),
    Set(0x2d, 0x08),
    Set(0x3d, 0x08),
    Set(0x2e, 0x0b),
    Set(0x3e, 0x0b),
    Set(0x2f, 0x0e),
    Set(0x3f, 0x0e),
    Set(0x30, 0x11),
    Set(0x40, 0x11),
    Set(0x31, 0x12),
    Set(0x41, 0x12),
    Set(0x32, 0x14),
    Set(0x42, 0x14),
    Set(0xca, 0x00),
    Set(0xca, 0x00),
    Set(0xca, 0x00),
    Set(0x18, 0x01),
    Block(&SLOPE_32_E, 0x0300),
    Block(&SLOPE_32_E, 0x0302),
    Block(&SLOPE_32_E, 0x0306),
    Block(&SLOPE_32_E, 0x0304),
    Block(&SLOPE_32_E, 0x0308),
];

pub const LIDE_600_START_75: &[Step] = &[
    Set(0x90, 0xe8),
    Set(0x9b, 0x06),
    Set(0x9b, 0x04),
    Set(0x90, 0xf8),
    Set(0xb0, 0x03),
    Set(0x07, 0x00),
    Set(0x07, 0x00),
    Load(0x08, Variable::LeftHigh),
    Load(0x09, Variable::LeftLow),
    Load(0x0a, Variable::RightHigh),
    Load(0x0b, Variable::RightLow),
    Set(0xa0, 0x1d),
    Set(0xa1, 0x00),
    Set(0xa2, 0x06),
    Set(0xa3, 0x70),
    Set(0x64, 0x00),
    Set(0x65, 0x00),
    Set(0x61, 0x00),
    Set(0x62, 0x2e),
    Set(0x63, 0x00),
    Set(0x50, 0x04),
    Set(0x50, 0x04),
    Set(0x90, 0xf8),
    Load(0x51, Variable::Lamps),
    Set(0x5a, 0xff),
    Set(0x5b, 0xff),
    Set(0x5c, 0xff),
    Set(0x5d, 0xff),
    Set(0x52, 0x0c),
    Set(0x53, 0xda),
    Set(0x54, 0x0c),
    Set(0x55, 0x44),
    Set(0x56, 0x08),
    Set(0x57, 0xbb),
    Set(0x58, 0x1d),
    Set(0x59, 0xa1),
    Set(0x5e, 0x02),
    Set(0x5f, 0x00),
    Set(0x5f, 0x03),
    Set(0x60, 0x01),
    Set(0x60, 0x01),
    Set(0x60, 0x01),
    Set(0x60, 0x01),
    Set(0x50, 0x04),
    Load(0x51, Variable::Lamps),
    Set(0x81, 0x31),
    Set(0x81, 0x31),
    Set(0x82, 0x11),
    Set(0x82, 0x11),
    Set(0x83, 0x01),
    Set(0x84, 0x05),
    Set(0x80, 0x12),
    Set(0x80, 0x12),
    Set(0xb0, 0x0b),
    BigWrite(0x5694),
    Set(0x10, 0x05),
    Set(0x10, 0x05),
    Set(0x10, 0x05),
    Set(0x10, 0x05),
    Set(0x11, 0xc1),
    Set(0x11, 0xc1),
    Set(0x11, 0x81),
    Set(0x11, 0x81),
    Set(0x11, 0x81),
    Set(0x11, 0x81),
    Set(0x11, 0x81),
    Set(0x12, 0x7d),
    Set(0x13, 0x7d),
    Set(0x16, 0x7d),
    Set(0x21, 0x06),
    Set(0x22, 0x7d),
    Set(0x20, 0x06),
    Set(0x1d, 0x00),
    Set(0x1e, 0x00),
    Set(0x1f, 0x71),
    Set(0x66, 0x00),
    Load(0x67, Variable::BottomHigh),
    Load(0x68, Variable::BottomLow),
    Set(0x1a, 0x00),
    Set(0x1b, 0x00),
    Set(0x1c, 0x02),
    Set(0x15, 0x83),
    Set(0x14, 0x7c),
    Set(0x17, 0x02),
    Set(0x43, 0x1c),
    Set(0x44, 0x9c),
    Set(0x45, 0x38),
    Set(0x23, 0x0f),
    Set(0x33, 0x0f),
    Set(0x24, 0x0f),
    Set(0x34, 0x0f),
    Set(0x25, 0x0f),
    Set(0x35, 0x0f),
    Set(0x26, 0x0f),
    Set(0x36, 0x0f),
    Set(0x27, 0x0f),
    Set(0x37, 0x0f),
    Set(0x28, 0x0f),
    Set(0x38, 0x0f),
    Set(0x29, 0x0f),
    Set(0x39, 0x0f),
    Set(0x2a, 0x0f),
    Set(0x3a, 0x0f),
    Set(0x2b, 0x0f),
    Set(0x3b, 0x0f),
    Set(0x2c, 0x0f),
    Set(0x3c, 0x0f),
    Set(0x2d, 0x0f),
    Set(0x3d, 0x0f),
    Set(0x2e, 0x0f),
    Set(0x3e, 0x0f),
    Set(0x2f, 0x0f),
    Set(0x3f, 0x0f),
    Set(0x30, 0x0f),
    Set(0x40, 0x0f),
    Set(0x31, 0x0f),
    Set(0x41, 0x0f),
    Set(0x32, 0x0f),
    Set(0x42, 0x0f),
    Set(0xca, 0x00),
    Set(0xca, 0x00),
    Set(0xca, 0x00),
    Set(0x18, 0x00),
    Block(&SLOPE_512_A, 0x0300),
    Block(&SLOPE_512_A, 0x0302),
    Block(&SLOPE_512_A, 0x0306),
    Block(&SLOPE_32_A, 0x0304),
    Block(&SLOPE_32_A, 0x0308),
];

pub const LIDE_600_START_150: &[Step] = &[
    Set(0x90, 0xe8),
    Set(0x9b, 0x06),
    Set(0x9b, 0x04),
    Set(0x90, 0xf8),
    Set(0xb0, 0x02),
    Set(0x07, 0x00),
    Set(0x07, 0x00),
    Load(0x08, Variable::LeftHigh),
    Load(0x09, Variable::LeftLow),
    Load(0x0a, Variable::RightHigh),
    Load(0x0b, Variable::RightLow),
    Set(0xa0, 0x1d),
    Set(0xa1, 0x00),
    Set(0xa2, 0x0c),
    Set(0xa3, 0xd0),
    Set(0x64, 0x00),
    Set(0x65, 0x00),
    Set(0x61, 0x00),
    Set(0x62, 0x1e),
    Set(0x63, 0xa0),
    Set(0x50, 0x04),
    Set(0x50, 0x04),
    Set(0x90, 0xf8),
    Load(0x51, Variable::Lamps),
    Set(0x5a, 0xff),
    Set(0x5b, 0xff),
    Set(0x5c, 0xff),
    Set(0x5d, 0xff),
    Set(0x52, 0x0c),
    Set(0x53, 0xda),
    Set(0x54, 0x0c),
    Set(0x55, 0x44),
    Set(0x56, 0x08),
    Set(0x57, 0xbb),
    Set(0x58, 0x1d),
    Set(0x59, 0xa1),
    Set(0x5e, 0x02),
    Set(0x5f, 0x00),
    Set(0x5f, 0x03),
    Set(0x60, 0x01),
    Set(0x60, 0x01),
    Set(0x60, 0x01),
    Set(0x60, 0x01),
    Set(0x50, 0x04),
    Load(0x51, Variable::Lamps),
    Set(0x81, 0x31),
    Set(0x81, 0x31),
    Set(0x82, 0x11),
    Set(0x82, 0x11),
    Set(0x83, 0x01),
    Set(0x84, 0x05),
    Set(0x80, 0x12),
    Set(0x80, 0x12),
    Set(0xb0, 0x0a),
    BigWrite(0x5694),
    Set(0x10, 0x05),
    Set(0x10, 0x05),
    Set(0x10, 0x05),
    Set(0x10, 0x05),
    Set(0x11, 0x81),
    Set(0x11, 0x81),
    Set(0x11, 0x81),
    Set(0x11, 0x81),
    Set(0x11, 0x81),
    Set(0x11, 0x81),
    Set(0x11, 0x81),
    Set(0x12, 0x40),
    Set(0x13, 0x40),
    Set(0x16, 0x40),
    Set(0x21, 0x06),
    Set(0x22, 0x40),
    Set(0x20, 0x06),
    Set(0x1d, 0x00),
    Set(0x1e, 0x00),
    Set(0x1f, 0x04),
    Set(0x66, 0x00),
    Load(0x67, Variable::BottomHigh),
    Load(0x68, Variable::BottomLow),
    Set(0x1a, 0x00),
    Set(0x1b, 0x00),
    Set(0x1c, 0x02),
    Set(0x15, 0x84),
    Set(0x14, 0x7c),
    Set(0x17, 0x02),
    Set(0x43, 0x1c),
    Set(0x44, 0x9c),
    Set(0x45, 0x38),
    Set(0x23, 0x0d),
    Set(0x33, 0x0d),
    Set(0x24, 0x0d),
    Set(0x34, 0x0d),
    Set(0x25, 0x0d),
    Set(0x35, 0x0d),
    Set(0x26, 0x0d),
    Set(0x36, 0x0d),
    Set(0x27, 0x0d),
    Set(0x37, 0x0d),
    Set(0x28, 0x0d),
    Set(0x38, 0x0d),
    Set(0x29, 0x0d),
    Set(0x39, 0x0d),
    Set(0x2a, 0x0d),
    Set(0x3a, 0x0d),
    Set(0x2b, 0x0d),
    Set(0x3b, 0x0d),
    Set(0x2c, 0x0d),
    Set(0x3c, 0x0d),
    Set(0x2d, 0x0d),
    Set(0x3d, 0x0d),
    Set(0x2e, 0x0d),
    Set(0x3e, 0x0d),
    Set(0x2f, 0x0d),
    Set(0x3f, 0x0d),
    Set(0x30, 0x0d),
    Set(0x40, 0x0d),
    Set(0x31, 0x0d),
    Set(0x41, 0x0d),
    Set(0x32, 0x0d),
    Set(0x42, 0x0d),
    Set(0xca, 0x00),
    Set(0xca, 0x00),
    Set(0xca, 0x00),
    Set(0x18, 0x00),
    Block(&SLOPE_256_C, 0x0300),
    Block(&SLOPE_256_C, 0x0302),
    Block(&SLOPE_256_C, 0x0306),
    Block(&SLOPE_32_F, 0x0304),
    Block(&SLOPE_32_F, 0x0308),
];

pub const LIDE_600_START_300: &[Step] = &[
    Set(0x90, 0xe8),
    Set(0x9b, 0x06),
    Set(0x9b, 0x04),
    Set(0x90, 0xf8),
    Set(0xb0, 0x01),
    Set(0x07, 0x00),
    Set(0x07, 0x00),
    Load(0x08, Variable::LeftHigh),
    Load(0x09, Variable::LeftLow),
    Load(0x0a, Variable::RightHigh),
    Load(0x0b, Variable::RightLow),
    Set(0xa0, 0x1d),
    Set(0xa1, 0x00),
    Set(0xa2, 0x03),
    Set(0xa3, 0x10),
    Set(0x64, 0x00),
    Set(0x65, 0x00),
    Set(0x61, 0x00),
    Set(0x62, 0x15),
    Set(0x63, 0xe0),
    Set(0x50, 0x04),
    Set(0x50, 0x04),
    Set(0x90, 0xf8),
    Load(0x51, Variable::Lamps),
    Set(0x5a, 0xff),
    Set(0x5b, 0xff),
    Set(0x5c, 0xff),
    Set(0x5d, 0xff),
    Set(0x52, 0x0a),
    Set(0x53, 0xf0),
    Set(0x54, 0x0a),
    Set(0x55, 0xf0),
    Set(0x56, 0x0a),
    Set(0x57, 0xf0),
    Set(0x58, 0x00),
    Set(0x59, 0x01),
    Set(0x5e, 0x02),
    Set(0x5f, 0x00),
    Set(0x5f, 0x03),
    Set(0x60, 0x01),
    Set(0x60, 0x01),
    Set(0x60, 0x01),
    Set(0x60, 0x01),
    Set(0x50, 0x04),
    Load(0x51, Variable::Lamps),
    Set(0x81, 0x31),
    Set(0x81, 0x31),
    Set(0x82, 0x11),
    Set(0x82, 0x11),
    Set(0x83, 0x01),
    Set(0x84, 0x05),
    Set(0x80, 0x12),
    Set(0x80, 0x12),
    Set(0xb0, 0x01),
    Set(0x10, 0x05),
    Set(0x10, 0x05),
    Set(0x10, 0x05),
    Set(0x10, 0x05),
    Set(0x11, 0x83),
    Set(0x11, 0x83),
    Set(0x11, 0xc3),
    Set(0x11, 0xc3),
    Set(0x11, 0xc3),
    Set(0x11, 0xc1),
    Set(0x11, 0xc1),
    Set(0x12, 0x40),
    Set(0x13, 0x00),
    Set(0x16, 0x40),
    Set(0x21, 0x06),
    Set(0x22, 0x40),
    Set(0x20, 0x06),
    Set(0x1d, 0x00),
    Set(0x1e, 0x00),
    Set(0x1f, 0x04),
    Set(0x66, 0x00),
    Load(0x67, Variable::BottomHigh),
    Load(0x68, Variable::BottomLow),
    Set(0x1a, 0x00),
    Set(0x1b, 0x00),
    Set(0x1c, 0x02),
    Set(0x15, 0x01),
    Set(0x14, 0x01),
    Set(0x17, 0x01),
    Set(0x43, 0x1c),
    Set(0x44, 0x9c),
    Set(0x45, 0x38),
    Set(0x23, 0x0a),
    Set(0x33, 0x0a),
    Set(0x24, 0x0a),
    Set(0x34, 0x0a),
    Set(0x25, 0x0a),
    Set(0x35, 0x0a),
    Set(0x26, 0x0a),
    Set(0x36, 0x0a),
    Set(0x27, 0x0a),
    Set(0x37, 0x0a),
    Set(0x28, 0x0a),
    Set(0x38, 0x0a),
    Set(0x29, 0x0a),
    Set(0x39, 0x0a),
    Set(0x2a, 0x0a),
    Set(0x3a, 0x0a),
    Set(0x2b, 0x0a),
    Set(0x3b, 0x0a),
    Set(0x2c, 0x0a),
    Set(0x3c, 0x0a),
    Set(0x2d, 0x0a),
    Set(0x3d, 0x0a),
    Set(0x2e, 0x0a),
    Set(0x3e, 0x0a),
    Set(0x2f, 0x0a),
    Set(0x3f, 0x0a),
    Set(0x30, 0x0a),
    Set(0x40, 0x0a),
    Set(0x31, 0x0a),
    Set(0x41, 0x0a),
    Set(0x32, 0x0a),
    Set(0x42, 0x0a),
    Set(0xca, 0x00),
    Set(0xca, 0x00),
    Set(0xca, 0x00),
    Set(0x18, 0x00),
    Block(&SLOPE_256_D, 0x0300),
    Block(&SLOPE_256_D, 0x0302),
    Block(&SLOPE_256_D, 0x0306),
    Block(&SLOPE_32_G, 0x0304),
    Block(&SLOPE_32_G, 0x0308),
];

pub const LIDE_600_START_600: &[Step] = &[
    Set(0x90, 0xe8),
    Set(0x9b, 0x06),
    Set(0x9b, 0x04),
    Set(0x90, 0xf8),
    Set(0xb0, 0x00),
    Set(0x07, 0x00),
    Set(0x07, 0x00),
    Load(0x08, Variable::LeftHigh),
    Load(0x09, Variable::LeftLow),
    Load(0x0a, Variable::RightHigh),
    Load(0x0b, Variable::RightLow),
    Set(0xa0, 0x1d),
    Set(0xa1, 0x00),
    Set(0xa2, 0x31),
    Set(0xa3, 0xf0),
    Set(0x64, 0x00),
    Set(0x65, 0x00),
    Set(0x61, 0x00),
    Set(0x62, 0x55),
    Set(0x63, 0x00),
    Set(0x50, 0x04),
    Set(0x50, 0x04),
    Set(0x90, 0xf8),
    Load(0x51, Variable::Lamps),
    Set(0x5a, 0xff),
    Set(0x5b, 0xff),
    Set(0x5c, 0xff),
    Set(0x5d, 0xff),
    Set(0x52, 0x0c),
    Set(0x53, 0xda),
    Set(0x54, 0x0c),
    Set(0x55, 0x44),
    Set(0x56, 0x08),
    Set(0x57, 0xbb),
    Set(0x58, 0x1d),
    Set(0x59, 0xa1),
    Set(0x5e, 0x02),
    Set(0x5f, 0x00),
    Set(0x5f, 0x03),
    Set(0x60, 0x01),
    Set(0x60, 0x01),
    Set(0x60, 0x01),
    Set(0x60, 0x01),
    Set(0x50, 0x04),
    Load(0x51, Variable::Lamps),
    Set(0x81, 0x31),
    Set(0x81, 0x31),
    Set(0x82, 0x11),
    Set(0x82, 0x11),
    Set(0x83, 0x01),
    Set(0x84, 0x05),
    Set(0x80, 0x12),
    Set(0x80, 0x12),
    Set(0xb0, 0x08),
    BigWrite(0x5694),
    Set(0x10, 0x05),
    Set(0x10, 0x05),
    Set(0x10, 0x05),
    Set(0x10, 0x05),
    Set(0x11, 0x81),
    Set(0x11, 0x81),
    Set(0x11, 0x81),
    Set(0x11, 0x81),
    Set(0x11, 0x81),
    Set(0x11, 0x81),
    Set(0x11, 0x81),
    Set(0x12, 0x06),
    Set(0x13, 0x06),
    Set(0x16, 0x06),
    Set(0x21, 0x06),
    Set(0x22, 0x06),
    Set(0x20, 0x06),
    Set(0x1d, 0x00),
    Set(0x1e, 0x00),
    Set(0x1f, 0x04),
    Set(0x66, 0x00),
    Load(0x67, Variable::BottomHigh),
    Load(0x68, Variable::BottomLow),
    Set(0x1a, 0x00),
    Set(0x1b, 0x00),
    Set(0x1c, 0x02),
    Set(0x15, 0x80),
    Set(0x14, 0x7a),
    Set(0x17, 0x02),
    Set(0x43, 0x1c),
    Set(0x44, 0x9c),
    Set(0x45, 0x38),
    Set(0x23, 0x0c),
    Set(0x33, 0x0c),
    Set(0x24, 0x0c),
    Set(0x34, 0x0c),
    Set(0x25, 0x0c),
    Set(0x35, 0x0c),
    Set(0x26, 0x0c),
    Set(0x36, 0x0c),
    Set(0x27, 0x0c),
    Set(0x37, 0x0c),
    Set(0x28, 0x0c),
    Set(0x38, 0x0c),
    Set(0x29, 0x0c),
    Set(0x39, 0x0c),
    Set(0x2a, 0x0c),
    Set(0x3a, 0x0c),
    Set(0x2b, 0x0c),
    Set(0x3b, 0x0c),
    Set(0x2c, 0x0c),
    Set(0x3c, 0x0c),
    Set(0x2d, 0x0c),
    Set(0x3d, 0x0c),
    Set(0x2e, 0x0c),
    Set(0x3e, 0x0c),
    Set(0x2f, 0x0c),
    Set(0x3f, 0x0c),
    Set(0x30, 0x0c),
    Set(0x40, 0x0c),
    Set(0x31, 0x0c),
    Set(0x41, 0x0c),
    Set(0x32, 0x0c),
    Set(0x42, 0x0c),
    Set(0xca, 0x00),
    Set(0xca, 0x00),
    Set(0xca, 0x00),
    Set(0x18, 0x00),
    Block(&SLOPE_32_H, 0x0300),
    Block(&SLOPE_32_H, 0x0302),
    Block(&SLOPE_32_H, 0x0306),
    Block(&SLOPE_32_H, 0x0304),
    Block(&SLOPE_32_H, 0x0308),
];

pub const LIDE_600_START_1200: &[Step] = &[
    Set(0x90, 0xe8),
    Set(0x9b, 0x06),
    Set(0x9b, 0x04),
    Set(0x9b, 0x06),
    Set(0x9b, 0x04),
    Set(0x90, 0xf8),
    Set(0xb0, 0x00),
    Set(0x07, 0x00),
    Set(0x07, 0x00),
    Load(0x08, Variable::LeftHigh),
    Load(0x09, Variable::LeftLow),
    Load(0x0a, Variable::RightHigh),
    Load(0x0b, Variable::RightLow),
    Set(0xa0, 0x1d),
    Set(0xa1, 0x00),
    Set(0xa2, 0x63),
    Set(0xa3, 0xd0),
    Set(0x64, 0x00),
    Set(0x65, 0x00),
    Set(0x61, 0x00),
    Set(0x62, 0xaa),
    Set(0x63, 0x00),
    Set(0x50, 0x04),
    Set(0x50, 0x04),
    Set(0x90, 0xf8),
    Load(0x51, Variable::Lamps),
    Set(0x5a, 0xff),
    Set(0x5b, 0xff),
    Set(0x5c, 0xff),
    Set(0x5d, 0xff),
    Set(0x52, 0x19),
    Set(0x53, 0x5a),
    Set(0x54, 0x17),
    Set(0x55, 0x98),
    Set(0x56, 0x11),
    Set(0x57, 0xae),
    Set(0x58, 0xa9),
    Set(0x59, 0x01),
    Set(0x5e, 0x02),
    Set(0x5f, 0x00),
    Set(0x5f, 0x03),
    Set(0x60, 0x01),
    Set(0x60, 0x01),
    Set(0x60, 0x01),
    Set(0x60, 0x01),
    Set(0x50, 0x04),
    Load(0x51, Variable::Lamps),
    Set(0x81, 0x31),
    Set(0x81, 0x31),
    Set(0x82, 0x11),
    Set(0x82, 0x11),
    Set(0x83, 0x01),
    Set(0x84, 0x05),
    Set(0x80, 0x12),
    Set(0x80, 0x12),
    Set(0xb0, 0x08),
    BigWrite(0xa714),
    Set(0x10, 0x05),
    Set(0x10, 0x05),
    Set(0x10, 0x05),
    Set(0x10, 0x05),
    Set(0x11, 0x83),
    Set(0x11, 0x83),
    Set(0x11, 0x83),
    Set(0x11, 0x83),
    Set(0x11, 0x83),
    Set(0x11, 0x81),
    Set(0x11, 0x81),
    Set(0x12, 0x50),
    Set(0x13, 0x50),
    Set(0x16, 0x50),
    Set(0x21, 0x06),
    Set(0x22, 0x50),
    Set(0x20, 0x06),
    Set(0x1d, 0x00),
    Set(0x1e, 0x00),
    Set(0x1f, 0x04),
    Set(0x66, 0x00),
    Load(0x67, Variable::BottomHigh),
    Load(0x68, Variable::BottomLow),
    Set(0x1a, 0x00),
    Set(0x1b, 0x00),
    Set(0x1c, 0x02),
    Set(0x15, 0x80),
    Set(0x14, 0x7a),
    Set(0x17, 0x02),
    Set(0x43, 0x1c),
    Set(0x44, 0x9c),
    Set(0x45, 0x38),
    Set(0x23, 0x01),
    Set(0x33, 0x01),
    Set(0x24, 0x03),
    Set(0x34, 0x03),
    Set(0x25, 0x05),
    Set(0x35, 0x05),
    Set(0x26, 0x07),
    Set(0x36, 0x07),
    Set(0x27, 0x09),
    Set(0x37, 0x09),
    Set(0x28, 0x0a),
    Set(0x38, 0x0a),
    Set(0x29, 0x0b),
    Set(0x39, 0x0b),
    Set(0x2a, 0x0c),
    Set(0x3a, 0x0c),
    Set(0x2b, 0x0c),
    Set(0x3b, 0x0c),
    Set(0x2c, 0x0b),
    Set(0x3c, 0x0b),
    Set(0x2d, 0x0a),
    Set(0x3d, 0x0a),
    Set(0x2e, 0x09),
    Set(0x3e, 0x09),
    Set(0x2f, 0x07),
    Set(0x3f, 0x07),
    Set(0x30, 0x05),
    Set(0x40, 0x05),
    Set(0x31, 0x03),
    Set(0x41, 0x03),
    Set(0x32, 0x01),
    Set(0x42, 0x01),
    Set(0xca, 0x00),
    Set(0xca, 0x00),
    Set(0xca, 0x00),
    Set(0x18, 0x00),
    Block(&SLOPE_320_A, 0x0300),
    Block(&SLOPE_320_A, 0x0302),
    Block(&SLOPE_320_A, 0x0306),
    Block(&SLOPE_32_I, 0x0304),
    Block(&SLOPE_32_I, 0x0308),
];

pub const LIDE_70_BACK: &[Step] = &[
    Set(0x90, 0xc8),
    Set(0x90, 0xc8),
    Set(0xb0, 0x03),
    Set(0x07, 0x00),
    Set(0x07, 0x00),
    Set(0x08, 0x00),
    Set(0x09, 0x69),
    Set(0x0a, 0x00),
    Set(0x0b, 0xe8),
    Set(0xa0, 0x1d),
    Set(0xa1, 0x00),
    Set(0xa2, 0x00),
    Set(0xa3, 0x70),
    Set(0x64, 0x00),
    Set(0x65, 0x00),
    Set(0x61, 0x00),
    Set(0x62, 0x2e),
    Set(0x63, 0x00),
    Set(0x50, 0x04),
    Set(0x50, 0x04),
    Set(0x51, 0x07),
    Set(0x5a, 0x32),
    Set(0x5b, 0x32),
    Set(0x5c, 0x32),
    Set(0x5d, 0x32),
    Set(0x52, 0x00),
    Set(0x53, 0x01),
    Set(0x54, 0x00),
    Set(0x55, 0x01),
    Set(0x56, 0x00),
    Set(0x57, 0x01),
    Set(0x58, 0x00),
    Set(0x59, 0x01),
    Set(0x5e, 0x02),
    Set(0x5f, 0x00),
    Set(0x5f, 0x03),
    Set(0x60, 0x15),
    Set(0x60, 0x15),
    Set(0x60, 0x15),
    Set(0x60, 0x15),
    Set(0x50, 0x04),
    Set(0x51, 0x07),
    Set(0x81, 0x29),
    Set(0x81, 0x29),
    Set(0x82, 0x09),
    Set(0x82, 0x09),
    Set(0x83, 0x02),
    Set(0x84, 0x06),
    Set(0x80, 0x12),
    Set(0x80, 0x12),
    Set(0xb0, 0x03),
    Set(0x10, 0x05),
    Set(0x10, 0x05),
    Set(0x9b, 0x03),
    Set(0x10, 0x05),
    Set(0x11, 0x41),
    Set(0x11, 0x61),
    Set(0x11, 0x21),
    Set(0x11, 0x21),
    Set(0x11, 0x25),
    Set(0x11, 0x25),
    Set(0x11, 0x25),
    Set(0x12, 0x40),
    Set(0x13, 0x40),
    Set(0x16, 0x40),
    Set(0x21, 0x06),
    Set(0x22, 0x40),
    Set(0x20, 0x06),
    Set(0x1d, 0x00),
    Set(0x1e, 0x36),
    Set(0x1f, 0xd0),
    Set(0x66, 0x00),
    Set(0x67, 0x00),
    Set(0x68, 0x06),
    Set(0x1a, 0x00),
    Set(0x1b, 0x00),
    Set(0x1c, 0x02),
    Set(0x15, 0x83),
    Set(0x14, 0x7c),
    Set(0x17, 0x02),
    Set(0x43, 0x1c),
    Set(0x44, 0x9c),
    Set(0x45, 0x38),
    Set(0x23, 0x28),
    Set(0x33, 0x28),
    Set(0x24, 0x27),
    Set(0x34, 0x27),
    Set(0x25, 0x25),
    Set(0x35, 0x25),
    Set(0x26, 0x21),
    Set(0x36, 0x21),
    Set(0x27, 0x1c),
    Set(0x37, 0x1c),
    Set(0x28, 0x16),
    Set(0x38, 0x16),
    Set(0x29, 0x0f),
    Set(0x39, 0x0f),
    Set(0x2a, 0x08),
    Set(0x3a, 0x08),
    Set(0x2b, 0x00),
    Set(0x3b, 0x00),
    Set(0x2c, 0x08),
    Set(0x3c, 0x08),
    Set(0x2d, 0x0f),
    Set(0x3d, 0x0f),
    Set(0x2e, 0x16),
    Set(0x3e, 0x16),
    Set(0x2f, 0x1c),
    Set(0x3f, 0x1c),
    Set(0x30, 0x21),
    Set(0x40, 0x21),
    Set(0x31, 0x25),
    Set(0x41, 0x25),
    Set(0x32, 0x27),
    Set(0x42, 0x27),
    Set(0xca, 0x02),
    Set(0xca, 0x02),
    Set(0xca, 0x22),
    Set(0x18, 0x00),
    Block(&SLOPE_256_A, 0x0300),
    Block(&SLOPE_256_A, 0x0302),
    Block(&SLOPE_256_A, 0x0306),
    Block(&SLOPE_32_A, 0x0304),
    Block(&SLOPE_32_A, 0x0308),
    Set(0x10, 0x05),
    Set(0x11, 0x35),
    Set(0x60, 0x15),
    Set(0x80, 0x12),
    Set(0x03, 0x01),
];

pub const LIDE_600_BACK: &[Step] = &[
    Set(0x9b, 0x06),
    Set(0x9b, 0x04),
    Set(0xb0, 0x03),
    Set(0x07, 0x00),
    Set(0x07, 0x00),
    Set(0x08, 0x01),
    Set(0x09, 0xb3),
    Set(0x0a, 0x02),
    Set(0x0b, 0x32),
    Set(0xa0, 0x1d),
    Set(0xa1, 0x00),
    Set(0xa2, 0x00),
    Set(0xa3, 0x70),
    Set(0x64, 0x00),
    Set(0x65, 0x00),
    Set(0x61, 0x00),
    Set(0x62, 0x2e),
    Set(0x63, 0x00),
    Set(0x50, 0x04),
    Set(0x50, 0x04),
    Set(0x51, 0x07),
    Set(0x5a, 0xff),
    Set(0x5b, 0xff),
    Set(0x5c, 0xff),
    Set(0x5d, 0xff),
    Set(0x52, 0x00),
    Set(0x53, 0x01),
    Set(0x54, 0x00),
    Set(0x55, 0x01),
    Set(0x56, 0x00),
    Set(0x57, 0x01),
    Set(0x58, 0x00),
    Set(0x59, 0x01),
    Set(0x5e, 0x02),
    Set(0x5f, 0x00),
    Set(0x5f, 0x03),
    Set(0x60, 0x01),
    Set(0x60, 0x01),
    Set(0x60, 0x01),
    Set(0x60, 0x01),
    Set(0x50, 0x04),
    Set(0x51, 0x07),
    Set(0x81, 0x31),
    Set(0x81, 0x31),
    Set(0x82, 0x11),
    Set(0x82, 0x11),
    Set(0x83, 0x01),
    Set(0x84, 0x05),
    Set(0x80, 0x12),
    Set(0x80, 0x12),
    Set(0xb0, 0x03),
    Set(0x10, 0x05),
    Set(0x10, 0x05),
    Set(0x10, 0x05),
    Set(0x10, 0x05),
    Set(0x11, 0x41),
    Set(0x11, 0x61),
    Set(0x11, 0x21),
    Set(0x11, 0x21),
    Set(0x11, 0x25),
    Set(0x11, 0x25),
    Set(0x11, 0x25),
    Set(0x12, 0x7d),
    Set(0x13, 0x7d),
    Set(0x16, 0x7d),
    Set(0x21, 0x06),
    Set(0x22, 0x7d),
    Set(0x20, 0x06),
    Set(0x1d, 0x00),
    Set(0x1e, 0x36),
    Set(0x1f, 0xd0),
    Set(0x66, 0x00),
    Set(0x67, 0x00),
    Set(0x68, 0x06),
    Set(0x1a, 0x00),
    Set(0x1b, 0x00),
    Set(0x1c, 0x02),
    Set(0x15, 0x83),
    Set(0x14, 0x7c),
    Set(0x17, 0x02),
    Set(0x43, 0x1c),
    Set(0x44, 0x9c),
    Set(0x45, 0x38),
    Set(0x23, 0x0d),
    Set(0x33, 0x0d),
    Set(0x24, 0x0d),
    Set(0x34, 0x0d),
    Set(0x25, 0x0d),
    Set(0x35, 0x0d),
    Set(0x26, 0x0d),
    Set(0x36, 0x0d),
    Set(0x27, 0x0d),
    Set(0x37, 0x0d),
    Set(0x28, 0x0d),
    Set(0x38, 0x0d),
    Set(0x29, 0x0d),
    Set(0x39, 0x0d),
    Set(0x2a, 0x0d),
    Set(0x3a, 0x0d),
    Set(0x2b, 0x0d),
    Set(0x3b, 0x0d),
    Set(0x2c, 0x0d),
    Set(0x3c, 0x0d),
    Set(0x2d, 0x0d),
    Set(0x3d, 0x0d),
    Set(0x2e, 0x0d),
    Set(0x3e, 0x0d),
    Set(0x2f, 0x0d),
    Set(0x3f, 0x0d),
    Set(0x30, 0x0d),
    Set(0x40, 0x0d),
    Set(0x31, 0x0d),
    Set(0x41, 0x0d),
    Set(0x32, 0x0d),
    Set(0x42, 0x0d),
    Set(0xca, 0x00),
    Set(0xca, 0x00),
    Set(0xca, 0x00),
    Set(0x18, 0x00),
    Block(&SLOPE_512_B, 0x0300),
    Block(&SLOPE_512_B, 0x0302),
    Block(&SLOPE_512_B, 0x0306),
    Block(&SLOPE_32_A, 0x0304),
    Block(&SLOPE_32_A, 0x0308),
    Set(0x10, 0x05),
    Set(0x11, 0x35),
    Set(0x60, 0x01),
    Set(0x80, 0x12),
    Set(0x03, 0x01),
];

pub const GAMMA_STANDARD: [u8; GAMMA_TABLE_SIZE] = [
    0x04, 0x70, 0x00, 0x01, 0x00, 0x14, 0x1c, 0x21, 0x26, 0x2a, 0x2e, 0x31,
    0x34, 0x37, 0x3a, 0x3d, 0x3f, 0x42, 0x44, 0x46, 0x48, 0x4a, 0x4c, 0x4e,
    0x50, 0x52, 0x53, 0x55, 0x57, 0x58, 0x5a, 0x5c, 0x5d, 0x5f, 0x60, 0x62,
    0x63, 0x64, 0x66, 0x67, 0x68, 0x6a, 0x6b, 0x6c, 0x6e, 0x6f, 0x70, 0x71,
    0x72, 0x74, 0x75, 0x76, 0x77, 0x78, 0x79, 0x7a, 0x7c, 0x7d, 0x7e, 0x7f,
    0x80, 0x81, 0x82, 0x83, 0x84, 0x85, 0x86, 0x87, 0x88, 0x89, 0x8a, 0x8b,
    0x8c, 0x8d, 0x8d, 0x8e, 0x8f, 0x90, 0x91, 0x92, 0x93, 0x94, 0x95, 0x96,
    0x96, 0x97, 0x98, 0x99, 0x9a, 0x9b, 0x9b, 0x9c, 0x9d, 0x9e, 0x9f, 0x9f,
    0xa0, 0xa1, 0xa2, 0xa3, 0xa3, 0xa4, 0xa5, 0xa6, 0xa6, 0xa7, 0xa8, 0xa9,
    0xa9, 0xaa, 0xab, 0xac, 0xac, 0xad, 0xae, 0xaf, 0xaf, 0xb0, 0xb1, 0xb1,
    0xb2, 0xb3, 0xb4, 0xb4, 0xb5, 0xb6, 0xb6, 0xb7, 0xb8, 0xb8, 0xb9, 0xba,
    0xba, 0xbb, 0xbc, 0xbc, 0xbd, 0xbe, 0xbe, 0xbf, 0xc0, 0xc0, 0xc1, 0xc1,
    0xc2, 0xc3, 0xc3, 0xc4, 0xc5, 0xc5, 0xc6, 0xc6, 0xc7, 0xc8, 0xc8, 0xc9,
    0xc9, 0xca, 0xcb, 0xcb, 0xcc, 0xcc, 0xcd, 0xce, 0xce, 0xcf, 0xcf, 0xd0,
    0xd1, 0xd1, 0xd2, 0xd2, 0xd3, 0xd3, 0xd4, 0xd5, 0xd5, 0xd6, 0xd6, 0xd7,
    0xd7, 0xd8, 0xd9, 0xd9, 0xda, 0xda, 0xdb, 0xdb, 0xdc, 0xdc, 0xdd, 0xdd,
    0xde, 0xdf, 0xdf, 0xe0, 0xe0, 0xe1, 0xe1, 0xe2, 0xe2, 0xe3, 0xe3, 0xe4,
    0xe4, 0xe5, 0xe5, 0xe6, 0xe6, 0xe7, 0xe7, 0xe8, 0xe8, 0xe9, 0xe9, 0xea,
    0xea, 0xeb, 0xeb, 0xec, 0xec, 0xed, 0xed, 0xee, 0xee, 0xef, 0xef, 0xf0,
    0xf0, 0xf1, 0xf1, 0xf2, 0xf2, 0xf3, 0xf3, 0xf4, 0xf4, 0xf5, 0xf5, 0xf6,
    0xf6, 0xf7, 0xf7, 0xf8, 0xf8, 0xf9, 0xf9, 0xfa, 0xfa, 0xfa, 0xfb, 0xfb,
    0xfc, 0xfc, 0xfd, 0xfd, 0xfe, 0xfe, 0xff, 0xff,
];

pub const GAMMA_RED_ENHANCED: [u8; GAMMA_TABLE_SIZE] = [
    0x04, 0x70, 0x00, 0x01, 0x00, 0x14, 0x1c, 0x26, 0x2a, 0x2e, 0x34, 0x37,
    0x3a, 0x3f, 0x42, 0x44, 0x48, 0x4a, 0x4c, 0x50, 0x52, 0x53, 0x57, 0x58,
    0x5c, 0x5d, 0x5f, 0x62, 0x63, 0x64, 0x67, 0x68, 0x6a, 0x6c, 0x6e, 0x6f,
    0x71, 0x72, 0x74, 0x76, 0x77, 0x78, 0x7a, 0x7c, 0x7e, 0x7f, 0x80, 0x82,
    0x83, 0x84, 0x86, 0x87, 0x88, 0x8a, 0x8b, 0x8c, 0x8d, 0x8e, 0x8f, 0x91,
    0x92, 0x93, 0x95, 0x96, 0x97, 0x98, 0x99, 0x9b, 0x9b, 0x9c, 0x9e, 0x9f,
    0x9f, 0xa1, 0xa2, 0xa3, 0xa4, 0xa5, 0xa6, 0xa7, 0xa8, 0xa9, 0xaa, 0xab,
    0xac, 0xad, 0xae, 0xaf, 0xb0, 0xb1, 0xb2, 0xb3, 0xb4, 0xb5, 0xb6, 0xb6,
    0xb8, 0xb8, 0xb9, 0xba, 0xbb, 0xbc, 0xbd, 0xbe, 0xbf, 0xc0, 0xc0, 0xc1,
    0xc2, 0xc3, 0xc4, 0xc5, 0xc5, 0xc6, 0xc7, 0xc8, 0xc9, 0xc9, 0xca, 0xcb,
    0xcc, 0xcc, 0xce, 0xce, 0xcf, 0xd0, 0xd1, 0xd2, 0xd2, 0xd3, 0xd4, 0xd5,
    0xd5, 0xd6, 0xd7, 0xd7, 0xd9, 0xd9, 0xda, 0xdb, 0xdb, 0xdc, 0xdd, 0xdd,
    0xdf, 0xdf, 0xe0, 0xe1, 0xe1, 0xe2, 0xe3, 0xe3, 0xe4, 0xe5, 0xe5, 0xe6,
    0xe7, 0xe7, 0xe8, 0xe9, 0xe9, 0xea, 0xeb, 0xeb, 0xec, 0xed, 0xed, 0xee,
    0xef, 0xef, 0xf0, 0xf1, 0xf1, 0xf2, 0xf3, 0xf3, 0xf4, 0xf5, 0xf5, 0xf6,
    0xf7, 0xf7, 0xf8, 0xf9, 0xfa, 0xfa, 0xfa, 0xfb, 0xfc, 0xfc, 0xfd, 0xfe,
    0xfe, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
];

const SLOPE_256_A: [u8; 260] = [
    0x04, 0x70, 0x00, 0x01, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25,
    0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25,
    0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25,
    0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25,
    0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25,
    0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25,
    0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25,
    0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25,
    0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0xf0, 0x23,
    0x80, 0x22, 0x2c, 0x21, 0xf1, 0x1f, 0xcd, 0x1e, 0xbd, 0x1d, 0xc0, 0x1c,
    0xd2, 0x1b, 0xf4, 0x1a, 0x22, 0x1a, 0x5e, 0x19, 0xa4, 0x18, 0xf5, 0x17,
    0x4f, 0x17, 0xb2, 0x16, 0x1d, 0x16, 0x90, 0x15, 0x09, 0x15, 0x89, 0x14,
    0x0e, 0x14, 0x9a, 0x13, 0x2a, 0x13, 0xc0, 0x12, 0x59, 0x12, 0xf8, 0x11,
    0x9a, 0x11, 0x3f, 0x11, 0xe9, 0x10, 0x96, 0x10, 0x46, 0x10, 0xf8, 0x0f,
    0xae, 0x0f, 0x66, 0x0f, 0x21, 0x0f, 0xde, 0x0e, 0x9e, 0x0e, 0x60, 0x0e,
    0x23, 0x0e, 0xe9, 0x0d, 0xb0, 0x0d, 0x7a, 0x0d, 0x44, 0x0d, 0x11, 0x0d,
    0xdf, 0x0c, 0xaf, 0x0c, 0x80, 0x0c, 0x52, 0x0c, 0x25, 0x0c, 0xfa, 0x0b,
    0xd0, 0x0b, 0xa7, 0x0b, 0x80, 0x0b, 0x59, 0x0b, 0x33, 0x0b, 0x0e, 0x0b,
    0xea, 0x0a, 0xc8, 0x0a, 0xa5, 0x0a, 0x84, 0x0a, 0x64, 0x0a, 0x44, 0x0a,
    0x25, 0x0a, 0x07, 0x0a, 0xe9, 0x09, 0xcd, 0x09, 0xb0, 0x09, 0x95, 0x09,
    0x7a, 0x09, 0x60, 0x09, 0x46, 0x09, 0x2c, 0x09, 0x14, 0x09, 0xfc, 0x08,
    0xe4, 0x08, 0xcd, 0x08, 0xb6, 0x08, 0xa0, 0x08,
];

const SLOPE_32_A: [u8; 36] = [
    0x04, 0x70, 0x18, 0x00, 0x80, 0x25, 0xc0, 0x1c, 0x4f, 0x17, 0x9a, 0x13,
    0xe9, 0x10, 0xde, 0x0e, 0x44, 0x0d, 0xfa, 0x0b, 0xea, 0x0a, 0x07, 0x0a,
    0x46, 0x09, 0xa0, 0x08, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25,
];

const SLOPE_256_B: [u8; 260] = [
    0x04, 0x70, 0x00, 0x01, 0x80, 0x25, 0xd7, 0x24, 0x35, 0x24, 0x98, 0x23,
    0x00, 0x23, 0x6d, 0x22, 0xdf, 0x21, 0x56, 0x21, 0xd1, 0x20, 0x50, 0x20,
    0xd2, 0x1f, 0x59, 0x1f, 0xe3, 0x1e, 0x70, 0x1e, 0x01, 0x1e, 0x95, 0x1d,
    0x2c, 0x1d, 0xc6, 0x1c, 0x62, 0x1c, 0x02, 0x1c, 0xa3, 0x1b, 0x47, 0x1b,
    0xee, 0x1a, 0x97, 0x1a, 0x42, 0x1a, 0xef, 0x19, 0x9e, 0x19, 0x4f, 0x19,
    0x02, 0x19, 0xb7, 0x18, 0x6d, 0x18, 0x25, 0x18, 0xdf, 0x17, 0x9a, 0x17,
    0x57, 0x17, 0x16, 0x17, 0xd6, 0x16, 0x97, 0x16, 0x59, 0x16, 0x1d, 0x16,
    0xe2, 0x15, 0xa8, 0x15, 0x70, 0x15, 0x38, 0x15, 0x02, 0x15, 0xcd, 0x14,
    0x99, 0x14, 0x66, 0x14, 0x33, 0x14, 0x02, 0x14, 0xd2, 0x13, 0xa2, 0x13,
    0x74, 0x13, 0x46, 0x13, 0x19, 0x13, 0xed, 0x12, 0xc2, 0x12, 0x98, 0x12,
    0x6e, 0x12, 0x45, 0x12, 0x1d, 0x12, 0xf5, 0x11, 0xce, 0x11, 0xa8, 0x11,
    0x82, 0x11, 0x5d, 0x11, 0x39, 0x11, 0x15, 0x11, 0xf2, 0x10, 0xcf, 0x10,
    0xad, 0x10, 0x8b, 0x10, 0x6a, 0x10, 0x4a, 0x10, 0x2a, 0x10, 0x0a, 0x10,
    0xeb, 0x0f, 0xcc, 0x0f, 0xae, 0x0f, 0x90, 0x0f, 0x73, 0x0f, 0x56, 0x0f,
    0x3a, 0x0f, 0x1e, 0x0f, 0x02, 0x0f, 0xe7, 0x0e, 0xcc, 0x0e, 0xb2, 0x0e,
    0x97, 0x0e, 0x7e, 0x0e, 0x64, 0x0e, 0x4b, 0x0e, 0x32, 0x0e, 0x1a, 0x0e,
    0x02, 0x0e, 0xea, 0x0d, 0xd3, 0x0d, 0xbc, 0x0d, 0xa5, 0x0d, 0x8e, 0x0d,
    0x78, 0x0d, 0x62, 0x0d, 0x4d, 0x0d, 0x37, 0x0d, 0x22, 0x0d, 0x0d, 0x0d,
    0xf8, 0x0c, 0xe4, 0x0c, 0xd0, 0x0c, 0xbc, 0x0c, 0xa8, 0x0c, 0x95, 0x0c,
    0x82, 0x0c, 0x6f, 0x0c, 0x5c, 0x0c, 0x4a, 0x0c, 0x37, 0x0c, 0x25, 0x0c,
    0x14, 0x0c, 0x02, 0x0c, 0xf0, 0x0b, 0xdf, 0x0b, 0xce, 0x0b, 0xbd, 0x0b,
    0xac, 0x0b, 0x9c, 0x0b, 0x8c, 0x0b, 0x7c, 0x0b,
];

const SLOPE_32_B: [u8; 36] = [
    0x04, 0x70, 0x18, 0x00, 0x80, 0x25, 0x18, 0x1f, 0x8f, 0x1a, 0x2d, 0x17,
    0x8f, 0x14, 0x79, 0x12, 0xc6, 0x10, 0x5b, 0x0f, 0x2a, 0x0e, 0x24, 0x0d,
    0x41, 0x0c, 0x7c, 0x0b, 0xe3, 0x1e, 0x70, 0x1e, 0x01, 0x1e, 0x95, 0x1d,
];

const SLOPE_48_A: [u8; 52] = [
    0x04, 0x70, 0x30, 0x00, 0x80, 0x25, 0x36, 0x25, 0xee, 0x24, 0xa8, 0x24,
    0x62, 0x24, 0x1d, 0x24, 0xd9, 0x23, 0x96, 0x23, 0x54, 0x23, 0x13, 0x23,
    0xd3, 0x22, 0x94, 0x22, 0x56, 0x22, 0x19, 0x22, 0xdc, 0x21, 0xa1, 0x21,
    0x66, 0x21, 0x2c, 0x21, 0xf3, 0x20, 0xba, 0x20, 0x82, 0x20, 0x4b, 0x20,
    0x15, 0x20, 0xe0, 0x1f,
];

const SLOPE_32_C: [u8; 36] = [
    0x04, 0x70, 0x18, 0x00, 0x80, 0x25, 0xe8, 0x24, 0x55, 0x24, 0xc7, 0x23,
    0x3d, 0x23, 0xb7, 0x22, 0x35, 0x22, 0xb6, 0x21, 0x3c, 0x21, 0xc4, 0x20,
    0x50, 0x20, 0xe0, 0x1f, 0x56, 0x22, 0x19, 0x22, 0xdc, 0x21, 0xa1, 0x21,
];

const SLOPE_80_A: [u8; 84] = [
    0x04, 0x70, 0x50, 0x00, 0x80, 0x25, 0x58, 0x25, 0x32, 0x25, 0x0b, 0x25,
    0xe5, 0x24, 0xc0, 0x24, 0x9a, 0x24, 0x75, 0x24, 0x50, 0x24, 0x2b, 0x24,
    0x07, 0x24, 0xe3, 0x23, 0xbf, 0x23, 0x9c, 0x23, 0x79, 0x23, 0x56, 0x23,
    0x33, 0x23, 0x11, 0x23, 0xee, 0x22, 0xcd, 0x22, 0xab, 0x22, 0x8a, 0x22,
    0x68, 0x22, 0x48, 0x22, 0x27, 0x22, 0x07, 0x22, 0xe6, 0x21, 0xc7, 0x21,
    0xa7, 0x21, 0x87, 0x21, 0x68, 0x21, 0x49, 0x21, 0x2a, 0x21, 0x0c, 0x21,
    0xee, 0x20, 0xd0, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

const SLOPE_32_D: [u8; 36] = [
    0x04, 0x70, 0x20, 0x00, 0x80, 0x25, 0x04, 0x25, 0x8c, 0x24, 0x18, 0x24,
    0xa5, 0x23, 0x36, 0x23, 0xca, 0x22, 0x60, 0x22, 0xf8, 0x21, 0x93, 0x21,
    0x30, 0x21, 0xd0, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

const SLOPE_32_E: [u8; 36] = [
    0x04, 0x70, 0x18, 0x00, 0x00, 0xff, 0x00, 0xff, 0x00, 0xff, 0x00, 0xff,
    0x00, 0xff, 0x00, 0xff, 0x00, 0xff, 0x00, 0xff, 0x00, 0xff, 0x00, 0xff,
    0x00, 0xff, 0x00, 0xff, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

const SLOPE_512_A: [u8; 516] = [
    0x04, 0x70, 0xf4, 0x01, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25,
    0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25,
    0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25,
    0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25,
    0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25,
    0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25,
    0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25,
    0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25,
    0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0xe1, 0x24,
    0x47, 0x24, 0xb2, 0x23, 0x22, 0x23, 0x97, 0x22, 0x0f, 0x22, 0x8c, 0x21,
    0x0d, 0x21, 0x91, 0x20, 0x19, 0x20, 0xa4, 0x1f, 0x33, 0x1f, 0xc5, 0x1e,
    0x59, 0x1e, 0xf1, 0x1d, 0x8b, 0x1d, 0x29, 0x1d, 0xc8, 0x1c, 0x6a, 0x1c,
    0x0f, 0x1c, 0xb5, 0x1b, 0x5e, 0x1b, 0x09, 0x1b, 0xb6, 0x1a, 0x65, 0x1a,
    0x16, 0x1a, 0xc9, 0x19, 0x7d, 0x19, 0x34, 0x19, 0xec, 0x18, 0xa5, 0x18,
    0x60, 0x18, 0x1c, 0x18, 0xda, 0x17, 0x9a, 0x17, 0x5a, 0x17, 0x1c, 0x17,
    0xe0, 0x16, 0xa4, 0x16, 0x6a, 0x16, 0x31, 0x16, 0xf9, 0x15, 0xc2, 0x15,
    0x8c, 0x15, 0x57, 0x15, 0x23, 0x15, 0xf1, 0x14, 0xbf, 0x14, 0x8e, 0x14,
    0x5e, 0x14, 0x2e, 0x14, 0x00, 0x14, 0xd2, 0x13, 0xa6, 0x13, 0x7a, 0x13,
    0x4f, 0x13, 0x24, 0x13, 0xfa, 0x12, 0xd1, 0x12, 0xa9, 0x12, 0x81, 0x12,
    0x5a, 0x12, 0x34, 0x12, 0x0e, 0x12, 0xe9, 0x11, 0xc5, 0x11, 0xa1, 0x11,
    0x7d, 0x11, 0x5a, 0x11, 0x38, 0x11, 0x16, 0x11, 0xf5, 0x10, 0xd4, 0x10,
    0xb4, 0x10, 0x94, 0x10, 0x75, 0x10, 0x56, 0x10, 0x37, 0x10, 0x19, 0x10,
    0xfc, 0x0f, 0xdf, 0x0f, 0xc2, 0x0f, 0xa6, 0x0f, 0x8a, 0x0f, 0x6e, 0x0f,
    0x53, 0x0f, 0x38, 0x0f, 0x1e, 0x0f, 0x04, 0x0f, 0xea, 0x0e, 0xd1, 0x0e,
    0xb8, 0x0e, 0x9f, 0x0e, 0x86, 0x0e, 0x6e, 0x0e, 0x57, 0x0e, 0x3f, 0x0e,
    0x28, 0x0e, 0x11, 0x0e, 0xfa, 0x0d, 0xe4, 0x0d, 0xce, 0x0d, 0xb8, 0x0d,
    0xa3, 0x0d, 0x8e, 0x0d, 0x79, 0x0d, 0x64, 0x0d, 0x4f, 0x0d, 0x3b, 0x0d,
    0x27, 0x0d, 0x14, 0x0d, 0x00, 0x0d, 0xed, 0x0c, 0xda, 0x0c, 0xc7, 0x0c,
    0xb4, 0x0c, 0xa2, 0x0c, 0x8f, 0x0c, 0x7d, 0x0c, 0x6c, 0x0c, 0x5a, 0x0c,
    0x49, 0x0c, 0x37, 0x0c, 0x26, 0x0c, 0x15, 0x0c, 0x05, 0x0c, 0xf4, 0x0b,
    0xe4, 0x0b, 0xd4, 0x0b, 0xc4, 0x0b, 0xb4, 0x0b, 0xa4, 0x0b, 0x95, 0x0b,
    0x85, 0x0b, 0x76, 0x0b, 0x67, 0x0b, 0x58, 0x0b, 0x4a, 0x0b, 0x3b, 0x0b,
    0x2d, 0x0b, 0x1e, 0x0b, 0x10, 0x0b, 0x02, 0x0b, 0xf4, 0x0a, 0xe7, 0x0a,
    0xd9, 0x0a, 0xcc, 0x0a, 0xbe, 0x0a, 0xb1, 0x0a, 0xa4, 0x0a, 0x97, 0x0a,
    0x8a, 0x0a, 0x7e, 0x0a, 0x71, 0x0a, 0x65, 0x0a, 0x58, 0x0a, 0x4c, 0x0a,
    0x40, 0x0a, 0x34, 0x0a, 0x28, 0x0a, 0x1c, 0x0a, 0x10, 0x0a, 0x05, 0x0a,
    0xf9, 0x09, 0xee, 0x09, 0xe3, 0x09, 0xd8, 0x09, 0xcc, 0x09, 0xc1, 0x09,
    0xb7, 0x09, 0xac, 0x09, 0xa1, 0x09, 0x96, 0x09, 0x8c, 0x09, 0x82, 0x09,
    0x77, 0x09, 0x6d, 0x09, 0x63, 0x09, 0x59, 0x09, 0x4f, 0x09, 0x45, 0x09,
    0x3b, 0x09, 0x31, 0x09, 0x28, 0x09, 0x1e, 0x09, 0x14, 0x09, 0x0b, 0x09,
    0x02, 0x09, 0xf8, 0x08, 0xef, 0x08, 0xe6, 0x08, 0xdd, 0x08, 0xd4, 0x08,
    0xcb, 0x08, 0xc2, 0x08, 0xb9, 0x08, 0xb1, 0x08, 0xa8, 0x08, 0xa0, 0x08,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

const SLOPE_256_C: [u8; 260] = [
    0x04, 0x70, 0x00, 0x01, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25,
    0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25,
    0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25,
    0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25,
    0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25,
    0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25,
    0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25,
    0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25,
    0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25,
    0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25,
    0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25,
    0x80, 0x25, 0x32, 0x24, 0xfb, 0x22, 0xd9, 0x21, 0xc8, 0x20, 0xc9, 0x1f,
    0xd8, 0x1e, 0xf5, 0x1d, 0x1f, 0x1d, 0x54, 0x1c, 0x95, 0x1b, 0xdf, 0x1a,
    0x32, 0x1a, 0x8d, 0x19, 0xf1, 0x18, 0x5c, 0x18, 0xce, 0x17, 0x46, 0x17,
    0xc3, 0x16, 0x47, 0x16, 0xd0, 0x15, 0x5d, 0x15, 0xef, 0x14, 0x86, 0x14,
    0x21, 0x14, 0xbf, 0x13, 0x61, 0x13, 0x07, 0x13, 0xaf, 0x12, 0x5b, 0x12,
    0x0a, 0x12, 0xbb, 0x11, 0x6f, 0x11, 0x26, 0x11, 0xdf, 0x10, 0x9a, 0x10,
    0x57, 0x10, 0x17, 0x10, 0xd8, 0x0f, 0x9c, 0x0f, 0x61, 0x0f, 0x27, 0x0f,
    0xf0, 0x0e, 0xba, 0x0e, 0x85, 0x0e, 0x52, 0x0e, 0x21, 0x0e, 0xf0, 0x0d,
    0xc1, 0x0d, 0x93, 0x0d, 0x67, 0x0d, 0x3b, 0x0d, 0x11, 0x0d, 0xe7, 0x0c,
    0xbf, 0x0c, 0x98, 0x0c, 0x71, 0x0c, 0x4b, 0x0c, 0x27, 0x0c, 0x03, 0x0c,
    0xe0, 0x0b, 0xbe, 0x0b, 0x9c, 0x0b, 0x7c, 0x0b,
];

const SLOPE_32_F: [u8; 36] = [
    0x04, 0x70, 0x18, 0x00, 0x80, 0x25, 0x18, 0x1f, 0x8f, 0x1a, 0x2d, 0x17,
    0x8f, 0x14, 0x79, 0x12, 0xc6, 0x10, 0x5b, 0x0f, 0x2a, 0x0e, 0x24, 0x0d,
    0x41, 0x0c, 0x7c, 0x0b, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25, 0x80, 0x25,
];

const SLOPE_256_D: [u8; 260] = [
    0x04, 0x70, 0x00, 0x01, 0x00, 0x32, 0x00, 0x32, 0x00, 0x32, 0x00, 0x32,
    0x00, 0x32, 0x00, 0x32, 0x00, 0x32, 0x00, 0x32, 0x00, 0x32, 0x00, 0x32,
    0x00, 0x32, 0x00, 0x32, 0x00, 0x32, 0x00, 0x32, 0x00, 0x32, 0x00, 0x32,
    0x00, 0x32, 0x00, 0x32, 0x00, 0x32, 0x00, 0x32, 0x00, 0x32, 0x00, 0x32,
    0x00, 0x32, 0x00, 0x32, 0x00, 0x32, 0x00, 0x32, 0x00, 0x32, 0x00, 0x32,
    0x00, 0x32, 0x00, 0x32, 0x00, 0x32, 0x00, 0x32, 0x00, 0x32, 0x00, 0x32,
    0x00, 0x32, 0x00, 0x32, 0x00, 0x32, 0x00, 0x32, 0x00, 0x32, 0x00, 0x32,
    0x00, 0x32, 0x00, 0x32, 0x00, 0x32, 0x00, 0x32, 0x00, 0x32, 0x00, 0x32,
    0x00, 0x32, 0x00, 0x32, 0x00, 0x32, 0xbc, 0x30, 0x89, 0x2f, 0x64, 0x2e,
    0x4d, 0x2d, 0x43, 0x2c, 0x45, 0x2b, 0x52, 0x2a, 0x69, 0x29, 0x8a, 0x28,
    0xb5, 0x27, 0xe8, 0x26, 0x23, 0x26, 0x66, 0x25, 0xaf, 0x24, 0x00, 0x24,
    0x57, 0x23, 0xb5, 0x22, 0x17, 0x22, 0x80, 0x21, 0xee, 0x20, 0x60, 0x20,
    0xd7, 0x1f, 0x53, 0x1f, 0xd3, 0x1e, 0x57, 0x1e, 0xde, 0x1d, 0x6a, 0x1d,
    0xf9, 0x1c, 0x8b, 0x1c, 0x20, 0x1c, 0xb9, 0x1b, 0x54, 0x1b, 0xf3, 0x1a,
    0x93, 0x1a, 0x37, 0x1a, 0xdd, 0x19, 0x85, 0x19, 0x30, 0x19, 0xdd, 0x18,
    0x8c, 0x18, 0x3d, 0x18, 0xf0, 0x17, 0xa5, 0x17, 0x5c, 0x17, 0x14, 0x17,
    0xce, 0x16, 0x8a, 0x16, 0x47, 0x16, 0x06, 0x16, 0xc7, 0x15, 0x88, 0x15,
    0x4b, 0x15, 0x10, 0x15, 0xd6, 0x14, 0x9d, 0x14, 0x65, 0x14, 0x2e, 0x14,
    0xf9, 0x13, 0xc4, 0x13, 0x91, 0x13, 0x5f, 0x13, 0x2d, 0x13, 0xfd, 0x12,
    0xce, 0x12, 0x9f, 0x12, 0x72, 0x12, 0x45, 0x12, 0x19, 0x12, 0xee, 0x11,
    0xc4, 0x11, 0x9a, 0x11, 0x71, 0x11, 0x49, 0x11, 0x22, 0x11, 0xfb, 0x10,
    0xd5, 0x10, 0xb0, 0x10, 0x8c, 0x10, 0x68, 0x10,
];

const SLOPE_32_G: [u8; 36] = [
    0x04, 0x70, 0x20, 0x00, 0x00, 0x32, 0x27, 0x2a, 0x6f, 0x24, 0x15, 0x20,
    0xa8, 0x1c, 0xe5, 0x19, 0x9e, 0x17, 0xb5, 0x15, 0x16, 0x14, 0xb0, 0x12,
    0x79, 0x11, 0x68, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

const SLOPE_32_H: [u8; 36] = [
    0x04, 0x70, 0x18, 0x00, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f,
    0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f,
    0x80, 0x7f, 0x80, 0x7f, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

const SLOPE_320_A: [u8; 324] = [
    0x04, 0x70, 0x40, 0x01, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f,
    0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f,
    0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f,
    0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f,
    0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f,
    0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f,
    0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f,
    0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f,
    0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f,
    0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f,
    0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f,
    0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f,
    0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f,
    0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f,
    0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f,
    0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f,
    0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f,
    0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f,
    0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f,
    0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f,
    0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f,
    0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f,
    0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f,
    0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f,
    0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f,
    0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f,
    0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f,
];

const SLOPE_32_I: [u8; 36] = [
    0x04, 0x70, 0x18, 0x00, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f,
    0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f,
    0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f, 0x80, 0x7f,
];

const SLOPE_512_B: [u8; 516] = [
    0x04, 0x70, 0xf4, 0x01, 0x80, 0x25, 0x00, 0x25, 0x84, 0x24, 0x0b, 0x24,
    0x96, 0x23, 0x23, 0x23, 0xb3, 0x22, 0x46, 0x22, 0xdb, 0x21, 0x73, 0x21,
    0x0e, 0x21, 0xab, 0x20, 0x4a, 0x20, 0xeb, 0x1f, 0x8f, 0x1f, 0x34, 0x1f,
    0xdc, 0x1e, 0x85, 0x1e, 0x31, 0x1e, 0xde, 0x1d, 0x8d, 0x1d, 0x3e, 0x1d,
    0xf0, 0x1c, 0xa4, 0x1c, 0x59, 0x1c, 0x10, 0x1c, 0xc9, 0x1b, 0x83, 0x1b,
    0x3e, 0x1b, 0xfa, 0x1a, 0xb8, 0x1a, 0x77, 0x1a, 0x38, 0x1a, 0xf9, 0x19,
    0xbc, 0x19, 0x80, 0x19, 0x44, 0x19, 0x0a, 0x19, 0xd1, 0x18, 0x99, 0x18,
    0x62, 0x18, 0x2c, 0x18, 0xf7, 0x17, 0xc3, 0x17, 0x8f, 0x17, 0x5d, 0x17,
    0x2b, 0x17, 0xfa, 0x16, 0xca, 0x16, 0x9b, 0x16, 0x6c, 0x16, 0x3e, 0x16,
    0x11, 0x16, 0xe5, 0x15, 0xb9, 0x15, 0x8e, 0x15, 0x64, 0x15, 0x3a, 0x15,
    0x11, 0x15, 0xe9, 0x14, 0xc1, 0x14, 0x9a, 0x14, 0x73, 0x14, 0x4d, 0x14,
    0x27, 0x14, 0x02, 0x14, 0xde, 0x13, 0xba, 0x13, 0x96, 0x13, 0x74, 0x13,
    0x51, 0x13, 0x2f, 0x13, 0x0d, 0x13, 0xec, 0x12, 0xcc, 0x12, 0xab, 0x12,
    0x8c, 0x12, 0x6c, 0x12, 0x4d, 0x12, 0x2f, 0x12, 0x11, 0x12, 0xf3, 0x11,
    0xd5, 0x11, 0xb8, 0x11, 0x9c, 0x11, 0x80, 0x11, 0x64, 0x11, 0x48, 0x11,
    0x2d, 0x11, 0x12, 0x11, 0xf7, 0x10, 0xdd, 0x10, 0xc3, 0x10, 0xa9, 0x10,
    0x90, 0x10, 0x77, 0x10, 0x5e, 0x10, 0x46, 0x10, 0x2e, 0x10, 0x16, 0x10,
    0xfe, 0x0f, 0xe7, 0x0f, 0xd0, 0x0f, 0xb9, 0x0f, 0xa2, 0x0f, 0x8c, 0x0f,
    0x76, 0x0f, 0x60, 0x0f, 0x4b, 0x0f, 0x35, 0x0f, 0x20, 0x0f, 0x0b, 0x0f,
    0xf7, 0x0e, 0xe2, 0x0e, 0xce, 0x0e, 0xba, 0x0e, 0xa6, 0x0e, 0x92, 0x0e,
    0x7f, 0x0e, 0x6c, 0x0e, 0x59, 0x0e, 0x46, 0x0e, 0x33, 0x0e, 0x21, 0x0e,
    0x0f, 0x0e, 0xfd, 0x0d, 0xeb, 0x0d, 0xd9, 0x0d, 0xc8, 0x0d, 0xb6, 0x0d,
    0xa5, 0x0d, 0x94, 0x0d, 0x83, 0x0d, 0x73, 0x0d, 0x62, 0x0d, 0x52, 0x0d,
    0x41, 0x0d, 0x31, 0x0d, 0x22, 0x0d, 0x12, 0x0d, 0x02, 0x0d, 0xf3, 0x0c,
    0xe3, 0x0c, 0xd4, 0x0c, 0xc5, 0x0c, 0xb6, 0x0c, 0xa7, 0x0c, 0x99, 0x0c,
    0x8a, 0x0c, 0x7c, 0x0c, 0x6e, 0x0c, 0x60, 0x0c, 0x52, 0x0c, 0x44, 0x0c,
    0x36, 0x0c, 0x28, 0x0c, 0x1b, 0x0c, 0x0d, 0x0c, 0x00, 0x0c, 0xf3, 0x0b,
    0xe6, 0x0b, 0xd9, 0x0b, 0xcc, 0x0b, 0xbf, 0x0b, 0xb3, 0x0b, 0xa6, 0x0b,
    0x9a, 0x0b, 0x8e, 0x0b, 0x81, 0x0b, 0x75, 0x0b, 0x69, 0x0b, 0x5d, 0x0b,
    0x52, 0x0b, 0x46, 0x0b, 0x3a, 0x0b, 0x2f, 0x0b, 0x23, 0x0b, 0x18, 0x0b,
    0x0d, 0x0b, 0x02, 0x0b, 0xf6, 0x0a, 0xeb, 0x0a, 0xe1, 0x0a, 0xd6, 0x0a,
    0xcb, 0x0a, 0xc0, 0x0a, 0xb6, 0x0a, 0xab, 0x0a, 0xa1, 0x0a, 0x97, 0x0a,
    0x8c, 0x0a, 0x82, 0x0a, 0x78, 0x0a, 0x6e, 0x0a, 0x64, 0x0a, 0x5a, 0x0a,
    0x50, 0x0a, 0x47, 0x0a, 0x3d, 0x0a, 0x33, 0x0a, 0x2a, 0x0a, 0x20, 0x0a,
    0x17, 0x0a, 0x0e, 0x0a, 0x04, 0x0a, 0xfb, 0x09, 0xf2, 0x09, 0xe9, 0x09,
    0xe0, 0x09, 0xd7, 0x09, 0xce, 0x09, 0xc6, 0x09, 0xbd, 0x09, 0xb4, 0x09,
    0xab, 0x09, 0xa3, 0x09, 0x9a, 0x09, 0x92, 0x09, 0x8a, 0x09, 0x81, 0x09,
    0x79, 0x09, 0x71, 0x09, 0x69, 0x09, 0x61, 0x09, 0x59, 0x09, 0x51, 0x09,
    0x49, 0x09, 0x41, 0x09, 0x39, 0x09, 0x31, 0x09, 0x29, 0x09, 0x22, 0x09,
    0x1a, 0x09, 0x12, 0x09, 0x0b, 0x09, 0x03, 0x09, 0xfc, 0x08, 0xf5, 0x08,
    0xed, 0x08, 0xe6, 0x08, 0xdf, 0x08, 0xd8, 0x08, 0xd0, 0x08, 0xc9, 0x08,
    0xc2, 0x08, 0xbb, 0x08, 0xb4, 0x08, 0xad, 0x08, 0xa6, 0x08, 0xa0, 0x08,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];
