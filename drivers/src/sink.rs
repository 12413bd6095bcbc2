use crate::configuration;
use std::io::Read;
use std::io::Seek;
use std::io::Write;

/// Scratch storage for the rows of one scan.
///
/// Rows are appended while the scan runs, then the sink is rewound and served to the
/// reader. The temporary file has no name and disappears with the sink.
pub enum Sink {
    File(std::fs::File),
    Memory(std::io::Cursor<Vec<u8>>),
}

impl Sink {
    pub fn new(buffer: configuration::Buffer) -> std::io::Result<Self> {
        Ok(match buffer {
            configuration::Buffer::TemporaryFile => Self::File(tempfile::tempfile()?),
            configuration::Buffer::Memory => Self::Memory(std::io::Cursor::new(Vec::new())),
        })
    }

    pub fn rewind(&mut self) -> std::io::Result<()> {
        match self {
            Self::File(file) => file.rewind(),
            Self::Memory(cursor) => {
                cursor.set_position(0);
                Ok(())
            }
        }
    }
}

impl Write for Sink {
    fn write(&mut self, buffer: &[u8]) -> std::io::Result<usize> {
        match self {
            Self::File(file) => file.write(buffer),
            Self::Memory(cursor) => cursor.write(buffer),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            Self::File(file) => file.flush(),
            Self::Memory(cursor) => cursor.flush(),
        }
    }
}

impl Read for Sink {
    fn read(&mut self, buffer: &mut [u8]) -> std::io::Result<usize> {
        match self {
            Self::File(file) => file.read(buffer),
            Self::Memory(cursor) => cursor.read(buffer),
        }
    }
}
