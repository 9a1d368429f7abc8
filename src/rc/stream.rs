use buf_redux::{BufReader, BufWriter};
use std::io::{ErrorKind, Read, Write};

use crate::errors::{Error, Result};

/// Buffered byte source for the decoder. End-of-data is reported as
/// [`Error::NotEnoughInput`], distinct from other read failures.
#[derive(Debug)]
pub(crate) struct ByteReader<R: Read>(BufReader<R>, [u8; 1]);

impl<R: Read> ByteReader<R> {
    pub fn new(input: R) -> ByteReader<R> {
        ByteReader(BufReader::new(input), [0; 1])
    }

    pub fn read_byte(&mut self) -> Result<u8> {
        self.0.read_exact(&mut self.1).map_err(|e| {
            if e.kind() == ErrorKind::UnexpectedEof {
                Error::NotEnoughInput("more range-coded bytes")
            } else {
                Error::Io(e)
            }
        })?;
        Ok(self.1[0])
    }
}

/// Buffered byte sink for the encoder.
#[derive(Debug)]
pub(crate) struct ByteWriter<W: Write>(BufWriter<W>);

impl<W: Write> ByteWriter<W> {
    pub fn new(out: W) -> ByteWriter<W> {
        ByteWriter(BufWriter::new(out))
    }

    pub fn write_byte(&mut self, b: u8) -> Result<()> {
        self.0.write_all(&[b])?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.0.flush()?;
        Ok(())
    }
}
