use std::io::Read;

use crate::math::*;

/// Sequential, forward-only reader over a byte source
///
/// Tracks the absolute position from the start of the source and decodes
/// fixed-width integers in the configured byte order. Consumed bytes are
/// never re-exposed and there is no backward seeking.
#[derive(Debug)]
pub struct ByteReader<R> {
    source: R,
    big_endian: bool,
    position: u64,
}

impl<R: Read> ByteReader<R> {
    /// New reader in big-endian (network) byte order
    pub fn new(source: R) -> Self {
        Self::with_byte_order(source, true)
    }

    /// New reader with explicit byte order
    ///
    /// * `big_endian`: `true` for big-endian (MSB first), `false` for
    ///   little-endian
    pub fn with_byte_order(source: R, big_endian: bool) -> Self {
        Self {
            source,
            big_endian,
            position: 0,
        }
    }

    /// Absolute offset from the start of the source
    ///
    /// ```
    /// # use sepia_common::read::ByteReader;
    /// let mut r = ByteReader::new([1, 2, 3].as_slice());
    /// assert_eq!(r.position(), 0);
    /// r.read_u8().unwrap();
    /// assert_eq!(r.position(), 1);
    /// ```
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Consume and return the next byte
    pub fn read_u8(&mut self) -> Result<u8, ReadError> {
        let bytes = self.read_array::<1>()?;
        Ok(bytes[0])
    }

    /// Consume two bytes and compose them in the configured byte order
    ///
    /// ```
    /// # use sepia_common::read::ByteReader;
    /// let mut r = ByteReader::new([0xFF, 0xD8].as_slice());
    /// assert_eq!(r.read_u16().unwrap(), 0xFFD8);
    /// ```
    pub fn read_u16(&mut self) -> Result<u16, ReadError> {
        let bytes = self.read_array()?;
        Ok(if self.big_endian {
            u16::from_be_bytes(bytes)
        } else {
            u16::from_le_bytes(bytes)
        })
    }

    /// Consume four bytes and compose them in the configured byte order
    pub fn read_u32(&mut self) -> Result<u32, ReadError> {
        let bytes = self.read_array()?;
        Ok(if self.big_endian {
            u32::from_be_bytes(bytes)
        } else {
            u32::from_le_bytes(bytes)
        })
    }

    /// Consume exactly `N` bytes
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], ReadError> {
        let buf = &mut [0; N];
        self.source.read_exact(buf).map_err(ReadError::from_io)?;
        self.position = self.position.safe_add(N.u64()?)?;
        Ok(*buf)
    }

    /// Consume and discard exactly `n` bytes
    ///
    /// Fails with [`ReadError::UnexpectedEof`] if the source ends first. The
    /// position is not reliable after a failed skip.
    pub fn skip(&mut self, n: u64) -> Result<(), ReadError> {
        if self.discard(n)? < n {
            Err(ReadError::UnexpectedEof)
        } else {
            Ok(())
        }
    }

    /// Consume up to `n` bytes, reporting whether all were available
    ///
    /// Running out of data is not an error in this variant.
    ///
    /// ```
    /// # use sepia_common::read::ByteReader;
    /// let mut r = ByteReader::new([0; 4].as_slice());
    /// assert!(r.try_skip(3).unwrap());
    /// assert!(!r.try_skip(3).unwrap());
    /// ```
    pub fn try_skip(&mut self, n: u64) -> Result<bool, ReadError> {
        Ok(self.discard(n)? == n)
    }

    fn discard(&mut self, n: u64) -> Result<u64, ReadError> {
        let discarded = std::io::copy(&mut self.source.by_ref().take(n), &mut std::io::sink())
            .map_err(ReadError::from_io)?;
        self.position = self.position.safe_add(discarded)?;
        Ok(discarded)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("Unexpected end of data")]
    UnexpectedEof,
    #[error("Math: {0}")]
    Math(#[from] MathError),
    #[error("IO: {0}")]
    Io(std::io::Error),
}

impl ReadError {
    fn from_io(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::UnexpectedEof {
            Self::UnexpectedEof
        } else {
            Self::Io(err)
        }
    }
}
