use std::io::Read;

use sepia_common::read::{ByteReader, ReadError};

/// Source that fails with a non-EOF error on every read
struct BrokenSource;

impl Read for BrokenSource {
    fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
        Err(std::io::Error::other("connection reset"))
    }
}

#[test]
fn position_tracks_every_read() {
    let data = [0xFF, 0xD8, 0xFF, 0xE1, 0x00, 0x04, 0xAB, 0xCD, 0x01];
    let mut reader = ByteReader::new(data.as_slice());

    assert_eq!(reader.position(), 0);
    assert_eq!(reader.read_u16().unwrap(), 0xFFD8);
    assert_eq!(reader.position(), 2);
    assert_eq!(reader.read_u8().unwrap(), 0xFF);
    assert_eq!(reader.position(), 3);
    assert_eq!(reader.read_array::<3>().unwrap(), [0xE1, 0x00, 0x04]);
    assert_eq!(reader.position(), 6);
    reader.skip(2).unwrap();
    assert_eq!(reader.position(), 8);
    assert_eq!(reader.read_u8().unwrap(), 0x01);
    assert_eq!(reader.position(), 9);
}

#[test]
fn read_u32_byte_order() {
    let data = [0x12, 0x34, 0x56, 0x78];

    let mut big = ByteReader::new(data.as_slice());
    assert_eq!(big.read_u32().unwrap(), 0x1234_5678);

    let mut little = ByteReader::with_byte_order(data.as_slice(), false);
    assert_eq!(little.read_u32().unwrap(), 0x7856_3412);
}

#[test]
fn read_past_end() {
    let mut reader = ByteReader::new([0xFF].as_slice());
    assert!(matches!(
        reader.read_u16(),
        Err(ReadError::UnexpectedEof)
    ));

    let mut reader = ByteReader::new([0_u8; 0].as_slice());
    assert!(matches!(reader.read_u8(), Err(ReadError::UnexpectedEof)));
}

#[test]
fn skip_requires_full_count() {
    let mut reader = ByteReader::new([1, 2, 3].as_slice());
    assert!(matches!(reader.skip(5), Err(ReadError::UnexpectedEof)));

    let mut reader = ByteReader::new([1, 2, 3].as_slice());
    reader.skip(3).unwrap();
    reader.skip(0).unwrap();
    assert_eq!(reader.position(), 3);
}

#[test]
fn try_skip_reports_shortfall() {
    let mut reader = ByteReader::new([1, 2, 3].as_slice());
    assert!(reader.try_skip(2).unwrap());
    assert!(!reader.try_skip(2).unwrap());

    let mut reader = ByteReader::new([0_u8; 0].as_slice());
    assert!(reader.try_skip(0).unwrap());
    assert!(!reader.try_skip(1).unwrap());
}

#[test]
fn io_errors_are_not_eof() {
    let mut reader = ByteReader::new(BrokenSource);
    assert!(matches!(reader.read_u8(), Err(ReadError::Io(_))));
}
