use sepia_common::read::ReadError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error("JPEG data is expected to begin with 0xFFD8, not {0:#06x}")]
    InvalidMagicBytes(u16),
    #[error("Segment {marker:#04x} at byte {offset} declares a length of less than two")]
    SegmentLengthTooSmall { marker: u8, offset: u64 },
    #[error("Segment {marker:#04x} is truncated at byte {offset}")]
    SegmentTruncated { marker: u8, offset: u64 },
}
