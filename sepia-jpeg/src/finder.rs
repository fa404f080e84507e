use std::collections::BTreeSet;
use std::io::Read;

use sepia_common::read::{ByteReader, ReadError};

use crate::{Error, SegmentSpec};

/// JPEG streams begin with the two byte Start of Image sequence
pub const MAGIC_BYTES: u16 = 0xFFD8;

/// Markers are announced by a 0xFF byte
const MARKER_PREFIX: u8 = 0xFF;
/// Start of scan; entropy coded data without a length field follows
const MARKER_SOS: u8 = 0xDA;
/// End of image
const MARKER_EOI: u8 = 0xD9;

/// Finds segments with the given markers in JPEG streams
///
/// ```
/// # use sepia_jpeg::{Marker, SegmentFinder};
/// let data = [0xFF, 0xD8, 0xFF, 0xE1, 0x00, 0x04, 0xAB, 0xCD, 0xFF, 0xDA];
/// let finder = SegmentFinder::new([Marker::APP1]);
/// let segments = finder.find_segments(data.as_slice()).unwrap();
/// assert_eq!(segments.len(), 1);
/// assert_eq!(segments[0].content_offset(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct SegmentFinder {
    markers: BTreeSet<u8>,
}

impl SegmentFinder {
    /// New finder interested in the given markers
    ///
    /// Accepts raw marker bytes as well as [`Marker`](crate::Marker) values.
    pub fn new<M: Into<u8>>(markers: impl IntoIterator<Item = M>) -> Self {
        Self {
            markers: markers.into_iter().map(Into::into).collect(),
        }
    }

    /// List the matching segments in their order of appearance
    ///
    /// The source is consumed forward only and is read no further than the
    /// start of scan marker. Payload bytes are skipped, not returned; use
    /// the offsets in the returned [`SegmentSpec`]s to slice the original
    /// data.
    ///
    /// A source that ends without a further marker, or that ends inside the
    /// payload of a segment nobody asked for, terminates the scan and
    /// returns the segments collected so far. A source that ends inside the
    /// payload of a requested segment fails with
    /// [`Error::SegmentTruncated`].
    pub fn find_segments(&self, source: impl Read) -> Result<Vec<SegmentSpec>, Error> {
        if self.markers.is_empty() {
            return Ok(Vec::new());
        }

        let mut reader = ByteReader::new(source);

        let magic = reader.read_u16()?;
        if magic != MAGIC_BYTES {
            return Err(Error::InvalidMagicBytes(magic));
        }

        let mut segments = Vec::new();
        loop {
            let header_offset = reader.position();

            let marker = match next_marker(&mut reader) {
                Ok(marker) => marker,
                // The stream ran out without another marker
                Err(ReadError::UnexpectedEof) => return Ok(segments),
                Err(err) => return Err(err.into()),
            };

            if marker == MARKER_SOS {
                // The length field of the start of scan segment does not
                // bound the entropy coded data that follows. No metadata
                // segments come after it, so stop here.
                return Ok(segments);
            }

            if marker == MARKER_EOI {
                return Ok(segments);
            }

            let declared_length = reader.read_u16()?;
            // The length field counts its own two bytes
            let Some(content_length) = declared_length.checked_sub(2) else {
                return Err(Error::SegmentLengthTooSmall {
                    marker,
                    offset: header_offset,
                });
            };
            let content_length = u64::from(content_length);

            if self.markers.contains(&marker) {
                let content_offset = reader.position();
                match reader.skip(content_length) {
                    Ok(()) => (),
                    Err(ReadError::UnexpectedEof) => {
                        return Err(Error::SegmentTruncated {
                            marker,
                            offset: content_offset,
                        });
                    }
                    Err(err) => return Err(err.into()),
                }

                tracing::debug!("Found segment {marker:#04x} at byte {header_offset}");

                segments.push(SegmentSpec {
                    marker,
                    header_offset,
                    content_offset,
                    content_length,
                });
            } else if !reader.try_skip(content_length)? {
                // Truncated segment nobody asked for; keep what we have
                return Ok(segments);
            }
        }
    }
}

/// Advance to the next segment marker and return its code
///
/// A marker is zero or more 0xFF fill bytes followed by 0xFF and a byte
/// that is neither 0x00 nor 0xFF. Implemented as a two byte sliding window
/// so stack use stays constant however much padding precedes the marker.
fn next_marker(reader: &mut ByteReader<impl Read>) -> Result<u8, ReadError> {
    let mut prev = reader.read_u8()?;
    let mut curr = reader.read_u8()?;

    while prev != MARKER_PREFIX || curr == MARKER_PREFIX || curr == 0x00 {
        prev = curr;
        curr = reader.read_u8()?;
    }

    Ok(curr)
}
