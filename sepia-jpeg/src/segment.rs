use crate::Marker;

/// Location of one segment within a JPEG stream
///
/// All offsets are absolute byte positions from the start of the scanned
/// source. `header_offset` is where the finder began matching the marker,
/// which is the `0xFF` prefix byte unless fill bytes precede the marker.
/// `content_offset` is the first payload byte after the two byte length
/// field. Instances are only ever constructed by the finder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SegmentSpec {
    pub(crate) marker: u8,
    pub(crate) header_offset: u64,
    pub(crate) content_offset: u64,
    pub(crate) content_length: u64,
}

impl SegmentSpec {
    /// Raw marker byte
    pub fn marker(&self) -> u8 {
        self.marker
    }

    /// Marker resolved against the known marker table
    pub fn marker_type(&self) -> Marker {
        Marker::from(self.marker)
    }

    pub fn header_offset(&self) -> u64 {
        self.header_offset
    }

    pub fn content_offset(&self) -> u64 {
        self.content_offset
    }

    /// Number of payload bytes, not counting the length field
    pub fn content_length(&self) -> u64 {
        self.content_length
    }

    /// Bytes between the header start and the content start
    pub fn header_length(&self) -> u64 {
        self.content_offset.saturating_sub(self.header_offset)
    }

    /// Length from the header start through the end of the content
    ///
    /// The byte range `[header_offset, header_offset + full_length)` covers
    /// the whole segment, marker bytes and length field included.
    pub fn full_length(&self) -> u64 {
        self.header_length().saturating_add(self.content_length)
    }
}

impl std::fmt::Display for SegmentSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "segment {:#04x} at byte {}, {} content bytes at byte {}",
            self.marker, self.header_offset, self.content_length, self.content_offset
        )
    }
}
