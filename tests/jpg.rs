use sepia_jpeg::{Marker, SegmentFinder};

fn segment(marker: u8, payload: &[u8]) -> Vec<u8> {
    let mut out = vec![0xFF, marker];
    let declared = u16::try_from(payload.len() + 2).unwrap();
    out.extend_from_slice(&declared.to_be_bytes());
    out.extend_from_slice(payload);
    out
}

/// Minimal but structurally complete JPEG with metadata segments
fn sample_jpeg() -> Vec<u8> {
    let mut data = vec![0xFF, 0xD8];

    // JFIF header
    data.extend(segment(0xE0, b"JFIF\0\x01\x02\0\0\x01\0\x01\0\0"));

    // Exif with a little-endian TIFF block
    let mut exif = b"Exif\0\0".to_vec();
    exif.extend_from_slice(b"II*\0\x08\0\0\0\0\0");
    data.extend(segment(0xE1, &exif));

    // Photoshop IRB carrying an IPTC caption record
    let mut iptc = b"Photoshop 3.0\x008BIM".to_vec();
    iptc.extend_from_slice(&[0x04, 0x04, 0, 0]);
    iptc.extend_from_slice(&12_u32.to_be_bytes());
    iptc.extend_from_slice(b"\x1c\x02\x78\0\x07caption");
    data.extend(segment(0xED, &iptc));

    // Comment
    data.extend(segment(0xFE, b"created for tests"));

    // Quantization table
    let mut dqt = vec![0x00];
    dqt.extend_from_slice(&[16; 64]);
    data.extend(segment(0xDB, &dqt));

    // Frame header, 1x1 grayscale
    data.extend(segment(0xC0, &[8, 0, 1, 0, 1, 1, 0x11, 0]));

    // Scan header, entropy coded data, end of image
    data.extend(segment(0xDA, &[1, 1, 0, 0, 63, 0]));
    data.extend_from_slice(&[0xAA, 0x12, 0x34]);
    data.extend_from_slice(&[0xFF, 0xD9]);

    data
}

#[test]
fn find_iptc_segment() {
    let data = sample_jpeg();
    let finder = SegmentFinder::new([Marker::APP13]);
    let segments = finder.find_segments(data.as_slice()).unwrap();

    assert_eq!(segments.len(), 1);
    let iptc = segments[0];
    let start = usize::try_from(iptc.content_offset()).unwrap();
    let end = start + usize::try_from(iptc.content_length()).unwrap();
    assert!(data[start..end].starts_with(b"Photoshop 3.0\0"));
}

#[test]
fn find_exif_segment() {
    let data = sample_jpeg();
    let segments = SegmentFinder::new([Marker::APP1])
        .find_segments(data.as_slice())
        .unwrap();

    assert_eq!(segments.len(), 1);
    let exif = segments[0];
    let start = usize::try_from(exif.content_offset()).unwrap();
    assert!(data[start..].starts_with(b"Exif\0\0"));
}

#[test]
fn strip_iptc_segment() {
    let data = sample_jpeg();
    let finder = SegmentFinder::new([Marker::APP13]);
    let segments = finder.find_segments(data.as_slice()).unwrap();
    let iptc = segments[0];

    // Drop the byte range the segment occupies, marker bytes included
    let start = usize::try_from(iptc.header_offset()).unwrap();
    let end = start + usize::try_from(iptc.full_length()).unwrap();
    let mut stripped = data[..start].to_vec();
    stripped.extend_from_slice(&data[end..]);

    assert!(finder.find_segments(stripped.as_slice()).unwrap().is_empty());

    // Everything else is still in place
    let others = SegmentFinder::new([Marker::APP0, Marker::APP1, Marker::COM])
        .find_segments(stripped.as_slice())
        .unwrap();
    assert_eq!(
        others.iter().map(|s| s.marker_type()).collect::<Vec<_>>(),
        [Marker::APP0, Marker::APP1, Marker::COM]
    );
}

#[test]
fn full_structure() {
    let data = sample_jpeg();
    let segments = SegmentFinder::new(0x01..=0xFE_u8)
        .find_segments(data.as_slice())
        .unwrap();

    assert_eq!(
        segments.iter().map(|s| s.marker_type()).collect::<Vec<_>>(),
        [
            Marker::APP0,
            Marker::APP1,
            Marker::APP13,
            Marker::COM,
            Marker::DQT,
            Marker::SOF0,
        ]
    );
}
