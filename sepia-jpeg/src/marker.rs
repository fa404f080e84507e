/// JPEG segment marker
///
/// The finder treats markers as opaque bytes. This enum names the known
/// marker space for callers that want more than a byte value; it plays no
/// part in the scanning itself.
///
/// ```
/// # use sepia_jpeg::Marker;
/// assert_eq!(Marker::from(0xE1), Marker::APP1);
/// assert_eq!(u8::from(Marker::APP13), 0xED);
/// assert_eq!(Marker::from(0xC8), Marker::Unknown(0xC8));
/// ```
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Marker {
    /// Baseline DCT frame header
    SOF0 = 0xC0,
    /// Extended sequential DCT frame header
    SOF1 = 0xC1,
    /// Progressive DCT frame header
    SOF2 = 0xC2,
    /// Define Huffman table
    DHT = 0xC4,
    /// Start of image
    SOI = 0xD8,
    /// End of image
    EOI = 0xD9,
    /// Start of scan
    SOS = 0xDA,
    /// Define quantization table
    DQT = 0xDB,
    /// Define restart interval
    DRI = 0xDD,
    /// JFIF
    APP0 = 0xE0,
    /// Exif, XMP
    APP1 = 0xE1,
    /// ICC color profile
    APP2 = 0xE2,
    APP3 = 0xE3,
    APP4 = 0xE4,
    APP5 = 0xE5,
    APP6 = 0xE6,
    APP7 = 0xE7,
    APP8 = 0xE8,
    APP9 = 0xE9,
    APP10 = 0xEA,
    APP11 = 0xEB,
    APP12 = 0xEC,
    /// IPTC, Photoshop IRB
    APP13 = 0xED,
    /// Adobe color transform
    APP14 = 0xEE,
    APP15 = 0xEF,
    /// Comment
    COM = 0xFE,
    /// Marker without a name in this table
    Unknown(u8),
}

impl From<u8> for Marker {
    fn from(value: u8) -> Self {
        match value {
            0xC0 => Self::SOF0,
            0xC1 => Self::SOF1,
            0xC2 => Self::SOF2,
            0xC4 => Self::DHT,
            0xD8 => Self::SOI,
            0xD9 => Self::EOI,
            0xDA => Self::SOS,
            0xDB => Self::DQT,
            0xDD => Self::DRI,
            0xE0 => Self::APP0,
            0xE1 => Self::APP1,
            0xE2 => Self::APP2,
            0xE3 => Self::APP3,
            0xE4 => Self::APP4,
            0xE5 => Self::APP5,
            0xE6 => Self::APP6,
            0xE7 => Self::APP7,
            0xE8 => Self::APP8,
            0xE9 => Self::APP9,
            0xEA => Self::APP10,
            0xEB => Self::APP11,
            0xEC => Self::APP12,
            0xED => Self::APP13,
            0xEE => Self::APP14,
            0xEF => Self::APP15,
            0xFE => Self::COM,
            other => Self::Unknown(other),
        }
    }
}

impl From<Marker> for u8 {
    fn from(marker: Marker) -> Self {
        match marker {
            Marker::SOF0 => 0xC0,
            Marker::SOF1 => 0xC1,
            Marker::SOF2 => 0xC2,
            Marker::DHT => 0xC4,
            Marker::SOI => 0xD8,
            Marker::EOI => 0xD9,
            Marker::SOS => 0xDA,
            Marker::DQT => 0xDB,
            Marker::DRI => 0xDD,
            Marker::APP0 => 0xE0,
            Marker::APP1 => 0xE1,
            Marker::APP2 => 0xE2,
            Marker::APP3 => 0xE3,
            Marker::APP4 => 0xE4,
            Marker::APP5 => 0xE5,
            Marker::APP6 => 0xE6,
            Marker::APP7 => 0xE7,
            Marker::APP8 => 0xE8,
            Marker::APP9 => 0xE9,
            Marker::APP10 => 0xEA,
            Marker::APP11 => 0xEB,
            Marker::APP12 => 0xEC,
            Marker::APP13 => 0xED,
            Marker::APP14 => 0xEE,
            Marker::APP15 => 0xEF,
            Marker::COM => 0xFE,
            Marker::Unknown(other) => other,
        }
    }
}
