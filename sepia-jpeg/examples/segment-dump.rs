use sepia_jpeg::SegmentFinder;

fn main() {
    let path = std::env::args()
        .nth(1)
        .expect("First argument must be a file path.");
    let file = std::fs::File::open(path).unwrap();

    let finder = SegmentFinder::new(0x01..=0xFE_u8);
    let segments = finder
        .find_segments(std::io::BufReader::new(file))
        .unwrap();

    for segment in segments {
        println!("{:?}: {segment}", segment.marker_type());
    }
}
