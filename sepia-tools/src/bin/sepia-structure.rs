use sepia_jpeg::SegmentFinder;
use tracing_subscriber::prelude::*;

fn main() {
    let path = std::env::args()
        .nth(1)
        .expect("First argument must be a file path.");

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::builder().from_env_lossy())
        .with(tracing_subscriber::fmt::Layer::default().compact())
        .init();

    let file = std::fs::File::open(path).unwrap();
    let finder = SegmentFinder::new(0x01..=0xFE_u8);
    let segments = finder
        .find_segments(std::io::BufReader::new(file))
        .unwrap();

    println!("JPEG segments:");
    for segment in &segments {
        println!(
            " - {:?} at byte {} ({} content bytes)",
            segment.marker_type(),
            segment.header_offset(),
            segment.content_length()
        );
    }
}
