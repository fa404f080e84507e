use sepia_common::math::{SafeAdd, ToUsize};
use sepia_jpeg::SegmentFinder;
use tracing_subscriber::prelude::*;

fn main() {
    let mut args = std::env::args().skip(1);
    let path = args.next().expect("First argument must be a file path.");
    let marker = args
        .next()
        .expect("Second argument must be a marker byte, e.g. 0xED.");
    let output = args.next().expect("Third argument must be an output path.");
    let marker = u8::from_str_radix(marker.trim_start_matches("0x"), 16)
        .expect("Marker must be a byte in hexadecimal notation.");

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::builder().from_env_lossy())
        .with(tracing_subscriber::fmt::Layer::default().compact())
        .init();

    let data = std::fs::read(path).unwrap();
    let finder = SegmentFinder::new([marker]);
    let segments = finder.find_segments(data.as_slice()).unwrap();

    // Copy everything except the byte ranges the matching segments occupy
    let mut stripped = Vec::with_capacity(data.len());
    let mut pos = 0;
    for segment in &segments {
        let start = segment.header_offset().usize().unwrap();
        let end = start
            .safe_add(segment.full_length().usize().unwrap())
            .unwrap();
        stripped.extend_from_slice(&data[pos..start]);
        pos = end;
    }
    stripped.extend_from_slice(&data[pos..]);

    std::fs::write(output, stripped).unwrap();
    println!("Removed {} segments", segments.len());
}
