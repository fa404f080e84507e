use std::io::Write;

use sepia_common::math::{SafeAdd, ToUsize};
use sepia_jpeg::SegmentFinder;
use tracing_subscriber::prelude::*;

fn main() {
    let mut args = std::env::args().skip(1);
    let path = args.next().expect("First argument must be a file path.");
    let marker = args
        .next()
        .expect("Second argument must be a marker byte, e.g. 0xED.");
    let marker = u8::from_str_radix(marker.trim_start_matches("0x"), 16)
        .expect("Marker must be a byte in hexadecimal notation.");

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::builder().from_env_lossy())
        .with(tracing_subscriber::fmt::Layer::default().compact())
        .init();

    let data = std::fs::read(path).unwrap();
    let finder = SegmentFinder::new([marker]);
    let segments = finder.find_segments(data.as_slice()).unwrap();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for segment in segments {
        let start = segment.content_offset().usize().unwrap();
        let end = start
            .safe_add(segment.content_length().usize().unwrap())
            .unwrap();
        out.write_all(&data[start..end]).unwrap();
    }
}
