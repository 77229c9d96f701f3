use facetrack::{error::Error, FaceTracker, Frame, TrackerConfig, Tracking};
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Error> {
    use std::io::BufRead;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);

    let in_file_name = args.next().expect("expected detections file name");
    let config = match args.next() {
        Some(path) => TrackerConfig::load(path)?,
        None => TrackerConfig::default(),
    };

    let dets_file = std::fs::File::open(in_file_name)?;
    let mut tracker = FaceTracker::new(config);

    for (lineno, line) in std::io::BufReader::new(dets_file).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let frame = match Frame::parse_line(&line) {
            Ok(frame) => frame,
            Err(err) => {
                warn!(line = lineno + 1, %err, "skipping line");
                continue;
            }
        };

        let ts = frame.timestamp;
        if let Err(err) = tracker.update(&[frame], "dump") {
            warn!(line = lineno + 1, %err, "skipping frame");
            continue;
        }

        for t in tracker.tracks("dump").iter() {
            let [x1, y1, x2, y2]: [f32; 4] = t.bbox.into();

            println!(
                "{} {} {:.1} {:.1} {:.1} {:.1} {} {:.3} {}",
                ts,
                t.id,
                x1,
                y1,
                x2,
                y2,
                t.label,
                t.confidence,
                t.relation.as_deref().unwrap_or("-"),
            );
        }
    }

    Ok(())
}
