//! Write a synthetic landmark session for trying out `replay_frames`
//!
//! The session cycles through an open hand, a single-hand pinch, a two-hand
//! pinch that drifts off the object, a squeeze and a fist, all over the centre of the
//! image where the default camera projects the object.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use handcrate_core::{Finger, HandFrame, HandLabel, HandLandmark, HandLandmarks, HandObservation, LANDMARK_COUNT};
use handcrate_io::FrameWriter;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "synthetic_session", about = "Generate a JSON Lines landmark session")]
struct Cli {
    /// Output file
    out: PathBuf,

    /// Frames per phase
    #[arg(long, default_value_t = 30)]
    frames: usize,

    /// Landmark jitter amplitude
    #[arg(long, default_value_t = 0.002)]
    jitter: f32,

    /// RNG seed for reproducible sessions
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Debug, Clone, Copy)]
enum Pose {
    Open,
    /// Thumb tip x; the index tip sits 0.02 to its right
    Pinch(f32),
    Squeeze,
    Fist,
}

fn pose(kind: Pose) -> [HandLandmark; LANDMARK_COUNT] {
    let mut points = [HandLandmark::new(0.5, 0.95, 0.0); LANDMARK_COUNT];
    for (i, finger) in Finger::NON_THUMB.iter().enumerate() {
        let x = 0.5 + 0.08 * i as f32;
        points[finger.base()] = HandLandmark::new(x, 0.8, 0.0);
        points[finger.tip()] = HandLandmark::new(x, 0.3, 0.0);
    }
    points[Finger::Index.tip()] = HandLandmark::new(0.5, 0.5, 0.0);
    points[Finger::Thumb.tip()] = HandLandmark::new(0.25, 0.6, 0.0);

    match kind {
        Pose::Open => {}
        Pose::Pinch(thumb_x) => {
            points[Finger::Thumb.tip()] = HandLandmark::new(thumb_x, 0.5, 0.0);
            points[Finger::Index.tip()] = HandLandmark::new(thumb_x + 0.02, 0.5, 0.0);
        }
        Pose::Squeeze => {
            points[Finger::Thumb.tip()] = HandLandmark::new(0.5, 0.52, 0.0);
            points[Finger::Middle.tip()] = HandLandmark::new(0.51, 0.52, 0.0);
            points[Finger::Ring.tip()] = HandLandmark::new(0.5, 0.53, 0.0);
            points[Finger::Pinky.tip()] = HandLandmark::new(0.49, 0.52, 0.0);
        }
        Pose::Fist => {
            for finger in Finger::NON_THUMB {
                let base = points[finger.base()];
                points[finger.tip()] = HandLandmark::new(base.x, base.y - 0.04, 0.0);
            }
            points[Finger::Index.base()] = HandLandmark::new(0.5, 0.54, 0.0);
            points[Finger::Index.tip()] = HandLandmark::new(0.5, 0.5, 0.0);
        }
    }
    points
}

/// Writes frames with jitter and a running sequence number
struct SessionBuilder {
    rng: StdRng,
    writer: FrameWriter<BufWriter<File>>,
    jitter: f32,
    sequence: u64,
}

impl SessionBuilder {
    fn jittered(&mut self, mut points: [HandLandmark; LANDMARK_COUNT]) -> HandLandmarks {
        if self.jitter > 0.0 {
            for p in points.iter_mut() {
                p.x += self.rng.gen_range(-self.jitter..self.jitter);
                p.y += self.rng.gen_range(-self.jitter..self.jitter);
            }
        }
        HandLandmarks::new(points)
    }

    fn emit(&mut self, hands: &[(HandLabel, Pose)]) -> Result<()> {
        let hands = hands
            .iter()
            .map(|&(label, p)| HandObservation::new(label, self.jittered(pose(p))))
            .collect();
        self.writer.write_frame(&HandFrame::new(self.sequence, hands))?;
        self.sequence += 1;
        Ok(())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "handcrate=info,synthetic_session=info".into()),
        )
        .init();

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut session = SessionBuilder {
        rng,
        writer: FrameWriter::create(&cli.out)?,
        jitter: cli.jitter,
        sequence: 0,
    };
    let n = cli.frames.max(1);

    for _ in 0..n {
        session.emit(&[(HandLabel::Right, Pose::Open)])?;
    }
    for _ in 0..n {
        session.emit(&[(HandLabel::Right, Pose::Pinch(0.48))])?;
    }
    for _ in 0..n {
        session.emit(&[(HandLabel::Right, Pose::Open)])?;
    }
    // both hands pinch, then drift so the pinch moves away from the object
    for i in 0..n {
        let thumb_x = 0.48 - 0.15 * i as f32 / n as f32;
        session.emit(&[
            (HandLabel::Left, Pose::Pinch(thumb_x)),
            (HandLabel::Right, Pose::Pinch(thumb_x)),
        ])?;
    }
    for _ in 0..n {
        session.emit(&[(HandLabel::Right, Pose::Squeeze)])?;
    }
    for _ in 0..n {
        session.emit(&[(HandLabel::Left, Pose::Fist)])?;
    }
    for _ in 0..n {
        session.emit(&[])?;
    }

    session.writer.flush()?;
    info!(out = %cli.out.display(), frames = session.sequence, "wrote session");
    Ok(())
}
