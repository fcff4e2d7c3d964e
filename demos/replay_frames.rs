//! Replay a recorded landmark session through the gesture pipeline
//!
//! Prints every recognised gesture and the object's final transform.
//!
//! ```text
//! replay_frames session.jsonl --radius 0.3 --finger-direction
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use handcrate_algorithms::{FingerDirection, GestureClassifier, GestureThresholds};
use handcrate_core::{HandFrame, HandLabel};
use handcrate_io::{FrameReader, JsonArraySession, SessionReader};
use handcrate_scene::{ControllerConfig, GestureController, GesturePipeline, PerspectiveCamera, SceneObject};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "replay_frames", about = "Classify hand gestures in a recorded landmark session")]
struct Cli {
    /// Session file (.jsonl / .ndjson, or a .json array)
    file: PathBuf,

    /// Gesture thresholds as JSON; missing fields keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Object transform policy as JSON
    #[arg(long)]
    controller: Option<PathBuf>,

    /// Override the proximity gate radius
    #[arg(long)]
    radius: Option<f32>,

    /// Landmarks come from an unmirrored preview
    #[arg(long)]
    no_mirror: bool,

    /// Report index-finger direction when no other gesture is made
    #[arg(long)]
    finger_direction: bool,

    /// Print frames without a gesture too
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "handcrate=info,replay_frames=info".into()),
        )
        .init();

    let mut thresholds = match &cli.config {
        Some(path) => GestureThresholds::from_path(path)
            .with_context(|| format!("loading thresholds from {}", path.display()))?,
        None => GestureThresholds::default(),
    };
    if let Some(radius) = cli.radius {
        thresholds.gate_radius = radius;
    }
    if cli.no_mirror {
        thresholds.mirror_x = false;
    }

    let controller_config = match &cli.controller {
        Some(path) => ControllerConfig::from_path(path)
            .with_context(|| format!("loading controller config from {}", path.display()))?,
        None => ControllerConfig::default(),
    };

    let mut pipeline = GesturePipeline::new(
        GestureClassifier::new(thresholds)?,
        GestureController::new(controller_config)?,
    );
    if cli.finger_direction {
        pipeline = pipeline.with_finger_direction(FingerDirection::from_thresholds(&thresholds));
    }

    let camera = PerspectiveCamera::default();
    let mut object = SceneObject::new("object");

    info!(file = %cli.file.display(), radius = thresholds.gate_radius, "replaying session");

    let frames: Box<dyn Iterator<Item = handcrate_core::Result<HandFrame>>> =
        match cli.file.extension().and_then(|s| s.to_str()) {
            Some("json") => Box::new(JsonArraySession::read_session(&cli.file)?.into_iter().map(Ok)),
            _ => Box::new(
                FrameReader::open(&cli.file)
                    .with_context(|| format!("opening {}", cli.file.display()))?,
            ),
        };

    let outcomes = pipeline.run(frames, &camera, &mut object);

    for outcome in &outcomes {
        if outcome.responses.is_empty() {
            if cli.verbose {
                println!("{:>6}  (no hands)", outcome.sequence);
            }
            continue;
        }
        for hand in &outcome.responses {
            if hand.response.is_none() && !cli.verbose {
                continue;
            }
            let data = hand
                .response
                .data
                .map(|d| format!("{d:+.4}"))
                .unwrap_or_default();
            println!(
                "{:>6}  {:<5}  {:<16} {:>9}  {:?}",
                outcome.sequence,
                hand.label.as_str(),
                hand.response.gesture.as_str(),
                data,
                hand.change
            );
        }
    }

    let stats = pipeline.stats();
    let transform = &object.transform;
    println!();
    println!("Frames:   {} ({} skipped)", stats.frames, stats.skipped);
    println!("Gestures: {}", stats.gestures);
    for label in [HandLabel::Left, HandLabel::Right] {
        println!(
            "  {:<5} pinch: {}",
            label.as_str(),
            if pipeline.classifier().pinch_state(label).is_pinching() { "held" } else { "idle" }
        );
    }
    println!(
        "Object:   position ({:.3}, {:.3}, {:.3}), scale {:.3}, rotation {:.3} rad",
        transform.position.x,
        transform.position.y,
        transform.position.z,
        transform.uniform_scale(),
        transform.rotation.angle()
    );

    Ok(())
}
