//! Replay a recorded landmark stream through the engine.
//!
//! Input format: JSON Lines, one frame per line, each line an array of
//! `[x, y]` landmark positions in the standard 33-point order:
//!
//! ```text
//! [[322.0, 110.5], [318.2, 98.0], ...]
//! ```

use std::fs;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Args;

use fitform_core::{Difficulty, Point2, PoseFrame, ThresholdTable};
use fitform_engine::{AnalyzerConfig, ExerciseAnalyzer};

/// Arguments for the `replay` command.
#[derive(Args)]
pub struct ReplayArgs {
    /// Path to the landmark stream (JSON Lines, one frame per line)
    pub frames: PathBuf,

    /// Exercise id to analyze (see `fitform exercises`)
    #[arg(long, default_value = "squat")]
    pub exercise: String,

    /// Difficulty level: easy, medium or hard
    #[arg(long, default_value = "medium")]
    pub difficulty: String,

    /// Path to a threshold table JSON document
    #[arg(long)]
    pub thresholds: Option<PathBuf>,

    /// Expected camera frame width in pixels
    #[arg(long)]
    pub frame_width: Option<f32>,
}

/// Executes the replay command.
///
/// # Errors
///
/// Returns an error for unreadable input files, an unknown difficulty name,
/// an unparseable threshold document, or malformed frame lines.
pub fn execute(args: ReplayArgs) -> anyhow::Result<()> {
    let Some(difficulty) = Difficulty::from_name(&args.difficulty) else {
        bail!("unknown difficulty '{}'", args.difficulty);
    };

    let mut config = AnalyzerConfig::default();
    if let Some(frame_width) = args.frame_width {
        config.frame_width = frame_width;
    }

    let mut analyzer = ExerciseAnalyzer::with_config(config);
    analyzer.set_exercise(&args.exercise);
    analyzer.set_difficulty(difficulty);

    if let Some(path) = &args.thresholds {
        let document = fs::read_to_string(path)
            .with_context(|| format!("reading threshold table {}", path.display()))?;
        let table = ThresholdTable::from_json_str(&document)
            .with_context(|| format!("parsing threshold table {}", path.display()))?;
        analyzer.load_thresholds(table);
    } else {
        tracing::warn!("no threshold table given, correctness cannot be evaluated");
    }

    let file = fs::File::open(&args.frames)
        .with_context(|| format!("opening frame stream {}", args.frames.display()))?;
    let reader = BufReader::new(file);

    let mut final_feedback = None;
    for (line_number, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("reading line {}", line_number + 1))?;
        if line.trim().is_empty() {
            continue;
        }

        let frame = parse_frame(&line)
            .with_context(|| format!("parsing frame on line {}", line_number + 1))?;
        let feedback = analyzer.analyze(&frame);

        println!(
            "[{:>5}] reps={:<3} correct={:<3} ok={:<5} {}",
            line_number + 1,
            feedback.rep_count,
            feedback.correct_rep_count,
            feedback.is_correct,
            feedback.message
        );
        final_feedback = Some(feedback);
    }

    match final_feedback {
        Some(feedback) => println!(
            "done: {} frame(s), {} rep(s), {} correct",
            analyzer.frame_count(),
            feedback.rep_count,
            feedback.correct_rep_count
        ),
        None => println!("done: empty stream"),
    }

    Ok(())
}

/// Parses one JSON Lines record into a pose frame.
fn parse_frame(line: &str) -> anyhow::Result<PoseFrame> {
    let pairs: Vec<[f32; 2]> = serde_json::from_str(line).context("expected an array of [x, y] pairs")?;
    let points = pairs
        .into_iter()
        .map(|[x, y]| Point2::new(x, y))
        .collect();
    Ok(PoseFrame::new(points))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_frame_accepts_pairs() {
        let frame = parse_frame("[[1.0, 2.0], [3.0, 4.0]]").unwrap();
        assert_eq!(frame.len(), 2);
        assert_eq!(frame.point(1), Point2::new(3.0, 4.0));
    }

    #[test]
    fn parse_frame_rejects_garbage() {
        assert!(parse_frame("{\"not\": \"a frame\"}").is_err());
        assert!(parse_frame("[[1.0], [2.0]]").is_err());
    }
}
