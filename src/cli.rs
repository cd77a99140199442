//! Command-line arguments

use crate::commands::render::RenderOptions;
use clap::Parser;
use std::path::PathBuf;

/// Replay a recorded pointer stream and print the cursor trail overlay.
#[derive(Parser, Debug)]
#[command(name = "cursor-trail", version, about, long_about = None)]
pub struct Cli {
    /// Recorded pointer moves (JSON array of {x, y, processTimeMs})
    #[arg(short, long)]
    pub input: PathBuf,

    /// Trail configuration file (JSON)
    #[arg(short, long, env = "CURSOR_TRAIL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Keep only the most recent N points
    #[arg(long)]
    pub max_points: Option<usize>,

    /// Replay speed; 1.0 keeps recorded timing, 0 replays without delay
    #[arg(long, default_value_t = 0.0)]
    pub speed: f64,

    /// Write a JSON snapshot of the final trail here
    #[arg(long)]
    pub snapshot: Option<PathBuf>,

    /// Write markup to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl From<Cli> for RenderOptions {
    fn from(cli: Cli) -> Self {
        RenderOptions {
            input: cli.input,
            config: cli.config,
            max_points: cli.max_points,
            speed: cli.speed,
            snapshot: cli.snapshot,
            output: cli.output,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_args() {
        let cli = Cli::try_parse_from([
            "cursor-trail",
            "--input",
            "moves.json",
            "--max-points",
            "32",
            "--speed",
            "2",
            "--snapshot",
            "snap.json",
            "-o",
            "overlay.html",
        ])
        .unwrap();

        let options = RenderOptions::from(cli);
        assert_eq!(options.input, PathBuf::from("moves.json"));
        assert_eq!(options.max_points, Some(32));
        assert_eq!(options.speed, 2.0);
        assert_eq!(options.snapshot, Some(PathBuf::from("snap.json")));
        assert_eq!(options.output, Some(PathBuf::from("overlay.html")));
    }

    #[test]
    fn test_input_is_required() {
        assert!(Cli::try_parse_from(["cursor-trail"]).is_err());
    }
}
