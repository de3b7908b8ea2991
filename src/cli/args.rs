use crate::core::{Brightness, ColorVariety, SpatialExtent, TemporalBehavior};
use crate::io::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "aurora-risk")]
#[command(about = "Aurora observation risk classifier for GNSS and HF communication impact", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    /// -v: Show per-image measurements and progress
    /// -vv: Show feature extraction details
    /// -vvv: Show all trace information
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Configuration file (defaults to the nearest .aurora-risk.toml)
    #[arg(short, long, global = true, env = "AURORA_RISK_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify risk from one or more aurora photographs
    Visual {
        /// Image files to analyze (PNG or JPEG)
        #[arg(required = true, num_args = 1..)]
        images: Vec<PathBuf>,

        /// Output format (defaults to the configured format, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Disable parallel feature extraction
        #[arg(long = "no-parallel")]
        no_parallel: bool,

        /// Number of worker threads (0 = all cores)
        #[arg(short = 'j', long = "jobs")]
        jobs: Option<usize>,
    },

    /// Classify risk from manually reported observation descriptors
    Manual {
        /// Brightness: low, medium, high
        #[arg(short, long)]
        brightness: Brightness,

        /// Color variety: single, multiple
        #[arg(long = "color", visible_alias = "color-variety")]
        color_variety: ColorVariety,

        /// Spatial extent: narrow, wide
        #[arg(long = "extent", visible_alias = "spatial-extent")]
        spatial_extent: SpatialExtent,

        /// Temporal behavior: calm, variable, burst
        #[arg(long = "temporal", visible_alias = "temporal-behavior")]
        temporal_behavior: TemporalBehavior,

        /// Output format (defaults to the configured format, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_visual_command() {
        let cli = Cli::try_parse_from([
            "aurora-risk",
            "visual",
            "north.png",
            "south.jpg",
            "--format",
            "json",
            "--no-parallel",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.verbosity, 2);
        match cli.command {
            Commands::Visual {
                images,
                format,
                no_parallel,
                jobs,
                ..
            } => {
                assert_eq!(
                    images,
                    vec![PathBuf::from("north.png"), PathBuf::from("south.jpg")]
                );
                assert_eq!(format, Some(OutputFormat::Json));
                assert!(no_parallel);
                assert_eq!(jobs, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn visual_requires_an_image() {
        assert!(Cli::try_parse_from(["aurora-risk", "visual"]).is_err());
    }

    #[test]
    fn parses_manual_command_with_form_labels() {
        let cli = Cli::try_parse_from([
            "aurora-risk",
            "manual",
            "--brightness",
            "orta",
            "--color",
            "multiple",
            "--extent",
            "geniş",
            "--temporal",
            "variable",
        ])
        .unwrap();

        match cli.command {
            Commands::Manual {
                brightness,
                color_variety,
                spatial_extent,
                temporal_behavior,
                format,
                ..
            } => {
                assert_eq!(brightness, Brightness::Medium);
                assert_eq!(color_variety, ColorVariety::Multiple);
                assert_eq!(spatial_extent, SpatialExtent::Wide);
                assert_eq!(temporal_behavior, TemporalBehavior::Variable);
                assert_eq!(format, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn manual_rejects_unknown_label() {
        let err = Cli::try_parse_from([
            "aurora-risk",
            "manual",
            "--brightness",
            "blinding",
            "--color",
            "single",
            "--extent",
            "narrow",
            "--temporal",
            "calm",
        ])
        .unwrap_err();
        assert!(err.to_string().contains("blinding"));
    }

    #[test]
    fn parses_init_force() {
        let cli = Cli::try_parse_from(["aurora-risk", "init", "--force"]).unwrap();
        assert!(matches!(cli.command, Commands::Init { force: true }));
    }
}
