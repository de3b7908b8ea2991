use anyhow::Result;
use aurora_risk::cli::{self, Commands};
use aurora_risk::commands::{self, ManualConfig, VisualConfig};
use aurora_risk::config::{resolve_config, AuroraConfig};
use aurora_risk::core::ManualFeatureSet;
use aurora_risk::io::OutputFormat;
use std::path::PathBuf;

fn main() -> Result<()> {
    let cli = cli::parse_args();
    cli::init_runtime(cli.verbosity);

    // init never reads configuration
    match cli.command {
        Commands::Init { force } => commands::init_config(force),
        Commands::Visual {
            images,
            format,
            output,
            no_parallel,
            jobs,
        } => {
            let config = resolve_config(cli.config.as_deref())?;
            let jobs = jobs.unwrap_or(config.analysis.jobs);
            cli::configure_thread_pool(jobs);
            tracing::debug!(workers = cli::get_worker_count(jobs), "Configured thread pool");

            apply_color_mode(&output);
            commands::handle_visual(VisualConfig {
                images,
                format: resolve_format(format, &config),
                output,
                parallel: should_use_parallel(no_parallel, &config),
                verbose: cli.verbosity > 0,
            })
        }
        Commands::Manual {
            brightness,
            color_variety,
            spatial_extent,
            temporal_behavior,
            format,
            output,
        } => {
            let config = resolve_config(cli.config.as_deref())?;
            apply_color_mode(&output);
            commands::handle_manual(ManualConfig {
                features: ManualFeatureSet {
                    brightness,
                    color_variety,
                    spatial_extent,
                    temporal_behavior,
                },
                format: resolve_format(format, &config),
                output,
            })
        }
    }
}

// Explicit flag, then config file, then terminal
fn resolve_format(flag: Option<OutputFormat>, config: &AuroraConfig) -> OutputFormat {
    flag.or(config.output.default_format)
        .unwrap_or(OutputFormat::Terminal)
}

fn should_use_parallel(no_parallel: bool, config: &AuroraConfig) -> bool {
    !no_parallel && config.analysis.parallel
}

// No ANSI escapes in files
fn apply_color_mode(output: &Option<PathBuf>) {
    if output.is_some() {
        colored::control::set_override(false);
    }
}
