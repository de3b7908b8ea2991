use crate::core;
use crate::extraction::Image;
use crate::io::{self, ImageEntry, OutputFormat, VisualReport};
use crate::observability::{
    in_image_context, increment_processed, set_current_source, set_phase, set_progress,
    AnalysisPhase,
};
use crate::scoring::VisualRiskScorer;
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

pub struct VisualConfig {
    pub images: Vec<PathBuf>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub parallel: bool,
    pub verbose: bool,
}

fn load_image(path: &Path) -> core::Result<Image> {
    let _source = set_current_source(path);
    let image = Image::open(path)?;
    increment_processed();
    tracing::debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "Decoded image"
    );
    Ok(image)
}

/// Decode every file, failing on the first one that cannot be read.
pub fn load_images(paths: &[PathBuf], parallel: bool) -> Result<Vec<Image>> {
    set_progress(0, paths.len());

    let load = |(index, path): (usize, &PathBuf)| {
        in_image_context(AnalysisPhase::Decoding, index, || load_image(path))
    };
    let images: core::Result<Vec<Image>> = if parallel {
        paths.par_iter().enumerate().map(load).collect()
    } else {
        paths.iter().enumerate().map(load).collect()
    };
    Ok(images?)
}

/// Score the batch and build the report without rendering it.
pub fn build_visual_report(paths: &[PathBuf], parallel: bool) -> Result<VisualReport> {
    let images = load_images(paths, parallel)?;
    let scorer = VisualRiskScorer::new().with_parallel(parallel);

    let reports = scorer.assess_images(&images);
    let risks: Vec<_> = reports.iter().map(|r| r.risk).collect();
    let aggregate = scorer
        .aggregate(&risks)
        .context("Cannot score an empty image batch")?;

    let images = paths
        .iter()
        .zip(reports)
        .map(|(path, report)| ImageEntry {
            source: path.display().to_string(),
            report,
        })
        .collect();

    Ok(VisualReport { images, aggregate })
}

pub fn handle_visual(config: VisualConfig) -> Result<()> {
    tracing::info!(images = config.images.len(), "Starting visual risk analysis");
    let report = build_visual_report(&config.images, config.parallel)?;

    let _phase = set_phase(AnalysisPhase::OutputGeneration);
    let destination = io::open_destination(config.output.as_deref())?;
    let mut writer = io::create_writer(config.format, destination, config.verbose);
    writer.write_visual(&report)?;
    Ok(())
}
