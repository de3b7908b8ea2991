//! Thread-local context tracking for crash reports.
//!
//! Records which pipeline phase is running and which image is being
//! processed. Context is per thread (works with rayon parallel iterators);
//! progress is tracked with global atomic counters.

use std::cell::RefCell;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

static IMAGES_PROCESSED: AtomicUsize = AtomicUsize::new(0);
static IMAGES_TOTAL: AtomicUsize = AtomicUsize::new(0);

thread_local! {
    static CURRENT_CONTEXT: RefCell<AnalysisContext> = const { RefCell::new(AnalysisContext::new()) };
}

/// Snapshot of what was running when an error or panic occurred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisContext {
    pub phase: Option<AnalysisPhase>,
    /// Index of the batch image being processed
    pub current_image: Option<usize>,
    /// File the current image was read from
    pub current_source: Option<PathBuf>,
}

impl AnalysisContext {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: None,
            current_image: None,
            current_source: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisPhase {
    /// Reading and decoding image files
    Decoding,
    /// Computing pixel statistics and categorical features
    FeatureExtraction,
    /// Summing points and classifying
    Scoring,
    /// Rendering reports
    OutputGeneration,
}

impl std::fmt::Display for AnalysisPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decoding => write!(f, "decoding"),
            Self::FeatureExtraction => write!(f, "feature_extraction"),
            Self::Scoring => write!(f, "scoring"),
            Self::OutputGeneration => write!(f, "output_generation"),
        }
    }
}

/// RAII guard restoring the previous context on drop.
pub struct ContextGuard {
    previous: AnalysisContext,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        CURRENT_CONTEXT.with(|ctx| {
            *ctx.borrow_mut() = self.previous.clone();
        });
    }
}

fn update(apply: impl FnOnce(&mut AnalysisContext)) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        apply(&mut ctx.borrow_mut());
        ContextGuard { previous }
    })
}

/// Set the current phase until the returned guard drops.
#[must_use]
pub fn set_phase(phase: AnalysisPhase) -> ContextGuard {
    update(|ctx| ctx.phase = Some(phase))
}

#[must_use]
pub fn set_current_image(index: usize) -> ContextGuard {
    update(|ctx| ctx.current_image = Some(index))
}

#[must_use]
pub fn set_current_source(path: impl Into<PathBuf>) -> ContextGuard {
    let path = path.into();
    update(|ctx| ctx.current_source = Some(path))
}

/// Run `f` with `phase` and image `index` set on the current thread.
///
/// Context is thread-local, so rayon work items call this on the worker
/// that runs them.
pub fn in_image_context<R>(phase: AnalysisPhase, index: usize, f: impl FnOnce() -> R) -> R {
    let _phase = set_phase(phase);
    let _image = set_current_image(index);
    f()
}

pub fn set_progress(processed: usize, total: usize) {
    IMAGES_PROCESSED.store(processed, Ordering::Relaxed);
    IMAGES_TOTAL.store(total, Ordering::Relaxed);
}

pub fn increment_processed() {
    IMAGES_PROCESSED.fetch_add(1, Ordering::Relaxed);
}

#[must_use]
pub fn get_current_context() -> AnalysisContext {
    CURRENT_CONTEXT.with(|ctx| ctx.borrow().clone())
}

/// (processed, total)
#[must_use]
pub fn get_progress() -> (usize, usize) {
    (
        IMAGES_PROCESSED.load(Ordering::Relaxed),
        IMAGES_TOTAL.load(Ordering::Relaxed),
    )
}
