//! Observability infrastructure for crash reports and debugging.
//!
//! - **Tracing**: fmt subscriber on stderr, level from `-v` or `RUST_LOG`
//! - **Context Tracking**: thread-local pipeline phase and current image
//! - **Panic Hook**: structured crash report using that context
//!
//! ```ignore
//! use aurora_risk::observability::{install_panic_hook, init_tracing};
//!
//! fn main() {
//!     install_panic_hook();
//!     init_tracing(0);
//! }
//! ```

pub mod context;
pub mod panic_hook;
pub mod tracing;

pub use context::{
    get_current_context, get_progress, in_image_context, increment_processed, set_current_image,
    set_current_source, set_phase, set_progress, AnalysisContext, AnalysisPhase, ContextGuard,
};
pub use panic_hook::install_panic_hook;
pub use self::tracing::init_tracing;
