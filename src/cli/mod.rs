//! Command-line interface for aurora-risk
//!
//! - Argument parsing (`args`)
//! - Runtime setup (`setup`)

pub mod args;
pub mod setup;

pub use args::{parse_args, Cli, Commands};
pub use setup::{configure_thread_pool, get_worker_count, init_runtime};
