//! Runtime setup for the CLI: thread pool and logging.

use crate::observability::{init_tracing, install_panic_hook};

/// Configure rayon global thread pool once at startup
pub fn configure_thread_pool(jobs: usize) {
    let mut builder = rayon::ThreadPoolBuilder::new();

    if jobs > 0 {
        builder = builder.num_threads(jobs);
    }

    if let Err(e) = builder.build_global() {
        // Already configured
        tracing::debug!("Thread pool already configured: {}", e);
    }
}

/// Get the number of worker threads to use
pub fn get_worker_count(jobs: usize) -> usize {
    if jobs == 0 {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4)
    } else {
        jobs
    }
}

/// Install the panic hook and tracing subscriber
pub fn init_runtime(verbosity: u8) {
    install_panic_hook();
    init_tracing(verbosity);
}
