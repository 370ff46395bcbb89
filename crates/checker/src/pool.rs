use crate::error::{CheckError, CheckErrorExt};
use rayon::{ThreadPool, ThreadPoolBuilder};

/// Builds the worker pool. `None` or `Some(0)` lets rayon pick one thread per CPU.
pub(crate) fn thread_pool(jobs: Option<usize>) -> Result<ThreadPool, CheckError> {
    let mut builder = ThreadPoolBuilder::new().thread_name(|index| format!("hyperlink-{index}"));
    if let Some(jobs) = jobs.filter(|&jobs| jobs > 0) {
        builder = builder.num_threads(jobs);
    }
    builder.build().context("Failed to start worker threads")
}
