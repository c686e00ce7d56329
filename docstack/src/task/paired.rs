//! Background work whose result is delivered on the host's primary context.

use std::thread::{self, JoinHandle};

use log::debug;

use crate::error::Result;

use super::{Dispatcher, HostHandle};

/// Name given to worker threads.
pub const WORKER_THREAD_NAME: &str = "docstack-worker";

/// A two-phase task: blocking work off the primary context, then delivery on it.
pub trait PairedTask: Send + 'static {
    /// What the background phase produces.
    type Output: Send + 'static;

    /// Background phase. May block.
    fn run(&mut self) -> Self::Output;

    /// Completion phase, called on the primary context while the host is alive.
    fn finish(self, output: Self::Output);
}

/// Runs `task` on a worker thread and posts its completion to `dispatcher`.
///
/// The completion phase checks `host` on the primary context; if the host
/// was torn down in the meantime the result is dropped and `finish` is never
/// called. The returned handle joins the background phase only.
///
/// # Errors
///
/// Returns an error if the worker thread cannot be spawned.
pub fn execute<T: PairedTask>(
    mut task: T,
    host: &HostHandle,
    dispatcher: &Dispatcher,
) -> Result<JoinHandle<()>> {
    let host = host.clone();
    let dispatcher = dispatcher.clone();

    let handle = thread::Builder::new()
        .name(WORKER_THREAD_NAME.to_string())
        .spawn(move || {
            let output = task.run();
            let posted = dispatcher.post(move || {
                if host.is_alive() {
                    task.finish(output);
                } else {
                    debug!("Host torn down before completion; discarding result.");
                }
            });
            if !posted {
                debug!("Primary context is gone; discarding result.");
            }
        })?;

    Ok(handle)
}
