//! The host's primary execution context.

use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::time::Duration;

type Job = Box<dyn FnOnce() + Send + 'static>;

/// A single-threaded job queue driven by the thread that owns it.
///
/// Jobs posted through a [`Dispatcher`] from any thread run only when the
/// owning thread pumps the loop. `MainLoop` is deliberately `!Send`, so the
/// thread that created it is the only one that can run its jobs.
///
/// # Examples
///
/// ```
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
/// use docstack::task::MainLoop;
///
/// let main_loop = MainLoop::new();
/// let dispatcher = main_loop.dispatcher();
/// let ran = Arc::new(AtomicBool::new(false));
///
/// let flag = ran.clone();
/// std::thread::spawn(move || {
///     dispatcher.post(move || flag.store(true, Ordering::SeqCst));
/// })
/// .join()
/// .unwrap();
///
/// assert!(!ran.load(Ordering::SeqCst));
/// assert_eq!(main_loop.run_pending(), 1);
/// assert!(ran.load(Ordering::SeqCst));
/// ```
pub struct MainLoop {
    sender: Sender<Job>,
    receiver: Receiver<Job>,
    _not_send: PhantomData<Rc<()>>,
}

impl MainLoop {
    /// Creates an empty loop bound to the current thread.
    #[must_use]
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            sender,
            receiver,
            _not_send: PhantomData,
        }
    }

    /// A handle for posting jobs to this loop.
    #[must_use]
    pub fn dispatcher(&self) -> Dispatcher {
        Dispatcher {
            sender: self.sender.clone(),
        }
    }

    /// Runs every job already queued without waiting. Returns how many ran.
    pub fn run_pending(&self) -> usize {
        let mut ran = 0;
        loop {
            match self.receiver.try_recv() {
                Ok(job) => {
                    job();
                    ran += 1;
                }
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => return ran,
            }
        }
    }

    /// Waits up to `timeout` for one job and runs it. Returns whether a job ran.
    pub fn run_once_timeout(&self, timeout: Duration) -> bool {
        match self.receiver.recv_timeout(timeout) {
            Ok(job) => {
                job();
                true
            }
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => false,
        }
    }
}

impl Default for MainLoop {
    fn default() -> Self {
        Self::new()
    }
}

/// Posts jobs to a [`MainLoop`] from any thread.
#[derive(Clone)]
pub struct Dispatcher {
    sender: Sender<Job>,
}

impl Dispatcher {
    /// Queues `job` on the loop. Returns `false` if the loop no longer exists.
    pub fn post<F>(&self, job: F) -> bool
    where
        F: FnOnce() + Send + 'static,
    {
        self.sender.send(Box::new(job)).is_ok()
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher").finish_non_exhaustive()
    }
}
