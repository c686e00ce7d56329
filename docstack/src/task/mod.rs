//! Two-phase execution of resolution requests.
//!
//! Resolution blocks on provider I/O, so it runs on a worker thread. Its
//! result is handed back to the host's primary context through a
//! [`MainLoop`], and only while the [`Host`] that asked for it is alive.
//!
//! ```text
//! host thread                 worker thread
//! -----------                 -------------
//! load_doc_stack ──spawn──▶   resolver.resolve()
//!                                   │
//! main_loop.run_* ◀──post────────────┘
//!   └─ host alive? ─▶ callback(stack)
//! ```

mod host;
mod load;
mod main_loop;
mod paired;

pub use host::{Host, HostHandle};
pub use load::{load_doc_stack, DocStackCallback, LoadDocStackTask};
pub use main_loop::{Dispatcher, MainLoop};
pub use paired::{execute, PairedTask, WORKER_THREAD_NAME};
