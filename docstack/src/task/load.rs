//! Loading a document stack for a host.

use std::thread::JoinHandle;

use crate::error::Result;
use crate::resolve::DocStackResolver;
use crate::stack::DocumentStack;

use super::{execute, Dispatcher, HostHandle, PairedTask};

/// Receives the outcome of a stack load, exactly once.
///
/// Consuming `self` means a callback cannot be invoked twice. Any
/// `FnOnce(Option<DocumentStack>)` closure is a callback.
pub trait DocStackCallback: Send + 'static {
    /// Called on the host's primary context with the resolved stack, or
    /// `None` when the ancestry could not be determined.
    fn on_document_stack_loaded(self: Box<Self>, stack: Option<DocumentStack>);
}

impl<F> DocStackCallback for F
where
    F: FnOnce(Option<DocumentStack>) + Send + 'static,
{
    fn on_document_stack_loaded(self: Box<Self>, stack: Option<DocumentStack>) {
        (*self)(stack);
    }
}

/// Resolves a stack in the background and reports it on the primary context.
pub struct LoadDocStackTask {
    resolver: DocStackResolver,
    callback: Box<dyn DocStackCallback>,
}

impl LoadDocStackTask {
    /// Creates a task that reports through `callback`.
    pub fn new(resolver: DocStackResolver, callback: impl DocStackCallback) -> Self {
        Self {
            resolver,
            callback: Box::new(callback),
        }
    }
}

impl PairedTask for LoadDocStackTask {
    type Output = Option<DocumentStack>;

    fn run(&mut self) -> Option<DocumentStack> {
        self.resolver.resolve()
    }

    fn finish(self, stack: Option<DocumentStack>) {
        self.callback.on_document_stack_loaded(stack);
    }
}

/// Starts loading the stack `resolver` describes.
///
/// `callback` runs on the loop behind `dispatcher` once, unless `host` has
/// been torn down by then.
///
/// # Errors
///
/// Returns an error if the worker thread cannot be spawned.
///
/// # Examples
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use std::time::Duration;
/// use docstack::catalog::Catalog;
/// use docstack::resolve::{Collaborators, DocStackResolver};
/// use docstack::task::{load_doc_stack, Host, MainLoop};
/// use docstack::{DocumentStack, DocumentUri, Features};
///
/// let catalog = Arc::new(Catalog::from_yaml("providers: []").unwrap());
/// let resolver = DocStackResolver::new(
///     DocumentUri::parse("doc://auth/42").unwrap(),
///     Features::default(),
///     Collaborators::from_shared(catalog),
/// );
///
/// let main_loop = MainLoop::new();
/// let host = Host::new();
/// let delivered = Arc::new(Mutex::new(None));
/// let sink = delivered.clone();
///
/// load_doc_stack(resolver, &host.handle(), &main_loop.dispatcher(), move |stack: Option<DocumentStack>| {
///     *sink.lock().unwrap() = Some(stack.is_some());
/// })
/// .unwrap();
///
/// assert!(main_loop.run_once_timeout(Duration::from_secs(5)));
/// assert_eq!(*delivered.lock().unwrap(), Some(false));
/// ```
pub fn load_doc_stack(
    resolver: DocStackResolver,
    host: &HostHandle,
    dispatcher: &Dispatcher,
    callback: impl DocStackCallback,
) -> Result<JoinHandle<()>> {
    execute(LoadDocStackTask::new(resolver, callback), host, dispatcher)
}
