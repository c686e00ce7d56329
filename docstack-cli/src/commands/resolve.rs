//! Command to resolve a document's ancestry stack.

use crate::error::CliError;
use crate::utils::{load_catalog, load_configuration, GlobalOptions};
use clap::{Args, ValueEnum};
use docstack::output::OutputFormat;
use docstack::resolve::{Collaborators, DocStackResolver};
use docstack::task::{load_doc_stack, Host, MainLoop};
use docstack::{DocumentStack, DocumentUri, Features};
use log::debug;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Resolve the chain of documents from a root down to a document.
#[derive(Args)]
pub struct ResolveCommand {
    /// Document to resolve, e.g. doc://com.example.docs/42
    #[arg(value_name = "URI")]
    pub uri: String,

    /// Output format (defaults to the configured format)
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Seconds to wait for the resolution
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,
}

/// Output format options.
#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    /// Breadcrumb and one line per document
    Human,
    /// JSON
    Json,
    /// YAML
    Yaml,
    /// CSV, one row per document
    Csv,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Human => OutputFormat::Human,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Yaml => OutputFormat::Yaml,
            FormatArg::Csv => OutputFormat::Csv,
        }
    }
}

type Slot = Arc<Mutex<Option<Option<DocumentStack>>>>;

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let uri = DocumentUri::parse(&self.uri)
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

        if self.timeout == Some(0) {
            return Err(CliError::InvalidArguments(
                "--timeout must be greater than 0".to_string(),
            ));
        }

        let config = load_configuration(global)?;
        let timeout = self
            .timeout
            .map_or_else(|| config.resolve_timeout(), Duration::from_secs);
        let format = self
            .format
            .map_or_else(|| config.output_format(), OutputFormat::from);

        let catalog = Arc::new(load_catalog(&config)?);
        let resolver = DocStackResolver::new(
            uri.clone(),
            Features::from(&config),
            Collaborators::from_shared(catalog),
        );

        let main_loop = MainLoop::new();
        let host = Host::new();
        let slot = Slot::default();
        let stack = wait_for_stack(resolver, timeout, &main_loop, &host, &slot)?.ok_or_else(|| {
            CliError::SemanticFailure(format!("no ancestry resolved for {uri}"))
        })?;

        let rendered = format.create_formatter().format(&stack)?;
        println!("{}", rendered.trim_end());
        Ok(())
    }
}

/// Runs the resolution in the background and pumps `main_loop` until the
/// result lands in `slot` or `timeout` elapses.
///
/// A timeout too large to express as a deadline waits without one.
fn wait_for_stack(
    resolver: DocStackResolver,
    timeout: Duration,
    main_loop: &MainLoop,
    host: &Host,
    slot: &Slot,
) -> Result<Option<DocumentStack>, CliError> {
    let sink = slot.clone();

    debug!("Resolving {} with a {timeout:?} budget", resolver.uri());
    let callback = move |stack: Option<DocumentStack>| {
        if let Ok(mut slot) = sink.lock() {
            *slot = Some(stack);
        }
    };
    let _worker = load_doc_stack(resolver, &host.handle(), &main_loop.dispatcher(), callback)?;

    let deadline = Instant::now().checked_add(timeout);
    loop {
        if let Some(stack) = take(slot) {
            return Ok(stack);
        }

        let remaining = match deadline {
            Some(deadline) => deadline.saturating_duration_since(Instant::now()),
            None => timeout,
        };
        if remaining.is_zero() {
            // Anything the worker still delivers is discarded.
            host.tear_down();
            return Err(CliError::Timeout {
                seconds: timeout.as_secs(),
            });
        }

        main_loop.run_once_timeout(remaining);
    }
}

fn take(slot: &Slot) -> Option<Option<DocumentStack>> {
    slot.lock().ok().and_then(|mut slot| slot.take())
}

#[cfg(test)]
mod tests {
    use super::*;
    use docstack::access::ProviderAccess;
    use docstack::catalog::Catalog;
    use docstack::AbstractPath;
    use std::sync::mpsc::{self, Receiver};

    const CATALOG: &str = r"
providers:
  - authority: auth
    roots:
      - root_id: home
        title: Home
        document_uri: doc://auth/0
    documents:
      - uri: doc://auth/42
        display_name: notes.txt
        mime_type: text/plain
        parent: doc://auth/0
";

    /// Answers only after the test lets it.
    struct GatedProvider {
        gate: Mutex<Receiver<()>>,
    }

    impl ProviderAccess for GatedProvider {
        fn find_path(&self, uri: &DocumentUri) -> docstack::Result<Option<AbstractPath>> {
            self.gate.lock().unwrap().recv().ok();
            Ok(Some(AbstractPath::new(
                Some("home".to_string()),
                vec![uri.clone()],
            )))
        }
    }

    fn resolver(provider: Arc<dyn ProviderAccess>) -> DocStackResolver {
        let catalog = Arc::new(Catalog::from_yaml(CATALOG).unwrap());
        DocStackResolver::new(
            DocumentUri::parse("doc://auth/42").unwrap(),
            Features::with_find_path(),
            Collaborators::new(provider, catalog.clone(), catalog),
        )
    }

    #[test]
    fn test_delivers_resolved_stack() {
        let (release, gate) = mpsc::channel();
        release.send(()).unwrap();
        let provider = Arc::new(GatedProvider {
            gate: Mutex::new(gate),
        });

        let main_loop = MainLoop::new();
        let host = Host::new();
        let slot = Slot::default();
        let stack = wait_for_stack(
            resolver(provider),
            Duration::from_secs(5),
            &main_loop,
            &host,
            &slot,
        )
        .unwrap()
        .unwrap();

        assert_eq!(stack.breadcrumb(), vec!["Home", "notes.txt"]);
    }

    #[test]
    fn test_timeout_tears_down_and_discards_late_result() {
        let (release, gate) = mpsc::channel();
        let provider = Arc::new(GatedProvider {
            gate: Mutex::new(gate),
        });

        let main_loop = MainLoop::new();
        let host = Host::new();
        let slot = Slot::default();
        let err = wait_for_stack(
            resolver(provider),
            Duration::from_millis(50),
            &main_loop,
            &host,
            &slot,
        )
        .unwrap_err();

        assert!(matches!(err, CliError::Timeout { .. }));
        assert_eq!(err.exit_code(), 2);
        assert!(!host.is_alive());

        // The worker finishes after the deadline; its completion still runs
        // on the loop but must not reach the callback.
        release.send(()).unwrap();
        assert!(main_loop.run_once_timeout(Duration::from_secs(5)));
        assert!(slot.lock().unwrap().is_none());
    }

    #[test]
    fn test_unbounded_timeout_still_delivers() {
        let (release, gate) = mpsc::channel();
        release.send(()).unwrap();
        let provider = Arc::new(GatedProvider {
            gate: Mutex::new(gate),
        });

        let main_loop = MainLoop::new();
        let host = Host::new();
        let slot = Slot::default();
        let stack = wait_for_stack(
            resolver(provider),
            Duration::from_secs(u64::MAX),
            &main_loop,
            &host,
            &slot,
        )
        .unwrap();

        assert!(stack.is_some());
    }
}
