//! Common test utilities for integration tests.
//!
//! This module provides collaborator mocks, descriptor fixtures, and a helper
//! that drives a resolution through the host's main loop.

pub mod logs;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use docstack::access::{DocumentsAccess, ProviderAccess, RootsAccess};
use docstack::document::MIME_TYPE_DIR;
use docstack::resolve::{Collaborators, DocStackResolver};
use docstack::task::{load_doc_stack, Host, MainLoop};
use docstack::{
    AbstractPath, DocumentDescriptor, DocumentStack, DocumentUri, Features, RootDescriptor,
};
use mockall::mock;

mock! {
    pub Provider {}
    impl ProviderAccess for Provider {
        fn find_path(&self, uri: &DocumentUri) -> docstack::Result<Option<AbstractPath>>;
    }
}

mock! {
    pub Roots {}
    impl RootsAccess for Roots {
        fn get_root_oneshot(&self, authority: &str, root_id: &str) -> Option<RootDescriptor>;
    }
}

mock! {
    pub Documents {}
    impl DocumentsAccess for Documents {
        fn get_documents(
            &self,
            authority: &str,
            uris: &[DocumentUri],
        ) -> Option<Vec<DocumentDescriptor>>;
    }
}

/// The document every scenario resolves.
pub const TARGET: &str = "doc://auth/42";

/// Parses a document identifier known to be valid.
pub fn uri(s: &str) -> DocumentUri {
    DocumentUri::parse(s).unwrap()
}

/// Root `root1` of authority `auth`.
pub fn root1() -> RootDescriptor {
    RootDescriptor::new("auth", "root1", "Root 1").with_document(uri("doc://auth/0"))
}

/// Directory `doc://auth/1`.
pub fn doc1() -> DocumentDescriptor {
    DocumentDescriptor::new(uri("doc://auth/1"), "Doc 1", MIME_TYPE_DIR)
}

/// File `doc://auth/42`.
pub fn doc42() -> DocumentDescriptor {
    DocumentDescriptor::new(uri(TARGET), "Doc 42", "application/pdf")
}

/// The provider's answer for [`TARGET`]: `root1 / 1 / 42`.
pub fn path_to_target() -> AbstractPath {
    AbstractPath::new(
        Some("root1".to_string()),
        vec![uri("doc://auth/1"), uri(TARGET)],
    )
}

/// Bundles mocks into collaborator handles.
pub fn collaborators(provider: MockProvider, roots: MockRoots, docs: MockDocuments) -> Collaborators {
    Collaborators::new(Arc::new(provider), Arc::new(roots), Arc::new(docs))
}

/// Resolver for [`TARGET`].
pub fn resolver(features: Features, collaborators: Collaborators) -> DocStackResolver {
    DocStackResolver::new(uri(TARGET), features, collaborators)
}

/// Every value delivered to a callback, in delivery order.
pub type Deliveries = Arc<Mutex<Vec<Option<DocumentStack>>>>;

/// Runs `resolver` as a background task and pumps a main loop until the
/// completion has been handled. Returns everything the callback received.
#[allow(dead_code)]
pub fn deliver(resolver: DocStackResolver) -> Vec<Option<DocumentStack>> {
    let main_loop = MainLoop::new();
    let host = Host::new();
    let deliveries: Deliveries = Arc::default();
    let sink = deliveries.clone();

    let worker = load_doc_stack(resolver, &host.handle(), &main_loop.dispatcher(), move |stack: Option<DocumentStack>| {
        sink.lock().unwrap().push(stack);
    })
    .unwrap();

    assert!(
        main_loop.run_once_timeout(Duration::from_secs(10)),
        "completion was never posted"
    );
    worker.join().unwrap();
    // Nothing else may arrive once the single completion has run.
    assert_eq!(main_loop.run_pending(), 0);

    let delivered = deliveries.lock().unwrap().clone();
    delivered
}

/// Catalog fixture shared by catalog-backed tests.
#[allow(dead_code)]
pub const CATALOG_YAML: &str = include_str!("../fixtures/catalog.yaml");
