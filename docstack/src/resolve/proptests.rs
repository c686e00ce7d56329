//! Property-based tests for resolution.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use proptest::prelude::*;

use super::{Collaborators, DocStackResolver, Resolution};
use crate::access::{DocumentsAccess, ProviderAccess, RootsAccess};
use crate::document::{DocumentDescriptor, DocumentUri};
use crate::error::Result;
use crate::features::Features;
use crate::path::AbstractPath;
use crate::root::RootDescriptor;

/// In-memory collaborators answering with a fixed path.
struct FixedStore {
    path: Option<AbstractPath>,
    root_known: bool,
    docs_known: bool,
    find_path_calls: AtomicUsize,
}

impl FixedStore {
    fn new(path: Option<AbstractPath>, root_known: bool, docs_known: bool) -> Self {
        Self {
            path,
            root_known,
            docs_known,
            find_path_calls: AtomicUsize::new(0),
        }
    }
}

impl ProviderAccess for FixedStore {
    fn find_path(&self, _uri: &DocumentUri) -> Result<Option<AbstractPath>> {
        self.find_path_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.path.clone())
    }
}

impl RootsAccess for FixedStore {
    fn get_root_oneshot(&self, authority: &str, root_id: &str) -> Option<RootDescriptor> {
        self.root_known
            .then(|| RootDescriptor::new(authority, root_id, root_id.to_uppercase()))
    }
}

impl DocumentsAccess for FixedStore {
    fn get_documents(
        &self,
        _authority: &str,
        uris: &[DocumentUri],
    ) -> Option<Vec<DocumentDescriptor>> {
        self.docs_known.then(|| {
            uris.iter()
                .map(|u| DocumentDescriptor::new(u.clone(), u.as_str(), "text/plain"))
                .collect()
        })
    }
}

fn segments_strategy() -> impl Strategy<Value = Vec<DocumentUri>> {
    prop::collection::hash_set("[a-z0-9]{1,12}", 1..8).prop_map(|ids| {
        ids.into_iter()
            .map(|id| DocumentUri::parse(&format!("doc://auth/{id}")).unwrap())
            .collect()
    })
}

fn resolver_for(store: Arc<FixedStore>, features: Features) -> DocStackResolver {
    DocStackResolver::new(
        DocumentUri::parse("doc://auth/target").unwrap(),
        features,
        Collaborators::from_shared(store),
    )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    // A resolved stack lists documents exactly in segment order under the requested root.
    #[test]
    fn resolved_stack_preserves_segment_order(
        segments in segments_strategy(),
        root_id in "[a-z][a-z0-9]{0,8}",
    ) {
        let path = AbstractPath::new(Some(root_id.clone()), segments.clone());
        let store = Arc::new(FixedStore::new(Some(path), true, true));
        let stack = resolver_for(store, Features::with_find_path()).resolve().unwrap();

        let uris: Vec<_> = stack.iter().map(|d| d.uri.clone()).collect();
        prop_assert_eq!(uris, segments);
        prop_assert_eq!(&stack.root().root_id, &root_id);
    }

    // Any missing lookup yields no stack at all.
    #[test]
    fn missing_lookup_never_yields_partial_stack(
        segments in segments_strategy(),
        root_known in any::<bool>(),
        docs_known in any::<bool>(),
    ) {
        prop_assume!(!(root_known && docs_known));
        let path = AbstractPath::new(Some("root1".to_string()), segments);
        let store = Arc::new(FixedStore::new(Some(path), root_known, docs_known));
        let outcome = resolver_for(store, Features::with_find_path()).resolve_outcome();

        prop_assert_eq!(outcome, Resolution::LookupFailed {
            root_found: root_known,
            documents_found: docs_known,
        });
    }

    // With the feature off, the provider is never consulted.
    #[test]
    fn disabled_never_consults_provider(segments in segments_strategy()) {
        let path = AbstractPath::new(Some("root1".to_string()), segments);
        let store = Arc::new(FixedStore::new(Some(path), true, true));
        let resolver = resolver_for(store.clone(), Features::default());

        prop_assert!(resolver.resolve().is_none());
        prop_assert_eq!(store.find_path_calls.load(Ordering::SeqCst), 0);
    }

    // Resolving twice against unchanged collaborators gives the same outcome.
    #[test]
    fn resolution_is_idempotent(
        segments in segments_strategy(),
        root_known in any::<bool>(),
        docs_known in any::<bool>(),
        with_root_id in any::<bool>(),
    ) {
        let root_id = with_root_id.then(|| "root1".to_string());
        let store = Arc::new(FixedStore::new(
            Some(AbstractPath::new(root_id, segments)),
            root_known,
            docs_known,
        ));
        let resolver = resolver_for(store, Features::with_find_path());

        prop_assert_eq!(resolver.resolve_outcome(), resolver.resolve_outcome());
    }
}

