use std::sync::Arc;
use url::Url;

/// Ordered archive locations plus an optional fallback scope.
///
/// This is the hand-off value for whatever mechanism actually loads code
/// from the archives. Lookups go to the parent first, the same delegation
/// order a hierarchical loader uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingContext {
    parent: Option<Arc<LoadingContext>>,
    locations: Vec<Url>,
}

impl LoadingContext {
    pub fn new(locations: Vec<Url>, parent: Option<Arc<LoadingContext>>) -> Self {
        Self { parent, locations }
    }

    /// Locations contributed by this context only.
    pub fn locations(&self) -> &[Url] {
        &self.locations
    }

    pub fn parent(&self) -> Option<&Arc<LoadingContext>> {
        self.parent.as_ref()
    }

    /// Every location visible from here, ancestors first.
    pub fn search_order(&self) -> Vec<&Url> {
        let mut order = match &self.parent {
            Some(parent) => parent.search_order(),
            None => Vec::new(),
        };
        order.extend(self.locations.iter());
        order
    }

    /// First location in search order whose last path segment is `file_name`.
    pub fn find(&self, file_name: &str) -> Option<&Url> {
        self.search_order().into_iter().find(|url| {
            url.path_segments()
                .and_then(|mut segments| segments.next_back())
                .and_then(|last| urlencoding::decode(last).ok())
                .is_some_and(|last| last == file_name)
        })
    }
}
