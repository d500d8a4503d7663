use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::context::NodeContext;
use crate::error::HostError;

/// One result of an interactive list search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSearchItem {
    /// Display label shown in the picker.
    pub name: String,
    /// Value stored when the item is selected.
    pub value: String,
}

impl ListSearchItem {
    /// Create a search result entry.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// An ordered sequence of search results.
///
/// Order follows whatever the remote API returned — no sorting,
/// pagination, or deduplication happens plugin-side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSearchResult {
    /// The results, in remote order.
    pub results: Vec<ListSearchItem>,
}

impl ListSearchResult {
    /// Wrap a result sequence.
    #[must_use]
    pub fn new(results: Vec<ListSearchItem>) -> Self {
        Self { results }
    }
}

/// A named search method backing a resource parameter's list mode.
///
/// The host invokes this while the user types into the picker; the
/// query is free text or absent for an unfiltered listing.
#[async_trait]
pub trait ResourceSearch: Send + Sync + 'static {
    /// Search the remote resource collection.
    async fn search(
        &self,
        query: Option<&str>,
        ctx: &NodeContext,
    ) -> Result<ListSearchResult, HostError>;
}
