//! Paginated resource listing
//!
//! Walks every page of a resource kind and lazily emits each lightweight
//! reference in upstream order. The walk is an explicit state machine: it
//! fetches a page only once the previous page's references have all been
//! handed out, which makes the gap between items the natural cooperative
//! cancellation point. Dropping the walk abandons the remaining pages.
//!
//! Termination is driven solely by the continuation cursor: a page without
//! one ends the walk, while an empty page that still carries a cursor
//! advances the offset and keeps going.

use crate::client::CatalogSource;
use crate::cursor;
use crate::error::{Error, Result};
use crate::suppress::SuppressionPolicy;
use crate::types::ResourceReference;
use futures::stream::{self, Stream};
use std::collections::VecDeque;
use std::pin::Pin;
use std::sync::Arc;
use tracing::{debug, trace};

/// Boxed stream of listing references
pub type ReferenceStream = Pin<Box<dyn Stream<Item = Result<ResourceReference>> + Send>>;

enum WalkState {
    /// Next page to request
    Fetch { offset: u32 },
    /// Error held back until the buffered page drains
    Fail(Error),
    /// Terminal
    Drained,
}

/// One pagination walk over a resource kind.
///
/// Each walk starts fresh at offset 0 and is not restartable; callers that
/// need the listing again create a new walk.
pub struct ResourceWalk {
    source: Arc<dyn CatalogSource>,
    policy: SuppressionPolicy,
    kind: String,
    buffer: VecDeque<ResourceReference>,
    state: WalkState,
}

impl ResourceWalk {
    /// Create a walk over the given resource kind
    pub fn new(
        source: Arc<dyn CatalogSource>,
        policy: SuppressionPolicy,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            source,
            policy,
            kind: kind.into(),
            buffer: VecDeque::new(),
            state: WalkState::Fetch { offset: 0 },
        }
    }

    /// Next reference in upstream order; `None` once the walk is exhausted.
    ///
    /// After yielding an error the walk is exhausted; page fetch errors that
    /// match the suppression policy end the walk cleanly instead.
    pub async fn next_reference(&mut self) -> Option<Result<ResourceReference>> {
        loop {
            if let Some(reference) = self.buffer.pop_front() {
                return Some(Ok(reference));
            }

            let offset = match std::mem::replace(&mut self.state, WalkState::Drained) {
                WalkState::Fetch { offset } => offset,
                WalkState::Fail(err) => return Some(Err(err)),
                WalkState::Drained => return None,
            };

            trace!(kind = %self.kind, offset, "fetching listing page");
            let page = match self.source.fetch_page(&self.kind, offset).await {
                Ok(page) => page,
                Err(err) if self.policy.is_suppressed(&err) => {
                    debug!(kind = %self.kind, "listing fetch suppressed, ending walk: {err}");
                    return None;
                }
                Err(err) => return Some(Err(err)),
            };

            debug!(
                kind = %self.kind,
                offset,
                fetched = page.results.len(),
                has_next = page.next.is_some(),
                "listing page fetched"
            );
            self.buffer.extend(page.results);

            // The cursor decides what happens after this page drains.
            match page.next {
                None => {}
                Some(next_url) => match cursor::extract_offset(&next_url) {
                    Ok(next_offset) => self.state = WalkState::Fetch { offset: next_offset },
                    Err(err) => self.state = WalkState::Fail(err),
                },
            }
        }
    }

    /// Adapt the walk into a `futures::Stream`
    pub fn into_stream(self) -> ReferenceStream {
        Box::pin(stream::unfold(self, |mut walk| async move {
            walk.next_reference().await.map(|item| (item, walk))
        }))
    }
}

/// List every reference of a resource kind as a lazy stream.
///
/// Emission order is the concatenation of page orders, i.e. upstream list
/// order exactly.
pub fn list_resources(
    source: Arc<dyn CatalogSource>,
    policy: SuppressionPolicy,
    kind: impl Into<String>,
) -> ReferenceStream {
    ResourceWalk::new(source, policy, kind).into_stream()
}
