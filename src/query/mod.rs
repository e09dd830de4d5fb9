//! Search and mutation orchestration on top of a [`DictionaryApi`](crate::api::DictionaryApi).
//!
//! [`QueryCache`] stores results per [`QueryKey`] and only ever gets invalidated
//! by mutations, never edited. [`Coordinator`] owns the cache plus the request
//! worker thread, and [`SearchView`] is the derived snapshot the page renders.

mod cache;
mod coordinator;
mod state;
mod view;
mod worker;

pub use cache::{CacheEntry, CacheOptions, FetchTicket, QueryCache, QueryKey, SEARCH_SCOPE};
pub use coordinator::Coordinator;
pub use state::{Mutation, MutationStatus, RequestState};
pub use view::{Banner, SearchView};
