use thiserror::Error;

use crate::result::SearchResult;

/// Configuration errors reported by the search entry points. None of these are
/// transient; the caller has to fix the grid before searching again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("search needs both endpoints (start set: {start_set}, goal set: {goal_set})")]
    MissingEndpoints { start_set: bool, goal_set: bool },
    #[error(
        "BFS requires uniform edge costs (weighted: {weighted}, diagonal: {diagonal}); use Dijkstra or A* instead"
    )]
    UnsupportedConfiguration { weighted: bool, diagonal: bool },
}

pub type SearchOutcome = Result<SearchResult, SearchError>;
