/// Search and pagination state for the note list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListState {
    pub query: String,
    pub page: usize,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
        }
    }
}

/// Actions accepted by [`reduce`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListAction {
    /// Replace the search query.
    SetQuery(String),
    /// Reset the query to empty, e.g. after a note is deleted.
    ClearQuery,
    /// Jump to a page. Pages are 1-based.
    SetPage(usize),
}

/// Pure transition over the list state.
///
/// The one coupling between the fields lives here: a query change snaps
/// the page back to 1. Setting the query to its current value leaves the
/// page alone.
pub fn reduce(state: ListState, action: ListAction) -> ListState {
    match action {
        ListAction::SetQuery(query) => {
            if query == state.query {
                ListState { query, ..state }
            } else {
                ListState { query, page: 1 }
            }
        }
        ListAction::ClearQuery => reduce(state, ListAction::SetQuery(String::new())),
        ListAction::SetPage(page) => ListState {
            page: page.max(1),
            ..state
        },
    }
}
