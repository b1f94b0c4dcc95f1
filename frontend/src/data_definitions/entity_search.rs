//! State machine behind the paginated entity search: accumulates pages for
//! one (entity, query, params) triple, keeps at most one fetch in flight and
//! discards completions that arrive for stale parameters.

use common::search_query::EntitySearchQuery;
use common::search_result::SearchResultPage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// First page for the current parameters is pending.
    Loading,
    /// A subsequent page is pending; accumulated pages stay visible.
    LoadingMore,
    Ready,
    /// Terminal for the current parameters; cleared only by a parameter
    /// change.
    Error,
}

/// Identity of one issued fetch. A completion is applied only if its ticket
/// still matches the aggregator's current generation and expected page
/// sequence, so responses for stale parameters or out of request order are
/// discarded instead of mutating state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub page_index: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntitySearchState<T> {
    query: EntitySearchQuery,
    pages: Vec<SearchResultPage<T>>,
    /// Items of the previous parameter set, shown optimistically while the
    /// first page of the new parameters is pending.
    placeholder: Vec<T>,
    status: SearchStatus,
    error: Option<String>,
    generation: u64,
    next_page_index: u64,
    next_cursor: u64,
    in_flight: Option<FetchTicket>,
}

impl<T: Clone> EntitySearchState<T> {
    pub fn new(query: EntitySearchQuery) -> Self {
        Self {
            query,
            pages: Vec::new(),
            placeholder: Vec::new(),
            status: SearchStatus::Loading,
            error: None,
            generation: 0,
            next_page_index: 0,
            next_cursor: 0,
            in_flight: None,
        }
    }

    pub fn query(&self) -> &EntitySearchQuery {
        &self.query
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// True when the first page of the current parameters has not been
    /// started or applied yet.
    pub fn wants_first_page(&self) -> bool {
        self.status == SearchStatus::Loading && self.in_flight.is_none()
    }

    /// Atomically discards all accumulated pages and restarts pagination at
    /// page one. The in-flight fetch, if any, is abandoned: its ticket no
    /// longer matches and its completion will be discarded. A no-op when the
    /// parameters are unchanged.
    pub fn set_query(&mut self, query: EntitySearchQuery) {
        if self.query == query {
            return;
        }
        self.placeholder = self.items();
        self.query = query;
        self.pages.clear();
        self.status = SearchStatus::Loading;
        self.error = None;
        self.generation += 1;
        self.next_page_index = 0;
        self.next_cursor = 0;
        self.in_flight = None;
    }

    /// Claims the next fetch if one is due. Returns `None` when a fetch is
    /// already in flight, no further page exists, or the aggregator is in its
    /// terminal error state.
    pub fn begin_fetch(&mut self) -> Option<(FetchTicket, u64)> {
        if self.in_flight.is_some() || self.status == SearchStatus::Error {
            return None;
        }
        if !self.pages.is_empty() && !self.has_next_page() {
            return None;
        }
        let ticket = FetchTicket {
            generation: self.generation,
            page_index: self.next_page_index,
        };
        self.in_flight = Some(ticket);
        if self.next_page_index > 0 {
            self.status = SearchStatus::LoadingMore;
        }
        Some((ticket, self.next_cursor))
    }

    fn ticket_is_current(&self, ticket: FetchTicket) -> bool {
        self.in_flight == Some(ticket)
            && ticket.generation == self.generation
            && ticket.page_index == self.next_page_index
    }

    /// Appends a fetched page. Returns whether the page was applied; stale
    /// completions are discarded.
    pub fn apply_page(&mut self, ticket: FetchTicket, page: SearchResultPage<T>) -> bool {
        if !self.ticket_is_current(ticket) {
            return false;
        }
        self.in_flight = None;
        self.next_page_index += 1;
        if let Some(cursor) = page.next_cursor {
            self.next_cursor = cursor;
        }
        self.pages.push(page);
        self.placeholder.clear();
        self.status = SearchStatus::Ready;
        true
    }

    /// Records a failed fetch. The error is terminal for the current
    /// parameters; previously accumulated pages are kept but no further pages
    /// are added until the parameters change.
    pub fn apply_error(&mut self, ticket: FetchTicket, message: String) -> bool {
        if !self.ticket_is_current(ticket) {
            return false;
        }
        self.in_flight = None;
        self.status = SearchStatus::Error;
        self.error = Some(message);
        true
    }

    /// Ordered concatenation of all fetched pages, or the placeholder items
    /// while the first page of new parameters is pending.
    pub fn items(&self) -> Vec<T> {
        if self.pages.is_empty() {
            return self.placeholder.clone();
        }
        self.pages
            .iter()
            .flat_map(|page| page.items.iter().cloned())
            .collect()
    }

    pub fn is_placeholder(&self) -> bool {
        self.pages.is_empty() && !self.placeholder.is_empty()
    }

    pub fn has_next_page(&self) -> bool {
        match self.pages.last() {
            Some(page) => page.has_next_page(),
            None => false,
        }
    }

    pub fn view(&self) -> SearchView<T> {
        SearchView {
            status: self.status,
            error: self.error.clone(),
            items: self.items(),
            is_placeholder: self.is_placeholder(),
            has_next_page: self.has_next_page(),
        }
    }
}

/// Snapshot handed to the result renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchView<T> {
    pub status: SearchStatus,
    pub error: Option<String>,
    pub items: Vec<T>,
    pub is_placeholder: bool,
    pub has_next_page: bool,
}

/// Message shown for an empty result set. With a free-text query the message
/// references the literal query text; with filters only it does not.
pub fn empty_results_message(query_string: &str) -> String {
    if query_string.is_empty() {
        "No results found for your current filter settings.".to_string()
    } else {
        format!("No results found for query \"{query_string}\". Did you spell it correctly?")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::search_const::PAGE_SIZE;
    use common::search_query::EntityKind;

    fn studio_query(query_string: &str) -> EntitySearchQuery {
        EntitySearchQuery {
            entity: EntityKind::Studio,
            query_string: query_string.to_string(),
            ..Default::default()
        }
    }

    fn page(cursor: u64, items: &[&str], has_more: bool) -> SearchResultPage<String> {
        SearchResultPage {
            items: items.iter().map(|s| s.to_string()).collect(),
            cursor,
            next_cursor: has_more.then(|| cursor + PAGE_SIZE),
        }
    }

    #[test]
    fn at_most_one_fetch_in_flight() {
        let mut state = EntitySearchState::<String>::new(studio_query(""));
        let first = state.begin_fetch();
        assert!(first.is_some());
        assert_eq!(state.begin_fetch(), None);
        assert_eq!(state.begin_fetch(), None);
    }

    #[test]
    fn pages_append_in_request_order() {
        let mut state = EntitySearchState::new(studio_query(""));
        let (ticket, cursor) = state.begin_fetch().unwrap();
        assert_eq!(cursor, 0);
        assert!(state.apply_page(ticket, page(0, &["a", "b"], true)));
        let (ticket, cursor) = state.begin_fetch().unwrap();
        assert_eq!(cursor, PAGE_SIZE);
        assert!(state.apply_page(ticket, page(PAGE_SIZE, &["c"], false)));
        assert_eq!(state.items(), vec!["a", "b", "c"]);
        assert_eq!(state.status(), SearchStatus::Ready);
    }

    #[test]
    fn duplicate_completion_is_discarded() {
        let mut state = EntitySearchState::new(studio_query(""));
        let (ticket, _) = state.begin_fetch().unwrap();
        assert!(state.apply_page(ticket, page(0, &["a"], true)));
        // same ticket resolving twice must not duplicate the page
        assert!(!state.apply_page(ticket, page(0, &["a"], true)));
        assert_eq!(state.items(), vec!["a"]);
    }

    #[test]
    fn parameter_change_resets_and_discards_late_completion() {
        let mut state = EntitySearchState::new(studio_query(""));
        let (first_ticket, _) = state.begin_fetch().unwrap();
        state.apply_page(first_ticket, page(0, &["old"], true));
        let (stale_ticket, _) = state.begin_fetch().unwrap();

        state.set_query(studio_query("ghibli"));
        assert_eq!(state.status(), SearchStatus::Loading);
        assert!(state.is_placeholder());
        assert_eq!(state.items(), vec!["old"]);

        // late response for the previous parameters must not be applied
        assert!(!state.apply_page(stale_ticket, page(PAGE_SIZE, &["stale"], false)));
        assert!(state.is_placeholder());

        let (fresh_ticket, cursor) = state.begin_fetch().unwrap();
        assert_eq!(cursor, 0);
        assert!(state.apply_page(fresh_ticket, page(0, &["new"], false)));
        assert_eq!(state.items(), vec!["new"]);
        assert!(!state.is_placeholder());
    }

    #[test]
    fn unchanged_parameters_do_not_reset() {
        let mut state = EntitySearchState::new(studio_query(""));
        let (ticket, _) = state.begin_fetch().unwrap();
        state.apply_page(ticket, page(0, &["a"], false));
        state.set_query(studio_query(""));
        assert_eq!(state.status(), SearchStatus::Ready);
        assert_eq!(state.items(), vec!["a"]);
    }

    #[test]
    fn fetch_next_without_next_page_is_a_noop() {
        let mut state = EntitySearchState::new(studio_query(""));
        let (ticket, _) = state.begin_fetch().unwrap();
        state.apply_page(ticket, page(0, &["a"], false));
        let before = state.clone();
        assert_eq!(state.begin_fetch(), None);
        assert_eq!(state, before);
    }

    #[test]
    fn error_is_terminal_until_parameters_change() {
        let mut state = EntitySearchState::new(studio_query("x"));
        let (ticket, _) = state.begin_fetch().unwrap();
        assert!(state.apply_error(ticket, "boom".to_string()));
        assert_eq!(state.status(), SearchStatus::Error);
        assert_eq!(state.begin_fetch(), None);

        state.set_query(studio_query("y"));
        assert_eq!(state.status(), SearchStatus::Loading);
        assert!(state.view().error.is_none());
        assert!(state.begin_fetch().is_some());
    }

    #[test]
    fn failed_page_keeps_previous_pages() {
        let mut state = EntitySearchState::new(studio_query(""));
        let (ticket, _) = state.begin_fetch().unwrap();
        state.apply_page(ticket, page(0, &["a"], true));
        let (ticket, _) = state.begin_fetch().unwrap();
        state.apply_error(ticket, "boom".to_string());
        assert_eq!(state.items(), vec!["a"]);
        assert_eq!(state.status(), SearchStatus::Error);
    }

    #[test]
    fn empty_message_references_query_text_only_when_present() {
        assert!(empty_results_message("xyz").contains("\"xyz\""));
        let filter_message = empty_results_message("");
        assert!(!filter_message.contains("query"));
        assert!(filter_message.contains("filter"));
    }
}
