//! # Book List State
//!
//! State behind the paginated, searchable book list.
//!
//! ## Responsibilities:
//! - Current page, page size and the committed search query
//! - Issuing a [`FetchTicket`] whenever one of those three changes
//! - Applying fetch results, discarding responses older than the newest request
//! - Local removal after a confirmed delete
//!
//! The state never talks to the network itself. Whoever drives it (the list
//! hook in the frontend, or a test) runs the ticket through [`load_books`] and
//! feeds the outcome back through [`BookListState::apply_fetch`].

use tracing::{debug, warn};

use crate::api::{BookApi, ListQuery};
use crate::error::FetchError;
use crate::models::{Book, BookId, BookPage};
use crate::pagination::{total_pages, PageWindow, DEFAULT_GROUP_SIZE};

pub const PAGE_SIZE_OPTIONS: [u32; 5] = [1, 5, 10, 20, 50];
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// A dispatched list request, tagged with its sequence number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub query: ListQuery,
}

/// What happened when a fetch result was applied
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Applied,
    /// The request failed; items and total keep their previous values
    Failed(FetchError),
    /// A newer request was dispatched after this one; result dropped
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookListState {
    page: u32,
    page_size: u32,
    search_input: String,
    committed_query: String,
    items: Vec<Book>,
    total: u64,
    loading: bool,
    loaded: bool,
    latest: FetchTicket,
    failures: u64,
    last_error: Option<FetchError>,
}

impl Default for BookListState {
    fn default() -> Self {
        Self::new()
    }
}

impl BookListState {
    /// Fresh state with the initial fetch already requested
    pub fn new() -> Self {
        let page = 1;
        let page_size = DEFAULT_PAGE_SIZE;
        Self {
            page,
            page_size,
            search_input: String::new(),
            committed_query: String::new(),
            items: Vec::new(),
            total: 0,
            loading: true,
            loaded: false,
            latest: FetchTicket {
                seq: 1,
                query: build_query(page, page_size, ""),
            },
            failures: 0,
            last_error: None,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn committed_query(&self) -> &str {
        &self.committed_query
    }

    pub fn items(&self) -> &[Book] {
        &self.items
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// A fetch has completed and returned nothing to show
    pub fn is_empty(&self) -> bool {
        self.loaded && self.items.is_empty()
    }

    pub fn total_pages(&self) -> u32 {
        total_pages(self.total, self.page_size)
    }

    pub fn window(&self) -> PageWindow {
        PageWindow::compute(self.page, self.total_pages(), DEFAULT_GROUP_SIZE)
    }

    /// The most recently dispatched request
    pub fn latest_ticket(&self) -> &FetchTicket {
        &self.latest
    }

    /// Number of failed fetches so far; bumps once per failure
    pub fn failure_count(&self) -> u64 {
        self.failures
    }

    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }

    /// Raw text typed into the search box. Commits nothing by itself.
    pub fn set_search_input(&mut self, input: impl Into<String>) {
        self.search_input = input.into();
    }

    /// Accept `query` as the active search and go back to page 1.
    ///
    /// Returns the new ticket when this changed what should be displayed.
    pub fn commit_search(&mut self, query: impl Into<String>) -> Option<FetchTicket> {
        let query = query.into();
        debug!(query = %query, "search committed");
        let changed = self.page != 1 || self.committed_query != query;
        self.page = 1;
        self.committed_query = query;
        changed.then(|| self.request_fetch())
    }

    /// Explicit submit: commit whatever is in the search box right now
    pub fn submit_search(&mut self) -> Option<FetchTicket> {
        let query = self.search_input.clone();
        self.commit_search(query)
    }

    pub fn set_page(&mut self, page: u32) -> Option<FetchTicket> {
        let page = page.max(1);
        if page == self.page {
            return None;
        }
        self.page = page;
        Some(self.request_fetch())
    }

    /// Only sizes from [`PAGE_SIZE_OPTIONS`] are accepted. Resets to page 1.
    pub fn set_page_size(&mut self, page_size: u32) -> Option<FetchTicket> {
        if !PAGE_SIZE_OPTIONS.contains(&page_size) {
            warn!(page_size, "ignoring unsupported page size");
            return None;
        }
        let changed = self.page != 1 || self.page_size != page_size;
        self.page_size = page_size;
        self.page = 1;
        changed.then(|| self.request_fetch())
    }

    /// Re-issue the current request, e.g. after the user retries
    pub fn refresh(&mut self) -> FetchTicket {
        self.request_fetch()
    }

    fn request_fetch(&mut self) -> FetchTicket {
        let seq = self.latest.seq + 1;
        self.latest = FetchTicket {
            seq,
            query: build_query(self.page, self.page_size, &self.committed_query),
        };
        self.loading = true;
        debug!(seq, page = self.page, page_size = self.page_size, "list fetch requested");
        self.latest.clone()
    }

    /// Apply the result of the request tagged `seq`.
    pub fn apply_fetch(&mut self, seq: u64, result: Result<BookPage, FetchError>) -> FetchOutcome {
        if seq != self.latest.seq {
            warn!(seq, latest = self.latest.seq, "discarding stale list response");
            return FetchOutcome::Stale;
        }

        self.loading = false;
        match result {
            Ok(page) => {
                self.items = page.items;
                self.total = page.total;
                self.loaded = true;
                self.last_error = None;
                FetchOutcome::Applied
            }
            Err(err) => {
                self.failures += 1;
                self.last_error = Some(err.clone());
                FetchOutcome::Failed(err)
            }
        }
    }

    /// Drop a deleted book from the visible page. `total` is left alone until
    /// the next fetch.
    pub fn remove_book(&mut self, id: BookId) -> bool {
        let before = self.items.len();
        self.items.retain(|book| book.id != id);
        self.items.len() != before
    }
}

fn build_query(page: u32, page_size: u32, search: &str) -> ListQuery {
    ListQuery::clamped(page, page_size).with_search(search)
}

/// Run a ticket's request against the API
pub async fn load_books<A>(api: &A, ticket: &FetchTicket) -> Result<BookPage, FetchError>
where
    A: BookApi + ?Sized,
{
    api.list_books(&ticket.query).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::BookApi;
    use crate::debounce::SearchDebouncer;
    use crate::testing::{book, FakeBookApi};

    fn page_of(ids: &[BookId], total: u64) -> BookPage {
        BookPage {
            total,
            items: ids.iter().map(|id| book(*id, "Title", "Author")).collect(),
        }
    }

    #[test]
    fn test_initial_state_requests_first_page() {
        let state = BookListState::new();
        let ticket = state.latest_ticket();
        assert_eq!(ticket.seq, 1);
        assert_eq!(ticket.query.page(), 1);
        assert_eq!(ticket.query.page_size(), DEFAULT_PAGE_SIZE);
        assert!(state.is_loading());
        assert!(!state.is_empty());
    }

    #[test]
    fn test_commit_resets_page() {
        let mut state = BookListState::new();
        state.set_page(3);
        let ticket = state.commit_search("herbert").unwrap();
        assert_eq!(state.page(), 1);
        assert_eq!(ticket.query.title(), Some("herbert"));
        assert_eq!(ticket.query.author(), Some("herbert"));
    }

    #[test]
    fn test_unchanged_commit_does_not_refetch() {
        let mut state = BookListState::new();
        assert!(state.commit_search("").is_none());
        assert!(state.commit_search("dune").is_some());
        assert!(state.commit_search("dune").is_none());
    }

    #[test]
    fn test_submit_uses_raw_input() {
        let mut state = BookListState::new();
        state.set_search_input("le guin");
        assert_eq!(state.committed_query(), "");
        let ticket = state.submit_search().unwrap();
        assert_eq!(state.committed_query(), "le guin");
        assert_eq!(ticket.query.title(), Some("le guin"));
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut state = BookListState::new();
        state.set_page(4);
        let ticket = state.set_page_size(20).unwrap();
        assert_eq!(state.page(), 1);
        assert_eq!(ticket.query.page_size(), 20);
        assert_eq!(ticket.query.offset(), 0);
    }

    #[test]
    fn test_unsupported_page_size_is_ignored() {
        let mut state = BookListState::new();
        assert!(state.set_page_size(7).is_none());
        assert_eq!(state.page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_page_is_clamped_to_one() {
        let mut state = BookListState::new();
        state.set_page(2);
        state.set_page(0);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_failed_fetch_keeps_previous_items() {
        let mut state = BookListState::new();
        let first = state.latest_ticket().seq;
        assert_eq!(state.apply_fetch(first, Ok(page_of(&[1, 2], 12))), FetchOutcome::Applied);

        let ticket = state.set_page(2).unwrap();
        let err = FetchError::Network("offline".to_string());
        assert_eq!(state.apply_fetch(ticket.seq, Err(err.clone())), FetchOutcome::Failed(err));

        assert_eq!(state.items().len(), 2);
        assert_eq!(state.total(), 12);
        assert_eq!(state.failure_count(), 1);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = BookListState::new();
        let slow = state.commit_search("a").unwrap();
        let fast = state.commit_search("abc").unwrap();

        assert_eq!(state.apply_fetch(fast.seq, Ok(page_of(&[3], 1))), FetchOutcome::Applied);
        assert_eq!(state.apply_fetch(slow.seq, Ok(page_of(&[1, 2], 2))), FetchOutcome::Stale);

        assert_eq!(state.items().iter().map(|b| b.id).collect::<Vec<_>>(), vec![3]);
        assert_eq!(state.total(), 1);
    }

    #[test]
    fn test_empty_result_is_explicit() {
        let mut state = BookListState::new();
        let seq = state.latest_ticket().seq;
        state.apply_fetch(seq, Ok(BookPage::default()));
        assert!(state.is_empty());
        assert_eq!(state.total_pages(), 0);
        assert!(state.window().is_empty());
    }

    #[test]
    fn test_delete_removes_locally_and_keeps_total() {
        let mut state = BookListState::new();
        let seq = state.latest_ticket().seq;
        state.apply_fetch(seq, Ok(page_of(&[1, 2, 3], 21)));

        assert!(state.remove_book(2));
        assert_eq!(state.items().iter().map(|b| b.id).collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(state.total(), 21);
        assert_eq!(state.total_pages(), 3);

        assert!(!state.remove_book(99));
    }

    #[test]
    fn test_debounced_typing_commits_one_search() {
        let mut state = BookListState::new();
        let mut debouncer = SearchDebouncer::new();
        let mut tickets = Vec::new();

        let timers: Vec<u64> = ["a", "ab", "abc"]
            .into_iter()
            .map(|input| {
                state.set_search_input(input);
                debouncer.schedule(input)
            })
            .collect();
        for generation in timers {
            if let Some(query) = debouncer.fire(generation) {
                tickets.extend(state.commit_search(query));
            }
        }

        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].query.title(), Some("abc"));
    }

    #[tokio::test]
    async fn test_load_second_page_requests_offset() {
        let api = FakeBookApi::with_books((1..=25).map(|id| book(id, "Title", "Author")));
        let mut state = BookListState::new();
        let ticket = state.set_page(2).unwrap();

        let result = load_books(&api, &ticket).await;
        assert_eq!(state.apply_fetch(ticket.seq, result), FetchOutcome::Applied);

        let recorded = api.recorded_queries();
        let pairs = recorded.last().unwrap().query_pairs();
        assert_eq!(
            pairs,
            vec![("limit", "10".to_string()), ("offset", "10".to_string())]
        );
        assert_eq!(state.items().first().map(|b| b.id), Some(11));
        assert_eq!(state.total(), 25);
        assert_eq!(state.total_pages(), 3);
    }

    #[tokio::test]
    async fn test_search_filters_title_or_author() {
        let api = FakeBookApi::with_books(vec![
            book(1, "Dune", "Frank Herbert"),
            book(2, "Children of Dune", "Frank Herbert"),
            book(3, "Hyperion", "Dan Simmons"),
        ]);
        let mut state = BookListState::new();
        let ticket = state.commit_search("simmons").unwrap();

        let result = load_books(&api, &ticket).await;
        state.apply_fetch(ticket.seq, result);

        assert_eq!(state.items().iter().map(|b| b.id).collect::<Vec<_>>(), vec![3]);
        assert_eq!(state.total(), 1);
    }

    #[tokio::test]
    async fn test_delete_flow() {
        let api = FakeBookApi::with_books((1..=3).map(|id| book(id, "Title", "Author")));
        let mut state = BookListState::new();
        let ticket = state.latest_ticket().clone();
        let result = load_books(&api, &ticket).await;
        state.apply_fetch(ticket.seq, result);

        api.fail_next(FetchError::Network("offline".to_string()));
        assert!(api.delete_book(2).await.is_err());
        assert_eq!(state.items().len(), 3);

        api.delete_book(2).await.unwrap();
        assert!(state.remove_book(2));
        assert_eq!(state.items().len(), 2);
        assert_eq!(state.total(), 3);
        assert!(api.stored(2).is_none());
    }

    #[tokio::test]
    async fn test_failed_load_surfaces_error() {
        let api = FakeBookApi::default();
        api.fail_next(FetchError::Status {
            status: 500,
            message: "Internal Server Error".to_string(),
        });
        let mut state = BookListState::new();
        let ticket = state.latest_ticket().clone();

        let result = load_books(&api, &ticket).await;
        let outcome = state.apply_fetch(ticket.seq, result);

        assert!(matches!(outcome, FetchOutcome::Failed(FetchError::Status { status: 500, .. })));
        assert!(state.last_error().is_some());
        assert!(!state.is_empty());
    }
}
