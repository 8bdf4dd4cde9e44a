use std::rc::Rc;

use gloo::timers::callback::Timeout;
use shared::{
    load_books, BookId, BookListState, BookPage, FetchError, FetchOutcome, SearchDebouncer,
    SEARCH_DEBOUNCE_MS,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_notifications::Notifier;
use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use shared::BookApi;

const COMPONENT: &str = "book-list";

#[derive(Clone, Default, PartialEq)]
pub struct BookListStore {
    pub list: BookListState,
}

pub enum ListAction {
    SearchInput(String),
    CommitSearch(String),
    SubmitSearch,
    SetPage(u32),
    SetPageSize(u32),
    FetchDone {
        seq: u64,
        result: Result<BookPage, FetchError>,
    },
    Removed(BookId),
}

impl Reducible for BookListStore {
    type Action = ListAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut list = self.list.clone();
        match action {
            ListAction::SearchInput(input) => list.set_search_input(input),
            ListAction::CommitSearch(query) => {
                list.commit_search(query);
            }
            ListAction::SubmitSearch => {
                list.submit_search();
            }
            ListAction::SetPage(page) => {
                list.set_page(page);
            }
            ListAction::SetPageSize(size) => {
                list.set_page_size(size);
            }
            ListAction::FetchDone { seq, result } => {
                if list.apply_fetch(seq, result) == FetchOutcome::Stale {
                    Logger::debug_with_component(COMPONENT, &format!("dropped stale response #{}", seq));
                }
            }
            ListAction::Removed(id) => {
                list.remove_book(id);
            }
        }
        Rc::new(Self { list })
    }
}

#[derive(Clone, PartialEq)]
pub struct UseBookListActions {
    pub on_search_input: Callback<String>,
    pub on_search_submit: Callback<()>,
    pub on_page_change: Callback<u32>,
    pub on_page_size_change: Callback<u32>,
    pub on_delete: Callback<BookId>,
}

pub struct UseBookListResult {
    pub state: BookListState,
    pub actions: UseBookListActions,
}

#[hook]
pub fn use_book_list(api_client: &ApiClient, notifier: &Notifier) -> UseBookListResult {
    let store = use_reducer(BookListStore::default);
    let debouncer = use_mut_ref(SearchDebouncer::new);
    let search_timer = use_mut_ref(|| Option::<Timeout>::None);

    // Fetch whenever the state issues a new ticket
    {
        let ticket = store.list.latest_ticket().clone();
        let api_client = api_client.clone();
        let dispatcher = store.dispatcher();

        use_effect_with(ticket.seq, move |_| {
            spawn_local(async move {
                let result = load_books(&api_client, &ticket).await;
                dispatcher.dispatch(ListAction::FetchDone { seq: ticket.seq, result });
            });
            || ()
        });
    }

    // One notification per failed fetch; the table keeps its last good page
    {
        let notifier = notifier.clone();
        let last_error = store.list.last_error().cloned();

        use_effect_with(store.list.failure_count(), move |failures| {
            if *failures > 0 {
                if let Some(err) = last_error {
                    notifier.error(None, format!("Failed to load books: {}", err));
                }
            }
            || ()
        });
    }

    // Pending search timers must not outlive the view
    {
        let debouncer = debouncer.clone();
        let search_timer = search_timer.clone();

        use_effect_with((), move |_| {
            move || {
                debouncer.borrow_mut().cancel();
                search_timer.borrow_mut().take();
            }
        });
    }

    let on_search_input = {
        let dispatcher = store.dispatcher();
        let debouncer = debouncer.clone();
        let search_timer = search_timer.clone();

        use_callback((), move |input: String, _| {
            dispatcher.dispatch(ListAction::SearchInput(input.clone()));

            let generation = debouncer.borrow_mut().schedule(input);
            let debouncer = debouncer.clone();
            let dispatcher = dispatcher.clone();
            let timer = Timeout::new(SEARCH_DEBOUNCE_MS, move || {
                let fired = debouncer.borrow_mut().fire(generation);
                if let Some(query) = fired {
                    dispatcher.dispatch(ListAction::CommitSearch(query));
                }
            });
            // replacing the handle cancels the previous timer
            *search_timer.borrow_mut() = Some(timer);
        })
    };

    let on_search_submit = {
        let dispatcher = store.dispatcher();
        let debouncer = debouncer.clone();
        let search_timer = search_timer.clone();

        use_callback((), move |_, _| {
            debouncer.borrow_mut().flush();
            search_timer.borrow_mut().take();
            dispatcher.dispatch(ListAction::SubmitSearch);
        })
    };

    let on_page_change = {
        let dispatcher = store.dispatcher();
        use_callback((), move |page: u32, _| {
            dispatcher.dispatch(ListAction::SetPage(page));
        })
    };

    let on_page_size_change = {
        let dispatcher = store.dispatcher();
        use_callback((), move |size: u32, _| {
            dispatcher.dispatch(ListAction::SetPageSize(size));
        })
    };

    let on_delete = {
        let api_client = api_client.clone();
        let notifier = notifier.clone();
        let dispatcher = store.dispatcher();

        use_callback((), move |id: BookId, _| {
            if !gloo::dialogs::confirm("Are you sure you want to delete this book?") {
                return;
            }

            let api_client = api_client.clone();
            let notifier = notifier.clone();
            let dispatcher = dispatcher.clone();
            let toast = notifier.loading("Deleting...");

            spawn_local(async move {
                match api_client.delete_book(id).await {
                    Ok(()) => {
                        Logger::info_with_component(COMPONENT, &format!("deleted book {}", id));
                        dispatcher.dispatch(ListAction::Removed(id));
                        notifier.success(Some(toast), "Book deleted.");
                    }
                    Err(e) => {
                        notifier.error(Some(toast), format!("Delete failed: {}", e));
                    }
                }
            });
        })
    };

    let state = store.list.clone();

    let actions = UseBookListActions {
        on_search_input,
        on_search_submit,
        on_page_change,
        on_page_size_change,
        on_delete,
    };

    UseBookListResult { state, actions }
}
