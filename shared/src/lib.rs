//! Types and client-side logic shared by the bookstore admin frontend.
//!
//! Nothing in this crate touches the browser, so all of it runs and is
//! tested natively.

pub mod api;
pub mod book_list;
pub mod config;
pub mod debounce;
pub mod error;
pub mod form;
pub mod models;
pub mod pagination;
pub mod routes;

#[cfg(test)]
mod testing;

pub use api::{BookApi, Endpoints, ListQuery};
pub use book_list::{
    load_books, BookListState, FetchOutcome, FetchTicket, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS,
};
pub use config::AppConfig;
pub use debounce::{SearchDebouncer, SEARCH_DEBOUNCE_MS};
pub use error::{ConfigError, FetchError, ListQueryError, ValidationError};
pub use form::{BookField, BookFormState, BookFormValues, FieldErrors, SubmitBlocked};
pub use models::{
    Book, BookDetail, BookId, BookInput, BookPage, BookResponse, ItemDetail, ItemEnvelope,
    ListEnvelope,
};
pub use pagination::{total_pages, PageWindow, DEFAULT_GROUP_SIZE};
pub use routes::Route;
