//! # Book API contract
//!
//! The narrow capability the views need from the remote book service
//! (list/get/create/update/delete), plus the request-shaping helpers every
//! implementation shares. Views only talk to [`BookApi`], so the browser
//! client can be swapped for an in-memory fake in tests.
//!
//! Wire contract:
//!
//! | Operation | Request                                   | Response                          |
//! |-----------|-------------------------------------------|-----------------------------------|
//! | list      | `GET /books?limit=&offset=&title=&author=` | `{ detail: { total, items } }`    |
//! | get       | `GET /books/{id}`                         | `{ detail: { item } }`            |
//! | create    | `POST /books/` with [`BookInput`]         | created book                      |
//! | update    | `PUT /books/{id}` with [`BookInput`]      | updated book                      |
//! | delete    | `DELETE /books/{id}`                      | ignored                           |

use async_trait::async_trait;

use crate::config::AppConfig;
use crate::error::{FetchError, ListQueryError};
use crate::models::{Book, BookId, BookInput, BookPage};

/// Remote book storage. No implementation retries on its own.
#[async_trait(?Send)]
pub trait BookApi {
    /// Fetch one page of books, optionally filtered by title/author text
    async fn list_books(&self, query: &ListQuery) -> Result<BookPage, FetchError>;

    /// Fetch a single book; a non-success status (including 404) is an error
    async fn get_book(&self, id: BookId) -> Result<Book, FetchError>;

    /// Create a book and return the server's representation with its new id
    async fn create_book(&self, input: &BookInput) -> Result<Book, FetchError>;

    /// Replace every field of an existing book
    async fn update_book(&self, id: BookId, input: &BookInput) -> Result<Book, FetchError>;

    async fn delete_book(&self, id: BookId) -> Result<(), FetchError>;
}

/// Parameters of a list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    page: u32,
    page_size: u32,
    title: Option<String>,
    author: Option<String>,
}

impl ListQuery {
    pub fn new(page: u32, page_size: u32) -> Result<Self, ListQueryError> {
        if page < 1 {
            return Err(ListQueryError::InvalidPage);
        }
        if page_size < 1 {
            return Err(ListQueryError::InvalidPageSize);
        }
        Ok(Self {
            page,
            page_size,
            title: None,
            author: None,
        })
    }

    /// Like [`ListQuery::new`] but raises out-of-range values to 1
    pub fn clamped(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
            title: None,
            author: None,
        }
    }

    /// Blank filters impose no constraint and are dropped.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = non_blank(title.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = non_blank(author.into());
        self
    }

    /// Same text matched against both title and author
    pub fn with_search(self, text: &str) -> Self {
        self.with_title(text).with_author(text)
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size)
    }

    /// Query-string pairs in wire order: limit, offset, then present filters
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("limit", self.page_size.to_string()),
            ("offset", self.offset().to_string()),
        ];
        if let Some(title) = &self.title {
            pairs.push(("title", title.clone()));
        }
        if let Some(author) = &self.author {
            pairs.push(("author", author.clone()));
        }
        pairs
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// URL builder for the book endpoints under a configured base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base: config.api_base().to_string(),
        }
    }

    pub fn books(&self) -> String {
        format!("{}/books", self.base)
    }

    /// POST target; the service routes creation with a trailing slash
    pub fn create_book(&self) -> String {
        format!("{}/books/", self.base)
    }

    pub fn book(&self, id: BookId) -> String {
        format!("{}/books/{}", self.base, id)
    }
}
