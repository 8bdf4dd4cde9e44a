//! In-memory [`BookApi`] used by the unit tests.

use std::cell::RefCell;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::api::{BookApi, ListQuery};
use crate::error::FetchError;
use crate::models::{Book, BookDetail, BookId, BookInput, BookPage};

pub fn book(id: BookId, title: &str, author: &str) -> Book {
    Book {
        id,
        title: title.to_string(),
        author: author.to_string(),
        detail: BookDetail {
            publisher: "Test Press".to_string(),
            published_date: NaiveDate::from_ymd_opt(2024, 1, 15),
            description: None,
            sell_count: 0,
            stock_count: 5,
        },
    }
}

#[derive(Default)]
pub struct FakeBookApi {
    books: RefCell<Vec<Book>>,
    queries: RefCell<Vec<ListQuery>>,
    next_failure: RefCell<Option<FetchError>>,
}

impl FakeBookApi {
    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Self {
        Self {
            books: RefCell::new(books.into_iter().collect()),
            ..Self::default()
        }
    }

    /// Make the next call fail with `err`
    pub fn fail_next(&self, err: FetchError) {
        *self.next_failure.borrow_mut() = Some(err);
    }

    pub fn recorded_queries(&self) -> Vec<ListQuery> {
        self.queries.borrow().clone()
    }

    pub fn stored(&self, id: BookId) -> Option<Book> {
        self.books.borrow().iter().find(|b| b.id == id).cloned()
    }

    fn check_failure(&self) -> Result<(), FetchError> {
        match self.next_failure.borrow_mut().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn not_found(id: BookId) -> FetchError {
        FetchError::Status {
            status: 404,
            message: format!("Book with ID {id} not found"),
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[async_trait(?Send)]
impl BookApi for FakeBookApi {
    async fn list_books(&self, query: &ListQuery) -> Result<BookPage, FetchError> {
        self.queries.borrow_mut().push(query.clone());
        self.check_failure()?;

        let books = self.books.borrow();
        let matching: Vec<&Book> = books
            .iter()
            .filter(|b| {
                if query.title().is_none() && query.author().is_none() {
                    return true;
                }
                query.title().is_some_and(|t| contains_ignore_case(&b.title, t))
                    || query.author().is_some_and(|a| contains_ignore_case(&b.author, a))
            })
            .collect();

        let offset = usize::try_from(query.offset()).unwrap_or(usize::MAX);
        Ok(BookPage {
            total: matching.len() as u64,
            items: matching
                .into_iter()
                .skip(offset)
                .take(query.page_size() as usize)
                .cloned()
                .collect(),
        })
    }

    async fn get_book(&self, id: BookId) -> Result<Book, FetchError> {
        self.check_failure()?;
        self.stored(id).ok_or_else(|| Self::not_found(id))
    }

    async fn create_book(&self, input: &BookInput) -> Result<Book, FetchError> {
        self.check_failure()?;
        let mut books = self.books.borrow_mut();
        let id = books.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        let created = input.clone().into_book(id);
        books.push(created.clone());
        Ok(created)
    }

    async fn update_book(&self, id: BookId, input: &BookInput) -> Result<Book, FetchError> {
        self.check_failure()?;
        let mut books = self.books.borrow_mut();
        let slot = books.iter_mut().find(|b| b.id == id).ok_or_else(|| Self::not_found(id))?;
        *slot = input.clone().into_book(id);
        Ok(slot.clone())
    }

    async fn delete_book(&self, id: BookId) -> Result<(), FetchError> {
        self.check_failure()?;
        let mut books = self.books.borrow_mut();
        let before = books.len();
        books.retain(|b| b.id != id);
        if books.len() == before {
            return Err(Self::not_found(id));
        }
        Ok(())
    }
}
