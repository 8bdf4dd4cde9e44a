//! # Book Form Engine
//!
//! Holds the raw text of every book form field, validates it against the
//! book schema, and produces a [`BookInput`] on submit.
//!
//! ## Schema
//!
//! | Field                  | Rule                                |
//! |------------------------|-------------------------------------|
//! | `title`                | required                            |
//! | `author`               | required                            |
//! | `detail.publisher`     | required                            |
//! | `detail.publishedDate` | required, valid `YYYY-MM-DD`        |
//! | `detail.description`   | optional                            |
//! | `detail.sellCount`     | whole number, 0 or greater          |
//! | `detail.stockCount`    | whole number, 0 or greater          |
//!
//! Validation runs on the first submit attempt. After that, each edit
//! re-validates the field it touched so errors clear as they are fixed.
//! The quantity steppers always re-validate the counts they change.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::ValidationError;
use crate::models::{calendar_date, Book, BookDetail, BookInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BookField {
    Title,
    Author,
    Publisher,
    PublishedDate,
    Description,
    SellCount,
    StockCount,
}

impl BookField {
    pub const ALL: [BookField; 7] = [
        BookField::Title,
        BookField::Author,
        BookField::Publisher,
        BookField::PublishedDate,
        BookField::Description,
        BookField::SellCount,
        BookField::StockCount,
    ];

    /// Wire path of the field, also used as the input element name
    pub fn key(&self) -> &'static str {
        match self {
            BookField::Title => "title",
            BookField::Author => "author",
            BookField::Publisher => "detail.publisher",
            BookField::PublishedDate => "detail.publishedDate",
            BookField::Description => "detail.description",
            BookField::SellCount => "detail.sellCount",
            BookField::StockCount => "detail.stockCount",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BookField::Title => "Title",
            BookField::Author => "Author",
            BookField::Publisher => "Publisher",
            BookField::PublishedDate => "Published date",
            BookField::Description => "Description",
            BookField::SellCount => "Sold",
            BookField::StockCount => "In stock",
        }
    }
}

pub type FieldErrors = BTreeMap<BookField, ValidationError>;

/// Why a submit did not go through
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitBlocked {
    InFlight,
    Invalid(FieldErrors),
}

/// Raw field text, exactly as typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookFormValues {
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub published_date: String,
    pub description: String,
    pub sell_count: String,
    pub stock_count: String,
}

impl Default for BookFormValues {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            publisher: String::new(),
            published_date: String::new(),
            description: String::new(),
            sell_count: "0".to_string(),
            stock_count: "0".to_string(),
        }
    }
}

impl From<&Book> for BookFormValues {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            publisher: book.detail.publisher.clone(),
            published_date: book
                .detail
                .published_date
                .as_ref()
                .map(calendar_date::format)
                .unwrap_or_default(),
            description: book.detail.description.clone().unwrap_or_default(),
            sell_count: book.detail.sell_count.to_string(),
            stock_count: book.detail.stock_count.to_string(),
        }
    }
}

impl BookFormValues {
    pub fn get(&self, field: BookField) -> &str {
        match field {
            BookField::Title => &self.title,
            BookField::Author => &self.author,
            BookField::Publisher => &self.publisher,
            BookField::PublishedDate => &self.published_date,
            BookField::Description => &self.description,
            BookField::SellCount => &self.sell_count,
            BookField::StockCount => &self.stock_count,
        }
    }

    fn slot(&mut self, field: BookField) -> &mut String {
        match field {
            BookField::Title => &mut self.title,
            BookField::Author => &mut self.author,
            BookField::Publisher => &mut self.publisher,
            BookField::PublishedDate => &mut self.published_date,
            BookField::Description => &mut self.description,
            BookField::SellCount => &mut self.sell_count,
            BookField::StockCount => &mut self.stock_count,
        }
    }

    pub fn validate_field(&self, field: BookField) -> Result<(), ValidationError> {
        let raw = self.get(field);
        match field {
            BookField::Title | BookField::Author | BookField::Publisher => {
                required(raw).map(|_| ())
            }
            BookField::PublishedDate => parse_date(raw).map(|_| ()),
            BookField::Description => Ok(()),
            BookField::SellCount | BookField::StockCount => parse_count(raw).map(|_| ()),
        }
    }

    /// Validate every field, producing the request body when all pass
    pub fn validate(&self) -> Result<BookInput, FieldErrors> {
        let errors: FieldErrors = BookField::ALL
            .iter()
            .filter_map(|field| self.validate_field(*field).err().map(|err| (*field, err)))
            .collect();
        if !errors.is_empty() {
            return Err(errors);
        }

        let sell_count = parse_count(&self.sell_count).map_err(|e| single(BookField::SellCount, e))?;
        let stock_count = parse_count(&self.stock_count).map_err(|e| single(BookField::StockCount, e))?;
        let published_date =
            parse_date(&self.published_date).map_err(|e| single(BookField::PublishedDate, e))?;
        let description = self.description.trim();

        Ok(BookInput {
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            detail: BookDetail {
                publisher: self.publisher.trim().to_string(),
                published_date: Some(published_date),
                description: (!description.is_empty()).then(|| description.to_string()),
                sell_count,
                stock_count,
            },
        })
    }
}

fn single(field: BookField, err: ValidationError) -> FieldErrors {
    FieldErrors::from([(field, err)])
}

fn required(raw: &str) -> Result<&str, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(ValidationError::Required)
    } else {
        Ok(trimmed)
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    let raw = required(raw)?;
    NaiveDate::parse_from_str(raw, calendar_date::FORMAT).map_err(|_| ValidationError::InvalidDate)
}

fn parse_count(raw: &str) -> Result<u32, ValidationError> {
    let value: i64 = raw.trim().parse().map_err(|_| ValidationError::NotANumber)?;
    if value < 0 {
        return Err(ValidationError::Negative);
    }
    u32::try_from(value).map_err(|_| ValidationError::NotANumber)
}

/// Apply `delta` to a count field, treating unreadable text as 0 and
/// clamping the result at 0.
fn step_count(raw: &str, delta: i64) -> u32 {
    let current: i64 = raw.trim().parse().unwrap_or(0);
    let next = current.saturating_add(delta).clamp(0, i64::from(u32::MAX));
    u32::try_from(next).unwrap_or(0)
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookFormState {
    values: BookFormValues,
    errors: FieldErrors,
    submitting: bool,
    submit_attempted: bool,
}

impl BookFormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Form pre-filled from an existing record
    pub fn from_book(book: &Book) -> Self {
        Self {
            values: BookFormValues::from(book),
            ..Self::default()
        }
    }

    /// Replace every field with `book`'s values and clear errors
    pub fn load(&mut self, book: &Book) {
        *self = Self::from_book(book);
    }

    pub fn values(&self) -> &BookFormValues {
        &self.values
    }

    pub fn value(&self, field: BookField) -> &str {
        self.values.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: BookField) -> Option<ValidationError> {
        self.errors.get(&field).copied()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Submit is disabled while a field is invalid or a save is in flight
    pub fn can_submit(&self) -> bool {
        !self.submitting && self.errors.is_empty()
    }

    pub fn set_value(&mut self, field: BookField, value: impl Into<String>) {
        *self.values.slot(field) = value.into();
        if self.submit_attempted {
            self.revalidate(field);
        }
    }

    fn revalidate(&mut self, field: BookField) {
        match self.values.validate_field(field) {
            Ok(()) => {
                self.errors.remove(&field);
            }
            Err(err) => {
                self.errors.insert(field, err);
            }
        }
    }

    fn write_count(&mut self, field: BookField, value: u32) {
        *self.values.slot(field) = value.to_string();
        self.revalidate(field);
    }

    /// One unit sold: sold +1, stock -1, both clamped at 0
    pub fn increase_sell_count(&mut self) {
        let sold = step_count(&self.values.sell_count, 1);
        let stock = step_count(&self.values.stock_count, -1);
        self.write_count(BookField::SellCount, sold);
        self.write_count(BookField::StockCount, stock);
    }

    pub fn increase_stock_count(&mut self) {
        let stock = step_count(&self.values.stock_count, 1);
        self.write_count(BookField::StockCount, stock);
    }

    pub fn decrease_stock_count(&mut self) {
        let stock = step_count(&self.values.stock_count, -1);
        self.write_count(BookField::StockCount, stock);
    }

    /// Validate everything and, if it passes, mark the form as in flight.
    ///
    /// The caller persists the returned input and then calls
    /// [`BookFormState::finish_submit`].
    pub fn begin_submit(&mut self) -> Result<BookInput, SubmitBlocked> {
        if self.submitting {
            return Err(SubmitBlocked::InFlight);
        }
        self.submit_attempted = true;

        match self.values.validate() {
            Ok(input) => {
                // counts in BookInput are u32, so they are >= 0 by construction
                self.errors.clear();
                self.submitting = true;
                debug!(title = %input.title, "book form submitted");
                Ok(input)
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(SubmitBlocked::Invalid(errors))
            }
        }
    }

    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }
}
