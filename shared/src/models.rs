use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned book identity
pub type BookId = i64;

/// A catalog record. The server is the source of truth; anything the UI
/// holds is a display copy.
///
/// Missing or null fields read as their defaults (empty text, 0, no date).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub detail: BookDetail,
}

/// Publisher/date/quantity attributes owned by a single book
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDetail {
    #[serde(default, deserialize_with = "null_as_default")]
    pub publisher: String,
    /// Calendar date only, sent as YYYY-MM-DD. `None` when the server has none.
    #[serde(default, with = "calendar_date::optional")]
    pub published_date: Option<NaiveDate>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sell_count: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stock_count: u32,
}

/// Read `null` the same as an absent field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of create (POST) and update (PUT) requests: every field but `id`.
///
/// All fields are always serialised so an update replaces the whole record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookInput {
    pub title: String,
    pub author: String,
    pub detail: BookDetail,
}

impl From<&Book> for BookInput {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            detail: book.detail.clone(),
        }
    }
}

impl BookInput {
    pub fn into_book(self, id: BookId) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            detail: self.detail,
        }
    }
}

/// One page of list results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookPage {
    pub total: u64,
    pub items: Vec<Book>,
}

/// `GET /books` response: `{ "error": ..., "detail": { "total", "items" } }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListEnvelope {
    #[serde(default)]
    pub error: Option<String>,
    pub detail: BookPage,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDetail {
    #[serde(default)]
    pub message: Option<String>,
    pub item: Book,
}

/// `GET /books/{id}` response: `{ "error": ..., "detail": { "item": Book } }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemEnvelope {
    #[serde(default)]
    pub error: Option<String>,
    pub detail: ItemDetail,
}

/// Create/update responses come back either wrapped like a fetch or bare.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum BookResponse {
    Wrapped(ItemEnvelope),
    Bare(Book),
}

impl BookResponse {
    pub fn into_book(self) -> Book {
        match self {
            BookResponse::Wrapped(envelope) => envelope.detail.item,
            BookResponse::Bare(book) => book,
        }
    }
}

/// Serde adapter for calendar dates.
///
/// Writes `YYYY-MM-DD`. Reads `YYYY-MM-DD`, or a timestamp whose first ten
/// characters are the date (`2024-01-15T00:00:00`, `2024-01-15T00:00:00Z`,
/// `2024-01-15 00:00:00`). The date part is kept as written; no time-zone
/// conversion happens, so the day never shifts.
pub mod calendar_date {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid calendar date: {raw:?}")))
    }

    pub fn parse(raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();
        if let Ok(date) = NaiveDate::parse_from_str(raw, FORMAT) {
            return Some(date);
        }
        let (date_part, rest) = (raw.get(..10)?, raw.get(10..)?);
        if rest.starts_with('T') || rest.starts_with(' ') {
            NaiveDate::parse_from_str(date_part, FORMAT).ok()
        } else {
            None
        }
    }

    pub fn format(date: &NaiveDate) -> String {
        date.format(FORMAT).to_string()
    }

    /// Same wire format for an optional date. `None` is written as null;
    /// null, blank or unreadable input reads as `None`.
    pub mod optional {
        use chrono::NaiveDate;
        use serde::{Deserialize, Deserializer, Serializer};
        use tracing::warn;

        pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match date {
                Some(date) => super::serialize(date, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
        where
            D: Deserializer<'de>,
        {
            let raw = Option::<String>::deserialize(deserializer)?;
            Ok(raw.and_then(|raw| {
                if raw.trim().is_empty() {
                    return None;
                }
                let parsed = super::parse(&raw);
                if parsed.is_none() {
                    warn!(raw = %raw, "ignoring unreadable published date");
                }
                parsed
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_book() -> Book {
        Book {
            id: 7,
            title: "The Rust Programming Language".to_string(),
            author: "Steve Klabnik".to_string(),
            detail: BookDetail {
                publisher: "No Starch Press".to_string(),
                published_date: NaiveDate::from_ymd_opt(2024, 1, 15),
                description: None,
                sell_count: 3,
                stock_count: 12,
            },
        }
    }

    #[test]
    fn test_published_date_is_sent_as_calendar_date() {
        let input = BookInput::from(&sample_book());
        let body = serde_json::to_value(&input).unwrap();

        assert_eq!(body["detail"]["publishedDate"], json!("2024-01-15"));
        assert_eq!(body["detail"]["sellCount"], json!(3));
        assert_eq!(body["detail"]["stockCount"], json!(12));
        // full replace: absent description is sent as an explicit null
        assert_eq!(body["detail"]["description"], json!(null));
        assert!(body.get("id").is_none());
    }

    #[test]
    fn test_published_date_survives_round_trip() {
        let book = sample_book();
        let text = serde_json::to_string(&book).unwrap();
        let back: Book = serde_json::from_str(&text).unwrap();
        assert_eq!(back.detail.published_date, book.detail.published_date);
        assert!(back.detail.published_date.is_some());
    }

    #[test]
    fn test_timestamp_dates_keep_their_calendar_day() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        for raw in [
            "2024-01-15",
            "2024-01-15T00:00:00",
            "2024-01-15T23:30:00-08:00",
            "2024-01-15T00:00:00.000Z",
            "2024-01-15 00:00:00",
        ] {
            assert_eq!(calendar_date::parse(raw), Some(expected), "{raw}");
        }
        assert_eq!(calendar_date::parse("2024-13-01"), None);
        assert_eq!(calendar_date::parse("2024-01-15X"), None);
        assert_eq!(calendar_date::parse(""), None);
    }

    #[test]
    fn test_list_envelope_decodes() {
        let body = json!({
            "error": "success",
            "detail": {
                "total": 1,
                "items": [{
                    "id": 1,
                    "title": "Dune",
                    "author": "Frank Herbert",
                    "detail": {
                        "publisher": "Chilton",
                        "publishedDate": "1965-08-01",
                        "description": "Spice",
                        "sellCount": 0,
                        "stockCount": 4
                    }
                }]
            }
        });

        let envelope: ListEnvelope = serde_json::from_value(body).unwrap();
        assert_eq!(envelope.detail.total, 1);
        assert_eq!(envelope.detail.items[0].detail.description.as_deref(), Some("Spice"));
    }

    #[test]
    fn test_book_response_accepts_bare_and_wrapped() {
        let book = sample_book();
        let bare = serde_json::to_value(&book).unwrap();
        let wrapped = json!({ "error": "success", "detail": { "message": "created", "item": bare.clone() } });

        let from_bare: BookResponse = serde_json::from_value(bare).unwrap();
        let from_wrapped: BookResponse = serde_json::from_value(wrapped).unwrap();
        assert_eq!(from_bare.into_book(), book);
        assert_eq!(from_wrapped.into_book(), book);
    }

    #[test]
    fn test_incomplete_records_load_with_defaults() {
        let body = json!({
            "detail": {
                "item": {
                    "id": 3,
                    "title": "Dune",
                    "author": null,
                    "detail": { "publisher": "p", "publishedDate": "1965-08-01" }
                }
            }
        });
        let book = serde_json::from_value::<ItemEnvelope>(body).unwrap().detail.item;

        assert_eq!(book.author, "");
        assert_eq!(book.detail.sell_count, 0);
        assert_eq!(book.detail.stock_count, 0);
        assert_eq!(book.detail.published_date, NaiveDate::from_ymd_opt(1965, 8, 1));
    }

    #[test]
    fn test_missing_detail_does_not_lose_the_page() {
        let body = json!({
            "detail": {
                "total": 3,
                "items": [
                    { "id": 1, "title": "A", "author": "x", "detail": null },
                    { "id": 2, "title": "B", "author": "y" },
                    { "id": 3, "title": "C", "author": "z",
                      "detail": { "publishedDate": "", "sellCount": null } }
                ]
            }
        });

        let envelope: ListEnvelope = serde_json::from_value(body).unwrap();
        assert_eq!(envelope.detail.items.len(), 3);
        for book in &envelope.detail.items {
            assert_eq!(book.detail, BookDetail::default());
        }
    }

    #[test]
    fn test_missing_date_is_sent_as_null() {
        let mut input = BookInput::from(&sample_book());
        input.detail.published_date = None;
        let body = serde_json::to_value(&input).unwrap();
        assert_eq!(body["detail"]["publishedDate"], json!(null));
    }

    #[test]
    fn test_negative_counts_are_rejected_on_read() {
        let body = json!({
            "publisher": "p",
            "publishedDate": "2024-01-15",
            "sellCount": -1,
            "stockCount": 0
        });
        assert!(serde_json::from_value::<BookDetail>(body).is_err());
    }
}
