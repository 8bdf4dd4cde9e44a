//! Client-side routes and the direct-navigation guard.

use crate::models::BookId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    List,
    New,
    Detail(BookId),
    Edit(BookId),
    NotFound,
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] | ["books"] => Route::List,
            ["books", "new"] => Route::New,
            ["books", id] => parse_id(id).map_or(Route::NotFound, Route::Detail),
            ["books", id, "edit"] => parse_id(id).map_or(Route::NotFound, Route::Edit),
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::List | Route::NotFound => "/books".to_string(),
            Route::New => "/books/new".to_string(),
            Route::Detail(id) => format!("/books/{id}"),
            Route::Edit(id) => format!("/books/{id}/edit"),
        }
    }
}

fn parse_id(raw: &str) -> Option<BookId> {
    raw.parse::<BookId>().ok().filter(|id| *id > 0)
}

/// Paths that should only be reached from inside the app
pub fn is_restricted(path: &str) -> bool {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        ["books", "new"] => true,
        ["books", id, "edit" | "delete"] => id.chars().all(|c| c.is_ascii_digit()) && !id.is_empty(),
        _ => false,
    }
}

/// Resolve the route for a page load.
///
/// Opening a create/edit/delete URL directly (no referring page) lands on
/// the list instead. This is a navigation convenience, not access control.
pub fn guard(path: &str, referrer: Option<&str>) -> Route {
    let has_referrer = referrer.is_some_and(|r| !r.trim().is_empty());
    if is_restricted(path) && !has_referrer {
        return Route::List;
    }
    Route::parse(path)
}
