use async_trait::async_trait;
use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{
    AppConfig, Book, BookApi, BookId, BookInput, BookPage, BookResponse, Endpoints, FetchError,
    ItemEnvelope, ListEnvelope, ListQuery,
};

use crate::services::logging::Logger;

const COMPONENT: &str = "api-client";

/// Browser client for the remote book service
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    endpoints: Endpoints,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            endpoints: Endpoints::new(config),
        }
    }
}

fn network_error(e: gloo::net::Error) -> FetchError {
    FetchError::Network(e.to_string())
}

/// Fail on a non-success status, keeping the body text as the message
async fn ensure_success(response: Response) -> Result<Response, FetchError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = if body.trim().is_empty() {
        response.status_text()
    } else {
        body
    };
    Err(FetchError::Status { status, message })
}

/// Parse the body as `T` whatever the status was
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, FetchError> {
    let status = response.status();
    let text = response.text().await.map_err(|e| FetchError::Decode {
        status,
        message: e.to_string(),
    })?;
    serde_json::from_str(&text).map_err(|e| FetchError::Decode {
        status,
        message: e.to_string(),
    })
}

fn log_failure<T>(operation: &str, result: Result<T, FetchError>) -> Result<T, FetchError> {
    if let Err(e) = &result {
        Logger::error_with_component(COMPONENT, &format!("{} failed: {}", operation, e));
    }
    result
}

#[async_trait(?Send)]
impl BookApi for ApiClient {
    async fn list_books(&self, query: &ListQuery) -> Result<BookPage, FetchError> {
        Logger::debug_with_component(
            COMPONENT,
            &format!("GET /books page={} size={}", query.page(), query.page_size()),
        );

        let result = async {
            let response = Request::get(&self.endpoints.books())
                .query(query.query_pairs())
                .send()
                .await
                .map_err(network_error)?;
            let envelope: ListEnvelope = read_json(ensure_success(response).await?).await?;
            Ok::<_, FetchError>(envelope.detail)
        }
        .await;

        log_failure("list books", result)
    }

    async fn get_book(&self, id: BookId) -> Result<Book, FetchError> {
        Logger::debug_with_component(COMPONENT, &format!("GET /books/{}", id));

        let result = async {
            let response = Request::get(&self.endpoints.book(id))
                .send()
                .await
                .map_err(network_error)?;
            let envelope: ItemEnvelope = read_json(ensure_success(response).await?).await?;
            Ok::<_, FetchError>(envelope.detail.item)
        }
        .await;

        log_failure("get book", result)
    }

    async fn create_book(&self, input: &BookInput) -> Result<Book, FetchError> {
        Logger::debug_with_component(COMPONENT, &format!("POST /books/ title={:?}", input.title));

        let result = async {
            let response = Request::post(&self.endpoints.create_book())
                .json(input)
                .map_err(|e| FetchError::Encode(e.to_string()))?
                .send()
                .await
                .map_err(network_error)?;
            if !response.ok() {
                Logger::warn_with_component(
                    COMPONENT,
                    &format!("create returned status {}", response.status()),
                );
            }
            let created: BookResponse = read_json(response).await?;
            Ok::<_, FetchError>(created.into_book())
        }
        .await;

        log_failure("create book", result)
    }

    async fn update_book(&self, id: BookId, input: &BookInput) -> Result<Book, FetchError> {
        Logger::debug_with_component(COMPONENT, &format!("PUT /books/{}", id));

        let result = async {
            let response = Request::put(&self.endpoints.book(id))
                .json(input)
                .map_err(|e| FetchError::Encode(e.to_string()))?
                .send()
                .await
                .map_err(network_error)?;
            if !response.ok() {
                Logger::warn_with_component(
                    COMPONENT,
                    &format!("update of {} returned status {}", id, response.status()),
                );
            }
            let updated: BookResponse = read_json(response).await?;
            Ok::<_, FetchError>(updated.into_book())
        }
        .await;

        log_failure("update book", result)
    }

    async fn delete_book(&self, id: BookId) -> Result<(), FetchError> {
        Logger::debug_with_component(COMPONENT, &format!("DELETE /books/{}", id));

        let result = async {
            let response = Request::delete(&self.endpoints.book(id))
                .send()
                .await
                .map_err(network_error)?;
            ensure_success(response).await.map(|_| ())
        }
        .await;

        log_failure("delete book", result)
    }
}
