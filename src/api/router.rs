//! In-process REST router over the todo store.
//!
//! Speaks the todo service's wire contract with real `http` types and JSON
//! bodies, but without a socket: any transport can sit in front of
//! [`Router::handle`]. The rendering core consumes this as a collaborator,
//! never the other way around.
//!
//! # Routes
//!
//! | Route | Success | Failures |
//! |-------|---------|----------|
//! | `GET /lists` | 200 summaries | - |
//! | `POST /lists {name}` | 201 list | 400 missing name |
//! | `GET /lists/:id` | 200 list | 404 |
//! | `POST /lists/:id/items {text}` | 201 item | 404, 400 missing text |
//! | `POST /lists/:id/items/:itemId {text, status}` | 200 item | 404, 400, 500 |
//!
//! The update route keeps the original service's seam: an item id beyond
//! `items.len()` is 404, but an id inside that range with no matching item
//! fails the update itself and answers 500 "Unable to update item".

use http::{Method, StatusCode};
use serde_json::{json, Value};
use tracing::debug;

use crate::todo::{ItemStatus, Store};

use super::error::ApiError;
use super::wire::{ListSummary, NewItem, NewList, UpdateItem};

// =============================================================================
// Request / Response
// =============================================================================

/// A transport-agnostic request: method, path, optional JSON body.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
            body: Some(body),
        }
    }
}

/// Status plus JSON body. Error bodies are always `{"error": message}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl ApiResponse {
    fn ok(body: Value) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }

    fn created(body: Value) -> Self {
        Self {
            status: StatusCode::CREATED,
            body,
        }
    }
}

impl From<ApiError> for ApiResponse {
    fn from(err: ApiError) -> Self {
        Self {
            status: err.status(),
            body: err.body(),
        }
    }
}

// =============================================================================
// Router
// =============================================================================

/// Dispatches requests against an owned [`Store`].
#[derive(Debug, Default)]
pub struct Router {
    store: Store,
}

impl Router {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Handle one request. Never fails; every error class maps to a
    /// status code and a flat error body.
    pub fn handle(&mut self, req: &ApiRequest) -> ApiResponse {
        debug!(method = %req.method, path = %req.path, "api request");
        match self.dispatch(req) {
            Ok(response) => response,
            Err(err) => err.into(),
        }
    }

    fn dispatch(&mut self, req: &ApiRequest) -> Result<ApiResponse, ApiError> {
        let segments: Vec<&str> = req.path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            ["lists"] if req.method == Method::GET => self.get_lists(),
            ["lists"] if req.method == Method::POST => self.create_list(req),
            ["lists", id] if req.method == Method::GET => self.get_list(parse_id(id)?),
            ["lists", id, "items"] if req.method == Method::POST => {
                self.add_item(parse_id(id)?, req)
            }
            ["lists", id, "items", item_id] if req.method == Method::POST => {
                self.update_item(parse_id(id)?, parse_id(item_id)? as u32, req)
            }
            _ => Err(ApiError::NotFound),
        }
    }

    fn get_lists(&self) -> Result<ApiResponse, ApiError> {
        let summaries: Vec<ListSummary> = self
            .store
            .lists()
            .iter()
            .map(|l| ListSummary {
                id: l.id,
                name: l.name.clone(),
            })
            .collect();
        Ok(ApiResponse::ok(json!(summaries)))
    }

    fn create_list(&mut self, req: &ApiRequest) -> Result<ApiResponse, ApiError> {
        let body: NewList = read_body(req);
        if body.name.is_empty() {
            return Err(ApiError::Validation("'name' is required".into()));
        }
        let list = self.store.create_list(body.name);
        Ok(ApiResponse::created(json!(list)))
    }

    fn get_list(&self, id: usize) -> Result<ApiResponse, ApiError> {
        let list = self.store.get(id).ok_or(ApiError::NotFound)?;
        Ok(ApiResponse::ok(json!(list)))
    }

    fn add_item(&mut self, list_id: usize, req: &ApiRequest) -> Result<ApiResponse, ApiError> {
        let list = self.store.get_mut(list_id).ok_or(ApiError::NotFound)?;
        let body: NewItem = read_body(req);
        if body.text.is_empty() {
            return Err(ApiError::Validation("'text' is required".into()));
        }
        let item = list.add_item(body.text);
        Ok(ApiResponse::created(json!(item)))
    }

    fn update_item(
        &mut self,
        list_id: usize,
        item_id: u32,
        req: &ApiRequest,
    ) -> Result<ApiResponse, ApiError> {
        let list = self.store.get_mut(list_id).ok_or(ApiError::NotFound)?;
        if item_id as usize > list.items.len() {
            return Err(ApiError::NotFound);
        }

        let body: UpdateItem = read_body(req);
        if body.text.is_empty() {
            return Err(ApiError::Validation("'text' is required".into()));
        }
        let status = body
            .status
            .as_deref()
            .and_then(ItemStatus::parse)
            .ok_or_else(|| {
                ApiError::Validation(
                    "'status' must be INCOMPLETE, INPROGRESS, or COMPLETE".into(),
                )
            })?;

        match list.update_item(item_id, body.text, status) {
            Some(item) => Ok(ApiResponse::ok(json!(item))),
            None => Err(ApiError::Internal("Unable to update item".into())),
        }
    }
}

/// Parse a path segment as an id. Non-numeric segments address nothing.
fn parse_id(segment: &str) -> Result<usize, ApiError> {
    segment.parse().map_err(|_| ApiError::NotFound)
}

/// Deserialize a request body leniently: absent body or absent fields
/// become defaults, and the per-field validation above produces the 400s.
fn read_body<T: serde::de::DeserializeOwned + Default>(req: &ApiRequest) -> T {
    req.body
        .clone()
        .and_then(|body| serde_json::from_value(body).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_route_is_404() {
        let mut router = Router::new(Store::new());
        let res = router.handle(&ApiRequest::get("/nothing/here"));
        assert_eq!(res.status, StatusCode::NOT_FOUND);
        assert_eq!(res.body, json!({"error": "Requested item not found"}));
    }

    #[test]
    fn test_non_numeric_id_is_404() {
        let mut router = Router::new(Store::seed_demo());
        let res = router.handle(&ApiRequest::get("/lists/grocery"));
        assert_eq!(res.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_get_lists_returns_summaries() {
        let mut router = Router::new(Store::seed_demo());
        let res = router.handle(&ApiRequest::get("/lists"));

        assert_eq!(res.status, StatusCode::OK);
        assert_eq!(
            res.body,
            json!([
                {"id": 0, "name": "Grocery List"},
                {"id": 1, "name": "Weekend Chores"},
            ])
        );
    }

    #[test]
    fn test_method_mismatch_is_404() {
        let mut router = Router::new(Store::seed_demo());
        // POST to a GET-only route shape.
        let res = router.handle(&ApiRequest::post("/lists/0", json!({})));
        assert_eq!(res.status, StatusCode::NOT_FOUND);
    }
}
