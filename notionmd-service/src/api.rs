//! HTTP routing over the document service.
//!
//! [`Api::handle`] maps a transport-neutral [`ApiRequest`] to an
//! [`ApiResponse`], so every route can be exercised without a socket.
//! Routes are served both at the root and under an `/api` prefix:
//!
//! | Method | Path                     | Auth | Success body            |
//! |--------|--------------------------|------|-------------------------|
//! | GET    | `/health`                | no   | `{status}`              |
//! | GET    | `/`                      | no   | service descriptor      |
//! | GET    | `/pages/:pageId`         | yes  | `{markdown, title}`     |
//! | POST   | `/pages/:pageId/append`  | yes  | `{success}`             |
//! | POST   | `/pages`                 | yes  | `{pageId, success}`     |
//!
//! Errors are always `{error}` or `{error, details}` JSON.

use crate::service::DocumentService;
use crate::store::DocumentStore;
use notionmd_babel::PageId;
use serde::Deserialize;
use serde_json::{json, Value};

const DESCRIPTION: &str = "Notion pages to Markdown converter API";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Other,
}

/// An inbound request, already read off the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    /// Raw `Authorization` header value.
    pub authorization: Option<String>,
    pub body: String,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            authorization: None,
            body: String::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            ..Self::new(Method::Post, path)
        }
    }

    pub fn with_authorization(mut self, header: impl Into<String>) -> Self {
        self.authorization = Some(header.into());
        self
    }

    pub fn with_bearer(self, token: &str) -> Self {
        self.with_authorization(format!("Bearer {token}"))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    fn error(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            body: json!({ "error": message.into() }),
        }
    }

    fn failure(message: &str, details: impl ToString) -> Self {
        Self {
            status: 500,
            body: json!({ "error": message, "details": details.to_string() }),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Route<'a> {
    Health,
    Descriptor,
    GetPage(&'a str),
    AppendPage(&'a str),
    CreatePage,
    NotFound,
}

fn route(method: Method, path: &str) -> Route<'_> {
    let path = path.split(|c: char| c == '?' || c == '#').next().unwrap_or_default();
    let path = match path.strip_prefix("/api") {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => path,
    };
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match (method, segments.as_slice()) {
        (Method::Get, []) => Route::Descriptor,
        (Method::Get, ["health"]) => Route::Health,
        (Method::Get, ["pages", id]) => Route::GetPage(*id),
        (Method::Post, ["pages", id, "append"]) => Route::AppendPage(*id),
        (Method::Post, ["pages"]) => Route::CreatePage,
        _ => Route::NotFound,
    }
}

#[derive(Debug, Deserialize)]
struct AppendBody {
    markdown: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateBody {
    title: String,
    markdown: String,
    #[serde(default)]
    parent_id: Option<String>,
}

pub struct Api<S> {
    service: DocumentService<S>,
    api_key: Option<String>,
}

impl<S: DocumentStore> Api<S> {
    /// `api_key` is the bearer token clients must present; without one every
    /// page route answers 500.
    pub fn new(service: DocumentService<S>, api_key: Option<String>) -> Self {
        let api_key = api_key.filter(|key| !key.is_empty());
        Self { service, api_key }
    }

    pub fn service(&self) -> &DocumentService<S> {
        &self.service
    }

    pub async fn handle(&self, request: &ApiRequest) -> ApiResponse {
        let route = route(request.method, &request.path);

        match route {
            Route::Health => return ApiResponse::ok(json!({ "status": "ok" })),
            Route::Descriptor => return ApiResponse::ok(descriptor()),
            Route::NotFound => return ApiResponse::error(404, "Not found"),
            _ => {}
        }

        if let Err(response) = self.authorize(request.authorization.as_deref()) {
            return response;
        }

        match route {
            Route::GetPage(id) => self.get_page(id).await,
            Route::AppendPage(id) => self.append_page(id, &request.body).await,
            Route::CreatePage => self.create_page(&request.body).await,
            Route::Health | Route::Descriptor | Route::NotFound => {
                ApiResponse::error(404, "Not found")
            }
        }
    }

    fn authorize(&self, header: Option<&str>) -> Result<(), ApiResponse> {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::error!("request rejected: no API key configured");
            return Err(ApiResponse::error(500, "API key is not configured"));
        };

        let Some(token) = header.and_then(|value| value.strip_prefix("Bearer ")) else {
            return Err(ApiResponse::error(
                401,
                "Authorization header is missing or invalid",
            ));
        };

        if token != api_key {
            return Err(ApiResponse::error(401, "Invalid API key"));
        }

        Ok(())
    }

    async fn get_page(&self, raw_id: &str) -> ApiResponse {
        let page_id = match parse_id(raw_id) {
            Ok(id) => id,
            Err(response) => return response,
        };

        match self.service.get_page(&page_id).await {
            Ok(page) => ApiResponse::ok(json!({ "markdown": page.markdown, "title": page.title })),
            Err(err) => {
                tracing::error!(%page_id, error = %err, "error getting page");
                ApiResponse::failure("Failed to get page", err)
            }
        }
    }

    async fn append_page(&self, raw_id: &str, body: &str) -> ApiResponse {
        let page_id = match parse_id(raw_id) {
            Ok(id) => id,
            Err(response) => return response,
        };
        let body: AppendBody = match parse_body(body) {
            Ok(body) => body,
            Err(response) => return response,
        };

        match self.service.append_page(&page_id, &body.markdown).await {
            Ok(_) => ApiResponse::ok(json!({ "success": true })),
            Err(err) => {
                tracing::error!(%page_id, error = %err, "error appending to page");
                ApiResponse::failure("Failed to append to page", err)
            }
        }
    }

    async fn create_page(&self, body: &str) -> ApiResponse {
        let body: CreateBody = match parse_body(body) {
            Ok(body) => body,
            Err(response) => return response,
        };
        let parent = match body.parent_id.as_deref().map(parse_id).transpose() {
            Ok(parent) => parent,
            Err(response) => return response,
        };

        match self
            .service
            .create_page(&body.title, &body.markdown, parent.as_ref())
            .await
        {
            Ok(page_id) => ApiResponse::ok(json!({ "pageId": page_id.as_str(), "success": true })),
            Err(err) => {
                tracing::error!(error = %err, "error creating page");
                ApiResponse::failure("Failed to create page", err)
            }
        }
    }
}

fn descriptor() -> Value {
    json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "description": DESCRIPTION,
    })
}

fn parse_id(raw: &str) -> Result<PageId, ApiResponse> {
    PageId::parse(raw).map_err(|err| ApiResponse::error(400, err.message()))
}

fn parse_body<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ApiResponse> {
    serde_json::from_str(body)
        .map_err(|err| ApiResponse::error(400, format!("Invalid request body: {err}")))
}
