//! Blocking HTTP front for [`Api`].
//!
//! One request at a time: each is read, handled to completion on a
//! current-thread tokio runtime and answered before the next is accepted.

use crate::api::{Api, ApiRequest, ApiResponse, Method};
use crate::error::ServeError;
use crate::store::DocumentStore;
use std::io::Read;
use std::net::TcpListener;
use tiny_http::{Header, Response, Server};

/// Bind `address` (e.g. `0.0.0.0:8000`) and serve until the process exits.
pub fn serve<S: DocumentStore>(api: &Api<S>, address: &str) -> Result<(), ServeError> {
    let listener = TcpListener::bind(address).map_err(|source| ServeError::Bind {
        address: address.to_string(),
        source,
    })?;
    serve_listener(api, listener)
}

/// Serve on an already bound listener.
pub fn serve_listener<S: DocumentStore>(
    api: &Api<S>,
    listener: TcpListener,
) -> Result<(), ServeError> {
    let address = listener
        .local_addr()
        .map(|addr| addr.to_string())
        .unwrap_or_default();
    let server = Server::from_listener(listener, None).map_err(|err| ServeError::Bind {
        address: address.clone(),
        source: std::io::Error::other(err),
    })?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(ServeError::Runtime)?;

    tracing::info!(%address, "listening");

    for mut request in server.incoming_requests() {
        let api_request = match read_request(&mut request) {
            Ok(api_request) => api_request,
            Err(err) => {
                tracing::warn!(error = %err, "could not read request body");
                let _ = request.respond(Response::from_string("Bad request").with_status_code(400));
                continue;
            }
        };

        let response = runtime.block_on(api.handle(&api_request));
        tracing::info!(
            method = %request.method(),
            path = %api_request.path,
            status = response.status,
            "request handled"
        );

        if let Err(err) = request.respond(to_http(response)) {
            tracing::warn!(error = %err, "could not write response");
        }
    }

    Ok(())
}

fn read_request(request: &mut tiny_http::Request) -> std::io::Result<ApiRequest> {
    let method = match request.method() {
        tiny_http::Method::Get => Method::Get,
        tiny_http::Method::Post => Method::Post,
        _ => Method::Other,
    };
    let authorization = request
        .headers()
        .iter()
        .find(|header| header.field.equiv("Authorization"))
        .map(|header| header.value.as_str().to_string());

    let mut body = String::new();
    request.as_reader().read_to_string(&mut body)?;

    Ok(ApiRequest {
        method,
        path: request.url().to_string(),
        authorization,
        body,
    })
}

fn to_http(response: ApiResponse) -> Response<std::io::Cursor<Vec<u8>>> {
    let http = Response::from_data(response.body.to_string().into_bytes())
        .with_status_code(response.status);
    match Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]) {
        Ok(header) => http.with_header(header),
        Err(()) => http,
    }
}
