use crate::errors::{ServerError, StorageError};
use astra::{Body, Response, ResponseBuilder};
use maud::html;
use serde_json::json;

use crate::templates::desktop_layout;

fn status_of(err: &ServerError) -> u16 {
    match err {
        ServerError::NotFound => 404,
        ServerError::BadRequest(_) => 400,
        ServerError::Storage(StorageError::NotFound(_)) => 404,
        ServerError::Storage(_) | ServerError::InternalError => 500,
    }
}

/// API callers get JSON errors, everyone else an HTML page.
pub fn error_to_response(err: ServerError, path: &str) -> Response {
    if path.starts_with("/api/") {
        json_error_response(err)
    } else {
        html_error_response(err)
    }
}

fn json_error_response(err: ServerError) -> Response {
    let status = status_of(&err);
    let body = json!({ "error": err.to_string() }).to_string();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}

/// Build an HTML error page
fn html_error_response(err: ServerError) -> Response {
    let status = status_of(&err);
    let page = desktop_layout(
        &format!("Error {status}"),
        html! {
            h1 { "Error " (status) }
            p { (err.to_string()) }
            p { a href="/" { "← Back to saved searches" } }
        },
    );

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(page.into_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
