use crate::saved::{MemoryStore, SavedFilterStore};
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;

pub fn memory_store() -> SavedFilterStore<MemoryStore> {
    SavedFilterStore::new(MemoryStore::new())
}

pub fn request(method: Method, uri: &str) -> Request {
    http::Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn body_json(resp: Response) -> serde_json::Value {
    serde_json::from_str(&body_string(resp)).unwrap()
}
