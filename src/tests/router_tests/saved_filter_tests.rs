use crate::errors::{ServerError, StorageError};
use crate::responses::error_to_response;
use crate::router::handle;
use crate::tests::utils::{body_json, memory_store, request};
use http::Method;

#[test]
fn create_then_list() {
    let saved = memory_store();
    let req = request(
        Method::POST,
        "/api/saved-filters?title=My%20search&propertyCount=5&propertyTypes=apartment&priceMin=100000",
    );

    let resp = handle(req, &saved).expect("Handler failed");
    assert_eq!(resp.status(), 201);
    let created = body_json(resp);
    assert_eq!(created["title"], "My search");
    assert_eq!(created["dealType"], "sale");

    let list = body_json(handle(request(Method::GET, "/api/saved-filters"), &saved).unwrap());
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["filterQuery"]["propertyTypes"][0], "apartment");
    assert_eq!(list[0]["filterQuery"]["priceMin"], 100_000);
    assert_eq!(list[0]["propertyCount"], 5);
}

#[test]
fn create_rejects_bad_count() {
    let saved = memory_store();
    let err = handle(request(Method::POST, "/api/saved-filters?propertyCount=lots"), &saved)
        .unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn update_changes_title_and_count() {
    let saved = memory_store();
    let record = saved
        .save_filter("old", &Default::default(), 1)
        .unwrap();

    let uri = format!(
        "/api/saved-filters/update?id={}&title=new&newCount=4",
        record.id
    );
    let resp = handle(request(Method::POST, &uri), &saved).unwrap();
    assert_eq!(resp.status(), 200);

    let json = body_json(resp);
    assert_eq!(json["title"], "new");
    assert_eq!(json["newCount"], 4);
    assert_eq!(json["propertyCount"], 1);
}

#[test]
fn update_of_missing_id_is_404() {
    let saved = memory_store();
    let err = handle(
        request(Method::POST, "/api/saved-filters/update?id=ghost&title=x"),
        &saved,
    )
    .unwrap_err();
    assert!(matches!(err, ServerError::Storage(StorageError::NotFound(_))));

    let resp = error_to_response(err, "/api/saved-filters/update");
    assert_eq!(resp.status(), 404);
}

#[test]
fn update_requires_id() {
    let saved = memory_store();
    let err = handle(request(Method::POST, "/api/saved-filters/update"), &saved).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
    assert_eq!(error_to_response(err, "/api/saved-filters/update").status(), 400);
}

#[test]
fn seen_clears_badge() {
    let saved = memory_store();
    let record = saved.save_filter("s", &Default::default(), 0).unwrap();
    saved
        .update_filter(
            &record.id,
            crate::saved::SavedFilterUpdate {
                new_count: Some(2),
                ..Default::default()
            },
        )
        .unwrap();

    let uri = format!("/api/saved-filters/seen?id={}", record.id);
    let json = body_json(handle(request(Method::POST, &uri), &saved).unwrap());
    assert!(json.get("newCount").is_none());
}

#[test]
fn delete_is_idempotent() {
    let saved = memory_store();
    let record = saved.save_filter("gone", &Default::default(), 0).unwrap();

    let uri = format!("/api/saved-filters/delete?id={}", record.id);
    assert_eq!(handle(request(Method::POST, &uri), &saved).unwrap().status(), 204);
    assert_eq!(handle(request(Method::POST, &uri), &saved).unwrap().status(), 204);
    assert!(saved.get_saved_filters().is_empty());
}
