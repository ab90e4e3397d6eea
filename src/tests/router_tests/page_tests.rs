use crate::errors::ServerError;
use crate::filters::SearchParams;
use crate::router::handle;
use crate::tests::utils::{body_string, memory_store, request};
use http::Method;

#[test]
fn home_lists_saved_searches() {
    let saved = memory_store();
    let params = SearchParams::from_query("propertyTypes=villa&priceMax=5000000");
    saved.save_filter("Villas", &params, 12).unwrap();

    let resp = handle(request(Method::GET, "/"), &saved).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Villas"));
    assert!(body.contains("Up to 5,000,000 DH"));
    assert!(body.contains("12 properties"));
}

#[test]
fn home_without_saved_searches() {
    let saved = memory_store();
    let body = body_string(handle(request(Method::GET, "/"), &saved).unwrap());
    assert!(body.contains("no saved searches"));
}

#[test]
fn unknown_route_is_not_found() {
    let saved = memory_store();
    let err = handle(request(Method::GET, "/nope"), &saved).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));

    let err = handle(request(Method::DELETE, "/api/saved-filters"), &saved).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}
