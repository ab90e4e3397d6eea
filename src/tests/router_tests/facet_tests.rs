use crate::router::handle;
use crate::tests::utils::{body_json, memory_store, request};
use http::Method;

fn ids(list: &serde_json::Value) -> Vec<&str> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|f| f["id"].as_str().unwrap())
        .collect()
}

#[test]
fn land_sale_shows_zoning_and_hides_rooms() {
    let saved = memory_store();
    let req = request(Method::GET, "/api/filters?propertyTypes=land&dealType=sale");

    let resp = handle(req, &saved).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let json = body_json(resp);
    let visible = ids(&json["visible"]);
    assert!(visible.contains(&"zoningCategory"));
    assert!(!visible.contains(&"bedsBaths"));
}

#[test]
fn bar_and_popup_split_the_visible_set() {
    let saved = memory_store();
    let req = request(
        Method::GET,
        "/api/filters?propertyTypes=apartment&dealType=short-term&mobile=1",
    );

    let json = body_json(handle(req, &saved).unwrap());
    let visible = ids(&json["visible"]);
    let bar = ids(&json["bar"]);
    let popup = ids(&json["popup"]);

    assert!(!bar.contains(&"price"), "price has its own control on mobile");
    assert!(popup.contains(&"price"));
    assert_eq!(bar.len() + popup.len(), visible.len());
    assert!(bar.iter().all(|id| !popup.contains(id)));
}

#[test]
fn no_deal_type_means_no_facets() {
    let saved = memory_store();
    let json = body_json(handle(request(Method::GET, "/api/filters"), &saved).unwrap());
    assert!(json["visible"].as_array().unwrap().is_empty());
}

#[test]
fn tips_endpoint_reports_chips_and_count() {
    let saved = memory_store();
    let req = request(
        Method::GET,
        "/api/filters/tips?dealType=sale&propertyTypes=apartment&priceMin=1000&bedrooms=2&bathrooms=1",
    );

    let json = body_json(handle(req, &saved).unwrap());
    assert_eq!(json["activeCount"], 3);

    let texts: Vec<&str> = json["tips"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["text"].as_str().unwrap())
        .collect();
    assert_eq!(texts, ["Apartment", "From 1,000 DH", "2 Rooms", "1 Bath"]);
    assert_eq!(json["tips"][2]["onClear"]["key"], "bedrooms");
}

#[test]
fn malformed_query_values_are_ignored() {
    let saved = memory_store();
    let req = request(Method::GET, "/api/filters/tips?dealType=sale&priceMin=abc&propertyTypes=castle");

    let resp = handle(req, &saved).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(body_json(resp)["activeCount"], 0);
}
