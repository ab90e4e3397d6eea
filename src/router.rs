use crate::errors::ServerError;
use crate::filters::{
    collect_all_filters, convert_search_params_to_filter_values, count_active_filters,
    generate_filter_tips, get_filters_for_mobile_bar, get_filters_for_popup, get_visible_filters,
    CollectOptions, FilterConfig, FilterId, FilterKind, FilterTipItem, SearchParams, FILTERS_CONFIG,
};
use crate::responses::{html_response, json_response, no_content, ResultResp};
use crate::saved::{KeyValueStore, SavedFilterStore, SavedFilterUpdate};
use crate::templates;
use astra::Request;
use serde::Serialize;
use std::collections::HashMap;
use std::str::FromStr;
use tracing::debug;
use url::form_urlencoded;

pub fn handle<S: KeyValueStore>(req: Request, saved: &SavedFilterStore<S>) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    let query = req.uri().query().unwrap_or("");
    debug!(method, path, "request");

    match (method, path) {
        ("GET", "/") => html_response(templates::pages::saved_filters_page(
            &saved.get_saved_filters(),
        )),
        ("GET", "/api/filters") => facets(query),
        ("GET", "/api/filters/tips") => tips(query),
        ("GET", "/api/saved-filters") => json_response(200, &saved.get_saved_filters()),
        ("POST", "/api/saved-filters") => create_saved_filter(query, saved),
        ("POST", "/api/saved-filters/update") => update_saved_filter(query, saved),
        ("POST", "/api/saved-filters/seen") => {
            let id = required(&parse_query(query), "id")?;
            json_response(200, &saved.mark_seen(&id)?)
        }
        ("POST", "/api/saved-filters/delete") => {
            let id = required(&parse_query(query), "id")?;
            saved.delete_filter(&id)?;
            no_content()
        }
        _ => Err(ServerError::NotFound),
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FacetSummary {
    id: FilterId,
    label: &'static str,
    #[serde(rename = "type")]
    kind: FilterKind,
}

impl From<&FilterConfig> for FacetSummary {
    fn from(config: &FilterConfig) -> Self {
        Self {
            id: config.id,
            label: config.label,
            kind: config.kind,
        }
    }
}

#[derive(Serialize)]
struct FacetLayout {
    visible: Vec<FacetSummary>,
    bar: Vec<FacetSummary>,
    popup: Vec<FacetSummary>,
}

fn facets(query: &str) -> ResultResp {
    let params = SearchParams::from_query(query);
    let property_types = params.property_types.unwrap_or_default();
    let deal_type = params.deal_type;
    let is_mobile = parse_query(query)
        .get("mobile")
        .is_some_and(|m| m == "1" || m == "true");

    let summarize = |configs: Vec<&'static FilterConfig>| {
        configs.into_iter().map(FacetSummary::from).collect::<Vec<_>>()
    };

    json_response(
        200,
        &FacetLayout {
            visible: summarize(get_visible_filters(&property_types, deal_type)),
            bar: summarize(get_filters_for_mobile_bar(&property_types, deal_type, is_mobile)),
            popup: summarize(get_filters_for_popup(&property_types, deal_type, is_mobile)),
        },
    )
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TipsBody {
    active_count: usize,
    tips: Vec<FilterTipItem>,
}

fn tips(query: &str) -> ResultResp {
    let params = SearchParams::from_query(query);
    let values = convert_search_params_to_filter_values(&params);
    let property_types = params.property_types.clone().unwrap_or_default();
    let deal_type = Some(params.deal_type.unwrap_or_default());

    let collected = collect_all_filters(
        &values,
        &CollectOptions {
            only_active: true,
            include_metadata: true,
            property_types: property_types.clone(),
            deal_type,
            check_visibility: true,
        },
    );

    json_response(
        200,
        &TipsBody {
            active_count: count_active_filters(&values, &property_types, deal_type),
            tips: generate_filter_tips(&collected, FILTERS_CONFIG, true),
        },
    )
}

fn create_saved_filter<S: KeyValueStore>(query: &str, saved: &SavedFilterStore<S>) -> ResultResp {
    let fields = parse_query(query);
    let title = fields.get("title").map(String::as_str).unwrap_or("");
    let property_count = optional::<u64>(&fields, "propertyCount")?.unwrap_or(0);
    let params = SearchParams::from_query(query);

    let record = saved.save_filter(title, &params, property_count)?;
    json_response(201, &record)
}

fn update_saved_filter<S: KeyValueStore>(query: &str, saved: &SavedFilterStore<S>) -> ResultResp {
    let fields = parse_query(query);
    let id = required(&fields, "id")?;

    let updates = SavedFilterUpdate {
        title: fields.get("title").cloned(),
        new_count: optional(&fields, "newCount")?,
        property_count: optional(&fields, "propertyCount")?,
        ..SavedFilterUpdate::default()
    };

    let record = saved.update_filter(&id, updates)?;
    json_response(200, &record)
}

fn parse_query(query: &str) -> HashMap<String, String> {
    form_urlencoded::parse(query.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

fn required(fields: &HashMap<String, String>, name: &str) -> Result<String, ServerError> {
    fields
        .get(name)
        .filter(|v| !v.is_empty())
        .cloned()
        .ok_or_else(|| ServerError::BadRequest(format!("missing `{name}`")))
}

fn optional<T: FromStr>(fields: &HashMap<String, String>, name: &str) -> Result<Option<T>, ServerError> {
    match fields.get(name).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| ServerError::BadRequest(format!("invalid `{name}`: {raw}"))),
    }
}
