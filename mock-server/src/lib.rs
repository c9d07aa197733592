use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::info;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SkipOption {
    pub id: u64,
    pub size: u32,
    pub hire_period_days: u32,
    pub transport_cost: Option<f64>,
    pub per_tonne_cost: Option<f64>,
    pub price_before_vat: f64,
    pub vat: f64,
    pub postcode: String,
    pub area: String,
    pub forbidden: bool,
    pub created_at: String,
    pub updated_at: String,
    pub allowed_on_road: bool,
    pub allows_heavy_waste: bool,
}

#[derive(Deserialize)]
pub struct LocationQuery {
    pub postcode: Option<String>,
    pub area: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

pub type Catalog = Arc<Vec<SkipOption>>;

/// Router over the seeded NR32 / Lowestoft catalog.
pub fn app() -> Router {
    app_with(seed_catalog())
}

pub fn app_with(options: Vec<SkipOption>) -> Router {
    let catalog: Catalog = Arc::new(options);
    Router::new()
        .route("/skips/by-location", get(skips_by_location))
        .with_state(catalog)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn skips_by_location(
    State(catalog): State<Catalog>,
    Query(query): Query<LocationQuery>,
) -> Result<Json<Vec<SkipOption>>, (StatusCode, Json<ErrorBody>)> {
    let postcode = query.postcode.as_deref().map(str::trim).unwrap_or_default();
    if postcode.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                message: "postcode is required".to_string(),
            }),
        ));
    }
    let area = query.area.as_deref().map(str::trim).filter(|a| !a.is_empty());

    let matches: Vec<SkipOption> = catalog
        .iter()
        .filter(|option| option.postcode.eq_ignore_ascii_case(postcode))
        .filter(|option| area.map_or(true, |a| option.area.eq_ignore_ascii_case(a)))
        .cloned()
        .collect();
    info!(postcode, area = area.unwrap_or(""), count = matches.len(), "skips by location");
    Ok(Json(matches))
}

fn nr32(id: u64, size: u32, price_before_vat: f64, allowed_on_road: bool, allows_heavy_waste: bool) -> SkipOption {
    SkipOption {
        id,
        size,
        hire_period_days: 14,
        transport_cost: None,
        per_tonne_cost: None,
        price_before_vat,
        vat: 20.0,
        postcode: "NR32".to_string(),
        area: "Lowestoft".to_string(),
        forbidden: false,
        created_at: "2025-04-03T13:51:46.897146".to_string(),
        updated_at: "2025-04-07T13:16:52.813".to_string(),
        allowed_on_road,
        allows_heavy_waste,
    }
}

/// The NR32 / Lowestoft skip list, in the order upstream returns it.
pub fn seed_catalog() -> Vec<SkipOption> {
    vec![
        nr32(17933, 4, 278.0, true, true),
        nr32(17934, 6, 305.0, true, true),
        nr32(17935, 8, 375.0, true, true),
        nr32(17936, 10, 400.0, false, false),
        nr32(17937, 12, 439.0, false, false),
        nr32(17938, 14, 470.0, false, false),
        nr32(17939, 16, 496.0, false, false),
        nr32(17940, 20, 992.0, false, true),
        nr32(17941, 40, 992.0, false, false),
    ]
}
