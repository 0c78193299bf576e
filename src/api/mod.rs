use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    response::{Html, Json},
    routing::get,
};

use crate::{
    Result,
    models::{DateReading, ObservationKind, ObservationWindow, TemperatureStats},
    store::ClimateStore,
};

pub const ROUTE_LISTING: &str = "Available Routes:<br/>\
    /api/v1.0/precipitation<br/>\
    /api/v1.0/stations<br/>\
    /api/v1.0/tobs<br/>\
    /api/v1.0/start_date/<start_date><br/>\
    /api/v1.0/start_date/end_date/<start_date>/<end_date>";

/// State shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ClimateStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ClimateStore>) -> Self {
        Self { store }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_routes))
        .route("/api/v1.0/precipitation", get(get_precipitation))
        .route("/api/v1.0/stations", get(get_stations))
        .route("/api/v1.0/tobs", get(get_tobs))
        .route("/api/v1.0/start_date/{start_date}", get(get_stats_since))
        .route(
            "/api/v1.0/start_date/end_date/{start_date}/{end_date}",
            get(get_stats_between),
        )
}

async fn list_routes() -> Html<&'static str> {
    Html(ROUTE_LISTING)
}

async fn get_precipitation(State(state): State<AppState>) -> Result<Json<Vec<DateReading>>> {
    let readings = state
        .store
        .daily_readings(ObservationKind::Precipitation, ObservationWindow::PREVIOUS_YEAR)
        .await?;
    tracing::debug!(count = readings.len(), "precipitation readings");
    Ok(Json(readings))
}

async fn get_stations(State(state): State<AppState>) -> Result<Json<Vec<Option<String>>>> {
    let names = state.store.station_names().await?;
    tracing::debug!(count = names.len(), "station names");
    Ok(Json(names))
}

async fn get_tobs(State(state): State<AppState>) -> Result<Json<Vec<DateReading>>> {
    let readings = state
        .store
        .daily_readings(ObservationKind::Temperature, ObservationWindow::PREVIOUS_YEAR)
        .await?;
    tracing::debug!(count = readings.len(), "temperature readings");
    Ok(Json(readings))
}

async fn get_stats_since(
    State(state): State<AppState>,
    Path(start_date): Path<String>,
) -> Result<Json<Vec<TemperatureStats>>> {
    let stats = state.store.temperature_stats_since(&start_date).await?;
    tracing::debug!(%start_date, empty = stats.is_empty(), "temperature stats");
    Ok(Json(vec![stats]))
}

async fn get_stats_between(
    State(state): State<AppState>,
    Path((start_date, end_date)): Path<(String, String)>,
) -> Result<Json<Vec<TemperatureStats>>> {
    let stats = state
        .store
        .temperature_stats_between(&start_date, &end_date)
        .await?;
    tracing::debug!(%start_date, %end_date, empty = stats.is_empty(), "temperature stats");
    Ok(Json(vec![stats]))
}
