// src/handlers/dashboard.rs

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use validator::Validate;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::i18n::Locale,
    models::dashboard::{ChartData, DashboardMetrics, FilterOptions},
};

// GET /api/dashboard/metrics
#[utoipa::path(
    get,
    path = "/api/dashboard/metrics",
    tag = "Dashboard",
    params(FilterOptions),
    responses(
        (status = 200, description = "Receita, pedidos, ticket médio e conversão do período", body = DashboardMetrics),
        (status = 400, description = "Datas explícitas inválidas"),
        (status = 503, description = "Falha ao carregar os dados")
    )
)]
pub async fn get_metrics(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(filters): Query<FilterOptions>,
) -> Result<impl IntoResponse, ApiError> {

    filters.validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let metrics = app_state.dashboard_service
        .get_metrics(&filters, Utc::now())
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(metrics)))
}

// GET /api/dashboard/series
#[utoipa::path(
    get,
    path = "/api/dashboard/series",
    tag = "Dashboard",
    params(FilterOptions),
    responses(
        (status = 200, description = "Receita e pedidos por dia, em ordem crescente de data", body = Vec<ChartData>),
        (status = 400, description = "Datas explícitas inválidas"),
        (status = 503, description = "Falha ao carregar os dados")
    )
)]
pub async fn get_series(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(filters): Query<FilterOptions>,
) -> Result<impl IntoResponse, ApiError> {

    filters.validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let series = app_state.dashboard_service
        .get_series(&filters, Utc::now())
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(series.as_ref().clone())))
}

// GET /api/dashboard/export
#[utoipa::path(
    get,
    path = "/api/dashboard/export",
    tag = "Dashboard",
    params(FilterOptions),
    responses(
        (status = 200, description = "Série do gráfico em CSV (Date,Revenue,Orders)", content_type = "text/csv"),
        (status = 400, description = "Datas explícitas inválidas")
    )
)]
pub async fn export_csv(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(filters): Query<FilterOptions>,
) -> Result<impl IntoResponse, ApiError> {

    filters.validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let export = app_state.dashboard_service
        .export_csv(&filters, Utc::now())
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    let disposition = format!("attachment; filename=\"{}\"", export.filename);

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        export.content,
    ))
}

// GET /api/dashboard/filters
#[utoipa::path(
    get,
    path = "/api/dashboard/filters",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Filtros salvos (ou o padrão: 30d, todos os canais e cidades)", body = FilterOptions)
    )
)]
pub async fn get_filters(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {

    let filters = app_state.dashboard_service
        .get_saved_filters()
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(filters)))
}

// PUT /api/dashboard/filters
#[utoipa::path(
    put,
    path = "/api/dashboard/filters",
    tag = "Dashboard",
    request_body = FilterOptions,
    responses(
        (status = 200, description = "Filtros salvos", body = FilterOptions),
        (status = 400, description = "Datas explícitas inválidas")
    )
)]
pub async fn save_filters(
    State(app_state): State<AppState>,
    locale: Locale,
    Json(payload): Json<FilterOptions>,
) -> Result<impl IntoResponse, ApiError> {

    payload.validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let saved = app_state.dashboard_service
        .save_filters(&payload)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(saved)))
}

// POST /api/data/refresh
#[utoipa::path(
    post,
    path = "/api/data/refresh",
    tag = "Dashboard",
    responses(
        (status = 204, description = "Caches descartados; a próxima leitura vai até os arquivos")
    )
)]
pub async fn refresh_data(State(app_state): State<AppState>) -> StatusCode {
    app_state.dashboard_service.refresh().await;
    StatusCode::NO_CONTENT
}
