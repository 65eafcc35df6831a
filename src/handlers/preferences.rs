// src/handlers/preferences.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::i18n::Locale,
    models::preferences::Preference,
};

// GET /api/preferences/{key}
#[utoipa::path(
    get,
    path = "/api/preferences/{key}",
    tag = "Preferences",
    params(
        ("key" = String, Path, description = "Chave (ex: ordersSearch, customersCity)")
    ),
    responses(
        (status = 200, description = "Valor salvo", body = Preference),
        (status = 400, description = "Chave inválida"),
        (status = 404, description = "Nada salvo para a chave")
    )
)]
pub async fn get_preference(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, ApiError> {

    let value = app_state.preferences_repo
        .get(&key)
        .await
        .and_then(|value| value.ok_or(AppError::PreferenceNotFound))
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(Preference { key, value })))
}

// PUT /api/preferences/{key}
#[utoipa::path(
    put,
    path = "/api/preferences/{key}",
    tag = "Preferences",
    params(
        ("key" = String, Path, description = "Chave (ex: ordersSearch, customersCity)")
    ),
    request_body(content = serde_json::Value, description = "Qualquer valor JSON"),
    responses(
        (status = 200, description = "Valor salvo", body = Preference),
        (status = 400, description = "Chave inválida")
    )
)]
pub async fn put_preference(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(key): Path<String>,
    Json(value): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {

    app_state.preferences_repo
        .set(&key, value.clone())
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(Preference { key, value })))
}
