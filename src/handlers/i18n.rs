// src/handlers/i18n.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{common::error::ApiError, config::AppState, middleware::i18n::Locale};

// GET /api/i18n/{locale}
#[utoipa::path(
    get,
    path = "/api/i18n/{locale}",
    tag = "I18n",
    params(
        ("locale" = String, Path, description = "en, ru ou pt")
    ),
    responses(
        (status = 200, description = "Rótulos da interface", body = std::collections::HashMap<String, String>),
        (status = 404, description = "Idioma não suportado")
    )
)]
pub async fn get_dictionary(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(requested): Path<String>,
) -> Result<impl IntoResponse, ApiError> {

    let requested = requested.to_lowercase();
    let dictionary = app_state.i18n_store
        .ui_dictionary(&requested)
        .ok_or_else(|| {
            let message = format!(
                "{}: {}",
                app_state.i18n_store.translate(&locale.0, "language"),
                requested
            );
            ApiError::new(StatusCode::NOT_FOUND, message)
        })?;

    Ok((StatusCode::OK, Json(dictionary)))
}
