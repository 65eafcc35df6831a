// src/handlers/orders.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    common::error::{ApiError, AppError},
    config::AppState,
    middleware::i18n::Locale,
    models::orders::{OrderDetail, OrderListQuery, OrderRow},
};

// GET /api/orders
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "Orders",
    params(OrderListQuery),
    responses(
        (status = 200, description = "Tabela de pedidos com o nome do cliente resolvido; parâmetros ausentes usam ordersSearch/ordersStatus salvos", body = Vec<OrderRow>),
        (status = 503, description = "Falha ao carregar os dados")
    )
)]
pub async fn list_orders(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(query): Query<OrderListQuery>,
) -> Result<impl IntoResponse, ApiError> {

    query.validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let rows = app_state.orders_service
        .list_orders(&query)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(rows)))
}

// GET /api/orders/{id}
#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = "Orders",
    params(
        ("id" = String, Path, description = "ID do pedido")
    ),
    responses(
        (status = 200, description = "Pedido com os dados do cliente (null se inexistente)", body = OrderDetail),
        (status = 404, description = "Pedido não encontrado")
    )
)]
pub async fn get_order(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(order_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {

    let detail = app_state.orders_service
        .get_order(&order_id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(detail)))
}
