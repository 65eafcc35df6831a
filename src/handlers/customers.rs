// src/handlers/customers.rs

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
    models::{
        customers::{Customer, CustomerListQuery},
        orders::Order,
    },
};

// GET /api/customers
#[utoipa::path(
    get,
    path = "/api/customers",
    tag = "Customers",
    params(CustomerListQuery),
    responses(
        (status = 200, description = "Tabela de clientes; parâmetros ausentes usam customersSearch/customersCity salvos", body = Vec<Customer>),
        (status = 503, description = "Falha ao carregar os dados")
    )
)]
pub async fn list_customers(
    State(app_state): State<AppState>,
    locale: Locale,
    Query(query): Query<CustomerListQuery>,
) -> Result<impl IntoResponse, ApiError> {

    query.validate()
        .map_err(|e| AppError::ValidationError(e).to_api_error(&locale, &app_state.i18n_store))?;

    let customers = app_state.customers_service
        .list_customers(&query)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(customers)))
}

// GET /api/customers/cities
#[utoipa::path(
    get,
    path = "/api/customers/cities",
    tag = "Customers",
    responses(
        (status = 200, description = "Cidades distintas dos clientes", body = Vec<String>)
    )
)]
pub async fn list_cities(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, ApiError> {

    let cities = app_state.customers_service
        .list_cities()
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(cities)))
}

// GET /api/customers/{id}/orders
#[utoipa::path(
    get,
    path = "/api/customers/{id}/orders",
    tag = "Customers",
    params(
        ("id" = String, Path, description = "ID do cliente")
    ),
    responses(
        (status = 200, description = "Pedidos do cliente, do mais recente para o mais antigo", body = Vec<Order>),
        (status = 404, description = "Cliente não encontrado")
    )
)]
pub async fn list_customer_orders(
    State(app_state): State<AppState>,
    locale: Locale,
    Path(customer_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {

    let orders = app_state.customers_service
        .customer_orders(&customer_id)
        .await
        .map_err(|app_err| app_err.to_api_error(&locale, &app_state.i18n_store))?;

    Ok((StatusCode::OK, Json(orders)))
}
