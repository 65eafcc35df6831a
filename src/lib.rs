// src/lib.rs

use axum::{
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

pub mod common;
pub mod config;
pub mod db;
pub mod docs;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use crate::{config::AppState, docs::ApiDoc};

// Monta o router completo. Separado do main para os testes de integração.
pub fn app(app_state: AppState) -> Router {
    let dashboard_routes = Router::new()
        .route("/metrics", get(handlers::dashboard::get_metrics))
        .route("/series", get(handlers::dashboard::get_series))
        .route("/export", get(handlers::dashboard::export_csv))
        .route("/filters"
               ,get(handlers::dashboard::get_filters)
               .put(handlers::dashboard::save_filters)
        );

    let orders_routes = Router::new()
        .route("/", get(handlers::orders::list_orders))
        .route("/{id}", get(handlers::orders::get_order));

    let customers_routes = Router::new()
        .route("/", get(handlers::customers::list_customers))
        .route("/cities", get(handlers::customers::list_cities))
        .route("/{id}/orders", get(handlers::customers::list_customer_orders));

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .route("/api/data/refresh", post(handlers::dashboard::refresh_data))
        .route("/api/preferences/{key}"
               ,get(handlers::preferences::get_preference)
               .put(handlers::preferences::put_preference)
        )
        .route("/api/i18n/{locale}", get(handlers::i18n::get_dictionary))
        .nest("/api/dashboard", dashboard_routes)
        .nest("/api/orders", orders_routes)
        .nest("/api/customers", customers_routes)
        .with_state(app_state)
}
