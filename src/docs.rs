// src/docs.rs

use utoipa::OpenApi;
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Dashboard ---
        handlers::dashboard::get_metrics,
        handlers::dashboard::get_series,
        handlers::dashboard::export_csv,
        handlers::dashboard::get_filters,
        handlers::dashboard::save_filters,
        handlers::dashboard::refresh_data,

        // --- Orders ---
        handlers::orders::list_orders,
        handlers::orders::get_order,

        // --- Customers ---
        handlers::customers::list_customers,
        handlers::customers::list_cities,
        handlers::customers::list_customer_orders,

        // --- Preferences ---
        handlers::preferences::get_preference,
        handlers::preferences::put_preference,

        // --- I18n ---
        handlers::i18n::get_dictionary,
    ),
    components(
        schemas(
            // --- DASHBOARD ---
            models::dashboard::Period,
            models::dashboard::FilterOptions,
            models::dashboard::DashboardMetrics,
            models::dashboard::ChartData,

            // --- Orders ---
            models::orders::Order,
            models::orders::OrderRow,
            models::orders::OrderDetail,

            // --- Customers ---
            models::customers::Customer,

            // --- Preferences ---
            models::preferences::Preference,
        )
    ),
    tags(
        (name = "Dashboard", description = "Indicadores, gráfico de receita e exportação CSV"),
        (name = "Orders", description = "Tabela e detalhe de pedidos"),
        (name = "Customers", description = "Tabela de clientes e histórico de pedidos"),
        (name = "Preferences", description = "Estado de interface persistido"),
        (name = "I18n", description = "Dicionários da interface")
    )
)]
pub struct ApiDoc;
