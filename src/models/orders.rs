// src/models/orders.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::customers::Customer;

// Placeholder exibido quando o cliente do pedido não existe na base
pub const UNKNOWN_CUSTOMER: &str = "—";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[schema(example = "ORD-1001")]
    pub id: String,

    // ISO `YYYY-MM-DD` ou timestamp completo
    #[schema(example = "2024-01-01")]
    pub date: String,

    #[schema(example = "C-001")]
    pub customer_id: String,

    #[schema(example = "Алматы")]
    pub city: String,

    #[schema(example = "Web")]
    pub channel: String,

    #[schema(example = "Processing")]
    pub status: String,

    #[schema(value_type = f64, example = 12500.0)]
    pub total: Decimal,
}

// Envelope do arquivo `orders.json`
#[derive(Debug, Deserialize)]
pub struct OrdersFile {
    pub orders: Vec<Order>,
}

// Linha da tabela de pedidos: o pedido + o nome do cliente já resolvido
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderRow {
    #[serde(flatten)]
    pub order: Order,
    #[schema(example = "Айгерим Садыкова")]
    pub customer_name: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetail {
    #[serde(flatten)]
    pub order: Order,
    // None quando o customerId não aponta para ninguém
    pub customer: Option<Customer>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct OrderListQuery {
    // Busca por ID do pedido ou nome do cliente
    #[validate(length(max = 100, message = "A busca deve ter no máximo 100 caracteres"))]
    pub search: Option<String>,

    // "all" ou um status exato
    pub status: Option<String>,
}
