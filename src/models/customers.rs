// src/models/customers.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[schema(example = "C-001")]
    pub id: String,

    #[schema(example = "Айгерим Садыкова")]
    pub name: String,

    #[schema(example = "aigerim@example.kz")]
    pub email: String,

    #[schema(example = "Алматы")]
    pub city: String,

    // LTV e quantidade de pedidos vêm prontos da fonte, não são recalculados
    #[schema(value_type = f64, example = 48000.0)]
    pub ltv: Decimal,

    #[schema(example = 4)]
    pub orders_count: u32,
}

// Envelope do arquivo `customers.json`
#[derive(Debug, Deserialize)]
pub struct CustomersFile {
    pub customers: Vec<Customer>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CustomerListQuery {
    // Busca por nome ou e-mail
    #[validate(length(max = 100, message = "A busca deve ter no máximo 100 caracteres"))]
    pub search: Option<String>,

    // "all" ou uma cidade exata
    pub city: Option<String>,
}
