// src/models/preferences.rs

use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

// Chaves usadas pelas telas (o mesmo nome que o front grava)
pub const DASHBOARD_FILTERS_KEY: &str = "dashboard-filters";
pub const ORDERS_SEARCH_KEY: &str = "ordersSearch";
pub const ORDERS_STATUS_KEY: &str = "ordersStatus";
pub const CUSTOMERS_SEARCH_KEY: &str = "customersSearch";
pub const CUSTOMERS_CITY_KEY: &str = "customersCity";

pub const MAX_KEY_LEN: usize = 64;

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Preference {
    #[schema(example = "ordersStatus")]
    pub key: String,
    #[schema(value_type = Object)]
    pub value: Value,
}

// [A-Za-z0-9_-]{1,64}
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key.len() <= MAX_KEY_LEN
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
