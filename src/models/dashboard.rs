// src/models/dashboard.rs

use std::borrow::Cow;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::common::dates::parse_instant;

// Valor especial dos filtros de canal e cidade
pub const ALL: &str = "all";

// 1. Período do dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Period {
    #[serde(rename = "7d")]
    Last7Days,
    #[default]
    #[serde(rename = "30d")]
    Last30Days,
    #[serde(rename = "qtd")]
    QuarterToDate,
    #[serde(rename = "ytd")]
    YearToDate,
    #[serde(rename = "custom")]
    Custom,
    // Qualquer valor desconhecido (ex: filtro antigo salvo no navegador) cai aqui
    #[serde(rename = "unknown", other)]
    Unknown,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Last7Days => "7d",
            Period::Last30Days => "30d",
            Period::QuarterToDate => "qtd",
            Period::YearToDate => "ytd",
            Period::Custom => "custom",
            Period::Unknown => "unknown",
        }
    }
}

// 2. Filtros do dashboard (persistidos sob a chave `dashboard-filters`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase", default)]
#[into_params(parameter_in = Query)]
pub struct FilterOptions {
    #[schema(example = "30d")]
    pub period: Period,

    // "all" ou um canal exato (Web, Mobile, Offline)
    #[schema(example = "all")]
    pub channel: String,

    // "all" ou uma cidade exata
    #[schema(example = "all")]
    pub city: String,

    // Só usados quando period = custom
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "2024-01-01")]
    pub start_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "2024-01-31")]
    pub end_date: Option<String>,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            period: Period::Last30Days,
            channel: ALL.to_string(),
            city: ALL.to_string(),
            start_date: None,
            end_date: None,
        }
    }
}

// As datas explícitas precisam ser validadas antes de chegarem ao resolvedor.
// O resto é tolerante: período desconhecido vira 30d, canal/cidade inexistentes
// apenas não casam com nenhum pedido.
impl Validate for FilterOptions {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Some(start) = &self.start_date {
            if parse_instant(start).is_none() {
                errors.add("startDate", invalid_date());
            }
        }
        if let Some(end) = &self.end_date {
            if parse_instant(end).is_none() {
                errors.add("endDate", invalid_date());
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn invalid_date() -> ValidationError {
    let mut error = ValidationError::new("invalid_date");
    error.message = Some(Cow::from("Use o formato YYYY-MM-DD ou um timestamp ISO 8601"));
    error
}

// 3. Cards do topo
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    #[schema(value_type = f64, example = 350000.0)]
    pub revenue: Decimal,
    #[schema(example = 28)]
    pub orders: u64,
    // Ticket médio (revenue / orders, ou 0 sem pedidos)
    #[schema(value_type = f64, example = 12500.0)]
    pub aov: Decimal,
    // Stub: não existe dado de visitas para calcular a conversão de verdade
    #[schema(value_type = f64, example = 0.15)]
    pub conversion_rate: Decimal,
}

// 4. Gráfico (uma entrada por dia presente nos pedidos filtrados)
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    #[schema(example = "2024-01-01")]
    pub date: String,
    #[schema(value_type = f64, example = 25000.0)]
    pub revenue: Decimal,
    #[schema(example = 2)]
    pub orders: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let filters: FilterOptions = serde_json::from_str(r#"{"period":"7d"}"#).unwrap();

        assert_eq!(filters.period, Period::Last7Days);
        assert_eq!(filters.channel, "all");
        assert_eq!(filters.city, "all");
        assert!(filters.start_date.is_none());
    }

    #[test]
    fn unknown_period_is_tolerated() {
        let filters: FilterOptions = serde_json::from_str(r#"{"period":"mtd"}"#).unwrap();
        assert_eq!(filters.period, Period::Unknown);
    }

    #[test]
    fn default_serializes_without_explicit_dates() {
        let value = serde_json::to_value(FilterOptions::default()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "period": "30d", "channel": "all", "city": "all" })
        );
    }

    #[test]
    fn malformed_explicit_dates_fail_validation() {
        let filters = FilterOptions {
            period: Period::Custom,
            start_date: Some("01/02/2024".into()),
            end_date: Some("2024-02-01".into()),
            ..FilterOptions::default()
        };

        let errors = filters.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("startDate"));
        assert!(!fields.contains_key("endDate"));
    }
}
