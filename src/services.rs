pub mod aggregation;
pub mod customers_service;
pub mod dashboard_service;
pub mod export_service;
pub mod orders_service;
pub mod range_resolver;

#[cfg(test)]
pub(crate) mod fixtures;
