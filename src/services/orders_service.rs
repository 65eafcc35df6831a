// src/services/orders_service.rs

use std::collections::HashMap;

use crate::{
    common::error::AppError,
    db::{DataRepository, PreferencesRepository},
    models::{
        customers::Customer,
        dashboard::ALL,
        orders::{Order, OrderDetail, OrderListQuery, OrderRow, UNKNOWN_CUSTOMER},
        preferences::{ORDERS_SEARCH_KEY, ORDERS_STATUS_KEY},
    },
};

#[derive(Clone)]
pub struct OrdersService {
    repo: DataRepository,
    preferences: PreferencesRepository,
}

impl OrdersService {
    pub fn new(repo: DataRepository, preferences: PreferencesRepository) -> Self {
        Self { repo, preferences }
    }

    // Parâmetro ausente -> último valor salvo pela tela (ordersSearch / ordersStatus)
    async fn with_saved_state(&self, query: &OrderListQuery) -> Result<OrderListQuery, AppError> {
        let search = match &query.search {
            Some(search) => Some(search.clone()),
            None => self.preferences.get_as::<String>(ORDERS_SEARCH_KEY).await?,
        };
        let status = match &query.status {
            Some(status) => Some(status.clone()),
            None => self.preferences.get_as::<String>(ORDERS_STATUS_KEY).await?,
        };
        Ok(OrderListQuery { search, status })
    }

    // Tabela de pedidos: busca por ID ou nome do cliente + filtro de status.
    // A ordem da fonte é mantida.
    pub async fn list_orders(&self, query: &OrderListQuery) -> Result<Vec<OrderRow>, AppError> {
        let query = self.with_saved_state(query).await?;
        let orders = self.repo.orders().await?;
        let customers = self.repo.customers().await?;
        let by_id = index_customers(&customers);

        let search = query.search.as_deref().unwrap_or("").trim().to_lowercase();
        let status = query.status.as_deref().unwrap_or(ALL);

        let rows = orders
            .iter()
            .filter(|order| status == ALL || status.is_empty() || order.status == status)
            .filter_map(|order| {
                let customer = by_id.get(order.customer_id.as_str()).copied();
                if !matches_search(order, customer, &search) {
                    return None;
                }
                Some(OrderRow {
                    order: order.clone(),
                    customer_name: customer
                        .map(|c| c.name.clone())
                        .unwrap_or_else(|| UNKNOWN_CUSTOMER.to_string()),
                })
            })
            .collect();

        Ok(rows)
    }

    pub async fn get_order(&self, order_id: &str) -> Result<OrderDetail, AppError> {
        let orders = self.repo.orders().await?;
        let order = orders
            .iter()
            .find(|o| o.id == order_id)
            .ok_or(AppError::OrderNotFound)?;

        let customers = self.repo.customers().await?;
        let customer = customers.iter().find(|c| c.id == order.customer_id).cloned();
        if customer.is_none() {
            tracing::warn!("Pedido {} aponta para cliente inexistente {}", order.id, order.customer_id);
        }

        Ok(OrderDetail { order: order.clone(), customer })
    }
}

fn index_customers(customers: &[Customer]) -> HashMap<&str, &Customer> {
    customers.iter().map(|c| (c.id.as_str(), c)).collect()
}

// `needle` já vem em minúsculas; vazio casa com tudo
fn matches_search(order: &Order, customer: Option<&Customer>, needle: &str) -> bool {
    needle.is_empty()
        || order.id.to_lowercase().contains(needle)
        || customer.is_some_and(|c| c.name.to_lowercase().contains(needle))
}
