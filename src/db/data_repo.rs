// src/db/data_repo.rs

use std::sync::Arc;
use std::time::Duration;

use crate::{
    common::error::AppError,
    db::{data_source::DataSource, query_cache::QueryCache},
    models::{customers::Customer, orders::Order},
};

const ORDERS_KEY: &str = "orders";
const CUSTOMERS_KEY: &str = "customers";

// Acesso às listas cruas, memorizadas pela janela de staleness
#[derive(Clone)]
pub struct DataRepository {
    source: Arc<dyn DataSource>,
    orders: QueryCache<&'static str, Arc<Vec<Order>>>,
    customers: QueryCache<&'static str, Arc<Vec<Customer>>>,
}

impl DataRepository {
    pub fn new(source: Arc<dyn DataSource>, stale_after: Duration) -> Self {
        Self {
            source,
            orders: QueryCache::new(stale_after),
            customers: QueryCache::new(stale_after),
        }
    }

    pub async fn orders(&self) -> Result<Arc<Vec<Order>>, AppError> {
        self.orders
            .get_or_load(ORDERS_KEY, || async {
                let orders = self.source.load_orders().await?;
                tracing::info!("📦 {} pedidos carregados", orders.len());
                Ok(Arc::new(orders))
            })
            .await
    }

    pub async fn customers(&self) -> Result<Arc<Vec<Customer>>, AppError> {
        self.customers
            .get_or_load(CUSTOMERS_KEY, || async {
                let customers = self.source.load_customers().await?;
                tracing::info!("👥 {} clientes carregados", customers.len());
                Ok(Arc::new(customers))
            })
            .await
    }

    // Força a próxima leitura a ir até a fonte
    pub async fn refresh(&self) {
        self.orders.clear().await;
        self.customers.clear().await;
    }
}
