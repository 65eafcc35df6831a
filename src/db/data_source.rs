// src/db/data_source.rs

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::{
    common::error::AppError,
    models::{
        customers::{Customer, CustomersFile},
        orders::{Order, OrdersFile},
    },
};

// A única fonte de dados do sistema: listas completas, somente leitura
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn load_orders(&self) -> Result<Vec<Order>, AppError>;
    async fn load_customers(&self) -> Result<Vec<Customer>, AppError>;
}

// Lê `orders.json` e `customers.json` de um diretório
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    data_dir: PathBuf,
}

impl JsonFileSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self { data_dir: data_dir.into() }
    }

    async fn read_json<T: DeserializeOwned>(&self, file_name: &str) -> Result<T, AppError> {
        let path = self.data_dir.join(file_name);
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| source_error(&path, e))?;
        serde_json::from_slice(&bytes).map_err(|e| source_error(&path, e))
    }
}

fn source_error(path: &Path, err: impl std::fmt::Display) -> AppError {
    AppError::DataSourceError(format!("{}: {}", path.display(), err))
}

#[async_trait]
impl DataSource for JsonFileSource {
    async fn load_orders(&self) -> Result<Vec<Order>, AppError> {
        let file: OrdersFile = self.read_json("orders.json").await?;
        Ok(file.orders)
    }

    async fn load_customers(&self) -> Result<Vec<Customer>, AppError> {
        let file: CustomersFile = self.read_json("customers.json").await?;
        Ok(file.customers)
    }
}

// Fonte em memória (testes e uso embarcado)
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    pub orders: Vec<Order>,
    pub customers: Vec<Customer>,
}

impl InMemorySource {
    pub fn new(orders: Vec<Order>, customers: Vec<Customer>) -> Self {
        Self { orders, customers }
    }
}

#[async_trait]
impl DataSource for InMemorySource {
    async fn load_orders(&self) -> Result<Vec<Order>, AppError> {
        Ok(self.orders.clone())
    }

    async fn load_customers(&self) -> Result<Vec<Customer>, AppError> {
        Ok(self.customers.clone())
    }
}
