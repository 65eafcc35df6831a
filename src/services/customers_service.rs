// src/services/customers_service.rs

use std::cmp::Reverse;

use crate::{
    common::{dates::parse_instant, error::AppError},
    db::{DataRepository, PreferencesRepository},
    models::{
        customers::{Customer, CustomerListQuery},
        dashboard::ALL,
        orders::Order,
        preferences::{CUSTOMERS_CITY_KEY, CUSTOMERS_SEARCH_KEY},
    },
};

#[derive(Clone)]
pub struct CustomersService {
    repo: DataRepository,
    preferences: PreferencesRepository,
}

impl CustomersService {
    pub fn new(repo: DataRepository, preferences: PreferencesRepository) -> Self {
        Self { repo, preferences }
    }

    // Parâmetro ausente -> último valor salvo pela tela (customersSearch / customersCity)
    async fn with_saved_state(&self, query: &CustomerListQuery) -> Result<CustomerListQuery, AppError> {
        let search = match &query.search {
            Some(search) => Some(search.clone()),
            None => self.preferences.get_as::<String>(CUSTOMERS_SEARCH_KEY).await?,
        };
        let city = match &query.city {
            Some(city) => Some(city.clone()),
            None => self.preferences.get_as::<String>(CUSTOMERS_CITY_KEY).await?,
        };
        Ok(CustomerListQuery { search, city })
    }

    // Busca por nome ou e-mail + filtro de cidade.
    // LTV e ordersCount saem como vieram da fonte.
    pub async fn list_customers(&self, query: &CustomerListQuery) -> Result<Vec<Customer>, AppError> {
        let query = self.with_saved_state(query).await?;
        let customers = self.repo.customers().await?;

        let search = query.search.as_deref().unwrap_or("").trim().to_lowercase();
        let city = query.city.as_deref().unwrap_or(ALL);

        Ok(customers
            .iter()
            .filter(|c| {
                search.is_empty()
                    || c.name.to_lowercase().contains(&search)
                    || c.email.to_lowercase().contains(&search)
            })
            .filter(|c| city == ALL || city.is_empty() || c.city == city)
            .cloned()
            .collect())
    }

    // Cidades distintas, na ordem em que aparecem
    pub async fn list_cities(&self) -> Result<Vec<String>, AppError> {
        let customers = self.repo.customers().await?;

        let mut cities: Vec<String> = Vec::new();
        for customer in customers.iter() {
            if !cities.contains(&customer.city) {
                cities.push(customer.city.clone());
            }
        }
        Ok(cities)
    }

    // Pedidos do cliente, do mais recente para o mais antigo.
    // Datas ilegíveis vão para o fim.
    pub async fn customer_orders(&self, customer_id: &str) -> Result<Vec<Order>, AppError> {
        let customers = self.repo.customers().await?;
        if !customers.iter().any(|c| c.id == customer_id) {
            return Err(AppError::CustomerNotFound);
        }

        let orders = self.repo.orders().await?;
        let mut mine: Vec<Order> = orders
            .iter()
            .filter(|o| o.customer_id == customer_id)
            .cloned()
            .collect();
        mine.sort_by_key(|o| Reverse(parse_instant(&o.date)));

        Ok(mine)
    }
}
