// src/services/fixtures.rs

use rust_decimal::Decimal;

use crate::models::{customers::Customer, orders::Order};

pub fn order(id: &str, date: &str, customer_id: &str, city: &str, channel: &str, status: &str, total: i64) -> Order {
    Order {
        id: id.to_string(),
        date: date.to_string(),
        customer_id: customer_id.to_string(),
        city: city.to_string(),
        channel: channel.to_string(),
        status: status.to_string(),
        total: Decimal::from(total),
    }
}

pub fn customer(id: &str, name: &str, email: &str, city: &str) -> Customer {
    Customer {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        city: city.to_string(),
        ltv: Decimal::ZERO,
        orders_count: 0,
    }
}

pub fn customers() -> Vec<Customer> {
    vec![
        customer("C-001", "Айгерим Садыкова", "aigerim@example.kz", "Алматы"),
        customer("C-002", "Daniyar Bekov", "daniyar@example.kz", "Астана"),
        customer("C-003", "Ольга Ким", "olga.kim@example.kz", "Алматы"),
    ]
}

pub fn orders() -> Vec<Order> {
    vec![
        order("ORD-1001", "2024-01-03", "C-001", "Алматы", "Web", "Shipped", 12000),
        order("ORD-1002", "2024-01-05", "C-002", "Астана", "Mobile", "Processing", 8000),
        order("ORD-1003", "2024-01-05", "C-001", "Алматы", "Offline", "New", 5000),
        order("ORD-1004", "2024-01-10", "C-999", "Шымкент", "Web", "New", 3000),
        order("ORD-1005", "2024-01-12T09:30:00Z", "C-003", "Алматы", "Web", "Shipped", 7000),
    ]
}
