// src/services/aggregation.rs

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::{
    common::dates::parse_instant,
    models::{
        dashboard::{ChartData, DashboardMetrics, FilterOptions, ALL},
        orders::Order,
    },
    services::range_resolver::{resolve_range, DateRange},
};

// 15%. Não existe dado de visitas/sessões, então a conversão é um valor fixo
// injetado de fora (CONVERSION_RATE) e nunca depende dos pedidos filtrados.
pub const DEFAULT_CONVERSION_RATE: Decimal = Decimal::from_parts(15, 0, 0, false, 2);

fn matches(filter: &str, value: &str) -> bool {
    filter.is_empty() || filter == ALL || filter == value
}

/// Aplica intervalo, canal e cidade, preservando a ordem original.
/// Pedidos com data ilegível ficam de fora.
pub fn filter_orders<'a>(
    orders: &'a [Order],
    range: &DateRange,
    channel: &str,
    city: &str,
) -> Vec<&'a Order> {
    if range.is_empty() {
        return Vec::new();
    }

    orders
        .iter()
        .filter(|order| {
            let in_range = match parse_instant(&order.date) {
                Some(instant) => range.contains(instant),
                None => {
                    tracing::warn!("Pedido {} com data ilegível: {:?}", order.id, order.date);
                    false
                }
            };
            in_range && matches(channel, &order.channel) && matches(city, &order.city)
        })
        .collect()
}

// Soma que satura em Decimal::MAX em vez de estourar
fn add_total(sum: Decimal, order: &Order) -> Decimal {
    sum.checked_add(order.total).unwrap_or_else(|| {
        tracing::warn!("Soma de receita estourou no pedido {}; saturando", order.id);
        Decimal::MAX
    })
}

// Uma passada só: soma, contagem e ticket médio
pub fn summarize(filtered: &[&Order], conversion_rate: Decimal) -> DashboardMetrics {
    let (revenue, orders) = filtered
        .iter()
        .fold((Decimal::ZERO, 0u64), |(sum, count), order| (add_total(sum, order), count + 1));

    let aov = if orders > 0 {
        revenue / Decimal::from(orders)
    } else {
        Decimal::ZERO
    };

    DashboardMetrics { revenue, orders, aov, conversion_rate }
}

// Agrupa pela string exata da data (sem buckets por semana/mês).
// BTreeMap já devolve as chaves em ordem lexicográfica.
pub fn build_series(filtered: &[&Order]) -> Vec<ChartData> {
    let mut grouped: BTreeMap<&str, (Decimal, u64)> = BTreeMap::new();

    for order in filtered {
        let entry = grouped.entry(order.date.as_str()).or_insert((Decimal::ZERO, 0));
        entry.0 = add_total(entry.0, order);
        entry.1 += 1;
    }

    grouped
        .into_iter()
        .map(|(date, (revenue, orders))| ChartData { date: date.to_string(), revenue, orders })
        .collect()
}

pub fn compute_metrics(
    orders: &[Order],
    filters: &FilterOptions,
    now: DateTime<Utc>,
    conversion_rate: Decimal,
) -> DashboardMetrics {
    let range = resolve_range(filters, now);
    let filtered = filter_orders(orders, &range, &filters.channel, &filters.city);
    summarize(&filtered, conversion_rate)
}

pub fn compute_series(
    orders: &[Order],
    filters: &FilterOptions,
    now: DateTime<Utc>,
) -> Vec<ChartData> {
    let range = resolve_range(filters, now);
    let filtered = filter_orders(orders, &range, &filters.channel, &filters.city);
    build_series(&filtered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::dashboard::Period;
    use chrono::TimeZone;

    fn order(id: &str, date: &str, total: i64, channel: &str, city: &str) -> Order {
        Order {
            id: id.to_string(),
            date: date.to_string(),
            customer_id: "C-001".to_string(),
            city: city.to_string(),
            channel: channel.to_string(),
            status: "New".to_string(),
            total: Decimal::from(total),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
    }

    fn single_day(day: &str) -> FilterOptions {
        FilterOptions {
            period: Period::Custom,
            start_date: Some(day.to_string()),
            end_date: Some(day.to_string()),
            ..FilterOptions::default()
        }
    }

    #[test]
    fn empty_input_gives_zero_metrics() {
        let metrics = compute_metrics(&[], &FilterOptions::default(), now(), DEFAULT_CONVERSION_RATE);

        assert_eq!(
            metrics,
            DashboardMetrics {
                revenue: Decimal::ZERO,
                orders: 0,
                aov: Decimal::ZERO,
                conversion_rate: DEFAULT_CONVERSION_RATE,
            }
        );
        assert!(compute_series(&[], &FilterOptions::default(), now()).is_empty());
    }

    #[test]
    fn scenario_single_order_single_day() {
        let orders = vec![order("o1", "2024-01-01", 100, "Web", "Almaty")];
        let filters = single_day("2024-01-01");

        let metrics = compute_metrics(&orders, &filters, now(), DEFAULT_CONVERSION_RATE);
        assert_eq!(metrics.revenue, Decimal::from(100));
        assert_eq!(metrics.orders, 1);
        assert_eq!(metrics.aov, Decimal::from(100));
        assert_eq!(metrics.conversion_rate, DEFAULT_CONVERSION_RATE);

        assert_eq!(
            compute_series(&orders, &filters, now()),
            vec![ChartData { date: "2024-01-01".into(), revenue: Decimal::from(100), orders: 1 }]
        );
    }

    #[test]
    fn scenario_channel_mismatch_empties_everything() {
        let orders = vec![order("o1", "2024-01-01", 100, "Web", "Almaty")];
        let filters = FilterOptions { channel: "Mobile".into(), ..single_day("2024-01-01") };

        let metrics = compute_metrics(&orders, &filters, now(), DEFAULT_CONVERSION_RATE);
        assert_eq!(metrics.revenue, Decimal::ZERO);
        assert_eq!(metrics.orders, 0);
        assert_eq!(metrics.aov, Decimal::ZERO);
        assert!(compute_series(&orders, &filters, now()).is_empty());
    }

    #[test]
    fn scenario_same_day_orders_collapse_into_one_point() {
        let orders = vec![
            order("o1", "2024-01-01", 100, "Web", "Almaty"),
            order("o2", "2024-01-01", 250, "Offline", "Astana"),
        ];

        let series = compute_series(&orders, &single_day("2024-01-01"), now());
        assert_eq!(
            series,
            vec![ChartData { date: "2024-01-01".into(), revenue: Decimal::from(350), orders: 2 }]
        );
    }

    #[test]
    fn scenario_thirty_day_window_excludes_old_orders() {
        let orders = vec![
            order("recent", "2024-01-10", 100, "Web", "Almaty"),
            order("old", "2023-11-01", 999, "Web", "Almaty"),
            order("future", "2024-02-01", 999, "Web", "Almaty"),
        ];
        let filters = FilterOptions { period: Period::Last30Days, ..FilterOptions::default() };

        let metrics = compute_metrics(&orders, &filters, now(), DEFAULT_CONVERSION_RATE);
        assert_eq!(metrics.revenue, Decimal::from(100));
        assert_eq!(metrics.orders, 1);
    }

    #[test]
    fn revenue_counts_exactly_the_matching_orders() {
        let orders = vec![
            order("a", "2024-01-10", 10, "Web", "Almaty"),
            order("b", "2024-01-11", 20, "Mobile", "Almaty"),
            order("c", "2024-01-12", 40, "Web", "Astana"),
            order("d", "2024-01-13", 80, "Web", "Almaty"),
        ];
        let filters = FilterOptions {
            period: Period::Last7Days,
            channel: "Web".into(),
            city: "Almaty".into(),
            ..FilterOptions::default()
        };

        let range = resolve_range(&filters, now());
        let ids: Vec<&str> = filter_orders(&orders, &range, "Web", "Almaty")
            .iter()
            .map(|o| o.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "d"]);

        let metrics = compute_metrics(&orders, &filters, now(), DEFAULT_CONVERSION_RATE);
        assert_eq!(metrics.revenue, Decimal::from(90));
        assert_eq!(metrics.aov, Decimal::from(45));
    }

    #[test]
    fn aov_handles_non_integer_division() {
        let orders = vec![
            order("a", "2024-01-10", 10, "Web", "Almaty"),
            order("b", "2024-01-10", 10, "Web", "Almaty"),
            order("c", "2024-01-10", 11, "Web", "Almaty"),
        ];
        let filtered: Vec<&Order> = orders.iter().collect();

        let metrics = summarize(&filtered, DEFAULT_CONVERSION_RATE);
        assert_eq!(metrics.revenue, Decimal::from(31));
        assert_eq!(metrics.aov.round_dp(2), Decimal::new(1033, 2));
    }

    #[test]
    fn series_is_sorted_and_has_unique_dates() {
        let orders = vec![
            order("a", "2024-01-12", 1, "Web", "Almaty"),
            order("b", "2024-01-10", 2, "Web", "Almaty"),
            order("c", "2024-01-12", 3, "Mobile", "Almaty"),
            order("d", "2024-01-11", 4, "Web", "Astana"),
        ];

        let series = compute_series(&orders, &FilterOptions::default(), now());
        let dates: Vec<&str> = series.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-01-10", "2024-01-11", "2024-01-12"]);
        assert_eq!(series[2].revenue, Decimal::from(4));
        assert_eq!(series[2].orders, 2);
    }

    #[test]
    fn unparseable_dates_are_skipped_not_fatal() {
        let orders = vec![
            order("ok", "2024-01-10", 50, "Web", "Almaty"),
            order("bad", "10/01/2024", 70, "Web", "Almaty"),
        ];

        let metrics = compute_metrics(&orders, &FilterOptions::default(), now(), DEFAULT_CONVERSION_RATE);
        assert_eq!(metrics.orders, 1);
        assert_eq!(metrics.revenue, Decimal::from(50));
    }

    #[test]
    fn malformed_custom_date_selects_nothing() {
        let orders = vec![order("a", "2024-01-10", 10, "Web", "Almaty")];
        let filters = FilterOptions {
            period: Period::Custom,
            start_date: Some("10/01/2024".into()),
            ..FilterOptions::default()
        };

        let range = resolve_range(&filters, now());
        assert!(range.is_empty());
        assert!(filter_orders(&orders, &range, ALL, ALL).is_empty());
        assert_eq!(compute_metrics(&orders, &filters, now(), DEFAULT_CONVERSION_RATE).orders, 0);
    }

    #[test]
    fn huge_totals_saturate_instead_of_panicking() {
        let mut a = order("a", "2024-01-10", 0, "Web", "Almaty");
        a.total = Decimal::MAX;
        let mut b = order("b", "2024-01-10", 0, "Web", "Almaty");
        b.total = Decimal::MAX;
        let orders = vec![a, b];

        let metrics = compute_metrics(&orders, &FilterOptions::default(), now(), DEFAULT_CONVERSION_RATE);
        assert_eq!(metrics.orders, 2);
        assert_eq!(metrics.revenue, Decimal::MAX);

        let series = compute_series(&orders, &FilterOptions::default(), now());
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].revenue, Decimal::MAX);
        assert_eq!(series[0].orders, 2);
    }

    #[test]
    fn conversion_rate_is_independent_of_orders() {
        let rate = Decimal::new(42, 3);
        let orders = vec![order("a", "2024-01-10", 50, "Web", "Almaty")];

        assert_eq!(compute_metrics(&orders, &FilterOptions::default(), now(), rate).conversion_rate, rate);
        assert_eq!(compute_metrics(&[], &FilterOptions::default(), now(), rate).conversion_rate, rate);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let orders = vec![
            order("a", "2024-01-10", 10, "Web", "Almaty"),
            order("b", "2024-01-14", 20, "Mobile", "Astana"),
        ];
        let filters = FilterOptions::default();

        assert_eq!(
            compute_metrics(&orders, &filters, now(), DEFAULT_CONVERSION_RATE),
            compute_metrics(&orders, &filters, now(), DEFAULT_CONVERSION_RATE)
        );
        assert_eq!(compute_series(&orders, &filters, now()), compute_series(&orders, &filters, now()));
    }
}
