// src/services/range_resolver.rs

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

use crate::{
    common::dates::parse_instant,
    models::dashboard::{FilterOptions, Period},
};

// Janela padrão (30d, custom sem início, período desconhecido)
const DEFAULT_LOOKBACK_DAYS: i64 = 30;

// Intervalo fechado [start, end]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    // Nenhum instante satisfaz. Usado quando uma data explícita não faz sentido.
    pub fn empty() -> Self {
        Self { start: DateTime::<Utc>::MAX_UTC, end: DateTime::<Utc>::MIN_UTC }
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

/// Traduz os filtros do dashboard em um intervalo concreto, relativo a `now`.
///
/// Datas explícitas só valem para `custom`; custom sem início usa os mesmos
/// 30 dias de `30d`. Nunca falha: data explícita inválida gera um intervalo
/// vazio.
pub fn resolve_range(filters: &FilterOptions, now: DateTime<Utc>) -> DateRange {
    let lookback = now - Duration::days(DEFAULT_LOOKBACK_DAYS);

    let start = match filters.period {
        Period::Last7Days => now - Duration::days(7),
        Period::Last30Days | Period::Unknown => lookback,
        Period::QuarterToDate => quarter_start(now).unwrap_or(lookback),
        Period::YearToDate => year_start(now).unwrap_or(lookback),
        Period::Custom => match filters.start_date.as_deref() {
            Some(raw) => match parse_instant(raw) {
                Some(start) => start,
                None => {
                    tracing::warn!("startDate inválida nos filtros: {:?}", raw);
                    return DateRange::empty();
                }
            },
            None => lookback,
        },
    };

    let end = match (filters.period, filters.end_date.as_deref()) {
        (Period::Custom, Some(raw)) => match parse_instant(raw) {
            Some(end) => end,
            None => {
                tracing::warn!("endDate inválida nos filtros: {:?}", raw);
                return DateRange::empty();
            }
        },
        _ => now,
    };

    DateRange { start, end }
}

// Primeiro dia do trimestre corrente, 00:00 UTC
fn quarter_start(now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let first_month = (now.month0() / 3) * 3 + 1;
    NaiveDate::from_ymd_opt(now.year(), first_month, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

// 1º de janeiro do ano corrente, 00:00 UTC
fn year_start(now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(now.year(), 1, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
