// src/common/dates.rs

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

// Formatos aceitos para datas de pedidos e filtros:
// "2024-01-01", "2024-01-01T10:30:00Z", "2024-01-01T10:30:00+05:00",
// "2024-01-01T10:30:00" e "2024-01-01 10:30:00" (sem fuso = UTC).
// Data pura vira meia-noite UTC.
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
