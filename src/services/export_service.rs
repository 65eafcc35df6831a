// src/services/export_service.rs

use chrono::NaiveDate;

use crate::{
    common::error::AppError,
    models::dashboard::{ChartData, Period},
};

pub const CSV_HEADER: [&str; 3] = ["Date", "Revenue", "Orders"];

#[derive(Debug, Clone)]
pub struct CsvExport {
    pub filename: String,
    pub content: Vec<u8>,
}

// analytics-<período>-<hoje>.csv. Período desconhecido é exportado com a
// janela de 30d, e o nome do arquivo diz isso.
pub fn export_filename(period: Period, today: NaiveDate) -> String {
    let period = match period {
        Period::Unknown => Period::Last30Days,
        known => known,
    };
    format!("analytics-{}-{}.csv", period.as_str(), today.format("%Y-%m-%d"))
}

pub fn series_to_csv(series: &[ChartData]) -> Result<Vec<u8>, AppError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    let to_export_error = |e: csv::Error| AppError::ExportError(e.to_string());

    writer.write_record(CSV_HEADER).map_err(to_export_error)?;
    for point in series {
        let revenue = point.revenue.normalize().to_string();
        let orders = point.orders.to_string();
        writer
            .write_record([point.date.as_str(), revenue.as_str(), orders.as_str()])
            .map_err(to_export_error)?;
    }

    writer
        .into_inner()
        .map_err(|e| AppError::ExportError(e.to_string()))
}
