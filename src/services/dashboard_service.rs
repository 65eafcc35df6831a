// src/services/dashboard_service.rs

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::{
    common::error::AppError,
    db::{DataRepository, PreferencesRepository, QueryCache},
    models::{
        dashboard::{ChartData, DashboardMetrics, FilterOptions},
        preferences::DASHBOARD_FILTERS_KEY,
    },
    services::{
        aggregation::{compute_metrics, compute_series},
        export_service::{export_filename, series_to_csv, CsvExport},
    },
};

#[derive(Clone)]
pub struct DashboardService {
    repo: DataRepository,
    preferences: PreferencesRepository,
    metrics_cache: QueryCache<FilterOptions, DashboardMetrics>,
    series_cache: QueryCache<FilterOptions, Arc<Vec<ChartData>>>,
    conversion_rate: Decimal,
}

impl DashboardService {
    pub fn new(
        repo: DataRepository,
        preferences: PreferencesRepository,
        conversion_rate: Decimal,
        stale_after: Duration,
    ) -> Self {
        Self {
            repo,
            preferences,
            metrics_cache: QueryCache::new(stale_after),
            series_cache: QueryCache::new(stale_after),
            conversion_rate,
        }
    }

    // Cards do topo. Memorizado pela tupla de filtros, como no front.
    pub async fn get_metrics(
        &self,
        filters: &FilterOptions,
        now: DateTime<Utc>,
    ) -> Result<DashboardMetrics, AppError> {
        self.metrics_cache
            .get_or_load(filters.clone(), || async {
                let orders = self.repo.orders().await?;
                Ok(compute_metrics(&orders, filters, now, self.conversion_rate))
            })
            .await
    }

    pub async fn get_series(
        &self,
        filters: &FilterOptions,
        now: DateTime<Utc>,
    ) -> Result<Arc<Vec<ChartData>>, AppError> {
        self.series_cache
            .get_or_load(filters.clone(), || async {
                let orders = self.repo.orders().await?;
                Ok(Arc::new(compute_series(&orders, filters, now)))
            })
            .await
    }

    pub async fn export_csv(
        &self,
        filters: &FilterOptions,
        now: DateTime<Utc>,
    ) -> Result<CsvExport, AppError> {
        let series = self.get_series(filters, now).await?;
        Ok(CsvExport {
            filename: export_filename(filters.period, now.date_naive()),
            content: series_to_csv(&series)?,
        })
    }

    // Descarta métricas/séries memorizadas e as listas cruas
    pub async fn refresh(&self) {
        self.repo.refresh().await;
        self.metrics_cache.clear().await;
        self.series_cache.clear().await;
        tracing::info!("🔄 Caches do dashboard descartados");
    }

    // ---
    // Filtros persistidos
    // ---

    // Sem nada salvo (ou salvo num formato antigo) -> filtros padrão
    pub async fn get_saved_filters(&self) -> Result<FilterOptions, AppError> {
        Ok(self
            .preferences
            .get_as::<FilterOptions>(DASHBOARD_FILTERS_KEY)
            .await?
            .unwrap_or_default())
    }

    pub async fn save_filters(&self, filters: &FilterOptions) -> Result<FilterOptions, AppError> {
        self.preferences
            .set(DASHBOARD_FILTERS_KEY, serde_json::to_value(filters)?)
            .await?;
        tracing::info!("Filtros do dashboard salvos: período {}", filters.period.as_str());
        Ok(filters.clone())
    }
}
