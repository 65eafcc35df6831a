// src/config.rs

use std::{env, path::PathBuf, str::FromStr, sync::Arc, time::Duration};

use anyhow::Context;
use rust_decimal::Decimal;

use crate::{
    common::i18n::I18nStore,
    db::{
        query_cache::{DERIVED_STALE_AFTER, RAW_STALE_AFTER},
        DataRepository, DataSource, JsonFileSource, PreferencesRepository,
    },
    services::{
        aggregation::DEFAULT_CONVERSION_RATE, customers_service::CustomersService,
        dashboard_service::DashboardService, orders_service::OrdersService,
    },
};

// Configuração lida do ambiente (.env opcional)
#[derive(Debug, Clone)]
pub struct Settings {
    pub bind_addr: String,
    pub data_dir: PathBuf,
    pub preferences_path: PathBuf,
    pub conversion_rate: Decimal,
    pub raw_stale_after: Duration,
    pub derived_stale_after: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".to_string(),
            data_dir: PathBuf::from("data"),
            preferences_path: PathBuf::from("data/preferences.json"),
            conversion_rate: DEFAULT_CONVERSION_RATE,
            raw_stale_after: RAW_STALE_AFTER,
            derived_stale_after: DERIVED_STALE_AFTER,
        }
    }
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Settings::default();

        Ok(Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or(defaults.bind_addr),
            data_dir: env::var("DATA_DIR").map(PathBuf::from).unwrap_or(defaults.data_dir),
            preferences_path: env::var("PREFERENCES_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.preferences_path),
            conversion_rate: parse_var("CONVERSION_RATE")?.unwrap_or(defaults.conversion_rate),
            raw_stale_after: parse_var::<u64>("RAW_STALE_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.raw_stale_after),
            derived_stale_after: parse_var::<u64>("DERIVED_STALE_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.derived_stale_after),
        })
    }
}

// Variável ausente -> None; presente e inválida -> erro de inicialização
fn parse_var<T>(name: &str) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("{} inválida: {:?}", name, raw)),
        Err(_) => Ok(None),
    }
}

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub i18n_store: I18nStore,
    pub preferences_repo: PreferencesRepository,
    pub dashboard_service: DashboardService,
    pub orders_service: OrdersService,
    pub customers_service: CustomersService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        let settings = Settings::from_env()?;
        let source = Arc::new(JsonFileSource::new(&settings.data_dir));

        tracing::info!("✅ Fonte de dados: {}", settings.data_dir.display());

        Self::from_parts(settings, source).await
    }

    // --- Monta o gráfico de dependências ---
    pub async fn from_parts(settings: Settings, source: Arc<dyn DataSource>) -> anyhow::Result<Self> {
        let preferences_repo = PreferencesRepository::open(&settings.preferences_path)
            .await
            .context("Falha ao abrir o arquivo de preferências")?;

        let data_repo = DataRepository::new(source, settings.raw_stale_after);

        let dashboard_service = DashboardService::new(
            data_repo.clone(),
            preferences_repo.clone(),
            settings.conversion_rate,
            settings.derived_stale_after,
        );
        let orders_service = OrdersService::new(data_repo.clone(), preferences_repo.clone());
        let customers_service = CustomersService::new(data_repo, preferences_repo.clone());

        Ok(Self {
            settings,
            i18n_store: I18nStore::new(),
            preferences_repo,
            dashboard_service,
            orders_service,
            customers_service,
        })
    }
}
