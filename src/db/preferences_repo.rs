// src/db/preferences_repo.rs

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::{common::error::AppError, models::preferences::is_valid_key};

// Armazenamento chave/valor das preferências da interface (o "localStorage"
// do servidor). Mantém tudo em memória e regrava o arquivo JSON a cada set.
#[derive(Clone)]
pub struct PreferencesRepository {
    path: PathBuf,
    values: Arc<RwLock<BTreeMap<String, Value>>>,
}

impl PreferencesRepository {
    // Arquivo ausente ou corrompido = armazenamento vazio
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let path = path.into();

        let values = match tokio::fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice::<BTreeMap<String, Value>>(&bytes) {
                Ok(values) => values,
                Err(e) => {
                    tracing::warn!("Preferências ilegíveis em {}, começando do zero: {}", path.display(), e);
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(AppError::StorageError(e)),
        };

        tracing::info!("✅ {} preferências carregadas de {}", values.len(), path.display());

        Ok(Self { path, values: Arc::new(RwLock::new(values)) })
    }

    pub async fn get(&self, key: &str) -> Result<Option<Value>, AppError> {
        if !is_valid_key(key) {
            return Err(AppError::InvalidPreferenceKey);
        }
        Ok(self.values.read().await.get(key).cloned())
    }

    // Valor tipado; se o que está salvo não decodifica, trata como ausente
    pub async fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, AppError> {
        let Some(value) = self.get(key).await? else {
            return Ok(None);
        };

        match serde_json::from_value(value) {
            Ok(typed) => Ok(Some(typed)),
            Err(e) => {
                tracing::warn!("Preferência '{}' com formato inesperado, ignorando: {}", key, e);
                Ok(None)
            }
        }
    }

    pub async fn set(&self, key: &str, value: Value) -> Result<(), AppError> {
        if !is_valid_key(key) {
            return Err(AppError::InvalidPreferenceKey);
        }

        // O lock de escrita também serializa as gravações no disco.
        // A memória só muda depois que o arquivo foi gravado.
        let mut values = self.values.write().await;
        let mut next = values.clone();
        next.insert(key.to_string(), value);
        persist(&self.path, &next).await?;
        *values = next;
        Ok(())
    }
}

// Grava em arquivo temporário e renomeia
async fn persist(path: &Path, values: &BTreeMap<String, Value>) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let bytes = serde_json::to_vec_pretty(values)?;
    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, bytes).await?;
    tokio::fs::rename(&tmp, path).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::dashboard::{FilterOptions, Period};
    use serde_json::json;

    #[tokio::test]
    async fn values_survive_a_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");

        let repo = PreferencesRepository::open(&path).await.unwrap();
        assert_eq!(repo.get("ordersStatus").await.unwrap(), None);

        repo.set("ordersStatus", json!("Shipped")).await.unwrap();
        repo.set("customersCity", json!("Астана")).await.unwrap();

        let reopened = PreferencesRepository::open(&path).await.unwrap();
        assert_eq!(reopened.get("ordersStatus").await.unwrap(), Some(json!("Shipped")));
        assert_eq!(reopened.get("customersCity").await.unwrap(), Some(json!("Астана")));
    }

    #[tokio::test]
    async fn typed_reads_ignore_undecodable_values() {
        let dir = tempfile::tempdir().unwrap();
        let repo = PreferencesRepository::open(dir.path().join("p.json")).await.unwrap();

        repo.set("dashboard-filters", json!({ "period": "7d", "city": "Алматы" })).await.unwrap();
        let filters: FilterOptions = repo.get_as("dashboard-filters").await.unwrap().unwrap();
        assert_eq!(filters.period, Period::Last7Days);
        assert_eq!(filters.city, "Алматы");
        assert_eq!(filters.channel, "all");

        repo.set("dashboard-filters", json!(42)).await.unwrap();
        let broken: Option<FilterOptions> = repo.get_as("dashboard-filters").await.unwrap();
        assert!(broken.is_none());
    }

    #[tokio::test]
    async fn corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("p.json");
        std::fs::write(&path, "{{{").unwrap();

        let repo = PreferencesRepository::open(&path).await.unwrap();
        assert_eq!(repo.get("ordersSearch").await.unwrap(), None);
    }

    #[tokio::test]
    async fn failed_write_leaves_memory_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("sub");
        let repo = PreferencesRepository::open(sub.join("p.json")).await.unwrap();
        repo.set("ordersStatus", json!("New")).await.unwrap();

        // O diretório vira um arquivo comum: a próxima gravação falha
        std::fs::remove_dir_all(&sub).unwrap();
        std::fs::write(&sub, "not a directory").unwrap();

        let result = repo.set("ordersStatus", json!("Shipped")).await;
        assert!(matches!(result, Err(AppError::StorageError(_))));
        assert_eq!(repo.get("ordersStatus").await.unwrap(), Some(json!("New")));

        assert!(repo.set("customersCity", json!("Астана")).await.is_err());
        assert_eq!(repo.get("customersCity").await.unwrap(), None);
    }

    #[tokio::test]
    async fn invalid_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let repo = PreferencesRepository::open(dir.path().join("p.json")).await.unwrap();

        assert!(matches!(repo.get("../x").await, Err(AppError::InvalidPreferenceKey)));
        assert!(matches!(repo.set("", json!(1)).await, Err(AppError::InvalidPreferenceKey)));
    }
}
