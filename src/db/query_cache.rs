// src/db/query_cache.rs

use std::collections::HashMap;
use std::fmt::Debug;
use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

use crate::common::error::AppError;

// 5 minutos para as listas cruas, 2 para métricas/séries derivadas
pub const RAW_STALE_AFTER: Duration = Duration::from_secs(5 * 60);
pub const DERIVED_STALE_AFTER: Duration = Duration::from_secs(2 * 60);

#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<V> {
    Missing,
    Fresh(V),
    // Ainda tem valor, mas já passou da janela: a próxima leitura recarrega
    Stale(V),
}

struct CachedEntry<V> {
    value: V,
    fetched_at: Instant,
}

// Cache de consultas por chave com janela de "staleness".
// Erros do loader nunca entram no cache.
#[derive(Clone)]
pub struct QueryCache<K, V> {
    entries: Arc<RwLock<HashMap<K, CachedEntry<V>>>>,
    stale_after: Duration,
}

impl<K, V> QueryCache<K, V>
where
    K: Eq + Hash + Clone + Debug,
    V: Clone,
{
    pub fn new(stale_after: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            stale_after,
        }
    }

    pub async fn state(&self, key: &K) -> QueryState<V> {
        let entries = self.entries.read().await;
        match entries.get(key) {
            None => QueryState::Missing,
            Some(entry) if entry.fetched_at.elapsed() < self.stale_after => {
                QueryState::Fresh(entry.value.clone())
            }
            Some(entry) => QueryState::Stale(entry.value.clone()),
        }
    }

    pub async fn get_or_load<F, Fut>(&self, key: K, loader: F) -> Result<V, AppError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, AppError>>,
    {
        match self.state(&key).await {
            QueryState::Fresh(value) => {
                tracing::debug!("cache hit: {:?}", key);
                return Ok(value);
            }
            QueryState::Stale(_) => tracing::debug!("cache stale: {:?}", key),
            QueryState::Missing => tracing::debug!("cache miss: {:?}", key),
        }

        let value = loader().await?;

        let mut entries = self.entries.write().await;
        // Chaves vencidas saem a cada escrita: o mapa só guarda o que ainda vale
        let stale_after = self.stale_after;
        entries.retain(|_, entry| entry.fetched_at.elapsed() < stale_after);
        entries.insert(
            key,
            CachedEntry { value: value.clone(), fetched_at: Instant::now() },
        );

        Ok(value)
    }

    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }
}
