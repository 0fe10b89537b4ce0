use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};

use super::KeyValueStore;
use crate::error::AppResult;

/// Creates a Redis client for device storage
pub fn create_redis_client(redis_url: &str) -> anyhow::Result<Client> {
    let client = Client::open(redis_url)?;
    Ok(client)
}

/// Redis-backed storage
///
/// Every key is prefixed with a namespace so several deployments can share
/// one Redis instance. The connection manager reconnects on its own after
/// a dropped connection.
#[derive(Clone)]
pub struct RedisStore {
    connection: ConnectionManager,
    namespace: String,
}

impl RedisStore {
    /// Opens a managed connection to Redis
    pub async fn connect(client: Client, namespace: impl Into<String>) -> AppResult<Self> {
        let connection = ConnectionManager::new(client).await?;
        let namespace = namespace.into();
        tracing::info!(namespace = %namespace, "Connected to Redis storage");
        Ok(Self {
            connection,
            namespace,
        })
    }

    fn namespaced(&self, key: &str) -> String {
        namespaced_key(&self.namespace, key)
    }
}

fn namespaced_key(namespace: &str, key: &str) -> String {
    if namespace.is_empty() {
        key.to_string()
    } else {
        format!("{}:{}", namespace, key)
    }
}

#[async_trait::async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let mut conn = self.connection.clone();
        let value: Option<String> = conn.get(self.namespaced(key)).await.map_err(|e| {
            tracing::warn!(error = %e, key = %key, "Redis get failed");
            e
        })?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: String) -> AppResult<()> {
        let mut conn = self.connection.clone();
        let _: () = conn.set(self.namespaced(key), value).await.map_err(|e| {
            tracing::warn!(error = %e, key = %key, "Redis set failed");
            e
        })?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        let mut conn = self.connection.clone();
        let _: () = conn.del(self.namespaced(key)).await.map_err(|e| {
            tracing::warn!(error = %e, key = %key, "Redis delete failed");
            e
        })?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "redis"
    }
}
