//! Redis 캐시 클라이언트
//!
//! JSON 직렬화 기반의 단순 키-값 캐시입니다. `ConnectionManager`를 사용하여
//! 연결이 끊어지면 자동으로 재연결합니다.

use redis::{AsyncCommands, Client, aio::ConnectionManager};
use serde::{Serialize, de::DeserializeOwned};
use log::info;
use crate::config::CacheConfig;

/// Redis 캐시 클라이언트 래퍼
///
/// `Serialize` 값을 JSON 문자열로 저장하고 `DeserializeOwned` 값으로 읽어옵니다.
///
/// ```rust,ignore
/// let redis = RedisClient::new().await?;
///
/// redis.set_with_expiry("book:42", &book, 600).await?;
/// let cached: Option<Book> = redis.get("book:42").await?;
/// redis.del("book:42").await?;
/// ```
#[derive(Clone)]
pub struct RedisClient {
    manager: ConnectionManager,
}

impl RedisClient {
    /// `REDIS_URL`(기본값 `redis://localhost:6379`)로 연결합니다.
    ///
    /// 생성 시 `PING`으로 서버 가용성을 확인합니다.
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        Self::connect(&CacheConfig::redis_url()).await
    }

    pub async fn connect(redis_url: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let client = Client::open(redis_url)?;
        let mut manager = ConnectionManager::new(client).await?;

        redis::cmd("PING").query_async::<()>(&mut manager).await?;

        info!("✅ Redis 연결 성공");

        Ok(Self { manager })
    }

    /// 키에 저장된 JSON 값을 역직렬화하여 반환합니다.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, redis::RedisError> {
        let mut conn = self.manager.clone();
        let value: Option<String> = conn.get(key).await?;

        value
            .map(|json| {
                serde_json::from_str(&json).map_err(|e| {
                    redis::RedisError::from((redis::ErrorKind::TypeError, "Deserialization failed", e.to_string()))
                })
            })
            .transpose()
    }

    /// 값을 JSON으로 직렬화하여 TTL(초)과 함께 저장합니다.
    pub async fn set_with_expiry<T: Serialize>(&self, key: &str, value: &T, seconds: u64) -> Result<(), redis::RedisError> {
        let mut conn = self.manager.clone();
        let json = serde_json::to_string(value).map_err(|e| {
            redis::RedisError::from((redis::ErrorKind::TypeError, "Serialization failed", e.to_string()))
        })?;

        conn.set_ex(key, json, seconds).await
    }

    pub async fn del(&self, key: &str) -> Result<(), redis::RedisError> {
        let mut conn = self.manager.clone();
        conn.del(key).await
    }
}
