//! The coordination store: a Redis-like key/value + pub/sub service shared
//! by every backend.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use tracing::{debug, warn};

use crate::error::{RtpError, Result};

const BACKOFF_START: Duration = Duration::from_secs(1);
const BACKOFF_CAP: Duration = Duration::from_secs(15);

/// The store's synchronous-looking op surface, plus a subscriber contract.
///
/// `isRunning` is the monotonic flag from the design: `start()` flips it
/// false -> true, `stop()` flips it true -> false, and it never returns to
/// true without a fresh `start()`. Every operation checks it on entry;
/// when false, writes and deletes fail closed (return
/// [`RtpError::StoreNotRunning`]) while reads return `Ok(None)` so
/// read-only callers like the cooldown check can fail open.
#[async_trait]
pub trait StoreClient: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn setex(&self, key: &str, seconds: u64, value: &str) -> Result<()>;
    async fn del(&self, key: &str) -> Result<()>;
    async fn ttl(&self, key: &str) -> Result<Option<u64>>;
    async fn publish(&self, channel: &str, message: &str) -> Result<()>;

    /// Subscribes to `channel`, returning a receiver of messages. The
    /// subscriber loop behind it reconnects with exponential backoff
    /// (1s, doubling, capped at 15s) until [`StoreClient::stop`] is
    /// called.
    fn subscribe(&self, channel: &str) -> flume::Receiver<String>;

    fn is_running(&self) -> bool;
    fn start(&self);
    fn stop(&self);
}

/// Production store client backed by Redis.
pub struct RedisStoreClient {
    client: redis::Client,
    conn: tokio::sync::OnceCell<ConnectionManager>,
    running: Arc<AtomicBool>,
}

impl RedisStoreClient {
    pub fn new(url: &str) -> Result<Self> {
        let client = redis::Client::open(url)?;
        Ok(Self {
            client,
            conn: tokio::sync::OnceCell::new(),
            running: Arc::new(AtomicBool::new(false)),
        })
    }

    async fn connection(&self) -> Result<ConnectionManager> {
        let conn = self
            .conn
            .get_or_try_init(|| async { self.client.get_connection_manager().await })
            .await?;
        Ok(conn.clone())
    }
}

#[async_trait]
impl StoreClient for RedisStoreClient {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        if !self.is_running() {
            return Ok(None);
        }
        let mut conn = self.connection().await?;
        Ok(conn.get(key).await?)
    }

    async fn setex(&self, key: &str, seconds: u64, value: &str) -> Result<()> {
        if !self.is_running() {
            return Err(RtpError::StoreNotRunning);
        }
        let mut conn = self.connection().await?;
        conn.set_ex(key, value, seconds).await?;
        Ok(())
    }

    async fn del(&self, key: &str) -> Result<()> {
        if !self.is_running() {
            return Err(RtpError::StoreNotRunning);
        }
        let mut conn = self.connection().await?;
        conn.del(key).await?;
        Ok(())
    }

    async fn ttl(&self, key: &str) -> Result<Option<u64>> {
        if !self.is_running() {
            return Ok(None);
        }
        let mut conn = self.connection().await?;
        let ttl: i64 = conn.ttl(key).await?;
        Ok(if ttl < 0 { None } else { Some(ttl as u64) })
    }

    async fn publish(&self, channel: &str, message: &str) -> Result<()> {
        if !self.is_running() {
            return Err(RtpError::StoreNotRunning);
        }
        let mut conn = self.connection().await?;
        conn.publish(channel, message).await?;
        Ok(())
    }

    fn subscribe(&self, channel: &str) -> flume::Receiver<String> {
        let (tx, rx) = flume::unbounded();
        let client = self.client.clone();
        let channel = channel.to_owned();
        let running = self.running.clone();

        tokio::spawn(async move {
            let mut backoff = BACKOFF_START;

            while running.load(Ordering::SeqCst) {
                match client.get_async_pubsub().await {
                    Ok(mut pubsub) => {
                        if let Err(e) = pubsub.subscribe(&channel).await {
                            warn!("failed to subscribe to {channel}: {e}");
                        } else {
                            backoff = BACKOFF_START;
                            let mut stream = pubsub.on_message();

                            loop {
                                if !running.load(Ordering::SeqCst) {
                                    return;
                                }

                                use futures_util::StreamExt;
                                match stream.next().await {
                                    Some(msg) => {
                                        let payload: String =
                                            match msg.get_payload() {
                                                Ok(p) => p,
                                                Err(e) => {
                                                    warn!("bad pubsub payload: {e}");
                                                    continue;
                                                }
                                            };
                                        if tx.send(payload).is_err() {
                                            return;
                                        }
                                    }
                                    None => break,
                                }
                            }
                        }
                    }
                    Err(e) => {
                        warn!("failed to connect subscriber for {channel}: {e}");
                    }
                }

                if !running.load(Ordering::SeqCst) {
                    return;
                }

                debug!("subscriber for {channel} reconnecting in {backoff:?}");
                tokio::time::sleep(backoff).await;
                backoff = (backoff * 2).min(BACKOFF_CAP);
            }
        });

        rx
    }

    fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    fn start(&self) {
        self.running.store(true, Ordering::SeqCst);
    }

    fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }
}

struct FakeEntry {
    value: String,
    expires_at: Option<std::time::Instant>,
}

/// In-memory store used by component tests. Simulates latency and fans
/// pub/sub messages out to every live subscriber over `flume`.
pub struct FakeStoreClient {
    data: Mutex<HashMap<String, FakeEntry>>,
    subscribers: Mutex<HashMap<String, Vec<flume::Sender<String>>>>,
    running: Arc<AtomicBool>,
    latency: Duration,
}

impl FakeStoreClient {
    pub fn new() -> Self {
        Self {
            data: Mutex::new(HashMap::new()),
            subscribers: Mutex::new(HashMap::new()),
            running: Arc::new(AtomicBool::new(true)),
            latency: Duration::ZERO,
        }
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency,
            ..Self::new()
        }
    }

    async fn delay(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl Default for FakeStoreClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StoreClient for FakeStoreClient {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.delay().await;
        if !self.is_running() {
            return Ok(None);
        }
        let mut data = self.data.lock().unwrap();
        if let Some(entry) = data.get(key) {
            if entry
                .expires_at
                .is_some_and(|at| at <= std::time::Instant::now())
            {
                data.remove(key);
                return Ok(None);
            }
            return Ok(Some(entry.value.clone()));
        }
        Ok(None)
    }

    async fn setex(&self, key: &str, seconds: u64, value: &str) -> Result<()> {
        self.delay().await;
        if !self.is_running() {
            return Err(RtpError::StoreNotRunning);
        }
        self.data.lock().unwrap().insert(
            key.to_owned(),
            FakeEntry {
                value: value.to_owned(),
                expires_at: Some(std::time::Instant::now() + Duration::from_secs(seconds)),
            },
        );
        Ok(())
    }

    async fn del(&self, key: &str) -> Result<()> {
        self.delay().await;
        if !self.is_running() {
            return Err(RtpError::StoreNotRunning);
        }
        self.data.lock().unwrap().remove(key);
        Ok(())
    }

    async fn ttl(&self, key: &str) -> Result<Option<u64>> {
        self.delay().await;
        if !self.is_running() {
            return Ok(None);
        }
        let data = self.data.lock().unwrap();
        Ok(data.get(key).and_then(|entry| {
            entry.expires_at.map(|at| {
                at.saturating_duration_since(std::time::Instant::now())
                    .as_secs()
            })
        }))
    }

    async fn publish(&self, channel: &str, message: &str) -> Result<()> {
        self.delay().await;
        if !self.is_running() {
            return Err(RtpError::StoreNotRunning);
        }
        let subs = self.subscribers.lock().unwrap();
        if let Some(senders) = subs.get(channel) {
            for sender in senders {
                let _ = sender.send(message.to_owned());
            }
        }
        Ok(())
    }

    fn subscribe(&self, channel: &str) -> flume::Receiver<String> {
        let (tx, rx) = flume::unbounded();
        self.subscribers
            .lock()
            .unwrap()
            .entry(channel.to_owned())
            .or_default()
            .push(tx);
        rx
    }

    fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    fn start(&self) {
        self.running.store(true, Ordering::SeqCst);
    }

    fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn setex_then_get_round_trips() {
        let store = FakeStoreClient::new();
        store.setex("k", 10, "v").await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v"));
    }

    #[tokio::test]
    async fn del_removes_key() {
        let store = FakeStoreClient::new();
        store.setex("k", 10, "v").await.unwrap();
        store.del("k").await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn stopped_store_fails_closed_on_write_and_open_on_read() {
        let store = FakeStoreClient::new();
        store.stop();
        assert!(store.setex("k", 10, "v").await.is_err());
        assert_eq!(store.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn publish_fans_out_to_subscribers() {
        let store = FakeStoreClient::new();
        let rx = store.subscribe("chan");
        store.publish("chan", "hello").await.unwrap();
        let msg = rx.recv_async().await.unwrap();
        assert_eq!(msg, "hello");
    }

    #[tokio::test]
    async fn once_stopped_never_runs_without_fresh_start() {
        let store = FakeStoreClient::new();
        assert!(store.is_running());
        store.stop();
        assert!(!store.is_running());
        store.stop();
        assert!(!store.is_running());
        store.start();
        assert!(store.is_running());
    }
}
