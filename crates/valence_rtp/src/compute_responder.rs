//! The subscriber-side half of the remote dispatch protocol. Answers
//! compute requests targeting this server with a located candidate, or
//! an error.

use tracing::warn;

use crate::codec::{self, ComputeRequest, ComputeResponse};
use crate::collaborators::RtpContext;
use crate::config::RtpSettings;
use crate::keys::Keys;
use crate::store::StoreClient;

/// Handles one decoded [`ComputeRequest`] read off the compute channel.
/// Drops requests that aren't running or aren't addressed to this
/// server; otherwise asks the finder for a safe location and writes the
/// response record. Write failures are logged, not retried — the
/// origin's poller owns its own timeout.
pub async fn handle_request(
    raw: &str,
    store: &dyn StoreClient,
    keys: &Keys,
    settings: &RtpSettings,
    ctx: &RtpContext,
) {
    if !store.is_running() {
        return;
    }

    let request: ComputeRequest = match codec::decode(raw) {
        Ok(req) => req,
        Err(e) => {
            warn!("dropping malformed compute request: {e}");
            return;
        }
    };

    if request.target_server != settings.server_name {
        return;
    }

    let response = match ctx.finder.find_safe(&request.world).await {
        Some(location) => ComputeResponse {
            request_id: request.request_id.clone(),
            ok: true,
            server: settings.server_name.clone(),
            world: request.world.clone(),
            location,
            error: None,
        },
        None => ComputeResponse {
            request_id: request.request_id.clone(),
            ok: false,
            server: settings.server_name.clone(),
            world: request.world.clone(),
            location: Default::default(),
            error: Some("no-safe-location".into()),
        },
    };

    let Ok(encoded) = codec::encode(&response) else {
        warn!("failed to encode compute response for {}", request.request_id);
        return;
    };

    if let Err(e) = store
        .setex(&keys.resp(&request.request_id), settings.request_ttl_seconds, &encoded)
        .await
    {
        warn!("failed to write compute response for {}: {e}", request.request_id);
    }
}

/// Runs forever, draining `rx` (as produced by [`StoreClient::subscribe`]
/// on the compute channel) and handling each request in turn. Intended
/// to be spawned once as a background task at plugin startup.
pub async fn run_compute_responder(
    rx: flume::Receiver<String>,
    store: std::sync::Arc<dyn StoreClient>,
    keys: std::sync::Arc<Keys>,
    settings: std::sync::Arc<RtpSettings>,
    ctx: std::sync::Arc<RtpContext>,
) {
    while let Ok(raw) = rx.recv_async().await {
        handle_request(&raw, &*store, &keys, &settings, &*ctx).await;
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use uuid::Uuid;

    use super::*;
    use crate::codec::Location;
    use crate::collaborators::{Clock, Notifier, PlayerEffects, ProxyConnector, SafeLocationFinder};
    use crate::store::FakeStoreClient;

    struct NoopProxy;
    #[async_trait]
    impl ProxyConnector for NoopProxy {
        async fn request_switch(&self, _player: Uuid, _target_server: &str) -> bool {
            true
        }
    }

    struct FixedFinder(Option<Location>);
    #[async_trait]
    impl SafeLocationFinder for FixedFinder {
        async fn find_safe(&self, _world: &str) -> Option<Location> {
            self.0.clone()
        }
    }

    struct NoopNotifier;
    #[async_trait]
    impl Notifier for NoopNotifier {
        async fn notify(&self, _player: Uuid, _message_key: &str, _params: &[(&str, String)]) {}
    }

    struct NoopEffects;
    #[async_trait]
    impl PlayerEffects for NoopEffects {
        async fn freeze(&self, _player: Uuid) {}
        async fn unfreeze(&self, _player: Uuid) {}
        async fn preload_chunk(&self, _world: &str, _location: &Location) -> bool {
            true
        }
        async fn teleport(&self, _player: Uuid, _location: &Location) -> bool {
            true
        }
        async fn set_respawn_location(&self, _player: Uuid, _location: &Location) {}
        async fn consume_anchor_charge(&self, _player: Uuid, _location: &Location) -> bool {
            true
        }
    }

    struct FixedClock;
    impl Clock for FixedClock {
        fn now_ms(&self) -> i64 {
            0
        }
    }

    fn context(found: Option<Location>) -> RtpContext {
        RtpContext {
            proxy: std::sync::Arc::new(NoopProxy),
            finder: std::sync::Arc::new(FixedFinder(found)),
            notify: std::sync::Arc::new(NoopNotifier),
            effects: std::sync::Arc::new(NoopEffects),
            clock: std::sync::Arc::new(FixedClock),
        }
    }

    #[tokio::test]
    async fn answers_request_for_this_server() {
        let store = FakeStoreClient::new();
        let keys = Keys::new("rtp:");
        let mut settings = RtpSettings::default();
        settings.server_name = "smp".into();
        let location = Location::new("world", 1.0, 2.0, 3.0, 0.0, 0.0);
        let ctx = context(Some(location.clone()));

        let request = ComputeRequest {
            request_id: "R1".into(),
            player_uuid: Uuid::nil(),
            target_server: "smp".into(),
            world: "world".into(),
            created_at_ms: 0,
        };
        let raw = codec::encode(&request).unwrap();

        handle_request(&raw, &store, &keys, &settings, &ctx).await;

        let text = store.get(&keys.resp("R1")).await.unwrap().unwrap();
        let resp: ComputeResponse = codec::decode(&text).unwrap();
        assert!(resp.ok);
        assert_eq!(resp.server, "smp");
        assert_eq!(resp.location, location);
    }

    #[tokio::test]
    async fn drops_request_for_another_server() {
        let store = FakeStoreClient::new();
        let keys = Keys::new("rtp:");
        let mut settings = RtpSettings::default();
        settings.server_name = "smp".into();
        let ctx = context(Some(Location::new("world", 0.0, 0.0, 0.0, 0.0, 0.0)));

        let request = ComputeRequest {
            request_id: "R2".into(),
            player_uuid: Uuid::nil(),
            target_server: "hub".into(),
            world: "world".into(),
            created_at_ms: 0,
        };
        let raw = codec::encode(&request).unwrap();

        handle_request(&raw, &store, &keys, &settings, &ctx).await;

        assert_eq!(store.get(&keys.resp("R2")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn reports_failure_when_no_safe_location() {
        let store = FakeStoreClient::new();
        let keys = Keys::new("rtp:");
        let mut settings = RtpSettings::default();
        settings.server_name = "smp".into();
        let ctx = context(None);

        let request = ComputeRequest {
            request_id: "R3".into(),
            player_uuid: Uuid::nil(),
            target_server: "smp".into(),
            world: "world".into(),
            created_at_ms: 0,
        };
        let raw = codec::encode(&request).unwrap();

        handle_request(&raw, &store, &keys, &settings, &ctx).await;

        let text = store.get(&keys.resp("R3")).await.unwrap().unwrap();
        let resp: ComputeResponse = codec::decode(&text).unwrap();
        assert!(!resp.ok);
        assert!(resp.error.is_some());
    }
}
