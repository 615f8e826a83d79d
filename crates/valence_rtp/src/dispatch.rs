//! The remote dispatcher: publishes a compute request, polls for the
//! response, writes the pending teleport, then asks the proxy to switch
//! the player.
//!
//! Ordering guarantee: [`PendingTeleport`] is durable in the store
//! before [`ProxyConnector::request_switch`] is called, so the
//! destination's Join Finalizer can never race to read a missing key.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use rand::distributions::Alphanumeric;
use rand::Rng;
use tracing::warn;
use uuid::Uuid;

use crate::codec::{self, ComputeRequest, ComputeResponse, PendingTeleport};
use crate::collaborators::RtpContext;
use crate::config::RtpSettings;
use crate::error::RtpError;
use crate::keys::Keys;
use crate::store::StoreClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Pending was written and the switch was requested; the origin's
    /// job is done, the destination's Join Finalizer takes over.
    Dispatched,
    Failed,
    Cancelled,
}

pub(crate) fn generate_request_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(16)
        .map(char::from)
        .collect()
}

pub async fn dispatch_remote(
    player: Uuid,
    target_server: &str,
    world: &str,
    store: &dyn StoreClient,
    keys: &Keys,
    settings: &RtpSettings,
    ctx: &RtpContext,
    cancelled: &Arc<AtomicBool>,
) -> DispatchOutcome {
    if !store.is_running() {
        ctx.notify
            .notify(player, RtpError::StoreNotRunning.notify_key(), &[])
            .await;
        return DispatchOutcome::Failed;
    }

    let request_id = generate_request_id();
    let request = ComputeRequest {
        request_id: request_id.clone(),
        player_uuid: player,
        target_server: target_server.to_owned(),
        world: world.to_owned(),
        created_at_ms: ctx.clock.now_ms(),
    };

    let encoded = match codec::encode(&request) {
        Ok(encoded) => encoded,
        Err(e) => {
            ctx.notify.notify(player, e.notify_key(), &[]).await;
            return DispatchOutcome::Failed;
        }
    };

    if let Err(e) = store.publish(&keys.compute_channel(), &encoded).await {
        ctx.notify.notify(player, e.notify_key(), &[]).await;
        return DispatchOutcome::Failed;
    }

    let response = match poll_for_response(store, keys, &request_id, settings, cancelled).await {
        Some(resp) => resp,
        None => {
            if cancelled.load(Ordering::SeqCst) {
                return DispatchOutcome::Cancelled;
            }
            ctx.notify
                .notify(player, RtpError::ComputeTimeout.notify_key(), &[])
                .await;
            return DispatchOutcome::Failed;
        }
    };

    if !response.ok {
        ctx.notify
            .notify(
                player,
                RtpError::NoSafeLocation {
                    world: response.world.clone(),
                }
                .notify_key(),
                &[],
            )
            .await;
        return DispatchOutcome::Failed;
    }

    let pending = PendingTeleport {
        server: response.server.clone(),
        location: response.location.clone(),
        at_ms: ctx.clock.now_ms(),
        attempts: 0,
    };

    let encoded_pending = match codec::encode(&pending) {
        Ok(encoded) => encoded,
        Err(e) => {
            ctx.notify.notify(player, e.notify_key(), &[]).await;
            return DispatchOutcome::Failed;
        }
    };

    if let Err(e) = store
        .setex(
            &keys.pending(player),
            settings.request_ttl_seconds,
            &encoded_pending,
        )
        .await
    {
        ctx.notify.notify(player, e.notify_key(), &[]).await;
        return DispatchOutcome::Failed;
    }

    // Pending is durable before the switch is requested: the destination
    // can safely assume the record existed at switch time.
    if !ctx.proxy.request_switch(player, &response.server).await {
        let _ = store.del(&keys.pending(player)).await;
        ctx.notify
            .notify(player, RtpError::SwitchRejected.notify_key(), &[])
            .await;
        return DispatchOutcome::Failed;
    }

    DispatchOutcome::Dispatched
}

pub(crate) async fn poll_for_response(
    store: &dyn StoreClient,
    keys: &Keys,
    request_id: &str,
    settings: &RtpSettings,
    cancelled: &Arc<AtomicBool>,
) -> Option<ComputeResponse> {
    let key = keys.resp(request_id);
    let tick = Duration::from_millis(50) * settings.response_poll_interval_ticks();
    let deadline = tokio::time::Instant::now() + Duration::from_secs(settings.request_ttl_seconds);

    loop {
        if cancelled.load(Ordering::SeqCst) || !store.is_running() {
            return None;
        }
        if tokio::time::Instant::now() >= deadline {
            return None;
        }

        match store.get(&key).await {
            Ok(Some(text)) => {
                // First reader deletes it; all subsequent readers see
                // nothing, matching the at-most-one-reader invariant.
                let _ = store.del(&key).await;
                return match codec::decode::<ComputeResponse>(&text) {
                    Ok(resp) => Some(resp),
                    Err(e) => {
                        warn!("poison compute response for {request_id}: {e}");
                        None
                    }
                };
            }
            Ok(None) => {}
            Err(e) => {
                warn!("store read failed while polling for {request_id}: {e}");
            }
        }

        tokio::time::sleep(tick).await;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::collaborators::{Clock, Notifier, PlayerEffects, ProxyConnector, SafeLocationFinder};
    use crate::store::FakeStoreClient;

    struct FixedClock;
    impl Clock for FixedClock {
        fn now_ms(&self) -> i64 {
            1_000
        }
    }

    struct NoopEffects;
    #[async_trait]
    impl PlayerEffects for NoopEffects {
        async fn freeze(&self, _player: Uuid) {}
        async fn unfreeze(&self, _player: Uuid) {}
        async fn preload_chunk(&self, _world: &str, _location: &crate::codec::Location) -> bool {
            true
        }
        async fn teleport(&self, _player: Uuid, _location: &crate::codec::Location) -> bool {
            true
        }
        async fn set_respawn_location(&self, _player: Uuid, _location: &crate::codec::Location) {}
        async fn consume_anchor_charge(&self, _player: Uuid, _location: &crate::codec::Location) -> bool {
            true
        }
    }

    #[derive(Default)]
    struct RecordingNotifier(Mutex<Vec<String>>);
    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn notify(&self, _player: Uuid, message_key: &str, _params: &[(&str, String)]) {
            self.0.lock().unwrap().push(message_key.to_owned());
        }
    }

    struct NoFinder;
    #[async_trait]
    impl SafeLocationFinder for NoFinder {
        async fn find_safe(&self, _world: &str) -> Option<crate::codec::Location> {
            None
        }
    }

    struct AcceptingProxy;
    #[async_trait]
    impl ProxyConnector for AcceptingProxy {
        async fn request_switch(&self, _player: Uuid, _target_server: &str) -> bool {
            true
        }
    }

    fn context(notifier: Arc<RecordingNotifier>) -> RtpContext {
        RtpContext {
            proxy: Arc::new(AcceptingProxy),
            finder: Arc::new(NoFinder),
            notify: notifier,
            effects: Arc::new(NoopEffects),
            clock: Arc::new(FixedClock),
        }
    }

    #[tokio::test]
    async fn timeout_when_no_responder_leaves_no_pending() {
        let store = FakeStoreClient::new();
        let keys = Keys::new("rtp:");
        let mut settings = RtpSettings::default();
        settings.request_ttl_seconds = 1;
        settings.response_poll_interval_ticks = 1;
        let notifier = Arc::new(RecordingNotifier::default());
        let ctx = context(notifier.clone());
        let cancelled = Arc::new(AtomicBool::new(false));

        let outcome = dispatch_remote(
            Uuid::nil(),
            "smp",
            "world",
            &store,
            &keys,
            &settings,
            &ctx,
            &cancelled,
        )
        .await;

        assert_eq!(outcome, DispatchOutcome::Failed);
        assert_eq!(store.get(&keys.pending(Uuid::nil())).await.unwrap(), None);
        assert!(notifier
            .0
            .lock()
            .unwrap()
            .contains(&"errors.compute-timeout".to_string()));
    }

    #[tokio::test]
    async fn happy_path_writes_pending_before_switch_and_deletes_response() {
        let store = Arc::new(FakeStoreClient::new());
        let keys = Keys::new("rtp:");
        let settings = RtpSettings::default();
        let notifier = Arc::new(RecordingNotifier::default());
        let ctx = context(notifier);
        let cancelled = Arc::new(AtomicBool::new(false));

        let request_id_holder: Arc<Mutex<Option<String>>> = Arc::new(Mutex::new(None));
        {
            let store = store.clone();
            let holder = request_id_holder.clone();
            let keys = keys.clone();
            let rx = store.subscribe(&keys.compute_channel());
            tokio::spawn(async move {
                if let Ok(msg) = rx.recv_async().await {
                    let req: ComputeRequest = codec::decode(&msg).unwrap();
                    *holder.lock().unwrap() = Some(req.request_id.clone());
                    let resp = ComputeResponse {
                        request_id: req.request_id,
                        ok: true,
                        server: "smp".into(),
                        world: "world".into(),
                        location: crate::codec::Location::new("world", 1.0, 2.0, 3.0, 0.0, 0.0),
                        error: None,
                    };
                    let key = keys.resp(&req.request_id);
                    store
                        .setex(&key, 10, &codec::encode(&resp).unwrap())
                        .await
                        .unwrap();
                }
            });
        }

        let outcome = dispatch_remote(
            Uuid::nil(),
            "smp",
            "world",
            &*store,
            &keys,
            &settings,
            &ctx,
            &cancelled,
        )
        .await;

        assert_eq!(outcome, DispatchOutcome::Dispatched);
        // resp key was deleted by the poller (the one reader).
        let request_id = request_id_holder.lock().unwrap().clone().unwrap();
        assert_eq!(store.get(&keys.resp(&request_id)).await.unwrap(), None);
    }
}
