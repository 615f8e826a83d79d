//! The join finalizer: on player join, applies any `pending:<uuid>`
//! teleport instruction left by a remote dispatch, then cleans up after
//! itself.
//!
//! Finalize is safe to re-enter: success deletes the pending record, so
//! a crash between teleport and `del` simply re-triggers finalize on
//! the next join, where the teleport becomes a no-op or a harmless
//! re-snap.

use uuid::Uuid;

use crate::codec::{self, PendingTeleport};
use crate::collaborators::RtpContext;
use crate::config::RtpSettings;
use crate::error::RtpError;
use crate::keys::Keys;
use crate::store::StoreClient;

const FREEZE_FAILSAFE: std::time::Duration = std::time::Duration::from_secs(4);

/// Runs the finalizer for `player` on this server. Call from the
/// embedder's join handler; safe to call unconditionally on every join
/// since an absent or foreign pending record is a no-op.
pub async fn finalize_join(
    player: Uuid,
    store: &dyn StoreClient,
    keys: &Keys,
    settings: &RtpSettings,
    ctx: &RtpContext,
) {
    let key = keys.pending(player);

    let Ok(Some(text)) = store.get(&key).await else {
        return;
    };

    let Ok(pending) = codec::decode::<PendingTeleport>(&text) else {
        // Poison record: drop it rather than retry forever.
        let _ = store.del(&key).await;
        return;
    };

    if pending.server != settings.server_name {
        return;
    }

    let now = ctx.clock.now_ms();
    if now - pending.at_ms > settings.request_ttl_seconds as i64 * 1000 {
        let _ = store.del(&key).await;
        return;
    }

    if !ctx.finder.world_exists(&pending.location.world).await {
        let world = pending.location.world.clone();
        bump_or_delete(store, &key, pending, settings).await;
        ctx.notify
            .notify(player, RtpError::UnknownWorld { world }.notify_key(), &[])
            .await;
        return;
    }

    let (min_height, max_height) = ctx.finder.height_bounds(&pending.location.world).await;
    let location = pending.location.clone().clamped(min_height, max_height);

    ctx.effects.freeze(player).await;

    // Unconditional failsafe: whatever happens below, unfreeze within
    // four seconds even if the embedder never calls back again.
    let failsafe_player = player;
    let failsafe_effects = ctx.effects.clone();
    tokio::spawn(async move {
        tokio::time::sleep(FREEZE_FAILSAFE).await;
        failsafe_effects.unfreeze(failsafe_player).await;
    });

    let preloaded = ctx.effects.preload_chunk(&pending.location.world, &location).await;
    if !preloaded {
        let world = pending.location.world.clone();
        let exhausted = bump_or_delete(store, &key, pending, settings).await;
        ctx.effects.unfreeze(player).await;
        ctx.notify
            .notify(player, finalize_failure_key(exhausted, world), &[])
            .await;
        return;
    }

    if !ctx.effects.teleport(player, &location).await {
        let world = pending.location.world.clone();
        let exhausted = bump_or_delete(store, &key, pending, settings).await;
        ctx.effects.unfreeze(player).await;
        ctx.notify
            .notify(player, finalize_failure_key(exhausted, world), &[])
            .await;
        return;
    }

    let _ = store.del(&key).await;
    ctx.effects.unfreeze(player).await;
    ctx.notify
        .notify(player, "success.teleported", &[("world", location.world.clone())])
        .await;
}

fn finalize_failure_key(exhausted: bool, world: String) -> &'static str {
    if exhausted {
        RtpError::FinalizeAttemptsExhausted.notify_key()
    } else {
        RtpError::NoSafeLocation { world }.notify_key()
    }
}

/// On failure, bumps the retry counter and rewrites the record, or
/// deletes it once the configured attempt budget is exhausted. Returns
/// `true` if the attempt budget was exhausted and the record was deleted.
async fn bump_or_delete(
    store: &dyn StoreClient,
    key: &str,
    mut pending: PendingTeleport,
    settings: &RtpSettings,
) -> bool {
    pending.attempts += 1;
    if pending.attempts >= settings.pending_max_finalize_attempts {
        let _ = store.del(key).await;
        return true;
    }
    if let Ok(encoded) = codec::encode(&pending) {
        let _ = store
            .setex(key, settings.request_ttl_seconds, &encoded)
            .await;
    }
    false
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use super::*;
    use crate::codec::Location;
    use crate::collaborators::{Clock, Notifier, PlayerEffects, ProxyConnector, SafeLocationFinder};
    use crate::store::FakeStoreClient;

    struct FixedClock(i64);
    impl Clock for FixedClock {
        fn now_ms(&self) -> i64 {
            self.0
        }
    }

    struct NoopProxy;
    #[async_trait]
    impl ProxyConnector for NoopProxy {
        async fn request_switch(&self, _player: Uuid, _target_server: &str) -> bool {
            true
        }
    }

    struct NoFinder;
    #[async_trait]
    impl SafeLocationFinder for NoFinder {
        async fn find_safe(&self, _world: &str) -> Option<Location> {
            None
        }
    }

    struct DenyWorldFinder;
    #[async_trait]
    impl SafeLocationFinder for DenyWorldFinder {
        async fn find_safe(&self, _world: &str) -> Option<Location> {
            None
        }
        async fn world_exists(&self, _world: &str) -> bool {
            false
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

    struct CountingEffects {
        preload_ok: bool,
        teleport_ok: bool,
        freezes: AtomicUsize,
        unfreezes: AtomicUsize,
        teleports: Mutex<Vec<Location>>,
    }

    impl CountingEffects {
        fn new(preload_ok: bool, teleport_ok: bool) -> Self {
            Self {
                preload_ok,
                teleport_ok,
                freezes: AtomicUsize::new(0),
                unfreezes: AtomicUsize::new(0),
                teleports: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl PlayerEffects for CountingEffects {
        async fn freeze(&self, _player: Uuid) {
            self.freezes.fetch_add(1, Ordering::SeqCst);
        }
        async fn unfreeze(&self, _player: Uuid) {
            self.unfreezes.fetch_add(1, Ordering::SeqCst);
        }
        async fn preload_chunk(&self, _world: &str, _location: &Location) -> bool {
            self.preload_ok
        }
        async fn teleport(&self, _player: Uuid, location: &Location) -> bool {
            self.teleports.lock().unwrap().push(location.clone());
            self.teleport_ok
        }
        async fn set_respawn_location(&self, _player: Uuid, _location: &Location) {}
        async fn consume_anchor_charge(&self, _player: Uuid, _location: &Location) -> bool {
            true
        }
    }

    fn context(effects: Arc<CountingEffects>, notifier: Arc<RecordingNotifier>, now: i64) -> RtpContext {
        RtpContext {
            proxy: Arc::new(NoopProxy),
            finder: Arc::new(NoFinder),
            notify: notifier,
            effects,
            clock: Arc::new(FixedClock(now)),
        }
    }

    fn sample_pending(server: &str, at_ms: i64) -> PendingTeleport {
        PendingTeleport {
            server: server.to_owned(),
            location: Location::new("world", 50.0, 400.0, 50.0, 0.0, 120.0),
            at_ms,
            attempts: 0,
        }
    }

    #[tokio::test]
    async fn absent_pending_is_a_noop() {
        let store = FakeStoreClient::new();
        let keys = Keys::new("rtp:");
        let settings = RtpSettings::default();
        let effects = Arc::new(CountingEffects::new(true, true));
        let notifier = Arc::new(RecordingNotifier::default());
        let ctx = context(effects.clone(), notifier, 0);

        finalize_join(Uuid::nil(), &store, &keys, &settings, &ctx).await;

        assert_eq!(effects.freezes.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn foreign_server_pending_is_ignored() {
        let store = FakeStoreClient::new();
        let keys = Keys::new("rtp:");
        let mut settings = RtpSettings::default();
        settings.server_name = "smp".into();
        let pending = sample_pending("hub", 0);
        store
            .setex(&keys.pending(Uuid::nil()), 10, &codec::encode(&pending).unwrap())
            .await
            .unwrap();
        let effects = Arc::new(CountingEffects::new(true, true));
        let notifier = Arc::new(RecordingNotifier::default());
        let ctx = context(effects.clone(), notifier, 0);

        finalize_join(Uuid::nil(), &store, &keys, &settings, &ctx).await;

        assert_eq!(effects.freezes.load(Ordering::SeqCst), 0);
        // Left untouched for whichever server it actually names.
        assert!(store.get(&keys.pending(Uuid::nil())).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn stale_pending_is_deleted_without_teleport() {
        let store = FakeStoreClient::new();
        let keys = Keys::new("rtp:");
        let mut settings = RtpSettings::default();
        settings.server_name = "smp".into();
        settings.request_ttl_seconds = 10;
        let pending = sample_pending("smp", 0);
        store
            .setex(&keys.pending(Uuid::nil()), 10, &codec::encode(&pending).unwrap())
            .await
            .unwrap();
        let effects = Arc::new(CountingEffects::new(true, true));
        let notifier = Arc::new(RecordingNotifier::default());
        // now - at_ms = 20_000ms > ttl(10s)*1000
        let ctx = context(effects.clone(), notifier, 20_000);

        finalize_join(Uuid::nil(), &store, &keys, &settings, &ctx).await;

        assert_eq!(effects.freezes.load(Ordering::SeqCst), 0);
        assert_eq!(store.get(&keys.pending(Uuid::nil())).await.unwrap(), None);
    }

    #[tokio::test]
    async fn successful_finalize_clamps_location_and_cleans_up() {
        let store = FakeStoreClient::new();
        let keys = Keys::new("rtp:");
        let mut settings = RtpSettings::default();
        settings.server_name = "smp".into();
        let pending = sample_pending("smp", 0);
        store
            .setex(&keys.pending(Uuid::nil()), 10, &codec::encode(&pending).unwrap())
            .await
            .unwrap();
        let effects = Arc::new(CountingEffects::new(true, true));
        let notifier = Arc::new(RecordingNotifier::default());
        let ctx = context(effects.clone(), notifier.clone(), 0);

        finalize_join(Uuid::nil(), &store, &keys, &settings, &ctx).await;

        assert_eq!(store.get(&keys.pending(Uuid::nil())).await.unwrap(), None);
        assert_eq!(effects.freezes.load(Ordering::SeqCst), 1);
        assert_eq!(effects.unfreezes.load(Ordering::SeqCst), 1);
        let teleported = effects.teleports.lock().unwrap()[0].clone();
        assert_eq!(teleported.y, 318.0);
        assert_eq!(teleported.pitch, 90.0);
        assert!(notifier.0.lock().unwrap().contains(&"success.teleported".to_string()));
    }

    #[tokio::test]
    async fn failed_teleport_bumps_attempts_and_unfreezes() {
        let store = FakeStoreClient::new();
        let keys = Keys::new("rtp:");
        let mut settings = RtpSettings::default();
        settings.server_name = "smp".into();
        settings.pending_max_finalize_attempts = 3;
        let pending = sample_pending("smp", 0);
        store
            .setex(&keys.pending(Uuid::nil()), 10, &codec::encode(&pending).unwrap())
            .await
            .unwrap();
        let effects = Arc::new(CountingEffects::new(true, false));
        let notifier = Arc::new(RecordingNotifier::default());
        let ctx = context(effects.clone(), notifier, 0);

        finalize_join(Uuid::nil(), &store, &keys, &settings, &ctx).await;

        assert_eq!(effects.unfreezes.load(Ordering::SeqCst), 1);
        let text = store.get(&keys.pending(Uuid::nil())).await.unwrap().unwrap();
        let bumped: PendingTeleport = codec::decode(&text).unwrap();
        assert_eq!(bumped.attempts, 1);
    }

    #[tokio::test]
    async fn unknown_world_notifies_distinctly_and_skips_teleport() {
        let store = FakeStoreClient::new();
        let keys = Keys::new("rtp:");
        let mut settings = RtpSettings::default();
        settings.server_name = "smp".into();
        settings.pending_max_finalize_attempts = 3;
        let pending = sample_pending("smp", 0);
        store
            .setex(&keys.pending(Uuid::nil()), 10, &codec::encode(&pending).unwrap())
            .await
            .unwrap();
        let effects = Arc::new(CountingEffects::new(true, true));
        let notifier = Arc::new(RecordingNotifier::default());
        let ctx = RtpContext {
            proxy: Arc::new(NoopProxy),
            finder: Arc::new(DenyWorldFinder),
            notify: notifier.clone(),
            effects: effects.clone(),
            clock: Arc::new(FixedClock(0)),
        };

        finalize_join(Uuid::nil(), &store, &keys, &settings, &ctx).await;

        // Never froze the player: the world check runs before the freeze.
        assert_eq!(effects.freezes.load(Ordering::SeqCst), 0);
        assert_eq!(effects.teleports.lock().unwrap().len(), 0);
        let text = store.get(&keys.pending(Uuid::nil())).await.unwrap().unwrap();
        let bumped: PendingTeleport = codec::decode(&text).unwrap();
        assert_eq!(bumped.attempts, 1);
        assert!(notifier
            .0
            .lock()
            .unwrap()
            .contains(&"errors.unknown-world".to_string()));
    }

    #[tokio::test]
    async fn exhausted_attempts_delete_pending() {
        let store = FakeStoreClient::new();
        let keys = Keys::new("rtp:");
        let mut settings = RtpSettings::default();
        settings.server_name = "smp".into();
        settings.pending_max_finalize_attempts = 1;
        let pending = sample_pending("smp", 0);
        store
            .setex(&keys.pending(Uuid::nil()), 10, &codec::encode(&pending).unwrap())
            .await
            .unwrap();
        let effects = Arc::new(CountingEffects::new(false, true));
        let notifier = Arc::new(RecordingNotifier::default());
        let ctx = context(effects.clone(), notifier, 0);

        finalize_join(Uuid::nil(), &store, &keys, &settings, &ctx).await;

        assert_eq!(store.get(&keys.pending(Uuid::nil())).await.unwrap(), None);
    }
}
