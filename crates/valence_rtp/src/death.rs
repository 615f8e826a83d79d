//! The death and respawn pipeline: pre-decides at death time what
//! will happen on respawn, so remote compute happens while the death
//! screen hides the latency instead of flashing the player to local
//! spawn and then recomputing.

use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use bevy_ecs::prelude::*;
use rand::Rng;
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tracing::warn;
use uuid::Uuid;

use crate::codec::{self, Location, PendingTeleport, SpawnPoint, TimestampMs};
use crate::collaborators::RtpContext;
use crate::config::{FallbackMode, RtpSettings};
use crate::dispatch;
use crate::keys::Keys;
use crate::store::StoreClient;

/// A warm local-candidate cache entry is only reused within this window.
const LOCAL_CACHE_MAX_AGE_MS: i64 = 45_000;
/// A [`DeathPlan`] is only applied if respawn happens within this window.
const PLAN_MAX_AGE_MS: i64 = 15_000;
/// Cached shared bed/anchor spawn points expire this many milliseconds
/// after death if unused.
const SPAWN_CACHE_TTL_MS: i64 = 20_000;
/// How long the respawn handler waits on an in-flight remote plan before
/// falling back to the local-only path.
const REMOTE_WAIT_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(2);
/// Poll interval while waiting on the remote plan future: "every 2 ticks".
const REMOTE_POLL_INTERVAL: std::time::Duration = std::time::Duration::from_millis(100);

/// The dimension a player died in, used by target-world selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathWorldKind {
    Normal,
    Nether,
    End,
}

/// What caused a shared spawn point to be set, used only to decide
/// whether an anchor charge should be consumed on application; the
/// record on the wire tolerates not knowing, since older or foreign
/// writers may not tag it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnCause {
    Bed,
    Anchor,
    Unknown,
}

/// Sent by the embedder when the host exposes a native "player spawn
/// set" event; otherwise the embedder calls [`record_spawn_point`]
/// directly from its own bed-enter / anchor-interact listeners.
#[derive(Event, Debug, Clone)]
pub struct SpawnSetEvent {
    pub player: Uuid,
    pub cause: SpawnCause,
    pub location: Location,
}

/// Dispatched by the embedder on player death.
#[derive(Debug, Clone)]
pub struct DeathEvent {
    pub player: Uuid,
    pub world: String,
    pub kind: DeathWorldKind,
}

/// Dispatched by the embedder just before vanilla respawn-location
/// resolution runs, so the pipeline can override it.
#[derive(Debug, Clone, Copy)]
pub struct RespawnRequest {
    pub player: Uuid,
    /// True if the host is about to honor a local bed/anchor respawn on
    /// this tick (i.e. the player has one set on this server).
    pub local_bed_or_anchor_respawn: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RespawnOutcome {
    /// Nothing touched; the host's own bed/anchor/world-spawn logic
    /// applies unmodified.
    Deferred,
    /// [`PlayerEffects::set_respawn_location`] was called; no teleport.
    SetLocally,
    /// `pending` was written and a proxy switch requested; the
    /// destination's Join Finalizer takes over from here.
    SwitchRequested,
    /// Nothing matched in time; the caller should start a normal local
    /// attempt as a last resort.
    FallbackToLocalAttempt,
}

enum RespawnTarget {
    Local(String),
    Remote(String),
}

/// Pure target-world selection: force the configured overworld out of
/// the nether/end, else keep the death world if it's enabled locally,
/// else fall back to a configured remote server.
fn select_respawn_target(
    death_world: &str,
    kind: DeathWorldKind,
    settings: &RtpSettings,
) -> Option<RespawnTarget> {
    let local_cfg = settings.servers.get(&settings.server_name);

    if matches!(kind, DeathWorldKind::Nether | DeathWorldKind::End) {
        if let Some(cfg) = local_cfg {
            if !cfg.default_world.is_empty() {
                return Some(RespawnTarget::Local(cfg.default_world.clone()));
            }
        }
    }

    let enabled_locally = local_cfg
        .and_then(|cfg| cfg.worlds.get(death_world))
        .map_or(true, |w| w.enabled);

    if enabled_locally {
        return Some(RespawnTarget::Local(death_world.to_owned()));
    }

    pick_fallback_server(settings)
}

fn pick_fallback_server(settings: &RtpSettings) -> Option<RespawnTarget> {
    let candidates: Vec<&String> = settings
        .fallback_enabled_servers
        .iter()
        .filter(|name| {
            settings
                .servers
                .get(*name)
                .map_or(true, |cfg| cfg.enabled)
        })
        .collect();

    if candidates.is_empty() {
        return None;
    }

    let chosen = match settings.fallback_mode {
        FallbackMode::First => candidates[0],
        FallbackMode::Random => candidates[rand::thread_rng().gen_range(0..candidates.len())],
    };

    Some(RespawnTarget::Remote(chosen.clone()))
}

enum PlanSlot {
    Local(Mutex<Option<Location>>),
    Remote {
        server: String,
        rx: Mutex<Option<oneshot::Receiver<Option<PendingTeleport>>>>,
    },
}

/// A pre-computed local or remote respawn destination, built at death
/// time and applied (or discarded, if stale) at respawn time.
pub struct DeathPlan {
    created_at_ms: TimestampMs,
    slot: PlanSlot,
}

/// At most one live plan per player; a new death replaces any prior one
/// outright (the old plan's background tasks simply finish and are
/// dropped along with the stale `Arc`).
#[derive(Resource, Default)]
pub struct PlanTable {
    plans: HashMap<Uuid, Arc<DeathPlan>>,
}

impl PlanTable {
    pub fn clear(&mut self, player: Uuid) {
        self.plans.remove(&player);
    }

    fn insert(&mut self, player: Uuid, plan: Arc<DeathPlan>) {
        self.plans.insert(player, plan);
    }

    fn get(&self, player: Uuid) -> Option<Arc<DeathPlan>> {
        self.plans.get(&player).cloned()
    }
}

struct CacheEntry<T> {
    value: T,
    at_ms: TimestampMs,
}

/// Warm per-world safe-location candidates, reused by the next death's
/// local plan if still fresh. Each entry is an immutable snapshot plus
/// the timestamp it was taken at.
#[derive(Resource, Default)]
pub struct SafeLocationCache {
    entries: Mutex<HashMap<String, CacheEntry<Location>>>,
}

impl SafeLocationCache {
    pub fn get_fresh(&self, world: &str, now_ms: TimestampMs) -> Option<Location> {
        let entries = self.entries.lock().unwrap();
        entries.get(world).and_then(|e| {
            (now_ms - e.at_ms <= LOCAL_CACHE_MAX_AGE_MS).then(|| e.value.clone())
        })
    }

    pub fn put(&self, world: &str, location: Location, now_ms: TimestampMs) {
        self.entries.lock().unwrap().insert(
            world.to_owned(),
            CacheEntry {
                value: location,
                at_ms: now_ms,
            },
        );
    }
}

/// Per-player cache of the shared bed/anchor spawn point, populated
/// asynchronously at death time so the respawn handler never blocks on
/// the store.
#[derive(Resource, Default)]
pub struct SharedSpawnCache {
    entries: Mutex<HashMap<Uuid, CacheEntry<SpawnPoint>>>,
}

impl SharedSpawnCache {
    pub fn get_fresh(&self, player: Uuid, now_ms: TimestampMs) -> Option<SpawnPoint> {
        let entries = self.entries.lock().unwrap();
        entries.get(&player).and_then(|e| {
            (now_ms - e.at_ms <= SPAWN_CACHE_TTL_MS).then(|| e.value.clone())
        })
    }

    pub fn put(&self, player: Uuid, point: SpawnPoint, now_ms: TimestampMs) {
        self.entries.lock().unwrap().insert(
            player,
            CacheEntry {
                value: point,
                at_ms: now_ms,
            },
        );
    }

    pub fn clear(&self, player: Uuid) {
        self.entries.lock().unwrap().remove(&player);
    }
}

/// Writes `spawn:<uuid>` when a bed is entered or an anchor is
/// right-clicked with at least one charge.
pub async fn record_spawn_point(
    store: &dyn StoreClient,
    keys: &Keys,
    player: Uuid,
    server_name: &str,
    location: &Location,
    now_ms: TimestampMs,
) {
    const SPAWN_POINT_TTL_SECONDS: u64 = 30 * 24 * 3600;

    let point = SpawnPoint {
        server: server_name.to_owned(),
        location: location.clone(),
        at_ms: now_ms,
    };
    let Ok(encoded) = codec::encode(&point) else {
        return;
    };
    let _ = store
        .setex(&keys.spawn(player), SPAWN_POINT_TTL_SECONDS, &encoded)
        .await;
}

/// Clears `spawn:<uuid>` when a bed/anchor is destroyed or an anchor's
/// charges reach zero. Per invariant 5, only the backend whose `server`
/// field matches may clear it; `expected_location` lets a caller that
/// can't trust `server_name` (e.g. after a rename) fall back to a
/// best-effort world+coordinates match.
pub async fn clear_spawn_point(
    store: &dyn StoreClient,
    keys: &Keys,
    player: Uuid,
    server_name: &str,
    expected_location: Option<&Location>,
) {
    let Ok(Some(text)) = store.get(&keys.spawn(player)).await else {
        return;
    };
    let Ok(point) = codec::decode::<SpawnPoint>(&text) else {
        let _ = store.del(&keys.spawn(player)).await;
        return;
    };

    let server_matches = point.server == server_name;
    let location_matches = expected_location.is_some_and(|loc| {
        loc.world == point.location.world
            && (loc.x - point.location.x).abs() < 1.0
            && (loc.y - point.location.y).abs() < 1.0
            && (loc.z - point.location.z).abs() < 1.0
    });

    if server_matches || location_matches {
        let _ = store.del(&keys.spawn(player)).await;
    }
}

/// Handles one [`DeathEvent`]: replaces any prior plan, optionally warms
/// the shared-spawn cache, and (if random-teleport-respawn is enabled)
/// kicks off a local or remote plan in the background. Returns
/// immediately; the plan fills in asynchronously.
#[allow(clippy::too_many_arguments)]
pub fn handle_death(
    event: DeathEvent,
    handle: &Handle,
    store: Arc<dyn StoreClient>,
    keys: Arc<Keys>,
    settings: RtpSettings,
    ctx: RtpContext,
    plans: &mut PlanTable,
    spawn_cache: Arc<SharedSpawnCache>,
    safe_cache: Arc<SafeLocationCache>,
) {
    plans.clear(event.player);

    if settings.spawning.cross_server_respawn && store.is_running() {
        let store = store.clone();
        let keys = keys.clone();
        let ctx = ctx.clone();
        let spawn_cache = spawn_cache.clone();
        let player = event.player;
        handle.spawn(async move {
            if let Ok(Some(text)) = store.get(&keys.spawn(player)).await {
                match codec::decode::<SpawnPoint>(&text) {
                    Ok(point) => spawn_cache.put(player, point, ctx.clock.now_ms()),
                    Err(e) => warn!("poison shared spawn point for {player}: {e}"),
                }
            }
        });
    }

    if !settings.spawning.random_teleport_respawn {
        return;
    }

    let Some(target) = select_respawn_target(&event.world, event.kind, &settings) else {
        return;
    };

    let now = ctx.clock.now_ms();

    match target {
        RespawnTarget::Local(world) => {
            let cached = safe_cache.get_fresh(&world, now);
            let plan = Arc::new(DeathPlan {
                created_at_ms: now,
                slot: PlanSlot::Local(Mutex::new(cached)),
            });
            plans.insert(event.player, plan.clone());

            let finder = ctx.finder.clone();
            let clock = ctx.clock.clone();
            let safe_cache = safe_cache.clone();
            handle.spawn(async move {
                if let Some(loc) = finder.find_safe(&world).await {
                    safe_cache.put(&world, loc.clone(), clock.now_ms());
                    let PlanSlot::Local(slot) = &plan.slot else {
                        return;
                    };
                    *slot.lock().unwrap() = Some(loc);
                }
            });
        }
        RespawnTarget::Remote(server) => {
            let (tx, rx) = oneshot::channel();
            plans.insert(
                event.player,
                Arc::new(DeathPlan {
                    created_at_ms: now,
                    slot: PlanSlot::Remote {
                        server: server.clone(),
                        rx: Mutex::new(Some(rx)),
                    },
                }),
            );

            let player = event.player;
            let world = event.world.clone();
            handle.spawn(async move {
                let result =
                    run_remote_plan(player, &server, &world, &*store, &keys, &settings, &ctx)
                        .await;
                let _ = tx.send(result);
            });
        }
    }
}

/// Publishes a compute request, polls for the response, and pre-writes
/// `pending` on success — identical shape to [`dispatch::dispatch_remote`]
/// minus the proxy switch, which only happens once the player actually
/// respawns.
async fn run_remote_plan(
    player: Uuid,
    target_server: &str,
    world: &str,
    store: &dyn StoreClient,
    keys: &Keys,
    settings: &RtpSettings,
    ctx: &RtpContext,
) -> Option<PendingTeleport> {
    if !store.is_running() {
        return None;
    }

    let request_id = dispatch::generate_request_id();
    let request = codec::ComputeRequest {
        request_id: request_id.clone(),
        player_uuid: player,
        target_server: target_server.to_owned(),
        world: world.to_owned(),
        created_at_ms: ctx.clock.now_ms(),
    };

    let encoded = codec::encode(&request).ok()?;
    store
        .publish(&keys.compute_channel(), &encoded)
        .await
        .ok()?;

    // The death pipeline's plan never gets cancelled mid-flight by a
    // movement monitor; it only stops being useful once the respawn
    // handler gives up waiting on it.
    let never_cancelled = Arc::new(AtomicBool::new(false));
    let response =
        dispatch::poll_for_response(store, keys, &request_id, settings, &never_cancelled).await?;

    if !response.ok {
        return None;
    }

    let pending = PendingTeleport {
        server: response.server.clone(),
        location: response.location.clone(),
        at_ms: ctx.clock.now_ms(),
        attempts: 0,
    };
    let encoded_pending = codec::encode(&pending).ok()?;
    store
        .setex(
            &keys.pending(player),
            settings.request_ttl_seconds,
            &encoded_pending,
        )
        .await
        .ok()?;

    Some(pending)
}

/// Polls the remote plan's future every 2 ticks for up to 2 seconds.
/// `None` means the deadline passed or the sender was dropped; the
/// caller must fall back to the local-only path and must never start a
/// fresh remote compute from here.
async fn wait_for_remote(
    rx: &Mutex<Option<oneshot::Receiver<Option<PendingTeleport>>>>,
) -> Option<Option<PendingTeleport>> {
    let mut receiver = rx.lock().unwrap().take()?;
    let deadline = tokio::time::Instant::now() + REMOTE_WAIT_TIMEOUT;

    loop {
        match receiver.try_recv() {
            Ok(value) => return Some(value),
            Err(oneshot::error::TryRecvError::Closed) => return None,
            Err(oneshot::error::TryRecvError::Empty) => {}
        }
        if tokio::time::Instant::now() >= deadline {
            return None;
        }
        tokio::time::sleep(REMOTE_POLL_INTERVAL).await;
    }
}

/// Handles one [`RespawnRequest`]: applies the shared spawn cache, then
/// a fresh [`DeathPlan`], then defers to the caller's own local-attempt
/// fallback, in that priority order.
pub async fn handle_respawn(
    req: RespawnRequest,
    store: &dyn StoreClient,
    keys: &Keys,
    settings: &RtpSettings,
    ctx: &RtpContext,
    plans: &mut PlanTable,
    spawn_cache: &SharedSpawnCache,
) -> RespawnOutcome {
    if settings.spawning.always_spawn_at_spawn {
        plans.clear(req.player);
        spawn_cache.clear(req.player);
        return RespawnOutcome::Deferred;
    }

    if req.local_bed_or_anchor_respawn
        && (settings.spawning.respect_bed_spawn || settings.spawning.respect_anchor_spawn)
    {
        return RespawnOutcome::Deferred;
    }

    // Cross-server shared spawn routing only runs with both bed and
    // anchor respect enabled, since an untyped record can't otherwise
    // tell which policy should gate it.
    if settings.spawning.respect_bed_spawn && settings.spawning.respect_anchor_spawn {
        if let Some(point) = spawn_cache.get_fresh(req.player, ctx.clock.now_ms()) {
            spawn_cache.clear(req.player);
            if point.server == settings.server_name {
                ctx.effects
                    .set_respawn_location(req.player, &point.location)
                    .await;
                ctx.effects.consume_anchor_charge(req.player, &point.location).await;
                return RespawnOutcome::SetLocally;
            }

            ctx.effects.freeze(req.player).await;

            let pending = PendingTeleport {
                server: point.server.clone(),
                location: point.location.clone(),
                at_ms: ctx.clock.now_ms(),
                attempts: 0,
            };
            if let Ok(encoded) = codec::encode(&pending) {
                let _ = store
                    .setex(
                        &keys.pending(req.player),
                        settings.request_ttl_seconds,
                        &encoded,
                    )
                    .await;
            }

            let switched = ctx.proxy.request_switch(req.player, &point.server).await;
            ctx.effects.unfreeze(req.player).await;

            if switched {
                return RespawnOutcome::SwitchRequested;
            }
            let _ = store.del(&keys.pending(req.player)).await;
            return RespawnOutcome::FallbackToLocalAttempt;
        }
    }

    if let Some(plan) = plans.get(req.player) {
        let fresh = ctx.clock.now_ms() - plan.created_at_ms <= PLAN_MAX_AGE_MS;
        plans.clear(req.player);

        if fresh {
            match &plan.slot {
                PlanSlot::Local(slot) => {
                    let location = slot.lock().unwrap().clone();
                    if let Some(location) = location {
                        ctx.effects.set_respawn_location(req.player, &location).await;
                        return RespawnOutcome::SetLocally;
                    }
                }
                PlanSlot::Remote { rx, .. } => {
                    ctx.effects.freeze(req.player).await;
                    let resolved = wait_for_remote(rx).await;
                    ctx.effects.unfreeze(req.player).await;

                    if let Some(Some(pending)) = resolved {
                        let switched = ctx.proxy.request_switch(req.player, &pending.server).await;
                        if switched {
                            return RespawnOutcome::SwitchRequested;
                        }
                        let _ = store.del(&keys.pending(req.player)).await;
                    }
                    // Timed out or resolved to nothing: fall through to
                    // the local-only path. A fresh remote compute is
                    // never started from the respawn handler itself.
                }
            }
        }
    }

    RespawnOutcome::FallbackToLocalAttempt
}

/// Drains [`SpawnSetEvent`]s and records each one, spawned onto the
/// tokio runtime so the game-thread `PreUpdate` system never blocks on
/// the store. Scheduled alongside other bookkeeping in `PreUpdate`.
pub fn apply_spawn_set_events(
    mut events: EventReader<SpawnSetEvent>,
    store: Res<crate::RtpStoreHandle>,
    keys: Res<crate::RtpKeysHandle>,
    settings: Res<RtpSettings>,
    runtime: Res<crate::RtpRuntimeHandle>,
) {
    for event in events.read() {
        let store = store.0.clone();
        let keys = keys.0.clone();
        let server_name = settings.server_name.clone();
        let player = event.player;
        let location = event.location.clone();
        runtime.0.spawn(async move {
            record_spawn_point(&*store, &keys, player, &server_name, &location, now_ms())
                .await;
        });
    }
}

fn now_ms() -> TimestampMs {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as TimestampMs)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration as StdDuration;

    use async_trait::async_trait;

    use super::*;
    use crate::collaborators::{Clock, Notifier, PlayerEffects, ProxyConnector, SafeLocationFinder};
    use crate::config::{ServerConfig, WorldConfig};
    use crate::store::FakeStoreClient;

    struct FixedClock(std::sync::atomic::AtomicI64);
    impl Clock for FixedClock {
        fn now_ms(&self) -> i64 {
            self.0.load(Ordering::SeqCst)
        }
    }

    struct NoopNotifier;
    #[async_trait]
    impl Notifier for NoopNotifier {
        async fn notify(&self, _player: Uuid, _message_key: &str, _params: &[(&str, String)]) {}
    }

    struct AcceptingProxy(AtomicUsize);
    #[async_trait]
    impl ProxyConnector for AcceptingProxy {
        async fn request_switch(&self, _player: Uuid, _target_server: &str) -> bool {
            self.0.fetch_add(1, Ordering::SeqCst);
            true
        }
    }

    struct FixedFinder(Option<Location>);
    #[async_trait]
    impl SafeLocationFinder for FixedFinder {
        async fn find_safe(&self, world: &str) -> Option<Location> {
            self.0.clone().map(|mut l| {
                l.world = world.to_owned();
                l
            })
        }
    }

    #[derive(Default)]
    struct RecordingEffects {
        respawn_sets: Mutex<Vec<Location>>,
        freezes: AtomicUsize,
        unfreezes: AtomicUsize,
        anchor_consumes: AtomicUsize,
    }
    #[async_trait]
    impl PlayerEffects for RecordingEffects {
        async fn freeze(&self, _player: Uuid) {
            self.freezes.fetch_add(1, Ordering::SeqCst);
        }
        async fn unfreeze(&self, _player: Uuid) {
            self.unfreezes.fetch_add(1, Ordering::SeqCst);
        }
        async fn preload_chunk(&self, _world: &str, _location: &Location) -> bool {
            true
        }
        async fn teleport(&self, _player: Uuid, _location: &Location) -> bool {
            true
        }
        async fn set_respawn_location(&self, _player: Uuid, location: &Location) {
            self.respawn_sets.lock().unwrap().push(location.clone());
        }
        async fn consume_anchor_charge(&self, _player: Uuid, _location: &Location) -> bool {
            self.anchor_consumes.fetch_add(1, Ordering::SeqCst);
            true
        }
    }

    fn context(
        finder_loc: Option<Location>,
        effects: Arc<RecordingEffects>,
        proxy: Arc<AcceptingProxy>,
        now: i64,
    ) -> RtpContext {
        RtpContext {
            proxy,
            finder: Arc::new(FixedFinder(finder_loc)),
            notify: Arc::new(NoopNotifier),
            effects,
            clock: Arc::new(FixedClock(std::sync::atomic::AtomicI64::new(now))),
        }
    }

    fn sample_location() -> Location {
        Location::new("world", 10.0, 64.0, 10.0, 0.0, 0.0)
    }

    #[test]
    fn nether_death_forces_configured_overworld() {
        let mut settings = RtpSettings::default();
        settings.server_name = "smp".into();
        settings.servers.insert(
            "smp".into(),
            ServerConfig {
                enabled: true,
                default_world: "world".into(),
                worlds: HashMap::new(),
            },
        );

        let target = select_respawn_target("world_nether", DeathWorldKind::Nether, &settings);
        assert!(matches!(target, Some(RespawnTarget::Local(w)) if w == "world"));
    }

    #[test]
    fn overworld_death_keeps_world_when_enabled_locally() {
        let settings = RtpSettings::default();
        let target = select_respawn_target("world", DeathWorldKind::Normal, &settings);
        assert!(matches!(target, Some(RespawnTarget::Local(w)) if w == "world"));
    }

    #[test]
    fn disabled_world_falls_back_to_first_configured_server() {
        let mut settings = RtpSettings::default();
        settings.server_name = "smp".into();
        let mut worlds = HashMap::new();
        worlds.insert("world".into(), WorldConfig { enabled: false });
        settings.servers.insert(
            "smp".into(),
            ServerConfig {
                enabled: true,
                default_world: String::new(),
                worlds,
            },
        );
        settings.fallback_enabled_servers = vec!["hub".into(), "lobby".into()];
        settings.fallback_mode = FallbackMode::First;

        let target = select_respawn_target("world", DeathWorldKind::Normal, &settings);
        assert!(matches!(target, Some(RespawnTarget::Remote(s)) if s == "hub"));
    }

    #[test]
    fn no_eligible_target_returns_none() {
        let mut settings = RtpSettings::default();
        settings.server_name = "smp".into();
        let mut worlds = HashMap::new();
        worlds.insert("world".into(), WorldConfig { enabled: false });
        settings.servers.insert(
            "smp".into(),
            ServerConfig {
                enabled: true,
                default_world: String::new(),
                worlds,
            },
        );

        let target = select_respawn_target("world", DeathWorldKind::Normal, &settings);
        assert!(target.is_none());
    }

    #[tokio::test]
    async fn death_with_random_teleport_disabled_builds_no_plan() {
        let store: Arc<dyn StoreClient> = Arc::new(FakeStoreClient::new());
        let keys = Arc::new(Keys::new("rtp:"));
        let mut settings = RtpSettings::default();
        settings.spawning.random_teleport_respawn = false;
        let effects = Arc::new(RecordingEffects::default());
        let proxy = Arc::new(AcceptingProxy(AtomicUsize::new(0)));
        let ctx = context(Some(sample_location()), effects, proxy, 0);
        let mut plans = PlanTable::default();
        let spawn_cache = Arc::new(SharedSpawnCache::default());
        let safe_cache = Arc::new(SafeLocationCache::default());

        handle_death(
            DeathEvent {
                player: Uuid::nil(),
                world: "world".into(),
                kind: DeathWorldKind::Normal,
            },
            &Handle::current(),
            store,
            keys,
            settings,
            ctx,
            &mut plans,
            spawn_cache,
            safe_cache,
        );

        assert!(plans.get(Uuid::nil()).is_none());
    }

    #[tokio::test]
    async fn local_plan_fills_in_and_applies_on_respawn() {
        let store: Arc<dyn StoreClient> = Arc::new(FakeStoreClient::new());
        let keys = Arc::new(Keys::new("rtp:"));
        let mut settings = RtpSettings::default();
        settings.spawning.random_teleport_respawn = true;
        let effects = Arc::new(RecordingEffects::default());
        let proxy = Arc::new(AcceptingProxy(AtomicUsize::new(0)));
        let ctx = context(Some(sample_location()), effects.clone(), proxy, 0);
        let mut plans = PlanTable::default();
        let spawn_cache = Arc::new(SharedSpawnCache::default());
        let safe_cache = Arc::new(SafeLocationCache::default());

        handle_death(
            DeathEvent {
                player: Uuid::nil(),
                world: "world".into(),
                kind: DeathWorldKind::Normal,
            },
            &Handle::current(),
            store.clone(),
            keys.clone(),
            settings.clone(),
            ctx.clone(),
            &mut plans,
            spawn_cache.clone(),
            safe_cache,
        );

        // Let the background finder task fill in the plan slot.
        tokio::time::sleep(StdDuration::from_millis(20)).await;

        let outcome = handle_respawn(
            RespawnRequest {
                player: Uuid::nil(),
                local_bed_or_anchor_respawn: false,
            },
            &*store,
            &keys,
            &settings,
            &ctx,
            &mut plans,
            &spawn_cache,
        )
        .await;

        assert_eq!(outcome, RespawnOutcome::SetLocally);
        let sets = effects.respawn_sets.lock().unwrap();
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0], sample_location());
    }

    #[tokio::test]
    async fn remote_plan_resolves_and_requests_switch() {
        let store = Arc::new(FakeStoreClient::new());
        let keys = Arc::new(Keys::new("rtp:"));
        let mut settings = RtpSettings::default();
        settings.spawning.random_teleport_respawn = true;
        settings.fallback_enabled_servers = vec!["hub".into()];
        let mut worlds = HashMap::new();
        worlds.insert("world".into(), WorldConfig { enabled: false });
        settings.servers.insert(
            "smp".into(),
            ServerConfig {
                enabled: true,
                default_world: String::new(),
                worlds,
            },
        );
        settings.server_name = "smp".into();

        let effects = Arc::new(RecordingEffects::default());
        let proxy = Arc::new(AcceptingProxy(AtomicUsize::new(0)));
        let ctx = context(Some(sample_location()), effects.clone(), proxy.clone(), 0);
        let mut plans = PlanTable::default();
        let spawn_cache = Arc::new(SharedSpawnCache::default());
        let safe_cache = Arc::new(SafeLocationCache::default());

        // Responder on "hub" answers the compute request.
        {
            let store = store.clone() as Arc<dyn StoreClient>;
            let keys = keys.clone();
            let rx = store.subscribe(&keys.compute_channel());
            tokio::spawn(async move {
                if let Ok(msg) = rx.recv_async().await {
                    let req: codec::ComputeRequest = codec::decode(&msg).unwrap();
                    let resp = codec::ComputeResponse {
                        request_id: req.request_id.clone(),
                        ok: true,
                        server: "hub".into(),
                        world: "world".into(),
                        location: sample_location(),
                        error: None,
                    };
                    store
                        .setex(&keys.resp(&req.request_id), 10, &codec::encode(&resp).unwrap())
                        .await
                        .unwrap();
                }
            });
        }

        handle_death(
            DeathEvent {
                player: Uuid::nil(),
                world: "world".into(),
                kind: DeathWorldKind::Normal,
            },
            &Handle::current(),
            store.clone() as Arc<dyn StoreClient>,
            keys.clone(),
            settings.clone(),
            ctx.clone(),
            &mut plans,
            spawn_cache.clone(),
            safe_cache,
        );

        let outcome = handle_respawn(
            RespawnRequest {
                player: Uuid::nil(),
                local_bed_or_anchor_respawn: false,
            },
            &*store,
            &keys,
            &settings,
            &ctx,
            &mut plans,
            &spawn_cache,
        )
        .await;

        assert_eq!(outcome, RespawnOutcome::SwitchRequested);
        assert_eq!(proxy.0.load(Ordering::SeqCst), 1);
        assert!(store
            .get(&keys.pending(Uuid::nil()))
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn remote_plan_timeout_falls_back_without_new_compute() {
        let store = Arc::new(FakeStoreClient::new());
        let keys = Arc::new(Keys::new("rtp:"));
        let mut settings = RtpSettings::default();
        settings.spawning.random_teleport_respawn = true;
        settings.fallback_enabled_servers = vec!["hub".into()];
        let mut worlds = HashMap::new();
        worlds.insert("world".into(), WorldConfig { enabled: false });
        settings.servers.insert(
            "smp".into(),
            ServerConfig {
                enabled: true,
                default_world: String::new(),
                worlds,
            },
        );
        settings.server_name = "smp".into();
        // No responder online: the remote plan never resolves.

        let effects = Arc::new(RecordingEffects::default());
        let proxy = Arc::new(AcceptingProxy(AtomicUsize::new(0)));
        let ctx = context(Some(sample_location()), effects, proxy.clone(), 0);
        let mut plans = PlanTable::default();
        let spawn_cache = Arc::new(SharedSpawnCache::default());
        let safe_cache = Arc::new(SafeLocationCache::default());

        handle_death(
            DeathEvent {
                player: Uuid::nil(),
                world: "world".into(),
                kind: DeathWorldKind::Normal,
            },
            &Handle::current(),
            store.clone() as Arc<dyn StoreClient>,
            keys.clone(),
            settings.clone(),
            ctx.clone(),
            &mut plans,
            spawn_cache.clone(),
            safe_cache,
        );

        let outcome = handle_respawn(
            RespawnRequest {
                player: Uuid::nil(),
                local_bed_or_anchor_respawn: false,
            },
            &*store,
            &keys,
            &settings,
            &ctx,
            &mut plans,
            &spawn_cache,
        )
        .await;

        assert_eq!(outcome, RespawnOutcome::FallbackToLocalAttempt);
        assert_eq!(proxy.0.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn shared_spawn_on_this_server_sets_respawn_directly() {
        let store = Arc::new(FakeStoreClient::new());
        let keys = Arc::new(Keys::new("rtp:"));
        let mut settings = RtpSettings::default();
        settings.server_name = "smp".into();
        let effects = Arc::new(RecordingEffects::default());
        let proxy = Arc::new(AcceptingProxy(AtomicUsize::new(0)));
        let ctx = context(None, effects.clone(), proxy, 0);
        let mut plans = PlanTable::default();
        let spawn_cache = Arc::new(SharedSpawnCache::default());

        spawn_cache.put(
            Uuid::nil(),
            SpawnPoint {
                server: "smp".into(),
                location: sample_location(),
                at_ms: 0,
            },
            0,
        );

        let outcome = handle_respawn(
            RespawnRequest {
                player: Uuid::nil(),
                local_bed_or_anchor_respawn: false,
            },
            &*store,
            &keys,
            &settings,
            &ctx,
            &mut plans,
            &spawn_cache,
        )
        .await;

        assert_eq!(outcome, RespawnOutcome::SetLocally);
        assert_eq!(effects.respawn_sets.lock().unwrap().len(), 1);
        assert_eq!(effects.anchor_consumes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn shared_spawn_on_other_server_requests_switch() {
        let store = Arc::new(FakeStoreClient::new());
        let keys = Arc::new(Keys::new("rtp:"));
        let mut settings = RtpSettings::default();
        settings.server_name = "smp".into();
        let effects = Arc::new(RecordingEffects::default());
        let proxy = Arc::new(AcceptingProxy(AtomicUsize::new(0)));
        let ctx = context(None, effects.clone(), proxy.clone(), 0);
        let mut plans = PlanTable::default();
        let spawn_cache = Arc::new(SharedSpawnCache::default());

        spawn_cache.put(
            Uuid::nil(),
            SpawnPoint {
                server: "hub".into(),
                location: sample_location(),
                at_ms: 0,
            },
            0,
        );

        let outcome = handle_respawn(
            RespawnRequest {
                player: Uuid::nil(),
                local_bed_or_anchor_respawn: false,
            },
            &*store,
            &keys,
            &settings,
            &ctx,
            &mut plans,
            &spawn_cache,
        )
        .await;

        assert_eq!(outcome, RespawnOutcome::SwitchRequested);
        assert_eq!(proxy.0.load(Ordering::SeqCst), 1);
        assert_eq!(effects.freezes.load(Ordering::SeqCst), 1);
        assert_eq!(effects.unfreezes.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn always_spawn_at_spawn_defers_and_clears_state() {
        let store = FakeStoreClient::new();
        let keys = Keys::new("rtp:");
        let mut settings = RtpSettings::default();
        settings.spawning.always_spawn_at_spawn = true;
        let effects = Arc::new(RecordingEffects::default());
        let proxy = Arc::new(AcceptingProxy(AtomicUsize::new(0)));
        let ctx = context(None, effects, proxy, 0);
        let mut plans = PlanTable::default();
        let spawn_cache = SharedSpawnCache::default();
        spawn_cache.put(
            Uuid::nil(),
            SpawnPoint {
                server: "smp".into(),
                location: sample_location(),
                at_ms: 0,
            },
            0,
        );

        let outcome = handle_respawn(
            RespawnRequest {
                player: Uuid::nil(),
                local_bed_or_anchor_respawn: false,
            },
            &store,
            &keys,
            &settings,
            &ctx,
            &mut plans,
            &spawn_cache,
        )
        .await;

        assert_eq!(outcome, RespawnOutcome::Deferred);
        assert!(spawn_cache.get_fresh(Uuid::nil(), 0).is_none());
    }

    #[tokio::test]
    async fn local_bed_respawn_defers_when_respected() {
        let store = FakeStoreClient::new();
        let keys = Keys::new("rtp:");
        let settings = RtpSettings::default(); // respect_bed_spawn defaults true
        let effects = Arc::new(RecordingEffects::default());
        let proxy = Arc::new(AcceptingProxy(AtomicUsize::new(0)));
        let ctx = context(None, effects, proxy, 0);
        let mut plans = PlanTable::default();
        let spawn_cache = SharedSpawnCache::default();

        let outcome = handle_respawn(
            RespawnRequest {
                player: Uuid::nil(),
                local_bed_or_anchor_respawn: true,
            },
            &store,
            &keys,
            &settings,
            &ctx,
            &mut plans,
            &spawn_cache,
        )
        .await;

        assert_eq!(outcome, RespawnOutcome::Deferred);
    }

    #[tokio::test]
    async fn record_and_clear_spawn_point_round_trip() {
        let store = FakeStoreClient::new();
        let keys = Keys::new("rtp:");
        let location = sample_location();

        record_spawn_point(&store, &keys, Uuid::nil(), "smp", &location, 0).await;
        assert!(store.get(&keys.spawn(Uuid::nil())).await.unwrap().is_some());

        clear_spawn_point(&store, &keys, Uuid::nil(), "smp", None).await;
        assert!(store.get(&keys.spawn(Uuid::nil())).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn clear_spawn_point_ignored_from_foreign_server_without_location_match() {
        let store = FakeStoreClient::new();
        let keys = Keys::new("rtp:");
        let location = sample_location();

        record_spawn_point(&store, &keys, Uuid::nil(), "smp", &location, 0).await;
        clear_spawn_point(&store, &keys, Uuid::nil(), "hub", None).await;

        assert!(store.get(&keys.spawn(Uuid::nil())).await.unwrap().is_some());
    }
}
