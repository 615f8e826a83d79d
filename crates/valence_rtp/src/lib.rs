#![doc = include_str!("../README.md")]
#![warn(
    trivial_casts,
    trivial_numeric_casts,
    unused_lifetimes,
    unused_import_braces,
    unreachable_pub,
    clippy::dbg_macro
)]

//! Cross-server random teleport (RTP) and respawn coordination.
//!
//! [`RtpPlugin`] wires the coordination layer into a
//! Bevy [`App`]: it owns the [`StoreClient`] connection, the background
//! compute-responder and presence-refresh tasks, and the bookkeeping
//! systems that drain attempt outcomes and tick the movement monitor.
//! Everything else — starting an attempt, finalizing a join, handling a
//! death or respawn — is a plain async function the embedder calls from
//! its own command/event handlers, so `valence_rtp` never needs to know
//! about the host's player, world, or event types.

pub mod attempt;
pub mod codec;
pub mod collaborators;
pub mod compute_responder;
pub mod config;
pub mod death;
pub mod dispatch;
pub mod error;
pub mod finalize;
pub mod keys;
pub mod movement;
pub mod presence;
pub mod store;

use std::sync::{Arc, Mutex};

use anyhow::Context;
use bevy_app::prelude::*;
use bevy_ecs::prelude::*;
use tokio::runtime::{Handle, Runtime};
use tracing::error;
use uuid::Uuid;

pub use attempt::{AttemptOutcome, AttemptOutcomes, AttemptTable, RtpPosition, StartAttempt, TrackedPlayer};
pub use codec::{ComputeRequest, ComputeResponse, Location, PendingTeleport, SpawnPoint};
pub use collaborators::{Clock, Notifier, PlayerEffects, ProxyConnector, RtpContext, SafeLocationFinder, SystemClock};
pub use config::{FallbackMode, RtpSettings, ServerConfig, SpawningConfig, WorldConfig};
pub use death::{
    DeathEvent, DeathPlan, DeathWorldKind, PlanTable, RespawnOutcome, RespawnRequest,
    SafeLocationCache, SharedSpawnCache, SpawnCause, SpawnSetEvent,
};
pub use error::{Result, RtpError};
pub use keys::Keys;
pub use store::{FakeStoreClient, RedisStoreClient, StoreClient};

/// Shared, cloneable handle to the coordination store, inserted as a
/// resource so any system or embedder-owned function can reach it
/// without threading it through every call site.
#[derive(Resource, Clone)]
pub struct RtpStoreHandle(pub Arc<dyn StoreClient>);

/// Shared handle to the keyspace builder for [`RtpSettings::key_prefix`].
#[derive(Resource, Clone)]
pub struct RtpKeysHandle(pub Arc<Keys>);

/// Handle to the tokio runtime the plugin's background tasks (compute
/// responder, presence refresh, attempt/death state machines) run on.
#[derive(Resource, Clone)]
pub struct RtpRuntimeHandle(pub Handle);

/// Keeps an owned [`Runtime`] alive for the lifetime of the app when the
/// plugin had to create its own (mirrors `valence_network`'s
/// `NetworkPlugin`, which holds the same trade-off: a `Handle` alone
/// doesn't keep its runtime's worker threads running).
#[derive(Resource)]
#[allow(dead_code)]
struct OwnedRuntime(Option<Runtime>);

/// The embedder's current online-player roster, kept up to date by the
/// embedder's own join/quit handling. Read once every 30 seconds by the
/// presence refresh task; never written by `valence_rtp` itself.
#[derive(Resource, Default, Clone)]
pub struct OnlinePlayers(pub Vec<Uuid>);

#[derive(Resource, Clone)]
struct OnlinePlayersSnapshot(Arc<Mutex<Vec<Uuid>>>);

/// Installs the RTP coordination layer.
///
/// Requires an [`RtpContext`] resource to already be present (the
/// proxy connector, safe-location finder, notifier, player effects, and
/// clock collaborators) — there's no sane default
/// for any of those, so the plugin refuses to build without one and
/// logs why instead of panicking, matching `NetworkPlugin`'s pattern
/// for a missing prerequisite resource.
///
/// An [`RtpSettings`] resource is inserted with defaults if the
/// embedder hasn't already provided one.
pub struct RtpPlugin;

impl Plugin for RtpPlugin {
    fn build(&self, app: &mut App) {
        if let Err(e) = build_plugin(app) {
            error!("failed to build RTP plugin: {e:#}");
        }
    }
}

fn build_plugin(app: &mut App) -> anyhow::Result<()> {
    app.world
        .get_resource::<RtpContext>()
        .context("missing RtpContext resource: supply proxy/finder/notify/effects/clock collaborators before adding RtpPlugin")?;

    app.world
        .get_resource_or_insert_with(RtpSettings::default);
    let settings = app.world.resource::<RtpSettings>().clone();

    let (owned_runtime, handle) = match Handle::try_current() {
        Ok(handle) => (None, handle),
        Err(_) => {
            let runtime = Runtime::new().context("failed to start RTP's own tokio runtime")?;
            let handle = runtime.handle().clone();
            (Some(runtime), handle)
        }
    };

    let store: Arc<dyn StoreClient> = {
        let _guard = handle.enter();
        Arc::new(RedisStoreClient::new(&settings.store_url)?)
    };
    store.start();

    let keys = Arc::new(Keys::new(&settings.key_prefix));
    let snapshot = Arc::new(Mutex::new(Vec::new()));

    app.insert_resource(RtpStoreHandle(store.clone()))
        .insert_resource(RtpKeysHandle(keys.clone()))
        .insert_resource(RtpRuntimeHandle(handle.clone()))
        .insert_resource(OwnedRuntime(owned_runtime))
        .insert_resource(OnlinePlayersSnapshot(snapshot.clone()))
        .init_resource::<OnlinePlayers>()
        .init_resource::<AttemptTable>()
        .init_resource::<AttemptOutcomes>()
        .init_resource::<PlanTable>()
        .init_resource::<SafeLocationCache>()
        .init_resource::<SharedSpawnCache>()
        .add_event::<SpawnSetEvent>()
        .add_systems(
            PreUpdate,
            (attempt::drain_attempt_outcomes, death::apply_spawn_set_events),
        )
        .add_systems(Update, (attempt::monitor_movement, sync_online_players_snapshot))
        .add_systems(PostStartup, start_background_tasks);

    Ok(())
}

fn sync_online_players_snapshot(online: Res<OnlinePlayers>, snapshot: Res<OnlinePlayersSnapshot>) {
    if online.is_changed() {
        *snapshot.0.lock().unwrap() = online.0.clone();
    }
}

/// Spawns the two long-running background tasks — the compute responder
/// and the presence heartbeat — once, after startup systems have had a
/// chance to populate `RtpContext` and
/// `RtpSettings` fully. Mirrors `NetworkPlugin`'s `PostStartup` accept-loop
/// spawn.
fn start_background_tasks(
    store: Res<RtpStoreHandle>,
    keys: Res<RtpKeysHandle>,
    settings: Res<RtpSettings>,
    runtime: Res<RtpRuntimeHandle>,
    ctx: Res<RtpContext>,
    snapshot: Res<OnlinePlayersSnapshot>,
) {
    let _guard = runtime.0.enter();

    let rx = store.0.subscribe(&keys.0.compute_channel());
    tokio::spawn(compute_responder::run_compute_responder(
        rx,
        store.0.clone(),
        keys.0.clone(),
        Arc::new(settings.clone()),
        Arc::new(ctx.clone()),
    ));

    let snapshot = snapshot.0.clone();
    tokio::spawn(presence::run_presence_refresh(
        store.0.clone(),
        keys.0.clone(),
        settings.server_name.clone(),
        move || snapshot.lock().unwrap().clone(),
    ));
}
