//! The per-player attempt state machine:
//! `Idle -> CooldownCheck -> Searching -> (Countdown | Direct) ->
//! Dispatching -> Terminal{Ok|Failed|Cancelled}`.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use bevy_ecs::prelude::*;
use tokio::runtime::Handle;
use uuid::Uuid;

use crate::codec::Location;
use crate::collaborators::RtpContext;
use crate::config::RtpSettings;
use crate::dispatch::{self, DispatchOutcome};
use crate::error::RtpError;
use crate::keys::Keys;
use crate::movement::MovementMonitor;
use crate::store::StoreClient;

/// Tracks an ECS entity's live position for the movement monitor. The
/// embedder keeps this in sync with whatever position component the
/// host engine actually uses; `valence_rtp` never reads host components
/// directly so it stays decoupled from the rest of the Minecraft
/// simulation.
#[derive(Component, Debug, Clone, Default)]
pub struct RtpPosition {
    pub world: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Associates an ECS entity with the player identity the coordination
/// layer tracks attempts by.
#[derive(Component, Debug, Clone, Copy)]
pub struct TrackedPlayer(pub Uuid);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalReason {
    Ok,
    Failed,
    Cancelled,
}

/// State held for a single live attempt, shared between the async task
/// driving it and the `Update`-schedule movement monitor system.
struct LiveAttempt {
    cancelled: Arc<AtomicBool>,
    monitor: Arc<Mutex<MovementMonitor>>,
}

/// At most one live attempt per player. Starting a new attempt cancels
/// the prior one silently (its `cancelled` flag is set before the new
/// attempt's first continuation runs).
#[derive(Resource, Default)]
pub struct AttemptTable {
    live: HashMap<Uuid, LiveAttempt>,
}

impl AttemptTable {
    pub fn is_live(&self, player: Uuid) -> bool {
        self.live.contains_key(&player)
    }

    fn cancel_prior(&mut self, player: Uuid) {
        if let Some(prev) = self.live.remove(&player) {
            prev.cancelled.store(true, Ordering::SeqCst);
        }
    }

    fn remove(&mut self, player: Uuid) {
        self.live.remove(&player);
    }
}

/// Outcome reported back from the async attempt task to the ECS world.
pub struct AttemptOutcome {
    pub player: Uuid,
    pub reason: TerminalReason,
}

/// Channel the attempt task uses to report terminal outcomes; drained by
/// a `PreUpdate` system that removes the player's table entry.
#[derive(Resource, Clone)]
pub struct AttemptOutcomes {
    tx: flume::Sender<AttemptOutcome>,
    pub rx: flume::Receiver<AttemptOutcome>,
}

impl Default for AttemptOutcomes {
    fn default() -> Self {
        let (tx, rx) = flume::unbounded();
        Self { tx, rx }
    }
}

/// Drains terminal outcomes and clears the corresponding table entries.
/// Scheduled in `PreUpdate` alongside other bookkeeping systems.
pub fn drain_attempt_outcomes(mut table: ResMut<AttemptTable>, outcomes: Res<AttemptOutcomes>) {
    while let Ok(outcome) = outcomes.rx.try_recv() {
        table.remove(outcome.player);
    }
}

/// Samples every tracked player's position into their live attempt's
/// movement monitor. Scheduled in `Update`; cancellation only has an
/// effect once the attempt has armed the countdown.
pub fn monitor_movement(
    table: Res<AttemptTable>,
    players: Query<(&TrackedPlayer, &RtpPosition)>,
) {
    for (tracked, pos) in &players {
        let Some(live) = table.live.get(&tracked.0) else {
            continue;
        };
        let mut monitor = live.monitor.lock().unwrap();
        if monitor.tick(&pos.world, pos.x, pos.y, pos.z).is_some() {
            live.cancelled.store(true, Ordering::SeqCst);
        }
    }
}

pub struct StartAttempt {
    pub player: Uuid,
    pub target_server: String,
    pub world: String,
    /// Admin/bypass attempts skip the cooldown check and countdown.
    pub bypass: bool,
}

/// Starts a new attempt for `req.player`, cancelling any prior live
/// attempt for that player first. The state machine itself runs on the
/// tokio runtime; only position sampling happens on the game thread via
/// [`monitor_movement`].
#[allow(clippy::too_many_arguments)]
pub fn start_attempt(
    req: StartAttempt,
    table: &mut AttemptTable,
    handle: &Handle,
    store: Arc<dyn StoreClient>,
    keys: Arc<Keys>,
    settings: RtpSettings,
    ctx: RtpContext,
    outcomes: flume::Sender<AttemptOutcome>,
) {
    table.cancel_prior(req.player);

    let cancelled = Arc::new(AtomicBool::new(false));
    let monitor = Arc::new(Mutex::new(MovementMonitor::new()));

    table.live.insert(
        req.player,
        LiveAttempt {
            cancelled: cancelled.clone(),
            monitor: monitor.clone(),
        },
    );

    handle.spawn(run_attempt(RunAttempt {
        req,
        cancelled,
        monitor,
        store,
        keys,
        settings,
        ctx,
        outcomes,
    }));
}

struct RunAttempt {
    req: StartAttempt,
    cancelled: Arc<AtomicBool>,
    monitor: Arc<Mutex<MovementMonitor>>,
    store: Arc<dyn StoreClient>,
    keys: Arc<Keys>,
    settings: RtpSettings,
    ctx: RtpContext,
    outcomes: flume::Sender<AttemptOutcome>,
}

async fn run_attempt(run: RunAttempt) {
    let RunAttempt {
        req,
        cancelled,
        monitor,
        store,
        keys,
        settings,
        ctx,
        outcomes,
    } = run;

    let reason = drive(&req, &cancelled, &monitor, &*store, &keys, &settings, &ctx).await;
    let _ = outcomes.send(AttemptOutcome {
        player: req.player,
        reason,
    });
}

async fn drive(
    req: &StartAttempt,
    cancelled: &Arc<AtomicBool>,
    monitor: &Arc<Mutex<MovementMonitor>>,
    store: &dyn StoreClient,
    keys: &Keys,
    settings: &RtpSettings,
    ctx: &RtpContext,
) -> TerminalReason {
    // -- CooldownCheck --
    if !req.bypass {
        let cooldown_key = keys.cooldown(req.player);
        match store.get(&cooldown_key).await {
            Ok(Some(_)) => {
                let remaining = store.ttl(&cooldown_key).await.ok().flatten().unwrap_or(0);
                ctx.notify
                    .notify(
                        req.player,
                        "cooldown.active",
                        &[("seconds", remaining.to_string())],
                    )
                    .await;
                return TerminalReason::Failed;
            }
            Ok(None) => {
                // Fail-open: if the write itself fails because the store
                // is down, proceed anyway rather than blocking the player.
                let _ = store
                    .setex(&cooldown_key, settings.cooldown_seconds, "1")
                    .await;
            }
            Err(_) => {
                // Store unavailable: fail open rather than block the player.
            }
        }
    }

    if cancelled.load(Ordering::SeqCst) {
        return TerminalReason::Cancelled;
    }

    // -- Searching --
    let location = if req.target_server == settings.server_name {
        match ctx.finder.find_safe(&req.world).await {
            Some(loc) => loc,
            None => {
                ctx.notify
                    .notify(
                        req.player,
                        RtpError::NoSafeLocation {
                            world: req.world.clone(),
                        }
                        .notify_key(),
                        &[],
                    )
                    .await;
                return TerminalReason::Failed;
            }
        }
    } else {
        match dispatch::dispatch_remote(
            req.player,
            &req.target_server,
            &req.world,
            store,
            keys,
            settings,
            ctx,
            cancelled,
        )
        .await
        {
            DispatchOutcome::Dispatched => {
                ctx.notify.notify(req.player, "status.switching", &[]).await;
                return TerminalReason::Ok;
            }
            DispatchOutcome::Failed => return TerminalReason::Failed,
            DispatchOutcome::Cancelled => return TerminalReason::Cancelled,
        }
    };

    if cancelled.load(Ordering::SeqCst) {
        return TerminalReason::Cancelled;
    }

    // -- Countdown (local only; remote already terminated above) --
    if !req.bypass {
        monitor.lock().unwrap().arm_countdown();

        for remaining in (1..=settings.countdown_seconds).rev() {
            ctx.notify
                .notify(
                    req.player,
                    "status.teleporting-in",
                    &[("seconds", remaining.to_string())],
                )
                .await;

            if !wait_one_second_cancellable(cancelled).await {
                ctx.notify
                    .notify(req.player, "errors.teleport-cancelled-moved", &[])
                    .await;
                return TerminalReason::Cancelled;
            }
        }
    }

    // -- Dispatching (local) --
    let preloaded = ctx.effects.preload_chunk(&req.world, &location).await;
    if !preloaded {
        ctx.notify
            .notify(
                req.player,
                RtpError::NoSafeLocation {
                    world: req.world.clone(),
                }
                .notify_key(),
                &[],
            )
            .await;
        return TerminalReason::Failed;
    }

    if !ctx.effects.teleport(req.player, &location).await {
        ctx.notify
            .notify(
                req.player,
                RtpError::NoSafeLocation {
                    world: req.world.clone(),
                }
                .notify_key(),
                &[],
            )
            .await;
        return TerminalReason::Failed;
    }

    ctx.notify
        .notify(
            req.player,
            "success.teleported",
            &[("world", location.world.clone())],
        )
        .await;

    TerminalReason::Ok
}

/// Sleeps roughly one second in small increments so the `cancelled` flag
/// (set from the `Update`-schedule movement monitor) is observed within
/// a few ticks rather than only at whole-second boundaries. Returns
/// `false` if cancelled mid-wait.
async fn wait_one_second_cancellable(cancelled: &Arc<AtomicBool>) -> bool {
    const STEP: Duration = Duration::from_millis(50);
    const STEPS: u32 = 20;

    for _ in 0..STEPS {
        if cancelled.load(Ordering::SeqCst) {
            return false;
        }
        tokio::time::sleep(STEP).await;
    }

    !cancelled.load(Ordering::SeqCst)
}

#[cfg(test)]
mod tests {
    use std::time::Duration as StdDuration;

    use async_trait::async_trait;

    use super::*;
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
        async fn find_safe(&self, world: &str) -> Option<Location> {
            self.0.clone().map(|mut l| {
                l.world = world.to_owned();
                l
            })
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

    fn test_context(notifier: Arc<RecordingNotifier>, finder_loc: Option<Location>) -> RtpContext {
        RtpContext {
            proxy: Arc::new(NoopProxy),
            finder: Arc::new(FixedFinder(finder_loc)),
            notify: notifier,
            effects: Arc::new(NoopEffects),
            clock: Arc::new(FixedClock),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn local_happy_path_notifies_and_succeeds() {
        let store = FakeStoreClient::new();
        let keys = Keys::new("rtp:");
        let mut settings = RtpSettings::default();
        settings.server_name = "smp".into();
        settings.countdown_seconds = 3;
        let notifier = Arc::new(RecordingNotifier::default());
        let ctx = test_context(
            notifier.clone(),
            Some(Location::new("world", 100.5, 72.0, -300.5, 90.0, 0.0)),
        );

        let req = StartAttempt {
            player: Uuid::nil(),
            target_server: "smp".into(),
            world: "world".into(),
            bypass: false,
        };

        let cancelled = Arc::new(AtomicBool::new(false));
        let monitor = Arc::new(Mutex::new(MovementMonitor::new()));

        let reason = drive(&req, &cancelled, &monitor, &store, &keys, &settings, &ctx).await;

        assert_eq!(reason, TerminalReason::Ok);
        let messages = notifier.0.lock().unwrap().clone();
        assert_eq!(
            messages.iter().filter(|m| *m == "status.teleporting-in").count(),
            3
        );
        assert!(messages.contains(&"success.teleported".to_string()));
        assert_eq!(
            store.get(&keys.cooldown(req.player)).await.unwrap().as_deref(),
            Some("1")
        );
    }

    #[tokio::test]
    async fn cooldown_blocks_second_attempt_within_window() {
        let store = FakeStoreClient::new();
        let keys = Keys::new("rtp:");
        let mut settings = RtpSettings::default();
        settings.server_name = "smp".into();
        settings.cooldown_seconds = 30;
        let notifier = Arc::new(RecordingNotifier::default());
        let ctx = test_context(
            notifier.clone(),
            Some(Location::new("world", 0.0, 64.0, 0.0, 0.0, 0.0)),
        );
        let player = Uuid::nil();

        store
            .setex(&keys.cooldown(player), 30, "1")
            .await
            .unwrap();

        let req = StartAttempt {
            player,
            target_server: "smp".into(),
            world: "world".into(),
            bypass: false,
        };
        let cancelled = Arc::new(AtomicBool::new(false));
        let monitor = Arc::new(Mutex::new(MovementMonitor::new()));

        let reason = drive(&req, &cancelled, &monitor, &store, &keys, &settings, &ctx).await;
        assert_eq!(reason, TerminalReason::Failed);
        assert!(notifier.0.lock().unwrap().contains(&"cooldown.active".to_string()));
    }

    #[tokio::test]
    async fn no_safe_location_fails_without_consuming_retry() {
        let store = FakeStoreClient::new();
        let keys = Keys::new("rtp:");
        let mut settings = RtpSettings::default();
        settings.server_name = "smp".into();
        let notifier = Arc::new(RecordingNotifier::default());
        let ctx = test_context(notifier.clone(), None);

        let req = StartAttempt {
            player: Uuid::nil(),
            target_server: "smp".into(),
            world: "world".into(),
            bypass: false,
        };
        let cancelled = Arc::new(AtomicBool::new(false));
        let monitor = Arc::new(Mutex::new(MovementMonitor::new()));

        let reason = drive(&req, &cancelled, &monitor, &store, &keys, &settings, &ctx).await;
        assert_eq!(reason, TerminalReason::Failed);
        assert!(notifier
            .0
            .lock()
            .unwrap()
            .contains(&"errors.no-safe-location".to_string()));
    }

    #[tokio::test]
    async fn movement_cancellation_stops_countdown() {
        let store = FakeStoreClient::new();
        let keys = Keys::new("rtp:");
        let mut settings = RtpSettings::default();
        settings.server_name = "smp".into();
        settings.countdown_seconds = 5;
        let notifier = Arc::new(RecordingNotifier::default());
        let ctx = test_context(
            notifier.clone(),
            Some(Location::new("world", 0.0, 64.0, 0.0, 0.0, 0.0)),
        );

        let req = StartAttempt {
            player: Uuid::nil(),
            target_server: "smp".into(),
            world: "world".into(),
            bypass: false,
        };
        let cancelled = Arc::new(AtomicBool::new(false));
        let monitor = Arc::new(Mutex::new(MovementMonitor::new()));

        let cancel_flag = cancelled.clone();
        tokio::spawn(async move {
            tokio::time::sleep(StdDuration::from_millis(120)).await;
            cancel_flag.store(true, Ordering::SeqCst);
        });

        let reason = drive(&req, &cancelled, &monitor, &store, &keys, &settings, &ctx).await;
        assert_eq!(reason, TerminalReason::Cancelled);
        assert!(notifier
            .0
            .lock()
            .unwrap()
            .contains(&"errors.teleport-cancelled-moved".to_string()));
    }
}
