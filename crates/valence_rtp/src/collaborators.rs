//! Traits for the external collaborators named in the purpose & scope:
//! the proxy connector, the safe-location finder, and player messaging.
//! Only their interfaces live here; concrete safety rules, routing
//! policy, and message formatting are the embedder's business.

use async_trait::async_trait;
use bevy_ecs::system::Resource;
use uuid::Uuid;

use crate::codec::Location;

/// Moves a connected player from the current backend to another one.
///
/// `request_switch` returns whether the request was *accepted for
/// delivery*, not whether the player arrived; a `false` is a permanent
/// failure for the attempt that requested it.
#[async_trait]
pub trait ProxyConnector: Send + Sync {
    async fn request_switch(&self, player: Uuid, target_server: &str) -> bool;
}

/// Finds a location in `world` that passes the embedder's safety policy.
///
/// May take seconds and perform async chunk loads; returns `None` once
/// the configured max tries are exhausted.
#[async_trait]
pub trait SafeLocationFinder: Send + Sync {
    async fn find_safe(&self, world: &str) -> Option<Location>;

    /// `(min_height, max_height)` for `world`, used to clamp a teleport
    /// destination before it reaches [`PlayerEffects::teleport`].
    /// Defaults to modern Minecraft's build limits; override for
    /// worlds with a nonstandard height.
    async fn height_bounds(&self, _world: &str) -> (f64, f64) {
        (-64.0, 320.0)
    }

    /// Whether `world` is a world this server actually hosts. Checked by
    /// the Join Finalizer before it acts on a pending teleport; override
    /// when the embedder can tell a stale or foreign world name apart
    /// from a loaded one. Defaults to `true` so embedders that don't
    /// track a world registry keep today's behavior.
    async fn world_exists(&self, _world: &str) -> bool {
        true
    }
}

/// Addressed player messaging: chat, titles, sounds, boss bars.
///
/// `params` are opaque, message-key-specific substitution values; the
/// core never inspects them, it only selects the key.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, player: Uuid, message_key: &str, params: &[(&str, String)]);
}

/// The visual freeze / chunk preload surface the Join Finalizer and
/// Death Pipeline drive. Concrete mechanics (invulnerability, flight,
/// blindness, the chunk loader) belong to the embedder.
#[async_trait]
pub trait PlayerEffects: Send + Sync {
    /// Applies the freeze (invulnerable, flight enabled + flying, zero
    /// walk/fly speed, brief blindness).
    async fn freeze(&self, player: Uuid);
    async fn unfreeze(&self, player: Uuid);
    async fn preload_chunk(&self, world: &str, location: &Location) -> bool;
    /// Performs the actual teleport once the chunk is ready.
    async fn teleport(&self, player: Uuid, location: &Location) -> bool;
    /// Sets the player's respawn location directly, without a visible
    /// teleport (used by the local Death Pipeline plan).
    async fn set_respawn_location(&self, player: Uuid, location: &Location);
    /// Consumes one respawn anchor charge at `location` if the block
    /// there is a respawn anchor, a no-op otherwise. The embedder owns
    /// the bed-vs-anchor distinction; the coordination layer never
    /// needs to know which one a shared spawn point came from.
    async fn consume_anchor_charge(&self, player: Uuid, location: &Location) -> bool;
}

/// Wall-clock access, abstracted so tests can control time.
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> i64;
}

/// Real wall clock, backed by `SystemTime`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0)
    }
}

/// Bundles the collaborator trait objects the embedder supplies at
/// construction, resolving the cyclic-reference concern the same way a
/// plugin root and its listeners would otherwise reference each other:
/// listeners become parameterless consumers of this small context value.
#[derive(Resource, Clone)]
pub struct RtpContext {
    pub proxy: std::sync::Arc<dyn ProxyConnector>,
    pub finder: std::sync::Arc<dyn SafeLocationFinder>,
    pub notify: std::sync::Arc<dyn Notifier>,
    pub effects: std::sync::Arc<dyn PlayerEffects>,
    pub clock: std::sync::Arc<dyn Clock>,
}
