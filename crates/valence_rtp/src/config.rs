//! The configuration surface consumed by the coordination layer.
//! Parsing an admin CLI or `config.yml`/`config.toml`-on-disk layer
//! is the embedder's job; this struct is just the `Deserialize` target,
//! loadable via the `toml` crate the same way any other `valence_*`
//! settings resource would be.

use std::collections::HashMap;

use bevy_ecs::system::Resource;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackMode {
    First,
    Random,
}

impl Default for FallbackMode {
    fn default() -> Self {
        Self::First
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub default_world: String,
    #[serde(default)]
    pub worlds: HashMap<String, WorldConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawningConfig {
    #[serde(default)]
    pub cross_server_respawn: bool,
    #[serde(default)]
    pub always_spawn_at_spawn: bool,
    #[serde(default)]
    pub random_teleport_respawn: bool,
    #[serde(default = "default_true")]
    pub respect_bed_spawn: bool,
    #[serde(default = "default_true")]
    pub respect_anchor_spawn: bool,
}

impl Default for SpawningConfig {
    fn default() -> Self {
        Self {
            cross_server_respawn: false,
            always_spawn_at_spawn: false,
            random_teleport_respawn: false,
            respect_bed_spawn: true,
            respect_anchor_spawn: true,
        }
    }
}

/// Resource holding every knob the coordination layer's configuration
/// surface names: server identity, store connection, TTLs, cooldowns,
/// fallback routing, and the cross-server spawning toggles.
#[derive(Debug, Clone, Resource, Serialize, Deserialize)]
#[serde(default)]
pub struct RtpSettings {
    pub server_name: String,
    pub store_url: String,
    pub key_prefix: String,
    pub request_ttl_seconds: u64,
    pub cooldown_seconds: u64,
    pub countdown_seconds: u32,
    pub response_poll_interval_ticks: u32,
    pub pending_max_finalize_attempts: u32,
    pub fallback_enabled_servers: Vec<String>,
    pub fallback_mode: FallbackMode,
    pub servers: HashMap<String, ServerConfig>,
    pub spawning: SpawningConfig,
}

impl Default for RtpSettings {
    fn default() -> Self {
        Self {
            server_name: "server".into(),
            store_url: "redis://127.0.0.1:6379".into(),
            key_prefix: "rtp:".into(),
            request_ttl_seconds: 10,
            cooldown_seconds: 30,
            countdown_seconds: 3,
            response_poll_interval_ticks: 5,
            pending_max_finalize_attempts: 3,
            fallback_enabled_servers: Vec::new(),
            fallback_mode: FallbackMode::default(),
            servers: HashMap::new(),
            spawning: SpawningConfig::default(),
        }
    }
}

impl RtpSettings {
    /// Clamps the configured poll interval into the valid tick range.
    pub fn response_poll_interval_ticks(&self) -> u32 {
        self.response_poll_interval_ticks.clamp(1, 40)
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_seed_test_assumptions() {
        let settings = RtpSettings::default();
        assert_eq!(settings.cooldown_seconds, 30);
        assert_eq!(settings.countdown_seconds, 3);
        assert_eq!(settings.request_ttl_seconds, 10);
        assert_eq!(settings.pending_max_finalize_attempts, 3);
    }

    #[test]
    fn poll_interval_is_clamped() {
        let mut settings = RtpSettings::default();
        settings.response_poll_interval_ticks = 0;
        assert_eq!(settings.response_poll_interval_ticks(), 1);
        settings.response_poll_interval_ticks = 1000;
        assert_eq!(settings.response_poll_interval_ticks(), 40);
    }

    #[test]
    fn parses_partial_toml_with_defaults() {
        let settings = RtpSettings::from_toml(
            r#"
            server_name = "smp"
            cooldown_seconds = 60
            "#,
        )
        .unwrap();
        assert_eq!(settings.server_name, "smp");
        assert_eq!(settings.cooldown_seconds, 60);
        assert_eq!(settings.countdown_seconds, 3);
    }
}
