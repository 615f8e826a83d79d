//! Shared record types and their self-describing text encoding.
//!
//! Records round-trip through JSON (`serde_json`) rather than a bespoke
//! format: unknown fields are ignored by default when a field isn't
//! declared on the receiving struct, and every field carries
//! `#[serde(default)]` so a record written by a newer server version is
//! still readable by an older one with fields simply defaulting.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{RtpError, Result};

/// Milliseconds since the Unix epoch.
pub type TimestampMs = i64;

/// A world-valid location: world identifier plus position and look.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub world: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub z: f64,
    #[serde(default)]
    pub yaw: f32,
    #[serde(default)]
    pub pitch: f32,
}

impl Location {
    pub fn new(world: impl Into<String>, x: f64, y: f64, z: f64, yaw: f32, pitch: f32) -> Self {
        Self {
            world: world.into(),
            x,
            y,
            z,
            yaw,
            pitch,
        }
    }

    /// Clamps `y` to `[min_height + 1, max_height - 2]` and `pitch` to
    /// `[-90, 90]` degrees, as required before a Join Finalizer teleport.
    pub fn clamped(mut self, min_height: f64, max_height: f64) -> Self {
        self.y = self.y.clamp(min_height + 1.0, max_height - 2.0);
        self.pitch = self.pitch.clamp(-90.0, 90.0);
        self
    }
}

impl Default for Location {
    fn default() -> Self {
        Self {
            world: String::new(),
            x: 0.0,
            y: 0.0,
            z: 0.0,
            yaw: 0.0,
            pitch: 0.0,
        }
    }
}

/// Published on the compute channel by an origin backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeRequest {
    #[serde(default)]
    pub request_id: String,
    #[serde(default)]
    pub player_uuid: Uuid,
    #[serde(default)]
    pub target_server: String,
    #[serde(default)]
    pub world: String,
    #[serde(default)]
    pub created_at_ms: TimestampMs,
}

/// Written by the target backend in response to a [`ComputeRequest`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeResponse {
    #[serde(default)]
    pub request_id: String,
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub server: String,
    #[serde(default)]
    pub world: String,
    /// Only meaningful when `ok == true`.
    #[serde(default)]
    pub location: Location,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A finalize instruction for the destination server, written before the
/// proxy switch is requested.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingTeleport {
    #[serde(default)]
    pub server: String,
    #[serde(default)]
    pub location: Location,
    #[serde(default)]
    pub at_ms: TimestampMs,
    /// Finalize retry counter, bumped on each failed finalize attempt.
    #[serde(default)]
    pub attempts: u32,
}

/// A shared bed/anchor spawn record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpawnPoint {
    #[serde(default)]
    pub server: String,
    #[serde(default)]
    pub location: Location,
    #[serde(default)]
    pub at_ms: TimestampMs,
}

/// Encodes a record to the store's self-describing text format.
pub fn encode<T: Serialize>(record: &T) -> Result<String> {
    serde_json::to_string(record).map_err(RtpError::Encode)
}

/// Decodes a record, tolerating unknown and missing fields.
pub fn decode<T: for<'de> Deserialize<'de>>(text: &str) -> Result<T> {
    serde_json::from_str(text).map_err(RtpError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_location() -> Location {
        Location::new("world_nether", 100.5, 72.0, -300.5, 90.0, 0.0)
    }

    #[test]
    fn compute_request_round_trips() {
        let req = ComputeRequest {
            request_id: "abc123".into(),
            player_uuid: Uuid::nil(),
            target_server: "smp".into(),
            world: "world".into(),
            created_at_ms: 1_700_000_000_000,
        };
        let text = encode(&req).unwrap();
        let back: ComputeRequest = decode(&text).unwrap();
        assert_eq!(back.request_id, req.request_id);
        assert_eq!(back.player_uuid, req.player_uuid);
        assert_eq!(back.target_server, req.target_server);
        assert_eq!(back.world, req.world);
        assert_eq!(back.created_at_ms, req.created_at_ms);
    }

    #[test]
    fn compute_response_round_trips() {
        let resp = ComputeResponse {
            request_id: "abc123".into(),
            ok: true,
            server: "smp".into(),
            world: "world".into(),
            location: sample_location(),
            error: None,
        };
        let text = encode(&resp).unwrap();
        let back: ComputeResponse = decode(&text).unwrap();
        assert_eq!(back.ok, resp.ok);
        assert_eq!(back.server, resp.server);
        assert_eq!(back.location, resp.location);
        assert_eq!(back.error, resp.error);
    }

    #[test]
    fn pending_teleport_round_trips() {
        let pending = PendingTeleport {
            server: "smp".into(),
            location: sample_location(),
            at_ms: 42,
            attempts: 2,
        };
        let text = encode(&pending).unwrap();
        let back: PendingTeleport = decode(&text).unwrap();
        assert_eq!(back.server, pending.server);
        assert_eq!(back.location, pending.location);
        assert_eq!(back.at_ms, pending.at_ms);
        assert_eq!(back.attempts, pending.attempts);
    }

    #[test]
    fn spawn_point_round_trips() {
        let spawn = SpawnPoint {
            server: "hub".into(),
            location: sample_location(),
            at_ms: 7,
        };
        let text = encode(&spawn).unwrap();
        let back: SpawnPoint = decode(&text).unwrap();
        assert_eq!(back.server, spawn.server);
        assert_eq!(back.location, spawn.location);
        assert_eq!(back.at_ms, spawn.at_ms);
    }

    #[test]
    fn unknown_fields_are_ignored_on_read() {
        let text = r#"{"request_id":"x","ok":true,"server":"smp","world":"w","location":{"world":"w","x":1.0,"y":2.0,"z":3.0,"yaw":0.0,"pitch":0.0},"future_field":"ignored"}"#;
        let resp: ComputeResponse = decode(text).unwrap();
        assert_eq!(resp.server, "smp");
    }

    #[test]
    fn missing_fields_default() {
        let resp: ComputeResponse = decode("{}").unwrap();
        assert!(!resp.ok);
        assert_eq!(resp.server, "");
        assert_eq!(resp.location, Location::default());
    }

    #[test]
    fn location_clamps_y_and_pitch() {
        let loc = Location::new("w", 0.0, 400.0, 0.0, 0.0, 120.0).clamped(-64.0, 320.0);
        assert_eq!(loc.y, 318.0);
        assert_eq!(loc.pitch, 90.0);
    }
}
