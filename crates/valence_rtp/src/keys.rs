//! Names every shared key and channel under a configurable prefix.

use uuid::Uuid;

/// Builds store keys and the compute channel name under a single prefix.
///
/// The prefix is sanitized on construction to end with exactly one `:`,
/// regardless of whether the caller passed `"rtp"`, `"rtp:"`, or
/// `"rtp::"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keys {
    prefix: String,
}

impl Keys {
    pub fn new(prefix: &str) -> Self {
        let trimmed = prefix.trim_end_matches(':');
        Self {
            prefix: format!("{trimmed}:"),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn compute_channel(&self) -> String {
        format!("{}compute", self.prefix)
    }

    pub fn resp(&self, request_id: &str) -> String {
        format!("{}resp:{request_id}", self.prefix)
    }

    pub fn pending(&self, player: Uuid) -> String {
        format!("{}pending:{player}", self.prefix)
    }

    pub fn cooldown(&self, player: Uuid) -> String {
        format!("{}cooldown:{player}", self.prefix)
    }

    pub fn presence(&self, player: Uuid) -> String {
        format!("{}presence:{player}", self.prefix)
    }

    pub fn spawn(&self, player: Uuid) -> String {
        format!("{}spawn:{player}", self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAYER: Uuid = Uuid::nil();

    #[test]
    fn sanitizes_missing_colon() {
        let keys = Keys::new("rtp");
        assert_eq!(keys.prefix(), "rtp:");
    }

    #[test]
    fn sanitizes_trailing_colon() {
        let keys = Keys::new("rtp:");
        assert_eq!(keys.prefix(), "rtp:");
    }

    #[test]
    fn sanitizes_doubled_colon() {
        let keys = Keys::new("rtp::");
        assert_eq!(keys.prefix(), "rtp:");
    }

    #[test]
    fn builds_canonical_keys() {
        let keys = Keys::new("rtp:");
        assert_eq!(keys.pending(PLAYER), format!("rtp:pending:{PLAYER}"));
        assert_eq!(keys.cooldown(PLAYER), format!("rtp:cooldown:{PLAYER}"));
        assert_eq!(keys.presence(PLAYER), format!("rtp:presence:{PLAYER}"));
        assert_eq!(keys.spawn(PLAYER), format!("rtp:spawn:{PLAYER}"));
        assert_eq!(keys.resp("R1"), "rtp:resp:R1");
        assert_eq!(keys.compute_channel(), "rtp:compute");
    }
}
