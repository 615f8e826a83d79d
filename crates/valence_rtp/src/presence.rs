//! Advisory `presence:<uuid> -> serverName` records with a refreshing
//! TTL. Nothing ever blocks on this; it exists so other backends can
//! make routing guesses about where a player currently is.

use std::time::Duration;

use uuid::Uuid;

use crate::keys::Keys;
use crate::store::StoreClient;

const PRESENCE_TTL_SECONDS: u64 = 90;
const REFRESH_INTERVAL: Duration = Duration::from_secs(30);

/// Writes a single player's presence record. Call on join and again
/// each refresh cycle.
pub async fn mark_present(store: &dyn StoreClient, keys: &Keys, player: Uuid, server_name: &str) {
    let _ = store
        .setex(&keys.presence(player), PRESENCE_TTL_SECONDS, server_name)
        .await;
}

/// Deletes a player's presence record. Call on quit.
pub async fn mark_absent(store: &dyn StoreClient, keys: &Keys, player: Uuid) {
    let _ = store.del(&keys.presence(player)).await;
}

/// Runs forever, refreshing every online player's presence record every
/// 30 seconds. `online_players` is called once per cycle to obtain a
/// fresh snapshot of who's online; callers typically implement it as a
/// quick hop back to the game thread.
///
/// Intended to be spawned once as a background task at plugin startup.
pub async fn run_presence_refresh<F>(
    store: std::sync::Arc<dyn StoreClient>,
    keys: std::sync::Arc<Keys>,
    server_name: String,
    online_players: F,
) where
    F: Fn() -> Vec<Uuid>,
{
    loop {
        tokio::time::sleep(REFRESH_INTERVAL).await;
        if !store.is_running() {
            continue;
        }
        for player in online_players() {
            mark_present(&*store, &keys, player, &server_name).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::FakeStoreClient;

    #[tokio::test]
    async fn mark_present_then_absent_round_trips() {
        let store = FakeStoreClient::new();
        let keys = Keys::new("rtp:");
        let player = Uuid::nil();

        mark_present(&store, &keys, player, "smp").await;
        assert_eq!(
            store.get(&keys.presence(player)).await.unwrap().as_deref(),
            Some("smp")
        );

        mark_absent(&store, &keys, player).await;
        assert_eq!(store.get(&keys.presence(player)).await.unwrap(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn refresh_loop_writes_every_online_player_each_cycle() {
        let store = std::sync::Arc::new(FakeStoreClient::new());
        let keys = std::sync::Arc::new(Keys::new("rtp:"));
        let player = Uuid::nil();

        let handle = tokio::spawn(run_presence_refresh(
            store.clone(),
            keys.clone(),
            "smp".into(),
            move || vec![player],
        ));

        tokio::time::advance(REFRESH_INTERVAL + Duration::from_millis(1)).await;
        tokio::task::yield_now().await;

        assert_eq!(
            store.get(&keys.presence(player)).await.unwrap().as_deref(),
            Some("smp")
        );

        handle.abort();
    }
}
