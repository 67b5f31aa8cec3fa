//! Cell and proximity triggers evaluated after the viewpoint moves.

use crate::constants::{EXIT_TRIGGER_RADIUS, KEY_NOTIFICATION, KEY_NOTIFICATION_MS};
use crate::events::{EventQueue, GameEvent};
use crate::grid::{cell_center, cell_of, Grid};
use crate::player::Player;
use crate::tile::TileType;
use tracing::info;

/// Collect the key when the player stands on the pickup cell.
/// Returns true on the step the key was taken.
pub fn check_pickup(grid: &mut Grid, player: &mut Player, events: &mut EventQueue) -> bool {
    if player.has_key {
        return false;
    }

    let (x, y) = cell_of(player.position);
    if grid.classify(x, y) != TileType::Pickup || !grid.consume_pickup(x, y) {
        return false;
    }

    player.has_key = true;
    info!(cell = ?(x, y), "key collected");
    events.push(GameEvent::KeyCollected { cell: (x, y) });
    events.push(GameEvent::Notification {
        text: KEY_NOTIFICATION,
        duration_ms: KEY_NOTIFICATION_MS,
    });
    true
}

/// Unlock the exit once the player carries the key. Returns true on the
/// step the lock opened.
pub fn update_exit_lock(player: &Player, exit_unlocked: &mut bool) -> bool {
    if player.has_key && !*exit_unlocked {
        *exit_unlocked = true;
        info!("exit unlocked");
        return true;
    }
    false
}

/// Whether the player has reached the exit while carrying the key.
pub fn reached_exit(player: &Player, exit: (i32, i32)) -> bool {
    player.has_key && player.position.distance(cell_center(exit)) < EXIT_TRIGGER_RADIUS
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_pickup_happens_once() {
        let mut grid = Grid::from_ascii(&["#####", "#.K.#", "#####"]);
        let mut player = Player::new((1, 1), 100);
        let mut events = EventQueue::new();

        assert!(!check_pickup(&mut grid, &mut player, &mut events));

        player.position = Vec2::new(2.5, 1.5);
        assert!(check_pickup(&mut grid, &mut player, &mut events));
        assert!(player.has_key);
        assert_eq!(grid.classify(2, 1), TileType::Floor);

        let drained: Vec<_> = events.drain().collect();
        assert_eq!(
            drained,
            vec![
                GameEvent::KeyCollected { cell: (2, 1) },
                GameEvent::Notification {
                    text: KEY_NOTIFICATION,
                    duration_ms: KEY_NOTIFICATION_MS,
                },
            ]
        );

        // Walk off and back on
        player.position = Vec2::new(1.5, 1.5);
        assert!(!check_pickup(&mut grid, &mut player, &mut events));
        player.position = Vec2::new(2.5, 1.5);
        assert!(!check_pickup(&mut grid, &mut player, &mut events));
        assert!(events.is_empty());
    }

    #[test]
    fn test_exit_unlocks_only_with_key() {
        let mut player = Player::new((1, 1), 100);
        let mut unlocked = false;
        assert!(!update_exit_lock(&player, &mut unlocked));
        assert!(!unlocked);

        player.has_key = true;
        assert!(update_exit_lock(&player, &mut unlocked));
        assert!(unlocked);
        assert!(!update_exit_lock(&player, &mut unlocked));
    }

    #[test]
    fn test_exit_requires_key_and_proximity() {
        let mut player = Player::new((21, 1), 100);
        assert!(!reached_exit(&player, (22, 1)));

        player.has_key = true;
        assert!(reached_exit(&player, (22, 1)));

        player.position = Vec2::new(20.5, 1.5);
        assert!(!reached_exit(&player, (22, 1)));
    }
}
