//! Rendering-related systems and data structures.

use crate::components::{Attackable, HitFlash, Position};
use glam::Vec2;
use hecs::World;

/// What a sprite depicts, with only the data its draw needs
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpriteKind {
    Agent { flashing: bool },
    Pickup,
}

/// One billboard to draw this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteRecord {
    pub kind: SpriteKind,
    pub position: Vec2,
    /// Squared distance to the viewpoint
    pub dist_sq: f32,
}

/// Collect living agents and the uncollected key, sorted farthest first so
/// nearer sprites overwrite farther ones.
pub fn collect_sprites(world: &World, viewpoint: Vec2, pickup: Option<Vec2>) -> Vec<SpriteRecord> {
    puffin::profile_function!();

    let mut sprites: Vec<SpriteRecord> = world
        .query::<(&Position, &HitFlash, &Attackable)>()
        .iter()
        .map(|(_, (pos, flash, _))| SpriteRecord {
            kind: SpriteKind::Agent {
                flashing: flash.0 > 0.0,
            },
            position: pos.0,
            dist_sq: pos.0.distance_squared(viewpoint),
        })
        .collect();

    if let Some(position) = pickup {
        sprites.push(SpriteRecord {
            kind: SpriteKind::Pickup,
            position,
            dist_sq: position.distance_squared(viewpoint),
        });
    }

    sprites.sort_by(|a, b| b.dist_sq.total_cmp(&a.dist_sq));
    sprites
}
