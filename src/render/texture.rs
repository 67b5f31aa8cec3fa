//! Procedural sprite textures.

use crate::constants::{KEY_SPRITE_H, KEY_SPRITE_W, MONSTER_SPRITE_H, MONSTER_SPRITE_W};
use image::{Rgba, RgbaImage};
use rand::Rng;

const OPAQUE: u8 = 255;

/// Sprite images used by the compositor
#[derive(Debug, Clone)]
pub struct SpriteTextures {
    pub monster: RgbaImage,
    pub key: RgbaImage,
}

impl SpriteTextures {
    pub fn generate(rng: &mut impl Rng) -> Self {
        Self {
            monster: monster_sprite(rng),
            key: key_sprite(),
        }
    }
}

fn put(img: &mut RgbaImage, x: i32, y: i32, [r, g, b]: [u8; 3]) {
    if x < 0 || y < 0 || x >= img.width() as i32 || y >= img.height() as i32 {
        return;
    }
    img.put_pixel(x as u32, y as u32, Rgba([r, g, b, OPAQUE]));
}

/// Red humanoid: head with glowing eyes, tapering torso, arms with claws, legs.
pub fn monster_sprite(rng: &mut impl Rng) -> RgbaImage {
    let mut img = RgbaImage::new(MONSTER_SPRITE_W, MONSTER_SPRITE_H);

    // Head
    for y in 2..11 {
        for x in 10..22 {
            let cx = (x - 16) as f32;
            let cy = (y - 6) as f32;
            if cx * cx * 1.3 + cy * cy < 28.0 {
                put(&mut img, x, y, [180, 40, 40]);
            }
        }
    }

    for x in [13, 14, 18, 19] {
        put(&mut img, x, 5, [255, 200, 0]);
    }

    // Torso narrows toward the waist
    for y in 11..37 {
        let taper = (y - 11) / 5;
        for x in (8 + taper)..(24 - taper) {
            let shade = 140 + rng.gen_range(0..30u8);
            put(&mut img, x, y, [shade, 30, 30]);
        }
    }

    for y in 12..35 {
        for x in (2..8).chain(24..30) {
            put(&mut img, x, y, [150, 35, 35]);
        }
    }

    // Claws
    for y in 34..40 {
        for x in [2, 4, 6, 25, 27, 29] {
            put(&mut img, x, y, [200, 200, 200]);
        }
    }

    for y in 37..64 {
        for x in 9..23 {
            put(&mut img, x, y, [120, 25, 25]);
        }
    }

    img
}

/// Gold key: ringed bow with a keyhole, shaft and teeth.
pub fn key_sprite() -> RgbaImage {
    let mut img = RgbaImage::new(KEY_SPRITE_W, KEY_SPRITE_H);
    let (hx, hy, radius) = (16, 10, 7.0_f32);

    for y in (hy - 8)..=(hy + 8) {
        for x in (hx - 8)..=(hx + 8) {
            let d = (((x - hx) * (x - hx) + (y - hy) * (y - hy)) as f32).sqrt();
            if d <= radius {
                put(&mut img, x, y, [255, 200, 0]);
            } else if d <= radius + 1.0 {
                put(&mut img, x, y, [200, 150, 0]);
            }
        }
    }

    for y in 7..14 {
        for x in 14..19 {
            let (cx, cy) = (x - 16, y - 10);
            if cx * cx + cy * cy < 8 {
                put(&mut img, x, y, [40, 40, 40]);
            }
        }
    }

    for y in 17..28 {
        for x in 15..18 {
            put(&mut img, x, y, [255, 200, 0]);
        }
    }

    for (x, y) in [(18, 20), (19, 20), (18, 23), (19, 23), (18, 25)] {
        put(&mut img, x, y, [255, 200, 0]);
    }

    img
}
