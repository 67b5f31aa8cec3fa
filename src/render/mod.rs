//! Frame compositor - turns a depth buffer and sprite list into pixels.
//!
//! Passes run in a fixed order: background, walls, sprites (farthest first,
//! occluded per column against the depth buffer), then the damage overlay.

pub mod texture;

pub use texture::SpriteTextures;

use crate::camera::Camera;
use crate::constants::*;
use crate::raycaster::{DepthBuffer, HitSide, WallHit};
use crate::systems::rendering::{SpriteKind, SpriteRecord};
use crate::tile::TileType;
use glam::Vec3;
use image::{Rgba, RgbaImage};

/// Blend weight toward the fog colour at a given depth.
pub fn fog_factor(dist: f32) -> f32 {
    if dist <= FOG_START {
        0.0
    } else if dist >= FOG_END {
        1.0
    } else {
        (dist - FOG_START) / (FOG_END - FOG_START)
    }
}

fn to_vec3([r, g, b]: [u8; 3]) -> Vec3 {
    Vec3::new(r as f32, g as f32, b as f32)
}

fn to_rgb(v: Vec3) -> [u8; 3] {
    let v = v.round().clamp(Vec3::ZERO, Vec3::splat(255.0));
    [v.x as u8, v.y as u8, v.z as u8]
}

pub fn apply_fog(rgb: [u8; 3], fog: f32) -> [u8; 3] {
    if fog <= 0.0 {
        return rgb;
    }
    to_rgb(to_vec3(rgb).lerp(to_vec3(FOG_COLOR), fog))
}

/// Whether a wall texel falls on mortar. `tex_row` is in
/// `0..BRICK_TEXTURE_ROWS`; alternate courses shift by half a brick.
pub fn is_mortar(tex_row: u32, wall_x: f32) -> bool {
    if tex_row % BRICK_ROW_HEIGHT == 0 {
        return true;
    }
    let course = tex_row / BRICK_ROW_HEIGHT;
    let offset = if course % 2 == 0 {
        wall_x
    } else {
        (wall_x + 0.5) % 1.0
    };
    (offset * BRICKS_PER_FACE) % 1.0 < MORTAR_WIDTH
}

fn wall_base_color(hit: &WallHit) -> [u8; 3] {
    if hit.tile == TileType::LockedExit {
        return EXIT_DOOR_COLOR;
    }
    let shade = match hit.side {
        HitSide::X => WALL_SHADE_X_SIDE,
        HitSide::Y => WALL_SHADE_Y_SIDE,
    };
    [shade; 3]
}

/// Owns the frame and the sprite textures drawn into it.
pub struct Compositor {
    frame: RgbaImage,
    textures: SpriteTextures,
}

impl Compositor {
    pub fn new(width: u32, height: u32, textures: SpriteTextures) -> Self {
        Self {
            frame: RgbaImage::new(width, height),
            textures,
        }
    }

    pub fn frame(&self) -> &RgbaImage {
        &self.frame
    }

    pub fn render(
        &mut self,
        depth: &DepthBuffer,
        camera: &Camera,
        sprites: &[SpriteRecord],
        damage_flash: f32,
    ) {
        puffin::profile_function!();

        {
            puffin::profile_scope!("background");
            self.fill_background();
        }
        {
            puffin::profile_scope!("walls");
            self.draw_walls(depth);
        }
        {
            puffin::profile_scope!("sprites");
            for sprite in sprites {
                self.draw_sprite(sprite, camera, depth);
            }
        }
        {
            puffin::profile_scope!("overlay");
            self.apply_damage_overlay(damage_flash);
        }
    }

    fn put(&mut self, x: u32, y: u32, [r, g, b]: [u8; 3]) {
        self.frame.put_pixel(x, y, Rgba([r, g, b, 255]));
    }

    fn fill_background(&mut self) {
        let half = self.frame.height() / 2;
        for (_, y, pixel) in self.frame.enumerate_pixels_mut() {
            let [r, g, b] = if y < half { CEILING_COLOR } else { FLOOR_COLOR };
            *pixel = Rgba([r, g, b, 255]);
        }
    }

    fn draw_walls(&mut self, depth: &DepthBuffer) {
        let height = self.frame.height() as i32;
        let columns = depth.width().min(self.frame.width() as usize);

        for (column, hit) in depth.hits().iter().take(columns).enumerate() {
            let line_height = (height as f32 / hit.distance).round();
            let span_start = ((height as f32 - line_height) / 2.0).floor() as i32;
            let span_end = ((height as f32 + line_height) / 2.0).floor() as i32;
            let span = (span_end - span_start + 1).max(1) as f32;

            let base = wall_base_color(hit);
            let mortar = to_rgb(to_vec3(base) * MORTAR_DARKEN);
            let fog = fog_factor(hit.distance);
            let lit = apply_fog(base, fog);
            let dark = apply_fog(mortar, fog);

            for y in span_start.max(0)..=span_end.min(height - 1) {
                let tex_row = (((y - span_start) as f32 / span) * BRICK_TEXTURE_ROWS as f32) as u32;
                let tex_row = tex_row.min(BRICK_TEXTURE_ROWS - 1);
                let color = if is_mortar(tex_row, hit.wall_x) { dark } else { lit };
                self.put(column as u32, y as u32, color);
            }
        }
    }

    fn draw_sprite(&mut self, sprite: &SpriteRecord, camera: &Camera, depth: &DepthBuffer) {
        let Some(cam) = camera.to_camera_space(sprite.position) else {
            return;
        };
        // Behind or too close to the viewpoint
        if cam.y <= SPRITE_NEAR_PLANE {
            return;
        }

        let Self { frame, textures } = self;
        let (texture, flashing) = match sprite.kind {
            SpriteKind::Agent { flashing } => (&textures.monster, flashing),
            SpriteKind::Pickup => (&textures.key, false),
        };
        let (tex_w, tex_h) = texture.dimensions();

        let width = frame.width() as i32;
        let height = frame.height() as i32;
        let screen_x = camera.project_x(cam, width as usize).floor();

        let sprite_h = (height as f32 / cam.y).floor().abs();
        let sprite_w = (height as f32 / cam.y * (tex_w as f32 / tex_h as f32)).floor().abs();
        if sprite_h < 1.0 || sprite_w < 1.0 {
            return;
        }

        let left = screen_x - sprite_w / 2.0;
        let start_x = left.floor() as i32;
        let end_x = (screen_x + sprite_w / 2.0).floor() as i32;
        let start_y = ((height as f32 - sprite_h) / 2.0).floor() as i32;
        let end_y = ((height as f32 + sprite_h) / 2.0).floor() as i32;

        let fog = fog_factor(cam.y);

        for stripe in start_x.max(0)..=end_x.min(width - 1) {
            if cam.y >= depth.depth(stripe as usize) {
                continue;
            }

            let tex_x = (((stripe as f32 - left) / sprite_w) * tex_w as f32) as u32;
            let tex_x = tex_x.min(tex_w - 1);

            for y in start_y.max(0)..=end_y.min(height - 1) {
                let tex_y = (((y - start_y) as f32 / sprite_h) * tex_h as f32) as u32;
                let [r, g, b, a] = texture.get_pixel(tex_x, tex_y.min(tex_h - 1)).0;
                if a < SPRITE_ALPHA_THRESHOLD {
                    continue;
                }

                let mut rgb = [r, g, b];
                if flashing {
                    for (channel, tint) in rgb.iter_mut().zip(HIT_TINT) {
                        *channel = channel.saturating_add(tint);
                    }
                }
                let [r, g, b] = apply_fog(rgb, fog);
                frame.put_pixel(stripe as u32, y as u32, Rgba([r, g, b, 255]));
            }
        }
    }

    fn apply_damage_overlay(&mut self, damage_flash: f32) {
        if damage_flash <= 0.0 {
            return;
        }
        let alpha = (damage_flash * DAMAGE_FLASH_RATE).min(DAMAGE_FLASH_MAX_ALPHA);
        let flash = to_vec3(DAMAGE_FLASH_COLOR);
        for pixel in self.frame.pixels_mut() {
            let [r, g, b, a] = pixel.0;
            let [r, g, b] = to_rgb(to_vec3([r, g, b]).lerp(flash, alpha));
            *pixel = Rgba([r, g, b, a]);
        }
    }
}
