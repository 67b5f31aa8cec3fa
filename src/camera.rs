use crate::constants::*;
use glam::Vec2;

/// First-person camera basis for one frame.
///
/// `dir` is the unit facing vector and `plane` the perpendicular camera plane,
/// scaled so that `dir ± plane` span the horizontal field of view.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub position: Vec2,
    pub dir: Vec2,
    pub plane: Vec2,
}

impl Camera {
    pub fn new(position: Vec2, angle: f32) -> Self {
        let dir = Vec2::from_angle(angle);
        Self {
            position,
            dir,
            plane: dir.perp() * HALF_FOV.tan(),
        }
    }

    /// Ray direction through a screen column. Not normalized: the DDA distance
    /// along it is the perpendicular distance to the camera plane.
    pub fn column_ray(&self, column: usize, width: usize) -> Vec2 {
        let camera_x = 2.0 * column as f32 / width as f32 - 1.0;
        self.dir + self.plane * camera_x
    }

    /// Transform a world point into camera space: `x` is the lateral offset in
    /// plane units, `y` the depth along the facing direction. `None` when the
    /// basis is degenerate.
    pub fn to_camera_space(&self, world: Vec2) -> Option<Vec2> {
        let rel = world - self.position;
        let det = self.plane.x * self.dir.y - self.dir.x * self.plane.y;
        if det.abs() < f32::EPSILON {
            return None;
        }
        let inv_det = 1.0 / det;
        Some(Vec2::new(
            inv_det * (self.dir.y * rel.x - self.dir.x * rel.y),
            inv_det * (-self.plane.y * rel.x + self.plane.x * rel.y),
        ))
    }

    /// Horizontal screen coordinate of a camera-space point in front of the camera.
    pub fn project_x(&self, camera_space: Vec2, width: usize) -> f32 {
        (width as f32 / 2.0) * (1.0 + camera_space.x / camera_space.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_is_forward_distance() {
        let camera = Camera::new(Vec2::new(2.0, 2.0), 0.0);
        let cam = camera.to_camera_space(Vec2::new(5.0, 2.0)).unwrap();
        assert!((cam.y - 3.0).abs() < 1e-5);
        assert!(cam.x.abs() < 1e-5);
    }

    #[test]
    fn test_point_on_fov_edge_projects_to_screen_edge() {
        let camera = Camera::new(Vec2::ZERO, 0.0);
        let edge = Vec2::new(1.0, HALF_FOV.tan());
        let cam = camera.to_camera_space(edge).unwrap();
        let x = camera.project_x(cam, RENDER_W);
        assert!((x - RENDER_W as f32).abs() < 1e-2);
    }

    #[test]
    fn test_centre_column_is_facing_direction() {
        let camera = Camera::new(Vec2::ZERO, 1.0);
        let ray = camera.column_ray(RENDER_W / 2, RENDER_W);
        assert!((ray - camera.dir).length() < 1e-5);
    }

    #[test]
    fn test_first_column_is_left_of_facing() {
        // Angles grow clockwise on screen (y points down), so the left edge is angle - HALF_FOV
        let camera = Camera::new(Vec2::ZERO, 0.0);
        let ray = camera.column_ray(0, RENDER_W).normalize();
        assert!((ray.y.atan2(ray.x) + HALF_FOV).abs() < 1e-4);
    }
}
