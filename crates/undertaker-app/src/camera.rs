//! Top-down follow camera.
//!
//! Hovers a fixed height above its target and looks straight down. Screen x
//! maps to world +X and screen y to world +Z; pixels are measured from the
//! bottom-left corner of the viewport.

use glam::{DVec2, DVec3};

use undertaker_core::constants::WORLD_UP;
use undertaker_sim::Camera;

/// Default height above the followed target.
pub const FOLLOW_HEIGHT: f64 = 10.0;

#[derive(Debug, Clone)]
pub struct FollowCamera {
    position: DVec3,
    height: f64,
    /// Vertical field of view, in radians.
    fov_y: f64,
    viewport: DVec2,
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self::new(FOLLOW_HEIGHT, 60f64.to_radians(), DVec2::new(1280.0, 720.0))
    }
}

impl FollowCamera {
    pub fn new(height: f64, fov_y: f64, viewport: DVec2) -> Self {
        Self {
            position: WORLD_UP * height,
            height,
            fov_y,
            viewport,
        }
    }

    /// Snap above `target`.
    pub fn follow(&mut self, target: DVec3) {
        self.position = target + WORLD_UP * self.height;
    }

    pub fn viewport(&self) -> DVec2 {
        self.viewport
    }

    /// Screen position of `world`, or `None` if it is not below the camera.
    pub fn project(&self, world: DVec3) -> Option<DVec2> {
        let depth = self.position.y - world.y;
        if depth <= 0.0 {
            return None;
        }
        let half = self.half_extents(depth);
        let ndc = DVec2::new(
            (world.x - self.position.x) / half.x,
            (world.z - self.position.z) / half.y,
        );
        Some((ndc + DVec2::ONE) * 0.5 * self.viewport)
    }

    /// Half width and half height of the view at `depth`.
    fn half_extents(&self, depth: f64) -> DVec2 {
        let half_height = depth * (self.fov_y * 0.5).tan();
        let aspect = self.viewport.x / self.viewport.y;
        DVec2::new(half_height * aspect, half_height)
    }
}

impl Camera for FollowCamera {
    fn position(&self) -> DVec3 {
        self.position
    }

    fn unproject(&self, screen: DVec2, depth: f64) -> DVec3 {
        let ndc = screen / self.viewport * 2.0 - DVec2::ONE;
        let half = self.half_extents(depth);
        DVec3::new(
            self.position.x + ndc.x * half.x,
            self.position.y - depth,
            self.position.z + ndc.y * half.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_keeps_height() {
        let mut camera = FollowCamera::default();
        camera.follow(DVec3::new(3.0, 1.0, -2.0));
        assert_eq!(camera.position(), DVec3::new(3.0, 11.0, -2.0));
    }

    #[test]
    fn test_viewport_centre_unprojects_below_camera() {
        let mut camera = FollowCamera::default();
        camera.follow(DVec3::new(5.0, 0.0, 5.0));
        let centre = camera.viewport() * 0.5;
        let point = camera.unproject(centre, FOLLOW_HEIGHT);
        assert!(point.abs_diff_eq(DVec3::new(5.0, 0.0, 5.0), 1e-9));
    }

    #[test]
    fn test_screen_axes() {
        let camera = FollowCamera::default();
        let right = camera.unproject(DVec2::new(1280.0, 360.0), FOLLOW_HEIGHT);
        let top = camera.unproject(DVec2::new(640.0, 720.0), FOLLOW_HEIGHT);
        assert!(right.x > 0.0 && right.z.abs() < 1e-9);
        assert!(top.z > 0.0 && top.x.abs() < 1e-9);
    }

    #[test]
    fn test_project_inverts_unproject() {
        let mut camera = FollowCamera::default();
        camera.follow(DVec3::new(-4.0, 0.0, 2.0));
        let world = DVec3::new(-1.0, 0.0, 6.0);
        let screen = camera.project(world).unwrap();
        let back = camera.unproject(screen, FOLLOW_HEIGHT);
        assert!(back.abs_diff_eq(world, 1e-9));
    }

    #[test]
    fn test_project_behind_camera() {
        let camera = FollowCamera::default();
        assert!(camera.project(DVec3::new(0.0, 20.0, 0.0)).is_none());
    }
}
