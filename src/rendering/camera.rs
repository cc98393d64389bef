use glam::Mat4;

use crate::sequencer::constants::{
    CAMERA_EYE, CAMERA_FAR, CAMERA_FOV_Y, CAMERA_NEAR, CAMERA_TARGET, CAMERA_UP, DEFAULT_ASPECT,
};

/// Fixed scene camera. Only the aspect ratio ever changes, driven by
/// window resizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub aspect: f32,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            aspect: DEFAULT_ASPECT,
        }
    }

    #[inline]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(CAMERA_EYE, CAMERA_TARGET, CAMERA_UP)
    }

    #[inline]
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(CAMERA_FOV_Y, self.aspect, CAMERA_NEAR, CAMERA_FAR)
    }

    #[inline]
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Updates the aspect from a resize. A degenerate extent (zero
    /// width or height) leaves the prior aspect in place rather than
    /// propagating a division by zero.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.aspect = width as f32 / height as f32;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_height_resize_keeps_prior_aspect() {
        let mut cam = Camera::new();
        cam.set_viewport(1920, 1080);
        let aspect = cam.aspect;
        cam.set_viewport(800, 0);
        assert_eq!(cam.aspect, aspect);
        cam.set_viewport(0, 600);
        assert_eq!(cam.aspect, aspect);
    }

    #[test]
    fn aspect_follows_valid_resize() {
        let mut cam = Camera::new();
        cam.set_viewport(1280, 800);
        assert!((cam.aspect - 1.6).abs() < 1e-6);
    }
}
