use glam::Vec2;

/// Maps screen pixels to world coordinates.
pub trait ScreenToWorld {
    fn screen_to_world(&self, screen: Vec2) -> Vec2;
}

/// Pass-through projection for hosts that already report world coordinates.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl ScreenToWorld for Identity {
    fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        screen
    }
}

/// Orthographic camera for 2D rendering.
/// World is Y-up with the camera center in the middle of the viewport;
/// screen is Y-down with the origin at the top-left pixel.
#[derive(Debug, Clone)]
pub struct Camera2D {
    /// Visible width in world units.
    pub width: f32,
    /// Visible height in world units.
    pub height: f32,
    /// Camera center position in world space.
    pub center: Vec2,
    /// Viewport size in screen pixels.
    pub viewport: Vec2,
}

impl Camera2D {
    /// Camera whose visible area matches the viewport one-to-one.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            center: Vec2::ZERO,
            viewport: Vec2::new(width, height),
        }
    }

    /// Resize the viewport (e.g. on window resize).
    /// Maintains aspect ratio by fitting the game area.
    pub fn resize(
        &mut self,
        viewport_width: f32,
        viewport_height: f32,
        game_width: f32,
        game_height: f32,
    ) {
        if viewport_width <= 0.0 || viewport_height <= 0.0 {
            log::warn!("ignoring degenerate viewport {}x{}", viewport_width, viewport_height);
            return;
        }
        let horiz_ratio = viewport_width / game_width;
        let vert_ratio = viewport_height / game_height;
        let scale = horiz_ratio.min(vert_ratio);
        self.width = viewport_width / scale;
        self.height = viewport_height / scale;
        self.viewport = Vec2::new(viewport_width, viewport_height);
    }
}

impl ScreenToWorld for Camera2D {
    fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        let uv = screen / self.viewport;
        Vec2::new(
            self.center.x + (uv.x - 0.5) * self.width,
            self.center.y + (0.5 - uv.y) * self.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_center_maps_to_camera_center() {
        let mut cam = Camera2D::new(800.0, 600.0);
        cam.center = Vec2::new(10.0, -5.0);
        let w = cam.screen_to_world(Vec2::new(400.0, 300.0));
        assert!((w - Vec2::new(10.0, -5.0)).length() < 1e-4);
    }

    #[test]
    fn screen_y_down_becomes_world_y_up() {
        let cam = Camera2D::new(800.0, 600.0);
        let top_left = cam.screen_to_world(Vec2::ZERO);
        assert!((top_left - Vec2::new(-400.0, 300.0)).length() < 1e-4);
    }

    #[test]
    fn resize_maintains_aspect() {
        let mut cam = Camera2D::new(800.0, 600.0);
        cam.resize(1920.0, 1080.0, 800.0, 600.0);
        let ratio = cam.width / cam.height;
        let expected = 1920.0 / 1080.0;
        assert!((ratio - expected).abs() < 0.01);
        // Right edge of the screen lands on the right edge of the visible world
        let right = cam.screen_to_world(Vec2::new(1920.0, 540.0));
        assert!((right.x - cam.width / 2.0).abs() < 1e-3);
    }

    #[test]
    fn resize_ignores_zero_viewport() {
        let mut cam = Camera2D::new(800.0, 600.0);
        cam.resize(0.0, 600.0, 800.0, 600.0);
        assert_eq!(cam.viewport, Vec2::new(800.0, 600.0));
    }
}
