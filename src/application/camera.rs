/// Smallest allowed zoom (one screen pixel per cell)
pub const MIN_SCALE: f32 = 1.0;
/// Largest allowed zoom
pub const MAX_SCALE: f32 = 20.0;
/// Scale change per unit of wheel delta
pub const ZOOM_PER_DELTA: f32 = 0.1;

/// 2D affine transform restricted to uniform scale plus translation:
/// `screen = (a * gx + e, d * gy + f)`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub a: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Transform {
    pub const IDENTITY: Self = Self { a: 1.0, d: 1.0, e: 0.0, f: 0.0 };

    pub fn apply(&self, x: f32, y: f32) -> (f32, f32) {
        (self.a * x + self.e, self.d * y + self.f)
    }

    /// Inverse mapping; the scale is never zero because it is clamped to `MIN_SCALE`
    pub fn apply_inverse(&self, x: f32, y: f32) -> (f32, f32) {
        ((x - self.e) / self.a, (y - self.f) / self.d)
    }
}

/// Camera manages viewport, pan and zoom for grid navigation.
/// `x`/`y` is the grid point shown at the centre of the viewport.
#[derive(Clone, Debug)]
pub struct Camera {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    viewport_width: f32,
    viewport_height: f32,
    transform: Transform,
}

impl Camera {
    /// Camera centred on a board of `grid_side` cells at scale 1
    pub fn new(grid_side: u32, viewport_width: f32, viewport_height: f32) -> Self {
        let mut camera = Self {
            x: grid_side as f32 / 2.0,
            y: grid_side as f32 / 2.0,
            scale: MIN_SCALE,
            viewport_width,
            viewport_height,
            transform: Transform::IDENTITY,
        };
        camera.update();
        camera
    }

    /// Recompute the transform from explicit scale and pan values
    pub fn update_camera(&mut self, scale: f32, x: f32, y: f32) {
        self.scale = scale;
        self.x = x;
        self.y = y;
        self.update();
    }

    /// Recompute the transform from the current fields
    fn update(&mut self) {
        self.scale = self.scale.clamp(MIN_SCALE, MAX_SCALE);
        self.transform = Transform {
            a: self.scale,
            d: self.scale,
            e: self.viewport_width / 2.0 - self.x * self.scale,
            f: self.viewport_height / 2.0 - self.y * self.scale,
        };
    }

    /// Zoom by a wheel delta; the result is always clamped to `[MIN_SCALE, MAX_SCALE]`
    pub fn zoom(&mut self, delta: f32) {
        if !delta.is_finite() {
            return;
        }
        self.scale += delta * ZOOM_PER_DELTA;
        self.update();
    }

    /// Pan by a screen-space pointer movement (dragging moves the board with the pointer)
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.x -= dx / self.scale;
        self.y -= dy / self.scale;
        self.update();
    }

    /// Track a new viewport size
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport_width = width;
        self.viewport_height = height;
        self.update();
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Convert grid coordinates to screen coordinates
    pub fn grid_to_screen(&self, grid_x: f32, grid_y: f32) -> (f32, f32) {
        self.transform.apply(grid_x, grid_y)
    }

    /// Convert screen coordinates to (fractional) grid coordinates
    pub fn screen_to_grid(&self, screen_x: f32, screen_y: f32) -> (f32, f32) {
        self.transform.apply_inverse(screen_x, screen_y)
    }

    /// Grid cell under a screen point
    pub fn screen_to_cell(&self, screen_x: f32, screen_y: f32) -> (i64, i64) {
        let (gx, gy) = self.screen_to_grid(screen_x, screen_y);
        (gx.floor() as i64, gy.floor() as i64)
    }

    /// Reset camera to the board centre at scale 1
    pub fn reset(&mut self, grid_side: u32) {
        self.update_camera(MIN_SCALE, grid_side as f32 / 2.0, grid_side as f32 / 2.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: (f32, f32), b: (f32, f32)) -> bool {
        (a.0 - b.0).abs() < 1e-3 && (a.1 - b.1).abs() < 1e-3
    }

    #[test]
    fn test_centre_maps_to_viewport_centre() {
        let camera = Camera::new(720, 500.0, 400.0);
        assert!(close(camera.grid_to_screen(360.0, 360.0), (250.0, 200.0)));
    }

    #[test]
    fn test_round_trip_across_scales() {
        let mut camera = Camera::new(720, 500.0, 500.0);
        for scale in [1.0, 1.5, 3.0, 7.25, 20.0] {
            camera.update_camera(scale, 123.0, 456.0);
            for point in [(0.0, 0.0), (359.5, 12.25), (719.0, 719.0), (-5.0, 800.0)] {
                let screen = camera.grid_to_screen(point.0, point.1);
                assert!(close(camera.screen_to_grid(screen.0, screen.1), point));
            }
        }
    }

    #[test]
    fn test_scale_is_clamped() {
        let mut camera = Camera::new(720, 500.0, 500.0);
        camera.zoom(1.0e6);
        assert_eq!(camera.scale, MAX_SCALE);
        camera.zoom(-1.0e6);
        assert_eq!(camera.scale, MIN_SCALE);
        for _ in 0..500 {
            camera.zoom(7.0);
            assert!((MIN_SCALE..=MAX_SCALE).contains(&camera.scale));
        }
        camera.zoom(f32::NAN);
        assert_eq!(camera.scale, MAX_SCALE);
        camera.update_camera(0.0, 0.0, 0.0);
        assert_eq!(camera.scale, MIN_SCALE);
    }

    #[test]
    fn test_pan_divides_by_scale() {
        let mut camera = Camera::new(720, 500.0, 500.0);
        camera.update_camera(4.0, 100.0, 100.0);
        camera.pan(8.0, -4.0);
        assert_eq!((camera.x, camera.y), (98.0, 101.0));
    }

    #[test]
    fn test_screen_to_cell_floors() {
        let mut camera = Camera::new(10, 10.0, 10.0);
        camera.update_camera(2.0, 5.0, 5.0);
        // transform: e = f = 5 - 10 = -5
        assert_eq!(camera.screen_to_cell(0.0, 0.0), (2, 2));
        camera.update_camera(1.0, 20.0, 20.0);
        assert_eq!(camera.screen_to_cell(0.0, 0.0), (15, 15));
        camera.update_camera(1.0, 0.0, 0.0);
        assert_eq!(camera.screen_to_cell(0.5, 0.5), (-5, -5));
    }

    #[test]
    fn test_resize_keeps_centre() {
        let mut camera = Camera::new(720, 500.0, 500.0);
        camera.resize(1000.0, 800.0);
        assert!(close(camera.screen_to_grid(500.0, 400.0), (360.0, 360.0)));
    }
}
