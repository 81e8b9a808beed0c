mod color;
mod pixel_buffer;

pub use color::Rgba;
pub use pixel_buffer::PixelBuffer;

use macroquad::prelude::*;
use crate::application::Session;

/// Colour of the window outside the board
const OUTSIDE_COLOR: Color = Color::new(0.08, 0.08, 0.08, 1.0);

/// Format large numbers with K/M suffixes
pub fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

pub fn to_color(rgba: Rgba) -> Color {
    Color::from_rgba(rgba.r, rgba.g, rgba.b, rgba.a)
}

/// Renderer keeps an offscreen copy of the pixel buffer in a GPU texture
/// and composites it through the camera transform.
pub struct Renderer {
    surface: Image,
    texture: Texture2D,
}

impl Renderer {
    /// Board sides must fit in `u16`; `Config::validate` enforces this
    pub fn new(buffer: &PixelBuffer) -> Self {
        let (width, height) = buffer.dimensions();
        let surface = Image {
            bytes: buffer.as_bytes().to_vec(),
            width: width as u16,
            height: height as u16,
        };
        let texture = Texture2D::from_image(&surface);
        // Pixel art, no smoothing
        texture.set_filter(FilterMode::Nearest);
        Self { surface, texture }
    }

    /// Copy the pixel buffer into the offscreen surface and upload it
    pub fn sync(&mut self, buffer: &PixelBuffer) {
        self.surface.bytes.copy_from_slice(buffer.as_bytes());
        self.texture.update(&self.surface);
    }

    /// Draw the board scaled by the camera, then the cursor marker
    pub fn present(&self, session: &Session) {
        clear_background(OUTSIDE_COLOR);

        let camera = session.camera();
        let t = camera.transform();
        let (width, height) = session.buffer().dimensions();
        draw_texture_ex(
            &self.texture,
            t.e,
            t.f,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(width as f32 * t.a, height as f32 * t.d)),
                ..Default::default()
            },
        );

        // One grid pixel in the paint colour under the pointer
        let (cx, cy) = session.cursor();
        let (sx, sy) = camera.grid_to_screen(cx as f32, cy as f32);
        draw_rectangle(sx, sy, t.a, t.d, to_color(session.paint_color()));
    }
}

/// Draw the camera, population and status readouts
pub fn draw_hud(session: &Session, live_cells: usize) {
    let camera = session.camera();
    let status = if session.is_paused() { "Paused" } else { "Running" };
    let status_color = if session.is_paused() {
        Color::from_rgba(255, 165, 0, 255)
    } else {
        Color::from_rgba(0, 255, 0, 255)
    };

    let labels = [
        (format!("x: {:.0}  y: {:.0}  scale: {:.0}", camera.x.round(), camera.y.round(), camera.scale.round()), 18.0, GRAY),
        (format!("Lives: {}", format_number(live_cells)), 36.0, Color::from_rgba(0x33, 0xFF, 0x33, 255)),
        (format!("Generation: {}", session.steps()), 54.0, GRAY),
        (format!("{} | {} | FPS: {}", status, session.algorithm(), get_fps()), 72.0, status_color),
        (session.algorithm().description().to_owned(), 90.0, DARKGRAY),
    ];

    labels.iter().for_each(|(text, y, color)| {
        draw_text(text, 10.0, *y, 18.0, *color);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_620), "1.6K");
        assert_eq!(format_number(2_500_000), "2.5M");
    }
}
