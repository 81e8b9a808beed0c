use super::Rgba;

/// Fixed W×H RGBA raster mirroring the board one pixel per cell
#[derive(Clone, Debug)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Create a buffer filled with the background colour
    pub fn new(width: u32, height: u32) -> Self {
        let mut buffer = Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        };
        buffer.clear();
        buffer
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Linear pixel index, `None` when `(x, y)` is off the raster
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        let inside = x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64;
        inside.then(|| y as usize * self.width as usize + x as usize)
    }

    /// Write a colour at `(x, y)`. Out-of-range writes are dropped silently.
    pub fn set_pixel(&mut self, x: i64, y: i64, color: Rgba) -> bool {
        let Some(idx) = self.index(x, y) else {
            return false;
        };
        self.pixels[idx * 4..idx * 4 + 4].copy_from_slice(&color.to_bytes());
        true
    }

    pub fn get(&self, x: i64, y: i64) -> Option<Rgba> {
        self.index(x, y).map(|idx| {
            let p = &self.pixels[idx * 4..idx * 4 + 4];
            Rgba { r: p[0], g: p[1], b: p[2], a: p[3] }
        })
    }

    /// Fill the whole buffer with the background colour
    pub fn clear(&mut self) {
        let bg = Rgba::BACKGROUND.to_bytes();
        self.pixels.chunks_exact_mut(4).for_each(|px| px.copy_from_slice(&bg));
    }

    /// Raw RGBA bytes, row-major
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }
}
