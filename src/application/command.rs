use crate::rendering::Rgba;

/// Input events expressed as values, decoupled from the host event source.
/// Screen coordinates are relative to the viewport's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Pointer moved to a screen position
    MoveCursor { x: f32, y: f32 },
    /// Paint a live cell at a grid position
    Paint { x: i64, y: i64 },
    /// Paint the cell under a screen position, resolved with the camera at apply time
    PaintAt { x: f32, y: f32 },
    /// Drag the board by a screen-space movement
    Pan { dx: f32, dy: f32 },
    /// Wheel delta, positive zooms in
    Zoom(f32),
    TogglePause,
    /// Recentre the camera at scale 1
    ResetCamera,
    /// Replace the board with a random square of this size
    Reset(u32),
    /// Viewport resized
    Resize { width: f32, height: f32 },
    /// Change the paint colour used for the cursor marker
    SetPaintColor(Rgba),
}
