use macroquad::prelude::*;
use crate::application::Command;
use crate::rendering::Rgba;

/// Wheel delta per macroquad wheel notch, in browser `deltaY` units
pub const WHEEL_NOTCH: f32 = 10.0;

/// Paint colours cycled with `C`
pub const PALETTE: [Rgba; 4] = [
    Rgba::PAINT,
    Rgba::LIFE,
    Rgba::opaque(0x33, 0x99, 0xFF),
    Rgba::opaque(0xFF, 0xFF, 0xFF),
];

/// Snapshot of the host input devices for one frame
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    pub mouse: (f32, f32),
    pub left_down: bool,
    pub right_down: bool,
    pub wheel: f32,
    pub pause_released: bool,
    pub reset_pressed: bool,
    pub home_pressed: bool,
    pub cycle_color_pressed: bool,
    pub screen: (f32, f32),
}

impl FrameInput {
    /// Read the current macroquad input state
    pub fn capture() -> Self {
        Self {
            mouse: mouse_position(),
            left_down: is_mouse_button_down(MouseButton::Left),
            right_down: is_mouse_button_down(MouseButton::Right),
            wheel: mouse_wheel().1,
            pause_released: is_key_released(KeyCode::Space),
            reset_pressed: is_key_pressed(KeyCode::R),
            home_pressed: is_key_pressed(KeyCode::H),
            cycle_color_pressed: is_key_pressed(KeyCode::C),
            screen: (screen_width(), screen_height()),
        }
    }
}

/// Turns per-frame device snapshots into session commands.
/// Tracks what the host only reports as levels: last pointer position and window size.
pub struct InputState {
    last_mouse: Option<(f32, f32)>,
    screen: (f32, f32),
    palette_index: usize,
    seed_size: u32,
}

impl InputState {
    pub fn new(screen: (f32, f32), seed_size: u32) -> Self {
        Self {
            last_mouse: None,
            screen,
            palette_index: 0,
            seed_size,
        }
    }

    /// Translate one frame of input
    pub fn translate(&mut self, frame: &FrameInput) -> Vec<Command> {
        let mut commands = Vec::new();

        if frame.screen != self.screen {
            self.screen = frame.screen;
            commands.push(Command::Resize { width: frame.screen.0, height: frame.screen.1 });
        }

        let moved = self.last_mouse != Some(frame.mouse);
        if moved {
            commands.push(Command::MoveCursor { x: frame.mouse.0, y: frame.mouse.1 });
        }

        // Right drag pans
        if frame.right_down {
            if let Some((lx, ly)) = self.last_mouse {
                if moved {
                    commands.push(Command::Pan { dx: frame.mouse.0 - lx, dy: frame.mouse.1 - ly });
                }
            }
        } else if frame.left_down && moved {
            commands.push(Command::PaintAt { x: frame.mouse.0, y: frame.mouse.1 });
        }
        self.last_mouse = Some(frame.mouse);

        if frame.wheel != 0.0 {
            commands.push(Command::Zoom(frame.wheel * WHEEL_NOTCH));
        }
        if frame.pause_released {
            commands.push(Command::TogglePause);
        }
        if frame.reset_pressed {
            commands.push(Command::Reset(self.seed_size));
        }
        if frame.home_pressed {
            commands.push(Command::ResetCamera);
        }
        if frame.cycle_color_pressed {
            self.palette_index = (self.palette_index + 1) % PALETTE.len();
            commands.push(Command::SetPaintColor(PALETTE[self.palette_index]));
        }

        commands
    }
}
