// Window presenter + input polling, plus the small software-drawn HUD.
// This is the stand-in for the excluded UI layer: it owns the minifb window,
// feeds pointer and key events to the canvas, and overlays tool/color
// swatches on the presented frame without touching the canvas itself.

use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

use crate::canvas::ToolMode;
use crate::color::Color;
use crate::error::Error;

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create a resizable window. Nothing is shown until the first present.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let window = Window::new(
            title,
            width,
            height,
            WindowOptions {
                resize: true,
                ..WindowOptions::default()
            },
        )
        .map_err(|e| Error::WindowInit(e.to_string()))?;
        Ok(Self { window })
    }

    /// Push the pixels for this frame to the screen. This is also what pumps
    /// the window's input state, so it runs every loop iteration.
    pub fn present(&mut self, pixels: &[u32], width: usize, height: usize) -> Result<(), Error> {
        self.window
            .update_with_buffer(pixels, width, height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))
    }

    /// Returns false when the user closes the window.
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Current client-area size; changes when the user drags the frame.
    pub fn size(&self) -> (usize, usize) {
        self.window.get_size()
    }

    /// Mouse position in window pixels, clamped to the client area.
    pub fn mouse_pos(&self) -> Option<(usize, usize)> {
        self.window
            .get_mouse_pos(MouseMode::Clamp)
            .map(|(x, y)| (x.max(0.0) as usize, y.max(0.0) as usize))
    }

    pub fn left_mouse_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }

    /// P / T / R pick the tool for subsequent gestures.
    pub fn tool_key(&self) -> Option<ToolMode> {
        if self.window.is_key_pressed(Key::P, KeyRepeat::No) {
            Some(ToolMode::Paint)
        } else if self.window.is_key_pressed(Key::T, KeyRepeat::No) {
            Some(ToolMode::PlaceTape)
        } else if self.window.is_key_pressed(Key::R, KeyRepeat::No) {
            Some(ToolMode::RemoveTape)
        } else {
            None
        }
    }

    /// Digit keys 1-8 pick a palette slot.
    pub fn palette_key(&self) -> Option<usize> {
        const DIGITS: [Key; 8] = [
            Key::Key1,
            Key::Key2,
            Key::Key3,
            Key::Key4,
            Key::Key5,
            Key::Key6,
            Key::Key7,
            Key::Key8,
        ];
        DIGITS
            .iter()
            .position(|&k| self.window.is_key_pressed(k, KeyRepeat::No))
    }
}

/* ---------- software-drawn HUD ---------- */

/// Put a pixel on the frame if (x, y) is inside bounds.
#[inline]
fn put_pixel(frame: &mut [u32], width: usize, height: usize, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= width || y >= height {
        return;
    }
    frame[y * width + x] = color;
}

fn fill_rect(frame: &mut [u32], width: usize, height: usize, x: i32, y: i32, w: i32, h: i32, color: u32) {
    for yy in y..y + h {
        for xx in x..x + w {
            put_pixel(frame, width, height, xx, yy, color);
        }
    }
}

fn outline_rect(frame: &mut [u32], width: usize, height: usize, x: i32, y: i32, w: i32, h: i32, color: u32) {
    for xx in x..x + w {
        put_pixel(frame, width, height, xx, y, color);
        put_pixel(frame, width, height, xx, y + h - 1, color);
    }
    for yy in y..y + h {
        put_pixel(frame, width, height, x, yy, color);
        put_pixel(frame, width, height, x + w - 1, yy, color);
    }
}

const SWATCH: i32 = 14;
const PAD: i32 = 4;

/// Three swatches in the top-left corner: paint (showing the current
/// color), tape, and remove, with a white outline around the active tool.
/// Drawn over the presented frame, never into the canvas surface.
pub fn draw_hud(frame: &mut [u32], width: usize, height: usize, mode: ToolMode, paint: Color) {
    // Remove reads as "tape, dimmed": the tape color at a third brightness.
    let dimmed = Color::from_argb(
        Color::TAPE.alpha(),
        Color::TAPE.red() / 3,
        Color::TAPE.green() / 3,
        Color::TAPE.blue() / 3,
    );
    let entries = [
        (ToolMode::Paint, paint.0),
        (ToolMode::PlaceTape, Color::TAPE.0),
        (ToolMode::RemoveTape, dimmed.0),
    ];
    for (i, (tool, color)) in entries.into_iter().enumerate() {
        let x = PAD + i as i32 * (SWATCH + PAD);
        fill_rect(frame, width, height, x, PAD, SWATCH, SWATCH, color);
        if tool == mode {
            outline_rect(
                frame,
                width,
                height,
                x - 1,
                PAD - 1,
                SWATCH + 2,
                SWATCH + 2,
                0xFFFF_FFFF,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hud_marks_the_active_tool() {
        let (w, h) = (64, 32);
        let mut frame = vec![0u32; w * h];
        draw_hud(&mut frame, w, h, ToolMode::PlaceTape, Color::DEFAULT_PAINT);

        // First swatch interior shows the paint color.
        assert_eq!(frame[(PAD + 2) as usize * w + (PAD + 2) as usize], Color::DEFAULT_PAINT.0);
        // Second swatch is outlined white on its top-left corner pixel.
        let x = (PAD + SWATCH + PAD - 1) as usize;
        let y = (PAD - 1) as usize;
        assert_eq!(frame[y * w + x], 0xFFFF_FFFF);
    }

    #[test]
    fn hud_clips_on_a_tiny_frame() {
        let (w, h) = (8, 4);
        let mut frame = vec![0u32; w * h];
        draw_hud(&mut frame, w, h, ToolMode::Paint, Color::DEFAULT_PAINT);
        // No panic is the property; swatches simply clip at the frame edge.
    }
}
