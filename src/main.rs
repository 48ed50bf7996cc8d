// Tape-stripe canvas demo.
// • P: paint mode. Any click floods the canvas with the current color.
// • T: tape mode. Press, drag, release; a full-span stripe follows the
//   dominant direction of the drag.
// • R: remove mode. Any click peels all tape, restoring what was beneath.
// • 1-8: pick a paint color. ESC quits.

mod canvas;
mod color;
mod draw;
mod error;
mod mask;
mod stripe;
mod surface;

use std::time::{Duration, Instant};

use canvas::Canvas;
use draw::Drawer;
use error::Error;

const START_WIDTH: usize = 960;
const START_HEIGHT: usize = 540;

/// Palette on keys 1-8. Kept as strings and fed through the same parsing
/// entry point an embedding UI would use. None of the entries is the tape
/// color: painting with the sentinel would make covered pixels uncacheable.
const PALETTE: [&str; 8] = [
    "#660000", "red", "orange", "yellow", "green", "blue", "purple", "white",
];

fn main() -> Result<(), Error> {
    env_logger::init();

    let mut drawer = Drawer::new("Tape Canvas", START_WIDTH, START_HEIGHT)?;
    let mut canvas = Canvas::new();
    canvas.on_resize(START_WIDTH, START_HEIGHT);

    // The composed frame pushed to the window: canvas pixels + HUD overlay.
    let mut frame = vec![0u32; START_WIDTH * START_HEIGHT];
    let (mut cur_w, mut cur_h) = (START_WIDTH, START_HEIGHT);
    let mut was_down = false;

    // FPS bookkeeping, reported once per second on the debug log.
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;

    while drawer.is_open() && !drawer.esc_pressed() {
        // The window may have been resized since the last poll; both canvas
        // buffers reallocate before the next touch event is processed.
        let (w, h) = drawer.size();
        if (w, h) != (cur_w, cur_h) && w > 0 && h > 0 {
            canvas.on_resize(w, h);
            frame.resize(w * h, 0);
            (cur_w, cur_h) = (w, h);
        }

        if let Some(mode) = drawer.tool_key() {
            canvas.select_tool(mode);
        }
        if let Some(slot) = drawer.palette_key() {
            // Palette entries are static and parseable; log and carry on if
            // one ever is not.
            if let Err(e) = canvas.set_color(PALETTE[slot]) {
                log::warn!("palette slot {slot} rejected: {e}");
            }
        }

        // Press/release edges become the touch-down/touch-up stream. Moves
        // between them are deliberately ignored.
        let down = drawer.left_mouse_down();
        if let Some((mx, my)) = drawer.mouse_pos() {
            if down && !was_down {
                canvas.on_touch_down(mx as i32, my as i32)?;
            }
            if !down && was_down {
                canvas.on_touch_up(mx as i32, my as i32)?;
            }
        }
        was_down = down;

        // Recompose only when the canvas reports a change; present every
        // iteration regardless, since presenting is what pumps input.
        if canvas.take_dirty() {
            let (fw, fh) = canvas.dimensions();
            frame.copy_from_slice(canvas.on_render());
            draw::draw_hud(&mut frame, fw, fh, canvas.mode(), canvas.current_color());
        }
        drawer.present(&frame, cur_w, cur_h)?;

        frames_this_second += 1;
        let now = Instant::now();
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            log::debug!("FPS: {:.1}", frames_this_second as f32 / secs);
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    Ok(())
}
