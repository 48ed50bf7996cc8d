// Tool dispatch and the boundary API the window layer talks to. All canvas
// mutation funnels through one Canvas instance; there is no shared state.

use log::{debug, info, warn};

use crate::color::Color;
use crate::error::Error;
use crate::mask::MaskBuffer;
use crate::stripe::{self, Gesture, StripeConfig};
use crate::surface::Surface;

/// The active tool. Selection comes from outside, between gestures only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolMode {
    Paint,
    PlaceTape,
    RemoveTape,
}

/// The canvas model: the visible surface, its mask companion, and the tool
/// state deciding what a touch does.
pub struct Canvas {
    surface: Surface,
    mask: MaskBuffer,
    config: StripeConfig,
    mode: ToolMode,
    current_color: Color,
    pending_start: Option<(i32, i32)>,
    dirty: bool,
}

impl Canvas {
    pub fn new() -> Self {
        Self::with_config(StripeConfig::default())
    }

    pub fn with_config(config: StripeConfig) -> Self {
        Self {
            surface: Surface::new(),
            mask: MaskBuffer::new(),
            config,
            mode: ToolMode::Paint,
            current_color: Color::DEFAULT_PAINT,
            pending_start: None,
            dirty: true,
        }
    }

    /// Reinitialize both buffers to `width` x `height`. All drawing content
    /// and cached originals are discarded. Must run before the first touch
    /// and again on every dimension change, before the next touch event.
    pub fn on_resize(&mut self, width: usize, height: usize) {
        self.surface.resize(width, height);
        self.mask.resize(width, height);
        self.pending_start = None;
        self.dirty = true;
        debug!("canvas resized to {width}x{height}");
    }

    /// Current surface contents for display. Read-only, no side effects.
    pub fn on_render(&self) -> &[u32] {
        self.surface.pixels()
    }

    /// A touch landing. Paint and RemoveTape act immediately; PlaceTape only
    /// records the gesture start.
    pub fn on_touch_down(&mut self, x: i32, y: i32) -> Result<(), Error> {
        self.ensure_sized()?;
        match self.mode {
            ToolMode::Paint => self.fill_with_current(),
            ToolMode::PlaceTape => self.pending_start = Some((x, y)),
            ToolMode::RemoveTape => self.remove_tape()?,
        }
        Ok(())
    }

    /// A touch lifting. Completes a pending tape gesture; for the other
    /// tools it acts the same as a landing.
    pub fn on_touch_up(&mut self, x: i32, y: i32) -> Result<(), Error> {
        self.ensure_sized()?;
        match self.mode {
            ToolMode::Paint => self.fill_with_current(),
            ToolMode::PlaceTape => {
                if let Some(start) = self.pending_start.take() {
                    let gesture = Gesture { start, end: (x, y) };
                    let direction =
                        stripe::place(&mut self.surface, &mut self.mask, self.config, gesture)?;
                    self.dirty = true;
                    debug!("placed {direction:?} stripe anchored at {start:?}");
                }
            }
            ToolMode::RemoveTape => self.remove_tape()?,
        }
        Ok(())
    }

    /// Switch tools. Selection happens between gestures; a half-recorded
    /// tape start is dropped rather than completed under the new tool.
    pub fn select_tool(&mut self, mode: ToolMode) {
        self.pending_start = None;
        self.mode = mode;
        self.dirty = true;
        info!("tool selected: {mode:?}");
    }

    /// Parse and set the paint color. Takes effect on the next Paint fill;
    /// pixels already on the surface keep their color. On a spec that fails
    /// to parse the current color stays as it was.
    pub fn set_color(&mut self, spec: &str) -> Result<(), Error> {
        match Color::parse(spec) {
            Ok(color) => {
                self.current_color = color;
                self.dirty = true;
                info!("paint color set to {spec}");
                Ok(())
            }
            Err(e) => {
                warn!("rejected color spec {spec:?}");
                Err(e)
            }
        }
    }

    pub fn mode(&self) -> ToolMode {
        self.mode
    }

    pub fn current_color(&self) -> Color {
        self.current_color
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.surface.width(), self.surface.height())
    }

    /// Returns the re-render flag and clears it. Set by every dispatched
    /// operation that changes externally visible state.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn ensure_sized(&self) -> Result<(), Error> {
        if self.surface.is_unsized() {
            Err(Error::NotInitialized)
        } else {
            Ok(())
        }
    }

    fn fill_with_current(&mut self) {
        // Whole-surface flood. Cached originals survive the fill, so a later
        // RemoveTape restores pre-fill colors into the post-fill surface.
        // Longstanding quirk, kept as-is.
        self.surface.fill(self.current_color);
        self.dirty = true;
        debug!("canvas filled with {:?}", self.current_color);
    }

    fn remove_tape(&mut self) -> Result<(), Error> {
        let surface = &mut self.surface;
        self.mask
            .drain_and_reset(|x, y, original| surface.set(x as i32, y as i32, original))?;
        self.dirty = true;
        debug!("tape removed, originals restored");
        Ok(())
    }
}
