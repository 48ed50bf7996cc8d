// ARGB color values and the string parsing behind the palette entry point.

use crate::error::Error;

/// A packed ARGB color (`0xAARRGGBB`), the pixel format of both canvas
/// buffers and the window framebuffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u32);

impl Color {
    /// The tape overlay color. Doubles as the mask buffer's "nothing cached
    /// here" sentinel, so no real original may ever equal it in the mask.
    pub const TAPE: Color = Color(0xFF00_AAFF);

    /// Paint color before any palette selection (dark red).
    pub const DEFAULT_PAINT: Color = Color(0xFF66_0000);

    /// A freshly resized surface pixel: fully transparent black.
    pub const BLANK: Color = Color(0x0000_0000);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Parse a color spec coming from the embedding UI: a CSS color name
    /// ("red", "rebeccapurple") or hex notation ("#f00", "#ff0000",
    /// "#ff0000cc"). The current color is left to the caller on failure.
    pub fn parse(spec: &str) -> Result<Color, Error> {
        let parsed = csscolorparser::parse(spec)
            .map_err(|e| Error::InvalidColor(format!("{spec}: {e}")))?;
        let [r, g, b, a] = parsed.to_rgba8();
        Ok(Color::from_argb(a, r, g, b))
    }
}
