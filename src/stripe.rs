// Tape-stripe placement: classify a gesture into a cardinal direction, save
// the band of pixels about to be covered, then draw the full-span stripe.

use crate::color::Color;
use crate::error::Error;
use crate::mask::MaskBuffer;
use crate::surface::{Axis, Surface};

/// One touch-down/touch-up pair. The start point anchors the stripe; the end
/// point only decides its direction. Not retained past one interaction.
#[derive(Debug, Clone, Copy)]
pub struct Gesture {
    pub start: (i32, i32),
    pub end: (i32, i32),
}

/// Cardinal classification of a gesture's motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Classify by the dominant delta. Exact ties go horizontal.
    pub fn of(gesture: Gesture) -> Direction {
        let dx = gesture.end.0 - gesture.start.0;
        let dy = gesture.end.1 - gesture.start.1;
        if dx.abs() >= dy.abs() {
            if dx > 0 { Direction::Right } else { Direction::Left }
        } else if dy > 0 {
            Direction::Down
        } else {
            Direction::Up
        }
    }

    /// Horizontal stripes span the width, vertical ones the height.
    pub fn axis(self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::Horizontal,
            Direction::Up | Direction::Down => Axis::Vertical,
        }
    }
}

/// Named stripe geometry. `half_band` rows (or columns) either side of the
/// gesture start get their originals cached; the rendered stripe is
/// `stroke_width` full-span lines centered on the same spot. With the
/// defaults the cache band and the stroke cover exactly the same pixels.
#[derive(Debug, Clone, Copy)]
pub struct StripeConfig {
    pub half_band: i32,
    pub stroke_width: i32,
}

impl Default for StripeConfig {
    fn default() -> Self {
        Self {
            half_band: 20,
            stroke_width: 40,
        }
    }
}

/// Place one stripe for `gesture`: cache pass first (originals into `mask`),
/// draw pass second (tape into `surface`). Band coordinates are clamped to
/// the grid, so a start near an edge yields a narrower stripe, not an error.
/// Returns the classified direction.
pub fn place(
    surface: &mut Surface,
    mask: &mut MaskBuffer,
    config: StripeConfig,
    gesture: Gesture,
) -> Result<Direction, Error> {
    let direction = Direction::of(gesture);
    let axis = direction.axis();
    // The band anchors on the start point's cross-axis coordinate.
    let anchor = match axis {
        Axis::Horizontal => gesture.start.1,
        Axis::Vertical => gesture.start.0,
    };

    cache_band(surface, mask, axis, anchor, config.half_band)?;

    let half_stroke = config.stroke_width / 2;
    for line in (anchor - half_stroke)..(anchor - half_stroke + config.stroke_width) {
        surface.draw_band(axis, line, Color::TAPE);
    }

    Ok(direction)
}

/// Save the originals of the band `anchor - half_band .. anchor + half_band`
/// (clamped to the grid) before tape covers them. Pixels already showing
/// tape keep whatever the mask cached for them.
fn cache_band(
    surface: &Surface,
    mask: &mut MaskBuffer,
    axis: Axis,
    anchor: i32,
    half_band: i32,
) -> Result<(), Error> {
    match axis {
        Axis::Horizontal => {
            let lo = (anchor - half_band).max(0);
            let hi = (anchor + half_band).min(surface.height() as i32);
            for y in lo..hi {
                for x in 0..surface.width() as i32 {
                    let observed = surface.get(x, y)?;
                    mask.cache_if_uncovered(x as usize, y as usize, observed);
                }
            }
        }
        Axis::Vertical => {
            let lo = (anchor - half_band).max(0);
            let hi = (anchor + half_band).min(surface.width() as i32);
            for x in lo..hi {
                for y in 0..surface.height() as i32 {
                    let observed = surface.get(x, y)?;
                    mask.cache_if_uncovered(x as usize, y as usize, observed);
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas(width: usize, height: usize, fill: Color) -> (Surface, MaskBuffer) {
        let mut surface = Surface::new();
        let mut mask = MaskBuffer::new();
        surface.resize(width, height);
        mask.resize(width, height);
        surface.fill(fill);
        (surface, mask)
    }

    #[test]
    fn classifies_dominant_deltas() {
        let g = |start, end| Gesture { start, end };
        assert_eq!(Direction::of(g((10, 10), (40, 15))), Direction::Right);
        assert_eq!(Direction::of(g((40, 10), (10, 15))), Direction::Left);
        assert_eq!(Direction::of(g((10, 10), (15, 40))), Direction::Down);
        assert_eq!(Direction::of(g((10, 40), (15, 10))), Direction::Up);
    }

    #[test]
    fn exact_tie_classifies_horizontal() {
        let gesture = Gesture {
            start: (50, 50),
            end: (55, 45),
        };
        assert_eq!(Direction::of(gesture), Direction::Right);
    }

    #[test]
    fn rightward_stripe_caches_band_and_paints_full_width() {
        let red = Color(0xFFFF_0000);
        let (mut surface, mut mask) = canvas(100, 100, red);

        let direction = place(
            &mut surface,
            &mut mask,
            StripeConfig::default(),
            Gesture {
                start: (50, 50),
                end: (90, 50),
            },
        )
        .unwrap();
        assert_eq!(direction, Direction::Right);

        for y in 0..100 {
            let in_band = (30..70).contains(&y);
            for x in 0..100 {
                let px = surface.get(x, y).unwrap();
                if in_band {
                    assert_eq!(px, Color::TAPE, "row {y} should be taped");
                    assert_eq!(mask.cell(x as usize, y as usize), red);
                } else {
                    assert_eq!(px, red, "row {y} should be untouched");
                    assert_eq!(mask.cell(x as usize, y as usize), Color::TAPE);
                }
            }
        }
    }

    #[test]
    fn downward_stripe_spans_full_height() {
        let green = Color(0xFF00_8800);
        let (mut surface, mut mask) = canvas(100, 100, green);

        let direction = place(
            &mut surface,
            &mut mask,
            StripeConfig::default(),
            Gesture {
                start: (50, 20),
                end: (52, 80),
            },
        )
        .unwrap();
        assert_eq!(direction, Direction::Down);

        for x in 0..100 {
            let in_band = (30..70).contains(&x);
            for y in 0..100 {
                let px = surface.get(x, y).unwrap();
                if in_band {
                    assert_eq!(px, Color::TAPE, "column {x} should be taped");
                } else {
                    assert_eq!(px, green, "column {x} should be untouched");
                }
            }
        }
    }

    #[test]
    fn stripe_near_edge_is_clipped_not_an_error() {
        let blue = Color(0xFF00_00FF);
        let (mut surface, mut mask) = canvas(100, 100, blue);

        // Band rows -15..25 clip to 0..25.
        place(
            &mut surface,
            &mut mask,
            StripeConfig::default(),
            Gesture {
                start: (5, 5),
                end: (60, 5),
            },
        )
        .unwrap();

        for y in 0..25 {
            assert_eq!(surface.get(0, y).unwrap(), Color::TAPE);
            assert_eq!(mask.cell(0, y as usize), blue);
        }
        for y in 25..100 {
            assert_eq!(surface.get(0, y).unwrap(), blue);
            assert_eq!(mask.cell(0, y as usize), Color::TAPE);
        }
    }

    #[test]
    fn restripe_preserves_oldest_original() {
        let yellow = Color(0xFFFF_FF00);
        let (mut surface, mut mask) = canvas(100, 100, yellow);
        let gesture = Gesture {
            start: (50, 50),
            end: (90, 50),
        };

        place(&mut surface, &mut mask, StripeConfig::default(), gesture).unwrap();
        // Second stripe over the same band observes tape everywhere, so the
        // cached originals must survive untouched.
        place(&mut surface, &mut mask, StripeConfig::default(), gesture).unwrap();

        for y in 30..70 {
            assert_eq!(mask.cell(40, y), yellow);
        }
    }

    #[test]
    fn small_config_band_arithmetic_is_exact() {
        let gray = Color(0xFF80_8080);
        let (mut surface, mut mask) = canvas(10, 10, gray);
        let config = StripeConfig {
            half_band: 2,
            stroke_width: 4,
        };

        place(
            &mut surface,
            &mut mask,
            config,
            Gesture {
                start: (4, 5),
                end: (9, 5),
            },
        )
        .unwrap();

        // Rows 3..7 taped and cached, everything else untouched.
        for y in 0..10 {
            let in_band = (3..7).contains(&y);
            for x in 0..10 {
                let expected = if in_band { Color::TAPE } else { gray };
                assert_eq!(surface.get(x, y).unwrap(), expected);
            }
        }
    }
}
