//! Color sources for new partitions
//!
//! Every leaf created by a split receives a fresh display color. Colors
//! carry no structural meaning, so the tree only needs *some* source of
//! them; this module provides two.
//!
//! - [`ColorPool`] walks a fixed palette and wraps around when exhausted.
//!   It is deterministic, which keeps test output stable.
//! - [`RandomColors`] draws uniformly random colors, optionally from a
//!   seeded generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Color;

/// Standard palette for new partitions.
///
/// These colors are chosen to be visually distinct next to each other:
/// - Blue (0x3584e4)
/// - Green (0x2ec27e)
/// - Orange (0xff7800)
/// - Purple (0x9141ac)
/// - Cyan (0x00b4d8)
/// - Red (0xe01b24)
/// - Yellow (0xf6d32d)
/// - Brown (0x986a44)
pub const DEFAULT_PALETTE: &[Color] = &[
    Color::from_hex(0x3584e4), // Blue
    Color::from_hex(0x2ec27e), // Green
    Color::from_hex(0xff7800), // Orange
    Color::from_hex(0x9141ac), // Purple
    Color::from_hex(0x00b4d8), // Cyan
    Color::from_hex(0xe01b24), // Red
    Color::from_hex(0xf6d32d), // Yellow
    Color::from_hex(0x986a44), // Brown
];

/// A source of display colors for newly created partitions.
pub trait ColorSource {
    /// Returns the color for the next new partition.
    fn next_color(&mut self) -> Color;
}

/// Hands out palette colors in order, wrapping around at the end.
///
/// # Example
///
/// ```
/// use partition_core::partition::{Color, ColorPool, ColorSource};
///
/// let mut pool = ColorPool::with_palette(vec![
///     Color::from_hex(0x112233),
///     Color::from_hex(0x445566),
/// ]);
///
/// assert_eq!(pool.next_color(), Color::from_hex(0x112233));
/// assert_eq!(pool.next_color(), Color::from_hex(0x445566));
/// // Wraps around once the palette is exhausted
/// assert_eq!(pool.next_color(), Color::from_hex(0x112233));
/// ```
#[derive(Debug, Clone)]
pub struct ColorPool {
    /// Colors to cycle through
    palette: Vec<Color>,
    /// Next palette index to hand out
    next_index: usize,
}

impl ColorPool {
    /// Creates a pool over [`DEFAULT_PALETTE`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_palette(DEFAULT_PALETTE.to_vec())
    }

    /// Creates a pool over a custom palette.
    ///
    /// An empty palette falls back to [`DEFAULT_PALETTE`].
    #[must_use]
    pub fn with_palette(palette: Vec<Color>) -> Self {
        let palette = if palette.is_empty() {
            DEFAULT_PALETTE.to_vec()
        } else {
            palette
        };
        Self {
            palette,
            next_index: 0,
        }
    }

    /// Returns the palette this pool cycles through.
    #[must_use]
    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    /// Returns how many colors the palette holds.
    #[must_use]
    pub fn palette_size(&self) -> usize {
        self.palette.len()
    }
}

impl Default for ColorPool {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorSource for ColorPool {
    fn next_color(&mut self) -> Color {
        let color = self.palette[self.next_index];
        self.next_index = (self.next_index + 1) % self.palette.len();
        color
    }
}

/// Draws uniformly random colors.
#[derive(Debug, Clone)]
pub struct RandomColors {
    rng: StdRng,
}

impl RandomColors {
    /// Creates a generator seeded from the operating system.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a reproducible generator.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomColors {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorSource for RandomColors {
    fn next_color(&mut self) -> Color {
        Color::from_hex(self.rng.random_range(0..=0x00ff_ffff))
    }
}

impl<T: ColorSource + ?Sized> ColorSource for Box<T> {
    fn next_color(&mut self) -> Color {
        (**self).next_color()
    }
}

impl<T: ColorSource + ?Sized> ColorSource for &mut T {
    fn next_color(&mut self) -> Color {
        (**self).next_color()
    }
}
