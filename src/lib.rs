use std::collections::BTreeMap;
use std::fmt;

pub mod color;
pub mod config;
pub mod export;

use color::Hsl;

/// Step key that always holds the unmodified base color.
pub const CENTER_KEY: i32 = 500;

/// Ordered mapping from step key (multiples of 100) to `#rrggbb` color.
pub type ShadeScale = BTreeMap<i32, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShadeError {
    InvalidColorFormat(String),
    InvalidStepCount(u32),
}

impl fmt::Display for ShadeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShadeError::InvalidColorFormat(hex) => {
                write!(f, "invalid hex color '{}': expected #rgb or #rrggbb", hex)
            }
            ShadeError::InvalidStepCount(steps) => {
                write!(f, "invalid step count {}: expected an even, nonzero number", steps)
            }
        }
    }
}

impl std::error::Error for ShadeError {}

/// Derives a tonal scale from a single base color by holding hue and
/// saturation fixed and stepping lightness away from the base in both
/// directions.
///
/// Keys above [`CENTER_KEY`] walk lightness down toward 5 and keys below it
/// walk lightness up toward 100, so the lowest key is the lightest entry
/// (always `#ffffff`) and the highest key the darkest. `steps` counts the
/// generated entries surrounding the center, half on each side.
#[derive(Debug, Clone)]
pub struct ShadeGenerator {
    steps: u32,
}

impl ShadeGenerator {
    pub fn new(steps: u32) -> Result<Self, ShadeError> {
        if steps == 0 || steps % 2 != 0 {
            return Err(ShadeError::InvalidStepCount(steps));
        }
        Ok(Self { steps })
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Builds the full scale for `base_color`. The center entry is the input
    /// string verbatim, not a round trip through HSL.
    pub fn generate(&self, base_color: &str) -> Result<ShadeScale, ShadeError> {
        let base = color::hex_to_hsl(base_color)?;
        let mut scale = self.upper_half(base);
        scale.extend(self.lower_half(base));
        scale.insert(CENTER_KEY, base_color.to_string());
        Ok(scale)
    }

    // Keys 600, 700, ... stepping lightness from the base down to 5. A base
    // lightness at or below 5 flips the step size negative and the run
    // lightens instead; that arithmetic is deliberately left unclamped.
    fn upper_half(&self, base: Hsl) -> ShadeScale {
        let half = (self.steps / 2) as i32;
        let step_size = (base.l - 5.0) / f64::from(half);
        let mut shades = ShadeScale::new();
        for i in 1..=half {
            let l = base.l - step_size * f64::from(i);
            shades.insert(CENTER_KEY + 100 * i, color::hsl_to_hex(Hsl { l, ..base }));
        }
        shades
    }

    // Keys 400, 300, ... stepping lightness from the base up to 100.
    fn lower_half(&self, base: Hsl) -> ShadeScale {
        let half = (self.steps / 2) as i32;
        let step_size = (100.0 - base.l) / f64::from(half);
        let mut shades = ShadeScale::new();
        for i in 1..=half {
            let l = base.l + step_size * f64::from(i);
            shades.insert(CENTER_KEY - 100 * i, color::hsl_to_hex(Hsl { l, ..base }));
        }
        shades
    }
}

pub fn generate_shades(base_color: &str, steps: u32) -> Result<ShadeScale, ShadeError> {
    ShadeGenerator::new(steps)?.generate(base_color)
}
