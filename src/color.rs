use crate::ShadeError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees, [0, 360).
    pub h: f64,
    /// Saturation as a percentage, [0, 100].
    pub s: f64,
    /// Lightness as a percentage, [0, 100].
    pub l: f64,
}

pub fn hex_to_hsl(hex: &str) -> Result<Hsl, ShadeError> {
    let (r, g, b) = hex_to_rgb(hex)?;
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let d = max - min;
    let (h, s);
    if d == 0.0 {
        h = 0.0;
        s = 0.0;
    } else {
        s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
        h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        } / 6.0;
    }
    Ok(Hsl { h: h * 360.0, s: s * 100.0, l: l * 100.0 })
}

pub fn hex_to_rgb(hex: &str) -> Result<(u8, u8, u8), ShadeError> {
    let invalid = || ShadeError::InvalidColorFormat(hex.to_string());
    let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let expanded;
    let digits = match digits.len() {
        6 => digits,
        // Shorthand #rgb: double each nibble.
        3 => {
            expanded = digits.chars().flat_map(|c| [c, c]).collect::<String>();
            &expanded
        }
        _ => return Err(invalid()),
    };
    let r = u8::from_str_radix(&digits[0..2], 16).map_err(|_| invalid())?;
    let g = u8::from_str_radix(&digits[2..4], 16).map_err(|_| invalid())?;
    let b = u8::from_str_radix(&digits[4..6], 16).map_err(|_| invalid())?;
    Ok((r, g, b))
}

pub fn hsl_to_hex(hsl: Hsl) -> String {
    let h = hsl.h / 360.0;
    let s = hsl.s / 100.0;
    let l = hsl.l / 100.0;
    let (r, g, b);
    if s == 0.0 {
        r = l;
        g = l;
        b = l;
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        r = hue_to_channel(p, q, h + 1.0 / 3.0);
        g = hue_to_channel(p, q, h);
        b = hue_to_channel(p, q, h - 1.0 / 3.0);
    }
    format!(
        "#{:02x}{:02x}{:02x}",
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8
    )
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
