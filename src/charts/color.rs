// src/charts/color.rs
use crate::config::consts::{COLOR_RANGE, COLOR_WHITE_UNTIL};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const RED: Rgb = Rgb::new(255, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self { Self { r, g, b } }

    /// `#RRGGBB`, `RRGGBB` or `#RGB`.
    pub fn from_hex(s: &str) -> Option<Self> {
        let h = s.trim().trim_start_matches('#');
        if !h.is_ascii() {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&h[i..i + 2], 16).ok();
        match h.len() {
            6 => Some(Self::new(byte(0)?, byte(2)?, byte(4)?)),
            3 => {
                let nib = |i: usize| u8::from_str_radix(&h[i..i + 1], 16).ok().map(|v| v * 17);
                Some(Self::new(nib(0)?, nib(1)?, nib(2)?))
            }
            _ => None,
        }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn to_array(&self) -> [u8; 3] { [self.r, self.g, self.b] }
    pub fn from_array(a: [u8; 3]) -> Self { Self::new(a[0], a[1], a[2]) }

    pub fn lerp(a: Rgb, b: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t).round() as u8;
        Rgb::new(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b))
    }

    /// Readable text color on top of this fill.
    pub fn contrast_text(&self) -> Rgb {
        let luma = 0.299 * self.r as f64 + 0.587 * self.g as f64 + 0.114 * self.b as f64;
        if luma > 150.0 { Rgb::BLACK } else { Rgb::WHITE }
    }
}

/// Qualitative palette for per-town series (Plotly's default cycle).
pub const PALETTE: [Rgb; 10] = [
    Rgb::new(0x63, 0x6E, 0xFA),
    Rgb::new(0xEF, 0x55, 0x3B),
    Rgb::new(0x00, 0xCC, 0x96),
    Rgb::new(0xAB, 0x63, 0xFA),
    Rgb::new(0xFF, 0xA1, 0x5A),
    Rgb::new(0x19, 0xD3, 0xF3),
    Rgb::new(0xFF, 0x66, 0x92),
    Rgb::new(0xB6, 0xE8, 0x80),
    Rgb::new(0xFF, 0x97, 0xFF),
    Rgb::new(0xFE, 0xCB, 0x52),
];

pub fn palette(i: usize) -> Rgb {
    PALETTE[i % PALETTE.len()]
}

/// Continuous scale for metric values: white through the first tenth of
/// the range, then blue blending to red. Out-of-range values clamp.
pub fn metric_scale(v: f64) -> Rgb {
    let (lo, hi) = COLOR_RANGE;
    let t = ((v - lo) / (hi - lo)).clamp(0.0, 1.0);
    if t < COLOR_WHITE_UNTIL {
        Rgb::WHITE
    } else {
        Rgb::lerp(Rgb::BLUE, Rgb::RED, (t - COLOR_WHITE_UNTIL) / (1.0 - COLOR_WHITE_UNTIL))
    }
}
