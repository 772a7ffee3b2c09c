//! Color schemes and scales.
//!
//! Schemes are piecewise-linear ramps through a few anchor colors. A
//! [`SequentialScale`] maps a numeric domain onto a ramp (the map fill); an
//! [`OrdinalScale`] samples a ramp at evenly spaced points, one per category
//! (the bar colors).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Blues,
    Teals,
    BrownBlueGreen,
}

impl ColorScheme {
    fn anchors(self) -> &'static [[u8; 3]] {
        match self {
            ColorScheme::Blues => &[
                [0xf7, 0xfb, 0xff],
                [0xc6, 0xdb, 0xef],
                [0x6b, 0xae, 0xd6],
                [0x21, 0x71, 0xb5],
                [0x08, 0x30, 0x6b],
            ],
            ColorScheme::Teals => &[
                [0xbb, 0xdf, 0xdf],
                [0x74, 0xb8, 0xb8],
                [0x3b, 0x8d, 0x8f],
                [0x2a, 0x5b, 0x62],
            ],
            ColorScheme::BrownBlueGreen => &[
                [0x54, 0x30, 0x05],
                [0xbf, 0x81, 0x2d],
                [0xf5, 0xf5, 0xf5],
                [0x80, 0xcd, 0xc1],
                [0x00, 0x3c, 0x30],
            ],
        }
    }

    /// Color at position `t` in [0, 1] (clamped), as `#rrggbb`.
    pub fn interpolate(self, t: f64) -> String {
        let anchors = self.anchors();
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let span = (anchors.len() - 1) as f64;
        let pos = t * span;
        let i = (pos.floor() as usize).min(anchors.len() - 2);
        let local = pos - i as f64;
        let (a, b) = (anchors[i], anchors[i + 1]);
        let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * local).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            mix(a[0], b[0]),
            mix(a[1], b[1]),
            mix(a[2], b[2])
        )
    }
}

/// Continuous numeric domain mapped onto a scheme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SequentialScale {
    pub domain: (f64, f64),
    pub scheme: ColorScheme,
}

impl SequentialScale {
    pub fn new(domain: (f64, f64), scheme: ColorScheme) -> Self {
        Self { domain, scheme }
    }

    pub fn color(&self, value: f64) -> String {
        let (lo, hi) = self.domain;
        let t = if hi > lo { (value - lo) / (hi - lo) } else { 0.5 };
        self.scheme.interpolate(t)
    }

    /// `n` evenly spaced (value, color) pairs across the domain, for a legend.
    pub fn stops(&self, n: usize) -> Vec<(f64, String)> {
        let (lo, hi) = self.domain;
        match n {
            0 => Vec::new(),
            1 => vec![(lo, self.color(lo))],
            _ => (0..n)
                .map(|i| {
                    let v = lo + (hi - lo) * i as f64 / (n - 1) as f64;
                    (v, self.color(v))
                })
                .collect(),
        }
    }
}

/// One color per category, sampled evenly from a scheme.
#[derive(Debug, Clone, PartialEq)]
pub struct OrdinalScale {
    entries: Vec<(String, String)>,
}

impl OrdinalScale {
    pub fn new<'a>(labels: impl IntoIterator<Item = &'a str>, scheme: ColorScheme) -> Self {
        let labels: Vec<&str> = labels.into_iter().collect();
        let n = labels.len();
        let entries = labels
            .into_iter()
            .enumerate()
            .map(|(i, label)| {
                let t = if n > 1 { i as f64 / (n - 1) as f64 } else { 0.5 };
                (label.to_string(), scheme.interpolate(t))
            })
            .collect();
        Self { entries }
    }

    pub fn color(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, c)| c.as_str())
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }
}
