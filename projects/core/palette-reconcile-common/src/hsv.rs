//! RGB <-> HSV colour space conversion.
//!
//! Channels are in the `[0, 1]` range, hue is in degrees.

/// A colour in the HSV colour space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    /// Hue in degrees, `[0, 360)`. `0` for greys.
    pub h: f32,
    /// Saturation, `[0, 1]`.
    pub s: f32,
    /// Value, `[0, 1]`.
    pub v: f32,
}

/// Converts an RGB colour to HSV.
///
/// Greys (`r == g == b`) have no defined hue; they map to `h = 0, s = 0`.
pub fn rgb_to_hsv(r: f32, g: f32, b: f32) -> Hsv {
    if r == g && g == b {
        return Hsv { h: 0.0, s: 0.0, v: r };
    }

    let min = r.min(g).min(b);
    let max = r.max(g).max(b);
    let delta = max - min;

    let sector = if r == max {
        (g - b) / delta // between yellow & magenta
    } else if g == max {
        2.0 + (b - r) / delta // between cyan & yellow
    } else {
        4.0 + (r - g) / delta // between magenta & cyan
    };

    let mut h = sector * 60.0;
    if h < 0.0 {
        h += 360.0;
    }

    Hsv {
        h,
        s: delta / max,
        v: max,
    }
}

/// Converts an HSV colour to RGB, returning `(r, g, b)`.
///
/// Hue is not required to be in `[0, 360)`; the sector index wraps modulo 6,
/// so `-60` and `300` are the same hue.
pub fn hsv_to_rgb(hsv: Hsv) -> (f32, f32, f32) {
    let Hsv { h, s, v } = hsv;
    if s == 0.0 {
        // achromatic (grey)
        return (v, v, v);
    }

    let h = h / 60.0;
    let floor = h.floor();
    let f = h - floor; // fractional part of h
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match (floor as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}
