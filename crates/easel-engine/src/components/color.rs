use serde::{Deserialize, Serialize};

/// 24-bit RGB color packed as `0xRRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rgb(pub u32);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0x000000);
    pub const WHITE: Rgb = Rgb(0xffffff);

    pub fn from_channels(r: u8, g: u8, b: u8) -> Self {
        Rgb(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn b(self) -> u8 {
        self.0 as u8
    }

    pub fn channels(self) -> [u8; 3] {
        [self.r(), self.g(), self.b()]
    }

    /// Build a color from hue, saturation and value, each in `[0, 1]`.
    /// Hue wraps, so `1.0` is red again.
    pub fn from_hsv(h: f32, s: f32, v: f32) -> Self {
        let h = h.rem_euclid(1.0) * 6.0;
        let s = s.clamp(0.0, 1.0);
        let v = v.clamp(0.0, 1.0);

        let sector = h.floor();
        let f = h - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - f * s);
        let t = v * (1.0 - (1.0 - f) * s);

        let (r, g, b) = match sector as u32 % 6 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Rgb::from_channels(unit_to_byte(r), unit_to_byte(g), unit_to_byte(b))
    }

    pub fn inverted(self) -> Self {
        Rgb(0xffffff - (self.0 & 0xffffff))
    }

    /// Black on light colors, white on dark ones.
    pub fn outline(self) -> Self {
        let sum = self.r() as u32 + self.g() as u32 + self.b() as u32;
        if sum > 384 {
            Rgb::BLACK
        } else {
            Rgb::WHITE
        }
    }

    /// Packed value as f32 for the wire buffers. Exact: 0xFFFFFF < 2^24.
    pub fn to_f32(self) -> f32 {
        (self.0 & 0xffffff) as f32
    }
}

fn unit_to_byte(x: f32) -> u8 {
    (x * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_round_trip() {
        let c = Rgb::from_channels(0x12, 0x34, 0x56);
        assert_eq!(c, Rgb(0x123456));
        assert_eq!(c.channels(), [0x12, 0x34, 0x56]);
    }

    #[test]
    fn hsv_primaries() {
        assert_eq!(Rgb::from_hsv(0.0, 1.0, 1.0), Rgb(0xff0000));
        assert_eq!(Rgb::from_hsv(1.0 / 3.0, 1.0, 1.0), Rgb(0x00ff00));
        assert_eq!(Rgb::from_hsv(2.0 / 3.0, 1.0, 1.0), Rgb(0x0000ff));
        assert_eq!(Rgb::from_hsv(1.0, 1.0, 1.0), Rgb(0xff0000));
    }

    #[test]
    fn hsv_quarter_turn_is_chartreuse() {
        assert_eq!(Rgb::from_hsv(0.25, 1.0, 1.0), Rgb(0x80ff00));
    }

    #[test]
    fn hsv_zero_saturation_is_grey() {
        assert_eq!(Rgb::from_hsv(0.6, 0.0, 0.5), Rgb(0x808080));
    }

    #[test]
    fn inverted_and_outline() {
        assert_eq!(Rgb::WHITE.inverted(), Rgb::BLACK);
        assert_eq!(Rgb(0x102030).inverted(), Rgb(0xefdfcf));
        assert_eq!(Rgb::WHITE.outline(), Rgb::BLACK);
        assert_eq!(Rgb(0x800000).outline(), Rgb::WHITE);
    }

    #[test]
    fn packs_exactly_into_f32() {
        assert_eq!(Rgb::WHITE.to_f32() as u32, 0xffffff);
    }
}
