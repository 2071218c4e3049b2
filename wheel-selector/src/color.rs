/// A packed `0xAARRGGBB` colour.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Argb(pub u32);

impl Argb {
    pub const fn from_channels(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
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

    /// Channel-wise linear interpolation from `self` (at `t = 0`) to `to` (at `t = 1`).
    ///
    /// Works directly on the stored sRGB channel values (no gamma correction). `t` is clamped to
    /// `[0, 1]`. The per-channel step truncates toward the start value, so both endpoints are
    /// reproduced exactly and every channel moves monotonically.
    pub fn lerp(self, to: Argb, t: f32) -> Argb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let channel = |from: u8, to: u8| -> u8 {
            let from = from as i32;
            let step = ((to as i32 - from) as f32 * t) as i32;
            (from + step).clamp(0, 255) as u8
        };
        Argb::from_channels(
            channel(self.alpha(), to.alpha()),
            channel(self.red(), to.red()),
            channel(self.green(), to.green()),
            channel(self.blue(), to.blue()),
        )
    }
}

impl From<u32> for Argb {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Argb> for u32 {
    fn from(value: Argb) -> Self {
        value.0
    }
}

/// The pair of colours blended by distance from the centre slot.
///
/// Both colours are required, so colour blending is either fully configured or disabled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorMapping {
    /// Colour of items one item width (or more) away from the centre.
    pub default: Argb,
    /// Colour of the item resting exactly at the centre.
    pub selected: Argb,
}

impl ColorMapping {
    pub fn new(default: Argb, selected: Argb) -> Self {
        Self { default, selected }
    }

    /// Blends `selected -> default` by the colorimetric fraction.
    pub fn blend(&self, fraction: f32) -> Argb {
        self.selected.lerp(self.default, fraction)
    }
}
