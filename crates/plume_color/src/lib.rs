//! Packed ARGB color values.
//!
//! A [`Color`] stores all four channels in a single `u32` laid out as
//! `0xAARRGGBB`. Hue, saturation and brightness are derived on demand
//! rather than stored. Construction from raw channel values is checked:
//! each channel must lie in `0..=255`, and an out-of-range value reports
//! which channel rejected it.

use std::fmt;

/// Color channel, named in out-of-range errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// Transparency channel.
    Alpha,
    /// Red channel.
    Red,
    /// Green channel.
    Green,
    /// Blue channel.
    Blue,
}

impl Channel {
    /// Lowercase channel name as used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Channel::Alpha => "alpha",
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error constructing a color from raw channel values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    /// A channel value fell outside `0..=255`.
    #[error("`{value}` is not a valid value for `{channel}`: expected 0 to 255")]
    ChannelOutOfRange {
        /// Channel that rejected the value.
        channel: Channel,
        /// The offending value.
        value: i32,
    },
}

/// A color packed as `0xAARRGGBB`.
///
/// Equality and hashing operate on the packed value, so two colors are
/// equal exactly when all four channels match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(u32);

impl Color {
    /// The all-zero color (fully transparent black).
    pub const EMPTY: Color = Color(0);

    /// Build a color from alpha, red, green and blue channel values.
    ///
    /// Channels are validated in that order; the first out-of-range value
    /// fails the whole construction.
    pub fn argb(alpha: i32, red: i32, green: i32, blue: i32) -> Result<Self, ColorError> {
        let a = check_channel(Channel::Alpha, alpha)?;
        let r = check_channel(Channel::Red, red)?;
        let g = check_channel(Channel::Green, green)?;
        let b = check_channel(Channel::Blue, blue)?;
        Ok(Self(
            u32::from(a) << 24 | u32::from(r) << 16 | u32::from(g) << 8 | u32::from(b),
        ))
    }

    /// Build an opaque color (alpha 255).
    pub fn rgb(red: i32, green: i32, blue: i32) -> Result<Self, ColorError> {
        Self::argb(255, red, green, blue)
    }

    /// Unpack a `0xAARRGGBB` value.
    #[inline]
    pub const fn from_argb(argb: u32) -> Self {
        Self(argb)
    }

    /// The packed `0xAARRGGBB` value.
    #[inline]
    pub const fn to_argb(self) -> u32 {
        self.0
    }

    /// Replace the alpha channel, keeping red, green and blue.
    pub fn with_alpha(self, alpha: i32) -> Result<Self, ColorError> {
        let a = check_channel(Channel::Alpha, alpha)?;
        Ok(Self(u32::from(a) << 24 | (self.0 & 0x00FF_FFFF)))
    }

    /// Alpha channel value.
    #[inline]
    pub const fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red channel value.
    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel value.
    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel value.
    #[inline]
    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// Brightness in `0.0..=1.0`: the mean of the extreme channels.
    pub fn brightness(self) -> f32 {
        let min = self.r().min(self.g()).min(self.b());
        let max = self.r().max(self.g()).max(self.b());
        f32::from(u16::from(max) + u16::from(min)) / 510.0
    }

    /// Saturation in `0.0..=1.0`. Greys (all channels equal) report `0.0`.
    pub fn saturation(self) -> f32 {
        let min = self.r().min(self.g()).min(self.b());
        let max = self.r().max(self.g()).max(self.b());

        if max == min {
            return 0.0;
        }

        // Fold the sum around the midpoint so saturation is symmetric
        // between light and dark colors.
        let mut sum = u16::from(max) + u16::from(min);
        if sum > 255 {
            sum = 510 - sum;
        }

        f32::from(max - min) / f32::from(sum)
    }

    /// Hue angle in degrees, derived from the dominant channel.
    /// Greys report `0.0`.
    pub fn hue(self) -> f32 {
        let r = self.r();
        let g = self.g();
        let b = self.b();
        let min = r.min(g).min(b);
        let max = r.max(g).max(b);

        if max == min {
            return 0.0;
        }

        let diff = f32::from(max - min);
        let rnorm = f32::from(max - r) / diff;
        let gnorm = f32::from(max - g) / diff;
        let bnorm = f32::from(max - b) / diff;

        // Later channels win ties, matching the sector order below.
        let mut hue = 0.0;
        if r == max {
            hue = 60.0 * (6.0 + bnorm - gnorm);
        }
        if g == max {
            hue = 60.0 * (2.0 + rnorm - bnorm);
        }
        if b == max {
            hue = 60.0 * (4.0 + gnorm - rnorm);
        }
        if hue > 360.0 {
            hue -= 360.0;
        }

        hue
    }

    /// HTML hex form `#RRGGBB`. Alpha is dropped.
    pub fn to_html(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r(), self.g(), self.b())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Color [A={}, R={}, G={}, B={}]",
            self.a(),
            self.r(),
            self.g(),
            self.b()
        )
    }
}

fn check_channel(channel: Channel, value: i32) -> Result<u8, ColorError> {
    u8::try_from(value).map_err(|_| ColorError::ChannelOutOfRange { channel, value })
}
