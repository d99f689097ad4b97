use std::str::FromStr;

use crate::error::PlotError;

/// RGBA color in linear space.
///
/// All components are expected to be in the 0.0..=1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Create a new color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from 8-bit channels.
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// CSS `grey`.
    pub const GREY: Self = Self::rgb8(128, 128, 128);
    /// CSS `red`.
    pub const RED: Self = Self::rgb8(255, 0, 0);
    /// CSS `blue`.
    pub const BLUE: Self = Self::rgb8(0, 0, 255);
    /// Fully transparent.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Parse a CSS-style color: a basic named color, `#rgb`, `#rrggbb` or
    /// `#rrggbbaa`.
    pub fn parse(style: &str) -> Result<Self, PlotError> {
        let trimmed = style.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| PlotError::InvalidColor(style.to_string()));
        }
        named(&trimmed.to_ascii_lowercase()).ok_or_else(|| PlotError::InvalidColor(style.to_string()))
    }
}

impl FromStr for Color {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn named(name: &str) -> Option<Color> {
    let color = match name {
        "black" => Color::BLACK,
        "white" => Color::WHITE,
        "grey" | "gray" => Color::GREY,
        "silver" => Color::rgb8(192, 192, 192),
        "red" => Color::RED,
        "green" => Color::rgb8(0, 128, 0),
        "lime" => Color::rgb8(0, 255, 0),
        "blue" => Color::BLUE,
        "navy" => Color::rgb8(0, 0, 128),
        "yellow" => Color::rgb8(255, 255, 0),
        "orange" => Color::rgb8(255, 165, 0),
        "purple" => Color::rgb8(128, 0, 128),
        "magenta" | "fuchsia" => Color::rgb8(255, 0, 255),
        "cyan" | "aqua" => Color::rgb8(0, 255, 255),
        "teal" => Color::rgb8(0, 128, 128),
        "maroon" => Color::rgb8(128, 0, 0),
        "olive" => Color::rgb8(128, 128, 0),
        "transparent" => Color::TRANSPARENT,
        _ => return None,
    };
    Some(color)
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    match hex.len() {
        3 => {
            let short = |index: usize| channel(index..index + 1).map(|v| v * 17);
            Some(Color::rgb8(short(0)?, short(1)?, short(2)?))
        }
        6 => Some(Color::rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        8 => {
            let mut color = Color::rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?);
            color.a = channel(6..8)? as f32 / 255.0;
            Some(color)
        }
        _ => None,
    }
}
