// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use rgb::RGB8;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::num::ParseIntError;

#[derive(Debug)]
pub enum RgbColorError {
	InvalidLength,
	InvalidData(ParseIntError),
}

impl fmt::Display for RgbColorError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::InvalidLength => write!(f, "color value is an invalid length"),
			Self::InvalidData(error) => write!(f, "could not parse color value: {}", error),
		}
	}
}

impl Error for RgbColorError {}

impl From<ParseIntError> for RgbColorError {
	fn from(value: ParseIntError) -> Self {
		Self::InvalidData(value)
	}
}

/// Converts a color from a #abcdef string to an RGB8.
pub fn color_from_rgb_str(color_str: &str) -> Result<RGB8, RgbColorError> {
	let color_str = color_str.strip_prefix('#').unwrap_or(color_str);
	if color_str.len() != 6 || !color_str.is_ascii() {
		return Err(RgbColorError::InvalidLength);
	}

	let color_red = u8::from_str_radix(&color_str[0..2], 16)?;
	let color_green = u8::from_str_radix(&color_str[2..4], 16)?;
	let color_blue = u8::from_str_radix(&color_str[4..6], 16)?;

	Ok(RGB8::new(color_red, color_green, color_blue))
}

pub fn rgb_str_from_color(color: RGB8) -> String {
	format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

/// A two-stop accent gradient used to tint cards and buttons
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Accent {
	pub from: RGB8,
	pub to: RGB8,
}

impl Accent {
	pub const fn new(from: RGB8, to: RGB8) -> Self {
		Self { from, to }
	}

	/// Generates a CSS `linear-gradient` value running from the top left corner
	pub fn css_gradient(&self) -> String {
		format!(
			"linear-gradient(to bottom right, {}, {})",
			rgb_str_from_color(self.from),
			rgb_str_from_color(self.to)
		)
	}
}

pub const TEAL: RGB8 = RGB8::new(0x14, 0xb8, 0xa6);
pub const EMERALD: RGB8 = RGB8::new(0x10, 0xb9, 0x81);
pub const PURPLE: RGB8 = RGB8::new(0xa8, 0x55, 0xf7);
pub const INDIGO: RGB8 = RGB8::new(0x63, 0x66, 0xf1);
pub const RED: RGB8 = RGB8::new(0xef, 0x44, 0x44);
pub const ORANGE: RGB8 = RGB8::new(0xf9, 0x73, 0x16);
pub const BLUE: RGB8 = RGB8::new(0x3b, 0x82, 0xf6);
pub const CYAN: RGB8 = RGB8::new(0x06, 0xb6, 0xd4);
pub const YELLOW: RGB8 = RGB8::new(0xea, 0xb3, 0x08);
pub const AMBER: RGB8 = RGB8::new(0xf5, 0x9e, 0x0b);
pub const PINK: RGB8 = RGB8::new(0xec, 0x48, 0x99);
pub const ROSE: RGB8 = RGB8::new(0xf4, 0x3f, 0x5e);
pub const GREEN: RGB8 = RGB8::new(0x22, 0xc5, 0x5e);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_with_and_without_hash() {
		assert_eq!(color_from_rgb_str("#14b8a6").unwrap(), TEAL);
		assert_eq!(color_from_rgb_str("14B8A6").unwrap(), TEAL);
	}

	#[test]
	fn rejects_bad_lengths_and_digits() {
		assert!(matches!(color_from_rgb_str("#fff"), Err(RgbColorError::InvalidLength)));
		assert!(matches!(color_from_rgb_str("#14b8a6ff"), Err(RgbColorError::InvalidLength)));
		assert!(matches!(color_from_rgb_str("#zzb8a6"), Err(RgbColorError::InvalidData(_))));
		assert!(matches!(color_from_rgb_str("#ééé"), Err(RgbColorError::InvalidLength)));
	}

	#[test]
	fn formats_gradient() {
		let accent = Accent::new(TEAL, BLUE);
		assert_eq!(rgb_str_from_color(TEAL), "#14b8a6");
		assert_eq!(accent.css_gradient(), "linear-gradient(to bottom right, #14b8a6, #3b82f6)");
	}
}
