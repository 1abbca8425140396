// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use mindful_event_shared::color::Accent;
use rgb::RGB8;

pub fn gradient_background_style(accent: &Accent) -> String {
	format!("background-image: {};", accent.css_gradient())
}

/// Gradient-filled text; the element's own color has to be transparent for it to show
pub fn gradient_text_style(accent: &Accent) -> String {
	format!(
		"background-image: {}; background-clip: text; -webkit-background-clip: text; color: transparent;",
		accent.css_gradient()
	)
}

/// A translucent version of a color, with opacity given in percent
pub fn translucent(color: RGB8, opacity_percent: u8) -> String {
	let opacity = f64::from(opacity_percent.min(100)) / 100.0;
	format!("rgba({}, {}, {}, {})", color.r, color.g, color.b, opacity)
}

/// A faint card tint running between the accent's two colors
pub fn tint_style(accent: &Accent) -> String {
	format!(
		"background-image: linear-gradient(to right, {}, {});",
		translucent(accent.from, 10),
		translucent(accent.to, 10)
	)
}
