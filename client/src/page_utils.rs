// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

pub const SITE_NAME: &str = "MindfulUDST";

pub fn set_page_title(new_title: &str) {
	if let Some(window) = window() {
		if let Some(document) = window.document() {
			document.set_title(&format!("{} | {}", new_title, SITE_NAME));
		}
	}
}

/// Smoothly scrolls the element with the given ID to the top of the viewport, if it exists.
pub fn scroll_to_element(element_id: &str) {
	let Some(window) = window() else {
		return;
	};
	let Some(document) = window.document() else {
		return;
	};
	let Some(element) = document.get_element_by_id(element_id) else {
		return;
	};
	let mut scroll_into_view_options = ScrollIntoViewOptions::new();
	scroll_into_view_options.behavior(ScrollBehavior::Smooth);
	scroll_into_view_options.block(ScrollLogicalPosition::Start);
	element.scroll_into_view_with_scroll_into_view_options(&scroll_into_view_options);
}
