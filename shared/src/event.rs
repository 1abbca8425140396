// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Fixed details of the event, shown on the home page and sent along with every confirmation message
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct EventMetadata {
	pub name: String,
	pub start_date: NaiveDate,
	pub end_date: NaiveDate,
	pub location: String,
	pub entry_cost: String,
	pub website: String,
	pub contact_email: String,
	pub team_name: String,
	pub speaker_highlight: String,
}

impl EventMetadata {
	/// Renders the date range compactly, e.g. "April 10-12, 2025"
	pub fn date_range_label(&self) -> String {
		let start = self.start_date;
		let end = self.end_date;
		if start == end {
			return start.format("%B %-d, %Y").to_string();
		}
		if start.year() != end.year() {
			return format!("{} - {}", start.format("%B %-d, %Y"), end.format("%B %-d, %Y"));
		}
		if start.month() != end.month() {
			return format!("{} - {}, {}", start.format("%B %-d"), end.format("%B %-d"), end.year());
		}
		format!("{} {}-{}, {}", start.format("%B"), start.day(), end.day(), end.year())
	}

	/// Number of calendar days the event runs, counting both ends
	pub fn day_count(&self) -> i64 {
		(self.end_date - self.start_date).num_days() + 1
	}

	pub fn duration_label(&self) -> String {
		match self.day_count() {
			1 => String::from("1 Day"),
			days => format!("{} Days", days),
		}
	}
}

impl Default for EventMetadata {
	fn default() -> Self {
		Self {
			name: String::from("UDST Mental Health Event"),
			start_date: NaiveDate::from_ymd_opt(2025, 4, 10).unwrap_or_default(),
			end_date: NaiveDate::from_ymd_opt(2025, 4, 12).unwrap_or_default(),
			location: String::from("UDST Main Campus"),
			entry_cost: String::from("FREE"),
			website: String::from("www.udst.edu.qa"),
			contact_email: String::from("info@udst.edu.qa"),
			team_name: String::from("The MindFul UDST Team"),
			speaker_highlight: String::from("15+ Speakers"),
		}
	}
}
