// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::color::{Accent, BLUE, TEAL};
use crate::event::EventMetadata;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::time::Duration;

/// Everything the client needs to know to run the site.
///
/// The host serves this as JSON; the client falls back to [SiteConfig::default] when it can't get one.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SiteConfig {
	pub event: EventMetadata,
	pub registration: RegistrationSettings,
	pub ticker: TickerSettings,
	pub email: EmailSettings,
	/// Gradient for the registration widget's progress bar and call to action
	pub accent: Accent,
	pub success_close_ms: u32,
}

impl Default for SiteConfig {
	fn default() -> Self {
		Self {
			event: EventMetadata::default(),
			registration: RegistrationSettings::default(),
			ticker: TickerSettings::default(),
			email: EmailSettings::default(),
			accent: DEFAULT_ACCENT,
			success_close_ms: DEFAULT_SUCCESS_CLOSE_MS,
		}
	}
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct RegistrationSettings {
	pub initial_count: u32,
	pub goal: u32,
}

impl Default for RegistrationSettings {
	fn default() -> Self {
		Self {
			initial_count: 75,
			goal: 200,
		}
	}
}

/// Settings for the simulated registration ticker
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct TickerSettings {
	pub interval_ms: u32,
	/// Chance, from 0 to 1, that any one tick adds registrations
	pub probability: f64,
	pub min_increment: u32,
	pub max_increment: u32,
	/// How long the "+N" badge stays up after the count moves
	pub badge_ms: u32,
}

impl TickerSettings {
	pub fn interval(&self) -> Duration {
		Duration::from_millis(self.interval_ms.into())
	}
}

impl Default for TickerSettings {
	fn default() -> Self {
		Self {
			interval_ms: 5000,
			probability: 0.3,
			min_increment: 1,
			max_increment: 2,
			badge_ms: 800,
		}
	}
}

/// Identifiers for the EmailJS account that sends confirmation messages
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct EmailSettings {
	pub endpoint: String,
	pub service_id: String,
	pub template_id: String,
	pub public_key: String,
}

impl Default for EmailSettings {
	fn default() -> Self {
		Self {
			endpoint: String::from("https://api.emailjs.com/api/v1.0/email/send"),
			service_id: String::from("service_5wk8clf"),
			template_id: String::from("template_6ntf89w"),
			public_key: String::from("eXpZsD3U1zY8WzmJT"),
		}
	}
}

pub const DEFAULT_SUCCESS_CLOSE_MS: u32 = 7000;
pub const DEFAULT_ACCENT: Accent = Accent::new(TEAL, BLUE);

#[derive(Debug, Eq, PartialEq)]
pub enum ConfigError {
	ZeroGoal,
	ZeroInterval,
	ProbabilityOutOfRange,
	IncrementRange { min: u32, max: u32 },
	EventEndsBeforeStart,
}

impl fmt::Display for ConfigError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::ZeroGoal => write!(f, "The registration goal must be greater than zero"),
			Self::ZeroInterval => write!(f, "The ticker interval must be greater than zero"),
			Self::ProbabilityOutOfRange => write!(f, "The ticker probability must be between 0 and 1"),
			Self::IncrementRange { min, max } => write!(
				f,
				"The minimum ticker increment ({}) is larger than the maximum ({})",
				min, max
			),
			Self::EventEndsBeforeStart => write!(f, "The event end date is before its start date"),
		}
	}
}

impl Error for ConfigError {}

impl SiteConfig {
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.registration.goal == 0 {
			return Err(ConfigError::ZeroGoal);
		}
		if self.ticker.interval_ms == 0 {
			return Err(ConfigError::ZeroInterval);
		}
		if !(0.0..=1.0).contains(&self.ticker.probability) {
			return Err(ConfigError::ProbabilityOutOfRange);
		}
		if self.ticker.min_increment > self.ticker.max_increment {
			return Err(ConfigError::IncrementRange {
				min: self.ticker.min_increment,
				max: self.ticker.max_increment,
			});
		}
		if self.event.end_date < self.event.start_date {
			return Err(ConfigError::EventEndsBeforeStart);
		}
		Ok(())
	}

	pub fn success_close_delay(&self) -> Duration {
		Duration::from_millis(self.success_close_ms.into())
	}
}
