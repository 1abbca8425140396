// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::NaiveDate;
use knuffel::Decode;
use miette::{IntoDiagnostic, Result, WrapErr};
use mindful_event_shared::color::{color_from_rgb_str, Accent};
use mindful_event_shared::config::{EmailSettings, RegistrationSettings, SiteConfig, TickerSettings};
use mindful_event_shared::event::EventMetadata;
use rgb::RGB8;
use std::fs;

#[derive(Debug, Decode)]
pub struct ConfigDocument {
	#[knuffel(child, unwrap(argument))]
	pub listen_address: String,
	#[knuffel(child, unwrap(argument))]
	pub static_directory: String,
	#[knuffel(child, unwrap(argument))]
	pub success_close_ms: Option<u32>,
	#[knuffel(child)]
	pub registration: Option<RegistrationConfig>,
	#[knuffel(child)]
	pub ticker: Option<TickerConfig>,
	#[knuffel(child)]
	pub email: Option<EmailConfig>,
	#[knuffel(child)]
	pub event: Option<EventConfig>,
	#[knuffel(child)]
	pub theme: Option<ThemeConfig>,
}

#[derive(Debug, Decode)]
pub struct RegistrationConfig {
	#[knuffel(property)]
	pub initial_count: Option<u32>,
	#[knuffel(property)]
	pub goal: Option<u32>,
}

#[derive(Debug, Decode)]
pub struct TickerConfig {
	#[knuffel(property)]
	pub interval_ms: Option<u32>,
	#[knuffel(property)]
	pub probability: Option<f64>,
	#[knuffel(property)]
	pub min_increment: Option<u32>,
	#[knuffel(property)]
	pub max_increment: Option<u32>,
	#[knuffel(property)]
	pub badge_ms: Option<u32>,
}

#[derive(Debug, Decode)]
pub struct EmailConfig {
	#[knuffel(property)]
	pub endpoint: Option<String>,
	#[knuffel(property)]
	pub service_id: Option<String>,
	#[knuffel(property)]
	pub template_id: Option<String>,
	#[knuffel(property)]
	pub public_key: Option<String>,
}

#[derive(Debug, Decode)]
pub struct EventConfig {
	#[knuffel(property)]
	pub name: Option<String>,
	/// YYYY-MM-DD
	#[knuffel(property)]
	pub start_date: Option<String>,
	/// YYYY-MM-DD
	#[knuffel(property)]
	pub end_date: Option<String>,
	#[knuffel(property)]
	pub location: Option<String>,
	#[knuffel(property)]
	pub entry_cost: Option<String>,
	#[knuffel(property)]
	pub website: Option<String>,
	#[knuffel(property)]
	pub contact_email: Option<String>,
	#[knuffel(property)]
	pub team_name: Option<String>,
	#[knuffel(property)]
	pub speaker_highlight: Option<String>,
}

/// Colors are given as #rrggbb
#[derive(Debug, Decode)]
pub struct ThemeConfig {
	#[knuffel(property)]
	pub accent_from: Option<String>,
	#[knuffel(property)]
	pub accent_to: Option<String>,
}

fn parse_date(date: &str) -> Result<NaiveDate> {
	NaiveDate::parse_from_str(date, "%Y-%m-%d")
		.into_diagnostic()
		.wrap_err_with(|| format!("Invalid event date \"{}\" (expected YYYY-MM-DD)", date))
}

fn parse_color(color: &str) -> Result<RGB8> {
	color_from_rgb_str(color)
		.into_diagnostic()
		.wrap_err_with(|| format!("Invalid theme color \"{}\" (expected #rrggbb)", color))
}

impl RegistrationConfig {
	fn apply(self, settings: &mut RegistrationSettings) {
		if let Some(initial_count) = self.initial_count {
			settings.initial_count = initial_count;
		}
		if let Some(goal) = self.goal {
			settings.goal = goal;
		}
	}
}

impl TickerConfig {
	fn apply(self, settings: &mut TickerSettings) {
		if let Some(interval_ms) = self.interval_ms {
			settings.interval_ms = interval_ms;
		}
		if let Some(probability) = self.probability {
			settings.probability = probability;
		}
		if let Some(min_increment) = self.min_increment {
			settings.min_increment = min_increment;
		}
		if let Some(max_increment) = self.max_increment {
			settings.max_increment = max_increment;
		}
		if let Some(badge_ms) = self.badge_ms {
			settings.badge_ms = badge_ms;
		}
	}
}

impl EmailConfig {
	fn apply(self, settings: &mut EmailSettings) {
		if let Some(endpoint) = self.endpoint {
			settings.endpoint = endpoint;
		}
		if let Some(service_id) = self.service_id {
			settings.service_id = service_id;
		}
		if let Some(template_id) = self.template_id {
			settings.template_id = template_id;
		}
		if let Some(public_key) = self.public_key {
			settings.public_key = public_key;
		}
	}
}

impl EventConfig {
	fn apply(self, event: &mut EventMetadata) -> Result<()> {
		if let Some(start_date) = self.start_date {
			event.start_date = parse_date(&start_date)?;
		}
		if let Some(end_date) = self.end_date {
			event.end_date = parse_date(&end_date)?;
		}
		let text_fields = [
			(self.name, &mut event.name),
			(self.location, &mut event.location),
			(self.entry_cost, &mut event.entry_cost),
			(self.website, &mut event.website),
			(self.contact_email, &mut event.contact_email),
			(self.team_name, &mut event.team_name),
			(self.speaker_highlight, &mut event.speaker_highlight),
		];
		for (value, field) in text_fields {
			if let Some(value) = value {
				*field = value;
			}
		}
		Ok(())
	}
}

impl ThemeConfig {
	fn apply(self, accent: &mut Accent) -> Result<()> {
		if let Some(accent_from) = self.accent_from {
			accent.from = parse_color(&accent_from)?;
		}
		if let Some(accent_to) = self.accent_to {
			accent.to = parse_color(&accent_to)?;
		}
		Ok(())
	}
}

impl ConfigDocument {
	/// Builds the configuration sent to the client. Anything the document leaves out keeps its default.
	pub fn site_config(self) -> Result<SiteConfig> {
		let mut site_config = SiteConfig::default();
		if let Some(success_close_ms) = self.success_close_ms {
			site_config.success_close_ms = success_close_ms;
		}
		if let Some(registration) = self.registration {
			registration.apply(&mut site_config.registration);
		}
		if let Some(ticker) = self.ticker {
			ticker.apply(&mut site_config.ticker);
		}
		if let Some(email) = self.email {
			email.apply(&mut site_config.email);
		}
		if let Some(event) = self.event {
			event.apply(&mut site_config.event)?;
		}
		if let Some(theme) = self.theme {
			theme.apply(&mut site_config.accent)?;
		}
		site_config
			.validate()
			.into_diagnostic()
			.wrap_err("The site configuration is invalid")?;
		Ok(site_config)
	}
}

pub fn parse_config_str(file_name: &str, contents: &str) -> Result<ConfigDocument> {
	let config = knuffel::parse(file_name, contents)?;
	Ok(config)
}

pub fn parse_config(config_path: &str) -> Result<ConfigDocument> {
	let config_file_contents = fs::read_to_string(config_path)
		.into_diagnostic()
		.wrap_err_with(|| format!("Failed to read configuration file {}", config_path))?;
	parse_config_str(config_path, &config_file_contents)
}

#[cfg(test)]
mod tests {
	use super::*;
	use mindful_event_shared::config::DEFAULT_ACCENT;

	const FULL_CONFIG: &str = r##"
listen-address "127.0.0.1:8080"
static-directory "static"
success-close-ms 5000
registration initial-count=10 goal=50
ticker interval-ms=2000 probability=0.5 min-increment=1 max-increment=3 badge-ms=600
email service-id="service_test" template-id="template_test" public-key="key_test"
event name="Spring Wellness Week" start-date="2026-03-01" end-date="2026-03-05" location="Library Hall"
theme accent-from="#7c3aed" accent-to="#DB2777"
"##;

	#[test]
	fn full_document_overrides_defaults() {
		let document = parse_config_str("test.kdl", FULL_CONFIG).unwrap();
		assert_eq!(document.listen_address, "127.0.0.1:8080");
		assert_eq!(document.static_directory, "static");

		let site_config = document.site_config().unwrap();
		assert_eq!(site_config.success_close_ms, 5000);
		assert_eq!(
			site_config.registration,
			RegistrationSettings {
				initial_count: 10,
				goal: 50
			}
		);
		assert_eq!(site_config.ticker.interval_ms, 2000);
		assert_eq!(site_config.ticker.probability, 0.5);
		assert_eq!(site_config.ticker.max_increment, 3);
		assert_eq!(site_config.ticker.badge_ms, 600);
		assert_eq!(site_config.email.service_id, "service_test");
		assert_eq!(site_config.email.endpoint, EmailSettings::default().endpoint);
		assert_eq!(site_config.event.name, "Spring Wellness Week");
		assert_eq!(site_config.event.location, "Library Hall");
		assert_eq!(site_config.event.date_range_label(), "March 1-5, 2026");
		assert_eq!(site_config.event.team_name, EventMetadata::default().team_name);
		assert_eq!(
			site_config.accent,
			Accent::new(RGB8::new(0x7c, 0x3a, 0xed), RGB8::new(0xdb, 0x27, 0x77))
		);
	}

	#[test]
	fn theme_keeps_unset_accent_stop() {
		let document = parse_config_str(
			"test.kdl",
			"listen-address \"0.0.0.0:80\"\nstatic-directory \"static\"\ntheme accent-to=\"22c55e\"\n",
		)
		.unwrap();
		let accent = document.site_config().unwrap().accent;
		assert_eq!(accent.from, DEFAULT_ACCENT.from);
		assert_eq!(accent.to, RGB8::new(0x22, 0xc5, 0x5e));
	}

	#[test]
	fn malformed_theme_color_is_rejected() {
		for color in ["#fff", "#14b8zz", "teal"] {
			let contents = format!(
				"listen-address \"0.0.0.0:80\"\nstatic-directory \"static\"\ntheme accent-from=\"{}\"\n",
				color
			);
			let document = parse_config_str("test.kdl", &contents).unwrap();
			assert!(document.site_config().is_err(), "{} should be rejected", color);
		}
	}

	#[test]
	fn minimal_document_uses_defaults() {
		let document = parse_config_str(
			"test.kdl",
			"listen-address \"0.0.0.0:80\"\nstatic-directory \"/srv/site\"\n",
		)
		.unwrap();
		assert_eq!(document.site_config().unwrap(), SiteConfig::default());
	}

	#[test]
	fn missing_listen_address_is_an_error() {
		assert!(parse_config_str("test.kdl", "static-directory \"static\"\n").is_err());
	}

	#[test]
	fn invalid_values_are_rejected() {
		let document = parse_config_str(
			"test.kdl",
			"listen-address \"0.0.0.0:80\"\nstatic-directory \"static\"\nregistration goal=0\n",
		)
		.unwrap();
		assert!(document.site_config().is_err());

		let document = parse_config_str(
			"test.kdl",
			"listen-address \"0.0.0.0:80\"\nstatic-directory \"static\"\nevent start-date=\"April 10\"\n",
		)
		.unwrap();
		assert!(document.site_config().is_err());
	}
}
