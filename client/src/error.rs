// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use mindful_event_shared::config::ConfigError;
use std::fmt;

pub enum PageError {
	Request(gloo_net::Error),
	HttpStatus(u16),
	InvalidConfig(ConfigError),
}

impl From<gloo_net::Error> for PageError {
	fn from(error: gloo_net::Error) -> Self {
		Self::Request(error)
	}
}

impl From<ConfigError> for PageError {
	fn from(error: ConfigError) -> Self {
		Self::InvalidConfig(error)
	}
}

impl fmt::Display for PageError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Request(error) => write!(f, "Failed to request data from the server: {}", error),
			Self::HttpStatus(status) => write!(f, "The server responded with status {}", status),
			Self::InvalidConfig(error) => write!(f, "The server sent an invalid configuration: {}", error),
		}
	}
}
