// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::PageError;
use gloo_net::http::Request;
use mindful_event_shared::config::SiteConfig;
use mindful_event_shared::SITE_CONFIG_PATH;

/// Gets the site configuration published by the host.
///
/// # Errors
///
/// Errors when the request fails, when the host answers with anything but success, when the body isn't a
/// configuration, and when the configuration it holds doesn't validate.
pub async fn load_site_config() -> Result<SiteConfig, PageError> {
	let response = Request::get(SITE_CONFIG_PATH).send().await?;
	if !response.ok() {
		return Err(PageError::HttpStatus(response.status()));
	}
	let config: SiteConfig = response.json().await?;
	config.validate()?;
	Ok(config)
}
