// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub mod color;
pub mod config;
pub mod delivery;
pub mod email;
pub mod event;
pub mod registration;
pub mod ticker;

/// Path at which the site host publishes the [SiteConfig](config::SiteConfig) as JSON
pub const SITE_CONFIG_PATH: &str = "/site-config.json";
