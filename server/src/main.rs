// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use async_std::path::PathBuf;
use clap::Parser;
use miette::{IntoDiagnostic, Result};

mod args;
use args::CliArgs;

mod config;
use config::parse_config;

mod file_types;

mod web;
use web::add_routes;

#[async_std::main]
async fn main() -> Result<()> {
	let args = CliArgs::parse();
	let config = parse_config(&args.config)?;
	let listen_address = config.listen_address.clone();
	let static_directory = PathBuf::from(&config.static_directory);
	let site_config = config.site_config()?;

	if args.check_config {
		let site_config_json = serde_json::to_string_pretty(&site_config).into_diagnostic()?;
		println!("{}", site_config_json);
		return Ok(());
	}

	tide::log::start();
	let site_config_json = serde_json::to_string(&site_config).into_diagnostic()?;
	tide::log::info!(
		"Serving {} ({}) from {}",
		site_config.event.name,
		site_config.event.date_range_label(),
		static_directory.display()
	);

	let mut app = tide::new();
	add_routes(&mut app, static_directory, site_config_json);
	app.listen(listen_address).await.into_diagnostic()?;

	Ok(())
}
