// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use mindful_event_shared::config::SiteConfig;
use sycamore::prelude::*;
use sycamore::suspense::Suspense;
use sycamore_router::{HistoryIntegration, Route, Router};

mod color_utils;
mod components;
mod config;
mod email;
mod error;
mod page_utils;
mod pages;

use components::nav_bar::NavBar;
use config::load_site_config;
use email::EmailJsSender;
use pages::home::HomeView;
use pages::not_found::NotFoundView;
use pages::speakers::SpeakersView;
use pages::sponsors::SponsorsView;

#[derive(Route)]
enum SiteRoute {
	#[to("/")]
	Home,
	#[to("/speakers")]
	Speakers,
	#[to("/sponsors")]
	Sponsors,
	#[not_found]
	NotFound,
}

#[component]
async fn ConfiguredSiteView<G: Html>(ctx: Scope<'_>) -> View<G> {
	let config = match load_site_config().await {
		Ok(config) => config,
		Err(error) => {
			log::warn!("Using the built-in site configuration: {}", error);
			SiteConfig::default()
		}
	};
	log::debug!("Loaded configuration for {}", config.event.name);

	let sender = EmailJsSender::new(config.email.clone());
	provide_context(ctx, config);
	provide_context(ctx, sender);

	view! {
		ctx,
		Router(
			integration=HistoryIntegration::new(),
			view=|ctx, route: &ReadSignal<SiteRoute>| {
				view! {
					ctx,
					NavBar
					main(id="page") {
						(match route.get().as_ref() {
							SiteRoute::Home => view! { ctx, HomeView },
							SiteRoute::Speakers => view! { ctx, SpeakersView },
							SiteRoute::Sponsors => view! { ctx, SponsorsView },
							SiteRoute::NotFound => view! { ctx, NotFoundView },
						})
					}
				}
			}
		)
	}
}

fn main() {
	console_error_panic_hook::set_once();
	let log_level = if cfg!(debug_assertions) {
		log::Level::Debug
	} else {
		log::Level::Info
	};
	wasm_logger::init(wasm_logger::Config::new(log_level));

	sycamore::render(|ctx| {
		view! {
			ctx,
			div(id="site") {
				Suspense(fallback=view! { ctx, div(id="site_loading") { "Loading..." } }) {
					ConfiguredSiteView
				}
			}
		}
	});
}
