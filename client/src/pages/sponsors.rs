// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::color_utils::{gradient_background_style, gradient_text_style, tint_style};
use crate::page_utils::set_page_title;
use mindful_event_shared::color::{
	Accent, AMBER, BLUE, CYAN, EMERALD, INDIGO, ORANGE, PINK, PURPLE, RED, ROSE, TEAL, YELLOW,
};
use sycamore::prelude::*;

struct Sponsor {
	name: &'static str,
	logo: &'static str,
	description: &'static str,
	website: &'static str,
	accent: Accent,
}

static SPONSORS: [Sponsor; 6] = [
	Sponsor {
		name: "Qatar Foundation",
		logo: "🏢",
		description: "Supporting education and research excellence in Qatar and beyond. Leading the way in educational innovation and community development.",
		website: "www.qf.org.qa",
		accent: Accent::new(TEAL, EMERALD),
	},
	Sponsor {
		name: "Qatar National Bank",
		logo: "🛡",
		description: "Qatar's largest financial institution, supporting mental health initiatives and community wellness programs.",
		website: "www.qnb.com",
		accent: Accent::new(PURPLE, INDIGO),
	},
	Sponsor {
		name: "Ooredoo",
		logo: "🌐",
		description: "Enriching people's digital lives while promoting mental health awareness through technology and innovation.",
		website: "www.ooredoo.qa",
		accent: Accent::new(RED, ORANGE),
	},
	Sponsor {
		name: "Qatar Airways",
		logo: "✈",
		description: "Connecting the world while prioritizing passenger wellbeing and supporting mental health programs globally.",
		website: "www.qatarairways.com",
		accent: Accent::new(BLUE, CYAN),
	},
	Sponsor {
		name: "Al Jazeera",
		logo: "📻",
		description: "Global media network committed to raising awareness about mental health through impactful storytelling.",
		website: "www.aljazeera.com",
		accent: Accent::new(YELLOW, AMBER),
	},
	Sponsor {
		name: "Aspire Zone",
		logo: "🏋",
		description: "Qatar's premier sports city promoting physical and mental wellness through world-class facilities.",
		website: "www.aspirezone.qa",
		accent: Accent::new(PINK, ROSE),
	},
];

#[component]
pub fn SponsorsView<G: Html>(ctx: Scope<'_>) -> View<G> {
	log::debug!("Activating sponsors page");
	set_page_title("Sponsors");

	let sponsor_views = View::new_fragment(
		SPONSORS
			.iter()
			.enumerate()
			.map(|(index, sponsor)| {
				// Cards fade in one after another
				let card_style = format!("animation-delay: {}ms; {}", index * 200, tint_style(&sponsor.accent));
				let logo_style = gradient_background_style(&sponsor.accent);
				let link_style = gradient_text_style(&sponsor.accent);
				let link = format!("https://{}", sponsor.website);
				view! {
					ctx,
					div(class="sponsor_card", style=card_style) {
						div(class="sponsor_card_logo", style=logo_style) { (sponsor.logo) }
						h3 { (sponsor.name) }
						p(class="sponsor_card_description") { (sponsor.description) }
						a(class="sponsor_card_link", href=link, target="_blank", rel="external noopener noreferrer") {
							span(style=link_style) { "Visit Website" }
							" ↗"
						}
					}
				}
			})
			.collect(),
	);

	view! {
		ctx,
		div(id="sponsors") {
			h1 { "Our Amazing Sponsors" }
			p(id="sponsors_tagline") { "Meet the organizations making mental health awareness possible at UDST" }
			div(id="sponsors_grid") { (sponsor_views) }
		}
	}
}
