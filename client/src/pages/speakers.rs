// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::color_utils::{gradient_background_style, tint_style};
use crate::components::registration_counter::RegistrationCounter;
use crate::page_utils::set_page_title;
use mindful_event_shared::color::{Accent, BLUE, GREEN, INDIGO, PINK, PURPLE, TEAL, YELLOW};
use sycamore::prelude::*;

struct Speaker {
	name: &'static str,
	role: &'static str,
	bio: &'static str,
	icon: &'static str,
	accent: Accent,
}

static SPEAKERS: [Speaker; 6] = [
	Speaker {
		name: "Dr. Sarah Johnson",
		role: "Clinical Psychologist",
		bio: "Specializing in anxiety and stress management techniques for academic environments.",
		icon: "🧠",
		accent: Accent::new(TEAL, BLUE),
	},
	Speaker {
		name: "Prof. Michael Chen",
		role: "Neuroscience Researcher",
		bio: "Exploring the connection between mindfulness practices and brain health.",
		icon: "🧠",
		accent: Accent::new(BLUE, PURPLE),
	},
	Speaker {
		name: "Aisha Al-Mahmoud",
		role: "Wellness Coach",
		bio: "Guiding students through personalized wellness journeys with cultural sensitivity.",
		icon: "♥",
		accent: Accent::new(TEAL, GREEN),
	},
	Speaker {
		name: "Dr. James Wilson",
		role: "Psychiatrist",
		bio: "Expert in treating anxiety and depression in university students.",
		icon: "💊",
		accent: Accent::new(BLUE, INDIGO),
	},
	Speaker {
		name: "Fatima Al-Thani",
		role: "Mental Health Advocate",
		bio: "Sharing personal journey and strategies for building resilience.",
		icon: "👥",
		accent: Accent::new(PURPLE, PINK),
	},
	Speaker {
		name: "Dr. Lisa Zhang",
		role: "Nutritional Psychiatrist",
		bio: "Exploring the connection between diet, gut health, and mental wellbeing.",
		icon: "🍎",
		accent: Accent::new(GREEN, YELLOW),
	},
];

#[component]
pub fn SpeakersView<G: Html>(ctx: Scope<'_>) -> View<G> {
	log::debug!("Activating speakers page");
	set_page_title("Speakers");

	let speaker_views = View::new_fragment(
		SPEAKERS
			.iter()
			.map(|speaker| {
				let banner_style = tint_style(&speaker.accent);
				let icon_style = gradient_background_style(&speaker.accent);
				view! {
					ctx,
					div(class="speaker_card") {
						div(class="speaker_card_banner", style=banner_style) {
							div(class="speaker_card_icon", style=icon_style) { (speaker.icon) }
						}
						div(class="speaker_card_body") {
							h3 { (speaker.name) }
							p(class="speaker_card_role") { (speaker.role) }
							p { (speaker.bio) }
						}
					}
				}
			})
			.collect(),
	);

	view! {
		ctx,
		div(id="speakers") {
			div(id="speakers_header") {
				h1 { "Our Expert Speakers" }
				p {
					"Learn from leading mental health professionals, wellness experts, and individuals with lived experiences who will share valuable insights and strategies."
				}
			}
			div(id="speakers_grid") { (speaker_views) }
			RegistrationCounter
		}
	}
}
