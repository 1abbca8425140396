// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::page_utils::set_page_title;
use mindful_event_shared::config::SiteConfig;
use sycamore::prelude::*;

struct ExternalLink {
	label: &'static str,
	url: &'static str,
}

static EXTERNAL_LINKS: [ExternalLink; 3] = [
	ExternalLink {
		label: "UDST",
		url: "https://www.udst.edu.qa/",
	},
	ExternalLink {
		label: "Mental Health Qatar",
		url: "https://hamad.qa/EN/Hospitals-and-services/HMC-Mental-Health-Service/Pages/default.aspx",
	},
	ExternalLink {
		label: "Wellness Center",
		url: "https://www.udst.edu.qa/sport-and-wellness/wellness-programs",
	},
];

struct ScheduleSlot {
	time: &'static str,
	title: &'static str,
	detail: &'static str,
}

struct ScheduleDay {
	heading: &'static str,
	slots: [ScheduleSlot; 3],
}

static SCHEDULE: [ScheduleDay; 3] = [
	ScheduleDay {
		heading: "Day 1 - Opening & Wellness",
		slots: [
			ScheduleSlot {
				time: "9:00 AM",
				title: "Opening Ceremony",
				detail: "Welcome address",
			},
			ScheduleSlot {
				time: "11:00 AM",
				title: "Mindfulness",
				detail: "Meditation session",
			},
			ScheduleSlot {
				time: "2:00 PM",
				title: "Panel Talk",
				detail: "Expert discussion",
			},
		],
	},
	ScheduleDay {
		heading: "Day 2 - Skills & Strategies",
		slots: [
			ScheduleSlot {
				time: "10:00 AM",
				title: "Workshop",
				detail: "Stress management",
			},
			ScheduleSlot {
				time: "1:00 PM",
				title: "Sessions",
				detail: "Topic breakouts",
			},
			ScheduleSlot {
				time: "3:30 PM",
				title: "Activities",
				detail: "Team building",
			},
		],
	},
	ScheduleDay {
		heading: "Day 3 - Community",
		slots: [
			ScheduleSlot {
				time: "9:30 AM",
				title: "Resource Fair",
				detail: "Explore resources",
			},
			ScheduleSlot {
				time: "11:30 AM",
				title: "Network",
				detail: "Support building",
			},
			ScheduleSlot {
				time: "2:30 PM",
				title: "Closing",
				detail: "Final remarks",
			},
		],
	},
];

#[component]
pub fn HomeView<G: Html>(ctx: Scope<'_>) -> View<G> {
	log::debug!("Activating home page");
	set_page_title("Home");

	let config: &SiteConfig = use_context(ctx);
	let event = &config.event;
	let event_dates = event.date_range_label();
	let event_duration = event.duration_label();
	let event_name = event.name.clone();
	let speaker_highlight = event.speaker_highlight.clone();
	let location = event.location.clone();
	let entry_cost = event.entry_cost.clone();

	let link_views = View::new_fragment(
		EXTERNAL_LINKS
			.iter()
			.map(|link| {
				view! {
					ctx,
					a(class="home_external_link", href=link.url, target="_blank", rel="external noopener noreferrer") { (link.label) }
				}
			})
			.collect(),
	);

	let schedule_views = View::new_fragment(
		SCHEDULE
			.iter()
			.map(|day| {
				let slot_views = View::new_fragment(
					day.slots
						.iter()
						.map(|slot| {
							view! {
								ctx,
								div(class="schedule_slot") {
									span(class="schedule_slot_time") { (slot.time) }
									div {
										h4 { (slot.title) }
										p { (slot.detail) }
									}
								}
							}
						})
						.collect(),
				);
				view! {
					ctx,
					div(class="schedule_day") {
						h3 { (day.heading) }
						div(class="schedule_day_slots") { (slot_views) }
					}
				}
			})
			.collect(),
	);

	view! {
		ctx,
		section(id="home_hero") {
			div(id="home_hero_text") {
				h1 {
					span { "Nurture your mind" }
					span(class="home_hero_accent") { "embrace wellness" }
					span { "find balance." }
				}
				p {
					"Join UDST's premier mental health event featuring expert speakers, interactive workshops, and community support resources."
				}
				div(id="home_external_links") { (link_views) }
			}
			div(id="home_event_card") {
				div(class="home_event_card_banner") {
					div(class="home_event_card_title") {
						span(class="home_event_card_logo") { "M" }
						div {
							p { (event_name) }
							p { (event_dates) }
						}
					}
					p { "Event Highlights" }
					p(class="home_event_card_highlight") { (speaker_highlight) }
					p { (location) }
					div(class="home_event_card_footer") {
						p { (event_duration) }
						span(class="home_event_card_cost") { (entry_cost) " ✓" }
					}
				}
				div(class="home_attendee_options") {
					label(class="home_attendee_option") {
						input(type="radio", name="attendee", value="student", checked=true)
						"Student Attendee"
					}
					label(class="home_attendee_option") {
						input(type="radio", name="attendee", value="faculty")
						"Faculty/Staff Member"
					}
				}
				a(id="home_reserve_link", href="/speakers") { "Reserve Your Spot" }
			}
		}
		section(id="home_schedule") {
			h2 { "EVENT SCHEDULE" }
			div(class="schedule_days") { (schedule_views) }
		}
	}
}
