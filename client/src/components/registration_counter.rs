// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::color_utils::gradient_background_style;
use crate::email::EmailJsSender;
use crate::page_utils::scroll_to_element;
use gloo_timers::callback::{Interval, Timeout};
use mindful_event_shared::config::SiteConfig;
use mindful_event_shared::delivery::deliver;
use mindful_event_shared::registration::{
	DeliveryCompletion, FormPhase, FormStep, RegistrationError, RegistrationState, SubmitAction,
};
use mindful_event_shared::ticker::Ticker;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

const FORM_ELEMENT_ID: &str = "registration_form";
/// Gives the form a moment to render before scrolling to it
const FORM_SCROLL_DELAY_MS: u32 = 100;

/// Shows a "+N" badge by the counter and hides it after `badge_ms`. A newer badge replaces the timer of an older one.
fn flash_badge(badge: &RcSignal<Option<u32>>, badge_timeout: &RefCell<Option<Timeout>>, added: u32, badge_ms: u32) {
	badge.set(Some(added));
	let timeout = Timeout::new(badge_ms, {
		let badge = badge.clone();
		move || badge.set(None)
	});
	*badge_timeout.borrow_mut() = Some(timeout);
}

fn error_message(error: &RegistrationError) -> String {
	match error {
		RegistrationError::Delivery(_) => {
			String::from("We couldn't send your confirmation email. Please try again or contact support.")
		}
		error => error.to_string(),
	}
}

#[component]
pub fn RegistrationCounter<G: Html>(ctx: Scope<'_>) -> View<G> {
	let config: &SiteConfig = use_context(ctx);
	let badge_ms = config.ticker.badge_ms;
	let success_close_ms = config.success_close_ms;
	let accent_style = create_ref(ctx, gradient_background_style(&config.accent));

	let state = create_ref(
		ctx,
		create_rc_signal(RegistrationState::new(config.registration, config.event.clone())),
	);
	let badge: &RcSignal<Option<u32>> = create_ref(ctx, create_rc_signal(None));
	let badge_timeout: &Rc<RefCell<Option<Timeout>>> = create_ref(ctx, Rc::new(RefCell::new(None)));
	let close_timeout: &RefCell<Option<Timeout>> = create_ref(ctx, RefCell::new(None));
	let scroll_timeout: &RefCell<Option<Timeout>> = create_ref(ctx, RefCell::new(None));
	let ticker = Rc::new(RefCell::new(Ticker::new(config.ticker, StdRng::from_entropy())));

	let tick_interval = Interval::new(config.ticker.interval_ms, {
		let state = state.clone();
		let badge = badge.clone();
		let badge_timeout = Rc::clone(badge_timeout);
		let ticker = Rc::clone(&ticker);
		move || {
			let added = ticker.borrow_mut().tick_into(&mut state.modify());
			if let Some(added) = added {
				log::debug!("Simulated {} new registrations", added);
				flash_badge(&badge, &badge_timeout, added, badge_ms);
			}
		}
	});

	on_cleanup(ctx, move || {
		drop(tick_interval);
		ticker.borrow_mut().cancel();
		badge_timeout.borrow_mut().take();
		close_timeout.borrow_mut().take();
		scroll_timeout.borrow_mut().take();
		log::debug!("Stopped registration ticker");
	});

	let name_input = create_signal(ctx, String::new());
	let email_input = create_signal(ctx, String::new());
	let event_dates = create_ref(ctx, format!("Event dates: {}", config.event.date_range_label()));

	let count = create_memo(ctx, move || state.get().count());
	let goal = state.get().goal();
	let stats = create_memo(ctx, move || state.get().stats());
	let form_open = create_memo(ctx, move || state.get().is_form_open());
	let step = create_memo(ctx, move || state.get().step());
	let submitting = create_memo(ctx, move || state.get().is_submitting());
	let accepting_input = create_memo(ctx, move || state.get().is_accepting_input());
	let has_error = create_memo(ctx, move || state.get().error().is_some());
	let input_class = create_memo(ctx, move || {
		if *has_error.get() {
			"registration_input error"
		} else {
			"registration_input"
		}
	});

	let register_click_handler = move |_event: WebEvent| {
		state.modify().open_form();
		let timeout = Timeout::new(FORM_SCROLL_DELAY_MS, || scroll_to_element(FORM_ELEMENT_ID));
		*scroll_timeout.borrow_mut() = Some(timeout);
	};

	let submit_handler = move |event: WebEvent| {
		event.prevent_default();

		let action = {
			let mut state = state.modify();
			state.set_name(&name_input.get());
			state.set_email(&email_input.get());
			state.submit()
		};
		let request = match action {
			Ok(SubmitAction::AdvancedToEmail) => {
				log::debug!("Registration name accepted");
				return;
			}
			Ok(SubmitAction::Deliver(request)) => request,
			Err(error) => {
				log::debug!("Registration submission rejected: {}", error);
				return;
			}
		};

		spawn_local_scoped(ctx, async move {
			let sender: &EmailJsSender = use_context(ctx);
			let outcome = deliver(sender, &request).await;
			if let Err(error) = &outcome {
				log::error!("Registration error: {}", error);
			}

			let completion = state.modify().complete_delivery(outcome);
			match completion {
				Ok(DeliveryCompletion::Registered { added }) => {
					log::info!("Registration confirmed for {}", request.recipient_email);
					name_input.set(String::new());
					email_input.set(String::new());
					if added > 0 {
						flash_badge(badge, badge_timeout, added, badge_ms);
					}
					let timeout = Timeout::new(success_close_ms, {
						let state = state.clone();
						move || {
							if state.modify().close_after_success() {
								log::debug!("Closed registration form after success");
							}
						}
					});
					*close_timeout.borrow_mut() = Some(timeout);
				}
				Ok(DeliveryCompletion::Failed) => (),
				Err(error) => log::error!("Delivery finished with no registration pending: {}", error),
			}
		});
	};

	let cancel_handler = move |_event: WebEvent| {
		let cancelled = state.modify().cancel();
		if let Err(error) = cancelled {
			log::debug!("Ignoring cancel: {}", error);
			return;
		}
		name_input.set(String::new());
		email_input.set(String::new());
		close_timeout.borrow_mut().take();
	};

	view! {
		ctx,
		div(id="registration_tracker") {
			h2 { "Registration Tracker" }
			p(class="registration_tagline") { "Join our growing community of mindfulness practitioners" }
			div(class="registration_count_area") {
				div(class=if badge.get().is_some() { "registration_count registration_count_bump" } else { "registration_count" }) {
					(*count.get())
				}
				(if let Some(added) = *badge.get() {
					view! { ctx, div(class="registration_badge") { "+" (added) } }
				} else {
					view! { ctx, }
				})
				p(class="registration_goal") { "of " (goal) " goal registrations" }
			}
			div(class="registration_progress") {
				div(class="registration_progress_fill", style=format!("width: {}%; {}", stats.get().progress_percent, accent_style))
			}
			div(class="registration_stats") {
				div(class="registration_stat") {
					p(class="registration_stat_label") { "Today" }
					p(class="registration_stat_value") { (stats.get().today) }
				}
				div(class="registration_stat") {
					p(class="registration_stat_label") { "This Week" }
					p(class="registration_stat_value") { (stats.get().this_week) }
				}
				div(class="registration_stat") {
					p(class="registration_stat_label") { "Remaining" }
					p(class="registration_stat_value") { (stats.get().remaining) }
				}
			}
			button(class="registration_cta", style=accent_style, on:click=register_click_handler) { "Register Now" }
			(if *form_open.get() {
				view! {
					ctx,
					div(id=FORM_ELEMENT_ID) {
						h3 { "Register for the Event" }
						p(class="registration_form_help") {
							(if *step.get() == FormStep::CollectingName {
								"Please enter your name to begin registration"
							} else {
								"Enter your email to receive updates about our speakers and event schedule"
							})
						}
						p(class="registration_form_dates") { (event_dates.clone()) }
						(if *accepting_input.get() {
							view! {
								ctx,
								form(on:submit=submit_handler) {
									(if *step.get() == FormStep::CollectingName {
										view! { ctx, input(type="text", placeholder="Your name", class=*input_class.get(), bind:value=name_input) }
									} else {
										view! { ctx, input(type="email", placeholder="Your email address", class=*input_class.get(), bind:value=email_input) }
									})
									div(class="registration_form_buttons") {
										button(type="submit", prop:disabled=*submitting.get()) {
											(if *submitting.get() {
												"Processing..."
											} else if *step.get() == FormStep::CollectingName {
												"Next →"
											} else {
												"Register →"
											})
										}
										button(type="button", class="registration_cancel", prop:disabled=*submitting.get(), on:click=cancel_handler) {
											"Cancel"
										}
									}
								}
							}
						} else {
							view! {
								ctx,
								div(class="registration_form_buttons") {
									button(type="button", class="registration_cancel", on:click=cancel_handler) { "Close" }
								}
							}
						})
						(match state.get().phase() {
							FormPhase::Success { registrant } => {
								let message = format!("Thank you {}! A confirmation email has been sent to your inbox.", registrant);
								view! { ctx, div(class="registration_success") { "✓ " (message) } }
							}
							_ => view! { ctx, },
						})
						(match state.get().error() {
							Some(error) => {
								let message = error_message(error);
								view! { ctx, div(class="registration_error") { "✉ " (message) } }
							}
							None => view! { ctx, },
						})
					}
				}
			} else {
				view! { ctx, }
			})
		}
	}
}
