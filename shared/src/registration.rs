// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State of the registration widget: the simulated counter and the two-step sign-up form.

use crate::config::RegistrationSettings;
use crate::delivery::{ConfirmationRequest, DeliveryError};
use crate::event::EventMetadata;
use std::error::Error;
use std::fmt;

/// Which input the form is asking for
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormStep {
	CollectingName,
	CollectingEmail,
}

/// Outcome of the most recent submission attempt
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SubmissionStatus {
	Idle,
	Submitting,
	Success,
	Error,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FormPhase {
	/// The form isn't shown
	Closed,
	CollectingName {
		error: Option<RegistrationError>,
	},
	CollectingEmail {
		error: Option<RegistrationError>,
	},
	/// A confirmation message is on its way; the form can't be changed until it resolves
	Submitting,
	/// Registration went through. The form stays up with a thank-you message until it's closed.
	Success {
		registrant: String,
	},
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RegistrationError {
	EmptyName,
	InvalidEmail,
	SubmissionInFlight,
	NoSubmissionInFlight,
	FormClosed,
	Delivery(DeliveryError),
}

impl fmt::Display for RegistrationError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::EmptyName => write!(f, "Please enter your name to continue"),
			Self::InvalidEmail => write!(f, "Please enter a valid email address"),
			Self::SubmissionInFlight => write!(f, "A registration is already being processed"),
			Self::NoSubmissionInFlight => write!(f, "No registration is being processed"),
			Self::FormClosed => write!(f, "The registration form isn't open"),
			Self::Delivery(error) => write!(f, "{}", error),
		}
	}
}

impl Error for RegistrationError {}

impl From<DeliveryError> for RegistrationError {
	fn from(error: DeliveryError) -> Self {
		Self::Delivery(error)
	}
}

/// What the caller has to do after a successful [RegistrationState::submit]
#[derive(Debug, Eq, PartialEq)]
pub enum SubmitAction {
	/// The name was accepted and the form now wants an email address
	AdvancedToEmail,
	/// The form is complete; send this confirmation and report back with [RegistrationState::complete_delivery]
	Deliver(ConfirmationRequest),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DeliveryCompletion {
	/// The registrant was counted. `added` is how far the count moved, which is zero once the goal is reached.
	Registered { added: u32 },
	Failed,
}

/// Figures derived from the current count for the stats row
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RegistrationStats {
	pub today: u32,
	pub this_week: u32,
	pub remaining: u32,
	pub progress_percent: u32,
}

#[derive(Clone, Debug)]
pub struct RegistrationState {
	count: u32,
	goal: u32,
	name: String,
	email: String,
	phase: FormPhase,
	event: EventMetadata,
}

/// A plausible email has something on both sides of an `@`
fn is_plausible_email(email: &str) -> bool {
	match email.split_once('@') {
		Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
		None => false,
	}
}

impl RegistrationState {
	pub fn new(settings: RegistrationSettings, event: EventMetadata) -> Self {
		Self {
			count: settings.initial_count.min(settings.goal),
			goal: settings.goal,
			name: String::new(),
			email: String::new(),
			phase: FormPhase::Closed,
			event,
		}
	}

	pub fn count(&self) -> u32 {
		self.count
	}

	pub fn goal(&self) -> u32 {
		self.goal
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn email(&self) -> &str {
		&self.email
	}

	pub fn phase(&self) -> &FormPhase {
		&self.phase
	}

	pub fn step(&self) -> FormStep {
		match self.phase {
			FormPhase::CollectingEmail { .. } | FormPhase::Submitting | FormPhase::Success { .. } => {
				FormStep::CollectingEmail
			}
			FormPhase::Closed | FormPhase::CollectingName { .. } => FormStep::CollectingName,
		}
	}

	pub fn status(&self) -> SubmissionStatus {
		match &self.phase {
			FormPhase::Closed => SubmissionStatus::Idle,
			FormPhase::CollectingName { error } | FormPhase::CollectingEmail { error } => {
				if error.is_some() {
					SubmissionStatus::Error
				} else {
					SubmissionStatus::Idle
				}
			}
			FormPhase::Submitting => SubmissionStatus::Submitting,
			FormPhase::Success { .. } => SubmissionStatus::Success,
		}
	}

	/// The error to show inline, if the last attempt failed
	pub fn error(&self) -> Option<&RegistrationError> {
		match &self.phase {
			FormPhase::CollectingName { error } | FormPhase::CollectingEmail { error } => error.as_ref(),
			_ => None,
		}
	}

	pub fn is_form_open(&self) -> bool {
		self.phase != FormPhase::Closed
	}

	pub fn is_submitting(&self) -> bool {
		self.phase == FormPhase::Submitting
	}

	/// Whether the form's input and submit button belong on screen. They're hidden once the thank-you message is up.
	pub fn is_accepting_input(&self) -> bool {
		matches!(
			self.phase,
			FormPhase::CollectingName { .. } | FormPhase::CollectingEmail { .. } | FormPhase::Submitting
		)
	}

	pub fn stats(&self) -> RegistrationStats {
		let count = u64::from(self.count);
		let percent_of_count = |percent: u64| (count * percent / 100) as u32;
		let progress_percent = if self.goal == 0 {
			100
		} else {
			(count * 100 / u64::from(self.goal)).min(100) as u32
		};
		RegistrationStats {
			today: percent_of_count(20),
			this_week: percent_of_count(70),
			remaining: self.goal.saturating_sub(self.count),
			progress_percent,
		}
	}

	/// Adds to the count without passing the goal. Returns how much was actually added.
	pub fn apply_increment(&mut self, increment: u32) -> u32 {
		let new_count = self.count.saturating_add(increment).min(self.goal);
		let added = new_count - self.count;
		self.count = new_count;
		added
	}

	/// Shows the form at its first step. Does nothing if it's already showing.
	pub fn open_form(&mut self) {
		if self.phase == FormPhase::Closed {
			self.phase = FormPhase::CollectingName { error: None };
		}
	}

	pub fn set_name(&mut self, name: &str) {
		if matches!(self.phase, FormPhase::CollectingName { .. }) {
			self.name = name.to_owned();
		}
	}

	pub fn set_email(&mut self, email: &str) {
		if matches!(self.phase, FormPhase::CollectingEmail { .. }) {
			self.email = email.to_owned();
		}
	}

	/// Handles the form's submit button for whichever step is showing.
	///
	/// # Errors
	///
	/// Validation failures leave the form on the same step with the error recorded so it's shown inline. Submitting
	/// while a delivery is in flight or while the form isn't accepting input is rejected without changing anything.
	pub fn submit(&mut self) -> Result<SubmitAction, RegistrationError> {
		match self.phase {
			FormPhase::CollectingName { .. } => {
				if self.name.trim().is_empty() {
					self.phase = FormPhase::CollectingName {
						error: Some(RegistrationError::EmptyName),
					};
					return Err(RegistrationError::EmptyName);
				}
				self.phase = FormPhase::CollectingEmail { error: None };
				Ok(SubmitAction::AdvancedToEmail)
			}
			FormPhase::CollectingEmail { .. } => {
				let email = self.email.trim();
				if !is_plausible_email(email) {
					self.phase = FormPhase::CollectingEmail {
						error: Some(RegistrationError::InvalidEmail),
					};
					return Err(RegistrationError::InvalidEmail);
				}
				let request = ConfirmationRequest {
					recipient_email: email.to_owned(),
					recipient_name: self.name.trim().to_owned(),
					event: self.event.clone(),
				};
				self.phase = FormPhase::Submitting;
				Ok(SubmitAction::Deliver(request))
			}
			FormPhase::Submitting => Err(RegistrationError::SubmissionInFlight),
			FormPhase::Closed | FormPhase::Success { .. } => Err(RegistrationError::FormClosed),
		}
	}

	/// Records how the confirmation delivery for the in-flight submission went.
	pub fn complete_delivery(
		&mut self,
		outcome: Result<(), DeliveryError>,
	) -> Result<DeliveryCompletion, RegistrationError> {
		if self.phase != FormPhase::Submitting {
			return Err(RegistrationError::NoSubmissionInFlight);
		}
		match outcome {
			Ok(()) => {
				let registrant = self.name.trim().to_owned();
				let added = self.apply_increment(1);
				self.name.clear();
				self.email.clear();
				self.phase = FormPhase::Success { registrant };
				Ok(DeliveryCompletion::Registered { added })
			}
			Err(error) => {
				self.phase = FormPhase::CollectingEmail {
					error: Some(RegistrationError::Delivery(error)),
				};
				Ok(DeliveryCompletion::Failed)
			}
		}
	}

	/// Closes the form after the thank-you message has been up for a while. Returns whether anything changed; a form
	/// that was cancelled and reopened in the meantime is left alone.
	pub fn close_after_success(&mut self) -> bool {
		if matches!(self.phase, FormPhase::Success { .. }) {
			self.phase = FormPhase::Closed;
			true
		} else {
			false
		}
	}

	/// Closes the form and throws away whatever was typed.
	///
	/// # Errors
	///
	/// A form with a delivery in flight can't be cancelled.
	pub fn cancel(&mut self) -> Result<(), RegistrationError> {
		if self.phase == FormPhase::Submitting {
			return Err(RegistrationError::SubmissionInFlight);
		}
		self.phase = FormPhase::Closed;
		self.name.clear();
		self.email.clear();
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::delivery::{deliver, ConfirmationSender, DeliveryReceipt};
	use async_trait::async_trait;
	use futures::executor::block_on;

	struct ReceiptSender(Result<DeliveryReceipt, DeliveryError>);

	#[async_trait(?Send)]
	impl ConfirmationSender for ReceiptSender {
		async fn send(&self, _request: &ConfirmationRequest) -> Result<DeliveryReceipt, DeliveryError> {
			self.0.clone()
		}
	}

	fn receipt(status: u16, text: &str) -> ReceiptSender {
		ReceiptSender(Ok(DeliveryReceipt {
			status,
			text: String::from(text),
		}))
	}

	/// Fills in the email step and runs the delivery through the sender the way the widget does
	fn register_with(state: &mut RegistrationState, sender: &ReceiptSender) -> DeliveryCompletion {
		state.set_email("ada@example.com");
		let Ok(SubmitAction::Deliver(request)) = state.submit() else {
			panic!("expected a delivery request");
		};
		let outcome = block_on(deliver(sender, &request));
		state.complete_delivery(outcome).unwrap()
	}

	fn state_with(initial_count: u32, goal: u32) -> RegistrationState {
		RegistrationState::new(RegistrationSettings { initial_count, goal }, EventMetadata::default())
	}

	fn open_at_email(name: &str) -> RegistrationState {
		let mut state = state_with(75, 200);
		state.open_form();
		state.set_name(name);
		assert_eq!(state.submit(), Ok(SubmitAction::AdvancedToEmail));
		state
	}

	fn assert_reset(state: &RegistrationState) {
		assert_eq!(state.step(), FormStep::CollectingName);
		assert_eq!(state.name(), "");
		assert_eq!(state.email(), "");
		assert_eq!(state.status(), SubmissionStatus::Idle);
		assert!(!state.is_form_open());
	}

	#[test]
	fn initial_count_is_clamped_to_goal() {
		let state = state_with(250, 200);
		assert_eq!(state.count(), 200);
		assert_eq!(state.phase(), &FormPhase::Closed);
	}

	#[test]
	fn increments_clamp_at_goal() {
		let mut state = state_with(199, 200);
		assert_eq!(state.apply_increment(2), 1);
		assert_eq!(state.count(), 200);
		assert_eq!(state.apply_increment(1), 0);
		assert_eq!(state.count(), 200);
	}

	#[test]
	fn empty_name_is_rejected() {
		let mut state = state_with(75, 200);
		state.open_form();
		state.set_name("   ");
		assert_eq!(state.submit(), Err(RegistrationError::EmptyName));
		assert_eq!(state.step(), FormStep::CollectingName);
		assert_eq!(state.status(), SubmissionStatus::Error);
		assert_eq!(state.error(), Some(&RegistrationError::EmptyName));
	}

	#[test]
	fn email_without_at_is_rejected() {
		let mut state = open_at_email("Ada");
		state.set_email("ada.example.com");
		assert_eq!(state.submit(), Err(RegistrationError::InvalidEmail));
		assert_eq!(state.step(), FormStep::CollectingEmail);
		assert_eq!(state.status(), SubmissionStatus::Error);

		state.set_email("");
		assert_eq!(state.submit(), Err(RegistrationError::InvalidEmail));
		assert_eq!(state.step(), FormStep::CollectingEmail);
	}

	#[test]
	fn valid_email_starts_delivery_with_trimmed_values() {
		let mut state = open_at_email("  Ada ");
		state.set_email(" ada@example.com ");
		let Ok(SubmitAction::Deliver(request)) = state.submit() else {
			panic!("expected a delivery request");
		};
		assert_eq!(request.recipient_email, "ada@example.com");
		assert_eq!(request.recipient_name, "Ada");
		assert_eq!(request.event, EventMetadata::default());
		assert_eq!(state.status(), SubmissionStatus::Submitting);
		assert!(state.is_submitting());
	}

	#[test]
	fn duplicate_submission_is_rejected() {
		let mut state = open_at_email("Ada");
		state.set_email("ada@example.com");
		assert!(state.submit().is_ok());
		assert_eq!(state.submit(), Err(RegistrationError::SubmissionInFlight));
		assert_eq!(state.status(), SubmissionStatus::Submitting);
	}

	#[test]
	fn successful_delivery_registers() {
		let mut state = open_at_email("Ada");
		state.set_email("ada@example.com");
		assert!(state.submit().is_ok());
		assert_eq!(state.complete_delivery(Ok(())), Ok(DeliveryCompletion::Registered { added: 1 }));

		assert_eq!(state.count(), 76);
		assert_eq!(state.name(), "");
		assert_eq!(state.email(), "");
		assert_eq!(state.status(), SubmissionStatus::Success);
		assert_eq!(
			state.phase(),
			&FormPhase::Success {
				registrant: String::from("Ada")
			}
		);
		assert_eq!(state.step(), FormStep::CollectingEmail);
		assert!(!state.is_accepting_input());

		assert!(state.close_after_success());
		assert_reset(&state);
	}

	#[test]
	fn failed_delivery_keeps_email_for_retry() {
		let mut state = open_at_email("Ada");
		state.set_email("ada@example.com");
		assert!(state.submit().is_ok());
		let error = DeliveryError::Rejected {
			status: 400,
			message: String::from("bad template"),
		};
		assert_eq!(state.complete_delivery(Err(error.clone())), Ok(DeliveryCompletion::Failed));

		assert_eq!(state.count(), 75);
		assert_eq!(state.email(), "ada@example.com");
		assert_eq!(state.status(), SubmissionStatus::Error);
		assert_eq!(state.step(), FormStep::CollectingEmail);
		assert_eq!(state.error(), Some(&RegistrationError::Delivery(error)));

		assert!(matches!(state.submit(), Ok(SubmitAction::Deliver(_))));
	}

	#[test]
	fn completion_without_submission_is_rejected() {
		let mut state = state_with(75, 200);
		assert_eq!(state.complete_delivery(Ok(())), Err(RegistrationError::NoSubmissionInFlight));
		assert_eq!(state.count(), 75);
	}

	#[test]
	fn success_at_goal_does_not_overflow() {
		let mut state = state_with(200, 200);
		state.open_form();
		state.set_name("Ada");
		assert!(state.submit().is_ok());
		state.set_email("ada@example.com");
		assert!(state.submit().is_ok());
		assert_eq!(state.complete_delivery(Ok(())), Ok(DeliveryCompletion::Registered { added: 0 }));
		assert_eq!(state.count(), 200);
	}

	#[test]
	fn cancel_resets_from_every_open_phase() {
		let mut state = state_with(75, 200);
		state.open_form();
		state.set_name("Ada");
		assert_eq!(state.cancel(), Ok(()));
		assert_reset(&state);

		let mut state = open_at_email("Ada");
		state.set_email("nope");
		assert!(state.submit().is_err());
		assert_eq!(state.cancel(), Ok(()));
		assert_reset(&state);

		let mut state = open_at_email("Ada");
		state.set_email("ada@example.com");
		assert!(state.submit().is_ok());
		assert!(state.complete_delivery(Ok(())).is_ok());
		assert_eq!(state.cancel(), Ok(()));
		assert_reset(&state);
		assert_eq!(state.count(), 76);
	}

	#[test]
	fn cancel_is_refused_while_submitting() {
		let mut state = open_at_email("Ada");
		state.set_email("ada@example.com");
		assert!(state.submit().is_ok());
		assert_eq!(state.cancel(), Err(RegistrationError::SubmissionInFlight));
		assert_eq!(state.email(), "ada@example.com");
		assert!(state.is_submitting());
	}

	#[test]
	fn late_auto_close_leaves_reopened_form_alone() {
		let mut state = open_at_email("Ada");
		state.set_email("ada@example.com");
		assert!(state.submit().is_ok());
		assert!(state.complete_delivery(Ok(())).is_ok());
		assert!(state.cancel().is_ok());
		state.open_form();
		assert!(!state.close_after_success());
		assert!(state.is_form_open());
	}

	#[test]
	fn input_is_ignored_outside_its_step() {
		let mut state = state_with(75, 200);
		state.set_name("Ada");
		assert_eq!(state.name(), "");
		state.open_form();
		state.set_email("ada@example.com");
		assert_eq!(state.email(), "");
		assert_eq!(state.submit(), Err(RegistrationError::EmptyName));
	}

	#[test]
	fn closed_form_cannot_be_submitted() {
		let mut state = state_with(75, 200);
		assert_eq!(state.submit(), Err(RegistrationError::FormClosed));
		assert_eq!(state.status(), SubmissionStatus::Idle);
	}

	#[test]
	fn stats_follow_count() {
		let state = state_with(75, 200);
		assert_eq!(
			state.stats(),
			RegistrationStats {
				today: 15,
				this_week: 52,
				remaining: 125,
				progress_percent: 37,
			}
		);
		let state = state_with(200, 200);
		assert_eq!(state.stats().remaining, 0);
		assert_eq!(state.stats().progress_percent, 100);
	}

	#[test]
	fn accepted_receipt_registers_and_closes() {
		let mut state = open_at_email("Ada");
		assert_eq!(register_with(&mut state, &receipt(200, "OK")), DeliveryCompletion::Registered { added: 1 });
		assert_eq!(state.count(), 76);
		assert_eq!(state.status(), SubmissionStatus::Success);
		assert_eq!(state.name(), "");
		assert_eq!(state.email(), "");

		assert!(state.close_after_success());
		assert_reset(&state);
	}

	#[test]
	fn rejected_receipt_is_a_failed_delivery() {
		let mut state = open_at_email("Ada");
		assert_eq!(register_with(&mut state, &receipt(400, "The template ID is invalid")), DeliveryCompletion::Failed);
		assert_eq!(state.count(), 75);
		assert_eq!(state.status(), SubmissionStatus::Error);
		assert_eq!(state.step(), FormStep::CollectingEmail);
		assert_eq!(state.email(), "ada@example.com");
		assert_eq!(
			state.error(),
			Some(&RegistrationError::Delivery(DeliveryError::Rejected {
				status: 400,
				message: String::from("The template ID is invalid")
			}))
		);
		assert!(state.is_accepting_input());
	}

	#[test]
	fn transport_failure_is_a_failed_delivery() {
		let mut state = open_at_email("Ada");
		let sender = ReceiptSender(Err(DeliveryError::Transport(String::from("network unreachable"))));
		assert_eq!(register_with(&mut state, &sender), DeliveryCompletion::Failed);
		assert_eq!(state.count(), 75);
		assert_eq!(state.status(), SubmissionStatus::Error);
		assert_eq!(state.email(), "ada@example.com");
		assert_eq!(
			state.error(),
			Some(&RegistrationError::Delivery(DeliveryError::Transport(String::from(
				"network unreachable"
			))))
		);
	}

	#[test]
	fn registering_at_goal_adds_nothing() {
		let mut state = state_with(200, 200);
		state.open_form();
		state.set_name("Ada");
		assert!(state.submit().is_ok());
		assert_eq!(register_with(&mut state, &receipt(200, "OK")), DeliveryCompletion::Registered { added: 0 });
		assert_eq!(state.count(), 200);
		assert_eq!(state.status(), SubmissionStatus::Success);
	}

	#[test]
	fn success_hides_input_until_closed() {
		let mut state = open_at_email("Ada");
		assert!(state.is_accepting_input());
		register_with(&mut state, &receipt(200, "OK"));
		assert!(state.is_form_open());
		assert!(!state.is_accepting_input());
		assert_eq!(state.step(), FormStep::CollectingEmail);
		assert_eq!(state.submit(), Err(RegistrationError::FormClosed));

		assert!(state.close_after_success());
		assert!(!state.is_accepting_input());
		state.open_form();
		assert!(state.is_accepting_input());
		assert_eq!(state.step(), FormStep::CollectingName);
	}
}
