// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::event::EventMetadata;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

/// Status code the email provider answers with when it accepts a message
pub const DELIVERY_ACCEPTED_STATUS: u16 = 200;

/// Everything needed to send one registrant their confirmation message
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfirmationRequest {
	pub recipient_email: String,
	pub recipient_name: String,
	pub event: EventMetadata,
}

impl ConfirmationRequest {
	/// Flattens the request into the fields the confirmation template expects
	pub fn template_params(&self) -> TemplateParams {
		TemplateParams {
			to_email: self.recipient_email.clone(),
			to_name: self.recipient_name.clone(),
			event_name: self.event.name.clone(),
			event_date: self.event.date_range_label(),
			event_location: self.event.location.clone(),
			event_duration: self.event.duration_label(),
			event_entry: self.event.entry_cost.clone(),
			website: self.event.website.clone(),
			contact_email: self.event.contact_email.clone(),
			team_name: self.event.team_name.clone(),
		}
	}
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TemplateParams {
	pub to_email: String,
	pub to_name: String,
	pub event_name: String,
	pub event_date: String,
	pub event_location: String,
	pub event_duration: String,
	pub event_entry: String,
	pub website: String,
	pub contact_email: String,
	pub team_name: String,
}

/// What the provider said about a message it received
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DeliveryReceipt {
	pub status: u16,
	pub text: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DeliveryError {
	/// The request never got a response
	Transport(String),
	/// The provider responded, but not with an acceptance
	Rejected { status: u16, message: String },
	Serialization(String),
}

impl fmt::Display for DeliveryError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Transport(error) => write!(f, "Failed to reach the email service: {}", error),
			Self::Rejected { status, message } => {
				write!(f, "The email service rejected the message ({}): {}", status, message)
			}
			Self::Serialization(error) => write!(f, "Failed to build the confirmation message: {}", error),
		}
	}
}

impl Error for DeliveryError {}

/// Something that can send confirmation messages
#[async_trait(?Send)]
pub trait ConfirmationSender {
	async fn send(&self, request: &ConfirmationRequest) -> Result<DeliveryReceipt, DeliveryError>;
}

/// Sends a confirmation and folds a non-acceptance receipt into the error path, so callers only have to handle one
/// kind of failure.
pub async fn deliver<S: ConfirmationSender + ?Sized>(
	sender: &S,
	request: &ConfirmationRequest,
) -> Result<(), DeliveryError> {
	let receipt = sender.send(request).await?;
	if receipt.status == DELIVERY_ACCEPTED_STATUS {
		Ok(())
	} else {
		Err(DeliveryError::Rejected {
			status: receipt.status,
			message: receipt.text,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use futures::executor::block_on;

	struct FixedSender(Result<DeliveryReceipt, DeliveryError>);

	#[async_trait(?Send)]
	impl ConfirmationSender for FixedSender {
		async fn send(&self, _request: &ConfirmationRequest) -> Result<DeliveryReceipt, DeliveryError> {
			self.0.clone()
		}
	}

	fn request() -> ConfirmationRequest {
		ConfirmationRequest {
			recipient_email: String::from("ada@example.com"),
			recipient_name: String::from("Ada"),
			event: EventMetadata::default(),
		}
	}

	#[test]
	fn accepted_receipt_is_success() {
		let sender = FixedSender(Ok(DeliveryReceipt {
			status: 200,
			text: String::from("OK"),
		}));
		assert_eq!(block_on(deliver(&sender, &request())), Ok(()));
	}

	#[test]
	fn other_statuses_are_failures() {
		let sender = FixedSender(Ok(DeliveryReceipt {
			status: 202,
			text: String::from("Accepted"),
		}));
		assert_eq!(
			block_on(deliver(&sender, &request())),
			Err(DeliveryError::Rejected {
				status: 202,
				message: String::from("Accepted")
			})
		);
	}

	#[test]
	fn transport_failures_pass_through() {
		let sender = FixedSender(Err(DeliveryError::Transport(String::from("offline"))));
		assert_eq!(
			block_on(deliver(&sender, &request())),
			Err(DeliveryError::Transport(String::from("offline")))
		);
	}

	#[test]
	fn template_params_carry_event_details() {
		let params = request().template_params();
		assert_eq!(params.to_email, "ada@example.com");
		assert_eq!(params.to_name, "Ada");
		assert_eq!(params.event_name, "UDST Mental Health Event");
		assert_eq!(params.event_date, "April 10-12, 2025");
		assert_eq!(params.event_duration, "3 Days");
		assert_eq!(params.event_entry, "FREE");
		assert_eq!(params.team_name, "The MindFul UDST Team");
	}
}
