// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Request body for the EmailJS REST API (`POST /api/v1.0/email/send`).

use crate::config::EmailSettings;
use crate::delivery::{ConfirmationRequest, TemplateParams};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct EmailJsPayload {
	pub service_id: String,
	pub template_id: String,
	/// EmailJS calls the public key the user ID
	pub user_id: String,
	pub template_params: TemplateParams,
}

impl EmailJsPayload {
	pub fn new(settings: &EmailSettings, request: &ConfirmationRequest) -> Self {
		Self {
			service_id: settings.service_id.clone(),
			template_id: settings.template_id.clone(),
			user_id: settings.public_key.clone(),
			template_params: request.template_params(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::event::EventMetadata;
	use serde_json::Value;

	#[test]
	fn payload_matches_api_shape() {
		let request = ConfirmationRequest {
			recipient_email: String::from("ada@example.com"),
			recipient_name: String::from("Ada"),
			event: EventMetadata::default(),
		};
		let payload = EmailJsPayload::new(&EmailSettings::default(), &request);
		let json: Value = serde_json::to_value(&payload).unwrap();

		assert_eq!(json["service_id"], "service_5wk8clf");
		assert_eq!(json["template_id"], "template_6ntf89w");
		assert_eq!(json["user_id"], "eXpZsD3U1zY8WzmJT");
		assert_eq!(json["template_params"]["to_email"], "ada@example.com");
		assert_eq!(json["template_params"]["event_location"], "UDST Main Campus");
		assert_eq!(json["template_params"]["contact_email"], "info@udst.edu.qa");
	}
}
