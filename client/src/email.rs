// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use async_trait::async_trait;
use gloo_net::http::Request;
use mindful_event_shared::config::EmailSettings;
use mindful_event_shared::delivery::{ConfirmationRequest, ConfirmationSender, DeliveryError, DeliveryReceipt};
use mindful_event_shared::email::EmailJsPayload;

/// Sends confirmation messages through the EmailJS REST API straight from the browser
pub struct EmailJsSender {
	settings: EmailSettings,
}

impl EmailJsSender {
	pub fn new(settings: EmailSettings) -> Self {
		Self { settings }
	}
}

#[async_trait(?Send)]
impl ConfirmationSender for EmailJsSender {
	async fn send(&self, request: &ConfirmationRequest) -> Result<DeliveryReceipt, DeliveryError> {
		log::debug!("Attempting to send confirmation to {}", request.recipient_email);
		let payload = EmailJsPayload::new(&self.settings, request);
		match serde_json::to_string_pretty(&payload.template_params) {
			Ok(params) => log::debug!("Sending confirmation with parameters: {}", params),
			Err(error) => return Err(DeliveryError::Serialization(error.to_string())),
		}

		let http_request = Request::post(&self.settings.endpoint)
			.json(&payload)
			.map_err(|error| DeliveryError::Serialization(error.to_string()))?;
		let response = match http_request.send().await {
			Ok(response) => response,
			Err(error) => {
				log::error!("Failed to send confirmation: {}", error);
				return Err(DeliveryError::Transport(error.to_string()));
			}
		};

		let status = response.status();
		let text = response.text().await.unwrap_or_default();
		if status == 200 {
			log::debug!("Confirmation sent to {}", request.recipient_email);
		} else {
			log::warn!("Confirmation sent but with unexpected status {}: {}", status, text);
		}
		Ok(DeliveryReceipt { status, text })
	}
}
