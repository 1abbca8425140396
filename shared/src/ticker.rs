// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::TickerSettings;
use crate::registration::RegistrationState;
use rand::Rng;
use std::time::Duration;

/// Simulates other people registering: every interval, maybe bump the count by a little.
///
/// The ticker doesn't own a timer. Whoever drives it either calls [Ticker::tick] from a real timer or feeds elapsed
/// time to [Ticker::advance], which is how tests step it.
pub struct Ticker<R> {
	settings: TickerSettings,
	rng: R,
	since_last_tick: Duration,
	cancelled: bool,
}

impl<R: Rng> Ticker<R> {
	pub fn new(settings: TickerSettings, rng: R) -> Self {
		Self {
			settings,
			rng,
			since_last_tick: Duration::ZERO,
			cancelled: false,
		}
	}

	/// Evaluates a single tick, giving the number of new registrations if any happened.
	pub fn tick(&mut self) -> Option<u32> {
		if self.cancelled {
			return None;
		}
		let probability = self.settings.probability;
		let probability = if (0.0..=1.0).contains(&probability) {
			probability
		} else {
			0.0
		};
		if !self.rng.gen_bool(probability) {
			return None;
		}
		let low = self.settings.min_increment.min(self.settings.max_increment);
		let high = self.settings.min_increment.max(self.settings.max_increment);
		Some(self.rng.gen_range(low..=high))
	}

	/// Ticks and applies the result to the state. Gives the amount the count actually moved, leaving out ticks that
	/// didn't fire or that hit the goal.
	pub fn tick_into(&mut self, state: &mut RegistrationState) -> Option<u32> {
		let increment = self.tick()?;
		match state.apply_increment(increment) {
			0 => None,
			added => Some(added),
		}
	}

	/// Moves simulated time forward and runs every tick that came due, returning the increments of the ones that
	/// fired.
	pub fn advance(&mut self, elapsed: Duration) -> Vec<u32> {
		let interval = self.settings.interval();
		if self.cancelled || interval.is_zero() {
			return Vec::new();
		}
		self.since_last_tick += elapsed;
		let mut fired = Vec::new();
		while self.since_last_tick >= interval {
			self.since_last_tick -= interval;
			if let Some(increment) = self.tick() {
				fired.push(increment);
			}
		}
		fired
	}

	/// Stops the ticker for good. Later ticks never fire.
	pub fn cancel(&mut self) {
		self.cancelled = true;
		self.since_last_tick = Duration::ZERO;
	}

	pub fn is_cancelled(&self) -> bool {
		self.cancelled
	}
}
