//! Debounced values for text that changes on every keystroke.
//!
//! [`Debounced`] keeps the raw value the user is editing and a settled value
//! that only catches up once the raw value has stopped changing for the
//! configured delay. The timer is a deadline checked by [`Debounced::poll`], so
//! the owner drives it from its own event loop and nothing fires after the
//! owner stops polling.

use std::time::{Duration, Instant};

/// Default quiet period before a query settles.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone)]
pub struct Debounced<T> {
	raw: T,
	settled: T,
	delay: Duration,
	deadline: Option<Instant>,
}

impl<T: Clone + PartialEq> Debounced<T> {
	/// Start with `initial` already settled.
	pub fn new(initial: T, delay: Duration) -> Self {
		Self {
			raw: initial.clone(),
			settled: initial,
			delay,
			deadline: None,
		}
	}

	/// Record the latest raw value, re-arming the timer when it changed.
	pub fn observe(&mut self, value: T, now: Instant) {
		if value == self.raw {
			return;
		}
		self.raw = value;
		self.deadline = Some(now + self.delay);
	}

	/// Change the quiet period. A pending timer restarts with the new delay.
	pub fn set_delay(&mut self, delay: Duration, now: Instant) {
		if delay == self.delay {
			return;
		}
		self.delay = delay;
		if self.deadline.is_some() {
			self.deadline = Some(now + delay);
		}
	}

	/// Settle the raw value once its deadline has passed.
	///
	/// Returns the newly settled value exactly once. `None` means either the
	/// timer is still running or the raw value ended up equal to the value that
	/// was already settled.
	pub fn poll(&mut self, now: Instant) -> Option<&T> {
		match self.deadline {
			Some(deadline) if now >= deadline => self.settle(),
			_ => None,
		}
	}

	/// Settle immediately without waiting for the quiet period.
	pub fn flush(&mut self) -> Option<&T> {
		self.settle()
	}

	/// Drop the pending timer so the current raw value never settles on its own.
	pub fn cancel(&mut self) {
		self.deadline = None;
	}

	fn settle(&mut self) -> Option<&T> {
		self.deadline = None;
		if self.raw == self.settled {
			return None;
		}
		self.settled = self.raw.clone();
		Some(&self.settled)
	}

	pub fn raw(&self) -> &T {
		&self.raw
	}

	pub fn settled(&self) -> &T {
		&self.settled
	}

	pub fn delay(&self) -> Duration {
		self.delay
	}

	pub fn deadline(&self) -> Option<Instant> {
		self.deadline
	}

	pub fn is_pending(&self) -> bool {
		self.deadline.is_some()
	}
}
