//! Poll weighting.
//!
//! Every poll starts from an exponentially decaying weight `exp(-age_in_days)`, which is then
//! scaled by the sample-size and pollster-rating factors. Polls from denylisted pollsters are
//! zeroed, and known house effects are corrected by shifting the reported numbers.
//!
//! Sample size, pollster rating, trend line and likely-voter modelling are exposed through
//! [`WeightHooks`]. The default hooks keep the poll's own `sample_size`/`rating` (both 1 unless
//! set) and leave the numbers alone.

use chrono::NaiveDate;

use crate::{config::ForecastConfig, error::Error, polls::Poll, prelude::LOG_TARGET};

/// Extension points of the weighting engine.
pub trait WeightHooks {
	/// Multiplier derived from the number of respondents.
	fn sample_size_factor(&self, poll: &Poll) -> f64 {
		f64::from(poll.sample_size)
	}

	/// Multiplier derived from the pollster's historical accuracy.
	fn rating_factor(&self, poll: &Poll) -> f64 {
		poll.rating
	}

	/// Adjust one poll for likely-voter versus registered-voter screens.
	fn likely_voter(&self, _poll: &mut Poll) {}

	/// Adjust a whole state's polls against the national trend line, once all are weighted.
	fn trendline(&self, _polls: &mut [Poll]) {}
}

/// The hooks used by default: no adjustment beyond the poll's own fields.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoAdjustments;

impl WeightHooks for NoAdjustments {}

pub struct WeightingEngine<'a, H = NoAdjustments> {
	config: &'a ForecastConfig,
	hooks: H,
}

impl<'a> WeightingEngine<'a, NoAdjustments> {
	pub fn new(config: &'a ForecastConfig) -> Self {
		Self { config, hooks: NoAdjustments }
	}
}

impl<'a, H: WeightHooks> WeightingEngine<'a, H> {
	pub fn with_hooks(config: &'a ForecastConfig, hooks: H) -> Self {
		Self { config, hooks }
	}

	pub fn evaluation_date(&self) -> NaiveDate {
		self.config.evaluation_date
	}

	/// `exp(-age_in_days)`. A poll dated after the evaluation date is an error.
	pub fn decay(&self, poll: &Poll) -> Result<f64, Error> {
		let age = (self.config.evaluation_date - poll.date).num_days();
		if age < 0 {
			return Err(Error::PollAfterEvaluation {
				state: poll.state.clone(),
				pollster: poll.pollster.clone(),
				date: poll.date,
			});
		}
		Ok((-(age as f64)).exp())
	}

	/// Weigh a single poll, correcting its numbers for house effects.
	pub fn weigh_poll(&self, poll: &mut Poll) -> Result<(), Error> {
		let mut weight = self.decay(poll)?;
		weight *= self.hooks.sample_size_factor(poll);
		weight *= self.hooks.rating_factor(poll);

		if self.config.is_denylisted(&poll.pollster) {
			log::debug!(target: LOG_TARGET, "Dropping poll by denylisted `{}` in {}", poll.pollster, poll.state);
			weight = 0.0;
		}
		poll.weight = weight.max(0.0);

		self.correct_house_effect(poll);
		self.hooks.likely_voter(poll);
		Ok(())
	}

	/// Weigh every poll of one state.
	pub fn weigh_state(&self, polls: &mut [Poll]) -> Result<(), Error> {
		for poll in polls.iter_mut() {
			self.weigh_poll(poll)?;
		}
		self.hooks.trendline(polls);
		Ok(())
	}

	/// Shift the numbers of a biased pollster back towards neutral. Applied at most once per poll.
	pub fn correct_house_effect(&self, poll: &mut Poll) {
		if poll.house_effect_applied {
			return;
		}
		if let Some(bias) = self.config.left_bias(&poll.pollster) {
			poll.obama = poll.obama.saturating_sub(bias);
			poll.romney = poll.romney.saturating_add(bias);
		}
		if let Some(bias) = self.config.right_bias(&poll.pollster) {
			poll.romney = poll.romney.saturating_sub(bias);
			poll.obama = poll.obama.saturating_add(bias);
		}
		poll.house_effect_applied = true;
	}
}
