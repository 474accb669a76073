//! Turn weighted polls into per-state scores and an electoral-vote tally.

use chrono::NaiveDate;
use serde::Serialize;

use crate::{
	error::Error,
	opt::{Baseline, Candidate, TossupFallback},
	polls::Poll,
	prelude::{LOG_TARGET, PollMap, StateMap},
	weighting::{WeightHooks, WeightingEngine},
};

/// Normalised scores of one state. Both lie in `[0, 1]` and add up to one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StateScores {
	pub obama: f64,
	pub romney: f64,
}

impl StateScores {
	pub fn new(obama: f64) -> Self {
		let obama = obama.clamp(0.0, 1.0);
		Self { obama, romney: 1.0 - obama }
	}

	/// All of the state to `candidate`.
	pub fn certain(candidate: Candidate) -> Self {
		match candidate {
			Candidate::Obama => Self::new(1.0),
			Candidate::Romney => Self::new(0.0),
		}
	}

	pub fn even() -> Self {
		Self::new(0.5)
	}

	/// Obama needs a strictly higher score. An exact tie goes to Romney.
	pub fn winner(&self) -> Candidate {
		if self.obama > self.romney { Candidate::Obama } else { Candidate::Romney }
	}
}

/// Where a state's scores came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreSource {
	Polls,
	Baseline,
	EvenSplit,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StateForecast {
	pub name: String,
	pub votes: u32,
	pub baseline: Baseline,
	pub obama_score: f64,
	pub romney_score: f64,
	pub winner: Candidate,
	pub source: ScoreSource,
	pub polls: Vec<Poll>,
}

/// The outcome of a forecast run, states in alphabetical order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Forecast {
	pub evaluation_date: NaiveDate,
	pub states: Vec<StateForecast>,
	pub obama_votes: u32,
	pub romney_votes: u32,
}

impl Forecast {
	pub fn votes_for(&self, candidate: Candidate) -> u32 {
		match candidate {
			Candidate::Obama => self.obama_votes,
			Candidate::Romney => self.romney_votes,
		}
	}

	pub fn state(&self, name: &str) -> Option<&StateForecast> {
		self.states.iter().find(|s| s.name == name)
	}

	/// Overall winner, with the same tie-break as a single state.
	pub fn winner(&self) -> Candidate {
		if self.obama_votes > self.romney_votes { Candidate::Obama } else { Candidate::Romney }
	}
}

/// Weighted mean of the polls, normalised. `None` when there is no weighted evidence at all.
pub fn score_polls(polls: &[Poll]) -> Option<StateScores> {
	if polls.is_empty() {
		return None;
	}
	let scale = 100.0 * polls.len() as f64;
	let obama_sum = polls.iter().map(|p| p.weight * f64::from(p.obama)).sum::<f64>() / scale;
	let romney_sum = polls.iter().map(|p| p.weight * f64::from(p.romney)).sum::<f64>() / scale;

	let total = obama_sum + romney_sum;
	if total.is_nan() || total <= 0.0 {
		return None;
	}
	Some(StateScores::new(obama_sum / total))
}

pub struct Aggregator<'a, H> {
	engine: WeightingEngine<'a, H>,
	tossup_fallback: TossupFallback,
}

impl<'a, H: WeightHooks> Aggregator<'a, H> {
	pub fn new(engine: WeightingEngine<'a, H>, tossup_fallback: TossupFallback) -> Self {
		Self { engine, tossup_fallback }
	}

	/// Score every state, storing the scores on the states and weighing the polls in place.
	pub fn predict(&self, states: &mut StateMap, polls: &mut PollMap) -> Result<Forecast, Error> {
		for (name, list) in polls.iter() {
			if !states.contains_key(name) {
				log::warn!(target: LOG_TARGET, "Ignoring {} poll(s) for unknown state `{}`", list.len(), name);
			}
		}

		let mut forecast = Forecast {
			evaluation_date: self.engine.evaluation_date(),
			states: Vec::with_capacity(states.len()),
			obama_votes: 0,
			romney_votes: 0,
		};

		for (name, state) in states.iter_mut() {
			let state_polls: &[Poll] = match polls.get_mut(name) {
				Some(list) => {
					self.engine.weigh_state(list)?;
					list.as_slice()
				},
				None => &[],
			};

			let (scores, source) = match score_polls(state_polls) {
				Some(scores) => (scores, ScoreSource::Polls),
				None => self.fallback(name, state.baseline, state_polls.len())?,
			};
			state.scores = Some(scores);

			let winner = scores.winner();
			match winner {
				Candidate::Obama => forecast.obama_votes += state.votes,
				Candidate::Romney => forecast.romney_votes += state.votes,
			}

			forecast.states.push(StateForecast {
				name: name.clone(),
				votes: state.votes,
				baseline: state.baseline,
				obama_score: scores.obama,
				romney_score: scores.romney,
				winner,
				source,
				polls: state_polls.to_vec(),
			});
		}

		log::info!(
			target: LOG_TARGET,
			"Forecast for {}: Obama {} / Romney {}",
			forecast.evaluation_date,
			forecast.obama_votes,
			forecast.romney_votes
		);
		Ok(forecast)
	}

	fn fallback(
		&self,
		name: &str,
		baseline: Baseline,
		poll_count: usize,
	) -> Result<(StateScores, ScoreSource), Error> {
		if poll_count > 0 {
			log::debug!(target: LOG_TARGET, "All {poll_count} poll(s) for {name} carry zero weight");
		}
		match (baseline.candidate(), self.tossup_fallback) {
			(Some(candidate), _) => {
				log::debug!(target: LOG_TARGET, "{name}: no usable polls, using {baseline} baseline");
				Ok((StateScores::certain(candidate), ScoreSource::Baseline))
			},
			(None, TossupFallback::Even) => {
				log::warn!(target: LOG_TARGET, "{name}: tossup without usable polls, splitting evenly");
				Ok((StateScores::even(), ScoreSource::EvenSplit))
			},
			(None, TossupFallback::Reject) => Err(Error::UndefinedFallback(name.to_string())),
		}
	}
}
