//! Human readable rendering of forecasts and poll listings.

use std::fmt::Write;

use crate::{aggregate::Forecast, opt::Candidate, polls::Poll, prelude::PollMap};

/// One line per state (`<state> <obama score> <romney score>`), then both vote totals.
pub fn render_forecast(forecast: &Forecast) -> String {
	let mut out = String::new();
	for state in &forecast.states {
		let _ = writeln!(out, "{} {:.6} {:.6}", state.name, state.obama_score, state.romney_score);
	}
	for candidate in [Candidate::Obama, Candidate::Romney] {
		let _ = writeln!(out, "Votes for Mr. {} {}", candidate, forecast.votes_for(candidate));
	}
	out
}

/// Polls grouped by state, in the order they are given.
pub fn render_polls(polls: &PollMap) -> String {
	let mut out = String::new();
	for (state, list) in polls {
		let _ = writeln!(out, "{state} ({} polls)", list.len());
		for poll in list {
			let _ = writeln!(out, "  {}", render_poll(poll));
		}
	}
	out
}

fn render_poll(poll: &Poll) -> String {
	let pollster = if poll.pollster.is_empty() { "?" } else { poll.pollster.as_str() };
	format!(
		"{} {:<24} Obama {:>3} Romney {:>3} weight {:.6e} ({})",
		poll.date,
		pollster,
		poll.obama,
		poll.romney,
		poll.weight,
		poll.leader()
	)
}
