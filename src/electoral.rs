//! The electoral table: electoral votes and baseline alignment per state.
//!
//! One record per line, three whitespace separated fields:
//!
//! ```text
//! Ohio 18 Tossup
//! NewYork 29 Obama
//! ```

use std::{fmt, path::Path};

use serde::Serialize;

use crate::{
	aggregate::StateScores,
	error::Error,
	opt::{Baseline, Candidate},
	prelude::{LOG_TARGET, StateMap},
	utils::read_text_file,
};

/// One electoral unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct State {
	pub name: String,
	pub votes: u32,
	pub baseline: Baseline,
	/// Set by the aggregator, `None` until then.
	pub scores: Option<StateScores>,
}

impl State {
	pub fn new(name: impl Into<String>, votes: u32, baseline: Baseline) -> Self {
		Self { name: name.into(), votes, baseline, scores: None }
	}

	/// The projected winner. Before scoring, the baseline decides and a tossup goes to Romney.
	pub fn winner(&self) -> Candidate {
		match &self.scores {
			Some(scores) => scores.winner(),
			None => self.baseline.candidate().unwrap_or(Candidate::Romney),
		}
	}
}

impl fmt::Display for State {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} ({}): {}", self.name, self.votes, self.winner())
	}
}

/// Read the electoral table at `path`.
pub fn load_electoral(path: impl AsRef<Path>) -> Result<StateMap, Error> {
	let path = path.as_ref();
	let content = read_text_file(path)?;
	parse_electoral(&content, &path.display().to_string())
}

/// Parse an electoral table. Blank lines are skipped, any other malformed line aborts.
pub fn parse_electoral(input: &str, source_name: &str) -> Result<StateMap, Error> {
	let mut states = StateMap::new();

	for (idx, line) in input.lines().enumerate() {
		let line_no = idx + 1;
		let fields: Vec<&str> = line.split_whitespace().collect();
		if fields.is_empty() {
			continue;
		}

		let [name, votes, baseline, ..] = fields[..] else {
			return Err(Error::malformed(
				source_name,
				line_no,
				format!("expected `<state> <votes> <baseline>`, got {} field(s)", fields.len()),
			));
		};

		let votes: u32 = votes.parse().map_err(|_| {
			Error::malformed(source_name, line_no, format!("vote count `{votes}` is not an integer"))
		})?;
		if votes == 0 {
			return Err(Error::malformed(source_name, line_no, "vote count must be positive"));
		}

		let baseline: Baseline = baseline
			.parse()
			.map_err(|e: Error| Error::malformed(source_name, line_no, e.to_string()))?;

		if states.insert(name.to_string(), State::new(name, votes, baseline)).is_some() {
			log::warn!(target: LOG_TARGET, "State `{name}` listed twice in {source_name}, keeping line {line_no}");
		}
	}

	log::info!(target: LOG_TARGET, "Loaded {} states from {}", states.len(), source_name);
	Ok(states)
}

#[cfg(test)]
mod tests {
	use super::*;

	const TABLE: &str = "Ohio 18 Tossup\nNewYork 29 Obama\n\n  Texas   38 Romney  \n";

	#[test]
	fn parses_well_formed_rows() {
		let states = parse_electoral(TABLE, "test").unwrap();

		assert_eq!(states.len(), 3);
		assert_eq!(states["Ohio"], State::new("Ohio", 18, Baseline::Tossup));
		assert_eq!(states["NewYork"].votes, 29);
		assert_eq!(states["NewYork"].baseline, Baseline::Obama);
		assert_eq!(states["Texas"].baseline, Baseline::Romney);
		// BTreeMap keeps identifiers sorted.
		assert_eq!(states.keys().collect::<Vec<_>>(), vec!["NewYork", "Ohio", "Texas"]);
	}

	#[test]
	fn rejects_short_rows() {
		let err = parse_electoral("Ohio 18 Tossup\nOhio 18\n", "electoral.txt").unwrap_err();
		assert!(matches!(err, Error::MalformedRecord { line: 2, .. }), "{err}");
	}

	#[test]
	fn rejects_non_integer_votes() {
		let err = parse_electoral("Ohio eighteen Tossup\n", "electoral.txt").unwrap_err();
		assert!(matches!(err, Error::MalformedRecord { line: 1, .. }));
		assert!(parse_electoral("Ohio -3 Tossup\n", "electoral.txt").is_err());
		assert!(parse_electoral("Ohio 0 Tossup\n", "electoral.txt").is_err());
	}

	#[test]
	fn rejects_unknown_baseline() {
		let err = parse_electoral("Ohio 18 Leans\n", "electoral.txt").unwrap_err();
		match err {
			Error::MalformedRecord { reason, .. } => assert!(reason.contains("Leans")),
			other => panic!("unexpected error: {other}"),
		}
	}

	#[test]
	fn display_uses_baseline_before_scoring() {
		let states = parse_electoral(TABLE, "test").unwrap();
		assert_eq!(states["NewYork"].to_string(), "NewYork (29): Obama");
		assert_eq!(states["Ohio"].to_string(), "Ohio (18): Romney");
	}
}
