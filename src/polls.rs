//! Parser for the scraped poll listing.
//!
//! The listing interleaves two kinds of lines. A date header names the day the following polls
//! were published:
//!
//! ```text
//! Sunday, November 4
//! ```
//!
//! and every other non-empty line is a poll row:
//!
//! ```text
//! Ohio Quinnipiac Obama 48, Romney 46 Obama +2
//! North Carolina Rasmussen Romney 50, Obama 46 Romney +4
//! ```
//!
//! The first integer must follow a candidate label; the next integer belongs to the other
//! candidate. Anything after the second integer (usually the spread) is ignored. Rows opening with
//! `Race/Topic` or holding a bare `Race` token are table headers and are skipped.

use std::{cmp::Ordering, path::Path};

use chrono::NaiveDate;
use serde::Serialize;

use crate::{
	config::ForecastConfig,
	error::Error,
	opt::Candidate,
	prelude::{LOG_TARGET, PollMap, StateId},
	utils::read_text_file,
};

const WEEKDAYS: [&str; 7] =
	["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"];

/// Marker of the header and footer rows of the scraped table, e.g. `Race/Topic (Click to Sort)`.
const HEADER_MARKER: &str = "Race";

/// One poll observation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Poll {
	pub state: StateId,
	pub date: NaiveDate,
	pub pollster: String,
	/// Percentage points reported for Obama, after house-effect correction once weighted.
	pub obama: i32,
	/// Percentage points reported for Romney, after house-effect correction once weighted.
	pub romney: i32,
	/// Set by the weighting engine, never negative.
	pub weight: f64,
	pub sample_size: u32,
	pub rating: f64,
	/// Whether the house-effect shift has already been applied to `obama`/`romney`.
	#[serde(skip)]
	pub house_effect_applied: bool,
}

impl Poll {
	pub fn new(
		state: impl Into<StateId>,
		date: NaiveDate,
		pollster: impl Into<String>,
		obama: i32,
		romney: i32,
	) -> Self {
		Self {
			state: state.into(),
			date,
			pollster: pollster.into(),
			obama,
			romney,
			weight: 0.0,
			sample_size: 1,
			rating: 1.0,
			house_effect_applied: false,
		}
	}

	/// The candidate ahead in this poll. A dead heat counts for Obama.
	pub fn leader(&self) -> Candidate {
		if self.romney > self.obama { Candidate::Romney } else { Candidate::Obama }
	}
}

/// Order polls by date, newest first.
pub fn newest_first(a: &Poll, b: &Poll) -> Ordering {
	b.date.cmp(&a.date)
}

/// Sort every state's polls newest first. Stable, so polls of the same day keep file order.
pub fn sort_newest_first(polls: &mut PollMap) {
	for list in polls.values_mut() {
		list.sort_by(newest_first);
	}
}

/// Read the poll listing at `path`.
pub fn load_polls(path: impl AsRef<Path>, config: &ForecastConfig) -> Result<PollMap, Error> {
	let path = path.as_ref();
	let content = read_text_file(path)?;
	parse_polls(&content, &path.display().to_string(), config)
}

/// Parse a poll listing into polls grouped by state, each group in file order.
///
/// The first malformed row aborts parsing.
pub fn parse_polls(
	input: &str,
	source_name: &str,
	config: &ForecastConfig,
) -> Result<PollMap, Error> {
	let mut polls = PollMap::new();
	let mut current_date: Option<NaiveDate> = None;
	let mut count = 0usize;

	for (idx, line) in input.lines().enumerate() {
		let line_no = idx + 1;
		let tokens: Vec<&str> = line.split_whitespace().collect();
		let Some(first) = tokens.first() else { continue };

		if is_date_header(first) {
			let date = parse_date_header(&tokens, config.reference_year)
				.map_err(|reason| Error::malformed(source_name, line_no, reason))?;
			log::trace!(target: LOG_TARGET, "line {line_no}: polls dated {date}");
			current_date = Some(date);
			continue;
		}

		if is_header_row(&tokens) {
			log::trace!(target: LOG_TARGET, "line {line_no}: skipping table header");
			continue;
		}

		let date = current_date.ok_or_else(|| {
			Error::malformed(source_name, line_no, "poll row before any date header")
		})?;
		let poll = parse_poll_row(&tokens, date, config)
			.map_err(|reason| Error::malformed(source_name, line_no, reason))?;

		polls.entry(poll.state.clone()).or_default().push(poll);
		count += 1;
	}

	log::info!(
		target: LOG_TARGET,
		"Parsed {} polls covering {} states from {}",
		count,
		polls.len(),
		source_name
	);
	Ok(polls)
}

fn is_date_header(first_token: &str) -> bool {
	let word = first_token.split(',').next().unwrap_or_default();
	WEEKDAYS.contains(&word)
}

/// Header rows open with `Race/Topic` or carry a bare `Race` token. A pollster or state that
/// merely contains the word is a poll row.
fn is_header_row(tokens: &[&str]) -> bool {
	tokens[0].starts_with(HEADER_MARKER) || tokens.contains(&HEADER_MARKER)
}

/// `<Weekday>, <Month> <Day>` pinned to `year`. The weekday itself is not checked.
fn parse_date_header(tokens: &[&str], year: i32) -> Result<NaiveDate, String> {
	let rest = tokens[1..].join(" ");
	if rest.is_empty() {
		return Err(format!("date header `{}` has no month and day", tokens[0]));
	}
	NaiveDate::parse_from_str(&format!("{rest} {year}"), "%B %d %Y")
		.map_err(|e| format!("invalid date header `{}`: {e}", tokens.join(" ")))
}

fn parse_poll_row(tokens: &[&str], date: NaiveDate, config: &ForecastConfig) -> Result<Poll, String> {
	let numeric: Vec<(usize, i32)> = tokens
		.iter()
		.enumerate()
		.filter_map(|(i, t)| t.trim_matches(',').parse::<i32>().ok().map(|v| (i, v)))
		.collect();

	let [(first_idx, first), (_, second), ..] = numeric[..] else {
		return Err(format!("expected two candidate values, found {}", numeric.len()));
	};

	let label_idx = first_idx
		.checked_sub(1)
		.ok_or_else(|| "row starts with a number, no candidate label".to_string())?;
	let label = tokens[label_idx];
	let candidate: Candidate = label
		.parse()
		.map_err(|_| format!("expected `Obama` or `Romney` before `{first}`, found `{label}`"))?;
	let (mut obama, mut romney) = (0, 0);
	for (who, value) in [(candidate, first), (candidate.opponent(), second)] {
		match who {
			Candidate::Obama => obama = value,
			Candidate::Romney => romney = value,
		}
	}

	let (state, name_len) = if config.is_two_word_prefix(tokens[0]) && tokens.len() > 1 {
		(format!("{}{}", tokens[0], tokens[1]), 2)
	} else {
		(tokens[0].to_string(), 1)
	};
	if label_idx < name_len {
		return Err(format!("no state name before candidate label `{label}`"));
	}

	let pollster = tokens[name_len..label_idx].join(" ");

	Ok(Poll::new(state, date, pollster, obama, romney))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn date(month: u32, day: u32) -> NaiveDate {
		NaiveDate::from_ymd_opt(2012, month, day).unwrap()
	}

	fn parse(input: &str) -> Result<PollMap, Error> {
		parse_polls(input, "data.txt", &ForecastConfig::default())
	}

	const LISTING: &str = "\
Race/Topic (Click to Sort) Poll Results Spread
Sunday, November 4
Ohio Quinnipiac Obama 48, Romney 46 Obama +2
North Carolina PPP (D) Romney 49, Obama 49 Tie

Saturday, November 3
Ohio Rasmussen Reports Romney 49, Obama 48 Romney +1
Florida Zogby Obama 47, Romney 47 Tie
";

	#[test]
	fn groups_polls_by_state_in_file_order() {
		let polls = parse(LISTING).unwrap();

		assert_eq!(polls.keys().collect::<Vec<_>>(), vec!["Florida", "NorthCarolina", "Ohio"]);
		let ohio = &polls["Ohio"];
		assert_eq!(ohio.len(), 2);
		assert_eq!(ohio[0], Poll::new("Ohio", date(11, 4), "Quinnipiac", 48, 46));
		assert_eq!(ohio[1], Poll::new("Ohio", date(11, 3), "Rasmussen Reports", 48, 49));
	}

	#[test]
	fn dates_follow_the_latest_header() {
		let polls = parse(LISTING).unwrap();

		assert_eq!(polls["NorthCarolina"][0].date, date(11, 4));
		assert_eq!(polls["Florida"][0].date, date(11, 3));
	}

	#[test]
	fn candidate_label_decides_the_order() {
		let polls = parse(LISTING).unwrap();
		let nc = &polls["NorthCarolina"][0];

		assert_eq!(nc.pollster, "PPP (D)");
		assert_eq!((nc.obama, nc.romney), (49, 49));
		assert_eq!(nc.leader(), Candidate::Obama);
		assert_eq!(polls["Ohio"][1].leader(), Candidate::Romney);
	}

	#[test]
	fn two_word_prefixes_come_from_config() {
		let mut config = ForecastConfig::default();
		config.two_word_state_prefixes.clear();
		let polls =
			parse_polls("Sunday, November 4\nNew Hampshire ARG Obama 49, Romney 47", "t", &config)
				.unwrap();

		// Without the prefix, "Hampshire" is taken for the pollster's first word.
		assert_eq!(polls["New"][0].pollster, "Hampshire ARG");
	}

	#[test]
	fn row_without_candidate_label_is_rejected() {
		let err = parse("Sunday, November 4\nOhio Quinnipiac 48, Romney 46\n").unwrap_err();
		assert!(matches!(err, Error::MalformedRecord { line: 2, .. }), "{err}");

		let err = parse("Sunday, November 4\nOhio Quinnipiac Obama 48\n").unwrap_err();
		assert!(matches!(err, Error::MalformedRecord { line: 2, .. }), "{err}");
	}

	#[test]
	fn row_before_first_header_is_rejected() {
		let err = parse("Ohio Quinnipiac Obama 48, Romney 46\n").unwrap_err();
		assert!(matches!(err, Error::MalformedRecord { line: 1, .. }));
	}

	#[test]
	fn bad_date_header_is_rejected() {
		assert!(parse("Sunday, Brumaire 4\n").is_err());
		assert!(parse("Sunday,\n").is_err());
	}

	#[test]
	fn reference_year_is_configurable() {
		let config = ForecastConfig { reference_year: 2008, ..Default::default() };
		let polls =
			parse_polls("Monday, November 3\nOhio SurveyUSA Obama 50, Romney 45", "t", &config)
				.unwrap();
		assert_eq!(polls["Ohio"][0].date, NaiveDate::from_ymd_opt(2008, 11, 3).unwrap());
	}

	#[test]
	fn pollster_named_like_the_header_is_kept() {
		let polls = parse(
			"Race/Topic (Click to Sort) Poll Results Spread\nSunday, November 4\n\
			 Ohio RaceWatch Obama 48, Romney 46 Obama +2\nOhio Race 2012 Results\n",
		)
		.unwrap();

		assert_eq!(polls["Ohio"], vec![Poll::new("Ohio", date(11, 4), "RaceWatch", 48, 46)]);
	}

	#[test]
	fn polls_serialize_with_camel_case_keys() {
		let poll = Poll { sample_size: 600, ..Poll::new("Ohio", date(11, 4), "Quinnipiac", 48, 46) };
		let json = serde_json::to_value(&poll).unwrap();

		assert_eq!(json["sampleSize"], 600);
		assert!(json.get("sample_size").is_none());
		assert!(json.get("houseEffectApplied").is_none());
	}

	#[test]
	fn sorting_puts_newest_first() {
		let mut polls = parse(
			"Friday, November 2\nOhio A Obama 1, Romney 2\nSunday, November 4\nOhio B Obama 3, Romney 4\n",
		)
		.unwrap();
		sort_newest_first(&mut polls);

		let names: Vec<_> = polls["Ohio"].iter().map(|p| p.pollster.as_str()).collect();
		assert_eq!(names, vec!["B", "A"]);
	}
}
