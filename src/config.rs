//! Forecast configuration.
//!
//! Everything the heuristic treats as a tunable table lives here: the evaluation date, the
//! pollster deny lists, the house-effect tables and the multi-token state-name prefixes. The
//! value is built once at start-up and then only passed around by reference.

use std::{collections::BTreeMap, path::Path};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
	error::Error,
	prelude::{DATE_FORMAT, DEFAULT_EVALUATION_DATE, DEFAULT_REFERENCE_YEAR, LOG_TARGET},
	utils::read_data_from_json_file,
};

/// Largest house-effect shift accepted from a configuration file, in percentage points.
pub const MAX_HOUSE_EFFECT: i32 = 100;

/// Tunable forecast settings.
///
/// A key present in a configuration file replaces its default table as a whole; keys absent from
/// the file keep their defaults. To add a pollster to the deny list, list the default entries too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ForecastConfig {
	/// The day the forecast is made for. Poll ages are measured against it.
	pub evaluation_date: NaiveDate,
	/// Year given to the year-less date headers of the poll listing.
	pub reference_year: i32,
	/// Pollsters whose numbers are not trusted at all.
	pub unreliable_pollsters: Vec<String>,
	/// Pollsters working for a campaign or party.
	pub partisan_pollsters: Vec<String>,
	/// Pollsters that lean towards Obama, with the number of points to shift.
	pub left_leaning_pollsters: BTreeMap<String, i32>,
	/// Pollsters that lean towards Romney, with the number of points to shift.
	pub right_leaning_pollsters: BTreeMap<String, i32>,
	/// First words of state names that span two tokens in the poll listing.
	pub two_word_state_prefixes: Vec<String>,
}

impl Default for ForecastConfig {
	fn default() -> Self {
		Self {
			evaluation_date: parse_date(DEFAULT_EVALUATION_DATE)
				.expect("default evaluation date is a valid date; qed"),
			reference_year: DEFAULT_REFERENCE_YEAR,
			unreliable_pollsters: ["Strategic Vision", "Research 2000", "Zogby"]
				.into_iter()
				.map(Into::into)
				.collect(),
			partisan_pollsters: Vec::new(),
			left_leaning_pollsters: BTreeMap::from([("Rasmussen".to_string(), 2)]),
			right_leaning_pollsters: BTreeMap::new(),
			two_word_state_prefixes: ["New", "North", "Rhode", "South", "West"]
				.into_iter()
				.map(Into::into)
				.collect(),
		}
	}
}

impl ForecastConfig {
	/// Load a configuration from a JSON file. Keys missing from the file keep their defaults.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
		let path = path.as_ref();
		let config: Self = read_data_from_json_file(path)?;
		config.validate()?;
		log::debug!(target: LOG_TARGET, "Loaded forecast configuration from {}", path.display());
		Ok(config)
	}

	/// Load from `path` if given, otherwise use the defaults.
	pub fn load(path: Option<&str>) -> Result<Self, Error> {
		match path {
			Some(path) => Self::from_file(path),
			None => Ok(Self::default()),
		}
	}

	/// Reject house-effect shifts outside `0..=MAX_HOUSE_EFFECT`.
	pub fn validate(&self) -> Result<(), Error> {
		let tables = [("left", &self.left_leaning_pollsters), ("right", &self.right_leaning_pollsters)];
		for (side, table) in tables {
			if let Some((pollster, bias)) =
				table.iter().find(|(_, bias)| !(0..=MAX_HOUSE_EFFECT).contains(*bias))
			{
				return Err(Error::Other(format!(
					"{side}-leaning bias of {pollster} is {bias}, expected 0..={MAX_HOUSE_EFFECT}"
				)));
			}
		}
		Ok(())
	}

	pub fn with_evaluation_date(mut self, date: NaiveDate) -> Self {
		self.evaluation_date = date;
		self
	}

	/// Whether polls from `pollster` must be dropped altogether.
	pub fn is_denylisted(&self, pollster: &str) -> bool {
		self.unreliable_pollsters.iter().any(|p| p == pollster) ||
			self.partisan_pollsters.iter().any(|p| p == pollster)
	}

	pub fn left_bias(&self, pollster: &str) -> Option<i32> {
		self.left_leaning_pollsters.get(pollster).copied()
	}

	pub fn right_bias(&self, pollster: &str) -> Option<i32> {
		self.right_leaning_pollsters.get(pollster).copied()
	}

	pub fn is_two_word_prefix(&self, token: &str) -> bool {
		self.two_word_state_prefixes.iter().any(|p| p == token)
	}
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, Error> {
	NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|e| Error::InvalidDate(format!("{s}: {e}")))
}
