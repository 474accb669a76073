use chrono::NaiveDate;

use crate::{
	config::parse_date,
	opt::TossupFallback,
	prelude::{DEFAULT_ELECTORAL_FILE, DEFAULT_POLLS_FILE},
};

#[derive(Debug, Clone, PartialEq, clap::Parser)]
pub struct PredictConfig {
	/// The electoral table: `<state> <votes> <Obama|Romney|Tossup>` per line.
	#[clap(long, default_value = DEFAULT_ELECTORAL_FILE, env = "ELECTORAL_FILE")]
	pub electoral_file: String,

	/// The scraped poll listing.
	#[clap(long, default_value = DEFAULT_POLLS_FILE, env = "POLLS_FILE")]
	pub polls_file: String,

	/// The day to forecast for, `YYYY-MM-DD`. Overrides the configuration file.
	#[clap(long, value_parser = parse_date)]
	pub evaluation_date: Option<NaiveDate>,

	/// JSON file overriding the pollster tables and other forecast settings.
	#[clap(long, env = "FORECAST_CONFIG")]
	pub config: Option<String>,

	/// What to do with a tossup state that has no usable poll.
	#[clap(long, value_enum, default_value_t = TossupFallback::Reject)]
	pub tossup_fallback: TossupFallback,

	/// Also write the full forecast, polls included, as JSON to this path.
	#[clap(long)]
	pub output: Option<String>,
}

#[derive(Debug, Clone, PartialEq, clap::Parser)]
pub struct PollsConfig {
	/// The scraped poll listing.
	#[clap(long, default_value = DEFAULT_POLLS_FILE, env = "POLLS_FILE")]
	pub polls_file: String,

	/// The day weights are computed for, `YYYY-MM-DD`. Overrides the configuration file.
	#[clap(long, value_parser = parse_date)]
	pub evaluation_date: Option<NaiveDate>,

	/// JSON file overriding the pollster tables and other forecast settings.
	#[clap(long, env = "FORECAST_CONFIG")]
	pub config: Option<String>,

	/// Only list the polls of this state.
	#[clap(long)]
	pub state: Option<String>,
}
