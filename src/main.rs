// Copyright 2021-2022 Parity Technologies (UK) Ltd.
// This file is part of Polkadot.

// Polkadot is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// Polkadot is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with Polkadot.  If not, see <http://www.gnu.org/licenses/>.

//! # Electoral Forecaster.
//!
//! Reads an electoral table and a scraped poll listing and forecasts the electoral college.
//! See `help` for more information.
//!
//! # Implementation Notes:
//!
//! A run is a single synchronous pass. The first malformed input record aborts it, nothing is
//! printed for a partial forecast.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use electoral_forecaster::{
	commands::{self, PollsConfig, PredictConfig},
	error::Error,
	prelude::LOG_TARGET,
};

#[derive(Debug, Clone, Parser)]
#[cfg_attr(test, derive(PartialEq))]
#[clap(author, version, about)]
pub struct Opt {
	#[clap(subcommand)]
	pub command: Command,

	/// Sets a custom logging filter. Syntax is `<target>=<level>`, e.g.
	/// -lelectoral-forecaster=debug.
	///
	/// Log levels (least to most verbose) are error, warn, info, debug, and trace.
	/// By default, all targets log `info`. The global log level can be set with `-l<level>`.
	#[clap(long, short, default_value = "info", global = true)]
	pub log: String,
}

#[derive(Debug, Clone, Parser)]
#[cfg_attr(test, derive(PartialEq))]
pub enum Command {
	/// Forecast the electoral college.
	Predict(PredictConfig),
	/// List the parsed polls with their weights.
	Polls(PollsConfig),
}

fn main() -> Result<(), Error> {
	let Opt { command, log } = Opt::parse();
	let filter = EnvFilter::from_default_env().add_directive(log.parse()?);
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

	let res = match command {
		Command::Predict(cfg) => commands::predict_cmd(cfg),
		Command::Polls(cfg) => commands::polls_cmd(cfg),
	};

	log::debug!(target: LOG_TARGET, "execution finished. outcome = {res:?}");
	res
}
