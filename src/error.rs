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

use chrono::NaiveDate;

#[derive(thiserror::Error, Debug)]
pub enum Error {
	#[error("Failed to parse log directive: `{0}´")]
	LogParse(#[from] tracing_subscriber::filter::ParseError),
	#[error("I/O error: `{0}`")]
	Io(#[from] std::io::Error),
	#[error("JSON error: `{0}`")]
	Json(#[from] serde_json::Error),
	#[error("Malformed record in {source_name} at line {line}: {reason}")]
	MalformedRecord { source_name: String, line: usize, reason: String },
	#[error("No poll data and no usable baseline for tossup state `{0}`")]
	UndefinedFallback(String),
	#[error("Poll by `{pollster}` in `{state}` is dated {date}, after the evaluation date")]
	PollAfterEvaluation { state: String, pollster: String, date: NaiveDate },
	#[error("Invalid baseline: `{0}`, expected one of Obama, Romney or Tossup")]
	InvalidBaseline(String),
	#[error("Invalid date: `{0}`")]
	InvalidDate(String),
	#[error("Other error: `{0}`")]
	Other(String),
}

impl Error {
	/// Shorthand for a [`Error::MalformedRecord`].
	pub fn malformed(source_name: &str, line: usize, reason: impl Into<String>) -> Self {
		Self::MalformedRecord { source_name: source_name.to_string(), line, reason: reason.into() }
	}
}
