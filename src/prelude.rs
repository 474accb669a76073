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

//! Types and constants that are shared all over the place.

use std::collections::BTreeMap;

use crate::{electoral::State, polls::Poll};

/// The state identifier, as found in the first column of the electoral table.
pub type StateId = String;

/// States keyed by identifier. Ordered, so iteration is alphabetical.
pub type StateMap = BTreeMap<StateId, State>;

/// Polls per state, each list in file order.
pub type PollMap = BTreeMap<StateId, Vec<Poll>>;

/// The logging target.
pub const LOG_TARGET: &str = "electoral-forecaster";

/// Default location of the electoral table.
pub const DEFAULT_ELECTORAL_FILE: &str = "electoral.txt";
/// Default location of the scraped poll listing.
pub const DEFAULT_POLLS_FILE: &str = "data.txt";
/// Default evaluation date, the last day polls were scraped before the election.
pub const DEFAULT_EVALUATION_DATE: &str = "2012-11-04";
/// Year assigned to the year-less date headers of the poll listing.
pub const DEFAULT_REFERENCE_YEAR: i32 = 2012;

/// Date format accepted on the command line and in configuration files.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
