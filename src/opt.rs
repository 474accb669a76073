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

use crate::error::Error;

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The two candidates we track. Third-party shares are ignored.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Candidate {
	Obama,
	Romney,
}

impl Candidate {
	/// The other candidate.
	pub fn opponent(self) -> Self {
		match self {
			Self::Obama => Self::Romney,
			Self::Romney => Self::Obama,
		}
	}
}

impl fmt::Display for Candidate {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let candidate = match self {
			Self::Obama => "Obama",
			Self::Romney => "Romney",
		};
		write!(f, "{}", candidate)
	}
}

impl FromStr for Candidate {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Error> {
		match s {
			"Obama" => Ok(Self::Obama),
			"Romney" => Ok(Self::Romney),
			other => Err(Error::Other(format!("unknown candidate `{other}`"))),
		}
	}
}

/// The a-priori lean of a state, only used when there is no poll evidence.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Baseline {
	Obama,
	Romney,
	Tossup,
}

impl Baseline {
	/// The candidate this baseline leans to, `None` for a tossup.
	pub fn candidate(self) -> Option<Candidate> {
		match self {
			Self::Obama => Some(Candidate::Obama),
			Self::Romney => Some(Candidate::Romney),
			Self::Tossup => None,
		}
	}
}

impl fmt::Display for Baseline {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let baseline = match self {
			Self::Obama => "Obama",
			Self::Romney => "Romney",
			Self::Tossup => "Tossup",
		};
		write!(f, "{}", baseline)
	}
}

impl FromStr for Baseline {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Error> {
		match s {
			"Obama" => Ok(Self::Obama),
			"Romney" => Ok(Self::Romney),
			"Tossup" => Ok(Self::Tossup),
			baseline => Err(Error::InvalidBaseline(baseline.to_string())),
		}
	}
}

/// What to do with a tossup state that has no usable poll.
#[derive(clap::ValueEnum, Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum TossupFallback {
	/// Fail the run with an error naming the state.
	#[default]
	Reject,
	/// Split the state evenly, which the tie-break then hands to Romney.
	Even,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn baseline_parsing_works() {
		assert_eq!("Obama".parse::<Baseline>().unwrap(), Baseline::Obama);
		assert_eq!("Romney".parse::<Baseline>().unwrap(), Baseline::Romney);
		assert_eq!("Tossup".parse::<Baseline>().unwrap(), Baseline::Tossup);
		assert!(matches!("tossup".parse::<Baseline>(), Err(Error::InvalidBaseline(b)) if b == "tossup"));
		assert!("Lean".parse::<Baseline>().is_err());
	}

	#[test]
	fn baseline_display_round_trips() {
		for baseline in [Baseline::Obama, Baseline::Romney, Baseline::Tossup] {
			assert_eq!(baseline.to_string().parse::<Baseline>().unwrap(), baseline);
		}
	}

	#[test]
	fn candidate_opponent() {
		assert_eq!(Candidate::Obama.opponent(), Candidate::Romney);
		assert_eq!(Candidate::Romney.opponent(), Candidate::Obama);
		assert_eq!(Baseline::Tossup.candidate(), None);
		assert_eq!(Baseline::Romney.candidate(), Some(Candidate::Romney));
	}
}
