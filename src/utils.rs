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

use crate::{error::Error, prelude::LOG_TARGET};
use serde::{Serialize, de::DeserializeOwned};
use std::{
	fs::{self, File},
	io::{BufWriter, Write},
	path::Path,
};

/// Read a whole text input, keeping the path in the error.
pub fn read_text_file(path: impl AsRef<Path>) -> Result<String, Error> {
	let path = path.as_ref();
	log::debug!(target: LOG_TARGET, "Reading data from file: {}", path.display());

	fs::read_to_string(path)
		.map_err(|e| Error::Other(format!("failed to read {}: {}", path.display(), e)))
}

/// Write data to a JSON file
pub fn write_data_to_json_file<T>(data: &T, path: impl AsRef<Path>) -> Result<(), Error>
where
	T: Serialize,
{
	let path = path.as_ref();
	if let Some(parent) = path.parent() {
		if !parent.as_os_str().is_empty() {
			fs::create_dir_all(parent)?;
		}
	}

	let file = File::create(path)?;
	let mut writer = BufWriter::new(file);
	serde_json::to_writer_pretty(&mut writer, data)?;
	writer.write_all(b"\n")?;
	writer.flush()?;

	log::info!(target: LOG_TARGET, "Wrote JSON data to {}", path.display());
	Ok(())
}

/// Read data from a JSON file
pub fn read_data_from_json_file<T>(path: impl AsRef<Path>) -> Result<T, Error>
where
	T: DeserializeOwned,
{
	let content = read_text_file(path)?;
	Ok(serde_json::from_str(&content)?)
}
