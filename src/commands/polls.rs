//! List the parsed polls with their weights.

use crate::{
	commands::{predict::load_forecast_config, types::PollsConfig},
	error::Error,
	polls::{load_polls, sort_newest_first},
	report::render_polls,
	weighting::WeightingEngine,
};

pub fn polls_cmd(config: PollsConfig) -> Result<(), Error> {
	let forecast_config = load_forecast_config(config.config.as_deref(), config.evaluation_date)?;

	let mut polls = load_polls(&config.polls_file, &forecast_config)?;
	if let Some(state) = &config.state {
		polls.retain(|name, _| name == state);
		if polls.is_empty() {
			return Err(Error::Other(format!("no polls for state `{state}`")));
		}
	}
	sort_newest_first(&mut polls);

	let engine = WeightingEngine::new(&forecast_config);
	for list in polls.values_mut() {
		engine.weigh_state(list)?;
	}

	print!("{}", render_polls(&polls));
	Ok(())
}
