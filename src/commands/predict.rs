//! Predict command implementation for the electoral-college forecast

use chrono::NaiveDate;

use crate::{
	aggregate::{Aggregator, Forecast},
	commands::types::PredictConfig,
	config::ForecastConfig,
	electoral::load_electoral,
	error::Error,
	polls::{load_polls, sort_newest_first},
	prelude::LOG_TARGET,
	report::render_forecast,
	utils::write_data_to_json_file,
	weighting::WeightingEngine,
};

/// Run the forecast and print it to stdout.
pub fn predict_cmd(config: PredictConfig) -> Result<(), Error> {
	let forecast = run_prediction(&config)?;

	print!("{}", render_forecast(&forecast));

	if let Some(path) = &config.output {
		write_data_to_json_file(&forecast, path)?;
	}

	Ok(())
}

/// Load both inputs and compute the forecast, without printing anything.
pub fn run_prediction(config: &PredictConfig) -> Result<Forecast, Error> {
	let forecast_config = load_forecast_config(config.config.as_deref(), config.evaluation_date)?;

	log::info!(
		target: LOG_TARGET,
		"Forecasting for {} from {} and {}",
		forecast_config.evaluation_date,
		config.electoral_file,
		config.polls_file
	);

	let mut states = load_electoral(&config.electoral_file)?;
	let mut polls = load_polls(&config.polls_file, &forecast_config)?;
	// Only affects presentation, the weighted sums do not depend on order.
	sort_newest_first(&mut polls);

	let engine = WeightingEngine::new(&forecast_config);
	Aggregator::new(engine, config.tossup_fallback).predict(&mut states, &mut polls)
}

/// The configuration file (or defaults) with the command line date on top.
pub(crate) fn load_forecast_config(
	path: Option<&str>,
	evaluation_date: Option<NaiveDate>,
) -> Result<ForecastConfig, Error> {
	let config = ForecastConfig::load(path)?;
	Ok(match evaluation_date {
		Some(date) => config.with_evaluation_date(date),
		None => config,
	})
}
