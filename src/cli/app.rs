//! One run of the program: choose, load, select, report

use crate::cli::args::CliArgs;
use crate::cli::prompt::Prompter;
use crate::cli::questionnaire::{ask_pipeline_options, ask_source_format, GREETING};
use crate::config::Config;
use crate::core::pipeline::{process_pipeline, PipelineOptions};
use crate::core::resolver::AmountResolver;
use crate::core::traits::RateProvider;
use crate::io::{load_records, SourceFormat};
use crate::rates::{ApiLayerRates, CachingRateProvider, StaticRates};
use crate::report::write_report;
use crate::types::OperationsError;
use log::{info, warn};
use std::io::Write;
use std::path::PathBuf;

/// Build the rate provider for a run
///
/// Offline runs use an empty table, so every foreign amount takes the
/// fallback. Either way lookups are memoized for the run.
pub fn build_rate_provider(
    config: &Config,
    offline: bool,
) -> Result<CachingRateProvider<Box<dyn RateProvider>>, OperationsError> {
    let provider: Box<dyn RateProvider> = if offline {
        info!("Offline mode: foreign amounts are not converted");
        Box::new(StaticRates::new())
    } else {
        Box::new(ApiLayerRates::new(
            &config.rates_api_url,
            config.api_key.clone(),
            config.rates_timeout,
        )?)
    };
    Ok(CachingRateProvider::new(provider))
}

/// Execute one run
///
/// # Arguments
///
/// * `args` - Parsed command line
/// * `config` - Environment configuration
/// * `prompter` - Source of answers in interactive mode
/// * `output` - Destination of the report
///
/// # Returns
///
/// * `Ok(())` - the report was written
/// * `Err(OperationsError)` - the run was aborted
pub fn run(
    args: &CliArgs,
    config: &Config,
    prompter: &mut dyn Prompter,
    output: &mut dyn Write,
) -> Result<(), OperationsError> {
    let interactive = !args.non_interactive;
    if interactive {
        prompter.tell(GREETING)?;
    }

    let (path, format) = choose_source(args, config, prompter)?;
    let records = load_records(&path, format)?;

    let options = if interactive {
        ask_pipeline_options(prompter)?
    } else {
        args.to_pipeline_options()
    };

    let selected = match process_pipeline(&records, &options) {
        Ok(selected) => selected,
        Err(e @ OperationsError::InvalidDate { .. }) if interactive => {
            warn!("Sort skipped: {}", e);
            prompter.tell(&format!("Cannot sort by date: {}. Showing operations unsorted.", e))?;
            let unsorted = PipelineOptions {
                sort: None,
                ..options
            };
            process_pipeline(&records, &unsorted)?
        }
        Err(e) => return Err(e),
    };

    let provider = build_rate_provider(config, args.offline)?;
    let resolver = AmountResolver::with_currencies(provider, config.supported_currencies.clone());
    write_report(&selected, &resolver, &args.categories, output)
}

/// Decide which file to load and how to decode it
fn choose_source(
    args: &CliArgs,
    config: &Config,
    prompter: &mut dyn Prompter,
) -> Result<(PathBuf, Option<SourceFormat>), OperationsError> {
    if let Some(path) = &args.input_file {
        return Ok((path.clone(), args.format));
    }

    let format = match args.format {
        Some(format) => format,
        None if args.non_interactive => SourceFormat::Json,
        None => ask_source_format(prompter)?,
    };
    Ok((config.default_path(format).clone(), Some(format)))
}
