use crate::config::types::Config;
use crate::error::{ConfigError, Result};
use crate::validator::formatter::{self, OutputFormat, ReportOptions};
use crate::validator::{self, RunOptions};
use std::io;
use std::path::PathBuf;

/// Command-line settings of `validate`. Unset values fall back to the config file.
#[derive(Debug, Clone, Default)]
pub struct ValidateOptions {
    pub path: PathBuf,
    pub kind: Option<String>,
    pub format: Option<OutputFormat>,
    pub strict: bool,
    pub no_color: bool,
    pub hide_warnings: bool,
}

/// Settings after merging flags over the config file.
#[derive(Debug, Clone)]
struct Resolved {
    run: RunOptions,
    format: OutputFormat,
    report: ReportOptions,
    strict: bool,
}

fn resolve(options: &ValidateOptions, config: &Config) -> Result<Resolved> {
    let selector = options.kind.as_deref().or(config.validation.kind.as_deref());
    let filter = validator::parse_filter(selector)?;

    let format = match options.format {
        Some(format) => format,
        None => OutputFormat::parse(&config.output.format).ok_or_else(|| {
            ConfigError::InvalidValue(format!(
                "output.format must be 'plain' or 'json', got '{}'",
                config.output.format
            ))
        })?,
    };

    Ok(Resolved {
        run: RunOptions::new(filter).with_ignore_paths(config.validation.ignore_paths.clone()),
        format,
        report: ReportOptions {
            color: config.output.color && !options.no_color,
            show_warnings: config.output.show_warnings && !options.hide_warnings,
        },
        strict: options.strict || config.validation.strict,
    })
}

/// Run `validate` and return the process exit status.
pub fn handle_validate(options: ValidateOptions, config: &Config) -> Result<i32> {
    let resolved = resolve(&options, config)?;
    log::debug!(
        "validating {} with {} rules",
        options.path.display(),
        resolved.run.filter
    );

    let stdout = io::stdout();
    let mut reporter = formatter::reporter_for(resolved.format, resolved.report, stdout.lock());
    let summary = validator::run(&options.path, &resolved.run, reporter.as_mut())?;

    Ok(summary.exit_code(resolved.strict))
}
