use super::args::Args;
use super::runner::SearchRunner;
use crate::config::{ConfigManager, OutputFormat};
use anyhow::Context;
use clap::CommandFactory;
use std::io::Write;

/// Load configuration, then search for every target in `args`.
///
/// Reports go to `out`, usage and per-target failures to `err`. Returns the
/// process exit code.
pub fn run<O: Write, E: Write>(args: &Args, out: &mut O, err: &mut E) -> anyhow::Result<i32> {
    let mut manager = ConfigManager::new();
    if let Some(path) = &args.config {
        manager = manager.with_file(path);
    }

    let mut config = manager.load().context("failed to load configuration")?;
    args.apply_overrides(&mut config);
    config.validate().context("invalid command-line options")?;

    if args.print_config {
        write!(out, "{}", ConfigManager::to_toml(&config)?)?;
        return Ok(0);
    }

    if args.targets.is_empty() {
        writeln!(err, "{}", Args::command().render_usage())?;
        return Ok(config.output.usage_exit_code);
    }

    let format = config.output.format;
    let runner = SearchRunner::new(config.evolution);

    runner.run_all(args.targets.iter().map(String::as_str), |_, result| {
        let rendered = result.and_then(|report| match format {
            OutputFormat::Text => Ok(report.to_text()),
            OutputFormat::Json => report.to_json(),
        });

        match rendered {
            Ok(text) => writeln!(out, "{}", text),
            Err(e) => writeln!(err, "Exception: {}", e),
        }
    })?;

    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn run_with(argv: &[&str]) -> (i32, String, String) {
        let args = Args::parse_from(std::iter::once("revcalc").chain(argv.iter().copied()));
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let code = run(&args, &mut out, &mut err).unwrap();
        (code, String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn test_no_targets_prints_usage() {
        let (code, out, err) = run_with(&[]);
        assert_eq!(code, 1337);
        assert!(out.is_empty());
        assert!(err.contains("Usage:"), "{}", err);
    }

    #[test]
    fn test_print_config_emits_toml() {
        let (code, out, err) = run_with(&["--print-config", "--population-size", "12"]);
        assert_eq!(code, 0);
        assert!(err.is_empty());
        assert!(out.contains("[evolution]"), "{}", out);
        assert!(out.contains("population_size = 12"), "{}", out);
    }

    #[test]
    fn test_bad_target_is_reported_and_skipped() {
        let (code, out, err) = run_with(&["--seed", "1", "--max-generations", "500", "abc", "4"]);
        assert_eq!(code, 0);
        assert!(err.starts_with("Exception: Invalid target 'abc'"), "{}", err);
        assert!(out.starts_with("Target: 4\nEquation(s): "), "{}", out);
        assert!(out.trim_end().ends_with('~'));
    }

    #[test]
    fn test_json_format() {
        let (code, out, _) =
            run_with(&["--seed", "3", "--max-generations", "50", "-f", "json", "7"]);
        assert_eq!(code, 0);
        let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(value["target"], 7);
        assert!(value["generations"].as_u64().is_some_and(|g| (1..=50).contains(&g)));
    }

    #[test]
    fn test_invalid_override_is_an_error() {
        let args = Args::parse_from(["revcalc", "--mutation-rate", "3", "4"]);
        let result = run(&args, &mut Vec::new(), &mut Vec::new());
        assert!(result.is_err());
    }
}
