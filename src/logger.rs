use crate::errors::BenchError;
use crate::utils::devlog::BENCH_TARGET;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::append::rolling_file::RollingFileAppender;
use log4rs::append::rolling_file::policy::compound::{
    CompoundPolicy, roll::fixed_window::FixedWindowRoller, trigger::size::SizeTrigger,
};
use log4rs::config::{Appender, Config, Logger, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::path::Path;
use std::sync::OnceLock;

const ENCODER_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S%.3f)} [{l}] {t} - {m}{n}";
const ROLL_SIZE_BYTES: u64 = 10 * 1024 * 1024;
pub const DEFAULT_RETENTION: usize = 7;

static HANDLE: OnceLock<log4rs::Handle> = OnceLock::new();

/// Maps `error|warn|info|debug|trace|off` to a level filter. Anything else is `Warn`.
#[must_use]
pub fn parse_level(level: &str) -> LevelFilter {
    match level.to_ascii_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Warn,
    }
}

fn rolling_appender(
    dir: &Path,
    stem: &str,
    keep: u32,
) -> Result<RollingFileAppender, Box<dyn std::error::Error>> {
    let roller = FixedWindowRoller::builder()
        .build(&format!("{}", dir.join(format!("{stem}.{{}}.log")).display()), keep)?;
    let policy = CompoundPolicy::new(Box::new(SizeTrigger::new(ROLL_SIZE_BYTES)), Box::new(roller));
    let appender = RollingFileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(ENCODER_PATTERN)))
        .build(dir.join(format!("{stem}.log")), Box::new(policy))?;
    Ok(appender)
}

/// Builds the logging config.
/// - dir: when set, `{dir}/seqbench.log` plus `{dir}/bench.log` for bench lines; otherwise stderr only.
/// - level: error|warn|info|debug|trace (default warn)
/// - retention: number of rolled files to keep (default 7)
///
/// # Errors
/// Returns an error if the directory cannot be created or an appender fails to build.
pub fn build_config(
    dir: Option<&Path>,
    level: Option<&str>,
    retention: Option<usize>,
) -> Result<Config, BenchError> {
    let lvl = parse_level(level.unwrap_or("warn"));
    let builder = match dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let keep = u32::try_from(retention.unwrap_or(DEFAULT_RETENTION)).unwrap_or(u32::MAX);
            let app = rolling_appender(dir, "seqbench", keep)
                .map_err(|e| BenchError::Logging(e.to_string()))?;
            let bench = rolling_appender(dir, "bench", keep)
                .map_err(|e| BenchError::Logging(e.to_string()))?;
            Config::builder()
                .appender(Appender::builder().build("app", Box::new(app)))
                .appender(Appender::builder().build("bench", Box::new(bench)))
                .logger(
                    Logger::builder()
                        .appender("bench")
                        .additive(false)
                        .build(BENCH_TARGET, LevelFilter::Trace),
                )
        }
        None => {
            // stdout carries the report
            let stderr = ConsoleAppender::builder()
                .target(Target::Stderr)
                .encoder(Box::new(PatternEncoder::new(ENCODER_PATTERN)))
                .build();
            Config::builder()
                .appender(Appender::builder().build("app", Box::new(stderr)))
                .logger(Logger::builder().additive(false).build(BENCH_TARGET, LevelFilter::Off))
        }
    };
    builder
        .build(Root::builder().appender("app").build(lvl))
        .map_err(|e| BenchError::Logging(e.to_string()))
}

/// Configure logging globally for the process. The first successful call wins;
/// later calls return early without touching the installed logger or `log::max_level()`.
///
/// # Errors
/// Returns an error if the config cannot be built or another logger is already installed.
pub fn configure_logging(
    dir: Option<&Path>,
    level: Option<&str>,
    retention: Option<usize>,
) -> Result<(), BenchError> {
    if HANDLE.get().is_some() {
        log::debug!("logger already initialized; keeping existing configuration");
        return Ok(());
    }
    let config = build_config(dir, level, retention)?;
    let handle = log4rs::init_config(config).map_err(|e| BenchError::Logging(e.to_string()))?;
    let _ = HANDLE.set(handle);
    Ok(())
}

/// Whether `configure_logging` has installed the process logger.
#[must_use]
pub fn is_configured() -> bool {
    HANDLE.get().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parsing() {
        assert_eq!(parse_level("ERROR"), LevelFilter::Error);
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level("off"), LevelFilter::Off);
        assert_eq!(parse_level("bogus"), LevelFilter::Warn);
    }

    #[test]
    fn file_config_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("logs");
        let cfg = build_config(Some(&dir), Some("info"), Some(3)).unwrap();
        assert!(dir.is_dir());
        assert_eq!(cfg.root().level(), LevelFilter::Info);
        assert_eq!(cfg.appenders().len(), 2);
        assert!(cfg.loggers().iter().any(|l| l.name() == BENCH_TARGET));
    }

    // The only test in this binary that installs the global logger.
    #[test]
    fn second_configuration_keeps_first_level() {
        let tmp = tempfile::tempdir().unwrap();
        configure_logging(Some(&tmp.path().join("logs")), Some("trace"), None).unwrap();
        assert!(is_configured());
        assert_eq!(log::max_level(), LevelFilter::Trace);
        configure_logging(None, Some("error"), None).unwrap();
        assert_eq!(log::max_level(), LevelFilter::Trace);
    }

    #[test]
    fn console_config_defaults_to_warn() {
        let cfg = build_config(None, None, None).unwrap();
        assert_eq!(cfg.root().level(), LevelFilter::Warn);
        assert_eq!(cfg.appenders().len(), 1);
    }
}
