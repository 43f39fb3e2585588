use super::runner::OutputMode;
use crate::errors::BenchError;

pub fn parse_output_mode(s: Option<&str>) -> OutputMode {
    match s.map(str::to_ascii_lowercase).as_deref() {
        Some("plain") => OutputMode::Plain,
        Some("json") => OutputMode::Json,
        _ => OutputMode::Human,
    }
}

/// Parses a comma-separated size list such as `1000,10_000`.
pub fn parse_sizes(s: &str) -> Result<Vec<usize>, BenchError> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.replace('_', "")
                .parse::<usize>()
                .map_err(|_| BenchError::Config(format!("invalid dataset size: {part}")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_mode_parsing() {
        assert_eq!(parse_output_mode(Some("JSON")), OutputMode::Json);
        assert_eq!(parse_output_mode(Some("plain")), OutputMode::Plain);
        assert_eq!(parse_output_mode(Some("human")), OutputMode::Human);
        assert_eq!(parse_output_mode(Some("xml")), OutputMode::Human);
        assert_eq!(parse_output_mode(None), OutputMode::Human);
    }

    #[test]
    fn size_list_parsing() {
        assert_eq!(parse_sizes("1000, 10_000,,5").unwrap(), vec![1000, 10_000, 5]);
        assert!(parse_sizes("").unwrap().is_empty());
        assert!(matches!(parse_sizes("12,abc"), Err(BenchError::Config(_))));
    }
}
