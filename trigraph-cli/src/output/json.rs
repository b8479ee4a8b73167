//! JSON output formatting for machine-readable output.

use super::OutputConfig;
use serde::Serialize;

/// JSON output formatter
pub struct JsonOutput;

impl JsonOutput {
    /// Format data as JSON string
    ///
    /// Uses pretty-printing by default. When `config.compact` is true,
    /// outputs minified JSON on a single line.
    pub fn format<T: Serialize + ?Sized>(data: &T, config: &OutputConfig) -> String {
        if config.compact {
            serde_json::to_string(data).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
        } else {
            serde_json::to_string_pretty(data)
                .unwrap_or_else(|e| format!("{{\n  \"error\": \"{}\"\n}}", e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use trigraph_core::{Neighbor, PathStep};

    #[test]
    fn test_format_neighbors_pretty() {
        let data = vec![Neighbor::new("ist", "Tier"), Neighbor::new("jagt", "Maus")];
        let output = JsonOutput::format(&data, &OutputConfig::new(OutputFormat::Json));

        assert!(output.starts_with('['));
        assert!(output.contains("\"predicate\": \"ist\""));
        assert!(output.contains('\n'));
    }

    #[test]
    fn test_format_path_compact() {
        let path = vec![PathStep::new("Katze", "ist", "Tier")];
        let config = OutputConfig::new(OutputFormat::Json).with_compact(true);
        let output = JsonOutput::format(&path, &config);

        assert_eq!(
            output,
            r#"[{"from":"Katze","predicate":"ist","to":"Tier"}]"#
        );
    }
}
