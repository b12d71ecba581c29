//! Config validation: unknown-key detection with "did you mean?" hints
//! and range checks.
//!
//! The raw TOML is first walked as a `toml::Value` tree and compared against
//! the known key set; typos only produce warnings. Range checks run on the
//! deserialised [`ChatConfig`](super::ChatConfig) and split into hard errors
//! and warnings.

use std::collections::HashSet;

/// A non-fatal config warning (typo, suspicious value).
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref s) = self.suggestion {
            write!(f, " (did you mean '{s}'?)")?;
        }
        Ok(())
    }
}

/// Every valid dotted key path in a `ChatConfig` file.
///
/// Kept in step with the structs in `chat_config.rs` by hand.
pub fn known_config_keys() -> HashSet<&'static str> {
    [
        "server",
        "server.addr",
        "server.max_body_bytes",
        "assistant",
        "assistant.school_name",
        "assistant.max_sources",
        "assistant.suggested_questions",
        "knowledge",
        "knowledge.path",
        "generation",
        "generation.base_url",
        "generation.model",
        "generation.temperature",
        "generation.max_tokens",
        "generation.timeout_secs",
        "generation.api_key",
    ]
    .into_iter()
    .collect()
}

/// Collect all dotted key paths of a TOML table tree.
///
/// `{ a = { b = 1, c = 2 } }` yields `["a", "a.b", "a.c"]`.
pub fn walk_toml_keys(value: &toml::Value, prefix: &str) -> Vec<String> {
    let mut keys = Vec::new();
    if let Some(table) = value.as_table() {
        for (k, v) in table {
            let path = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            keys.push(path.clone());
            if v.is_table() {
                keys.extend(walk_toml_keys(v, &path));
            }
        }
    }
    keys
}

/// Edit distance between two key paths.
fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b_chars.len();
    }
    if b_chars.is_empty() {
        return a.chars().count();
    }

    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}

/// Closest known key within distance 3, ties broken alphabetically.
pub fn suggest_correction(unknown: &str, known: &HashSet<&str>) -> Option<String> {
    let mut candidates: Vec<(usize, &str)> = known
        .iter()
        .map(|&k| (levenshtein(unknown, k), k))
        .filter(|(dist, _)| *dist <= 3)
        .collect();
    candidates.sort_unstable();
    candidates.first().map(|(_, k)| (*k).to_string())
}

/// Warn about keys in `raw_toml` that no config struct reads.
///
/// Parse errors are left to serde and yield no warnings here.
pub fn validate_unknown_keys(raw_toml: &str) -> Vec<ValidationWarning> {
    let Ok(value) = raw_toml.parse::<toml::Value>() else {
        return Vec::new();
    };

    let known = known_config_keys();
    walk_toml_keys(&value, "")
        .into_iter()
        .filter(|key| !known.contains(key.as_str()))
        .map(|key| ValidationWarning {
            suggestion: suggest_correction(&key, &known),
            message: format!("Unknown config key '{key}'"),
            field: key,
        })
        .collect()
}

/// Range checks on a parsed config.
///
/// Returns (errors, warnings): errors prevent startup, warnings are logged.
pub fn validate_ranges(config: &super::ChatConfig) -> (Vec<String>, Vec<ValidationWarning>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let g = &config.generation;
    if !(g.base_url.starts_with("http://") || g.base_url.starts_with("https://")) {
        errors.push(format!(
            "generation.base_url = '{}' must start with http:// or https://",
            g.base_url
        ));
    }
    if !(0.0..=2.0).contains(&g.temperature) {
        errors.push(format!(
            "generation.temperature = {:.2} is outside [0, 2]",
            g.temperature
        ));
    }
    if g.max_tokens == 0 {
        errors.push("generation.max_tokens must be > 0".to_string());
    }
    if g.timeout_secs == 0 {
        errors.push("generation.timeout_secs must be > 0".to_string());
    }
    if g.model.trim().is_empty() {
        errors.push("generation.model must not be empty".to_string());
    }

    let a = &config.assistant;
    if a.max_sources == 0 {
        errors.push("assistant.max_sources must be > 0".to_string());
    } else if a.max_sources > 10 {
        warnings.push(ValidationWarning {
            field: "assistant.max_sources".to_string(),
            message: format!(
                "assistant.max_sources = {} puts a lot of context into every prompt",
                a.max_sources
            ),
            suggestion: None,
        });
    }
    if a.suggested_questions.is_empty() {
        warnings.push(ValidationWarning {
            field: "assistant.suggested_questions".to_string(),
            message: "assistant.suggested_questions is empty; GET /chat will report an error"
                .to_string(),
            suggestion: None,
        });
    }

    if config.server.max_body_bytes == 0 {
        errors.push("server.max_body_bytes must be > 0".to_string());
    }

    (errors, warnings)
}
