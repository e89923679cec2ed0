//! Environment variable helpers

/// Read an environment variable, treating an empty value the same as unset.
pub fn var_non_empty(key: &str) -> Option<String> {
    non_empty(std::env::var(key).ok())
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_var_is_none() {
        assert_eq!(var_non_empty("ANALYZER_UTILS_SURELY_UNSET_VAR"), None);
    }

    #[test]
    fn test_blank_values_count_as_unset() {
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(Some("   \t".to_string())), None);
        assert_eq!(non_empty(None), None);
    }

    #[test]
    fn test_value_is_trimmed() {
        assert_eq!(
            non_empty(Some("  http://127.0.0.1:9000 \n".to_string())),
            Some("http://127.0.0.1:9000".to_string())
        );
    }
}
