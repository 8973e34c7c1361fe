//! Environment variable parsing for `LEADENGINE_*` settings.

/// Parse an environment variable with a default fallback.
///
/// Unset or blank variables fall back to `default` silently. A value that is
/// set but does not parse (after trimming) is logged at warn level and also
/// falls back.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    match std::env::var(var) {
        Ok(v) if v.trim().is_empty() => default,
        Ok(v) => match v.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // SAFETY (all tests): each test touches a variable name no other test reads.

    #[test]
    fn parses_valid_threshold() {
        let var_name = "LEADENGINE_TEST_THRESHOLD_VALID_41871";
        unsafe { std::env::set_var(var_name, "12") };
        let result: u64 = env_parse_with_default(var_name, 5);
        assert_eq!(result, 12);
        unsafe { std::env::remove_var(var_name) };
    }

    #[test]
    fn invalid_value_falls_back() {
        let var_name = "LEADENGINE_TEST_THRESHOLD_INVALID_41872";
        unsafe { std::env::set_var(var_name, "plenty") };
        let result: u64 = env_parse_with_default(var_name, 5);
        assert_eq!(result, 5);
        unsafe { std::env::remove_var(var_name) };
    }

    #[test]
    fn missing_var_falls_back() {
        let var_name = "LEADENGINE_TEST_THRESHOLD_MISSING_41873";
        unsafe { std::env::remove_var(var_name) };
        let result: i64 = env_parse_with_default(var_name, 30);
        assert_eq!(result, 30);
    }

    #[test]
    fn blank_value_falls_back() {
        let var_name = "LEADENGINE_TEST_THRESHOLD_BLANK_41874";
        unsafe { std::env::set_var(var_name, "  ") };
        let result: u32 = env_parse_with_default(var_name, 8);
        assert_eq!(result, 8);
        unsafe { std::env::remove_var(var_name) };
    }
}
