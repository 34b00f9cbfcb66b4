use crate::error::AppError;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API root cannot be empty and must start with http:// or https://
/// - HTTP timeout must be at least one second
/// - If log file path is provided, it cannot be empty
pub fn validate_config(
    api_root: &str,
    http_timeout_seconds: u64,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if api_root.is_empty() {
        return Err(AppError::config_error("API root cannot be empty"));
    }

    if !api_root.starts_with("http://") && !api_root.starts_with("https://") {
        return Err(AppError::config_error(
            "API root must start with http:// or https://",
        ));
    }

    if http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least one second",
        ));
    }

    if let Some(log_path) = log_file_path
        && log_path.is_empty()
    {
        return Err(AppError::config_error("Log file path cannot be empty"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        assert!(validate_config("https://api.masterleague.net", 30, &None).is_ok());
        assert!(validate_config("http://localhost:8080", 1, &Some("/tmp/x.log".into())).is_ok());
    }

    #[test]
    fn test_invalid_api_root() {
        assert!(validate_config("", 30, &None).is_err());
        assert!(validate_config("api.masterleague.net", 30, &None).is_err());
    }

    #[test]
    fn test_zero_timeout() {
        let error = validate_config("https://api.masterleague.net", 0, &None).unwrap_err();
        assert!(matches!(error, AppError::Config(_)));
    }

    #[test]
    fn test_empty_log_path() {
        assert!(validate_config("https://api.masterleague.net", 30, &Some(String::new())).is_err());
    }
}
