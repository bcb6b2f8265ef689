use crate::error::AppError;

/// Checks that `value` is an absolute http(s) URL.
///
/// `name` is the setting or environment variable the value came from and is
/// only used in the error message.
pub fn validate_url(name: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::config_error(format!("{name} cannot be empty")));
    }

    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"))
        .ok_or_else(|| {
            AppError::config_error(format!(
                "{name} must start with http:// or https:// (got '{value}')"
            ))
        })?;

    if rest.is_empty() || rest.starts_with('/') {
        return Err(AppError::config_error(format!(
            "{name} is missing a host (got '{value}')"
        )));
    }

    Ok(())
}

/// Validates the non-secret settings.
///
/// # Validation Rules
/// - Model name cannot be empty
/// - API base must be an http(s) URL
/// - If an HTTP timeout is set, it must be at least one second
/// - If a log file path is provided, it cannot be empty
pub fn validate_settings(
    gemini_model: &str,
    gemini_api_base: &str,
    http_timeout_seconds: Option<u64>,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if gemini_model.trim().is_empty() {
        return Err(AppError::config_error("Gemini model cannot be empty"));
    }

    validate_url("gemini_api_base", gemini_api_base)?;

    if http_timeout_seconds == Some(0) {
        return Err(AppError::config_error(
            "HTTP timeout must be at least 1 second",
        ));
    }

    if let Some(log_path) = log_file_path
        && log_path.trim().is_empty()
    {
        return Err(AppError::config_error("Log file path cannot be empty"));
    }

    Ok(())
}
