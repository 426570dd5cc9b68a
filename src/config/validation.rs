//! Configuration and input validation logic.

use url::Url;

use crate::config::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_user_agent(&config.options.user_agent)?;

    if config.options.download_directory.as_os_str().is_empty() {
        return Err(Error::ConfigValidation {
            field: "download_directory".to_string(),
            message: "Download directory cannot be empty".to_string(),
        });
    }

    Ok(())
}

/// Validate the user agent string.
pub fn validate_user_agent(user_agent: &str) -> Result<()> {
    if user_agent.trim().is_empty() {
        return Err(Error::ConfigValidation {
            field: "user_agent".to_string(),
            message: "User agent cannot be empty".to_string(),
        });
    }

    Ok(())
}

/// Parse an album URL and check that it points at the expected host.
///
/// Unparseable URLs and URLs without a host are reported as an unsupported host.
pub fn validate_album_url(input: &str, expected_host: &str) -> Result<Url> {
    let url = match Url::parse(input.trim()) {
        Ok(url) => url,
        Err(_) => {
            return Err(Error::UnsupportedHost {
                host: input.to_string(),
                expected: expected_host.to_string(),
            })
        }
    };

    match url.host_str() {
        Some(host) if host == expected_host => Ok(url),
        other => Err(Error::UnsupportedHost {
            host: other.unwrap_or_default().to_string(),
            expected: expected_host.to_string(),
        }),
    }
}
