//! Configuration
//!
//! The one environment-driven value in the app: the mail-relay base URL.
//! A CSR bundle has no runtime environment, so the override is read at
//! compile time; the default targets a local relay during development.

/// Fallback relay address for local development
const DEFAULT_SERVER_ENDPOINT: &str = "http://localhost:5000";

/// Mail-relay base URL, without trailing slash
pub fn server_endpoint() -> String {
    normalize(option_env!("DEVATLAS_SERVER_ENDPOINT").unwrap_or(DEFAULT_SERVER_ENDPOINT))
}

/// Full URL of the send-email endpoint
pub fn mail_endpoint() -> String {
    format!("{}/api/send-email", server_endpoint())
}

fn normalize(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_trailing_slash() {
        assert_eq!(normalize("https://api.devatlas.dev/"), "https://api.devatlas.dev");
        assert_eq!(normalize("https://api.devatlas.dev"), "https://api.devatlas.dev");
    }

    #[test]
    fn mail_endpoint_appends_the_relay_path() {
        assert!(mail_endpoint().ends_with("/api/send-email"));
    }
}
