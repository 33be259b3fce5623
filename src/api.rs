//! Mail-Relay Client
//!
//! The app's only backend call: POST the contact form to the relay and
//! hand back the confirmation text it returns.

use crate::config;
use crate::models::ContactMessage;

/// Send the contact form to the mail relay.
///
/// A 2xx response resolves to the relay's confirmation message, displayed
/// verbatim. Anything else (transport error included) resolves to an error
/// string for diagnostics; callers keep the form state so nothing typed is
/// lost and show their own fixed failure notice.
pub async fn send_email(message: &ContactMessage) -> Result<String, String> {
    let response = reqwest::Client::new()
        .post(config::mail_endpoint())
        .json(message)
        .send()
        .await
        .map_err(|err| err.to_string())?;

    let status = response.status();
    if !status.is_success() {
        return Err(format!("mail relay returned {}", status));
    }

    response.text().await.map_err(|err| err.to_string())
}
