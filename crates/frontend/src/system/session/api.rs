use contracts::system::auth::{LoginRequest, LoginResponse, RegisterRequest, TrainerEmail};
use gloo_net::http::{Request, Response};

use crate::shared::http::{self, api_url, ApiError};

/// Extract the server-provided message from a failed login/register
/// response, falling back to the status code. These calls bypass the shared
/// transport on purpose: a wrong password is a 401 too, and it must surface
/// to the form instead of tripping the session expiry latch.
async fn error_message(response: Response) -> String {
    let status = response.status();
    response
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
        .unwrap_or_else(|| format!("Login failed: HTTP {}", status))
}

/// Sign in against the admin endpoint
pub async fn admin_login(email: String, password: String) -> Result<LoginResponse, String> {
    login_at("/bms/admin/login", email, password).await
}

/// Sign in against the trainer endpoint
pub async fn trainer_login(email: String, password: String) -> Result<LoginResponse, String> {
    login_at("/bms/trainer/login", email, password).await
}

async fn login_at(path: &str, email: String, password: String) -> Result<LoginResponse, String> {
    let request = LoginRequest { email, password };

    let response = Request::post(&api_url(path))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Register a new admin account
pub async fn register_admin(request: RegisterRequest) -> Result<(), String> {
    let response = Request::post(&api_url("/bms/admin/register"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(error_message(response).await);
    }

    Ok(())
}

/// Fetch the trainer email whitelist (admin only)
pub async fn fetch_trainer_emails() -> Result<Vec<TrainerEmail>, ApiError> {
    http::get_json("/bms/admin/trainer-emails").await
}

/// Add a trainer email to the whitelist. Legacy endpoint: answers with a
/// plain text confirmation.
pub async fn add_trainer_email(email: &str) -> Result<String, ApiError> {
    http::post_text(
        "/bms/admin/add-trainer-email",
        &serde_json::json!({ "email": email }),
    )
    .await
}
