//! HTTP Basic Authentication for the administrative corpus routes

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, Response, StatusCode},
    middleware::Next,
};
use base64::Engine;
use std::sync::Arc;

/// Authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Username for admin routes (None = auth disabled)
    pub username: Option<String>,
    /// Password for admin routes
    pub password: Option<String>,
}

impl AuthConfig {
    /// Load auth config from environment variables.
    /// ADMIN_USERNAME and ADMIN_PASSWORD must both be set to enable auth.
    pub fn from_env() -> Self {
        let username = std::env::var("ADMIN_USERNAME")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let password = std::env::var("ADMIN_PASSWORD")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        // Both must be set to enable auth
        if username.is_some() && password.is_some() {
            tracing::info!("Admin authentication enabled");
            Self { username, password }
        } else {
            if username.is_some() || password.is_some() {
                tracing::warn!(
                    "ADMIN_USERNAME and ADMIN_PASSWORD must both be set to enable authentication"
                );
            }
            tracing::warn!("Admin authentication DISABLED - anyone can modify the corpus!");
            Self {
                username: None,
                password: None,
            }
        }
    }

    /// Check if authentication is enabled
    pub fn is_enabled(&self) -> bool {
        self.username.is_some() && self.password.is_some()
    }

    /// Validate credentials
    pub fn validate(&self, username: &str, password: &str) -> bool {
        match (&self.username, &self.password) {
            (Some(u), Some(p)) => {
                // Use constant-time comparison to prevent timing attacks
                constant_time_eq(u.as_bytes(), username.as_bytes())
                    && constant_time_eq(p.as_bytes(), password.as_bytes())
            }
            _ => true, // Auth disabled, allow all
        }
    }
}

/// Constant-time byte comparison to prevent timing attacks
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}

/// Middleware for HTTP Basic Authentication on admin routes
pub async fn admin_auth_middleware(
    State(auth_config): State<Arc<AuthConfig>>,
    request: Request<Body>,
    next: Next,
) -> Response<Body> {
    // If auth is disabled, pass through
    if !auth_config.is_enabled() {
        return next.run(request).await;
    }

    // Check Authorization header
    if let Some(auth_header) = request.headers().get(header::AUTHORIZATION) {
        if let Ok(auth_str) = auth_header.to_str() {
            if let Some(credentials) = auth_str.strip_prefix("Basic ") {
                if let Ok(decoded) = base64::engine::general_purpose::STANDARD.decode(credentials) {
                    if let Ok(decoded_str) = String::from_utf8(decoded) {
                        if let Some((username, password)) = decoded_str.split_once(':') {
                            if auth_config.validate(username, password) {
                                return next.run(request).await;
                            }
                        }
                    }
                }
            }
        }
    }

    // Return 401 Unauthorized with WWW-Authenticate header
    Response::builder()
        .status(StatusCode::UNAUTHORIZED)
        .header(header::WWW_AUTHENTICATE, "Basic realm=\"triviad admin\"")
        .body(Body::from("Unauthorized"))
        .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enabled_config() -> AuthConfig {
        AuthConfig {
            username: Some("admin".to_string()),
            password: Some("hunter2".to_string()),
        }
    }

    #[test]
    fn test_validate_accepts_exact_credentials() {
        let config = enabled_config();
        assert!(config.validate("admin", "hunter2"));
    }

    #[test]
    fn test_validate_rejects_wrong_credentials() {
        let config = enabled_config();
        assert!(!config.validate("admin", "wrong"));
        assert!(!config.validate("someone", "hunter2"));
        assert!(!config.validate("", ""));
    }

    #[test]
    fn test_disabled_auth_allows_everyone() {
        let config = AuthConfig {
            username: None,
            password: None,
        };
        assert!(!config.is_enabled());
        assert!(config.validate("anyone", "anything"));
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"abc", b"abc"));
        assert!(!constant_time_eq(b"abc", b"abd"));
        assert!(!constant_time_eq(b"abc", b"abcd"));
        assert!(constant_time_eq(b"", b""));
    }
}
