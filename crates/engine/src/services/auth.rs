//! Mock login.
//!
//! Credentials are only checked for shape. The role depends on the address
//! alone and every session gets the same token.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{EngineError, ResultEngine};

const ADMIN_EMAIL: &str = "admin@clubzen.com";
const MOCK_TOKEN: &str = "mock-jwt-token";

static EMAIL_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Staff,
}

impl UserRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Staff => "staff",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub role: UserRole,
    pub token: String,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct AuthService;

impl AuthService {
    pub fn new() -> Self {
        Self
    }

    pub fn login(&self, email: &str, password: &str) -> ResultEngine<Session> {
        let email = email.trim();
        if email.is_empty() {
            return Err(EngineError::validation("Email is required."));
        }
        if !is_valid_email(email) {
            return Err(EngineError::validation("Invalid email format."));
        }
        if password.trim().is_empty() {
            return Err(EngineError::validation("Password is required."));
        }

        let (role, user_id) = if email.eq_ignore_ascii_case(ADMIN_EMAIL) {
            (UserRole::Admin, "user-001")
        } else {
            (UserRole::Staff, "user-002")
        };
        tracing::debug!(user_id, role = role.as_str(), "login accepted");

        Ok(Session {
            user_id: user_id.to_string(),
            role,
            token: MOCK_TOKEN.to_string(),
        })
    }
}

fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(email))
}
