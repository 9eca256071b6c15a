use crate::accounts::models::Account;

/// Issues the token returned by a successful login.
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, account: &Account) -> String;
}

/// Hands every account the same constant token. Carries no identity,
/// signature or expiry.
#[derive(Debug, Clone)]
pub struct PlaceholderTokenIssuer {
    token: String,
}

impl PlaceholderTokenIssuer {
    pub fn new(token: impl Into<String>) -> Self {
        PlaceholderTokenIssuer {
            token: token.into(),
        }
    }
}

impl Default for PlaceholderTokenIssuer {
    fn default() -> Self {
        PlaceholderTokenIssuer::new(crate::config::DEFAULT_PLACEHOLDER_TOKEN)
    }
}

impl TokenIssuer for PlaceholderTokenIssuer {
    fn issue(&self, _account: &Account) -> String {
        self.token.clone()
    }
}
