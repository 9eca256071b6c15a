use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{info, warn};

use crate::accounts::models::{Account, AccountSummary, LoginSession};
use crate::accounts::token::TokenIssuer;
use crate::accounts::AccountError;

/// Process-lifetime account store. Accounts are only ever appended, so ids
/// stay dense: the n-th successful registration gets id n.
pub struct AccountRegistry {
    accounts: Mutex<Vec<Account>>,
    tokens: Arc<dyn TokenIssuer>,
}

impl AccountRegistry {
    pub fn new(tokens: Arc<dyn TokenIssuer>) -> Self {
        AccountRegistry {
            accounts: Mutex::new(Vec::new()),
            tokens,
        }
    }

    /// The duplicate check and the append share one critical section, so
    /// concurrent registrations of the same username yield one account.
    pub fn register(&self, username: &str, password: &str) -> Result<AccountSummary, AccountError> {
        if username.is_empty() || password.is_empty() {
            return Err(AccountError::MissingCredentials);
        }

        let mut accounts = self.lock();
        if accounts.iter().any(|a| a.username == username) {
            return Err(AccountError::AlreadyExists);
        }

        let account = Account {
            id: accounts.len() as u64 + 1,
            username: username.to_string(),
            password: password.to_string(),
        };
        let summary = account.summary();
        accounts.push(account);

        info!(id = summary.id, username = %summary.username, "Account registered");
        Ok(summary)
    }

    pub fn login(&self, username: &str, password: &str) -> Result<LoginSession, AccountError> {
        let accounts = self.lock();
        let Some(account) = accounts
            .iter()
            .find(|a| a.username == username && a.password == password)
        else {
            warn!(username = %username, "Login rejected");
            return Err(AccountError::InvalidCredentials);
        };

        Ok(LoginSession {
            id: account.id,
            username: account.username.clone(),
            token: self.tokens.issue(account),
        })
    }

    /// All accounts in registration order, without passwords.
    pub fn list(&self) -> Vec<AccountSummary> {
        self.lock().iter().map(Account::summary).collect()
    }

    // The vector is append-only, so data behind a poisoned lock is still consistent.
    fn lock(&self) -> MutexGuard<'_, Vec<Account>> {
        self.accounts.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::token::PlaceholderTokenIssuer;

    fn registry() -> AccountRegistry {
        AccountRegistry::new(Arc::new(PlaceholderTokenIssuer::default()))
    }

    #[test]
    fn test_register_returns_id_and_username() {
        let reg = registry();
        let user = reg.register("alice", "pw123").unwrap();
        assert_eq!(
            user,
            AccountSummary {
                id: 1,
                username: "alice".to_string()
            }
        );
        assert_eq!(reg.list(), vec![user]);
    }

    #[test]
    fn test_register_requires_username_and_password() {
        let reg = registry();
        assert_eq!(reg.register("", "pw123"), Err(AccountError::MissingCredentials));
        assert_eq!(reg.register("bob", ""), Err(AccountError::MissingCredentials));
        assert!(reg.list().is_empty());
    }

    #[test]
    fn test_duplicate_username_keeps_first_account() {
        let reg = registry();
        reg.register("alice", "pw123").unwrap();
        assert_eq!(reg.register("alice", "other"), Err(AccountError::AlreadyExists));
        assert_eq!(reg.list().len(), 1);
        assert!(reg.login("alice", "pw123").is_ok());
        assert!(reg.login("alice", "other").is_err());
    }

    #[test]
    fn test_usernames_are_case_sensitive() {
        let reg = registry();
        reg.register("alice", "pw").unwrap();
        assert_eq!(reg.register("Alice", "pw").unwrap().id, 2);
    }

    #[test]
    fn test_ids_increase_by_one_from_one() {
        let reg = registry();
        let ids: Vec<u64> = ["alice", "bob", "carol"]
            .iter()
            .map(|name| reg.register(name, "pw").unwrap().id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_failed_registration_does_not_consume_an_id() {
        let reg = registry();
        reg.register("alice", "pw").unwrap();
        let _ = reg.register("alice", "pw");
        let _ = reg.register("", "pw");
        assert_eq!(reg.register("bob", "pw").unwrap().id, 2);
    }

    #[test]
    fn test_login_returns_placeholder_token() {
        let reg = registry();
        reg.register("bob", "pw456").unwrap();
        let session = reg.login("bob", "pw456").unwrap();
        assert_eq!(session.id, 1);
        assert_eq!(session.username, "bob");
        assert_eq!(session.token, "fake-jwt-token");
    }

    #[test]
    fn test_login_accepts_special_character_passwords() {
        let reg = registry();
        reg.register("special", "p@$$w0rd!").unwrap();
        assert!(reg.login("special", "p@$$w0rd!").is_ok());
    }

    #[test]
    fn test_login_rejects_wrong_password_and_unknown_user() {
        let reg = registry();
        reg.register("alice", "pw123").unwrap();
        assert_eq!(reg.login("alice", "wrong"), Err(AccountError::InvalidCredentials));
        assert_eq!(reg.login("bob", "pw123"), Err(AccountError::InvalidCredentials));
        assert_eq!(reg.login("", ""), Err(AccountError::InvalidCredentials));
    }

    #[test]
    fn test_login_uses_injected_issuer() {
        struct PerUser;
        impl TokenIssuer for PerUser {
            fn issue(&self, account: &Account) -> String {
                format!("token-{}", account.id)
            }
        }
        let reg = AccountRegistry::new(Arc::new(PerUser));
        reg.register("alice", "pw").unwrap();
        assert_eq!(reg.login("alice", "pw").unwrap().token, "token-1");
    }

    #[test]
    fn test_list_is_empty_initially_and_hides_passwords() {
        let reg = registry();
        assert!(reg.list().is_empty());
        reg.register("alice", "pw123").unwrap();
        reg.register("bob", "pw456").unwrap();
        let value = serde_json::to_value(reg.list()).unwrap();
        for entry in value.as_array().unwrap() {
            assert!(entry.get("id").is_some());
            assert!(entry.get("username").is_some());
            assert!(entry.get("password").is_none());
        }
    }

    #[test]
    fn test_concurrent_duplicate_registration_creates_one_account() {
        let reg = Arc::new(registry());
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let reg = Arc::clone(&reg);
                std::thread::spawn(move || reg.register("alice", "pw").is_ok())
            })
            .collect();
        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();
        assert_eq!(successes, 1);
        assert_eq!(reg.list().len(), 1);
    }
}
