use chrono::{DateTime, Utc};
use tracing::warn;

use crate::id::IdGenerator;
use crate::state::user::User;
use crate::storage::user::UserStore;

/// One record in the mock directory. There is no real security model here:
/// passwords live in plain memory and never round-trip through storage.
#[derive(Debug, Clone)]
pub struct MockAccount {
    pub user: User,
    pub password: String,
}

/// Mocked authentication against an in-memory account directory. The
/// signed-in identity is written through the [`UserStore`] port so a later
/// session can restore it.
#[derive(Debug, Clone)]
pub struct AuthStore {
    pub accounts: Vec<MockAccount>,
    pub user: Option<User>,
    /// Last auth error; cleared on the next attempt.
    pub error: Option<String>,
}

impl AuthStore {
    /// Directory pre-seeded with the demo account
    /// (`demo@example.com` / `password`).
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            accounts: vec![MockAccount {
                user: User {
                    id: "1".to_string(),
                    username: "demo".to_string(),
                    email: "demo@example.com".to_string(),
                    avatar: Some("https://i.pravatar.cc/150?img=1".to_string()),
                    created_at: now,
                },
                password: "password".to_string(),
            }],
            user: None,
            error: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Restore the identity persisted by a previous session, if any.
    pub fn restore(mut self, storage: &dyn UserStore) -> Self {
        match storage.load() {
            Ok(user) => self.user = user,
            Err(err) => warn!(error = %err, "failed to restore user"),
        }
        self
    }

    pub fn login(mut self, storage: &dyn UserStore, email: &str, password: &str) -> Self {
        self.error = None;
        let account = self
            .accounts
            .iter()
            .find(|a| a.user.email == email && a.password == password);
        match account {
            Some(account) => {
                let user = account.user.clone();
                persist(storage, &user);
                self.user = Some(user);
            }
            None => self.error = Some("Invalid credentials".to_string()),
        }
        self
    }

    pub fn register(
        mut self,
        storage: &dyn UserStore,
        ids: &mut dyn IdGenerator,
        now: DateTime<Utc>,
        username: &str,
        email: &str,
        password: &str,
    ) -> Self {
        self.error = None;
        if self.accounts.iter().any(|a| a.user.email == email) {
            self.error = Some("User already exists".to_string());
            return self;
        }
        let user = User {
            id: ids.next_id(),
            username: username.to_string(),
            email: email.to_string(),
            avatar: None,
            created_at: now,
        };
        self.accounts.push(MockAccount {
            user: user.clone(),
            password: password.to_string(),
        });
        persist(storage, &user);
        self.user = Some(user);
        self
    }

    pub fn logout(mut self, storage: &dyn UserStore) -> Self {
        if let Err(err) = storage.clear() {
            warn!(error = %err, "failed to clear persisted user");
        }
        self.user = None;
        self
    }

    /// Edit the signed-in profile and write it through. Signed-out is a
    /// no-op.
    pub fn update_user(mut self, storage: &dyn UserStore, apply: impl FnOnce(&mut User)) -> Self {
        if let Some(user) = &mut self.user {
            apply(user);
            persist(storage, user);
        }
        self
    }
}

fn persist(storage: &dyn UserStore, user: &User) {
    if let Err(err) = storage.save(user) {
        warn!(error = %err, "failed to persist user");
    }
}
