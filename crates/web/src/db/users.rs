//! User store.
//!
//! Usernames are NOT unique at this level: `create` stores whatever it is
//! given. Callers that care check [`UserStore::get_by_username`] first.

use std::collections::HashMap;

use tokio::sync::RwLock;

use freshwash_core::{User, UserId, UserInput};

/// In-memory holder of user records.
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<HashMap<UserId, User>>,
}

impl UserStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a user by id.
    pub async fn get_by_id(&self, id: UserId) -> Option<User> {
        self.users.read().await.get(&id).cloned()
    }

    /// Find a user by exact username match (linear scan).
    pub async fn get_by_username(&self, username: &str) -> Option<User> {
        self.users
            .read()
            .await
            .values()
            .find(|user| user.username == username)
            .cloned()
    }

    /// Store a new user under a freshly generated id and return it.
    pub async fn create(&self, input: UserInput) -> User {
        let mut users = self.users.write().await;
        let mut id = UserId::generate();
        while users.contains_key(&id) {
            id = UserId::generate();
        }

        let user = User::from_input(id, input);
        users.insert(id, user.clone());
        tracing::debug!(user_id = %id, username = %user.username, "User created");
        user
    }
}
