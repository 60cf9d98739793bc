//! In-memory user records.
//!
//! Records live as long as the process. Nothing is written to disk.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub email: String,
}

/// Cloneable handle to a shared user table.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    users: Arc<DashMap<Uuid, User>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new user with a fresh v4 id and returns it.
    pub fn create(&self, email: &str) -> User {
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            email: email.to_owned(),
        };
        self.users.insert(user.id, user.clone());
        user
    }

    pub fn get(&self, id: &Uuid) -> Option<User> {
        self.users.get(id).map(|u| u.clone())
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn clear(&self) {
        self.users.clear();
    }
}
