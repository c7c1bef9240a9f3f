use std::sync::Arc;
use tokio::sync::Mutex;

use crate::db::models::StoredUser;

/// Append-only, in-memory user list. Clones share the same list.
#[derive(Clone, Default)]
pub struct UserStore {
    users: Arc<Mutex<Vec<StoredUser>>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, user: StoredUser) -> StoredUser {
        let mut users = self.users.lock().await;
        users.push(user.clone());
        user
    }

    pub async fn first(&self) -> Option<StoredUser> {
        self.users.lock().await.first().cloned()
    }

    pub async fn len(&self) -> usize {
        self.users.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.lock().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::NewUser;
    use chrono::Utc;

    fn user(name: &str) -> StoredUser {
        StoredUser::from_new(
            NewUser {
                username: name.to_string(),
                email: format!("{name}@example.com"),
                full_name: None,
                password: "pw".to_string(),
            },
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn starts_empty() {
        let store = UserStore::new();
        assert!(store.is_empty().await);
        assert!(store.first().await.is_none());
    }

    #[tokio::test]
    async fn first_is_the_earliest_insert() {
        let store = UserStore::new();
        store.insert(user("alice")).await;
        store.insert(user("bob")).await;

        assert_eq!(store.len().await, 2);
        assert_eq!(store.first().await.unwrap().username, "alice");
    }

    #[tokio::test]
    async fn clones_share_state() {
        let store = UserStore::new();
        let handle = store.clone();
        handle.insert(user("alice")).await;
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn concurrent_inserts_are_all_kept() {
        let store = UserStore::new();
        let mut tasks = Vec::new();
        for i in 0..32 {
            let store = store.clone();
            tasks.push(tokio::spawn(async move {
                store.insert(user(&format!("user{i}"))).await;
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }
        assert_eq!(store.len().await, 32);
    }
}
