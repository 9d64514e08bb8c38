//! User Repository
//!
//! In-memory stand-in for the persistence layer whose lookups the demo
//! service caches.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::bail;
use tracing::debug;

use crate::models::User;

#[derive(Debug)]
pub struct UserRepository {
    users: HashMap<u64, User>,
    max_user_id: u64,
    lookups: AtomicUsize,
}

impl UserRepository {
    pub fn new(users: impl IntoIterator<Item = User>, max_user_id: u64) -> Self {
        Self {
            users: users.into_iter().map(|u| (u.id, u)).collect(),
            max_user_id,
            lookups: AtomicUsize::new(0),
        }
    }

    /// A small fixed data set.
    pub fn seeded(max_user_id: u64) -> Self {
        Self::new(
            [
                User::new(1, "Ada", "core"),
                User::new(2, "Grace", "core"),
                User::new(3, "Linus", "kernel"),
                User::new(4, "Barbara", "ops"),
            ],
            max_user_id,
        )
    }

    /// Looks a user up by id. Ids above the configured maximum are rejected.
    pub async fn find_by_id(&self, id: u64) -> anyhow::Result<Option<User>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        debug!(id, "repository lookup by id");

        if id > self.max_user_id {
            bail!("user id {} is out of range (max {})", id, self.max_user_id);
        }
        Ok(self.users.get(&id).cloned())
    }

    /// Looks a user up by team and name, case-insensitively.
    pub async fn find_by_name(&self, team: &str, name: &str) -> anyhow::Result<Option<User>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        debug!(team, name, "repository lookup by name");

        Ok(self
            .users
            .values()
            .find(|u| u.team.eq_ignore_ascii_case(team) && u.name.eq_ignore_ascii_case(name))
            .cloned())
    }

    /// Number of lookups served so far.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}
