//! User Service
//!
//! Repository lookups wrapped in read-through caching.

use std::sync::Arc;

use crate::cache::SharedStore;
use crate::error::Result;
use crate::interceptor::{CacheInterceptor, CachedOperation};
use crate::key::{Arg, ParamSpec, Signature};
use crate::models::User;
use crate::policy::{CachePolicy, Namespace, TimeUnit};
use crate::repository::UserRepository;

/// Namespace for users cached by id
pub const USERS: Namespace = Namespace::new("USERS", "user:", 30, TimeUnit::Minutes);

#[derive(Debug, Clone)]
pub struct UserService {
    interceptor: CacheInterceptor<SharedStore>,
    repository: Arc<UserRepository>,
    by_id: Arc<CachedOperation>,
    by_name: Arc<CachedOperation>,
}

impl UserService {
    pub fn new(store: SharedStore, repository: UserRepository) -> Result<Self> {
        // key derived from the tagged id: "user:<id>"
        let by_id = CachedOperation::new(
            "user_by_id",
            CachePolicy::new().with_namespace(USERS),
            Signature::new([ParamSpec::tagged("id")]),
        )?;
        // explicit pattern, inline ttl: "<team>:<name>"
        let by_name = CachedOperation::new(
            "user_by_name",
            CachePolicy::new()
                .with_key_pattern("{team}:{name}")
                .with_ttl(5, TimeUnit::Minutes),
            Signature::new([ParamSpec::tagged("name"), ParamSpec::tagged("team")]),
        )?;

        Ok(Self {
            interceptor: CacheInterceptor::new(store),
            repository: Arc::new(repository),
            by_id: Arc::new(by_id),
            by_name: Arc::new(by_name),
        })
    }

    pub async fn user_by_id(&self, id: u64) -> Result<User> {
        let repo = &self.repository;
        self.interceptor
            .call(&self.by_id, &[Arg::from(id)], || repo.find_by_id(id))
            .await
    }

    pub async fn user_by_name(&self, name: &str, team: &str) -> Result<User> {
        let repo = &self.repository;
        self.interceptor
            .call(&self.by_name, &[Arg::from(name), Arg::from(team)], || {
                repo.find_by_name(team, name)
            })
            .await
    }

    pub fn store(&self) -> &SharedStore {
        self.interceptor.store()
    }

    pub fn repository(&self) -> &UserRepository {
        &self.repository
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CacheError;
    use crate::store::CacheStore;

    fn service() -> UserService {
        UserService::new(SharedStore::new(), UserRepository::seeded(100)).unwrap()
    }

    #[tokio::test]
    async fn test_user_by_id_cached_under_namespace() {
        let svc = service();

        assert_eq!(svc.user_by_id(2).await.unwrap().name, "Grace");
        assert_eq!(svc.user_by_id(2).await.unwrap().name, "Grace");
        assert_eq!(svc.repository().lookups(), 1);
        assert!(svc.store().get("user:2").await.unwrap().is_some());

        let remaining = svc.store().ttl_remaining_ms("user:2").await.unwrap();
        assert!(remaining > 29 * 60 * 1000);
    }

    #[tokio::test]
    async fn test_unknown_user_is_tombstoned() {
        let svc = service();

        assert!(svc.user_by_id(50).await.unwrap_err().is_not_found());
        assert!(svc.user_by_id(50).await.unwrap_err().is_not_found());
        assert_eq!(svc.repository().lookups(), 1);
        assert_eq!(svc.store().get("user:50").await.unwrap().as_deref(), Some(" "));
    }

    #[tokio::test]
    async fn test_failed_lookup_keeps_cause() {
        let svc = service();

        match svc.user_by_id(500).await {
            Err(CacheError::NotFound { source: Some(cause), .. }) => {
                assert!(cause.to_string().contains("out of range"));
            }
            other => panic!("expected NotFound with cause, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_user_by_name_uses_explicit_pattern() {
        let svc = service();

        let user = svc.user_by_name("Linus", "kernel").await.unwrap();
        assert_eq!(user.id, 3);
        assert!(svc.store().get("kernel:Linus").await.unwrap().is_some());
    }
}
