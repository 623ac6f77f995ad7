//! Liked-recipes state over durable storage.
//!
//! # Responsibility
//! - Own the in-memory liked set and keep it unique per recipe id.
//! - Persist the full set after every mutation via the repository.
//!
//! # Invariants
//! - At most one entry per recipe id.
//! - A failed restore degrades to an empty set and never fails the
//!   caller.
//! - Mutations persist the full set; storage is single-writer,
//!   last-write-wins.

use crate::model::likes::LikedRecipe;
use crate::repo::likes_repo::{LikesRepository, RepoResult};
use log::{info, warn};

/// Liked-set service facade over a repository implementation.
pub struct LikesService<R: LikesRepository> {
    repo: R,
    likes: Vec<LikedRecipe>,
}

impl<R: LikesRepository> LikesService<R> {
    /// Restores the persisted liked set at startup.
    ///
    /// Empty or unreadable storage initializes an empty set; the
    /// degraded case is logged, never surfaced.
    pub fn restore(repo: R) -> Self {
        let likes = match repo.load_likes() {
            Ok(likes) => {
                info!(
                    "event=likes_restore module=likes status=ok count={}",
                    likes.len()
                );
                likes
            }
            Err(err) => {
                warn!("event=likes_restore module=likes status=degraded error={err}");
                Vec::new()
            }
        };

        Self { repo, likes }
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.likes.iter().any(|like| like.id == id)
    }

    pub fn num_likes(&self) -> usize {
        self.likes.len()
    }

    /// Liked recipes in like order.
    pub fn likes(&self) -> &[LikedRecipe] {
        &self.likes
    }

    /// Adds one liked recipe and persists the set.
    ///
    /// Re-liking an already-liked id returns the existing entry without
    /// touching storage.
    pub fn add_like(&mut self, like: LikedRecipe) -> RepoResult<LikedRecipe> {
        if let Some(existing) = self.likes.iter().find(|entry| entry.id == like.id) {
            return Ok(existing.clone());
        }

        self.likes.push(like.clone());
        self.persist()?;
        Ok(like)
    }

    /// Removes one liked recipe by id and persists the set.
    ///
    /// Absent ids are a no-op that does not touch storage.
    pub fn delete_like(&mut self, id: &str) -> RepoResult<()> {
        let before = self.likes.len();
        self.likes.retain(|like| like.id != id);
        if self.likes.len() == before {
            return Ok(());
        }
        self.persist()
    }

    /// Serializes the full liked set to durable storage.
    pub fn persist(&self) -> RepoResult<()> {
        self.repo.save_likes(&self.likes)
    }
}

#[cfg(test)]
mod tests {
    use super::LikesService;
    use crate::model::likes::LikedRecipe;
    use crate::repo::likes_repo::{LikesRepository, RepoError, RepoResult};
    use std::cell::RefCell;

    /// In-memory repository stub tracking save calls.
    struct StubRepo {
        stored: RefCell<Vec<LikedRecipe>>,
        saves: RefCell<u32>,
        fail_load: bool,
    }

    impl StubRepo {
        fn new(stored: Vec<LikedRecipe>) -> Self {
            Self {
                stored: RefCell::new(stored),
                saves: RefCell::new(0),
                fail_load: false,
            }
        }

        fn failing_load() -> Self {
            Self {
                stored: RefCell::new(Vec::new()),
                saves: RefCell::new(0),
                fail_load: true,
            }
        }
    }

    impl LikesRepository for &StubRepo {
        fn load_likes(&self) -> RepoResult<Vec<LikedRecipe>> {
            if self.fail_load {
                return Err(RepoError::InvalidData("corrupt payload".to_string()));
            }
            Ok(self.stored.borrow().clone())
        }

        fn save_likes(&self, likes: &[LikedRecipe]) -> RepoResult<()> {
            *self.stored.borrow_mut() = likes.to_vec();
            *self.saves.borrow_mut() += 1;
            Ok(())
        }
    }

    fn sample_like(id: &str) -> LikedRecipe {
        LikedRecipe {
            id: id.to_string(),
            title: format!("Recipe {id}"),
            author: "Test Kitchen".to_string(),
            image_url: String::new(),
        }
    }

    #[test]
    fn restore_loads_the_persisted_set() {
        let repo = StubRepo::new(vec![sample_like("r1")]);
        let service = LikesService::restore(&repo);

        assert_eq!(service.num_likes(), 1);
        assert!(service.is_liked("r1"));
    }

    #[test]
    fn unreadable_storage_degrades_to_an_empty_set() {
        let repo = StubRepo::failing_load();
        let service = LikesService::restore(&repo);

        assert_eq!(service.num_likes(), 0);
    }

    #[test]
    fn add_like_persists_and_duplicate_add_does_not() {
        let repo = StubRepo::new(Vec::new());
        let mut service = LikesService::restore(&repo);

        service.add_like(sample_like("r1")).expect("first like");
        assert_eq!(*repo.saves.borrow(), 1);

        let returned = service.add_like(sample_like("r1")).expect("re-like");
        assert_eq!(returned.id, "r1");
        assert_eq!(service.num_likes(), 1);
        assert_eq!(*repo.saves.borrow(), 1);
    }

    #[test]
    fn delete_like_persists_only_when_something_was_removed() {
        let repo = StubRepo::new(vec![sample_like("r1")]);
        let mut service = LikesService::restore(&repo);

        service.delete_like("missing").expect("absent id is a no-op");
        assert_eq!(*repo.saves.borrow(), 0);

        service.delete_like("r1").expect("delete like");
        assert!(!service.is_liked("r1"));
        assert_eq!(*repo.saves.borrow(), 1);
        assert!(repo.stored.borrow().is_empty());
    }
}
