//! In-memory user storage.
//!
//! Mutations are serialized behind the write half of an [`RwLock`]; reads take
//! the shared half and hand out owned snapshots, so no guard ever escapes the
//! store. Ids are assigned from a high-water mark and are never reused.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;

use crate::modules::users::model::User;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("User with ID {0} not found.")]
    NotFound(i64),
    #[error("user store lock is poisoned")]
    Poisoned,
    #[error("no user ids left to assign")]
    IdSpaceExhausted,
}

pub trait UserStore: Send + Sync {
    /// All users in insertion order.
    fn list(&self) -> Result<Vec<User>, StoreError>;

    fn get(&self, id: i64) -> Result<Option<User>, StoreError>;

    fn insert(&self, name: String, email: String) -> Result<User, StoreError>;

    fn update(&self, id: i64, name: String, email: String) -> Result<User, StoreError>;

    fn delete(&self, id: i64) -> Result<(), StoreError>;
}

#[derive(Debug)]
struct Inner {
    users: Vec<User>,
    last_issued: Option<i64>,
}

#[derive(Debug)]
pub struct InMemoryUserStore {
    base: i64,
    inner: RwLock<Inner>,
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new(0)
    }
}

impl InMemoryUserStore {
    pub fn new(base: i64) -> Self {
        Self {
            base,
            inner: RwLock::new(Inner {
                users: Vec::new(),
                last_issued: None,
            }),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Inner>, StoreError> {
        self.inner.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inner>, StoreError> {
        self.inner.write().map_err(|_| StoreError::Poisoned)
    }
}

impl Inner {
    fn next_id(&self, base: i64) -> Result<i64, StoreError> {
        let highest = self
            .users
            .iter()
            .map(|u| u.id)
            .max()
            .into_iter()
            .chain(self.last_issued)
            .max();

        match highest {
            Some(id) => id.checked_add(1).ok_or(StoreError::IdSpaceExhausted),
            None => Ok(base),
        }
    }

    fn position(&self, id: i64) -> Result<usize, StoreError> {
        self.users
            .iter()
            .position(|u| u.id == id)
            .ok_or(StoreError::NotFound(id))
    }
}

impl UserStore for InMemoryUserStore {
    fn list(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.read()?.users.clone())
    }

    fn get(&self, id: i64) -> Result<Option<User>, StoreError> {
        Ok(self.read()?.users.iter().find(|u| u.id == id).cloned())
    }

    fn insert(&self, name: String, email: String) -> Result<User, StoreError> {
        let mut inner = self.write()?;
        let id = inner.next_id(self.base)?;
        let user = User { id, name, email };

        inner.users.push(user.clone());
        inner.last_issued = Some(id);
        Ok(user)
    }

    fn update(&self, id: i64, name: String, email: String) -> Result<User, StoreError> {
        let mut inner = self.write()?;
        let index = inner.position(id)?;
        let user = &mut inner.users[index];

        user.name = name;
        user.email = email;
        Ok(user.clone())
    }

    fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut inner = self.write()?;
        let index = inner.position(id)?;
        inner.users.remove(index);
        Ok(())
    }
}
