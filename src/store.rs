use crate::config::{Config, IdPolicy};
use crate::data::{Dish, Status};
use crate::error::{Result, StoreError};

/// In-memory list of dishes backing the review page.
///
/// Build one per application session and hand it around by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DishStore {
    list: Vec<Dish>,
    policy: IdPolicy,
}

impl Default for DishStore {
    fn default() -> Self {
        Self::new(IdPolicy::default())
    }
}

impl DishStore {
    /// A store holding the three example dishes.
    pub fn new(policy: IdPolicy) -> Self {
        Self {
            list: seed(),
            policy,
        }
    }

    pub fn empty(policy: IdPolicy) -> Self {
        Self {
            list: Vec::new(),
            policy,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        if config.seed {
            Self::new(config.id_policy)
        } else {
            Self::empty(config.id_policy)
        }
    }

    pub fn policy(&self) -> IdPolicy {
        self.policy
    }

    pub fn count(&self) -> usize {
        self.list.len()
    }

    pub fn list(&self) -> &[Dish] {
        &self.list
    }

    pub fn get(&self, id: &str) -> Option<&Dish> {
        self.list.iter().find(|dish| dish.id == id)
    }

    /// Append `record` to the end of the list.
    ///
    /// Only fails under [`IdPolicy::Unique`] when the id is already taken, in
    /// which case the list is left as is.
    pub fn add(&mut self, record: Dish) -> Result<()> {
        if self.policy == IdPolicy::Unique && self.get(&record.id).is_some() {
            tracing::warn!(id = %record.id, "refuse to add dish with duplicated id");
            return Err(StoreError::DuplicateId(record.id));
        }

        tracing::debug!(id = %record.id, name = %record.name, "add dish");
        self.list.push(record);
        tracing::debug!(count = self.list.len(), "dish list updated");
        Ok(())
    }

    /// Drop every dish whose id equals `id` and return how many were dropped.
    pub fn remove(&mut self, id: &str) -> usize {
        let before = self.list.len();
        self.list.retain(|dish| dish.id != id);
        let removed = before - self.list.len();

        tracing::debug!(id, removed, count = self.list.len(), "remove dish");
        removed
    }

    /// Remove by the id carried in `record`.
    pub fn delete(&mut self, record: &Dish) -> usize {
        self.remove(&record.id)
    }
}

fn seed() -> Vec<Dish> {
    [
        (
            "7d9f3f17-964a-4e82-98e5-ecbba4d709a1",
            "Ghost Pepper Poppers",
            Status::WantToTry,
        ),
        (
            "5c986b74-fa02-4a22-98f2-b1ff3559e85e",
            "A Little More Chowder Now",
            Status::Recommended,
        ),
        (
            "c113411d-1589-414f-a283-daf7eedb631e",
            "Full Laptop Battery",
            Status::DoNotRecommend,
        ),
    ]
    .into_iter()
    .map(|(id, name, status)| Dish {
        id: id.to_string(),
        name: name.to_string(),
        status,
        diet: None,
    })
    .collect()
}
