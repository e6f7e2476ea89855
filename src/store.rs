use std::sync::{Arc, RwLock};

use chrono::Utc;
use tokio::sync::watch;
use tracing::warn;
use uuid::Uuid;

use crate::models::{AddShoppingItemRequest, Recipe, ShoppingItem};
use crate::storage::{CollectionStorage, FAVORITES_KEY, SHOPPING_LIST_KEY};

/// In-memory favorite set and shopping list, mirrored to durable storage.
///
/// Mutations update memory first, then write the mutated collection's full
/// contents to its own storage key. Writes are best-effort: a failure is
/// logged and the in-memory state stays authoritative for the rest of the
/// session. Each collection persists under its own key, so a failure writing
/// one never touches the other.
#[derive(Clone)]
pub struct RecipeStore {
    collections: Arc<RwLock<Collections>>,
    storage: CollectionStorage,
    revision: Arc<watch::Sender<u64>>,
}

#[derive(Default)]
struct Collections {
    favorites: Vec<Recipe>,
    shopping_list: Vec<ShoppingItem>,
}

impl RecipeStore {
    /// Load both collections from storage. A collection that fails to read
    /// or parse initializes empty without affecting the other; failure here
    /// is logged, never fatal.
    pub fn load(storage: CollectionStorage) -> Self {
        let favorites = storage.read::<Recipe>(FAVORITES_KEY).unwrap_or_else(|e| {
            warn!("Could not load favorites from storage: {e}");
            Vec::new()
        });
        let shopping_list = storage
            .read::<ShoppingItem>(SHOPPING_LIST_KEY)
            .unwrap_or_else(|e| {
                warn!("Could not load shopping list from storage: {e}");
                Vec::new()
            });

        let (revision, _) = watch::channel(0);
        Self {
            collections: Arc::new(RwLock::new(Collections {
                favorites,
                shopping_list,
            })),
            storage,
            revision: Arc::new(revision),
        }
    }

    /// Subscribe to change notifications. The channel carries a revision
    /// counter bumped on every successful mutation.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    /// Snapshot of the favorite set in insertion order.
    pub fn favorites(&self) -> Vec<Recipe> {
        self.collections.read().unwrap().favorites.clone()
    }

    /// Snapshot of the shopping list in insertion order.
    pub fn shopping_list(&self) -> Vec<ShoppingItem> {
        self.collections.read().unwrap().shopping_list.clone()
    }

    /// True iff a favorite with this id exists.
    pub fn is_favorite(&self, id: i64) -> bool {
        self.collections
            .read()
            .unwrap()
            .favorites
            .iter()
            .any(|r| r.id == id)
    }

    /// Insert a recipe into the favorite set. Returns false if a recipe with
    /// the same id is already present; the set is then unchanged.
    pub fn add_favorite(&self, recipe: Recipe) -> bool {
        let mut collections = self.collections.write().unwrap();
        if collections.favorites.iter().any(|r| r.id == recipe.id) {
            return false;
        }
        collections.favorites.push(recipe);
        self.persist_favorites(&collections);
        self.bump();
        true
    }

    /// Remove the favorite with this id. Returns false if absent.
    pub fn remove_favorite(&self, id: i64) -> bool {
        let mut collections = self.collections.write().unwrap();
        let before = collections.favorites.len();
        collections.favorites.retain(|r| r.id != id);
        if collections.favorites.len() == before {
            return false;
        }
        self.persist_favorites(&collections);
        self.bump();
        true
    }

    /// Build a shopping item from the request and insert it unchecked with
    /// the current timestamp. Returns the item and whether it was created;
    /// a duplicate id leaves the list unchanged and returns the existing
    /// item.
    pub fn add_shopping_item(&self, request: AddShoppingItemRequest) -> (ShoppingItem, bool) {
        let AddShoppingItemRequest {
            id,
            recipe_id,
            ingredient_id,
            name,
            amount,
            unit,
            original,
            image,
        } = request;
        let id = id.unwrap_or_else(|| compose_item_id(recipe_id, ingredient_id));

        let mut collections = self.collections.write().unwrap();
        if let Some(existing) = collections.shopping_list.iter().find(|item| item.id == id) {
            return (existing.clone(), false);
        }

        let item = ShoppingItem {
            id,
            name: name.or_else(|| original.clone()).unwrap_or_default(),
            amount,
            unit,
            original,
            image,
            checked: false,
            added_on: Utc::now(),
        };
        collections.shopping_list.push(item.clone());
        self.persist_shopping_list(&collections);
        self.bump();
        (item, true)
    }

    /// Flip the checked flag of the matching item. Returns the updated item,
    /// or None if absent.
    pub fn toggle_shopping_item(&self, id: &str) -> Option<ShoppingItem> {
        let mut collections = self.collections.write().unwrap();
        let updated = {
            let item = collections
                .shopping_list
                .iter_mut()
                .find(|item| item.id == id)?;
            item.checked = !item.checked;
            item.clone()
        };
        self.persist_shopping_list(&collections);
        self.bump();
        Some(updated)
    }

    /// Remove the matching item. Returns false if absent.
    pub fn remove_shopping_item(&self, id: &str) -> bool {
        let mut collections = self.collections.write().unwrap();
        let before = collections.shopping_list.len();
        collections.shopping_list.retain(|item| item.id != id);
        if collections.shopping_list.len() == before {
            return false;
        }
        self.persist_shopping_list(&collections);
        self.bump();
        true
    }

    fn persist_favorites(&self, collections: &Collections) {
        if let Err(e) = self.storage.write(FAVORITES_KEY, &collections.favorites) {
            warn!("Failed to persist favorites: {e}");
        }
    }

    fn persist_shopping_list(&self, collections: &Collections) {
        if let Err(e) = self
            .storage
            .write(SHOPPING_LIST_KEY, &collections.shopping_list)
        {
            warn!("Failed to persist shopping list: {e}");
        }
    }

    fn bump(&self) {
        self.revision.send_modify(|rev| *rev += 1);
    }
}

/// Compose a shopping item id from the recipe and ingredient ids, falling
/// back to a random id when the ingredient id is unknown.
fn compose_item_id(recipe_id: Option<i64>, ingredient_id: Option<i64>) -> String {
    match (recipe_id, ingredient_id) {
        (Some(recipe), Some(ingredient)) => format!("{recipe}-{ingredient}"),
        (Some(recipe), None) => format!("{recipe}-{}", Uuid::new_v4()),
        _ => Uuid::new_v4().to_string(),
    }
}
