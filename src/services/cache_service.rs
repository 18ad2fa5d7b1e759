use std::rc::Rc;
use crate::config::CONFIG;
use crate::error::{BoardError, BoardResult};
use crate::models::LinkBoard;
use crate::utils::{BrowserStorage, KeyValueStore};

/// Local seed for the first paint. Holds the last canonical board under one
/// key; a missing or unreadable document yields an empty board.
#[derive(Clone)]
pub struct LinkCache {
    store: Rc<dyn KeyValueStore>,
    key: String,
}

impl LinkCache {
    pub fn new() -> Self {
        Self::with_store(Rc::new(BrowserStorage), CONFIG.cache_key.clone())
    }

    pub fn with_store(store: Rc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn load(&self) -> LinkBoard {
        let Some(json) = self.store.get_item(&self.key) else {
            log::info!("💾 [CACHE] No cached board under '{}'", self.key);
            return LinkBoard::default();
        };

        match serde_json::from_str::<LinkBoard>(&json) {
            Ok(board) => {
                log::info!("💾 [CACHE] Seeded {} links from cache", board.total_links());
                board
            }
            Err(e) => {
                log::error!("❌ [CACHE] Cache error, starting empty: {}", e);
                LinkBoard::default()
            }
        }
    }

    pub fn save(&self, board: &LinkBoard) -> BoardResult<()> {
        let json = serde_json::to_string(board)
            .map_err(|e| BoardError::Storage(format!("Error serializing board: {}", e)))?;
        self.store.set_item(&self.key, &json)
    }
}

impl Default for LinkCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BucketKey, Link};
    use crate::utils::MemoryStore;

    fn cache() -> (Rc<MemoryStore>, LinkCache) {
        let store = Rc::new(MemoryStore::default());
        let cache = LinkCache::with_store(store.clone(), "board");
        (store, cache)
    }

    #[test]
    fn absent_document_is_empty_board() {
        let (_, cache) = cache();
        assert_eq!(cache.load(), LinkBoard::default());
    }

    #[test]
    fn corrupt_document_is_empty_board() {
        let (store, cache) = cache();
        store.set_item("board", "{not json").unwrap();
        assert_eq!(cache.load(), LinkBoard::default());

        store.set_item("board", "[1,2,3]").unwrap();
        assert_eq!(cache.load(), LinkBoard::default());
    }

    #[test]
    fn saved_board_seeds_next_load() {
        let (store, cache) = cache();
        let mut board = LinkBoard::default();
        board.push_unique(BucketKey::ALL[6], Link::new("Quiz 3", "https://q/3"));
        cache.save(&board).unwrap();

        assert!(store.get_item("board").unwrap().contains("afternoonQuiz"));
        assert_eq!(cache.load(), board);
    }
}
