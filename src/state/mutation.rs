// ============================================================================
// OPTIMISTIC MUTATIONS - Pending -> Settled | RolledBack
// ============================================================================

use crate::error::BoardError;
use crate::models::{BucketKey, Link, LinkBoard};

/// A mutation already applied to the in-memory board but not yet confirmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingMutation {
    /// Placeholder appended to `key`, found again through `temp_id`
    Add { key: BucketKey, temp_id: u64, link: Link },
    /// `link` removed from `key` at `index`
    Delete { key: BucketKey, index: usize, link: Link },
}

/// Outcome of a mutation once the endpoint answered. The pending state is the
/// `PendingMutation` value itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationPhase {
    Settled,
    RolledBack(BoardError),
}

impl PendingMutation {
    /// Appends an optimistic placeholder
    pub fn begin_add(board: &mut LinkBoard, key: BucketKey, name: &str, url: &str, temp_id: u64) -> Self {
        let link = Link::placeholder(name, url, temp_id);
        board.bucket_mut(key).push(link.clone());
        PendingMutation::Add { key, temp_id, link }
    }

    /// Removes the link at `index`; `None` when the index is out of range
    pub fn begin_delete(board: &mut LinkBoard, key: BucketKey, index: usize) -> Option<Self> {
        let bucket = board.bucket_mut(key);
        if index >= bucket.len() {
            return None;
        }
        let link = bucket.remove(index);
        Some(PendingMutation::Delete { key, index, link })
    }

    pub fn key(&self) -> BucketKey {
        match self {
            PendingMutation::Add { key, .. } | PendingMutation::Delete { key, .. } => *key,
        }
    }

    pub fn link(&self) -> &Link {
        match self {
            PendingMutation::Add { link, .. } | PendingMutation::Delete { link, .. } => link,
        }
    }

    /// The endpoint accepted the mutation. After a canonical refetch the board
    /// was already replaced wholesale; otherwise an add placeholder is promoted
    /// to a plain link so it does not spin forever.
    pub fn settle(self, board: &mut LinkBoard, refetched: bool) -> MutationPhase {
        if let (false, PendingMutation::Add { key, temp_id, .. }) = (refetched, &self) {
            if let Some(link) = board
                .bucket_mut(*key)
                .iter_mut()
                .find(|l| l.temp_id == Some(*temp_id))
            {
                link.optimistic = false;
                link.temp_id = None;
            }
        }
        MutationPhase::Settled
    }

    /// Undo on failure: drop the placeholder, or reinsert the deleted link at
    /// its old position (clamped if the bucket shrank meanwhile)
    pub fn roll_back(self, board: &mut LinkBoard, error: BoardError) -> MutationPhase {
        match self {
            PendingMutation::Add { key, temp_id, .. } => {
                board.bucket_mut(key).retain(|l| l.temp_id != Some(temp_id));
            }
            PendingMutation::Delete { key, index, link } => {
                let bucket = board.bucket_mut(key);
                let at = index.min(bucket.len());
                bucket.insert(at, link);
            }
        }
        MutationPhase::RolledBack(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(key: BucketKey, names: &[&str]) -> LinkBoard {
        let mut board = LinkBoard::default();
        for n in names {
            board.push_unique(key, Link::new(*n, format!("https://{}", n)));
        }
        board
    }

    #[test]
    fn add_rollback_removes_only_its_placeholder() {
        let key = BucketKey::ALL[0];
        let mut board = board_with(key, &["a"]);
        let first = PendingMutation::begin_add(&mut board, key, "b", "www.b.com", 1);
        let _second = PendingMutation::begin_add(&mut board, key, "c", "www.c.com", 2);
        assert_eq!(board.bucket(key).len(), 3);
        assert!(board.bucket(key)[1].optimistic);

        let phase = first.roll_back(&mut board, BoardError::Network("down".into()));
        assert_eq!(phase, MutationPhase::RolledBack(BoardError::Network("down".into())));
        let names: Vec<&str> = board.bucket(key).iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["a", "c"]);
    }

    #[test]
    fn delete_rollback_restores_position() {
        let key = BucketKey::ALL[2];
        let mut board = board_with(key, &["a", "b", "c"]);
        let pending = PendingMutation::begin_delete(&mut board, key, 1).unwrap();
        assert_eq!(pending.link().name, "b");
        assert_eq!(board.bucket(key).len(), 2);

        pending.roll_back(&mut board, BoardError::Rejected(None));
        assert_eq!(board, board_with(key, &["a", "b", "c"]));
    }

    #[test]
    fn delete_rollback_clamps_when_bucket_shrank() {
        let key = BucketKey::ALL[2];
        let mut board = board_with(key, &["a", "b", "c"]);
        let pending = PendingMutation::begin_delete(&mut board, key, 2).unwrap();
        board.bucket_mut(key).clear();

        pending.roll_back(&mut board, BoardError::Rejected(None));
        assert_eq!(board.bucket(key)[0].name, "c");
    }

    #[test]
    fn delete_out_of_range_is_none() {
        let key = BucketKey::ALL[3];
        let mut board = board_with(key, &["a"]);
        assert!(PendingMutation::begin_delete(&mut board, key, 1).is_none());
        assert_eq!(board.bucket(key).len(), 1);
    }

    #[test]
    fn settle_without_refetch_promotes_placeholder() {
        let key = BucketKey::ALL[4];
        let mut board = LinkBoard::default();
        let pending = PendingMutation::begin_add(&mut board, key, "Syllabus", "www.example.com/x", 9);
        assert_eq!(pending.key(), key);

        assert_eq!(pending.settle(&mut board, false), MutationPhase::Settled);
        assert_eq!(board.bucket(key), [Link::new("Syllabus", "www.example.com/x")]);
    }

    #[test]
    fn every_phase_is_an_answered_outcome() {
        let key = BucketKey::ALL[5];
        let mut board = LinkBoard::default();
        let settled = PendingMutation::begin_add(&mut board, key, "a", "https://a", 1).settle(&mut board, true);
        let rolled = PendingMutation::begin_add(&mut board, key, "b", "https://b", 2)
            .roll_back(&mut board, BoardError::Network("down".into()));

        for phase in [settled, rolled] {
            match phase {
                MutationPhase::Settled => assert!(board.bucket(key).iter().any(|l| l.name == "a")),
                MutationPhase::RolledBack(_) => assert!(board.bucket(key).iter().all(|l| l.name != "b")),
            }
        }
    }
}
