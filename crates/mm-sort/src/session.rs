//! Sorting session state and transitions.
//!
//! `SortSession` owns the full item set and partitions it into the pool and
//! the two bins. Items only ever leave the pool through a correct drop, so
//! the bins can never hold a misclassified item.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use mm_core::item::validate_items;
use mm_core::{Category, ClassificationItem, ContentResult, EventSink, POINTS_PER_CORRECT};

use crate::action::SortAction;
use crate::config::SortConfig;
use crate::event::SortEvent;
use crate::progress::Progress;

/// Lifecycle of a sorting session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortPhase {
    /// Items remain in the pool.
    Playing,
    /// Every item has been placed. Only a reset leaves this phase.
    Finished,
}

/// An interactive sorting session.
#[derive(Debug, Clone)]
pub struct SortSession {
    items: Vec<ClassificationItem>,
    pool: Vec<ClassificationItem>,
    metal_bin: Vec<ClassificationItem>,
    non_metal_bin: Vec<ClassificationItem>,
    score: u32,
    pending: Option<ClassificationItem>,
    phase: SortPhase,
}

impl SortSession {
    /// Create a session over `items` in table order.
    pub fn new(items: Vec<ClassificationItem>) -> ContentResult<Self> {
        Self::with_config(items, SortConfig::default())
    }

    /// Create a session, shuffling the pool if the config carries a seed.
    ///
    /// The shuffled order is kept for the lifetime of the session, so a
    /// reset starts over from the same arrangement.
    pub fn with_config(mut items: Vec<ClassificationItem>, config: SortConfig) -> ContentResult<Self> {
        validate_items(&items)?;
        if let Some(seed) = config.seed {
            let mut rng = StdRng::seed_from_u64(seed);
            items.shuffle(&mut rng);
        }
        tracing::debug!(items = items.len(), seed = ?config.seed, "sorting session created");

        Ok(Self {
            pool: items.clone(),
            items,
            metal_bin: Vec::new(),
            non_metal_bin: Vec::new(),
            score: 0,
            pending: None,
            phase: SortPhase::Playing,
        })
    }

    /// Items not yet placed, in pool order.
    pub fn pool(&self) -> &[ClassificationItem] {
        &self.pool
    }

    /// Items correctly placed in the given bin, in placement order.
    pub fn bin(&self, category: Category) -> &[ClassificationItem] {
        match category {
            Category::Metal => &self.metal_bin,
            Category::NonMetal => &self.non_metal_bin,
        }
    }

    /// The full item set this session was built from.
    pub fn items(&self) -> &[ClassificationItem] {
        &self.items
    }

    /// Current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Score after placing every item.
    pub fn max_score(&self) -> u32 {
        u32::try_from(self.items.len())
            .unwrap_or(u32::MAX)
            .saturating_mul(POINTS_PER_CORRECT)
    }

    /// The item currently held, if any.
    pub fn pending(&self) -> Option<&ClassificationItem> {
        self.pending.as_ref()
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> SortPhase {
        self.phase
    }

    /// Whether every item has been placed.
    pub fn is_finished(&self) -> bool {
        self.phase == SortPhase::Finished
    }

    /// Placed items out of the full set.
    pub fn progress(&self) -> Progress {
        Progress {
            placed: self.metal_bin.len() + self.non_metal_bin.len(),
            total: self.items.len(),
        }
    }

    /// Find a pool item by id or display name, ignoring case.
    pub fn find_in_pool(&self, key: &str) -> Option<&ClassificationItem> {
        let key = key.trim();
        self.pool
            .iter()
            .find(|i| i.id.eq_ignore_ascii_case(key) || i.name.eq_ignore_ascii_case(key))
    }

    /// Pick up a pool item.
    ///
    /// Ignored when the item is not in the pool or the session is finished.
    /// Returns whether the selection was taken.
    pub fn select(&mut self, item: &ClassificationItem) -> bool {
        self.select_by_id(&item.id)
    }

    /// Pick up the pool item with the given id.
    pub fn select_by_id(&mut self, id: &str) -> bool {
        if self.phase == SortPhase::Finished {
            tracing::trace!(id, "select ignored: session finished");
            return false;
        }
        match self.pool.iter().find(|i| i.id == id) {
            Some(item) => {
                tracing::debug!(id, "item selected");
                self.pending = Some(item.clone());
                true
            }
            None => {
                tracing::trace!(id, "select ignored: not in pool");
                false
            }
        }
    }

    /// Drop the held item into `bin`.
    ///
    /// With nothing held this is a no-op. A matching bin moves the item out
    /// of the pool and scores; a mismatch only releases the item. The
    /// selection is cleared either way.
    pub fn drop_into(&mut self, bin: Category) -> Vec<SortEvent> {
        let Some(item) = self.pending.take() else {
            tracing::trace!(%bin, "drop ignored: nothing selected");
            return Vec::new();
        };

        if item.category != bin {
            tracing::debug!(id = %item.id, attempted = %bin, "incorrect drop");
            return vec![SortEvent::Incorrect {
                item: item.name,
                attempted: bin,
            }];
        }

        self.pool.retain(|i| i.id != item.id);
        self.score = self.score.saturating_add(POINTS_PER_CORRECT);
        tracing::debug!(id = %item.id, %bin, score = self.score, "correct drop");

        let mut events = vec![SortEvent::Correct {
            item: item.name.clone(),
            bin,
        }];
        match bin {
            Category::Metal => self.metal_bin.push(item),
            Category::NonMetal => self.non_metal_bin.push(item),
        }

        if self.pool.is_empty() {
            self.phase = SortPhase::Finished;
            tracing::debug!(score = self.score, "sorting session finished");
            events.push(SortEvent::Completed { score: self.score });
        }
        events
    }

    /// Start over with the full item set.
    pub fn reset(&mut self) {
        self.pool = self.items.clone();
        self.metal_bin.clear();
        self.non_metal_bin.clear();
        self.score = 0;
        self.pending = None;
        self.phase = SortPhase::Playing;
        tracing::debug!("sorting session reset");
    }

    /// Apply one action and return the events it produced.
    pub fn apply(&mut self, action: SortAction) -> Vec<SortEvent> {
        match action {
            SortAction::Select(id) => {
                self.select_by_id(&id);
                Vec::new()
            }
            SortAction::DropInto(bin) => self.drop_into(bin),
            SortAction::Reset => {
                self.reset();
                Vec::new()
            }
        }
    }

    /// Apply one action and forward its events to `sink`.
    pub fn apply_to<S: EventSink<SortEvent>>(&mut self, action: SortAction, sink: &mut S) {
        for event in self.apply(action) {
            sink.emit(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use mm_core::ContentPack;

    use super::*;

    fn gold() -> ClassificationItem {
        ClassificationItem::new("gold", "Gold", Category::Metal)
    }

    fn oxygen() -> ClassificationItem {
        ClassificationItem::new("oxygen", "Oxygen", Category::NonMetal)
    }

    fn two_item_session() -> SortSession {
        SortSession::new(vec![gold(), oxygen()]).unwrap()
    }

    #[test]
    fn walkthrough_gold_and_oxygen() {
        let mut s = two_item_session();

        assert!(s.select(&gold()));
        let events = s.drop_into(Category::Metal);
        assert_eq!(
            events,
            vec![SortEvent::Correct {
                item: "Gold".into(),
                bin: Category::Metal
            }]
        );
        assert_eq!(s.score(), 10);
        assert_eq!(s.bin(Category::Metal), &[gold()]);
        assert_eq!(s.pool(), &[oxygen()]);

        assert!(s.select(&oxygen()));
        let events = s.drop_into(Category::Metal);
        assert_eq!(
            events,
            vec![SortEvent::Incorrect {
                item: "Oxygen".into(),
                attempted: Category::Metal
            }]
        );
        assert_eq!(s.score(), 10);
        assert_eq!(s.pool(), &[oxygen()]);
        assert!(s.pending().is_none());

        assert!(s.select(&oxygen()));
        let events = s.drop_into(Category::NonMetal);
        assert_eq!(s.score(), 20);
        assert_eq!(s.phase(), SortPhase::Finished);
        assert_eq!(events.last(), Some(&SortEvent::Completed { score: 20 }));
        assert!(s.pool().is_empty());
    }

    #[test]
    fn drop_without_selection_is_noop() {
        let mut s = two_item_session();
        assert!(s.drop_into(Category::Metal).is_empty());
        assert_eq!(s.score(), 0);
        assert_eq!(s.pool().len(), 2);
    }

    #[test]
    fn select_of_placed_item_ignored() {
        let mut s = two_item_session();
        s.select(&gold());
        s.drop_into(Category::Metal);

        assert!(!s.select(&gold()));
        assert!(s.pending().is_none());
    }

    #[test]
    fn select_unknown_item_ignored() {
        let mut s = two_item_session();
        assert!(!s.select_by_id("unobtainium"));
        assert!(s.pending().is_none());
    }

    #[test]
    fn reselect_replaces_pending() {
        let mut s = two_item_session();
        s.select(&gold());
        s.select(&oxygen());
        assert_eq!(s.pending().map(|i| i.id.as_str()), Some("oxygen"));
    }

    #[test]
    fn finished_session_only_changes_on_reset() {
        let mut s = two_item_session();
        s.apply(SortAction::select("gold"));
        s.apply(SortAction::DropInto(Category::Metal));
        s.apply(SortAction::select("oxygen"));
        s.apply(SortAction::DropInto(Category::NonMetal));
        assert!(s.is_finished());

        assert!(s.apply(SortAction::select("gold")).is_empty());
        assert!(s.apply(SortAction::DropInto(Category::Metal)).is_empty());
        assert_eq!(s.score(), 20);
        assert!(s.is_finished());

        s.apply(SortAction::Reset);
        assert_eq!(s.phase(), SortPhase::Playing);
        assert_eq!(s.score(), 0);
        assert_eq!(s.pool(), &[gold(), oxygen()]);
        assert!(s.bin(Category::Metal).is_empty());
        assert!(s.bin(Category::NonMetal).is_empty());
    }

    #[test]
    fn reset_mid_session_clears_selection() {
        let mut s = two_item_session();
        s.select(&gold());
        s.reset();
        assert!(s.pending().is_none());
        assert!(s.drop_into(Category::Metal).is_empty());
    }

    #[test]
    fn apply_to_forwards_events() {
        let mut s = two_item_session();
        let mut sink: Vec<SortEvent> = Vec::new();
        s.apply_to(SortAction::select("oxygen"), &mut sink);
        s.apply_to(SortAction::DropInto(Category::NonMetal), &mut sink);
        assert_eq!(sink.len(), 1);
        assert!(sink[0].is_success());
    }

    #[test]
    fn progress_and_max_score() {
        let mut s = SortSession::new(ContentPack::builtin().sort_items).unwrap();
        assert_eq!(s.max_score(), 60);
        assert_eq!(s.progress().placed, 0);
        s.select_by_id("copper");
        s.drop_into(Category::Metal);
        assert_eq!(s.progress().placed, 1);
        assert_eq!(s.progress().total, 6);
    }

    #[test]
    fn find_in_pool_by_name() {
        let s = SortSession::new(ContentPack::builtin().sort_items).unwrap();
        assert_eq!(s.find_in_pool("pencil").map(|i| i.id.as_str()), Some("carbon"));
        assert_eq!(s.find_in_pool("GOLD").map(|i| i.id.as_str()), Some("gold"));
        assert!(s.find_in_pool("iron").is_none());
    }

    #[test]
    fn seeded_shuffle_is_deterministic_and_survives_reset() {
        let items = ContentPack::builtin().sort_items;
        let a = SortSession::with_config(items.clone(), SortConfig::default().with_seed(9)).unwrap();
        let mut b =
            SortSession::with_config(items.clone(), SortConfig::default().with_seed(9)).unwrap();
        assert_eq!(a.pool(), b.pool());

        let before = b.pool().to_vec();
        let first = before[0].clone();
        b.select(&first);
        b.drop_into(first.category);
        b.reset();
        assert_eq!(b.pool(), before.as_slice());

        let mut sorted = a.pool().to_vec();
        sorted.sort_by(|x, y| x.id.cmp(&y.id));
        let mut expected = items;
        expected.sort_by(|x, y| x.id.cmp(&y.id));
        assert_eq!(sorted, expected);
    }

    #[test]
    fn empty_pool_rejected() {
        assert!(SortSession::new(Vec::new()).is_err());
    }
}
