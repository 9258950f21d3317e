//! Visibility-gated slot fetching.
//!
//! Each card owns one [`SlotGate`]. The gate moves through three phases for
//! the (location, date) pair it is targeting:
//!
//! ```text
//! NotSeen --seen--> Pending --resolve--> Resolved
//! ```
//!
//! A fetch is requested only on the `NotSeen -> Pending` edge, so a card asks
//! for live slots at most once per pair no matter how often it is observed.
//! `Resolved` records failures (`None`) as well as results, and never leads
//! back to `Pending` for the same pair.
//!
//! Retargeting to a different pair starts over for that pair; results that
//! arrive for a pair the gate no longer targets are dropped.

use api::SlotWithAvailability;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlotKey {
    pub ext_id: String,
    pub date_str: String,
}

impl SlotKey {
    pub fn new<A: Into<String>, B: Into<String>>(ext_id: A, date_str: B) -> Self {
        Self {
            ext_id: ext_id.into(),
            date_str: date_str.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum FetchPhase {
    #[default]
    NotSeen,
    Pending,
    Resolved(Option<Vec<SlotWithAvailability>>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlotGate {
    key: SlotKey,
    phase: FetchPhase,
    seen: bool,
}

impl SlotGate {
    pub fn new(key: SlotKey) -> Self {
        Self {
            key,
            phase: FetchPhase::NotSeen,
            seen: false,
        }
    }

    pub fn key(&self) -> &SlotKey {
        &self.key
    }

    pub fn phase(&self) -> &FetchPhase {
        &self.phase
    }

    /// Feed the latest visibility reading. Returns the pair to fetch when this
    /// reading is the one that moves the gate out of `NotSeen`.
    pub fn observe(&mut self, visible: bool) -> Option<SlotKey> {
        // Seen is one-way.
        self.seen |= visible;
        self.advance()
    }

    /// Point the gate at `key`. A no-op for the current pair.
    pub fn retarget(&mut self, key: SlotKey) -> Option<SlotKey> {
        if key == self.key {
            return None;
        }
        self.key = key;
        self.phase = FetchPhase::NotSeen;
        self.advance()
    }

    /// Bring the gate up to date with the card's current pair and visibility.
    /// Returns the pair to fetch, if any.
    pub fn sync(&mut self, key: SlotKey, visible: bool) -> Option<SlotKey> {
        self.retarget(key).or_else(|| self.observe(visible))
    }

    /// Record the outcome of a fetch for `key`. Returns `false` when the
    /// outcome was dropped because the gate moved on or already resolved.
    pub fn resolve(&mut self, key: &SlotKey, fetched: Option<Vec<SlotWithAvailability>>) -> bool {
        if *key != self.key || self.phase != FetchPhase::Pending {
            return false;
        }
        self.phase = FetchPhase::Resolved(fetched);
        true
    }

    /// Live slots, if a fetch produced any list at all.
    pub fn fetched(&self) -> Option<&[SlotWithAvailability]> {
        match &self.phase {
            FetchPhase::Resolved(Some(slots)) => Some(slots),
            _ => None,
        }
    }

    /// Slots to show: live ones when non-empty, otherwise the supplied list.
    pub fn display<'a>(
        &'a self,
        supplied: &'a [SlotWithAvailability],
    ) -> &'a [SlotWithAvailability] {
        match self.fetched() {
            Some(live) if !live.is_empty() => live,
            _ => supplied,
        }
    }

    fn advance(&mut self) -> Option<SlotKey> {
        if self.seen && self.phase == FetchPhase::NotSeen {
            self.phase = FetchPhase::Pending;
            Some(self.key.clone())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(ext_id: &str, date: &str) -> SlotKey {
        SlotKey::new(ext_id, date)
    }

    fn slots(times: &[&str]) -> Vec<SlotWithAvailability> {
        times.iter().map(|t| SlotWithAvailability::at(*t)).collect()
    }

    #[test]
    fn nothing_is_requested_before_the_card_is_seen() {
        let mut gate = SlotGate::new(key("loc", "2021-09-01"));
        assert_eq!(gate.observe(false), None);
        assert_eq!(gate.observe(false), None);
        assert_eq!(gate.phase(), &FetchPhase::NotSeen);
    }

    #[test]
    fn first_sighting_requests_exactly_once() {
        let mut gate = SlotGate::new(key("loc", "2021-09-01"));
        assert_eq!(gate.observe(true), Some(key("loc", "2021-09-01")));
        assert_eq!(gate.observe(true), None);
        assert_eq!(gate.phase(), &FetchPhase::Pending);
    }

    #[test]
    fn resolved_failure_does_not_refire() {
        let mut gate = SlotGate::new(key("loc", "2021-09-01"));
        let request = gate.observe(true).unwrap();
        assert!(gate.resolve(&request, None));
        assert_eq!(gate.observe(true), None);
        assert_eq!(gate.observe(false), None);
        assert_eq!(gate.observe(true), None);
        assert_eq!(gate.phase(), &FetchPhase::Resolved(None));
    }

    #[test]
    fn resolved_empty_list_does_not_refire() {
        let mut gate = SlotGate::new(key("loc", "2021-09-01"));
        let request = gate.observe(true).unwrap();
        assert!(gate.resolve(&request, Some(Vec::new())));
        assert_eq!(gate.observe(true), None);
    }

    #[test]
    fn seen_is_sticky() {
        let mut gate = SlotGate::new(key("loc", "2021-09-01"));
        gate.observe(true);
        gate.observe(false);
        let first = gate.key().clone();
        gate.resolve(&first, None);
        assert_eq!(
            gate.retarget(key("loc", "2021-09-02")),
            Some(key("loc", "2021-09-02"))
        );
    }

    #[test]
    fn live_slots_win_when_non_empty() {
        let supplied = slots(&["09:00:00"]);
        let mut gate = SlotGate::new(key("loc", "2021-09-01"));
        let request = gate.observe(true).unwrap();
        gate.resolve(&request, Some(slots(&["10:00:00", "10:15:00"])));
        let shown: Vec<_> = gate
            .display(&supplied)
            .iter()
            .map(|s| s.local_start_time.as_str())
            .collect();
        assert_eq!(shown, ["10:00:00", "10:15:00"]);
    }

    #[test]
    fn empty_or_failed_fetch_falls_back_to_supplied() {
        let supplied = slots(&["09:00:00", "09:30:00"]);

        let mut empty = SlotGate::new(key("loc", "2021-09-01"));
        let request = empty.observe(true).unwrap();
        empty.resolve(&request, Some(Vec::new()));
        assert_eq!(empty.display(&supplied), supplied.as_slice());

        let mut failed = SlotGate::new(key("loc", "2021-09-01"));
        let request = failed.observe(true).unwrap();
        failed.resolve(&request, None);
        assert_eq!(failed.display(&supplied), supplied.as_slice());

        let pending = SlotGate::new(key("loc", "2021-09-01"));
        assert_eq!(pending.display(&supplied), supplied.as_slice());
    }

    #[test]
    fn fallback_holds_even_when_supplied_is_empty() {
        let mut gate = SlotGate::new(key("loc", "2021-09-01"));
        let request = gate.observe(true).unwrap();
        gate.resolve(&request, None);
        assert!(gate.display(&[]).is_empty());
    }

    #[test]
    fn retarget_after_sighting_requests_new_pair() {
        let mut gate = SlotGate::new(key("loc", "2021-09-01"));
        let first = gate.observe(true).unwrap();
        gate.resolve(&first, Some(slots(&["09:00:00"])));

        assert_eq!(
            gate.retarget(key("loc", "2021-09-02")),
            Some(key("loc", "2021-09-02"))
        );
        assert_eq!(gate.fetched(), None);
    }

    #[test]
    fn retarget_before_sighting_waits() {
        let mut gate = SlotGate::new(key("loc", "2021-09-01"));
        assert_eq!(gate.retarget(key("other", "2021-09-01")), None);
        assert_eq!(gate.observe(true), Some(key("other", "2021-09-01")));
    }

    #[test]
    fn retarget_to_same_pair_is_ignored() {
        let mut gate = SlotGate::new(key("loc", "2021-09-01"));
        gate.observe(true);
        assert_eq!(gate.retarget(key("loc", "2021-09-01")), None);
        assert_eq!(gate.phase(), &FetchPhase::Pending);
    }

    #[test]
    fn late_result_for_old_pair_is_dropped() {
        let mut gate = SlotGate::new(key("loc", "2021-09-01"));
        let stale = gate.observe(true).unwrap();
        let current = gate.retarget(key("loc", "2021-09-02")).unwrap();

        assert!(!gate.resolve(&stale, Some(slots(&["08:00:00"]))));
        assert_eq!(gate.phase(), &FetchPhase::Pending);
        assert!(gate.resolve(&current, Some(slots(&["11:00:00"]))));
        assert_eq!(gate.fetched().map(|s| s.len()), Some(1));
    }

    #[test]
    fn duplicate_result_is_dropped() {
        let mut gate = SlotGate::new(key("loc", "2021-09-01"));
        let request = gate.observe(true).unwrap();
        assert!(gate.resolve(&request, Some(slots(&["09:00:00"]))));
        assert!(!gate.resolve(&request, None));
        assert_eq!(gate.fetched().map(|s| s.len()), Some(1));
    }
}
