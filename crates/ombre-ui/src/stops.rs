use std::fmt;

use serde::{Deserialize, Serialize};

use ombre_engine::input::clamp_unit;
use ombre_engine::paint::CssColor;

// ── StopHandle ────────────────────────────────────────────────────────────

/// Stable identity of a stop inside one [`StopStore`].
///
/// Handles are generated by the store and never reused, so two stops at the
/// same position stay distinguishable. Front ends map handles to whatever
/// visual element represents the stop.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct StopHandle(u64);

impl fmt::Display for StopHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stop#{}", self.0)
    }
}

// ── Stop ──────────────────────────────────────────────────────────────────

/// One anchor of the gradient: a position in `[0, 1]` and an opaque color.
///
/// Serializes as `{"position": 0.5, "color": "red"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    pub position: f64,
    pub color: CssColor,
}

impl Stop {
    #[inline]
    pub fn new(position: f64, color: impl Into<CssColor>) -> Self {
        Self { position, color: color.into() }
    }
}

// ── StopStore ─────────────────────────────────────────────────────────────

/// The canonical set of gradient stops.
///
/// Invariants:
/// - every stored position is in `[0, 1]` (clamped on the way in);
/// - the store is never empty: construction seeds it.
///
/// Storage order is insertion order and only matters as the tie-breaker of
/// [`snapshot_sorted`](Self::snapshot_sorted).
#[derive(Debug, Clone)]
pub struct StopStore {
    next: u64,
    entries: Vec<(StopHandle, Stop)>,
}

impl StopStore {
    /// A store seeded with black at `0` and white at `1`.
    pub fn new() -> Self {
        Self::with_stops([(0.0, CssColor::black()), (1.0, CssColor::white())])
    }

    /// A store seeded with `stops`, or with the default pair if `stops` is
    /// empty.
    pub fn with_stops(stops: impl IntoIterator<Item = (f64, CssColor)>) -> Self {
        let mut store = Self { next: 0, entries: Vec::new() };
        for (position, color) in stops {
            store.create(position, color);
        }
        if store.entries.is_empty() {
            return Self::new();
        }
        store
    }

    /// Inserts a stop, clamping `position` to `[0, 1]`.
    pub fn create(&mut self, position: f64, color: CssColor) -> StopHandle {
        let handle = StopHandle(self.next);
        self.next = self.next.wrapping_add(1);
        self.entries.push((handle, Stop { position: clamp_unit(position), color }));
        handle
    }

    /// Moves a stop, clamping `position` to `[0, 1]`.
    ///
    /// Returns `false` (and changes nothing) if `handle` is unknown.
    pub fn update_position(&mut self, handle: StopHandle, position: f64) -> bool {
        match self.get_mut(handle) {
            Some(stop) => {
                stop.position = clamp_unit(position);
                true
            }
            None => false,
        }
    }

    /// Recolors a stop. Returns `false` (and changes nothing) if `handle` is
    /// unknown.
    pub fn update_color(&mut self, handle: StopHandle, color: CssColor) -> bool {
        match self.get_mut(handle) {
            Some(stop) => {
                stop.color = color;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, handle: StopHandle) -> Option<&Stop> {
        self.entries.iter().find(|(h, _)| *h == handle).map(|(_, s)| s)
    }

    fn get_mut(&mut self, handle: StopHandle) -> Option<&mut Stop> {
        self.entries.iter_mut().find(|(h, _)| *h == handle).map(|(_, s)| s)
    }

    #[inline]
    pub fn contains(&self, handle: StopHandle) -> bool {
        self.get(handle).is_some()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Handles in insertion order.
    pub fn handles(&self) -> impl Iterator<Item = StopHandle> + '_ {
        self.entries.iter().map(|(h, _)| *h)
    }

    /// Handles and stops, ascending by position; equal positions keep
    /// insertion order.
    pub fn entries_sorted(&self) -> Vec<(StopHandle, &Stop)> {
        let mut sorted: Vec<(StopHandle, &Stop)> = self.entries.iter().map(|(h, s)| (*h, s)).collect();
        // `sort_by` is stable; positions are clamped so never NaN.
        sorted.sort_by(|a, b| a.1.position.total_cmp(&b.1.position));
        sorted
    }

    /// All stops, ascending by position; equal positions keep insertion
    /// order. The only ordered view of the store.
    pub fn snapshot_sorted(&self) -> Vec<Stop> {
        self.entries_sorted().into_iter().map(|(_, s)| s.clone()).collect()
    }
}

impl Default for StopStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(s: &str) -> CssColor { CssColor::new(s) }

    fn positions(store: &StopStore) -> Vec<f64> {
        store.snapshot_sorted().iter().map(|s| s.position).collect()
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn fresh_store_has_black_and_white_endpoints() {
        let store = StopStore::new();
        assert_eq!(store.len(), 2);
        assert_eq!(
            store.snapshot_sorted(),
            vec![Stop::new(0.0, "black"), Stop::new(1.0, "white")]
        );
    }

    #[test]
    fn empty_seed_falls_back_to_default_pair() {
        let store = StopStore::with_stops(Vec::new());
        assert_eq!(positions(&store), vec![0.0, 1.0]);
    }

    #[test]
    fn custom_seed_is_clamped() {
        let store = StopStore::with_stops([(-1.0, c("red")), (0.5, c("green")), (4.0, c("blue"))]);
        assert_eq!(positions(&store), vec![0.0, 0.5, 1.0]);
    }

    // ── clamping ──────────────────────────────────────────────────────────

    #[test]
    fn create_clamps_out_of_range() {
        let mut store = StopStore::new();
        let lo = store.create(-0.25, c("red"));
        let hi = store.create(1.75, c("red"));
        assert_eq!(store.get(lo).map(|s| s.position), Some(0.0));
        assert_eq!(store.get(hi).map(|s| s.position), Some(1.0));
    }

    #[test]
    fn update_position_clamps() {
        let mut store = StopStore::new();
        let h = store.create(0.5, c("red"));
        assert!(store.update_position(h, 9.0));
        assert_eq!(store.get(h).map(|s| s.position), Some(1.0));
        assert!(store.update_position(h, -9.0));
        assert_eq!(store.get(h).map(|s| s.position), Some(0.0));
    }

    #[test]
    fn nan_position_is_stored_as_zero() {
        let mut store = StopStore::new();
        let h = store.create(f64::NAN, c("red"));
        assert_eq!(store.get(h).map(|s| s.position), Some(0.0));
    }

    // ── unknown handles ───────────────────────────────────────────────────

    #[test]
    fn unknown_handle_is_a_no_op() {
        let mut other = StopStore::new();
        for _ in 0..5 {
            other.create(0.5, c("red"));
        }
        let foreign = other.create(0.5, c("red"));

        let mut store = StopStore::new();
        let before = store.snapshot_sorted();
        assert!(!store.update_position(foreign, 0.3));
        assert!(!store.update_color(foreign, c("red")));
        assert_eq!(store.snapshot_sorted(), before);
        assert!(!store.contains(foreign));
    }

    // ── ordering ──────────────────────────────────────────────────────────

    #[test]
    fn snapshot_is_sorted_by_position() {
        let mut store = StopStore::new();
        store.create(0.7, c("a"));
        store.create(0.2, c("b"));
        store.create(0.5, c("c"));
        assert_eq!(positions(&store), vec![0.0, 0.2, 0.5, 0.7, 1.0]);
    }

    #[test]
    fn ties_keep_insertion_order() {
        let mut store = StopStore::new();
        let first = store.create(0.5, c("first"));
        let second = store.create(0.5, c("second"));
        let third = store.create(0.5, c("third"));

        let order: Vec<StopHandle> = store.entries_sorted().iter().map(|(h, _)| *h).collect();
        assert_eq!(&order[1..4], &[first, second, third]);
        // Unchanged data renders identically on every call.
        assert_eq!(store.snapshot_sorted(), store.snapshot_sorted());
    }

    #[test]
    fn moved_stop_reorders_but_storage_order_is_stable() {
        let mut store = StopStore::new();
        let handles: Vec<StopHandle> = store.handles().collect();
        store.update_position(handles[0], 1.0);
        // Both at 1.0 now: the older (formerly black) stop sorts first.
        let colors: Vec<String> = store.snapshot_sorted().into_iter().map(|s| s.color.into_string()).collect();
        assert_eq!(colors, vec!["black", "white"]);
        assert_eq!(store.handles().collect::<Vec<_>>(), handles);
    }

    // ── misc ──────────────────────────────────────────────────────────────

    #[test]
    fn handles_are_never_reused() {
        let mut store = StopStore::new();
        let a = store.create(0.1, c("a"));
        let b = store.create(0.1, c("a"));
        assert_ne!(a, b);
        assert_eq!(a.to_string(), "stop#2");
    }

    #[test]
    fn handle_counter_wraps_instead_of_overflowing() {
        let mut store = StopStore { next: u64::MAX, entries: Vec::new() };
        let last = store.create(0.5, c("a"));
        let wrapped = store.create(0.5, c("b"));
        assert_eq!(last.to_string(), format!("stop#{}", u64::MAX));
        assert_eq!(wrapped.to_string(), "stop#0");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn stop_serializes_as_plain_object() {
        let json = serde_json::to_string(&Stop::new(0.5, "red")).unwrap();
        assert_eq!(json, r#"{"position":0.5,"color":"red"}"#);
    }
}
