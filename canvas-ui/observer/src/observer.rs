use iced::Rectangle;

use crate::geometry::{overlaps, visible_ratio};

/// A single threshold crossing reported by [`VisibilityObserver`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry<K> {
    /// Key the target was registered with.
    pub target: K,
    /// Target bounds in document coordinates.
    pub bounds: Rectangle,
    /// Visible fraction of the target area, in `[0.0, 1.0]`.
    pub ratio: f32,
    /// Whether the target currently satisfies its threshold.
    pub is_intersecting: bool,
}

#[derive(Debug, Clone)]
struct Target<K> {
    key: K,
    bounds: Rectangle,
    threshold: f32,
    /// `None` until the target took part in an observation pass.
    intersecting: Option<bool>,
}

impl<K: Copy> Target<K> {
    fn entry(&self, viewport: Rectangle) -> IntersectionEntry<K> {
        let ratio = visible_ratio(self.bounds, viewport);
        let is_intersecting = if self.threshold <= 0.0 {
            overlaps(self.bounds, viewport)
        } else {
            ratio >= self.threshold
        };

        IntersectionEntry {
            target: self.key,
            bounds: self.bounds,
            ratio,
            is_intersecting,
        }
    }
}

/// Tracks registered targets and reports visibility threshold crossings.
///
/// Entries are always reported in registration order, so callers that
/// register targets top to bottom receive batches in document order.
///
/// A threshold of `0.0` means "any overlap"; any other value requires the
/// visible fraction of the target to reach it.
#[derive(Debug, Clone)]
pub struct VisibilityObserver<K> {
    threshold: f32,
    targets: Vec<Target<K>>,
    running: bool,
}

impl<K> VisibilityObserver<K>
where
    K: Copy + PartialEq,
{
    /// Create a stopped observer whose targets default to `threshold`.
    ///
    /// The threshold is clamped into `[0.0, 1.0]`.
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: clamp_threshold(threshold),
            targets: Vec::new(),
            running: false,
        }
    }

    /// Default threshold applied by [`VisibilityObserver::observe`].
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Whether the observer currently produces entries.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Number of registered targets.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether no targets are registered.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Whether `key` is registered.
    pub fn contains(&self, key: K) -> bool {
        self.targets.iter().any(|target| target.key == key)
    }

    /// Register `key` with the default threshold, or update its bounds.
    pub fn observe(&mut self, key: K, bounds: Rectangle) {
        self.observe_with_threshold(key, bounds, self.threshold);
    }

    /// Register `key` with its own threshold, or update an existing target.
    ///
    /// Updating keeps the last reported intersecting state, so the next
    /// pass only reports the target if the new bounds flip it.
    pub fn observe_with_threshold(
        &mut self,
        key: K,
        bounds: Rectangle,
        threshold: f32,
    ) {
        let threshold = clamp_threshold(threshold);

        if let Some(target) =
            self.targets.iter_mut().find(|target| target.key == key)
        {
            target.bounds = bounds;
            target.threshold = threshold;
            return;
        }

        self.targets.push(Target {
            key,
            bounds,
            threshold,
            intersecting: None,
        });
    }

    /// Stop observing `key`. Returns whether it was registered.
    pub fn unobserve(&mut self, key: K) -> bool {
        let before = self.targets.len();
        self.targets.retain(|target| target.key != key);
        self.targets.len() != before
    }

    /// Begin producing entries. The next pass reports every target.
    pub fn start(&mut self) {
        self.running = true;
        for target in &mut self.targets {
            target.intersecting = None;
        }
    }

    /// Stop producing entries and release every target.
    pub fn stop(&mut self) {
        self.running = false;
        self.targets.clear();
    }

    /// Run an observation pass against `viewport`.
    ///
    /// Returns entries for targets whose intersecting state changed since
    /// the previous pass. A stopped observer returns nothing.
    pub fn observe_viewport(
        &mut self,
        viewport: Rectangle,
    ) -> Vec<IntersectionEntry<K>> {
        if !self.running {
            return Vec::new();
        }

        let mut entries = Vec::new();
        for target in &mut self.targets {
            let entry = target.entry(viewport);
            if target.intersecting != Some(entry.is_intersecting) {
                target.intersecting = Some(entry.is_intersecting);
                entries.push(entry);
            }
        }

        entries
    }

    /// Current state of every target against `viewport`, without recording
    /// it as a pass.
    pub fn snapshot(&self, viewport: Rectangle) -> Vec<IntersectionEntry<K>> {
        self.targets
            .iter()
            .map(|target| target.entry(viewport))
            .collect()
    }
}

fn clamp_threshold(threshold: f32) -> f32 {
    if threshold.is_nan() {
        return 0.0;
    }
    threshold.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use iced::Rectangle;

    use super::VisibilityObserver;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Block {
        First,
        Second,
        Third,
    }

    fn band(y: f32, height: f32) -> Rectangle {
        Rectangle {
            x: 0.0,
            y,
            width: 800.0,
            height,
        }
    }

    fn observer() -> VisibilityObserver<Block> {
        let mut observer = VisibilityObserver::new(0.5);
        observer.observe(Block::First, band(0.0, 600.0));
        observer.observe(Block::Second, band(600.0, 600.0));
        observer.observe(Block::Third, band(1200.0, 600.0));
        observer
    }

    #[test]
    fn given_stopped_observer_when_viewport_changes_then_no_entries() {
        let mut observer = observer();
        assert!(observer.observe_viewport(band(0.0, 600.0)).is_empty());
    }

    #[test]
    fn given_started_observer_when_first_pass_then_reports_every_target() {
        let mut observer = observer();
        observer.start();

        let entries = observer.observe_viewport(band(0.0, 600.0));

        let targets: Vec<Block> =
            entries.iter().map(|entry| entry.target).collect();
        assert_eq!(targets, vec![Block::First, Block::Second, Block::Third]);
        assert!(entries[0].is_intersecting);
        assert!(!entries[1].is_intersecting);
        assert!(!entries[2].is_intersecting);
    }

    #[test]
    fn given_unchanged_state_when_second_pass_then_reports_nothing() {
        let mut observer = observer();
        observer.start();
        let _ = observer.observe_viewport(band(0.0, 600.0));

        assert!(observer.observe_viewport(band(100.0, 600.0)).is_empty());
    }

    #[test]
    fn given_scroll_past_midpoint_when_pass_then_reports_both_crossings() {
        let mut observer = observer();
        observer.start();
        let _ = observer.observe_viewport(band(0.0, 600.0));

        let entries = observer.observe_viewport(band(400.0, 600.0));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].target, Block::First);
        assert!(!entries[0].is_intersecting);
        assert_eq!(entries[1].target, Block::Second);
        assert!(entries[1].is_intersecting);
    }

    #[test]
    fn given_exact_threshold_when_pass_then_counts_as_intersecting() {
        let mut observer = observer();
        observer.start();

        let entries = observer.observe_viewport(band(300.0, 600.0));

        assert!(entries[0].is_intersecting);
        assert!(entries[1].is_intersecting);
    }

    #[test]
    fn given_zero_threshold_when_edge_touches_then_not_intersecting() {
        let mut observer = VisibilityObserver::new(0.0);
        observer.observe(Block::First, band(600.0, 600.0));
        observer.start();

        let entries = observer.observe_viewport(band(0.0, 600.0));
        assert!(!entries[0].is_intersecting);

        let entries = observer.observe_viewport(band(1.0, 600.0));
        assert!(entries[0].is_intersecting);
    }

    #[test]
    fn given_running_observer_when_stopped_then_targets_are_released() {
        let mut observer = observer();
        observer.start();

        observer.stop();

        assert!(!observer.is_running());
        assert!(observer.is_empty());
        assert!(observer.observe_viewport(band(0.0, 600.0)).is_empty());
    }

    #[test]
    fn given_existing_target_when_observed_again_then_bounds_update_in_place()
    {
        let mut observer = observer();
        observer.start();
        let _ = observer.observe_viewport(band(0.0, 600.0));

        observer.observe(Block::Third, band(0.0, 100.0));
        let entries = observer.observe_viewport(band(0.0, 600.0));

        assert_eq!(observer.len(), 3);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].target, Block::Third);
        assert!(entries[0].is_intersecting);
    }

    #[test]
    fn given_unobserved_target_when_pass_then_it_is_not_reported() {
        let mut observer = observer();
        assert!(observer.unobserve(Block::First));
        assert!(!observer.unobserve(Block::First));
        observer.start();

        let entries = observer.observe_viewport(band(0.0, 600.0));

        assert!(entries.iter().all(|entry| entry.target != Block::First));
    }

    #[test]
    fn given_out_of_range_threshold_when_created_then_clamps() {
        assert_eq!(VisibilityObserver::<Block>::new(2.0).threshold(), 1.0);
        assert_eq!(VisibilityObserver::<Block>::new(-1.0).threshold(), 0.0);
    }

    #[test]
    fn given_snapshot_when_called_then_pass_state_is_untouched() {
        let mut observer = observer();
        observer.start();

        let snapshot = observer.snapshot(band(0.0, 600.0));
        let entries = observer.observe_viewport(band(0.0, 600.0));

        assert_eq!(snapshot.len(), 3);
        assert_eq!(entries.len(), 3);
    }
}
