use canvas_ui_observer::{
    IntersectionEntry, VisibilityObserver, center_distance,
};
use iced::Rectangle;

use super::model::ActivePolicy;
use crate::content::SectionId;

/// Observer plus the section it elected.
#[derive(Debug)]
pub(super) struct TrackerState {
    observer: VisibilityObserver<SectionId>,
    active: SectionId,
    policy: ActivePolicy,
}

impl TrackerState {
    pub(super) fn new(policy: ActivePolicy, threshold: f32) -> Self {
        Self {
            observer: VisibilityObserver::new(threshold),
            active: SectionId::Hero,
            policy,
        }
    }

    pub(super) fn active(&self) -> SectionId {
        self.active
    }

    pub(super) fn is_running(&self) -> bool {
        self.observer.is_running()
    }

    pub(super) fn start(&mut self, sections: &[(SectionId, Rectangle)]) {
        self.register(sections);
        self.observer.start();
    }

    pub(super) fn stop(&mut self) {
        self.observer.stop();
    }

    /// Register sections or update their bounds in place.
    pub(super) fn register(&mut self, sections: &[(SectionId, Rectangle)]) {
        for &(section, bounds) in sections {
            self.observer.observe(section, bounds);
        }
    }

    /// Run an observation pass and elect the active section.
    ///
    /// Returns the new active section when it changed.
    pub(super) fn observe(&mut self, viewport: Rectangle) -> Option<SectionId> {
        if !self.observer.is_running() {
            return None;
        }

        let entries = self.observer.observe_viewport(viewport);
        let elected = match self.policy {
            ActivePolicy::LastWriteWins => last_intersecting(&entries),
            ActivePolicy::NearestToCenter => nearest_to_center(
                &self.observer.snapshot(viewport),
                viewport,
            ),
        };

        match elected {
            Some(section) if section != self.active => {
                self.active = section;
                Some(section)
            },
            _ => None,
        }
    }
}

fn last_intersecting(
    entries: &[IntersectionEntry<SectionId>],
) -> Option<SectionId> {
    entries
        .iter()
        .filter(|entry| entry.is_intersecting)
        .map(|entry| entry.target)
        .last()
}

fn nearest_to_center(
    entries: &[IntersectionEntry<SectionId>],
    viewport: Rectangle,
) -> Option<SectionId> {
    let mut best: Option<(SectionId, f32)> = None;

    for entry in entries.iter().filter(|entry| entry.is_intersecting) {
        let distance = center_distance(entry.bounds, viewport);
        match best {
            Some((_, best_distance)) if distance >= best_distance => {},
            _ => best = Some((entry.target, distance)),
        }
    }

    best.map(|(section, _)| section)
}
