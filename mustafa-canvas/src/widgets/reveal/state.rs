use std::time::{Duration, Instant};

use canvas_ui_observer::VisibilityObserver;
use iced::Rectangle;

use super::model::{
    HEADER_DURATION, HERO_REVEAL_THRESHOLD, RevealPhase, SECTION_DURATION,
};
use crate::content::SectionId;
use crate::shared::ui::motion;

/// Entrance animation phases plus the observer for unrevealed sections.
#[derive(Debug)]
pub(super) struct RevealState {
    header: RevealPhase,
    sections: [RevealPhase; SectionId::ALL.len()],
    observer: VisibilityObserver<SectionId>,
}

impl Default for RevealState {
    fn default() -> Self {
        Self {
            header: RevealPhase::Hidden,
            sections: [RevealPhase::Hidden; SectionId::ALL.len()],
            observer: VisibilityObserver::new(0.0),
        }
    }
}

impl RevealState {
    pub(super) fn header(&self) -> RevealPhase {
        self.header
    }

    pub(super) fn sections(&self) -> [RevealPhase; SectionId::ALL.len()] {
        self.sections
    }

    pub(super) fn section(&self, section: SectionId) -> RevealPhase {
        self.sections[section as usize]
    }

    pub(super) fn is_animating(&self) -> bool {
        self.header.is_animating()
            || self.sections.iter().any(RevealPhase::is_animating)
    }

    pub(super) fn is_running(&self) -> bool {
        self.observer.is_running()
    }

    pub(super) fn start(
        &mut self,
        sections: &[(SectionId, Rectangle)],
        now: Instant,
    ) {
        if self.header == RevealPhase::Hidden {
            self.header = RevealPhase::Animating {
                started: now,
                progress: 0.0,
            };
        }
        self.register(sections);
        self.observer.start();
    }

    pub(super) fn stop(&mut self) {
        self.observer.stop();
    }

    /// Observe sections that have not revealed yet.
    pub(super) fn register(&mut self, sections: &[(SectionId, Rectangle)]) {
        for &(section, bounds) in sections {
            if self.section(section) != RevealPhase::Hidden {
                continue;
            }
            let threshold = match section {
                SectionId::Hero => HERO_REVEAL_THRESHOLD,
                _ => 0.0,
            };
            self.observer.observe_with_threshold(section, bounds, threshold);
        }
    }

    /// Begin the animation of every section entering `viewport`.
    ///
    /// Revealed sections stop being observed. Returns them in document
    /// order.
    pub(super) fn observe(
        &mut self,
        viewport: Rectangle,
        now: Instant,
    ) -> Vec<SectionId> {
        let entering: Vec<SectionId> = self
            .observer
            .observe_viewport(viewport)
            .into_iter()
            .filter(|entry| entry.is_intersecting)
            .map(|entry| entry.target)
            .collect();

        for &section in &entering {
            self.sections[section as usize] = RevealPhase::Animating {
                started: now,
                progress: 0.0,
            };
            self.observer.unobserve(section);
        }

        entering
    }

    /// Advance running animations to `now`.
    pub(super) fn tick(&mut self, now: Instant) {
        self.header = advance(self.header, now, HEADER_DURATION);
        for phase in &mut self.sections {
            *phase = advance(*phase, now, SECTION_DURATION);
        }
    }
}

fn advance(phase: RevealPhase, now: Instant, duration: Duration) -> RevealPhase {
    let RevealPhase::Animating { started, progress } = phase else {
        return phase;
    };

    let next = motion::progress(now.saturating_duration_since(started), duration)
        .max(progress);
    if next >= 1.0 {
        RevealPhase::Shown
    } else {
        RevealPhase::Animating {
            started,
            progress: next,
        }
    }
}
