use std::time::{Duration, Instant};

use crate::content::SectionId;
use crate::shared::ui::motion::Motion;

pub(crate) const HEADER_DURATION: Duration = Duration::from_millis(500);
pub(crate) const HEADER_FROM_OFFSET: f32 = -50.0;
pub(crate) const SECTION_DURATION: Duration = Duration::from_millis(800);
pub(crate) const SECTION_FROM_OFFSET: f32 = 50.0;

/// Visible fraction the hero needs before it reveals; other sections
/// reveal on any overlap.
pub(crate) const HERO_REVEAL_THRESHOLD: f32 = 0.5;

/// Lifecycle of one entrance animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum RevealPhase {
    Hidden,
    Animating { started: Instant, progress: f32 },
    Shown,
}

impl RevealPhase {
    pub(crate) fn progress(&self) -> f32 {
        match self {
            RevealPhase::Hidden => 0.0,
            RevealPhase::Animating { progress, .. } => *progress,
            RevealPhase::Shown => 1.0,
        }
    }

    pub(crate) fn is_animating(&self) -> bool {
        matches!(self, RevealPhase::Animating { .. })
    }
}

/// Resolved motion for every animated element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct RevealViewModel {
    pub(crate) header: Motion,
    sections: [Motion; SectionId::ALL.len()],
}

impl RevealViewModel {
    pub(crate) fn new(
        header: RevealPhase,
        sections: [RevealPhase; SectionId::ALL.len()],
    ) -> Self {
        Self {
            header: Motion::entering(header.progress(), HEADER_FROM_OFFSET),
            sections: sections.map(|phase| {
                Motion::entering(phase.progress(), SECTION_FROM_OFFSET)
            }),
        }
    }

    pub(crate) fn section(&self, section: SectionId) -> Motion {
        self.sections[section as usize]
    }
}
