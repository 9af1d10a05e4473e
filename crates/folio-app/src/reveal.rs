//! One-shot entrance animation tracking
//!
//! Each section starts hidden and flips to revealed the first time the
//! platform reports it intersecting the viewport. The flip never reverts.

use std::collections::HashSet;

use folio_core::prelude::*;
use folio_core::SectionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionVisibility {
    Hidden,
    Revealed,
}

/// What an intersection report did to a section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// First intersection: the entrance animation should run now
    Revealed,
    /// Section was already revealed; the report is ignored
    AlreadyRevealed,
    /// Section is still outside the viewport
    NotVisible,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealTracker {
    revealed: HashSet<SectionId>,
}

impl RevealTracker {
    pub fn visibility(&self, section: SectionId) -> SectionVisibility {
        if self.is_revealed(section) {
            SectionVisibility::Revealed
        } else {
            SectionVisibility::Hidden
        }
    }

    pub fn is_revealed(&self, section: SectionId) -> bool {
        self.revealed.contains(&section)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }

    /// Apply an intersection report from the visibility notifier
    pub fn on_intersection(&mut self, section: SectionId, is_intersecting: bool) -> RevealOutcome {
        if self.is_revealed(section) {
            return RevealOutcome::AlreadyRevealed;
        }
        if !is_intersecting {
            return RevealOutcome::NotVisible;
        }

        self.revealed.insert(section);
        debug!("Section '{}' revealed", section);
        RevealOutcome::Revealed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_start_hidden() {
        let tracker = RevealTracker::default();
        for section in SectionId::ALL {
            assert_eq!(tracker.visibility(section), SectionVisibility::Hidden);
        }
    }

    #[test]
    fn test_first_intersection_reveals() {
        let mut tracker = RevealTracker::default();
        let outcome = tracker.on_intersection(SectionId::Skills, true);

        assert_eq!(outcome, RevealOutcome::Revealed);
        assert_eq!(tracker.visibility(SectionId::Skills), SectionVisibility::Revealed);
        assert_eq!(tracker.visibility(SectionId::About), SectionVisibility::Hidden);
    }

    #[test]
    fn test_non_intersecting_report_keeps_hidden() {
        let mut tracker = RevealTracker::default();
        assert_eq!(
            tracker.on_intersection(SectionId::Contact, false),
            RevealOutcome::NotVisible
        );
        assert!(!tracker.is_revealed(SectionId::Contact));
    }

    #[test]
    fn test_reveal_happens_at_most_once() {
        let mut tracker = RevealTracker::default();
        tracker.on_intersection(SectionId::Projects, true);

        // Leave and re-enter the viewport
        assert_eq!(
            tracker.on_intersection(SectionId::Projects, false),
            RevealOutcome::AlreadyRevealed
        );
        assert_eq!(
            tracker.on_intersection(SectionId::Projects, true),
            RevealOutcome::AlreadyRevealed
        );
        assert!(tracker.is_revealed(SectionId::Projects));
        assert_eq!(tracker.revealed_count(), 1);
    }
}
