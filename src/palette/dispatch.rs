//! Selection dispatch
//!
//! Committing a command closes the palette and hands a [`NavigationIntent`]
//! to whoever interprets ids (the router). Nothing here validates the id.

use log::info;

use super::registry::CommandDescriptor;
use super::state::{CloseReason, CommandPalette};

/// The id of a committed command, for the router to interpret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationIntent {
    pub target_id: String,
}

impl NavigationIntent {
    pub fn new(target_id: impl Into<String>) -> Self {
        Self {
            target_id: target_id.into(),
        }
    }
}

/// Receives navigation intents
pub trait IntentSink {
    fn accept(&mut self, intent: &NavigationIntent);
}

impl IntentSink for Vec<NavigationIntent> {
    fn accept(&mut self, intent: &NavigationIntent) {
        self.push(intent.clone());
    }
}

/// Commit a command: close the palette and forward the intent
pub fn commit(
    palette: &mut CommandPalette,
    descriptor: &CommandDescriptor,
    sink: &mut impl IntentSink,
) -> NavigationIntent {
    palette.close(CloseReason::Committed);

    let intent = NavigationIntent::new(descriptor.id);
    info!("Committed command {:?} ({})", descriptor.label, intent.target_id);
    sink.accept(&intent);
    intent
}

/// Commit the highlighted command, if there is one
///
/// With nothing highlighted (no results, or the pointer cleared it) this is
/// a no-op and the palette stays open.
pub fn commit_highlighted(
    palette: &mut CommandPalette,
    sink: &mut impl IntentSink,
) -> Option<NavigationIntent> {
    let descriptor = palette.highlighted_command()?;
    Some(commit(palette, descriptor, sink))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::state::OpenTrigger;

    #[test]
    fn test_enter_on_pricing() {
        let mut palette = CommandPalette::default();
        let mut sink: Vec<NavigationIntent> = Vec::new();
        palette.open(OpenTrigger::Chord);
        palette.hover(2);

        let intent = commit_highlighted(&mut palette, &mut sink).unwrap();
        assert_eq!(intent, NavigationIntent::new("/pricing"));
        assert_eq!(sink, vec![NavigationIntent::new("/pricing")]);
        assert!(!palette.is_open());
    }

    #[test]
    fn test_commit_with_no_results_is_noop() {
        let mut palette = CommandPalette::default();
        let mut sink: Vec<NavigationIntent> = Vec::new();
        palette.open(OpenTrigger::Chord);
        palette.set_query("zzz");

        assert!(commit_highlighted(&mut palette, &mut sink).is_none());
        assert!(sink.is_empty());
        assert!(palette.is_open());
    }

    #[test]
    fn test_commit_after_clear_highlight_is_noop() {
        let mut palette = CommandPalette::default();
        let mut sink: Vec<NavigationIntent> = Vec::new();
        palette.open(OpenTrigger::Button);
        palette.clear_highlight();

        assert!(commit_highlighted(&mut palette, &mut sink).is_none());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_commit_when_closed_is_noop() {
        let mut palette = CommandPalette::default();
        let mut sink: Vec<NavigationIntent> = Vec::new();
        assert!(commit_highlighted(&mut palette, &mut sink).is_none());
    }

    #[test]
    fn test_commit_action_id_is_passed_through() {
        let mut palette = CommandPalette::default();
        let mut sink: Vec<NavigationIntent> = Vec::new();
        palette.open(OpenTrigger::Button);
        let settings = *palette.registry().find("settings").unwrap();

        let intent = commit(&mut palette, &settings, &mut sink);
        assert_eq!(intent.target_id, "settings");
        assert_eq!(sink.len(), 1);
        assert!(!palette.is_open());
    }

    #[test]
    fn test_outside_click_produces_no_intent() {
        let mut palette = CommandPalette::default();
        let sink: Vec<NavigationIntent> = Vec::new();
        palette.open(OpenTrigger::Button);
        palette.close(CloseReason::OutsideClick);

        assert!(!palette.is_open());
        assert!(sink.is_empty());
    }
}
