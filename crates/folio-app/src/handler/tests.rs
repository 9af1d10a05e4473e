//! Tests for handler module

use super::*;
use crate::message::Message;
use crate::nav::NavMenuState;
use crate::reveal::SectionVisibility;
use crate::state::AppState;
use folio_core::{NavTarget, ScrollSettings, SectionId, SiteSettings, ThemePreference};

#[test]
fn test_toggle_theme_flips_and_requests_persist() {
    let mut state = AppState::default();
    assert_eq!(state.theme.current(), ThemePreference::Dark);

    let result = update(&mut state, Message::ToggleTheme);

    assert_eq!(state.theme.current(), ThemePreference::Light);
    assert_eq!(
        result.action,
        Some(UpdateAction::PersistTheme {
            theme: ThemePreference::Light
        })
    );
    assert!(result.message.is_none());
}

#[test]
fn test_toggle_theme_twice_returns_to_start() {
    let mut state = AppState::default();

    update(&mut state, Message::ToggleTheme);
    let result = update(&mut state, Message::ToggleTheme);

    assert_eq!(state.theme.current(), ThemePreference::Dark);
    assert_eq!(
        result.action,
        Some(UpdateAction::PersistTheme {
            theme: ThemePreference::Dark
        })
    );
}

#[test]
fn test_tokens_follow_theme() {
    let mut state = AppState::default();
    let dark_page = state.tokens().page;

    update(&mut state, Message::ToggleTheme);

    assert_ne!(state.tokens().page, dark_page);
    assert_eq!(state.tokens(), ThemePreference::Light.tokens());
}

#[test]
fn test_toggle_menu_flips_state() {
    let mut state = AppState::default();

    update(&mut state, Message::ToggleMenu);
    assert_eq!(state.menu.state(), NavMenuState::Open);

    update(&mut state, Message::ToggleMenu);
    assert_eq!(state.menu.state(), NavMenuState::Closed);
}

#[test]
fn test_nav_link_with_open_menu_closes_it() {
    let mut state = AppState::default();
    update(&mut state, Message::ToggleMenu);

    let result = update(
        &mut state,
        Message::NavLinkActivated(NavTarget::Section(SectionId::Projects)),
    );

    assert_eq!(result.message, Some(Message::CloseMenu));
    assert!(matches!(
        result.action,
        Some(UpdateAction::ScrollTo(ScrollRequest {
            target: NavTarget::Section(SectionId::Projects),
            ..
        }))
    ));

    update(&mut state, Message::CloseMenu);
    assert!(!state.menu.is_open());
}

#[test]
fn test_nav_link_with_closed_menu_only_scrolls() {
    let mut state = AppState::default();

    let result = update(&mut state, Message::NavLinkActivated(NavTarget::Home));

    assert!(result.message.is_none());
    assert_eq!(
        result.action,
        Some(UpdateAction::ScrollTo(ScrollRequest {
            target: NavTarget::Home,
            duration_ms: 500,
            offset_px: 64,
        }))
    );
}

#[test]
fn test_nav_link_uses_clamped_duration() {
    let settings = SiteSettings {
        scroll: ScrollSettings {
            duration_ms: 5_000,
            header_offset_px: 80,
        },
        ..SiteSettings::default()
    };
    let mut state = AppState::new(Default::default(), &settings);

    let result = update(&mut state, Message::NavLinkActivated(SectionId::About.into()));

    match result.action {
        Some(UpdateAction::ScrollTo(request)) => {
            assert_eq!(request.duration_ms, folio_core::MAX_SCROLL_DURATION_MS);
            assert_eq!(request.offset_px, 80);
        }
        other => panic!("expected scroll action, got {other:?}"),
    }
}

#[test]
fn test_section_intersection_reveals_once() {
    let mut state = AppState::default();
    let enter = Message::SectionIntersected {
        section: SectionId::Growth,
        is_intersecting: true,
    };
    let leave = Message::SectionIntersected {
        section: SectionId::Growth,
        is_intersecting: false,
    };

    update(&mut state, enter);
    update(&mut state, leave);
    let result = update(&mut state, enter);

    assert_eq!(result, UpdateResult::none());
    assert_eq!(
        state.reveal.visibility(SectionId::Growth),
        SectionVisibility::Revealed
    );
    assert_eq!(state.reveal.revealed_count(), 1);
}

#[test]
fn test_update_result_constructors() {
    let result = UpdateResult::message(Message::CloseMenu);
    assert_eq!(result.message, Some(Message::CloseMenu));
    assert!(result.action.is_none());

    let result = UpdateResult::none().then(Message::ToggleMenu);
    assert_eq!(result.message, Some(Message::ToggleMenu));
}
