use super::*;

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_defaults_to_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
    assert_eq!(Theme::parse(None), Theme::Dark);
    assert_eq!(Theme::parse(Some("sepia")), Theme::Dark);
    assert_eq!(Theme::parse(Some("light")), Theme::Light);
}

#[test]
fn theme_toggle_round_trips() {
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    assert_eq!(Theme::parse(Some(Theme::Light.as_str())), Theme::Light);
}

// =============================================================
// Modals
// =============================================================

#[test]
fn opening_modal_closes_menus() {
    let mut ui = UiState { profile_menu_open: true, sync_menu_open: true, ..UiState::default() };
    ui.open_modal(Modal::Comparison);
    assert!(ui.is_open(Modal::Comparison));
    assert!(!ui.profile_menu_open);
    assert!(!ui.sync_menu_open);
    ui.close_modal();
    assert!(ui.is_open(Modal::None));
}
