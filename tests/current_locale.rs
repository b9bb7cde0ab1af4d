// ============================================================================
// msgcat - Current Locale Integration Tests
// ============================================================================
//
// File: tests/current_locale.rs
// Role: Process-wide locale switching
//
// The current locale is global, so every mutation lives in one test.
//
// ============================================================================

use msgcat::messages;
use msgcat::{apply_locale, get_locale, set_locale, Locale, MessageOptions, Params};

#[test]
fn switching_the_current_locale() {
    assert_eq!(get_locale(), Locale::En);
    let implicit = MessageOptions::default();
    assert_eq!(messages::nav_home(&implicit), "Home");

    set_locale(Locale::Bg);
    assert_eq!(get_locale(), Locale::Bg);
    assert_eq!(messages::nav_home(&implicit), "Начало");
    assert_eq!(
        messages::nav_home(&implicit),
        messages::nav_home(&MessageOptions::locale(get_locale()))
    );

    // explicit locale wins
    assert_eq!(messages::nav_home(&MessageOptions::locale(Locale::Ru)), "Главная");

    assert!(apply_locale(" UA "));
    assert_eq!(get_locale(), Locale::Ua);
    let params = Params::new().with("username", "olena");
    assert_eq!(
        messages::dashboard_welcome_back(&params, &implicit),
        "З поверненням, olena!"
    );

    assert!(!apply_locale("de"));
    assert_eq!(get_locale(), Locale::Ua);

    set_locale(Locale::En);
}
