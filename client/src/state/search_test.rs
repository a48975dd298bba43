use super::*;

#[test]
fn starts_empty() {
    assert_eq!(SearchContext::new().get(), "");
}

#[test]
fn set_then_get_returns_value() {
    let search = SearchContext::new();
    search.set("mumbai");
    assert_eq!(search.get(), "mumbai");
}

#[test]
fn second_handle_observes_write() {
    let navbar = SearchContext::new();
    let browser = navbar.clone();
    navbar.set("mumbai");
    assert_eq!(browser.get(), "mumbai");
    assert_eq!(browser.get_untracked(), "mumbai");
}

#[test]
fn last_writer_wins() {
    let navbar = SearchContext::new();
    let browser = navbar.clone();
    navbar.set("pune");
    browser.set("goa");
    assert_eq!(navbar.get(), "goa");
}

#[test]
fn clear_resets_for_all_handles() {
    let navbar = SearchContext::new();
    let browser = navbar.clone();
    navbar.set("delhi");
    browser.clear();
    assert_eq!(navbar.get(), "");
}

#[test]
fn no_trimming_or_validation() {
    let search = SearchContext::new();
    search.set("  Navi Mumbai ");
    assert_eq!(search.get(), "  Navi Mumbai ");
}
