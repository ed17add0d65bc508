#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn reads_are_empty_outside_the_browser() {
    set_raw("authUntil", "123");
    assert_eq!(get_raw("authUntil"), None);
    assert_eq!(load_json::<bool>("userActionsVisible"), None);
}

#[test]
fn writes_are_noops_but_callable() {
    save_json("userActionsVisible", &true);
    remove("authUntil");
}
