#![cfg(target_arch = "wasm32")]

use lifepet_web::{BrowserBackend, StorageBackend, XpAction, create_browser_engine};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn clear(keys: &[&str]) {
    let backend = BrowserBackend;
    for key in keys {
        backend.remove(key);
    }
}

#[wasm_bindgen_test]
fn raw_values_roundtrip() {
    clear(&["lifepet-test"]);
    let backend = BrowserBackend;
    assert!(backend.load("lifepet-test").is_none());
    assert!(backend.store("lifepet-test", "{\"ok\":true}"));
    assert_eq!(backend.load("lifepet-test").as_deref(), Some("{\"ok\":true}"));
    backend.remove("lifepet-test");
    backend.remove("lifepet-test");
    assert!(backend.load("lifepet-test").is_none());
}

#[wasm_bindgen_test]
fn engine_persists_profile_across_instances() {
    clear(&["userProfile"]);
    let mut engine = create_browser_engine();
    let profile = engine.add_xp(120, XpAction::Workout).unwrap();
    assert_eq!(profile.level, 2);

    let mut second = create_browser_engine();
    let reloaded = second.get_or_create_profile().unwrap();
    assert_eq!(reloaded.level, 2);
    assert_eq!(reloaded.total_xp, 120);
    clear(&["userProfile"]);
}
