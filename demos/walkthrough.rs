//! Walkthrough Example - Navigating between screens
//!
//! This example demonstrates the navigator:
//! - Registering screens with default props
//! - Navigating with prop overrides
//! - Vetoing `back()` with a guard until a condition holds
//! - Driving a spark-signals effect from the history store
//!
//! Run with: RUST_LOG=debug cargo run --example walkthrough

use std::cell::Cell;
use std::rc::Rc;

use serde_json::json;
use spark_navigator::{
    create_navigator, props, screens, ComponentHandle, NavigatorOptions, Screen, ScreenConfig,
};
use spark_signals::effect;

struct HomeView;
struct SettingsView;

fn describe(screen: &Option<Screen>) -> String {
    match screen {
        Some(screen) => format!(
            "{} {}",
            screen
                .component
                .as_ref()
                .map(|c| c.type_name().rsplit("::").next().unwrap_or_default())
                .unwrap_or("<none>"),
            serde_json::Value::Object(screen.props.clone())
        ),
        None => "<no screen>".to_string(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== spark-navigator Walkthrough ===\n");

    let registry = screens([
        ("home", ScreenConfig::from(Screen::new(ComponentHandle::new(HomeView)))),
        (
            "settings",
            ScreenConfig {
                component: Some(ComponentHandle::new(SettingsView)),
                props: Some(props(json!({ "section": "general", "dirty": false }))),
            },
        ),
    ]);

    let nav = create_navigator(NavigatorOptions::new(registry).initial_route("home"))?;

    // Render effect: re-runs whenever the history depth changes
    let (depth, _stop) = nav.history.to_signal(|history| history.len());
    let screen = nav.screen.clone();
    let _render = effect(move || {
        let depth = depth.get();
        println!("  [render] depth={} current={}", depth, describe(&screen.get()));
    });

    nav.set_on_navigate(|| println!("  [hook] navigated"));

    println!("\n--- navigate(settings) ---");
    nav.navigate("settings", None);

    println!("\n--- navigate(settings, section=keys) ---");
    nav.navigate("settings", props(json!({ "section": "keys", "dirty": true })));

    println!("\n--- navigate(unknown) ---");
    nav.navigate("unknown", None);

    // Block back while there are unsaved edits
    let saved = Rc::new(Cell::new(false));
    let saved_for_guard = saved.clone();
    nav.set_back_guard(move || {
        let ok = saved_for_guard.get();
        if !ok {
            println!("  [guard] unsaved changes, staying");
        }
        ok
    });

    println!("\n--- back() with unsaved changes ---");
    nav.back();
    nav.back();

    println!("\n--- save, then back() ---");
    saved.set(true);
    nav.back();

    println!("\n--- back() twice more ---");
    nav.back();
    nav.back();

    println!("\nFinal depth: {}", nav.depth());
    Ok(())
}
