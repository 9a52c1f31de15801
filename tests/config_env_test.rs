//! KARYTREE_* overrides. Kept in its own test binary because it mutates the process
//! environment.

use std::env;
use std::fs;

use karytree::config::{Settings, ValueKind};
use karytree::Order;
use tempfile::TempDir;

#[test]
fn given_env_vars_when_loading_then_env_wins_over_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("karytree.toml");
    fs::write(&path, "arity = 3\nrender = true\n").unwrap();

    env::set_var("KARYTREE_ARITY", "4");
    env::set_var("KARYTREE_ORDERS", "pre,bfs");
    env::set_var("KARYTREE_RENDER", "false");
    env::set_var("KARYTREE_VALUE_KIND", "complex");

    let settings = Settings::load(Some(&path));

    for key in [
        "KARYTREE_ARITY",
        "KARYTREE_ORDERS",
        "KARYTREE_RENDER",
        "KARYTREE_VALUE_KIND",
    ] {
        env::remove_var(key);
    }

    let settings = settings.expect("load settings");
    assert_eq!(settings.arity, 4);
    assert_eq!(settings.orders, vec![Order::PreOrder, Order::BreadthFirst]);
    assert!(!settings.render);
    assert_eq!(settings.value_kind, ValueKind::Complex);
}
