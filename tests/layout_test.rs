//! Loading tree layouts from TOML files.

use std::fs;

use karytree::layout::TreeLayout;
use karytree::util::testing;
use karytree::{Complex, Order, TreeError, TreeRender};
use tempfile::TempDir;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

#[test]
fn given_layout_file_when_loading_then_builds_tree() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tree.toml");
    fs::write(
        &path,
        r#"
arity = 3

[root]
value = 1.0
children = [{ value = 2.0 }, { value = 3.0 }, { value = 4.0 }]

[[attach]]
parent = 2.0
child = { value = 5.0, children = [{ value = 6.0 }] }
"#,
    )
    .unwrap();

    let layout: TreeLayout<f64> = TreeLayout::load(&path).unwrap();
    assert_eq!(layout.arity, Some(3));
    let tree = layout.build::<3>().unwrap();
    assert_eq!(
        tree.values(Order::PreOrder).unwrap(),
        vec![1.0, 2.0, 5.0, 6.0, 3.0, 4.0]
    );
    assert_eq!(
        tree.to_tree_string().to_string(),
        "1\n├── 2\n│   └── 5\n│       └── 6\n├── 3\n└── 4\n"
    );
}

#[test]
fn given_complex_layout_when_loading_then_values_parsed() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("complex.toml");
    fs::write(
        &path,
        r#"
[root]
value = { re = 3.4, im = 5.2 }

[[attach]]
parent = { re = 3.4, im = 5.2 }
child = { value = { re = 1.2, im = 3.4 } }
"#,
    )
    .unwrap();

    let layout: TreeLayout<Complex> = TreeLayout::load(&path).unwrap();
    let mut tree = layout.build::<2>().unwrap();
    tree.heapify();
    assert_eq!(
        tree.values(Order::BreadthFirst).unwrap(),
        vec![Complex::new(1.2, 3.4), Complex::new(3.4, 5.2)]
    );
}

#[test]
fn given_missing_file_when_loading_then_io_error() {
    let dir = TempDir::new().unwrap();
    let result: Result<TreeLayout<f64>, _> = TreeLayout::load(&dir.path().join("nope.toml"));
    assert!(matches!(result, Err(TreeError::Io { .. })));
}

#[test]
fn given_malformed_file_when_loading_then_config_error_names_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[root]\nvalue = \"one\"\n").unwrap();

    let err = TreeLayout::<f64>::load(&path).unwrap_err();
    match err {
        TreeError::Config { message } => assert!(message.contains("broken.toml")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn given_empty_layout_when_building_then_empty_tree() {
    let layout: TreeLayout<f64> = TreeLayout::parse("").unwrap();
    let tree = layout.build::<2>().unwrap();
    assert!(tree.is_empty());
    assert_eq!(tree.to_tree_string().to_string(), "Empty tree\n");
}
