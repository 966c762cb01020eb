//! Drives the interactive menu end to end through byte buffers.

mod common;

use common::fixture;
use sibtree::application::Session;
use sibtree::cli::menu::Menu;
use sibtree::config::Settings;
use sibtree::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

fn run_menu(input: &str) -> String {
    let mut out = Vec::new();
    let mut menu = Menu::new(Session::new(&Settings::default()), input.as_bytes(), &mut out);
    menu.run().unwrap();
    assert!(!menu.session().has_tree(), "tree must be released on exit");
    drop(menu);
    String::from_utf8(out).unwrap()
}

#[test]
fn given_loaded_file_when_running_all_queries_then_prints_each_result() {
    let path = fixture("sample.tree");
    let input = format!("2\n{}\n3\n4\n5\n6\nC\n7\n9\n10\n11\n0\n", path.display());

    let out = run_menu(&input);

    assert!(out.contains("Tree loaded."));
    assert!(out.contains("Node count: 7\n"));
    assert!(out.contains("Leaf count: 4\n"));
    assert!(out.contains("Non-leaf count: 3\n"));
    assert!(out.contains("Degree of [C]: 3\n"));
    assert!(out.contains("Max degree: 3\n"));
    assert!(out.contains("Depth: 3\n"));
    assert!(out.contains("Level order: A B C D E F G\n"));
    assert!(out.contains("Preorder: A B D C E F G\n"));
    assert!(out.contains("Postorder: D B E F G C A\n"));
    assert!(out.ends_with("Bye.\n"));
}

#[test]
fn given_loaded_file_when_showing_shape_then_prints_ascii_art() {
    let input = format!("2\n{}\n8\n", fixture("sample.tree").display());
    let out = run_menu(&input);
    assert!(out.contains("A\n   / B\n   |  `` D\n   `` C\n"));
}

#[test]
fn given_unknown_label_when_asking_degree_then_reports_missing_node() {
    let input = format!("2\n{}\n6\nZ\n6\n\n", fixture("single.tree").display());
    let out = run_menu(&input);
    assert!(out.contains("No node labelled [Z].\n"));
    assert_eq!(out.matches("Max degree: 0\n").count(), 2);
}

#[test]
fn given_bad_file_when_loading_then_reports_failure_and_has_no_tree() {
    let input = format!("2\n{}\n3\n", fixture("out_of_range.tree").display());
    let out = run_menu(&input);
    assert!(out.contains("Load failed: line 3: index 5 out of range for 3 nodes\n"));
    assert!(out.contains("No tree: build or load one first."));
}

#[test]
fn given_empty_file_name_when_loading_then_reports_invalid_name() {
    let out = run_menu("2\n\n");
    assert!(out.contains("Invalid file name.\n"));
}

#[test]
fn given_tree_when_building_new_one_then_previous_is_replaced() {
    let input = format!("2\n{}\n1\nsolo\n#\n#\n3\n10\n", fixture("sample.tree").display());
    let out = run_menu(&input);
    assert!(out.contains("Node count: 1\n"));
    assert!(out.contains("Preorder: solo\n"));
}

#[test]
fn given_root_declined_when_building_then_reports_no_tree() {
    let out = run_menu("1\n#\n7\n");
    assert!(out.contains("No tree built."));
    assert!(out.contains("No tree: build or load one first."));
}
