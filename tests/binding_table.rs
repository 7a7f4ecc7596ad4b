use kiku::{Binding, BindingTable, CaseSensitivity};
mod support;
use support::counter::Counter;

fn noop(trigger: &str) -> Binding {
    Binding::new(trigger, || {})
}

#[test]
fn add_preserves_insertion_order_and_duplicates() {
    let mut table = BindingTable::new();
    assert!(table.add(noop("b")));
    assert!(table.add(noop("a")));
    assert!(table.add(noop("b")));

    assert_eq!(table.keys(), vec!["b", "a", "b"]);
    assert_eq!(table.len(), 3);
}

#[test]
fn empty_trigger_is_rejected() {
    let mut table = BindingTable::new();
    assert!(!table.add(noop("")));
    assert!(table.is_empty());
}

#[test]
fn extend_keeps_valid_entries() {
    let mut table = BindingTable::new();
    assert!(table.extend([noop("x"), noop(""), noop("y")]));
    assert_eq!(table.keys(), vec!["x", "y"]);

    assert!(!table.extend([noop(""), noop("")]));
    assert!(!table.extend(Vec::new()));
    assert_eq!(table.len(), 2);
}

#[test]
fn remove_drops_every_exact_match() {
    let mut table = BindingTable::new();
    table.extend([noop("x"), noop("y"), noop("x"), noop("X")]);

    assert!(table.remove("x"));
    assert_eq!(table.keys(), vec!["y", "X"]);
    assert!(!table.remove("x"));
    assert!(!table.remove(""));
}

#[test]
fn remove_all_reports_any_change() {
    let mut table = BindingTable::new();
    table.extend([noop("a"), noop("b"), noop("c")]);

    assert!(table.remove_all(["a", "missing", "c"]));
    assert_eq!(table.keys(), vec!["b"]);
    assert!(!table.remove_all(vec![String::from("missing")]));
}

#[test]
fn lookup_respects_case_policy() {
    let mut table = BindingTable::new();
    table.add(noop("Save"));

    assert!(table.lookup("save", CaseSensitivity::Sensitive).is_none());
    assert!(table.lookup("Save", CaseSensitivity::Sensitive).is_some());
    assert_eq!(
        table
            .lookup("SAVE", CaseSensitivity::Insensitive)
            .map(Binding::trigger),
        Some("Save")
    );
    assert!(table.lookup("Sav", CaseSensitivity::Insensitive).is_none());
}

#[test]
fn lookup_returns_first_registered() {
    let mut table = BindingTable::new();
    table.add(noop("GO"));
    table.add(noop("go"));

    // Case-insensitively both match; the earlier one wins.
    let hit = table.lookup("go", CaseSensitivity::Insensitive).unwrap();
    assert_eq!(hit.trigger(), "GO");
}

#[test]
fn invoke_runs_the_callback() {
    let counter = Counter::new();
    let mut binding = counter.binding("run");
    binding.invoke().unwrap();
    binding.invoke().unwrap();
    assert_eq!(counter.get(), 2);
}

#[test]
fn case_sensitivity_from_bool() {
    assert_eq!(CaseSensitivity::from(true), CaseSensitivity::Sensitive);
    assert_eq!(CaseSensitivity::from(false), CaseSensitivity::Insensitive);
}
