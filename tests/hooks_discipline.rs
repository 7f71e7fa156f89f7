//! Engine-level behavior of positional hook state.
//!
//! Covers the contract and, just as deliberately, the hazards: hook slots
//! are keyed by call order alone, so these tests pin down what happens when
//! the order is kept and when it is broken. The misalignment tests assert
//! the current behavior on purpose - they are regression tests for a
//! documented sharp edge, not an endorsement of it.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wick_ui::primitives::views::todo_list_view;
use wick_ui::todo::TodoItem;
use wick_ui::{Engine, Node, Setter, TreeBackend};

fn engine() -> Engine<TreeBackend> {
    Engine::new(TreeBackend::new().with_anchor("root"))
}

#[test]
fn slots_keep_identity_and_latest_value_across_passes() {
    let engine = engine();
    let handle = engine.clone();
    let captured: Rc<RefCell<Option<Setter<i32>>>> = Rc::new(RefCell::new(None));
    let cap = captured.clone();

    engine
        .mount("root", move || {
            let (count, set_count) = handle.use_state(0i32);
            let (label, _set_label) = handle.use_state(String::from("count"));
            *cap.borrow_mut() = Some(set_count);
            Node::text(format!("{label} = {count}"))
        })
        .unwrap();

    assert_eq!(engine.passes(), 1);
    assert_eq!(engine.hook_count(), 2);
    engine.with_backend(|b| assert!(b.subtree().unwrap().find_text("count = 0").is_some()));

    let set_count = captured.borrow().clone().unwrap();
    set_count.set(5);
    engine.with_backend(|b| assert!(b.subtree().unwrap().find_text("count = 5").is_some()));

    set_count.set(7);
    assert_eq!(engine.passes(), 3);
    assert_eq!(engine.hook_count(), 2);
    engine.with_backend(|b| assert!(b.subtree().unwrap().find_text("count = 7").is_some()));
}

#[test]
fn each_setter_call_is_exactly_one_reconstruction() {
    let engine = engine();
    let handle = engine.clone();
    let captured: Rc<RefCell<Option<Setter<i32>>>> = Rc::new(RefCell::new(None));
    let cap = captured.clone();

    engine
        .mount("root", move || {
            let (n, set_n) = handle.use_state(0i32);
            *cap.borrow_mut() = Some(set_n);
            Node::text(n.to_string())
        })
        .unwrap();

    engine.with_backend(|b| assert_eq!(b.replace_count(), 1));

    let set_n = captured.borrow().clone().unwrap();
    set_n.set(1);
    engine.with_backend(|b| assert_eq!(b.replace_count(), 2));
    set_n.set(2);
    set_n.set(3);
    engine.with_backend(|b| assert_eq!(b.replace_count(), 4));
}

#[test]
fn initial_value_is_ignored_after_first_pass() {
    let engine = engine();
    let handle = engine.clone();
    let pass = Rc::new(Cell::new(0u32));
    let p = pass.clone();
    let observed = Rc::new(Cell::new(-1i32));
    let obs = observed.clone();

    engine
        .mount("root", move || {
            p.set(p.get() + 1);
            // A different "initial" every pass; only the first one counts.
            let (value, _set) = handle.use_state(p.get() as i32 * 10);
            obs.set(value);
            Node::block()
        })
        .unwrap();

    assert_eq!(observed.get(), 10);
    engine.refresh().unwrap();
    assert_eq!(observed.get(), 10);
}

#[test]
fn extra_call_misaligns_every_slot_after_the_divergence_point() {
    let engine = engine();
    let handle = engine.clone();
    let diverge = Rc::new(Cell::new(false));
    let d = diverge.clone();
    let observed: Rc<RefCell<Vec<i32>>> = Rc::new(RefCell::new(Vec::new()));
    let obs = observed.clone();

    engine
        .mount("root", move || {
            let mut seen = Vec::new();
            if d.get() {
                let (extra, _set) = handle.use_state(100i32);
                seen.push(extra);
            }
            let (a, _set_a) = handle.use_state(1i32);
            let (b, _set_b) = handle.use_state(2i32);
            seen.push(a);
            seen.push(b);
            *obs.borrow_mut() = seen;
            Node::block()
        })
        .unwrap();

    assert_eq!(*observed.borrow(), vec![1, 2]);
    assert_eq!(engine.hook_count(), 2);

    // Second pass makes one extra leading call. The new call steals slot 0
    // (its initial of 100 is ignored), the old calls shift onto the wrong
    // slots, and a third slot appears. This is the documented hazard; the
    // assertions pin the wrong-but-current values.
    diverge.set(true);
    engine.refresh().unwrap();

    assert_eq!(*observed.borrow(), vec![1, 2, 2]);
    assert_eq!(engine.hook_count(), 3);
}

#[test]
#[should_panic(expected = "hook order violated")]
fn misalignment_across_a_type_boundary_panics() {
    let engine = engine();
    let handle = engine.clone();
    let diverge = Rc::new(Cell::new(false));
    let d = diverge.clone();

    engine
        .mount("root", move || {
            if d.get() {
                let (_s, _set) = handle.use_state(String::from("not an i32"));
            } else {
                let (_n, _set) = handle.use_state(1i32);
            }
            Node::block()
        })
        .unwrap();

    diverge.set(true);
    engine.refresh().unwrap();
}

#[test]
fn setter_on_unmounted_engine_writes_but_never_renders() {
    let engine = engine();
    engine.mount("missing-anchor", || Node::block()).unwrap();
    assert!(!engine.is_mounted());

    let (value, set) = engine.use_state(1i32);
    assert_eq!(value, 1);

    // The write lands in the slot, the refresh no-ops, and the cursor is
    // reset so the next call reads the same slot back.
    set.set(5);
    engine.with_backend(|b| assert_eq!(b.replace_count(), 0));
    let (value, _set) = engine.use_state(0i32);
    assert_eq!(value, 5);
}

/// The end-to-end scenario: one list slot, append an item through the
/// setter, expect exactly two renders and the item in the second subtree.
#[test]
fn adding_buy_milk_rerenders_with_the_new_item() {
    let engine = engine();
    let handle = engine.clone();

    type Captured = Rc<RefCell<Option<(Vec<TodoItem>, Setter<Vec<TodoItem>>)>>>;
    let captured: Captured = Rc::new(RefCell::new(None));
    let cap = captured.clone();

    engine
        .mount("root", move || {
            let (items, set_items) = handle.use_state(Vec::<TodoItem>::new());
            let view = todo_list_view(&items);
            *cap.borrow_mut() = Some((items, set_items));
            view
        })
        .unwrap();

    engine.with_backend(|b| {
        assert_eq!(b.replace_count(), 1);
        assert!(b.subtree().unwrap().find_text("buy milk").is_none());
    });

    let (mut items, set_items) = captured.borrow_mut().take().unwrap();
    items.push(TodoItem::new(1, "buy milk"));
    set_items.set(items);

    engine.with_backend(|b| {
        assert_eq!(b.replace_count(), 2);
        assert!(b.subtree().unwrap().find_text("buy milk").is_some());
    });

    // The second pass saw the appended item through the same slot.
    let (items, _set) = captured.borrow_mut().take().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].text, "buy milk");
}
