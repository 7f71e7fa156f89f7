//! Todo demo - the hook engine driving a terminal todo list.
//!
//! Mounts a root component on the terminal backend, seeds two items, then
//! mutates state through setters and lets each write trigger a full
//! re-render. Append mode is used so every frame stays visible.
//!
//! Run with: cargo run --example todo

use std::cell::RefCell;
use std::rc::Rc;

use wick_ui::primitives::views::{item_creator, todo_list_view};
use wick_ui::primitives::{block, BlockProps};
use wick_ui::todo::{ItemStatus, TodoItem};
use wick_ui::{Engine, RenderMode, Setter, TermBackend};

type ItemsSlot = Rc<RefCell<Option<(Vec<TodoItem>, Setter<Vec<TodoItem>>)>>>;

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .init();

    println!("=== wick-ui Todo Example ===\n");

    let engine = Engine::new(TermBackend::new(RenderMode::Append));
    let handle = engine.clone();

    let captured: ItemsSlot = Rc::new(RefCell::new(None));
    let cap = captured.clone();

    let seed = vec![
        TodoItem {
            id: 1,
            text: "This is complete".into(),
            status: ItemStatus::Complete,
        },
        TodoItem {
            id: 2,
            text: "This is NOT complete".into(),
            status: ItemStatus::Incomplete,
        },
    ];

    engine.mount("screen", move || {
        let (items, set_items) = handle.use_state(seed.clone());
        let view = block(BlockProps {
            children: vec![item_creator(), todo_list_view(&items)],
        });
        *cap.borrow_mut() = Some((items, set_items));
        view
    })?;

    println!("\n-- add an item through the setter --\n");
    {
        let (mut items, set_items) = captured.borrow_mut().take().unwrap();
        let id = (items.len() + 1) as u32;
        items.push(TodoItem::new(id, "buy milk"));
        set_items.set(items);
    }

    println!("\n-- complete it --\n");
    {
        let (mut items, set_items) = captured.borrow_mut().take().unwrap();
        if let Some(item) = items.iter_mut().find(|i| i.text == "buy milk") {
            item.toggle();
        }
        set_items.set(items);
    }

    println!("\n{} render passes total.", engine.passes());
    Ok(())
}
