//! End-to-end tests driving the todo engine through the Store.
//!
//! These exercise the full flow: action → store → reducer → snapshot →
//! selector/view, including the dispatch-order and snapshot guarantees
//! the presentation layer relies on.

use todoflow_runtime::Store;
use todoflow_todos::{
    FilterMode, TodoAction, TodoEnvironment, TodoId, TodoReducer, TodoState, compose, select,
};

fn todo_store() -> Store<TodoState, TodoAction, TodoEnvironment, TodoReducer> {
    Store::new(TodoState::new(), TodoReducer::new(), TodoEnvironment)
}

#[tokio::test]
async fn worked_example_use_redux() {
    let store = todo_store();

    // []
    assert!(store.state(TodoState::is_empty).await);

    // ADD_TODO("Use Redux") -> [{id:0, text:"Use Redux", completed:false}]
    let _ = store
        .send(TodoAction::Add {
            text: "Use Redux".to_string(),
        })
        .await;
    let first = store.state(|s| s.todos[0].clone()).await;
    assert_eq!(first.id, TodoId::new(0));
    assert_eq!(first.text, "Use Redux");
    assert!(!first.completed);

    // ADD_TODO("Run tests") -> adds id 1
    let _ = store
        .send(TodoAction::Add {
            text: "Run tests".to_string(),
        })
        .await;
    assert_eq!(store.state(|s| s.todos[1].id).await, TodoId::new(1));

    // COMPLETE_TODO(1)
    let _ = store.send(TodoAction::Complete { id: TodoId::new(1) }).await;

    let summary = store.state(|s| select(s, FilterMode::All)).await;
    assert_eq!(summary.active_count, 1);
    assert_eq!(summary.completed_count, 1);
    assert!(!summary.all_complete);

    // CLEAR_COMPLETED -> only id 0 survives
    let _ = store.send(TodoAction::ClearCompleted).await;
    let state = store.state(Clone::clone).await;
    assert_eq!(state.len(), 1);
    assert_eq!(state.todos[0].id, TodoId::new(0));
    assert_eq!(state.todos[0].text, "Use Redux");
}

#[tokio::test]
async fn no_op_actions_leave_the_snapshot_untouched() {
    let store = todo_store();
    let _ = store
        .send(TodoAction::Add {
            text: "Only todo".to_string(),
        })
        .await;

    let before = store.state(Clone::clone).await;

    // Semantic non-effect is observable only by before/after comparison.
    let _ = store.send(TodoAction::Add { text: "  ".to_string() }).await;
    let _ = store
        .send(TodoAction::Delete {
            id: TodoId::new(99),
        })
        .await;
    let _ = store
        .send(TodoAction::Edit {
            id: TodoId::new(99),
            text: "ghost".to_string(),
        })
        .await;

    let after = store.state(Clone::clone).await;
    assert_eq!(after, before);
}

#[tokio::test]
async fn concurrent_adds_assign_distinct_ids() {
    let store = todo_store();

    let handles: Vec<_> = (0..10)
        .map(|n| {
            let store = store.clone();
            tokio::spawn(async move {
                let _ = store
                    .send(TodoAction::Add {
                        text: format!("todo {n}"),
                    })
                    .await;
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.await.is_ok());
    }

    let state = store.state(Clone::clone).await;
    assert_eq!(state.len(), 10);

    let mut ids: Vec<TodoId> = state.todos.iter().map(|t| t.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 10);
}

#[tokio::test]
async fn stores_are_isolated() {
    let store1 = todo_store();
    let store2 = todo_store();

    let _ = store1
        .send(TodoAction::Add {
            text: "Mine".to_string(),
        })
        .await;

    assert_eq!(store1.state(TodoState::len).await, 1);
    assert_eq!(store2.state(TodoState::len).await, 0);
}

#[tokio::test]
async fn composed_view_tracks_the_store() {
    let store = todo_store();

    let view = store.state(|s| compose(s, FilterMode::All)).await;
    assert_eq!(view.items_left_label, "No items left");
    assert!(!view.toggle_all_checked);
    assert!(!view.show_clear_completed);

    let _ = store
        .send(TodoAction::Add {
            text: "Use Redux".to_string(),
        })
        .await;
    let _ = store
        .send(TodoAction::Add {
            text: "Run the tests".to_string(),
        })
        .await;

    let view = store.state(|s| compose(s, FilterMode::All)).await;
    assert_eq!(view.items_left_label, "2 items left");

    let _ = store.send(TodoAction::CompleteAll).await;
    let view = store.state(|s| compose(s, FilterMode::Active)).await;
    assert!(view.visible.is_empty());
    assert!(view.toggle_all_checked);
    assert!(view.show_clear_completed);
    assert_eq!(view.items_left_label, "No items left");
}
