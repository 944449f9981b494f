//! Scripted CLI demo for the todo engine.
//!
//! Walks the store through every action kind and renders the composed
//! view after each step. An optional argument picks the filter mode for
//! the listing (`all`, `active`, or `completed`).

use todoflow_runtime::Store;
use todoflow_todos::{
    FilterMode, TodoAction, TodoEnvironment, TodoId, TodoReducer, TodoState, TodoView, compose,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn render(view: &TodoView) {
    let toggle = if view.toggle_all_checked { "x" } else { " " };
    println!("  toggle-all [{toggle}]  filter: {}", view.filter);
    for todo in &view.visible {
        let status = if todo.completed { "✓" } else { " " };
        println!("    [{status}] #{} {}", todo.id, todo.text);
    }
    println!("  {}", view.items_left_label);
    if view.show_clear_completed {
        println!("  (Clear completed)");
    }
    println!();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todos=debug,todoflow_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let filter = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<FilterMode>()?,
        None => FilterMode::All,
    };
    tracing::debug!(%filter, "composing views with filter");

    println!("=== Todo Engine Demo ===\n");

    let store = Store::new(TodoState::new(), TodoReducer::new(), TodoEnvironment);

    println!("Adding todos...");
    store
        .send(TodoAction::Add {
            text: "Use Redux".to_string(),
        })
        .await?;
    store
        .send(TodoAction::Add {
            text: "Run the tests".to_string(),
        })
        .await?;
    store
        .send(TodoAction::Add {
            text: "Write documentation".to_string(),
        })
        .await?;
    // Whitespace-only text is a no-op by policy.
    store
        .send(TodoAction::Add {
            text: "   ".to_string(),
        })
        .await?;

    render(&store.state(|s| compose(s, filter)).await);

    println!("Completing 'Run the tests' (id 1)...");
    store
        .send(TodoAction::Complete { id: TodoId::new(1) })
        .await?;
    render(&store.state(|s| compose(s, filter)).await);

    println!("Editing 'Write documentation' (id 2)...");
    store
        .send(TodoAction::Edit {
            id: TodoId::new(2),
            text: "Write better documentation".to_string(),
        })
        .await?;
    render(&store.state(|s| compose(s, filter)).await);

    println!("Toggling all...");
    store.send(TodoAction::CompleteAll).await?;
    render(&store.state(|s| compose(s, filter)).await);

    println!("Clearing completed...");
    store.send(TodoAction::ClearCompleted).await?;
    render(&store.state(|s| compose(s, filter)).await);

    println!("Adding a fresh todo (ids restart once the list is empty)...");
    store
        .send(TodoAction::Add {
            text: "Start the next thing".to_string(),
        })
        .await?;
    render(&store.state(|s| compose(s, filter)).await);

    println!("=== Demo Complete ===");
    Ok(())
}
