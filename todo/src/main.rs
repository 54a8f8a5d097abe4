//! Command-line demo for the todo store.
//!
//! Builds a session from `TODO_*` environment variables (see
//! [`todo::config`]), drives it through a scripted run of user gestures and
//! prints the projected view after each one, the way a presentation layer
//! would re-render.
//!
//! ```bash
//! RUST_LOG=debug TODO_SEED=starter TODO_ID_STRATEGY=sequential cargo run -p todo
//! ```

use anyhow::Context;
use tidy_runtime::{Store, StoreConfig};
use todo::{Filter, TodoAction, TodoConfig, TodoReducer, TodoView, project};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn render(view: &TodoView) {
    for todo in &view.visible_items {
        let status = if todo.completed { "✓" } else { " " };
        println!("  [{status}] {}", todo.text);
    }
    let filters: Vec<String> = Filter::ALL_FILTERS
        .iter()
        .map(|f| {
            if *f == view.active_filter {
                format!("*{f}*")
            } else {
                f.to_string()
            }
        })
        .collect();
    println!("  {} | {}\n", view.items_left_label(), filters.join(" "));
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    println!("=== Todo Example ===\n");

    let config = TodoConfig::from_env().context("invalid TODO_* configuration")?;
    let initial = config
        .initial_state()
        .context("failed to load seed items")?;
    let env = config.environment(&initial);
    tracing::info!(
        items = initial.total_count(),
        filter = %initial.active_filter,
        "Session started"
    );

    let mut store = Store::with_config(
        initial,
        TodoReducer::new(),
        env,
        StoreConfig::default().with_warn_on_ignored(true),
    );
    render(&store.state(project));

    let first = store.state(|s| s.items.first().map(|item| item.id.clone()));

    let mut script = vec![TodoAction::Add {
        text: "water the plants".to_string(),
    }];
    if let Some(id) = first {
        script.push(TodoAction::Toggle { id });
    }
    script.extend([
        TodoAction::Reorder {
            source_index: 0,
            target_index: 1,
        },
        TodoAction::SetFilter {
            filter: Filter::Active,
        },
        TodoAction::SetFilter {
            filter: Filter::Completed,
        },
        TodoAction::ClearCompleted,
        TodoAction::SetFilter { filter: Filter::All },
        TodoAction::Delete {
            id: "no-such-item".into(),
        },
    ]);

    for action in script {
        println!("> {action:?}");
        let outcome = store.send(action);
        if let Some(reason) = outcome.ignore_reason() {
            println!("  (ignored: {reason})");
        }
        render(&store.state(project));
    }

    println!("=== Demo Complete ({} changes) ===", store.revision());
    Ok(())
}
