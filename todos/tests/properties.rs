//! Property-based tests for the todo reducer and selectors.
//!
//! These drive the state machine with arbitrary action sequences and
//! check the structural invariants that must hold in every reachable
//! state.

use proptest::prelude::*;
use todoflow_core::reducer::Reducer;
use todoflow_todos::{
    FilterMode, TodoAction, TodoEnvironment, TodoId, TodoReducer, TodoState, select,
};

fn apply(state: &mut TodoState, action: TodoAction) {
    let _ = TodoReducer::new().reduce(state, action, &TodoEnvironment);
}

fn run(actions: Vec<TodoAction>) -> TodoState {
    let mut state = TodoState::new();
    for action in actions {
        apply(&mut state, action);
    }
    state
}

fn arb_action() -> impl Strategy<Value = TodoAction> {
    prop_oneof![
        "[ a-z]{0,12}".prop_map(|text| TodoAction::Add { text }),
        (0u64..20).prop_map(|id| TodoAction::Delete { id: TodoId::new(id) }),
        ((0u64..20), "[a-z]{0,8}").prop_map(|(id, text)| TodoAction::Edit {
            id: TodoId::new(id),
            text,
        }),
        (0u64..20).prop_map(|id| TodoAction::Complete { id: TodoId::new(id) }),
        Just(TodoAction::CompleteAll),
        Just(TodoAction::ClearCompleted),
    ]
}

fn arb_actions() -> impl Strategy<Value = Vec<TodoAction>> {
    proptest::collection::vec(arb_action(), 0..40)
}

proptest! {
    /// Ids are pairwise distinct in every reachable state.
    #[test]
    fn ids_are_always_distinct(actions in arb_actions()) {
        let state = run(actions);
        let mut ids: Vec<TodoId> = state.todos.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), state.len());
    }

    /// A successful add assigns an id strictly greater than every id
    /// currently in the list (0 on an empty list).
    #[test]
    fn new_ids_are_strictly_increasing(actions in arb_actions()) {
        let mut state = run(actions);
        let old_max = state.todos.iter().map(|t| t.id).max();

        apply(&mut state, TodoAction::Add { text: "fresh".to_string() });

        let new_id = state.todos.last().map(|t| t.id);
        match old_max {
            Some(max) => prop_assert!(new_id > Some(max)),
            None => prop_assert_eq!(new_id, Some(TodoId::new(0))),
        }
    }

    /// active_count + completed_count == len in every reachable state,
    /// under every filter.
    #[test]
    fn counts_always_partition(actions in arb_actions()) {
        let state = run(actions);
        for filter in FilterMode::MODES {
            let summary = select(&state, filter);
            prop_assert_eq!(
                summary.active_count + summary.completed_count,
                state.len()
            );
        }
    }

    /// ACTIVE and COMPLETED are disjoint and their union is ALL.
    #[test]
    fn filters_partition_the_visible_set(actions in arb_actions()) {
        let state = run(actions);
        let active = select(&state, FilterMode::Active).visible;
        let completed = select(&state, FilterMode::Completed).visible;
        let all = select(&state, FilterMode::All).visible;

        prop_assert_eq!(active.len() + completed.len(), all.len());
        for t in &active {
            prop_assert!(!completed.contains(t));
        }
        for t in &all {
            prop_assert!(active.contains(t) || completed.contains(t));
        }
    }

    /// Toggling the same id twice is the identity, whether or not the
    /// id matches anything.
    #[test]
    fn complete_twice_is_identity(actions in arb_actions(), id in 0u64..25) {
        let state = run(actions);
        let mut toggled = state.clone();
        apply(&mut toggled, TodoAction::Complete { id: TodoId::new(id) });
        apply(&mut toggled, TodoAction::Complete { id: TodoId::new(id) });
        prop_assert_eq!(toggled, state);
    }

    /// CompleteAll clears everything iff everything was already
    /// complete, otherwise completes everything.
    #[test]
    fn complete_all_duality(actions in arb_actions()) {
        let state = run(actions);
        let was_all_complete = state.all_complete();

        let mut next = state.clone();
        apply(&mut next, TodoAction::CompleteAll);

        if was_all_complete {
            prop_assert!(next.todos.iter().all(|t| !t.completed));
        } else {
            prop_assert!(next.todos.iter().all(|t| t.completed));
        }
    }

    /// Editing every todo to its current text leaves the state
    /// structurally equivalent.
    #[test]
    fn edit_to_same_text_is_identity(actions in arb_actions()) {
        let state = run(actions);
        let mut edited = state.clone();
        for (id, text) in state.todos.iter().map(|t| (t.id, t.text.clone())) {
            apply(&mut edited, TodoAction::Edit { id, text });
        }
        prop_assert_eq!(edited, state);
    }

    /// Transitions never reorder the survivors: after any single
    /// action, the surviving ids appear in the same relative order.
    #[test]
    fn survivor_order_is_stable(actions in arb_actions(), action in arb_action()) {
        let state = run(actions);
        let mut next = state.clone();
        apply(&mut next, action);

        let old_ids: Vec<TodoId> = state.todos.iter().map(|t| t.id).collect();
        let surviving: Vec<TodoId> = next
            .todos
            .iter()
            .map(|t| t.id)
            .filter(|id| old_ids.contains(id))
            .collect();
        let expected: Vec<TodoId> = old_ids
            .into_iter()
            .filter(|id| next.contains(*id))
            .collect();
        prop_assert_eq!(surviving, expected);
    }
}
