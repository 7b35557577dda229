//! End-to-end tests for the dispatch bridge: futures in, actions out.

use futures_lite::future::{self, block_on};
use progress_state::config::{ENV_EMIT_PENDING, ENV_LABEL_PREFIX, apply_env_overrides_with};
use progress_state::test_utils::{RecordingSink, init_test_logging};
use progress_state::{Action, BridgeConfig, Extras, LogLevel, Progress, Source, Thunk, all, run_with_dispatch};
use serde::Serialize;
use serde_json::json;
use std::cell::RefCell;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize)]
struct User {
    id: u32,
    name: String,
}

async fn fetch_user(id: u32) -> Result<User, String> {
    future::yield_now().await;
    if id == 0 {
        Err("no such user".to_string())
    } else {
        Ok(User {
            id,
            name: format!("user-{id}"),
        })
    }
}

fn request_extras(id: &str) -> Extras {
    let mut extras = Extras::new();
    extras.insert("requestId".into(), json!(id));
    extras
}

#[test]
fn reducer_style_consumer_sees_full_lifecycle() {
    init_test_logging();

    // A reducer keeps the latest progress per action type.
    let state: RefCell<Option<Progress<User, String>>> = RefCell::new(Some(Progress::none()));
    let history = RefCell::new(Vec::new());
    let mut sink = |action: Action<User, String>| {
        history.borrow_mut().push(action.progress.status().as_str());
        *state.borrow_mut() = Some(action.progress);
    };

    let fut = run_with_dispatch(
        "users/fetch",
        Source::ready(fetch_user(7)),
        request_extras("r-7"),
        &mut sink,
    );
    assert!(state.borrow().as_ref().is_some_and(Progress::is_pending));

    let out = block_on(fut);
    let expected = User {
        id: 7,
        name: "user-7".into(),
    };
    assert_eq!(out, Progress::resolve(expected.clone()));
    assert_eq!(state.borrow().clone(), Some(Progress::resolve(expected)));
    assert_eq!(*history.borrow(), ["pending", "resolved"]);
}

#[test]
fn failure_is_reported_and_returned() {
    init_test_logging();
    let mut sink = RecordingSink::<User, String>::new();
    let out = block_on(run_with_dispatch(
        "users/fetch",
        Source::deferred(|| fetch_user(0)),
        request_extras("r-0"),
        &mut sink,
    ));

    assert_eq!(out.error().map(String::as_str), Some("no such user"));
    let wire: Vec<_> = sink
        .actions()
        .iter()
        .map(|a| serde_json::to_value(a).expect("encode"))
        .collect();
    assert_eq!(
        wire,
        [
            json!({ "requestId": "r-0", "type": "users/fetch", "progress": { "status": "pending" } }),
            json!({
                "requestId": "r-0",
                "type": "users/fetch",
                "progress": { "status": "rejected", "error": "no such user" }
            }),
        ]
    );
}

#[test]
fn bridged_results_compose_with_combinators() {
    let mut sink = RecordingSink::<User, String>::new();
    let a = block_on(Thunk::new("a", Source::ready(fetch_user(1))).run(&mut sink));
    let b = block_on(Thunk::new("b", Source::ready(fetch_user(2))).run(&mut sink));
    let c = block_on(Thunk::new("c", Source::ready(fetch_user(0))).run(&mut sink));

    let names = all([a.clone(), b]).map(|users| {
        users
            .iter()
            .map(|u| u.name.clone())
            .collect::<Vec<_>>()
            .join(",")
    });
    assert_eq!(names, Progress::resolve("user-1,user-2".to_string()));

    let failed = all([a, c.clone()]);
    assert!(Arc::ptr_eq(
        failed.shared_error().expect("rejected"),
        c.shared_error().expect("rejected"),
    ));
    assert_eq!(sink.actions().len(), 6);
}

#[test]
fn env_configured_bridge() {
    let mut config = BridgeConfig::default();
    apply_env_overrides_with(&mut config, |name| match name {
        n if n == ENV_LABEL_PREFIX => Some("admin".to_string()),
        n if n == ENV_EMIT_PENDING => Some("off".to_string()),
        _ => None,
    })
    .expect("valid env");
    let config = config.transition_level(LogLevel::Trace);

    let mut sink = RecordingSink::<User, String>::new();
    let out = block_on(
        Thunk::new("users/fetch", Source::ready(fetch_user(3)))
            .with_extras(request_extras("r-3"))
            .with_config(config)
            .run(&mut sink),
    );
    assert!(out.is_resolved());
    assert_eq!(sink.statuses(), ["resolved"]);
    assert_eq!(sink.actions()[0].kind, "admin/users/fetch");
    assert_eq!(sink.actions()[0].extras.get("requestId"), Some(&json!("r-3")));
}

#[test]
fn concurrent_bridges_are_independent() {
    let log = RefCell::new(Vec::new());
    let mut left = |a: Action<User, String>| log.borrow_mut().push(format!("{}:{}", a.kind, a.progress));
    let mut right = |a: Action<User, String>| log.borrow_mut().push(format!("{}:{}", a.kind, a.progress));

    let fl = Thunk::new("left", Source::ready(fetch_user(1))).run(&mut left);
    let fr = Thunk::new("right", Source::ready(fetch_user(0))).run(&mut right);
    assert_eq!(*log.borrow(), ["left:pending", "right:pending"]);

    let (l, r) = block_on(future::zip(fl, fr));
    assert!(l.is_resolved());
    assert!(r.is_rejected());
    let log = log.into_inner();
    assert_eq!(log.len(), 4);
    assert!(log.contains(&"left:resolved".to_string()));
    assert!(log.contains(&"right:rejected".to_string()));
}
