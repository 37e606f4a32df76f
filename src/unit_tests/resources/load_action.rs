use crate::models::ctx::{Config, Ctx};
use crate::models::resources::Resources;
use crate::runtime::msg::{Action, ActionLoad, Event};
use crate::runtime::{EnvError, Runtime, RuntimeAction, RuntimeEvent};
use crate::unit_tests::{
    respond_with, Response, TestEnv, EVENTS, FETCH_HANDLER, REQUESTS, STATES,
};
use assert_matches::assert_matches;
use enclose::enclose;
use hub_derive::Model;
use serde_json::json;
use url::Url;

use super::resource_record;

#[derive(Model, Clone, Debug, PartialEq)]
#[model(TestEnv)]
struct TestModel {
    ctx: Ctx,
    resources: Resources,
}

fn test_model() -> TestModel {
    TestModel {
        ctx: Ctx::new(Config::new(Url::parse("http://localhost:5000").unwrap()).unwrap()),
        resources: Resources::default(),
    }
}

fn load_resources() -> RuntimeAction<TestEnv, TestModel> {
    RuntimeAction {
        field: None,
        action: Action::Load(ActionLoad::Resources),
    }
}

fn recorded_states() -> Vec<TestModel> {
    STATES
        .read()
        .unwrap()
        .iter()
        .map(|state| state.downcast_ref::<TestModel>().unwrap().to_owned())
        .collect()
}

#[test]
fn load_resources_success() {
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    let body = json!([
        {
            "Name": "git-clone",
            "Description": "git-clone description",
            "Rating": 4.5,
            "Downloads": 42,
            "YAML": "kind: Task\nmetadata:\n  name: git-clone\n"
        }
    ]);
    *FETCH_HANDLER.write().unwrap() = respond_with(Response::ok(body.to_string()));
    let (runtime, rx) = Runtime::<TestEnv, _>::new(test_model(), vec![], 1000);
    TestEnv::run_with_runtime(
        rx,
        runtime.clone(),
        enclose!((runtime) move || {
            runtime.dispatch(load_resources());
        }),
    );

    let events = EVENTS.read().unwrap();
    assert_eq!(events.len(), 2);
    assert_matches!(
        events[0]
            .downcast_ref::<RuntimeEvent<TestEnv, TestModel>>()
            .unwrap(),
        RuntimeEvent::NewState(fields) if *fields == vec![TestModelField::Resources]
    );
    assert_eq!(
        events[1]
            .downcast_ref::<RuntimeEvent<TestEnv, TestModel>>()
            .unwrap(),
        &RuntimeEvent::CoreEvent(Event::ResourcesFetched { count: 1 })
    );
    let states = recorded_states();
    assert_eq!(states.len(), 2);
    assert_eq!(states[0].resources, Resources::default());
    assert_eq!(
        states[1].resources,
        Resources {
            data: vec![],
            task_data_dummy: Some(vec![resource_record("git-clone")]),
            error: None,
        }
    );
    assert_eq!(REQUESTS.read().unwrap().len(), 1);
}

#[test]
fn load_resources_failure() {
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    *FETCH_HANDLER.write().unwrap() = respond_with(Response::status(500, ""));
    let (runtime, rx) = Runtime::<TestEnv, _>::new(test_model(), vec![], 1000);
    TestEnv::run_with_runtime(
        rx,
        runtime.clone(),
        enclose!((runtime) move || {
            runtime.dispatch(load_resources());
        }),
    );

    let events = EVENTS.read().unwrap();
    assert_eq!(events.len(), 2);
    assert_matches!(
        events[0]
            .downcast_ref::<RuntimeEvent<TestEnv, TestModel>>()
            .unwrap(),
        RuntimeEvent::NewState(fields) if *fields == vec![TestModelField::Resources]
    );
    assert_eq!(
        events[1]
            .downcast_ref::<RuntimeEvent<TestEnv, TestModel>>()
            .unwrap(),
        &RuntimeEvent::CoreEvent(Event::ResourcesFetchFailed {
            error: EnvError::HttpStatusCode(500)
        })
    );
    let states = recorded_states();
    assert_eq!(states.len(), 2);
    assert_eq!(states[1].resources.error, Some(EnvError::HttpStatusCode(500)));
    assert_eq!(states[1].resources.task_data_dummy, None);
    assert!(states[1].resources.result().is_empty());
}

#[test]
fn load_resources_twice_without_deduplication() {
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    *FETCH_HANDLER.write().unwrap() =
        respond_with(Response::ok(r#"[{"Name":"buildah"}]"#));
    let (runtime, rx) = Runtime::<TestEnv, _>::new(test_model(), vec![], 1000);
    TestEnv::run_with_runtime(
        rx,
        runtime.clone(),
        enclose!((runtime) move || {
            runtime.dispatch(load_resources());
            runtime.dispatch(load_resources());
        }),
    );

    assert_eq!(REQUESTS.read().unwrap().len(), 2);
    let events = EVENTS.read().unwrap();
    let events = events
        .iter()
        .map(|event| {
            event
                .downcast_ref::<RuntimeEvent<TestEnv, TestModel>>()
                .unwrap()
        })
        .collect::<Vec<_>>();
    // The second completion reduces to an equal state, so only its event shows.
    assert_eq!(events.len(), 3);
    assert_matches!(events[0], RuntimeEvent::NewState(_));
    assert_eq!(
        events[1],
        &RuntimeEvent::CoreEvent(Event::ResourcesFetched { count: 1 })
    );
    assert_eq!(events[2], events[1]);
    let states = recorded_states();
    assert_eq!(states.len(), 2);
    assert_eq!(states[1].resources.result().len(), 1);
}

#[test]
fn load_resources_on_field() {
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    *FETCH_HANDLER.write().unwrap() = respond_with(Response::ok("[]"));
    let (runtime, rx) = Runtime::<TestEnv, _>::new(test_model(), vec![], 1000);
    TestEnv::run_with_runtime(
        rx,
        runtime.clone(),
        enclose!((runtime) move || {
            runtime.dispatch(RuntimeAction {
                field: Some(TestModelField::Resources),
                action: Action::Load(ActionLoad::Resources),
            });
        }),
    );

    let states = recorded_states();
    assert_eq!(states.len(), 2);
    assert_eq!(states[1].resources.task_data_dummy, Some(vec![]));
    assert_eq!(
        REQUESTS.read().unwrap()[0].url,
        "http://localhost:5000/resources"
    );
}

#[test]
fn load_resources_on_ctx_field_does_nothing() {
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    let (runtime, rx) = Runtime::<TestEnv, _>::new(test_model(), vec![], 1000);
    TestEnv::run_with_runtime(
        rx,
        runtime.clone(),
        enclose!((runtime) move || {
            runtime.dispatch(RuntimeAction {
                field: Some(TestModelField::Ctx),
                action: Action::Load(ActionLoad::Resources),
            });
        }),
    );

    assert!(EVENTS.read().unwrap().is_empty());
    assert!(REQUESTS.read().unwrap().is_empty());
    assert_eq!(recorded_states(), vec![test_model()]);
}
