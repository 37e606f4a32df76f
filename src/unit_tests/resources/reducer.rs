use crate::models::ctx::Config;
use crate::models::resources::{reduce, Resources};
use crate::runtime::msg::{Action, ActionCtx, ActionLoad, Event, Internal, Msg, Transition};
use crate::runtime::EnvError;
use crate::types::resource::ResourceRecord;
use serde_json::json;
use url::Url;

use super::resource_record;

fn transition(transition: Transition) -> Msg {
    Msg::Internal(Internal::Transition(transition))
}

fn fold(transitions: Vec<Transition>) -> Resources {
    transitions
        .into_iter()
        .map(transition)
        .fold(Resources::default(), |resources, msg| reduce(&resources, &msg))
}

#[test]
fn fetch_success_sets_task_data_dummy() {
    let resources = Resources::default();
    assert_eq!(serde_json::to_value(&resources).unwrap(), json!({ "data": [] }));

    let record = ResourceRecord {
        name: "a".to_owned(),
        description: "d".to_owned(),
        rating: 5.0,
        downloads: 10,
        yaml: "x: 1".to_owned(),
    };
    let next_resources = reduce(
        &resources,
        &transition(Transition::FetchSuccess(vec![record.to_owned()])),
    );

    assert_eq!(
        serde_json::to_value(&next_resources).unwrap(),
        json!({
            "data": [],
            "TaskDataDummy": [{
                "Name": "a",
                "Description": "d",
                "Rating": 5.0,
                "Downloads": 10,
                "YAML": "x: 1"
            }]
        })
    );
    assert!(next_resources.data.is_empty(), "placeholder must stay empty");
    assert_eq!(next_resources.result(), &[record]);
}

#[test]
fn fold_keeps_payload_of_last_success() {
    let first = vec![resource_record("git-clone")];
    let second = vec![resource_record("buildah"), resource_record("kaniko")];
    let error = EnvError::HttpStatusCode(503);

    let cases = vec![
        (vec![], None),
        (vec![Transition::FetchFailure(error.to_owned())], None),
        (vec![Transition::FetchSuccess(first.to_owned())], Some(first.to_owned())),
        (
            vec![
                Transition::FetchSuccess(first.to_owned()),
                Transition::FetchSuccess(second.to_owned()),
            ],
            Some(second.to_owned()),
        ),
        (
            vec![
                Transition::FetchSuccess(second.to_owned()),
                Transition::FetchFailure(error.to_owned()),
            ],
            Some(second.to_owned()),
        ),
        (
            vec![
                Transition::FetchSuccess(first.to_owned()),
                Transition::FetchFailure(error.to_owned()),
                Transition::FetchSuccess(vec![]),
            ],
            Some(vec![]),
        ),
    ];

    for (transitions, expected) in cases {
        let description = format!("{transitions:?}");
        let resources = fold(transitions);
        assert_eq!(resources.task_data_dummy, expected, "{description}");
        assert_eq!(
            resources.result(),
            expected.as_deref().unwrap_or_default(),
            "{description}"
        );
        assert!(resources.data.is_empty(), "{description}");
    }
}

#[test]
fn fetch_failure_sets_error_and_keeps_records() {
    let records = vec![resource_record("git-clone")];
    let resources = fold(vec![
        Transition::FetchSuccess(records.to_owned()),
        Transition::FetchFailure(EnvError::Fetch("connection refused".to_owned())),
    ]);

    assert_eq!(
        resources.error,
        Some(EnvError::Fetch("connection refused".to_owned()))
    );
    assert_eq!(resources.task_data_dummy, Some(records));
    assert_eq!(
        serde_json::to_value(&resources).unwrap()["error"],
        json!({ "code": 1, "message": "Failed to fetch: connection refused" })
    );
}

#[test]
fn fetch_success_clears_error() {
    let resources = fold(vec![
        Transition::FetchFailure(EnvError::Serde("expected value".to_owned())),
        Transition::FetchSuccess(vec![resource_record("kaniko")]),
    ]);

    assert_eq!(resources.error, None);
    assert_eq!(resources.result(), &[resource_record("kaniko")]);
}

#[test]
fn reduce_is_pure() {
    let resources = fold(vec![Transition::FetchSuccess(vec![resource_record(
        "git-clone",
    )])]);
    let snapshot = resources.to_owned();
    let msg = transition(Transition::FetchSuccess(vec![resource_record("buildah")]));

    let first = reduce(&resources, &msg);
    let second = reduce(&resources, &msg);

    assert_eq!(first, second);
    assert_eq!(resources, snapshot, "input must not be modified");
    assert_ne!(first, resources);
}

#[test]
fn reduce_ignores_other_messages() {
    let resources = fold(vec![
        Transition::FetchSuccess(vec![resource_record("git-clone")]),
        Transition::FetchFailure(EnvError::HttpStatusCode(500)),
    ]);
    let config = Config::new(Url::parse("http://hub.example").unwrap()).unwrap();
    let msgs = vec![
        Msg::Action(Action::Load(ActionLoad::Resources)),
        Msg::Action(Action::Ctx(ActionCtx::UpdateConfig(config))),
        Msg::Event(Event::ResourcesFetched { count: 3 }),
    ];

    for msg in msgs {
        assert_eq!(reduce(&resources, &msg), resources, "{msg:?}");
    }
}
