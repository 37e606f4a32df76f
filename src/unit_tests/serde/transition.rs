use crate::runtime::msg::Transition;
use crate::runtime::EnvError;
use crate::types::resource::ResourceRecord;
use serde_json::json;

#[test]
fn transition_fetch_success() {
    let transition = Transition::FetchSuccess(vec![ResourceRecord {
        name: "git-clone".to_owned(),
        description: "d".to_owned(),
        rating: 1.0,
        downloads: 2,
        yaml: "y".to_owned(),
    }]);
    assert_eq!(
        serde_json::to_value(transition).unwrap(),
        json!({
            "type": "FETCH_SUCCESS",
            "payload": [{
                "Name": "git-clone",
                "Description": "d",
                "Rating": 1.0,
                "Downloads": 2,
                "YAML": "y"
            }]
        })
    );
}

#[test]
fn transition_fetch_failure() {
    assert_eq!(
        serde_json::to_value(Transition::FetchFailure(EnvError::HttpStatusCode(503))).unwrap(),
        json!({
            "type": "FETCH_FAILURE",
            "payload": { "code": 2, "message": "Unexpected HTTP status code: 503" }
        })
    );
}
