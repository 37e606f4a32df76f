use crate::models::resources::Resources;
use crate::runtime::msg::{Internal, Msg, Transition};

/// Computes the next resources slice from the current one and a message.
///
/// Never mutates `resources`, never fails and performs no I/O. Messages other
/// than a [`Transition`] leave the slice as it is.
pub fn reduce(resources: &Resources, msg: &Msg) -> Resources {
    match msg {
        Msg::Internal(Internal::Transition(transition)) => match transition {
            Transition::FetchSuccess(records) => Resources {
                task_data_dummy: Some(records.to_owned()),
                error: None,
                ..resources.to_owned()
            },
            Transition::FetchFailure(error) => Resources {
                error: Some(error.to_owned()),
                ..resources.to_owned()
            },
        },
        _ => resources.to_owned(),
    }
}
