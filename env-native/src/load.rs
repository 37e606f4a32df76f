use futures::channel::mpsc::Receiver;
use futures::StreamExt;
use hub_core::models::common::Loadable;
use hub_core::runtime::msg::{Action, ActionLoad, Event};
use hub_core::runtime::{EnvError, Runtime, RuntimeAction, RuntimeEvent};
use hub_core::types::resource::{ResourceRecord, Tag};
use tracing::debug;

use crate::{NativeEnv, NativeModel, NativeModelField};

/// Dispatches a resources load and waits for the event reporting its outcome.
///
/// Resolves to `None` if the event stream ends first.
pub async fn load_resources(
    runtime: &Runtime<NativeEnv, NativeModel>,
    rx: &mut Receiver<RuntimeEvent<NativeEnv, NativeModel>>,
) -> Option<Event> {
    runtime.dispatch(RuntimeAction {
        field: None,
        action: Action::Load(ActionLoad::Resources),
    });
    while let Some(event) = rx.next().await {
        match event {
            RuntimeEvent::NewState(fields) => debug!(?fields, "State changed"),
            RuntimeEvent::CoreEvent(event) => return Some(event),
        }
    }
    None
}

/// Dispatches a load of the resource with `id` and waits until it settles.
pub async fn load_resource_details(
    runtime: &Runtime<NativeEnv, NativeModel>,
    rx: &mut Receiver<RuntimeEvent<NativeEnv, NativeModel>>,
    id: u64,
) -> Option<Result<ResourceRecord, EnvError>> {
    runtime.dispatch(RuntimeAction {
        field: None,
        action: Action::Load(ActionLoad::ResourceDetails(id)),
    });
    wait_for_field(runtime, rx, NativeModelField::ResourceDetails, |model| {
        settled(model.resource_details.resource.as_ref()?)
    })
    .await
}

/// Dispatches a tags load and waits until it settles.
pub async fn load_tags(
    runtime: &Runtime<NativeEnv, NativeModel>,
    rx: &mut Receiver<RuntimeEvent<NativeEnv, NativeModel>>,
) -> Option<Result<Vec<Tag>, EnvError>> {
    runtime.dispatch(RuntimeAction {
        field: None,
        action: Action::Load(ActionLoad::Tags),
    });
    wait_for_field(runtime, rx, NativeModelField::Tags, |model| {
        settled(model.tags.content.as_ref()?)
    })
    .await
}

fn settled<R: Clone>(loadable: &Loadable<R, EnvError>) -> Option<Result<R, EnvError>> {
    match loadable {
        Loadable::Loading => None,
        Loadable::Ready(ready) => Some(Ok(ready.to_owned())),
        Loadable::Err(error) => Some(Err(error.to_owned())),
    }
}

async fn wait_for_field<T>(
    runtime: &Runtime<NativeEnv, NativeModel>,
    rx: &mut Receiver<RuntimeEvent<NativeEnv, NativeModel>>,
    field: NativeModelField,
    read: impl Fn(&NativeModel) -> Option<T>,
) -> Option<T> {
    while let Some(event) = rx.next().await {
        match event {
            RuntimeEvent::NewState(fields) if fields.contains(&field) => {
                debug!(?fields, "State changed");
                let model = runtime.model().ok()?;
                if let Some(result) = read(&*model) {
                    return Some(result);
                }
            }
            RuntimeEvent::NewState(fields) => debug!(?fields, "State changed"),
            RuntimeEvent::CoreEvent(event) => debug!(?event, "Event"),
        }
    }
    None
}
