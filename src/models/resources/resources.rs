use serde::Serialize;

use crate::models::common::eq_update;
use crate::models::ctx::Ctx;
use crate::models::resources::{reduce, ResourcesDispatcher};
use crate::runtime::msg::{Action, ActionLoad, Event, Internal, Msg, Transition};
use crate::runtime::{EnvError, Effects, Env, UpdateWithCtx};
use crate::types::resource::ResourceRecord;

/// The resources slice of the application state.
///
/// Fetched records are stored under `TaskDataDummy`, next to the `data`
/// placeholder of the initial state. The web UI reads `TaskDataDummy`, so the
/// two names are kept apart on purpose.
#[derive(Clone, Default, PartialEq, Serialize, Debug)]
pub struct Resources {
    /// Placeholder of the initial state, never written by a fetch.
    pub data: Vec<ResourceRecord>,
    /// Records of the last successful fetch.
    #[serde(rename = "TaskDataDummy", skip_serializing_if = "Option::is_none")]
    pub task_data_dummy: Option<Vec<ResourceRecord>>,
    /// Error of the last fetch, cleared by the next successful one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<EnvError>,
}

impl Resources {
    /// The records to show: the last fetched ones, or the empty placeholder.
    pub fn result(&self) -> &[ResourceRecord] {
        self.task_data_dummy.as_deref().unwrap_or(&self.data)
    }
}

impl<E: Env + 'static> UpdateWithCtx<E> for Resources {
    fn update(&mut self, msg: &Msg, ctx: &Ctx) -> Effects {
        match msg {
            Msg::Action(Action::Load(ActionLoad::Resources)) => {
                Effects::one(ResourcesDispatcher::<E>::new(&ctx.config).effect()).unchanged()
            }
            Msg::Internal(Internal::Transition(transition)) => {
                let event = match transition {
                    Transition::FetchSuccess(resources) => Event::ResourcesFetched {
                        count: resources.len(),
                    },
                    Transition::FetchFailure(error) => Event::ResourcesFetchFailed {
                        error: error.to_owned(),
                    },
                };
                let next_resources = reduce(self, msg);
                eq_update(self, next_resources).join(Effects::msg(Msg::Event(event)).unchanged())
            }
            _ => Effects::none().unchanged(),
        }
    }
}
