use crate::models::ctx::Ctx;
use crate::runtime::msg::Msg;
use crate::runtime::{Effect, Effects, Env};
#[cfg(debug_assertions)]
use core::fmt::Debug;
use serde::{Deserialize, Serialize};

/// The whole application state as seen by the [`Runtime`].
///
/// Usually implemented with `#[derive(Model)]`, which also generates the
/// `Field` enum naming each state slice.
///
/// [`Runtime`]: crate::runtime::Runtime
pub trait Model<E: Env>: Clone {
    #[cfg(not(debug_assertions))]
    type Field: Send + Sync + Serialize + for<'de> Deserialize<'de>;
    #[cfg(debug_assertions)]
    type Field: Debug + Send + Sync + Serialize + for<'de> Deserialize<'de>;

    /// Updates every slice, returning the effects and the slices that changed.
    fn update(&mut self, msg: &Msg) -> (Vec<Effect>, Vec<Self::Field>);
    /// Updates only the given slice.
    fn update_field(&mut self, msg: &Msg, field: &Self::Field) -> (Vec<Effect>, Vec<Self::Field>);
}

pub trait Update<E: Env> {
    fn update(&mut self, msg: &Msg) -> Effects;
}

/// A state slice that reads the shared [`Ctx`] while updating.
pub trait UpdateWithCtx<E: Env> {
    fn update(&mut self, msg: &Msg, ctx: &Ctx) -> Effects;
}
