use derivative::Derivative;
use serde::Serialize;

#[derive(Derivative, Clone, PartialEq, Serialize, Debug)]
#[derivative(Default)]
#[serde(tag = "type", content = "content")]
pub enum Loadable<R, E> {
    #[derivative(Default)]
    Loading,
    Ready(R),
    Err(E),
}

impl<R, E> Loadable<R, E> {
    #[inline]
    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }
    #[inline]
    pub fn ready(&self) -> Option<&R> {
        match self {
            Loadable::Ready(ready) => Some(ready),
            _ => None,
        }
    }
}

impl<R, E> From<Result<R, E>> for Loadable<R, E> {
    fn from(result: Result<R, E>) -> Self {
        match result {
            Ok(ready) => Loadable::Ready(ready),
            Err(error) => Loadable::Err(error),
        }
    }
}
