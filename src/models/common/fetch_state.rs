use crate::runtime::{Dispatchable, Env, EnvError, Store, Thunk};
use futures::Future;
use serde::Serialize;

/// Lifecycle of an asynchronous data-fetch. `Idle` until the first call; a new
/// call restarts at `Loading` regardless of the previous terminal state.
#[derive(Clone, PartialEq, Serialize, Debug)]
#[serde(tag = "type", content = "content")]
pub enum FetchState {
    Idle,
    Loading,
    Success,
    Err(EnvError),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }
    pub fn is_err(&self) -> bool {
        matches!(self, FetchState::Err(_))
    }
}

impl Default for FetchState {
    fn default() -> Self {
        FetchState::Idle
    }
}

/// Wraps an async body in fetch-state bookkeeping for any feature: `Loading`
/// is dispatched before the body runs, `Success` or `Err` after. A failing
/// body is converted into state, so the produced thunk itself resolves `Ok`.
pub fn with_fetch_state<E, S, A, F, FUT>(
    set_fetch_state: fn(FetchState) -> A,
    thunk: F,
) -> Thunk<E, S, A>
where
    E: Env + Send + 'static,
    S: Send + Sync + 'static,
    A: Send + Sync + 'static,
    F: FnOnce(Store<E, S, A>) -> FUT + Send + 'static,
    FUT: Future<Output = Result<(), EnvError>> + Send + 'static,
{
    Thunk::new(move |store| async move {
        store
            .dispatch(Dispatchable::Action(set_fetch_state(FetchState::Loading)))
            .await?;
        match thunk(store.clone()).await {
            Ok(()) => {
                store
                    .dispatch(Dispatchable::Action(set_fetch_state(FetchState::Success)))
                    .await
            }
            Err(error) => {
                store
                    .dispatch(Dispatchable::Action(set_fetch_state(FetchState::Err(error))))
                    .await
            }
        }
    })
}
