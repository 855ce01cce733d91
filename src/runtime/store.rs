use crate::runtime::{Dispatchable, Env, ThunkFuture};
use derivative::Derivative;
use futures::channel::mpsc::{channel, Receiver, Sender};
use futures::{future, FutureExt};
use serde::Serialize;
use std::marker::PhantomData;
use std::sync::{Arc, LockResult, RwLock, RwLockReadGuard};
use tracing::trace;

pub type Reducer<S, A> = fn(&S, &A) -> S;

#[derive(Clone, PartialEq, Eq, Serialize, Debug)]
#[serde(tag = "name")]
pub enum StoreEvent {
    NewState,
}

/// Reduce-and-dispatch primitive extended with thunk support.
///
/// The latest committed state lives in a single `Arc<RwLock<_>>` cell which is
/// written only by the reducer step, so [`Store::state`] always reflects the
/// most recent completed update, including updates dispatched from inside a
/// still-pending thunk. Clones share the cell and the event sink.
#[derive(Derivative)]
#[derivative(Clone(bound = ""))]
pub struct Store<E: Env, S, A> {
    state: Arc<RwLock<S>>,
    reducer: Reducer<S, A>,
    tx: Sender<StoreEvent>,
    env: PhantomData<E>,
}

impl<E, S, A> Store<E, S, A>
where
    E: Env + Send + 'static,
    S: Send + Sync + 'static,
    A: Send + Sync + 'static,
{
    pub fn new(
        reducer: Reducer<S, A>,
        initial_state: S,
        buffer: usize,
    ) -> (Self, Receiver<StoreEvent>) {
        let (tx, rx) = channel(buffer);
        let store = Store {
            state: Arc::new(RwLock::new(initial_state)),
            reducer,
            tx,
            env: PhantomData,
        };
        (store, rx)
    }
    pub fn state(&self) -> LockResult<RwLockReadGuard<S>> {
        self.state.read()
    }
    /// Plain actions are folded into the state before this returns and resolve
    /// immediately; thunks are invoked with a clone of this store and their
    /// pending future is handed back to the caller.
    pub fn dispatch(&self, dispatchable: Dispatchable<E, S, A>) -> ThunkFuture {
        match dispatchable {
            Dispatchable::Action(action) => {
                self.reduce(&action);
                future::ok(()).boxed()
            }
            Dispatchable::Thunk(thunk) => thunk.run(self.clone()),
        }
    }
    /// Fire-and-forget variant of [`Store::dispatch`] for callers which cannot
    /// await, e.g. UI event handlers. An error the thunk did not convert into
    /// state is logged and dropped.
    pub fn dispatch_detached(&self, dispatchable: Dispatchable<E, S, A>) {
        E::exec_concurrent(self.dispatch(dispatchable).map(|result| {
            if let Err(error) = result {
                trace!("detached dispatch failed: {error}");
            }
        }));
    }
    fn reduce(&self, action: &A) {
        {
            let mut state = self.state.write().expect("state write failed");
            *state = (self.reducer)(&state, action);
        }
        self.emit(StoreEvent::NewState);
    }
    fn emit(&self, event: StoreEvent) {
        // a store without a live subscriber is still usable
        if self.tx.clone().try_send(event).is_err() {
            trace!("store event dropped");
        }
    }
}
