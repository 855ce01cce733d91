use crate::runtime::{Env, EnvError, Store};
use derive_more::From;
use futures::future::BoxFuture;
use futures::{Future, FutureExt};

pub type ThunkFuture = BoxFuture<'static, Result<(), EnvError>>;

/// A deferred action: instead of a plain value it carries a function which is
/// given the [`Store`] handle (the recursive `dispatch` plus `state()`) and
/// resolves once every dispatch nested inside it has been applied.
pub struct Thunk<E: Env, S, A> {
    thunk: Box<dyn FnOnce(Store<E, S, A>) -> ThunkFuture + Send + 'static>,
}

impl<E, S, A> Thunk<E, S, A>
where
    E: Env + Send + 'static,
    S: Send + Sync + 'static,
    A: Send + Sync + 'static,
{
    pub fn new<F, FUT>(thunk: F) -> Self
    where
        F: FnOnce(Store<E, S, A>) -> FUT + Send + 'static,
        FUT: Future<Output = Result<(), EnvError>> + Send + 'static,
    {
        Thunk {
            thunk: Box::new(move |store| thunk(store).boxed()),
        }
    }
    pub(crate) fn run(self, store: Store<E, S, A>) -> ThunkFuture {
        (self.thunk)(store)
    }
}

/// Either a plain action, folded synchronously into the state, or a [`Thunk`].
/// Resolved by matching on the variant, never by inspecting the value.
#[derive(From)]
pub enum Dispatchable<E: Env, S, A> {
    #[from(ignore)]
    Action(A),
    Thunk(Thunk<E, S, A>),
}
