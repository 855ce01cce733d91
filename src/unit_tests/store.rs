use crate::runtime::{Dispatchable, EnvError, Store, StoreEvent, Thunk};
use crate::unit_tests::TestEnv;
use enclose::enclose;
use futures::{future, StreamExt};

#[derive(Clone, PartialEq, Debug)]
enum CounterAction {
    Add(u32),
}

fn reduce(state: &u32, action: &CounterAction) -> u32 {
    match action {
        CounterAction::Add(value) => state + value,
    }
}

#[test]
fn plain_action_is_applied_before_dispatch_returns() {
    let (store, _rx) = Store::<TestEnv, u32, CounterAction>::new(reduce, 0, 100);
    let _ = store.dispatch(Dispatchable::Action(CounterAction::Add(3)));
    assert_eq!(*store.state().unwrap(), 3);
}

#[test]
fn same_action_twice_is_applied_twice() {
    let (store, _rx) = Store::<TestEnv, u32, CounterAction>::new(reduce, 0, 100);
    let _ = store.dispatch(Dispatchable::Action(CounterAction::Add(2)));
    let _ = store.dispatch(Dispatchable::Action(CounterAction::Add(2)));
    assert_eq!(*store.state().unwrap(), 4);
}

#[test]
fn clones_share_the_state_cell() {
    let (store, _rx) = Store::<TestEnv, u32, CounterAction>::new(reduce, 0, 100);
    let dispatch_from_clone = enclose!((store) move || {
        let _ = store.dispatch(Dispatchable::Action(CounterAction::Add(2)));
    });
    dispatch_from_clone();
    assert_eq!(*store.state().unwrap(), 2);
}

#[test]
fn nested_dispatch_is_visible_before_the_first_await() {
    let (store, _rx) = Store::<TestEnv, u32, CounterAction>::new(reduce, 0, 100);
    let thunk = Thunk::new(|store: Store<TestEnv, u32, CounterAction>| async move {
        let _ = store.dispatch(Dispatchable::Action(CounterAction::Add(1)));
        assert_eq!(*store.state().unwrap(), 1);
        future::ready(()).await;
        store.dispatch(Dispatchable::Action(CounterAction::Add(1))).await
    });
    TestEnv::run(store.dispatch(Dispatchable::Thunk(thunk))).unwrap();
    assert_eq!(*store.state().unwrap(), 2);
}

#[test]
fn unconverted_thunk_error_propagates_to_the_dispatch_caller() {
    let (store, _rx) = Store::<TestEnv, u32, CounterAction>::new(reduce, 0, 100);
    let thunk = Thunk::new(|_store: Store<TestEnv, u32, CounterAction>| async {
        Err(EnvError::Other("boom".to_owned()))
    });
    let result = TestEnv::run(store.dispatch(thunk.into()));
    assert_eq!(result, Err(EnvError::Other("boom".to_owned())));
    assert_eq!(*store.state().unwrap(), 0);
}

#[test]
fn new_state_is_emitted_per_reduction() {
    let (store, rx) = Store::<TestEnv, u32, CounterAction>::new(reduce, 0, 100);
    let _ = store.dispatch(Dispatchable::Action(CounterAction::Add(1)));
    let _ = store.dispatch(Dispatchable::Action(CounterAction::Add(1)));
    drop(store);
    let events = TestEnv::run(rx.collect::<Vec<_>>());
    assert_eq!(events, vec![StoreEvent::NewState, StoreEvent::NewState]);
}

#[test]
fn dispatch_detached_drives_the_thunk() {
    let (store, _rx) = Store::<TestEnv, u32, CounterAction>::new(reduce, 0, 100);
    let thunk = Thunk::new(|store: Store<TestEnv, u32, CounterAction>| async move {
        store.dispatch(Dispatchable::Action(CounterAction::Add(5))).await
    });
    store.dispatch_detached(Dispatchable::Thunk(thunk));
    assert_eq!(*store.state().unwrap(), 5);
}

#[test]
fn dispatch_detached_drops_an_unconverted_error() {
    let (store, _rx) = Store::<TestEnv, u32, CounterAction>::new(reduce, 0, 100);
    let thunk = Thunk::new(|_store: Store<TestEnv, u32, CounterAction>| async {
        Err(EnvError::Other("boom".to_owned()))
    });
    store.dispatch_detached(Dispatchable::Thunk(thunk));
    assert_eq!(*store.state().unwrap(), 0);
}
