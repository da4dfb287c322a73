//! Child components embedded in a parent through lenses.

use std::sync::Arc;

use marketframe::ui::mvi::{
    update_component_child, update_global_component_child, Dispatcher, Immutable, Lens, Merge,
    NoGlobal, Runtime, Task, Update,
};
use parking_lot::Mutex;

#[derive(Debug, Clone, Default, PartialEq)]
struct Counter {
    value: u32,
}

#[derive(Debug, Clone, PartialEq)]
struct Parent {
    counter: Immutable<Counter>,
    notes: Immutable<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
struct Shell {
    parent: Immutable<Parent>,
    title: Immutable<String>,
}

#[derive(Debug)]
enum CounterMsg {
    Add(u32),
    AddLater(u32),
    BumpLater,
    Announce,
}

#[derive(Debug)]
enum ParentMsg {
    Shared(CounterMsg),
    Local(CounterMsg),
}

fn counter<G: Send + 'static>(state: Immutable<Counter>, msg: CounterMsg) -> Update<Counter, CounterMsg, G> {
    match msg {
        CounterMsg::Add(n) => Update::new(state.with(|c| c.value += n)),
        CounterMsg::AddLater(n) => Update::with_task(
            state,
            Task::new(move |_, dispatcher: Dispatcher<CounterMsg, G>| async move {
                dispatcher.dispatch(CounterMsg::Add(n));
                Merge::keep()
            }),
        ),
        CounterMsg::BumpLater => Update::with_task(
            state,
            Task::apply(|latest: Immutable<Counter>| latest.with(|c| c.value += 1)),
        ),
        CounterMsg::Announce => Update::new(state),
    }
}

fn announcing_counter(state: Immutable<Counter>, msg: CounterMsg) -> Update<Counter, CounterMsg, String> {
    match msg {
        CounterMsg::Announce => Update::with_task(
            state,
            Task::new(|s: Immutable<Counter>, dispatcher: Dispatcher<CounterMsg, String>| async move {
                dispatcher.dispatch_global(format!("value={}", s.value));
                Merge::keep()
            }),
        ),
        other => counter(state, other),
    }
}

fn counter_of(parent: &Parent) -> &Immutable<Counter> {
    &parent.counter
}

fn counter_of_mut(parent: &mut Parent) -> &mut Immutable<Counter> {
    &mut parent.counter
}

fn parent_of(shell: &Shell) -> &Immutable<Parent> {
    &shell.parent
}

fn parent_of_mut(shell: &mut Shell) -> &mut Immutable<Parent> {
    &mut shell.parent
}

fn counter_lens() -> Lens<Parent, Counter> {
    Lens::field(counter_of, counter_of_mut)
}

fn parent_update(state: Immutable<Parent>, msg: ParentMsg) -> Update<Parent, ParentMsg, String> {
    match msg {
        ParentMsg::Shared(msg) => update_global_component_child(
            state,
            &counter_lens(),
            announcing_counter,
            msg,
            ParentMsg::Shared,
        ),
        ParentMsg::Local(msg) => update_component_child(
            state,
            &counter_lens(),
            counter::<NoGlobal>,
            msg,
            ParentMsg::Local,
        ),
    }
}

fn parent(value: u32) -> Immutable<Parent> {
    Immutable::new(Parent {
        counter: Immutable::new(Counter { value }),
        notes: Immutable::new(vec!["keep me".to_string()]),
    })
}

fn runtime(initial: Immutable<Parent>) -> (Runtime<Parent, ParentMsg, String>, Arc<Mutex<Vec<String>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = {
        let seen = Arc::clone(&seen);
        move |msg: String| seen.lock().push(msg)
    };
    (Runtime::new(initial, parent_update, sink), seen)
}

#[test]
fn child_update_leaves_siblings_shared() {
    let before = parent(0);
    let (after, tasks) = parent_update(before.clone(), ParentMsg::Local(CounterMsg::Add(2))).into_parts();

    assert!(tasks.is_empty());
    assert_eq!(after.counter.value, 2);
    assert!(Immutable::ptr_eq(&before.notes, &after.notes));
    assert_eq!(before.counter.value, 0);
}

#[test]
fn child_no_op_keeps_parent_identity() {
    let before = parent(4);
    let (after, _) = parent_update(before.clone(), ParentMsg::Local(CounterMsg::Announce)).into_parts();
    assert!(Immutable::ptr_eq(&before, &after));
}

#[test]
fn composed_lens_reaches_grandchild() {
    let shell = Immutable::new(Shell {
        parent: parent(1),
        title: Immutable::new("Shell".into()),
    });
    let lens = Lens::field(parent_of, parent_of_mut).then(counter_lens());

    let next = lens.modify(&shell, |c| c.with(|c| c.value = 9));

    assert_eq!(lens.get(&next).value, 9);
    assert!(Immutable::ptr_eq(&shell.title, &next.title));
    assert!(Immutable::ptr_eq(&shell.parent.notes, &next.parent.notes));
    assert_eq!(lens.get(&shell).value, 1);
}

#[tokio::test]
async fn child_messages_come_back_wrapped() {
    let (mut rt, seen) = runtime(parent(0));
    rt.dispatch(ParentMsg::Local(CounterMsg::AddLater(3)));

    rt.run_until_idle().await;
    assert_eq!(rt.state().counter.value, 3);
    assert!(seen.lock().is_empty());
}

#[tokio::test]
async fn child_merges_land_in_the_child_slice() {
    let before = parent(0);
    let (mut rt, _) = runtime(before.clone());
    rt.dispatch(ParentMsg::Local(CounterMsg::BumpLater));
    rt.dispatch(ParentMsg::Shared(CounterMsg::BumpLater));

    rt.run_until_idle().await;
    let after = rt.state();
    assert_eq!(after.counter.value, 2);
    assert!(Immutable::ptr_eq(&before.notes, &after.notes));
}

#[tokio::test]
async fn shared_child_reaches_global_channel() {
    let (mut rt, seen) = runtime(parent(5));
    rt.dispatch(ParentMsg::Shared(CounterMsg::Announce));

    rt.run_until_idle().await;
    assert_eq!(*seen.lock(), vec!["value=5".to_string()]);
}
