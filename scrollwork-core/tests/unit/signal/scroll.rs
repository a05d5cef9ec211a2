use super::*;
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

#[test]
fn starts_at_the_top_of_the_page() {
    assert_eq!(ScrollSignal::new().get(), ScrollOffset::TOP);
}

#[test]
fn subscribers_observe_every_set_in_order() {
    let signal = ScrollSignal::new();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&seen);
    let _a = signal.subscribe(move |offset| sink.borrow_mut().push(("a", offset.px())));
    let sink = Rc::clone(&seen);
    let _b = signal.subscribe(move |offset| sink.borrow_mut().push(("b", offset.px())));

    signal.set(ScrollOffset(120.0));
    signal.set(ScrollOffset(120.0));

    assert_eq!(
        *seen.borrow(),
        vec![("a", 120.0), ("b", 120.0), ("a", 120.0), ("b", 120.0)]
    );
    assert_eq!(signal.get(), ScrollOffset(120.0));
}

#[test]
fn dropping_the_guard_unsubscribes() {
    let signal = ScrollSignal::new();
    let count = Rc::new(Cell::new(0u32));

    let sink = Rc::clone(&count);
    let sub = signal.subscribe(move |_| sink.set(sink.get() + 1));
    signal.set(ScrollOffset(10.0));
    assert_eq!(signal.subscriber_count(), 1);

    drop(sub);
    assert_eq!(signal.subscriber_count(), 0);
    signal.set(ScrollOffset(20.0));
    assert_eq!(count.get(), 1);
}

#[test]
fn forget_detaches_the_guard() {
    let signal = ScrollSignal::new();
    let count = Rc::new(Cell::new(0u32));

    let sink = Rc::clone(&count);
    signal.subscribe(move |_| sink.set(sink.get() + 1)).forget();
    signal.set(ScrollOffset(10.0));
    signal.set(ScrollOffset(20.0));
    assert_eq!(count.get(), 2);
}

#[test]
fn guard_outliving_the_signal_is_a_no_op() {
    let signal = ScrollSignal::new();
    let sub = signal.subscribe(|_| {});
    drop(signal);
    drop(sub);
}

#[test]
fn guard_dropped_mid_tick_suppresses_later_callbacks_that_tick() {
    let signal = ScrollSignal::new();
    let count = Rc::new(Cell::new(0u32));

    // First subscriber drops the second's guard while handling the tick.
    let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
    let stolen = Rc::clone(&slot);
    let _killer = signal.subscribe(move |_| {
        stolen.borrow_mut().take();
    });
    let sink = Rc::clone(&count);
    let victim = signal.subscribe(move |_| sink.set(sink.get() + 1));
    *slot.borrow_mut() = Some(victim);

    signal.set(ScrollOffset(10.0));
    signal.set(ScrollOffset(20.0));
    assert_eq!(count.get(), 0);
}

#[test]
fn subscribing_mid_tick_takes_effect_next_tick() {
    let signal = ScrollSignal::new();
    let count = Rc::new(Cell::new(0u32));

    let outer = signal.clone();
    let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
    let held = Rc::clone(&slot);
    let sink = Rc::clone(&count);
    let _a = signal.subscribe(move |_| {
        if held.borrow().is_none() {
            let inner_sink = Rc::clone(&sink);
            let sub = outer.subscribe(move |_| inner_sink.set(inner_sink.get() + 1));
            *held.borrow_mut() = Some(sub);
        }
    });

    signal.set(ScrollOffset(10.0));
    assert_eq!(count.get(), 0);
    signal.set(ScrollOffset(20.0));
    assert_eq!(count.get(), 1);
}
