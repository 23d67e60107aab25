#![cfg(test)]

use std::collections::VecDeque;
use std::rc::Rc;

use proptest::collection::vec;
use proptest::num::usize::ANY;

use super::*;
use crate::collections::Element;
use crate::util::trace::trace_init;

#[derive(Debug, Clone, PartialEq)]
enum Value {
    Int(i32),
    Text(&'static str),
}

use Value::*;

fn values<T: Clone>(list: &DoublyLinkedList<T>) -> Vec<T> {
    let mut values = Vec::new();
    let mut curr = list.front();
    while let Some(element) = curr {
        values.push(element.value().clone());
        curr = element.next();
    }
    values
}

fn values_rev<T: Clone>(list: &DoublyLinkedList<T>) -> Vec<T> {
    let mut values = Vec::new();
    let mut curr = list.back();
    while let Some(element) = curr {
        values.push(element.value().clone());
        curr = element.prev();
    }
    values
}

fn raw_next<T>(element: &DoublyLinkedListElement<T>) -> Link<T> {
    element.0.next_node()
}

fn raw_prev<T>(element: &DoublyLinkedListElement<T>) -> Link<T> {
    element.0.prev_node()
}

fn is_sentinel<T>(list: &DoublyLinkedList<T>, link: Link<T>) -> bool {
    link.is_some_and(|node| Rc::ptr_eq(&node, &list.sentinel))
}

#[test]
fn test_new() {
    let list = DoublyLinkedList::<i32>::new();
    assert_eq!(list.len(), 0);
    assert!(list.is_empty());
    assert!(list.front().is_none() && list.back().is_none());

    assert!(
        is_sentinel(&list, list.sentinel.next_node()) && is_sentinel(&list, list.sentinel.prev_node()),
        "An empty list should have a sentinel linked to itself in both directions."
    );
    list.verify_links();
}

#[test]
fn test_detached_element() {
    let element = DoublyLinkedListElement::new(10);
    assert_eq!(*element.value(), 10);
    assert!(!element.is_attached());
    assert!(element.next().is_none());
    assert!(element.prev().is_none());

    assert_eq!(element.replace(11), 10);
    element.set_value(12);
    assert_eq!(*element.value(), 12);
}

#[test]
fn test_len() {
    let _trace = trace_init();

    let mut list = DoublyLinkedList::new();
    let e1 = list.push_front(Int(1));
    let e2 = list.push_front(Int(2));
    let e3 = list.push_back(Int(3));
    let e4 = list.push_back(Text("four"));
    assert_eq!(list.len(), 4);
    list.verify_links();

    assert_eq!(list.remove(&e1).map(|value| value.clone()), Ok(Int(1)));
    assert_eq!(list.len(), 3);
    assert_eq!(
        list.remove(&e1).err(),
        Some(ForeignElement),
        "Removing an element twice should fail the second time."
    );
    assert_eq!(list.len(), 3, "A failed removal shouldn't change the length.");

    for element in [&e2, &e3, &e4] {
        assert!(list.remove(element).is_ok());
    }
    assert_eq!(list.len(), 0);
    list.verify_links();
}

#[test]
fn test_front() {
    let mut list = DoublyLinkedList::new();
    assert!(list.front().is_none());

    let first = list.push_front("first element");
    assert_eq!(list.front(), Some(first.clone()));
    assert!(is_sentinel(&list, raw_prev(&first)) && is_sentinel(&list, raw_next(&first)));
    assert!(first.prev().is_none() && first.next().is_none(), "The sentinel should be hidden.");

    let second = list.push_front("second element");
    assert_eq!(list.front(), Some(second.clone()));
    assert!(is_sentinel(&list, raw_prev(&second)));
    assert_eq!(second.next(), Some(first.clone()));
    assert_eq!(first.prev(), Some(second));
    list.verify_links();
}

#[test]
fn test_back() {
    let mut list = DoublyLinkedList::new();
    assert!(list.back().is_none());

    let first = list.push_back("first element");
    assert_eq!(list.back(), Some(first.clone()));
    assert!(is_sentinel(&list, raw_prev(&first)) && is_sentinel(&list, raw_next(&first)));

    let second = list.push_back("second element");
    assert_eq!(list.back(), Some(second.clone()));
    assert_eq!(second.prev(), Some(first.clone()));
    assert!(is_sentinel(&list, raw_next(&second)));
    list.verify_links();
}

#[test]
fn test_remove() {
    let _trace = trace_init();

    let mut list = DoublyLinkedList::new();
    let e1 = list.push_front(1);
    let e2 = list.push_front(2);
    let e3 = list.push_back(3);
    let e4 = list.push_back(4);
    assert!(list.contains(&e1));

    assert_eq!(list.remove(&e1).map(|value| *value), Ok(1));
    assert!(!e1.is_attached() && !list.contains(&e1));
    assert!(
        raw_next(&e1).is_none() && raw_prev(&e1).is_none(),
        "A removed element should have all of its links cleared."
    );
    assert_eq!(*e1.value(), 1, "A removed element should still hold its value.");
    assert_eq!(list.len(), 3);

    assert_eq!(list.front(), Some(e2.clone()));
    assert!(e2.prev().is_none());
    assert!(is_sentinel(&list, raw_prev(&e2)));
    assert_eq!(e2.next(), Some(e3.clone()));

    assert_eq!(list.remove(&e4).map(|value| *value), Ok(4));
    assert!(!e4.is_attached());
    assert_eq!(list.len(), 2);
    assert_eq!(list.back(), Some(e3.clone()));
    assert_eq!(e3.prev(), Some(e2));
    list.verify_links();
}

#[test]
fn test_insert_before() {
    let mut list = DoublyLinkedList::new();
    let e1 = list.push_front("e1");
    let e2 = list.insert_before("e2", &e1).expect("e1 belongs to the list");

    assert_eq!(e1.prev(), Some(e2.clone()));
    assert_eq!(e2.next(), Some(e1.clone()));
    assert_eq!(list.front(), Some(e2));

    let detached = DoublyLinkedListElement::new("e3");
    assert_eq!(
        list.insert_before("e4", &detached).err(),
        Some(ForeignElement),
        "Inserting next to a foreign element should fail."
    );
    assert_eq!(list.len(), 2);
    assert_eq!(values(&list), ["e2", "e1"]);
    list.verify_links();
}

#[test]
fn test_insert_after() {
    let mut list = DoublyLinkedList::new();
    let e1 = list.push_front("e1");
    let e2 = list.insert_after("e2", &e1).expect("e1 belongs to the list");

    assert_eq!(e1.next(), Some(e2.clone()));
    assert_eq!(e2.prev(), Some(e1.clone()));
    assert_eq!(list.back(), Some(e2));

    let mut other = DoublyLinkedList::new();
    let foreign = other.push_back("e3");
    assert!(list.insert_after("e4", &foreign).is_err());
    assert_eq!(list.len(), 2);
    assert_eq!(other.len(), 1, "The other list shouldn't be touched either.");
    list.verify_links();
    other.verify_links();
}

#[test]
fn test_move_to_front() {
    let mut list = DoublyLinkedList::new();
    let e1 = list.push_front(1);
    let e2 = list.push_front(2);
    assert_eq!(list.front(), Some(e2.clone()));

    assert_eq!(list.move_to_front(&e1), Ok(()));
    assert_eq!(list.front(), Some(e1.clone()));
    assert_eq!(e2.prev(), Some(e1.clone()));
    assert_eq!(e1.next(), Some(e2.clone()));
    assert!(e1.prev().is_none());

    assert_eq!(list.move_to_front(&e1), Ok(()), "Moving the front element is a no-op.");
    assert_eq!(values(&list), [1, 2]);

    let detached = DoublyLinkedListElement::new(3);
    assert_eq!(list.move_to_front(&detached), Err(ForeignElement));
    assert_eq!(list.front(), Some(e1));
    assert_eq!(list.back(), Some(e2));
    assert_eq!(list.len(), 2);
    list.verify_links();
}

#[test]
fn test_move_to_back() {
    let mut list = DoublyLinkedList::new();
    let e1 = list.push_back(1);
    let e2 = list.push_back(2);
    assert_eq!(list.back(), Some(e2.clone()));

    assert_eq!(list.move_to_back(&e1), Ok(()));
    assert_eq!(list.back(), Some(e1.clone()));
    assert_eq!(e2.next(), Some(e1.clone()));
    assert_eq!(e1.prev(), Some(e2.clone()));
    assert!(e1.next().is_none());

    let detached = DoublyLinkedListElement::new(3);
    assert_eq!(list.move_to_back(&detached), Err(ForeignElement));
    assert_eq!(list.back(), Some(e1));
    assert_eq!(list.front(), Some(e2));
    list.verify_links();
}

#[test]
fn test_move_before() {
    let mut list = DoublyLinkedList::new();
    let e1 = list.push_front(1);
    let e2 = list.push_front(2);
    let e3 = list.push_back(3);

    assert_eq!(list.move_before(&e2, &e1), Ok(()));
    assert_eq!(list.front(), Some(e2.clone()));
    assert_eq!(e2.next(), Some(e1.clone()));
    assert!(e2.prev().is_none());

    assert_eq!(list.move_before(&e3, &e1), Ok(()));
    assert_eq!(list.back(), Some(e1.clone()));
    assert_eq!(e3.prev(), Some(e2.clone()));
    assert_eq!(e3.next(), Some(e1.clone()));
    assert_eq!(values(&list), [2, 3, 1]);

    assert_eq!(list.move_before(&e3, &e3), Ok(()), "Moving before itself is a no-op.");
    assert_eq!(values(&list), [2, 3, 1]);

    let detached = DoublyLinkedListElement::new(4);
    assert_eq!(list.move_before(&e2, &detached), Err(ForeignElement));
    assert_eq!(list.move_before(&detached, &e2), Err(ForeignElement));
    assert!(e2.prev().is_none());
    assert!(detached.next().is_none());
    assert_eq!(values(&list), [2, 3, 1]);
    list.verify_links();
}

#[test]
fn test_move_after() {
    let mut list = DoublyLinkedList::new();
    let e1 = list.push_front(1);
    let e2 = list.push_front(2);
    let e3 = list.push_back(3);

    assert_eq!(list.move_after(&e1, &e2), Ok(()));
    assert_eq!(e1.prev(), Some(e2.clone()));
    assert_eq!(e2.next(), Some(e1.clone()));
    assert!(e2.prev().is_none());

    assert_eq!(list.move_after(&e1, &e3), Ok(()));
    assert_eq!(e1.prev(), Some(e3.clone()));
    assert_eq!(e3.next(), Some(e1.clone()));
    assert_eq!(e3.prev(), Some(e2.clone()));
    assert!(e1.next().is_none());
    assert_eq!(values(&list), [2, 3, 1]);

    let detached = DoublyLinkedListElement::new(4);
    assert_eq!(list.move_after(&detached, &e1), Err(ForeignElement));
    assert!(e1.next().is_none());
    assert!(detached.prev().is_none());
    list.verify_links();
}

#[test]
fn test_push_back_list() {
    let mut list = DoublyLinkedList::new();
    list.push_front(1);
    list.push_front(2);
    let e3 = list.push_back(3);

    let mut other = DoublyLinkedList::new();
    other.push_back(4);
    let e5 = other.push_back(5);

    list.push_back_list(&other);
    assert_eq!(list.len(), 5);
    assert_ne!(list.back(), Some(e5.clone()), "Values should be copied into new elements.");
    assert!(other.contains(&e5) && !list.contains(&e5));
    assert_eq!(values(&list), [2, 1, 3, 4, 5]);
    assert_eq!(list.back().and_then(|back| back.prev()).and_then(|e| e.prev()), Some(e3));

    other.push_back_self();
    assert_eq!(other.len(), 4, "Appending a list to itself should double it exactly once.");
    assert_eq!(values(&other), [4, 5, 4, 5]);

    other.push_back_list(&DoublyLinkedList::new());
    assert_eq!(other.len(), 4);
    list.verify_links();
    other.verify_links();
}

#[test]
fn test_push_front_list() {
    let mut list = DoublyLinkedList::new();
    let e1 = list.push_front(1);
    list.push_back(2);
    list.push_back(3);

    let mut other = DoublyLinkedList::new();
    other.push_back(4);
    other.push_back(5);

    list.push_front_list(&other);
    assert_eq!(list.len(), 5);
    assert_eq!(values(&list), [4, 5, 1, 2, 3]);
    assert_eq!(list.front().and_then(|front| front.next()).and_then(|e| e.next()), Some(e1));

    other.push_front_self();
    assert_eq!(other.len(), 4, "Prepending a list to itself should double it exactly once.");
    assert_eq!(values(&other), [4, 5, 4, 5]);
    assert_eq!(values_rev(&other), [5, 4, 5, 4]);

    other.push_front_list(&DoublyLinkedList::new());
    assert_eq!(other.len(), 4);
    list.verify_links();
    other.verify_links();
}

#[test]
fn test_walkthrough() {
    let mut list = DoublyLinkedList::new();
    list.push_front(Int(1));
    list.push_front(Int(2));
    let e3 = list.push_back(Text("e3"));
    list.insert_before(Text("before e3"), &e3).expect("e3 belongs to the list");
    list.insert_after(Text("after e3"), &e3).expect("e3 belongs to the list");

    assert_eq!(
        values(&list),
        [Int(2), Int(1), Text("before e3"), Text("e3"), Text("after e3")]
    );

    assert_eq!(list.remove(&e3).map(|value| value.clone()), Ok(Text("e3")));
    assert_eq!(values(&list), [Int(2), Int(1), Text("before e3"), Text("after e3")]);
    list.verify_links();
}

#[test]
fn test_drop_detaches_elements() {
    let list = DoublyLinkedList::from_iter(["a", "b", "c"]);
    let front = list.front().expect("list isn't empty");
    let back = list.back().expect("list isn't empty");

    drop(list);
    assert!(!front.is_attached() && front.next().is_none());
    assert!(!back.is_attached() && back.prev().is_none());
    assert_eq!(*front.value(), "a");
    assert_eq!(Rc::strong_count(&front.0), 1, "Dropping the list should release every node.");
}

#[test]
fn test_fmt() {
    let list = DoublyLinkedList::from_iter([1, 2, 3]);
    assert_eq!(format!("{list}"), "(1) -> (2) -> (3)");
    assert_eq!(format!("{list:?}"), "[1, 2, 3]");
    assert_eq!(format!("{}", DoublyLinkedList::<i32>::new()), "");
}

#[derive(Debug)]
enum Op {
    PushFront,
    PushBack,
    Remove(usize),
    MoveToFront(usize),
    MoveAfter(usize, usize),
}

proptest::proptest! {
    #[test]
    fn fuzz_doubly_linked_list(ops in vec(ANY, 0..100)) {
        let ops = ops
            .iter()
            .map(|i| match i % 5 {
                0 => Op::PushFront,
                1 => Op::PushBack,
                2 => Op::Remove(i / 5),
                3 => Op::MoveToFront(i / 5),
                4 => Op::MoveAfter(i / 5, i / 25),
                _ => unreachable!(),
            })
            .collect::<Vec<_>>();

        let _trace = trace_init();
        let _span = tracing::info_span!("fuzz").entered();
        tracing::info!(?ops);
        run_fuzz(ops);
    }
}

fn run_fuzz(ops: Vec<Op>) {
    let mut list = DoublyLinkedList::new();
    let mut reference = VecDeque::new();

    for (i, op) in ops.into_iter().enumerate() {
        let _span = tracing::info_span!("op", ?i, ?op).entered();
        match op {
            Op::PushFront => reference.push_front(list.push_front(i)),
            Op::PushBack => reference.push_back(list.push_back(i)),
            Op::Remove(n) => {
                if reference.is_empty() {
                    tracing::debug!("skipping remove; list is empty");
                    continue;
                }
                let element = reference.remove(n % reference.len()).expect("index in bounds");
                let expect = *element.value();
                assert_eq!(list.remove(&element).map(|value| *value), Ok(expect));
                assert!(list.remove(&element).is_err());
            },
            Op::MoveToFront(n) => {
                if reference.is_empty() {
                    continue;
                }
                let element = reference.remove(n % reference.len()).expect("index in bounds");
                assert_eq!(list.move_to_front(&element), Ok(()));
                reference.push_front(element);
            },
            Op::MoveAfter(a, b) => {
                if reference.is_empty() {
                    continue;
                }
                let element = reference[a % reference.len()].clone();
                let mark = reference[b % reference.len()].clone();
                assert_eq!(list.move_after(&element, &mark), Ok(()));
                if element != mark {
                    reference.retain(|e| *e != element);
                    let at = reference.iter().position(|e| *e == mark).expect("mark is present");
                    reference.insert(at + 1, element);
                }
            },
        }

        list.verify_links();
        assert_eq!(list.len(), reference.len());
        let expected = reference.iter().map(|e| *e.value()).collect::<Vec<_>>();
        assert_eq!(values(&list), expected);
    }
}
