use std::fmt::{self, Display, Formatter};

use ring_list::collections::Element;
use ring_list::collections::circ::CircularList;
use ring_list::collections::linked::{DoublyLinkedList, DoublyLinkedListElement};

#[derive(Debug, Clone)]
enum Value {
    Int(i32),
    Text(&'static str),
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(value) => write!(f, "{value}"),
            Value::Text(value) => write!(f, "{value}"),
        }
    }
}

fn print_list(list: &DoublyLinkedList<Value>) {
    let mut curr: Option<DoublyLinkedListElement<Value>> = list.front();
    while let Some(element) = curr {
        print!("--> ({}) ", *element.value());
        curr = element.next();
    }
    println!();
}

fn main() {
    println!("\n[DoublyLinkedList]\n");

    let mut list = DoublyLinkedList::new();
    list.push_front(Value::Int(1));
    list.push_front(Value::Int(2));
    let e3 = list.push_back(Value::Text("e3"));

    if let Err(err) = list.insert_before(Value::Text("before e3"), &e3) {
        eprintln!("{err}");
    }
    if let Err(err) = list.insert_after(Value::Text("after e3"), &e3) {
        eprintln!("{err}");
    }
    print_list(&list);

    match list.remove(&e3) {
        Ok(value) => println!("Removed element ({})", *value),
        Err(err) => eprintln!("{err}"),
    }
    print_list(&list);

    println!("\n[CircularList]\n");

    let mut ring = CircularList::<i32>::new(5);
    for value in 1..=5 {
        if let Some(cursor) = ring.cursor() {
            cursor.set_value(value);
        }
        ring.move_next();
    }

    let mut sum = 0;
    ring.walk(|value| {
        print!("--> ({value}) ");
        sum += value;
    });
    println!();
    println!("{sum}");
}
