extern crate std;

use std::vec::Vec;

use super::SingleLinkedList;

mod cursor;

fn values<T: Clone>(list: &SingleLinkedList<T>) -> Vec<T> {
    list.iter().cloned().collect()
}
