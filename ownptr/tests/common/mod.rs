#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

/// Pointee that counts how many times it was dropped
#[derive(Debug)]
pub struct DropCounter {
    pub value: i32,
    pub drops: Rc<Cell<usize>>,
}

impl DropCounter {
    pub fn new(value: i32, drops: &Rc<Cell<usize>>) -> Self {
        Self {
            value,
            drops: Rc::clone(drops),
        }
    }
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}
