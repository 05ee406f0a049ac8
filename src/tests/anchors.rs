extern crate std;

use std::vec;
use std::vec::Vec;

use core::ptr::NonNull;

use slink_derive::Anchor;

use crate::traits::Anchor;
use crate::{Link, List};

#[derive(Anchor)]
#[anchor(crate_path = "crate")]
struct Task {
    key: u32,
    queue: Link<Task>,
    free_pool: Link<Task>,
}

impl Task {
    fn new(key: u32) -> Self {
        Task {
            key,
            queue: Link::new(),
            free_pool: Link::new(),
        }
    }
}

fn keys<A: Anchor<Record = Task>>(list: &List<A>) -> Vec<u32> {
    let mut out = vec![];
    unsafe {
        for task in list.iter() {
            out.push(task.as_ref().key);
        }
    }
    out
}

#[test]
fn one_record_on_two_lists_at_once() {
    let mut tasks: Vec<Task> = (1..=4).map(Task::new).collect();

    let mut queue: List<TaskQueueAnchor> = List::new();
    for task in tasks.iter_mut() {
        queue.push(NonNull::from(task));
    }

    let mut pool: List<TaskFreePoolAnchor> = List::new();
    pool.push_back(NonNull::from(&mut tasks[1]));
    pool.push_back(NonNull::from(&mut tasks[3]));

    assert_eq!(keys(&queue), vec![4, 3, 2, 1]);
    assert_eq!(keys(&pool), vec![2, 4]);

    // Unlinking through one anchor leaves the other chain untouched.
    queue.remove(NonNull::from(&mut tasks[1])).unwrap();
    assert_eq!(keys(&queue), vec![4, 3, 1]);
    assert_eq!(keys(&pool), vec![2, 4]);

    let found = pool.find(|task| task.key == 4).unwrap();
    assert_eq!(found, NonNull::from(&mut tasks[3]));
}

enum ManualQueueAnchor {}

unsafe impl Anchor for ManualQueueAnchor {
    type Record = Task;

    unsafe fn link(record: NonNull<Task>) -> NonNull<Link<Task>> {
        unsafe { NonNull::new_unchecked(&raw mut (*record.as_ptr()).queue) }
    }
}

fn exercise<A: Anchor<Record = Task>>(tasks: &mut [Task]) -> (Vec<NonNull<Task>>, Vec<NonNull<Task>>) {
    let mut list: List<A> = List::new();
    for i in 0..3 {
        list.push(NonNull::from(&mut tasks[i]));
    }
    list.push_back(NonNull::from(&mut tasks[3]));

    let mut returned = vec![];
    returned.push(list.pop_back().unwrap());
    returned.push(list.remove(NonNull::from(&mut tasks[1])).unwrap());
    returned.push(list.pop().unwrap());

    let chain = unsafe { list.iter().collect() };
    (returned, chain)
}

#[test]
fn derived_anchor_matches_a_hand_written_one() {
    let mut tasks: Vec<Task> = (1..=4).map(Task::new).collect();

    let derived = exercise::<TaskQueueAnchor>(&mut tasks);
    let manual = exercise::<ManualQueueAnchor>(&mut tasks);

    assert_eq!(derived, manual);
}
