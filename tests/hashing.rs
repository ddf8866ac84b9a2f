use std::{
    collections::{hash_map::DefaultHasher, BTreeMap, HashMap, HashSet},
    hash::{Hash, Hasher},
    sync::atomic::{AtomicUsize, Ordering::SeqCst},
};

use propagate_const::{PointerLike, PropagateConst};
use serial_test::serial;

static HASH_CALLS: AtomicUsize = AtomicUsize::new(0);

struct A;

/// A raw pointer whose hash is instrumented.
#[derive(PartialEq, Eq)]
struct CountedPtr(*const A);

impl PointerLike for CountedPtr {
    type Element = A;

    fn as_ptr(&self) -> *const A {
        self.0
    }
}

impl Hash for CountedPtr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        HASH_CALLS.fetch_add(1, SeqCst);
        state.write_u64(0x5eed);
    }
}

fn hash_one<T: Hash>(value: &T) -> u64 {
    let mut state = DefaultHasher::new();
    value.hash(&mut state);
    state.finish()
}

#[test]
#[serial]
fn test_hash_calls_underlying_once() {
    let a = A;
    let pa = PropagateConst::wrap(CountedPtr(&a));

    HASH_CALLS.store(0, SeqCst);

    let wrapped = hash_one(&pa);

    assert_eq!(HASH_CALLS.load(SeqCst), 1);

    let bare = hash_one(PropagateConst::underlying(&pa));

    assert_eq!(HASH_CALLS.load(SeqCst), 2);
    assert_eq!(wrapped, bare);
}

#[test]
#[serial]
fn test_hash_set_of_wrappers() {
    let a = A;
    let mut set = HashSet::new();

    HASH_CALLS.store(0, SeqCst);

    set.insert(PropagateConst::wrap(CountedPtr(&a)));

    assert_eq!(HASH_CALLS.load(SeqCst), 1);
    assert!(set.contains(&CountedPtr(&a)));
    assert_eq!(HASH_CALLS.load(SeqCst), 2);
}

#[test]
fn test_hash_map_lookup_by_bare_pointer() {
    let values = [1u32, 2, 3];
    let mut names = HashMap::new();

    for (value, name) in values.iter().zip(["one", "two", "three"].iter()) {
        names.insert(PropagateConst::wrap(value as *const u32), *name);
    }

    assert_eq!(names.get(&(&values[1] as *const u32)), Some(&"two"));
    assert_eq!(names.get(&(&0u32 as *const u32)), None);
}

#[test]
fn test_ordered_map_by_address() {
    let values = [30u32, 10, 20];
    let mut map = BTreeMap::new();

    for value in values.iter().rev() {
        map.insert(PropagateConst::wrap(value as *const u32), *value);
    }

    // Ordered by address, i.e. array order, not by value.
    let order: Vec<u32> = map.values().copied().collect();

    assert_eq!(order, vec![30, 10, 20]);
    assert_eq!(map.get(&(&values[2] as *const u32)), Some(&20));
}
