//! Key-based grouping with first-seen key order

use std::hash::Hash;

use indexmap::IndexMap;

mod sealed {
    pub trait Sealed {}
}

/// Marker for types allowed as grouping keys.
///
/// Keys are restricted to string-like and integer-like primitives so that
/// bucket identity never depends on implicit stringification or object
/// identity. The trait is sealed; it cannot be implemented outside this
/// crate.
pub trait GroupKey: Eq + Hash + sealed::Sealed {}

macro_rules! impl_group_key {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}
            impl GroupKey for $ty {}
        )*
    };
}

impl_group_key!(
    String, char, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
);

impl<'a> sealed::Sealed for &'a str {}
impl<'a> GroupKey for &'a str {}

/// Group a slice's elements by the key `key_fn` produces for each one.
///
/// The returned [`IndexMap`] iterates keys in the order their first
/// matching element was encountered while scanning `items` left to right,
/// and each bucket keeps its elements in the input's relative order.
/// `key_fn` is invoked exactly once per element. An empty input yields an
/// empty map.
pub fn group_by<T, K, F>(items: &[T], mut key_fn: F) -> IndexMap<K, Vec<T>>
where
    T: Clone,
    K: GroupKey,
    F: FnMut(&T) -> K,
{
    let mut groups: IndexMap<K, Vec<T>> = IndexMap::new();
    for item in items {
        groups.entry(key_fn(item)).or_default().push(item.clone());
    }
    groups
}
