//! A chained hash map with pluggable key hashing.
//!
//! Keys bring their own hash code by implementing [`Hashable`]. The map
//! reduces that code onto a fixed number of buckets and resolves collisions by
//! chaining entries onto a linked list per bucket.
//!
//! ```
//! use chained_map::{string_hash, ChainedHashMap};
//!
//! let mut map = ChainedHashMap::new(4).unwrap();
//! map.set(string_hash("a"), 1);
//! map.set(string_hash("e"), 2); // same bucket as "a"
//!
//! assert_eq!(Some(&1), map.get(&string_hash("a")));
//! assert_eq!(Some(&2), map.get(&string_hash("e")));
//!
//! map.delete(&string_hash("a"));
//! assert_eq!(None, map.get(&string_hash("a")));
//! ```

mod chained_map;
mod error;
mod hashable;
mod linked_list;
#[cfg(feature = "shared_map")]
mod shared_map;
mod string_hash;

pub use chained_map::ChainedHashMap;
pub use error::{Error, Result};
pub use hashable::Hashable;
#[cfg(feature = "shared_map")]
pub use shared_map::SharedMap;
pub use string_hash::{
    elf_hash, string_hash, BuildElfHasher, ElfHasher, StringHash,
};
