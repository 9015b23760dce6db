//! Hash container selection for cell tables and connectivity maps.
//!
//! Iteration order of these aliases is **not** relied upon: per-key value
//! lists keep their insertion order, but key enumeration order is arbitrary.

#[cfg(feature = "fast-hash")]
pub type FastSet<T> = ahash::AHashSet<T>;

#[cfg(not(feature = "fast-hash"))]
pub type FastSet<T> = hashbrown::HashSet<T>;

#[cfg(feature = "fast-hash")]
pub type FastMap<K, V> = ahash::AHashMap<K, V>;

#[cfg(not(feature = "fast-hash"))]
pub type FastMap<K, V> = hashbrown::HashMap<K, V>;
