//! # Common Types

/// A state handle: an index into an automaton's flat state arena.
///
/// States have no identity beyond their index, and automaton graphs are
/// cyclic, so states are never referenced by address.
pub type StateId = u32;

/// Type alias for hash maps in this crate.
///
/// Hash collections are used where iteration order does not matter; anything
/// order-sensitive uses the ordered `std` collections instead.
pub type RGHashMap<K, V> = ahash::AHashMap<K, V>;

/// Type alias for hash sets in this crate.
pub type RGHashSet<V> = ahash::AHashSet<V>;
