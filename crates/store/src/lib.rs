//! Backing-store access for kvparity
//!
//! Two pieces:
//! - [`Namespacer`]: prefix-partitions one shared store so the two
//!   implementation instances under test never observe each other's keys,
//!   and clears leftover state between scenarios.
//! - [`MemoryStore`]: an in-process [`BackingStore`](kvparity_core::BackingStore)
//!   used by fixtures and tests. A networked store plugs in through the
//!   same trait.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod memory;
pub mod namespace;

pub use memory::MemoryStore;
pub use namespace::Namespacer;
