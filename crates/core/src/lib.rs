//! `keel-core` — shared-kernel building blocks for domain and data-access layers.
//!
//! This crate contains **pure in-memory** primitives (no infrastructure
//! concerns): value-object equality semantics and paged results. The two
//! halves are independent; use either without the other.

pub mod error;
pub mod pagination;
pub mod value_object;

pub use error::{KernelError, KernelResult};
pub use pagination::{Page, PageSource, PageSpec, Paged};
pub use value_object::{Component, Single, StringValue, ValueObject};
