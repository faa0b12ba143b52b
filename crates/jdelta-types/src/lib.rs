//! Foundation types for jdelta.
//!
//! This crate provides the vocabulary shared by the diff engine and by
//! consumers of the patches it produces.
//!
//! # Key Types
//!
//! - [`ValueKind`] — Total classification of a JSON value
//! - [`JsonPointer`] — RFC 6901 pointer addressing a location in a document
//! - [`Operation`] — A single RFC 6902 patch operation (add/remove/replace/move)
//! - [`Patch`] — An ordered sequence of operations

pub mod error;
pub mod operation;
pub mod pointer;
pub mod value;

pub use error::PointerError;
pub use operation::{Operation, Patch};
pub use pointer::JsonPointer;
pub use value::{deep_equal, ValueKind};
