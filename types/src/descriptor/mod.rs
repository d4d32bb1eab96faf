//! Type descriptor model.
//!
//! This module provides the structural building blocks:
//!
//! - [`TypeDescriptor`]: The closed sum of the five descriptor shapes
//! - [`Parameterized`], [`Wildcard`], [`GenericArray`]: Payloads with private,
//!   construction-time validated fields
//! - [`TyList`]: Immutable, shared sequence of descriptors
//! - [`DescriptorKind`]: Field-less tag of a descriptor's shape
//!
//! Descriptors render in their canonical form through [`core::fmt::Display`];
//! see the [`traversal`] submodule for pre-order walks over descriptor trees.

mod display;
mod kind;
mod list;
pub mod traversal;
mod ty;

pub use kind::DescriptorKind;
pub use list::TyList;
pub use ty::{GenericArray, Parameterized, TypeDescriptor, Wildcard};
