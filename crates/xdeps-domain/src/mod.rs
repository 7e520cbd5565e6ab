//! # xdeps Domain Layer
//!
//! Core types of the dependency-reference resolver: repositories, symbol
//! positions and locations, package descriptors, reverse-dependency edges,
//! the error taxonomy, and the ports every collaborator implements.
//!
//! ## Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error taxonomy and `Result` alias |
//! | [`constants`] | Pipeline constants (cache TTL, LSP methods) |
//! | [`value_objects`] | Requests, locations, descriptors, edges |
//! | [`ports`] | Collaborator traits (access, language, index, cache) |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{AccessDenial, Error, Result};
pub use value_objects::*;
