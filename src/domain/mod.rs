//! Domain Layer
//!
//! The core of promptweave: tree and selection types, exclusion rules and
//! pure services, without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - `TreeNode`
//! - `value_objects/` - `ExclusionMatcher`, `SelectionSet`, `FileName`
//! - `services/` - outline rendering, context bundles, applier output parsing
//! - `policies/` - which source roots may be scanned
//! - `ports/` - interface definitions for infrastructure

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
