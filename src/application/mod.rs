//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `TreeController` - Load, render and toggle the selectable file tree
//! - `GenerateUseCase` - Outline, context bundle and external generator
//! - `ApplyUseCase` - Hand a response to the external applier
//!
//! ## State
//!
//! - `UiStore` - Observable state shared by the controller and its views

pub mod apply;
pub mod controller;
pub mod generate;
pub mod store;

pub use apply::{ApplyOptions, ApplyResult, ApplyUseCase};
pub use controller::{
    ControllerState, FetchedTree, LoadStatus, LoadTicket, SelectionState, TreeController, TreeRow,
};
pub use generate::{GenerateOptions, GenerateResult, GenerateUseCase};
pub use store::{Subscription, UiState, UiStore};
