//! Generate Module
//!
//! Turns the current selection into a prompt.
//!
//! ## Structure
//!
//! - `options` - Inputs (`GenerateOptions`)
//! - `result` - Outputs (`GenerateResult`)
//! - `use_case` - Orchestration (`GenerateUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use promptweave::application::generate::{GenerateOptions, GenerateUseCase};
//!
//! let use_case = GenerateUseCase::new(backend, SystemCommandRunner);
//! let result = use_case.execute(&GenerateOptions::new("markdown", output_dir))?;
//! println!("{}", result.prompt);
//! ```

mod options;
mod result;
mod use_case;

pub use options::GenerateOptions;
pub use result::GenerateResult;
pub use use_case::{GenerateUseCase, CONTEXT_FILE, STRUCTURE_FILE};
