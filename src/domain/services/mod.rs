//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod change_summary;
mod context_bundle;
mod outline;

pub use change_summary::{parse_change_summary, ChangeSummary};
pub use context_bundle::{detect_language, ContextBundle, ContextFile, ContextLine, SkippedFile};
pub use outline::render_outline;
