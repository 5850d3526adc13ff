//! Audit trace events.
//!
//! Components emit typed events through a synchronous dispatcher; the
//! bundled [`TraceRecorder`] turns them into the timestamped trace report
//! (artifact 2). Other handlers can be registered for live dashboards.

pub mod dispatcher;
pub mod handler;
pub mod recorder;
pub mod types;

pub use dispatcher::EventDispatcher;
pub use handler::AuditEventHandler;
pub use recorder::{TraceEntry, TraceRecorder};
pub use types::*;
