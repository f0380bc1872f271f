//! Role-based gating of protected portal areas.

pub mod areas;
pub mod enforcer;

pub use areas::ProtectedArea;
pub use enforcer::{AuthorizationGate, GateDecision, Navigation, RedirectTarget};
