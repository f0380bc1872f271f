//! Login, registration, and logout flows.

pub mod authenticator;
pub mod state;

pub use authenticator::AuthenticationService;
pub use state::AuthState;
