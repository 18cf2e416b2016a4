//! Identity state and session operations

pub mod context;
pub mod session;

pub use context::{use_auth, use_identity, use_is_authenticated, AuthAction, AuthContext,
    AuthContextData, AuthProvider, UserPatch};
pub use session::{use_session, AuthOutcome, SessionHandle};
