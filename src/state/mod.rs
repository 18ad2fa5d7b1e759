// ============================================================================
// STATE MODULE - Rc<RefCell> state + change notifications
// ============================================================================

pub mod auth_state;
pub mod app_state;
pub mod mutation;

pub use auth_state::*;
pub use app_state::*;
pub use mutation::*;
