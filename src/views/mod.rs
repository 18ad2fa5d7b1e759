// ============================================================================
// VIEWS - Render state into the host page (no business logic here)
// ============================================================================

pub mod board;
pub mod confirm;
pub mod header;
pub mod link_item;
pub mod page;
pub mod toast;

pub use board::{project_board, render_board, render_skeletons, BoardView, BucketView, LinkItemView};
pub use confirm::ModalConfirmer;
pub use header::render_auth_chrome;
pub use link_item::render_link_item;
pub use page::bind_page;
pub use toast::ToastNotifier;
