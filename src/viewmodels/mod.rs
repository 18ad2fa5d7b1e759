pub mod board_viewmodel;

pub use board_viewmodel::{BoardViewModel, Confirmer, FetchOutcome, Notifier, ToastKind};
