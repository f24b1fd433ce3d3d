//! Travel Chat Widget UI Module (MVVM Standard)
//!
//! Structure:
//! - view_model.rs: TravelChatVm wrapping the session in RwSignals
//! - view.rs: Main component TravelChatWidget

mod view;
mod view_model;

pub use view::TravelChatWidget;
pub use view_model::TravelChatVm;
