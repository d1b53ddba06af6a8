//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels.

pub mod button;
pub mod panel;

pub use button::button_task;
pub use panel::{panel_task, BoardPanel, PanelLines, PanelRails};
