// Reusable components live here.

pub mod confirm_modal;
pub mod error_banner;
pub mod loading_spinner;
pub mod pagination;
pub mod report_actions;
pub mod search_controls;
pub mod sidebar;
pub mod stats_card;
pub mod status_badge;
pub mod subject_report_table;
pub mod toast;
pub mod topbar;
