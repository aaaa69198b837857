//! Reusable UI components shared across pages.

pub mod analysis_result;
pub mod history_list;
pub mod nav_bar;
pub mod notice_banner;
pub mod upload_panel;
