pub mod dashboard;
pub mod home;
pub mod lead_detail;

pub use dashboard::{dashboard_page, verify_control, VerifyState};
pub use home::{home_page, quote_card};
pub use lead_detail::lead_detail_page;
