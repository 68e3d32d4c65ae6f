pub mod dispatch;
pub mod intake;
pub mod lead;
pub mod lifecycle;
pub mod logic;
pub mod trade;

pub use dispatch::{count_new, DispatchBoard, ProjectFilter};
pub use intake::{IntakeDraft, IntakeFlow, IntakeStep};
pub use lead::{Lead, LeadStatus, PaymentMethod, ProjectType};
pub use lifecycle::ContractorAction;
pub use trade::DEFAULT_TRADE;
