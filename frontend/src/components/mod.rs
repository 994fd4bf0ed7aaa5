pub mod goal_card;
pub mod goal_summary;
pub mod install_button;
pub mod offline_indicator;

pub use goal_card::GoalCard;
pub use goal_summary::GoalSummary;
pub use install_button::InstallButton;
pub use offline_indicator::OfflineIndicator;
