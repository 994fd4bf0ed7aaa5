pub mod use_goals;
pub mod use_install_prompt;
pub mod use_online_status;

pub use use_goals::use_goals;
pub use use_install_prompt::use_install_prompt;
pub use use_online_status::use_online_status;
