pub mod accounts;
pub mod club_settings;
pub mod clubs;
pub mod clusters;
pub mod departments;
pub mod staff;
pub mod students;
pub mod system;

pub use accounts::AccountService;
pub use club_settings::ClubSettingsService;
pub use clubs::ClubService;
pub use clusters::ClusterService;
pub use departments::DepartmentService;
pub use staff::StaffService;
pub use students::StudentService;
pub use system::SystemService;
