pub mod accounts;

pub mod club_settings;

pub mod clubs;

pub mod clusters;

pub mod departments;

pub mod staff;

pub mod students;

pub mod system;

use actix_web::web;

pub use accounts::configure_accounts_routes;
pub use club_settings::configure_club_settings_routes;
pub use clubs::configure_clubs_routes;
pub use clusters::configure_clusters_routes;
pub use departments::configure_departments_routes;
pub use staff::configure_staff_routes;
pub use students::configure_students_routes;
pub use system::configure_system_routes;

/// 注册全部 API 路由
pub fn configure_api_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_system_routes)
        .configure(configure_clusters_routes)
        .configure(configure_departments_routes)
        .configure(configure_staff_routes)
        .configure(configure_students_routes)
        .configure(configure_clubs_routes)
        .configure(configure_club_settings_routes)
        .configure(configure_accounts_routes);
}
