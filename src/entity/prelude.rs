//! 预导入模块，方便使用

pub use super::club_members::{
    ActiveModel as ClubMemberActiveModel, Entity as ClubMembers, Model as ClubMemberModel,
};
pub use super::club_settings::{
    ActiveModel as ClubSettingsActiveModel, Entity as ClubSettings, Model as ClubSettingsModel,
};
pub use super::clubs::{ActiveModel as ClubActiveModel, Entity as Clubs, Model as ClubModel};
pub use super::clusters::{
    ActiveModel as ClusterActiveModel, Entity as Clusters, Model as ClusterModel,
};
pub use super::departments::{
    ActiveModel as DepartmentActiveModel, Entity as Departments, Model as DepartmentModel,
};
pub use super::staff::{ActiveModel as StaffActiveModel, Entity as Staff, Model as StaffModel};
pub use super::student_bulk_uploads::{
    ActiveModel as StudentBulkUploadActiveModel, Entity as StudentBulkUploads,
    Model as StudentBulkUploadModel,
};
pub use super::students::{
    ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
