/// 业务错误码，`ApiResponse.code` 字段取值
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误 1xxx
    BadRequest = 1000,
    ValidationFailed = 1001,
    InternalServerError = 1002,
    RateLimitExceeded = 1003,
    NotFound = 1004,

    // 学群 20xx
    ClusterNotFound = 2001,
    ClusterAlreadyExists = 2002,
    ClusterCreationFailed = 2003,
    ClusterUpdateFailed = 2004,
    ClusterDeleteFailed = 2005,

    // 院系 21xx
    DepartmentNotFound = 2101,
    DepartmentAlreadyExists = 2102,
    DepartmentCreationFailed = 2103,
    DepartmentUpdateFailed = 2104,
    DepartmentDeleteFailed = 2105,

    // 教职工 30xx
    StaffNotFound = 3001,
    StaffAlreadyExists = 3002,
    StaffCreationFailed = 3003,
    StaffUpdateFailed = 3004,
    StaffDeleteFailed = 3005,

    // 学生 40xx
    StudentNotFound = 4001,
    StudentAlreadyExists = 4002,
    StudentCreationFailed = 4003,
    StudentUpdateFailed = 4004,
    StudentDeleteFailed = 4005,
    CredentialsSendFailed = 4006,
    PasswordResetFailed = 4007,

    // 批量导入 41xx
    ImportFileMissing = 4101,
    ImportFileTypeInvalid = 4102,
    ImportFileParseFailed = 4103,
    ImportFileMissingColumn = 4104,
    ImportFileTooLarge = 4105,
    ImportClusterMissing = 4106,

    // 社团 50xx
    ClubNotFound = 5001,
    ClubCreationFailed = 5002,
    ClubUpdateFailed = 5003,
    ClubDeleteFailed = 5004,
    ClubInactive = 5005,
    ClubFull = 5006,
    ClubMemberNotFound = 5007,
    ClubMemberAlreadyExists = 5008,
    ClubJoiningClosed = 5009,
    ClubLimitReached = 5010,
    StudentInactive = 5011,

    // 社团设置 51xx
    ClubSettingsNotFound = 5101,
    ClubSettingsUpdateFailed = 5102,

    // 账号 60xx
    AccountNotFound = 6001,
}
