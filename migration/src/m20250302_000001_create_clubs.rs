use sea_orm_migration::prelude::*;

use crate::m20250301_000001_create_tables::{Staff, Students};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ==================== 社团表 ====================
        manager
            .create_table(
                Table::create()
                    .table(Clubs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Clubs::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Clubs::ClubId)
                            .string_len(36)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Clubs::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Clubs::Description).text().null())
                    .col(ColumnDef::new(Clubs::CoordinatorId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Clubs::MaxMembers)
                            .integer()
                            .not_null()
                            .default(50),
                    )
                    .col(
                        ColumnDef::new(Clubs::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Clubs::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Clubs::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Clubs::Table, Clubs::CoordinatorId)
                            .to(Staff::Table, Staff::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // ==================== 社团成员表 ====================
        manager
            .create_table(
                Table::create()
                    .table(ClubMembers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClubMembers::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ClubMembers::ClubId).big_integer().not_null())
                    .col(
                        ColumnDef::new(ClubMembers::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClubMembers::IsRepresentative)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(ClubMembers::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(ClubMembers::JoinedAt).big_integer().not_null())
                    .col(ColumnDef::new(ClubMembers::LeftAt).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClubMembers::Table, ClubMembers::ClubId)
                            .to(Clubs::Table, Clubs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(ClubMembers::Table, ClubMembers::StudentId)
                            .to(Students::Table, Students::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 同一学生在同一社团只能有一条记录
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uk_club_members_club_student")
                    .table(ClubMembers::Table)
                    .col(ClubMembers::ClubId)
                    .col(ClubMembers::StudentId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_club_members_student_id")
                    .table(ClubMembers::Table)
                    .col(ClubMembers::StudentId)
                    .to_owned(),
            )
            .await?;

        // ==================== 社团全局设置表 ====================
        manager
            .create_table(
                Table::create()
                    .table(ClubSettings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClubSettings::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ClubSettings::StudentJoinPeriodStart)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ClubSettings::StudentJoinPeriodEnd)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ClubSettings::IsJoiningOpen)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(ClubSettings::MaxClubsPerStudent)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(ClubSettings::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClubSettings::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ClubSettings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ClubMembers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Clubs::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Clubs {
    #[sea_orm(iden = "clubs")]
    Table,
    Id,
    ClubId,
    Name,
    Description,
    CoordinatorId,
    MaxMembers,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ClubMembers {
    #[sea_orm(iden = "club_members")]
    Table,
    Id,
    ClubId,
    StudentId,
    IsRepresentative,
    IsActive,
    JoinedAt,
    LeftAt,
}

#[derive(DeriveIden)]
enum ClubSettings {
    #[sea_orm(iden = "club_settings")]
    Table,
    Id,
    StudentJoinPeriodStart,
    StudentJoinPeriodEnd,
    IsJoiningOpen,
    MaxClubsPerStudent,
    CreatedAt,
    UpdatedAt,
}
