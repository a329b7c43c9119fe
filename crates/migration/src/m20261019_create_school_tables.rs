use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create classes table; students, courses and teachers are embedded JSON lists
        manager
            .create_table(
                Table::create()
                    .table(Classes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Classes::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Classes::ClassLevel).text().not_null())
                    .col(ColumnDef::new(Classes::ClassName).string().not_null())
                    .col(
                        ColumnDef::new(Classes::Stream)
                            .text()
                            .not_null()
                            .default("General"),
                    )
                    .col(ColumnDef::new(Classes::Students).json().not_null())
                    .col(ColumnDef::new(Classes::Courses).json().not_null())
                    .col(ColumnDef::new(Classes::Teachers).json().not_null())
                    .col(ColumnDef::new(Classes::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Classes::UpdatedAt).date_time().not_null())
                    .to_owned(),
            )
            .await?;

        // Create students table
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Students::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Students::FirstName).string().not_null())
                    .col(ColumnDef::new(Students::LastName).string().not_null())
                    .col(ColumnDef::new(Students::Email).string().not_null())
                    .col(ColumnDef::new(Students::Password).string().not_null())
                    .col(ColumnDef::new(Students::ContactNumber).string().not_null())
                    .col(ColumnDef::new(Students::ProfilePicture).string())
                    .col(ColumnDef::new(Students::ClassLevel).integer().not_null())
                    .col(ColumnDef::new(Students::ClassType).string().not_null())
                    .col(ColumnDef::new(Students::RollNo).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Create teachers table
        manager
            .create_table(
                Table::create()
                    .table(Teachers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Teachers::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Teachers::FirstName).string().not_null())
                    .col(ColumnDef::new(Teachers::LastName).string().not_null())
                    .col(ColumnDef::new(Teachers::Email).string().not_null())
                    .col(ColumnDef::new(Teachers::Password).string().not_null())
                    .col(ColumnDef::new(Teachers::ContactNumber).string().not_null())
                    .col(ColumnDef::new(Teachers::ProfilePicture).string())
                    .col(ColumnDef::new(Teachers::Cnic).string().not_null())
                    .col(ColumnDef::new(Teachers::Department).text().not_null())
                    .to_owned(),
            )
            .await?;

        // Create parents table
        manager
            .create_table(
                Table::create()
                    .table(Parents::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Parents::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Parents::FirstName).string().not_null())
                    .col(ColumnDef::new(Parents::LastName).string().not_null())
                    .col(ColumnDef::new(Parents::Email).string().not_null())
                    .col(ColumnDef::new(Parents::Password).string().not_null())
                    .col(ColumnDef::new(Parents::ContactNumber).string().not_null())
                    .col(ColumnDef::new(Parents::ProfilePicture).string())
                    .col(ColumnDef::new(Parents::Cnic).string().not_null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Parents::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Teachers::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Classes::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Classes {
    Table,
    Id,
    ClassLevel,
    ClassName,
    Stream,
    Students,
    Courses,
    Teachers,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Students {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Password,
    ContactNumber,
    ProfilePicture,
    ClassLevel,
    ClassType,
    RollNo,
}

#[derive(DeriveIden)]
enum Teachers {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Password,
    ContactNumber,
    ProfilePicture,
    Cnic,
    Department,
}

#[derive(DeriveIden)]
enum Parents {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Password,
    ContactNumber,
    ProfilePicture,
    Cnic,
}
