use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Class names identify classes across the API
        manager
            .create_index(
                Index::create()
                    .name("idx_classes_class_name")
                    .table(Classes::Table)
                    .col(Classes::ClassName)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Roster lookups filter on level and type together
        manager
            .create_index(
                Index::create()
                    .name("idx_students_class_level_class_type")
                    .table(Students::Table)
                    .col(Students::ClassLevel)
                    .col(Students::ClassType)
                    .to_owned(),
            )
            .await?;

        // Class creation counts students by roll number
        manager
            .create_index(
                Index::create()
                    .name("idx_students_roll_no")
                    .table(Students::Table)
                    .col(Students::RollNo)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_students_email")
                    .table(Students::Table)
                    .col(Students::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_teachers_department")
                    .table(Teachers::Table)
                    .col(Teachers::Department)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_teachers_cnic")
                    .table(Teachers::Table)
                    .col(Teachers::Cnic)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_teachers_email")
                    .table(Teachers::Table)
                    .col(Teachers::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_parents_cnic")
                    .table(Parents::Table)
                    .col(Parents::Cnic)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_parents_email")
                    .table(Parents::Table)
                    .col(Parents::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_parents_email")
                    .table(Parents::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_parents_cnic")
                    .table(Parents::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_teachers_email")
                    .table(Teachers::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_teachers_cnic")
                    .table(Teachers::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_teachers_department")
                    .table(Teachers::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_students_email")
                    .table(Students::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_students_roll_no")
                    .table(Students::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_students_class_level_class_type")
                    .table(Students::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_classes_class_name")
                    .table(Classes::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Classes {
    Table,
    ClassName,
}

#[derive(DeriveIden)]
enum Students {
    Table,
    ClassLevel,
    ClassType,
    RollNo,
    Email,
}

#[derive(DeriveIden)]
enum Teachers {
    Table,
    Department,
    Cnic,
    Email,
}

#[derive(DeriveIden)]
enum Parents {
    Table,
    Cnic,
    Email,
}
