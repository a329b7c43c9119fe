use models::format::is_roll_number;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub contact_number: String,
    pub profile_picture: Option<String>,
    pub class_level: i32,
    pub class_type: String,
    #[sea_orm(indexed)]
    pub roll_no: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let Some(roll_no) = self.roll_no.try_as_ref()
            && !is_roll_number(roll_no)
        {
            return Err(DbErr::Custom("Roll number must be 9 digits".to_string()));
        }

        Ok(self)
    }
}
