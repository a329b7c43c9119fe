use models::format::is_cnic;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "parents")]
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
    #[sea_orm(unique)]
    pub cnic: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let Some(cnic) = self.cnic.try_as_ref()
            && !is_cnic(cnic)
        {
            return Err(DbErr::Custom(
                "CNIC must be 13 digits without dashes".to_string(),
            ));
        }

        Ok(self)
    }
}
