use sea_orm::{Database, DatabaseConnection, DbErr};
use std::future::Future;

/// Creates a database connection
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(database_url).await
}

/// Opens a connection for the duration of `work` and closes it afterwards,
/// whether `work` succeeded or not
pub async fn with_connection<T, E, F, Fut>(database_url: &str, work: F) -> Result<T, E>
where
    F: FnOnce(DatabaseConnection) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: From<DbErr>,
{
    let db = create_connection(database_url).await?;
    let result = work(db.clone()).await;

    if let Err(e) = db.close().await {
        log::warn!("Failed to close database connection: {e}");
    }

    result
}
