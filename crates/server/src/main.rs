use database::db::create_connection;
use log::info;
use migration::{Migrator, MigratorTrait};
use server::{app, config::Config, state::AppState, utils::shutdown::shutdown_signal};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env().expect("Invalid server configuration");

    if config.run_migrations {
        let db = create_connection(&config.database_url)
            .await
            .expect("Failed to connect to the database");
        Migrator::up(&db, None)
            .await
            .expect("Failed to apply migrations");
        db.close().await.expect("Failed to close the migration connection");
        info!("Database schema is up to date");
    }

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind the listen address");
    info!("Running axum on http://{}", config.bind_addr);

    axum::serve(listener, app(AppState::new(config.database_url)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}
