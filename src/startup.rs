use std::{net::TcpListener, path::PathBuf};

use actix_web::{dev::Server, web, App, HttpServer};
use anyhow::Context;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tracing_actix_web::TracingLogger;

use crate::{
    configuration::Settings,
    export::ExportDirectory,
    routes::{health_check, json_config, order, product, user},
    telemetry::spawn_blocking_with_tracing,
    utils::{get_connection_pool, DbPool}
};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

pub struct Application{
    pub host: String,
    pub port: u16,
    pub server: Server
}

impl Application {
    // Binds the listener, port 0 picks a random free port
    pub async fn new(settings: Settings) -> Result<Self, anyhow::Error>{
        let pool = get_connection_pool(&settings.database)
                    .context("Failed to build connection pool")?;

        run_migrations(&pool).await?;

        let listener = TcpListener::bind((
            settings.application.host.as_str(),
            settings.application.port
        ))?;
        let port = listener.local_addr()?.port();

        let export_directory = ExportDirectory(PathBuf::from(settings.export.directory));
        let server = get_server(listener, pool, export_directory)?;

        tracing::info!(host = %settings.application.host, port, "Server listening");

        Ok(Application{
            host: settings.application.host,
            port,
            server
        })
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error>{
        self.server.await
    }
}

#[tracing::instrument(
    "Running pending migrations",
    skip_all
)]
pub async fn run_migrations(pool: &DbPool) -> Result<(), anyhow::Error>{
    let mut conn = pool.get()
                .context("Failed to get connection from pool")?;

    spawn_blocking_with_tracing(move || {
        conn.run_pending_migrations(MIGRATIONS)
            .map(|applied| tracing::info!(count = applied.len(), "Migrations applied"))
            .map_err(|e| anyhow::anyhow!("Failed to run migrations: {}", e))
    })
    .await
    .context("Failed due to threadpool error")??;

    Ok(())
}

pub fn get_server(
    listener: TcpListener,
    pool: DbPool,
    export_directory: ExportDirectory
) -> Result<Server, anyhow::Error>{
    let pool = web::Data::new(pool);
    let export_directory = web::Data::new(export_directory);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(json_config())
            .app_data(pool.clone())
            .app_data(export_directory.clone())
            .route("/health", web::get().to(health_check))
            .route("/users", web::post().to(user::create_user))
            .route("/users", web::get().to(user::get_users))
            // registered ahead of /users/{user_id}
            .route("/users/export", web::get().to(user::export_users))
            .route("/users/{user_id}", web::get().to(user::get_user))
            .route("/users/{user_id}", web::put().to(user::put_user))
            .route("/users/{user_id}", web::delete().to(user::remove_user))
            .route("/users/{user_id}/orders", web::get().to(user::get_user_orders))
            .route("/products", web::post().to(product::create_product))
            .route("/products", web::get().to(product::get_products))
            .route("/products/{product_id}", web::get().to(product::get_product))
            .route("/products/{product_id}", web::put().to(product::put_product))
            .route("/products/{product_id}", web::delete().to(product::remove_product))
            .route("/orders", web::post().to(order::post_order))
            .route("/orders", web::get().to(order::get_orders))
            .route("/orders/{order_id}", web::get().to(order::get_order))
            .route("/orders/{order_id}", web::delete().to(order::remove_order))
            .route("/orders/{order_id}/products", web::get().to(order::get_order_products))
            .route("/orders/{order_id}/add_product/{product_id}", web::put().to(order::add_product))
            .route("/orders/{order_id}/remove_product/{product_id}", web::delete().to(order::remove_product_from))
    })
    .listen(listener)?
    .run();

    Ok(server)
}
