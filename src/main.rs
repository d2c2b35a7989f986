use std::process;

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use dotenvy::dotenv;

use catalog_admin::db::{establish_connection_pool, run_migrations};
use catalog_admin::models::config::ServerConfig;
use catalog_admin::repository::DieselRepository;
use catalog_admin::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let server_config = match ServerConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load server configuration: {e}");
            process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            process::exit(1);
        }
    };

    match pool.get() {
        Ok(mut conn) => {
            if let Err(e) = run_migrations(&mut conn) {
                log::error!("Failed to run database migrations: {e}");
                process::exit(1);
            }
        }
        Err(e) => {
            log::error!("Failed to get database connection: {e}");
            process::exit(1);
        }
    }

    let repo = DieselRepository::new(pool);
    let prefix = server_config.scope_prefix();
    let bind = (server_config.bind_address.clone(), server_config.port);
    log::info!("Serving catalog admin API on {}:{}{prefix}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .service(web::scope(&prefix).configure(routes::configure))
    })
    .bind(bind)?
    .run()
    .await
}
