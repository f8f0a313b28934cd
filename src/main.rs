use actix_cors::Cors;
use actix_web::{self, App, HttpServer, http::Method, middleware::Logger, web};
use std::sync::Arc;

use crate::{
    configs::{connect_database, run_migrations},
    constants::Env,
    modules::user::{repository_pg::UserRepositoryPg, service::UserService},
};

mod api;
mod configs;
mod constants;
mod modules;
#[cfg(test)]
mod test;
mod utils;

#[actix_web::get("/")]
async fn health_check() -> &'static str {
    "Server is running"
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let env = Env::from_env().map_err(std::io::Error::other)?;
    log::info!("Environment variables loaded");

    let db_pool = connect_database(&env).await.map_err(|e| {
        log::error!("Database connection error: {e}");
        std::io::Error::other("Database connection error")
    })?;

    if env.run_migrations {
        run_migrations(&db_pool).await.map_err(|e| {
            log::error!("Migration error: {e:?}");
            std::io::Error::other("Database migration error")
        })?;
    }

    let user_repo = UserRepositoryPg::new(db_pool);
    let user_service = UserService::with_dependencies(Arc::new(user_repo));

    let cors_origin = env.cors_allowed_origin.clone();

    log::info!("Starting server at http://{}:{}", env.ip, env.port);
    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&cors_origin)
            .allowed_methods([Method::GET])
            .max_age(3600);

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(web::Data::new(user_service.clone()))
            .service(health_check)
            .service(web::scope("/api").configure(modules::user::route::configure))
    })
    .bind((env.ip.as_str(), env.port))?
    .workers(env.workers)
    .run()
    .await
}
