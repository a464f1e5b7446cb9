use actix_web::{web, App, HttpServer};
use backend::config::Config;
use backend::gateway::GatewayClient;
use backend::services;
use backend::services::voters::state::SessionsState;
use env_logger::Env;
use log::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::from_env();

    let sessions = SessionsState::new();
    let gateway = web::Data::new(GatewayClient::new(
        &config.gateway_url,
        reqwest::Client::new(),
    ));

    info!(
        "Voter import service running at http://{}:{} (election API: {})",
        config.host, config.port, config.gateway_url
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(10 * 1024 * 1024)) // 10 MB
            .app_data(web::Data::new(sessions.clone()))
            .app_data(gateway.clone())
            .service(services::voters::configure_routes())
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
