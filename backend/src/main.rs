mod config;
mod error;
mod export;
mod services;
mod storage;
#[cfg(test)]
mod test_support;

use crate::config::Config;
use crate::services::auth::OAuthSetup;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{error, info};
use mime_guess::from_path;
use std::io;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Serves the bundled form. Unknown paths get `index.html` so links such as
/// `/?orderId=4711&ean=...` or deep links load the form.
async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| {
        error!("Invalid configuration: {e}");
        io::Error::other(e)
    })?;
    let sink = storage::build_sink(&config).map_err(|e| {
        error!("Could not set up storage: {e}");
        io::Error::other(e)
    })?;
    let oauth = OAuthSetup::new(&config.accounts_url, &config.public_url);

    if config.open_browser {
        let url = config.public_url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url);
        });
    }

    info!(
        "Server running at {} (storage: {})",
        config.public_url,
        sink.name()
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::from(sink.clone()))
            .app_data(web::Data::new(oauth.clone()))
            .service(services::submissions::configure_routes())
            .service(services::auth::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
