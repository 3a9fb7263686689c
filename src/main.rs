use crate::config::Config;
use crate::data::load_dataset;
use crate::responses::html_error_response;
use crate::router::handle;
use astra::Server;
use std::time::Instant;

mod charts;
mod config;
mod dashboard;
mod data;
mod errors;
mod responses;
mod router;
mod spreadsheets;
mod stats;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 1️⃣ Read configuration
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Load the base table; the dashboard is meaningless without it
    let table = match load_dataset(&config.weekdays, &config.weekends) {
        Ok(table) => table,
        Err(e) => {
            log::error!("Dataset load failed: {e}");
            std::process::exit(1);
        }
    };
    if table.is_empty() {
        log::warn!("Both sources parsed but contain no listings; every view will be empty");
    }
    log::info!(
        "Base table ready: {} listings, room types {:?}",
        table.len(),
        table.room_types()
    );

    // 3️⃣ Start the server
    log::info!("Starting server at http://{}", config.addr);
    let server = Server::bind(config.addr).max_workers(config.max_workers);

    // 4️⃣ Serve requests; the closure owns the table and lends it to every request
    let result = server.serve(move |req, _info| {
        let start = Instant::now();
        let method = req.method().clone();
        let path = req.uri().path().to_string();

        let resp = match handle(req, &table) {
            Ok(resp) => resp,
            Err(err) => {
                log::warn!("{method} {path} failed: {err}");
                html_error_response(err)
            }
        };

        log::debug!("{method} {path} -> {} in {:?}", resp.status(), start.elapsed());
        resp
    });

    if let Err(e) = result {
        log::error!("Server ended with error: {e}");
    }

    log::info!("Server shut down cleanly.");
}
