use astra::{Request, Server};
use property_filters::config::AppConfig;
use property_filters::db::{init_db, Database};
use property_filters::responses::error_to_response;
use property_filters::router::handle;
use property_filters::saved::{SavedFilterStore, SqliteStore};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    let config = AppConfig::from_env();

    // RUST_LOG wins over FILTERS_LOG
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let db = Database::new(&config.db_path);
    if let Err(e) = init_db(&db) {
        error!(error = %e, "database initialization failed");
        std::process::exit(1);
    }

    let saved = SavedFilterStore::with_key(SqliteStore::new(db), config.storage_key.clone());

    info!(addr = %config.bind_addr, workers = config.max_workers, "starting server");
    let server = Server::bind(&config.bind_addr).max_workers(config.max_workers);

    let result = server.serve(move |req: Request, _info| {
        let path = req.uri().path().to_string();
        match handle(req, &saved) {
            Ok(resp) => resp,
            Err(err) => {
                warn!(%path, error = %err, "request failed");
                error_to_response(err, &path)
            }
        }
    });

    if let Err(e) = result {
        error!(error = %e, "server ended with error");
    }

    info!("server shut down");
}
