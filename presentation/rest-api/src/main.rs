use dotenvy::dotenv;

mod api {
    pub mod error;
    pub mod security;
    pub mod tags;
    pub mod account {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod admin {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod basket {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod catalog {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod category {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod checkout {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod feedback {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod health {
        pub mod routes;
    }
    pub mod my_products {
        pub mod dto;
        pub mod routes;
    }
    pub mod wishlist {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
}
mod config {
    pub mod app_config;
    pub mod cors_config;
    pub mod database_config;
    pub mod images_config;
    pub mod jwt_config;
    pub mod server_config;
}
mod setup {
    pub mod dependency_injection;
    pub mod server;
}

use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API Entry Point
///
/// Initializes the application, wires dependencies, and starts the HTTP server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Initialize database and apply migrations
    let pool = database_config::init_database().await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(pool).await?;

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}
