use log::{error, info};
use mongodb::bson::doc;
use mongodb::{Client, options::ClientOptions};

use crate::config::Config;

pub struct Database {
    pub client: Client,
}

impl Database {
    pub async fn init(config: &Config) -> Result<Self, mongodb::error::Error> {
        let mut client_options = ClientOptions::parse(&config.database_url).await?;
        client_options.app_name = Some("blog-api".to_string());

        let client = Client::with_options(client_options)?;

        // Ping to confirm the cluster is reachable before serving traffic
        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;

        info!("connected to MongoDB at {}", config.database_url);

        Ok(Self { client })
    }
}

pub async fn connect(config: &Config) -> Result<Client, mongodb::error::Error> {
    let database = Database::init(config).await.map_err(|e| {
        error!("failed to initialize database: {e}");
        e
    })?;
    Ok(database.client)
}
