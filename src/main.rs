use std::{io, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use inventory_tracker::{
    cli::{self, Cli},
    config::{self, AppConfig},
    db::{self, DbPool},
    errors::AppError,
    services::InventoryService,
};
use tracing::{debug, info};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let context = CliContext::initialize(cli.database.clone()).await?;

    let result = {
        let service = context.inventory_service();
        let mut stdout = io::stdout();
        cli::execute(&service, cli.command, cli.json, &mut stdout).await
    };

    let closed = context.shutdown().await;

    match cli::settle(result, closed) {
        Ok(()) => Ok(()),
        Err(err) if err.is_user_error() => {
            eprintln!("{}", err);
            std::process::exit(err.exit_code());
        }
        Err(err) => Err(err).context("inventory command failed"),
    }
}

struct CliContext {
    _config: AppConfig,
    db: Arc<DbPool>,
}

impl CliContext {
    async fn initialize(database_override: Option<String>) -> Result<Self> {
        let mut config = config::load_config().context("failed to load application config")?;
        config::init_tracing(config.log_level(), config.log_json);

        if let Some(url) = database_override {
            config
                .override_database_url(url)
                .context("invalid --database value")?;
        }

        info!(environment = %config.environment, "Opening inventory database");
        let db_pool = db::open(&config)
            .await
            .context("failed to open inventory database")?;

        Ok(Self {
            _config: config,
            db: Arc::new(db_pool),
        })
    }

    fn inventory_service(&self) -> InventoryService {
        InventoryService::new(self.db.clone())
    }

    async fn shutdown(self) -> Result<(), AppError> {
        match Arc::try_unwrap(self.db) {
            Ok(pool) => db::close_pool(pool).await?,
            Err(_) => debug!("database handle still shared at shutdown; dropping it"),
        }
        Ok(())
    }
}
