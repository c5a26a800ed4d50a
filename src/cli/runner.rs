//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::client::{ClientConfig, Credentials, SocieClient};
use crate::error::{Error, Result, ResultExt};
use crate::schema::StructGenerator;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::info;

/// Read a JSON array from disk and render the inferred declaration.
///
/// This is the offline path behind the `infer` subcommand; it produces the
/// same declaration as calling the generator on the parsed records directly.
pub fn infer_from_file(file: &Path, name: &str) -> Result<String> {
    let contents = fs::read_to_string(file)
        .with_context(|| format!("reading sample file {}", file.display()))?;
    let value: Value = serde_json::from_str(&contents)?;

    let records = match value {
        Value::Array(records) => records,
        _ => return Err(Error::invalid_sample(file.display().to_string())),
    };

    Ok(StructGenerator::new().generate_code(name, &records))
}

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Generate {
                collection,
                name,
                limit,
            } => self.generate(collection, name, *limit).await,
            Commands::Infer { file, name } => self.infer(file, name),
            Commands::Modules => self.modules().await,
        }
    }

    /// Fetch a collection from the API and print the inferred declaration
    async fn generate(&self, collection: &str, name: &str, limit: Option<usize>) -> Result<()> {
        let client = self.login().await?;

        let mut records = client.collection(collection).await?;
        if let Some(limit) = limit {
            records.truncate(limit);
        }
        info!("Sampled {} records from '{collection}'", records.len());

        let code = StructGenerator::new().generate_code(name, &records);
        println!("{code}");
        Ok(())
    }

    /// Infer a declaration from a local JSON array file
    fn infer(&self, file: &Path, name: &str) -> Result<()> {
        let code = infer_from_file(file, name)?;
        println!("{code}");
        Ok(())
    }

    /// List modules of the community
    async fn modules(&self) -> Result<()> {
        let client = self.login().await?;

        for module in client.modules().await? {
            let state = if module.is_enabled { "enabled" } else { "disabled" };
            println!("{}  {}  ({state})", module.id, module.name);
        }
        Ok(())
    }

    /// Build a client from flags + environment and log in
    async fn login(&self) -> Result<SocieClient> {
        let mut config = match &self.cli.app_id {
            Some(app_id) => ClientConfig::new(app_id.clone()),
            None => ClientConfig::from_env()?,
        };
        if let Some(base_url) = &self.cli.base_url {
            config.base_url = base_url.clone();
        }

        let mut client = SocieClient::new(config);
        client.login(&Credentials::from_env()?).await?;
        Ok(client)
    }
}
