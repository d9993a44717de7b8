mod config;
pub use config::{Config, MappingOutput};

pub mod logging;

mod source;
pub use source::Source;

mod utility;
use utility::redact_url_password;

use anyhow::{Context, Result};
use clap::Parser;
use esi2ddl_core::{mapping::MAPPING_SPEC, schema::Builder, Document, Driver, Row, Schema};
use esi2ddl_driver_postgresql::PostgreSQL;
use esi2ddl_sql::Script;
use std::{io::Write, time::Instant};

/// Schema the tables are created in unless told otherwise
pub const DEFAULT_SCHEMA: &str = "public";

/// The live ESI document
pub const DEFAULT_SWAGGER: &str =
    "https://esi.evetech.net/latest/swagger.json?datasource=tranquility";

/// Derives database tables from the ESI Swagger document and creates them.
#[derive(Parser, Debug)]
#[command(name = "esi2ddl")]
#[command(version)]
pub struct Cli {
    /// Location of the Swagger document: an http(s) or file URL, or a path
    #[arg(
        short,
        long,
        env = "ESI2DDL_ESI_SWAGGER",
        value_parser = Source::parse,
        default_value = DEFAULT_SWAGGER
    )]
    pub esi_swagger: Source,

    /// Database connection URL, e.g. `postgresql://localhost:5432/esi`
    #[arg(short, long, env = "ESI2DDL_CONNECTION_URL")]
    pub connection_url: String,

    /// Database user
    #[arg(short, long, env = "ESI2DDL_USERNAME", default_value = "postgres")]
    pub username: String,

    /// Database password
    #[arg(short, long, env = "ESI2DDL_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Schema the tables are created in
    #[arg(short, long, env = "ESI2DDL_SCHEMA", default_value = DEFAULT_SCHEMA)]
    pub schema: String,

    /// Write the mapping document to this file, or to stdout when `-`
    #[arg(short, long, env = "ESI2DDL_MAPPING")]
    pub mapping: Option<String>,

    /// Print the DDL instead of executing it
    #[arg(short, long, env = "ESI2DDL_DRY_RUN")]
    pub dry_run: bool,

    /// Log every derivation decision
    #[arg(short, long, env = "ESI2DDL_VERBOSE")]
    pub verbose: bool,
}

/// Runs the whole pipeline: parse the document, derive the schema, write
/// the mapping document, then create the tables.
///
/// Text meant for the user (the dry-run script, the mapping document when
/// sent to stdout) goes to `out`. Nothing is written unless the schema and
/// its mapping row were derived successfully.
pub async fn run(config: &Config, out: &mut (dyn Write + Send)) -> Result<()> {
    let start = Instant::now();

    let doc = step("parse document", parse(config)).await?;
    let (schema, row) = step("build schema", async { build(config, &doc) }).await?;
    step("write mapping", async { write_mapping(config, &row, out) }).await?;
    step("upload ddl", upload(config, &schema, &row, out)).await?;

    log::info!("done in {}ms", start.elapsed().as_millis());
    Ok(())
}

async fn step<T>(name: &str, f: impl std::future::Future<Output = Result<T>>) -> Result<T> {
    let start = Instant::now();
    let ret = f.await.with_context(|| format!("{name} failed"))?;
    log::info!("{name}: {}ms", start.elapsed().as_millis());
    Ok(ret)
}

async fn parse(config: &Config) -> Result<Document> {
    log::info!("reading {}", config.source);

    let bytes = config.source.fetch().await?;
    Ok(Document::from_slice(&bytes)?)
}

/// Derives the schema along with the mapping row, so an oversized mapping
/// document fails before anything is written.
fn build(config: &Config, doc: &Document) -> Result<(Schema, Row)> {
    let schema = Builder::new().schema(&config.schema).build(doc)?;
    let row = schema.mapping.row()?;
    Ok((schema, row))
}

fn write_mapping(config: &Config, row: &Row, out: &mut (dyn Write + Send)) -> Result<()> {
    let json = row
        .get(MAPPING_SPEC)
        .context("mapping row has no mapping document")?;

    match &config.mapping {
        Some(MappingOutput::File(path)) => {
            std::fs::write(path, json)
                .with_context(|| format!("writing {}", path.display()))?;
            log::info!("mapping written to {}", path.display());
        }
        Some(MappingOutput::Stdout) => writeln!(out, "{json}")?,
        None if config.verbose => writeln!(out, "{json}")?,
        None => {}
    }

    Ok(())
}

async fn upload(
    config: &Config,
    schema: &Schema,
    row: &Row,
    out: &mut (dyn Write + Send),
) -> Result<()> {
    if config.dry_run {
        let script = Script::new();
        create(&script, schema, row).await?;
        write!(out, "{}", script.sql())?;
        return Ok(());
    }

    log::info!(
        "connecting to {}",
        redact_url_password(&config.connection_url)
    );
    let driver = PostgreSQL::connect(&config.connection_url, &config.credentials).await?;
    create(&driver, schema, row).await
}

/// Creates the tables, then records the mapping document in its reserved
/// table.
async fn create(driver: &dyn Driver, schema: &Schema, row: &Row) -> Result<()> {
    driver.create_tables(&schema.db).await?;
    log::info!("created {} tables", schema.db.tables.len());

    driver.insert(&schema.db, row).await?;
    Ok(())
}
