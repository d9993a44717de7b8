use crate::{Cli, Source};

use esi2ddl_driver_postgresql::Credentials;
use std::path::PathBuf;

/// Where the mapping document is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingOutput {
    Stdout,
    File(PathBuf),
}

/// Settings for one run of the pipeline
#[derive(Debug, Clone)]
pub struct Config {
    /// The API document
    pub source: Source,

    /// Target database
    pub connection_url: String,

    /// Override the credentials of `connection_url`
    pub credentials: Credentials,

    /// Schema the tables are created in
    pub schema: String,

    /// Where to write the mapping document, if anywhere
    pub mapping: Option<MappingOutput>,

    /// Print the DDL instead of executing it
    pub dry_run: bool,

    pub verbose: bool,
}

impl Config {
    pub fn new(source: Source, connection_url: impl Into<String>) -> Self {
        Self {
            source,
            connection_url: connection_url.into(),
            credentials: Credentials::default(),
            schema: crate::DEFAULT_SCHEMA.to_string(),
            mapping: None,
            dry_run: false,
            verbose: false,
        }
    }

    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = schema.into();
        self
    }

    pub fn mapping(mut self, mapping: MappingOutput) -> Self {
        self.mapping = Some(mapping);
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let mut config = Config::new(cli.esi_swagger, cli.connection_url)
            .credentials(Credentials {
                username: Some(cli.username),
                password: cli.password,
            })
            .schema(cli.schema)
            .dry_run(cli.dry_run)
            .verbose(cli.verbose);

        if let Some(mapping) = cli.mapping {
            config = config.mapping(match mapping.as_str() {
                "-" => MappingOutput::Stdout,
                path => MappingOutput::File(PathBuf::from(path)),
            });
        }

        config
    }
}
