use esi2ddl_core::{async_trait, schema::db::Schema, Driver, Error, Result, Row};
use esi2ddl_sql as sql;
use tokio_postgres::{
    tls::MakeTlsConnect,
    types::ToSql,
    Client, Config, Socket,
};
use url::Url;

/// Prefix of JDBC-style connection strings, accepted for compatibility.
const JDBC_PREFIX: &str = "jdbc:";

#[derive(Debug)]
pub struct PostgreSQL {
    /// The PostgreSQL client.
    client: Client,
}

/// Credentials overriding the ones embedded in a connection URL.
#[derive(Debug, Default, Clone)]
pub struct Credentials {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl PostgreSQL {
    /// Initialize a driver using an initialized connection.
    pub fn new(connection: Client) -> Self {
        Self { client: connection }
    }

    /// Connects to a PostgreSQL database using a connection URL.
    ///
    /// See [`config`] for the accepted URL forms.
    pub async fn connect(url: &str, credentials: &Credentials) -> Result<Self> {
        let config = config(url, credentials)?;
        Self::connect_with_config(config, tokio_postgres::NoTls).await
    }

    /// Connects to a PostgreSQL database using a [`Config`].
    pub async fn connect_with_config<T>(config: Config, tls: T) -> Result<Self>
    where
        T: MakeTlsConnect<Socket> + 'static,
        T::Stream: Send,
    {
        let (client, connection) = config.connect(tls).await.map_err(Error::driver)?;

        tokio::spawn(async move {
            if let Err(e) = connection.await {
                log::error!("connection error: {e}");
            }
        });

        Ok(Self::new(client))
    }
}

#[async_trait]
impl Driver for PostgreSQL {
    /// Creates every table in a single implicit transaction: either all of
    /// them exist afterwards or none do.
    async fn create_tables(&self, schema: &Schema) -> Result<()> {
        let serializer = sql::Serializer::postgresql();
        let mut params: Vec<Option<String>> = Vec::new();
        let mut script = String::new();

        for stmt in sql::Statement::create_schema(schema) {
            script.push_str(&serializer.serialize(&stmt, &mut params));
            script.push('\n');
        }

        assert!(
            params.is_empty(),
            "creating tables shouldn't involve any parameters"
        );

        log::debug!("{script}");
        self.client
            .batch_execute(&script)
            .await
            .map_err(Error::driver)?;

        Ok(())
    }

    async fn insert(&self, schema: &Schema, row: &Row) -> Result<()> {
        let table = schema.table_by_name(&row.table).ok_or_else(|| {
            Error::invalid_schema(format!("no table named `{}`", row.table))
        })?;

        let mut params: Vec<Option<String>> = Vec::new();
        let stmt = sql::Statement::insert(table, row)?;
        let sql = sql::Serializer::postgresql().serialize(&stmt, &mut params);

        let args = params
            .iter()
            .map(|param| param as &(dyn ToSql + Sync))
            .collect::<Vec<_>>();

        log::debug!("{sql}");
        let count = self
            .client
            .execute(&sql, &args)
            .await
            .map_err(Error::driver)?;
        log::debug!("inserted {count} row(s) into {}", table.name);

        Ok(())
    }
}

/// Builds a connection configuration from a `postgres://` or
/// `postgresql://` URL. A leading `jdbc:` is ignored. Credentials, when
/// given, take precedence over the ones in the URL.
pub fn config(url: &str, credentials: &Credentials) -> Result<Config> {
    let url = Url::parse(url.strip_prefix(JDBC_PREFIX).unwrap_or(url))
        .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url}")))?;

    if !matches!(url.scheme(), "postgres" | "postgresql") {
        return Err(Error::invalid_connection_url(format!(
            "connection URL does not have a `postgresql` scheme; url={url}"
        )));
    }

    let host = url.host_str().ok_or_else(|| {
        Error::invalid_connection_url(format!("missing host in connection URL; url={url}"))
    })?;

    let dbname = url.path().trim_start_matches('/');
    if dbname.is_empty() {
        return Err(Error::invalid_connection_url(format!(
            "no database specified - missing path in connection URL; url={url}"
        )));
    }

    let mut config = Config::new();
    config.host(host);
    config.dbname(dbname);

    if let Some(port) = url.port() {
        config.port(port);
    }

    match &credentials.username {
        Some(username) => {
            config.user(username);
        }
        None if !url.username().is_empty() => {
            config.user(url.username());
        }
        None => {}
    }

    match (&credentials.password, url.password()) {
        (Some(password), _) => {
            config.password(password);
        }
        (None, Some(password)) => {
            config.password(password);
        }
        (None, None) => {}
    }

    Ok(config)
}
