//! Example demonstrating nested structs and dotted variable names

use envbind::EnvBind;

#[derive(Debug, Default, EnvBind)]
struct Database {
    #[env(name = "url")]
    pub url: String,

    #[env(name = "pool", default = "5")]
    pub pool: u16,
}

#[derive(Debug, Default, EnvBind)]
struct Logging {
    #[env(name = "log_level", default = "info")]
    pub level: String,
}

#[derive(Debug, Default, EnvBind)]
struct Config {
    // Annotated: fields are read as `db.url`, `db.pool`
    #[env(name = "db")]
    pub database: Database,

    // Unannotated: fields are read at this level, as `log_level`
    pub logging: Logging,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("db.url", "postgres://localhost/app");
    std::env::set_var("log_level", "debug");

    let mut config = Config::default();
    envbind::bind(&mut config)?;

    println!("Nested configuration:");
    println!("  Database URL: {}", config.database.url);
    println!("  Database Pool: {}", config.database.pool);
    println!("  Log Level: {}", config.logging.level);

    Ok(())
}
