//! Example demonstrating Option<T> fields

use envbind::EnvBind;

#[derive(Debug, Default, EnvBind)]
struct Tls {
    #[env(name = "cert")]
    pub cert: String,
}

#[derive(Debug, Default, EnvBind)]
struct Config {
    // Allocated on bind, then bound like a plain `u16`
    #[env(name = "port")]
    pub port: Option<u16>,

    // Optional nested struct, read as `tls.cert`
    #[env(name = "tls")]
    pub tls: Option<Tls>,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("port", "8080");
    std::env::set_var("tls.cert", "/etc/tls/cert.pem");

    let config = Config::from_env()?;

    println!("Configuration:");
    println!("  Port: {:?}", config.port); // Some(8080)
    println!("  TLS: {:?}", config.tls);

    Ok(())
}
