use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path of the configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,

    /// Create the configuration file if it does not exist or is broken.
    #[arg(long)]
    pub create_config: bool,

    /// Create a self-signed certificate and key pair for development, then exit.
    #[arg(long)]
    pub create_selfsigned: bool,

    /// Domain the self-signed certificate is issued for, besides localhost.
    #[arg(long, requires("create_selfsigned"), default_value = "localhost")]
    pub selfsigned_domain: String,

    /// File the self-signed certificate is written to.
    #[arg(long, requires("create_selfsigned"), default_value = "cert.pem")]
    pub selfsigned_certfile: String,

    /// File the self-signed private key is written to.
    #[arg(long, requires("create_selfsigned"), default_value = "key.pem")]
    pub selfsigned_keyfile: String,
}
