use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
mod auth;
use shacrypt::{Algorithm, Config};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AlgorithmArg {
    /// SHA-256 crypt ($5$)
    #[value(alias = "5")]
    Sha256,
    /// SHA-512 crypt ($6$)
    #[value(alias = "6")]
    Sha512,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Sha256 => Algorithm::Sha256,
            AlgorithmArg::Sha512 => Algorithm::Sha512,
        }
    }
}

#[derive(Debug, clap::Args)]
struct HashArgs {
    /// Hash algorithm
    #[arg(long, short, value_enum, default_value_t = AlgorithmArg::Sha512, env = "SHACRYPT_ALGORITHM")]
    algorithm: AlgorithmArg,

    /// Number of rounds (clamped to 1000..=999999999, default: 5000)
    #[arg(long, short, env = "SHACRYPT_ROUNDS")]
    rounds: Option<u32>,

    /// Salt characters from ./0-9A-Za-z (random if omitted)
    #[arg(long, short)]
    salt: Option<String>,

    /// Full salt specification, e.g. '$6$rounds=10000$saltsalt'
    #[arg(long, value_name = "SPEC", conflicts_with_all = ["rounds", "salt"])]
    setting: Option<String>,
}

impl HashArgs {
    fn to_config(&self) -> Result<Config> {
        let config = match &self.setting {
            Some(setting) => Config::parse(Some(setting.as_str())),
            None => Config::new(self.algorithm.into(), self.salt.as_deref(), self.rounds),
        };
        config.context("invalid hash parameters")
    }
}

#[derive(Debug, Parser)]
#[command(name = "shacrypt")]
#[command(
    version,
    about = "SHA-256 / SHA-512 Unix crypt password hashing ($5$ and $6$)."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Hashes a password and prints the crypt string
    Hash {
        #[command(flatten)]
        args: HashArgs,
    },

    /// Checks a password against an existing crypt string
    #[command(arg_required_else_help = true)]
    Verify { hash: String },
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Cli::parse();
    match args.command {
        Commands::Hash { args } => {
            let config = args.to_config()?;
            let password = auth::read_new_password_with_confirmation()?;
            println!("{}", shacrypt::encrypt_with(password.as_bytes(), &config));
        }
        Commands::Verify { hash } => {
            let password = auth::read_password()?;
            let matches = shacrypt::verify(password.as_bytes(), &hash)
                .context("unable to verify password")?;
            if !matches {
                bail!("password does not match");
            }
            println!("password matches");
        }
    }

    Ok(())
}
