use cipherkit::cli::{run_codec, show_grid, Direction};
use cipherkit::{CipherError, CipherKind, Key, Matrix, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Version info from build.rs
const VERSION: &str = env!("CIPHERKIT_VERSION");
const BUILD: &str = env!("CIPHERKIT_BUILD");
const PROFILE: &str = env!("CIPHERKIT_PROFILE");
const GIT_HASH: &str = env!("CIPHERKIT_GIT_HASH");

/// Combined version string (compile-time concatenation not possible, so we build at runtime)
fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| {
        format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH)
    })
}

#[derive(Parser)]
#[command(name = "cipherkit")]
#[command(author, about = "Classical substitution and transposition cipher toolkit", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text with the selected cipher
    #[command(alias = "e")]
    Encrypt {
        #[command(flatten)]
        key: KeyArgs,

        /// Text to encrypt
        text: String,

        /// Write the result to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Decrypt text with the selected cipher
    #[command(alias = "d")]
    Decrypt {
        #[command(flatten)]
        key: KeyArgs,

        /// Text to decrypt
        text: String,

        /// Write the result to a file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Show the Playfair square derived from a keyword
    #[command(alias = "g")]
    Grid {
        /// Grid keyword (letters only)
        keyword: String,
    },
}

#[derive(Args)]
struct KeyArgs {
    /// Cipher: caesar, affine, vigenere, playfair, hill, railfence, rowtransposition
    #[arg(short, long, default_value = "caesar", value_parser = parse_kind)]
    cipher: CipherKind,

    /// Caesar shift value (0-25)
    #[arg(long, default_value_t = 3)]
    shift: u8,

    /// Affine multiplier; must be coprime with 26
    #[arg(long, default_value_t = 5)]
    key_a: i64,

    /// Affine offset (0-25)
    #[arg(long, default_value_t = 8)]
    key_b: i64,

    /// Keyword for vigenere, playfair and rowtransposition
    #[arg(long)]
    keyword: Option<String>,

    /// Hill key matrix as JSON rows, e.g. "[[3,3],[2,5]]"
    #[arg(long)]
    matrix: Option<String>,

    /// Number of rails for railfence (2 or more)
    #[arg(long, default_value_t = 3)]
    rails: usize,

    /// Explicit column read-out order for rowtransposition, e.g. "6,3,2,4,1,5"
    #[arg(long)]
    order: Option<String>,
}

impl KeyArgs {
    /// Assemble validated key material for the selected cipher, falling
    /// back to the same defaults the original form prefilled
    fn into_key(self) -> Result<Key> {
        match self.cipher {
            CipherKind::Caesar => Key::caesar(self.shift),
            CipherKind::Affine => Key::affine(self.key_a, self.key_b),
            CipherKind::Vigenere => Key::vigenere(self.keyword.as_deref().unwrap_or("KEY")),
            CipherKind::Playfair => Key::playfair(self.keyword.as_deref().unwrap_or("MONARCHY")),
            CipherKind::Hill => {
                let json = self.matrix.ok_or_else(|| {
                    CipherError::InvalidKey("hill cipher requires --matrix".into())
                })?;
                Key::hill(serde_json::from_str::<Matrix>(&json)?)
            }
            CipherKind::RailFence => {
                if self.rails < 2 {
                    return Err(CipherError::InvalidKey(
                        "number of rails must be 2 or more".into(),
                    ));
                }
                Key::rail_fence(self.rails)
            }
            CipherKind::RowTransposition => match self.order {
                Some(order) => {
                    let positions = order
                        .split(',')
                        .map(|p| {
                            p.trim().parse::<usize>().map_err(|_| {
                                CipherError::InvalidKey(
                                    "column order must be comma-separated numbers".into(),
                                )
                            })
                        })
                        .collect::<Result<Vec<_>>>()?;
                    Key::row_transposition_order(&positions)
                }
                None => Key::row_transposition_keyword(
                    self.keyword.as_deref().unwrap_or("ZEBRAS"),
                ),
            },
        }
    }
}

fn parse_kind(s: &str) -> std::result::Result<CipherKind, String> {
    s.parse().map_err(|e| format!("{}", e))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle --version flag
    if cli.version {
        println!("cipherkit {}", get_version());
        return ExitCode::SUCCESS;
    }

    // Require a command if not showing version
    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // Show help when no command provided
            use clap::CommandFactory;
            Cli::command().print_help().unwrap();
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Encrypt { key, text, output } => key.into_key().and_then(|key| {
            let result = run_codec(Direction::Encrypt, &key, &text, output.as_deref())?;
            match output {
                Some(path) => println!("Wrote {}", path.display()),
                None => println!("{}", result),
            }
            Ok(())
        }),

        Commands::Decrypt { key, text, output } => key.into_key().and_then(|key| {
            let result = run_codec(Direction::Decrypt, &key, &text, output.as_deref())?;
            match output {
                Some(path) => println!("Wrote {}", path.display()),
                None => println!("{}", result),
            }
            Ok(())
        }),

        Commands::Grid { keyword } => match show_grid(&keyword) {
            Ok(grid) => {
                print!("{}", grid);
                Ok(())
            }
            Err(e) => Err(e),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
