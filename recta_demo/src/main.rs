use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::{debug, LevelFilter};
use recta_core::{Autoclave, Cipher, LATIN};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "recta",
    author,
    version,
    about = "Classical cipher toolbox (tabula recta and friends)"
)]
struct Cli {
    #[arg(long, global = true)]
    debug: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CipherArg {
    Vigenere,
    Beaufort,
    VariantBeaufort,
    Gronsfeld,
    DellaPorta,
    Trithemius,
    Caesar,
    Decimation,
    Affine,
    Atbash,
    Keyword,
    Simple,
}

#[derive(Args, Clone, Debug)]
struct CipherOpts {
    #[arg(long, value_enum)]
    cipher: CipherArg,
    /// Plaintext alphabet; empty selects the Latin uppercase default.
    #[arg(long, default_value = "")]
    alphabet: String,
    /// Countersign for the polyalphabetic ciphers.
    #[arg(long, default_value = "")]
    key: String,
    #[arg(long, default_value_t = 0)]
    shift: i64,
    #[arg(long, default_value_t = 1)]
    multiplier: i64,
    #[arg(long, default_value_t = 0)]
    intercept: i64,
    #[arg(long, default_value = "")]
    keyword: String,
    /// Ciphertext alphabet for the simple substitution cipher.
    #[arg(long, default_value = "")]
    ct_alphabet: String,
    #[arg(long)]
    strict: bool,
    #[arg(long)]
    caseless: bool,
    #[arg(long)]
    text_autoclave: bool,
    #[arg(long)]
    key_autoclave: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Encipher a message.
    Encipher {
        #[command(flatten)]
        opts: CipherOpts,
        #[arg(value_name = "MESSAGE")]
        message: Option<String>,
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
    },
    /// Decipher a message.
    Decipher {
        #[command(flatten)]
        opts: CipherOpts,
        #[arg(value_name = "MESSAGE")]
        message: Option<String>,
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
    },
    /// Print the cipher's tableau.
    Tableau {
        #[command(flatten)]
        opts: CipherOpts,
    },
    /// Process a JSON request document.
    Run {
        #[arg(value_name = "FILE")]
        request: PathBuf,
    },
    /// Run a short multi-variant demonstration.
    Demo {
        #[arg(default_value = "HELLO, WORLD!")]
        message: String,
    },
}

/// JSON request shape consumed by `run`; field names match the CLI flags.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
struct CipherRequest {
    cipher: String,
    direction: String,
    alphabet: String,
    message: String,
    key: String,
    shift: i64,
    multiplier: i64,
    intercept: i64,
    keyword: String,
    ct_alphabet: String,
    strict: bool,
    caseless: bool,
    text_autoclave: bool,
    key_autoclave: bool,
}

impl Default for CipherRequest {
    fn default() -> Self {
        Self {
            cipher: String::new(),
            direction: "encipher".to_string(),
            alphabet: String::new(),
            message: String::new(),
            key: String::new(),
            shift: 0,
            multiplier: 1,
            intercept: 0,
            keyword: String::new(),
            ct_alphabet: String::new(),
            strict: false,
            caseless: false,
            text_autoclave: false,
            key_autoclave: false,
        }
    }
}

impl CipherRequest {
    fn from_opts(opts: &CipherOpts) -> Self {
        Self {
            alphabet: opts.alphabet.clone(),
            key: opts.key.clone(),
            shift: opts.shift,
            multiplier: opts.multiplier,
            intercept: opts.intercept,
            keyword: opts.keyword.clone(),
            ct_alphabet: opts.ct_alphabet.clone(),
            strict: opts.strict,
            caseless: opts.caseless,
            text_autoclave: opts.text_autoclave,
            key_autoclave: opts.key_autoclave,
            ..Self::default()
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);
    match cli.command {
        Commands::Encipher {
            opts,
            message,
            input,
        } => {
            let cipher = build_cipher(opts.cipher, &CipherRequest::from_opts(&opts))?;
            let message = resolve_message(message, input)?;
            println!("{}", cipher.encipher(&message));
            Ok(())
        }
        Commands::Decipher {
            opts,
            message,
            input,
        } => {
            let cipher = build_cipher(opts.cipher, &CipherRequest::from_opts(&opts))?;
            let message = resolve_message(message, input)?;
            println!("{}", cipher.decipher(&message));
            Ok(())
        }
        Commands::Tableau { opts } => {
            let cipher = build_cipher(opts.cipher, &CipherRequest::from_opts(&opts))?;
            println!("{}", cipher.tableau());
            Ok(())
        }
        Commands::Run { request } => cmd_run(&request),
        Commands::Demo { message } => cmd_demo(&message),
    }
}

fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(default));
    builder.format_timestamp(None);
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    let _ = builder.try_init();
}

fn build_cipher(arg: CipherArg, req: &CipherRequest) -> Result<Box<dyn Cipher>> {
    let alphabet = if req.alphabet.is_empty() {
        LATIN
    } else {
        req.alphabet.as_str()
    };
    let autoclave = Autoclave::from_flags(req.text_autoclave, req.key_autoclave)?;
    debug!(
        "building {:?} over {} runes (strict={}, caseless={}, autoclave={:?})",
        arg,
        alphabet.chars().count(),
        req.strict,
        req.caseless,
        autoclave
    );
    let cipher: Box<dyn Cipher> = match arg {
        CipherArg::Vigenere => Box::new(recta_core::vigenere(
            alphabet,
            &req.key,
            autoclave,
            req.strict,
            req.caseless,
        )?),
        CipherArg::Beaufort => Box::new(recta_core::beaufort(
            alphabet,
            &req.key,
            autoclave,
            req.strict,
            req.caseless,
        )?),
        CipherArg::VariantBeaufort => Box::new(recta_core::variant_beaufort(
            alphabet,
            &req.key,
            autoclave,
            req.strict,
            req.caseless,
        )?),
        CipherArg::Gronsfeld => Box::new(recta_core::gronsfeld(
            alphabet,
            &req.key,
            autoclave,
            req.strict,
            req.caseless,
        )?),
        CipherArg::DellaPorta => Box::new(recta_core::della_porta(
            alphabet,
            &req.key,
            autoclave,
            req.strict,
            req.caseless,
        )?),
        CipherArg::Trithemius => Box::new(recta_core::trithemius(
            alphabet,
            autoclave,
            req.strict,
            req.caseless,
        )?),
        CipherArg::Caesar => Box::new(recta_core::caesar(
            alphabet,
            req.shift,
            req.strict,
            req.caseless,
        )?),
        CipherArg::Decimation => Box::new(recta_core::decimation(
            alphabet,
            req.multiplier,
            req.strict,
            req.caseless,
        )?),
        CipherArg::Affine => Box::new(recta_core::affine(
            alphabet,
            req.multiplier,
            req.intercept,
            req.strict,
            req.caseless,
        )?),
        CipherArg::Atbash => Box::new(recta_core::atbash(alphabet, req.strict, req.caseless)?),
        CipherArg::Keyword => Box::new(recta_core::keyword(
            alphabet,
            &req.keyword,
            req.strict,
            req.caseless,
        )?),
        CipherArg::Simple => Box::new(recta_core::simple(
            alphabet,
            &req.ct_alphabet,
            req.strict,
            req.caseless,
        )?),
    };
    Ok(cipher)
}

fn resolve_message(message: Option<String>, input: Option<PathBuf>) -> Result<String> {
    match (message, input) {
        (Some(text), None) => Ok(text),
        (None, Some(path)) => {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("reading message from {}", path.display()))?;
            Ok(text.trim_end_matches('\n').to_string())
        }
        (Some(_), Some(_)) => bail!("pass a message or --input, not both"),
        (None, None) => bail!("no message given; pass one inline or via --input"),
    }
}

fn cmd_run(path: &Path) -> Result<()> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading request from {}", path.display()))?;
    let req: CipherRequest =
        serde_json::from_str(&raw).with_context(|| format!("decoding {}", path.display()))?;
    let arg = CipherArg::from_str(&req.cipher, true)
        .map_err(|_| anyhow::anyhow!("unknown cipher '{}'", req.cipher))?;
    let cipher = build_cipher(arg, &req)?;
    let output = match req.direction.as_str() {
        "encipher" => cipher.encipher(&req.message),
        "decipher" => cipher.decipher(&req.message),
        other => bail!("unknown direction '{}'", other),
    };
    println!("{}", output);
    Ok(())
}

fn cmd_demo(message: &str) -> Result<()> {
    let cases: Vec<(&str, Box<dyn Cipher>)> = vec![
        (
            "vigenere (key KANGAROO)",
            Box::new(recta_core::vigenere(
                LATIN, "KANGAROO", Autoclave::None, false, false,
            )?),
        ),
        (
            "beaufort (key Q)",
            Box::new(recta_core::beaufort(
                LATIN, "Q", Autoclave::None, false, false,
            )?),
        ),
        (
            "della-porta (key KANGAROO)",
            Box::new(recta_core::della_porta(
                LATIN, "KANGAROO", Autoclave::None, false, false,
            )?),
        ),
        (
            "vigenere text-autoclave (key A)",
            Box::new(recta_core::vigenere(
                LATIN, "A", Autoclave::Text, false, false,
            )?),
        ),
        (
            "caesar (shift 3)",
            Box::new(recta_core::caesar(LATIN, 3, false, false)?),
        ),
        ("atbash", Box::new(recta_core::atbash(LATIN, false, false)?)),
    ];
    println!("message: {}", message);
    for (name, cipher) in &cases {
        let ct = cipher.encipher(message);
        let pt = cipher.decipher(&ct);
        println!("{:<32} {}   (deciphers to: {})", name, ct, pt);
    }
    Ok(())
}
