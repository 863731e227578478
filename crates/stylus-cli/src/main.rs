use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use stylus_ast::Root;
use stylus_codegen::{Dialect, Options};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stylus-convert")]
#[command(about = "Convert parsed Stylus syntax trees to SCSS or Less")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a serialized Stylus tree (JSON) to SCSS or Less
    Convert {
        /// Input tree file (.json)
        path: String,

        /// Output dialect
        #[arg(long, value_enum, default_value_t = DialectArg::Scss)]
        dialect: DialectArg,

        /// Quote used for generated map keys
        #[arg(long, default_value_t = '\'')]
        quote: char,

        /// Do not emit vendor-prefixed @keyframes
        #[arg(long)]
        no_autoprefix: bool,

        /// Spaces to indent every output line by
        #[arg(long, default_value_t = 0)]
        host_indent: usize,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check that a tree loads and converts without writing output
    Check {
        /// Input tree file (.json)
        path: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum DialectArg {
    Scss,
    Less,
}

impl From<DialectArg> for Dialect {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::Scss => Dialect::Scss,
            DialectArg::Less => Dialect::Less,
        }
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Convert {
            path,
            dialect,
            quote,
            no_autoprefix,
            host_indent,
            output,
        } => {
            let options = Options::default()
                .with_dialect(dialect.into())
                .with_quote(quote)
                .with_autoprefix(!no_autoprefix)
                .with_host_indent(host_indent);
            cmd_convert(&path, &options, output.as_deref());
        }
        Command::Check { path } => cmd_check(&path),
    }
}

/// Install a stderr subscriber when `STYLUS_LOG` or `RUST_LOG` is set.
fn init_tracing() {
    let filter = match std::env::var("STYLUS_LOG") {
        Ok(directives) => EnvFilter::builder().parse_lossy(directives),
        Err(_) if std::env::var("RUST_LOG").is_ok() => EnvFilter::from_default_env(),
        Err(_) => return,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_tree(path: &str) -> Root {
    let p = Path::new(path);
    if !p.exists() {
        eprintln!("Error: file not found: {path}");
        std::process::exit(1);
    }
    let source = match std::fs::read_to_string(p) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    };
    match Root::from_json(&source) {
        Ok(root) => root,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn cmd_convert(path: &str, options: &Options, output: Option<&Path>) {
    let root = read_tree(path);
    tracing::debug!(path, nodes = root.nodes.len(), "loaded tree");

    let text = match stylus_codegen::convert(&root, options) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    match output {
        Some(out) => {
            if let Err(e) = std::fs::write(out, &text) {
                eprintln!("Error writing {}: {e}", out.display());
                std::process::exit(1);
            }
            eprintln!("Converted: {}", out.display());
        }
        None => print!("{text}"),
    }
}

fn cmd_check(path: &str) {
    let root = read_tree(path);

    if let Err(e) = stylus_codegen::convert(&root, &Options::default()) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    eprintln!("OK: {path}");
}
