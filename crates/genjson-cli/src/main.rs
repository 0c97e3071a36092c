//! `genjson` CLI — read, edit and search JSON documents by path.
//!
//! ## Usage
//!
//! ```sh
//! # Read a value (stdin → stdout)
//! echo '{"a":{"b":[1,2,3]}}' | genjson get a.b.1
//!
//! # Read with a type check
//! genjson -i data.json get user.age --as int
//!
//! # Replace or insert a value, print the edited document
//! genjson -i data.json set user.name '"Bob"'
//!
//! # Remove an array element or object member
//! genjson -i data.json -o out.json delete items.0
//!
//! # Find the first item whose "ok" member is true
//! genjson -i data.json scan items.-1 --key ok --equals true
//!
//! # Paths may also be JSON arrays, for keys that look like numbers
//! genjson -i data.json get '["2024", 0]'
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use genjson::{Config, GenJson, Path, Value};
use std::io::{self, Read};
use std::process;

#[derive(Parser)]
#[command(
    name = "genjson",
    version,
    about = "Query and edit JSON documents by path"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Input file (reads from stdin if omitted)
    #[arg(short, long, global = true)]
    input: Option<String>,

    /// Output file (writes to stdout if omitted)
    #[arg(short, long, global = true)]
    output: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Log every path resolution to stderr
    #[arg(long, global = true)]
    trace: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the value at PATH
    Get {
        /// Dotted path (`a.0.b`) or JSON array (`["a", 0, "b"]`)
        path: String,
        /// Require the value to have this type
        #[arg(long = "as", value_enum, default_value_t = Kind::Any)]
        kind: Kind,
    },
    /// Install VALUE (JSON text) at PATH and print the document
    Set {
        path: String,
        value: String,
    },
    /// Remove the member or element at PATH and print the document
    Delete {
        path: String,
    },
    /// Print the first node under PATH (`-1` = any element) that has KEY
    Scan {
        path: String,
        /// Member the node must contain
        #[arg(long)]
        key: String,
        /// JSON value the member must equal
        #[arg(long)]
        equals: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    Any,
    Bool,
    Int,
    Float,
    String,
    Array,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.trace);

    let text = read_input(cli.input.as_deref())?;
    let root = genjson::codec::decode_str(&text).context("Failed to parse input JSON")?;
    let mut doc = GenJson::with_config(root, Config::default().with_trace(cli.trace));

    let rendered = match cli.command {
        Commands::Get { path, kind } => {
            let path = parse_path(&path)?;
            let value = get(&doc, &path, kind)?;
            render(&value, cli.pretty)?
        }
        Commands::Set { path, value } => {
            let path = parse_path(&path)?;
            let value = genjson::codec::decode_str(&value)
                .with_context(|| format!("VALUE is not valid JSON: {}", value))?;
            doc.set(value, &path)
                .with_context(|| format!("Failed to set {}", path))?;
            render(doc.root(), cli.pretty)?
        }
        Commands::Delete { path } => {
            let path = parse_path(&path)?;
            doc.delete(&path)
                .with_context(|| format!("Failed to delete {}", path))?;
            render(doc.root(), cli.pretty)?
        }
        Commands::Scan { path, key, equals } => {
            let path = parse_path(&path)?;
            let expected = equals
                .as_deref()
                .map(genjson::codec::decode_str)
                .transpose()
                .context("--equals is not valid JSON")?;
            let predicate = |node: &Value| match (node.get(&key), &expected) {
                (Some(found), Some(expected)) => found == expected,
                (Some(_), None) => true,
                (None, _) => false,
            };
            let Some(hit) = doc.scan_object(predicate, &path) else {
                eprintln!("No match for {} under {}", key, path);
                process::exit(1);
            };
            let mut report = genjson::Map::new();
            report.insert("path".to_string(), path_to_value(&hit.path));
            report.insert("value".to_string(), hit.value.clone());
            render(&Value::Object(report), cli.pretty)?
        }
    };

    write_output(cli.output.as_deref(), &rendered)
}

/// Route `genjson` trace events (forwarded by `tracing` to `log`) to stderr.
fn init_logging(trace: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if trace {
        builder.filter_module("genjson", log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn parse_path(text: &str) -> Result<Path> {
    Path::parse(text).with_context(|| format!("Invalid path: {}", text))
}

fn get(doc: &GenJson, path: &Path, kind: Kind) -> Result<Value> {
    let context = || format!("Failed to read {}", path);
    let value = match kind {
        Kind::Any => doc.unwind(path).with_context(context)?.clone(),
        Kind::Bool => doc.bool(path).with_context(context)?.into(),
        Kind::Int => doc.int(path).with_context(context)?.into(),
        Kind::Float => doc.float(path).with_context(context)?.into(),
        Kind::String => doc.string(path).with_context(context)?.into(),
        Kind::Array => Value::Array(doc.array(path).with_context(context)?.to_vec()),
    };
    Ok(value)
}

fn path_to_value(path: &Path) -> Value {
    path.iter()
        .map(|segment| match segment {
            genjson::Segment::Key(key) => Value::from(key.as_str()),
            genjson::Segment::Index(index) => Value::from(*index),
        })
        .collect()
}

fn render(value: &Value, pretty: bool) -> Result<String> {
    let text = if pretty {
        genjson::codec::encode_pretty(value)?
    } else {
        genjson::codec::encode_string(value)?
    };
    Ok(text + "\n")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
