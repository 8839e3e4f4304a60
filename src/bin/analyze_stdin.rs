//! Reads a response body from stdin and prints the analysis package as JSON.
//!
//! Usage: `analyze_stdin <uri> [--contain a,b] [--not-contain c,d] [--save-dir DIR] [--content-type VALUE]`
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`.

use std::env;
use std::io::{self, Read};
use std::process::ExitCode;

use spider_document::{
    analyze_with_options, encoding, Collaborators, FileCache, KeywordSubscription, Options,
};
use tracing_subscriber::EnvFilter;

struct Args {
    uri: String,
    subscription: KeywordSubscription,
    save_dir: Option<String>,
    content_type: Option<String>,
}

fn keyword_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_args() -> Result<Args, String> {
    let mut args = env::args().skip(1);
    let mut uri = None;
    let mut subscription = KeywordSubscription::new();
    let mut save_dir = None;
    let mut content_type = None;

    while let Some(arg) = args.next() {
        let mut value = |flag: &str| args.next().ok_or_else(|| format!("{flag} needs a value"));
        match arg.as_str() {
            "--contain" => subscription = subscription.with_contain(keyword_list(&value("--contain")?)),
            "--not-contain" => {
                subscription = subscription.with_not_contain(keyword_list(&value("--not-contain")?));
            }
            "--save-dir" => save_dir = Some(value("--save-dir")?),
            "--content-type" => content_type = Some(value("--content-type")?),
            flag if flag.starts_with("--") => return Err(format!("unknown flag {flag}")),
            _ if uri.is_none() => uri = Some(arg.clone()),
            _ => return Err(format!("unexpected argument {arg}")),
        }
    }

    Ok(Args {
        uri: uri.ok_or("missing <uri>")?,
        subscription,
        save_dir,
        content_type,
    })
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}");
            eprintln!("usage: analyze_stdin <uri> [--contain a,b] [--not-contain c,d] [--save-dir DIR] [--content-type VALUE]");
            return ExitCode::from(2);
        }
    };

    let mut body = Vec::new();
    if let Err(err) = io::stdin().read_to_end(&mut body) {
        eprintln!("Failed to read from stdin: {err}");
        return ExitCode::FAILURE;
    }
    let html = encoding::transcode_to_utf8(&body, args.content_type.as_deref());

    let cache = args.save_dir.as_deref().map(FileCache::new);
    let options = Options {
        save_document: cache.is_some(),
        ..Options::default()
    };
    let mut collaborators = Collaborators::default();
    if let Some(cache) = &cache {
        collaborators = collaborators.with_cache(cache);
    }

    match analyze_with_options(&args.uri, &html, &args.subscription, &options, collaborators) {
        Ok(record) => {
            println!("{}", serde_json::to_string(&record.to_package()).unwrap_or_default());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
