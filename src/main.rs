use {
  anyhow::Context,
  arguments::Arguments,
  clap::Parser,
  feedbasket::{Error, ExtractOptions, Extractor},
  std::{
    io::{self, IsTerminal, Read, Write},
    process,
  },
  tracing::debug,
  tracing_subscriber::EnvFilter,
};

mod arguments;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

/// Logs go to stderr; stdout carries nothing but the extraction.
fn init_tracing() {
  let filter = EnvFilter::try_from_env("FEEDBASKET_LOG")
    .unwrap_or_else(|_| EnvFilter::new("feedbasket=warn"));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .with_ansi(io::stderr().is_terminal())
    .with_target(false)
    .init();
}

fn main() {
  init_tracing();

  if let Err(error) = Arguments::parse().run() {
    eprintln!("error: {error}");
    process::exit(1);
  }
}
