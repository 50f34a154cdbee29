// altspell: restore native letters in text from stdin.
//
// Usage:
//   altspell [OPTIONS] <LANGUAGE> < input.txt > output.txt
//
// Examples:
//   echo "Gruesse aus Koeln" | altspell de
//   echo "Kuechenfeuer" | altspell --force de
//   echo "Grüße" | altspell --reverse de

use std::io::{self, Write};

use clap::Parser;

use altspell_cli::{Args, init_logging, run};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    run(&args, stdin.lock(), &mut out, &mut io::stderr())?;
    out.flush()?;
    Ok(())
}
