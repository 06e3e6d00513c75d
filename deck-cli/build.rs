use clap::{Arg, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the CLI definition from src/main.rs.
// We need to duplicate this here since build scripts can't access src/ modules.
fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("deck")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Markdown slide decks into continuous-scroll HTML")
        .arg_required_else_help(true)
        .arg(
            Arg::new("input")
                .help("Markdown deck file or directory of decks")
                .required(true)
                .index(1)
                .value_hint(ValueHint::AnyPath),
        )
        .arg(
            Arg::new("output")
                .help("Output HTML file or directory")
                .index(2)
                .value_hint(ValueHint::AnyPath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a deck.toml configuration file")
                .value_hint(ValueHint::FilePath),
        );

    generate_to(Bash, &mut cmd, "deck", &outdir)?;
    generate_to(Zsh, &mut cmd, "deck", &outdir)?;
    generate_to(Fish, &mut cmd, "deck", &outdir)?;

    Ok(())
}
