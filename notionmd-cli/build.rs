use clap::{Arg, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the command tree in src/main.rs; build scripts can't reach src/.
const FORMATS: &[&str] = &["markdown", "notion-json"];

fn page_id_arg() -> Arg {
    Arg::new("page-id")
        .help("Page ID or URL")
        .required(true)
        .index(1)
        .value_hint(ValueHint::Other)
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("notionmd")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Notion pages to and from Markdown")
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("get").arg(page_id_arg()).arg(
                Arg::new("output")
                    .short('o')
                    .long("output")
                    .value_hint(ValueHint::FilePath),
            ),
        )
        .subcommand(
            Command::new("append").arg(page_id_arg()).arg(
                Arg::new("file")
                    .required(true)
                    .index(2)
                    .value_hint(ValueHint::FilePath),
            ),
        )
        .subcommand(
            Command::new("create")
                .arg(Arg::new("title").required(true).index(1))
                .arg(
                    Arg::new("file")
                        .required(true)
                        .index(2)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(Arg::new("parent").long("parent")),
        )
        .subcommand(
            Command::new("convert")
                .arg(
                    Arg::new("input")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .value_parser(clap::builder::PossibleValuesParser::new(FORMATS)),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .required(true)
                        .value_parser(clap::builder::PossibleValuesParser::new(FORMATS)),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(Command::new("serve").arg(Arg::new("port").long("port")));

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "notionmd", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "notionmd", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "notionmd", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
