// Command-line interface for notionmd
//
// This binary reads Notion pages as Markdown, writes Markdown into Notion and
// serves the same operations over HTTP. The conversion itself lives in
// notionmd-babel; page operations live in notionmd-service.
//
// Usage:
//  notionmd get <pageId> [-o FILE]                         - Print a page as Markdown
//  notionmd append <pageId> <file>                         - Append a Markdown file to a page
//  notionmd create <title> <file> [--parent <pageId>]      - Create a page from a Markdown file
//  notionmd convert <input> --to <format> [--from <format>] [-o FILE]
//                                                          - Offline conversion, no token needed
//  notionmd serve [--port N]                               - Run the HTTP API
//
// Configuration is layered: embedded defaults, ./notionmd.toml, --config, then
// environment variables (NOTION_TOKEN, API_KEY, PORT, NOTION_DATABASE_ID,
// NOTIONMD_LOG). Every failure prints to stderr and exits with status 1.

use clap::{Arg, Command, ValueHint};
use notionmd_babel::{FormatRegistry, PageId};
use notionmd_config::{AppConfig, Loader, LOCAL_CONFIG_FILE};
use notionmd_service::{Api, DocumentService, NotionClient};
use std::fs;
use std::future::Future;
use std::io::ErrorKind;
use std::str::FromStr;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

fn page_id_arg() -> Arg {
    Arg::new("page-id")
        .help("Page ID (dashed or compact UUID) or Notion page URL")
        .required(true)
        .index(1)
        .value_hint(ValueHint::Other)
}

fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .help("Write to FILE instead of stdout")
        .value_hint(ValueHint::FilePath)
}

fn build_cli() -> Command {
    Command::new("notionmd")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Notion pages to and from Markdown")
        .long_about(
            "notionmd reads Notion pages as Markdown and writes Markdown into Notion.\n\n\
            Environment:\n  \
            NOTION_TOKEN        Notion integration token (required for get/append/create)\n  \
            API_KEY             Bearer token clients must present to `serve`\n  \
            PORT                Port for `serve` (default 8000)\n  \
            NOTION_DATABASE_ID  Parent database for `create` without --parent\n  \
            NOTIONMD_LOG        Log level (error, warn, info, debug, trace)\n\n\
            Examples:\n  \
            notionmd get 123e4567e89b12d3a456426614174000 > page.md\n  \
            notionmd append https://www.notion.so/Notes-123e4567e89b12d3a456426614174000 notes.md\n  \
            notionmd convert notes.md --to notion-json",
        )
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a notionmd.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("get")
                .about("Print a page as Markdown")
                .arg(page_id_arg())
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("append")
                .about("Append a Markdown file to the end of a page")
                .arg(page_id_arg())
                .arg(
                    Arg::new("file")
                        .help("Markdown file to append")
                        .required(true)
                        .index(2)
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("create")
                .about("Create a page from a Markdown file and print its ID")
                .arg(
                    Arg::new("title")
                        .help("Title of the new page")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("file")
                        .help("Markdown file holding the page body")
                        .required(true)
                        .index(2)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("parent")
                        .long("parent")
                        .value_name("PAGE_ID")
                        .help("Parent page (defaults to NOTION_DATABASE_ID)"),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between Markdown and Notion block JSON without touching Notion")
                .arg(
                    Arg::new("input")
                        .help("Input file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from the file extension if omitted)"),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format")
                        .required(true),
                )
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("serve").about("Run the HTTP API").arg(
                Arg::new("port")
                    .long("port")
                    .value_name("N")
                    .help("Port to listen on (overrides PORT)")
                    .value_parser(clap::value_parser!(u16)),
            ),
        )
}

fn main() {
    let matches = build_cli().try_get_matches().unwrap_or_else(|err| {
        let _ = err.print();
        // --help and --version come through here as well
        std::process::exit(if err.use_stderr() { 1 } else { 0 });
    });

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    init_logging(&config);

    match matches.subcommand() {
        Some(("get", sub_matches)) => {
            let page_id = required(sub_matches, "page-id");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_get_command(&config, page_id, output);
        }
        Some(("append", sub_matches)) => {
            let page_id = required(sub_matches, "page-id");
            let file = required(sub_matches, "file");
            handle_append_command(&config, page_id, file);
        }
        Some(("create", sub_matches)) => {
            let title = required(sub_matches, "title");
            let file = required(sub_matches, "file");
            let parent = sub_matches.get_one::<String>("parent").map(|s| s.as_str());
            handle_create_command(&config, title, file, parent);
        }
        Some(("convert", sub_matches)) => {
            let input = required(sub_matches, "input");
            let to = required(sub_matches, "to");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());

            let registry = FormatRegistry::default();
            let from = match sub_matches.get_one::<String>("from") {
                Some(from) => from.to_string(),
                None => registry
                    .detect_format_from_filename(input)
                    .unwrap_or_else(|| {
                        eprintln!("Error: Could not detect format from filename '{input}'");
                        eprintln!("Please specify --from explicitly");
                        std::process::exit(1);
                    }),
            };
            handle_convert_command(&registry, input, &from, to, output);
        }
        Some(("serve", sub_matches)) => {
            if let Some(port) = sub_matches.get_one::<u16>("port") {
                config.server.port = *port;
            }
            handle_serve_command(&config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn handle_get_command(config: &AppConfig, raw_id: &str, output: Option<&str>) {
    let service = build_service(config);
    let page_id = parse_page_id(raw_id);

    let page = block_on(service.get_page(&page_id)).unwrap_or_else(|err| fail(err));
    write_output(&page.markdown, output);
}

fn handle_append_command(config: &AppConfig, raw_id: &str, file: &str) {
    let service = build_service(config);
    let page_id = parse_page_id(raw_id);
    let markdown = read_input(file);

    let outcome =
        block_on(service.append_page(&page_id, &markdown)).unwrap_or_else(|err| fail(err));
    tracing::debug!(blocks = outcome.blocks_written, calls = outcome.requests, "append done");
    println!("Successfully appended content to page");
}

fn handle_create_command(config: &AppConfig, title: &str, file: &str, parent: Option<&str>) {
    let service = build_service(config);
    let parent = parent.map(parse_page_id);
    let markdown = read_input(file);

    let page_id = block_on(service.create_page(title, &markdown, parent.as_ref()))
        .unwrap_or_else(|err| fail(err));
    println!("{page_id}");
}

fn handle_convert_command(
    registry: &FormatRegistry,
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
) {
    let source = read_input(input);
    let converted = registry
        .convert(&source, from, to)
        .unwrap_or_else(|err| fail(err));
    write_output(&converted, output);
}

fn handle_serve_command(config: &AppConfig) {
    let service = build_service(config);
    let api_key = config.api_key();
    if api_key.is_none() {
        tracing::warn!("API_KEY is not set; every /pages request will be rejected");
    }

    let api = Api::new(service, api_key);
    if let Err(err) = notionmd_service::server::serve(&api, &config.server_address()) {
        fail(err);
    }
}

fn build_service(config: &AppConfig) -> DocumentService<NotionClient> {
    let client_settings = config.client_settings().unwrap_or_else(|err| fail(err));
    let service_settings = config.service_settings().unwrap_or_else(|err| fail(err));
    let client = NotionClient::new(&client_settings).unwrap_or_else(|err| fail(err));
    DocumentService::new(client, service_settings)
}

fn load_cli_config(explicit_path: Option<&str>) -> AppConfig {
    let loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader
        .with_process_env()
        .and_then(Loader::build)
        .unwrap_or_else(|err| {
            eprintln!("Failed to load configuration: {err}");
            std::process::exit(1);
        })
}

/// Log to stderr so stdout stays clean for Markdown output.
fn init_logging(config: &AppConfig) {
    let level = LevelFilter::from_str(&config.log.level).unwrap_or(LevelFilter::INFO);

    let subscriber = tracing_subscriber::registry().with(level).with(
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr),
    );

    let _ = subscriber.try_init();
}

fn block_on<F: Future>(future: F) -> F::Output {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap_or_else(|err| fail(format!("failed to start runtime: {err}")));
    runtime.block_on(future)
}

fn parse_page_id(raw: &str) -> PageId {
    PageId::parse(raw).unwrap_or_else(|err| fail(err))
}

fn read_input(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|err| {
        if err.kind() == ErrorKind::NotFound {
            eprintln!("Error: File '{path}' not found");
        } else {
            eprintln!("Error reading file '{path}': {err}");
        }
        std::process::exit(1);
    })
}

fn write_output(content: &str, output: Option<&str>) {
    match output {
        Some(path) => fs::write(path, content).unwrap_or_else(|err| {
            eprintln!("Error writing file '{path}': {err}");
            std::process::exit(1);
        }),
        None => print!("{content}"),
    }
}

fn required<'a>(matches: &'a clap::ArgMatches, name: &str) -> &'a str {
    matches
        .get_one::<String>(name)
        .map(|s| s.as_str())
        .unwrap_or_else(|| fail(format!("{name} is required")))
}

fn fail(err: impl std::fmt::Display) -> ! {
    eprintln!("Error: {err}");
    std::process::exit(1);
}
