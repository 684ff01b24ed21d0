use std::io::{self, Read};
use std::process::ExitCode;

use curator_core::{Curator, HttpTransport, load_config};

mod input;
mod output;
mod sink;

use input::{Action, JsonInput};

async fn run(input: JsonInput) -> curator_core::Result<()> {
    let config = load_config(input.home.clone(), &input.overrides())?;
    let transport = HttpTransport::new(config.timeout())?;
    let mut curator = Curator::with_config(transport, &config);
    let mut sink = sink::JsonEventSink::new(input.flags.verbose);

    curator.set_host(input.context.unwrap_or_default(), None, &mut sink);
    if let Some(query) = &input.query {
        curator.resolve_endpoint(query, &mut sink);
    }
    curator.set_prompt(input.prompt);

    let submitted = curator.submit(&mut sink).await;
    output::emit_result(&curator);
    submitted?;

    let mut bridge = output::JsonBridge;
    match input.action {
        Action::Preview => Ok(()),
        Action::Insert => curator.insert_html(&mut bridge, &mut sink),
        Action::SendJson => curator.send_json(&mut bridge, &mut sink),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "warn,curator_core=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    // --json-schema: print input schema and exit
    if args.iter().any(|a| a == "--json-schema") {
        let schema = schemars::schema_for!(JsonInput);
        match serde_json::to_string_pretty(&schema) {
            Ok(schema) => println!("{}", schema),
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            }
        }
        return ExitCode::SUCCESS;
    }

    // --version
    if args.iter().any(|a| a == "--version") {
        println!("curator-json {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }

    // Read JSON from stdin
    let mut json_str = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut json_str) {
        output::emit_invalid_input(&format!("Failed to read stdin: {}", e));
        return ExitCode::FAILURE;
    }
    let json_input: JsonInput = match serde_json::from_str(&json_str) {
        Ok(input) => input,
        Err(e) => {
            output::emit_invalid_input(&format!("Invalid JSON input: {}", e));
            return ExitCode::FAILURE;
        }
    };
    init_logging(json_input.flags.verbose);
    log::debug!("action: {:?}", json_input.action);

    let result = run(json_input).await;
    output::emit_done(&result);
    if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
