// SPDX-License-Identifier: EUPL-1.2-or-later
// Copyright © 2026-present lispmap Contributors

use clap::Parser;
use lispmap::{
    CliArgs, CodecContext, CodecError, Command, LispAsAddress, LispMapError, LispMappingProvider,
    LispRouterId, LocalController, MapRegisterDocument, MappingEntry, ProviderConfiguration,
    logging,
};
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config = match ProviderConfiguration::from_cli(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    logging::init(config.log_level);

    let result = match &args.command {
        Command::Translate { input, router, .. } => translate(&config, input, router).await,
        Command::DecodeAs { input } => decode_as(input),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Feeds a Map-Register document through the provider and prints the entries
async fn translate(
    config: &ProviderConfiguration,
    input: &Path,
    router: &str,
) -> Result<(), LispMapError> {
    let router: LispRouterId = router.parse()?;
    let document = MapRegisterDocument::from_json(&fs::read_to_string(input)?)
        .map_err(CodecError::from)?;
    let register = Arc::new(document.into_message());
    info!(
        %router,
        records = register.lisp_records().len(),
        "Loaded Map-Register from {}",
        input.display()
    );

    let controller = LocalController::new();
    let mut provider = LispMappingProvider::new(
        config.scheme.clone(),
        config.channel_capacity,
        config.extension_registry(),
    );

    let mut receiver = provider.activate(&controller)?;
    controller.connect_router(router);
    controller.receive(router, register);
    provider.deactivate(&controller)?;

    let mut entries: Vec<MappingEntry> = Vec::new();
    while let Some(entry) = receiver.recv().await {
        entries.push(entry);
    }

    let context = CodecContext::with_defaults();
    print_json(&context.encode_all(&entries)?)
}

/// Decodes an AS extension address and prints its canonical encoding
fn decode_as(input: &Path) -> Result<(), LispMapError> {
    let json: Value = serde_json::from_str(&fs::read_to_string(input)?).map_err(CodecError::from)?;

    let context = CodecContext::with_defaults();
    match context.decode::<LispAsAddress>(Some(&json))? {
        Some(address) => {
            info!("Decoded {}", address);
            print_json(&context.encode(Some(&address))?)
        }
        None => print_json(&Value::Null),
    }
}

fn print_json(value: &Value) -> Result<(), LispMapError> {
    let text = serde_json::to_string_pretty(value).map_err(CodecError::from)?;
    println!("{}", text);
    Ok(())
}
