//! Configuration checks for the launch flows.

use std::path::Path;

use crate::cli::{output, CheckCommand, CredentialsArgs};
use crate::config::{mask_key, Credentials, ProviderAuth};
use crate::error::Result;
use crate::nl2sql::LlmProvider;

pub fn execute(command: CheckCommand) -> Result<()> {
    match command {
        CheckCommand::Credentials(args) => credentials(args),
    }
}

fn credentials(args: CredentialsArgs) -> Result<()> {
    let provider = args.provider;

    let creds = match Credentials::load(&args.config) {
        Ok(creds) => creds,
        Err(e) => {
            output::error(&format!("{e} ({})", args.config.display()));
            remediation(provider, &args.config);
            std::process::exit(1);
        }
    };

    match creds.resolve(provider) {
        Ok(ProviderAuth::ApiKey(key)) => {
            output::ok(&format!("{provider} credentials found"));
            output::key_value("api_key", mask_key(&key));
        }
        Ok(ProviderAuth::Endpoint { base_url, model }) => {
            output::ok(&format!("{provider} endpoint configured"));
            output::key_value("base_url", base_url);
            if let Some(model) = model {
                output::key_value("model", model);
            }
        }
        Err(e) => {
            output::error(&e.to_string());
            remediation(provider, &args.config);
            std::process::exit(1);
        }
    }
    Ok(())
}

/// Tell the user exactly what to add, the way the launch flows expect it.
fn remediation(provider: LlmProvider, path: &Path) {
    println!();
    output::note(&format!("Add this to {}:", path.display()));
    println!();
    output::note(&format!("[{}]", provider.section()));
    if provider.requires_api_key() {
        output::note("api_key = \"your-key-here\"");
    } else {
        output::note("base_url = \"http://localhost:11434\"");
    }
}
