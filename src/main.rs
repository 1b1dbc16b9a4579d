use clap::Parser;

mod cli;
mod commands;
mod domain;
mod page;
mod services;

use cli::Cli;
use domain::models::{ErrorBody, ErrorOut};
use page::PageError;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        report_failure(cli.json, &err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let settings = services::settings::load_settings()?;
    let spec = page::load_page(cli.page.as_deref())?;
    commands::runtime::handle_command(cli, &settings, &spec)
}

fn report_failure(json: bool, err: &anyhow::Error) {
    if json {
        let out = ErrorOut {
            ok: false,
            error: ErrorBody {
                code: error_code(err).to_string(),
                message: format!("{:#}", err),
            },
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&out).unwrap_or_default()
        );
    } else {
        eprintln!("error: {:#}", err);
    }
}

fn error_code(err: &anyhow::Error) -> &'static str {
    if let Some(page_err) = err.downcast_ref::<PageError>() {
        return match page_err {
            PageError::ProductNotFound(_) => "PRODUCT_NOT_FOUND",
            PageError::ElementNotFound(_) => "ELEMENT_NOT_FOUND",
            PageError::NotAnInput(_) | PageError::NotASection(_) => "ELEMENT_KIND",
            PageError::DuplicateElement(_) => "PAGE_INVALID",
        };
    }
    if err.downcast_ref::<std::io::Error>().is_some() {
        return "IO";
    }
    "OTHER"
}
