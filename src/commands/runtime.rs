use std::io::BufRead;

use serde_json::json;

use crate::cli::{Cli, Commands};
use crate::domain::models::{JsonOut, PageCheckReport, SessionState};
use crate::page::{self, PageSpec};
use crate::services::catalog;
use crate::services::output::{print_event, print_one, print_out};
use crate::services::session::{self, Event};
use crate::services::settings::Settings;
use crate::services::storage::audit;

pub fn handle_command(cli: &Cli, settings: &Settings, spec: &PageSpec) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Session { script } => {
            run_session(cli, settings, spec, script.as_deref())?;
        }
        Commands::Browse {
            query,
            category,
            sort,
        } => {
            let items = catalog::browse(&spec.catalog, query.as_deref(), category.as_deref(), *sort);
            print_out(cli.json, &items, |p| {
                format!("{}\t{}\t{:.2}", p.slug, p.name, p.price)
            })?;
        }
        Commands::Show { product } => {
            let p = catalog::find_product(&spec.catalog, product)?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut { ok: true, data: p })?
                );
            } else {
                println!("name: {}", p.name);
                println!("slug: {}", p.slug);
                println!("price: {:.2}", p.price);
                if !p.description.is_empty() {
                    println!("description: {}", p.description);
                }
                if let Some(category) = &p.category {
                    println!("category: {}", category);
                }
            }
        }
        Commands::Validate => {
            let checks = page::validate(spec);
            let overall = if checks.iter().all(|c| c.status == "ok") {
                "ok"
            } else {
                "failed"
            };
            let report = PageCheckReport {
                overall: overall.to_string(),
                checks,
            };
            print_one(cli.json, report, |r| format!("page: {}", r.overall))?;
        }
    }
    Ok(())
}

fn run_session(
    cli: &Cli,
    settings: &Settings,
    spec: &PageSpec,
    script: Option<&str>,
) -> anyhow::Result<()> {
    let doc = page::PageDoc::from_spec(spec)?;
    let mut state = SessionState::new(doc);
    audit("session_start", json!({ "page": spec.title }));

    let reader: Box<dyn BufRead> = match script {
        Some(path) => Box::new(std::io::BufReader::new(std::fs::File::open(path)?)),
        None => Box::new(std::io::BufReader::new(std::io::stdin())),
    };

    let mut seq = 0usize;
    for line in reader.lines() {
        let line = line?;
        match session::parse_event(&line) {
            Ok(None) => continue,
            Ok(Some(event)) => {
                seq += 1;
                let outcome = session::apply_event(&mut state, settings, seq, line.trim(), &event);
                print_event(cli.json, &outcome)?;
                if event == Event::Quit {
                    break;
                }
            }
            Err(err) => {
                seq += 1;
                print_event(cli.json, &session::parse_failure(seq, line.trim(), &err))?;
            }
        }
    }

    audit(
        "session_end",
        json!({ "events": seq, "cart_len": state.cart.len() }),
    );
    Ok(())
}
