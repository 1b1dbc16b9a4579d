use serde::Serialize;

use crate::domain::models::{EventOutcome, JsonOut};

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

pub fn print_one<T: Serialize>(json: bool, data: T, row: impl Fn(&T) -> String) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

/// Session outcomes stream one per line, so JSON mode stays compact
/// (one envelope per event) rather than pretty-printed.
pub fn print_event(json: bool, outcome: &EventOutcome) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string(&JsonOut {
                ok: true,
                data: outcome
            })?
        );
    } else {
        println!("{}\t{}\t{}", outcome.seq, outcome.status, outcome.event);
    }
    Ok(())
}
