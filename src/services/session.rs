use serde_json::json;

use crate::domain::models::{EventOutcome, SessionState};
use crate::page::REVIEWS_SECTION_ID;
use crate::services::cart;
use crate::services::reviews::{self, SubmitOutcome};
use crate::services::settings::Settings;
use crate::services::storage::audit;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Add { name: String, price: f64 },
    AddFromCatalog { slug: String },
    Type { element: String, text: String },
    SubmitReview,
    Ack,
    Notices,
    Cart,
    Reviews,
    Quit,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("unknown event: {0}")]
    UnknownEvent(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("invalid price: {0}")]
    InvalidPrice(String),
    #[error("unterminated quote")]
    UnterminatedQuote,
}

/// Splits an event line into tokens. Double quotes group words into one
/// token; there is no escape syntax.
fn tokenize(line: &str) -> Result<Vec<String>, ParseError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut has_token = false;
    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                has_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if has_token {
                    tokens.push(std::mem::take(&mut current));
                    has_token = false;
                }
            }
            c => {
                current.push(c);
                has_token = true;
            }
        }
    }
    if in_quotes {
        return Err(ParseError::UnterminatedQuote);
    }
    if has_token {
        tokens.push(current);
    }
    Ok(tokens)
}

/// Parses one line into an event. Blank lines and `#` comments parse to
/// None and consume no sequence number.
pub fn parse_event(line: &str) -> Result<Option<Event>, ParseError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    let tokens = tokenize(trimmed)?;
    let Some((head, rest)) = tokens.split_first() else {
        return Ok(None);
    };

    let event = match head.as_str() {
        "add" => match rest {
            [slug] => Event::AddFromCatalog { slug: slug.clone() },
            [name, price] => Event::Add {
                name: name.clone(),
                price: price
                    .parse::<f64>()
                    .map_err(|_| ParseError::InvalidPrice(price.clone()))?,
            },
            _ => return Err(ParseError::Usage("add <name-or-slug> [<price>]")),
        },
        "type" => match rest.split_first() {
            Some((element, words)) => Event::Type {
                element: element.clone(),
                text: words.join(" "),
            },
            None => return Err(ParseError::Usage("type <element-id> [<text>]")),
        },
        "submit-review" => no_args(Event::SubmitReview, rest, "submit-review")?,
        "ack" => no_args(Event::Ack, rest, "ack")?,
        "notices" => no_args(Event::Notices, rest, "notices")?,
        "cart" => no_args(Event::Cart, rest, "cart")?,
        "reviews" => no_args(Event::Reviews, rest, "reviews")?,
        "quit" => no_args(Event::Quit, rest, "quit")?,
        other => return Err(ParseError::UnknownEvent(other.to_string())),
    };
    Ok(Some(event))
}

fn no_args(event: Event, rest: &[String], usage: &'static str) -> Result<Event, ParseError> {
    if rest.is_empty() {
        Ok(event)
    } else {
        Err(ParseError::Usage(usage))
    }
}

/// Applies one event to the session state. An `error` outcome leaves the
/// state untouched and the session running.
pub fn apply_event(
    state: &mut SessionState,
    settings: &Settings,
    seq: usize,
    raw: &str,
    event: &Event,
) -> EventOutcome {
    match event {
        Event::Add { name, price } => {
            cart::add_to_cart(state, name, *price);
            ok(
                seq,
                raw,
                json!({ "added": { "product_name": name, "price": price }, "cart_len": state.cart.len() }),
            )
        }
        Event::AddFromCatalog { slug } => match cart::add_from_catalog(state, slug) {
            Ok(item) => ok(
                seq,
                raw,
                json!({ "added": item, "cart_len": state.cart.len() }),
            ),
            Err(e) => error(seq, raw, &e),
        },
        Event::Type { element, text } => match state.page.set_input(element, text) {
            Ok(()) => ok(seq, raw, json!({ "element": element })),
            Err(e) => error(seq, raw, &e),
        },
        Event::SubmitReview => match reviews::submit_review(state, settings) {
            Ok(SubmitOutcome::Posted(node)) => {
                let count = state
                    .page
                    .children(REVIEWS_SECTION_ID)
                    .map(|kids| kids.len())
                    .unwrap_or(0);
                audit("review_posted", json!({ "review_count": count }));
                ok(seq, raw, json!({ "posted": node, "review_count": count }))
            }
            Ok(SubmitOutcome::MissingFields) => EventOutcome {
                seq,
                event: raw.to_string(),
                status: "rejected".to_string(),
                detail: json!({ "reason": "missing_fields" }),
            },
            Err(e) => error(seq, raw, &e),
        },
        Event::Ack => ok(seq, raw, json!({ "acknowledged": state.notices.acknowledge() })),
        Event::Notices => ok(seq, raw, json!({ "pending": state.notices.snapshot() })),
        Event::Cart => ok(
            seq,
            raw,
            json!({ "count": state.cart.len(), "items": state.cart }),
        ),
        Event::Reviews => match state.page.children(REVIEWS_SECTION_ID) {
            Ok(kids) => ok(seq, raw, json!({ "count": kids.len(), "entries": kids })),
            Err(e) => error(seq, raw, &e),
        },
        Event::Quit => ok(seq, raw, json!({ "session": "ended" })),
    }
}

pub fn parse_failure(seq: usize, raw: &str, err: &ParseError) -> EventOutcome {
    EventOutcome {
        seq,
        event: raw.to_string(),
        status: "error".to_string(),
        detail: json!({ "error": err.to_string() }),
    }
}

fn ok(seq: usize, raw: &str, detail: serde_json::Value) -> EventOutcome {
    EventOutcome {
        seq,
        event: raw.to_string(),
        status: "ok".to_string(),
        detail,
    }
}

fn error(seq: usize, raw: &str, err: &dyn std::error::Error) -> EventOutcome {
    EventOutcome {
        seq,
        event: raw.to_string(),
        status: "error".to_string(),
        detail: json!({ "error": err.to_string() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_names_stay_one_token() {
        assert_eq!(
            parse_event("add \"Classic Mug\" 9.99").unwrap(),
            Some(Event::Add {
                name: "Classic Mug".to_string(),
                price: 9.99
            })
        );
    }

    #[test]
    fn single_argument_add_targets_the_catalog() {
        assert_eq!(
            parse_event("add varsity-cap").unwrap(),
            Some(Event::AddFromCatalog {
                slug: "varsity-cap".to_string()
            })
        );
    }

    #[test]
    fn type_joins_trailing_words() {
        assert_eq!(
            parse_event("type reviewMessage Best tee ever").unwrap(),
            Some(Event::Type {
                element: "reviewMessage".to_string(),
                text: "Best tee ever".to_string()
            })
        );
    }

    #[test]
    fn type_without_text_clears_the_field() {
        assert_eq!(
            parse_event("type reviewerName").unwrap(),
            Some(Event::Type {
                element: "reviewerName".to_string(),
                text: String::new()
            })
        );
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        assert_eq!(parse_event("   ").unwrap(), None);
        assert_eq!(parse_event("# add stat-tee").unwrap(), None);
    }

    #[test]
    fn malformed_input_is_reported() {
        assert_eq!(
            parse_event("add Mug not-a-price"),
            Err(ParseError::InvalidPrice("not-a-price".to_string()))
        );
        assert_eq!(
            parse_event("checkout"),
            Err(ParseError::UnknownEvent("checkout".to_string()))
        );
        assert_eq!(
            parse_event("add \"Mug 9.99"),
            Err(ParseError::UnterminatedQuote)
        );
        assert_eq!(
            parse_event("cart now"),
            Err(ParseError::Usage("cart"))
        );
    }
}
