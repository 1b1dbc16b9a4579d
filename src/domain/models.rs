use serde::{Deserialize, Serialize};

use crate::page::PageDoc;
use crate::services::notify::NoticeQueue;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct ErrorOut {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CartItem {
    pub product_name: String,
    pub price: f64,
}

/// All mutable state of one page session. Owned by the session loop and
/// passed into handlers; dropped when the session ends.
#[derive(Debug)]
pub struct SessionState {
    pub cart: Vec<CartItem>,
    pub page: PageDoc,
    pub notices: NoticeQueue,
}

impl SessionState {
    pub fn new(page: PageDoc) -> Self {
        Self {
            cart: Vec::new(),
            page,
            notices: NoticeQueue::new(),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct EventOutcome {
    pub seq: usize,
    pub event: String,
    pub status: String,
    pub detail: serde_json::Value,
}

#[derive(Serialize, Debug)]
pub struct CheckItem {
    pub name: String,
    pub status: String,
}

#[derive(Serialize, Debug)]
pub struct PageCheckReport {
    pub overall: String,
    pub checks: Vec<CheckItem>,
}
