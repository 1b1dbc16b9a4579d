use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use crate::domain::models::CheckItem;

/// Element identifiers the review widget is wired to. The hosting page
/// contract fixes these; a fixture that renames them leaves the widget
/// pointing at nothing.
pub const REVIEWER_NAME_ID: &str = "reviewerName";
pub const REVIEW_MESSAGE_ID: &str = "reviewMessage";
pub const REVIEWS_SECTION_ID: &str = "dynamicReviews";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PageSpec {
    pub title: String,
    pub elements: Vec<ElementSpec>,
    #[serde(default)]
    pub catalog: Vec<Product>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ElementSpec {
    pub id: String,
    pub kind: ElementKind,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Input,
    Section,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

/// A node rendered into a section. Text only: reviewer-supplied content is
/// never interpreted as markup.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RenderedNode {
    pub class: String,
    pub text: String,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum PageError {
    #[error("element not found: {0}")]
    ElementNotFound(String),
    #[error("element is not an input: {0}")]
    NotAnInput(String),
    #[error("element is not a section: {0}")]
    NotASection(String),
    #[error("duplicate element id: {0}")]
    DuplicateElement(String),
    #[error("product not found: {0}")]
    ProductNotFound(String),
}

#[derive(Debug, Clone)]
enum LiveElement {
    Input { value: String },
    Section { children: Vec<RenderedNode> },
}

/// Live state of the hosting page for one session: input fields hold their
/// current text, sections hold their appended children. Built fresh from a
/// `PageSpec` and dropped with the session.
#[derive(Debug, Clone)]
pub struct PageDoc {
    pub title: String,
    catalog: Vec<Product>,
    elements: BTreeMap<String, LiveElement>,
}

impl PageDoc {
    pub fn from_spec(spec: &PageSpec) -> Result<Self, PageError> {
        let mut elements = BTreeMap::new();
        for el in &spec.elements {
            let live = match el.kind {
                ElementKind::Input => LiveElement::Input {
                    value: String::new(),
                },
                ElementKind::Section => LiveElement::Section {
                    children: Vec::new(),
                },
            };
            if elements.insert(el.id.clone(), live).is_some() {
                return Err(PageError::DuplicateElement(el.id.clone()));
            }
        }
        Ok(Self {
            title: spec.title.clone(),
            catalog: spec.catalog.clone(),
            elements,
        })
    }

    pub fn input_value(&self, id: &str) -> Result<&str, PageError> {
        match self.elements.get(id) {
            Some(LiveElement::Input { value }) => Ok(value),
            Some(_) => Err(PageError::NotAnInput(id.to_string())),
            None => Err(PageError::ElementNotFound(id.to_string())),
        }
    }

    pub fn set_input(&mut self, id: &str, value: &str) -> Result<(), PageError> {
        match self.elements.get_mut(id) {
            Some(LiveElement::Input { value: v }) => {
                *v = value.to_string();
                Ok(())
            }
            Some(_) => Err(PageError::NotAnInput(id.to_string())),
            None => Err(PageError::ElementNotFound(id.to_string())),
        }
    }

    pub fn append_child(&mut self, id: &str, node: RenderedNode) -> Result<(), PageError> {
        match self.elements.get_mut(id) {
            Some(LiveElement::Section { children }) => {
                children.push(node);
                Ok(())
            }
            Some(_) => Err(PageError::NotASection(id.to_string())),
            None => Err(PageError::ElementNotFound(id.to_string())),
        }
    }

    pub fn children(&self, id: &str) -> Result<&[RenderedNode], PageError> {
        match self.elements.get(id) {
            Some(LiveElement::Section { children }) => Ok(children.as_slice()),
            Some(_) => Err(PageError::NotASection(id.to_string())),
            None => Err(PageError::ElementNotFound(id.to_string())),
        }
    }

    pub fn product(&self, slug: &str) -> Result<&Product, PageError> {
        self.catalog
            .iter()
            .find(|p| p.slug == slug)
            .ok_or_else(|| PageError::ProductNotFound(slug.to_string()))
    }
}

pub fn load_page(source: Option<&str>) -> anyhow::Result<PageSpec> {
    let Some(path) = source else {
        return Ok(default_page());
    };
    let raw = std::fs::read_to_string(path).with_context(|| format!("read page fixture {}", path))?;
    let spec: PageSpec =
        serde_json::from_str(&raw).with_context(|| format!("parse page fixture {}", path))?;
    Ok(spec)
}

pub fn validate(spec: &PageSpec) -> Vec<CheckItem> {
    let mut checks = Vec::new();

    let mut ids = HashSet::new();
    let duplicate_ids = spec.elements.iter().any(|e| !ids.insert(e.id.as_str()));
    checks.push(CheckItem {
        name: "unique_element_ids".to_string(),
        status: if duplicate_ids { "failed" } else { "ok" }.to_string(),
    });

    let mut slugs = HashSet::new();
    let duplicate_slugs = spec.catalog.iter().any(|p| !slugs.insert(p.slug.as_str()));
    checks.push(CheckItem {
        name: "unique_product_slugs".to_string(),
        status: if duplicate_slugs { "failed" } else { "ok" }.to_string(),
    });

    let has = |id: &str, kind: ElementKind| spec.elements.iter().any(|e| e.id == id && e.kind == kind);
    let review_wiring = has(REVIEWER_NAME_ID, ElementKind::Input)
        && has(REVIEW_MESSAGE_ID, ElementKind::Input)
        && has(REVIEWS_SECTION_ID, ElementKind::Section);
    checks.push(CheckItem {
        name: "review_elements_present".to_string(),
        status: if review_wiring { "ok" } else { "failed" }.to_string(),
    });

    checks
}

pub fn default_page() -> PageSpec {
    PageSpec {
        title: "STAT Global".to_string(),
        elements: vec![
            ElementSpec {
                id: REVIEWER_NAME_ID.to_string(),
                kind: ElementKind::Input,
            },
            ElementSpec {
                id: REVIEW_MESSAGE_ID.to_string(),
                kind: ElementKind::Input,
            },
            ElementSpec {
                id: REVIEWS_SECTION_ID.to_string(),
                kind: ElementKind::Section,
            },
        ],
        catalog: vec![
            Product {
                name: "Stat Classic Tee".to_string(),
                slug: "stat-classic-tee".to_string(),
                description: "Heavyweight cotton tee with the STAT crest".to_string(),
                price: 29.99,
                category: Some("apparel".to_string()),
                featured: true,
            },
            Product {
                name: "Stat Global Hoodie".to_string(),
                slug: "stat-global-hoodie".to_string(),
                description: "Fleece-lined hoodie with embroidered logo".to_string(),
                price: 59.99,
                category: Some("apparel".to_string()),
                featured: true,
            },
            Product {
                name: "Court Shorts".to_string(),
                slug: "court-shorts".to_string(),
                description: "Lightweight mesh shorts".to_string(),
                price: 34.99,
                category: Some("apparel".to_string()),
                featured: false,
            },
            Product {
                name: "Varsity Cap".to_string(),
                slug: "varsity-cap".to_string(),
                description: "Adjustable twill cap".to_string(),
                price: 24.99,
                category: Some("accessories".to_string()),
                featured: false,
            },
            Product {
                name: "Crew Socks 3-Pack".to_string(),
                slug: "crew-socks-3-pack".to_string(),
                description: String::new(),
                price: 14.99,
                category: Some("accessories".to_string()),
                featured: false,
            },
        ],
    }
}
