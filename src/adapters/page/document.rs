//! HTML page template with element lookup by `id`.
//!
//! Plays the role of the DOM for the generator: the navbar and the film list
//! are written into elements found by identifier. Lookups and reads go through
//! `scraper`'s parsed tree; edits are applied with `lol_html`'s streaming
//! rewriter so the rest of the page is kept byte for byte.

use crate::domain::DomainError;
use crate::ports::Container;
use lol_html::html_content::ContentType;
use lol_html::{ElementContentHandlers, RewriteStrSettings, Selector as RewriteSelector, rewrite_str};
use scraper::{Html, Selector};
use std::borrow::Cow;

/// Page text being assembled.
#[derive(Debug, Clone)]
pub struct PageDocument {
    html: String,
}

impl PageDocument {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    /// Handle to the first element whose `id` attribute is `id`.
    pub fn element(&mut self, id: &str) -> Result<ElementSlot<'_>, DomainError> {
        if !self.has_element(id) {
            return Err(DomainError::MissingElement(id.to_string()));
        }
        Ok(ElementSlot {
            doc: self,
            id: id.to_string(),
        })
    }

    pub fn has_element(&self, id: &str) -> bool {
        find_inner_html(&self.html, id).is_ok()
    }

    pub fn into_string(self) -> String {
        self.html
    }
}

/// Element inside a [`PageDocument`]. Implements the Container port.
pub struct ElementSlot<'a> {
    doc: &'a mut PageDocument,
    id: String,
}

impl ElementSlot<'_> {
    fn edit(&mut self, content: &str, replace: bool) -> Result<(), DomainError> {
        self.doc.html = rewrite_element(&self.doc.html, &self.id, content, replace)?;
        Ok(())
    }
}

impl Container for ElementSlot<'_> {
    fn inner_html(&self) -> Result<String, DomainError> {
        find_inner_html(&self.doc.html, &self.id)
    }

    fn set_inner_html(&mut self, html: &str) -> Result<(), DomainError> {
        self.edit(html, true)
    }

    fn append_html(&mut self, html: &str) -> Result<(), DomainError> {
        self.edit(html, false)
    }
}

/// `[id="…"]`, quoted so any id value is a valid selector.
fn id_selector(id: &str) -> String {
    format!("[id=\"{}\"]", id.replace('\\', "\\\\").replace('"', "\\\""))
}

fn find_inner_html(html: &str, id: &str) -> Result<String, DomainError> {
    let selector = Selector::parse(&id_selector(id))
        .map_err(|e| DomainError::Page(format!("selector for #{}: {:?}", id, e)))?;
    let document = Html::parse_document(html);
    document
        .select(&selector)
        .next()
        .map(|el| el.inner_html())
        .ok_or_else(|| DomainError::MissingElement(id.to_string()))
}

/// Replace (or append to) the content of the first element with `id`.
fn rewrite_element(html: &str, id: &str, content: &str, replace: bool) -> Result<String, DomainError> {
    let selector: RewriteSelector = id_selector(id)
        .parse()
        .map_err(|e| DomainError::Page(format!("selector for #{}: {}", id, e)))?;
    let mut matched = false;
    let handlers = ElementContentHandlers::default().element(|el| {
        if matched {
            return Ok(());
        }
        matched = true;
        if replace {
            el.set_inner_content(content, ContentType::Html);
        } else {
            el.append(content, ContentType::Html);
        }
        Ok(())
    });

    let output = rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: vec![(Cow::Owned(selector), handlers)],
            ..RewriteStrSettings::default()
        },
    )
    .map_err(|e| DomainError::Page(format!("rewrite #{}: {}", id, e)))?;

    if !matched {
        return Err(DomainError::MissingElement(id.to_string()));
    }
    Ok(output)
}
