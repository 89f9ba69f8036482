//! Pure HTML extraction for the component documentation pages.
//!
//! Everything here works on page source that has already been fetched, so the
//! selectors can be exercised against static fixtures.

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use super::error::{ScrapeError, ScrapeResult};
use super::{ApiEvent, ApiProperty, CodeExample, ComponentApi, ComponentReference};
use crate::config::DocsConfig;

/// Language reported for code blocks without a `language-*` class.
pub const DEFAULT_LANGUAGE: &str = "tsx";

const LINK_SELECTOR: &str = "a[href]";
const PREVIEW_SELECTOR: &str = ".preview";
const CODE_SELECTORS: [&str; 2] = ["pre code", "code"];
const HEADING_SELECTOR: &str = "h1, h2, h3, h4, h5, h6";

fn selector(selector: &str) -> ScrapeResult<Selector> {
    Selector::parse(selector).map_err(|e| ScrapeError::Selector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

/// Visible text of an element with runs of whitespace collapsed.
fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_heading(element: ElementRef<'_>) -> bool {
    matches!(
        element.value().name(),
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6"
    )
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Extracts every link into the components tree from the introduction page.
///
/// Links are resolved against the configured origin; links to other origins
/// and the link to the components root itself are ignored.
///
/// # Errors
///
/// Only if the link selector fails to compile.
pub fn parse_component_list(
    html: &str,
    config: &DocsConfig,
) -> ScrapeResult<Vec<ComponentReference>> {
    let document = Html::parse_document(html);
    let link_selector = selector(LINK_SELECTOR)?;

    let prefix = config.components_prefix();
    let root = prefix.trim_end_matches('/');
    let origin = config.origin().origin();

    let mut components = Vec::new();
    for link in document.select(&link_selector) {
        let href = link.value().attr("href").unwrap_or_default().trim();
        let Ok(url) = config.origin().join(href) else {
            debug!("Skipping unresolvable link: '{}'", href);
            continue;
        };

        if url.origin() != origin {
            continue;
        }
        let path = url.path();
        if !path.starts_with(&prefix) || path.trim_end_matches('/') == root {
            continue;
        }

        let name = element_text(link);
        if name.is_empty() {
            debug!("Skipping component link without text: {}", url);
            continue;
        }

        components.push(ComponentReference {
            name,
            url: url.to_string(),
        });
    }

    if components.is_empty() {
        warn!("No component links found under {}", prefix);
    }
    debug!("Found {} component links", components.len());
    Ok(components)
}

/// Nearest heading among the elements preceding `element` at the same level.
fn preceding_heading(element: ElementRef<'_>) -> Option<String> {
    element
        .prev_siblings()
        .filter_map(ElementRef::wrap)
        .find(|sibling| is_heading(*sibling))
        .map(element_text)
        .and_then(non_empty)
}

fn language_of(code: ElementRef<'_>) -> String {
    let parent = code.parent().and_then(ElementRef::wrap);
    std::iter::once(code)
        .chain(parent)
        .flat_map(|element| element.value().classes())
        .find_map(|class| {
            class
                .strip_prefix("language-")
                .or_else(|| class.strip_prefix("lang-"))
        })
        .filter(|language| !language.is_empty())
        .unwrap_or(DEFAULT_LANGUAGE)
        .to_string()
}

/// Extracts one code example per preview container, in document order.
///
/// Containers without a code block, or whose code is blank, are skipped
/// without affecting the others. A container nested in another container is
/// part of its parent's example, not an example of its own.
///
/// # Errors
///
/// Only if a selector fails to compile.
pub fn parse_examples(html: &str) -> ScrapeResult<Vec<CodeExample>> {
    let document = Html::parse_document(html);
    let preview_selector = selector(PREVIEW_SELECTOR)?;
    let code_selectors = CODE_SELECTORS
        .iter()
        .map(|s| selector(s))
        .collect::<ScrapeResult<Vec<_>>>()?;

    let mut examples = Vec::new();
    for container in document.select(&preview_selector) {
        let nested = container
            .ancestors()
            .filter_map(ElementRef::wrap)
            .any(|ancestor| preview_selector.matches(&ancestor));
        if nested {
            continue;
        }

        let Some(code_block) = code_selectors
            .iter()
            .find_map(|code_selector| container.select(code_selector).next())
        else {
            debug!("Preview container without a code block, skipping");
            continue;
        };

        let code = code_block.text().collect::<String>().trim().to_string();
        if code.is_empty() {
            debug!("Preview container with an empty code block, skipping");
            continue;
        }

        examples.push(CodeExample {
            title: preceding_heading(container),
            code,
            language: language_of(code_block),
        });
    }

    debug!("Found {} code examples", examples.len());
    Ok(examples)
}

fn next_element_sibling(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element.next_siblings().find_map(ElementRef::wrap)
}

fn child_elements<'a>(element: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    element.children().filter_map(ElementRef::wrap)
}

/// Cell texts of each row of `table` itself that has at least two data cells.
///
/// Only the table's own rows and cells count, so a table nested inside a cell
/// contributes its text to that cell and nothing else.
fn table_rows(table: ElementRef<'_>) -> Vec<Vec<String>> {
    child_elements(table)
        .flat_map(|child| match child.value().name() {
            "tbody" | "thead" | "tfoot" => child_elements(child).collect::<Vec<_>>(),
            _ => vec![child],
        })
        .filter(|row| row.value().name() == "tr")
        .map(|row| {
            child_elements(row)
                .filter(|cell| cell.value().name() == "td")
                .map(element_text)
                .collect::<Vec<_>>()
        })
        .filter(|cells| cells.len() >= 2)
        .filter(|cells| !cells[0].is_empty() && !cells[1].is_empty())
        .collect()
}

/// Reads the props and events tables that directly follow their headings.
///
/// Returns `None` when neither table yields a usable row.
///
/// # Errors
///
/// Only if the heading selector fails to compile.
pub fn parse_api(html: &str) -> ScrapeResult<Option<ComponentApi>> {
    let document = Html::parse_document(html);
    let heading_selector = selector(HEADING_SELECTOR)?;

    let mut props = Vec::new();
    let mut events = Vec::new();

    for heading in document.select(&heading_selector) {
        let Some(table) =
            next_element_sibling(heading).filter(|el| el.value().name() == "table")
        else {
            continue;
        };

        let title = element_text(heading).to_lowercase();
        if title.contains("props") {
            for cells in table_rows(table) {
                let mut cells = cells.into_iter();
                props.push(ApiProperty {
                    name: cells.next().unwrap_or_default(),
                    type_name: cells.next().unwrap_or_default(),
                    description: cells.next().and_then(non_empty),
                    default_value: cells.next().and_then(non_empty),
                });
            }
        } else if title.contains("events") {
            for cells in table_rows(table) {
                let mut cells = cells.into_iter();
                events.push(ApiEvent {
                    name: cells.next().unwrap_or_default(),
                    type_name: cells.next().unwrap_or_default(),
                    description: cells.next().and_then(non_empty),
                });
            }
        }
    }

    debug!("Found {} props and {} events", props.len(), events.len());
    if props.is_empty() && events.is_empty() {
        return Ok(None);
    }
    Ok(Some(ComponentApi { props, events }))
}
