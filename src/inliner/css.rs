//! CSS inlining: stylesheet rules rewritten into `style` attributes.
//!
//! The pass runs five stages over one parsed document:
//!
//! 1. intern `link[rel="stylesheet"]` elements as `<style>` nodes, in place,
//!    so the cascade order between linked and embedded styles is kept
//! 2. fetch the text of every remaining `<style>` node in document order and
//!    remove those nodes
//! 3. parse the combined text into (selector, declarations) rules
//! 4. apply each rule in stylesheet order, accumulating declarations in a
//!    transient attribute on the matched elements
//! 5. commit the accumulated declarations ahead of each element's
//!    pre-existing inline `style`, so the latter wins
//!
//! Later rules and native inline style both win over earlier stylesheet
//! rules. This is a pragmatic approximation of the CSS cascade without
//! specificity computation, and downstream consumers depend on the exact
//! ordering, so it must not be "improved".

use kuchiki::traits::TendrilSink;
use kuchiki::NodeRef;
use lazy_static::lazy_static;
use regex::Regex;

use super::errors::InlineError;
use super::skip;
use super::types::{StyleRule, StylesheetResource};

const STYLE_ATTR: &str = "style";
/// Transient per-element buffer for declarations matched so far.
const CSS_STYLE_ATTR: &str = "data-cssstyle";
const LINK_SELECTOR: &str = "link[rel=\"stylesheet\"]";
const STYLE_SELECTOR: &str = "style";
const ACCUMULATED_SELECTOR: &str = "[data-cssstyle]";

lazy_static! {
    static ref COMMENT: Regex =
        Regex::new(r"/\*.*?\*/").expect("BUG: hardcoded comment pattern is invalid");
    static ref SPACE_RUNS: Regex =
        Regex::new(r" +").expect("BUG: hardcoded space-run pattern is invalid");
}

/// Rewrites a document so every stylesheet rule is applied as an inline
/// `style` attribute on the elements it matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct CssInliner;

impl CssInliner {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Inline every supplied stylesheet into the document.
    ///
    /// Fails with [`InlineError::MissingStylesheet`] when a stylesheet link
    /// references a path absent from `stylesheets`. No partial document is
    /// ever returned.
    pub fn inline(
        &self,
        html: &str,
        stylesheets: &[StylesheetResource],
    ) -> Result<String, InlineError> {
        let document = kuchiki::parse_html().one(html);

        intern_linked_styles(&document, stylesheets)?;
        let stylesheet = fetch_styles(&document);
        let rules = parse_rules(&stylesheet);
        log::debug!("applying {} stylesheet rules", rules.len());
        apply_rules(&document, &rules);
        commit_styles(&document);

        super::serialize(&document)
    }
}

/// Replace stylesheet links with equivalent `<style>` nodes, in place.
fn intern_linked_styles(
    document: &NodeRef,
    stylesheets: &[StylesheetResource],
) -> Result<(), InlineError> {
    // Collect before detaching: removing nodes invalidates the live iterator.
    let links: Vec<_> = match document.select(LINK_SELECTOR) {
        Ok(matches) => matches.collect(),
        Err(()) => return Ok(()),
    };

    for link in links {
        if skip::is_inline_skipped(&link) {
            continue;
        }
        let href = {
            let attributes = link.attributes.borrow();
            attributes.get("href").map(ToString::to_string)
        };
        let Some(href) = href else {
            log::debug!("stylesheet link without href left untouched");
            continue;
        };
        let content = find_stylesheet(stylesheets, &href)?;
        let node = link.as_node();
        node.insert_before(build_style_node(content));
        node.detach();
    }
    Ok(())
}

/// First supplied stylesheet whose path contains the link's href.
fn find_stylesheet<'a>(
    stylesheets: &'a [StylesheetResource],
    href: &str,
) -> Result<&'a str, InlineError> {
    stylesheets
        .iter()
        .find(|css| css.path.contains(href))
        .map(|css| css.content.as_str())
        .ok_or_else(|| InlineError::MissingStylesheet {
            href: href.to_string(),
        })
}

/// Build a `<style type="text/css">` node holding the given text.
fn build_style_node(css: &str) -> NodeRef {
    let fragment = kuchiki::parse_html().one(format!("<style type=\"text/css\">{css}</style>"));
    fragment
        .select_first(STYLE_SELECTOR)
        .map(|style| style.as_node().clone())
        .expect("BUG: parsed style fragment always contains a style element")
}

/// Concatenate and remove every non-skipped `<style>` node, in document order.
fn fetch_styles(document: &NodeRef) -> String {
    let mut styles = String::new();
    let Ok(matches) = document.select(STYLE_SELECTOR) else {
        return styles;
    };
    // Collect before detaching.
    let nodes: Vec<_> = matches.collect();
    for style in nodes {
        if skip::is_inline_skipped(&style) {
            continue;
        }
        styles.push_str(&style.as_node().text_contents());
        style.as_node().detach();
    }
    styles
}

/// Parse rule blocks out of raw stylesheet text, in textual order.
///
/// Line breaks and `/* ... */` comments are stripped and space runs
/// collapsed, then the text is tokenized on `{`/`}` into alternating
/// (selector, declarations) pairs. A malformed trailing fragment without its
/// brace pair is silently dropped.
fn parse_rules(stylesheet: &str) -> Vec<StyleRule> {
    let without_breaks = stylesheet.replace(['\n', '\r'], "");
    let without_comments = COMMENT.replace_all(&without_breaks, "");
    let collapsed = SPACE_RUNS.replace_all(&without_comments, " ");
    let tokens: Vec<&str> = collapsed
        .trim()
        .split(['{', '}'])
        .filter(|token| !token.is_empty())
        .collect();
    tokens
        .chunks_exact(2)
        .map(|pair| StyleRule {
            selector: pair[0].to_string(),
            declarations: pair[1].to_string(),
        })
        .collect()
}

/// Accumulate matching declarations on each element, in stylesheet order.
///
/// The buffer lives in a transient attribute so the commit stage can place
/// accumulated rules ahead of the element's own inline style.
fn apply_rules(document: &NodeRef, rules: &[StyleRule]) {
    for rule in rules {
        let Ok(matches) = document.select(&rule.selector) else {
            log::warn!("skipping rule with unparseable selector '{}'", rule.selector);
            continue;
        };
        // Attribute-only mutation: direct iteration is safe.
        for element in matches {
            if skip::is_inline_skipped(&element) {
                continue;
            }
            let mut attributes = element.attributes.borrow_mut();
            let accumulated = match attributes.get(CSS_STYLE_ATTR) {
                Some(existing) if !existing.is_empty() => {
                    concatenate_declarations(existing, &rule.declarations)
                }
                _ => rule.declarations.clone(),
            };
            attributes.insert(CSS_STYLE_ATTR, accumulated);
        }
    }
}

/// Append the next rule's declarations, normalising the `;` separator.
fn concatenate_declarations(existing: &str, declarations: &str) -> String {
    let mut buffer = existing.to_string();
    if !buffer.ends_with(';') {
        buffer.push(';');
    }
    format!("{} {};", buffer.trim(), declarations.trim())
}

/// Transfer accumulated declarations into the `style` attribute, ahead of the
/// element's pre-existing inline style, then drop the transient attribute.
fn commit_styles(document: &NodeRef) {
    let Ok(matches) = document.select(ACCUMULATED_SELECTOR) else {
        return;
    };
    // Attribute-only mutation: direct iteration is safe.
    for element in matches {
        let mut attributes = element.attributes.borrow_mut();
        let accumulated = attributes.get(CSS_STYLE_ATTR).unwrap_or("").to_string();
        let existing = attributes.get(STYLE_ATTR).unwrap_or("").to_string();
        attributes.insert(
            STYLE_ATTR,
            format!("{accumulated}; {existing}").replace(";;", ";"),
        );
        attributes.remove(CSS_STYLE_ATTR);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rules_in_textual_order() {
        let rules = parse_rules("p {color:blue} div {margin:0}");
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].selector.trim(), "p");
        assert_eq!(rules[0].declarations.trim(), "color:blue");
        assert_eq!(rules[1].selector.trim(), "div");
    }

    #[test]
    fn strips_comments_and_line_breaks() {
        let rules = parse_rules("p /* note */ {\n  color:blue;\n}\n");
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].declarations.trim(), "color:blue;");
    }

    #[test]
    fn drops_malformed_trailing_fragment() {
        let rules = parse_rules("p {color:blue} div");
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].selector.trim(), "p");
    }

    #[test]
    fn empty_stylesheet_has_no_rules() {
        assert!(parse_rules("").is_empty());
        assert!(parse_rules("  /* only a comment */  ").is_empty());
    }

    #[test]
    fn concatenation_normalises_separator() {
        assert_eq!(
            concatenate_declarations("color:blue", "margin:0"),
            "color:blue; margin:0;"
        );
        assert_eq!(
            concatenate_declarations("color:blue;", "margin:0"),
            "color:blue; margin:0;"
        );
    }
}
