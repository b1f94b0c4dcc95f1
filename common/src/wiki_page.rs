//! Shared models for wiki documentation pages.

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WikiPageProps {
    pub name: String,
    /// Raw markdown body.
    pub body: String,
    /// Section headings extracted from the body, for the table of contents.
    pub headings: Vec<WikiHeading>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WikiHeading {
    pub text: String,
    /// Anchor slug, unique within the page.
    pub slug: String,
    /// Markdown heading level, 2 or 3.
    pub depth: u8,
}

/// Anchor slug of a heading: lowercased, non-alphanumerics collapsed to
/// single dashes. Both the heading extraction and the renderer derive anchors
/// through this.
pub fn heading_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut last_was_dash = true;
    for ch in text.chars() {
        if ch.is_alphanumeric() {
            slug.extend(ch.to_lowercase());
            last_was_dash = false;
        } else if !last_was_dash {
            slug.push('-');
            last_was_dash = true;
        }
    }
    slug.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_collapse_punctuation() {
        assert_eq!(heading_slug("FAQ: Audio & Video"), "faq-audio-video");
        assert_eq!(heading_slug("  Spaced  Out  "), "spaced-out");
    }
}
