//! Bracketed link recognition and classification.
//!
//! # Responsibility
//! - Find `[[Token]]` spans in note markup and classify each as a web
//!   URL, a link to an existing note, or inert text.
//! - Map activated anchors back to the navigation the frontend performs.
//!
//! # Invariants
//! - URL classification takes priority over note existence: a note
//!   titled like a domain name is linkified as a URL.
//! - A note never links to itself; a self-referencing token stays inert
//!   literal text, brackets included.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use url::Url;

mod tld;

static LINK_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[([^\]]+)\]\]").expect("valid link token regex"));

/// Scheme prefix used by internal note anchors.
pub const NOTE_HREF_SCHEME: &str = "note:";

/// Classification of one `[[Token]]` span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkClass {
    /// Token names a recognized domain; `href` carries a scheme.
    Url { href: String },
    /// Token is the exact title of another existing note.
    Note { title: String },
    /// Neither: rendered unchanged, brackets included.
    Literal,
}

/// Navigation requested by activating a rendered anchor. Pure navigation,
/// no data mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkActivation {
    /// Select and open the note with this exact title.
    OpenNote(String),
    /// Open this address in the default external browser.
    OpenUrl(String),
}

/// Classifies one bracketed token.
///
/// `note_exists` answers exact-title existence against the note index.
pub fn classify(
    token: &str,
    current_title: &str,
    note_exists: impl Fn(&str) -> bool,
) -> LinkClass {
    if is_web_url(token) {
        return LinkClass::Url {
            href: ensure_scheme(token),
        };
    }
    if token != current_title && note_exists(token) {
        return LinkClass::Note {
            title: token.to_string(),
        };
    }
    LinkClass::Literal
}

/// Rewrites every `[[Token]]` span in `content` into anchor markup.
///
/// URLs become `<a href="...">token</a>`, existing notes become
/// `<a href="note:Title">Title</a>`, and everything else is left exactly
/// as written.
pub fn render_links(
    content: &str,
    current_title: &str,
    note_exists: impl Fn(&str) -> bool,
) -> String {
    LINK_TOKEN_RE
        .replace_all(content, |caps: &Captures<'_>| {
            let token = &caps[1];
            match classify(token, current_title, &note_exists) {
                LinkClass::Url { href } => format!("<a href=\"{href}\">{token}</a>"),
                LinkClass::Note { title } => {
                    format!("<a href=\"{NOTE_HREF_SCHEME}{title}\">{title}</a>")
                }
                LinkClass::Literal => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Maps an activated anchor href to the navigation it requests.
///
/// Returns `None` for hrefs this crate never renders.
pub fn activation_for(href: &str) -> Option<LinkActivation> {
    if let Some(title) = href.strip_prefix(NOTE_HREF_SCHEME) {
        return Some(LinkActivation::OpenNote(title.to_string()));
    }
    if is_web_url(href) {
        return Some(LinkActivation::OpenUrl(ensure_scheme(href)));
    }
    None
}

/// Whether the text names a recognized web address.
///
/// A candidate must contain at least one `.`; its host's final label is
/// then checked against the top-level-domain table.
pub fn is_web_url(text: &str) -> bool {
    if !text.contains('.') {
        return false;
    }

    let candidate = ensure_scheme(text);
    let Ok(parsed) = Url::parse(&candidate) else {
        return false;
    };
    let Some(host) = parsed.host_str() else {
        return false;
    };

    host.rsplit('.')
        .next()
        .is_some_and(tld::is_known_tld)
}

/// Prepends `https://` unless an explicit web scheme is already present.
fn ensure_scheme(text: &str) -> String {
    if text.starts_with("http://") || text.starts_with("https://") {
        text.to_string()
    } else {
        format!("https://{text}")
    }
}
