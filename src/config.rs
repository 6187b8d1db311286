//! Runtime configuration, read from the host page.

/// Name of the `<meta>` tag that may point the client at another origin.
pub const API_BASE_META: &str = "roster-api-base";

/// How long a status message stays visible.
pub const STATUS_HIDE_MS: u32 = 5000;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Prefix for every endpoint. Empty means same origin.
    pub api_base: String,
    pub status_hide_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            status_hide_ms: STATUS_HIDE_MS,
        }
    }
}

impl Config {
    pub fn with_api_base(api_base: &str) -> Self {
        Self {
            api_base: api_base.trim().trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    /// Falls back to the defaults when there is no document or no meta tag.
    pub fn from_document() -> Self {
        match read_meta(API_BASE_META) {
            Ok(Some(base)) => Self::with_api_base(&base),
            Ok(None) => Self::default(),
            Err(e) => {
                gloo::console::error!(format!("Config: {e}"));
                Self::default()
            }
        }
    }
}

fn read_meta(name: &str) -> Result<Option<String>, String> {
    let win = web_sys::window().ok_or("no window")?;
    let doc = win.document().ok_or("no document")?;
    let el = doc
        .query_selector(&format!("meta[name=\"{name}\"]"))
        .map_err(|_| format!("bad selector for meta {name}"))?;
    Ok(el.and_then(|el| el.get_attribute("content")))
}
