//! Naver Map deep links for recommended places

use serde::Serialize;

const WEB_SEARCH_BASE: &str = "https://map.naver.com/p/search";

/// Links that open a place in Naver Map
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapLinks {
    /// `nmap://` scheme link for the installed app
    pub app: String,
    /// Browser fallback
    pub web: String,
}

impl MapLinks {
    /// Build links searching for `title`
    ///
    /// `title` is the display title of a candidate, already stripped of markup.
    /// `app_name` is the calling app's bundle id, required by the `nmap://` scheme.
    pub fn for_title(title: &str, app_name: &str) -> Self {
        let query = urlencoding::encode(title);

        Self {
            app: format!(
                "nmap://search?query={}&appname={}",
                query,
                urlencoding::encode(app_name)
            ),
            web: format!("{}/{}", WEB_SEARCH_BASE, query),
        }
    }
}
