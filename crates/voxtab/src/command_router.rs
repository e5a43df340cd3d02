//! Command router - utterance to action mapping
//!
//! Maps one normalized utterance to the browser action it names. The rule
//! list is ordered and the first match wins; anything non-empty that no
//! rule claims becomes a generic question for the answer service.

use regex::Regex;
use std::sync::OnceLock;
use voxtab_common::{Action, SystemPage};

/// A spoken site with no domain suffix gets ".com" appended.
fn domain_suffix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\.[a-z]{2,}$").expect("valid domain suffix pattern"))
}

/// Lowercase and trim one recognition result into an utterance.
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase().trim().to_string()
}

/// Route one utterance to an action.
///
/// Returns `None` only for utterances that are empty after normalization;
/// that case is a silent no-op, not an error.
pub fn route_command(raw: &str) -> Option<Action> {
    let utterance = normalize(raw);
    let words: Vec<&str> = utterance.split_whitespace().collect();

    if utterance.is_empty() {
        return None;
    }

    if utterance == "stop" {
        return Some(Action::StopAll);
    }

    if utterance.starts_with("open ") && words.len() >= 2 {
        let site = utterance[5..].trim();
        return Some(Action::OpenSite {
            site: qualify_site(site),
        });
    }

    match utterance.as_str() {
        "bookmarks" => return Some(Action::OpenSystemPage(SystemPage::Bookmarks)),
        "downloads" => return Some(Action::OpenSystemPage(SystemPage::Downloads)),
        "settings" => return Some(Action::OpenSystemPage(SystemPage::Settings)),
        _ => {}
    }

    if utterance.contains("read summary") {
        return Some(Action::ReadSummary);
    }

    if utterance.contains("read text") {
        return Some(Action::ReadText);
    }

    if utterance.starts_with("search ") && words.len() >= 2 {
        let query = utterance[7..].trim();
        return Some(Action::Search {
            query: query.to_string(),
        });
    }

    if utterance.contains("scroll down") {
        return Some(Action::ScrollDown);
    }
    if utterance.contains("scroll up") {
        return Some(Action::ScrollUp);
    }

    if utterance == "play music" {
        return Some(Action::PlayMedia);
    }

    if utterance.contains("close this tab") {
        return Some(Action::CloseThisTab);
    }

    if utterance.contains("screenshot") {
        return Some(Action::Screenshot);
    }

    if utterance == "incognito" {
        return Some(Action::OpenIncognito);
    }

    if utterance == "close all tabs" {
        return Some(Action::CloseAllTabs);
    }

    Some(Action::GenericQuery { text: utterance })
}

/// Append ".com" when the spoken site lacks a domain suffix.
fn qualify_site(site: &str) -> String {
    if domain_suffix().is_match(site) {
        site.to_string()
    } else {
        format!("{}.com", site)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_is_exact() {
        assert_eq!(route_command("stop"), Some(Action::StopAll));
        assert_eq!(route_command("  STOP  "), Some(Action::StopAll));
        // "stop" inside a longer utterance is not a stop command
        assert_eq!(
            route_command("stop the music"),
            Some(Action::GenericQuery {
                text: "stop the music".to_string()
            })
        );
    }

    #[test]
    fn test_open_appends_com() {
        assert_eq!(
            route_command("open example"),
            Some(Action::OpenSite {
                site: "example.com".to_string()
            })
        );
    }

    #[test]
    fn test_open_preserves_existing_suffix() {
        assert_eq!(
            route_command("open example.org"),
            Some(Action::OpenSite {
                site: "example.org".to_string()
            })
        );
        assert_eq!(
            route_command("open news.ycombinator.com"),
            Some(Action::OpenSite {
                site: "news.ycombinator.com".to_string()
            })
        );
    }

    #[test]
    fn test_bare_open_is_a_query() {
        assert_eq!(
            route_command("open"),
            Some(Action::GenericQuery {
                text: "open".to_string()
            })
        );
    }

    #[test]
    fn test_system_pages_are_exact() {
        assert_eq!(
            route_command("bookmarks"),
            Some(Action::OpenSystemPage(SystemPage::Bookmarks))
        );
        assert_eq!(
            route_command("downloads"),
            Some(Action::OpenSystemPage(SystemPage::Downloads))
        );
        assert_eq!(
            route_command("settings"),
            Some(Action::OpenSystemPage(SystemPage::Settings))
        );
        // Not exact: falls through to the generic query
        assert_eq!(
            route_command("my downloads"),
            Some(Action::GenericQuery {
                text: "my downloads".to_string()
            })
        );
    }

    #[test]
    fn test_read_commands_are_substring_matches() {
        assert_eq!(
            route_command("please read summary now"),
            Some(Action::ReadSummary)
        );
        assert_eq!(route_command("read text"), Some(Action::ReadText));
    }

    #[test]
    fn test_search_extracts_query() {
        assert_eq!(
            route_command("search cats"),
            Some(Action::Search {
                query: "cats".to_string()
            })
        );
        assert_eq!(
            route_command("search rust borrow checker"),
            Some(Action::Search {
                query: "rust borrow checker".to_string()
            })
        );
    }

    #[test]
    fn test_scroll_directions() {
        assert_eq!(route_command("scroll down a bit"), Some(Action::ScrollDown));
        assert_eq!(route_command("now scroll up"), Some(Action::ScrollUp));
    }

    #[test]
    fn test_play_music_exact() {
        assert_eq!(route_command("play music"), Some(Action::PlayMedia));
        assert_eq!(
            route_command("play music loudly"),
            Some(Action::GenericQuery {
                text: "play music loudly".to_string()
            })
        );
    }

    #[test]
    fn test_tab_and_window_commands() {
        assert_eq!(route_command("close this tab"), Some(Action::CloseThisTab));
        assert_eq!(route_command("close all tabs"), Some(Action::CloseAllTabs));
        assert_eq!(route_command("incognito"), Some(Action::OpenIncognito));
        assert_eq!(
            route_command("take a screenshot"),
            Some(Action::Screenshot)
        );
    }

    #[test]
    fn test_earlier_rule_shadows_later_pattern() {
        // "search" wins over the screenshot substring match
        assert_eq!(
            route_command("search screenshot tools"),
            Some(Action::Search {
                query: "screenshot tools".to_string()
            })
        );
        // "open " wins over everything after it
        assert_eq!(
            route_command("open close this tab"),
            Some(Action::OpenSite {
                site: "close this tab.com".to_string()
            })
        );
        // substring "read summary" wins over "search " further down
        assert_eq!(
            route_command("read summary of search results"),
            Some(Action::ReadSummary)
        );
    }

    #[test]
    fn test_unmatched_becomes_generic_query() {
        assert_eq!(
            route_command("who is marie curie"),
            Some(Action::GenericQuery {
                text: "who is marie curie".to_string()
            })
        );
    }

    #[test]
    fn test_empty_and_whitespace_are_no_ops() {
        assert_eq!(route_command(""), None);
        assert_eq!(route_command("   "), None);
        assert_eq!(route_command("\t\n"), None);
    }
}
