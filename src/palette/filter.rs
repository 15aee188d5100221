//! Label filter for the command palette

use super::registry::CommandDescriptor;

/// Filter commands by search query
///
/// Case-insensitive substring match against the label. Order follows
/// `source`; an empty query returns every command.
pub fn filter<'a>(query: &str, source: &'a [CommandDescriptor]) -> Vec<&'a CommandDescriptor> {
    if query.is_empty() {
        return source.iter().collect();
    }

    let query_lower = query.to_lowercase();
    source
        .iter()
        .filter(|cmd| cmd.label.to_lowercase().contains(&query_lower))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::registry::{Icon, DEFAULT_COMMANDS};

    static SCENARIO: &[CommandDescriptor] = &[
        CommandDescriptor {
            id: "/",
            label: "Go to Home",
            icon: Icon::Home,
            shortcut: None,
        },
        CommandDescriptor {
            id: "/about",
            label: "About GyraLabs",
            icon: Icon::Info,
            shortcut: None,
        },
    ];

    fn ids(results: &[&CommandDescriptor]) -> Vec<&'static str> {
        results.iter().map(|cmd| cmd.id).collect()
    }

    #[test]
    fn test_empty_query_is_identity() {
        let results = filter("", DEFAULT_COMMANDS);
        assert_eq!(results.len(), DEFAULT_COMMANDS.len());
        assert!(results.iter().zip(DEFAULT_COMMANDS).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_case_insensitive_match() {
        assert_eq!(ids(&filter("ab", SCENARIO)), vec!["/about"]);
        assert_eq!(ids(&filter("AB", SCENARIO)), vec!["/about"]);
        assert_eq!(ids(&filter("gYrA", SCENARIO)), vec!["/about"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(filter("zzz", DEFAULT_COMMANDS).is_empty());
    }

    #[test]
    fn test_label_only() {
        // "settings" is an id and a label; "/docs" is only an id
        assert_eq!(ids(&filter("settings", DEFAULT_COMMANDS)), vec!["settings"]);
        assert!(filter("/docs", DEFAULT_COMMANDS).is_empty());
    }

    #[test]
    fn test_preserves_order_and_partitions() {
        for query in ["a", "o", "in", "te", "e ", "x", "Go", "ING"] {
            let results = filter(query, DEFAULT_COMMANDS);
            let q = query.to_lowercase();

            // Subset in original relative order
            let positions: Vec<usize> = results
                .iter()
                .map(|r| DEFAULT_COMMANDS.iter().position(|c| c == *r).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "query {query:?}");

            // Included iff the label contains the query
            for cmd in DEFAULT_COMMANDS {
                let included = results.contains(&cmd);
                assert_eq!(included, cmd.label.to_lowercase().contains(&q), "query {query:?}");
            }
        }
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(filter("an", DEFAULT_COMMANDS), filter("an", DEFAULT_COMMANDS));
    }
}
