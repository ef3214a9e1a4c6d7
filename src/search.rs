//! Fuzzy name search and climate filtering over the planet list.

use std::collections::HashSet;

use crate::api::Planet;

/// Case-insensitive subsequence match: true when every character of `query`
/// appears in `target` in order, not necessarily contiguously. The empty
/// query matches everything.
pub fn fuzzy_match(target: &str, query: &str) -> bool {
    let mut query_chars = query.chars().flat_map(char::to_lowercase).peekable();

    for c in target.chars().flat_map(char::to_lowercase) {
        match query_chars.peek() {
            Some(&q) if q == c => {
                query_chars.next();
            }
            Some(_) => {}
            None => break,
        }
    }

    query_chars.peek().is_none()
}

/// Filter planets by fuzzy name query and selected climate tags.
///
/// A planet passes when its name fuzzy-matches `query` (empty query passes
/// all) AND its comma-split climate tokens intersect `selected_climates`
/// (empty selection passes all). Output preserves input order.
pub fn filter_planets<'a>(
    planets: &'a [Planet],
    query: &str,
    selected_climates: &[String],
) -> Vec<&'a Planet> {
    planets
        .iter()
        .filter(|planet| {
            if !query.is_empty() && !fuzzy_match(&planet.name, query) {
                return false;
            }

            if !selected_climates.is_empty() {
                let tokens = planet.climate_tokens();
                let matches = selected_climates
                    .iter()
                    .any(|selected| tokens.contains(&selected.as_str()));
                if !matches {
                    return false;
                }
            }

            true
        })
        .collect()
}

/// Distinct trimmed climate tokens across all planets, for the filter UI.
///
/// No ordering is guaranteed; callers sort for display.
pub fn unique_climates(planets: &[Planet]) -> Vec<String> {
    let mut seen = HashSet::new();
    planets
        .iter()
        .flat_map(|p| p.climate_tokens())
        .filter(|token| seen.insert(token.to_string()))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::planet;

    #[test]
    fn fuzzy_match_subsequence_in_order() {
        assert!(fuzzy_match("Tatooine", "ttn"));
        assert!(fuzzy_match("Tatooine", "TATOOINE"));
        assert!(fuzzy_match("Tatooine", ""));
    }

    #[test]
    fn fuzzy_match_rejects_order_violation() {
        assert!(!fuzzy_match("Tatooine", "nt"));
        assert!(!fuzzy_match("Hoth", "hothh"));
        assert!(!fuzzy_match("", "a"));
    }

    #[test]
    fn climate_filter_intersects_split_tokens() {
        let planets = vec![planet("Tatooine", "arid, hot"), planet("Hoth", "frozen")];

        let hot = filter_planets(&planets, "", &["hot".to_string()]);
        assert_eq!(hot.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(), vec!["Tatooine"]);

        let frozen = filter_planets(&planets, "", &["frozen".to_string()]);
        assert_eq!(frozen.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(), vec!["Hoth"]);

        let all = filter_planets(&planets, "", &[]);
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn filters_are_anded_and_order_is_preserved() {
        let planets = vec![
            planet("Alderaan", "temperate"),
            planet("Tatooine", "arid, hot"),
            planet("Dagobah", "murky"),
        ];

        // "a" matches every name here, but only Tatooine also carries "hot".
        let result = filter_planets(&planets, "a", &["hot".to_string()]);
        assert_eq!(result.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(), vec!["Tatooine"]);

        let names: Vec<_> = filter_planets(&planets, "a", &[])
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Alderaan", "Tatooine", "Dagobah"]);
    }

    #[test]
    fn unique_climates_dedupes_trimmed_tokens() {
        let planets = vec![
            planet("Tatooine", "arid, hot"),
            planet("Jakku", "arid"),
            planet("Hoth", "frozen"),
        ];

        let mut climates = unique_climates(&planets);
        climates.sort();
        assert_eq!(climates, vec!["arid", "frozen", "hot"]);
    }
}
