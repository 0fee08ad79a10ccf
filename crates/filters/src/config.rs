use crate::parse::parse_rule;
use crate::{DefaultDecision, FilterList, ParseError};

/// Serializable description of a [`FilterList`].
///
/// This is the shape a project configuration stores: a default decision plus
/// rule lines in precedence order, using the same syntax as
/// [`parse_rules`](crate::parse_rules). Blank entries and comments are
/// skipped.
///
/// With the `serde` feature the type deserializes from, for example:
///
/// ```json
/// { "default": "exclude", "rules": ["- *.tmp", "+ *.rs", "+d src"] }
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FilterListConfig {
    /// Decision for paths no rule matches.
    pub default: DefaultDecision,
    /// Rule lines in precedence order.
    pub rules: Vec<String>,
}

impl FilterListConfig {
    /// Compiles the configuration into a list.
    ///
    /// Errors carry the 1-based position of the offending entry as the line.
    pub fn into_filter_list(self) -> Result<FilterList, ParseError> {
        let mut list = FilterList::new(self.default);
        for (index, entry) in self.rules.iter().enumerate() {
            if let Some(rule) = parse_rule(entry).map_err(|err| err.at_line(index + 1))? {
                list.push(rule);
            }
        }
        Ok(list)
    }

    /// Describes an existing list.
    ///
    /// Fails with [`ParseErrorKind::UnrepresentablePattern`] when a rule's
    /// pattern cannot be written as rule text; the error's line is the
    /// 1-based position of that rule.
    ///
    /// [`ParseErrorKind::UnrepresentablePattern`]: crate::ParseErrorKind::UnrepresentablePattern
    pub fn from_list(list: &FilterList) -> Result<Self, ParseError> {
        let rules = list
            .iter()
            .enumerate()
            .map(|(index, rule)| rule.to_rule_text().map_err(|err| err.at_line(index + 1)))
            .collect::<Result<_, _>>()?;
        Ok(Self {
            default: list.default_decision(),
            rules,
        })
    }
}

impl TryFrom<FilterListConfig> for FilterList {
    type Error = ParseError;

    fn try_from(config: FilterListConfig) -> Result<Self, Self::Error> {
        config.into_filter_list()
    }
}

impl TryFrom<&FilterList> for FilterListConfig {
    type Error = ParseError;

    fn try_from(list: &FilterList) -> Result<Self, Self::Error> {
        Self::from_list(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Applicability, EntryKind, FilterPattern, ParseErrorKind};

    #[test]
    fn empty_config_includes_everything() {
        let list = FilterListConfig::default().into_filter_list().unwrap();
        assert!(list.is_empty());
        assert!(list.allows("anything", EntryKind::File).unwrap());
    }

    #[test]
    fn config_compiles_in_order() {
        let config = FilterListConfig {
            default: DefaultDecision::Exclude,
            rules: vec!["- *.tmp".into(), "# skip".into(), "+ *".into()],
        };
        let list = FilterList::try_from(config).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.default_decision(), DefaultDecision::Exclude);
        assert!(!list.allows("a.tmp", EntryKind::File).unwrap());
        assert!(list.allows("a.txt", EntryKind::File).unwrap());
    }

    #[test]
    fn config_errors_name_entry() {
        let config = FilterListConfig {
            default: DefaultDecision::Include,
            rules: vec!["+ ok".into(), "-q bad".into()],
        };
        let err = config.into_filter_list().unwrap_err();
        assert_eq!(err.line(), Some(2));
        assert_eq!(err.kind(), &ParseErrorKind::UnknownModifier('q'));
    }

    #[test]
    fn list_round_trips_through_config() {
        let list = FilterList::from_rules([
            FilterPattern::exclude("target").directories_only(),
            FilterPattern::include("*.rs").files_only(),
            FilterPattern::exclude("*"),
        ])
        .with_default(DefaultDecision::Exclude);

        let config = FilterListConfig::try_from(&list).unwrap();
        assert_eq!(config.rules, ["-d target", "+f *.rs", "- *"]);
        assert_eq!(config.into_filter_list().unwrap(), list);
    }

    #[test]
    fn unwritable_patterns_are_refused_on_export() {
        let cases = [
            FilterPattern::include(""),
            FilterPattern::new(true, "a/", Applicability::FilesOnly),
            FilterPattern::exclude(" notes.txt"),
        ];
        for rule in cases {
            let list = FilterList::from_rules([FilterPattern::exclude("*.tmp"), rule.clone()]);
            let err = FilterListConfig::from_list(&list).unwrap_err();
            assert_eq!(err.kind(), &ParseErrorKind::UnrepresentablePattern);
            assert_eq!(err.line(), Some(2));
            assert_eq!(err.text(), rule.pattern_text());
        }
    }
}
