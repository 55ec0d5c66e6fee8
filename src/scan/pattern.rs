use regex::Regex;

/// A debug-call hit on one line of comment-stripped text.
#[derive(Debug, Clone)]
pub struct DebugCallMatch {
    /// 1-based line number, valid for the staged content too since comment
    /// stripping preserves line structure.
    pub line: usize,
    /// The matched identifier, e.g. `var_dump`.
    pub identifier: String,
    /// The matching line with up to two lines either side: `(line_no, text)`.
    pub context: Vec<(usize, String)>,
}

/// Compiled matcher for a fixed identifier denylist in call position.
///
/// Matching is case-sensitive and word-bounded: `var_dump(` hits,
/// `my_var_dump(` does not. Whitespace between the identifier and the
/// opening parenthesis is tolerated.
pub struct DebugCallPattern {
    regex: Option<Regex>,
}

impl DebugCallPattern {
    pub fn new(identifiers: &[String]) -> Self {
        if identifiers.is_empty() {
            return Self { regex: None };
        }
        let alts: Vec<String> = identifiers.iter().map(|i| regex::escape(i)).collect();
        let pattern = format!(r"\b({})\s*\(", alts.join("|"));
        let regex = Regex::new(&pattern).expect("denylist pattern must compile");
        Self { regex: Some(regex) }
    }

    /// Fast containment test, used as the PHP-family pre-check against the
    /// unstripped staged bytes. Sound as a filter: stripping only removes
    /// text within a line, so any post-strip match exists pre-strip.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.as_ref().is_some_and(|r| r.is_match(text))
    }

    /// Authoritative per-line match over (comment-stripped) text.
    /// One entry per matching line, in line order.
    pub fn find_matches(&self, text: &str) -> Vec<DebugCallMatch> {
        let Some(regex) = self.regex.as_ref() else {
            return Vec::new();
        };
        let lines: Vec<&str> = text.split('\n').collect();
        let mut matches = Vec::new();
        for (idx, line) in lines.iter().enumerate() {
            let Some(caps) = regex.captures(line) else {
                continue;
            };
            let start = idx.saturating_sub(2);
            let end = (idx + 2).min(lines.len() - 1);
            matches.push(DebugCallMatch {
                line: idx + 1,
                identifier: caps[1].to_string(),
                context: (start..=end).map(|i| (i + 1, lines[i].to_string())).collect(),
            });
        }
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn php_pattern() -> DebugCallPattern {
        DebugCallPattern::new(&[
            "var_dump".into(),
            "print_r".into(),
            "debug_backtrace".into(),
        ])
    }

    fn script_pattern() -> DebugCallPattern {
        DebugCallPattern::new(&["console.log".into(), "alert".into()])
    }

    #[test]
    fn matches_plain_call() {
        let hits = php_pattern().find_matches("<?php\nvar_dump($a);\n");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].line, 2);
        assert_eq!(hits[0].identifier, "var_dump");
    }

    #[test]
    fn matches_call_with_space() {
        assert!(php_pattern().is_match("print_r ($a);"));
    }

    #[test]
    fn word_bounded() {
        let p = php_pattern();
        assert!(!p.is_match("my_var_dump($a);"));
        assert!(!p.is_match("var_dumper($a);"));
    }

    #[test]
    fn case_sensitive() {
        assert!(!php_pattern().is_match("VAR_DUMP($a);"));
    }

    #[test]
    fn identifier_without_call_ignored() {
        assert!(!php_pattern().is_match("'var_dump is forbidden'"));
    }

    #[test]
    fn console_log_dotted_name() {
        let hits = script_pattern().find_matches("console.log('x');");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].identifier, "console.log");
    }

    #[test]
    fn alert_not_matched_inside_identifier() {
        assert!(!script_pattern().is_match("showAlert(1); balert(2);"));
    }

    #[test]
    fn context_window_clamped_at_edges() {
        let hits = php_pattern().find_matches("var_dump($a);\n$b = 1;");
        assert_eq!(hits[0].context.len(), 2);
        assert_eq!(hits[0].context[0], (1, "var_dump($a);".to_string()));
    }

    #[test]
    fn context_two_lines_each_side() {
        let text = "a\nb\nvar_dump($c);\nd\ne\nf";
        let hits = php_pattern().find_matches(text);
        let nos: Vec<usize> = hits[0].context.iter().map(|(n, _)| *n).collect();
        assert_eq!(nos, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn one_entry_per_line() {
        let hits = php_pattern().find_matches("var_dump($a); var_dump($b);");
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn empty_denylist_matches_nothing() {
        let p = DebugCallPattern::new(&[]);
        assert!(!p.is_match("anything("));
        assert!(p.find_matches("anything(").is_empty());
    }
}
