//! The ordered token rule table.
//!
//! Rules are tried top to bottom against the unconsumed input and the first
//! one that matches a non-empty prefix wins. Rules without a kind match
//! trivia that is skipped.

use lazy_static::lazy_static;
use letter_ast::syntax_kind::SyntaxKind;
use regex::Regex;

pub(crate) enum Matcher {
    /// Anchored regular expression.
    Pattern(Regex),
    /// Exact text.
    Literal(&'static str),
    /// Exact text not followed by a word character.
    Keyword(&'static str),
}

impl Matcher {
    /// Length in bytes of the prefix of `input` this matcher accepts.
    pub(crate) fn match_len(&self, input: &str) -> Option<usize> {
        let len = match self {
            Matcher::Pattern(re) => re.find(input).map(|m| m.end())?,
            Matcher::Literal(text) => input.starts_with(text).then_some(text.len())?,
            Matcher::Keyword(word) => {
                let rest = input.strip_prefix(word)?;
                if rest.bytes().next().is_some_and(is_word_byte) {
                    return None;
                }
                word.len()
            }
        };
        (len > 0).then_some(len)
    }
}

pub(crate) fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

pub(crate) struct Rule {
    pub matcher: Matcher,
    /// `None` for whitespace and comments.
    pub kind: Option<SyntaxKind>,
}

fn pattern(source: &str, kind: Option<SyntaxKind>) -> Rule {
    let re = Regex::new(&format!("^(?:{source})")).expect("token rule patterns are valid");
    Rule {
        matcher: Matcher::Pattern(re),
        kind,
    }
}

fn literal(text: &'static str, kind: SyntaxKind) -> Rule {
    Rule {
        matcher: Matcher::Literal(text),
        kind: Some(kind),
    }
}

fn build_rules() -> Vec<Rule> {
    let mut rules = vec![
        // Trivia
        pattern(r"\s+", None),
        pattern(r"//[^\n]*", None),
        pattern(r"/\*(?s:.)*?\*/", None),
        // Delimiters
        literal(";", SyntaxKind::SemicolonToken),
        literal("{", SyntaxKind::OpenBraceToken),
        literal("}", SyntaxKind::CloseBraceToken),
        literal("(", SyntaxKind::OpenParenToken),
        literal(")", SyntaxKind::CloseParenToken),
        literal(",", SyntaxKind::CommaToken),
        literal(".", SyntaxKind::DotToken),
        literal("[", SyntaxKind::OpenBracketToken),
        literal("]", SyntaxKind::CloseBracketToken),
    ];

    // Keywords must precede the identifier rule.
    rules.extend(SyntaxKind::KEYWORDS.iter().filter_map(|&kind| {
        kind.keyword_text().map(|word| Rule {
            matcher: Matcher::Keyword(word),
            kind: Some(kind),
        })
    }));

    rules.extend([
        pattern(r"[0-9]+", Some(SyntaxKind::NumberToken)),
        pattern(r"[A-Za-z0-9_]+", Some(SyntaxKind::Identifier)),
        // Operators: longer forms first.
        pattern(r"[=!]=", Some(SyntaxKind::EqualityOperator)),
        literal("=", SyntaxKind::SimpleAssign),
        pattern(r"[*/+\-]=", Some(SyntaxKind::ComplexAssign)),
        pattern(r"[+\-]", Some(SyntaxKind::AdditiveOperator)),
        pattern(r"[*/]", Some(SyntaxKind::MultiplicativeOperator)),
        pattern(r"[<>]=?", Some(SyntaxKind::RelationalOperator)),
        literal("&&", SyntaxKind::LogicalAnd),
        literal("||", SyntaxKind::LogicalOr),
        literal("!", SyntaxKind::LogicalNot),
        // Strings: no escapes, no embedded quote of the same kind.
        pattern(r#""[^"]*""#, Some(SyntaxKind::StringToken)),
        pattern(r"'[^']*'", Some(SyntaxKind::StringToken)),
    ]);

    rules
}

lazy_static! {
    pub(crate) static ref RULES: Vec<Rule> = build_rules();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_compile() {
        assert_eq!(RULES.len(), 3 + 9 + 16 + 13);
    }

    #[test]
    fn test_keyword_requires_word_boundary() {
        let m = Matcher::Keyword("let");
        assert_eq!(m.match_len("let x"), Some(3));
        assert_eq!(m.match_len("let;"), Some(3));
        assert_eq!(m.match_len("let"), Some(3));
        assert_eq!(m.match_len("letter"), None);
        assert_eq!(m.match_len("let_"), None);
    }

    #[test]
    fn test_pattern_is_anchored() {
        let rule = pattern(r"[0-9]+", Some(SyntaxKind::NumberToken));
        assert_eq!(rule.matcher.match_len("42abc"), Some(2));
        assert_eq!(rule.matcher.match_len("x42"), None);
    }

    #[test]
    fn test_block_comment_is_lazy() {
        let rule = pattern(r"/\*(?s:.)*?\*/", None);
        assert_eq!(rule.matcher.match_len("/* a */ b /* c */"), Some(7));
        assert_eq!(rule.matcher.match_len("/*\n*/"), Some(5));
        assert_eq!(rule.matcher.match_len("/* open"), None);
    }
}
