//! The capability every declared option shares.

use std::fmt::Display;
use std::str::FromStr;

use crate::error::ConsumeError;

/// Tokens starting with this character end a greedy list.
pub const OPTION_PREFIX: char = '-';

/// Identity and parse state common to every option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptSpec {
    short: Option<&'static str>,
    long: Option<&'static str>,
    help: &'static str,
    specified: bool,
}

impl OptSpec {
    /// At least one of `short` and `long` must be present; the
    /// [`Registry`](crate::Registry) rejects options with neither.
    pub const fn new(
        short: Option<&'static str>,
        long: Option<&'static str>,
        help: &'static str,
    ) -> Self {
        Self {
            short,
            long,
            help,
            specified: false,
        }
    }

    pub const fn both(short: &'static str, long: &'static str, help: &'static str) -> Self {
        Self::new(Some(short), Some(long), help)
    }

    pub const fn short_only(short: &'static str, help: &'static str) -> Self {
        Self::new(Some(short), None, help)
    }

    pub const fn long_only(long: &'static str, help: &'static str) -> Self {
        Self::new(None, Some(long), help)
    }

    pub fn short(&self) -> Option<&'static str> {
        self.short
    }

    pub fn long(&self) -> Option<&'static str> {
        self.long
    }

    pub fn help(&self) -> &'static str {
        self.help
    }

    /// Whether the parser matched this option, even if taking its value failed.
    pub fn specified(&self) -> bool {
        self.specified
    }

    /// Long name if there is one, otherwise the short name.
    pub fn display_name(&self) -> &'static str {
        self.long.or(self.short).unwrap_or("<unnamed>")
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.short.into_iter().chain(self.long)
    }

    pub(crate) fn mark_specified(&mut self) {
        self.specified = true;
    }

    /// For validation hooks that derive an option from other input.
    pub fn set_specified(&mut self, specified: bool) {
        self.specified = specified;
    }
}

/// Forward-only cursor over the tokens that follow a matched option name.
#[derive(Debug, Clone)]
pub struct Tokens<'t> {
    tokens: &'t [String],
    pos: usize,
}

impl<'t> Tokens<'t> {
    pub fn new(tokens: &'t [String]) -> Self {
        Self { tokens, pos: 0 }
    }

    pub fn peek(&self) -> Option<&'t str> {
        self.tokens.get(self.pos).map(String::as_str)
    }

    /// Take the next token regardless of what it looks like.
    pub fn next_token(&mut self) -> Option<&'t str> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }

    /// Take every token up to (not including) the next one that starts with
    /// [`OPTION_PREFIX`].
    pub fn take_until_option(&mut self) -> &'t [String] {
        let rest = &self.tokens[self.pos..];
        let count = rest
            .iter()
            .take_while(|token| !token.starts_with(OPTION_PREFIX))
            .count();
        self.pos += count;
        &rest[..count]
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.pos >= self.tokens.len()
    }
}

/// A declared command-line option.
///
/// The parser sets [`OptSpec::specified`] when it matches a name, then hands
/// the option a cursor positioned just past that name. Implementations
/// advance the cursor over exactly the tokens they take.
pub trait Opt {
    fn spec(&self) -> &OptSpec;

    fn spec_mut(&mut self) -> &mut OptSpec;

    /// Appended to each name in help output, like `" <value>"`.
    fn usage_suffix(&self) -> &'static str {
        ""
    }

    /// Appended to the help text, like `"Default is x. Choices:"`.
    fn help_suffix(&self) -> String {
        String::new()
    }

    /// Additional help lines shown beneath the option.
    fn extra_help(&self) -> Vec<String> {
        Vec::new()
    }

    /// Take this option's value(s) from `tokens` or from `inline`, the part
    /// after `=` when the option was written as `name=value`.
    fn consume(
        &mut self,
        tokens: &mut Tokens<'_>,
        inline: Option<&str>,
    ) -> Result<(), ConsumeError>;
}

/// Parse one token as `T`. Empty tokens and partial parses are rejected;
/// `String` and `PathBuf` take the whole token.
pub(crate) fn parse_value<T>(token: &str) -> Result<T, ConsumeError>
where
    T: FromStr,
    T::Err: Display,
{
    if token.is_empty() {
        return Err(ConsumeError::EmptyValue);
    }
    token.parse().map_err(|e: T::Err| ConsumeError::InvalidValue {
        value: token.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn take_until_option_stops_at_prefix() {
        let argv = owned(&["a", "b", "--next", "c"]);
        let mut tokens = Tokens::new(&argv);
        assert_eq!(tokens.take_until_option(), &argv[..2]);
        assert_eq!(tokens.peek(), Some("--next"));
        assert_eq!(tokens.take_until_option(), &[] as &[String]);
        assert_eq!(tokens.next_token(), Some("--next"));
        assert_eq!(tokens.take_until_option(), &argv[3..]);
        assert!(tokens.is_empty());
        assert_eq!(tokens.next_token(), None);
    }

    #[test]
    fn negative_numbers_end_a_list() {
        let argv = owned(&["1", "-2", "3"]);
        let mut tokens = Tokens::new(&argv);
        assert_eq!(tokens.take_until_option().len(), 1);
        assert_eq!(tokens.position(), 1);
    }

    #[test]
    fn parse_value_rejects_trailing_garbage() {
        assert_eq!(parse_value::<i32>("42"), Ok(42));
        assert_eq!(parse_value::<f64>("-0.5"), Ok(-0.5));
        assert!(matches!(
            parse_value::<i32>("42abc"),
            Err(ConsumeError::InvalidValue { .. })
        ));
        assert_eq!(parse_value::<i32>(""), Err(ConsumeError::EmptyValue));
    }

    #[test]
    fn parse_value_takes_strings_verbatim() {
        assert_eq!(
            parse_value::<String>("two words=x").as_deref(),
            Ok("two words=x")
        );
        assert_eq!(parse_value::<String>(""), Err(ConsumeError::EmptyValue));
    }

    #[test]
    fn spec_names_and_display() {
        let spec = OptSpec::short_only("-v", "verbose");
        assert_eq!(spec.display_name(), "-v");
        assert_eq!(spec.names().collect::<Vec<_>>(), ["-v"]);

        let spec = OptSpec::both("-c", "--count", "");
        assert_eq!(spec.display_name(), "--count");
        assert_eq!(spec.names().collect::<Vec<_>>(), ["-c", "--count"]);
        assert!(!spec.specified());
    }
}
