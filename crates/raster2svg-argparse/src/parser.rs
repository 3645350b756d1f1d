use std::ops::{Deref, DerefMut};

use crate::error::{DeclarationError, ParseError, ParseResult};
use crate::help::render_help;
use crate::opt::Tokens;
use crate::registry::Registry;

/// A group of declared options plus the checks that span them.
///
/// ```
/// use raster2svg_argparse::{DeclarationError, OptSpec, OptionSet, Registry, Scalar, Switch};
///
/// struct Options {
///     count: Scalar<u32>,
///     help: Switch,
/// }
///
/// impl OptionSet for Options {
///     fn register<'a>(&'a mut self, is: &mut Registry<'a>) -> Result<(), DeclarationError> {
///         is.register(&mut self.count)?;
///         is.register(&mut self.help)
///     }
///
///     fn validate(&mut self, _positional: &[String]) -> Result<(), String> {
///         if *self.count.value() > 10 {
///             return Err("count must be at most 10".to_string());
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait OptionSet {
    /// Register every option of the set, in the order help should list them.
    fn register<'a>(&'a mut self, registry: &mut Registry<'a>) -> Result<(), DeclarationError>;

    /// Runs once after every token was taken without error. May fill in
    /// derived values before deciding.
    fn validate(&mut self, _positional: &[String]) -> Result<(), String> {
        Ok(())
    }
}

/// Wraps an option set so that any positional argument is an error.
#[derive(Debug, Clone, Default)]
pub struct Strict<S>(pub S);

impl<S: OptionSet> OptionSet for Strict<S> {
    fn register<'a>(&'a mut self, registry: &mut Registry<'a>) -> Result<(), DeclarationError> {
        self.0.register(registry)
    }

    fn validate(&mut self, positional: &[String]) -> Result<(), String> {
        if let Some(first) = positional.first() {
            return Err(format!("unexpected argument '{first}'"));
        }
        self.0.validate(positional)
    }
}

impl<S> Deref for Strict<S> {
    type Target = S;

    fn deref(&self) -> &S {
        &self.0
    }
}

impl<S> DerefMut for Strict<S> {
    fn deref_mut(&mut self) -> &mut S {
        &mut self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseState {
    #[default]
    Unparsed,
    Valid,
    Invalid,
}

/// Binds one argv to an option set. Parses at most once.
#[derive(Debug, Clone, Default)]
pub struct Parser<S> {
    options: S,
    positional: Vec<String>,
    state: ParseState,
    error: Option<ParseError>,
}

impl<S: OptionSet> Parser<S> {
    pub fn new(options: S) -> Self {
        Self {
            options,
            positional: Vec::new(),
            state: ParseState::Unparsed,
            error: None,
        }
    }

    /// Construct and parse in one step; check [`Parser::is_valid`] afterwards.
    pub fn from_args<I, T>(options: S, argv: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut parser = Self::new(options);
        // The outcome is kept in `state` and `error`.
        let _ = parser.parse(argv);
        parser
    }

    /// Bind `argv` to the options. `argv[0]` is the program name and is
    /// skipped.
    ///
    /// Each token is split at its first `=` and the part before it looked up
    /// by exact name. Unknown tokens go to the positional list unchanged. A
    /// known option takes its value(s); the first failure stops the parse.
    /// Once every token is taken, [`OptionSet::validate`] decides.
    ///
    /// A second call fails with [`ParseError::AlreadyParsed`] and changes
    /// nothing.
    pub fn parse<I, T>(&mut self, argv: I) -> ParseResult<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        if self.state != ParseState::Unparsed {
            return Err(ParseError::AlreadyParsed);
        }

        let argv: Vec<String> = argv.into_iter().map(Into::into).collect();
        let result = self.bind(&argv);
        match &result {
            Ok(()) => self.state = ParseState::Valid,
            Err(err) => {
                tracing::debug!(error = %err, "command line rejected");
                self.state = ParseState::Invalid;
                self.error = Some(err.clone());
            }
        }
        result
    }

    fn bind(&mut self, argv: &[String]) -> ParseResult<()> {
        let mut registry = Registry::new();
        self.options.register(&mut registry)?;

        let mut tokens = Tokens::new(argv.get(1..).unwrap_or_default());
        while let Some(token) = tokens.next_token() {
            let (name, inline) = match token.split_once('=') {
                Some((name, value)) => (name, Some(value)),
                None => (token, None),
            };

            let Some(opt) = registry.lookup(name) else {
                tracing::trace!(token, "positional argument");
                self.positional.push(token.to_string());
                continue;
            };

            tracing::trace!(option = name, inline, "matched option");
            opt.spec_mut().mark_specified();
            opt.consume(&mut tokens, inline)
                .map_err(|source| ParseError::Consume {
                    option: name.to_string(),
                    source,
                })?;
        }
        drop(registry);

        self.options
            .validate(&self.positional)
            .map_err(ParseError::Validation)
    }

    /// Render the help text for every declared option.
    pub fn help(&mut self) -> Result<String, DeclarationError> {
        let mut registry = Registry::new();
        self.options.register(&mut registry)?;
        Ok(render_help(&registry))
    }
}

impl<S> Parser<S> {
    pub fn state(&self) -> ParseState {
        self.state
    }

    pub fn is_valid(&self) -> bool {
        self.state == ParseState::Valid
    }

    /// Why the parse failed, if it did.
    pub fn error(&self) -> Option<&ParseError> {
        self.error.as_ref()
    }

    /// Tokens that matched no option, in the order they appeared.
    pub fn positional(&self) -> &[String] {
        &self.positional
    }

    pub fn options(&self) -> &S {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut S {
        &mut self.options
    }

    pub fn into_options(self) -> S {
        self.options
    }
}

impl<S> Deref for Parser<S> {
    type Target = S;

    fn deref(&self) -> &S {
        &self.options
    }
}
