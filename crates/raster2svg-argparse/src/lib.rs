//! Declarative command-line options with a single-pass parser.
//!
//! An embedding program declares its options as fields of one struct and
//! registers them through [`OptionSet`]. [`Parser`] then walks argv once:
//! every token is matched by exact name, and a matched option decides for
//! itself how many of the following tokens (or which `=value`) it takes.
//! Tokens that match nothing are kept as positional arguments. A final
//! [`OptionSet::validate`] hook checks cross-option rules.
//!
//! ```
//! use raster2svg_argparse::{
//!     DeclarationError, EnumScalar, OptSpec, OptionSet, Parser, Registry, Scalar, Switch,
//!     name_map,
//! };
//!
//! name_map! {
//!     #[derive(Default)]
//!     pub enum Mode {
//!         #[default]
//!         Summary,
//!         Trace,
//!     }
//! }
//!
//! struct Options {
//!     verbose: Switch,
//!     count: Scalar<u32>,
//!     mode: EnumScalar<Mode>,
//! }
//!
//! impl OptionSet for Options {
//!     fn register<'a>(&'a mut self, is: &mut Registry<'a>) -> Result<(), DeclarationError> {
//!         is.register(&mut self.verbose)?;
//!         is.register(&mut self.count)?;
//!         is.register(&mut self.mode)
//!     }
//! }
//!
//! let options = Options {
//!     verbose: Switch::new(OptSpec::both("-v", "--verbose", "Print more.")),
//!     count: Scalar::new(OptSpec::both("-c", "--count", "How many.")).with_default(1),
//!     mode: EnumScalar::new(OptSpec::long_only("--mode", "Report mode."), Mode::names()),
//! };
//!
//! let parser = Parser::from_args(options, ["prog", "-c", "3", "--mode", "Trace", "input.txt"]);
//! assert!(parser.is_valid());
//! assert_eq!(*parser.count.value(), 3);
//! assert_eq!(parser.mode.value(), Mode::Trace);
//! assert!(!parser.verbose.is_set());
//! assert_eq!(parser.positional(), ["input.txt"]);
//! ```

mod error;
mod help;
mod name_map;
mod opt;
mod parser;
mod registry;
mod variants;

pub use error::{ConsumeError, DeclarationError, ParseError, ParseResult};
pub use help::render_help;
pub use name_map::{NameMap, UNKNOWN_NAME};
pub use opt::{OPTION_PREFIX, Opt, OptSpec, Tokens};
pub use parser::{OptionSet, ParseState, Parser, Strict};
pub use registry::Registry;
pub use variants::{EnumList, EnumScalar, EqScalar, Scalar, ScalarList, Switch};
