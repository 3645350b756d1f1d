use indexmap::IndexMap;

use crate::error::DeclarationError;
use crate::opt::Opt;

/// The declared options of one command line, in declaration order, plus a
/// name table for exact-match lookup.
///
/// A registry mutably borrows its options for as long as it lives, so it is
/// built fresh for each parse or help rendering by
/// [`OptionSet::register`](crate::OptionSet::register).
#[derive(Default)]
pub struct Registry<'a> {
    options: Vec<&'a mut dyn Opt>,
    names: IndexMap<&'static str, usize>,
}

impl<'a> Registry<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an option under each of its names.
    ///
    /// Fails if the option has no name or if any of its names is already
    /// taken; nothing is registered in either case.
    pub fn register(&mut self, opt: &'a mut dyn Opt) -> Result<(), DeclarationError> {
        let spec = opt.spec();
        let names: Vec<&'static str> = spec.names().filter(|name| !name.is_empty()).collect();
        if names.is_empty() {
            return Err(DeclarationError::Unnamed { help: spec.help() });
        }
        for (i, name) in names.iter().enumerate() {
            if self.names.contains_key(name) || names[..i].contains(name) {
                return Err(DeclarationError::DuplicateName {
                    name: name.to_string(),
                });
            }
        }

        let index = self.options.len();
        for name in names {
            self.names.insert(name, index);
        }
        self.options.push(opt);
        Ok(())
    }

    /// Exact, full-string lookup; abbreviations never match.
    pub fn lookup(&mut self, name: &str) -> Option<&mut (dyn Opt + 'a)> {
        let index = *self.names.get(name)?;
        self.options.get_mut(index).map(|opt| &mut **opt)
    }

    pub fn get(&self, name: &str) -> Option<&(dyn Opt + 'a)> {
        let index = *self.names.get(name)?;
        self.options.get(index).map(|opt| &**opt)
    }

    /// Options in declaration order.
    pub fn options(&self) -> impl Iterator<Item = &(dyn Opt + 'a)> + '_ {
        self.options.iter().map(|opt| &**opt)
    }

    /// Every registered name, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.names.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl std::fmt::Debug for Registry<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("names", &self.names)
            .finish_non_exhaustive()
    }
}
