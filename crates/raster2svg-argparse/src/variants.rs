//! The option kinds: how many tokens each takes and how it parses them.

use std::fmt::Display;
use std::str::FromStr;

use crate::error::ConsumeError;
use crate::name_map::NameMap;
use crate::opt::{Opt, OptSpec, Tokens, parse_value};

const VALUE_SUFFIX: &str = " <value>";
const INLINE_SUFFIX: &str = "=<value>";
const LIST_SUFFIX: &str = " <value> ...";

/// A flag that takes no value; it is on when it appears on the command line.
#[derive(Debug, Clone)]
pub struct Switch {
    spec: OptSpec,
}

impl Switch {
    pub const fn new(spec: OptSpec) -> Self {
        Self { spec }
    }

    pub fn is_set(&self) -> bool {
        self.spec.specified()
    }
}

impl Opt for Switch {
    fn spec(&self) -> &OptSpec {
        &self.spec
    }

    fn spec_mut(&mut self) -> &mut OptSpec {
        &mut self.spec
    }

    fn consume(
        &mut self,
        _tokens: &mut Tokens<'_>,
        _inline: Option<&str>,
    ) -> Result<(), ConsumeError> {
        Ok(())
    }
}

/// A single value taken from the next token: `--count 5`.
#[derive(Debug, Clone)]
pub struct Scalar<T> {
    spec: OptSpec,
    value: T,
}

impl<T: Default> Scalar<T> {
    pub fn new(spec: OptSpec) -> Self {
        Self {
            spec,
            value: T::default(),
        }
    }
}

impl<T> Scalar<T> {
    pub fn with_default(mut self, value: T) -> Self {
        self.value = value;
        self
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn set_value(&mut self, value: T) {
        self.value = value;
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn specified(&self) -> bool {
        self.spec.specified()
    }

    /// Mark as specified, for values derived in a validation hook.
    pub fn set_specified(&mut self) {
        self.spec.set_specified(true);
    }
}

impl<T> Opt for Scalar<T>
where
    T: FromStr,
    T::Err: Display,
{
    fn spec(&self) -> &OptSpec {
        &self.spec
    }

    fn spec_mut(&mut self) -> &mut OptSpec {
        &mut self.spec
    }

    fn usage_suffix(&self) -> &'static str {
        VALUE_SUFFIX
    }

    fn consume(
        &mut self,
        tokens: &mut Tokens<'_>,
        inline: Option<&str>,
    ) -> Result<(), ConsumeError> {
        if inline.is_some() {
            return Err(ConsumeError::InlineNotAccepted);
        }
        let token = tokens.next_token().ok_or(ConsumeError::MissingValue)?;
        self.value = parse_value(token)?;
        Ok(())
    }
}

/// A single value that must be attached with `=`: `--height=4`.
///
/// `--height 4` is a consumption failure; the `4` is never taken.
#[derive(Debug, Clone)]
pub struct EqScalar<T> {
    spec: OptSpec,
    value: T,
}

impl<T: Default> EqScalar<T> {
    pub fn new(spec: OptSpec) -> Self {
        Self {
            spec,
            value: T::default(),
        }
    }
}

impl<T> EqScalar<T> {
    pub fn with_default(mut self, value: T) -> Self {
        self.value = value;
        self
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn set_value(&mut self, value: T) {
        self.value = value;
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn specified(&self) -> bool {
        self.spec.specified()
    }
}

impl<T> Opt for EqScalar<T>
where
    T: FromStr,
    T::Err: Display,
{
    fn spec(&self) -> &OptSpec {
        &self.spec
    }

    fn spec_mut(&mut self) -> &mut OptSpec {
        &mut self.spec
    }

    fn usage_suffix(&self) -> &'static str {
        INLINE_SUFFIX
    }

    fn consume(
        &mut self,
        _tokens: &mut Tokens<'_>,
        inline: Option<&str>,
    ) -> Result<(), ConsumeError> {
        let value = inline.ok_or(ConsumeError::InlineRequired)?;
        self.value = parse_value(value)?;
        Ok(())
    }
}

/// Every following token up to the next one starting with `-`, at least
/// `MIN` of them. A parsed list replaces the defaults entirely.
#[derive(Debug, Clone)]
pub struct ScalarList<T, const MIN: usize = 1> {
    spec: OptSpec,
    values: Vec<T>,
}

impl<T, const MIN: usize> ScalarList<T, MIN> {
    pub fn new(spec: OptSpec) -> Self {
        Self {
            spec,
            values: Vec::new(),
        }
    }

    pub fn with_defaults(mut self, values: impl IntoIterator<Item = T>) -> Self {
        self.values = values.into_iter().collect();
        self
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn set_values(&mut self, values: Vec<T>) {
        self.values = values;
    }

    pub fn into_values(self) -> Vec<T> {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn specified(&self) -> bool {
        self.spec.specified()
    }
}

impl<T, const MIN: usize> Opt for ScalarList<T, MIN>
where
    T: FromStr,
    T::Err: Display,
{
    fn spec(&self) -> &OptSpec {
        &self.spec
    }

    fn spec_mut(&mut self) -> &mut OptSpec {
        &mut self.spec
    }

    fn usage_suffix(&self) -> &'static str {
        LIST_SUFFIX
    }

    fn consume(
        &mut self,
        tokens: &mut Tokens<'_>,
        inline: Option<&str>,
    ) -> Result<(), ConsumeError> {
        if inline.is_some() {
            return Err(ConsumeError::InlineNotAccepted);
        }
        let run = tokens.take_until_option();
        if run.len() < MIN {
            return Err(ConsumeError::TooFewValues {
                min: MIN,
                found: run.len(),
            });
        }
        self.values = run
            .iter()
            .map(|token| parse_value(token))
            .collect::<Result<_, _>>()?;
        Ok(())
    }
}

fn lookup_choice<E: Copy + Ord>(names: &NameMap<E>, token: &str) -> Result<E, ConsumeError> {
    if token.is_empty() {
        return Err(ConsumeError::EmptyValue);
    }
    names.value(token).ok_or_else(|| ConsumeError::UnknownChoice {
        value: token.to_string(),
    })
}

/// One symbolic value from a [`NameMap`], taken from the next token.
///
/// With a hidden default the default value is left out of the help text
/// and the choice list, so it can stand for "not given" while still living
/// in the same field as the real choices.
#[derive(Debug, Clone)]
pub struct EnumScalar<E: 'static> {
    spec: OptSpec,
    names: &'static NameMap<E>,
    value: E,
    default: E,
    hide_default: bool,
}

impl<E: Copy + Ord + Default> EnumScalar<E> {
    pub fn new(spec: OptSpec, names: &'static NameMap<E>) -> Self {
        Self {
            spec,
            names,
            value: E::default(),
            default: E::default(),
            hide_default: false,
        }
    }
}

impl<E: Copy + Ord> EnumScalar<E> {
    pub fn with_default(mut self, value: E) -> Self {
        self.value = value;
        self.default = value;
        self.hide_default = false;
        self
    }

    pub fn with_hidden_default(mut self, value: E) -> Self {
        self.value = value;
        self.default = value;
        self.hide_default = true;
        self
    }

    pub fn value(&self) -> E {
        self.value
    }

    pub fn set_value(&mut self, value: E) {
        self.value = value;
    }

    /// Name of the current value.
    pub fn name(&self) -> &'static str {
        self.names.name(self.value)
    }

    pub fn specified(&self) -> bool {
        self.spec.specified()
    }
}

impl<E: Copy + Ord> Opt for EnumScalar<E> {
    fn spec(&self) -> &OptSpec {
        &self.spec
    }

    fn spec_mut(&mut self) -> &mut OptSpec {
        &mut self.spec
    }

    fn usage_suffix(&self) -> &'static str {
        VALUE_SUFFIX
    }

    fn help_suffix(&self) -> String {
        if self.hide_default {
            "Choices:".to_string()
        } else {
            format!("Default is {}. Choices:", self.names.name(self.default))
        }
    }

    fn extra_help(&self) -> Vec<String> {
        self.names
            .by_value()
            .filter(|&(value, _)| !(self.hide_default && value == self.default))
            .map(|(_, name)| name.to_string())
            .collect()
    }

    fn consume(
        &mut self,
        tokens: &mut Tokens<'_>,
        inline: Option<&str>,
    ) -> Result<(), ConsumeError> {
        if inline.is_some() {
            return Err(ConsumeError::InlineNotAccepted);
        }
        let token = tokens.next_token().ok_or(ConsumeError::MissingValue)?;
        self.value = lookup_choice(self.names, token)?;
        Ok(())
    }
}

/// Like [`ScalarList`], with every token looked up in a [`NameMap`].
#[derive(Debug, Clone)]
pub struct EnumList<E: 'static, const MIN: usize = 1> {
    spec: OptSpec,
    names: &'static NameMap<E>,
    values: Vec<E>,
    defaults: Vec<E>,
}

impl<E: Copy + Ord, const MIN: usize> EnumList<E, MIN> {
    pub fn new(spec: OptSpec, names: &'static NameMap<E>) -> Self {
        Self {
            spec,
            names,
            values: Vec::new(),
            defaults: Vec::new(),
        }
    }

    pub fn with_defaults(mut self, values: impl IntoIterator<Item = E>) -> Self {
        self.defaults = values.into_iter().collect();
        self.values = self.defaults.clone();
        self
    }

    pub fn values(&self) -> &[E] {
        &self.values
    }

    pub fn set_values(&mut self, values: Vec<E>) {
        self.values = values;
    }

    /// Names of the current values, in order.
    pub fn names(&self) -> Vec<&'static str> {
        self.values.iter().map(|&v| self.names.name(v)).collect()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn specified(&self) -> bool {
        self.spec.specified()
    }
}

impl<E: Copy + Ord, const MIN: usize> Opt for EnumList<E, MIN> {
    fn spec(&self) -> &OptSpec {
        &self.spec
    }

    fn spec_mut(&mut self) -> &mut OptSpec {
        &mut self.spec
    }

    fn usage_suffix(&self) -> &'static str {
        LIST_SUFFIX
    }

    fn help_suffix(&self) -> String {
        let default = match self.defaults.as_slice() {
            [] => "none".to_string(),
            [only] => self.names.name(*only).to_string(),
            many => {
                let names: Vec<&str> = many.iter().map(|&v| self.names.name(v)).collect();
                format!("{{{}}}", names.join(", "))
            }
        };
        format!("Default is {default}. Choices:")
    }

    fn extra_help(&self) -> Vec<String> {
        self.names
            .by_value()
            .map(|(_, name)| name.to_string())
            .collect()
    }

    fn consume(
        &mut self,
        tokens: &mut Tokens<'_>,
        inline: Option<&str>,
    ) -> Result<(), ConsumeError> {
        if inline.is_some() {
            return Err(ConsumeError::InlineNotAccepted);
        }
        let run = tokens.take_until_option();
        if run.len() < MIN {
            return Err(ConsumeError::TooFewValues {
                min: MIN,
                found: run.len(),
            });
        }
        self.values = run
            .iter()
            .map(|token| lookup_choice(self.names, token))
            .collect::<Result<_, _>>()?;
        Ok(())
    }
}
