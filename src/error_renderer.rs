//! Diagnostic rendering of descriptor construction failures using miette.
//!
//! Construction errors carry no source text, so a report is just the message,
//! a stable error code and a help line.

use std::fmt;
use std::io::Write;

use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme};
use thiserror::Error;
use typegraph_types::{FactoryError, NominalHandle};

/// Character set for rendering error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// Use Unicode characters for rich visual output.
    #[default]
    Unicode,
    /// Use ASCII-only characters for compatibility.
    Ascii,
}

/// Configuration for error rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// Defaults to Unicode.
    pub charset: CharSet,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig::default()
    }
}

impl RenderConfig {
    const fn default() -> Self {
        Self {
            color: true,
            charset: CharSet::Unicode,
        }
    }

    fn theme(&self) -> GraphicalTheme {
        match (self.charset, self.color) {
            (CharSet::Unicode, true) => GraphicalTheme::unicode(),
            (CharSet::Unicode, false) => GraphicalTheme::unicode_nocolor(),
            (CharSet::Ascii, true) => GraphicalTheme::ascii(),
            (CharSet::Ascii, false) => GraphicalTheme::none(),
        }
    }
}

/// A [`FactoryError`] viewed as a [`miette::Diagnostic`].
#[derive(Debug, Error)]
#[error(transparent)]
pub struct TypeConstructionReport<H: NominalHandle>(pub FactoryError<H>);

impl<H: NominalHandle> From<FactoryError<H>> for TypeConstructionReport<H> {
    fn from(error: FactoryError<H>) -> Self {
        Self(error)
    }
}

impl<H: NominalHandle> Diagnostic for TypeConstructionReport<H> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            FactoryError::ArgumentCountMismatch { .. } => "typegraph::arity",
            FactoryError::OwnerMismatch { .. } => "typegraph::owner_mismatch",
            FactoryError::UnsupportedOwner { .. } => "typegraph::unsupported_owner",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            FactoryError::ArgumentCountMismatch { raw, expected, .. } => {
                format!("{raw} declares {expected} type parameter(s)")
            }
            FactoryError::OwnerMismatch {
                raw,
                enclosing: Some(enclosing),
                ..
            } => format!("the owner of {raw} must parameterize {enclosing}"),
            FactoryError::OwnerMismatch { raw, enclosing: None, .. } => {
                format!("{raw} is a top-level type and takes no owner")
            }
            FactoryError::UnsupportedOwner { .. } => {
                "pass a parameterized owner, or none to use the enclosing type".to_string()
            }
        };
        Some(Box::new(help))
    }
}

/// Render an error to stderr using the default config.
///
/// # Example
/// ```no_run
/// use typegraph::render_error;
/// use typegraph::types::{ClassTable, TypeFactory};
///
/// let mut table = ClassTable::new();
/// let list = table.interface("java.util.List").type_params(1).declare().unwrap();
/// let factory = TypeFactory::new(&table);
///
/// let args = [factory.unbounded_wildcard(), factory.unbounded_wildcard()];
/// if let Err(e) = factory.parameterized_type(list, args) {
///     render_error(&e);
/// }
/// ```
pub fn render_error<H: NominalHandle>(error: &FactoryError<H>) {
    render_error_to(error, &mut std::io::stderr(), &RenderConfig::default()).ok();
}

/// Render an error to a writer with the given configuration.
///
/// # Example
/// ```
/// use typegraph::{CharSet, RenderConfig, render_error_to};
/// use typegraph::types::{ClassTable, TypeDescriptor, TypeFactory};
///
/// let mut table = ClassTable::new();
/// let map = table.interface("Map").type_params(2).declare().unwrap();
/// let factory = TypeFactory::new(&table);
///
/// let e = factory
///     .parameterized_type(map, [TypeDescriptor::Nominal(table.object())])
///     .unwrap_err();
///
/// let mut buf = Vec::new();
/// let config = RenderConfig { color: false, charset: CharSet::Ascii };
/// render_error_to(&e, &mut buf, &config).unwrap();
/// assert!(String::from_utf8_lossy(&buf).contains("typegraph::arity"));
/// ```
pub fn render_error_to<H: NominalHandle>(
    error: &FactoryError<H>,
    writer: &mut dyn Write,
    config: &RenderConfig,
) -> std::io::Result<()> {
    let report = TypeConstructionReport(error.clone());
    let mut out = String::new();
    GraphicalReportHandler::new_themed(config.theme())
        .render_report(&mut out, &report)
        .map_err(|_| std::io::Error::other("failed to format diagnostic"))?;
    writer.write_all(out.as_bytes())
}
