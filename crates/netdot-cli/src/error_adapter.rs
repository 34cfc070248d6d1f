//! miette reports for [`NetdotError`].
//!
//! An error that carries diagnostics becomes one [`Reportable`] per
//! diagnostic, so each is printed with its own code, help and source
//! labels. Everything else becomes a single plain report.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceCode, SourceSpan};

use netdot::NetdotError;
use netdot_parser::{
    Span,
    error::{Diagnostic, Severity},
};

/// One report printed by the CLI.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A parser, merge or render diagnostic. Warnings promoted by
    /// `deny_warnings` have no source text and print without a snippet.
    Diagnostic {
        diag: &'a Diagnostic,
        src: Option<&'a str>,
    },
    /// An error without diagnostics, such as I/O.
    Error(&'a NetdotError),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Diagnostic { diag, .. } => f.write_str(diag.message()),
            Reportable::Error(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Diagnostic { .. } => None,
            Reportable::Error(err) => err.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic { diag, .. } => diag
                .code()
                .map(|code| Box::new(code) as Box<dyn fmt::Display>),
            Reportable::Error(NetdotError::Io(_)) => Some(Box::new("netdot::io")),
            Reportable::Error(NetdotError::Render(_)) => Some(Box::new("netdot::render")),
            Reportable::Error(_) => None,
        }
    }

    fn severity(&self) -> Option<miette::Severity> {
        let Reportable::Diagnostic { diag, .. } = self else {
            return None;
        };
        Some(match diag.severity() {
            Severity::Error => miette::Severity::Error,
            Severity::Warning => miette::Severity::Warning,
        })
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic { diag, .. } => diag
                .help()
                .map(|help| Box::new(help) as Box<dyn fmt::Display>),
            Reportable::Error(NetdotError::Io(_)) => Some(Box::new(
                "check that every input exists and the output directory is writable",
            )),
            Reportable::Error(_) => None,
        }
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        match self {
            Reportable::Diagnostic { src: Some(src), .. } => Some(src as &dyn SourceCode),
            _ => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let Reportable::Diagnostic { diag, src: Some(_) } = self else {
            return None;
        };
        if diag.labels().is_empty() {
            return None;
        }

        Some(Box::new(diag.labels().iter().map(|label| {
            let span = to_source_span(label.span());
            let message = Some(label.message().to_string());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(message, span)
            } else {
                LabeledSpan::new_with_span(message, span)
            }
        })))
    }
}

fn to_source_span(span: Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Split a [`NetdotError`] into the reports the CLI prints.
pub fn to_reportables(err: &NetdotError) -> Vec<Reportable<'_>> {
    let Some((parse_err, src)) = err.diagnostics() else {
        return vec![Reportable::Error(err)];
    };

    parse_err
        .diagnostics()
        .iter()
        .map(|diag| Reportable::Diagnostic { diag, src })
        .collect()
}
