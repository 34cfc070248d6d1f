//! Error codes for the netdot diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Loading errors
//! - `E1xx` - Classification errors
//! - `E2xx` - Data anomalies found while merging, validating or rendering
//! - `E3xx` - Rendering faults

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Loading Errors (E0xx)
    // =========================================================================
    /// Invalid YAML syntax.
    ///
    /// The source text could not be loaded as a YAML (or JSON) document.
    E001,

    /// Document root is not a mapping.
    ///
    /// The document loaded, but its top-level value is a scalar, a sequence
    /// or empty.
    E002,

    /// Unreadable document fields.
    ///
    /// The document was classified, but its fields could not be read into
    /// the typed model.
    E003,

    // =========================================================================
    // Classification Errors (E1xx)
    // =========================================================================
    /// Unknown document shape.
    ///
    /// The document has no recognized `type:` tag and none of the keys that
    /// identify a shape structurally.
    E100,

    /// Declared kind mismatch.
    ///
    /// A caller-supplied kind hint disagrees with the classified shape. The
    /// classified shape is used.
    E101,

    // =========================================================================
    // Data Anomalies (E2xx)
    // =========================================================================
    /// Unresolved connection endpoint.
    ///
    /// A connection's `from` or `to` does not name a device.
    E200,

    /// Undeclared site.
    ///
    /// A site connection references a site id that is not in `sites`.
    E201,

    /// Incomplete link or step.
    ///
    /// A server port link or a sequence step is missing one of its ends.
    E202,

    /// Hierarchical document dropped from merge.
    ///
    /// Only topology, device, links and intent documents can be merged.
    E203,

    /// Missing hierarchy reference.
    ///
    /// A site-equipment, rack-servers or server-details document has no
    /// `siteId`, `rackId` or `serverId`.
    E204,

    /// Dangling hierarchy reference.
    ///
    /// A `siteId`, `rackId` or `serverId` names nothing declared by the
    /// other documents of the same run.
    E205,

    // =========================================================================
    // Rendering Faults (E3xx)
    // =========================================================================
    /// Rendering failed.
    ///
    /// A renderer could not write its output.
    E300,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Loading errors
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E003 => "E003",
            // Classification errors
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            // Data anomalies
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
            ErrorCode::E203 => "E203",
            ErrorCode::E204 => "E204",
            ErrorCode::E205 => "E205",
            // Rendering faults
            ErrorCode::E300 => "E300",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "invalid YAML syntax",
            ErrorCode::E002 => "document root is not a mapping",
            ErrorCode::E003 => "unreadable document fields",
            ErrorCode::E100 => "unknown document shape",
            ErrorCode::E101 => "declared kind mismatch",
            ErrorCode::E200 => "unresolved connection endpoint",
            ErrorCode::E201 => "undeclared site",
            ErrorCode::E202 => "incomplete link or step",
            ErrorCode::E203 => "hierarchical document dropped from merge",
            ErrorCode::E204 => "missing hierarchy reference",
            ErrorCode::E205 => "dangling hierarchy reference",
            ErrorCode::E300 => "rendering failed",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E001.to_string(), "E001");
        assert_eq!(ErrorCode::E100.to_string(), "E100");
        assert_eq!(ErrorCode::E203.to_string(), "E203");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E001.description(), "invalid YAML syntax");
        assert_eq!(ErrorCode::E100.description(), "unknown document shape");
        assert_eq!(ErrorCode::E200.description(), "unresolved connection endpoint");
    }
}
