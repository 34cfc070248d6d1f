//! Output formats for rendered network models.
//!
//! Only Graphviz DOT is produced here; turning DOT into an image is left to
//! Graphviz itself.

pub mod dot;
