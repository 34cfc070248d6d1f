//! Cross-document reference checks for the hierarchical family.
//!
//! A site-equipment document points at a site with `siteId`, a rack-servers
//! document at a rack with `rackId`, and a server-details document at a
//! server with `serverId`. Each reference is resolved against the other
//! documents given in the same run:
//!
//! | Reference  | Declared by                                                   |
//! |------------|---------------------------------------------------------------|
//! | `siteId`   | `sites[].id` of any site-topology document                    |
//! | `rackId`   | `racks[].id` of any site-equipment document                   |
//! | `serverId` | `servers[].id` of any rack-servers document, or equipment of  |
//! |            | type `server` in any site-equipment document                  |

use std::collections::HashSet;

use log::debug;

use netdot_core::shape::Shape;

use crate::{
    ParsedDocument,
    error::{Diagnostic, DiagnosticSink, ErrorCode},
};

/// The level a hierarchical document points up to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reference {
    Site,
    Rack,
    Server,
}

impl Reference {
    fn field(self) -> &'static str {
        match self {
            Reference::Site => "siteId",
            Reference::Rack => "rackId",
            Reference::Server => "serverId",
        }
    }

    fn noun(self) -> &'static str {
        match self {
            Reference::Site => "site",
            Reference::Rack => "rack",
            Reference::Server => "server",
        }
    }

    fn declared_by(self) -> &'static str {
        match self {
            Reference::Site => "a site-topology document",
            Reference::Rack => "a site-equipment document",
            Reference::Server => "a rack-servers or site-equipment document",
        }
    }
}

/// One `siteId`, `rackId` or `serverId` to resolve.
struct Pointer<'a> {
    shape: Shape,
    name: &'a str,
    reference: Reference,
    target: Option<&'a str>,
}

/// Check that every hierarchy reference in `docs` names something declared
/// by another document in `docs`.
///
/// Missing references are reported as [`ErrorCode::E204`] and references
/// to undeclared ids as [`ErrorCode::E205`], both as warnings. Flat
/// documents are ignored. Returns `true` when every reference resolves.
pub fn validate(docs: &[ParsedDocument], sink: &mut dyn DiagnosticSink) -> bool {
    let site_topologies = docs.iter().filter_map(|doc| doc.data.site_topology.as_ref());
    let site_equipment: Vec<_> = docs
        .iter()
        .filter_map(|doc| doc.data.site_equipment.as_ref())
        .collect();
    let rack_servers: Vec<_> = docs
        .iter()
        .filter_map(|doc| doc.data.rack_servers.as_ref())
        .collect();
    let server_details = docs.iter().filter_map(|doc| doc.data.server_details.as_ref());

    let sites: HashSet<&str> = site_topologies
        .flat_map(|doc| &doc.sites)
        .filter_map(|site| site.id.as_deref())
        .collect();
    let racks: HashSet<&str> = site_equipment
        .iter()
        .flat_map(|doc| &doc.racks)
        .filter_map(|rack| rack.id.as_deref())
        .collect();
    let servers: HashSet<&str> = site_equipment
        .iter()
        .flat_map(|doc| &doc.racks)
        .flat_map(|rack| &rack.equipment)
        .filter(|equipment| equipment.kind.as_deref() == Some("server"))
        .filter_map(|equipment| equipment.id.as_deref())
        .chain(
            rack_servers
                .iter()
                .flat_map(|doc| &doc.servers)
                .filter_map(|server| server.id.as_deref()),
        )
        .collect();

    let pointers = site_equipment
        .iter()
        .map(|doc| Pointer {
            shape: Shape::SiteEquipment,
            name: name_of(&doc.label, &doc.id),
            reference: Reference::Site,
            target: doc.site_id.as_deref(),
        })
        .chain(rack_servers.iter().map(|doc| Pointer {
            shape: Shape::RackServers,
            name: name_of(&doc.label, &doc.id),
            reference: Reference::Rack,
            target: doc.rack_id.as_deref(),
        }))
        .chain(server_details.map(|doc| Pointer {
            shape: Shape::ServerDetails,
            name: name_of(&doc.label, &doc.id),
            reference: Reference::Server,
            target: doc.server_id.as_deref(),
        }));

    let mut problems = 0usize;
    for pointer in pointers {
        let declared = match pointer.reference {
            Reference::Site => &sites,
            Reference::Rack => &racks,
            Reference::Server => &servers,
        };
        if let Some(diagnostic) = check(pointer, declared) {
            sink.emit(diagnostic);
            problems += 1;
        }
    }

    debug!(
        sites = sites.len(),
        racks = racks.len(),
        servers = servers.len(),
        problems;
        "Validated hierarchy references"
    );
    problems == 0
}

fn check(pointer: Pointer<'_>, declared: &HashSet<&str>) -> Option<Diagnostic> {
    let Pointer {
        shape,
        name,
        reference,
        target,
    } = pointer;
    let field = reference.field();

    let Some(target) = target else {
        return Some(
            Diagnostic::warning(format!("`{shape}` document `{name}` has no `{field}`"))
                .with_code(ErrorCode::E204)
                .with_help(format!(
                    "add `{field}:` naming a {} declared by {}",
                    reference.noun(),
                    reference.declared_by()
                )),
        );
    };

    if declared.contains(target) {
        return None;
    }
    Some(
        Diagnostic::warning(format!(
            "`{shape}` document `{name}` references unknown {} `{target}`",
            reference.noun()
        ))
        .with_code(ErrorCode::E205)
        .with_help(format!(
            "declare `{target}` in {}, or fix `{field}`",
            reference.declared_by()
        )),
    )
}

/// Label, then id, then a placeholder.
fn name_of<'a>(label: &'a Option<String>, id: &'a Option<String>) -> &'a str {
    label.as_deref().or(id.as_deref()).unwrap_or("unnamed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::DiagnosticCollector, parse_document};

    fn parsed(sources: &[&str]) -> Vec<ParsedDocument> {
        sources
            .iter()
            .map(|source| parse_document(source).expect("document should parse"))
            .collect()
    }

    #[test]
    fn test_flat_documents_are_ignored() {
        let docs = parsed(&["id: sw1\nports: []", "type: links\nconnections: []"]);
        let mut sink = DiagnosticCollector::new();

        assert!(validate(&docs, &mut sink));
        assert!(sink.diagnostics().is_empty());
    }

    #[test]
    fn test_name_falls_back_to_id() {
        let docs = parsed(&["type: rack-servers\nid: rs1\nservers: []"]);
        let mut sink = DiagnosticCollector::new();

        assert!(!validate(&docs, &mut sink));
        assert_eq!(
            sink.diagnostics()[0].message(),
            "`rack-servers` document `rs1` has no `rackId`"
        );
    }
}
