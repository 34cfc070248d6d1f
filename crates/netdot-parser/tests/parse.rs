use netdot_core::{model::Endpoint, shape::Shape};
use netdot_parser::{
    ParsedDocument,
    error::{DiagnosticCollector, ErrorCode},
    parse_document, parse_document_with, validate,
};

const SITES: &str = "type: site-topology\nsites: [{id: tokyo}, {id: osaka}]\n";
const EQUIPMENT: &str = r#"
type: site-equipment
label: Tokyo DC
siteId: tokyo
racks:
  - id: rack_1
    equipment:
      - {id: srv_1, type: server}
      - {id: sw_1, type: switch}
"#;
const RACK_SERVERS: &str = "type: rack-servers\nlabel: Rack 1\nrackId: rack_1\nservers: [{id: srv_2}]\n";

fn parse_all(sources: &[&str]) -> Vec<ParsedDocument> {
    sources
        .iter()
        .map(|source| parse_document(source).expect("document should parse"))
        .collect()
}

fn validation_messages(sources: &[&str]) -> Vec<(Option<ErrorCode>, String)> {
    let mut sink = DiagnosticCollector::new();
    let valid = validate(&parse_all(sources), &mut sink);
    assert_eq!(valid, sink.diagnostics().is_empty());
    assert!(!sink.has_errors());
    sink.diagnostics()
        .iter()
        .map(|diag| (diag.code(), diag.message().to_string()))
        .collect()
}

#[test]
fn test_parse_links_document_into_links_slot() {
    let source = r#"
type: links
id: core-links
connections:
  - id: c1
    from: {device: A, port: p1}
    to: {device: B, port: p2}
    status: inactive
"#;

    let parsed = parse_document(source).expect("links document should parse");

    assert_eq!(parsed.shape, Shape::Links);
    let links = parsed.data.links.expect("links slot filled");
    assert_eq!(links.connections.len(), 1);
    assert_eq!(
        links.connections[0].from.as_ref().and_then(Endpoint::device),
        Some("A")
    );
    assert!(parsed.data.topology.is_none());
    assert!(parsed.data.devices.is_empty());
}

#[test]
fn test_parse_each_shape_lands_in_its_slot() {
    let cases = [
        ("layers: [{id: l1}]", Shape::Topology),
        ("ports: [{id: p1}]", Shape::Device),
        ("connections: []", Shape::Links),
        ("rules: [{name: r}]", Shape::Intent),
        ("sites: [{id: s}]", Shape::SiteTopology),
        ("siteId: dc1\nracks: []", Shape::SiteEquipment),
        ("rackId: r1\nservers: []", Shape::RackServers),
        ("serverId: s1\nos: {type: linux}", Shape::ServerDetails),
    ];

    for (source, shape) in cases {
        let parsed = parse_document(source).expect("document should parse");
        assert_eq!(parsed.shape, shape, "source: {source}");
        assert_eq!(
            parsed.data.has_hierarchical(),
            !shape.is_flat(),
            "source: {source}"
        );
    }
}

#[test]
fn test_parse_json_input() {
    let parsed = parse_document(r#"{"id": "sw1", "ports": [{"id": "eth0"}]}"#)
        .expect("JSON is valid input");

    assert_eq!(parsed.shape, Shape::Device);
    assert_eq!(parsed.data.devices[0].ports[0].id(), "eth0");
}

#[test]
fn test_unclassifiable_object_is_rejected() {
    let mut sink = DiagnosticCollector::new();

    assert!(parse_document_with(r#"{"foo":"bar"}"#, &mut sink).is_none());

    assert_eq!(sink.diagnostics().len(), 1);
    assert_eq!(sink.diagnostics()[0].code(), Some(ErrorCode::E100));
    assert!(sink.diagnostics()[0].help().is_some());
}

#[test]
fn test_rejection_reasons() {
    let cases = [
        ("- a\n- b", ErrorCode::E002),
        ("just text", ErrorCode::E002),
        ("key: [unclosed", ErrorCode::E001),
    ];

    for (source, code) in cases {
        let mut sink = DiagnosticCollector::new();
        assert!(parse_document_with(source, &mut sink).is_none(), "{source:?}");
        assert_eq!(sink.diagnostics().len(), 1, "{source:?}");
        assert_eq!(sink.diagnostics()[0].code(), Some(code), "{source:?}");
        assert!(sink.has_errors());
    }
}

#[test]
fn test_hierarchy_references_resolve() {
    let server_from_equipment = "type: server-details\nserverId: srv_1\nos: {type: linux}\n";
    let server_from_rack = "type: server-details\nserverId: srv_2\nos: {type: linux}\n";

    let messages = validation_messages(&[
        SITES,
        EQUIPMENT,
        RACK_SERVERS,
        server_from_equipment,
        server_from_rack,
    ]);

    assert!(messages.is_empty(), "{messages:?}");
}

#[test]
fn test_dangling_hierarchy_references() {
    let cases = [
        (
            vec![EQUIPMENT],
            "`site-equipment` document `Tokyo DC` references unknown site `tokyo`",
        ),
        (
            vec![SITES, RACK_SERVERS],
            "`rack-servers` document `Rack 1` references unknown rack `rack_1`",
        ),
        (
            vec![SITES, EQUIPMENT, "type: server-details\nid: web\nserverId: sw_1\nos: {}\n"],
            "`server-details` document `web` references unknown server `sw_1`",
        ),
    ];

    for (sources, expected) in cases {
        let messages = validation_messages(&sources);
        assert_eq!(
            messages,
            vec![(Some(ErrorCode::E205), expected.to_string())],
            "{sources:?}"
        );
    }
}

#[test]
fn test_missing_hierarchy_references() {
    let cases = [
        (
            "type: site-equipment\nid: se\nracks: []\n",
            "`site-equipment` document `se` has no `siteId`",
        ),
        (
            "type: rack-servers\nid: rs\nservers: []\n",
            "`rack-servers` document `rs` has no `rackId`",
        ),
        (
            "type: server-details\nlabel: Web 1\nserverId: ''\nos: {type: linux}\n",
            "`server-details` document `Web 1` has no `serverId`",
        ),
    ];

    for (source, expected) in cases {
        let messages = validation_messages(&[SITES, EQUIPMENT, RACK_SERVERS, source]);
        assert_eq!(
            messages,
            vec![(Some(ErrorCode::E204), expected.to_string())],
            "{source:?}"
        );
    }
}
