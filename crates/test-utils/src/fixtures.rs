//! Shared query fixtures.
//!
//! Use these when a test needs a realistic query but not a particular one.
//! Tests about a specific heuristic should spell their input inline.

/// A clean SELECT with prefixes, a comment and an OPTIONAL group.
pub const SELECT_QUERY: &str = r#"PREFIX foaf: <http://xmlns.com/foaf/0.1/>
PREFIX rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#>

# People and their optional mailbox
SELECT ?name ?mbox
WHERE {
  ?person rdf:type foaf:Person ;
          foaf:name ?name .
  OPTIONAL {
    ?person foaf:mbox ?mbox .
  }
  FILTER(LANG(?name) = "en")
}
ORDER BY ?name
LIMIT 10
"#;

/// A clean CONSTRUCT with two top-level groups.
pub const CONSTRUCT_QUERY: &str = r"PREFIX ex: <http://example.org/>
CONSTRUCT {
  ?s ex:knows ?o .
}
WHERE {
  ?s ex:friend ?o .
}
";

/// A clean SPARQL Update request.
pub const UPDATE_REQUEST: &str = r"PREFIX ex: <http://example.org/>
DELETE {
  ?s ex:status ex:draft .
}
INSERT {
  ?s ex:status ex:published .
}
WHERE {
  ?s ex:status ex:draft .
}
";

/// A SELECT that trips every rule except `missing_query_form`.
pub const BROKEN_QUERY: &str = r"PREFIX ex <http://example.org/>
PREFIX foaf: http://xmlns.com/foaf/0.1/
SELECT ?name {
  ?person foaf:name ?name
  ?person ex:homepage <http://example.org/home
}
}
";

/// Text with a prefix but no query form.
pub const PREFIX_ONLY: &str = "PREFIX ex: <http://example.org/>\nex:a ex:b ex:c .\n";

/// Builds a long SELECT with `patterns` triple patterns.
pub fn large_select(patterns: usize) -> String {
    let mut query = String::from("PREFIX ex: <http://example.org/>\nSELECT * WHERE {\n");
    for i in 0..patterns {
        query.push_str("  ?s");
        query.push_str(&i.to_string());
        query.push_str(" ex:p ?o");
        query.push_str(&i.to_string());
        query.push_str(" .\n");
    }
    query.push_str("}\n");
    query
}
