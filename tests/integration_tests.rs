//! Integration tests for the full text-to-tree pipeline.
//!
//! These tests verify that tokenization and parsing compose correctly on
//! realistic configuration sources, and that errors surface with usable
//! positions.

use jsonnet_parser::{
    ast::{
        ast::{Expr, ExprType},
        expressions::{LocalExpr, ObjectExpr},
        members::{Member, ObjectBody},
    },
    display_error, get_line_at_position, parse_source,
};

#[test]
fn test_parse_realistic_config() {
    let source = r#"
// Deployment template
local base = import 'base.libsonnet';
local replicas = 3;

base {
  metadata: {
    name: 'frontend',
    labels: { ['app/' + k]: k for k in ['web', 'stable'] },
  },
  spec+: {
    replicas: replicas,
    ports: [p for p in [80, 443] if p != 8080],
    description: |||
      Serves the public site.
      Managed by config tooling.
    |||,
  },
  hidden:: self.metadata.name + '-internal',
}
"#;

    let output = parse_source(source.to_string(), Some("deployment.jsonnet".to_string())).unwrap();

    let local = output.root.as_any().downcast_ref::<LocalExpr>().unwrap();
    assert_eq!(local.binds.len(), 1);
    assert_eq!(local.binds[0].name, "base");

    // One line comment collected
    assert_eq!(output.comments.len(), 1);
}

#[test]
fn test_parse_nested_comprehensions() {
    let source = "{ [k]: [i * i for i in range if i > 0] for k in keys }";

    let output = parse_source(source.to_string(), None).unwrap();
    let object = output.root.as_any().downcast_ref::<ObjectExpr>().unwrap();

    match &object.body {
        ObjectBody::Comprehension { value, .. } => {
            assert_eq!(value.get_expr_type(), ExprType::Array);
        }
        _ => panic!("expected an object comprehension"),
    }
}

#[test]
fn test_parse_function_library() {
    let source = r#"
{
  min(a, b):: if a < b then a else b,
  clamp(x, lo, hi):: self.min(hi, if x < lo then lo else x),
  assert self.min(1, 2) == 1 : 'broken min',
}
"#;

    let output = parse_source(source.to_string(), Some("util.libsonnet".to_string())).unwrap();
    let object = output.root.as_any().downcast_ref::<ObjectExpr>().unwrap();

    match &object.body {
        ObjectBody::Members(members) => {
            assert_eq!(members.len(), 3);
            assert!(matches!(&members[2], Member::Assert { .. }));
        }
        _ => panic!("expected a member list"),
    }
}

#[test]
fn test_error_carries_line_and_column() {
    let source = "local x = 1;\n{ a: x, b }\n";

    let error = parse_source(source.to_string(), Some("broken.jsonnet".to_string()))
        .err()
        .unwrap();

    let offset = error.get_position().0;
    let (line, _, column) = get_line_at_position(source, offset);
    assert_eq!(line, 2);
    assert_eq!(column, 10);

    // Rendering must not panic
    display_error(&error, source);
}

#[test]
fn test_lex_error_surfaces_through_pipeline() {
    let source = "{ a: 'unterminated }";

    let error = parse_source(source.to_string(), None).err().unwrap();
    assert_eq!(error.get_error_name(), "UnterminatedString");
    assert!(error.is_lex_error());
}

#[test]
fn test_independent_parses_share_nothing() {
    let sources = ["[x for x in xs]", "{ a: 1 } + { b: 2 }", "error 'nope'"];

    let handles: Vec<_> = sources
        .map(|source| {
            std::thread::spawn(move || {
                // Positions hold Rc-backed file names, so render inside the
                // thread rather than sending trees or errors across
                parse_source(source.to_string(), None)
                    .map(|output| format!("{:?}", output.root))
                    .map_err(|error| error.get_error_name().to_string())
            })
        })
        .into_iter()
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap().is_ok());
    }
}
