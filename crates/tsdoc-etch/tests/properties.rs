//! Behavioral properties of the signature resolver and the renderer,
//! checked over a fixture that touches most of the syntax kinds.

use pretty_assertions::assert_eq;
use std::collections::BTreeSet;
use tsdoc_etch::project::statements;
use tsdoc_etch::test::Fixture;
use tsdoc_etch::{NodeRef, Renderer, SignatureResolver, SyntaxKind};

const PRIMITIVES: &str = include_str!("fixtures/primitives.ts");
const SHAPE: &str = include_str!("fixtures/shape.ts");

fn fixture() -> Fixture {
    Fixture::new(&[("src/primitives.ts", PRIMITIVES), ("src/shape.ts", SHAPE)])
}

fn ty(s: &str) -> String {
    format!(r#"<span className="ts-doc-type">{}</span>"#, s)
}

#[test]
fn every_node_renders_and_resolves() {
    fixture().with(|s| {
        let signatures = SignatureResolver::new(s.cx());
        let renderer = Renderer::new(s.cx());
        let mut kinds = BTreeSet::new();
        for node in s.tree("src/primitives.ts").nodes() {
            kinds.insert(node.kind().name());
            let _ = signatures.signature(node);
            let _ = renderer.render(node);
        }
        for kind in [
            "InterfaceDeclaration",
            "TypeAliasDeclaration",
            "EnumDeclaration",
            "FunctionDeclaration",
            "ClassDeclaration",
            "ClassExpression",
            "ModuleDeclaration",
            "ConditionalType",
            "MappedType",
            "TypePredicate",
            "RestType",
            "OptionalType",
            "TypeQuery",
            "ObjectBindingPattern",
            "ArrayBindingPattern",
            "ClassStaticBlockDeclaration",
            "GetAccessor",
            "SetAccessor",
        ] {
            assert!(kinds.contains(kind), "fixture has no {}", kind);
        }
    });
}

#[test]
fn signature_and_render_are_idempotent() {
    fixture().with(|s| {
        let signatures = SignatureResolver::new(s.cx());
        let renderer = Renderer::new(s.cx());
        for node in s.tree("src/primitives.ts").nodes() {
            assert_eq!(signatures.signature(node), signatures.signature(node));
            assert_eq!(renderer.render(node), renderer.render(node));
        }
    });
}

#[test]
fn unsupported_statements_report_once_each() {
    fixture().with(|s| {
        let renderer = Renderer::new(s.cx());
        let statements: Vec<NodeRef<'_>> = statements(s.tree("src/primitives.ts").root())
            .into_iter()
            .filter(|n| matches!(n.kind(), SyntaxKind::Unknown | SyntaxKind::ExpressionStatement))
            .collect();
        assert_eq!(statements.len(), 2);

        for (i, statement) in statements.iter().enumerate() {
            let before = s.cx().diagnostic_count();
            assert_eq!(renderer.render(*statement), "");
            assert_eq!(s.cx().diagnostic_count(), before + 1, "statement {}", i);
        }
    });
}

#[test]
fn aliases_link_within_scope() {
    let fixture = Fixture::new(&[
        ("src/a.ts", "export type A = string;"),
        ("src/b.ts", "import { A } from \"./a\";\nexport type B = A;"),
    ]);
    let signature = fixture.with(|s| {
        SignatureResolver::new(s.cx()).signature(s.named("src/b.ts", "B"))
    });
    assert_eq!(signature, ": [A](/docs/src-a#a)");
}

#[test]
fn aliases_outside_scope_stay_plain() {
    let fixture = Fixture::new(&[
        ("lib/a.ts", "export type A = string;"),
        ("src/b.ts", "import { A } from \"../lib/a\";\nexport type B = A;"),
    ]);
    let signature = fixture.with(|s| {
        SignatureResolver::new(s.cx()).signature(s.named("src/b.ts", "B"))
    });
    assert_eq!(signature, format!(": {}", ty("A")));
}

#[test]
fn link_prefix_is_configurable() {
    let fixture = Fixture::new(&[
        ("src/a.ts", "export type A = string;"),
        ("src/b.ts", "import { A } from \"./a\";\nexport type B = A;"),
    ])
    .configure(|c| c.link_prefix = "/api/".to_string());
    let signature = fixture.with(|s| {
        SignatureResolver::new(s.cx()).signature(s.named("src/b.ts", "B"))
    });
    assert_eq!(signature, ": [A](/api/src-a#a)");
}

#[test]
fn private_members_follow_configuration() {
    let hidden = fixture().with(|s| Renderer::new(s.cx()).render(s.named("src/primitives.ts", "Base")));
    assert!(!hidden.contains(">secret<"));
    assert!(!hidden.contains(">hidden<"));
    assert!(hidden.contains(">describe<"));

    let shown = fixture()
        .configure(|c| {
            c.document_private = true;
            c.document_internal = true;
        })
        .with(|s| Renderer::new(s.cx()).render(s.named("src/primitives.ts", "Base")));
    assert!(shown.contains(">secret<"));
    assert!(shown.contains(">hidden<"));
}

#[test]
fn literal_types_follow_declaration_kind() {
    fixture().with(|s| {
        let signatures = SignatureResolver::new(s.cx());
        assert_eq!(
            signatures.signature(s.named("src/primitives.ts", "five")),
            r#"<span className="ts-doc-lit">5</span>"#
        );
        assert_eq!(
            signatures.signature(s.named("src/primitives.ts", "counter")),
            ty("number")
        );
    });
}
