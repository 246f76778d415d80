//! Reference inputs and the exact markup they produce

use pretty_assertions::assert_eq;
use tsdoc_etch::decorate::{heading, SEPARATOR};
use tsdoc_etch::diagnostics::MISSING_SUPPORT;
use tsdoc_etch::project::statements;
use tsdoc_etch::syntax::TypeAliasData;
use tsdoc_etch::test::Fixture;
use tsdoc_etch::{Renderer, SignatureResolver};

fn ty(s: &str) -> String {
    format!(r#"<span className="ts-doc-type">{}</span>"#, s)
}

fn name(s: &str) -> String {
    format!(r#"<span className="ts-doc-name">{}</span>"#, s)
}

fn kind(s: &str) -> String {
    format!(r#"<span className="ts-doc-kind">{}</span>"#, s)
}

/// Signature of the type on the right of `type <alias> = ...`
fn alias_type(source: &str, alias: &str) -> String {
    Fixture::new(&[("src/a.ts", source)]).with(|s| {
        let node = s.named("src/a.ts", alias).narrow::<TypeAliasData>().unwrap();
        SignatureResolver::new(s.cx()).signature(node.at(node.ty))
    })
}

#[test]
fn alias_to_keyword() {
    let source = "type Id = string;";
    assert_eq!(alias_type(source, "Id"), ty("string"));

    let block = Fixture::new(&[("src/a.ts", source)])
        .with(|s| Renderer::new(s.cx()).render(s.named("src/a.ts", "Id")));
    assert_eq!(
        block,
        heading(2, &format!("{} {}: {}", kind("type"), name("Id"), ty("string")), Some("Id"))
    );
    assert!(!block.contains(SEPARATOR));
}

#[test]
fn named_tuple() {
    assert_eq!(
        alias_type("type Pair = [x: number, y: number];", "Pair"),
        format!("[x: {n}, y: {n}]", n = ty("number"))
    );
}

#[test]
fn function_with_arguments() {
    let source = "function add(a: number, b: number): number {}";
    Fixture::new(&[("src/a.ts", source)]).with(|s| {
        let node = s.named("src/a.ts", "add");
        assert_eq!(
            SignatureResolver::new(s.cx()).signature(node),
            format!("(a: {n}, b: {n}) =&gt; {n}", n = ty("number"))
        );

        let block = Renderer::new(s.cx()).render(node);
        assert!(block.contains(">Arguments:<"));
        assert!(block.contains(&name("a")));
        assert!(block.contains(&name("b")));
        assert!(block.contains(">Returns:<"));
    });
}

#[test]
fn unannotated_const_keeps_literal() {
    let signature = Fixture::new(&[("src/a.ts", "const x = 5;")])
        .with(|s| SignatureResolver::new(s.cx()).signature(s.named("src/a.ts", "x")));
    assert_eq!(signature, r#"<span className="ts-doc-lit">5</span>"#);
}

#[test]
fn class_heritage_is_not_collapsed() {
    let source = "class C extends Array<number> {}";
    Fixture::new(&[("src/a.ts", source)]).with(|s| {
        let node = s.named("src/a.ts", "C");
        let signature = SignatureResolver::new(s.cx()).signature(node);
        assert!(signature.contains(&format!(
            " extends {}&lt;{}&gt;",
            ty("Array"),
            ty("number")
        )));

        let block = Renderer::new(s.cx()).render(node);
        assert!(block.contains(r#"<h2 className="ts-doc-header">"#));
        assert!(!block.contains(">Constructors:<"));
        assert!(!block.contains(">Methods:<"));
        assert!(!block.contains(">Properties:<"));
    });
}

#[test]
fn statement_level_expression_reports_once() {
    Fixture::new(&[("src/a.ts", "left + right;")]).with(|s| {
        let statement = statements(s.tree("src/a.ts").root())[0];
        assert_eq!(Renderer::new(s.cx()).render(statement), "");
        let diagnostics = s.cx().diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].has_code(MISSING_SUPPORT));
    });
}
