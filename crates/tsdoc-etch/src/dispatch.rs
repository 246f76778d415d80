//! Kind-keyed dispatch
//!
//! A [`KindMap`] maps syntax kinds to handlers. The signature resolver,
//! the renderer and the traveler each own one and route every node
//! through [`KindMap::dispatch`]: absent nodes, nodes whose payload
//! fails validation and kinds with no handler all go to the caller's
//! default. Handlers receive the same default so they can defer to it
//! for parts they do not special-case.

use crate::classify::{classify, validate};
use crate::syntax::{Narrow, NodeRef, SyntaxKind, Typed};
use std::collections::HashMap;

/// The fallback every dispatch is given
pub type Fallback<'a, 't, R> = dyn Fn(Option<NodeRef<'t>>) -> R + 'a;

type Handler<'t, C, R> = Box<dyn Fn(&C, NodeRef<'t>, &Fallback<'_, 't, R>) -> R + 't>;

/// Handlers keyed by syntax kind, sharing a context `C` and a result `R`
pub struct KindMap<'t, C, R> {
    handlers: HashMap<SyntaxKind, Handler<'t, C, R>>,
}

impl<'t, C: 't, R: 't> KindMap<'t, C, R> {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a handler that sees the node narrowed to payload `D`
    ///
    /// A node of `kind` whose payload is not a `D` goes to the default.
    pub fn on<D: Narrow>(
        mut self,
        kind: SyntaxKind,
        handler: fn(&C, Typed<'t, D>, &Fallback<'_, 't, R>) -> R,
    ) -> Self {
        let boxed: Handler<'t, C, R> = Box::new(
            move |cx: &C, node: NodeRef<'t>, default: &Fallback<'_, 't, R>| {
                match node.narrow::<D>() {
                    Some(typed) => handler(cx, typed, default),
                    None => default(Some(node)),
                }
            },
        );
        self.handlers.insert(kind, boxed);
        self
    }

    /// Register the same narrowed handler for several kinds
    pub fn on_each<D: Narrow>(
        mut self,
        kinds: &[SyntaxKind],
        handler: fn(&C, Typed<'t, D>, &Fallback<'_, 't, R>) -> R,
    ) -> Self {
        for kind in kinds {
            self = self.on::<D>(*kind, handler);
        }
        self
    }

    /// Register a handler that takes the untyped node
    pub fn on_node(
        mut self,
        kind: SyntaxKind,
        handler: fn(&C, NodeRef<'t>, &Fallback<'_, 't, R>) -> R,
    ) -> Self {
        self.handlers.insert(kind, Box::new(handler));
        self
    }

    /// Register an untyped handler for several kinds
    pub fn on_nodes(
        mut self,
        kinds: &[SyntaxKind],
        handler: fn(&C, NodeRef<'t>, &Fallback<'_, 't, R>) -> R,
    ) -> Self {
        for kind in kinds {
            self = self.on_node(*kind, handler);
        }
        self
    }

    pub fn contains(&self, kind: SyntaxKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Route `node` to its handler, or to `default`
    pub fn dispatch(
        &self,
        cx: &C,
        node: Option<NodeRef<'t>>,
        default: &Fallback<'_, 't, R>,
    ) -> R {
        let Some(node) = node else {
            return default(None);
        };
        if !validate(node) {
            return default(Some(node));
        }
        match self.handlers.get(&classify(node)) {
            Some(handler) => handler(cx, node, default),
            None => default(Some(node)),
        }
    }
}

impl<'t, C: 't, R: 't> Default for KindMap<'t, C, R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{ClassData, TypeAliasData};
    use crate::test::parse_tree;

    const SAMPLE: &str = r#"
export type Pair = [a: string, b: number];
export class Box<T> { value?: T; get(): T { return this.value!; } }
export const n = 1 + 2;
"#;

    fn describe(node: Option<NodeRef<'_>>) -> String {
        match node {
            Some(node) => format!("default:{}", node.kind()),
            None => "default:none".to_string(),
        }
    }

    #[test]
    fn test_empty_map_always_defaults() {
        let tree = parse_tree("/project/src/a.ts", SAMPLE);
        let map: KindMap<'_, (), String> = KindMap::new();
        assert!(map.is_empty());
        for node in tree.nodes() {
            assert_eq!(map.dispatch(&(), Some(node), &describe), describe(Some(node)));
        }
        assert_eq!(map.dispatch(&(), None, &describe), "default:none");
    }

    #[test]
    fn test_handler_receives_narrowed_payload() {
        let tree = parse_tree("/project/src/a.ts", SAMPLE);
        let map: KindMap<'_, (), String> = KindMap::new()
            .on::<TypeAliasData>(SyntaxKind::TypeAliasDeclaration, |_, alias, _| {
                format!("alias:{}", alias.name)
            });
        let alias = tree
            .nodes()
            .find(|n| n.kind() == SyntaxKind::TypeAliasDeclaration)
            .unwrap();
        assert_eq!(map.dispatch(&(), Some(alias), &describe), "alias:Pair");
        assert!(map.contains(SyntaxKind::TypeAliasDeclaration));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_mismatched_payload_falls_back() {
        let tree = parse_tree("/project/src/a.ts", SAMPLE);
        let map: KindMap<'_, (), String> = KindMap::new()
            .on::<ClassData>(SyntaxKind::TypeAliasDeclaration, |_, _, _| "class".to_string());
        let alias = tree
            .nodes()
            .find(|n| n.kind() == SyntaxKind::TypeAliasDeclaration)
            .unwrap();
        assert_eq!(
            map.dispatch(&(), Some(alias), &describe),
            "default:TypeAliasDeclaration"
        );
    }

    #[test]
    fn test_handler_can_defer_to_default() {
        let tree = parse_tree("/project/src/a.ts", SAMPLE);
        let map: KindMap<'_, usize, String> = KindMap::new().on_nodes(
            &[SyntaxKind::ClassDeclaration, SyntaxKind::BinaryExpression],
            |depth, node, default| format!("{}>{}", depth, default(Some(node))),
        );
        let class = tree
            .nodes()
            .find(|n| n.kind() == SyntaxKind::ClassDeclaration)
            .unwrap();
        assert_eq!(
            map.dispatch(&3, Some(class), &describe),
            "3>default:ClassDeclaration"
        );
    }
}
