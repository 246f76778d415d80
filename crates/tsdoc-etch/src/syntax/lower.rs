//! Lowering from the SWC AST into a [`SourceTree`]
//!
//! The lowering keeps every declaration, member, type node and the
//! expressions needed for local type inference (initializers, returned
//! expressions, heritage clauses). Statements the generator never
//! documents become `Unknown` leaves.

use super::*;
use crate::js_doc::JsDoc;
use crate::utils::swc::{expr_to_name, prop_name_str, str_value, ParsedModule};
use deno_ast::swc::ast as swc_ast;
use deno_ast::swc::ast::{Expr, Pat, Stmt, TsType};
use deno_ast::swc::common::{Span, Spanned};
use deno_ast::ProgramRef;

/// Lower a parsed module into an arena tree
pub fn lower(file: FileId, parsed: &ParsedModule) -> SourceTree {
    let mut lowerer = Lowerer {
        parsed,
        nodes: Vec::new(),
    };
    let whole = TextRange::new(0, parsed.source_text().len());
    let root = lowerer.push(SyntaxKind::SourceFile, whole, None);
    let list = lowerer.push(SyntaxKind::SyntaxList, whole, Some(root));

    let items = match parsed.program_ref() {
        ProgramRef::Module(m) => m
            .body
            .iter()
            .filter_map(|item| lowerer.module_item(item, list))
            .collect(),
        ProgramRef::Script(s) => s
            .body
            .iter()
            .filter_map(|stmt| lowerer.stmt(stmt, list, Export::local(stmt.span())))
            .collect(),
    };

    lowerer.finish(list, NodeData::List(ListData { items }));
    lowerer.finish(root, NodeData::SourceFile(SourceFileData { list }));

    SourceTree::new(
        file,
        parsed.path().to_path_buf(),
        parsed.source_info.text.clone(),
        lowerer.nodes,
        root,
    )
}

/// Export context of a declaration
#[derive(Clone, Copy)]
struct Export {
    /// Span the JSDoc comment is attached to
    doc_span: Span,
    exported: bool,
    default_export: bool,
}

impl Export {
    fn local(doc_span: Span) -> Self {
        Self {
            doc_span,
            exported: false,
            default_export: false,
        }
    }
}

struct Lowerer<'a> {
    parsed: &'a ParsedModule,
    nodes: Vec<Node>,
}

impl Lowerer<'_> {
    fn push(&mut self, kind: SyntaxKind, range: TextRange, parent: Option<NodeId>) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Node {
            kind,
            range,
            parent,
            modifiers: Modifiers::default(),
            doc: None,
            data: NodeData::Leaf,
        });
        id
    }

    fn range(&self, span: Span) -> TextRange {
        let (start, end) = self.parsed.byte_range(span);
        TextRange::new(start, end)
    }

    fn open(&mut self, kind: SyntaxKind, span: Span, parent: NodeId) -> NodeId {
        let range = self.range(span);
        self.push(kind, range, Some(parent))
    }

    fn finish(&mut self, id: NodeId, data: NodeData) {
        self.nodes[id.index()].data = data;
    }

    fn leaf(&mut self, kind: SyntaxKind, span: Span, parent: NodeId) -> NodeId {
        self.open(kind, span, parent)
    }

    fn ident(&mut self, name: &str, span: Span, parent: NodeId) -> NodeId {
        let id = self.open(SyntaxKind::Identifier, span, parent);
        self.finish(
            id,
            NodeData::Identifier(IdentifierData {
                name: name.to_string(),
            }),
        );
        id
    }

    fn modifiers(&mut self, id: NodeId) -> &mut Modifiers {
        &mut self.nodes[id.index()].modifiers
    }

    fn text(&self, span: Span) -> String {
        self.parsed.text_for_span(span).to_string()
    }

    fn doc(&mut self, id: NodeId, span: Span) {
        if let Some(text) = self.parsed.jsdoc_for_span(span) {
            self.nodes[id.index()].doc = Some(JsDoc::parse(&text));
        }
    }

    fn decorate(&mut self, id: NodeId, export: Export) {
        self.doc(id, export.doc_span);
        let modifiers = self.modifiers(id);
        modifiers.exported = export.exported;
        modifiers.default_export = export.default_export;
    }

    fn prop_name(&self, key: &swc_ast::PropName) -> String {
        prop_name_str(key).unwrap_or_else(|| self.text(key.span()))
    }

    fn key_name(&self, key: &Expr) -> String {
        expr_to_name(key).unwrap_or_else(|| self.text(key.span()))
    }

    fn module_item(&mut self, item: &swc_ast::ModuleItem, parent: NodeId) -> Option<NodeId> {
        use swc_ast::ModuleDecl;

        let decl = match item {
            swc_ast::ModuleItem::Stmt(stmt) => {
                return self.stmt(stmt, parent, Export::local(stmt.span()))
            }
            swc_ast::ModuleItem::ModuleDecl(decl) => decl,
        };

        Some(match decl {
            ModuleDecl::Import(import) => self.import(import, parent),
            ModuleDecl::ExportDecl(e) => self.decl(
                &e.decl,
                parent,
                Export {
                    doc_span: e.span,
                    exported: true,
                    default_export: false,
                },
            ),
            ModuleDecl::ExportDefaultDecl(e) => {
                let export = Export {
                    doc_span: e.span,
                    exported: true,
                    default_export: true,
                };
                let name = |ident: &Option<swc_ast::Ident>| {
                    Some(
                        ident
                            .as_ref()
                            .map(|i| i.sym.to_string())
                            .unwrap_or_else(|| "default".to_string()),
                    )
                };
                match &e.decl {
                    swc_ast::DefaultDecl::Class(c) => self.class(
                        SyntaxKind::ClassDeclaration,
                        name(&c.ident),
                        &c.class,
                        c.class.span,
                        parent,
                        export,
                    ),
                    swc_ast::DefaultDecl::Fn(f) => {
                        let id = self.function(
                            SyntaxKind::FunctionDeclaration,
                            name(&f.ident),
                            &f.function,
                            f.function.span,
                            parent,
                        );
                        self.decorate(id, export);
                        id
                    }
                    swc_ast::DefaultDecl::TsInterfaceDecl(i) => self.interface(i, parent, export),
                }
            }
            ModuleDecl::ExportDefaultExpr(e) => {
                self.export_assignment(e.span, &e.expr, parent)
            }
            ModuleDecl::TsExportAssignment(e) => {
                self.export_assignment(e.span, &e.expr, parent)
            }
            ModuleDecl::ExportNamed(e) => self.leaf(SyntaxKind::ExportDeclaration, e.span, parent),
            ModuleDecl::ExportAll(e) => self.leaf(SyntaxKind::ExportDeclaration, e.span, parent),
            other => self.leaf(SyntaxKind::Unknown, other.span(), parent),
        })
    }

    fn export_assignment(&mut self, span: Span, expr: &Expr, parent: NodeId) -> NodeId {
        let id = self.open(SyntaxKind::ExportAssignment, span, parent);
        let inner = self.expr(expr, id);
        self.finish(
            id,
            NodeData::Wrapper(WrapperData {
                inner,
                operator: None,
            }),
        );
        id
    }

    fn import(&mut self, import: &swc_ast::ImportDecl, parent: NodeId) -> NodeId {
        let id = self.open(SyntaxKind::ImportDeclaration, import.span, parent);
        let bindings = import
            .specifiers
            .iter()
            .map(|spec| match spec {
                swc_ast::ImportSpecifier::Named(named) => ImportBinding {
                    local: named.local.sym.to_string(),
                    imported: match &named.imported {
                        Some(swc_ast::ModuleExportName::Ident(i)) => i.sym.to_string(),
                        Some(other) => self
                            .text(other.span())
                            .trim_matches(|c| c == '"' || c == '\'')
                            .to_string(),
                        None => named.local.sym.to_string(),
                    },
                },
                swc_ast::ImportSpecifier::Default(d) => ImportBinding {
                    local: d.local.sym.to_string(),
                    imported: "default".to_string(),
                },
                swc_ast::ImportSpecifier::Namespace(n) => ImportBinding {
                    local: n.local.sym.to_string(),
                    imported: "*".to_string(),
                },
            })
            .collect();
        self.finish(
            id,
            NodeData::Import(ImportData {
                source: str_value(&import.src),
                bindings,
            }),
        );
        id
    }

    fn stmt(&mut self, stmt: &Stmt, parent: NodeId, export: Export) -> Option<NodeId> {
        match stmt {
            Stmt::Decl(decl) => Some(self.decl(decl, parent, export)),
            Stmt::Expr(e) => {
                let id = self.open(SyntaxKind::ExpressionStatement, e.span, parent);
                let inner = self.expr(&e.expr, id);
                self.finish(
                    id,
                    NodeData::Wrapper(WrapperData {
                        inner,
                        operator: None,
                    }),
                );
                Some(id)
            }
            Stmt::Empty(_) => None,
            other => Some(self.leaf(SyntaxKind::Unknown, other.span(), parent)),
        }
    }

    fn decl(&mut self, decl: &swc_ast::Decl, parent: NodeId, export: Export) -> NodeId {
        use swc_ast::Decl;

        match decl {
            Decl::Class(c) => {
                let id = self.class(
                    SyntaxKind::ClassDeclaration,
                    Some(c.ident.sym.to_string()),
                    &c.class,
                    decl.span(),
                    parent,
                    export,
                );
                self.modifiers(id).declare = c.declare;
                id
            }
            Decl::Fn(f) => {
                let id = self.function(
                    SyntaxKind::FunctionDeclaration,
                    Some(f.ident.sym.to_string()),
                    &f.function,
                    decl.span(),
                    parent,
                );
                self.decorate(id, export);
                self.modifiers(id).declare = f.declare;
                id
            }
            Decl::Var(v) => self.var(v, parent, export),
            Decl::TsInterface(i) => self.interface(i, parent, export),
            Decl::TsTypeAlias(t) => {
                let id = self.open(SyntaxKind::TypeAliasDeclaration, t.span, parent);
                self.decorate(id, export);
                self.modifiers(id).declare = t.declare;
                let type_params = self.type_params(t.type_params.as_deref(), id);
                let ty = self.ty(&t.type_ann, id);
                self.finish(
                    id,
                    NodeData::TypeAlias(TypeAliasData {
                        name: t.id.sym.to_string(),
                        type_params,
                        ty,
                    }),
                );
                id
            }
            Decl::TsEnum(e) => {
                let id = self.open(SyntaxKind::EnumDeclaration, e.span, parent);
                self.decorate(id, export);
                self.modifiers(id).declare = e.declare;
                let members = e
                    .members
                    .iter()
                    .map(|m| {
                        let mid = self.open(SyntaxKind::EnumMember, m.span, id);
                        self.doc(mid, m.span);
                        let name = match &m.id {
                            swc_ast::TsEnumMemberId::Ident(i) => i.sym.to_string(),
                            swc_ast::TsEnumMemberId::Str(s) => str_value(s),
                        };
                        let initializer = m.init.as_deref().map(|init| self.expr(init, mid));
                        self.finish(mid, NodeData::EnumMember(EnumMemberData { name, initializer }));
                        mid
                    })
                    .collect();
                self.finish(
                    id,
                    NodeData::Enum(EnumData {
                        name: e.id.sym.to_string(),
                        is_const: e.is_const,
                        members,
                    }),
                );
                id
            }
            Decl::TsModule(m) => {
                let id = self.open(SyntaxKind::ModuleDeclaration, m.span, parent);
                self.decorate(id, export);
                self.modifiers(id).declare = m.declare;
                let name = match &m.id {
                    swc_ast::TsModuleName::Ident(i) => i.sym.to_string(),
                    swc_ast::TsModuleName::Str(s) => str_value(s),
                };
                let body = match &m.body {
                    Some(body) => self.namespace_body(body, id),
                    None => Vec::new(),
                };
                self.finish(id, NodeData::Module(ModuleData { name, body }));
                id
            }
            other => self.leaf(SyntaxKind::Unknown, other.span(), parent),
        }
    }

    fn namespace_body(&mut self, body: &swc_ast::TsNamespaceBody, parent: NodeId) -> Vec<NodeId> {
        match body {
            swc_ast::TsNamespaceBody::TsModuleBlock(block) => block
                .body
                .iter()
                .filter_map(|item| self.module_item(item, parent))
                .collect(),
            swc_ast::TsNamespaceBody::TsNamespaceDecl(ns) => {
                let id = self.open(SyntaxKind::ModuleDeclaration, ns.span, parent);
                self.modifiers(id).exported = true;
                let body = self.namespace_body(&ns.body, id);
                self.finish(
                    id,
                    NodeData::Module(ModuleData {
                        name: ns.id.sym.to_string(),
                        body,
                    }),
                );
                vec![id]
            }
        }
    }

    fn var(&mut self, v: &swc_ast::VarDecl, parent: NodeId, export: Export) -> NodeId {
        let id = self.open(SyntaxKind::VariableStatement, v.span, parent);
        self.decorate(id, export);
        self.modifiers(id).declare = v.declare;
        let declaration_kind = match v.kind {
            swc_ast::VarDeclKind::Const => DeclarationKind::Const,
            swc_ast::VarDeclKind::Let => DeclarationKind::Let,
            swc_ast::VarDeclKind::Var => DeclarationKind::Var,
        };

        let declarations = v
            .decls
            .iter()
            .map(|d| {
                let did = self.open(SyntaxKind::VariableDeclaration, d.span, id);
                self.modifiers(did).exported = export.exported;
                let name = self.binding_name(&d.name, did);
                let annotation = match &d.name {
                    Pat::Ident(b) => b.type_ann.as_deref(),
                    Pat::Object(o) => o.type_ann.as_deref(),
                    Pat::Array(a) => a.type_ann.as_deref(),
                    _ => None,
                };
                let type_annotation = self.type_ann(annotation, did);
                let initializer = d.init.as_deref().map(|init| self.expr(init, did));
                self.finish(
                    did,
                    NodeData::Variable(VariableData {
                        name,
                        type_annotation,
                        initializer,
                    }),
                );
                did
            })
            .collect();

        self.finish(
            id,
            NodeData::VariableStatement(VariableStatementData {
                declaration_kind,
                declarations,
            }),
        );
        id
    }

    fn interface(
        &mut self,
        i: &swc_ast::TsInterfaceDecl,
        parent: NodeId,
        export: Export,
    ) -> NodeId {
        let id = self.open(SyntaxKind::InterfaceDeclaration, i.span, parent);
        self.decorate(id, export);
        self.modifiers(id).declare = i.declare;
        let type_params = self.type_params(i.type_params.as_deref(), id);
        let extends = i.extends.iter().map(|h| self.heritage(h, id)).collect();
        let members = i
            .body
            .body
            .iter()
            .map(|m| self.type_element(m, id))
            .collect();
        self.finish(
            id,
            NodeData::Interface(InterfaceData {
                name: i.id.sym.to_string(),
                type_params,
                extends,
                members,
            }),
        );
        id
    }

    fn class(
        &mut self,
        kind: SyntaxKind,
        name: Option<String>,
        class: &swc_ast::Class,
        span: Span,
        parent: NodeId,
        export: Export,
    ) -> NodeId {
        let id = self.open(kind, span, parent);
        self.decorate(id, export);
        self.modifiers(id).is_abstract = class.is_abstract;
        let type_params = self.type_params(class.type_params.as_deref(), id);

        let extends = class.super_class.as_deref().map(|sup| {
            let mut range = self.range(sup.span());
            if let Some(args) = class.super_type_params.as_deref() {
                range.end = self.range(args.span).end.max(range.end);
            }
            let ext = self.push(SyntaxKind::ExpressionWithTypeArguments, range, Some(id));
            let target = self.expr(sup, ext);
            let type_args = self.type_args(class.super_type_params.as_deref(), ext);
            self.finish(
                ext,
                NodeData::TypeReference(TypeReferenceData { target, type_args }),
            );
            ext
        });

        let implements = class
            .implements
            .iter()
            .map(|h| self.heritage(h, id))
            .collect();
        let members = class
            .body
            .iter()
            .filter_map(|m| self.class_member(m, id))
            .collect();

        self.finish(
            id,
            NodeData::Class(ClassData {
                name,
                type_params,
                extends,
                implements,
                members,
            }),
        );
        id
    }

    fn heritage(&mut self, h: &swc_ast::TsExprWithTypeArgs, parent: NodeId) -> NodeId {
        let id = self.open(SyntaxKind::ExpressionWithTypeArguments, h.span, parent);
        let target = self.expr(&h.expr, id);
        let type_args = self.type_args(h.type_args.as_deref(), id);
        self.finish(
            id,
            NodeData::TypeReference(TypeReferenceData { target, type_args }),
        );
        id
    }

    fn class_member(&mut self, member: &swc_ast::ClassMember, parent: NodeId) -> Option<NodeId> {
        use swc_ast::ClassMember;

        Some(match member {
            ClassMember::Constructor(c) => {
                let id = self.open(SyntaxKind::Constructor, c.span, parent);
                self.doc(id, c.span);
                self.modifiers(id).accessibility = accessibility(c.accessibility);
                let params = c
                    .params
                    .iter()
                    .map(|p| self.constructor_param(p, id))
                    .collect();
                let body = if c.body.is_some() {
                    FunctionBody::Block
                } else {
                    FunctionBody::None
                };
                self.finish(
                    id,
                    NodeData::Function(FunctionData {
                        name: Some("constructor".to_string()),
                        type_params: Vec::new(),
                        params,
                        return_type: None,
                        body,
                        returns: Vec::new(),
                    }),
                );
                id
            }
            ClassMember::Method(m) => {
                let name = self.prop_name(&m.key);
                let id = self.function(method_kind(m.kind), Some(name), &m.function, m.span, parent);
                self.doc(id, m.span);
                let modifiers = self.modifiers(id);
                modifiers.is_static = m.is_static;
                modifiers.accessibility = accessibility(m.accessibility);
                modifiers.is_abstract = m.is_abstract;
                modifiers.optional = m.is_optional;
                id
            }
            ClassMember::PrivateMethod(m) => {
                let name = format!("#{}", m.key.name);
                let id = self.function(method_kind(m.kind), Some(name), &m.function, m.span, parent);
                self.doc(id, m.span);
                let modifiers = self.modifiers(id);
                modifiers.is_static = m.is_static;
                modifiers.private_name = true;
                modifiers.optional = m.is_optional;
                id
            }
            ClassMember::ClassProp(p) => {
                let id = self.open(SyntaxKind::PropertyDeclaration, p.span, parent);
                self.doc(id, p.span);
                let modifiers = self.modifiers(id);
                modifiers.is_static = p.is_static;
                modifiers.accessibility = accessibility(p.accessibility);
                modifiers.readonly = p.readonly;
                modifiers.is_abstract = p.is_abstract;
                modifiers.optional = p.is_optional;
                modifiers.declare = p.declare;
                let name = self.prop_name(&p.key);
                let type_annotation = self.type_ann(p.type_ann.as_deref(), id);
                let initializer = p.value.as_deref().map(|v| self.expr(v, id));
                self.finish(
                    id,
                    NodeData::Property(PropertyData {
                        name,
                        type_annotation,
                        initializer,
                    }),
                );
                id
            }
            ClassMember::PrivateProp(p) => {
                let id = self.open(SyntaxKind::PropertyDeclaration, p.span, parent);
                self.doc(id, p.span);
                let modifiers = self.modifiers(id);
                modifiers.is_static = p.is_static;
                modifiers.private_name = true;
                modifiers.readonly = p.readonly;
                modifiers.optional = p.is_optional;
                let type_annotation = self.type_ann(p.type_ann.as_deref(), id);
                let initializer = p.value.as_deref().map(|v| self.expr(v, id));
                self.finish(
                    id,
                    NodeData::Property(PropertyData {
                        name: format!("#{}", p.key.name),
                        type_annotation,
                        initializer,
                    }),
                );
                id
            }
            ClassMember::StaticBlock(b) => {
                let id = self.open(SyntaxKind::ClassStaticBlockDeclaration, b.span, parent);
                self.doc(id, b.span);
                self.modifiers(id).is_static = true;
                id
            }
            ClassMember::TsIndexSignature(i) => self.index_signature(i, parent),
            ClassMember::Empty(_) => return None,
            other => self.leaf(SyntaxKind::Unknown, other.span(), parent),
        })
    }

    fn constructor_param(&mut self, p: &swc_ast::ParamOrTsParamProp, parent: NodeId) -> NodeId {
        match p {
            swc_ast::ParamOrTsParamProp::Param(p) => self.param(&p.pat, p.span, parent),
            swc_ast::ParamOrTsParamProp::TsParamProp(prop) => {
                let id = self.open(SyntaxKind::Parameter, prop.span, parent);
                let data = match &prop.param {
                    swc_ast::TsParamPropParam::Ident(b) => self.ident_param(b, id),
                    swc_ast::TsParamPropParam::Assign(a) => self.assign_param(a, id),
                };
                let modifiers = self.modifiers(id);
                modifiers.accessibility = accessibility(prop.accessibility);
                modifiers.readonly = prop.readonly;
                self.finish(id, NodeData::Parameter(data));
                id
            }
        }
    }

    fn function(
        &mut self,
        kind: SyntaxKind,
        name: Option<String>,
        f: &swc_ast::Function,
        span: Span,
        parent: NodeId,
    ) -> NodeId {
        let id = self.open(kind, span, parent);
        self.modifiers(id).is_async = f.is_async;
        let type_params = self.type_params(f.type_params.as_deref(), id);
        let params = f
            .params
            .iter()
            .map(|p| self.param(&p.pat, p.span, id))
            .collect();
        let return_type = self.type_ann(f.return_type.as_deref(), id);
        let (body, returns) = match &f.body {
            Some(block) => (FunctionBody::Block, self.returns(&block.stmts, id)),
            None => (FunctionBody::None, Vec::new()),
        };
        self.finish(
            id,
            NodeData::Function(FunctionData {
                name,
                type_params,
                params,
                return_type,
                body,
                returns,
            }),
        );
        id
    }

    fn arrow(&mut self, a: &swc_ast::ArrowExpr, parent: NodeId) -> NodeId {
        let id = self.open(SyntaxKind::ArrowFunction, a.span, parent);
        self.modifiers(id).is_async = a.is_async;
        let type_params = self.type_params(a.type_params.as_deref(), id);
        let params = a
            .params
            .iter()
            .map(|p| self.param(p, p.span(), id))
            .collect();
        let return_type = self.type_ann(a.return_type.as_deref(), id);
        let (body, returns) = match &*a.body {
            swc_ast::BlockStmtOrExpr::BlockStmt(block) => {
                (FunctionBody::Block, self.returns(&block.stmts, id))
            }
            swc_ast::BlockStmtOrExpr::Expr(e) => (FunctionBody::Expression, vec![self.expr(e, id)]),
        };
        self.finish(
            id,
            NodeData::Function(FunctionData {
                name: None,
                type_params,
                params,
                return_type,
                body,
                returns,
            }),
        );
        id
    }

    fn returns(&mut self, stmts: &[Stmt], parent: NodeId) -> Vec<NodeId> {
        let mut exprs = Vec::new();
        collect_returns(stmts, &mut exprs);
        exprs.into_iter().map(|e| self.expr(e, parent)).collect()
    }

    fn param(&mut self, pat: &Pat, span: Span, parent: NodeId) -> NodeId {
        let id = self.open(SyntaxKind::Parameter, span, parent);
        let data = self.param_parts(pat, id);
        self.finish(id, NodeData::Parameter(data));
        id
    }

    fn param_parts(&mut self, pat: &Pat, id: NodeId) -> ParameterData {
        match pat {
            Pat::Ident(b) => self.ident_param(b, id),
            Pat::Assign(a) => self.assign_param(a, id),
            Pat::Rest(r) => self.rest_param(r, id),
            Pat::Object(o) => {
                let name = self.object_pattern(o, id);
                let type_annotation = self.type_ann(o.type_ann.as_deref(), id);
                ParameterData {
                    name,
                    type_annotation,
                    initializer: None,
                    rest: false,
                }
            }
            Pat::Array(a) => {
                let name = self.array_pattern(a, id);
                let type_annotation = self.type_ann(a.type_ann.as_deref(), id);
                ParameterData {
                    name,
                    type_annotation,
                    initializer: None,
                    rest: false,
                }
            }
            other => ParameterData {
                name: self.leaf(SyntaxKind::Unknown, other.span(), id),
                type_annotation: None,
                initializer: None,
                rest: false,
            },
        }
    }

    fn ident_param(&mut self, b: &swc_ast::BindingIdent, id: NodeId) -> ParameterData {
        self.modifiers(id).optional = b.id.optional;
        let name = self.ident(&b.id.sym, b.id.span, id);
        let type_annotation = self.type_ann(b.type_ann.as_deref(), id);
        ParameterData {
            name,
            type_annotation,
            initializer: None,
            rest: false,
        }
    }

    fn assign_param(&mut self, a: &swc_ast::AssignPat, id: NodeId) -> ParameterData {
        let mut data = self.param_parts(&a.left, id);
        data.initializer = Some(self.expr(&a.right, id));
        data
    }

    fn rest_param(&mut self, r: &swc_ast::RestPat, id: NodeId) -> ParameterData {
        let mut data = self.param_parts(&r.arg, id);
        data.rest = true;
        if data.type_annotation.is_none() {
            data.type_annotation = self.type_ann(r.type_ann.as_deref(), id);
        }
        data
    }

    fn fn_param(&mut self, p: &swc_ast::TsFnParam, parent: NodeId) -> NodeId {
        let id = self.open(SyntaxKind::Parameter, p.span(), parent);
        let data = match p {
            swc_ast::TsFnParam::Ident(b) => self.ident_param(b, id),
            swc_ast::TsFnParam::Rest(r) => self.rest_param(r, id),
            swc_ast::TsFnParam::Object(o) => {
                let name = self.object_pattern(o, id);
                let type_annotation = self.type_ann(o.type_ann.as_deref(), id);
                ParameterData {
                    name,
                    type_annotation,
                    initializer: None,
                    rest: false,
                }
            }
            swc_ast::TsFnParam::Array(a) => {
                let name = self.array_pattern(a, id);
                let type_annotation = self.type_ann(a.type_ann.as_deref(), id);
                ParameterData {
                    name,
                    type_annotation,
                    initializer: None,
                    rest: false,
                }
            }
        };
        self.finish(id, NodeData::Parameter(data));
        id
    }

    fn binding_name(&mut self, pat: &Pat, parent: NodeId) -> NodeId {
        match pat {
            Pat::Ident(b) => self.ident(&b.id.sym, b.id.span, parent),
            Pat::Object(o) => self.object_pattern(o, parent),
            Pat::Array(a) => self.array_pattern(a, parent),
            Pat::Rest(r) => self.binding_name(&r.arg, parent),
            Pat::Assign(a) => self.binding_name(&a.left, parent),
            other => self.leaf(SyntaxKind::Unknown, other.span(), parent),
        }
    }

    fn object_pattern(&mut self, o: &swc_ast::ObjectPat, parent: NodeId) -> NodeId {
        let id = self.open(SyntaxKind::ObjectBindingPattern, o.span, parent);
        let items = o
            .props
            .iter()
            .map(|prop| {
                let eid = self.open(SyntaxKind::BindingElement, prop.span(), id);
                let data = match prop {
                    swc_ast::ObjectPatProp::KeyValue(kv) => {
                        let (name, initializer) = self.binding_target(&kv.value, eid);
                        BindingElementData {
                            property_name: Some(self.prop_name(&kv.key)),
                            name,
                            initializer,
                            rest: false,
                        }
                    }
                    swc_ast::ObjectPatProp::Assign(a) => BindingElementData {
                        property_name: None,
                        name: self.ident(&a.key.id.sym, a.key.id.span, eid),
                        initializer: a.value.as_deref().map(|v| self.expr(v, eid)),
                        rest: false,
                    },
                    swc_ast::ObjectPatProp::Rest(r) => BindingElementData {
                        property_name: None,
                        name: self.binding_name(&r.arg, eid),
                        initializer: None,
                        rest: true,
                    },
                };
                self.finish(eid, NodeData::BindingElement(data));
                eid
            })
            .collect();
        self.finish(id, NodeData::List(ListData { items }));
        id
    }

    fn array_pattern(&mut self, a: &swc_ast::ArrayPat, parent: NodeId) -> NodeId {
        let id = self.open(SyntaxKind::ArrayBindingPattern, a.span, parent);
        let items = a
            .elems
            .iter()
            .flatten()
            .map(|p| {
                let eid = self.open(SyntaxKind::BindingElement, p.span(), id);
                let rest = matches!(p, Pat::Rest(_));
                let (name, initializer) = self.binding_target(p, eid);
                self.finish(
                    eid,
                    NodeData::BindingElement(BindingElementData {
                        property_name: None,
                        name,
                        initializer,
                        rest,
                    }),
                );
                eid
            })
            .collect();
        self.finish(id, NodeData::List(ListData { items }));
        id
    }

    /// Name and default value of a destructuring target
    fn binding_target(&mut self, pat: &Pat, parent: NodeId) -> (NodeId, Option<NodeId>) {
        match pat {
            Pat::Assign(a) => {
                let name = self.binding_name(&a.left, parent);
                (name, Some(self.expr(&a.right, parent)))
            }
            other => (self.binding_name(other, parent), None),
        }
    }

    fn type_ann(&mut self, ann: Option<&swc_ast::TsTypeAnn>, parent: NodeId) -> Option<NodeId> {
        ann.map(|a| self.ty(&a.type_ann, parent))
    }

    fn type_params(
        &mut self,
        decl: Option<&swc_ast::TsTypeParamDecl>,
        parent: NodeId,
    ) -> Vec<NodeId> {
        let Some(decl) = decl else {
            return Vec::new();
        };
        decl.params
            .iter()
            .map(|p| {
                let id = self.open(SyntaxKind::TypeParameter, p.span, parent);
                let constraint = p.constraint.as_deref().map(|t| self.ty(t, id));
                let default = p.default.as_deref().map(|t| self.ty(t, id));
                self.finish(
                    id,
                    NodeData::TypeParameter(TypeParameterData {
                        name: p.name.sym.to_string(),
                        constraint,
                        default,
                    }),
                );
                id
            })
            .collect()
    }

    fn type_args(
        &mut self,
        args: Option<&swc_ast::TsTypeParamInstantiation>,
        parent: NodeId,
    ) -> Vec<NodeId> {
        match args {
            Some(args) => args.params.iter().map(|t| self.ty(t, parent)).collect(),
            None => Vec::new(),
        }
    }

    fn type_element(&mut self, element: &swc_ast::TsTypeElement, parent: NodeId) -> NodeId {
        use swc_ast::TsTypeElement;

        match element {
            TsTypeElement::TsPropertySignature(p) => {
                let id = self.open(SyntaxKind::PropertySignature, p.span, parent);
                self.doc(id, p.span);
                let modifiers = self.modifiers(id);
                modifiers.readonly = p.readonly;
                modifiers.optional = p.optional;
                let name = self.key_name(&p.key);
                let type_annotation = self.type_ann(p.type_ann.as_deref(), id);
                self.finish(
                    id,
                    NodeData::Property(PropertyData {
                        name,
                        type_annotation,
                        initializer: None,
                    }),
                );
                id
            }
            TsTypeElement::TsMethodSignature(m) => {
                let id = self.open(SyntaxKind::MethodSignature, m.span, parent);
                self.doc(id, m.span);
                self.modifiers(id).optional = m.optional;
                let name = self.key_name(&m.key);
                let type_params = self.type_params(m.type_params.as_deref(), id);
                self.signature(id, Some(name), type_params, &m.params, m.type_ann.as_deref())
            }
            TsTypeElement::TsCallSignatureDecl(c) => {
                let id = self.open(SyntaxKind::CallSignature, c.span, parent);
                self.doc(id, c.span);
                let type_params = self.type_params(c.type_params.as_deref(), id);
                self.signature(id, None, type_params, &c.params, c.type_ann.as_deref())
            }
            TsTypeElement::TsConstructSignatureDecl(c) => {
                let id = self.open(SyntaxKind::ConstructSignature, c.span, parent);
                self.doc(id, c.span);
                let type_params = self.type_params(c.type_params.as_deref(), id);
                self.signature(id, None, type_params, &c.params, c.type_ann.as_deref())
            }
            TsTypeElement::TsGetterSignature(g) => {
                let id = self.open(SyntaxKind::GetAccessor, g.span, parent);
                self.doc(id, g.span);
                let name = self.key_name(&g.key);
                self.signature(id, Some(name), Vec::new(), &[], g.type_ann.as_deref())
            }
            TsTypeElement::TsSetterSignature(s) => {
                let id = self.open(SyntaxKind::SetAccessor, s.span, parent);
                self.doc(id, s.span);
                let name = self.key_name(&s.key);
                self.signature(id, Some(name), Vec::new(), std::slice::from_ref(&s.param), None)
            }
            TsTypeElement::TsIndexSignature(i) => self.index_signature(i, parent),
        }
    }

    /// Finish a body-less function node from type-level parts
    fn signature(
        &mut self,
        id: NodeId,
        name: Option<String>,
        type_params: Vec<NodeId>,
        params: &[swc_ast::TsFnParam],
        return_type: Option<&swc_ast::TsTypeAnn>,
    ) -> NodeId {
        let params = params.iter().map(|p| self.fn_param(p, id)).collect();
        let return_type = self.type_ann(return_type, id);
        self.finish(
            id,
            NodeData::Function(FunctionData {
                name,
                type_params,
                params,
                return_type,
                body: FunctionBody::None,
                returns: Vec::new(),
            }),
        );
        id
    }

    fn index_signature(&mut self, i: &swc_ast::TsIndexSignature, parent: NodeId) -> NodeId {
        let id = self.open(SyntaxKind::IndexSignature, i.span, parent);
        self.doc(id, i.span);
        let modifiers = self.modifiers(id);
        modifiers.readonly = i.readonly;
        modifiers.is_static = i.is_static;
        self.signature(id, None, Vec::new(), &i.params, i.type_ann.as_deref())
    }

    fn wrapper(
        &mut self,
        kind: SyntaxKind,
        span: Span,
        inner: &TsType,
        operator: Option<String>,
        parent: NodeId,
    ) -> NodeId {
        let id = self.open(kind, span, parent);
        let inner = self.ty(inner, id);
        self.finish(id, NodeData::Wrapper(WrapperData { inner, operator }));
        id
    }

    fn type_list(
        &mut self,
        kind: SyntaxKind,
        span: Span,
        types: &[Box<TsType>],
        parent: NodeId,
    ) -> NodeId {
        let id = self.open(kind, span, parent);
        let items = types.iter().map(|t| self.ty(t, id)).collect();
        self.finish(id, NodeData::List(ListData { items }));
        id
    }

    fn fn_type(
        &mut self,
        kind: SyntaxKind,
        span: Span,
        params: &[swc_ast::TsFnParam],
        type_params: Option<&swc_ast::TsTypeParamDecl>,
        return_type: &swc_ast::TsTypeAnn,
        parent: NodeId,
    ) -> NodeId {
        let id = self.open(kind, span, parent);
        let type_params = self.type_params(type_params, id);
        self.signature(id, None, type_params, params, Some(return_type))
    }

    fn entity_name(&mut self, name: &swc_ast::TsEntityName, parent: NodeId) -> NodeId {
        match name {
            swc_ast::TsEntityName::Ident(i) => self.ident(&i.sym, i.span, parent),
            swc_ast::TsEntityName::TsQualifiedName(q) => {
                let id = self.open(SyntaxKind::QualifiedName, name.span(), parent);
                let left = self.entity_name(&q.left, id);
                self.finish(
                    id,
                    NodeData::QualifiedName(QualifiedNameData {
                        left,
                        right: q.right.sym.to_string(),
                    }),
                );
                id
            }
        }
    }

    fn ty(&mut self, ty: &TsType, parent: NodeId) -> NodeId {
        use swc_ast::{TsFnOrConstructorType, TsUnionOrIntersectionType};

        let span = ty.span();
        match ty {
            TsType::TsKeywordType(k) => self.leaf(keyword_kind(k.kind), span, parent),
            TsType::TsThisType(_) => self.leaf(SyntaxKind::ThisType, span, parent),
            TsType::TsFnOrConstructorType(TsFnOrConstructorType::TsFnType(f)) => self.fn_type(
                SyntaxKind::FunctionType,
                span,
                &f.params,
                f.type_params.as_deref(),
                &f.type_ann,
                parent,
            ),
            TsType::TsFnOrConstructorType(TsFnOrConstructorType::TsConstructorType(c)) => {
                let id = self.fn_type(
                    SyntaxKind::ConstructorType,
                    span,
                    &c.params,
                    c.type_params.as_deref(),
                    &c.type_ann,
                    parent,
                );
                self.modifiers(id).is_abstract = c.is_abstract;
                id
            }
            TsType::TsTypeRef(r) => {
                let id = self.open(SyntaxKind::TypeReference, span, parent);
                let target = self.entity_name(&r.type_name, id);
                let type_args = self.type_args(r.type_params.as_deref(), id);
                self.finish(
                    id,
                    NodeData::TypeReference(TypeReferenceData { target, type_args }),
                );
                id
            }
            TsType::TsTypeQuery(q) => {
                let id = self.open(SyntaxKind::TypeQuery, span, parent);
                let inner = match &q.expr_name {
                    swc_ast::TsTypeQueryExpr::TsEntityName(n) => self.entity_name(n, id),
                    swc_ast::TsTypeQueryExpr::Import(i) => {
                        self.leaf(SyntaxKind::ImportType, i.span, id)
                    }
                };
                self.finish(
                    id,
                    NodeData::Wrapper(WrapperData {
                        inner,
                        operator: None,
                    }),
                );
                id
            }
            TsType::TsTypeLit(l) => {
                let id = self.open(SyntaxKind::TypeLiteral, span, parent);
                let items = l.members.iter().map(|m| self.type_element(m, id)).collect();
                self.finish(id, NodeData::List(ListData { items }));
                id
            }
            TsType::TsArrayType(a) => {
                self.wrapper(SyntaxKind::ArrayType, span, &a.elem_type, None, parent)
            }
            TsType::TsTupleType(t) => {
                let id = self.open(SyntaxKind::TupleType, span, parent);
                let items = t
                    .elem_types
                    .iter()
                    .map(|e| self.tuple_element(e, id))
                    .collect();
                self.finish(id, NodeData::List(ListData { items }));
                id
            }
            TsType::TsOptionalType(o) => {
                self.wrapper(SyntaxKind::OptionalType, span, &o.type_ann, None, parent)
            }
            TsType::TsRestType(r) => {
                self.wrapper(SyntaxKind::RestType, span, &r.type_ann, None, parent)
            }
            TsType::TsUnionOrIntersectionType(TsUnionOrIntersectionType::TsUnionType(u)) => {
                self.type_list(SyntaxKind::UnionType, span, &u.types, parent)
            }
            TsType::TsUnionOrIntersectionType(TsUnionOrIntersectionType::TsIntersectionType(
                i,
            )) => self.type_list(SyntaxKind::IntersectionType, span, &i.types, parent),
            TsType::TsConditionalType(c) => {
                let id = self.open(SyntaxKind::ConditionalType, span, parent);
                let check = self.ty(&c.check_type, id);
                let extends = Some(self.ty(&c.extends_type, id));
                let when_true = self.ty(&c.true_type, id);
                let when_false = self.ty(&c.false_type, id);
                self.finish(
                    id,
                    NodeData::Conditional(ConditionalData {
                        check,
                        extends,
                        when_true,
                        when_false,
                    }),
                );
                id
            }
            TsType::TsInferType(i) => {
                let id = self.open(SyntaxKind::InferType, span, parent);
                self.finish(
                    id,
                    NodeData::Identifier(IdentifierData {
                        name: i.type_param.name.sym.to_string(),
                    }),
                );
                id
            }
            TsType::TsParenthesizedType(p) => {
                self.wrapper(SyntaxKind::ParenthesizedType, span, &p.type_ann, None, parent)
            }
            TsType::TsTypeOperator(o) => {
                let operator = match o.op {
                    swc_ast::TsTypeOperatorOp::KeyOf => "keyof",
                    swc_ast::TsTypeOperatorOp::Unique => "unique",
                    swc_ast::TsTypeOperatorOp::ReadOnly => "readonly",
                };
                self.wrapper(
                    SyntaxKind::TypeOperator,
                    span,
                    &o.type_ann,
                    Some(operator.to_string()),
                    parent,
                )
            }
            TsType::TsIndexedAccessType(i) => {
                let id = self.open(SyntaxKind::IndexedAccessType, span, parent);
                let object = self.ty(&i.obj_type, id);
                let index = self.ty(&i.index_type, id);
                self.finish(
                    id,
                    NodeData::IndexedAccess(IndexedAccessData { object, index }),
                );
                id
            }
            TsType::TsMappedType(m) => {
                let id = self.open(SyntaxKind::MappedType, span, parent);
                let constraint = m.type_param.constraint.as_deref().map(|t| self.ty(t, id));
                let name_type = m.name_type.as_deref().map(|t| self.ty(t, id));
                let value = m.type_ann.as_deref().map(|t| self.ty(t, id));
                self.finish(
                    id,
                    NodeData::MappedType(MappedTypeData {
                        parameter: m.type_param.name.sym.to_string(),
                        constraint,
                        name_type,
                        value,
                    }),
                );
                id
            }
            TsType::TsLitType(l) => {
                let id = self.open(SyntaxKind::LiteralType, span, parent);
                let kind = match &l.lit {
                    swc_ast::TsLit::Number(_) => SyntaxKind::NumericLiteral,
                    swc_ast::TsLit::Str(_) => SyntaxKind::StringLiteral,
                    swc_ast::TsLit::Bool(b) if b.value => SyntaxKind::TrueKeyword,
                    swc_ast::TsLit::Bool(_) => SyntaxKind::FalseKeyword,
                    swc_ast::TsLit::BigInt(_) => SyntaxKind::BigIntLiteral,
                    swc_ast::TsLit::Tpl(_) => SyntaxKind::TemplateLiteral,
                };
                let inner = self.leaf(kind, l.lit.span(), id);
                self.finish(
                    id,
                    NodeData::Wrapper(WrapperData {
                        inner,
                        operator: None,
                    }),
                );
                id
            }
            TsType::TsTypePredicate(p) => {
                let id = self.open(SyntaxKind::TypePredicate, span, parent);
                let parameter = match &p.param_name {
                    swc_ast::TsThisTypeOrIdent::TsThisType(_) => "this".to_string(),
                    swc_ast::TsThisTypeOrIdent::Ident(i) => i.sym.to_string(),
                };
                let ty = self.type_ann(p.type_ann.as_deref(), id);
                self.finish(
                    id,
                    NodeData::TypePredicate(TypePredicateData {
                        parameter,
                        ty,
                        asserts: p.asserts,
                    }),
                );
                id
            }
            TsType::TsImportType(_) => self.leaf(SyntaxKind::ImportType, span, parent),
        }
    }

    fn tuple_element(&mut self, element: &swc_ast::TsTupleElement, parent: NodeId) -> NodeId {
        let Some(label) = &element.label else {
            return self.ty(&element.ty, parent);
        };
        let id = self.open(SyntaxKind::NamedTupleMember, element.span, parent);
        let name = match label {
            Pat::Ident(b) => {
                self.modifiers(id).optional = b.id.optional;
                b.id.sym.to_string()
            }
            Pat::Rest(r) => self.text(r.arg.span()),
            other => self.text(other.span()),
        };
        let ty = self.ty(&element.ty, id);
        self.finish(
            id,
            NodeData::Property(PropertyData {
                name,
                type_annotation: Some(ty),
                initializer: None,
            }),
        );
        id
    }

    fn expr_or_spread(&mut self, e: &swc_ast::ExprOrSpread, parent: NodeId) -> NodeId {
        match e.spread {
            Some(dots) => {
                let id = self.open(SyntaxKind::SpreadElement, dots.to(e.expr.span()), parent);
                let inner = self.expr(&e.expr, id);
                self.finish(
                    id,
                    NodeData::Wrapper(WrapperData {
                        inner,
                        operator: None,
                    }),
                );
                id
            }
            None => self.expr(&e.expr, parent),
        }
    }

    fn object_prop(&mut self, prop: &swc_ast::PropOrSpread, parent: NodeId) -> NodeId {
        use swc_ast::Prop;

        let span = prop.span();
        let prop = match prop {
            swc_ast::PropOrSpread::Spread(s) => {
                let id = self.open(SyntaxKind::SpreadElement, span, parent);
                let inner = self.expr(&s.expr, id);
                self.finish(
                    id,
                    NodeData::Wrapper(WrapperData {
                        inner,
                        operator: None,
                    }),
                );
                return id;
            }
            swc_ast::PropOrSpread::Prop(prop) => prop,
        };

        match &**prop {
            Prop::KeyValue(kv) => {
                let id = self.open(SyntaxKind::PropertyAssignment, span, parent);
                self.doc(id, span);
                let name = self.prop_name(&kv.key);
                let initializer = Some(self.expr(&kv.value, id));
                self.finish(
                    id,
                    NodeData::Property(PropertyData {
                        name,
                        type_annotation: None,
                        initializer,
                    }),
                );
                id
            }
            Prop::Shorthand(i) => {
                let id = self.open(SyntaxKind::ShorthandPropertyAssignment, span, parent);
                self.doc(id, span);
                let initializer = Some(self.ident(&i.sym, i.span, id));
                self.finish(
                    id,
                    NodeData::Property(PropertyData {
                        name: i.sym.to_string(),
                        type_annotation: None,
                        initializer,
                    }),
                );
                id
            }
            Prop::Method(m) => {
                let name = self.prop_name(&m.key);
                let id = self.function(
                    SyntaxKind::MethodDeclaration,
                    Some(name),
                    &m.function,
                    span,
                    parent,
                );
                self.doc(id, span);
                id
            }
            Prop::Getter(g) => {
                let id = self.open(SyntaxKind::GetAccessor, span, parent);
                self.doc(id, span);
                let name = self.prop_name(&g.key);
                let return_type = self.type_ann(g.type_ann.as_deref(), id);
                let (body, returns) = match &g.body {
                    Some(block) => (FunctionBody::Block, self.returns(&block.stmts, id)),
                    None => (FunctionBody::None, Vec::new()),
                };
                self.finish(
                    id,
                    NodeData::Function(FunctionData {
                        name: Some(name),
                        type_params: Vec::new(),
                        params: Vec::new(),
                        return_type,
                        body,
                        returns,
                    }),
                );
                id
            }
            Prop::Setter(s) => {
                let id = self.open(SyntaxKind::SetAccessor, span, parent);
                self.doc(id, span);
                let name = self.prop_name(&s.key);
                let params = vec![self.param(&s.param, s.param.span(), id)];
                let body = if s.body.is_some() {
                    FunctionBody::Block
                } else {
                    FunctionBody::None
                };
                self.finish(
                    id,
                    NodeData::Function(FunctionData {
                        name: Some(name),
                        type_params: Vec::new(),
                        params,
                        return_type: None,
                        body,
                        returns: Vec::new(),
                    }),
                );
                id
            }
            _ => self.leaf(SyntaxKind::Unknown, span, parent),
        }
    }

    fn assertion(
        &mut self,
        span: Span,
        expr: &Expr,
        ty: Option<&TsType>,
        satisfies: bool,
        parent: NodeId,
    ) -> NodeId {
        let id = self.open(SyntaxKind::AsExpression, span, parent);
        let expression = self.expr(expr, id);
        let ty = ty.map(|t| self.ty(t, id));
        self.finish(
            id,
            NodeData::Assertion(AssertionData {
                expression,
                ty,
                satisfies,
            }),
        );
        id
    }

    fn expr_wrapper(&mut self, kind: SyntaxKind, span: Span, inner: &Expr, parent: NodeId) -> NodeId {
        let id = self.open(kind, span, parent);
        let inner = self.expr(inner, id);
        self.finish(
            id,
            NodeData::Wrapper(WrapperData {
                inner,
                operator: None,
            }),
        );
        id
    }

    /// Source text between two sibling nodes, e.g. a binary operator
    fn between(&self, left: NodeId, right: NodeId) -> String {
        let start = self.nodes[left.index()].range.end;
        let end = self.nodes[right.index()].range.start;
        self.parsed
            .source_text()
            .get(start..end)
            .unwrap_or("")
            .trim()
            .to_string()
    }

    fn expr(&mut self, expr: &Expr, parent: NodeId) -> NodeId {
        use swc_ast::Lit;

        let span = expr.span();
        match expr {
            Expr::Lit(lit) => {
                let kind = match lit {
                    Lit::Str(_) => SyntaxKind::StringLiteral,
                    Lit::Num(_) => SyntaxKind::NumericLiteral,
                    Lit::BigInt(_) => SyntaxKind::BigIntLiteral,
                    Lit::Bool(b) if b.value => SyntaxKind::TrueKeyword,
                    Lit::Bool(_) => SyntaxKind::FalseKeyword,
                    Lit::Null(_) => SyntaxKind::NullKeyword,
                    Lit::Regex(_) => SyntaxKind::RegularExpressionLiteral,
                    _ => SyntaxKind::Unknown,
                };
                self.leaf(kind, span, parent)
            }
            Expr::Tpl(_) => self.leaf(SyntaxKind::TemplateLiteral, span, parent),
            Expr::Ident(i) => self.ident(&i.sym, i.span, parent),
            Expr::This(_) => self.leaf(SyntaxKind::ThisKeyword, span, parent),
            Expr::Array(a) => {
                let id = self.open(SyntaxKind::ArrayLiteralExpression, span, parent);
                let items = a
                    .elems
                    .iter()
                    .flatten()
                    .map(|e| self.expr_or_spread(e, id))
                    .collect();
                self.finish(id, NodeData::List(ListData { items }));
                id
            }
            Expr::Object(o) => {
                let id = self.open(SyntaxKind::ObjectLiteralExpression, span, parent);
                let items = o.props.iter().map(|p| self.object_prop(p, id)).collect();
                self.finish(id, NodeData::List(ListData { items }));
                id
            }
            Expr::Fn(f) => self.function(
                SyntaxKind::FunctionExpression,
                f.ident.as_ref().map(|i| i.sym.to_string()),
                &f.function,
                span,
                parent,
            ),
            Expr::Arrow(a) => self.arrow(a, parent),
            Expr::Class(c) => self.class(
                SyntaxKind::ClassExpression,
                c.ident.as_ref().map(|i| i.sym.to_string()),
                &c.class,
                span,
                parent,
                Export::local(span),
            ),
            Expr::Call(c) => {
                let id = self.open(SyntaxKind::CallExpression, span, parent);
                let callee = match &c.callee {
                    swc_ast::Callee::Expr(e) => self.expr(e, id),
                    other => self.leaf(SyntaxKind::Unknown, other.span(), id),
                };
                let type_args = self.type_args(c.type_args.as_deref(), id);
                let args = c.args.iter().map(|a| self.expr_or_spread(a, id)).collect();
                self.finish(
                    id,
                    NodeData::Call(CallData {
                        callee,
                        type_args,
                        args,
                    }),
                );
                id
            }
            Expr::New(n) => {
                let id = self.open(SyntaxKind::NewExpression, span, parent);
                let callee = self.expr(&n.callee, id);
                let type_args = self.type_args(n.type_args.as_deref(), id);
                let args = n
                    .args
                    .iter()
                    .flatten()
                    .map(|a| self.expr_or_spread(a, id))
                    .collect();
                self.finish(
                    id,
                    NodeData::Call(CallData {
                        callee,
                        type_args,
                        args,
                    }),
                );
                id
            }
            Expr::Bin(b) => {
                let id = self.open(SyntaxKind::BinaryExpression, span, parent);
                let left = self.expr(&b.left, id);
                let right = self.expr(&b.right, id);
                let operator = self.between(left, right);
                self.finish(
                    id,
                    NodeData::Binary(BinaryData {
                        left,
                        operator,
                        right,
                    }),
                );
                id
            }
            Expr::Unary(u) => {
                let id = self.open(SyntaxKind::PrefixUnaryExpression, span, parent);
                let operand = self.expr(&u.arg, id);
                let start = self.nodes[id.index()].range.start;
                let end = self.nodes[operand.index()].range.start;
                let operator = self
                    .parsed
                    .source_text()
                    .get(start..end)
                    .unwrap_or("")
                    .trim()
                    .to_string();
                self.finish(id, NodeData::Unary(UnaryData { operator, operand }));
                id
            }
            Expr::Member(m) => {
                let id = self.open(SyntaxKind::PropertyAccessExpression, span, parent);
                let object = self.expr(&m.obj, id);
                let name = match &m.prop {
                    swc_ast::MemberProp::Ident(i) => i.sym.to_string(),
                    swc_ast::MemberProp::PrivateName(p) => format!("#{}", p.name),
                    swc_ast::MemberProp::Computed(c) => self.text(c.span),
                };
                self.finish(
                    id,
                    NodeData::PropertyAccess(PropertyAccessData { object, name }),
                );
                id
            }
            Expr::Paren(p) => {
                self.expr_wrapper(SyntaxKind::ParenthesizedExpression, span, &p.expr, parent)
            }
            Expr::TsAs(a) => self.assertion(span, &a.expr, Some(&*a.type_ann), false, parent),
            Expr::TsTypeAssertion(a) => {
                self.assertion(span, &a.expr, Some(&*a.type_ann), false, parent)
            }
            Expr::TsConstAssertion(c) => self.assertion(span, &c.expr, None, false, parent),
            Expr::TsSatisfies(s) => {
                self.assertion(span, &s.expr, Some(&*s.type_ann), true, parent)
            }
            Expr::TsNonNull(n) => {
                self.expr_wrapper(SyntaxKind::NonNullExpression, span, &n.expr, parent)
            }
            Expr::Await(a) => self.expr_wrapper(SyntaxKind::AwaitExpression, span, &a.arg, parent),
            Expr::Cond(c) => {
                let id = self.open(SyntaxKind::ConditionalExpression, span, parent);
                let check = self.expr(&c.test, id);
                let when_true = self.expr(&c.cons, id);
                let when_false = self.expr(&c.alt, id);
                self.finish(
                    id,
                    NodeData::Conditional(ConditionalData {
                        check,
                        extends: None,
                        when_true,
                        when_false,
                    }),
                );
                id
            }
            _ => self.leaf(SyntaxKind::Unknown, span, parent),
        }
    }
}

fn accessibility(access: Option<swc_ast::Accessibility>) -> Option<Accessibility> {
    access.map(|a| match a {
        swc_ast::Accessibility::Public => Accessibility::Public,
        swc_ast::Accessibility::Protected => Accessibility::Protected,
        swc_ast::Accessibility::Private => Accessibility::Private,
    })
}

fn method_kind(kind: swc_ast::MethodKind) -> SyntaxKind {
    match kind {
        swc_ast::MethodKind::Method => SyntaxKind::MethodDeclaration,
        swc_ast::MethodKind::Getter => SyntaxKind::GetAccessor,
        swc_ast::MethodKind::Setter => SyntaxKind::SetAccessor,
    }
}

fn keyword_kind(kind: swc_ast::TsKeywordTypeKind) -> SyntaxKind {
    use swc_ast::TsKeywordTypeKind as K;

    match kind {
        K::TsAnyKeyword => SyntaxKind::AnyKeyword,
        K::TsUnknownKeyword => SyntaxKind::UnknownKeyword,
        K::TsNumberKeyword => SyntaxKind::NumberKeyword,
        K::TsObjectKeyword => SyntaxKind::ObjectKeyword,
        K::TsBooleanKeyword => SyntaxKind::BooleanKeyword,
        K::TsBigIntKeyword => SyntaxKind::BigIntKeyword,
        K::TsStringKeyword => SyntaxKind::StringKeyword,
        K::TsSymbolKeyword => SyntaxKind::SymbolKeyword,
        K::TsVoidKeyword => SyntaxKind::VoidKeyword,
        K::TsUndefinedKeyword => SyntaxKind::UndefinedKeyword,
        K::TsNullKeyword => SyntaxKind::NullKeyword,
        K::TsNeverKeyword => SyntaxKind::NeverKeyword,
        K::TsIntrinsicKeyword => SyntaxKind::IntrinsicKeyword,
    }
}

/// Returned expressions of a body, without descending into nested
/// functions or classes
fn collect_returns<'s>(stmts: &'s [Stmt], out: &mut Vec<&'s Expr>) {
    for stmt in stmts {
        collect_stmt_returns(stmt, out);
    }
}

fn collect_stmt_returns<'s>(stmt: &'s Stmt, out: &mut Vec<&'s Expr>) {
    match stmt {
        Stmt::Return(r) => {
            if let Some(arg) = &r.arg {
                out.push(arg);
            }
        }
        Stmt::Block(b) => collect_returns(&b.stmts, out),
        Stmt::If(i) => {
            collect_stmt_returns(&i.cons, out);
            if let Some(alt) = &i.alt {
                collect_stmt_returns(alt, out);
            }
        }
        Stmt::Labeled(l) => collect_stmt_returns(&l.body, out),
        Stmt::Switch(s) => {
            for case in &s.cases {
                collect_returns(&case.cons, out);
            }
        }
        Stmt::Try(t) => {
            collect_returns(&t.block.stmts, out);
            if let Some(handler) = &t.handler {
                collect_returns(&handler.body.stmts, out);
            }
            if let Some(finalizer) = &t.finalizer {
                collect_returns(&finalizer.stmts, out);
            }
        }
        Stmt::While(w) => collect_stmt_returns(&w.body, out),
        Stmt::DoWhile(d) => collect_stmt_returns(&d.body, out),
        Stmt::For(f) => collect_stmt_returns(&f.body, out),
        Stmt::ForIn(f) => collect_stmt_returns(&f.body, out),
        Stmt::ForOf(f) => collect_stmt_returns(&f.body, out),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::parse_tree;

    fn find<'t>(tree: &'t SourceTree, kind: SyntaxKind) -> NodeRef<'t> {
        tree.nodes()
            .find(|n| n.kind() == kind)
            .unwrap_or_else(|| panic!("no {} in tree", kind))
    }

    #[test]
    fn test_exported_declaration_gets_doc_and_flag() {
        let tree = parse_tree(
            "/project/src/a.ts",
            "/** A point. */\nexport interface Point { x: number }",
        );
        let iface = find(&tree, SyntaxKind::InterfaceDeclaration);
        assert!(iface.modifiers().exported);
        assert_eq!(iface.doc().and_then(|d| d.description()), Some("A point."));
        assert_eq!(iface.text(), "interface Point { x: number }");
    }

    #[test]
    fn test_variable_statement_shape() {
        let tree = parse_tree("/project/src/a.ts", "let a: string = 'x', b = 2;");
        let stmt = find(&tree, SyntaxKind::VariableStatement);
        let data = stmt.narrow::<VariableStatementData>().unwrap();
        assert_eq!(data.declaration_kind, DeclarationKind::Let);
        assert_eq!(data.declarations.len(), 2);
        let first = stmt.at(data.declarations[0]);
        assert_eq!(first.name(), Some("a"));
        let var = first.narrow::<VariableData>().unwrap();
        assert_eq!(
            var.at_opt(var.type_annotation).map(|n| n.kind()),
            Some(SyntaxKind::StringKeyword)
        );
    }

    #[test]
    fn test_binary_operator_text() {
        let tree = parse_tree("/project/src/a.ts", "a + b;");
        let bin = find(&tree, SyntaxKind::BinaryExpression);
        assert_eq!(bin.narrow::<BinaryData>().unwrap().operator, "+");
        assert_eq!(
            bin.parent().map(|p| p.kind()),
            Some(SyntaxKind::ExpressionStatement)
        );
    }

    #[test]
    fn test_returns_skip_nested_functions() {
        let tree = parse_tree(
            "/project/src/a.ts",
            "function f(x: number) { if (x) { return 1; } const g = () => { return 'no'; }; return 2; }",
        );
        let f = tree
            .nodes()
            .find(|n| n.kind() == SyntaxKind::FunctionDeclaration)
            .unwrap();
        let data = f.narrow::<FunctionData>().unwrap();
        let texts: Vec<_> = data.returns.iter().map(|id| f.at(*id).text()).collect();
        assert_eq!(texts, vec!["1", "2"]);
    }

    #[test]
    fn test_class_members() {
        let tree = parse_tree(
            "/project/src/a.ts",
            r#"
class Counter<T> extends Base<T> implements Tick {
    static count = 0;
    #secret = 1;
    private readonly step: number;
    constructor(public start: number) {}
    static { Counter.count = 1; }
    get value(): number { return 1; }
    tick(): void {}
}
"#,
        );
        let class = find(&tree, SyntaxKind::ClassDeclaration);
        let data = class.narrow::<ClassData>().unwrap();
        let kinds: Vec<_> = data.members.iter().map(|id| class.at(*id).kind()).collect();
        assert_eq!(
            kinds,
            vec![
                SyntaxKind::PropertyDeclaration,
                SyntaxKind::PropertyDeclaration,
                SyntaxKind::PropertyDeclaration,
                SyntaxKind::Constructor,
                SyntaxKind::ClassStaticBlockDeclaration,
                SyntaxKind::GetAccessor,
                SyntaxKind::MethodDeclaration,
            ]
        );
        let secret = class.at(data.members[1]);
        assert_eq!(secret.name(), Some("#secret"));
        assert!(secret.modifiers().private_name);
        let step = class.at(data.members[2]);
        assert_eq!(step.modifiers().accessibility, Some(Accessibility::Private));
        assert!(step.modifiers().readonly);

        let extends = class.at_opt(data.extends).unwrap();
        assert_eq!(extends.kind(), SyntaxKind::ExpressionWithTypeArguments);
        assert_eq!(extends.text(), "Base<T>");
        assert_eq!(data.implements.len(), 1);
        assert_eq!(data.type_params.len(), 1);
    }

    #[test]
    fn test_literal_types() {
        let tree = parse_tree("/project/src/a.ts", "type T = 'a' | 1 | true | null;");
        let union = find(&tree, SyntaxKind::UnionType);
        let kinds: Vec<_> = union.children().iter().map(|n| n.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                SyntaxKind::LiteralType,
                SyntaxKind::LiteralType,
                SyntaxKind::LiteralType,
                SyntaxKind::NullKeyword,
            ]
        );
        let first = union.children()[0].children()[0];
        assert_eq!(first.kind(), SyntaxKind::StringLiteral);
        assert_eq!(first.text(), "'a'");
    }

    #[test]
    fn test_imports() {
        let tree = parse_tree(
            "/project/src/a.ts",
            "import Def, { Point as P, Line } from './geo';\nimport * as ns from './ns';",
        );
        let imports: Vec<_> = tree
            .nodes()
            .filter_map(|n| n.narrow::<ImportData>())
            .collect();
        assert_eq!(imports.len(), 2);
        assert_eq!(imports[0].source, "./geo");
        assert_eq!(
            imports[0].bindings,
            vec![
                ImportBinding {
                    local: "Def".into(),
                    imported: "default".into()
                },
                ImportBinding {
                    local: "P".into(),
                    imported: "Point".into()
                },
                ImportBinding {
                    local: "Line".into(),
                    imported: "Line".into()
                },
            ]
        );
        assert_eq!(imports[1].bindings[0].imported, "*");
    }

    #[test]
    fn test_destructured_parameter() {
        let tree = parse_tree(
            "/project/src/a.ts",
            "function f({ name, age = 3 }: { name: string; age?: number }, ...rest: string[]) {}",
        );
        let pattern = find(&tree, SyntaxKind::ObjectBindingPattern);
        assert_eq!(pattern.children().len(), 2);
        assert_eq!(pattern.parent().map(|p| p.kind()), Some(SyntaxKind::Parameter));
        let rest = tree
            .nodes()
            .filter_map(|n| n.narrow::<ParameterData>())
            .find(|p| p.rest)
            .unwrap();
        assert_eq!(rest.node.name(), Some("rest"));
        assert_eq!(
            rest.at_opt(rest.type_annotation).map(|n| n.kind()),
            Some(SyntaxKind::ArrayType)
        );
    }
}
