//! Source project
//!
//! A [`Project`] owns one [`SourceTree`] per TypeScript file under the
//! root. Files outside the entry glob are loaded too so references into
//! them resolve; only in-scope files get pages. Definitions are found by
//! walking lexical scopes outwards from a reference and following
//! relative imports into other loaded files.

use crate::config::DocConfig;
use crate::diagnostics::{DocError, DocResult};
use crate::naming::{Scope, NAME_DELIMITER};
use crate::syntax::{lower, FileId, NodeData, NodeRef, SourceTree, SyntaxKind};
use crate::utils::swc::parse_typescript_source;
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Extensions of files the project loads
const SOURCE_EXTENSIONS: &[&str] = &["ts", "tsx", "mts", "cts"];

/// Suffixes tried, in order, when resolving a relative import
const IMPORT_CANDIDATES: &[&str] = &[
    "",
    ".ts",
    ".tsx",
    ".d.ts",
    "/index.ts",
    "/index.tsx",
    "/index.d.ts",
];

/// Loaded source files
#[derive(Debug)]
pub struct Project {
    root: PathBuf,
    files: Vec<SourceTree>,
    by_path: HashMap<PathBuf, FileId>,
}

impl Project {
    /// Discover and parse every source file under the configured root
    ///
    /// `node_modules`, hidden directories and the output directory are
    /// skipped. A documented file that fails to parse fails the whole
    /// load; any other file that fails is left out.
    pub fn load(config: &DocConfig) -> DocResult<Self> {
        let scope = Scope::new(config)?;
        let docs = config.docs_dir();
        let mut sources = Vec::new();

        let walker = WalkDir::new(&config.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                let name = entry.file_name().to_string_lossy();
                entry.depth() == 0
                    || !(name.starts_with('.') || name == "node_modules" || entry.path() == docs.as_path())
            });

        for entry in walker {
            let entry = entry.map_err(|e| DocError::other(format!("failed to walk sources: {}", e)))?;
            let path = entry.path();
            if !entry.file_type().is_file() || !is_source(path) {
                continue;
            }
            let text = std::fs::read_to_string(path)?;
            tracing::debug!(path = %path.display(), "loaded source");
            sources.push((path.to_path_buf(), text));
        }

        Self::from_scoped_sources(&scope, sources)
    }

    /// Parse in-memory sources; paths must be absolute and every one
    /// must parse
    pub fn from_sources(
        root: impl Into<PathBuf>,
        sources: Vec<(PathBuf, String)>,
    ) -> DocResult<Self> {
        Self::parse_all(root.into(), sources, |_| true)
    }

    /// Parse in-memory sources against the documented scope
    ///
    /// Files outside the scope are only there for references to resolve
    /// into. One that does not parse is logged and skipped, and references
    /// into it stay unresolved.
    pub fn from_scoped_sources(scope: &Scope, sources: Vec<(PathBuf, String)>) -> DocResult<Self> {
        Self::parse_all(scope.root().to_path_buf(), sources, |path| scope.contains(path))
    }

    fn parse_all(
        root: PathBuf,
        sources: Vec<(PathBuf, String)>,
        required: impl Fn(&Path) -> bool,
    ) -> DocResult<Self> {
        let mut files = Vec::with_capacity(sources.len());
        let mut by_path = HashMap::new();

        for (path, text) in sources {
            let parsed = match parse_typescript_source(&path, text) {
                Ok(parsed) => parsed,
                Err(e) if !required(&path) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unparsable file outside the entry glob");
                    continue;
                }
                Err(e) => return Err(e),
            };
            let id = FileId::new(files.len());
            files.push(lower(id, &parsed));
            by_path.insert(path, id);
        }

        Ok(Self {
            root,
            files,
            by_path,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Every loaded file, in discovery order
    pub fn files(&self) -> &[SourceTree] {
        &self.files
    }

    pub fn file(&self, id: FileId) -> &SourceTree {
        &self.files[id.index()]
    }

    /// The file loaded from `path`
    pub fn by_path(&self, path: &Path) -> Option<&SourceTree> {
        self.by_path.get(path).map(|id| self.file(*id))
    }

    /// Find a top-level declaration or one of its members by qualified
    /// name, e.g. `Shapes.Circle.radius`
    pub fn find(&self, qualified_name: &str) -> Option<NodeRef<'_>> {
        let mut segments = qualified_name.split(NAME_DELIMITER);
        let first = segments.next()?;
        self.files.iter().find_map(|tree| {
            let mut found = declared_in(statements(tree.root()), first)?;
            for segment in segments.clone() {
                found = member(found, segment)?;
            }
            Some(found)
        })
    }

    /// The declaration an identifier refers to
    ///
    /// Looks through enclosing type parameters, parameters and statement
    /// lists, then follows relative imports. Globals and anything else
    /// outside the project resolve to `None`.
    pub fn definition<'p>(&'p self, ident: NodeRef<'p>) -> Option<NodeRef<'p>> {
        let name = ident.identifier()?;
        ident
            .ancestors()
            .find_map(|scope| self.lookup_in(scope, name, 0))
    }

    fn lookup_in<'p>(&'p self, scope: NodeRef<'p>, name: &str, depth: usize) -> Option<NodeRef<'p>> {
        let type_params = |ids: &'p [crate::syntax::NodeId]| {
            ids.iter()
                .map(|id| scope.at(*id))
                .find(|n| n.name() == Some(name))
        };

        match scope.data() {
            NodeData::TypeAlias(d) => type_params(&d.type_params),
            NodeData::Interface(d) => type_params(&d.type_params),
            NodeData::Class(d) => type_params(&d.type_params),
            NodeData::Function(d) => type_params(&d.type_params)
                .or_else(|| type_params(&d.params))
                .or_else(|| {
                    // a named function expression sees its own name
                    (scope.kind() == SyntaxKind::FunctionExpression && d.name.as_deref() == Some(name))
                        .then_some(scope)
                }),
            NodeData::List(_) if scope.kind() == SyntaxKind::SyntaxList => {
                self.in_statements(scope.children(), name, depth)
            }
            NodeData::Module(d) => {
                self.in_statements(d.body.iter().map(|id| scope.at(*id)).collect(), name, depth)
            }
            _ => None,
        }
    }

    fn in_statements<'p>(
        &'p self,
        statements: Vec<NodeRef<'p>>,
        name: &str,
        depth: usize,
    ) -> Option<NodeRef<'p>> {
        if let Some(found) = declared_in(statements.clone(), name) {
            return Some(found);
        }
        statements.into_iter().find_map(|stmt| match stmt.data() {
            NodeData::Import(d) => {
                let binding = d.bindings.iter().find(|b| b.local == name)?;
                self.follow_import(stmt, &d.source, &binding.imported, depth)
            }
            _ => None,
        })
    }

    fn follow_import<'p>(
        &'p self,
        import: NodeRef<'p>,
        specifier: &str,
        imported: &str,
        depth: usize,
    ) -> Option<NodeRef<'p>> {
        if depth > 8 {
            return None;
        }
        let target = self.resolve_module(import.tree().path(), specifier)?;
        let top = statements(target.root());
        match imported {
            "*" => None,
            "default" => top.into_iter().find(|n| n.modifiers().default_export),
            name => {
                let exported: Vec<_> = top
                    .iter()
                    .copied()
                    .filter(|n| n.modifiers().exported || n.kind() == SyntaxKind::ImportDeclaration)
                    .collect();
                declared_in(exported, name)
                    .or_else(|| self.in_statements(top, name, depth + 1))
            }
        }
    }

    /// The loaded file a relative specifier points at
    pub fn resolve_module(&self, from: &Path, specifier: &str) -> Option<&SourceTree> {
        if !specifier.starts_with('.') {
            return None;
        }
        let base = normalize(&from.parent()?.join(specifier));
        let base = base.to_string_lossy();
        let stems = [
            base.to_string(),
            base.strip_suffix(".js").map(|s| format!("{}.ts", s)).unwrap_or_default(),
            base.strip_suffix(".jsx").map(|s| format!("{}.tsx", s)).unwrap_or_default(),
        ];
        stems
            .iter()
            .filter(|stem| !stem.is_empty())
            .flat_map(|stem| IMPORT_CANDIDATES.iter().map(move |suffix| format!("{}{}", stem, suffix)))
            .find_map(|candidate| self.by_path(Path::new(&candidate)))
    }
}

fn is_source(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| SOURCE_EXTENSIONS.contains(&e))
        .unwrap_or(false)
}

/// Lexically resolve `.` and `..`
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Top-level statements of a source file
pub fn statements(root: NodeRef<'_>) -> Vec<NodeRef<'_>> {
    match root.data() {
        NodeData::SourceFile(d) => root.at(d.list).children(),
        NodeData::List(_) => root.children(),
        _ => Vec::new(),
    }
}

/// The declaration named `name` among `statements`
fn declared_in<'p>(statements: Vec<NodeRef<'p>>, name: &str) -> Option<NodeRef<'p>> {
    statements.into_iter().find_map(|stmt| match stmt.data() {
        NodeData::VariableStatement(_) => stmt
            .children()
            .into_iter()
            .find(|decl| decl.kind() == SyntaxKind::VariableDeclaration && decl.name() == Some(name)),
        _ if is_declaration(stmt.kind()) && stmt.name() == Some(name) => Some(stmt),
        _ => None,
    })
}

fn is_declaration(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::TypeAliasDeclaration
            | SyntaxKind::InterfaceDeclaration
            | SyntaxKind::ClassDeclaration
            | SyntaxKind::EnumDeclaration
            | SyntaxKind::FunctionDeclaration
            | SyntaxKind::ModuleDeclaration
    )
}

/// A named member of a declaration
fn member<'p>(parent: NodeRef<'p>, name: &str) -> Option<NodeRef<'p>> {
    let candidates = match parent.data() {
        NodeData::Module(d) => return declared_in(d.body.iter().map(|id| parent.at(*id)).collect(), name),
        NodeData::Class(d) => &d.members,
        NodeData::Interface(d) => &d.members,
        NodeData::Enum(d) => &d.members,
        _ => return None,
    };
    candidates
        .iter()
        .map(|id| parent.at(*id))
        .find(|n| n.name() == Some(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::project;

    fn ident<'p>(project: &'p Project, path: &str, name: &str, nth: usize) -> NodeRef<'p> {
        project
            .by_path(Path::new(path))
            .unwrap()
            .nodes()
            .filter(|n| n.identifier() == Some(name))
            .nth(nth)
            .unwrap_or_else(|| panic!("no identifier {} #{}", name, nth))
    }

    #[test]
    fn test_local_definitions() {
        let project = project(&[(
            "src/a.ts",
            r#"
export interface Point { x: number }
export type Line<T> = [Point, T];
export function len(p: Point): number { return p.x; }
"#,
        )]);
        let point_ref = ident(&project, "/project/src/a.ts", "Point", 0);
        let def = project.definition(point_ref).unwrap();
        assert_eq!(def.kind(), SyntaxKind::InterfaceDeclaration);

        let t_ref = ident(&project, "/project/src/a.ts", "T", 0);
        assert_eq!(project.definition(t_ref).unwrap().kind(), SyntaxKind::TypeParameter);

        let p_ref = ident(&project, "/project/src/a.ts", "p", 0);
        assert_eq!(project.definition(p_ref).unwrap().kind(), SyntaxKind::Parameter);
    }

    #[test]
    fn test_imports_resolve_across_files() {
        let project = project(&[
            ("src/geo/point.ts", "export interface Point { x: number }\nexport default class Origin {}"),
            (
                "src/geo/line.ts",
                "import { Point as P } from \"./point\";\nimport Origin from './point.js';\nexport type Line = [P, Origin];",
            ),
        ]);
        let p = ident(&project, "/project/src/geo/line.ts", "P", 0);
        let def = project.definition(p).unwrap();
        assert_eq!(def.name(), Some("Point"));
        assert_eq!(def.tree().path(), Path::new("/project/src/geo/point.ts"));

        let origin = ident(&project, "/project/src/geo/line.ts", "Origin", 0);
        let def = project.definition(origin).unwrap();
        assert_eq!(def.kind(), SyntaxKind::ClassDeclaration);
    }

    #[test]
    fn test_globals_do_not_resolve() {
        let project = project(&[("src/a.ts", "export type D = Date;")]);
        let date = ident(&project, "/project/src/a.ts", "Date", 0);
        assert_eq!(project.definition(date), None);
    }

    #[test]
    fn test_find_qualified() {
        let project = project(&[(
            "src/a.ts",
            "export namespace Shapes { export class Circle { radius = 1; } }\nexport const c = 1;",
        )]);
        assert_eq!(
            project.find("Shapes.Circle.radius").unwrap().kind(),
            SyntaxKind::PropertyDeclaration
        );
        assert_eq!(project.find("c").unwrap().kind(), SyntaxKind::VariableDeclaration);
        assert!(project.find("Shapes.Square").is_none());
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(Path::new("/project/src/geo/../a/./b")), PathBuf::from("/project/src/a/b"));
    }

    #[test]
    fn test_load_skips_hidden_and_node_modules() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        std::fs::create_dir_all(root.join("src")).unwrap();
        std::fs::create_dir_all(root.join("node_modules/x")).unwrap();
        std::fs::create_dir_all(root.join(".cache")).unwrap();
        std::fs::write(root.join("src/a.ts"), "export const a = 1;").unwrap();
        std::fs::write(root.join("src/notes.md"), "# notes").unwrap();
        std::fs::write(root.join("node_modules/x/index.ts"), "export const x = 1;").unwrap();
        std::fs::write(root.join(".cache/b.ts"), "export const b = 1;").unwrap();

        let project = Project::load(&DocConfig::new(root)).unwrap();
        let paths: Vec<_> = project.files().iter().map(|f| f.path().to_path_buf()).collect();
        assert_eq!(paths, vec![root.join("src/a.ts")]);
    }

    #[test]
    fn test_unparsable_files_outside_scope_are_skipped() {
        let sources = vec![
            (PathBuf::from("/project/scripts/broken.ts"), "export function broken( {".to_string()),
            (PathBuf::from("/project/src/a.ts"), "export const a = 1;".to_string()),
        ];
        let scope = Scope::new(&DocConfig::new("/project")).unwrap();
        let project = Project::from_scoped_sources(&scope, sources.clone()).unwrap();
        assert_eq!(project.files().len(), 1);
        let a = project.by_path(Path::new("/project/src/a.ts")).unwrap();
        assert_eq!(a.id(), FileId::new(0));
        assert!(project.by_path(Path::new("/project/scripts/broken.ts")).is_none());

        assert!(matches!(
            Project::from_sources("/project", sources),
            Err(DocError::Parse { .. })
        ));
    }

    #[test]
    fn test_unparsable_file_in_scope_fails() {
        let sources = vec![(PathBuf::from("/project/src/broken.ts"), "export function broken( {".to_string())];
        let scope = Scope::new(&DocConfig::new("/project")).unwrap();
        assert!(matches!(
            Project::from_scoped_sources(&scope, sources),
            Err(DocError::Parse { .. })
        ));
    }
}
