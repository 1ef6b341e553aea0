use crate::error::{ExtractError, Result};
use crate::language::Language;
use crate::types::{FunctionKind, FunctionRecord};
use tree_sitter::{Node, Parser};

/// Syntax-tree extraction for languages with a bundled tree-sitter grammar
pub struct StructuredExtractor {
    language: Language,
    parser: Parser,
}

impl StructuredExtractor {
    pub fn new(language: Language, jsx: bool) -> Result<Self> {
        let mut parser = Parser::new();
        let ts_lang = language.tree_sitter_language(jsx)?;
        parser.set_language(&ts_lang)?;

        Ok(Self { language, parser })
    }

    /// Extract one record per definition node.
    ///
    /// Calls are attributed to the innermost enclosing definition only.
    pub fn extract(&mut self, source: &str, file: &str) -> Result<Vec<FunctionRecord>> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| ExtractError::parse(file))?;

        let root = tree.root_node();
        if root.has_error() {
            log::debug!("{file}: syntax errors present, extraction may be partial");
        }

        let mut records = Vec::new();
        self.traverse(root, source, file, None, &mut records);
        Ok(records)
    }

    fn traverse(
        &self,
        node: Node,
        source: &str,
        file: &str,
        scope: Option<usize>,
        records: &mut Vec<FunctionRecord>,
    ) {
        let mut inner_scope = scope;

        if let Some((name, kind)) = self.definition(node, source) {
            let line = node.start_position().row + 1;
            records.push(FunctionRecord::new(name, file, line, kind));
            inner_scope = Some(records.len() - 1);
        } else if self.is_call(node.kind()) {
            if let (Some(idx), Some(callee)) = (scope, Self::simple_callee(node, source)) {
                records[idx].calls.insert(callee);
            }
        }

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.traverse(child, source, file, inner_scope, records);
        }
    }

    fn is_call(&self, kind: &str) -> bool {
        match self.language {
            Language::Python => kind == "call",
            Language::Rust | Language::JavaScript | Language::TypeScript => {
                kind == "call_expression"
            }
            Language::Unknown => false,
        }
    }

    /// Callee text when it is a bare identifier (`foo()`, not `a.foo()` or `a::foo()`)
    fn simple_callee(node: Node, source: &str) -> Option<String> {
        let function = node.child_by_field_name("function")?;
        if function.kind() != "identifier" {
            return None;
        }
        node_text(function, source)
    }

    fn definition(&self, node: Node, source: &str) -> Option<(String, FunctionKind)> {
        match self.language {
            Language::Python => {
                if node.kind() != "function_definition" {
                    return None;
                }
                let name = field_text(node, "name", source)?;
                Some((name, python_kind(node)))
            }
            Language::Rust => {
                if node.kind() != "function_item" {
                    return None;
                }
                let name = field_text(node, "name", source)?;
                Some((name, rust_kind(node)))
            }
            Language::JavaScript | Language::TypeScript => Self::js_definition(node, source),
            Language::Unknown => None,
        }
    }

    fn js_definition(node: Node, source: &str) -> Option<(String, FunctionKind)> {
        match node.kind() {
            "function_declaration" | "generator_function_declaration" => {
                let name = field_text(node, "name", source)?;
                Some((name, FunctionKind::FunctionDeclaration))
            }
            "method_definition" => {
                let name = field_text(node, "name", source)?;
                Some((name, FunctionKind::MethodDefinition))
            }
            "arrow_function" | "function_expression" | "function" => {
                let declarator = node.parent().filter(|p| p.kind() == "variable_declarator")?;
                let name_node = declarator.child_by_field_name("name")?;
                if name_node.kind() != "identifier" {
                    return None;
                }
                let name = node_text(name_node, source)?;
                Some((name, FunctionKind::ArrowFunction))
            }
            _ => None,
        }
    }
}

fn python_kind(node: Node) -> FunctionKind {
    let mut parent = node.parent();
    if parent.map(|p| p.kind()) == Some("decorated_definition") {
        parent = parent.and_then(|p| p.parent());
    }

    match parent.map(|p| p.kind()) {
        None | Some("module") => FunctionKind::ModuleFunction,
        Some("block") => match parent.and_then(|p| p.parent()).map(|g| g.kind()) {
            Some("class_definition") => FunctionKind::MethodDefinition,
            _ => FunctionKind::FunctionDeclaration,
        },
        Some(_) => FunctionKind::FunctionDeclaration,
    }
}

fn rust_kind(node: Node) -> FunctionKind {
    let owner = node
        .parent()
        .filter(|p| p.kind() == "declaration_list")
        .and_then(|p| p.parent());

    match owner.map(|o| o.kind()) {
        Some("impl_item" | "trait_item") => FunctionKind::MethodDefinition,
        _ => FunctionKind::FunctionDeclaration,
    }
}

fn field_text(node: Node, field: &str, source: &str) -> Option<String> {
    node.child_by_field_name(field)
        .and_then(|child| node_text(child, source))
}

fn node_text(node: Node, source: &str) -> Option<String> {
    source
        .get(node.start_byte()..node.end_byte())
        .map(str::to_string)
        .filter(|text| !text.is_empty())
}
