use crate::extractor::{Endpoint, EndpointExtractor, MappingKind};
use crate::parser::ParsedFile;
use log::debug;
use tree_sitter::Node;

/// Spring MVC endpoint extractor.
///
/// Finds every method declaration in a parsed file and reads its modifier list for
/// recognized mapping annotations. Trees containing error nodes are walked
/// best-effort: endpoints inside malformed regions may be missed, but extraction
/// never fails.
pub struct SpringExtractor;

impl EndpointExtractor for SpringExtractor {
    fn extract_endpoints(&self, parsed_files: &[ParsedFile]) -> Vec<Endpoint> {
        let mut endpoints = Vec::new();

        for parsed_file in parsed_files {
            let before = endpoints.len();
            self.extract_from_file(parsed_file, &mut endpoints);
            debug!(
                "Extracted {} endpoints from {}",
                endpoints.len() - before,
                parsed_file.path.display()
            );
        }

        endpoints
    }
}

impl SpringExtractor {
    /// Walk one file's tree and append its endpoints in document order.
    ///
    /// The walk is an explicit-stack pre-order traversal: children are pushed in
    /// reverse so the earliest sibling is popped first.
    fn extract_from_file(&self, file: &ParsedFile, endpoints: &mut Vec<Endpoint>) {
        let mut stack = vec![file.tree.root_node()];

        while let Some(node) = stack.pop() {
            if node.kind() == "method_declaration" {
                self.extract_from_method(node, file, endpoints);
            }

            let mut cursor = node.walk();
            let children: Vec<Node> = node.children(&mut cursor).collect();
            for child in children.into_iter().rev() {
                stack.push(child);
            }
        }
    }

    /// Emit one endpoint per recognized annotation on a method declaration.
    fn extract_from_method(&self, method: Node, file: &ParsedFile, endpoints: &mut Vec<Endpoint>) {
        // A method whose name field is absent still yields a descriptor, with an
        // empty method name.
        let method_name = method
            .child_by_field_name("name")
            .and_then(|n| n.utf8_text(file.source.as_bytes()).ok())
            .unwrap_or("")
            .to_string();

        let mut cursor = method.walk();
        for child in method.children(&mut cursor) {
            if child.kind() != "modifiers" {
                continue;
            }
            for (marker, path) in Self::mapping_annotations(child, &file.source) {
                endpoints.push(Endpoint::new(
                    method_name.clone(),
                    marker,
                    path,
                    file.path.clone(),
                ));
            }
        }
    }

    /// Collect the recognized mapping annotations attached to a `modifiers` node,
    /// in the order the modifiers appear in source.
    fn mapping_annotations(modifiers: Node, source: &str) -> Vec<(MappingKind, String)> {
        let mut found = Vec::new();

        let mut cursor = modifiers.walk();
        for child in modifiers.children(&mut cursor) {
            // `marker_annotation` is the no-argument form (`@GetMapping`),
            // `annotation` carries an argument list (`@GetMapping("/users")`).
            if !matches!(child.kind(), "annotation" | "marker_annotation") {
                continue;
            }

            let Some(name_node) = child.child_by_field_name("name") else {
                continue;
            };
            let name = name_node.utf8_text(source.as_bytes()).unwrap_or_default();
            let name = name.strip_prefix('@').unwrap_or(name);

            if let Some(marker) = MappingKind::from_annotation_name(name) {
                let path = child
                    .child_by_field_name("arguments")
                    .map(|args| Self::argument_literal(args, source))
                    .unwrap_or_default();
                found.push((marker, path));
            }
        }

        found
    }

    /// Read the argument literal out of an `annotation_argument_list` node.
    ///
    /// A list whose sole element is a string literal yields the literal's content
    /// without the surrounding quotes; anything else yields the raw text between
    /// the list's outer parentheses, nested parentheses included.
    fn argument_literal(arguments: Node, source: &str) -> String {
        if arguments.named_child_count() == 1 {
            if let Some(only) = arguments.named_child(0) {
                if only.kind() == "string_literal" {
                    let text = only.utf8_text(source.as_bytes()).unwrap_or_default();
                    return text
                        .strip_prefix('"')
                        .and_then(|t| t.strip_suffix('"'))
                        .unwrap_or(text)
                        .to_string();
                }
            }
        }

        let text = arguments.utf8_text(source.as_bytes()).unwrap_or_default();
        let inner = text.strip_prefix('(').unwrap_or(text);
        let inner = inner.strip_suffix(')').unwrap_or(inner);
        inner.trim().to_string()
    }
}
