use crate::registry::ContentShapeRegistry;
use crate::{AAS_NAMESPACE, AAS_PREFIX};

/// Configuration for XML encoding and decoding.
///
/// ```
/// use aas_serde_support::xml::XmlOptions;
///
/// let options = XmlOptions::default().with_indent(2).with_strict(true);
/// assert!(options.strict());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlOptions {
    prefix: String,
    indent: Option<usize>,
    declaration: bool,
    strict: bool,
    lenient_content: bool,
    max_depth: usize,
    content_shapes: ContentShapeRegistry,
}

/// Default element nesting limit, matching serde_json's recursion limit.
pub const DEFAULT_MAX_DEPTH: usize = 128;

impl Default for XmlOptions {
    fn default() -> Self {
        Self {
            prefix: AAS_PREFIX.to_string(),
            indent: None,
            declaration: true,
            strict: false,
            lenient_content: false,
            max_depth: DEFAULT_MAX_DEPTH,
            content_shapes: ContentShapeRegistry::default(),
        }
    }
}

impl XmlOptions {
    /// Prefix bound to the AAS namespace on write. An empty prefix binds it
    /// as the default namespace instead.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Pretty-print with `indent` spaces per level.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = Some(indent);
        self
    }

    /// Whether to write the `<?xml …?>` declaration.
    pub fn with_declaration(mut self, declaration: bool) -> Self {
        self.declaration = declaration;
        self
    }

    /// Reject unknown elements and stray text instead of skipping them.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Drop embedded data specifications with unresolvable content from
    /// their list instead of failing the whole document.
    pub fn with_lenient_content(mut self, lenient: bool) -> Self {
        self.lenient_content = lenient;
        self
    }

    /// Deepest element nesting the reader accepts, counting the root as 1.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_content_shapes(mut self, registry: ContentShapeRegistry) -> Self {
        self.content_shapes = registry;
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn namespace(&self) -> &'static str {
        AAS_NAMESPACE
    }

    pub fn indent(&self) -> Option<usize> {
        self.indent
    }

    pub fn declaration(&self) -> bool {
        self.declaration
    }

    pub fn strict(&self) -> bool {
        self.strict
    }

    pub fn lenient_content(&self) -> bool {
        self.lenient_content
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn content_shapes(&self) -> &ContentShapeRegistry {
        &self.content_shapes
    }
}
