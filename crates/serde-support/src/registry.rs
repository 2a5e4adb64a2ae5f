//! Resolution of data specification content shapes.
//!
//! An embedded data specification pairs a reference to a specification
//! template with content whose shape depends on that template. The content
//! itself carries no reliable discriminator, so the shape is looked up from
//! the reference: each registry entry maps an IRI prefix to the element name
//! of the content shape, and the longest prefix matching any key value of the
//! reference wins.

/// Element name of IEC 61360 data specification content.
pub const IEC61360_SHAPE: &str = "dataSpecificationIec61360";

/// Element name of physical unit data specification content.
pub const PHYSICAL_UNIT_SHAPE: &str = "dataSpecificationPhysicalUnit";

const TEMPLATE_BASES: [&str; 2] = [
    "https://admin-shell.io/DataSpecificationTemplates/",
    "http://admin-shell.io/DataSpecificationTemplates/",
];

#[derive(Debug, Clone, PartialEq, Eq)]
struct ShapeEntry {
    prefix: String,
    shape: &'static str,
}

/// Ordered table of IRI prefix → content shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentShapeRegistry {
    entries: Vec<ShapeEntry>,
}

impl ContentShapeRegistry {
    /// A registry that resolves nothing.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Registers `shape` for every reference with a key value starting with `prefix`.
    ///
    /// Re-registering an existing prefix replaces its shape.
    pub fn register(&mut self, prefix: impl Into<String>, shape: &'static str) -> &mut Self {
        let prefix = prefix.into();
        match self.entries.iter_mut().find(|entry| entry.prefix == prefix) {
            Some(entry) => entry.shape = shape,
            None => self.entries.push(ShapeEntry { prefix, shape }),
        }
        self
    }

    /// Chainable form of [`register`](Self::register).
    pub fn with(mut self, prefix: impl Into<String>, shape: &'static str) -> Self {
        self.register(prefix, shape);
        self
    }

    /// Resolves the content shape for a reference given its key values.
    pub fn resolve<'a, I>(&self, key_values: I) -> Option<&'static str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut best: Option<&ShapeEntry> = None;
        for value in key_values {
            for entry in &self.entries {
                if !value.starts_with(entry.prefix.as_str()) {
                    continue;
                }
                if best.is_none_or(|current| entry.prefix.len() > current.prefix.len()) {
                    best = Some(entry);
                }
            }
        }
        best.map(|entry| entry.shape)
    }

    /// Every shape this registry can resolve to.
    pub fn shapes(&self) -> impl Iterator<Item = &'static str> + '_ {
        let mut seen: Vec<&'static str> = Vec::new();
        self.entries.iter().filter_map(move |entry| {
            if seen.contains(&entry.shape) {
                None
            } else {
                seen.push(entry.shape);
                Some(entry.shape)
            }
        })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ContentShapeRegistry {
    /// Registers the AAS data specification templates, including the legacy
    /// `IEC61360` spelling and the plain-http template base.
    fn default() -> Self {
        let mut registry = Self::empty();
        for base in TEMPLATE_BASES {
            registry
                .register(format!("{base}DataSpecificationIec61360"), IEC61360_SHAPE)
                .register(format!("{base}DataSpecificationIEC61360"), IEC61360_SHAPE)
                .register(
                    format!("{base}DataSpecificationPhysicalUnit"),
                    PHYSICAL_UNIT_SHAPE,
                );
        }
        registry
    }
}

/// Checks that `shape` is what `registry` resolves for the reference keys.
///
/// Returns a human-readable reason when it is not; callers wrap it in their
/// own error type.
pub fn check_shape<'a, I>(
    registry: &ContentShapeRegistry,
    key_values: I,
    shape: &str,
) -> std::result::Result<(), String>
where
    I: IntoIterator<Item = &'a str> + Clone,
{
    match registry.resolve(key_values.clone()) {
        Some(resolved) if resolved == shape => Ok(()),
        Some(resolved) => Err(format!(
            "reference resolves to {resolved}, but the content is {shape}"
        )),
        None => Err(unresolved_reason(key_values)),
    }
}

/// Reason string for a reference that does not map to any registered shape.
pub fn unresolved_reason<'a, I>(key_values: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let keys: Vec<&str> = key_values.into_iter().collect();
    if keys.is_empty() {
        "data specification reference has no keys".to_string()
    } else {
        format!(
            "no content shape registered for data specification {}",
            keys.join(" / ")
        )
    }
}
