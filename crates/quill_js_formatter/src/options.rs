/// The source dialect being formatted.
///
/// The comment pass is dialect-agnostic except for a small number of
/// child-slot overrides in the structural locator that only apply to
/// estree-shaped trees (see `comment_child_nodes`).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum JsDialect {
    #[default]
    JavaScript,
    TypeScript,
    Flow,
}

impl JsDialect {
    /// Dialects whose parsers produce estree-shaped method definitions: the
    /// method's function expression spans name and body, so a parameterless
    /// method needs its key and body treated as adjacent children.
    pub const fn is_estree_shaped(self) -> bool {
        matches!(self, JsDialect::TypeScript | JsDialect::Flow)
    }
}

#[derive(Clone, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct JsFormatOptions {
    /// Whether we're formatting JavaScript, TypeScript, or Flow source.
    dialect: JsDialect,
}

impl JsFormatOptions {
    pub fn from_dialect(dialect: JsDialect) -> Self {
        Self { dialect }
    }

    pub const fn dialect(&self) -> JsDialect {
        self.dialect
    }

    #[must_use]
    pub fn with_dialect(mut self, dialect: JsDialect) -> Self {
        self.dialect = dialect;
        self
    }
}
