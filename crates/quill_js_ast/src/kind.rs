/// The syntax category of a [`Node`](crate::Node).
///
/// The set is closed but deliberately wider than what the comment pass
/// special-cases: kinds without a dedicated placement rule fall through to
/// the structural defaults, so adding a variant never requires touching the
/// placement tables.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, is_macro::Is)]
pub enum NodeKind {
    Program,

    // Statements
    EmptyStatement,
    ExpressionStatement,
    BlockStatement,
    IfStatement,
    WhileStatement,
    DoWhileStatement,
    ForStatement,
    ForInStatement,
    ForOfStatement,
    TryStatement,
    CatchClause,
    ReturnStatement,
    ThrowStatement,
    BreakStatement,
    ContinueStatement,
    LabeledStatement,
    SwitchStatement,
    SwitchCase,
    VariableDeclaration,
    VariableDeclarator,

    // Declarations
    FunctionDeclaration,
    ClassDeclaration,
    ClassExpression,
    ClassBody,
    MethodDefinition,
    PropertyDefinition,
    Decorator,
    InterfaceDeclaration,
    ImportDeclaration,
    ImportSpecifier,
    ExportNamedDeclaration,

    // Expressions
    Identifier,
    Literal,
    TemplateLiteral,
    TaggedTemplateExpression,
    ObjectExpression,
    Property,
    ArrayExpression,
    SpreadElement,
    AssignmentPattern,
    RestElement,
    FunctionExpression,
    ArrowFunctionExpression,
    CallExpression,
    NewExpression,
    MemberExpression,
    BinaryExpression,
    LogicalExpression,
    ConditionalExpression,
    AssignmentExpression,
    UnaryExpression,
    SequenceExpression,
    AwaitExpression,

    // Markup
    JsxElement,
    JsxFragment,
    JsxSpreadAttribute,
    JsxSpreadChild,

    // Types (TypeScript / Flow)
    TypeAlias,
    TypeReference,
    UnionType,
    IntersectionType,
    MappedType,
    TypeParameter,
    MethodSignature,
    DeclareFunction,
    FunctionType,
    FunctionTypeParam,
    ConditionalType,
}

impl NodeKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            NodeKind::Program => "Program",
            NodeKind::EmptyStatement => "EmptyStatement",
            NodeKind::ExpressionStatement => "ExpressionStatement",
            NodeKind::BlockStatement => "BlockStatement",
            NodeKind::IfStatement => "IfStatement",
            NodeKind::WhileStatement => "WhileStatement",
            NodeKind::DoWhileStatement => "DoWhileStatement",
            NodeKind::ForStatement => "ForStatement",
            NodeKind::ForInStatement => "ForInStatement",
            NodeKind::ForOfStatement => "ForOfStatement",
            NodeKind::TryStatement => "TryStatement",
            NodeKind::CatchClause => "CatchClause",
            NodeKind::ReturnStatement => "ReturnStatement",
            NodeKind::ThrowStatement => "ThrowStatement",
            NodeKind::BreakStatement => "BreakStatement",
            NodeKind::ContinueStatement => "ContinueStatement",
            NodeKind::LabeledStatement => "LabeledStatement",
            NodeKind::SwitchStatement => "SwitchStatement",
            NodeKind::SwitchCase => "SwitchCase",
            NodeKind::VariableDeclaration => "VariableDeclaration",
            NodeKind::VariableDeclarator => "VariableDeclarator",
            NodeKind::FunctionDeclaration => "FunctionDeclaration",
            NodeKind::ClassDeclaration => "ClassDeclaration",
            NodeKind::ClassExpression => "ClassExpression",
            NodeKind::ClassBody => "ClassBody",
            NodeKind::MethodDefinition => "MethodDefinition",
            NodeKind::PropertyDefinition => "PropertyDefinition",
            NodeKind::Decorator => "Decorator",
            NodeKind::InterfaceDeclaration => "InterfaceDeclaration",
            NodeKind::ImportDeclaration => "ImportDeclaration",
            NodeKind::ImportSpecifier => "ImportSpecifier",
            NodeKind::ExportNamedDeclaration => "ExportNamedDeclaration",
            NodeKind::Identifier => "Identifier",
            NodeKind::Literal => "Literal",
            NodeKind::TemplateLiteral => "TemplateLiteral",
            NodeKind::TaggedTemplateExpression => "TaggedTemplateExpression",
            NodeKind::ObjectExpression => "ObjectExpression",
            NodeKind::Property => "Property",
            NodeKind::ArrayExpression => "ArrayExpression",
            NodeKind::SpreadElement => "SpreadElement",
            NodeKind::AssignmentPattern => "AssignmentPattern",
            NodeKind::RestElement => "RestElement",
            NodeKind::FunctionExpression => "FunctionExpression",
            NodeKind::ArrowFunctionExpression => "ArrowFunctionExpression",
            NodeKind::CallExpression => "CallExpression",
            NodeKind::NewExpression => "NewExpression",
            NodeKind::MemberExpression => "MemberExpression",
            NodeKind::BinaryExpression => "BinaryExpression",
            NodeKind::LogicalExpression => "LogicalExpression",
            NodeKind::ConditionalExpression => "ConditionalExpression",
            NodeKind::AssignmentExpression => "AssignmentExpression",
            NodeKind::UnaryExpression => "UnaryExpression",
            NodeKind::SequenceExpression => "SequenceExpression",
            NodeKind::AwaitExpression => "AwaitExpression",
            NodeKind::JsxElement => "JSXElement",
            NodeKind::JsxFragment => "JSXFragment",
            NodeKind::JsxSpreadAttribute => "JSXSpreadAttribute",
            NodeKind::JsxSpreadChild => "JSXSpreadChild",
            NodeKind::TypeAlias => "TypeAlias",
            NodeKind::TypeReference => "TypeReference",
            NodeKind::UnionType => "UnionType",
            NodeKind::IntersectionType => "IntersectionType",
            NodeKind::MappedType => "MappedType",
            NodeKind::TypeParameter => "TypeParameter",
            NodeKind::MethodSignature => "MethodSignature",
            NodeKind::DeclareFunction => "DeclareFunction",
            NodeKind::FunctionType => "FunctionType",
            NodeKind::FunctionTypeParam => "FunctionTypeParam",
            NodeKind::ConditionalType => "ConditionalType",
        }
    }

    /// Kinds that directly own a parameter list and a callable body or
    /// signature. A method definition does not qualify: its parameters live
    /// on the function expression in its `value` slot.
    pub const fn is_function_like(self) -> bool {
        matches!(
            self,
            NodeKind::FunctionDeclaration
                | NodeKind::FunctionExpression
                | NodeKind::ArrowFunctionExpression
                | NodeKind::MethodSignature
                | NodeKind::DeclareFunction
                | NodeKind::FunctionType
        )
    }

    /// Class and interface declarations share the clause handling for
    /// `implements`/`extends`/`mixins` and decorators.
    pub const fn is_class_like(self) -> bool {
        matches!(
            self,
            NodeKind::ClassDeclaration | NodeKind::ClassExpression | NodeKind::InterfaceDeclaration
        )
    }

    /// Markup nodes print their own comments; generic interleaving would
    /// corrupt the element text.
    pub const fn is_markup(self) -> bool {
        matches!(self, NodeKind::JsxElement | NodeKind::JsxFragment)
    }
}
