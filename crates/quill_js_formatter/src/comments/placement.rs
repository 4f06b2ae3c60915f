use quill_js_ast::{Node, NodeKind, Ranged};
use quill_js_trivia::{
    is_line_break, is_suppression_comment, CommentLinePosition, JsWhitespace, SimpleToken,
    SimpleTokenKind, SimpleTokenizer,
};
use quill_source_file::Locator;
use text_size::{TextRange, TextSize};

use crate::comments::locate::DecoratedComment;

/// The resolved attachment of a single comment.
///
/// Handlers return [`CommentPlacement::Default`] to pass the comment on to
/// the next handler; any other variant commits the comment and stops the
/// dispatch.
#[derive(Debug)]
pub(super) enum CommentPlacement<'a> {
    /// Attach as a leading comment of `node`.
    Leading {
        node: &'a Node,
        comment: DecoratedComment<'a>,
    },
    /// Attach as a trailing comment of `node`.
    Trailing {
        node: &'a Node,
        comment: DecoratedComment<'a>,
    },
    /// Attach to `node` without an adjacent child to anchor to. The
    /// optional marker names the clause the comment belongs to, for
    /// syntaxes where the node has more than one dangling position.
    Dangling {
        node: &'a Node,
        comment: DecoratedComment<'a>,
        marker: Option<&'static str>,
    },
    /// The handler made no decision.
    Default(DecoratedComment<'a>),
}

impl<'a> CommentPlacement<'a> {
    pub(super) fn leading(node: &'a Node, comment: DecoratedComment<'a>) -> Self {
        Self::Leading { node, comment }
    }

    pub(super) fn trailing(node: &'a Node, comment: DecoratedComment<'a>) -> Self {
        Self::Trailing { node, comment }
    }

    pub(super) fn dangling(node: &'a Node, comment: DecoratedComment<'a>) -> Self {
        Self::Dangling {
            node,
            comment,
            marker: None,
        }
    }

    fn dangling_with_marker(
        node: &'a Node,
        comment: DecoratedComment<'a>,
        marker: &'static str,
    ) -> Self {
        Self::Dangling {
            node,
            comment,
            marker: Some(marker),
        }
    }
}

/// Shared context for the placement handlers.
pub(super) struct PlacementContext<'a, 'src> {
    locator: &'src Locator<'src>,
    root: &'a Node,
    is_last_comment: bool,
}

impl<'a, 'src> PlacementContext<'a, 'src> {
    pub(super) fn new(
        locator: &'src Locator<'src>,
        root: &'a Node,
        is_last_comment: bool,
    ) -> Self {
        Self {
            locator,
            root,
            is_last_comment,
        }
    }

    fn source(&self) -> &'src str {
        self.locator.contents()
    }

    fn locator(&self) -> &'src Locator<'src> {
        self.locator
    }

    fn root(&self) -> &'a Node {
        self.root
    }

    fn is_last_comment(&self) -> bool {
        self.is_last_comment
    }
}

type Handler = for<'a, 'src> fn(
    DecoratedComment<'a>,
    &PlacementContext<'a, 'src>,
) -> CommentPlacement<'a>;

/// Runs the ordered handler table for the comment's line position. The
/// tables encode precedence: earlier handlers deliberately shadow later,
/// more general ones.
pub(super) fn place_comment<'a>(
    comment: DecoratedComment<'a>,
    context: &PlacementContext<'a, '_>,
) -> CommentPlacement<'a> {
    static OWN_LINE_HANDLERS: &[Handler] = &[
        handle_suppressed_mapped_type_comment,
        handle_last_function_parameter_comment,
        handle_member_expression_comment,
        handle_if_statement_comment,
        handle_while_statement_comment,
        handle_try_statement_comment,
        handle_class_comment,
        handle_import_specifier_comment,
        handle_for_in_of_comment,
        handle_union_type_comment,
        handle_only_comments,
        handle_import_declaration_comment,
        handle_assignment_pattern_comment,
        handle_method_name_comment,
        handle_labeled_statement_comment,
    ];

    static END_OF_LINE_HANDLERS: &[Handler] = &[
        handle_last_function_parameter_comment,
        handle_conditional_expression_comment,
        handle_import_specifier_comment,
        handle_if_statement_comment,
        handle_while_statement_comment,
        handle_try_statement_comment,
        handle_class_comment,
        handle_labeled_statement_comment,
        handle_call_expression_comment,
        handle_property_comment,
        handle_only_comments,
        handle_type_alias_comment,
        handle_variable_declarator_comment,
    ];

    static REMAINING_HANDLERS: &[Handler] = &[
        handle_suppressed_mapped_type_comment,
        handle_if_statement_comment,
        handle_while_statement_comment,
        handle_default_value_comment,
        handle_empty_parens_comment,
        handle_method_name_comment,
        handle_union_type_comment,
        handle_only_comments,
        handle_arrow_params_comment,
        handle_function_name_comment,
        handle_mapped_type_comment,
        handle_break_continue_comment,
        handle_signature_semicolon_comment,
    ];

    let handlers = match comment.line_position() {
        CommentLinePosition::OwnLine => OWN_LINE_HANDLERS,
        CommentLinePosition::EndOfLine => END_OF_LINE_HANDLERS,
        CommentLinePosition::Remaining => REMAINING_HANDLERS,
    };

    let mut comment = comment;
    for handler in handlers {
        comment = match handler(comment, context) {
            CommentPlacement::Default(comment) => comment,
            placement => return placement,
        };
    }
    CommentPlacement::Default(comment)
}

/// Moves a comment inside `block` rather than leaving it leading on the
/// block itself, which would print before the opening brace: it becomes a
/// leading comment of the first non-empty statement, or a dangling comment
/// of the block when there is nothing inside.
fn place_in_block<'a>(block: &'a Node, comment: DecoratedComment<'a>) -> CommentPlacement<'a> {
    match block
        .children()
        .find(|child| !child.kind().is_empty_statement())
    {
        Some(first) => CommentPlacement::leading(first, comment),
        None => CommentPlacement::dangling(block, comment),
    }
}

fn place_in_block_or_leading<'a>(
    node: &'a Node,
    comment: DecoratedComment<'a>,
) -> CommentPlacement<'a> {
    if node.kind().is_block_statement() {
        place_in_block(node, comment)
    } else {
        CommentPlacement::leading(node, comment)
    }
}

fn next_nonspace_token(offset: TextSize, context: &PlacementContext) -> Option<SimpleToken> {
    SimpleTokenizer::starts_at(offset, context.source())
        .skip_trivia()
        .next()
}

/// The first non-whitespace, non-comment token following the comment.
fn next_token_is(
    comment: &DecoratedComment,
    context: &PlacementContext,
    kind: SimpleTokenKind,
) -> bool {
    next_nonspace_token(comment.end(), context).is_some_and(|token| token.kind() == kind)
}

fn is_suppression(comment: &DecoratedComment, context: &PlacementContext) -> bool {
    is_suppression_comment(&context.source()[comment.range()])
}

/// A suppression pragma on a mapped type's key suppresses the whole mapped
/// type:
///
/// ```ts
/// type A = {
///   /* quill-ignore */ [K in keyof T]: T[K];
/// };
/// ```
fn handle_suppressed_mapped_type_comment<'a>(
    mut comment: DecoratedComment<'a>,
    context: &PlacementContext<'a, '_>,
) -> CommentPlacement<'a> {
    if !is_suppression(&comment, context) {
        return CommentPlacement::Default(comment);
    }

    let enclosing = comment.enclosing_node();
    if enclosing.kind().is_mapped_type() {
        if let Some(following) = comment.following_node() {
            if following.kind().is_type_parameter() && following.slot("constraint").is_some() {
                comment.mark_suppression_consumed(enclosing);
                return CommentPlacement::leading(enclosing, comment);
            }
        }
    }

    CommentPlacement::Default(comment)
}

/// Comments in parameter lists and between the parameter list and the body.
///
/// A comment between the last parameter and the closing parenthesis trails
/// that parameter:
///
/// ```js
/// function f(a /* c */) {}
/// ```
///
/// and a comment between the closing parenthesis and the body moves inside
/// the body so it does not print between `)` and `{`:
///
/// ```js
/// function f()
/// // c
/// {}
/// ```
fn handle_last_function_parameter_comment<'a>(
    comment: DecoratedComment<'a>,
    context: &PlacementContext<'a, '_>,
) -> CommentPlacement<'a> {
    let enclosing = comment.enclosing_node();

    // Flow style function types list their parameters without real
    // parenthesis tokens in the tree.
    if let (Some(preceding), Some(following)) =
        (comment.preceding_node(), comment.following_node())
    {
        if preceding.kind().is_function_type_param()
            && enclosing.kind().is_function_type()
            && !following.kind().is_function_type_param()
        {
            return CommentPlacement::trailing(preceding, comment);
        }
    }

    if let Some(preceding) = comment.preceding_node() {
        if matches!(
            preceding.kind(),
            NodeKind::Identifier | NodeKind::AssignmentPattern
        ) && enclosing.kind().is_function_like()
            && next_token_is(&comment, context, SimpleTokenKind::RParen)
        {
            return CommentPlacement::trailing(preceding, comment);
        }
    }

    if enclosing.kind().is_function_declaration() {
        if let Some(following) = comment.following_node() {
            if following.kind().is_block_statement() {
                if let Some(right_paren) = parameters_right_paren(enclosing, context) {
                    if comment.start() > right_paren {
                        return place_in_block(following, comment);
                    }
                }
            }
        }
    }

    CommentPlacement::Default(comment)
}

/// The offset of the closing parenthesis of `function`'s parameter list.
/// The parenthesis is not a node, so it has to be found by scanning past
/// the last parameter (or past the opening parenthesis when the list is
/// empty).
fn parameters_right_paren(function: &Node, context: &PlacementContext) -> Option<TextSize> {
    if let Some(last_parameter) = function.slot_list("params").last() {
        return next_nonspace_token(last_parameter.end(), context).map(|token| token.start());
    }

    let id_end = function.slot("id").map_or(function.start(), Ranged::end);
    let left_paren = next_nonspace_token(id_end, context)?;
    next_nonspace_token(left_paren.end(), context).map(|token| token.start())
}

/// A comment between an object and its property name attaches to the whole
/// member access, not the property identifier:
///
/// ```js
/// obj
///   // c
///   .prop;
/// ```
fn handle_member_expression_comment<'a>(
    comment: DecoratedComment<'a>,
    _context: &PlacementContext<'a, '_>,
) -> CommentPlacement<'a> {
    let enclosing = comment.enclosing_node();
    if enclosing.kind().is_member_expression()
        && comment
            .following_node()
            .is_some_and(|following| following.kind().is_identifier())
    {
        return CommentPlacement::leading(enclosing, comment);
    }

    CommentPlacement::Default(comment)
}

/// Comments inside an `if` statement's clause structure.
///
/// A comment before the `else` keyword would naively lead the alternate
/// block and print before `else`; instead it trails the consequent:
///
/// ```js
/// if (a) { x(); }
/// // c
/// else { y(); }
/// ```
///
/// A comment before the closing parenthesis of the condition trails the
/// condition expression; the tree alone cannot express that position, so
/// the next character decides:
///
/// ```js
/// if (a /* c */) {}
/// ```
fn handle_if_statement_comment<'a>(
    comment: DecoratedComment<'a>,
    context: &PlacementContext<'a, '_>,
) -> CommentPlacement<'a> {
    let enclosing = comment.enclosing_node();
    if !enclosing.kind().is_if_statement() {
        return CommentPlacement::Default(comment);
    }
    let Some(following) = comment.following_node() else {
        return CommentPlacement::Default(comment);
    };

    if next_token_is(&comment, context, SimpleTokenKind::RParen) {
        if let Some(preceding) = comment.preceding_node() {
            return CommentPlacement::trailing(preceding, comment);
        }
    }

    // Between the consequent and the `else` keyword.
    if let Some(preceding) = comment.preceding_node() {
        if enclosing.slot_is("consequent", preceding) && enclosing.slot_is("alternate", following)
        {
            return if preceding.kind().is_block_statement() {
                CommentPlacement::trailing(preceding, comment)
            } else {
                CommentPlacement::dangling(enclosing, comment)
            };
        }
    }

    if following.kind().is_block_statement() {
        return place_in_block(following, comment);
    }

    // `else if`: the comment belongs to the nested consequent.
    if following.kind().is_if_statement() {
        if let Some(consequent) = following.slot("consequent") {
            return place_in_block_or_leading(consequent, comment);
        }
    }

    // After the condition parenthesis, before a brace-less consequent:
    // `if (a) /* c */ true;`
    if enclosing.slot_is("consequent", following) {
        return CommentPlacement::leading(following, comment);
    }

    CommentPlacement::Default(comment)
}

/// Same clause handling as for `if`, minus the alternate.
fn handle_while_statement_comment<'a>(
    comment: DecoratedComment<'a>,
    context: &PlacementContext<'a, '_>,
) -> CommentPlacement<'a> {
    let enclosing = comment.enclosing_node();
    if !enclosing.kind().is_while_statement() {
        return CommentPlacement::Default(comment);
    }
    let Some(following) = comment.following_node() else {
        return CommentPlacement::Default(comment);
    };

    if next_token_is(&comment, context, SimpleTokenKind::RParen) {
        if let Some(preceding) = comment.preceding_node() {
            return CommentPlacement::trailing(preceding, comment);
        }
    }

    if following.kind().is_block_statement() {
        return place_in_block(following, comment);
    }

    if enclosing.slot_is("body", following) {
        return CommentPlacement::leading(following, comment);
    }

    CommentPlacement::Default(comment)
}

/// Comments between the clauses of a `try` statement move inside the
/// adjacent block so they do not print before `catch` or `finally`.
fn handle_try_statement_comment<'a>(
    comment: DecoratedComment<'a>,
    _context: &PlacementContext<'a, '_>,
) -> CommentPlacement<'a> {
    let enclosing = comment.enclosing_node();
    if !matches!(
        enclosing.kind(),
        NodeKind::TryStatement | NodeKind::CatchClause
    ) {
        return CommentPlacement::Default(comment);
    }
    let Some(following) = comment.following_node() else {
        return CommentPlacement::Default(comment);
    };

    if enclosing.kind().is_catch_clause() {
        if let Some(preceding) = comment.preceding_node() {
            return CommentPlacement::trailing(preceding, comment);
        }
    }

    if following.kind().is_block_statement() {
        return place_in_block(following, comment);
    }

    if following.kind().is_try_statement() {
        if let Some(finalizer) = following.slot("finalizer") {
            return place_in_block_or_leading(finalizer, comment);
        }
    }

    if following.kind().is_catch_clause() {
        if let Some(body) = following.slot("body") {
            return place_in_block_or_leading(body, comment);
        }
    }

    CommentPlacement::Default(comment)
}

/// Comments between the parts of a class or interface header.
///
/// Leading comments on `implements`/`extends`/`mixins` clauses would print
/// after the keyword; they either trail the name, type parameters, or
/// superclass when immediately following one of those, or become a dangling
/// comment tagged with the clause name.
fn handle_class_comment<'a>(
    comment: DecoratedComment<'a>,
    _context: &PlacementContext<'a, '_>,
) -> CommentPlacement<'a> {
    let enclosing = comment.enclosing_node();
    if !enclosing.kind().is_class_like() {
        return CommentPlacement::Default(comment);
    }

    if let Some(last_decorator) = enclosing.slot_list("decorators").last() {
        if !comment
            .following_node()
            .is_some_and(|following| following.kind().is_decorator())
        {
            return CommentPlacement::trailing(last_decorator, comment);
        }
    }

    let Some(following) = comment.following_node() else {
        return CommentPlacement::Default(comment);
    };

    if enclosing.slot_is("body", following) {
        return place_in_block(following, comment);
    }

    for clause in ["implements", "extends", "mixins"] {
        if !enclosing.slot_is(clause, following) {
            continue;
        }
        if let Some(preceding) = comment.preceding_node() {
            if enclosing.slot_is("id", preceding)
                || enclosing.slot_is("typeParameters", preceding)
                || enclosing.slot_is("superClass", preceding)
            {
                return CommentPlacement::trailing(preceding, comment);
            }
        }
        return CommentPlacement::dangling_with_marker(enclosing, comment, clause);
    }

    CommentPlacement::Default(comment)
}

fn handle_import_specifier_comment<'a>(
    comment: DecoratedComment<'a>,
    _context: &PlacementContext<'a, '_>,
) -> CommentPlacement<'a> {
    let enclosing = comment.enclosing_node();
    if enclosing.kind().is_import_specifier() {
        return CommentPlacement::leading(enclosing, comment);
    }
    CommentPlacement::Default(comment)
}

/// `for...in` and `for...of` heads have no safe position between their
/// parts; the comment leads the whole statement.
fn handle_for_in_of_comment<'a>(
    comment: DecoratedComment<'a>,
    _context: &PlacementContext<'a, '_>,
) -> CommentPlacement<'a> {
    let enclosing = comment.enclosing_node();
    if matches!(
        enclosing.kind(),
        NodeKind::ForInStatement | NodeKind::ForOfStatement
    ) {
        return CommentPlacement::leading(enclosing, comment);
    }
    CommentPlacement::Default(comment)
}

/// Comments between union members trail the preceding member; a comment
/// before the whole union leads its first member:
///
/// ```ts
/// type T = /* c */ A | B;
/// ```
///
/// A suppression pragma in either position flags the member it targets and
/// is consumed.
fn handle_union_type_comment<'a>(
    mut comment: DecoratedComment<'a>,
    context: &PlacementContext<'a, '_>,
) -> CommentPlacement<'a> {
    let enclosing = comment.enclosing_node();
    if enclosing.kind().is_union_type() {
        if is_suppression(&comment, context) {
            if let Some(following) = comment.following_node() {
                comment.mark_suppression_consumed(following);
            }
        }
        if let Some(preceding) = comment.preceding_node() {
            return CommentPlacement::trailing(preceding, comment);
        }
        return CommentPlacement::Default(comment);
    }

    if let Some(following) = comment.following_node() {
        if following.kind().is_union_type() {
            if let Some(first_member) = following.slot("types") {
                if is_suppression(&comment, context) {
                    comment.mark_suppression_consumed(first_member);
                }
                return CommentPlacement::leading(first_member, comment);
            }
        }
    }

    CommentPlacement::Default(comment)
}

/// A file that contains nothing but comments still has to keep them: they
/// lead the empty program, except the last one, which dangles.
fn handle_only_comments<'a>(
    comment: DecoratedComment<'a>,
    context: &PlacementContext<'a, '_>,
) -> CommentPlacement<'a> {
    let program = if context.root().children().next().is_none() {
        Some(context.root())
    } else {
        let enclosing = comment.enclosing_node();
        (enclosing.kind().is_program() && enclosing.children().next().is_none())
            .then_some(enclosing)
    };

    match program {
        Some(program) if context.is_last_comment() => CommentPlacement::dangling(program, comment),
        Some(program) => CommentPlacement::leading(program, comment),
        None => CommentPlacement::Default(comment),
    }
}

/// A comment on its own after an import specifier trails that specifier
/// rather than leading the next one.
fn handle_import_declaration_comment<'a>(
    comment: DecoratedComment<'a>,
    context: &PlacementContext<'a, '_>,
) -> CommentPlacement<'a> {
    let enclosing = comment.enclosing_node();
    if let Some(preceding) = comment.preceding_node() {
        if preceding.kind().is_import_specifier()
            && enclosing.kind().is_import_declaration()
            && followed_by_line_break(&comment, context)
        {
            return CommentPlacement::trailing(preceding, comment);
        }
    }
    CommentPlacement::Default(comment)
}

fn followed_by_line_break(comment: &DecoratedComment, context: &PlacementContext) -> bool {
    context
        .locator()
        .after(comment.end())
        .trim_whitespace_start()
        .starts_with(is_line_break)
}

fn handle_assignment_pattern_comment<'a>(
    comment: DecoratedComment<'a>,
    _context: &PlacementContext<'a, '_>,
) -> CommentPlacement<'a> {
    let enclosing = comment.enclosing_node();
    if enclosing.kind().is_assignment_pattern() {
        return CommentPlacement::leading(enclosing, comment);
    }
    CommentPlacement::Default(comment)
}

/// `{ fn /* c */ () {} }`: the comment trails the method's name. The next
/// character after the name distinguishes this from `{ key: /* c */ value }`,
/// where the comment belongs to the value.
fn handle_method_name_comment<'a>(
    comment: DecoratedComment<'a>,
    context: &PlacementContext<'a, '_>,
) -> CommentPlacement<'a> {
    let enclosing = comment.enclosing_node();
    let Some(preceding) = comment.preceding_node() else {
        return CommentPlacement::Default(comment);
    };

    if enclosing.kind().is_property()
        && preceding.kind().is_identifier()
        && enclosing.slot_is("key", preceding)
        && !next_nonspace_token(preceding.end(), context)
            .is_some_and(|token| token.kind() == SimpleTokenKind::Colon)
    {
        return CommentPlacement::trailing(preceding, comment);
    }

    // A comment between a decorator and the decorated member trails the
    // decorator, not the member.
    if preceding.kind().is_decorator()
        && matches!(
            enclosing.kind(),
            NodeKind::MethodDefinition | NodeKind::PropertyDefinition
        )
    {
        return CommentPlacement::trailing(preceding, comment);
    }

    CommentPlacement::Default(comment)
}

fn handle_labeled_statement_comment<'a>(
    comment: DecoratedComment<'a>,
    _context: &PlacementContext<'a, '_>,
) -> CommentPlacement<'a> {
    let enclosing = comment.enclosing_node();
    if enclosing.kind().is_labeled_statement() {
        return CommentPlacement::leading(enclosing, comment);
    }
    CommentPlacement::Default(comment)
}

/// A comment on the line of a `?` or `:` branch leads that branch, but only
/// when it does not share a line with the preceding operand — in that case
/// it is an ordinary trailing comment:
///
/// ```js
/// a
///   ? // leads b
///     b
///   : c;
/// ```
fn handle_conditional_expression_comment<'a>(
    comment: DecoratedComment<'a>,
    context: &PlacementContext<'a, '_>,
) -> CommentPlacement<'a> {
    let same_line_as_preceding = comment.preceding_node().is_some_and(|preceding| {
        !context
            .locator()
            .contains_line_break(TextRange::new(preceding.end(), comment.start()))
    });

    let enclosing = comment.enclosing_node();
    if !same_line_as_preceding
        && matches!(
            enclosing.kind(),
            NodeKind::ConditionalExpression | NodeKind::ConditionalType
        )
    {
        if let Some(following) = comment.following_node() {
            return CommentPlacement::leading(following, comment);
        }
    }

    CommentPlacement::Default(comment)
}

/// A comment right after a call's callee leads the first argument:
///
/// ```js
/// f( // c
///   a,
/// );
/// ```
fn handle_call_expression_comment<'a>(
    comment: DecoratedComment<'a>,
    _context: &PlacementContext<'a, '_>,
) -> CommentPlacement<'a> {
    let enclosing = comment.enclosing_node();
    if enclosing.kind().is_call_expression() {
        if let Some(preceding) = comment.preceding_node() {
            if enclosing.slot_is("callee", preceding) {
                if let Some(first_argument) = enclosing.slot("arguments") {
                    return CommentPlacement::leading(first_argument, comment);
                }
            }
        }
    }
    CommentPlacement::Default(comment)
}

fn handle_property_comment<'a>(
    comment: DecoratedComment<'a>,
    _context: &PlacementContext<'a, '_>,
) -> CommentPlacement<'a> {
    let enclosing = comment.enclosing_node();
    if enclosing.kind().is_property() {
        return CommentPlacement::leading(enclosing, comment);
    }
    CommentPlacement::Default(comment)
}

fn handle_type_alias_comment<'a>(
    comment: DecoratedComment<'a>,
    _context: &PlacementContext<'a, '_>,
) -> CommentPlacement<'a> {
    let enclosing = comment.enclosing_node();
    if enclosing.kind().is_type_alias() {
        return CommentPlacement::leading(enclosing, comment);
    }
    CommentPlacement::Default(comment)
}

/// A comment between `=` and a multi-line initializer leads the value so it
/// stays with the object or array it describes:
///
/// ```js
/// const a = // c
///   { b: 1 };
/// ```
fn handle_variable_declarator_comment<'a>(
    comment: DecoratedComment<'a>,
    _context: &PlacementContext<'a, '_>,
) -> CommentPlacement<'a> {
    let enclosing = comment.enclosing_node();
    if matches!(
        enclosing.kind(),
        NodeKind::VariableDeclarator | NodeKind::AssignmentExpression
    ) {
        if let Some(following) = comment.following_node() {
            if matches!(
                following.kind(),
                NodeKind::ObjectExpression
                    | NodeKind::ArrayExpression
                    | NodeKind::TemplateLiteral
                    | NodeKind::TaggedTemplateExpression
            ) || comment.kind().is_block()
            {
                return CommentPlacement::leading(following, comment);
            }
        }
    }
    CommentPlacement::Default(comment)
}

/// `({ a /* c */ = 1 })`: the comment sits between a shorthand binding and
/// its default value and trails the binding.
fn handle_default_value_comment<'a>(
    comment: DecoratedComment<'a>,
    _context: &PlacementContext<'a, '_>,
) -> CommentPlacement<'a> {
    let enclosing = comment.enclosing_node();
    if enclosing.kind().is_assignment_pattern() {
        if let Some(preceding) = comment.preceding_node() {
            if enclosing.slot_is("left", preceding) {
                return CommentPlacement::trailing(preceding, comment);
            }
        }
    }
    CommentPlacement::Default(comment)
}

/// A comment in an empty parameter or argument list has no node to anchor
/// to and dangles on the function or call:
///
/// ```js
/// function f(/* c */) {}
/// ```
fn handle_empty_parens_comment<'a>(
    comment: DecoratedComment<'a>,
    context: &PlacementContext<'a, '_>,
) -> CommentPlacement<'a> {
    if !next_token_is(&comment, context, SimpleTokenKind::RParen) {
        return CommentPlacement::Default(comment);
    }

    let enclosing = comment.enclosing_node();

    if enclosing.kind().is_function_like() && enclosing.slot("params").is_none() {
        return CommentPlacement::dangling(enclosing, comment);
    }

    if matches!(
        enclosing.kind(),
        NodeKind::CallExpression | NodeKind::NewExpression
    ) && enclosing.slot("arguments").is_none()
    {
        return CommentPlacement::dangling(enclosing, comment);
    }

    if enclosing.kind().is_method_definition() {
        if let Some(value) = enclosing.slot("value") {
            if value.slot("params").is_none() {
                return CommentPlacement::dangling(value, comment);
            }
        }
    }

    CommentPlacement::Default(comment)
}

/// `(a) /* c */ => a`: between an arrow's parameters and the `=>` there is
/// no node to attach to; the comment dangles on the arrow function.
fn handle_arrow_params_comment<'a>(
    comment: DecoratedComment<'a>,
    context: &PlacementContext<'a, '_>,
) -> CommentPlacement<'a> {
    let enclosing = comment.enclosing_node();
    if enclosing.kind().is_arrow_function_expression()
        && next_token_is(&comment, context, SimpleTokenKind::FatArrow)
    {
        return CommentPlacement::dangling(enclosing, comment);
    }
    CommentPlacement::Default(comment)
}

/// A comment just before a function's opening parenthesis trails whatever
/// precedes it (usually the function name):
///
/// ```js
/// function f /* c */ (a) {}
/// ```
fn handle_function_name_comment<'a>(
    comment: DecoratedComment<'a>,
    context: &PlacementContext<'a, '_>,
) -> CommentPlacement<'a> {
    if !next_token_is(&comment, context, SimpleTokenKind::LParen) {
        return CommentPlacement::Default(comment);
    }

    let enclosing = comment.enclosing_node();
    if let Some(preceding) = comment.preceding_node() {
        if matches!(
            enclosing.kind(),
            NodeKind::FunctionDeclaration
                | NodeKind::FunctionExpression
                | NodeKind::MethodDefinition
        ) {
            return CommentPlacement::trailing(preceding, comment);
        }
    }
    CommentPlacement::Default(comment)
}

/// Comments inside a mapped type attach around its type parameter: before
/// the parameter name they lead the name, after the constraint they trail
/// it.
fn handle_mapped_type_comment<'a>(
    comment: DecoratedComment<'a>,
    _context: &PlacementContext<'a, '_>,
) -> CommentPlacement<'a> {
    let enclosing = comment.enclosing_node();
    if !enclosing.kind().is_mapped_type() {
        return CommentPlacement::Default(comment);
    }

    if let Some(following) = comment.following_node() {
        if following.kind().is_type_parameter() {
            if let Some(name) = following.slot("name") {
                return CommentPlacement::leading(name, comment);
            }
        }
    }

    if let Some(preceding) = comment.preceding_node() {
        if preceding.kind().is_type_parameter() {
            if let Some(constraint) = preceding.slot("constraint") {
                return CommentPlacement::trailing(constraint, comment);
            }
        }
    }

    CommentPlacement::Default(comment)
}

/// `break /* c */;` and `continue /* c */;` without a label: the comment
/// trails the statement itself.
fn handle_break_continue_comment<'a>(
    comment: DecoratedComment<'a>,
    _context: &PlacementContext<'a, '_>,
) -> CommentPlacement<'a> {
    let enclosing = comment.enclosing_node();
    if matches!(
        enclosing.kind(),
        NodeKind::BreakStatement | NodeKind::ContinueStatement
    ) && enclosing.slot("label").is_none()
    {
        return CommentPlacement::trailing(enclosing, comment);
    }
    CommentPlacement::Default(comment)
}

/// A comment before the terminating semicolon of a bodyless signature
/// trails the signature:
///
/// ```ts
/// declare function f(a: string): void /* c */;
/// ```
fn handle_signature_semicolon_comment<'a>(
    comment: DecoratedComment<'a>,
    context: &PlacementContext<'a, '_>,
) -> CommentPlacement<'a> {
    let enclosing = comment.enclosing_node();
    if comment.following_node().is_none()
        && matches!(
            enclosing.kind(),
            NodeKind::MethodSignature | NodeKind::DeclareFunction
        )
        && next_token_is(&comment, context, SimpleTokenKind::Semi)
    {
        return CommentPlacement::trailing(enclosing, comment);
    }
    CommentPlacement::Default(comment)
}
