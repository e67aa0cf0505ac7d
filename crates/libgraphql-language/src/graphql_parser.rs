//! Recursive descent parser for GraphQL documents.
//!
//! This module provides [`GraphQLParser`], which pulls tokens on demand from
//! a [`GraphQLLexer`] and builds the AST, along with the [`parse()`],
//! [`parse_value()`] and [`parse_type()`] entry points.
//!
//! # Architecture
//!
//! Every grammar rule has a corresponding `parse_*` method returning
//! `Result<_, GraphQLSyntaxError>`. The first error aborts the whole parse;
//! there is no recovery and no partial AST.
//!
//! Grammar nesting is handled with native recursion, so the depth of a
//! document is bounded by the call stack. Practical queries nest far less
//! deeply than that.
//!
//! # Descriptions
//!
//! A block of `#` comments directly above a type-system definition (no blank
//! line in between, and not trailing another token on its line) becomes that
//! definition's `description`, with the common leading indentation removed.

use crate::ast::*;
use crate::token::GraphQLTokenKind;
use crate::token::TokenIndex;
use crate::GraphQLErrorNote;
use crate::GraphQLLexer;
use crate::GraphQLSyntaxError;
use crate::GraphQLSyntaxErrorKind;
use crate::Location;
use crate::ParseOptions;
use crate::Source;
use std::sync::Arc;

type ParseResult<T> = Result<T, GraphQLSyntaxError>;

// =============================================================================
// Entry points
// =============================================================================

/// Parses a complete GraphQL document.
///
/// ```rust
/// use libgraphql_language::parse;
/// use libgraphql_language::ParseOptions;
///
/// let doc = parse("type Query { hello: String }", ParseOptions::default()).unwrap();
/// assert_eq!(doc.definitions.len(), 1);
/// ```
pub fn parse(
    source: impl Into<Source>,
    options: ParseOptions,
) -> Result<Document, GraphQLSyntaxError> {
    GraphQLParser::new(Arc::new(source.into()), options).parse_document()
}

/// Parses source text consisting of exactly one value literal, e.g.
/// `[1, "two", { three: 3 }]`. Variables are permitted.
pub fn parse_value(
    source: impl Into<Source>,
    options: ParseOptions,
) -> Result<Value, GraphQLSyntaxError> {
    GraphQLParser::new(Arc::new(source.into()), options).parse_value()
}

/// Parses source text consisting of exactly one type reference, e.g.
/// `[String!]!`.
pub fn parse_type(
    source: impl Into<Source>,
    options: ParseOptions,
) -> Result<Type, GraphQLSyntaxError> {
    GraphQLParser::new(Arc::new(source.into()), options).parse_type()
}

// =============================================================================
// Main parser struct
// =============================================================================

/// A recursive descent parser for GraphQL documents.
///
/// A parser owns one lexer over one [`Source`] and is consumed by the parse.
/// Parse independent inputs with independent parsers.
///
/// # Usage
///
/// ```rust
/// use libgraphql_language::ast::Definition;
/// use libgraphql_language::GraphQLParser;
/// use libgraphql_language::ParseOptions;
/// use libgraphql_language::Source;
/// use std::sync::Arc;
///
/// let source = Arc::new(Source::with_name("query Q { a }", "q.graphql"));
/// let doc = GraphQLParser::new(source, ParseOptions::default())
///     .parse_document()
///     .unwrap();
/// assert!(matches!(doc.definitions[0], Definition::Operation(_)));
/// ```
pub struct GraphQLParser {
    lexer: GraphQLLexer,
    options: ParseOptions,
}

impl GraphQLParser {
    pub fn new(source: Arc<Source>, options: ParseOptions) -> Self {
        Self {
            lexer: GraphQLLexer::new(source),
            options,
        }
    }

    /// Parses a document: one or more definitions followed by the end of
    /// input.
    pub fn parse_document(mut self) -> ParseResult<Document> {
        log::debug!(
            "parsing document `{}` ({} codepoints)",
            self.lexer.source().name(),
            self.lexer.source().len(),
        );
        let start = self.lexer.token_index();
        self.expect(GraphQLTokenKind::Sof)?;
        let mut definitions = vec![];
        loop {
            definitions.push(self.parse_definition()?);
            if self.skip(GraphQLTokenKind::Eof)? {
                break;
            }
        }
        log::debug!(
            "parsed {} definition(s) from `{}`",
            definitions.len(),
            self.lexer.source().name(),
        );
        Ok(Document {
            loc: self.loc(start),
            definitions: definitions.into(),
        })
    }

    /// Parses input consisting of exactly one value literal.
    pub fn parse_value(mut self) -> ParseResult<Value> {
        self.expect(GraphQLTokenKind::Sof)?;
        let value = self.parse_value_literal(false)?;
        self.expect(GraphQLTokenKind::Eof)?;
        Ok(value)
    }

    /// Parses input consisting of exactly one type reference.
    pub fn parse_type(mut self) -> ParseResult<Type> {
        self.expect(GraphQLTokenKind::Sof)?;
        let ty = self.parse_type_reference()?;
        self.expect(GraphQLTokenKind::Eof)?;
        Ok(ty)
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    fn peek(&self, kind: GraphQLTokenKind) -> bool {
        self.lexer.token().kind == kind
    }

    /// Returns `true` if the current token is the name `keyword`.
    fn peek_keyword(&self, keyword: &str) -> bool {
        let token = self.lexer.token();
        token.kind == GraphQLTokenKind::Name
            && token.value.as_deref() == Some(keyword)
    }

    /// The value of the current token if it is a `Name`.
    fn current_name(&self) -> Option<String> {
        let token = self.lexer.token();
        if token.kind == GraphQLTokenKind::Name {
            token.value.clone()
        } else {
            None
        }
    }

    fn advance(&mut self) -> ParseResult<()> {
        self.lexer.advance().map(|_| ())
    }

    /// Consumes the current token if it is of the given kind.
    fn skip(&mut self, kind: GraphQLTokenKind) -> ParseResult<bool> {
        if self.peek(kind) {
            self.advance()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consumes a token of the given kind and returns its index, or fails
    /// with `Expected <kind>, found <token>`.
    fn expect(&mut self, kind: GraphQLTokenKind) -> ParseResult<TokenIndex> {
        if self.peek(kind) {
            let index = self.lexer.token_index();
            self.advance()?;
            return Ok(index);
        }
        let found = self.lexer.token().description();
        Err(self.error_at_current(
            format!("Expected {kind}, found {found}"),
            GraphQLSyntaxErrorKind::UnexpectedToken {
                expected: kind.to_string(),
                found,
            },
        ))
    }

    /// Consumes the keyword `keyword`, or fails with
    /// `Expected "<keyword>", found <token>`.
    fn expect_keyword(&mut self, keyword: &str) -> ParseResult<()> {
        if self.peek_keyword(keyword) {
            return self.advance();
        }
        let found = self.lexer.token().description();
        Err(self.error_at_current(
            format!("Expected \"{keyword}\", found {found}"),
            GraphQLSyntaxErrorKind::UnexpectedToken {
                expected: format!("\"{keyword}\""),
                found,
            },
        ))
    }

    /// An `Unexpected <token>` error for the current token.
    fn unexpected(&self) -> GraphQLSyntaxError {
        self.unexpected_at(self.lexer.token_index())
    }

    fn unexpected_at(&self, index: TokenIndex) -> GraphQLSyntaxError {
        let (position, found) = match self.lexer.token_at(index) {
            Some(token) => (token.start, token.description()),
            None => (self.lexer.token().start, self.lexer.token().description()),
        };
        GraphQLSyntaxError::new(
            self.lexer.source().clone(),
            position,
            format!("Unexpected {found}"),
            GraphQLSyntaxErrorKind::Unexpected { found },
        )
    }

    fn error_at_current(
        &self,
        description: String,
        kind: GraphQLSyntaxErrorKind,
    ) -> GraphQLSyntaxError {
        GraphQLSyntaxError::new(
            self.lexer.source().clone(),
            self.lexer.token().start,
            description,
            kind,
        )
    }

    /// Parses `open item+ close`: a non-empty list.
    fn many<T>(
        &mut self,
        open: GraphQLTokenKind,
        mut parse_item: impl FnMut(&mut Self) -> ParseResult<T>,
        close: GraphQLTokenKind,
    ) -> ParseResult<NodeList<T>> {
        self.expect(open)?;
        let mut items = vec![parse_item(self)?];
        while !self.skip(close)? {
            items.push(parse_item(self)?);
        }
        Ok(items.into())
    }

    /// Parses `open item* close`: a possibly-empty list.
    fn any<T>(
        &mut self,
        open: GraphQLTokenKind,
        mut parse_item: impl FnMut(&mut Self) -> ParseResult<T>,
        close: GraphQLTokenKind,
    ) -> ParseResult<NodeList<T>> {
        self.expect(open)?;
        let mut items = vec![];
        while !self.skip(close)? {
            items.push(parse_item(self)?);
        }
        Ok(items.into())
    }

    /// The location spanning from the token at `start` to the most recently
    /// consumed token, unless locations are disabled.
    fn loc(&self, start: TokenIndex) -> Option<Location> {
        if self.options.no_location {
            return None;
        }
        let start_token = self.lexer.token_at(start)?;
        Some(Location::from_tokens(
            start_token,
            self.lexer.last_token(),
            self.lexer.source().clone(),
        ))
    }

    /// Collects the block of comments immediately preceding the token at
    /// `start` into a description.
    ///
    /// Walks backward while each token is a comment that sits alone on its
    /// line and is on the line directly above the token after it.
    fn description(&self, start: TokenIndex) -> Option<String> {
        let mut lines = vec![];
        let mut cursor = self.lexer.token_at(start)?.prev;
        while let Some(index) = cursor {
            let Some(token) = self.lexer.token_at(index) else {
                break;
            };
            let (Some(next), Some(prev)) = (
                token.next.and_then(|i| self.lexer.token_at(i)),
                token.prev.and_then(|i| self.lexer.token_at(i)),
            ) else {
                break;
            };
            if token.kind != GraphQLTokenKind::Comment
                || token.line + 1 != next.line
                || token.line == prev.line {
                break;
            }
            lines.push(token.value.as_deref().unwrap_or_default());
            cursor = token.prev;
        }
        lines.reverse();
        dedent_description(&lines)
    }

    // =========================================================================
    // Definitions
    // =========================================================================

    fn parse_definition(&mut self) -> ParseResult<Definition> {
        if self.peek(GraphQLTokenKind::CurlyBraceOpen) {
            return Ok(self.parse_operation_definition()?.into());
        }
        match self.current_name().as_deref() {
            Some("query" | "mutation" | "subscription") => {
                Ok(self.parse_operation_definition()?.into())
            },
            Some("fragment") => Ok(self.parse_fragment_definition()?.into()),
            Some(
                "schema" | "scalar" | "type" | "interface" | "union" | "enum"
                | "input" | "extend" | "directive"
            ) => self.parse_type_system_definition(),
            _ => Err(self.unexpected()),
        }
    }

    // =========================================================================
    // Operations
    // =========================================================================

    fn parse_operation_definition(&mut self) -> ParseResult<Arc<OperationDefinition>> {
        let start = self.lexer.token_index();
        if self.peek(GraphQLTokenKind::CurlyBraceOpen) {
            let selection_set = self.parse_selection_set()?;
            return Ok(Arc::new(OperationDefinition {
                operation: OperationType::Query,
                name: None,
                variable_definitions: NodeList::empty(),
                directives: NodeList::empty(),
                selection_set,
                loc: self.loc(start),
            }));
        }
        let operation = self.parse_operation_type()?;
        let name = if self.peek(GraphQLTokenKind::Name) {
            Some(self.parse_name()?)
        } else {
            None
        };
        let variable_definitions = self.parse_variable_definitions()?;
        let directives = self.parse_directives()?;
        let selection_set = self.parse_selection_set()?;
        Ok(Arc::new(OperationDefinition {
            operation,
            name,
            variable_definitions,
            directives,
            selection_set,
            loc: self.loc(start),
        }))
    }

    fn parse_operation_type(&mut self) -> ParseResult<OperationType> {
        let index = self.expect(GraphQLTokenKind::Name)?;
        let keyword = self
            .lexer
            .token_at(index)
            .and_then(|token| token.value.as_deref())
            .and_then(OperationType::from_keyword);
        keyword.ok_or_else(|| self.unexpected_at(index))
    }

    fn parse_variable_definitions(
        &mut self,
    ) -> ParseResult<NodeList<Arc<VariableDefinition>>> {
        if !self.peek(GraphQLTokenKind::ParenOpen) {
            return Ok(NodeList::empty());
        }
        self.many(
            GraphQLTokenKind::ParenOpen,
            Self::parse_variable_definition,
            GraphQLTokenKind::ParenClose,
        )
    }

    fn parse_variable_definition(&mut self) -> ParseResult<Arc<VariableDefinition>> {
        let start = self.lexer.token_index();
        let variable = self.parse_variable()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let ty = self.parse_type_reference()?;
        let default_value = if self.skip(GraphQLTokenKind::Equals)? {
            Some(self.parse_value_literal(true)?)
        } else {
            None
        };
        Ok(Arc::new(VariableDefinition {
            variable,
            ty,
            default_value,
            loc: self.loc(start),
        }))
    }

    fn parse_variable(&mut self) -> ParseResult<Arc<Variable>> {
        let start = self.lexer.token_index();
        self.expect(GraphQLTokenKind::Dollar)?;
        let name = self.parse_name()?;
        Ok(Arc::new(Variable {
            name,
            loc: self.loc(start),
        }))
    }

    // =========================================================================
    // Selections
    // =========================================================================

    fn parse_selection_set(&mut self) -> ParseResult<Arc<SelectionSet>> {
        let start = self.lexer.token_index();
        let selections = self.many(
            GraphQLTokenKind::CurlyBraceOpen,
            Self::parse_selection,
            GraphQLTokenKind::CurlyBraceClose,
        )?;
        Ok(Arc::new(SelectionSet {
            selections,
            loc: self.loc(start),
        }))
    }

    fn parse_selection(&mut self) -> ParseResult<Selection> {
        if self.peek(GraphQLTokenKind::Ellipsis) {
            self.parse_fragment()
        } else {
            Ok(self.parse_field()?.into())
        }
    }

    fn parse_field(&mut self) -> ParseResult<Arc<Field>> {
        let start = self.lexer.token_index();
        let name_or_alias = self.parse_name()?;
        let (alias, name) = if self.skip(GraphQLTokenKind::Colon)? {
            (Some(name_or_alias), self.parse_name()?)
        } else {
            (None, name_or_alias)
        };
        let arguments = self.parse_arguments()?;
        let directives = self.parse_directives()?;
        let selection_set = if self.peek(GraphQLTokenKind::CurlyBraceOpen) {
            Some(self.parse_selection_set()?)
        } else {
            None
        };
        Ok(Arc::new(Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
            loc: self.loc(start),
        }))
    }

    fn parse_arguments(&mut self) -> ParseResult<NodeList<Arc<Argument>>> {
        if !self.peek(GraphQLTokenKind::ParenOpen) {
            return Ok(NodeList::empty());
        }
        self.many(
            GraphQLTokenKind::ParenOpen,
            Self::parse_argument,
            GraphQLTokenKind::ParenClose,
        )
    }

    fn parse_argument(&mut self) -> ParseResult<Arc<Argument>> {
        let start = self.lexer.token_index();
        let name = self.parse_name()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let value = self.parse_value_literal(false)?;
        Ok(Arc::new(Argument {
            name,
            value,
            loc: self.loc(start),
        }))
    }

    // =========================================================================
    // Fragments
    // =========================================================================

    /// Parses a fragment spread or an inline fragment, both of which start
    /// with `...`.
    fn parse_fragment(&mut self) -> ParseResult<Selection> {
        let start = self.lexer.token_index();
        self.expect(GraphQLTokenKind::Ellipsis)?;
        if self.peek(GraphQLTokenKind::Name) && !self.peek_keyword("on") {
            let name = self.parse_fragment_name()?;
            let directives = self.parse_directives()?;
            return Ok(Selection::FragmentSpread(Arc::new(FragmentSpread {
                name,
                directives,
                loc: self.loc(start),
            })));
        }
        let type_condition = if self.peek_keyword("on") {
            self.advance()?;
            Some(self.parse_named_type()?)
        } else {
            None
        };
        let directives = self.parse_directives()?;
        let selection_set = self.parse_selection_set()?;
        Ok(Selection::InlineFragment(Arc::new(InlineFragment {
            type_condition,
            directives,
            selection_set,
            loc: self.loc(start),
        })))
    }

    fn parse_fragment_definition(&mut self) -> ParseResult<Arc<FragmentDefinition>> {
        let start = self.lexer.token_index();
        self.expect_keyword("fragment")?;
        let name = self.parse_fragment_name()?;
        self.expect_keyword("on")?;
        let type_condition = self.parse_named_type()?;
        let directives = self.parse_directives()?;
        let selection_set = self.parse_selection_set()?;
        Ok(Arc::new(FragmentDefinition {
            name,
            type_condition,
            directives,
            selection_set,
            loc: self.loc(start),
        }))
    }

    /// A fragment name is any name except `on`.
    fn parse_fragment_name(&mut self) -> ParseResult<Arc<Name>> {
        if self.peek_keyword("on") {
            let mut error = self.unexpected();
            error.add_note(GraphQLErrorNote::general(
                "`on` is reserved for type conditions and cannot name a fragment.",
            ));
            return Err(error);
        }
        self.parse_name()
    }

    // =========================================================================
    // Values
    // =========================================================================

    /// Parses a value literal. In a constant context (`is_const`), variables
    /// are rejected anywhere in the value, including inside lists and
    /// objects.
    fn parse_value_literal(&mut self, is_const: bool) -> ParseResult<Value> {
        let start = self.lexer.token_index();
        let token = self.lexer.token();
        let kind = token.kind;
        let text = token.value.clone().unwrap_or_default();
        match kind {
            GraphQLTokenKind::SquareBracketOpen => {
                let values = self.any(
                    GraphQLTokenKind::SquareBracketOpen,
                    |parser| parser.parse_value_literal(is_const),
                    GraphQLTokenKind::SquareBracketClose,
                )?;
                Ok(Value::List(Arc::new(ListValue {
                    values,
                    loc: self.loc(start),
                })))
            },
            GraphQLTokenKind::CurlyBraceOpen => self.parse_object(is_const),
            GraphQLTokenKind::Int => {
                self.advance()?;
                Ok(Value::Int(Arc::new(IntValue {
                    value: text,
                    loc: self.loc(start),
                })))
            },
            GraphQLTokenKind::Float => {
                self.advance()?;
                Ok(Value::Float(Arc::new(FloatValue {
                    value: text,
                    loc: self.loc(start),
                })))
            },
            GraphQLTokenKind::String => {
                self.advance()?;
                Ok(Value::String(Arc::new(StringValue {
                    value: text,
                    loc: self.loc(start),
                })))
            },
            GraphQLTokenKind::Name => {
                self.advance()?;
                let loc = self.loc(start);
                Ok(match text.as_str() {
                    "true" | "false" => Value::Boolean(Arc::new(BooleanValue {
                        value: text == "true",
                        loc,
                    })),
                    "null" => Value::Null(Arc::new(NullValue { loc })),
                    _ => Value::Enum(Arc::new(EnumValue { value: text, loc })),
                })
            },
            GraphQLTokenKind::Dollar if !is_const => {
                Ok(Value::Variable(self.parse_variable()?))
            },
            _ => Err(self.unexpected()),
        }
    }

    fn parse_object(&mut self, is_const: bool) -> ParseResult<Value> {
        let start = self.lexer.token_index();
        self.expect(GraphQLTokenKind::CurlyBraceOpen)?;
        let mut fields = vec![];
        while !self.skip(GraphQLTokenKind::CurlyBraceClose)? {
            fields.push(self.parse_object_field(is_const)?);
        }
        Ok(Value::Object(Arc::new(ObjectValue {
            fields: fields.into(),
            loc: self.loc(start),
        })))
    }

    fn parse_object_field(&mut self, is_const: bool) -> ParseResult<Arc<ObjectField>> {
        let start = self.lexer.token_index();
        let name = self.parse_name()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let value = self.parse_value_literal(is_const)?;
        Ok(Arc::new(ObjectField {
            name,
            value,
            loc: self.loc(start),
        }))
    }

    // =========================================================================
    // Directives
    // =========================================================================

    fn parse_directives(&mut self) -> ParseResult<NodeList<Arc<Directive>>> {
        let mut directives = vec![];
        while self.peek(GraphQLTokenKind::At) {
            directives.push(self.parse_directive()?);
        }
        Ok(directives.into())
    }

    fn parse_directive(&mut self) -> ParseResult<Arc<Directive>> {
        let start = self.lexer.token_index();
        self.expect(GraphQLTokenKind::At)?;
        let name = self.parse_name()?;
        let arguments = self.parse_arguments()?;
        Ok(Arc::new(Directive {
            name,
            arguments,
            loc: self.loc(start),
        }))
    }

    // =========================================================================
    // Names and type references
    // =========================================================================

    fn parse_name(&mut self) -> ParseResult<Arc<Name>> {
        let start = self.lexer.token_index();
        let index = self.expect(GraphQLTokenKind::Name)?;
        let value = self
            .lexer
            .token_at(index)
            .and_then(|token| token.value.clone())
            .unwrap_or_default();
        Ok(Arc::new(Name {
            value,
            loc: self.loc(start),
        }))
    }

    /// Parses `Name`, `[Type]`, or either followed by `!`.
    fn parse_type_reference(&mut self) -> ParseResult<Type> {
        let start = self.lexer.token_index();
        let ty = if self.skip(GraphQLTokenKind::SquareBracketOpen)? {
            let inner = self.parse_type_reference()?;
            self.expect(GraphQLTokenKind::SquareBracketClose)?;
            Type::List(Arc::new(ListType {
                ty: inner,
                loc: self.loc(start),
            }))
        } else {
            Type::Named(self.parse_named_type()?)
        };
        if self.skip(GraphQLTokenKind::Bang)? {
            return Ok(Type::NonNull(Arc::new(NonNullType {
                ty,
                loc: self.loc(start),
            })));
        }
        Ok(ty)
    }

    fn parse_named_type(&mut self) -> ParseResult<Arc<NamedType>> {
        let start = self.lexer.token_index();
        let name = self.parse_name()?;
        Ok(Arc::new(NamedType {
            name,
            loc: self.loc(start),
        }))
    }

    // =========================================================================
    // Type system definitions
    // =========================================================================

    fn parse_type_system_definition(&mut self) -> ParseResult<Definition> {
        match self.current_name().as_deref() {
            Some("schema") => Ok(self.parse_schema_definition()?.into()),
            Some("scalar") => Ok(self.parse_scalar_type_definition()?.into()),
            Some("type") => Ok(self.parse_object_type_definition()?.into()),
            Some("interface") => Ok(self.parse_interface_type_definition()?.into()),
            Some("union") => Ok(self.parse_union_type_definition()?.into()),
            Some("enum") => Ok(self.parse_enum_type_definition()?.into()),
            Some("input") => Ok(self.parse_input_object_type_definition()?.into()),
            Some("extend") => Ok(self.parse_type_extension_definition()?.into()),
            Some("directive") => Ok(self.parse_directive_definition()?.into()),
            _ => Err(self.unexpected()),
        }
    }

    fn parse_schema_definition(&mut self) -> ParseResult<Arc<SchemaDefinition>> {
        let start = self.lexer.token_index();
        self.expect_keyword("schema")?;
        let directives = self.parse_directives()?;
        let operation_types = self.many(
            GraphQLTokenKind::CurlyBraceOpen,
            Self::parse_operation_type_definition,
            GraphQLTokenKind::CurlyBraceClose,
        )?;
        Ok(Arc::new(SchemaDefinition {
            directives,
            operation_types,
            loc: self.loc(start),
        }))
    }

    fn parse_operation_type_definition(
        &mut self,
    ) -> ParseResult<Arc<OperationTypeDefinition>> {
        let start = self.lexer.token_index();
        let operation = self.parse_operation_type()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let ty = self.parse_named_type()?;
        Ok(Arc::new(OperationTypeDefinition {
            operation,
            ty,
            loc: self.loc(start),
        }))
    }

    fn parse_scalar_type_definition(&mut self) -> ParseResult<Arc<ScalarTypeDefinition>> {
        let start = self.lexer.token_index();
        self.expect_keyword("scalar")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives()?;
        Ok(Arc::new(ScalarTypeDefinition {
            description: self.description(start),
            name,
            directives,
            loc: self.loc(start),
        }))
    }

    fn parse_object_type_definition(&mut self) -> ParseResult<Arc<ObjectTypeDefinition>> {
        let start = self.lexer.token_index();
        self.expect_keyword("type")?;
        let name = self.parse_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let directives = self.parse_directives()?;
        let fields = self.any(
            GraphQLTokenKind::CurlyBraceOpen,
            Self::parse_field_definition,
            GraphQLTokenKind::CurlyBraceClose,
        )?;
        Ok(Arc::new(ObjectTypeDefinition {
            description: self.description(start),
            name,
            interfaces,
            directives,
            fields,
            loc: self.loc(start),
        }))
    }

    /// Parses `implements A B C`, a whitespace-separated list of at least one
    /// named type. Returns an empty list when there is no `implements`.
    fn parse_implements_interfaces(&mut self) -> ParseResult<NodeList<Arc<NamedType>>> {
        let mut types = vec![];
        if self.peek_keyword("implements") {
            self.advance()?;
            loop {
                types.push(self.parse_named_type()?);
                if !self.peek(GraphQLTokenKind::Name) {
                    break;
                }
            }
        }
        Ok(types.into())
    }

    fn parse_field_definition(&mut self) -> ParseResult<Arc<FieldDefinition>> {
        let start = self.lexer.token_index();
        let name = self.parse_name()?;
        let arguments = self.parse_argument_defs()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let ty = self.parse_type_reference()?;
        let directives = self.parse_directives()?;
        Ok(Arc::new(FieldDefinition {
            description: self.description(start),
            name,
            arguments,
            ty,
            directives,
            loc: self.loc(start),
        }))
    }

    fn parse_argument_defs(&mut self) -> ParseResult<NodeList<Arc<InputValueDefinition>>> {
        if !self.peek(GraphQLTokenKind::ParenOpen) {
            return Ok(NodeList::empty());
        }
        self.many(
            GraphQLTokenKind::ParenOpen,
            Self::parse_input_value_def,
            GraphQLTokenKind::ParenClose,
        )
    }

    fn parse_input_value_def(&mut self) -> ParseResult<Arc<InputValueDefinition>> {
        let start = self.lexer.token_index();
        let name = self.parse_name()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let ty = self.parse_type_reference()?;
        let default_value = if self.skip(GraphQLTokenKind::Equals)? {
            Some(self.parse_value_literal(true)?)
        } else {
            None
        };
        let directives = self.parse_directives()?;
        Ok(Arc::new(InputValueDefinition {
            description: self.description(start),
            name,
            ty,
            default_value,
            directives,
            loc: self.loc(start),
        }))
    }

    fn parse_interface_type_definition(
        &mut self,
    ) -> ParseResult<Arc<InterfaceTypeDefinition>> {
        let start = self.lexer.token_index();
        self.expect_keyword("interface")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives()?;
        let fields = self.any(
            GraphQLTokenKind::CurlyBraceOpen,
            Self::parse_field_definition,
            GraphQLTokenKind::CurlyBraceClose,
        )?;
        Ok(Arc::new(InterfaceTypeDefinition {
            description: self.description(start),
            name,
            directives,
            fields,
            loc: self.loc(start),
        }))
    }

    fn parse_union_type_definition(&mut self) -> ParseResult<Arc<UnionTypeDefinition>> {
        let start = self.lexer.token_index();
        self.expect_keyword("union")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives()?;
        self.expect(GraphQLTokenKind::Equals)?;
        let types = self.parse_union_members()?;
        Ok(Arc::new(UnionTypeDefinition {
            description: self.description(start),
            name,
            directives,
            types,
            loc: self.loc(start),
        }))
    }

    /// Parses `|? A (| B)*`.
    fn parse_union_members(&mut self) -> ParseResult<NodeList<Arc<NamedType>>> {
        self.skip(GraphQLTokenKind::Pipe)?;
        let mut members = vec![];
        loop {
            members.push(self.parse_named_type()?);
            if !self.skip(GraphQLTokenKind::Pipe)? {
                break;
            }
        }
        Ok(members.into())
    }

    fn parse_enum_type_definition(&mut self) -> ParseResult<Arc<EnumTypeDefinition>> {
        let start = self.lexer.token_index();
        self.expect_keyword("enum")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives()?;
        let values = self.many(
            GraphQLTokenKind::CurlyBraceOpen,
            Self::parse_enum_value_definition,
            GraphQLTokenKind::CurlyBraceClose,
        )?;
        Ok(Arc::new(EnumTypeDefinition {
            description: self.description(start),
            name,
            directives,
            values,
            loc: self.loc(start),
        }))
    }

    fn parse_enum_value_definition(&mut self) -> ParseResult<Arc<EnumValueDefinition>> {
        let start = self.lexer.token_index();
        let name = self.parse_name()?;
        let directives = self.parse_directives()?;
        Ok(Arc::new(EnumValueDefinition {
            description: self.description(start),
            name,
            directives,
            loc: self.loc(start),
        }))
    }

    fn parse_input_object_type_definition(
        &mut self,
    ) -> ParseResult<Arc<InputObjectTypeDefinition>> {
        let start = self.lexer.token_index();
        self.expect_keyword("input")?;
        let name = self.parse_name()?;
        let directives = self.parse_directives()?;
        let fields = self.any(
            GraphQLTokenKind::CurlyBraceOpen,
            Self::parse_input_value_def,
            GraphQLTokenKind::CurlyBraceClose,
        )?;
        Ok(Arc::new(InputObjectTypeDefinition {
            description: self.description(start),
            name,
            directives,
            fields,
            loc: self.loc(start),
        }))
    }

    fn parse_type_extension_definition(
        &mut self,
    ) -> ParseResult<Arc<TypeExtensionDefinition>> {
        let start = self.lexer.token_index();
        self.expect_keyword("extend")?;
        let definition = self.parse_object_type_definition()?;
        Ok(Arc::new(TypeExtensionDefinition {
            definition,
            loc: self.loc(start),
        }))
    }

    fn parse_directive_definition(&mut self) -> ParseResult<Arc<DirectiveDefinition>> {
        let start = self.lexer.token_index();
        self.expect_keyword("directive")?;
        self.expect(GraphQLTokenKind::At)?;
        let name = self.parse_name()?;
        let arguments = self.parse_argument_defs()?;
        self.expect_keyword("on")?;
        let locations = self.parse_directive_locations()?;
        Ok(Arc::new(DirectiveDefinition {
            description: self.description(start),
            name,
            arguments,
            locations,
            loc: self.loc(start),
        }))
    }

    /// Parses `|? LOCATION (| LOCATION)*`.
    fn parse_directive_locations(&mut self) -> ParseResult<NodeList<Arc<Name>>> {
        self.skip(GraphQLTokenKind::Pipe)?;
        let mut locations = vec![];
        loop {
            locations.push(self.parse_name()?);
            if !self.skip(GraphQLTokenKind::Pipe)? {
                break;
            }
        }
        Ok(locations.into())
    }
}

// =============================================================================
// Helper functions
// =============================================================================

/// Joins comment lines into a description, removing the indentation shared by
/// every non-blank line. Spaces and tabs each count as one column of
/// indentation. Returns `None` when nothing but whitespace remains.
fn dedent_description(lines: &[&str]) -> Option<String> {
    let indent = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.len() - line.trim_start_matches([' ', '\t']).len())
        .min()?;
    let description = lines
        .iter()
        .map(|line| line.get(indent..).unwrap_or_default())
        .collect::<Vec<_>>()
        .join("\n");
    if description.trim().is_empty() {
        None
    } else {
        Some(description)
    }
}
