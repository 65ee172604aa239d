//! Reserved words.
//!
//! An NCName whose text is in this table is emitted as
//! [`TokenKind::Keyword`](crate::TokenKind::Keyword). Matching is exact and
//! case-sensitive, so `For` stays a plain name.

use std::fmt;
use std::sync::OnceLock;

use rustc_hash::FxHashMap;

macro_rules! keywords {
    ($($variant:ident => $text:literal,)*) => {
        /// A reserved word of the query language.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Keyword {
            $(
                #[doc = concat!("`", $text, "`")]
                $variant,
            )*
        }

        impl Keyword {
            /// Every keyword, in declaration order.
            pub const ALL: &'static [Keyword] = &[$(Keyword::$variant,)*];

            /// The source spelling.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Keyword::$variant => $text,)*
                }
            }
        }
    };
}

keywords! {
    // Axes
    Ancestor => "ancestor",
    AncestorOrSelf => "ancestor-or-self",
    Attribute => "attribute",
    Child => "child",
    Descendant => "descendant",
    DescendantOrSelf => "descendant-or-self",
    Following => "following",
    FollowingSibling => "following-sibling",
    Parent => "parent",
    Preceding => "preceding",
    PrecedingSibling => "preceding-sibling",
    SelfAxis => "self",

    // Expressions
    And => "and",
    As => "as",
    At => "at",
    By => "by",
    Case => "case",
    Cast => "cast",
    Castable => "castable",
    Catch => "catch",
    Count => "count",
    Default => "default",
    Div => "div",
    Else => "else",
    Every => "every",
    Except => "except",
    For => "for",
    Group => "group",
    Idiv => "idiv",
    If => "if",
    In => "in",
    Instance => "instance",
    Intersect => "intersect",
    Is => "is",
    Isnot => "isnot",
    Let => "let",
    Mod => "mod",
    Of => "of",
    Or => "or",
    Order => "order",
    Ordered => "ordered",
    Return => "return",
    Satisfies => "satisfies",
    Some => "some",
    Stable => "stable",
    Switch => "switch",
    Then => "then",
    To => "to",
    Treat => "treat",
    Try => "try",
    Typeswitch => "typeswitch",
    Union => "union",
    Unordered => "unordered",
    Validate => "validate",
    Where => "where",
    Collation => "collation",
    Ascending => "ascending",
    Descending => "descending",
    Empty => "empty",
    Greatest => "greatest",
    Least => "least",
    Lax => "lax",
    Strict => "strict",

    // Windowing
    Tumbling => "tumbling",
    Sliding => "sliding",
    Window => "window",
    Start => "start",
    End => "end",
    Only => "only",
    When => "when",
    Previous => "previous",
    Next => "next",
    Allowing => "allowing",

    // Value comparison
    Eq => "eq",
    Ne => "ne",
    Lt => "lt",
    Le => "le",
    Gt => "gt",
    Ge => "ge",

    // Sequence types and node tests
    Comment => "comment",
    Document => "document",
    DocumentNode => "document-node",
    Element => "element",
    EmptySequence => "empty-sequence",
    Item => "item",
    Node => "node",
    NamespaceNode => "namespace-node",
    ProcessingInstruction => "processing-instruction",
    SchemaAttribute => "schema-attribute",
    SchemaElement => "schema-element",
    Text => "text",
    Function => "function",
    Map => "map",
    Array => "array",
    Collection => "collection",
    Xpointer => "xpointer",

    // Prolog
    BaseUri => "base-uri",
    BoundarySpace => "boundary-space",
    Construction => "construction",
    Context => "context",
    CopyNamespaces => "copy-namespaces",
    DecimalFormat => "decimal-format",
    Declare => "declare",
    Encoding => "encoding",
    External => "external",
    Import => "import",
    Inherit => "inherit",
    Module => "module",
    Namespace => "namespace",
    NoInherit => "no-inherit",
    NoPreserve => "no-preserve",
    Option => "option",
    Ordering => "ordering",
    Preserve => "preserve",
    Schema => "schema",
    Strip => "strip",
    Variable => "variable",
    Version => "version",
    Xquery => "xquery",

    // Decimal format properties
    DecimalSeparator => "decimal-separator",
    GroupingSeparator => "grouping-separator",
    Infinity => "infinity",
    MinusSign => "minus-sign",
    NaN => "NaN",
    Percent => "percent",
    PerMille => "per-mille",
    ZeroDigit => "zero-digit",
    Digit => "digit",
    PatternSeparator => "pattern-separator",
    ExponentSeparator => "exponent-separator",

    // Updates
    After => "after",
    Before => "before",
    Copy => "copy",
    Delete => "delete",
    First => "first",
    Insert => "insert",
    Into => "into",
    Last => "last",
    Modify => "modify",
    Rename => "rename",
    Replace => "replace",
    Type => "type",
    Update => "update",
    Value => "value",
    With => "with",
}

fn table() -> &'static FxHashMap<&'static str, Keyword> {
    static TABLE: OnceLock<FxHashMap<&'static str, Keyword>> = OnceLock::new();
    TABLE.get_or_init(|| Keyword::ALL.iter().map(|&kw| (kw.as_str(), kw)).collect())
}

impl Keyword {
    /// Looks up the keyword spelled exactly `name`.
    ///
    /// ```
    /// use xqc_lex::Keyword;
    ///
    /// assert_eq!(Keyword::from_ncname("descendant-or-self"), Some(Keyword::DescendantOrSelf));
    /// assert_eq!(Keyword::from_ncname("Return"), None);
    /// assert_eq!(Keyword::from_ncname("x"), None);
    /// ```
    pub fn from_ncname(name: &str) -> Option<Keyword> {
        table().get(name).copied()
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
