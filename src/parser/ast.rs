// AST (Abstract Syntax Tree) definitions for the C-Minus syntax analyzer

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Top-level classification of a tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeCategory {
    Declaration,
    Statement,
    Expression,
    Parameter,
}

/// Value classification of declarations, parameters and (after type
/// checking) expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Void,
    Num,
    Address, // pointers and arrays
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    // Comparison
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl BinOp {
    pub fn is_relational(self) -> bool {
        matches!(
            self,
            BinOp::Eq | BinOp::Ne | BinOp::Lt | BinOp::Le | BinOp::Gt | BinOp::Ge
        )
    }
}

/// An element of a statement sequence
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Declaration(Decl),
    Statement(Stmt),
    /// A bare expression used as a statement; its value is discarded
    Expression(Expr),
}

impl Node {
    pub fn category(&self) -> NodeCategory {
        match self {
            Node::Declaration(_) => NodeCategory::Declaration,
            Node::Statement(_) => NodeCategory::Statement,
            Node::Expression(_) => NodeCategory::Expression,
        }
    }

    pub fn location(&self) -> SourceLocation {
        match self {
            Node::Declaration(decl) => decl.location(),
            Node::Statement(stmt) => stmt.location(),
            Node::Expression(expr) => expr.location,
        }
    }
}

/// Declarations
#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    Variable {
        name: String,
        value_type: ValueType,
        location: SourceLocation,
    },
    Array {
        name: String,
        value_type: ValueType,
        size: i32, // checked by semantic analysis, not here
        location: SourceLocation,
    },
    Function {
        name: String,
        return_type: ValueType,
        params: Vec<Param>,
        body: FunctionBody,
        location: SourceLocation,
    },
}

impl Decl {
    pub fn name(&self) -> &str {
        match self {
            Decl::Variable { name, .. } | Decl::Array { name, .. } | Decl::Function { name, .. } => {
                name
            }
        }
    }

    pub fn location(&self) -> SourceLocation {
        match self {
            Decl::Variable { location, .. }
            | Decl::Array { location, .. }
            | Decl::Function { location, .. } => *location,
        }
    }
}

/// Function parameter
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    Scalar {
        name: String,
        value_type: ValueType,
        location: SourceLocation,
    },
    /// `num *p` or `num a[]`; always address-typed
    ArrayRef {
        name: String,
        location: SourceLocation,
    },
    /// The explicit `(void)` parameter list
    Void { location: SourceLocation },
}

impl Param {
    pub fn category(&self) -> NodeCategory {
        NodeCategory::Parameter
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Param::Scalar { name, .. } | Param::ArrayRef { name, .. } => Some(name),
            Param::Void { .. } => None,
        }
    }

    pub fn value_type(&self) -> ValueType {
        match self {
            Param::Scalar { value_type, .. } => *value_type,
            Param::ArrayRef { .. } => ValueType::Address,
            Param::Void { .. } => ValueType::Void,
        }
    }

    pub fn location(&self) -> SourceLocation {
        match self {
            Param::Scalar { location, .. }
            | Param::ArrayRef { location, .. }
            | Param::Void { location } => *location,
        }
    }
}

/// `{ ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub statements: Vec<Node>,
    pub location: SourceLocation,
}

/// `-> ... :)`
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionBody {
    pub statements: Vec<Node>,
    pub location: SourceLocation,
}

/// Statements
///
/// Condition and value slots are optional because error recovery can leave
/// them empty; a tree without diagnostics always fills them.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Select {
        condition: Option<Expr>,
        then_branch: Block,
        else_branch: Option<Block>,
        location: SourceLocation,
    },
    While {
        condition: Option<Expr>,
        body: Block,
        location: SourceLocation,
    },
    /// `target` is always an `ExprKind::Identifier`
    Assign {
        target: Expr,
        value: Option<Expr>,
        location: SourceLocation,
    },
    Return {
        value: Option<Expr>,
        location: SourceLocation,
    },
    Block(Block),
}

impl Stmt {
    pub fn location(&self) -> SourceLocation {
        match self {
            Stmt::Select { location, .. }
            | Stmt::While { location, .. }
            | Stmt::Assign { location, .. }
            | Stmt::Return { location, .. } => *location,
            Stmt::Block(block) => block.location,
        }
    }
}

/// Expression node: the expression itself plus the type slot that the
/// type checker fills in (`None` until then)
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub location: SourceLocation,
    pub ty: Option<ValueType>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    BinaryOp {
        op: BinOp,
        left: Option<Box<Expr>>,
        right: Option<Box<Expr>>,
    },
    Constant(i32),
    Identifier(String),
    /// `name[index]`
    Index {
        array: String,
        index: Option<Box<Expr>>,
    },
    Call {
        callee: String,
        args: Vec<Expr>,
    },
}

impl Expr {
    pub fn new(kind: ExprKind, location: SourceLocation) -> Self {
        Expr {
            kind,
            location,
            ty: None,
        }
    }

    pub fn binary(
        op: BinOp,
        left: Option<Expr>,
        right: Option<Expr>,
        location: SourceLocation,
    ) -> Self {
        Expr::new(
            ExprKind::BinaryOp {
                op,
                left: left.map(Box::new),
                right: right.map(Box::new),
            },
            location,
        )
    }

    /// The identifier a call on this expression would name: the right-most
    /// leaf, if that leaf is a plain identifier.
    pub fn trailing_identifier(&self) -> Option<(&str, SourceLocation)> {
        match &self.kind {
            ExprKind::Identifier(name) => Some((name, self.location)),
            ExprKind::BinaryOp { right, .. } => right.as_deref()?.trailing_identifier(),
            _ => None,
        }
    }
}

/// Top-level program structure
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub nodes: Vec<Node>, // top-level statement sequence
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }

    /// Function declarations at the top level, in source order
    pub fn functions(&self) -> impl Iterator<Item = &Decl> {
        self.nodes.iter().filter_map(|node| match node {
            Node::Declaration(decl @ Decl::Function { .. }) => Some(decl),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc() -> SourceLocation {
        SourceLocation::new(1, 1)
    }

    fn ident(name: &str) -> Expr {
        Expr::new(ExprKind::Identifier(name.to_string()), loc())
    }

    #[test]
    fn test_trailing_identifier() {
        let sum = Expr::binary(BinOp::Add, Some(ident("a")), Some(ident("f")), loc());
        assert_eq!(sum.trailing_identifier(), Some(("f", loc())));

        let constant = Expr::new(ExprKind::Constant(3), loc());
        assert_eq!(constant.trailing_identifier(), None);

        let dangling = Expr::binary(BinOp::Mul, Some(ident("a")), None, loc());
        assert_eq!(dangling.trailing_identifier(), None);
    }

    #[test]
    fn test_new_expressions_are_untyped() {
        assert_eq!(ident("x").ty, None);
    }

    #[test]
    fn test_param_accessors() {
        let p = Param::ArrayRef {
            name: "a".to_string(),
            location: loc(),
        };
        assert_eq!(p.category(), NodeCategory::Parameter);
        assert_eq!(p.value_type(), ValueType::Address);
        assert_eq!(p.name(), Some("a"));
        assert_eq!(Param::Void { location: loc() }.name(), None);
    }
}
