pub type Identifier = String;

/// A parsed source file: its toplevel items in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationUnit {
    pub items: Vec<Toplevel>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toplevel {
    FunctionDefinition(FunctionDefinition),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeSpecifier {
    Int,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionParameter {
    pub type_specifier: TypeSpecifier,
    pub name: Identifier,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionPrototype {
    pub name: Identifier,
    pub return_type: TypeSpecifier,
    /// In declaration order, which is also call-site binding order.
    pub parameters: Vec<FunctionParameter>,
}

/// A function definition, or a bare declaration when `body` is `None`.
///
/// `Some(vec![])` is a definition with an empty block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDefinition {
    pub prototype: FunctionPrototype,
    pub body: Option<Vec<Statement>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Return(Expression),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Identifier(Identifier),
    Plus(Box<Expression>, Box<Expression>),
}

impl TranslationUnit {
    pub fn new(items: Vec<Toplevel>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn functions(&self) -> impl Iterator<Item = &FunctionDefinition> {
        self.items.iter().map(|item| match item {
            Toplevel::FunctionDefinition(f) => f,
        })
    }
}

impl FunctionParameter {
    pub fn new(type_specifier: TypeSpecifier, name: impl Into<Identifier>) -> Self {
        Self {
            type_specifier,
            name: name.into(),
        }
    }
}

impl FunctionDefinition {
    pub fn name(&self) -> &str {
        &self.prototype.name
    }

    pub fn is_declaration(&self) -> bool {
        self.body.is_none()
    }
}

impl Expression {
    pub fn identifier(name: impl Into<Identifier>) -> Self {
        Self::Identifier(name.into())
    }

    pub fn plus(lhs: Expression, rhs: Expression) -> Self {
        Self::Plus(Box::new(lhs), Box::new(rhs))
    }

    /// Identifier leaves, left to right.
    pub fn identifiers(&self) -> Vec<&str> {
        let mut leaves = Vec::new();
        let mut pending = vec![self];
        while let Some(exp) = pending.pop() {
            match exp {
                Self::Identifier(name) => leaves.push(name.as_str()),
                Self::Plus(lhs, rhs) => {
                    pending.push(rhs);
                    pending.push(lhs);
                }
            }
        }
        leaves
    }

    /// Moves both operands out of a `Plus`, leaving empty leaves behind.
    fn take_operands(&mut self) -> Option<[Expression; 2]> {
        match self {
            Self::Plus(lhs, rhs) => {
                let lhs = std::mem::replace(lhs.as_mut(), Self::Identifier(String::new()));
                let rhs = std::mem::replace(rhs.as_mut(), Self::Identifier(String::new()));
                Some([lhs, rhs])
            }
            Self::Identifier(_) => None,
        }
    }
}

/// Plus chains can be arbitrarily long; tear them down without recursing.
impl Drop for Expression {
    fn drop(&mut self) {
        let Some(operands) = self.take_operands() else {
            return;
        };
        let mut pending = Vec::from(operands);
        while let Some(mut exp) = pending.pop() {
            if let Some(operands) = exp.take_operands() {
                pending.extend(operands);
            }
        }
    }
}
