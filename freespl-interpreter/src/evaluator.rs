use freespl_core::ast::{Ast, Node, NodeId};
use freespl_core::lexer::TokenKind;
use tracing::{debug, trace};

use crate::environment::Environment;
use crate::error::EvalError;
use crate::report::{ErrorReport, Observer};

const IF_KEYWORD: &str = "if";
const WHILE_KEYWORD: &str = "while";

/// Tree-walking interpreter over a parsed [`Ast`].
///
/// Owns the variable store and the observer that receives assignments. The
/// tree itself is only ever borrowed.
pub struct Interpreter<O: Observer> {
    environment: Environment,
    observer: O,
}

impl<O: Observer> Interpreter<O> {
    pub fn new(observer: O) -> Self {
        Interpreter {
            environment: Environment::new(),
            observer,
        }
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Runs a whole program in a fresh environment.
    ///
    /// The first error stops execution and is reported through `reporter`;
    /// assignments made before it have already reached the observer.
    pub fn run(&mut self, ast: &Ast, reporter: &mut impl ErrorReport) -> Result<(), EvalError> {
        self.environment = Environment::new();
        let result = self.execute(ast, ast.root());
        if let Err(err) = &result {
            reporter.check_error(true, &err.to_string());
        }
        result
    }

    /// Executes the statement at `node` against the current environment.
    pub fn execute(&mut self, ast: &Ast, node: Option<NodeId>) -> Result<(), EvalError> {
        let Some(id) = node else {
            return Ok(());
        };
        let node = &ast[id];

        match (node.token.kind, &*node.token.lexeme) {
            (TokenKind::Identifier, _) => self.execute_assignment(ast, node),
            (TokenKind::Keyword, IF_KEYWORD) => self.execute_if(ast, node),
            (TokenKind::Keyword, WHILE_KEYWORD) => self.execute_while(ast, node),
            _ => {
                trace!(token = %node.token, "skipping to next statement");
                self.execute(ast, node.next)
            }
        }
    }

    fn execute_assignment(&mut self, ast: &Ast, node: &Node) -> Result<(), EvalError> {
        let value = self.evaluate(ast, node.right)?;
        let name = &node.token.lexeme;
        debug!(%name, value, "assign");
        self.environment.set(name.clone(), value);
        self.observer.assigned(name, value);
        Ok(())
    }

    fn execute_if(&mut self, ast: &Ast, node: &Node) -> Result<(), EvalError> {
        let condition = self.evaluate(ast, node.left)?;
        debug!(condition, position = %node.token.position, "if");
        if condition != 0 {
            self.execute(ast, node.right)
        } else {
            // The else branch is whatever statement follows.
            self.execute(ast, node.next)
        }
    }

    fn execute_while(&mut self, ast: &Ast, node: &Node) -> Result<(), EvalError> {
        let mut iterations = 0usize;
        while self.evaluate(ast, node.left)? != 0 {
            self.execute(ast, node.right)?;
            iterations += 1;
        }
        debug!(iterations, position = %node.token.position, "while");
        Ok(())
    }

    /// Value of a single-token expression: a number literal or a variable.
    pub fn evaluate(&self, ast: &Ast, node: Option<NodeId>) -> Result<i64, EvalError> {
        let Some(id) = node else {
            return Err(EvalError::NilExpression);
        };
        let token = &ast[id].token;
        trace!(%token, "evaluate");

        match token.kind {
            TokenKind::Number => token
                .lexeme
                .parse::<i64>()
                .map_err(|source| EvalError::InvalidNumber {
                    lexeme: token.lexeme.clone(),
                    source,
                }),
            TokenKind::Identifier => self
                .environment
                .get(&token.lexeme)
                .ok_or_else(|| EvalError::UndefinedVariable(token.lexeme.clone())),
            _ => Err(EvalError::InvalidExpressionToken(token.lexeme.clone())),
        }
    }
}

impl<O: Observer + Default> Default for Interpreter<O> {
    fn default() -> Self {
        Self::new(O::default())
    }
}
