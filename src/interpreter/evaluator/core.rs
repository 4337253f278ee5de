use log::debug;

use crate::{
    ast::{Declaration, Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        config::{Config, Dialect},
        output::OutputBuffer,
        symbols::SymbolTable,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime state of one line.
///
/// A `Context` is created fresh for every line and dropped afterwards, so no
/// variable or output survives from one line to the next.
///
/// ## Failure behaviour
///
/// Statements mutate [`Context::symbols`] as they run. When a later statement
/// fails, those mutations stay in place: the symbol table is not
/// transactional. The output buffer is the part that is all-or-nothing, since
/// it is only committed by the caller after [`Context::run`] succeeds.
pub struct Context {
    /// Variables of the current line.
    pub symbols:             SymbolTable,
    /// Printed values of the current line.
    pub output:              OutputBuffer,
    pub(crate) dialect:      Dialect,
    pub(crate) loop_limit:   Option<u64>,
    pub(crate) loop_counter: u64,
}

impl Context {
    /// Creates an empty context sized by `config`.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self { symbols:      SymbolTable::with_capacity(config.limits.max_variables),
               output:       OutputBuffer::new(config.limits.output_capacity),
               dialect:      config.dialect,
               loop_limit:   config.limits.max_loop_iterations,
               loop_counter: 0, }
    }

    /// Runs a parsed program: first its declarations, then its statements.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised. Statements before the failing
    /// one have already taken effect on the symbol table.
    ///
    /// # Example
    /// ```
    /// use plang::interpreter::{
    ///     config::Config,
    ///     evaluator::core::Context,
    ///     lexer::tokenize,
    ///     parser::core::parse_program,
    /// };
    ///
    /// let config = Config::default();
    /// let tokens = tokenize("integer k ; k = 6 * 7 ; print k ;", &config).unwrap();
    /// let program = parse_program(&mut tokens.iter().peekable(), config.dialect).unwrap();
    ///
    /// let mut context = Context::new(&config);
    /// context.run(&program).unwrap();
    /// assert_eq!(context.output.as_str(), ">> 42");
    /// ```
    pub fn run(&mut self, program: &Program) -> EvalResult<()> {
        for declaration in &program.declarations {
            self.declare(declaration)?;
        }
        self.exec_block(&program.statements)
    }

    /// Consumes the context, keeping only what is to be committed.
    #[must_use]
    pub fn into_output(self) -> OutputBuffer {
        self.output
    }

    /// Executes statements in order, stopping at the first failure.
    pub fn exec_block(&mut self, statements: &[Statement]) -> EvalResult<()> {
        statements.iter()
                  .try_for_each(|statement| self.exec_statement(statement))
    }

    /// Executes a single statement.
    ///
    /// # Parameters
    /// - `statement`: Statement to execute.
    ///
    /// # Errors
    /// Propagates errors from variable access, arithmetic, the output buffer
    /// and the loop cap.
    pub fn exec_statement(&mut self, statement: &Statement) -> EvalResult<()> {
        match statement {
            Statement::Empty => Ok(()),
            Statement::Assignment { name, value, position } => {
                self.assign(name, value, *position)
            },
            Statement::Print { value, .. } => {
                let value = self.eval(value)?;
                self.output.write(value)
            },
            Statement::While { condition,
                               body,
                               position, } => self.exec_while(condition, body, *position),
            Statement::If { condition,
                            then_branch,
                            else_branch,
                            .. } => self.exec_if(condition, then_branch, else_branch),
        }
    }

    /// Evaluates an expression to a value.
    ///
    /// Evaluation is strictly left to right, so a variable read sees every
    /// assignment made before it in the line.
    ///
    /// # Errors
    /// - `UnknownVariable` for undeclared names in the extended dialect.
    /// - `SymbolTableFull` when the base dialect cannot create a read name.
    /// - `Overflow` if any intermediate result leaves the `i64` range.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<i64> {
        match expr {
            Expr::Literal { value, .. } => Ok(*value),
            Expr::Variable { name, position } => self.read_variable(name, *position),
            Expr::Negate { expr, position } => {
                let value = self.eval(expr)?;
                Self::eval_negate(value, *position)
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             position, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, left, right, *position)
            },
        }
    }

    /// Reads a variable.
    ///
    /// In the base dialect an unknown name is created with the value `0`; in
    /// the extended dialect it is an error.
    pub(crate) fn read_variable(&mut self, name: &str, position: usize) -> EvalResult<i64> {
        if self.dialect.implicit_variables() {
            return self.slot(name).map(|slot| *slot);
        }

        self.symbols
            .find(name)
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           position })
    }

    /// Executes `name = value`.
    ///
    /// The extended dialect checks that the target is declared before the
    /// right-hand side is evaluated. The base dialect evaluates first and then
    /// creates the target if needed.
    fn assign(&mut self, name: &str, value: &Expr, position: usize) -> EvalResult<()> {
        if self.dialect.implicit_variables() {
            let value = self.eval(value)?;
            *self.slot(name)? = value;
            return Ok(());
        }

        if !self.symbols.contains(name) {
            return Err(RuntimeError::UnknownVariable { name: name.to_string(),
                                                       position });
        }

        let value = self.eval(value)?;
        if let Some(slot) = self.symbols.find_mut(name) {
            *slot = value;
        }
        Ok(())
    }

    fn slot(&mut self, name: &str) -> EvalResult<&mut i64> {
        let capacity = self.symbols.capacity();
        self.symbols
            .lookup_or_create(name)
            .ok_or_else(|| RuntimeError::SymbolTableFull { name: name.to_string(),
                                                           capacity })
    }

    /// Executes `integer name ;`.
    ///
    /// # Errors
    /// - `DuplicateDeclaration` if the name is already declared.
    /// - `SymbolTableFull` if no slot is left.
    fn declare(&mut self, declaration: &Declaration) -> EvalResult<()> {
        let Declaration { name, position } = declaration;

        if self.symbols.contains(name) {
            return Err(RuntimeError::DuplicateDeclaration { name:     name.clone(),
                                                            position: *position, });
        }
        if !self.symbols.declare(name) {
            return Err(RuntimeError::SymbolTableFull { name:     name.clone(),
                                                       capacity: self.symbols.capacity(), });
        }

        debug!("declared '{name}'");
        Ok(())
    }
}
