//! Traversal of the upstream tree.
//!
//! The `walk_*` functions visit children in the order of the external
//! parser's own visitor, which is not always source order:
//!
//! * a [`VarNode`] visits its initializer before its name,
//! * a [`TryNode`] visits the finally body, then the try body, then the
//!   catch clauses,
//! * a [`FunctionNode`] visits only its body, parameters are visited on
//!   request through [`walk_parameters`],
//! * a [`ClassNode`] visits heritage, constructor and members but not its
//!   name.

use crate::*;

pub trait Visitor: Sized {
    type Error;

    fn visit_block(&mut self, block: &Block) -> Result<(), Self::Error> {
        walk_block(self, block)
    }

    fn visit_stmt(&mut self, stmt: &Stmt) -> Result<(), Self::Error> {
        walk_stmt(self, stmt)
    }

    fn visit_var(&mut self, var: &VarNode) -> Result<(), Self::Error> {
        walk_var(self, var)
    }

    fn visit_expression_statement(
        &mut self,
        stmt: &ExpressionStatement,
    ) -> Result<(), Self::Error> {
        walk_expression_statement(self, stmt)
    }

    fn visit_empty(&mut self, _empty: &EmptyNode) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_if(&mut self, stmt: &IfNode) -> Result<(), Self::Error> {
        walk_if(self, stmt)
    }

    fn visit_for(&mut self, stmt: &ForNode) -> Result<(), Self::Error> {
        walk_for(self, stmt)
    }

    fn visit_while(&mut self, stmt: &WhileNode) -> Result<(), Self::Error> {
        walk_while(self, stmt)
    }

    fn visit_switch(&mut self, stmt: &SwitchNode) -> Result<(), Self::Error> {
        walk_switch(self, stmt)
    }

    fn visit_case(&mut self, case: &CaseNode) -> Result<(), Self::Error> {
        walk_case(self, case)
    }

    fn visit_try(&mut self, stmt: &TryNode) -> Result<(), Self::Error> {
        walk_try(self, stmt)
    }

    fn visit_catch(&mut self, catch: &CatchNode) -> Result<(), Self::Error> {
        walk_catch(self, catch)
    }

    fn visit_throw(&mut self, stmt: &ThrowNode) -> Result<(), Self::Error> {
        walk_throw(self, stmt)
    }

    fn visit_return(&mut self, stmt: &ReturnNode) -> Result<(), Self::Error> {
        walk_return(self, stmt)
    }

    fn visit_break(&mut self, _stmt: &JumpNode) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_continue(&mut self, _stmt: &JumpNode) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_label(&mut self, stmt: &LabelNode) -> Result<(), Self::Error> {
        walk_label(self, stmt)
    }

    fn visit_with(&mut self, stmt: &WithNode) -> Result<(), Self::Error> {
        walk_with(self, stmt)
    }

    fn visit_expr(&mut self, expr: &Expr) -> Result<(), Self::Error> {
        walk_expr(self, expr)
    }

    fn visit_ident(&mut self, _ident: &IdentNode) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_literal(&mut self, lit: &LiteralNode) -> Result<(), Self::Error> {
        walk_literal(self, lit)
    }

    fn visit_unary(&mut self, e: &UnaryNode) -> Result<(), Self::Error> {
        walk_unary(self, e)
    }

    fn visit_binary(&mut self, e: &BinaryNode) -> Result<(), Self::Error> {
        walk_binary(self, e)
    }

    fn visit_ternary(&mut self, e: &TernaryNode) -> Result<(), Self::Error> {
        walk_ternary(self, e)
    }

    fn visit_call(&mut self, e: &CallNode) -> Result<(), Self::Error> {
        walk_call(self, e)
    }

    fn visit_access(&mut self, e: &AccessNode) -> Result<(), Self::Error> {
        walk_access(self, e)
    }

    fn visit_index(&mut self, e: &IndexNode) -> Result<(), Self::Error> {
        walk_index(self, e)
    }

    fn visit_object(&mut self, e: &ObjectNode) -> Result<(), Self::Error> {
        walk_object(self, e)
    }

    fn visit_property(&mut self, prop: &PropertyNode) -> Result<(), Self::Error> {
        walk_property(self, prop)
    }

    fn visit_function(&mut self, e: &FunctionNode) -> Result<(), Self::Error> {
        walk_function(self, e)
    }

    fn visit_class(&mut self, e: &ClassNode) -> Result<(), Self::Error> {
        walk_class(self, e)
    }
}

// Statements
//
//

pub fn walk_block<V: Visitor>(v: &mut V, block: &Block) -> Result<(), V::Error> {
    block.statements.iter().try_for_each(|stmt| v.visit_stmt(stmt))
}

pub fn walk_stmt<V: Visitor>(v: &mut V, stmt: &Stmt) -> Result<(), V::Error> {
    match stmt {
        Stmt::Var(s) => v.visit_var(s),
        Stmt::Expression(s) => v.visit_expression_statement(s),
        Stmt::Block(s) => v.visit_block(s),
        Stmt::Empty(s) => v.visit_empty(s),
        Stmt::If(s) => v.visit_if(s),
        Stmt::For(s) => v.visit_for(s),
        Stmt::While(s) => v.visit_while(s),
        Stmt::Switch(s) => v.visit_switch(s),
        Stmt::Try(s) => v.visit_try(s),
        Stmt::Throw(s) => v.visit_throw(s),
        Stmt::Return(s) => v.visit_return(s),
        Stmt::Break(s) => v.visit_break(s),
        Stmt::Continue(s) => v.visit_continue(s),
        Stmt::Label(s) => v.visit_label(s),
        Stmt::With(s) => v.visit_with(s),
    }
}

/// Visits the initializer first, then the bound name.
pub fn walk_var<V: Visitor>(v: &mut V, var: &VarNode) -> Result<(), V::Error> {
    if let Some(init) = &var.init {
        v.visit_expr(init)?;
    }
    v.visit_ident(&var.name)
}

pub fn walk_expression_statement<V: Visitor>(
    v: &mut V,
    stmt: &ExpressionStatement,
) -> Result<(), V::Error> {
    v.visit_expr(&stmt.expression)
}

pub fn walk_if<V: Visitor>(v: &mut V, stmt: &IfNode) -> Result<(), V::Error> {
    v.visit_expr(&stmt.test)?;
    v.visit_block(&stmt.pass)?;
    if let Some(fail) = &stmt.fail {
        v.visit_block(fail)?;
    }
    Ok(())
}

pub fn walk_for<V: Visitor>(v: &mut V, stmt: &ForNode) -> Result<(), V::Error> {
    for clause in [&stmt.init, &stmt.test, &stmt.modify].into_iter().flatten() {
        v.visit_expr(clause)?;
    }
    v.visit_block(&stmt.body)
}

/// Visits the body before the test for `do-while` loops.
pub fn walk_while<V: Visitor>(v: &mut V, stmt: &WhileNode) -> Result<(), V::Error> {
    if stmt.is_do_while {
        v.visit_block(&stmt.body)?;
        v.visit_expr(&stmt.test)
    } else {
        v.visit_expr(&stmt.test)?;
        v.visit_block(&stmt.body)
    }
}

pub fn walk_switch<V: Visitor>(v: &mut V, stmt: &SwitchNode) -> Result<(), V::Error> {
    v.visit_expr(&stmt.expression)?;
    stmt.cases.iter().try_for_each(|case| v.visit_case(case))
}

pub fn walk_case<V: Visitor>(v: &mut V, case: &CaseNode) -> Result<(), V::Error> {
    if let Some(test) = &case.test {
        v.visit_expr(test)?;
    }
    case.statements.iter().try_for_each(|stmt| v.visit_stmt(stmt))
}

/// Visits the finally body, then the try body, then the catch clauses.
pub fn walk_try<V: Visitor>(v: &mut V, stmt: &TryNode) -> Result<(), V::Error> {
    if let Some(finally_body) = &stmt.finally_body {
        v.visit_block(finally_body)?;
    }
    v.visit_block(&stmt.body)?;
    stmt.catches.iter().try_for_each(|catch| v.visit_catch(catch))
}

pub fn walk_catch<V: Visitor>(v: &mut V, catch: &CatchNode) -> Result<(), V::Error> {
    v.visit_ident(&catch.exception)?;
    v.visit_block(&catch.body)
}

pub fn walk_throw<V: Visitor>(v: &mut V, stmt: &ThrowNode) -> Result<(), V::Error> {
    v.visit_expr(&stmt.expression)
}

pub fn walk_return<V: Visitor>(v: &mut V, stmt: &ReturnNode) -> Result<(), V::Error> {
    match &stmt.expression {
        Some(expression) => v.visit_expr(expression),
        None => Ok(()),
    }
}

pub fn walk_label<V: Visitor>(v: &mut V, stmt: &LabelNode) -> Result<(), V::Error> {
    v.visit_block(&stmt.body)
}

pub fn walk_with<V: Visitor>(v: &mut V, stmt: &WithNode) -> Result<(), V::Error> {
    v.visit_expr(&stmt.expression)?;
    v.visit_block(&stmt.body)
}

// Expressions
//
//

pub fn walk_expr<V: Visitor>(v: &mut V, expr: &Expr) -> Result<(), V::Error> {
    match expr {
        Expr::Ident(e) => v.visit_ident(e),
        Expr::Literal(e) => v.visit_literal(e),
        Expr::Unary(e) => v.visit_unary(e),
        Expr::Binary(e) => v.visit_binary(e),
        Expr::Ternary(e) => v.visit_ternary(e),
        Expr::Call(e) => v.visit_call(e),
        Expr::Access(e) => v.visit_access(e),
        Expr::Index(e) => v.visit_index(e),
        Expr::Object(e) => v.visit_object(e),
        Expr::Function(e) => v.visit_function(e),
        Expr::Class(e) => v.visit_class(e),
    }
}

/// Visits the present elements of an array literal.
pub fn walk_literal<V: Visitor>(v: &mut V, lit: &LiteralNode) -> Result<(), V::Error> {
    match &lit.value {
        LiteralValue::Array(elements) => {
            elements.iter().flatten().try_for_each(|element| v.visit_expr(element))
        }
        _ => Ok(()),
    }
}

pub fn walk_unary<V: Visitor>(v: &mut V, e: &UnaryNode) -> Result<(), V::Error> {
    v.visit_expr(&e.operand)
}

pub fn walk_binary<V: Visitor>(v: &mut V, e: &BinaryNode) -> Result<(), V::Error> {
    v.visit_expr(&e.lhs)?;
    v.visit_expr(&e.rhs)
}

pub fn walk_ternary<V: Visitor>(v: &mut V, e: &TernaryNode) -> Result<(), V::Error> {
    v.visit_expr(&e.test)?;
    v.visit_expr(&e.true_expr)?;
    v.visit_expr(&e.false_expr)
}

pub fn walk_call<V: Visitor>(v: &mut V, e: &CallNode) -> Result<(), V::Error> {
    v.visit_expr(&e.function)?;
    e.args.iter().try_for_each(|arg| v.visit_expr(arg))
}

pub fn walk_access<V: Visitor>(v: &mut V, e: &AccessNode) -> Result<(), V::Error> {
    v.visit_expr(&e.base)
}

pub fn walk_index<V: Visitor>(v: &mut V, e: &IndexNode) -> Result<(), V::Error> {
    v.visit_expr(&e.base)?;
    v.visit_expr(&e.index)
}

pub fn walk_object<V: Visitor>(v: &mut V, e: &ObjectNode) -> Result<(), V::Error> {
    e.elements.iter().try_for_each(|prop| v.visit_property(prop))
}

pub fn walk_property<V: Visitor>(v: &mut V, prop: &PropertyNode) -> Result<(), V::Error> {
    v.visit_expr(&prop.key)?;
    if let Some(value) = &prop.value {
        v.visit_expr(value)?;
    }
    if let Some(getter) = &prop.getter {
        v.visit_function(getter)?;
    }
    if let Some(setter) = &prop.setter {
        v.visit_function(setter)?;
    }
    Ok(())
}

pub fn walk_function<V: Visitor>(v: &mut V, e: &FunctionNode) -> Result<(), V::Error> {
    v.visit_block(&e.body)
}

pub fn walk_parameters<V: Visitor>(v: &mut V, e: &FunctionNode) -> Result<(), V::Error> {
    e.params.iter().try_for_each(|param| v.visit_ident(param))
}

pub fn walk_class<V: Visitor>(v: &mut V, e: &ClassNode) -> Result<(), V::Error> {
    if let Some(heritage) = &e.heritage {
        v.visit_expr(heritage)?;
    }
    if let Some(constructor) = &e.constructor {
        v.visit_property(constructor)?;
    }
    e.elements.iter().try_for_each(|prop| v.visit_property(prop))
}
