use jscst_ast::visit::{self, Visitor};
use jscst_ast::*;

use super::ctx::*;
use super::result::*;

mod decls;
mod exp;
mod stmt;

/// Lowering of an upstream node into the open node of the context.
///
/// Implementations attach whatever they produce to the open node. Most
/// nodes produce exactly one concrete node; synthetic blocks and generated
/// returns produce their children inline, suppressed names produce nothing.
pub trait Lower {
    fn lower(&self, ctx: &mut Ctx) -> LoweringResult;
}

impl<T: Lower> Lower for Option<T> {
    fn lower(&self, ctx: &mut Ctx) -> LoweringResult {
        match self {
            Some(x) => x.lower(ctx),
            None => Ok(()),
        }
    }
}

impl<T: Lower> Lower for Vec<T> {
    fn lower(&self, ctx: &mut Ctx) -> LoweringResult {
        self.iter().try_for_each(|x| x.lower(ctx))
    }
}

impl<T: Lower> Lower for Box<T> {
    fn lower(&self, ctx: &mut Ctx) -> LoweringResult {
        (**self).lower(ctx)
    }
}

impl Lower for Expr {
    fn lower(&self, ctx: &mut Ctx) -> LoweringResult {
        visit::walk_expr(ctx, self)
    }
}

impl Lower for Stmt {
    fn lower(&self, ctx: &mut Ctx) -> LoweringResult {
        visit::walk_stmt(ctx, self)
    }
}

// Dispatch
//
//

impl Visitor for Ctx<'_> {
    type Error = Box<LoweringError>;

    fn visit_block(&mut self, block: &Block) -> LoweringResult {
        block.lower(self)
    }

    fn visit_var(&mut self, var: &VarNode) -> LoweringResult {
        var.lower(self)
    }

    fn visit_expression_statement(&mut self, stmt: &ExpressionStatement) -> LoweringResult {
        stmt.lower(self)
    }

    fn visit_empty(&mut self, empty: &EmptyNode) -> LoweringResult {
        empty.lower(self)
    }

    fn visit_if(&mut self, stmt: &IfNode) -> LoweringResult {
        stmt.lower(self)
    }

    fn visit_for(&mut self, stmt: &ForNode) -> LoweringResult {
        stmt.lower(self)
    }

    fn visit_while(&mut self, stmt: &WhileNode) -> LoweringResult {
        stmt.lower(self)
    }

    fn visit_switch(&mut self, stmt: &SwitchNode) -> LoweringResult {
        stmt.lower(self)
    }

    fn visit_case(&mut self, case: &CaseNode) -> LoweringResult {
        case.lower(self)
    }

    fn visit_try(&mut self, stmt: &TryNode) -> LoweringResult {
        stmt.lower(self)
    }

    fn visit_catch(&mut self, catch: &CatchNode) -> LoweringResult {
        catch.lower(self)
    }

    fn visit_throw(&mut self, stmt: &ThrowNode) -> LoweringResult {
        stmt.lower(self)
    }

    fn visit_return(&mut self, stmt: &ReturnNode) -> LoweringResult {
        stmt.lower(self)
    }

    fn visit_break(&mut self, jump: &JumpNode) -> LoweringResult {
        stmt::lower_jump(self, jump, stmt::Jump::Break)
    }

    fn visit_continue(&mut self, jump: &JumpNode) -> LoweringResult {
        stmt::lower_jump(self, jump, stmt::Jump::Continue)
    }

    fn visit_label(&mut self, stmt: &LabelNode) -> LoweringResult {
        stmt.lower(self)
    }

    fn visit_with(&mut self, stmt: &WithNode) -> LoweringResult {
        stmt.lower(self)
    }

    fn visit_ident(&mut self, ident: &IdentNode) -> LoweringResult {
        ident.lower(self)
    }

    fn visit_literal(&mut self, lit: &LiteralNode) -> LoweringResult {
        lit.lower(self)
    }

    fn visit_unary(&mut self, e: &UnaryNode) -> LoweringResult {
        e.lower(self)
    }

    fn visit_binary(&mut self, e: &BinaryNode) -> LoweringResult {
        e.lower(self)
    }

    fn visit_ternary(&mut self, e: &TernaryNode) -> LoweringResult {
        e.lower(self)
    }

    fn visit_call(&mut self, e: &CallNode) -> LoweringResult {
        e.lower(self)
    }

    fn visit_access(&mut self, e: &AccessNode) -> LoweringResult {
        e.lower(self)
    }

    fn visit_index(&mut self, e: &IndexNode) -> LoweringResult {
        e.lower(self)
    }

    fn visit_object(&mut self, e: &ObjectNode) -> LoweringResult {
        e.lower(self)
    }

    fn visit_property(&mut self, prop: &PropertyNode) -> LoweringResult {
        prop.lower(self)
    }

    fn visit_function(&mut self, e: &FunctionNode) -> LoweringResult {
        e.lower(self)
    }

    fn visit_class(&mut self, e: &ClassNode) -> LoweringResult {
        e.lower(self)
    }
}
