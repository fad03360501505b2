use jscst_ast::*;

use super::*;

mod access;
mod call;
mod literal;
mod object;
mod operator;

impl Lower for IdentNode {
    fn lower(&self, ctx: &mut Ctx) -> LoweringResult {
        if ctx.take_suppress() {
            log::trace!("Skipping the binding of function declaration {}", self.name);
            return Ok(());
        }
        let node = ctx.identifier(self.start, self.finish, &self.name)?;
        ctx.attach(node);
        Ok(())
    }
}

/// Lower the object of a member access or call, restoring the parentheses
/// an operator expression must have had in that position.
fn lower_operand(ctx: &mut Ctx, operand: &Expr) -> LoweringResult {
    operand.lower(ctx)?;
    match operand.token_type() {
        Some(TokenType::New) | None => Ok(()),
        Some(_) => ctx.group_last_child(),
    }
}
