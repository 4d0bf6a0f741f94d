//! Condition rendering.

use crate::ast::{Condition, LogicType, Operator};
use crate::error::SqlResult;
use crate::transpiler::ParamContext;
use crate::transpiler::expr::{render_literal, render_value};

/// Render one condition.
pub fn render_condition(condition: &Condition, ctx: &mut ParamContext) -> SqlResult<String> {
    match condition {
        Condition::Unary(c) => {
            let operand = render_value(c.operand(), ctx)?;
            Ok(format!("{} {}", operand, ctx.op(c.kind().operator())?))
        }
        Condition::Binary(c) => {
            let left = render_value(c.left(), ctx)?;
            let right = render_value(c.right(), ctx)?;
            Ok(format!("{} {} {}", left, ctx.op(c.comparison().operator())?, right))
        }
        Condition::Between(c) => {
            let op = if c.is_negated() {
                Operator::NotBetween
            } else {
                Operator::Between
            };
            let operand = render_value(c.operand(), ctx)?;
            let low = render_value(c.low(), ctx)?;
            let high = render_value(c.high(), ctx)?;
            Ok(format!(
                "{} {} {} {} {}",
                operand,
                ctx.op(op)?,
                low,
                ctx.op(Operator::And)?,
                high
            ))
        }
        Condition::Like(c) => {
            let op = if c.is_negated() {
                Operator::NotLike
            } else {
                Operator::Like
            };
            let operand = render_value(c.operand(), ctx)?;
            let pattern = render_value(c.pattern(), ctx)?;
            let mut sql = format!("{} {} {}", operand, ctx.op(op)?, pattern);
            if let Some(escape) = c.escape() {
                let escape = render_value(escape, ctx)?;
                sql.push_str(&format!(" {} {}", ctx.op(Operator::Escape)?, escape));
            }
            Ok(sql)
        }
        Condition::In(c) => {
            let op = if c.is_negated() {
                Operator::NotIn
            } else {
                Operator::In
            };
            let operand = render_value(c.operand(), ctx)?;
            let values: Vec<String> = c.values().iter().map(|v| render_literal(v, ctx)).collect();
            Ok(format!("{} {} ({})", operand, ctx.op(op)?, values.join(", ")))
        }
        Condition::BinaryLogic(c) => {
            let separator = format!(" {} ", ctx.op(c.logic().operator())?);
            let mut parts = Vec::with_capacity(c.conditions().len());
            for operand in c.conditions() {
                parts.push(render_condition(operand, ctx)?);
            }
            let sql = parts.join(&separator);
            if c.is_nested() {
                Ok(format!("({})", sql))
            } else {
                Ok(sql)
            }
        }
        Condition::UnaryLogic(c) => {
            let not = ctx.op(Operator::Not)?;
            let inner = render_condition(c.condition(), ctx)?;
            match c.condition() {
                // already parenthesized
                Condition::BinaryLogic(l) if l.is_nested() => Ok(format!("{} {}", not, inner)),
                _ => Ok(format!("{} ({})", not, inner)),
            }
        }
        Condition::EmptyConjunction => Ok(ctx.op(Operator::EmptyConjunction)?.to_string()),
        Condition::EmptyDisjunction => Ok(ctx.op(Operator::EmptyDisjunction)?.to_string()),
    }
}

/// Render a list of implicitly AND-ed conditions, e.g. a WHERE clause.
///
/// An un-nested OR group sharing the list with other conditions is
/// parenthesized, since the list itself is a conjunction.
pub fn render_conjunction(conditions: &[Condition], ctx: &mut ParamContext) -> SqlResult<String> {
    let separator = format!(" {} ", ctx.op(Operator::And)?);
    let mut parts = Vec::with_capacity(conditions.len());
    for condition in conditions {
        let sql = render_condition(condition, ctx)?;
        let needs_group = conditions.len() > 1
            && matches!(condition, Condition::BinaryLogic(l) if l.logic() == LogicType::Or && !l.is_nested());
        if needs_group {
            parts.push(format!("({})", sql));
        } else {
            parts.push(sql);
        }
    }
    Ok(parts.join(&separator))
}
