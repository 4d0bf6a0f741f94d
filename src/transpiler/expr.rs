//! Value rendering.

use crate::ast::values::quote_text;
use crate::ast::{
    Aggregate, Column, Function, Literal, Locate, SqlBinaryExpression, TableColumn, Trim, Value,
};
use crate::error::SqlResult;
use crate::transpiler::ParamContext;
use crate::transpiler::dialect::{ConcatStyle, LocateStyle, Rewrite};
use crate::transpiler::rewrite::rewrite_locate_with_offset;

/// Render an expression outside a select list.
pub fn render_value(value: &Value, ctx: &mut ParamContext) -> SqlResult<String> {
    match value {
        Value::Column(c) => Ok(c.name().to_string()),
        Value::TableColumn(tc) => Ok(render_table_column(tc)),
        Value::Literal(l) => Ok(render_literal(l, ctx)),
        Value::Function(f) => render_function(f, ctx),
        Value::Aggregate(a) => render_aggregate(a, ctx),
        Value::Distinct(inner) => Ok(format!("distinct {}", render_value(inner, ctx)?)),
        Value::Binary(b) => render_binary(b, ctx),
        Value::SelectItem(_) => Err(ctx.unsupported(value.tag())),
    }
}

/// Render a select-list entry, including its output alias.
pub fn render_select_value(value: &Value, ctx: &mut ParamContext) -> SqlResult<String> {
    match value {
        Value::SelectItem(item) => {
            let sql = render_value(item.value(), ctx)?;
            Ok(with_alias(sql, item.alias()))
        }
        Value::Column(c) => Ok(with_alias(c.name().to_string(), c.alias())),
        Value::TableColumn(tc) => Ok(with_alias(render_table_column(tc), tc.column().alias())),
        other => render_value(other, ctx),
    }
}

fn with_alias(sql: String, alias: Option<&str>) -> String {
    match alias {
        Some(alias) => format!("{} AS {}", sql, alias),
        None => sql,
    }
}

/// `alias.column`, or the bare column when its table is unaliased.
pub fn render_table_column(tc: &TableColumn) -> String {
    qualified(tc.qualifier(), tc.column())
}

pub fn qualified(qualifier: Option<&str>, column: &Column) -> String {
    match qualifier {
        Some(q) => format!("{}.{}", q, column.name()),
        None => column.name().to_string(),
    }
}

pub fn render_literal(literal: &Literal, ctx: &mut ParamContext) -> String {
    match literal {
        Literal::Boolean(b) => ctx.config.boolean(*b).to_string(),
        Literal::Parameter(p) => ctx.add_param(p).to_string(),
        other => other.to_string(),
    }
}

fn render_list(values: &[Value], ctx: &mut ParamContext) -> SqlResult<Vec<String>> {
    values.iter().map(|v| render_value(v, ctx)).collect()
}

fn call(name: &str, args: &[&Value], ctx: &mut ParamContext) -> SqlResult<String> {
    let mut rendered = Vec::with_capacity(args.len());
    for arg in args {
        rendered.push(render_value(arg, ctx)?);
    }
    Ok(format!("{}({})", name, rendered.join(", ")))
}

fn render_function(function: &Function, ctx: &mut ParamContext) -> SqlResult<String> {
    match function {
        Function::Abs(v) => call("ABS", &[v], ctx),
        Function::Sqrt(v) => call("SQRT", &[v], ctx),
        Function::Lower(v) => call("LOWER", &[v], ctx),
        Function::Upper(v) => call("UPPER", &[v], ctx),
        Function::Length(v) => call(ctx.config.functions.length, &[v], ctx),
        Function::Concat(parts) => {
            let parts = render_list(parts, ctx)?;
            Ok(match ctx.config.concat {
                ConcatStyle::Function => format!("CONCAT({})", parts.join(", ")),
                ConcatStyle::Operator => parts.join(" || "),
            })
        }
        Function::Trim(t) => render_trim(t, ctx),
        Function::Substring(s) => {
            let name = ctx.config.functions.substring;
            match s.length() {
                Some(length) => call(name, &[s.target(), s.start(), length], ctx),
                None => call(name, &[s.target(), s.start()], ctx),
            }
        }
        Function::Locate(l) => render_locate(l, ctx),
        Function::Coalesce(args) => Ok(format!("COALESCE({})", render_list(args, ctx)?.join(", "))),
        Function::Nullif(a, b) => call("NULLIF", &[a, b], ctx),
        Function::Mod(a, b) => call("MOD", &[a, b], ctx),
        Function::CurrentDate => Ok("CURRENT_DATE".to_string()),
        Function::CurrentTime if ctx.config.supports_current_time => {
            Ok("CURRENT_TIME".to_string())
        }
        Function::CurrentTime => Err(ctx.unsupported(function.tag())),
        Function::CurrentTimestamp => Ok("CURRENT_TIMESTAMP".to_string()),
    }
}

fn render_trim(trim: &Trim, ctx: &mut ParamContext) -> SqlResult<String> {
    let target = render_value(trim.target(), ctx)?;
    if trim.spec().is_none() && trim.character().is_none() {
        return Ok(format!("TRIM({})", target));
    }
    let mut sql = String::from("TRIM(");
    if let Some(spec) = trim.spec() {
        sql.push_str(&format!("{} ", spec));
    }
    if let Some(c) = trim.character() {
        sql.push_str(&format!("{} ", quote_text(&c.to_string())));
    }
    sql.push_str(&format!("FROM {})", target));
    Ok(sql)
}

fn render_locate(locate: &Locate, ctx: &mut ParamContext) -> SqlResult<String> {
    match (ctx.config.locate, locate.start()) {
        (LocateStyle::Locate, None) => call("LOCATE", &[locate.pattern(), locate.target()], ctx),
        (LocateStyle::Locate, Some(start)) => call(
            "LOCATE",
            &[locate.pattern(), locate.target(), start],
            ctx,
        ),
        (LocateStyle::Instr, None) => call("INSTR", &[locate.target(), locate.pattern()], ctx),
        (LocateStyle::Instr, Some(start)) => {
            call("INSTR", &[locate.target(), locate.pattern(), start], ctx)
        }
        (LocateStyle::Position, None) => {
            let pattern = render_value(locate.pattern(), ctx)?;
            let target = render_value(locate.target(), ctx)?;
            Ok(format!("POSITION({} IN {})", pattern, target))
        }
        (LocateStyle::Position, Some(_)) if ctx.config.has_rewrite(Rewrite::LocateWithOffset) => {
            tracing::trace!(dialect = ctx.config.name, "rewriting locate with start offset");
            render_value(&rewrite_locate_with_offset(locate), ctx)
        }
        (LocateStyle::Position, Some(_)) => Err(ctx.unsupported("Locate with start offset")),
    }
}

fn render_aggregate(aggregate: &Aggregate, ctx: &mut ParamContext) -> SqlResult<String> {
    let argument = render_value(aggregate.argument(), ctx)?;
    Ok(format!("{}({})", aggregate.function(), argument))
}

fn render_binary(expr: &SqlBinaryExpression, ctx: &mut ParamContext) -> SqlResult<String> {
    let left = render_operand(expr.left(), ctx)?;
    let right = render_operand(expr.right(), ctx)?;
    Ok(format!("{} {} {}", left, expr.op(), right))
}

fn render_operand(value: &Value, ctx: &mut ParamContext) -> SqlResult<String> {
    match value {
        Value::Binary(_) => Ok(format!("({})", render_value(value, ctx)?)),
        other => render_value(other, ctx),
    }
}
