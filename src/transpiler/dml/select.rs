//! SELECT SQL generation.

use crate::ast::{FromSource, FromTable, ResultLimit, SqlSelect};
use crate::error::SqlResult;
use crate::transpiler::ParamContext;
use crate::transpiler::conditions::render_condition;
use crate::transpiler::dialect::LimitStyle;
use crate::transpiler::dml::{push_where, table_reference};
use crate::transpiler::expr::{qualified, render_select_value, render_value};

/// Generate SELECT SQL.
pub fn build_select(select: &SqlSelect, ctx: &mut ParamContext) -> SqlResult<String> {
    let mut sql = String::from("select ");
    if select.is_distinct() {
        sql.push_str("distinct ");
    }

    let mut values = Vec::with_capacity(select.values().len());
    for value in select.values() {
        values.push(render_select_value(value, ctx)?);
    }
    sql.push_str(&values.join(", "));

    sql.push_str(" from ");
    let mut sources = Vec::with_capacity(select.from().len());
    for source in select.from() {
        sources.push(render_source(source, ctx)?);
    }
    sql.push_str(&sources.join(", "));

    push_where(&mut sql, select.conditions(), ctx)?;

    if let Some(group_by) = select.group_by() {
        let mut columns = Vec::with_capacity(group_by.columns().len());
        for column in group_by.columns() {
            columns.push(render_value(column, ctx)?);
        }
        sql.push_str(" group by ");
        sql.push_str(&columns.join(", "));
    }

    if let Some(having) = select.having() {
        sql.push_str(" having ");
        sql.push_str(&render_condition(having, ctx)?);
    }

    if !select.order_by().is_empty() {
        let mut orders = Vec::with_capacity(select.order_by().len());
        for order in select.order_by() {
            orders.push(format!("{} {}", render_value(order.value(), ctx)?, order.order()));
        }
        sql.push_str(" order by ");
        sql.push_str(&orders.join(", "));
    }

    if let Some(limit) = select.result_limit() {
        push_limit(&mut sql, limit, ctx.config.limit);
    }

    Ok(sql)
}

fn render_source(source: &FromSource, ctx: &mut ParamContext) -> SqlResult<String> {
    match source {
        FromSource::Table(table) => Ok(render_table(table, ctx)),
        FromSource::Subquery(sub) => {
            let inner = build_select(sub.select(), ctx)?;
            Ok(table_reference(
                &format!("({})", inner),
                Some(sub.alias()),
                ctx.config,
            ))
        }
    }
}

/// The table with its join chain. A join target's own joins follow it.
fn render_table(table: &FromTable, ctx: &ParamContext) -> String {
    let mut sql = table_reference(table.name(), table.alias(), ctx.config);
    for join in table.joins() {
        let target = join.target();
        let on: Vec<String> = join
            .column_pairs()
            .map(|(from, to)| {
                format!(
                    "{} = {}",
                    qualified(table.alias(), from),
                    qualified(target.alias(), to)
                )
            })
            .collect();
        sql.push_str(&format!(
            " {} {} ON {}",
            join.join_type(),
            render_table(target, ctx),
            on.join(" AND ")
        ));
    }
    sql
}

fn push_limit(sql: &mut String, limit: &ResultLimit, style: LimitStyle) {
    match style {
        LimitStyle::LimitOffset => {
            if let Some(max) = limit.max_results {
                sql.push_str(&format!(" limit {}", max));
            }
            if let Some(first) = limit.first_result {
                sql.push_str(&format!(" offset {}", first));
            }
        }
        LimitStyle::OffsetFetch => {
            if let Some(first) = limit.first_result {
                sql.push_str(&format!(" offset {} rows", first));
            }
            if let Some(max) = limit.max_results {
                sql.push_str(&format!(" fetch next {} rows only", max));
            }
        }
    }
}
