//! AST-to-AST rewrites for constructs a dialect cannot express directly.

use crate::ast::{
    ArithmeticOp, Function, Locate, SqlBinaryExpression, Substring, Value,
};

/// Express a LOCATE with a start offset through a start-less search:
///
/// `COALESCE(NULLIF(LOCATE(p, SUBSTRING(t, s)), 0) + (s - 1), 0)`
///
/// A miss inside the substring yields 0, which NULLIF turns into NULL so the
/// offset correction does not apply, and COALESCE maps back to 0. The start
/// value appears twice in the result. A locate without a start is returned
/// as is.
pub fn rewrite_locate_with_offset(locate: &Locate) -> Value {
    let Some(start) = locate.start() else {
        return locate.clone().into();
    };

    let tail = Substring::new(locate.target().clone(), start.clone());
    let found = Locate::new(locate.pattern().clone(), tail);
    let hit = Function::Nullif(found.into(), Value::from(0));
    let offset = SqlBinaryExpression::new(ArithmeticOp::Diff, start.clone(), 1);
    let shifted = SqlBinaryExpression::new(ArithmeticOp::Sum, hit, offset);

    Function::Coalesce(vec![shifted.into(), Value::from(0)]).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Column, Literal};

    fn start_of(value: &Value) -> usize {
        match value {
            Value::Literal(Literal::Parameter(p)) if p.label() == "start" => 1,
            Value::Function(f) => match f.as_ref() {
                Function::Coalesce(args) => args.iter().map(start_of).sum(),
                Function::Nullif(a, b) => start_of(a) + start_of(b),
                Function::Substring(s) => start_of(s.target()) + start_of(s.start()),
                Function::Locate(l) => start_of(l.pattern()) + start_of(l.target()),
                _ => 0,
            },
            Value::Binary(b) => start_of(b.left()) + start_of(b.right()),
            _ => 0,
        }
    }

    #[test]
    fn test_without_start_is_unchanged() {
        let locate = Locate::new("a", Column::new("name"));
        assert_eq!(rewrite_locate_with_offset(&locate), Value::from(locate));
    }

    #[test]
    fn test_rewrite_shape() {
        let locate = Locate::new("a", Column::new("name")).with_start(3);
        let rewritten = rewrite_locate_with_offset(&locate);

        let Value::Function(f) = &rewritten else {
            panic!("expected COALESCE");
        };
        let Function::Coalesce(args) = f.as_ref() else {
            panic!("expected COALESCE");
        };
        assert_eq!(args.len(), 2);
        assert_eq!(args[1], Value::from(0));

        let Value::Binary(sum) = &args[0] else {
            panic!("expected a sum");
        };
        assert_eq!(sum.op(), ArithmeticOp::Sum);
        assert_eq!(
            sum.right(),
            &Value::from(SqlBinaryExpression::new(ArithmeticOp::Diff, 3, 1))
        );

        let expected_hit = Function::Nullif(
            Locate::new("a", Substring::new(Column::new("name"), 3)).into(),
            Value::from(0),
        );
        assert_eq!(sum.left(), &Value::from(expected_hit));
    }

    #[test]
    fn test_start_appears_twice() {
        let locate = Locate::new("a", Column::new("name"))
            .with_start(Literal::parameter("start"));
        assert_eq!(start_of(&rewrite_locate_with_offset(&locate)), 2);
    }
}
