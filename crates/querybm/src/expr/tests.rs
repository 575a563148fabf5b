use super::*;

fn placeholders(sql: &str) -> usize {
    sql.matches('?').count()
}

fn a() -> ConditionExpr {
    field("a", eq(1))
}

fn b() -> ConditionExpr {
    field("b", eq(2))
}

fn c() -> ConditionExpr {
    field("c", eq(3))
}

fn d() -> ConditionExpr {
    field("d", eq(4))
}

#[test]
fn test_comparisons() {
    let cases = [
        (eq(1), "x = ?"),
        (not_eq(1), "x <> ?"),
        (gt(1), "x > ?"),
        (gte(1), "x >= ?"),
        (lt(1), "x < ?"),
        (lte(1), "x <= ?"),
    ];
    for (body, expected) in cases {
        let (sql, values) = field("x", body).build();
        assert_eq!(sql, expected);
        assert_eq!(values, vec![Value::Int(1)]);
    }
}

#[test]
fn test_like_patterns() {
    let expr = field("title", like("Rust%"));
    assert_eq!(expr.render(), "title LIKE ?");
    assert_eq!(expr.values(), vec![Value::from("Rust%")]);

    assert_eq!(
        field("title", starts_with("Go")).values(),
        vec![Value::from("Go%")]
    );
    assert_eq!(
        field("title", ends_with("Go")).values(),
        vec![Value::from("%Go")]
    );
    assert_eq!(
        field("title", contains("Go")).values(),
        vec![Value::from("%Go%")]
    );
}

#[test]
fn test_in_list() {
    let expr = field("id", in_list([1, 2, 3]));
    assert_eq!(expr.render(), "id IN (?,?,?)");
    assert_eq!(expr.values(), vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
}

#[test]
fn test_in_list_empty() {
    let expr = field("id", in_list(Vec::<i64>::new()));
    assert_eq!(expr.render(), "");
    assert!(expr.values().is_empty());
    assert!(expr.is_empty());
}

#[test]
fn test_eq_or_in_delegates() {
    assert_eq!(
        field("id", eq_or_in([7])).build(),
        field("id", eq(7)).build()
    );
    assert_eq!(
        field("id", eq_or_in([7, 8])).build(),
        field("id", in_list([7, 8])).build()
    );
    assert_eq!(field("id", eq_or_in(Vec::<i32>::new())).render(), "");
}

#[test]
fn test_between() {
    let expr = field("yr", between(2000, 2010));
    assert_eq!(expr.render(), "yr BETWEEN ? AND ?");
    assert_eq!(expr.values(), vec![Value::Int(2000), Value::Int(2010)]);
}

#[test]
fn test_in_range_both_bounds() {
    let expr = field("yr", in_range(Some(10), Some(20)));
    assert_eq!(expr.render(), "yr >= ? AND yr < ?");
    assert_eq!(expr.values(), vec![Value::Int(10), Value::Int(20)]);
}

#[test]
fn test_in_range_single_bound() {
    let expr = field("yr", in_range(None::<i32>, Some(20)));
    assert_eq!(expr.render(), "yr < ?");
    assert_eq!(expr.values(), vec![Value::Int(20)]);

    let expr = field("yr", in_range(Some(10), None::<i32>));
    assert_eq!(expr.render(), "yr >= ?");
    assert_eq!(expr.values(), vec![Value::Int(10)]);
}

#[test]
fn test_in_range_no_bounds() {
    let expr = field("yr", in_range(None::<i32>, None::<i32>));
    assert_eq!(expr.render(), "");
    assert!(expr.values().is_empty());
}

#[test]
fn test_null_checks() {
    let expr = field("deleted_at", is_null());
    assert_eq!(expr.render(), "deleted_at IS NULL");
    assert!(expr.values().is_empty());
    assert_eq!(field("deleted_at", is_not_null()).render(), "deleted_at IS NOT NULL");
}

#[test]
fn test_field_without_body() {
    let expr = field("x", None::<FieldBody>);
    assert_eq!(expr.render(), "");
    assert!(expr.values().is_empty());
}

#[test]
fn test_empty_connectives() {
    for expr in [and([]), or([])] {
        assert_eq!(expr.render(), "");
        assert!(expr.values().is_empty());
    }
}

#[test]
fn test_single_child_renders_verbatim() {
    assert_eq!(and([a()]).build(), a().build());
    assert_eq!(or([and([a(), b()])]).render(), "a = ? AND b = ?");
}

#[test]
fn test_same_connective_is_not_bracketed() {
    let expr = and([and([a(), b()]), c()]);
    assert_eq!(expr.render(), "a = ? AND b = ? AND c = ?");
    assert_eq!(and([a(), b(), c()]).render(), "a = ? AND b = ? AND c = ?");
}

#[test]
fn test_different_connective_is_bracketed() {
    assert_eq!(and([or([a(), b()]), c()]).render(), "(a = ? OR b = ?) AND c = ?");
    assert_eq!(
        or([and([a(), b()]), and([c(), d()])]).render(),
        "(a = ? AND b = ?) OR (c = ? AND d = ?)"
    );
    assert_eq!(
        and([or([a(), b()]), and([c(), d()])]).render(),
        "(a = ? OR b = ?) AND c = ? AND d = ?"
    );
}

#[test]
fn test_values_follow_child_order() {
    let expr = or([and([a(), b()]), and([c(), d()])]);
    assert_eq!(
        expr.values(),
        vec![Value::Int(1), Value::Int(2), Value::Int(3), Value::Int(4)]
    );
}

#[test]
fn test_empty_children_are_skipped() {
    let expr = and([
        field("id", in_list(Vec::<i32>::new())),
        a(),
        field("yr", in_range(None::<i32>, None::<i32>)),
    ]);
    assert_eq!(expr.render(), "a = ?");
    assert_eq!(expr.values(), vec![Value::Int(1)]);

    let expr = or([and([field("x", None::<FieldBody>)]), a(), b()]);
    assert_eq!(expr.render(), "a = ? OR b = ?");
}

#[test]
fn test_nested_node_with_one_rendering_child_keeps_brackets() {
    let empty = || field("x", in_list(Vec::<i64>::new()));

    let expr = and([and([empty(), or([a(), b()])]), c()]);
    let (sql, values) = expr.build();
    assert_eq!(sql, "(a = ? OR b = ?) AND c = ?");
    assert_eq!(placeholders(&sql), 3);
    assert_eq!(values, vec![Value::Int(1), Value::Int(2), Value::Int(3)]);

    let expr = or([or([empty(), and([a(), b()])]), c()]);
    assert_eq!(expr.render(), "(a = ? AND b = ?) OR c = ?");

    let expr = and([or([empty(), field("yr", in_range(Some(1990), Some(2000)))]), c()]);
    assert_eq!(expr.render(), "yr >= ? AND yr < ? AND c = ?");

    let expr = or([and([empty(), empty()]), a()]);
    assert_eq!(expr.render(), "a = ?");
}

#[test]
fn test_rendered_connective() {
    let empty = || field("x", in_list(Vec::<i64>::new()));

    assert_eq!(and([empty()]).connective(), None);
    assert_eq!(and([empty(), or([a(), b()])]).connective(), Some(Connective::Or));
    assert_eq!(and([empty(), a()]).connective(), None);
    assert_eq!(or([a(), b()]).connective(), Some(Connective::Or));
}

#[test]
fn test_two_sided_range_is_bracketed_inside_or() {
    let expr = or([field("yr", in_range(Some(1990), Some(2000))), a()]);
    assert_eq!(expr.render(), "(yr >= ? AND yr < ?) OR a = ?");

    let expr = and([field("yr", in_range(Some(1990), Some(2000))), a()]);
    assert_eq!(expr.render(), "yr >= ? AND yr < ? AND a = ?");

    let expr = or([field("yr", in_range(Some(1990), None::<i32>)), a()]);
    assert_eq!(expr.render(), "yr >= ? OR a = ?");
}

#[test]
fn test_raw_expression() {
    let expr = and([ConditionExpr::raw("(x = ? OR y = ?)", [1, 2]), c()]);
    assert_eq!(expr.render(), "(x = ? OR y = ?) AND c = ?");
    assert_eq!(expr.values(), vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
}

#[test]
fn test_placeholder_count_matches_values() {
    let exprs = [
        and([a(), or([b(), field("id", in_list([1, 2, 3]))])]),
        or([
            field("yr", in_range(Some(1), Some(2))),
            and([field("n", is_null()), field("t", between("a", "z"))]),
        ]),
        and([field("id", eq_or_in([5])), field("k", in_list(Vec::<i32>::new()))]),
    ];
    for expr in exprs {
        let (sql, values) = expr.build();
        assert_eq!(placeholders(&sql), values.len(), "{sql}");
    }
}

#[test]
fn test_connective_parse() {
    assert_eq!(" AND ".parse::<Connective>().unwrap(), Connective::And);
    assert_eq!("or".parse::<Connective>().unwrap(), Connective::Or);
    assert!("xor".parse::<Connective>().is_err());
    assert_eq!(Connective::Or.to_string(), "OR");
}
