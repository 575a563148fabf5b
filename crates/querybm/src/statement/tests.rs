use super::*;
use crate::expr::{eq, field, in_list, or};

fn placeholders(sql: &str) -> usize {
    sql.matches('?').count()
}

// ==================== Block ====================

#[test]
fn test_block_joins_with_delimiter() {
    let mut block = Block::new(", ");
    assert!(block.is_empty());
    block.push("a ASC");
    block.add("b DESC", vec![]);
    assert_eq!(block.content(), "a ASC, b DESC");
    assert!(block.values().is_empty());
}

#[test]
fn test_block_ignores_empty_fragment() {
    let mut block = Block::new(" ");
    block.add("", vec![Value::Int(1)]);
    assert!(block.is_empty());
    assert!(block.values().is_empty());

    block.add("LIMIT ?", vec![Value::Int(10)]);
    block.add("", vec![Value::Int(99)]);
    block.add("OFFSET ?", vec![Value::Int(5)]);
    assert_eq!(block.content(), "LIMIT ? OFFSET ?");
    assert_eq!(block.values(), &[Value::Int(10), Value::Int(5)]);
}

// ==================== TableRef / TableBlock ====================

#[test]
fn test_table_ref_parse() {
    let t = TableRef::parse("customers");
    assert_eq!(t.name, "customers");
    assert_eq!(t.alias, None);
    assert_eq!(t.key(), "customers");

    let t = TableRef::parse("customers c");
    assert_eq!(t.alias.as_deref(), Some("c"));
    assert!(!t.explicit_as);
    assert_eq!(t.to_string(), "customers c");

    let t = TableRef::parse("  Customers   as C ");
    assert_eq!(t.name, "Customers");
    assert_eq!(t.alias.as_deref(), Some("C"));
    assert!(t.explicit_as);
    assert_eq!(t.key(), "c");
    assert_eq!(t.to_string(), "Customers AS C");
}

#[test]
fn test_table_block_without_joins() {
    let block = TableBlock::new("books");
    assert_eq!(block.build(), ("books".to_string(), vec![]));
}

#[test]
fn test_table_block_joins_in_order() {
    let mut block = TableBlock::new("orders o");
    assert!(block.inner_join("customers c", "o.customer_id = c.id", vec![]));
    assert!(block.left_outer_join(
        "payments AS p",
        "p.order_id = o.id AND p.status = ?",
        vec![Value::from("paid")],
    ));
    let (sql, values) = block.build();
    assert_eq!(
        sql,
        "orders o INNER JOIN customers c ON o.customer_id = c.id \
         LEFT OUTER JOIN payments AS p ON p.order_id = o.id AND p.status = ?"
    );
    assert_eq!(values, vec![Value::from("paid")]);
}

#[test]
fn test_table_block_drops_duplicate_alias() {
    let mut block = TableBlock::new("orders o");
    block.inner_join("customers c", "o.customer_id = c.id AND c.region = ?", vec![Value::from("eu")]);
    let before = block.clone();

    assert!(!block.inner_join("customers c", "o.customer_id = c.id", vec![Value::from("us")]));
    assert!(!block.left_outer_join("clients AS C", "o.client_id = C.id", vec![]));

    assert_eq!(block, before);
    assert_eq!(block.joins().len(), 1);
    assert_eq!(block.build().1, vec![Value::from("eu")]);
}

#[test]
fn test_table_block_same_table_different_alias() {
    let mut block = TableBlock::new("employees e");
    assert!(block.inner_join("employees m", "e.manager_id = m.id", vec![]));
    assert!(block.inner_join("employees", "e.mentor_id = employees.id", vec![]));
    assert_eq!(block.joins().len(), 2);
    assert!(block.has_join("M"));
}

#[test]
fn test_table_block_base_is_not_checked() {
    let mut block = TableBlock::new("authors");
    assert!(block.inner_join("authors", "1 = 1", vec![]));
}

// ==================== WhereBlock ====================

#[test]
fn test_where_block_is_empty_when_nothing_renders() {
    let mut where_ = WhereBlock::new(Connective::And);
    assert!(where_.is_empty());
    where_.add(field("id", in_list(Vec::<i32>::new())));
    assert!(where_.is_empty());
    where_.add(field("id", eq(1)));
    assert!(!where_.is_empty());
}

#[test]
fn test_where_block_or_root() {
    let mut where_ = WhereBlock::new(Connective::Or);
    where_.add(field("a", eq(1)));
    where_.add(field("b", eq(2)));
    assert_eq!(where_.build().0, "a = ? OR b = ?");
}

// ==================== Statement ====================

#[test]
fn test_statement_full_build() {
    let mut st = Statement::new("users", ["id", "name"]);
    st.where_.add(field("status", eq("active")));
    st.sort.push("created_at DESC");
    st.limit_offset.add("LIMIT ? OFFSET ?", vec![Value::Int(10), Value::Int(5)]);

    let (sql, args) = st.build();
    assert_eq!(
        sql,
        "SELECT id, name FROM users WHERE status = ? ORDER BY created_at DESC LIMIT ? OFFSET ?"
    );
    assert_eq!(args, vec![Value::from("active"), Value::Int(10), Value::Int(5)]);
}

#[test]
fn test_statement_minimal() {
    let st = Statement::new("users", ["id"]);
    assert_eq!(st.build(), ("SELECT id FROM users".to_string(), vec![]));
}

#[test]
fn test_statement_without_fields_selects_star() {
    let st = Statement::new("users", Vec::<String>::new());
    assert_eq!(st.build().0, "SELECT * FROM users");
}

#[test]
fn test_statement_skips_empty_where() {
    let mut st = Statement::new("users", ["id"]);
    st.where_.add(field("id", in_list(Vec::<i64>::new())));
    assert_eq!(st.build().0, "SELECT id FROM users");
}

#[test]
fn test_statement_args_follow_clause_order() {
    let mut st = Statement::new("books b", ["b.id", "a.name"]);
    st.table.inner_join("authors a", "a.id = b.author_id AND a.active = ?", vec![true.into()]);
    st.where_.add(or([field("b.yr", eq(2001)), field("b.yr", eq(2002))]));
    st.where_.add(field("b.lang", eq("en")));
    st.sort.push("b.title ASC");
    st.sort.push("b.id DESC");
    st.limit_offset.add("LIMIT ?", vec![Value::Int(20)]);

    let (sql, args) = st.build();
    assert_eq!(
        sql,
        "SELECT b.id, a.name FROM books b INNER JOIN authors a ON a.id = b.author_id AND a.active = ? \
         WHERE (b.yr = ? OR b.yr = ?) AND b.lang = ? ORDER BY b.title ASC, b.id DESC LIMIT ?"
    );
    assert_eq!(
        args,
        vec![
            Value::Bool(true),
            Value::Int(2001),
            Value::Int(2002),
            Value::from("en"),
            Value::Int(20),
        ]
    );
    assert_eq!(placeholders(&sql), args.len());
}

#[test]
fn test_is_count_only() {
    assert!(is_count_only(&["COUNT(*)"]));
    assert!(is_count_only(&["COUNT(*) AS total"]));
    assert!(is_count_only(&["count(id)"]));
    assert!(is_count_only(&["COUNT(DISTINCT id)"]));
    assert!(!is_count_only(&["COUNT(*)", "name"]));
    assert!(!is_count_only::<&str>(&[]));
    assert!(!is_count_only(&["id"]));
    assert!(!is_count_only(&["COUNTERFEIT"]));
    assert!(!is_count_only(&["COUNT()"]));
    assert!(!is_count_only(&["discount(price)"]));
    assert!(!is_count_only(&["AccountCount(id)"]));
    assert!(is_count_only(&["  count(*)"]));
    assert!(Statement::new("t", ["COUNT(*)"]).is_count_only());
}
