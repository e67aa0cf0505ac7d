use std::fmt::Write;

/// A query whose selection sets nest `depth` levels deep, each level
/// selecting an aliased `id` beside the next level.
pub fn deeply_nested_query(depth: usize) -> String {
    let mut out = String::from("query Nested {\n");
    for level in 0..depth {
        writeln!(out, "{:indent$}level{level}(depth: {level}) {{", "", indent = level * 2 + 2).unwrap();
        writeln!(out, "{:indent$}key{level}: id", "", indent = level * 2 + 4).unwrap();
    }
    writeln!(out, "{:indent$}leaf", "", indent = depth * 2 + 2).unwrap();
    for level in (0..depth).rev() {
        writeln!(out, "{:indent$}}}", "", indent = level * 2 + 2).unwrap();
    }
    out.push_str("}\n");
    out
}

/// A document of `count` named operations with variables and a fragment
/// spread each, followed by the shared fragment.
pub fn many_operations(count: usize) -> String {
    let mut out = String::new();
    for i in 0..count {
        writeln!(
            out,
            "query Op{i}($id: ID!, $n: Int = {i}) {{ node(id: $id) {{ ...Shared total(n: $n) }} }}",
        )
        .unwrap();
    }
    out.push_str("fragment Shared on Node { id name }\n");
    out
}
