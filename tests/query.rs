use urlgen::{Queries, QueryScalar};

struct QueryTest(Vec<(Queries, &'static str)>);

impl QueryTest {
    fn run(self) {
        for (queries, expected) in self.0 {
            assert_eq!(queries.to_query_string(), expected, "{:?}", queries);
        }
    }
}

#[test]
fn empty_bag() {
    QueryTest(vec![(Queries::new(), "")]).run()
}

#[test]
fn scalar_values() {
    QueryTest(vec![
        (Queries::from_iter([("string", "string")]), "string=string"),
        (Queries::from_iter([("number", 1i64)]), "number=1"),
        (Queries::from_iter([("boolean", true)]), "boolean=true"),
        (
            Queries::from_iter([("null", QueryScalar::Null)]),
            "null=null",
        ),
        (Queries::from_iter([("bigint", 123i128)]), "bigint=123"),
        (Queries::from_iter([("empty", "")]), "empty="),
    ])
    .run()
}

#[test]
fn keys_sorted() {
    QueryTest(vec![(
        Queries::from_iter([("z", "last"), ("a", "first"), ("n", "middle")]),
        "a=first&n=middle&z=last",
    )])
    .run()
}

#[test]
fn sorting_is_insertion_order_independent() {
    let mut forward = Queries::new();
    forward.insert("a", "first");
    forward.insert("z", "last");

    let mut reverse = Queries::new();
    reverse.insert("z", "last");
    reverse.insert("a", "first");

    assert_eq!(forward.to_query_string(), "a=first&z=last");
    assert_eq!(forward.to_query_string(), reverse.to_query_string());
}

#[test]
fn values_encoded() {
    QueryTest(vec![
        (
            Queries::from_iter([("encode", "りんご")]),
            "encode=%E3%82%8A%E3%82%93%E3%81%94",
        ),
        (
            Queries::from_iter([("string", "string with space")]),
            "string=string%20with%20space",
        ),
    ])
    .run()
}

#[test]
fn lists_expand_in_order() {
    QueryTest(vec![
        (
            Queries::from_iter([("array", vec!["1", "2", "3"])]),
            "array=1&array=2&array=3",
        ),
        (
            // expanded pairs stay contiguous under their key
            Queries::from_iter([("b", vec!["2", "1"]), ("a", vec!["x"])]),
            "a=x&b=2&b=1",
        ),
    ])
    .run()
}

#[test]
fn mixed_scalars_and_lists() {
    let mut queries = Queries::new();
    queries.insert("search", vec!["apple", "banana"]);
    queries.insert("page", 2i64);
    assert_eq!(
        queries.to_query_string(),
        "page=2&search=apple&search=banana"
    );
}
