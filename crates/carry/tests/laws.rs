use carry::{data, lift, Data, Transform};
use rstest::rstest;

fn foo(x: i32, y: f64, z: String) -> Data<(i32, f64, String)> {
    data!(2 + x, y / 4.0, z + "foo")
}

fn bar(x: i32, y: f64, z: String) -> Data<(i32, f64, String)> {
    data!(2 + x, y / 4.0, z + "bar")
}

fn swap(x: i32, y: f64, z: String) -> Data<(String, f64, i32)> {
    data!(z, y, x)
}

fn summarize(z: String, y: f64, x: i32) -> Data<(String,)> {
    data!(format!("{z}:{y}:{x}"))
}

fn scale(x: i32, y: f64, z: String) -> (i64, f64, usize) {
    (i64::from(x) * 3, y * 2.0, z.len())
}

#[rstest]
#[case(1, 2.0, "3")]
#[case(0, 0.0, "")]
#[case(-17, 1e9, "hello")]
fn test_identity_law(#[case] x: i32, #[case] y: f64, #[case] z: &str) {
    let original = data!(x, y, z.to_string());
    let rebound = original.clone().bind(|a, b, c| data!(a, b, c));
    assert_eq!(rebound, original);
}

#[rstest]
#[case(1, 2.0, "3")]
#[case(-4, 0.5, "x")]
#[case(100, -8.0, "")]
fn test_associativity(#[case] x: i32, #[case] y: f64, #[case] z: &str) {
    let b = Transform::new(swap);
    let c = Transform::new(summarize);

    let grouped_left = Transform::new(foo).and_then(swap).and_then(summarize);
    let grouped_right =
        Transform::new(foo).and_then(|x, y, z| b.call(x, y, z).bind(|z, y, x| c.call(z, y, x)));

    assert_eq!(
        grouped_left.call(x, y, z.to_string()),
        grouped_right.call(x, y, z.to_string())
    );
}

#[rstest]
#[case(1, 2.0, "3")]
#[case(7, -1.5, "seven")]
fn test_lift_equivalence(#[case] x: i32, #[case] y: f64, #[case] z: &str) {
    let sugared = Transform::new(foo).and_then_lift(scale);
    let explicit = Transform::new(foo).then(lift(scale));
    assert_eq!(
        sugared.call(x, y, z.to_string()),
        explicit.call(x, y, z.to_string())
    );
}

#[test]
fn test_arity_is_preserved_by_chaining() {
    fn params<Args, Out, S>(_: &Transform<Args, Out, S>) -> std::marker::PhantomData<Args> {
        std::marker::PhantomData
    }

    let root = Transform::new(foo);
    let chained = Transform::new(foo)
        .and_then(bar)
        .and_then(swap)
        .and_then(summarize)
        .and_then(|s| data!(s.len()));

    let _: std::marker::PhantomData<(i32, f64, String)> = params(&root);
    let _: std::marker::PhantomData<(i32, f64, String)> = params(&chained);
    assert_eq!(root.arity(), 3);
    assert_eq!(chained.arity(), 3);
}

#[test]
fn test_value_accessor() {
    assert_eq!(data!(5).value(), 5);
    assert_eq!(data!("five").get(), &"five");
}
