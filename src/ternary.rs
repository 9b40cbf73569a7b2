/// A one-line conditional.  Rust's `if` is already an expression, but
/// `cargo fmt` spreads it over five lines, and the edge-replication
/// rules for the 3×3 neighbourhood read far better as a column of
/// short ternaries.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}
