// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression — works for literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Column lookup shorthand for chart builders.
/// Expands to `table.column(name)?`, so the caller's error type must
/// accept `DataError` via `From`.
#[macro_export]
macro_rules! col {
    ($table:expr, $name:expr) => {
        $table.column($name)?
    };
}
