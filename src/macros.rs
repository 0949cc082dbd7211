// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: works for literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! push_line {
    // writeln! into a String buffer; formatting into a String cannot fail.
    ($buf:expr, $($arg:tt)*) => {{
        use ::std::fmt::Write as _;
        let _ = writeln!($buf, $($arg)*);
    }};
}
