//! Shared pieces of the `morsencode` command-line tool.

pub mod commands;
#[cfg(feature = "trace")]
pub mod trace_init;

/// Print the error with a context message and exit with status 1.
#[macro_export]
macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}
