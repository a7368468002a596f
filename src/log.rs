//! Utilities for logging messages from the library.
//!
//! Logging is off by default.  Set the `WANDKIT_LOG` environment variable to any value
//! to have the library print what it does to stdout.

use once_cell::sync::Lazy;

#[doc(hidden)]
#[macro_export]
macro_rules! wandkit_log {
    (
        $session:expr,
        $($arg:tt)+
    ) => {
        if $session.log_enabled() {
            println!("{}", format_args!($($arg)+));
        }
    };
}

pub fn log_enabled() -> bool {
    static ENABLED: Lazy<bool> = Lazy::new(|| ::std::env::var_os("WANDKIT_LOG").is_some());

    *ENABLED
}
