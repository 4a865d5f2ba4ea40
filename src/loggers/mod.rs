// src/loggers/mod.rs

pub mod global;
pub mod logger;

pub use global::{
    current, debug, debug_ctx, error, error_ctx, info, info_ctx, init, set_sink_target, warn,
    warn_ctx, with, with_group,
};
pub use logger::Logger;

#[macro_export]
macro_rules! log_base {
    // No kv pairs
    ($level:expr, $msg:expr) => {
        $crate::log_base!($level, $msg, );
    };
    // With kv pairs (zero or more)
    ($level:expr, $msg:expr, $( $k:expr => $v:expr ),* $(,)? ) => {
        {
            let logger = $crate::loggers::current();
            // Level filtering: skip attribute conversion for suppressed records
            if logger.enabled($level) {
                logger.log($level, $msg, vec![ $( $crate::records::Attr::new($k, $v) ),* ]);
            }
        }
    };
}

/// Builds a `Vec<Attr>` from `"key" => value` pairs.
#[macro_export]
macro_rules! attrs {
    () => { ::std::vec::Vec::<$crate::records::Attr>::new() };
    ( $( $k:expr => $v:expr ),+ $(,)? ) => {
        vec![ $( $crate::records::Attr::new($k, $v) ),+ ]
    };
}

#[macro_export]
macro_rules! debug {
    ($msg:expr $(, $k:expr => $v:expr )* $(,)? ) => {
        $crate::log_base!($crate::records::Level::Debug, $msg $(, $k => $v )* )
    };
}

#[macro_export]
macro_rules! info {
    ($msg:expr $(, $k:expr => $v:expr )* $(,)? ) => {
        $crate::log_base!($crate::records::Level::Info, $msg $(, $k => $v )* )
    };
}

#[macro_export]
macro_rules! warn {
    ($msg:expr $(, $k:expr => $v:expr )* $(,)? ) => {
        $crate::log_base!($crate::records::Level::Warn, $msg $(, $k => $v )* )
    };
}

#[macro_export]
macro_rules! error {
    ($msg:expr $(, $k:expr => $v:expr )* $(,)? ) => {
        $crate::log_base!($crate::records::Level::Error, $msg $(, $k => $v )* )
    };
}
