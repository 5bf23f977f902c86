// Logging wrappers: forward to the `log` facade when the `log` feature is on, otherwise compile to nothing
// while still type-checking the format arguments.

#[cfg(feature = "log")]
#[doc(hidden)]
pub use ::log as backend;

#[cfg(feature = "log")]
#[macro_export]
macro_rules! forward_log {
    ($a:ident, $($b:tt)*) => {
        $crate::log::backend::$a!(target: "voxel_shape_gen", $($b)*)
    };
}

#[cfg(not(feature = "log"))]
#[macro_export]
macro_rules! forward_log {
    ($a:ident, $($b:tt)*) => {
        { let _ = ::core::format_args!($($b)*); }
    };
}

#[macro_export]
macro_rules! debug {
    ($($a:tt)*) => { $crate::forward_log!(debug, $($a)*) };
}

#[macro_export]
macro_rules! info {
    ($($a:tt)*) => { $crate::forward_log!(info, $($a)*) };
}

#[macro_export]
macro_rules! warn {
    ($($a:tt)*) => { $crate::forward_log!(warn, $($a)*) };
}

#[macro_export]
macro_rules! error {
    ($($a:tt)*) => { $crate::forward_log!(error, $($a)*) };
}
