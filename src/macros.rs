// Crate-internal logging shims. They forward to `log` when the `log` feature is
// enabled and expand to nothing otherwise, so the default build stays dependency-free
// at runtime.

#[cfg(feature = "log")]
macro_rules! trace {
    ($($arg:tt)*) => {
        ::log::trace!(target: "avl_ost", $($arg)*)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! debug {
    ($($arg:tt)*) => {
        ::log::debug!(target: "avl_ost", $($arg)*)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! debug {
    ($($arg:tt)*) => {};
}
