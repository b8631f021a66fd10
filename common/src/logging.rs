/// Target used by [`success!`](crate::success) so formatters can tell
/// a completed step apart from ordinary `info` output.
pub const SUCCESS_TARGET: &str = "netkit::success";

/// Logs a completed step at `INFO` under [`SUCCESS_TARGET`].
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: "netkit::success", $($arg)*)
    };
}
