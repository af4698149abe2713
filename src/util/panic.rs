/// Asserts that running the provided block panics. The block is run behind
/// [`AssertUnwindSafe`](std::panic::AssertUnwindSafe), so tests can go on to inspect whatever it
/// borrowed once unwinding has finished.
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "Expected the block to panic.")
    };
    ($run:block, $msg:expr) => {
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $run));
        assert!(result.is_err(), "{}", $msg);
    };
}

pub(crate) use assert_panics;
