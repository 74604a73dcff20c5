/// Configuration for continuation collapsing.
///
/// Selects which whitespace policy applies where an escaped newline joins
/// two physical lines.
///
/// # Examples
///
/// ```rust
/// use linefold::{CollapseOptions, collapse_continuations};
///
/// let mut buf = b"a   \\\nb\n".to_vec();
/// collapse_continuations(
///     &mut buf,
///     CollapseOptions {
///         posix_pedantic: true,
///     },
/// );
/// assert_eq!(buf, b"a    b\n");
/// ```
///
/// # Default
///
/// `posix_pedantic` defaults to `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollapseOptions {
    /// Whether to apply the POSIX whitespace policy at a join.
    ///
    /// In the traditional policy (`false`), trailing blanks before the
    /// backslash, the backslash-newline itself, and leading blanks on the
    /// continued line all condense into a single space. Under POSIX
    /// (`true`), trailing blanks before the join are preserved literally
    /// and only the backslash-newline (plus leading blanks on the next
    /// line) becomes the one inserted space.
    ///
    /// # Default
    ///
    /// `false`
    pub posix_pedantic: bool,
}
