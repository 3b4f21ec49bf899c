use core::num::NonZeroUsize;

/// Bounds of the components within a serialized [`Uri`], recorded while building it.
///
/// [`Uri`]: crate::Uri
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub(crate) struct Meta {
    // The index of the trailing colon.
    pub(crate) scheme_end: usize,
    pub(crate) auth_meta: Option<AuthMeta>,
    pub(crate) path_bounds: (usize, usize),
    // One byte past the last byte of query.
    pub(crate) query_end: Option<NonZeroUsize>,
    // One byte past the preceding '#'.
    pub(crate) fragment_start: Option<NonZeroUsize>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub(crate) struct AuthMeta {
    // The index of the '@' closing the userinfo.
    pub(crate) userinfo_end: Option<usize>,
    pub(crate) host_bounds: (usize, usize),
    // The explicit port when present, the scheme's default port otherwise.
    pub(crate) port: Option<u16>,
}
