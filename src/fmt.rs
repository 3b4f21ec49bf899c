use crate::{Uri, UriBuilder};
use core::fmt;

impl fmt::Debug for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Uri")
            .field("scheme", &self.scheme())
            .field("userinfo", &self.userinfo())
            .field("host", &self.host())
            .field("port", &self.port())
            .field("path", &self.path())
            .field("query", &self.query())
            .field("fragment", &self.fragment())
            .finish()
    }
}

impl fmt::Display for Uri {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_str(), f)
    }
}

impl fmt::Debug for UriBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UriBuilder")
            .field("base", &self.base)
            .field("fragment", &self.fragment)
            .field("host", &self.host)
            .field("path", &self.path)
            .field("scheme", &self.scheme)
            .field("port", &self.port)
            // Keeps passwords out of logs.
            .field("credentials", &self.credentials.as_ref().map(|c| &c.user))
            .field("query", &self.query)
            .finish()
    }
}
