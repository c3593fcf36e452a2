//! Route table mapping request paths to a user name.
//!
//! Two names have dedicated routes with statically bound names; `/` redirects
//! to the first of them, and any other single segment binds the
//! percent-decoded segment itself. The resolver never errors.

use percent_encoding::percent_decode_str;

/// Target of the `/` redirect.
pub const DEFAULT_PATH: &str = "/E-Ting";

const MAX_REDIRECT_HOPS: usize = 8;

/// Outcome of resolving one request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The shell should re-resolve at `to` (browser-style redirect).
    Redirect { to: String },
    /// Render the stamp card for `user_name`.
    Render { user_name: String },
    /// Multi-segment paths are not ours; the shell owns not-found display.
    NotFound,
}

/// One declared route. The dynamic single-segment match is the table's
/// fallback, not an entry.
#[derive(Debug, Clone)]
struct Route {
    path: &'static str,
    binding: Binding,
}

#[derive(Debug, Clone)]
enum Binding {
    Redirect(&'static str),
    /// Statically bound name, not read from the URL at match time.
    Static(&'static str),
}

/// Declarative route table. `Default` yields the stamp-card table.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            routes: vec![
                Route {
                    path: "/",
                    binding: Binding::Redirect(DEFAULT_PATH),
                },
                Route {
                    path: "/E-Ting",
                    binding: Binding::Static("E-Ting"),
                },
                Route {
                    path: "/S-Ting",
                    binding: Binding::Static("S-Ting"),
                },
            ],
        }
    }
}

impl RouteTable {
    /// Resolves `path` against the declared routes, falling back to the
    /// dynamic single-segment binding. Arbitrary segments pass through as
    /// user names, including ones that decode to the empty string.
    pub fn resolve(&self, path: &str) -> Resolution {
        for route in &self.routes {
            if route.path == path {
                return match route.binding {
                    Binding::Redirect(to) => Resolution::Redirect { to: to.to_string() },
                    Binding::Static(name) => Resolution::Render {
                        user_name: name.to_string(),
                    },
                };
            }
        }
        let segment = path.strip_prefix('/').unwrap_or(path);
        if segment.contains('/') {
            return Resolution::NotFound;
        }
        Resolution::Render {
            user_name: decode_segment(segment),
        }
    }

    /// Browser-style resolve: follows redirects until a terminal outcome.
    /// If the hop cap is hit (cyclic table), the last redirect is returned
    /// so the caller can report it.
    pub fn resolve_following_redirects(&self, path: &str) -> Resolution {
        let mut current = path.to_string();
        for _ in 0..MAX_REDIRECT_HOPS {
            match self.resolve(&current) {
                Resolution::Redirect { to } => current = to,
                terminal => return terminal,
            }
        }
        Resolution::Redirect { to: current }
    }
}

/// Percent-decodes a path segment; a segment that does not decode as UTF-8
/// is used as written.
fn decode_segment(segment: &str) -> String {
    match percent_decode_str(segment).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => segment.to_string(),
    }
}
