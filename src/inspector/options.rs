//! Per-request inspection flags.

use crate::config::FlagNames;
use crate::context::Request;

/// Which inspection modes a request asked for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InspectOptions {
    pub show_keys: bool,
    pub save_keys: bool,
    pub show_hints: bool,
}

impl InspectOptions {
    /// Reads the flags from request properties; a flag is on when its property is present.
    #[must_use]
    pub fn from_request(request: &Request, names: &FlagNames) -> Self {
        Self {
            show_keys: request.has_property(&names.show_keys),
            save_keys: request.has_property(&names.save_keys),
            show_hints: request.has_property(&names.show_hints),
        }
    }

    /// True if at least one mode is on.
    #[must_use]
    pub const fn any(&self) -> bool {
        self.show_keys || self.save_keys || self.show_hints
    }
}
