//! Font resources: bundled custom faces plus system faces looked up by
//! name, the way the host font service hands them out.

use embedded_graphics::mono_font::{ascii, MonoFont};
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

/// Bundled font assets compiled into the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontResource {
    /// 24 pt face for the time readout.
    Sans24,
    /// 18 pt face for the weather line.
    Sans18,
}

/// System face keys known to the host font service.
pub const KEY_GOTHIC_14: &str = "gothic-14";
pub const KEY_GOTHIC_18: &str = "gothic-18";
pub const KEY_GOTHIC_24: &str = "gothic-24";

/// Resolve a bundled font resource.
pub fn custom(resource: FontResource) -> &'static MonoFont<'static> {
    match resource {
        FontResource::Sans24 => &PROFONT_24_POINT,
        FontResource::Sans18 => &PROFONT_18_POINT,
    }
}

/// Resolve a system face by name. Unknown keys yield `None`.
pub fn system(name: &str) -> Option<&'static MonoFont<'static>> {
    match name {
        KEY_GOTHIC_14 => Some(&ascii::FONT_6X13),
        KEY_GOTHIC_18 => Some(&ascii::FONT_9X18),
        KEY_GOTHIC_24 => Some(&ascii::FONT_10X20),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_faces_have_distinct_sizes() {
        let large = custom(FontResource::Sans24);
        let small = custom(FontResource::Sans18);
        assert_ne!(large.character_size, small.character_size);
    }

    #[test]
    fn system_lookup_by_key() {
        assert!(system(KEY_GOTHIC_14).is_some());
        assert!(system(KEY_GOTHIC_18).is_some());
        assert!(system(KEY_GOTHIC_24).is_some());
        assert!(system("gothic-99").is_none());
    }
}
