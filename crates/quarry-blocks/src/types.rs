use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Deserialize;
use serde::de::{Deserializer, Error as _};
use thiserror::Error;

/// Default namespace for identifiers written without one.
pub const DEFAULT_NAMESPACE: &str = "quarry";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("empty segment in identifier {0:?}")]
    EmptySegment(String),
    #[error("invalid character {0:?} in identifier {1:?}")]
    InvalidChar(char, String),
}

/// Namespaced resource identifier, rendered as `namespace:path`.
///
/// Allowed characters are `a-z`, `0-9`, `_`, `-`, `.` in both segments,
/// plus `/` in the path.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Identifier {
    namespace: String,
    path: String,
}

impl Identifier {
    pub fn new(
        namespace: impl Into<String>,
        path: impl Into<String>,
    ) -> Result<Self, IdentifierError> {
        let namespace = namespace.into();
        let path = path.into();
        check_segment(&namespace, &path, false)?;
        check_segment(&path, &namespace, true)?;
        Ok(Self { namespace, path })
    }

    /// Identifier in the [`DEFAULT_NAMESPACE`].
    pub fn short(path: impl Into<String>) -> Result<Self, IdentifierError> {
        Self::new(DEFAULT_NAMESPACE, path)
    }

    /// Well-known "drops nothing" sentinel for drop-table references.
    pub fn empty_drop_table() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            path: "empty".to_string(),
        }
    }

    #[inline]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }
}

fn check_segment(seg: &str, other: &str, is_path: bool) -> Result<(), IdentifierError> {
    let render = || {
        if is_path {
            format!("{other}:{seg}")
        } else {
            format!("{seg}:{other}")
        }
    };
    if seg.is_empty() {
        return Err(IdentifierError::EmptySegment(render()));
    }
    for ch in seg.chars() {
        let ok = ch.is_ascii_lowercase()
            || ch.is_ascii_digit()
            || ch == '_'
            || ch == '-'
            || ch == '.'
            || (is_path && ch == '/');
        if !ok {
            return Err(IdentifierError::InvalidChar(ch, render()));
        }
    }
    Ok(())
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl FromStr for Identifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((ns, path)) => Identifier::new(ns, path),
            None => Identifier::short(s),
        }
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

/// Palette index used for map rendering of a block.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct MapColor(pub u8);

impl MapColor {
    pub const NONE: MapColor = MapColor(0);
    pub const GRASS: MapColor = MapColor(1);
    pub const SAND: MapColor = MapColor(2);
    pub const IRON: MapColor = MapColor(6);
    pub const SNOW: MapColor = MapColor(8);
    pub const CLAY: MapColor = MapColor(9);
    pub const DIRT: MapColor = MapColor(10);
    pub const STONE: MapColor = MapColor(11);
    pub const WATER: MapColor = MapColor(12);
    pub const WOOD: MapColor = MapColor(13);
}

/// Categorical dye color; resolves to its associated [`MapColor`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DyeColor {
    White,
    Orange,
    Magenta,
    LightBlue,
    Yellow,
    Lime,
    Pink,
    Gray,
    LightGray,
    Cyan,
    Purple,
    Blue,
    Brown,
    Green,
    Red,
    Black,
}

impl DyeColor {
    pub fn map_color(self) -> MapColor {
        MapColor(match self {
            DyeColor::White => 8,
            DyeColor::Orange => 15,
            DyeColor::Magenta => 16,
            DyeColor::LightBlue => 17,
            DyeColor::Yellow => 18,
            DyeColor::Lime => 19,
            DyeColor::Pink => 20,
            DyeColor::Gray => 21,
            DyeColor::LightGray => 22,
            DyeColor::Cyan => 23,
            DyeColor::Purple => 24,
            DyeColor::Blue => 25,
            DyeColor::Brown => 26,
            DyeColor::Green => 27,
            DyeColor::Red => 28,
            DyeColor::Black => 29,
        })
    }
}

impl From<DyeColor> for MapColor {
    fn from(dye: DyeColor) -> MapColor {
        dye.map_color()
    }
}

/// Reference to a named sound group (footsteps, break/place sounds).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct SoundGroup(pub Identifier);

impl SoundGroup {
    pub fn stone() -> Self {
        SoundGroup(Identifier::well_known("sound/stone"))
    }

    pub fn wood() -> Self {
        SoundGroup(Identifier::well_known("sound/wood"))
    }

    pub fn grass() -> Self {
        SoundGroup(Identifier::well_known("sound/grass"))
    }

    pub fn metal() -> Self {
        SoundGroup(Identifier::well_known("sound/metal"))
    }

    pub fn glass() -> Self {
        SoundGroup(Identifier::well_known("sound/glass"))
    }
}

/// Tag identifying a family of acceptable tools.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ToolTag(pub Identifier);

impl ToolTag {
    pub fn pickaxes() -> Self {
        ToolTag(Identifier::well_known("tools/pickaxes"))
    }

    pub fn axes() -> Self {
        ToolTag(Identifier::well_known("tools/axes"))
    }

    pub fn shovels() -> Self {
        ToolTag(Identifier::well_known("tools/shovels"))
    }

    pub fn hoes() -> Self {
        ToolTag(Identifier::well_known("tools/hoes"))
    }

    pub fn swords() -> Self {
        ToolTag(Identifier::well_known("tools/swords"))
    }
}

impl Identifier {
    // Known-valid path in the default namespace; avoids threading Result
    // through the well-known constructors above.
    fn well_known(path: &str) -> Identifier {
        Identifier {
            namespace: DEFAULT_NAMESPACE.to_string(),
            path: path.to_string(),
        }
    }
}

/// Per-delegate identity handle; keys the tool-rule registry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SettingsId(u64);

impl SettingsId {
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        SettingsId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_parse_and_display() {
        let id: Identifier = "host:blocks/ore".parse().unwrap();
        assert_eq!(id.namespace(), "host");
        assert_eq!(id.path(), "blocks/ore");
        assert_eq!(id.to_string(), "host:blocks/ore");

        let short: Identifier = "granite".parse().unwrap();
        assert_eq!(short.namespace(), DEFAULT_NAMESPACE);
    }

    #[test]
    fn identifier_rejects_bad_chars() {
        assert!(matches!(
            "Host:ore".parse::<Identifier>(),
            Err(IdentifierError::InvalidChar('H', _))
        ));
        assert!(matches!(
            "host:".parse::<Identifier>(),
            Err(IdentifierError::EmptySegment(_))
        ));
        // '/' is path-only
        assert!("a/b:ore".parse::<Identifier>().is_err());
    }

    #[test]
    fn dye_colors_resolve_to_distinct_map_colors() {
        assert_eq!(DyeColor::White.map_color(), MapColor(8));
        assert_eq!(DyeColor::Red.map_color(), MapColor(28));
        assert_ne!(DyeColor::Lime.map_color(), DyeColor::Green.map_color());
        assert_eq!(MapColor::from(DyeColor::Blue), DyeColor::Blue.map_color());
    }

    #[test]
    fn settings_ids_are_unique() {
        let a = SettingsId::next();
        let b = SettingsId::next();
        assert_ne!(a, b);
    }
}
