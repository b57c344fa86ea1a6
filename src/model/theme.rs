use serde::Serialize;

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Parse a `#rrggbb` hex string.
    ///
    /// Non-alphanumeric characters are trimmed from both ends, so `##ed89e5`
    /// is accepted. What remains must be six characters long, otherwise the
    /// result is `Rgb(1, 1, 1)`. The value is read from the leading hex digits
    /// only: `12zz34` reads as `0x12`, and six non-hex characters read as
    /// black.
    pub fn from_hex(hex: &str) -> Rgb {
        let digits = hex.trim_matches(|c: char| !c.is_alphanumeric());
        if digits.chars().count() != 6 {
            return Rgb(1, 1, 1);
        }
        let digits = digits
            .strip_prefix("0x")
            .or_else(|| digits.strip_prefix("0X"))
            .unwrap_or(digits);
        let end = digits
            .find(|c: char| !c.is_ascii_hexdigit())
            .unwrap_or(digits.len());
        let value = u32::from_str_radix(&digits[..end], 16).unwrap_or(0);
        Rgb(
            (value >> 16) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
        )
    }
}

/// Visual identity associated with a team display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamTheme {
    pub logo: &'static str,
    pub color: Rgb,
    pub short_name: &'static str,
}

/// (display name, logo, hex color, short name)
const THEMES: &[(&str, &str, &str, &str)] = &[
    ("OpTic Texas", "optic", "#92c951", "OPTIC"),
    ("FaZe Vegas", "faze", "#ff00ff", "FAZE"),
    ("Los Angeles Thieves", "thieves", "#ff0000", "LAT"),
    ("Toronto KOI", "koi", "#782cf2", "KOI"),
    ("Cloud9 New York", "cloud9", "#00aeef", "C9"),
    ("Miami Heretics", "heretics", "#dd6d17", "MIA"),
    ("Carolina Royal Ravens", "ravens", "#0083c1", "CAR"),
    ("Vancouver Surge", "surge", "#00667d", "VAN"),
    ("G2 Minnesota", "g2", "#342565", "G2"),
    ("Boston Breach", "breach", "#02ff5b", "BOS"),
    ("Riyadh Falcons", "falcons", "#1a825a", "FLCN"),
    ("Paris Gentle Mates", "mates", "##ed89e5", "M8"),
];

impl TeamTheme {
    /// Theme used for any name missing from the table.
    pub fn fallback() -> TeamTheme {
        TeamTheme {
            logo: "default",
            color: Rgb::WHITE,
            short_name: "CDL",
        }
    }

    /// Look up a team's theme by exact, case-sensitive display name.
    pub fn for_team(name: &str) -> TeamTheme {
        THEMES
            .iter()
            .find(|(team, ..)| *team == name)
            .map(|&(_, logo, color, short_name)| TeamTheme {
                logo,
                color: Rgb::from_hex(color),
                short_name,
            })
            .unwrap_or_else(TeamTheme::fallback)
    }
}
