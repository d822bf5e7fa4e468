//! Color value object and color-string parsing.
//!
//! Colors arrive as text from mods, chat commands, and config files in two
//! forms: `#`-prefixed hex literals (`#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`)
//! and CSS color keywords with an optional `#xx` alpha suffix (`red#80`).
//! Parsing never panics; malformed input yields a [`ColorParseError`].

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error when parsing a color string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// The color string is empty
    #[error("empty color string")]
    Empty,
    /// A hex literal has a length other than 3, 4, 6, or 8 digits
    #[error("invalid hex color length")]
    InvalidLength,
    /// A hex literal contains a character that is not a hex digit
    #[error("invalid hex digit")]
    InvalidHexDigit,
    /// The name is not a recognized color keyword
    #[error("unknown color name: {0}")]
    UnknownName(String),
    /// The `#xx` alpha suffix on a named color is not exactly two hex digits
    #[error("invalid alpha suffix")]
    InvalidAlpha,
}

/// An 8-bit RGBA color.
///
/// Packs to and from the engine's 32-bit ARGB layout
/// (`a << 24 | r << 16 | g << 8 | b`).
///
/// # Examples
///
/// ```
/// use voxl_util::Color;
///
/// let color: Color = "#ff8800cc".parse().expect("valid color");
/// assert_eq!(color, Color::new(0xff, 0x88, 0x00, 0xcc));
/// assert_eq!(color.to_string(), "#ff8800cc");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel (0xff is fully opaque)
    pub a: u8,
}

impl Color {
    /// Creates a color from explicit channel values.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    /// Unpacks a color from the 32-bit ARGB layout.
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
            a: (argb >> 24) as u8,
        }
    }

    /// Packs this color into the 32-bit ARGB layout.
    pub const fn to_argb(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            self.r, self.g, self.b, self.a
        )
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.is_empty() {
            return Err(ColorParseError::Empty);
        }
        match value.strip_prefix('#') {
            Some(digits) => parse_hex_color(digits),
            None => parse_named_color(value),
        }
    }
}

/// Parses a color string, returning `None` on failure.
///
/// Failures are logged at error level unless `quiet` is set; callers that
/// probe speculative values (e.g. falling back through several config keys)
/// pass `quiet = true`.
///
/// # Examples
///
/// ```
/// use voxl_util::{parse_color_string, Color};
///
/// assert_eq!(parse_color_string("#f80", true), Some(Color::new(0xff, 0x88, 0x00, 0xff)));
/// assert_eq!(parse_color_string("notacolor", true), None);
/// ```
pub fn parse_color_string(value: &str, quiet: bool) -> Option<Color> {
    match value.parse::<Color>() {
        Ok(color) => Some(color),
        Err(err) => {
            if !quiet {
                tracing::error!("Invalid color: \"{}\": {}", value, err);
            }
            None
        }
    }
}

fn hex_nibble(byte: u8) -> Option<u8> {
    (byte as char).to_digit(16).map(|digit| digit as u8)
}

/// Parses the digits of a hex literal (the `#` is already stripped).
fn parse_hex_color(digits: &str) -> Result<Color, ColorParseError> {
    let bytes = digits.as_bytes();
    // Alpha defaults to fully opaque when the literal omits it.
    let mut channels = [0x00, 0x00, 0x00, 0xff];

    match bytes.len() {
        // #RGB / #RGBA: every digit is nibble-duplicated into a byte
        3 | 4 => {
            for (channel, &byte) in channels.iter_mut().zip(bytes) {
                let digit = hex_nibble(byte).ok_or(ColorParseError::InvalidHexDigit)?;
                *channel = (digit << 4) | digit;
            }
        }
        // #RRGGBB / #RRGGBBAA: two digits per byte
        6 | 8 => {
            for (channel, pair) in channels.iter_mut().zip(bytes.chunks_exact(2)) {
                let hi = hex_nibble(pair[0]).ok_or(ColorParseError::InvalidHexDigit)?;
                let lo = hex_nibble(pair[1]).ok_or(ColorParseError::InvalidHexDigit)?;
                *channel = (hi << 4) | lo;
            }
        }
        _ => return Err(ColorParseError::InvalidLength),
    }

    Ok(Color::new(channels[0], channels[1], channels[2], channels[3]))
}

/// Parses a color keyword with an optional `#xx` alpha suffix.
fn parse_named_color(value: &str) -> Result<Color, ColorParseError> {
    // Anything after a '#' is an explicit alpha value for the named color.
    let (name, alpha) = match value.find('#') {
        Some(pos) => (&value[..pos], &value[pos + 1..]),
        None => (value, ""),
    };

    let rgb = *NAMED_COLORS
        .get(name.to_ascii_lowercase().as_str())
        .ok_or_else(|| ColorParseError::UnknownName(name.to_string()))?;

    // An empty alpha suffix is fine (the table entries carry no alpha
    // either); otherwise it must be exactly two hex digits, e.g. "red#08".
    let a = if alpha.is_empty() {
        0xff
    } else {
        let suffix = alpha.as_bytes();
        if suffix.len() != 2 {
            return Err(ColorParseError::InvalidAlpha);
        }
        let hi = hex_nibble(suffix[0]).ok_or(ColorParseError::InvalidAlpha)?;
        let lo = hex_nibble(suffix[1]).ok_or(ColorParseError::InvalidAlpha)?;
        (hi << 4) | lo
    };

    Ok(Color::from_argb((a as u32) << 24 | rgb))
}

/// Color keywords mapped to packed `0xRRGGBB`, built once on first lookup.
static NAMED_COLORS: LazyLock<HashMap<&'static str, u32>> =
    LazyLock::new(|| NAMED_COLOR_TABLE.iter().copied().collect());

const NAMED_COLOR_TABLE: &[(&str, u32)] = &[
    ("aliceblue", 0xf0f8ff),
    ("antiquewhite", 0xfaebd7),
    ("aqua", 0x00ffff),
    ("aquamarine", 0x7fffd4),
    ("azure", 0xf0ffff),
    ("beige", 0xf5f5dc),
    ("bisque", 0xffe4c4),
    ("black", 0x000000),
    ("blanchedalmond", 0xffebcd),
    ("blue", 0x0000ff),
    ("blueviolet", 0x8a2be2),
    ("brown", 0xa52a2a),
    ("burlywood", 0xdeb887),
    ("cadetblue", 0x5f9ea0),
    ("chartreuse", 0x7fff00),
    ("chocolate", 0xd2691e),
    ("coral", 0xff7f50),
    ("cornflowerblue", 0x6495ed),
    ("cornsilk", 0xfff8dc),
    ("crimson", 0xdc143c),
    ("cyan", 0x00ffff),
    ("darkblue", 0x00008b),
    ("darkcyan", 0x008b8b),
    ("darkgoldenrod", 0xb8860b),
    ("darkgray", 0xa9a9a9),
    ("darkgreen", 0x006400),
    ("darkgrey", 0xa9a9a9),
    ("darkkhaki", 0xbdb76b),
    ("darkmagenta", 0x8b008b),
    ("darkolivegreen", 0x556b2f),
    ("darkorange", 0xff8c00),
    ("darkorchid", 0x9932cc),
    ("darkred", 0x8b0000),
    ("darksalmon", 0xe9967a),
    ("darkseagreen", 0x8fbc8f),
    ("darkslateblue", 0x483d8b),
    ("darkslategray", 0x2f4f4f),
    ("darkslategrey", 0x2f4f4f),
    ("darkturquoise", 0x00ced1),
    ("darkviolet", 0x9400d3),
    ("deeppink", 0xff1493),
    ("deepskyblue", 0x00bfff),
    ("dimgray", 0x696969),
    ("dimgrey", 0x696969),
    ("dodgerblue", 0x1e90ff),
    ("firebrick", 0xb22222),
    ("floralwhite", 0xfffaf0),
    ("forestgreen", 0x228b22),
    ("fuchsia", 0xff00ff),
    ("gainsboro", 0xdcdcdc),
    ("ghostwhite", 0xf8f8ff),
    ("gold", 0xffd700),
    ("goldenrod", 0xdaa520),
    ("gray", 0x808080),
    ("green", 0x008000),
    ("greenyellow", 0xadff2f),
    ("grey", 0x808080),
    ("honeydew", 0xf0fff0),
    ("hotpink", 0xff69b4),
    ("indianred", 0xcd5c5c),
    ("indigo", 0x4b0082),
    ("ivory", 0xfffff0),
    ("khaki", 0xf0e68c),
    ("lavender", 0xe6e6fa),
    ("lavenderblush", 0xfff0f5),
    ("lawngreen", 0x7cfc00),
    ("lemonchiffon", 0xfffacd),
    ("lightblue", 0xadd8e6),
    ("lightcoral", 0xf08080),
    ("lightcyan", 0xe0ffff),
    ("lightgoldenrodyellow", 0xfafad2),
    ("lightgray", 0xd3d3d3),
    ("lightgreen", 0x90ee90),
    ("lightgrey", 0xd3d3d3),
    ("lightpink", 0xffb6c1),
    ("lightsalmon", 0xffa07a),
    ("lightseagreen", 0x20b2aa),
    ("lightskyblue", 0x87cefa),
    ("lightslategray", 0x778899),
    ("lightslategrey", 0x778899),
    ("lightsteelblue", 0xb0c4de),
    ("lightyellow", 0xffffe0),
    ("lime", 0x00ff00),
    ("limegreen", 0x32cd32),
    ("linen", 0xfaf0e6),
    ("magenta", 0xff00ff),
    ("maroon", 0x800000),
    ("mediumaquamarine", 0x66cdaa),
    ("mediumblue", 0x0000cd),
    ("mediumorchid", 0xba55d3),
    ("mediumpurple", 0x9370db),
    ("mediumseagreen", 0x3cb371),
    ("mediumslateblue", 0x7b68ee),
    ("mediumspringgreen", 0x00fa9a),
    ("mediumturquoise", 0x48d1cc),
    ("mediumvioletred", 0xc71585),
    ("midnightblue", 0x191970),
    ("mintcream", 0xf5fffa),
    ("mistyrose", 0xffe4e1),
    ("moccasin", 0xffe4b5),
    ("navajowhite", 0xffdead),
    ("navy", 0x000080),
    ("oldlace", 0xfdf5e6),
    ("olive", 0x808000),
    ("olivedrab", 0x6b8e23),
    ("orange", 0xffa500),
    ("orangered", 0xff4500),
    ("orchid", 0xda70d6),
    ("palegoldenrod", 0xeee8aa),
    ("palegreen", 0x98fb98),
    ("paleturquoise", 0xafeeee),
    ("palevioletred", 0xdb7093),
    ("papayawhip", 0xffefd5),
    ("peachpuff", 0xffdab9),
    ("peru", 0xcd853f),
    ("pink", 0xffc0cb),
    ("plum", 0xdda0dd),
    ("powderblue", 0xb0e0e6),
    ("purple", 0x800080),
    ("red", 0xff0000),
    ("rosybrown", 0xbc8f8f),
    ("royalblue", 0x4169e1),
    ("saddlebrown", 0x8b4513),
    ("salmon", 0xfa8072),
    ("sandybrown", 0xf4a460),
    ("seagreen", 0x2e8b57),
    ("seashell", 0xfff5ee),
    ("sienna", 0xa0522d),
    ("silver", 0xc0c0c0),
    ("skyblue", 0x87ceeb),
    ("slateblue", 0x6a5acd),
    ("slategray", 0x708090),
    ("slategrey", 0x708090),
    ("snow", 0xfffafa),
    ("springgreen", 0x00ff7f),
    ("steelblue", 0x4682b4),
    ("tan", 0xd2b48c),
    ("teal", 0x008080),
    ("thistle", 0xd8bfd8),
    ("tomato", 0xff6347),
    ("turquoise", 0x40e0d0),
    ("violet", 0xee82ee),
    ("wheat", 0xf5deb3),
    ("white", 0xffffff),
    ("whitesmoke", 0xf5f5f5),
    ("yellow", 0xffff00),
    ("yellowgreen", 0x9acd32),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_hex() {
        assert_eq!(
            "#f80".parse::<Color>(),
            Ok(Color::new(0xff, 0x88, 0x00, 0xff))
        );
    }

    #[test]
    fn test_parse_short_hex_with_alpha() {
        assert_eq!(
            "#f80c".parse::<Color>(),
            Ok(Color::new(0xff, 0x88, 0x00, 0xcc))
        );
    }

    #[test]
    fn test_parse_long_hex() {
        assert_eq!(
            "#ff8800".parse::<Color>(),
            Ok(Color::new(0xff, 0x88, 0x00, 0xff))
        );
    }

    #[test]
    fn test_parse_long_hex_with_alpha() {
        assert_eq!(
            "#ff8800cc".parse::<Color>(),
            Ok(Color::new(0xff, 0x88, 0x00, 0xcc))
        );
    }

    #[test]
    fn test_parse_hex_uppercase_digits() {
        assert_eq!(
            "#FF8800".parse::<Color>(),
            Ok(Color::new(0xff, 0x88, 0x00, 0xff))
        );
    }

    #[test]
    fn test_parse_hex_wrong_length() {
        assert_eq!(
            "#ff88".parse::<Color>(),
            Err(ColorParseError::InvalidLength)
        );
        assert_eq!(
            "#ff8800c".parse::<Color>(),
            Err(ColorParseError::InvalidLength)
        );
        assert_eq!("#".parse::<Color>(), Err(ColorParseError::InvalidLength));
    }

    #[test]
    fn test_parse_hex_bad_digit() {
        assert_eq!(
            "#gg0000".parse::<Color>(),
            Err(ColorParseError::InvalidHexDigit)
        );
        assert_eq!("#0g0".parse::<Color>(), Err(ColorParseError::InvalidHexDigit));
    }

    #[test]
    fn test_parse_named() {
        assert_eq!("red".parse::<Color>(), Ok(Color::new(0xff, 0x00, 0x00, 0xff)));
        assert_eq!(
            "cornflowerblue".parse::<Color>(),
            Ok(Color::new(0x64, 0x95, 0xed, 0xff))
        );
    }

    #[test]
    fn test_parse_named_is_case_insensitive() {
        assert_eq!("RED".parse::<Color>(), Ok(Color::rgb(0xff, 0x00, 0x00)));
        assert_eq!("DarkGreen".parse::<Color>(), Ok(Color::rgb(0x00, 0x64, 0x00)));
    }

    #[test]
    fn test_parse_named_with_alpha_suffix() {
        assert_eq!(
            "red#80".parse::<Color>(),
            Ok(Color::new(0xff, 0x00, 0x00, 0x80))
        );
        assert_eq!(
            "RED#80".parse::<Color>(),
            Ok(Color::new(0xff, 0x00, 0x00, 0x80))
        );
    }

    #[test]
    fn test_parse_named_empty_alpha_is_opaque() {
        assert_eq!("red#".parse::<Color>(), Ok(Color::rgb(0xff, 0x00, 0x00)));
    }

    #[test]
    fn test_parse_named_bad_alpha() {
        assert_eq!("red#8".parse::<Color>(), Err(ColorParseError::InvalidAlpha));
        assert_eq!(
            "red#808".parse::<Color>(),
            Err(ColorParseError::InvalidAlpha)
        );
        assert_eq!(
            "red#8g".parse::<Color>(),
            Err(ColorParseError::InvalidAlpha)
        );
    }

    #[test]
    fn test_parse_unknown_name() {
        assert_eq!(
            "notacolor".parse::<Color>(),
            Err(ColorParseError::UnknownName("notacolor".to_string()))
        );
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!("".parse::<Color>(), Err(ColorParseError::Empty));
    }

    #[test]
    fn test_parse_color_string_wrapper() {
        assert_eq!(
            parse_color_string("#f80", false),
            Some(Color::new(0xff, 0x88, 0x00, 0xff))
        );
        assert_eq!(parse_color_string("notacolor", true), None);
    }

    #[test]
    fn test_black_is_opaque_black() {
        assert_eq!("black".parse::<Color>(), Ok(Color::rgb(0x00, 0x00, 0x00)));
    }

    #[test]
    fn test_argb_round_trip() {
        let color = Color::new(0x12, 0x34, 0x56, 0x78);
        assert_eq!(Color::from_argb(color.to_argb()), color);
        assert_eq!(color.to_argb(), 0x78123456);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let color = Color::new(0xff, 0x88, 0x00, 0xcc);
        assert_eq!(color.to_string(), "#ff8800cc");
        assert_eq!(color.to_string().parse::<Color>(), Ok(color));
    }

    #[test]
    fn test_serde_round_trip() {
        let color = Color::new(0xff, 0x88, 0x00, 0xcc);
        let json = serde_json::to_string(&color).expect("serialize");
        let back: Color = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, color);
    }

    #[test]
    fn test_named_table_has_no_duplicate_names() {
        assert_eq!(NAMED_COLORS.len(), NAMED_COLOR_TABLE.len());
    }
}
