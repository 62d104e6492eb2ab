/// Per-club accent colour.
///
/// Clubs with a fixed brand colour use it; every other identifier picks a palette entry by a
/// stable polynomial hash, so the same id always gets the same colour.
use serde::Serialize;

const TINT_HEX: &[(&str, &str)] = &[
    ("operation-smile", "#f6c445"),
    ("tedx", "#ff3b30"),
    ("duke-of-edinburgh", "#34c759"),
    ("unicef-ambassador", "#0a84ff"),
    ("mun", "#64d2ff"),
    ("school-show", "#ec4899"),
];

// No purple here unless it is assigned explicitly above.
const FALLBACK_PALETTE: &[&str] = &[
    "#f59e0b", // amber
    "#f97316", // orange
    "#ef4444", // rose-red
    "#06b6d4", // cyan
    "#14b8a6", // teal
    "#22c55e", // emerald
    "#eab308", // yellow-gold
    "#0ea5e9", // sky
    "#d946ef", // fuchsia
    "#a78bfa", // violet
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// 32-bit wrapping `h * 31 + unit` over UTF-16 code units, sign dropped.
fn hash_club_id(club_id: &str) -> u64 {
    let h = club_id.encode_utf16().fold(0i32, |h, unit| {
        h.wrapping_shl(5).wrapping_sub(h).wrapping_add(i32::from(unit))
    });
    i64::from(h).unsigned_abs()
}

pub fn palette_index(club_id: &str) -> usize {
    (hash_club_id(club_id) % FALLBACK_PALETTE.len() as u64) as usize
}

pub fn tint_hex(club_id: &str) -> &'static str {
    TINT_HEX
        .iter()
        .find(|(id, _)| *id == club_id)
        .map(|(_, hex)| *hex)
        .unwrap_or_else(|| FALLBACK_PALETTE[palette_index(club_id)])
}

pub fn tint_rgb(club_id: &str) -> Rgb {
    // every table entry is a well-formed #rrggbb literal
    hex_to_rgb(tint_hex(club_id)).unwrap_or(Rgb { r: 0, g: 0, b: 0 })
}

/// Parses `#rrggbb`. Returns `None` for anything else.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let n = u32::from_str_radix(digits, 16).ok()?;
    Some(Rgb {
        r: ((n >> 16) & 0xff) as u8,
        g: ((n >> 8) & 0xff) as u8,
        b: (n & 0xff) as u8,
    })
}

/// Overlay gradient for card and hero backgrounds.
pub fn gradient_css(rgb: Rgb, spotlight: bool) -> String {
    let Rgb { r, g, b } = rgb;
    let (strong, weak) = if spotlight { (0.35, 0.12) } else { (0.24, 0.08) };
    format!(
        "linear-gradient(135deg, rgba({r},{g},{b},{strong}) 0%, rgba({r},{g},{b},{weak}) 60%, rgba(0,0,0,0) 100%)"
    )
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn explicit_tints_win() {
        assert_eq!(tint_hex("tedx"), "#ff3b30");
        assert_eq!(tint_hex("mun"), "#64d2ff");
        assert_eq!(
            tint_rgb("operation-smile"),
            Rgb { r: 0xf6, g: 0xc4, b: 0x45 }
        );
    }

    #[test]
    fn explicit_tints_never_collide() {
        let unique: HashSet<&str> = TINT_HEX.iter().map(|(_, hex)| *hex).collect();
        assert_eq!(unique.len(), TINT_HEX.len());
    }

    #[test]
    fn fallback_index_is_stable() {
        assert_eq!(palette_index("spark-club"), 6);
        assert_eq!(palette_index("interact-club"), 5);
        assert_eq!(palette_index("eco-committee"), 1);
        assert_eq!(tint_hex("spark-club"), "#eab308");
        assert_eq!(tint_hex("spark-club"), tint_hex("spark-club"));
    }

    #[test]
    fn empty_id_uses_first_palette_entry() {
        assert_eq!(palette_index(""), 0);
        assert_eq!(tint_hex(""), "#f59e0b");
    }

    #[test]
    fn hex_parsing_rejects_malformed_input() {
        assert_eq!(hex_to_rgb("#0a84ff"), Some(Rgb { r: 10, g: 132, b: 255 }));
        assert_eq!(hex_to_rgb("0a84ff"), None);
        assert_eq!(hex_to_rgb("#fff"), None);
        assert_eq!(hex_to_rgb("#zzzzzz"), None);
    }

    #[test]
    fn gradient_strength_depends_on_spotlight() {
        let rgb = Rgb { r: 1, g: 2, b: 3 };
        assert_eq!(
            gradient_css(rgb, false),
            "linear-gradient(135deg, rgba(1,2,3,0.24) 0%, rgba(1,2,3,0.08) 60%, rgba(0,0,0,0) 100%)"
        );
        assert!(gradient_css(rgb, true).contains("rgba(1,2,3,0.35) 0%"));
    }
}
