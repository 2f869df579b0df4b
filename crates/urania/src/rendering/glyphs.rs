use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::str::FromStr;

/// Bodies and points with a dedicated chart label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    Ascendant,
    Midheaven,
    MeanNode,
}

impl FromStr for Body {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Sun" => Ok(Body::Sun),
            "Moon" => Ok(Body::Moon),
            "Mercury" => Ok(Body::Mercury),
            "Venus" => Ok(Body::Venus),
            "Mars" => Ok(Body::Mars),
            "Jupiter" => Ok(Body::Jupiter),
            "Saturn" => Ok(Body::Saturn),
            "Uranus" => Ok(Body::Uranus),
            "Neptune" => Ok(Body::Neptune),
            "Pluto" => Ok(Body::Pluto),
            "Asc" => Ok(Body::Ascendant),
            "MC" => Ok(Body::Midheaven),
            "MeanNode" => Ok(Body::MeanNode),
            _ => Err(()),
        }
    }
}

impl Body {
    pub fn symbol(self) -> &'static str {
        match self {
            Body::Sun => "☉",
            Body::Moon => "☽",
            Body::Mercury => "☿",
            Body::Venus => "♀",
            Body::Mars => "♂",
            Body::Jupiter => "♃",
            Body::Saturn => "♄",
            Body::Uranus => "♅",
            Body::Neptune => "♆",
            Body::Pluto => "♇",
            Body::Ascendant => "Asc",
            Body::Midheaven => "MC",
            Body::MeanNode => "☋",
        }
    }
}

/// Label drawn for a body: its glyph, or the first three characters of an
/// unknown name
pub fn body_label(name: &str) -> Cow<'_, str> {
    match name.parse::<Body>() {
        Ok(body) => Cow::Borrowed(body.symbol()),
        Err(()) => match name.char_indices().nth(3) {
            Some((end, _)) => Cow::Borrowed(&name[..end]),
            None => Cow::Borrowed(name),
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    /// Signs in ecliptic order starting at 0° Aries
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            ZodiacSign::Aries => "♈",
            ZodiacSign::Taurus => "♉",
            ZodiacSign::Gemini => "♊",
            ZodiacSign::Cancer => "♋",
            ZodiacSign::Leo => "♌",
            ZodiacSign::Virgo => "♍",
            ZodiacSign::Libra => "♎",
            ZodiacSign::Scorpio => "♏",
            ZodiacSign::Sagittarius => "♐",
            ZodiacSign::Capricorn => "♑",
            ZodiacSign::Aquarius => "♒",
            ZodiacSign::Pisces => "♓",
        }
    }

    /// Longitude where the sign begins
    pub fn start_longitude(self) -> f64 {
        self as usize as f64 * 30.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_bodies_use_glyphs() {
        assert_eq!(body_label("Sun"), "☉");
        assert_eq!(body_label("Asc"), "Asc");
        assert_eq!(body_label("MeanNode"), "☋");
    }

    #[test]
    fn test_unknown_bodies_fall_back_to_prefix() {
        assert_eq!(body_label("Chiron"), "Chi");
        assert_eq!(body_label("Xy"), "Xy");
        assert_eq!(body_label("Cérès"), "Cér");
    }

    #[test]
    fn test_sign_start_longitudes() {
        assert_eq!(ZodiacSign::Aries.start_longitude(), 0.0);
        assert_eq!(ZodiacSign::Pisces.start_longitude(), 330.0);
    }
}
