// crates/golfdb-core/src/raw.rs
//
// Shared raw input: the `clubs_index.json` shape as produced by the club
// fetch scripts. Nothing here is exposed through the public API.
use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use std::fmt;

/// Raw club structure as it comes from JSON.
///
/// Every field is optional and tolerant: a single bad value degrades that
/// value to `None` instead of failing the whole dataset.
#[derive(Debug, Default, Deserialize)]
pub struct ClubRaw {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub region: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub longitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub full_address: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub town: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub county: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub postcode: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub holes: Option<u32>,
}

/// Top-level file: either the `{ total, detailed, clubs }` wrapper or a bare
/// array of clubs.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ClubsFileRaw {
    Index {
        clubs: Vec<ClubRaw>,
        #[serde(default)]
        total: Option<u64>,
    },
    Bare(Vec<ClubRaw>),
}

impl ClubsFileRaw {
    pub fn into_clubs(self) -> Vec<ClubRaw> {
        match self {
            ClubsFileRaw::Index { clubs, total } => {
                if let Some(total) = total {
                    if total != clubs.len() as u64 {
                        tracing::warn!(
                            declared = total,
                            actual = clubs.len(),
                            "club index total does not match club count"
                        );
                    }
                }
                clubs
            }
            ClubsFileRaw::Bare(clubs) => clubs,
        }
    }
}

/// Loosely-typed scalar used by the lenient field parsers.
#[derive(Debug)]
enum Scalar {
    Str(String),
    Float(f64),
    Int(i64),
    Uint(u64),
    Bool,
    Null,
}

struct ScalarVisitor;

impl<'de> Visitor<'de> for ScalarVisitor {
    type Value = Scalar;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number, boolean or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Scalar, E> {
        Ok(Scalar::Str(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Scalar, E> {
        Ok(Scalar::Str(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Scalar, E> {
        Ok(Scalar::Float(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Scalar, E> {
        Ok(Scalar::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Scalar, E> {
        Ok(Scalar::Uint(v))
    }

    fn visit_bool<E: de::Error>(self, _v: bool) -> Result<Scalar, E> {
        Ok(Scalar::Bool)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Scalar, E> {
        Ok(Scalar::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Scalar, E> {
        Ok(Scalar::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Scalar, D::Error> {
        d.deserialize_any(ScalarVisitor)
    }

    // Nested values are not meaningful for any club field.
    fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Scalar, A::Error> {
        while seq.next_element::<de::IgnoredAny>()?.is_some() {}
        Ok(Scalar::Null)
    }

    fn visit_map<A: de::MapAccess<'de>>(self, mut map: A) -> Result<Scalar, A::Error> {
        while map.next_entry::<de::IgnoredAny, de::IgnoredAny>()?.is_some() {}
        Ok(Scalar::Null)
    }
}

fn lenient_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(match d.deserialize_any(ScalarVisitor)? {
        Scalar::Str(s) => {
            let t = s.trim();
            (!t.is_empty()).then(|| t.to_owned())
        }
        Scalar::Int(i) => Some(i.to_string()),
        Scalar::Uint(u) => Some(u.to_string()),
        Scalar::Float(f) => Some(f.to_string()),
        Scalar::Bool | Scalar::Null => None,
    })
}

fn lenient_f64<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    let v = match d.deserialize_any(ScalarVisitor)? {
        Scalar::Float(f) => Some(f),
        Scalar::Int(i) => Some(i as f64),
        Scalar::Uint(u) => Some(u as f64),
        Scalar::Str(s) => s.trim().parse::<f64>().ok(),
        Scalar::Bool | Scalar::Null => None,
    };
    Ok(v.filter(|f| f.is_finite()))
}

fn lenient_u32<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u32>, D::Error> {
    Ok(match d.deserialize_any(ScalarVisitor)? {
        Scalar::Uint(u) => u32::try_from(u).ok(),
        Scalar::Int(i) => u32::try_from(i).ok(),
        Scalar::Str(s) => s.trim().parse::<u32>().ok(),
        Scalar::Float(_) | Scalar::Bool | Scalar::Null => None,
    })
}
