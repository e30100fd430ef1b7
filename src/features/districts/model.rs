use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use utoipa::ToSchema;

macro_rules! districts {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// A Tamil Nadu district
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ToSchema)]
        pub enum District {
            $($variant),+
        }

        impl District {
            pub const ALL: &'static [District] = &[$(District::$variant),+];

            pub fn name(self) -> &'static str {
                match self {
                    $(District::$variant => $name),+
                }
            }
        }
    };
}

districts! {
    Ariyalur => "Ariyalur",
    Chengalpattu => "Chengalpattu",
    Chennai => "Chennai",
    Coimbatore => "Coimbatore",
    Cuddalore => "Cuddalore",
    Dharmapuri => "Dharmapuri",
    Dindigul => "Dindigul",
    Erode => "Erode",
    Kallakurichi => "Kallakurichi",
    Kanchipuram => "Kanchipuram",
    Kanyakumari => "Kanyakumari",
    Karur => "Karur",
    Krishnagiri => "Krishnagiri",
    Madurai => "Madurai",
    Nagapattinam => "Nagapattinam",
    Namakkal => "Namakkal",
    Nilgiris => "Nilgiris",
    Perambalur => "Perambalur",
    Pudukkottai => "Pudukkottai",
    Ramanathapuram => "Ramanathapuram",
    Ranipet => "Ranipet",
    Salem => "Salem",
    Sivaganga => "Sivaganga",
    Tenkasi => "Tenkasi",
    Thanjavur => "Thanjavur",
    Theni => "Theni",
    Thoothukudi => "Thoothukudi",
    Tiruchirappalli => "Tiruchirappalli",
    Tirunelveli => "Tirunelveli",
    Tirupathur => "Tirupathur",
    Tiruppur => "Tiruppur",
    Tiruvallur => "Tiruvallur",
    Tiruvannamalai => "Tiruvannamalai",
    Tiruvarur => "Tiruvarur",
    Vellore => "Vellore",
    Viluppuram => "Viluppuram",
    Virudhunagar => "Virudhunagar",
}

impl fmt::Display for District {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for District {
    type Err = String;

    /// Case-insensitive match on the district name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        District::ALL
            .iter()
            .copied()
            .find(|d| d.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| format!("'{}' is not a Tamil Nadu district", needle))
    }
}

// Stored and transmitted as the plain district name
impl Serialize for District {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for District {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
