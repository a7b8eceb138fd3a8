//! Static per-city configuration.
//!
//! One table drives everything city-specific in generation: state,
//! center coordinates, amenity tier multiplier, base rent and metro
//! membership. Unknown cities fall back to [`DEFAULT_CITY`].

use crate::models::Coordinates;

#[derive(Debug, Clone, Copy)]
pub struct CityInfo {
    pub state: &'static str,
    pub center: Coordinates,
    /// Scales every generated amenity count.
    pub tier_multiplier: f64,
    /// Base monthly rent in rupees before area adjustments.
    pub base_rent: u32,
    pub has_metro: bool,
}

/// Defaults applied to cities outside the known table.
pub const DEFAULT_CITY: CityInfo = city("India", 28.6139, 77.2090, 1.0, 20000, false);

const fn city(
    state: &'static str,
    lat: f64,
    lng: f64,
    tier_multiplier: f64,
    base_rent: u32,
    has_metro: bool,
) -> CityInfo {
    CityInfo {
        state,
        center: Coordinates { lat, lng },
        tier_multiplier,
        base_rent,
        has_metro,
    }
}

static CITIES: &[(&str, CityInfo)] = &[
    ("Delhi", city("Delhi", 28.6139, 77.2090, 1.4, 35000, true)),
    ("Mumbai", city("Maharashtra", 19.0760, 72.8777, 1.5, 45000, true)),
    ("Bangalore", city("Karnataka", 12.9716, 77.5946, 1.3, 30000, true)),
    ("Chennai", city("Tamil Nadu", 13.0827, 80.2707, 1.2, 25000, true)),
    ("Kolkata", city("West Bengal", 22.5726, 88.3639, 1.1, 20000, true)),
    ("Hyderabad", city("Telangana", 17.3850, 78.4867, 1.2, 28000, true)),
    ("Pune", city("Maharashtra", 18.5204, 73.8567, 1.1, 25000, false)),
    ("Ahmedabad", city("Gujarat", 23.0225, 72.5714, 1.0, 22000, false)),
    ("Surat", city("Gujarat", 21.1702, 72.8311, 0.9, 18000, false)),
    ("Jaipur", city("Rajasthan", 26.9124, 75.7873, 1.0, 20000, false)),
    ("Lucknow", city("Uttar Pradesh", 26.8467, 80.9462, 0.9, 15000, false)),
    ("Kanpur", city("Uttar Pradesh", 26.4499, 80.3319, 0.8, 12000, false)),
];

/// Look up a city's configuration, defaulting for unknown names.
pub fn city_info(name: &str) -> CityInfo {
    CITIES
        .iter()
        .find(|(city_name, _)| *city_name == name)
        .map(|(_, info)| *info)
        .unwrap_or(DEFAULT_CITY)
}

pub fn is_known_city(name: &str) -> bool {
    CITIES.iter().any(|(city_name, _)| *city_name == name)
}

/// Well-known areas per major city, used to seed the catalog alongside
/// directory results.
pub fn predefined_areas(city: &str) -> &'static [&'static str] {
    match city {
        "Delhi" => &[
            "Connaught Place", "Khan Market", "Karol Bagh", "Lajpat Nagar", "South Extension",
            "Vasant Kunj", "Dwarka", "Rohini", "Pitampura", "Janakpuri", "Laxmi Nagar",
            "Preet Vihar", "Mayur Vihar", "Kalkaji", "Greater Kailash", "Defence Colony",
            "Hauz Khas", "Saket", "Malviya Nagar", "Green Park", "Nehru Place",
            "Okhla", "Noida Sector 18", "Gurgaon Sector 14", "Faridabad", "Ghaziabad",
        ],
        "Mumbai" => &[
            "Bandra West", "Andheri East", "Andheri West", "Juhu", "Versova", "Powai",
            "Hiranandani Gardens", "Thane West", "Mulund", "Ghatkopar", "Kurla",
            "Santa Cruz", "Vile Parle", "Malad", "Borivali", "Kandivali", "Dahisar",
            "Lower Parel", "Worli", "Prabhadevi", "Dadar", "Matunga", "Sion",
            "Chembur", "Vikhroli", "Bhandup", "Kanjurmarg", "Navi Mumbai",
        ],
        "Bangalore" => &[
            "Koramangala", "Indiranagar", "Whitefield", "Electronic City", "BTM Layout",
            "HSR Layout", "Jayanagar", "Basavanagudi", "Malleshwaram", "Rajajinagar",
            "Sadashivanagar", "RT Nagar", "Hebbal", "Yelahanka", "Marathahalli",
            "Bellandur", "Sarjapur Road", "Bannerghatta Road", "JP Nagar", "Banashankari",
            "Vijayanagar", "Nagarbhavi", "Kengeri", "Bommanahalli", "Hosur Road",
        ],
        "Chennai" => &[
            "T Nagar", "Anna Nagar", "Adyar", "Velachery", "OMR", "Porur", "Tambaram",
            "Chrompet", "Pallikaranai", "Sholinganallur", "Thoraipakkam", "Perungudi",
            "Mylapore", "Nungambakkam", "Egmore", "Kilpauk", "Aminjikarai", "Vadapalani",
            "Ashok Nagar", "KK Nagar", "Saidapet", "Guindy", "Kodambakkam", "West Mambalam",
        ],
        "Hyderabad" => &[
            "Banjara Hills", "Jubilee Hills", "Hitech City", "Gachibowli", "Kondapur",
            "Madhapur", "Kukatpally", "Miyapur", "Begumpet", "Secunderabad", "Ameerpet",
            "Somajiguda", "Punjagutta", "Lakdi Ka Pul", "Abids", "Koti", "Dilsukhnagar",
            "LB Nagar", "Uppal", "Kompally", "Bachupally", "Nizampet", "Manikonda",
        ],
        "Pune" => &[
            "Koregaon Park", "Viman Nagar", "Kharadi", "Hadapsar", "Magarpatta",
            "Aundh", "Baner", "Wakad", "Hinjewadi", "Pimpri", "Chinchwad", "Akurdi",
            "Deccan", "Shivajinagar", "Camp", "Kothrud", "Karve Nagar", "Warje",
            "Katraj", "Kondhwa", "Wanowrie", "Undri", "Pisoli", "Wagholi",
        ],
        _ => &[],
    }
}

/// Generic area names used when catalog assembly fails outright.
pub const FALLBACK_AREAS: [&str; 28] = [
    "Central Business District", "North Zone", "South Extension", "East Side", "West End",
    "Old City", "New Town", "IT Hub", "Residential Complex", "Garden City",
    "Metro Station Area", "Commercial Center", "University Area", "Industrial Zone",
    "Heritage Quarter", "Modern Township", "Suburban Area", "Downtown", "Uptown",
    "Riverside", "Hillside", "Market District", "Cultural Quarter", "Tech Park",
    "Green Belt", "Financial District", "Entertainment Zone", "Shopping Complex",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_city_lookup() {
        let mumbai = city_info("Mumbai");
        assert_eq!(mumbai.state, "Maharashtra");
        assert_eq!(mumbai.base_rent, 45000);
        assert!(mumbai.has_metro);
        assert!((mumbai.tier_multiplier - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_city_defaults() {
        let info = city_info("Springfield");
        assert_eq!(info.state, "India");
        assert_eq!(info.base_rent, 20000);
        assert!(!info.has_metro);
        assert!((info.tier_multiplier - 1.0).abs() < 1e-9);
        assert!((info.center.lat - 28.6139).abs() < 1e-9);
    }

    #[test]
    fn test_metro_membership() {
        for city in ["Delhi", "Mumbai", "Bangalore", "Chennai", "Kolkata", "Hyderabad"] {
            assert!(city_info(city).has_metro, "{} should have a metro", city);
        }
        for city in ["Pune", "Jaipur", "Kanpur"] {
            assert!(!city_info(city).has_metro, "{} should not have a metro", city);
        }
    }

    #[test]
    fn test_predefined_areas() {
        assert!(predefined_areas("Delhi").len() >= 20);
        assert!(predefined_areas("Pune").len() >= 20);
        assert!(predefined_areas("Jaipur").is_empty());
        assert!(predefined_areas("Springfield").is_empty());
    }

    #[test]
    fn test_city_recognition() {
        assert!(is_known_city("Lucknow"));
        assert!(!is_known_city("lucknow"));
        assert!(!is_known_city(""));
    }
}
