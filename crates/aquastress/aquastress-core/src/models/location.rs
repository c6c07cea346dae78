use serde::{Deserialize, Serialize};

/// A monitored geographic point.
///
/// `population_millions` is the population served by the point's water
/// supply and feeds the per-capita component of the stress index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Stable identifier, used as the store key.
    pub id: String,
    /// Display name.
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub population_millions: f64,
    /// USGS NWIS site code for the nearest water-level gauge, if any.
    #[serde(default)]
    pub usgs_site: Option<String>,
}

impl Location {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        population_millions: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            latitude,
            longitude,
            population_millions,
            usgs_site: None,
        }
    }

    /// Attach a USGS gauge site code.
    pub fn with_usgs_site(mut self, site: impl Into<String>) -> Self {
        self.usgs_site = Some(site.into());
        self
    }
}

/// The fixed list of points monitored when the config names none.
pub fn default_locations() -> Vec<Location> {
    vec![
        Location::new("phoenix", "Phoenix, AZ", 33.4484, -112.0740, 4.9),
        Location::new("las-vegas", "Las Vegas, NV", 36.1699, -115.1398, 2.3)
            .with_usgs_site("09421500"),
        Location::new("los-angeles", "Los Angeles, CA", 34.0522, -118.2437, 13.0),
        Location::new("sacramento", "Sacramento, CA", 38.5816, -121.4944, 2.4)
            .with_usgs_site("11447650"),
        Location::new("denver", "Denver, CO", 39.7392, -104.9903, 3.0)
            .with_usgs_site("06714000"),
        Location::new("austin", "Austin, TX", 30.2672, -97.7431, 2.4)
            .with_usgs_site("08158000"),
        Location::new("st-louis", "St. Louis, MO", 38.6270, -90.1994, 2.8)
            .with_usgs_site("07010000"),
        Location::new("washington-dc", "Washington, DC", 38.9072, -77.0369, 6.3)
            .with_usgs_site("01646500"),
        Location::new("miami", "Miami, FL", 25.7617, -80.1918, 6.1),
    ]
}
