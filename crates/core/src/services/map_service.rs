use serde::Serialize;

use crate::models::property::Property;

pub const MAP_STYLE: &str = "mapbox://styles/mapbox/streets-v12";
/// Lisbon, `[longitude, latitude]`.
pub const DEFAULT_CENTER: (f64, f64) = (-9.1393, 38.7223);
pub const DEFAULT_ZOOM: f64 = 12.0;
/// Zoom cap when fitting the view around the markers.
pub const FIT_MAX_ZOOM: f64 = 15.0;
pub const MISSING_TOKEN_NOTICE: &str = "Mapbox access token is not configured";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub property_id: u64,
    pub longitude: f64,
    pub latitude: f64,
    pub price_label: String,
    pub address: String,
    pub details: String,
}

/// Smallest box containing every marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

/// What the map panel shows. A missing token degrades to a notice instead
/// of failing the page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum MapPanel {
    Unconfigured {
        notice: String,
    },
    Ready {
        access_token: String,
        style: String,
        center: (f64, f64),
        zoom: f64,
        markers: Vec<MapMarker>,
        fit_bounds: Option<Bounds>,
    },
}

impl MapPanel {
    /// Properties without coordinates get no marker.
    pub fn build(token: Option<&str>, properties: &[Property]) -> Self {
        let Some(token) = token.map(str::trim).filter(|t| !t.is_empty()) else {
            tracing::debug!("map panel disabled: no access token");
            return MapPanel::Unconfigured {
                notice: MISSING_TOKEN_NOTICE.to_string(),
            };
        };

        let markers: Vec<MapMarker> = properties.iter().filter_map(marker_for).collect();
        let fit_bounds = bounds_of(&markers);

        MapPanel::Ready {
            access_token: token.to_string(),
            style: MAP_STYLE.to_string(),
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            markers,
            fit_bounds,
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, MapPanel::Ready { .. })
    }

    pub fn markers(&self) -> &[MapMarker] {
        match self {
            MapPanel::Ready { markers, .. } => markers,
            MapPanel::Unconfigured { .. } => &[],
        }
    }
}

fn marker_for(property: &Property) -> Option<MapMarker> {
    let coords = property.coordinates?;
    let mut details = Vec::new();
    if let Some(bedrooms) = property.bedrooms.filter(|b| *b > 0) {
        details.push(format!("{bedrooms} bed"));
    }
    if let Some(bathrooms) = property.bathrooms.filter(|b| *b > 0.0) {
        details.push(format!("{bathrooms} bath"));
    }
    details.push(format!("{} m²", property.size_sqm));

    Some(MapMarker {
        property_id: property.id,
        longitude: coords.longitude(),
        latitude: coords.latitude(),
        price_label: format_eur(property.price),
        address: property.address.clone(),
        details: details.join(" · "),
    })
}

fn bounds_of(markers: &[MapMarker]) -> Option<Bounds> {
    let first = markers.first()?;
    let init = Bounds {
        west: first.longitude,
        south: first.latitude,
        east: first.longitude,
        north: first.latitude,
    };
    Some(markers.iter().fold(init, |b, m| Bounds {
        west: b.west.min(m.longitude),
        south: b.south.min(m.latitude),
        east: b.east.max(m.longitude),
        north: b.north.max(m.latitude),
    }))
}

/// Whole euros, grouped in thousands: `1 250 000 €`.
pub fn format_eur(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}{grouped} €")
}
