use serde::Serialize;

/// Level of a location in the administrative hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationKind {
    District,
    /// Azores and Madeira take the place of a district.
    AutonomousRegion,
    Municipality,
    Parish,
}

impl LocationKind {
    /// Districts and autonomous regions form the top level.
    pub fn is_top_level(&self) -> bool {
        matches!(self, LocationKind::District | LocationKind::AutonomousRegion)
    }
}

/// A node of the static geographic table. Children are one level down.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Location {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: LocationKind,
    pub children: &'static [Location],
}

impl Location {
    pub fn child(&self, id: &str) -> Option<&'static Location> {
        self.children.iter().find(|c| c.id == id)
    }
}

/// A location together with its ancestors, top level first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedLocation {
    pub location: &'static Location,
    pub district: &'static Location,
    pub municipality: Option<&'static Location>,
}

impl ResolvedLocation {
    /// `"Lisboa > Lisboa > Alvalade"`
    pub fn full_path(&self) -> String {
        let mut parts = vec![self.district.name];
        if let Some(m) = self.municipality {
            parts.push(m.name);
        }
        if self.location.kind == LocationKind::Parish {
            parts.push(self.location.name);
        }
        parts.join(" > ")
    }
}
