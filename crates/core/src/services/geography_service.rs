use serde::{Deserialize, Serialize};

use crate::data::portugal::TOP_LEVEL;
use crate::errors::CoreError;
use crate::models::filters::PropertyFilters;
use crate::models::geography::{Location, LocationKind, ResolvedLocation};

/// Which of the two location pickers is active. Both write the same three
/// filter fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeoMode {
    #[default]
    Hierarchical,
    Search,
}

/// District, municipality and parish selections of the catalog filters.
///
/// Invariant: every selected municipality lies under a selected district and
/// every selected parish under a selected municipality.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeoSelection {
    mode: GeoMode,
    districts: Vec<String>,
    municipalities: Vec<String>,
    parishes: Vec<String>,
}

impl GeoSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> GeoMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: GeoMode) {
        self.mode = mode;
    }

    pub fn districts(&self) -> &[String] {
        &self.districts
    }

    pub fn municipalities(&self) -> &[String] {
        &self.municipalities
    }

    pub fn parishes(&self) -> &[String] {
        &self.parishes
    }

    pub fn is_empty(&self) -> bool {
        self.districts.is_empty() && self.municipalities.is_empty() && self.parishes.is_empty()
    }

    // ── Hierarchical picker ─────────────────────────────────────────

    /// Replace the district selection. Municipalities and parishes are reset.
    pub fn set_districts<S: AsRef<str>>(&mut self, ids: &[S]) -> Result<(), CoreError> {
        let ids = dedup(ids);
        for id in &ids {
            top_level(id).ok_or_else(|| unknown("district", id))?;
        }
        self.districts = ids;
        self.municipalities.clear();
        self.parishes.clear();
        Ok(())
    }

    /// Replace the municipality selection; each must belong to a selected
    /// district. Parishes are reset.
    pub fn set_municipalities<S: AsRef<str>>(&mut self, ids: &[S]) -> Result<(), CoreError> {
        let ids = dedup(ids);
        let available = self.available_municipalities();
        for id in &ids {
            if !available.iter().any(|m| m.id == id) {
                return Err(unknown("municipality", id));
            }
        }
        self.municipalities = ids;
        self.parishes.clear();
        Ok(())
    }

    /// Replace the parish selection; each must belong to a selected municipality.
    pub fn set_parishes<S: AsRef<str>>(&mut self, ids: &[S]) -> Result<(), CoreError> {
        let ids = dedup(ids);
        let available = self.available_parishes();
        for id in &ids {
            if !available.iter().any(|p| p.id == id) {
                return Err(unknown("parish", id));
            }
        }
        self.parishes = ids;
        Ok(())
    }

    /// Children of the selected districts, in table order.
    pub fn available_municipalities(&self) -> Vec<&'static Location> {
        self.districts
            .iter()
            .filter_map(|id| top_level(id))
            .flat_map(|d| d.children.iter())
            .collect()
    }

    /// Children of the selected municipalities, in table order.
    pub fn available_parishes(&self) -> Vec<&'static Location> {
        self.available_municipalities()
            .into_iter()
            .filter(|m| self.municipalities.iter().any(|id| id == m.id))
            .flat_map(|m| m.children.iter())
            .collect()
    }

    // ── Search picker ───────────────────────────────────────────────

    /// Add a location found by [`search_locations`] together with its
    /// ancestors. Levels below the chosen one are reset.
    pub fn select_location(&mut self, id: &str) -> Result<ResolvedLocation, CoreError> {
        let resolved = find_location(id).ok_or_else(|| unknown("location", id))?;

        push_unique(&mut self.districts, resolved.district.id);
        match resolved.location.kind {
            LocationKind::District | LocationKind::AutonomousRegion => {
                self.municipalities.clear();
                self.parishes.clear();
            }
            LocationKind::Municipality => {
                push_unique(&mut self.municipalities, resolved.location.id);
                self.parishes.clear();
            }
            LocationKind::Parish => {
                if let Some(m) = resolved.municipality {
                    push_unique(&mut self.municipalities, m.id);
                }
                push_unique(&mut self.parishes, resolved.location.id);
            }
        }
        Ok(resolved)
    }

    pub fn clear(&mut self) {
        self.districts.clear();
        self.municipalities.clear();
        self.parishes.clear();
    }

    // ── Filter state ────────────────────────────────────────────────

    /// Write the selection into `filters` and go back to the first page.
    pub fn apply_to(&self, filters: &mut PropertyFilters) {
        filters.district = self.districts.clone();
        filters.municipality = self.municipalities.clone();
        filters.parish = self.parishes.clone();
        filters.touch();
    }

    /// Rebuild a selection from saved filters, dropping ids that no longer
    /// fit the hierarchy.
    pub fn from_filters(filters: &PropertyFilters) -> Self {
        let mut selection = Self::new();
        let districts: Vec<&String> = filters.district.iter().filter(|id| top_level(id).is_some()).collect();
        selection.districts = dedup(&districts);

        let municipalities: Vec<&String> = filters
            .municipality
            .iter()
            .filter(|id| selection.available_municipalities().iter().any(|m| m.id == id.as_str()))
            .collect();
        selection.municipalities = dedup(&municipalities);

        let parishes: Vec<&String> = filters
            .parish
            .iter()
            .filter(|id| selection.available_parishes().iter().any(|p| p.id == id.as_str()))
            .collect();
        selection.parishes = dedup(&parishes);

        let dropped = filters.district.len() + filters.municipality.len() + filters.parish.len()
            - selection.districts.len()
            - selection.municipalities.len()
            - selection.parishes.len();
        if dropped > 0 {
            tracing::warn!(dropped, "ignoring saved locations outside the hierarchy");
        }
        selection
    }
}

// ── Lookup ──────────────────────────────────────────────────────────

pub fn top_level_locations() -> &'static [Location] {
    TOP_LEVEL
}

/// Resolve an id at any level, with its ancestors.
pub fn find_location(id: &str) -> Option<ResolvedLocation> {
    all_locations().into_iter().find(|r| r.location.id == id)
}

/// Every location, top level first, then municipalities, then parishes.
pub fn all_locations() -> Vec<ResolvedLocation> {
    let mut out = Vec::new();
    for district in TOP_LEVEL {
        out.push(ResolvedLocation {
            location: district,
            district,
            municipality: None,
        });
    }
    for district in TOP_LEVEL {
        for municipality in district.children {
            out.push(ResolvedLocation {
                location: municipality,
                district,
                municipality: Some(municipality),
            });
        }
    }
    for district in TOP_LEVEL {
        for municipality in district.children {
            for parish in municipality.children {
                out.push(ResolvedLocation {
                    location: parish,
                    district,
                    municipality: Some(municipality),
                });
            }
        }
    }
    out
}

/// Locations whose name contains `query`, ignoring case and accents.
/// A blank query matches nothing.
pub fn search_locations(query: &str) -> Vec<ResolvedLocation> {
    let needle = fold(query.trim());
    if needle.is_empty() {
        return Vec::new();
    }
    all_locations()
        .into_iter()
        .filter(|r| fold(r.location.name).contains(&needle))
        .collect()
}

fn top_level(id: &str) -> Option<&'static Location> {
    TOP_LEVEL.iter().find(|l| l.id == id)
}

fn unknown(level: &str, id: &str) -> CoreError {
    CoreError::ValidationError(format!("Unknown or unavailable {level} '{id}'"))
}

fn dedup<S: AsRef<str>>(ids: &[S]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(ids.len());
    for id in ids {
        push_unique(&mut out, id.as_ref());
    }
    out
}

fn push_unique(list: &mut Vec<String>, id: &str) {
    if !list.iter().any(|x| x == id) {
        list.push(id.to_string());
    }
}

/// Lowercase and strip the diacritics used in Portuguese place names.
fn fold(s: &str) -> String {
    s.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            other => other,
        })
        .collect()
}
