//! Dataset catalog
//!
//! The set of datasets is closed. Each kind fixes its code length, the fields a
//! record may carry (used to validate `sortBy`), and the query keys it accepts.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Value type of a catalogued field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Free text
    Text,
    /// Integer or floating point
    Number,
    /// Boolean flag
    Flag,
    /// Nested object (nullable)
    Object,
}

/// A field a record of this dataset may carry, addressed by dotted path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub path: &'static str,
    pub ty: FieldType,
}

impl FieldDef {
    const fn new(path: &'static str, ty: FieldType) -> Self {
        Self { path, ty }
    }

    /// Objects have no total order; everything else can be sorted on.
    pub fn is_sortable(&self) -> bool {
        self.ty != FieldType::Object
    }
}

/// How a recognized query key is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Case-insensitive substring match on the field
    Text(&'static str),
    /// Inclusive lower bound on a numeric field
    Min(&'static str),
    /// Inclusive upper bound on a numeric field
    Max(&'static str),
    /// Field present and non-null (or the opposite)
    Presence(&'static str),
}

/// A query key accepted by a dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterDef {
    pub key: &'static str,
    pub kind: FilterKind,
}

impl FilterDef {
    const fn new(key: &'static str, kind: FilterKind) -> Self {
        Self { key, kind }
    }
}

use FieldType::{Flag, Number, Object, Text};

const AIRPORT_FIELDS: &[FieldDef] = &[
    FieldDef::new("iataCode", Text),
    FieldDef::new("icaoCode", Text),
    FieldDef::new("name", Text),
    FieldDef::new("city", Object),
    FieldDef::new("city.name", Text),
    FieldDef::new("city.countryCode", Text),
    FieldDef::new("country", Text),
    FieldDef::new("countryCode", Text),
    FieldDef::new("timeZone", Text),
    FieldDef::new("latitude", Number),
    FieldDef::new("longitude", Number),
    FieldDef::new("elevationFt", Number),
];

const AIRLINE_FIELDS: &[FieldDef] = &[
    FieldDef::new("iataCode", Text),
    FieldDef::new("icaoCode", Text),
    FieldDef::new("name", Text),
    FieldDef::new("callsign", Text),
    FieldDef::new("country", Text),
    FieldDef::new("countryCode", Text),
    FieldDef::new("logoUrl", Text),
    FieldDef::new("isLowCost", Flag),
    FieldDef::new("fleetSize", Number),
];

const AIRCRAFT_FIELDS: &[FieldDef] = &[
    FieldDef::new("iataCode", Text),
    FieldDef::new("icaoCode", Text),
    FieldDef::new("name", Text),
    FieldDef::new("manufacturer", Text),
    FieldDef::new("bodyType", Text),
    FieldDef::new("seats", Number),
    FieldDef::new("rangeKm", Number),
    FieldDef::new("engineCount", Number),
];

const AIRPORT_FILTERS: &[FilterDef] = &[
    FilterDef::new("name", FilterKind::Text("name")),
    FilterDef::new("city", FilterKind::Text("city.name")),
    FilterDef::new("country", FilterKind::Text("country")),
    FilterDef::new("countryCode", FilterKind::Text("countryCode")),
    FilterDef::new("timeZone", FilterKind::Text("timeZone")),
    FilterDef::new("icaoCode", FilterKind::Text("icaoCode")),
    FilterDef::new("minLatitude", FilterKind::Min("latitude")),
    FilterDef::new("maxLatitude", FilterKind::Max("latitude")),
    FilterDef::new("minLongitude", FilterKind::Min("longitude")),
    FilterDef::new("maxLongitude", FilterKind::Max("longitude")),
    FilterDef::new("minElevation", FilterKind::Min("elevationFt")),
    FilterDef::new("maxElevation", FilterKind::Max("elevationFt")),
    FilterDef::new("hasCity", FilterKind::Presence("city")),
    FilterDef::new("hasIcaoCode", FilterKind::Presence("icaoCode")),
    FilterDef::new("hasTimeZone", FilterKind::Presence("timeZone")),
];

const AIRLINE_FILTERS: &[FilterDef] = &[
    FilterDef::new("name", FilterKind::Text("name")),
    FilterDef::new("callsign", FilterKind::Text("callsign")),
    FilterDef::new("country", FilterKind::Text("country")),
    FilterDef::new("countryCode", FilterKind::Text("countryCode")),
    FilterDef::new("icaoCode", FilterKind::Text("icaoCode")),
    FilterDef::new("minFleetSize", FilterKind::Min("fleetSize")),
    FilterDef::new("maxFleetSize", FilterKind::Max("fleetSize")),
    FilterDef::new("hasLogo", FilterKind::Presence("logoUrl")),
    FilterDef::new("hasIcaoCode", FilterKind::Presence("icaoCode")),
    FilterDef::new("hasCallsign", FilterKind::Presence("callsign")),
];

const AIRCRAFT_FILTERS: &[FilterDef] = &[
    FilterDef::new("name", FilterKind::Text("name")),
    FilterDef::new("manufacturer", FilterKind::Text("manufacturer")),
    FilterDef::new("bodyType", FilterKind::Text("bodyType")),
    FilterDef::new("icaoCode", FilterKind::Text("icaoCode")),
    FilterDef::new("minSeats", FilterKind::Min("seats")),
    FilterDef::new("maxSeats", FilterKind::Max("seats")),
    FilterDef::new("minRange", FilterKind::Min("rangeKm")),
    FilterDef::new("maxRange", FilterKind::Max("rangeKm")),
    FilterDef::new("minEngines", FilterKind::Min("engineCount")),
    FilterDef::new("maxEngines", FilterKind::Max("engineCount")),
    FilterDef::new("hasSeats", FilterKind::Presence("seats")),
    FilterDef::new("hasRange", FilterKind::Presence("rangeKm")),
    FilterDef::new("hasIcaoCode", FilterKind::Presence("icaoCode")),
];

/// The reference datasets served by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetKind {
    Airports,
    Airlines,
    Aircraft,
}

impl DatasetKind {
    /// Every dataset, in a fixed order
    pub const ALL: [DatasetKind; 3] = [
        DatasetKind::Airports,
        DatasetKind::Airlines,
        DatasetKind::Aircraft,
    ];

    /// Name used by callers to address the dataset
    pub fn name(&self) -> &'static str {
        match self {
            DatasetKind::Airports => "airports",
            DatasetKind::Airlines => "airlines",
            DatasetKind::Aircraft => "aircraft",
        }
    }

    /// Resolves a caller-supplied name. Surrounding whitespace and case are ignored.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }

    /// Longest code a record of this dataset may carry
    pub fn max_code_length(&self) -> usize {
        match self {
            DatasetKind::Airlines => 2,
            DatasetKind::Airports | DatasetKind::Aircraft => 3,
        }
    }

    /// Field holding the record's short code
    pub fn code_field(&self) -> &'static str {
        "iataCode"
    }

    pub fn fields(&self) -> &'static [FieldDef] {
        match self {
            DatasetKind::Airports => AIRPORT_FIELDS,
            DatasetKind::Airlines => AIRLINE_FIELDS,
            DatasetKind::Aircraft => AIRCRAFT_FIELDS,
        }
    }

    pub fn field(&self, path: &str) -> Option<&'static FieldDef> {
        self.fields().iter().find(|f| f.path == path)
    }

    pub fn filters(&self) -> &'static [FilterDef] {
        match self {
            DatasetKind::Airports => AIRPORT_FILTERS,
            DatasetKind::Airlines => AIRLINE_FILTERS,
            DatasetKind::Aircraft => AIRCRAFT_FILTERS,
        }
    }

    pub fn filter(&self, key: &str) -> Option<&'static FilterDef> {
        self.filters().iter().find(|f| f.key == key)
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
