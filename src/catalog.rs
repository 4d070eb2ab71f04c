//! The bank catalog and the filters applied before ranking.
//!
//! A [`Catalog`] is immutable once built. It is either the built-in
//! fixture list or loaded from JSON, and is handed to the ranker by
//! reference.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bank::{BankType, CordBank};
use crate::error::CatalogError;
use crate::gazetteer::Gazetteer;
use crate::location::Coordinate;

const DIRECTORY_JSON: &str = include_str!("../data/directory.json");

/// A fixed collection of banks.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    banks: Vec<CordBank>,
}

impl Catalog {
    /// Wraps a list of banks. Order is kept and duplicates are allowed.
    pub fn new(banks: Vec<CordBank>) -> Self {
        Catalog { banks }
    }

    /// Parses a JSON array of banks.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        info!("loaded catalog with {} banks", catalog.len());
        Ok(catalog)
    }

    /// Reads a JSON array of banks from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        debug!("reading catalog from {}", path.display());
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// The five banks listed on the locator page.
    pub fn builtin() -> Self {
        let bank = |id: &str,
                    name: &str,
                    kind: BankType,
                    address: &str,
                    city: &str,
                    state: &str,
                    phone: &str,
                    email: &str,
                    website: &str,
                    at: Coordinate| CordBank {
            address: Some(address.to_string()),
            phone: phone.to_string(),
            email: email.to_string(),
            website: website.to_string(),
            ..CordBank::new(id, name, kind, city, state).at(at)
        };

        Catalog::new(vec![
            bank(
                "1",
                "LifeCell International",
                BankType::Private,
                "123 Medical Center Drive, Anna Nagar",
                "Chennai",
                "Tamil Nadu",
                "+91-44-4567-8900",
                "info@lifecell.in",
                "https://lifecell.in",
                Coordinate::new(13.0827, 80.2707),
            ),
            bank(
                "2",
                "Cryoviva Biotech",
                BankType::Private,
                "456 Cyber City, Sector 24",
                "Gurgaon",
                "Haryana",
                "+91-124-456-7890",
                "contact@cryoviva.com",
                "https://cryoviva.com",
                Coordinate::new(28.4595, 77.0266),
            ),
            bank(
                "3",
                "Stemcyte India",
                BankType::Public,
                "789 Medical Plaza, Bandra East",
                "Mumbai",
                "Maharashtra",
                "+91-22-2345-6789",
                "info@stemcyte.in",
                "https://stemcyte.in",
                Coordinate::new(19.0760, 72.8777),
            ),
            bank(
                "4",
                "AIIMS Cord Blood Bank",
                BankType::Public,
                "All India Institute of Medical Sciences, Ansari Nagar",
                "Delhi",
                "Delhi",
                "+91-11-2345-6789",
                "cordblood@aiims.edu",
                "https://aiims.edu",
                Coordinate::new(28.6139, 77.2090),
            ),
            bank(
                "5",
                "Babycell",
                BankType::Private,
                "321 Bio-Tech Park, HITEC City",
                "Hyderabad",
                "Telangana",
                "+91-40-4567-8901",
                "info@babycell.in",
                "https://babycell.in",
                Coordinate::new(17.3850, 78.4867),
            ),
        ])
    }

    /// The bank directory: eighteen banks with their services and
    /// accreditations. Coordinates are not listed, so only banks in a
    /// city known to the built-in gazetteer can be located.
    pub fn directory() -> Result<Self, CatalogError> {
        Self::from_json(DIRECTORY_JSON)
    }

    /// Returns a copy where banks without explicit coordinates get the
    /// position of their city from `gazetteer`, when it knows the city.
    pub fn resolve_with(&self, gazetteer: &Gazetteer) -> Self {
        let banks = self
            .banks
            .iter()
            .map(|bank| {
                let mut bank = bank.clone();
                if bank.coordinates.and_then(Coordinate::resolved).is_none() {
                    if let Some(at) = gazetteer.lookup(&bank.city) {
                        bank.coordinates = Some(at);
                    }
                }
                bank
            })
            .collect();
        Catalog { banks }
    }

    pub fn banks(&self) -> &[CordBank] {
        &self.banks
    }

    pub fn len(&self) -> usize {
        self.banks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.banks.is_empty()
    }

    /// Gets the first bank with the given id.
    pub fn get(&self, id: &str) -> Option<&CordBank> {
        self.banks.iter().find(|bank| bank.id == id)
    }

    /// Distinct cities, sorted.
    pub fn cities(&self) -> Vec<&str> {
        self.banks
            .iter()
            .map(|bank| bank.city.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Banks matching `filter`, in catalog order.
    pub fn filter(&self, filter: &BankFilter) -> Vec<&CordBank> {
        let matched: Vec<&CordBank> = self.banks.iter().filter(|b| filter.matches(b)).collect();
        debug!("filter {:?} matched {} banks", filter, matched.len());
        matched
    }
}

/// Bank type selector. `All` disables the type check.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    #[default]
    All,
    Public,
    Private,
}

impl TypeFilter {
    fn accepts(&self, kind: BankType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Public => kind == BankType::Public,
            TypeFilter::Private => kind == BankType::Private,
        }
    }
}

/// Search criteria. The default filter matches every bank.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BankFilter {
    /// Case-insensitive substring of the name, city or state.
    pub query: String,

    pub kind: TypeFilter,

    /// Exact city match.
    pub city: Option<String>,
}

impl BankFilter {
    /// Filter by free text only.
    pub fn query(query: &str) -> Self {
        BankFilter {
            query: query.to_string(),
            ..Default::default()
        }
    }

    pub fn matches(&self, bank: &CordBank) -> bool {
        let query = self.query.to_lowercase();
        let matches_query = [&bank.name, &bank.city, &bank.state]
            .iter()
            .any(|field| field.to_lowercase().contains(&query));
        let matches_city = self.city.iter().all(|city| *city == bank.city);
        matches_query && self.kind.accepts(bank.kind) && matches_city
    }
}
