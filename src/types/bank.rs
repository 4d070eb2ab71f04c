//! Struct definitions and implementations for [`CordBank`].

use serde::{Deserialize, Serialize};

use super::entity::Locatable;
use super::location::Coordinate;
use crate::gazetteer;

/// Whether a bank stores donated units for anyone (public) or units
/// for the donor's family (private).
#[derive(Debug, PartialEq, Hash, Eq, Copy, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BankType {
    Public,
    Private,
}

/// A cord blood banking facility.
///
/// Every field except the id, name, type and city is descriptive only
/// and never looked at by the ranker.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct CordBank {
    /// Catalog identifier, e.g. `"13"`. Not required to be unique.
    pub id: String,

    pub name: String,

    #[serde(rename = "type")]
    pub kind: BankType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    pub city: String,

    pub state: String,

    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub website: String,

    #[serde(default)]
    pub services: Vec<String>,

    #[serde(default)]
    pub accreditation: Vec<String>,

    /// Year the bank was established.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub established: Option<u16>,

    /// Explicit position of the bank. When absent, the position is
    /// looked up by city in the built-in
    /// [`gazetteer`](crate::gazetteer::BUILTIN).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinate>,
}

impl CordBank {
    /// Creates a bank with only the fields the locator needs. Contact
    /// details are left empty.
    pub fn new(id: &str, name: &str, kind: BankType, city: &str, state: &str) -> Self {
        CordBank {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            address: None,
            city: city.to_string(),
            state: state.to_string(),
            phone: String::new(),
            email: String::new(),
            website: String::new(),
            services: vec![],
            accreditation: vec![],
            established: None,
            coordinates: None,
        }
    }

    /// Sets explicit coordinates.
    pub fn at(mut self, coordinates: Coordinate) -> Self {
        self.coordinates = Some(coordinates);
        self
    }
}

impl Locatable for CordBank {
    fn id(&self) -> &str {
        &self.id
    }

    fn coordinate(&self) -> Option<Coordinate> {
        self.coordinates
            .and_then(Coordinate::resolved)
            .or_else(|| gazetteer::BUILTIN.lookup(&self.city))
    }
}
