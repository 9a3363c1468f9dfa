//! In-memory index over one community's package listing.

use crate::error::{Error, Result};
use crate::models::PackageListing;
use std::collections::HashMap;
use std::ops::Range;

/// Ordered package listings plus name- and uuid-keyed lookup.
///
/// Insertion order matches the registry's response order. Adding a second
/// listing under an already-known full name grows the ordered sequence but
/// repoints the name entry at the newer listing, so the sequence length and
/// the mapping size can legitimately differ.
#[derive(Debug, Default)]
pub struct PackageList {
    packages: Vec<PackageListing>,
    by_full_name: HashMap<String, usize>,
    by_uuid: HashMap<String, usize>,
}

impl PackageList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a listing and register its lookup keys.
    ///
    /// A listing without a `full_name` (or `uuid4`) still occupies a sequence
    /// position; it is just unreachable through the corresponding map.
    pub fn add(&mut self, listing: PackageListing) {
        let pos = self.packages.len();
        if let Some(full_name) = listing.full_name.clone() {
            self.by_full_name.insert(full_name, pos);
        }
        if let Some(uuid4) = listing.uuid4.clone() {
            self.by_uuid.insert(uuid4, pos);
        }
        self.packages.push(listing);
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Listing at a sequence position.
    pub fn get(&self, pos: usize) -> Result<&PackageListing> {
        self.packages.get(pos).ok_or(Error::IndexOutOfBounds {
            index: pos,
            len: self.packages.len(),
        })
    }

    /// Contiguous sub-sequence of listings.
    pub fn range(&self, range: Range<usize>) -> Result<&[PackageListing]> {
        let len = self.packages.len();
        self.packages
            .get(range.clone())
            .ok_or(Error::IndexOutOfBounds {
                index: range.end,
                len,
            })
    }

    /// Listing for a fully-qualified `{owner}-{name}` key.
    pub fn get_by_name(&self, full_name: &str) -> Result<&PackageListing> {
        self.by_full_name
            .get(full_name)
            .map(|&pos| &self.packages[pos])
            .ok_or_else(|| Error::PackageNotFound {
                full_name: full_name.to_string(),
            })
    }

    /// Listing for a server-assigned `uuid4`, or `None` if unknown.
    pub fn get_by_uuid(&self, uuid4: &str) -> Option<&PackageListing> {
        self.by_uuid.get(uuid4).map(|&pos| &self.packages[pos])
    }

    /// Iterate listings in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, PackageListing> {
        self.packages.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, PackageListing> {
        self.packages.iter_mut()
    }
}

impl<'a> IntoIterator for &'a PackageList {
    type Item = &'a PackageListing;
    type IntoIter = std::slice::Iter<'a, PackageListing>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
