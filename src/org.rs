//! The owner registry.
//!
//! An [`Org`] owns every type it knows about in a single slot store and keeps
//! two sorted lookups into that store: one keyed by XML name and one keyed by
//! directory name. The lookups never own anything, they only name a slot.
//! Both always reference the same set of slots.
//!
//! Types never cross from one org into another by reference. Whatever comes
//! in, whether through seeding, copying another org or [`Org::add_type`], is
//! first copied with this org as its owner and only the copy is kept.

// the name lookups must iterate in key order
use std::collections::BTreeMap;
use std::collections::btree_map::Values;

// the slot store itself is unordered
use core::hash::BuildHasherDefault;
use std::collections::HashMap;
use seahash::SeaHasher;

// used to print out readable forms of an org
use std::fmt;

use tracing::{debug, trace};

use crate::error::{MetadataError, Result};
use crate::metadata::{MetadataMember, MetadataType, OwnerId};
use crate::param::{ensure_parameter, ensure_present};

// ------------- Slot -------------
pub type Slot = u64;

pub type SlotHasher = BuildHasherDefault<SeaHasher>;

const GENESIS: Slot = 0;

#[derive(Debug)]
struct SlotGenerator {
    lower_bound: Slot,
    released: Vec<Slot>,
}

impl SlotGenerator {
    fn new() -> Self {
        Self {
            lower_bound: GENESIS,
            released: Vec::new(),
        }
    }
    fn release(&mut self, slot: Slot) {
        self.released.push(slot);
    }
    fn generate(&mut self) -> Slot {
        self.released.pop().unwrap_or_else(|| {
            self.lower_bound += 1;
            self.lower_bound
        })
    }
}

// A copy that passed validation, together with the names it will be kept under.
struct Adopted<T> {
    xml_name: String,
    directory_name: String,
    kept: T,
}

// ------------- Org -------------
#[derive(Debug)]
pub struct Org<T: MetadataType> {
    owner: OwnerId,
    slots: SlotGenerator,
    // owns the types
    kept: HashMap<Slot, T, SlotHasher>,
    // lends their slots to the name lookups
    xml_index: BTreeMap<String, Slot>,
    dir_index: BTreeMap<String, Slot>,
}

impl<T: MetadataType> Org<T> {
    pub fn empty() -> Self {
        Self {
            owner: OwnerId::generate(),
            slots: SlotGenerator::new(),
            kept: HashMap::default(),
            xml_index: BTreeMap::new(),
            dir_index: BTreeMap::new(),
        }
    }

    /// Seeds an org with copies of `types`.
    ///
    /// Every copy is validated before any of them is kept, so either all of
    /// `types` end up in the org or an error is returned. When two types share
    /// a name the later one wins.
    pub fn new<'a, I>(types: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        let mut org = Self::empty();
        let adopted = types
            .into_iter()
            .map(|t| org.adopt(t))
            .collect::<Result<Vec<_>>>()?;
        for copy in adopted {
            org.keep(copy);
        }
        debug!(owner = %org.owner, types = org.len(), "seeded org");
        Ok(org)
    }

    /// Builds a structurally independent org from the types of `source`.
    pub fn from_org(source: &Org<T>) -> Result<Self> {
        let org = Self::new(source.xml_types())?;
        debug!(source = %source.owner, owner = %org.owner, "copied org");
        Ok(org)
    }

    pub fn owner(&self) -> OwnerId {
        self.owner
    }
    pub fn len(&self) -> usize {
        self.xml_index.len()
    }
    pub fn is_empty(&self) -> bool {
        self.xml_index.is_empty()
    }

    /// Types in ascending XML name order.
    pub fn xml_types(&self) -> Types<'_, T> {
        Types::new(self.xml_index.values(), &self.kept)
    }
    /// Types in ascending directory name order.
    pub fn dir_types(&self) -> Types<'_, T> {
        Types::new(self.dir_index.values(), &self.kept)
    }

    pub fn get_by_xml_name(&self, xml_name: &str) -> Result<Option<&T>> {
        let xml_name = ensure_parameter(xml_name, "XML name cannot be null or empty")?;
        Ok(self.xml_index.get(xml_name).and_then(|slot| self.kept.get(slot)))
    }
    pub fn get_by_dir_name(&self, dir_name: &str) -> Result<Option<&T>> {
        let dir_name = ensure_parameter(dir_name, "Dir name cannot be null or empty")?;
        Ok(self.dir_index.get(dir_name).and_then(|slot| self.kept.get(slot)))
    }

    /// Keeps a copy of `metadata_type` owned by this org and returns the copy.
    ///
    /// Any type already kept under the copy's XML name or directory name is
    /// dropped from the org, together with all of its members.
    pub fn add_type(&mut self, metadata_type: &T) -> Result<&T> {
        let adopted = self.adopt(metadata_type)?;
        let slot = self.keep(adopted);
        self.kept
            .get(&slot)
            .ok_or_else(|| MetadataError::Invariant(format!("slot {slot} was not kept")))
    }

    /// Adds `member` to the type kept under its type's directory name.
    ///
    /// If no such type exists yet, a copy of the member's type is kept first.
    /// That copy displaces any type kept under its XML name, and the
    /// displaced type's members go with it, as in [`Org::add_type`].
    pub fn add_member(&mut self, member: T::Member) -> Result<&T::Member>
    where
        T::Member: MetadataMember<Type = T>,
    {
        let directory_name = ensure_present(
            member.member_type().directory_name(),
            "Directory name cannot be null!",
        )?;
        let slot = match self.dir_index.get(directory_name).copied() {
            Some(slot) => slot,
            None => {
                let adopted = self.adopt(member.member_type())?;
                trace!(
                    owner = %self.owner,
                    xml_name = %adopted.xml_name,
                    directory_name = %adopted.directory_name,
                    "materializing type for member"
                );
                self.keep(adopted)
            }
        };
        match self.kept.get_mut(&slot) {
            Some(kept) => Ok(kept.add(member)),
            None => Err(MetadataError::Invariant(format!(
                "slot {slot} is indexed but not kept"
            ))),
        }
    }

    /// The first member with `file_name`, searching types in XML name order.
    pub fn get_by_file_name(&self, file_name: &str) -> Option<&T::Member> {
        self.xml_types().find_map(|t| t.get_by_file_name(file_name))
    }
    pub fn get_by_full_name(&self, full_name: &str) -> Option<&T::Member> {
        self.xml_types().find_map(|t| t.get_by_full_name(full_name))
    }
    pub fn contains_file_name(&self, file_name: &str) -> bool {
        self.get_by_file_name(file_name).is_some()
    }
    pub fn contains_full_name(&self, full_name: &str) -> bool {
        self.get_by_full_name(full_name).is_some()
    }

    pub fn render(&self, out: &mut String, prefix: &str) {
        out.push_str(&format!("{prefix}Children({}):\n", self.len()));
        let member_prefix = format!("{prefix}    ");
        for kept in self.xml_types() {
            kept.render(out, &member_prefix);
        }
    }

    fn adopt(&self, metadata_type: &T) -> Result<Adopted<T>> {
        let copy = metadata_type.copy(self.owner);
        let directory_name =
            ensure_present(copy.directory_name(), "Directory name cannot be null!")?.to_owned();
        let xml_name = ensure_present(copy.xml_name(), "XML name cannot be null!")?.to_owned();
        Ok(Adopted {
            xml_name,
            directory_name,
            kept: copy,
        })
    }

    // Both lookups are updated together. A type that loses either of its
    // names to the newcomer is evicted entirely, otherwise it would remain
    // reachable through one lookup only.
    fn keep(&mut self, adopted: Adopted<T>) -> Slot {
        let displaced = [
            self.xml_index.get(&adopted.xml_name).copied(),
            self.dir_index.get(&adopted.directory_name).copied(),
        ];
        for slot in displaced.into_iter().flatten() {
            self.evict(slot);
        }
        let slot = self.slots.generate();
        self.xml_index.insert(adopted.xml_name, slot);
        self.dir_index.insert(adopted.directory_name, slot);
        self.kept.insert(slot, adopted.kept);
        slot
    }

    fn evict(&mut self, slot: Slot) {
        let Some(displaced) = self.kept.remove(&slot) else {
            return;
        };
        if let Some(xml_name) = displaced.xml_name() {
            if self.xml_index.get(xml_name) == Some(&slot) {
                self.xml_index.remove(xml_name);
            }
        }
        if let Some(directory_name) = displaced.directory_name() {
            if self.dir_index.get(directory_name) == Some(&slot) {
                self.dir_index.remove(directory_name);
            }
        }
        self.slots.release(slot);
        debug!(
            owner = %self.owner,
            xml_name = displaced.xml_name().unwrap_or_default(),
            directory_name = displaced.directory_name().unwrap_or_default(),
            "replaced type"
        );
    }
}

impl<T: MetadataType> Default for Org<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: MetadataType> fmt::Display for Org<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut rendered = String::new();
        self.render(&mut rendered, "");
        f.write_str(&rendered)
    }
}

// ------------- Types -------------
/// A read-only, ordered view over the types of an [`Org`].
pub struct Types<'a, T> {
    slots: Values<'a, String, Slot>,
    kept: &'a HashMap<Slot, T, SlotHasher>,
}

impl<'a, T> Types<'a, T> {
    fn new(slots: Values<'a, String, Slot>, kept: &'a HashMap<Slot, T, SlotHasher>) -> Self {
        Self { slots, kept }
    }
}

impl<'a, T> Iterator for Types<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let kept = self.kept;
        self.slots.by_ref().find_map(|slot| kept.get(slot))
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> ExactSizeIterator for Types<'_, T> {}
