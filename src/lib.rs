//! Solenopsis metadata – a registry of metadata types indexed two ways.
//!
//! Metadata types are known both by their XML name (the name used in
//! declarative metadata, e.g. `ApexClass`) and by their directory name (the
//! folder their files live in on disk, e.g. `classes`). An [`org::Org`] keeps
//! every type it knows about reachable through both names, and keeps the
//! members of those types reachable by file name and full name.
//!
//! ## Modules
//! * [`metadata`] – The [`metadata::MetadataType`] and [`metadata::MetadataMember`]
//!   traits an org works against, plus the [`metadata::OwnerId`] a type carries.
//! * [`org`] – The registry itself.
//! * [`component`] – Concrete types and members ([`component::ComponentType`],
//!   [`component::Component`]).
//! * [`settings`] – A catalog of types read through the `config` crate, used
//!   to seed an org.
//!
//! ## Ownership
//! An org never shares a type with anyone. Seeding, copying another org,
//! [`org::Org::add_type`] and [`org::Org::add_member`] all copy the incoming
//! type with the org as its new owner and keep only that copy.
//!
//! ## Quick Start
//! ```
//! use solenopsis_metadata::component::{Component, ComponentType};
//! use solenopsis_metadata::metadata::MetadataType;
//! use solenopsis_metadata::org::Org;
//!
//! let classes = ComponentType::new("ApexClass", "classes").with_suffix("cls");
//! let mut org = Org::new([&classes]).unwrap();
//! org.add_member(Component::new("Foo", "Foo.cls", &classes)).unwrap();
//! let kept = org.get_by_dir_name("classes").unwrap().unwrap();
//! assert_eq!(kept.len(), 1);
//! assert!(org.contains_file_name("Foo.cls"));
//! ```

pub mod component;
pub mod error;
pub mod metadata;
pub mod org;
pub mod param;
pub mod settings;

pub use error::{MetadataError, Result};
