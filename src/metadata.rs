// used to mint owner identities that are unique within the process
use std::sync::atomic::{AtomicU64, Ordering};

// used to print out readable forms of an owner
use std::fmt;

// ------------- Owner -------------
// An owner is only ever referred to, never held. Types carry the id of the
// org that adopted them so that a copy can be told apart from its original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OwnerId(u64);

static NEXT_OWNER: AtomicU64 = AtomicU64::new(1);

impl OwnerId {
    pub fn generate() -> Self {
        Self(NEXT_OWNER.fetch_add(1, Ordering::Relaxed))
    }
    pub fn value(&self) -> u64 {
        self.0
    }
}
impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "org#{}", self.0)
    }
}

// ------------- Type -------------
/// A metadata type as seen by an [`crate::org::Org`].
///
/// A type is known under two names: its XML name (the name used in
/// declarative metadata) and its directory name (the folder its members live
/// in on disk). Both are optional at this level because a type may be built
/// before it is fully described; an org refuses to index a type lacking
/// either of them.
pub trait MetadataType: fmt::Debug + Sized {
    type Member: MetadataMember;

    fn xml_name(&self) -> Option<&str>;
    fn directory_name(&self) -> Option<&str>;
    fn owner(&self) -> Option<OwnerId>;

    /// Produces an independent clone attributed to `owner`.
    ///
    /// The clone must share no mutable state with `self`: adding members to
    /// one must never be observable through the other.
    fn copy(&self, owner: OwnerId) -> Self;

    fn get_by_file_name(&self, file_name: &str) -> Option<&Self::Member>;
    fn get_by_full_name(&self, full_name: &str) -> Option<&Self::Member>;

    /// Stores `member` under this type and returns the stored member.
    fn add(&mut self, member: Self::Member) -> &Self::Member;

    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends a human readable tree to `out`, every line starting with `prefix`.
    fn render(&self, out: &mut String, prefix: &str);
}

// ------------- Member -------------
pub trait MetadataMember: fmt::Debug + Sized {
    type Type: MetadataType<Member = Self>;

    /// The type this member belongs to.
    fn member_type(&self) -> &Self::Type;
    fn file_name(&self) -> &str;
    fn full_name(&self) -> &str;
}
