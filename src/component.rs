use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::Arc;

// used to print out readable forms of a component
use std::fmt;

use crate::metadata::{MetadataMember, MetadataType, OwnerId};

const UNNAMED: &str = "<unnamed>";

// ------------- ComponentType -------------
// Members are kept sorted by file name, so renderings and lookups are
// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentType {
    xml_name: Option<String>,
    directory_name: Option<String>,
    suffix: Option<String>,
    meta_file: bool,
    owner: Option<OwnerId>,
    members: BTreeMap<String, Component>,
}

impl ComponentType {
    pub fn new(xml_name: impl Into<String>, directory_name: impl Into<String>) -> Self {
        Self {
            xml_name: Some(xml_name.into()),
            directory_name: Some(directory_name.into()),
            ..Self::default()
        }
    }
    pub fn with_xml_name(mut self, xml_name: impl Into<String>) -> Self {
        self.xml_name = Some(xml_name.into());
        self
    }
    pub fn with_directory_name(mut self, directory_name: impl Into<String>) -> Self {
        self.directory_name = Some(directory_name.into());
        self
    }
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }
    pub fn with_meta_file(mut self, meta_file: bool) -> Self {
        self.meta_file = meta_file;
        self
    }
    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }
    pub fn has_meta_file(&self) -> bool {
        self.meta_file
    }
    pub fn members(&self) -> impl ExactSizeIterator<Item = &Component> {
        self.members.values()
    }
    // The description of this type without any of its members. Members point
    // back at one of these instead of at the type holding them.
    fn snapshot(&self) -> Self {
        Self {
            xml_name: self.xml_name.clone(),
            directory_name: self.directory_name.clone(),
            suffix: self.suffix.clone(),
            meta_file: self.meta_file,
            owner: self.owner,
            members: BTreeMap::new(),
        }
    }
}

impl MetadataType for ComponentType {
    type Member = Component;

    fn xml_name(&self) -> Option<&str> {
        self.xml_name.as_deref()
    }
    fn directory_name(&self) -> Option<&str> {
        self.directory_name.as_deref()
    }
    fn owner(&self) -> Option<OwnerId> {
        self.owner
    }
    fn copy(&self, owner: OwnerId) -> Self {
        let mut copy = self.snapshot();
        copy.owner = Some(owner);
        let parent = Arc::new(copy.snapshot());
        copy.members = self
            .members
            .iter()
            .map(|(file_name, member)| (file_name.clone(), member.adopted_by(&parent)))
            .collect();
        copy
    }
    fn get_by_file_name(&self, file_name: &str) -> Option<&Component> {
        self.members.get(file_name)
    }
    fn get_by_full_name(&self, full_name: &str) -> Option<&Component> {
        self.members.values().find(|member| member.full_name == full_name)
    }
    // A member with the same file name is replaced.
    fn add(&mut self, member: Component) -> &Component {
        let adopted = Component {
            component_type: Arc::new(self.snapshot()),
            ..member
        };
        match self.members.entry(adopted.file_name.clone()) {
            Entry::Occupied(mut entry) => {
                entry.insert(adopted);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(adopted),
        }
    }
    fn len(&self) -> usize {
        self.members.len()
    }
    fn render(&self, out: &mut String, prefix: &str) {
        out.push_str(&format!(
            "{prefix}{} ({}) Members({}):\n",
            self.xml_name.as_deref().unwrap_or(UNNAMED),
            self.directory_name.as_deref().unwrap_or(UNNAMED),
            self.members.len()
        ));
        for member in self.members.values() {
            out.push_str(&format!("{prefix}    {member}\n"));
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut rendered = String::new();
        self.render(&mut rendered, "");
        f.write_str(&rendered)
    }
}

// ------------- Component -------------
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    full_name: String,
    file_name: String,
    component_type: Arc<ComponentType>,
}

impl Component {
    pub fn new(
        full_name: impl Into<String>,
        file_name: impl Into<String>,
        component_type: &ComponentType,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            file_name: file_name.into(),
            component_type: Arc::new(component_type.snapshot()),
        }
    }
    fn adopted_by(&self, parent: &Arc<ComponentType>) -> Self {
        Self {
            full_name: self.full_name.clone(),
            file_name: self.file_name.clone(),
            component_type: Arc::clone(parent),
        }
    }
}

impl MetadataMember for Component {
    type Type = ComponentType;

    fn member_type(&self) -> &ComponentType {
        &self.component_type
    }
    fn file_name(&self) -> &str {
        &self.file_name
    }
    fn full_name(&self) -> &str {
        &self.full_name
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} [{}]", self.full_name, self.file_name)
    }
}
