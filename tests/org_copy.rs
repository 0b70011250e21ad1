use solenopsis_metadata::component::{Component, ComponentType};
use solenopsis_metadata::metadata::{MetadataMember, MetadataType};
use solenopsis_metadata::org::Org;

fn setup() -> (ComponentType, Org<ComponentType>) {
    let classes = ComponentType::new("ApexClass", "classes").with_suffix("cls");
    let objects = ComponentType::new("CustomObject", "objects").with_suffix("object");
    let mut org = Org::new([&classes, &objects]).expect("seed");
    org.add_member(Component::new("Foo", "Foo.cls", &classes)).unwrap();
    (classes, org)
}

#[test]
fn copies_keep_the_same_shape() {
    let (_, source) = setup();
    let copy = Org::from_org(&source).expect("copy");
    assert_ne!(copy.owner(), source.owner());
    assert_eq!(copy.len(), source.len());
    assert_eq!(copy.to_string(), source.to_string());
    for kept in copy.xml_types() {
        assert_eq!(kept.owner(), Some(copy.owner()));
    }
}

#[test]
fn copies_share_no_types() {
    let (_, source) = setup();
    let copy = Org::from_org(&source).unwrap();
    for (copied, original) in copy.xml_types().zip(source.xml_types()) {
        assert!(!std::ptr::eq(copied, original));
    }
}

#[test]
fn mutating_a_copy_leaves_the_source_alone() {
    let (classes, source) = setup();
    let mut copy = Org::from_org(&source).unwrap();
    copy.add_member(Component::new("Bar", "Bar.cls", &classes)).unwrap();
    copy.add_type(&ComponentType::new("Layout", "layouts")).unwrap();

    assert_eq!(copy.get_by_dir_name("classes").unwrap().unwrap().len(), 2);
    assert_eq!(source.get_by_dir_name("classes").unwrap().unwrap().len(), 1);
    assert!(!source.contains_file_name("Bar.cls"));
    assert!(source.get_by_xml_name("Layout").unwrap().is_none());
    assert_eq!(source.len(), 2);
}

#[test]
fn copied_members_follow_their_new_owner() {
    let (_, source) = setup();
    let copy = Org::from_org(&source).unwrap();
    let member = copy.get_by_file_name("Foo.cls").expect("member copied");
    assert_eq!(member.member_type().owner(), Some(copy.owner()));
    let original = source.get_by_file_name("Foo.cls").unwrap();
    assert_eq!(original.member_type().owner(), Some(source.owner()));
}
