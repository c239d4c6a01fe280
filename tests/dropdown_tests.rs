use carousel_rs::core::ClassList;
use carousel_rs::dropdown::{
    DROPDOWN_DROPPABLE_CLASS, DROPDOWN_DROPPED_CLASS, DROPDOWN_TRIGGER_CLASS, DropdownRegion,
    DropdownSet, DropdownToggle,
};

#[test]
fn clicking_trigger_twice_restores_droppable_classes() {
    let mut set = DropdownSet::new(vec![DropdownRegion::standard()]).expect("dropdown set");
    let original = set.region(0).expect("region").droppable().cloned();

    assert_eq!(set.click_trigger(0).expect("click"), DropdownToggle::Dropped);
    assert!(set.region(0).expect("region").is_dropped());
    assert_eq!(set.click_trigger(0).expect("click"), DropdownToggle::Collapsed);

    assert_eq!(set.region(0).expect("region").droppable().cloned(), original);
}

#[test]
fn triggers_toggle_only_their_own_region() {
    let mut set = DropdownSet::new(vec![DropdownRegion::standard(), DropdownRegion::standard()])
        .expect("dropdown set");

    set.click_trigger(1).expect("click");
    assert!(!set.region(0).expect("first").is_dropped());
    assert!(set.region(1).expect("second").is_dropped());
}

#[test]
fn last_sibling_is_the_droppable_region() {
    let region = DropdownRegion {
        trigger: ClassList::new().with_class(DROPDOWN_TRIGGER_CLASS),
        siblings: vec![
            ClassList::new().with_class(DROPDOWN_DROPPABLE_CLASS),
            ClassList::new().with_class(DROPDOWN_TRIGGER_CLASS),
            ClassList::new().with_class(DROPDOWN_DROPPABLE_CLASS),
        ],
    };
    let mut set = DropdownSet::new(vec![region]).expect("dropdown set");

    set.click_trigger(0).expect("click");
    let region = set.region(0).expect("region");
    assert!(!region.siblings[0].contains(DROPDOWN_DROPPED_CLASS));
    assert!(region.siblings[2].contains(DROPDOWN_DROPPED_CLASS));
}

#[test]
fn clicks_on_non_droppable_regions_are_ignored() {
    let region = DropdownRegion {
        trigger: ClassList::new().with_class(DROPDOWN_TRIGGER_CLASS),
        siblings: vec![ClassList::parse("menu")],
    };
    let empty = DropdownRegion {
        trigger: ClassList::new().with_class(DROPDOWN_TRIGGER_CLASS),
        siblings: Vec::new(),
    };
    let mut set = DropdownSet::new(vec![region, empty]).expect("dropdown set");

    assert_eq!(set.click_trigger(0).expect("click"), DropdownToggle::Ignored);
    assert_eq!(
        set.region(0).expect("region").siblings[0].to_attribute(),
        "menu"
    );
    assert_eq!(set.click_trigger(1).expect("click"), DropdownToggle::Ignored);
}

#[test]
fn set_rejects_unmarked_triggers_and_unknown_indices() {
    let unmarked = DropdownRegion {
        trigger: ClassList::parse("button"),
        siblings: vec![ClassList::new().with_class(DROPDOWN_DROPPABLE_CLASS)],
    };
    assert!(DropdownSet::new(vec![unmarked]).is_err());

    let mut set = DropdownSet::new(Vec::new()).expect("empty set");
    assert!(set.is_empty());
    assert!(set.click_trigger(0).is_err());
}
