mod common;

use common::{SIDEBAR, host, page, set_layout};
use dom::transform::TRANSFORM_PROPERTIES;
use dom::{HeadlessDom, LayoutHost};
use std::cell::RefCell;
use std::rc::Rc;
use stick_to::{
    AccessorFactory, ElementGeometry, LimitAccessor, LimitRole, SimpleElement, StickyElement,
    StickyOptions, UpdateState,
};

/// Hands out fixed accessors and records every call it receives.
struct RecordingFactory {
    calls: RefCell<Vec<(LimitRole, Option<String>)>>,
    primary: LimitAccessor,
    secondary: LimitAccessor,
}

impl RecordingFactory {
    fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            primary: Rc::new(|| 11.0),
            secondary: Rc::new(|| 22.0),
        }
    }
}

impl AccessorFactory for RecordingFactory {
    fn create_primary_limit_accessor(&self, config: Option<&str>) -> LimitAccessor {
        self.calls.borrow_mut().push((LimitRole::Primary, config.map(str::to_owned)));
        Rc::clone(&self.primary)
    }

    fn create_secondary_limit_accessor(&self, config: Option<&str>) -> LimitAccessor {
        self.calls.borrow_mut().push((LimitRole::Secondary, config.map(str::to_owned)));
        Rc::clone(&self.secondary)
    }
}

/// Sidebar at viewport rect {top: 10, bottom: 60}, limits {'10', 'some-limit'}.
fn sticky_fixture() -> (Rc<HeadlessDom>, RecordingFactory, StickyElement) {
    let dom = page();
    set_layout(&dom, SIDEBAR, 10.0, 50.0);
    let factory = RecordingFactory::new();
    let options = StickyOptions {
        element: SimpleElement::new(SIDEBAR, host(&dom)),
        primary_limit: Some("10".into()),
        secondary_limit: Some("some-limit".into()),
    };
    let sticky = StickyElement::new(options, &factory);
    (dom, factory, sticky)
}

fn assert_simple_element_api(element: &impl ElementGeometry, dom: &HeadlessDom) {
    assert_eq!(element.node(), SIDEBAR);

    set_layout(dom, SIDEBAR, 42.0, 19.0);
    assert_eq!(element.top(), 42.0);
    assert_eq!(element.bottom(), 61.0);
}

#[test]
fn simple_element_reports_live_edges() {
    let dom = page();
    let element = SimpleElement::new(SIDEBAR, host(&dom));
    assert_eq!(element.top(), 150.0);
    assert_eq!(element.bottom(), 350.0);

    dom.set_scroll_y(100.0);
    assert_eq!(element.top(), 50.0);
    assert_eq!(element.bottom(), 250.0);

    dom.set_scroll_y(0.0);
    assert_simple_element_api(&element, &dom);
}

#[test]
fn sticky_element_exposes_the_simple_element_api() {
    let (dom, _, sticky) = sticky_fixture();
    assert_eq!(sticky.top(), 10.0);
    assert_eq!(sticky.bottom(), 60.0);
    assert_eq!(sticky.element().node(), SIDEBAR);
    assert_simple_element_api(&sticky, &dom);
}

#[test]
fn sticky_element_starts_with_empty_state() {
    let (_, _, sticky) = sticky_fixture();
    assert_eq!(sticky.state, UpdateState::default());
}

#[test]
fn limit_accessors_come_from_the_factory() {
    let (_, factory, sticky) = sticky_fixture();

    assert!(Rc::ptr_eq(sticky.primary_limit_accessor(), &factory.primary));
    assert!(Rc::ptr_eq(sticky.secondary_limit_accessor(), &factory.secondary));
    assert_eq!(sticky.primary_limit(), 11.0);
    assert_eq!(sticky.secondary_limit(), 22.0);
}

#[test]
fn factory_is_called_once_per_limit_with_raw_values() {
    let (_, factory, _) = sticky_fixture();
    assert_eq!(
        *factory.calls.borrow(),
        vec![
            (LimitRole::Primary, Some("10".to_owned())),
            (LimitRole::Secondary, Some("some-limit".to_owned())),
        ]
    );
}

#[test]
fn absent_limits_are_passed_through_as_none() {
    let dom = page();
    let factory = RecordingFactory::new();
    let options = StickyOptions {
        element: SimpleElement::new(SIDEBAR, host(&dom)),
        primary_limit: None,
        secondary_limit: None,
    };
    let _sticky = StickyElement::new(options, &factory);
    assert_eq!(
        *factory.calls.borrow(),
        vec![(LimitRole::Primary, None), (LimitRole::Secondary, None)]
    );
}

#[test]
fn fresh_element_has_zero_offset_and_no_transform() {
    let (dom, _, sticky) = sticky_fixture();
    assert_eq!(sticky.synthetic_offset(), 0);
    for property in TRANSFORM_PROPERTIES {
        assert_eq!(dom.style(SIDEBAR, property), None, "{property} written at construction");
    }
}

#[test]
fn set_synthetic_offset_writes_every_transform_property() {
    for offset in [0, 10] {
        let (dom, _, mut sticky) = sticky_fixture();
        sticky.set_synthetic_offset(offset);

        let expected = format!("translate(0px,{offset}px)");
        assert_eq!(dom.style(SIDEBAR, "-ms-transform"), Some(expected.clone()));
        assert_eq!(dom.style(SIDEBAR, "-webkit-transform"), Some(expected.clone()));
        assert_eq!(dom.style(SIDEBAR, "transform"), Some(expected));
        assert_eq!(sticky.synthetic_offset(), offset);
    }
}

#[test]
fn pristine_top_without_offset_is_the_real_top() {
    let (dom, _, sticky) = sticky_fixture();
    set_layout(&dom, SIDEBAR, 115.0, 50.0);
    assert_eq!(sticky.pristine_top(), 115.0);
}

#[test]
fn pristine_top_subtracts_the_applied_offset() {
    let (dom, _, mut sticky) = sticky_fixture();
    set_layout(&dom, SIDEBAR, 15.0, 50.0);
    sticky.set_synthetic_offset(100);

    assert_eq!(sticky.top(), 115.0);
    assert_eq!(sticky.pristine_top(), 15.0);
}

#[test]
fn pristine_bottom_subtracts_the_applied_offset() {
    let (dom, _, mut sticky) = sticky_fixture();
    set_layout(&dom, SIDEBAR, 65.0, 50.0);
    assert_eq!(sticky.pristine_bottom(), 115.0);

    sticky.set_synthetic_offset(100);
    assert_eq!(sticky.bottom(), 215.0);
    assert_eq!(sticky.pristine_bottom(), 115.0);
}

#[test]
fn repeated_offsets_replace_rather_than_accumulate() {
    let (dom, _, mut sticky) = sticky_fixture();
    sticky.set_synthetic_offset(30);
    sticky.set_synthetic_offset(30);
    sticky.set_synthetic_offset(-5);
    assert_eq!(sticky.synthetic_offset(), -5);
    assert_eq!(sticky.top(), 5.0);
    assert_eq!(dom.style(SIDEBAR, "transform").as_deref(), Some("translate(0px,-5px)"));
}
