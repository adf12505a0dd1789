#![allow(dead_code, reason = "each test binary uses a different subset")]

use dom::{DOMUpdate, HeadlessDom, HostSettings, LayoutHost, NodeKey, Rect};
use std::rc::Rc;

pub const BODY: NodeKey = NodeKey(1);
pub const HEADER: NodeKey = NodeKey(2);
pub const SIDEBAR: NodeKey = NodeKey(3);
pub const FOOTER: NodeKey = NodeKey(4);

/// A 1100px document: header 0..100, sidebar 150..350, footer 1000..1100.
pub fn page() -> Rc<HeadlessDom> {
    let _ = env_logger::builder().is_test(true).try_init();
    let dom = Rc::new(HeadlessDom::new(HostSettings::default()));
    dom.apply_all([
        DOMUpdate::InsertElement {
            parent: NodeKey::ROOT,
            node: BODY,
            tag: "body".into(),
            pos: 0,
        },
        DOMUpdate::InsertElement {
            parent: BODY,
            node: HEADER,
            tag: "header".into(),
            pos: 0,
        },
        DOMUpdate::InsertElement {
            parent: BODY,
            node: SIDEBAR,
            tag: "aside".into(),
            pos: 1,
        },
        DOMUpdate::InsertElement {
            parent: BODY,
            node: FOOTER,
            tag: "footer".into(),
            pos: 2,
        },
        DOMUpdate::SetAttr {
            node: HEADER,
            name: "id".into(),
            value: "header".into(),
        },
        DOMUpdate::SetAttr {
            node: FOOTER,
            name: "id".into(),
            value: "footer".into(),
        },
        DOMUpdate::SetAttr {
            node: FOOTER,
            name: "class".into(),
            value: "site-footer".into(),
        },
        DOMUpdate::SetLayout {
            node: BODY,
            rect: Rect::new(0.0, 0.0, 1024.0, 1100.0),
        },
        DOMUpdate::SetLayout {
            node: HEADER,
            rect: Rect::new(0.0, 0.0, 1024.0, 100.0),
        },
        DOMUpdate::SetLayout {
            node: SIDEBAR,
            rect: Rect::new(0.0, 150.0, 300.0, 200.0),
        },
        DOMUpdate::SetLayout {
            node: FOOTER,
            rect: Rect::new(0.0, 1000.0, 1024.0, 100.0),
        },
    ])
    .unwrap();
    dom
}

pub fn host(dom: &Rc<HeadlessDom>) -> Rc<dyn LayoutHost> {
    Rc::clone(dom) as Rc<dyn LayoutHost>
}

/// Move a node's document-space box so its top sits at `top`.
pub fn set_layout(dom: &HeadlessDom, node: NodeKey, top: f64, height: f64) {
    dom.apply(DOMUpdate::SetLayout {
        node,
        rect: Rect::new(0.0, top, 100.0, height),
    })
    .unwrap();
}
